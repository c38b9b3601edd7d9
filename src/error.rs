use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to read runtime environment")]
    Environment(#[source] std::io::Error),

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
