use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Instance loading error: {0}")]
    InstanceLoad(#[from] crate::instance_loader::InstanceLoaderError),
    #[error("Query error: {0}")]
    Search(#[from] crate::path::SearchError),
    #[error("Invalid data directory: {0}")]
    InvalidPath(String),
}
