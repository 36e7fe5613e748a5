use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("The job roles file can't be read.")]
    CantReadFile,
    #[error("The job roles file doesn't contain a valid catalog.")]
    InvalidContent,
}
