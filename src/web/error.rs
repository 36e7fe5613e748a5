use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("The connection to the other server failed.")]
    ConnectionFailed,
    #[error("The other server answered with an unexpected status: {0}.")]
    UnexpectedStatus(u16),
    #[error("The response of the other server can't be read.")]
    CantReadResponse,
}
