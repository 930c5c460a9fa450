use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScannerError {
    /// The decoder library refused to initialize (no camera, permission denied, ...).
    #[error("Failed to initialize barcode decoder: {0}")]
    Init(String),
    /// The channel to the decoder closed before it reported a result.
    #[error("Barcode decoder channel closed: {0}")]
    Channel(String),
    /// A decoding session is already starting or running on this page.
    #[error("A barcode scanning session is already active")]
    AlreadyActive,
    /// A detection or stop was requested without a running session.
    #[error("No barcode scanning session is active")]
    NotActive,
}
