use thiserror::Error;

/// Structural failures while identifying the board.
///
/// Unrecognised field codes never end up here, they decode to `"Unknown"`.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Revision source could not be read: {0}")]
    SourceUnavailable(#[source] std::io::Error),

    #[error("No known Raspberry Pi hardware found in cpuinfo")]
    UnrecognizedHardware,

    #[error("Hardware recognised but no revision value found")]
    EmptyRevisionToken,

    #[error("Device tree model \"{0}\" is not a known Raspberry Pi")]
    UnmatchedModelString(String),
}
