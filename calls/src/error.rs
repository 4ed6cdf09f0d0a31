use thiserror::Error;

#[derive(Debug, Error)]
pub enum CallError {
    #[error("call payload too short: {0} bytes")]
    Truncated(usize),

    #[error("unknown interface tag 0x{0}")]
    UnknownInterface(String),

    #[error("malformed call payload: {0}")]
    Malformed(String),

    #[error("failed to encode call: {0}")]
    Encode(String),
}
