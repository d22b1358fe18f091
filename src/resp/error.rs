use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unknown type byte '{0}'")]
    UnknownType(u8),
    #[error("invalid integer in protocol line")]
    BadInteger,
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("bulk length {0} exceeds the safety bound")]
    TooLarge(i64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
