use thiserror;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("provider is not running")]
    NotRunning,

    #[error("unknown digest algorithm {0}")]
    UnknownAlgorithm(String),

    #[error("keccak backend {0} is not supported on this cpu")]
    UnsupportedBackend(&'static str),

    #[error("context already finalized")]
    AlreadyFinalized,

    #[error("{0} is not an extendable-output function")]
    NotXof(&'static str),

    #[error("output buffer too small: need {needed} bytes, got {got}")]
    OutputTooSmall { needed: usize, got: usize },

    #[error("xof length cannot change after input has been absorbed")]
    XofLenAfterAbsorb,

    #[error("parameter {0} is not supported by {1}")]
    UnsupportedParameter(String, &'static str),

    #[error("failed to get parameter {0}")]
    InvalidParameter(String),

    #[error("kmac: invalid key length {0}")]
    InvalidKeyLength(usize),

    #[error("kmac: invalid customization length {0}")]
    InvalidCustomLength(usize),

    #[error("kmac: invalid output length {0}")]
    InvalidOutputLength(usize),

    #[error("{0} is not a kmac digest")]
    NotKmac(&'static str),
}
pub type Result<T> = core::result::Result<T, Error>;
