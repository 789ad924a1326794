use multicall_common::{ContractAddress, TextEncodingError};
use multicall_crypto::signature::SignatureError;
use multicall_crypto::HexParseError;

/// Raw call input could not be turned into field elements.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("{field} is not below the field modulus")]
    Overflow { field: String },
    #[error("{field} is not a valid hex value")]
    InvalidHex {
        field: String,
        #[source]
        source: HexParseError,
    },
    #[error("Malformed input: {0}")]
    Malformed(String),
    #[error(transparent)]
    Text(#[from] TextEncodingError),
}

impl EncodingError {
    pub(crate) fn from_hex(field: impl Into<String>, source: HexParseError) -> Self {
        match source {
            HexParseError::Overflow => Self::Overflow {
                field: field.into(),
            },
            source => Self::InvalidHex {
                field: field.into(),
                source,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to query the nonce of account {account}")]
pub struct NonceResolutionError {
    pub account: ContractAddress,
    #[source]
    pub source: anyhow::Error,
}

#[derive(Debug, thiserror::Error)]
#[error("Signing failed")]
pub struct SigningError(#[from] pub SignatureError);

#[derive(Debug, thiserror::Error)]
#[error("Account {account} failed to execute the request")]
pub struct SubmissionError {
    pub account: ContractAddress,
    #[source]
    pub source: anyhow::Error,
}

/// Any failure while authorizing or submitting a multicall.
///
/// Every variant aborts before the account is asked to execute anything, except
/// [AuthorizeError::Submission] which is the execution failing itself.
#[derive(Debug, thiserror::Error)]
pub enum AuthorizeError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Nonce(#[from] NonceResolutionError),
    #[error(transparent)]
    Signing(#[from] SigningError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
