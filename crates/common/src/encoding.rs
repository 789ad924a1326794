//! Conversions between host values and field elements, as used for contract
//! call arguments.
use multicall_crypto::Felt;
use primitive_types::U256;

/// At most 31 bytes fit into a [Felt] without risking overflow.
pub const MAX_TEXT_LEN: usize = 31;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextEncodingError {
    #[error("Text is {0} characters long, at most {MAX_TEXT_LEN} fit into a field element")]
    TooLong(usize),
    #[error("Text contains non-ASCII characters")]
    NonAscii,
    #[error("Field element does not hold ASCII text")]
    NotText,
}

/// Packs an ASCII string into a [Felt] as a big-endian integer.
///
/// `"abc"` becomes `0x616263`.
pub fn encode_text_as_integer(text: &str) -> Result<Felt, TextEncodingError> {
    if !text.is_ascii() {
        return Err(TextEncodingError::NonAscii);
    }
    if text.len() > MAX_TEXT_LEN {
        return Err(TextEncodingError::TooLong(text.len()));
    }
    Felt::from_be_slice(text.as_bytes()).map_err(|_| TextEncodingError::TooLong(text.len()))
}

/// Inverse of [encode_text_as_integer]. Leading zero bytes are not part of the text.
pub fn decode_integer_as_text(value: Felt) -> Result<String, TextEncodingError> {
    let bytes = value.as_be_bytes();
    if bytes[0] != 0 {
        return Err(TextEncodingError::NotText);
    }
    let text: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
    if !text.is_ascii() {
        return Err(TextEncodingError::NotText);
    }
    String::from_utf8(text).map_err(|_| TextEncodingError::NotText)
}

/// A 256-bit unsigned integer split into two 128-bit limbs, the way contracts
/// take `Uint256` arguments.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Uint256 {
    pub low: Felt,
    pub high: Felt,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Uint256 limb exceeds 128 bits")]
pub struct LimbOverflow;

impl Uint256 {
    pub fn from_u256(value: U256) -> Self {
        let low = value.low_u128();
        let high = (value >> 128).low_u128();
        Self {
            low: Felt::from_u128(low),
            high: Felt::from_u128(high),
        }
    }

    pub fn to_u256(&self) -> Result<U256, LimbOverflow> {
        let low = self.low.to_u128().ok_or(LimbOverflow)?;
        let high = self.high.to_u128().ok_or(LimbOverflow)?;
        Ok((U256::from(high) << 128) | U256::from(low))
    }

    /// The two limbs in calldata order, low first.
    pub fn to_felts(&self) -> [Felt; 2] {
        [self.low, self.high]
    }
}

impl From<u128> for Uint256 {
    fn from(value: u128) -> Self {
        Self {
            low: Felt::from_u128(value),
            high: Felt::ZERO,
        }
    }
}
