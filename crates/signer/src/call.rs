//! Calls and their flattened `__execute__` encoding.
use multicall_common::{encode_text_as_integer, CallParam, ContractAddress, EntryPoint};
use multicall_crypto::Felt;
use primitive_types::U256;

use crate::error::EncodingError;

/// A single contract invocation within a multicall.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Call {
    target: ContractAddress,
    selector: EntryPoint,
    calldata: Vec<CallParam>,
}

impl Call {
    pub fn new(target: ContractAddress, selector: EntryPoint, calldata: Vec<CallParam>) -> Self {
        Self {
            target,
            selector,
            calldata,
        }
    }

    /// Creates a call whose selector is derived from `method_name`.
    pub fn to_method(target: ContractAddress, method_name: &str, calldata: Vec<CallParam>) -> Self {
        Self::new(target, EntryPoint::hashed(method_name.as_bytes()), calldata)
    }

    pub fn target(&self) -> ContractAddress {
        self.target
    }

    pub fn selector(&self) -> EntryPoint {
        self.selector
    }

    pub fn calldata(&self) -> &[CallParam] {
        &self.calldata
    }
}

/// A call as it appears in user input, before any field element validation.
///
/// Arguments are `0x`-prefixed hex, decimal, or a short string in single quotes
/// (`'hello'`) which is packed into a single field element.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCall {
    pub to: String,
    pub method: String,
    #[serde(default)]
    pub calldata: Vec<String>,
}

impl TryFrom<RawCall> for Call {
    type Error = EncodingError;

    fn try_from(raw: RawCall) -> Result<Self, Self::Error> {
        let target = parse_hex_felt("to", &raw.to)?;
        if raw.method.is_empty() {
            return Err(EncodingError::Malformed("method name is empty".to_owned()));
        }
        let calldata = raw
            .calldata
            .iter()
            .enumerate()
            .map(|(i, param)| parse_felt(&format!("calldata[{i}]"), param).map(CallParam))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Call::to_method(
            ContractAddress(target),
            &raw.method,
            calldata,
        ))
    }
}

/// Converts a batch of raw calls, naming the offending call on failure.
pub fn parse_calls(raw: Vec<RawCall>) -> Result<Vec<Call>, EncodingError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, raw)| {
            Call::try_from(raw).map_err(|e| match e {
                EncodingError::Overflow { field } => EncodingError::Overflow {
                    field: format!("calls[{i}].{field}"),
                },
                EncodingError::InvalidHex { field, source } => EncodingError::InvalidHex {
                    field: format!("calls[{i}].{field}"),
                    source,
                },
                EncodingError::Malformed(msg) => EncodingError::Malformed(format!("calls[{i}]: {msg}")),
                other => other,
            })
        })
        .collect()
}

/// Parses a hex value with an optional `0x` prefix, naming `field` on failure.
pub fn parse_hex_felt(field: &str, param: &str) -> Result<Felt, EncodingError> {
    if param.is_empty() || param == "0x" {
        return Err(EncodingError::Malformed(format!("{field} is empty")));
    }
    Felt::from_hex_str(param).map_err(|e| EncodingError::from_hex(field, e))
}

/// Parses a single hex, decimal or short string value, naming `field` on failure.
pub fn parse_felt(field: &str, param: &str) -> Result<Felt, EncodingError> {
    if param.is_empty() || param.starts_with("0x") {
        return parse_hex_felt(field, param);
    }

    if let Some(text) = param
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        return Ok(encode_text_as_integer(text)?);
    }

    if !param.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodingError::Malformed(format!(
            "{field} is neither hex, decimal nor a short string"
        )));
    }

    // Only digits remain, so the sole failure is exceeding 256 bits.
    let value = U256::from_dec_str(param).map_err(|_| EncodingError::Overflow {
        field: field.to_owned(),
    })?;
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    Felt::from_be_bytes(bytes).map_err(|_| EncodingError::Overflow {
        field: field.to_owned(),
    })
}

/// Describes where one call's arguments live in the shared calldata.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CallArrayEntry {
    pub to: ContractAddress,
    pub selector: EntryPoint,
    pub data_offset: usize,
    pub data_len: usize,
}

impl CallArrayEntry {
    /// The entry as the four consecutive field elements the account expects.
    pub fn to_felts(&self) -> [CallParam; 4] {
        [
            CallParam(self.to.0),
            CallParam(self.selector.0),
            CallParam(Felt::from(self.data_offset)),
            CallParam(Felt::from(self.data_len)),
        ]
    }
}

/// A batch of calls split into the call array and the concatenated calldata.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FlattenedCalls {
    pub call_array: Vec<CallArrayEntry>,
    pub calldata: Vec<CallParam>,
}

/// Flattens the calls, preserving their order.
pub fn flatten(calls: &[Call]) -> FlattenedCalls {
    let mut flattened = FlattenedCalls {
        call_array: Vec::with_capacity(calls.len()),
        calldata: Vec::with_capacity(calls.iter().map(|c| c.calldata.len()).sum()),
    };

    for call in calls {
        flattened.call_array.push(CallArrayEntry {
            to: call.target,
            selector: call.selector,
            data_offset: flattened.calldata.len(),
            data_len: call.calldata.len(),
        });
        flattened.calldata.extend_from_slice(&call.calldata);
    }

    tracing::trace!(
        calls = flattened.call_array.len(),
        calldata = flattened.calldata.len(),
        "Flattened calls"
    );

    flattened
}

impl FlattenedCalls {
    /// Recovers the individual calls by slicing the calldata with each entry's offset and length.
    pub fn split(&self) -> Result<Vec<Call>, EncodingError> {
        self.call_array
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let end = entry.data_offset.checked_add(entry.data_len).ok_or_else(|| {
                    EncodingError::Malformed(format!("call array entry {i} overflows"))
                })?;
                let calldata = self.calldata.get(entry.data_offset..end).ok_or_else(|| {
                    EncodingError::Malformed(format!(
                        "call array entry {i} points outside of the calldata"
                    ))
                })?;
                Ok(Call::new(entry.to, entry.selector, calldata.to_vec()))
            })
            .collect()
    }

    /// The argument vector of the account's `__execute__` entry point:
    /// `[len(call_array), entries.., len(calldata), calldata.., nonce]`.
    pub fn into_execute_calldata(self, nonce: multicall_common::TransactionNonce) -> Vec<CallParam> {
        let mut out = Vec::with_capacity(3 + 4 * self.call_array.len() + self.calldata.len());
        out.push(CallParam(Felt::from(self.call_array.len())));
        out.extend(self.call_array.iter().flat_map(CallArrayEntry::to_felts));
        out.push(CallParam(Felt::from(self.calldata.len())));
        out.extend(self.calldata);
        out.push(CallParam(nonce.0));
        out
    }

    /// Parses `__execute__` arguments back into the flattened calls and nonce.
    pub fn from_execute_calldata(
        params: &[CallParam],
    ) -> Result<(Self, multicall_common::TransactionNonce), EncodingError> {
        let mut cursor = params.iter();
        let mut next = |what: &str| {
            cursor
                .next()
                .map(|p| p.0)
                .ok_or_else(|| EncodingError::Malformed(format!("missing {what}")))
        };

        let array_len = felt_to_usize(next("call array length")?, "call array length")?;
        let mut call_array = Vec::new();
        for i in 0..array_len {
            let to = ContractAddress(next("call array entry")?);
            let selector = EntryPoint(next("call array entry")?);
            let data_offset = felt_to_usize(next("call array entry")?, &format!("call_array[{i}].data_offset"))?;
            let data_len = felt_to_usize(next("call array entry")?, &format!("call_array[{i}].data_len"))?;
            call_array.push(CallArrayEntry {
                to,
                selector,
                data_offset,
                data_len,
            });
        }

        let calldata_len = felt_to_usize(next("calldata length")?, "calldata length")?;
        let calldata = (0..calldata_len)
            .map(|_| next("calldata").map(CallParam))
            .collect::<Result<Vec<_>, _>>()?;
        let nonce = multicall_common::TransactionNonce(next("nonce")?);

        if cursor.next().is_some() {
            return Err(EncodingError::Malformed("trailing execute arguments".to_owned()));
        }

        Ok((
            FlattenedCalls {
                call_array,
                calldata,
            },
            nonce,
        ))
    }
}

fn felt_to_usize(value: Felt, field: &str) -> Result<usize, EncodingError> {
    value
        .to_u128()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| EncodingError::Malformed(format!("{field} is not a valid length")))
}
