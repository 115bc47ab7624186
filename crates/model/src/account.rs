//! Cross-chain account identifiers are 32 bytes wide. EVM addresses are
//! embedded as the low-order 20 bytes.

use alloy::primitives::{Address, B256};

/// Converts a `0x` prefixed hex address into the 32 byte account format by
/// left padding the hex digits with zeros to 64 characters.
///
/// The input is not validated. Whatever follows the first two characters is
/// kept as the low-order digits.
pub fn to_bytes32(address: &str) -> String {
    let digits = address.get(2..).unwrap_or_default();
    format!("0x{digits:0>64}")
}

/// Typed version of [`to_bytes32`].
pub fn address_to_bytes32(address: Address) -> B256 {
    address.into_word()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAccountError {
    #[error("account {0:?} is not valid hex")]
    Hex(String),
    #[error("account {0:?} is neither a 20 byte address nor a 32 byte identifier")]
    Length(String),
}

/// Parses an account that is given either as a 32 byte identifier or as a 20
/// byte address, in which case it gets converted.
pub fn parse_account32(value: &str) -> Result<B256, ParseAccountError> {
    let value = value.trim();
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseAccountError::Hex(value.to_string()));
    }
    match digits.len() {
        40 => digits
            .parse::<Address>()
            .map(address_to_bytes32)
            .map_err(|_| ParseAccountError::Hex(value.to_string())),
        64 => digits
            .parse::<B256>()
            .map_err(|_| ParseAccountError::Hex(value.to_string())),
        _ => Err(ParseAccountError::Length(value.to_string())),
    }
}
