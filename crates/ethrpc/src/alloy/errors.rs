use {
    alloy::{
        contract::Error as ContractError,
        sol_types::{SolInterface, decode_revert_reason},
        transports::RpcError,
    },
    std::fmt::Debug,
};

pub trait ContractErrorExt {
    /// Returns whether a given error is a node error, that is a transport
    /// error without any revert data.
    fn is_node_error(&self) -> bool;
}

impl ContractErrorExt for ContractError {
    fn is_node_error(&self) -> bool {
        // Reverts surface as transport errors carrying revert data, so only
        // transport errors without any revert data are caused by the node.
        match self {
            ContractError::TransportError(RpcError::ErrorResp(err)) => {
                let no_revert_data = err.as_revert_data().is_none();
                tracing::debug!(?err, %no_revert_data, "transport rpc error");
                no_revert_data
            }
            ContractError::TransportError(_) => true,
            _ => false,
        }
    }
}

/// Renders a failed contract call the way it should be shown to a user.
///
/// Revert data is decoded against the custom errors of the interface `E`
/// first, shown as the error name with its fields, then as a plain
/// `Error(string)` revert reason. If neither works the error message of the
/// node is returned unchanged.
pub fn describe<E: SolInterface + Debug>(err: &ContractError) -> String {
    let Some(data) = err.as_revert_data() else {
        return err.to_string();
    };
    if let Ok(decoded) = E::abi_decode(&data) {
        let decoded = format!("{decoded:?}");
        return format!("execution reverted: {}", unwrap_variant(&decoded));
    }
    match decode_revert_reason(&data) {
        Some(reason) => reason,
        None => err.to_string(),
    }
}

/// `Variant(Inner { .. })` becomes `Inner { .. }`. The generated error enums
/// wrap every error struct in a variant of the same name.
fn unwrap_variant(debug: &str) -> &str {
    debug
        .split_once('(')
        .and_then(|(_, inner)| inner.strip_suffix(')'))
        .unwrap_or(debug)
}
