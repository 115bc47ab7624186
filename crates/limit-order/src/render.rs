//! Text shown to the user for reads and transaction updates.

use {
    crate::{forms::Preparation, submitter::TxStatus, traits::Fees},
    alloy::primitives::{Address, TxHash, U256},
    model::{Order, Party, state_label},
    url::Url,
};

/// Link to a transaction on the block explorer of the connected chain.
pub fn tx_link(explorer: &Url, hash: TxHash) -> String {
    format!("{}/tx/{hash}", explorer.as_str().trim_end_matches('/'))
}

pub fn pending(hash: TxHash, explorer: Option<&Url>) -> String {
    match explorer {
        Some(explorer) => format!("Processing transaction... {}", tx_link(explorer, hash)),
        None => format!("Processing transaction... {hash}"),
    }
}

pub fn error(message: impl std::fmt::Display) -> String {
    format!("Error: {message}")
}

pub fn tx_status(status: &TxStatus, explorer: Option<&Url>) -> String {
    match status {
        TxStatus::Pending { hash } => pending(*hash, explorer),
        TxStatus::Succeeded { .. } => "Success!".to_string(),
        TxStatus::Failed { message, .. } => error(message),
    }
}

pub fn disabled(action: &str, missing: &[&str]) -> String {
    format!("{action}: disabled (missing: {})", missing.join(", "))
}

/// Line for a form that could not be turned into a call. `None` for ready
/// forms.
pub fn preparation(action: &str, preparation: &Preparation) -> Option<String> {
    match preparation {
        Preparation::Disabled { missing } => Some(disabled(action, missing)),
        Preparation::Invalid(message) => Some(error(message)),
        Preparation::Ready(_) => None,
    }
}

/// Order lookup. `None` renders the state of an order that was not read.
pub fn order(order: Option<&Order>) -> Vec<String> {
    let Some(order) = order else {
        return vec![format!("State: {}", state_label(None))];
    };
    let mut lines = vec![format!("State: {}", order.state_label())];
    if order.has_details() {
        lines.extend(party("Maker", &order.maker));
        lines.extend(party("Taker", &order.taker));
    }
    lines
}

fn party(role: &str, party: &Party) -> [String; 3] {
    [
        format!("{role} account: {}", party.account),
        format!("{role} token: {}", party.token),
        format!("{role} amount: {}", party.amount),
    ]
}

pub fn balance(token: Address, amount: U256) -> String {
    format!("Balance of {token}: {amount}")
}

pub fn allowance(token: Address, spender: Address, amount: U256) -> String {
    format!("Allowance of {token} for {spender}: {amount}")
}

pub fn chain_selector(selector: u64) -> String {
    format!("Chain selector: {selector}")
}

pub fn fees(fees: &Fees) -> Vec<String> {
    vec![
        format!("Maker fee: {} bps", fees.maker),
        format!("Taker fee: {} bps", fees.taker),
        format!("Max fee: {} bps", fees.max),
    ]
}
