pub mod alloy;
pub mod current_block;

use {
    ::alloy::{
        primitives::Address,
        providers::DynProvider,
        signers::local::PrivateKeySigner,
    },
    url::Url,
};

pub type AlloyProvider = DynProvider;

/// The account the client acts on behalf of.
#[derive(Debug, Clone)]
pub enum Account {
    /// Transactions get signed locally with this key.
    Signer(PrivateKeySigner),
    /// Read-only account, reads work but nothing can be submitted.
    Address(Address),
}

impl Account {
    pub fn address(&self) -> Address {
        match self {
            Self::Signer(signer) => signer.address(),
            Self::Address(address) => *address,
        }
    }
}

/// Connection to a node together with the account it acts for.
#[derive(Debug, Clone)]
pub struct Web3 {
    pub provider: AlloyProvider,
    /// Connected account, `None` if the client runs without any account.
    pub account: Option<Address>,
    /// Whether `provider` is able to sign transactions for `account`.
    pub can_sign: bool,
}

impl Web3 {
    pub fn new(provider: AlloyProvider, account: Option<Address>, can_sign: bool) -> Self {
        Self {
            provider,
            account,
            can_sign,
        }
    }
}

/// Create a Web3 instance talking to the node at `url`.
pub fn web3(url: &Url, account: Option<Account>, name: impl ToString) -> Web3 {
    let address = account.as_ref().map(Account::address);
    match account {
        Some(Account::Signer(signer)) => Web3::new(
            alloy::provider_with_signer(url, signer, name),
            address,
            true,
        ),
        _ => Web3::new(alloy::provider(url, name), address, false),
    }
}
