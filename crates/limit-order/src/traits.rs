//! Trait definitions for the blockchain boundary.
//!
//! Everything the client reads from or writes to the limit order contract
//! goes through [`LimitOrderApi`] so the forms, the submitter and the read
//! panels can be unit tested with mocks.

use {
    crate::call::{PreparedCall, Receipt},
    alloy::primitives::{Address, B256, TxHash, U256},
    anyhow::Result,
    model::Order,
};

/// Fee configuration of the contract, in basis points.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fees {
    pub maker: U256,
    pub taker: U256,
    pub max: U256,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LimitOrderApi: Send + Sync + 'static {
    /// Address of the limit order contract.
    fn address(&self) -> Address;

    /// Account transactions are sent from, if any is connected.
    fn account(&self) -> Option<Address>;

    async fn chain_id(&self) -> Result<u64>;

    /// CCIP selector of the chain the contract is deployed on.
    async fn current_chain_selector(&self) -> Result<u64>;

    async fn fees(&self) -> Result<Fees>;

    /// Internal balance the contract keeps for `account` in `token`.
    async fn get_balance(&self, account: B256, token: Address) -> Result<U256>;

    /// Never fails for unknown ids, those come back in the invalid state.
    async fn get_order(&self, order_id: U256) -> Result<Order>;

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256>;

    /// Simulates the call and, if that succeeds, sends it as a transaction.
    async fn submit(&self, call: PreparedCall) -> Result<TxHash>;

    /// Waits until the transaction is mined.
    async fn wait_for_receipt(&self, hash: TxHash) -> Result<Receipt>;
}
