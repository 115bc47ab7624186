//! Contains the models that are shared between the contract bindings and the
//! limit order client.

pub mod account;
pub mod order;

pub use {
    account::{ParseAccountError, address_to_bytes32, parse_account32, to_bytes32},
    order::{Order, OrderState, Party, TokenAmount, state_label},
};
