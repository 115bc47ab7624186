//! Calls that passed the presence check and parsed cleanly, ready to be
//! simulated and submitted.

use {
    alloy::primitives::{Address, B256, Log, TxHash, U256},
    model::{Party, TokenAmount},
};

/// CCIP fee parameters shared by the calls that send a cross-chain message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcipFee {
    /// Token the messaging fee is paid in, zero address for native.
    pub fee_token: Address,
    /// Upper bound the caller accepts for the messaging fee.
    pub max_fee: U256,
    /// Gas limit for the execution on the destination chain.
    pub gas_limit: U256,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PreparedCall {
    CreateOrder {
        maker: Party,
        taker: Party,
    },
    CancelOrder {
        order_id: U256,
    },
    FillOrder {
        chain_selector: u64,
        order_id: U256,
        token: Address,
        amount: U256,
        fee: CcipFee,
        value: U256,
    },
    SendTokens {
        chain_selector: u64,
        account: B256,
        tokens: Vec<TokenAmount>,
        fee: CcipFee,
        value: U256,
    },
    Approve {
        token: Address,
        spender: Address,
        amount: U256,
    },
}

impl PreparedCall {
    /// Name of the contract function the call ends up in.
    pub fn function(&self) -> &'static str {
        match self {
            Self::CreateOrder { .. } => "createOrder",
            Self::CancelOrder { .. } => "cancelOrder",
            Self::FillOrder { .. } => "fillOrder",
            Self::SendTokens { .. } => "sendTokens",
            Self::Approve { .. } => "approve",
        }
    }

    /// Contract the transaction is sent to. Everything but approvals goes to
    /// the limit order contract.
    pub fn target(&self, limit_order: Address) -> Address {
        match self {
            Self::Approve { token, .. } => *token,
            _ => limit_order,
        }
    }

    /// Native value attached to the transaction.
    pub fn value(&self) -> U256 {
        match self {
            Self::FillOrder { value, .. } | Self::SendTokens { value, .. } => *value,
            _ => U256::ZERO,
        }
    }
}

/// The parts of a mined transaction's receipt the client cares about.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    pub hash: TxHash,
    pub block: Option<u64>,
    /// Execution status, `false` if the transaction reverted.
    pub success: bool,
    pub logs: Vec<Log>,
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address};

    #[test]
    fn approvals_target_the_token() {
        let contract = address!("0x943a837698851f90696e20f009b3bdCB13eE4B27");
        let token = address!("0x1111111111111111111111111111111111111111");
        let approve = PreparedCall::Approve {
            token,
            spender: contract,
            amount: U256::from(5),
        };
        assert_eq!(approve.target(contract), token);
        assert_eq!(approve.value(), U256::ZERO);

        let cancel = PreparedCall::CancelOrder {
            order_id: U256::from(1),
        };
        assert_eq!(cancel.target(contract), contract);
        assert_eq!(cancel.function(), "cancelOrder");
    }
}
