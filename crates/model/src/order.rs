use {
    alloy::primitives::{Address, B256, U256},
    std::fmt::{self, Display},
};

/// Label shown for state numerals the contract does not define.
pub const UNKNOWN: &str = "UNKNOWN";

/// Lifecycle of an order as stored by the contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OrderState {
    /// Also what the contract reports for ids that were never created.
    Invalid = 0,
    Open = 1,
    Filled = 2,
    Cancelled = 3,
}

impl OrderState {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Invalid),
            1 => Some(Self::Open),
            2 => Some(Self::Filled),
            3 => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Open => "OPEN",
            Self::Filled => "FILLED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label of a raw state. Unset and undefined states are rendered as
/// [`UNKNOWN`] instead of failing.
pub fn state_label(raw: Option<u8>) -> &'static str {
    raw.and_then(OrderState::from_raw)
        .map(|state| state.as_str())
        .unwrap_or(UNKNOWN)
}

/// One side of an order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Party {
    /// Account in the 32 byte cross-chain format.
    pub account: B256,
    pub token: Address,
    pub amount: U256,
}

/// An order as returned by `getOrder`. The state is kept as the raw numeral
/// so unexpected values survive until they get rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Order {
    pub state: u8,
    pub maker: Party,
    pub taker: Party,
}

impl Order {
    pub fn state(&self) -> Option<OrderState> {
        OrderState::from_raw(self.state)
    }

    pub fn state_label(&self) -> &'static str {
        state_label(Some(self.state))
    }

    /// Whether the maker and taker details are worth showing. Orders in the
    /// invalid state carry no data.
    pub fn has_details(&self) -> bool {
        self.state != OrderState::Invalid as u8
    }
}

/// Token and amount pair of a `sendTokens` transfer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TokenAmount {
    pub token: Address,
    pub amount: U256,
}
