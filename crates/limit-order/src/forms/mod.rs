//! Input forms of the five contract actions.
//!
//! Every form only holds the raw strings the user typed. Preparing a form
//! first checks that all required fields are present, a form with missing
//! fields is disabled and produces nothing. Only then the strings are parsed
//! into a [`PreparedCall`].

mod approve;
mod cancel_order;
mod claim_tokens;
mod create_order;
mod fill_order;

pub use {
    approve::ApproveForm,
    cancel_order::CancelOrderForm,
    claim_tokens::ClaimTokensForm,
    create_order::CreateOrderForm,
    fill_order::FillOrderForm,
};
use {
    crate::call::{CcipFee, PreparedCall},
    alloy::primitives::{Address, U256},
    anyhow::{Result, anyhow},
    std::{fmt::Display, str::FromStr},
};

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
/// Taker account that allows anyone to fill an order.
pub const ANY_TAKER: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";
pub const DEFAULT_FEE_TOKEN: &str = ZERO_ADDRESS;
pub const DEFAULT_MAX_FEE: &str = "1000000000000000000";
pub const DEFAULT_GAS_LIMIT: &str = "200000";

/// What a form knows about its surroundings.
#[derive(Clone, Copy, Debug)]
pub struct FormContext {
    /// Connected account, `None` when running without one.
    pub account: Option<Address>,
    /// The limit order contract.
    pub contract: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Preparation {
    /// Required fields are missing, submitting is a no-op.
    Disabled { missing: Vec<&'static str> },
    /// All fields are present but some could not be parsed.
    Invalid(String),
    Ready(PreparedCall),
}

impl From<Result<PreparedCall>> for Preparation {
    fn from(result: Result<PreparedCall>) -> Self {
        match result {
            Ok(call) => Self::Ready(call),
            Err(err) => Self::Invalid(format!("{err:#}")),
        }
    }
}

pub trait Form {
    /// Human readable name of the action.
    const ACTION: &'static str;

    fn prepare(&self, context: &FormContext) -> Preparation;
}

/// Collects the names of missing fields while a form is checked.
#[derive(Default)]
struct Presence {
    missing: Vec<&'static str>,
}

impl Presence {
    /// Returns the trimmed field, or an empty string after recording it as
    /// missing.
    fn field<'a>(&mut self, name: &'static str, value: &'a Option<String>) -> &'a str {
        match present(value) {
            Some(value) => value,
            None => {
                self.missing.push(name);
                ""
            }
        }
    }

    fn account(&mut self, context: &FormContext) -> Address {
        context.account.unwrap_or_else(|| {
            self.missing.push("account");
            Address::ZERO
        })
    }

    /// `Some` if the form has to stay disabled.
    fn disabled(self) -> Option<Preparation> {
        (!self.missing.is_empty()).then_some(Preparation::Disabled {
            missing: self.missing,
        })
    }
}

/// Empty and whitespace only input counts as not present.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn parse<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|err| anyhow!("invalid {name} {value:?}: {err}"))
}

/// Native value attached to payable calls, zero when not given.
fn parse_value(value: &Option<String>) -> Result<U256> {
    present(value).map_or(Ok(U256::ZERO), |value| parse("value", value))
}

fn parse_fee(fee_token: &str, max_fee: &str, gas_limit: &str) -> Result<CcipFee> {
    Ok(CcipFee {
        fee_token: parse("fee token", fee_token)?,
        max_fee: parse("max fee", max_fee)?,
        gas_limit: parse("gas limit", gas_limit)?,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::{B256, address},
    };

    pub const ACCOUNT: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    pub fn context() -> FormContext {
        FormContext {
            account: Some(ACCOUNT),
            contract: contracts::alloy::deployments::CCIP_LIMIT_ORDER,
        }
    }

    #[test]
    fn blank_fields_are_missing() {
        let mut presence = Presence::default();
        assert_eq!(presence.field("a", &Some(" 1 ".to_string())), "1");
        presence.field("b", &Some("  ".to_string()));
        presence.field("c", &None);
        presence.account(&FormContext {
            account: None,
            ..context()
        });
        assert_eq!(
            presence.disabled(),
            Some(Preparation::Disabled {
                missing: vec!["b", "c", "account"]
            })
        );
        assert_eq!(Presence::default().disabled(), None);
    }

    #[test]
    fn parse_errors_name_the_field() {
        let err = parse::<U256>("amount", "ten").unwrap_err();
        assert!(err.to_string().starts_with("invalid amount \"ten\""), "{err}");
        assert_eq!(parse_value(&None).unwrap(), U256::ZERO);
        assert_eq!(parse_value(&Some("5".into())).unwrap(), U256::from(5));
    }

    #[test]
    fn defaults_parse() {
        let fee = parse_fee(DEFAULT_FEE_TOKEN, DEFAULT_MAX_FEE, DEFAULT_GAS_LIMIT).unwrap();
        assert_eq!(fee.fee_token, Address::ZERO);
        assert_eq!(fee.max_fee, U256::from(10).pow(U256::from(18)));
        assert_eq!(fee.gas_limit, U256::from(200_000));
        assert_eq!(model::parse_account32(ANY_TAKER).unwrap(), B256::ZERO);
    }
}
