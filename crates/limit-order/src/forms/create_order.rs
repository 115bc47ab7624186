use {
    super::{ANY_TAKER, Form, FormContext, Preparation, Presence, parse},
    crate::call::PreparedCall,
    model::{Party, address_to_bytes32, parse_account32},
};

/// Opens a new order. The maker is always the connected account.
#[derive(Clone, Debug, clap::Args)]
pub struct CreateOrderForm {
    /// Token the maker offers.
    #[clap(long)]
    pub maker_token: Option<String>,

    /// Amount of the maker token, in its smallest unit.
    #[clap(long)]
    pub maker_amount: Option<String>,

    /// Account allowed to fill the order, as 20 byte address or 32 byte
    /// identifier. All zeros lets anyone fill it.
    #[clap(long, default_value = ANY_TAKER)]
    pub taker_account: Option<String>,

    /// Token the maker wants in return.
    #[clap(long)]
    pub taker_token: Option<String>,

    /// Amount of the taker token, in its smallest unit.
    #[clap(long)]
    pub taker_amount: Option<String>,
}

impl Default for CreateOrderForm {
    fn default() -> Self {
        Self {
            maker_token: None,
            maker_amount: None,
            taker_account: Some(ANY_TAKER.to_string()),
            taker_token: None,
            taker_amount: None,
        }
    }
}

impl Form for CreateOrderForm {
    const ACTION: &'static str = "Create order";

    fn prepare(&self, context: &FormContext) -> Preparation {
        let mut presence = Presence::default();
        let account = presence.account(context);
        let maker_token = presence.field("maker-token", &self.maker_token);
        let maker_amount = presence.field("maker-amount", &self.maker_amount);
        let taker_account = presence.field("taker-account", &self.taker_account);
        let taker_token = presence.field("taker-token", &self.taker_token);
        let taker_amount = presence.field("taker-amount", &self.taker_amount);
        if let Some(disabled) = presence.disabled() {
            return disabled;
        }

        let prepare = || -> anyhow::Result<PreparedCall> {
            Ok(PreparedCall::CreateOrder {
                maker: Party {
                    account: address_to_bytes32(account),
                    token: parse("maker token", maker_token)?,
                    amount: parse("maker amount", maker_amount)?,
                },
                taker: Party {
                    account: parse_account32(taker_account)?,
                    token: parse("taker token", taker_token)?,
                    amount: parse("taker amount", taker_amount)?,
                },
            })
        };
        prepare().into()
    }
}
