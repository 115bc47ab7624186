use {
    super::{
        DEFAULT_FEE_TOKEN,
        DEFAULT_GAS_LIMIT,
        DEFAULT_MAX_FEE,
        Form,
        FormContext,
        Preparation,
        Presence,
        parse,
        parse_fee,
        parse_value,
    },
    crate::call::PreparedCall,
    model::{TokenAmount, address_to_bytes32},
};

/// Sends tokens held for the connected account by the contract to the chain
/// identified by `chain_selector`.
#[derive(Clone, Debug, clap::Args)]
pub struct ClaimTokensForm {
    /// CCIP chain selector of the chain to receive the tokens on.
    #[clap(long)]
    pub chain_selector: Option<String>,

    #[clap(long)]
    pub token: Option<String>,

    #[clap(long)]
    pub amount: Option<String>,

    /// Token the CCIP fee is paid in, the zero address pays natively.
    #[clap(long, default_value = DEFAULT_FEE_TOKEN)]
    pub fee_token: Option<String>,

    #[clap(long, default_value = DEFAULT_MAX_FEE)]
    pub max_fee: Option<String>,

    #[clap(long, default_value = DEFAULT_GAS_LIMIT)]
    pub gas_limit: Option<String>,

    /// Native value sent along, in wei.
    #[clap(long)]
    pub value: Option<String>,
}

impl Default for ClaimTokensForm {
    fn default() -> Self {
        Self {
            chain_selector: None,
            token: None,
            amount: None,
            fee_token: Some(DEFAULT_FEE_TOKEN.to_string()),
            max_fee: Some(DEFAULT_MAX_FEE.to_string()),
            gas_limit: Some(DEFAULT_GAS_LIMIT.to_string()),
            value: None,
        }
    }
}

impl Form for ClaimTokensForm {
    const ACTION: &'static str = "Claim tokens";

    fn prepare(&self, context: &FormContext) -> Preparation {
        let mut presence = Presence::default();
        let account = presence.account(context);
        let chain_selector = presence.field("chain-selector", &self.chain_selector);
        let token = presence.field("token", &self.token);
        let amount = presence.field("amount", &self.amount);
        let fee_token = presence.field("fee-token", &self.fee_token);
        let max_fee = presence.field("max-fee", &self.max_fee);
        let gas_limit = presence.field("gas-limit", &self.gas_limit);
        if let Some(disabled) = presence.disabled() {
            return disabled;
        }

        let prepare = || -> anyhow::Result<PreparedCall> {
            Ok(PreparedCall::SendTokens {
                chain_selector: parse("chain selector", chain_selector)?,
                account: address_to_bytes32(account),
                tokens: vec![TokenAmount {
                    token: parse("token", token)?,
                    amount: parse("amount", amount)?,
                }],
                fee: parse_fee(fee_token, max_fee, gas_limit)?,
                value: parse_value(&self.value)?,
            })
        };
        prepare().into()
    }
}
