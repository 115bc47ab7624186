use {
    super::{Form, FormContext, Preparation, Presence, parse, present},
    crate::call::PreparedCall,
};

/// Approves an ERC-20 allowance, by default towards the limit order
/// contract.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct ApproveForm {
    #[clap(long)]
    pub token: Option<String>,

    /// Defaults to the limit order contract.
    #[clap(long)]
    pub spender: Option<String>,

    #[clap(long)]
    pub amount: Option<String>,
}

impl Form for ApproveForm {
    const ACTION: &'static str = "Approve";

    fn prepare(&self, context: &FormContext) -> Preparation {
        let mut presence = Presence::default();
        presence.account(context);
        let token = presence.field("token", &self.token);
        let amount = presence.field("amount", &self.amount);
        if let Some(disabled) = presence.disabled() {
            return disabled;
        }

        let prepare = || -> anyhow::Result<PreparedCall> {
            Ok(PreparedCall::Approve {
                token: parse("token", token)?,
                spender: match present(&self.spender) {
                    Some(spender) => parse("spender", spender)?,
                    None => context.contract,
                },
                amount: parse("amount", amount)?,
            })
        };
        prepare().into()
    }
}
