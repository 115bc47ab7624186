use {
    super::{Form, FormContext, Preparation, Presence, parse},
    crate::call::PreparedCall,
};

/// Cancels an open order of the connected account.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct CancelOrderForm {
    #[clap(long)]
    pub order_id: Option<String>,
}

impl Form for CancelOrderForm {
    const ACTION: &'static str = "Cancel order";

    fn prepare(&self, context: &FormContext) -> Preparation {
        let mut presence = Presence::default();
        presence.account(context);
        let order_id = presence.field("order-id", &self.order_id);
        if let Some(disabled) = presence.disabled() {
            return disabled;
        }

        parse("order id", order_id)
            .map(|order_id| PreparedCall::CancelOrder { order_id })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::forms::tests::context, alloy::primitives::U256};

    #[test]
    fn prepares_cancellation() {
        let form = CancelOrderForm {
            order_id: Some("12".into()),
        };
        assert_eq!(
            form.prepare(&context()),
            Preparation::Ready(PreparedCall::CancelOrder {
                order_id: U256::from(12)
            })
        );
    }

    #[test]
    fn requires_order_id() {
        assert_eq!(
            CancelOrderForm::default().prepare(&context()),
            Preparation::Disabled {
                missing: vec!["order-id"]
            }
        );
        let form = CancelOrderForm {
            order_id: Some("first".into()),
        };
        assert!(matches!(form.prepare(&context()), Preparation::Invalid(_)));
    }
}
