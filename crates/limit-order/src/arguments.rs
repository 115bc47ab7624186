use {
    crate::forms::{
        ApproveForm,
        CancelOrderForm,
        ClaimTokensForm,
        CreateOrderForm,
        FillOrderForm,
        ZERO_ADDRESS,
    },
    alloy::{primitives::Address, signers::local::PrivateKeySigner},
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
        time::Duration,
    },
    tracing::level_filters::LevelFilter,
    url::Url,
};

macro_rules! logging_args_with_default_filter {
    ($struct_name:ident, $default_filter:literal) => {
        #[derive(clap::Parser)]
        pub struct $struct_name {
            #[clap(long, env, default_value = $default_filter)]
            pub log_filter: String,

            /// Events at this level or more severe are written to stderr,
            /// everything else to stdout. Defaults to all of them so stdout
            /// only carries command output.
            #[clap(long, env, default_value = "trace")]
            pub log_stderr_threshold: LevelFilter,

            /// Emit log events as JSON.
            #[clap(long, env)]
            pub log_json: bool,
        }

        impl ::std::fmt::Display for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let Self {
                    log_filter,
                    log_stderr_threshold,
                    log_json,
                } = self;

                writeln!(f, "log_filter: {}", log_filter)?;
                writeln!(f, "log_stderr_threshold: {}", log_stderr_threshold)?;
                writeln!(f, "log_json: {}", log_json)?;
                Ok(())
            }
        }
    };
}

logging_args_with_default_filter!(LoggingArguments, "warn,limit_order=info,ethrpc=info");

/// Client for the CCIP limit order contract.
#[derive(clap::Parser)]
#[clap(name = "limit-order", version)]
pub struct Arguments {
    #[clap(flatten)]
    pub logging: LoggingArguments,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Limit order contract. Defaults to the one configured for the connected
    /// network, then to the known deployment.
    #[clap(long, env)]
    pub contract_address: Option<Address>,

    /// Key that signs transactions.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: Option<PrivateKeySigner>,

    /// Account to read for without being able to send transactions.
    #[clap(long, env, conflicts_with = "private_key")]
    pub account: Option<Address>,

    /// Optional TOML file describing the known networks.
    #[clap(long, env)]
    pub config: Option<PathBuf>,

    /// How often the node is polled for new blocks while watching.
    #[clap(long, env, default_value = "4s", value_parser = humantime::parse_duration)]
    pub poll_interval: Duration,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Contract, account, network and fee overview.
    Info,
    /// Internal balance the contract holds for the connected account.
    Balance(BalanceArgs),
    /// Looks up an order.
    Order(OrderArgs),
    /// ERC-20 allowance of the connected account towards the contract.
    Allowance(AllowanceArgs),
    /// CCIP selector of the chain the contract is deployed on.
    ChainSelector(ChainSelectorArgs),
    CreateOrder(CreateOrderForm),
    CancelOrder(CancelOrderForm),
    FillOrder(FillOrderForm),
    ClaimTokens(ClaimTokensForm),
    /// Approves an ERC-20 allowance and shows the resulting allowance.
    Approve(ApproveForm),
}

#[derive(clap::Args, Debug, Clone)]
pub struct BalanceArgs {
    #[clap(long, default_value = ZERO_ADDRESS)]
    pub token: Option<String>,

    /// Keep printing whenever the balance changes.
    #[clap(long)]
    pub watch: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct OrderArgs {
    #[clap(long, default_value = "0")]
    pub order_id: Option<String>,

    /// Keep printing whenever the order changes.
    #[clap(long)]
    pub watch: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AllowanceArgs {
    #[clap(long)]
    pub token: Option<String>,

    /// Keep printing whenever the allowance changes.
    #[clap(long)]
    pub watch: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ChainSelectorArgs {
    /// Keep printing whenever the selector changes.
    #[clap(long)]
    pub watch: bool,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            logging,
            node_url,
            contract_address,
            private_key,
            account,
            config,
            poll_interval,
            command,
        } = self;

        write!(f, "{logging}")?;
        writeln!(f, "node_url: {node_url}")?;
        display_option(f, "contract_address", contract_address)?;
        display_secret_option(f, "private_key", private_key)?;
        display_option(f, "account", account)?;
        display_option(f, "config", &config.as_ref().map(|path| path.display()))?;
        writeln!(f, "poll_interval: {poll_interval:?}")?;
        writeln!(f, "command: {command:?}")?;
        Ok(())
    }
}

pub fn display_secret_option<T>(
    f: &mut Formatter<'_>,
    name: &str,
    option: &Option<T>,
) -> fmt::Result {
    display_option(f, name, &option.as_ref().map(|_| "SECRET"))
}

pub fn display_option(
    f: &mut Formatter<'_>,
    name: &str,
    option: &Option<impl Display>,
) -> fmt::Result {
    write!(f, "{name}: ")?;
    match option {
        Some(display) => writeln!(f, "{display}"),
        None => writeln!(f, "None"),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::Parser};

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn form_defaults() {
        let args = Arguments::try_parse_from([
            "limit-order",
            "fill-order",
            "--chain-selector",
            "14767482510784806043",
            "--order-id",
            "1",
        ])
        .unwrap();
        let Command::FillOrder(form) = args.command else {
            panic!("wrong command");
        };
        assert_eq!(form.chain_selector.as_deref(), Some("14767482510784806043"));
        assert_eq!(form.fee_token.as_deref(), Some(ZERO_ADDRESS));
        assert_eq!(form.max_fee.as_deref(), Some("1000000000000000000"));
        assert_eq!(form.gas_limit.as_deref(), Some("200000"));
        assert_eq!(form.token, None);
        assert_eq!(args.poll_interval, Duration::from_secs(4));
    }

    #[test]
    fn read_defaults() {
        let args = Arguments::try_parse_from(["limit-order", "order"]).unwrap();
        let Command::Order(order) = args.command else {
            panic!("wrong command");
        };
        assert_eq!(order.order_id.as_deref(), Some("0"));
        assert!(!order.watch);

        let args = Arguments::try_parse_from(["limit-order", "balance", "--watch"]).unwrap();
        let Command::Balance(balance) = args.command else {
            panic!("wrong command");
        };
        assert_eq!(balance.token.as_deref(), Some(ZERO_ADDRESS));
        assert!(balance.watch);

        let args =
            Arguments::try_parse_from(["limit-order", "chain-selector", "--watch"]).unwrap();
        assert!(matches!(
            args.command,
            Command::ChainSelector(ChainSelectorArgs { watch: true })
        ));
    }

    #[test]
    fn key_and_account_conflict() {
        let result = Arguments::try_parse_from([
            "limit-order",
            "--private-key",
            KEY,
            "--account",
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "info",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn display_hides_private_key() {
        let args = Arguments::try_parse_from([
            "limit-order",
            "--private-key",
            KEY,
            "--poll-interval",
            "1s",
            "info",
        ])
        .unwrap();
        let displayed = args.to_string();
        assert!(displayed.contains("private_key: SECRET"), "{displayed}");
        assert!(!displayed.contains(&KEY[2..]), "{displayed}");
        assert!(displayed.contains("poll_interval: 1s"), "{displayed}");
    }
}
