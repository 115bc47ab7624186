use {
    crate::{
        arguments::{
            AllowanceArgs,
            Arguments,
            BalanceArgs,
            ChainSelectorArgs,
            Command,
            OrderArgs,
        },
        call::{PreparedCall, Receipt},
        config::{Configuration, Network},
        forms::{Form, FormContext, Preparation, parse, present},
        observer::Observer,
        onchain::OnchainLimitOrder,
        render,
        submitter::{Submitter, TxStatus},
        traits::LimitOrderApi,
    },
    alloy::{
        primitives::{Address, Log, U256},
        providers::Provider,
        signers::local::PrivateKeySigner,
        sol_types::SolEvent,
    },
    anyhow::{Context, Result},
    contracts::alloy::{CCIPLimitOrder::CCIPLimitOrder as Bindings, chain_selectors, deployments},
    ethrpc::{
        Account,
        current_block::{self, BlockRetrieving},
    },
    model::{Order, address_to_bytes32},
    std::{io::Write, sync::Arc, time::Duration},
    tokio::sync::Notify,
    url::Url,
};

/// How a command ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Done,
    /// Required input was missing, nothing was sent.
    Disabled,
    /// A call failed or a transaction reverted.
    Failed,
}

pub async fn run(args: Arguments) -> Result<Outcome> {
    let config = match &args.config {
        Some(path) => Configuration::from_path(path).await?,
        None => Configuration::default(),
    };
    let account = account(args.private_key, args.account);
    let web3 = ethrpc::web3(&args.node_url, account, "limit-order");
    let chain_id = web3
        .provider
        .get_chain_id()
        .await
        .context("failed to connect to node")?;
    let network = config.network(chain_id).cloned();
    if network.is_none() {
        tracing::warn!(chain_id, "unknown network, no block explorer links");
    }
    let contract = args
        .contract_address
        .or_else(|| network.as_ref().and_then(|network| network.contract_address))
        .unwrap_or(deployments::CCIP_LIMIT_ORDER);
    tracing::info!(%contract, chain_id, account = ?web3.account, "connected");

    let api = Arc::new(OnchainLimitOrder::new(web3.clone(), contract));
    let app = App::new(api, Arc::new(web3.provider), args.poll_interval, network);
    let stop = app.stop_handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => stop.notify_one(),
            Err(err) => tracing::warn!(?err, "failed to listen for ctrl-c"),
        }
    });
    app.execute(args.command, &mut std::io::stdout()).await
}

fn account(private_key: Option<PrivateKeySigner>, address: Option<Address>) -> Option<Account> {
    match (private_key, address) {
        (Some(signer), _) => Some(Account::Signer(signer)),
        (None, Some(address)) => Some(Account::Address(address)),
        (None, None) => None,
    }
}

pub struct App {
    api: Arc<dyn LimitOrderApi>,
    submitter: Submitter,
    blocks: Arc<dyn BlockRetrieving>,
    poll_interval: Duration,
    network: Option<Network>,
    /// Ends watching reads.
    stop: Arc<Notify>,
}

impl App {
    pub fn new(
        api: Arc<dyn LimitOrderApi>,
        blocks: Arc<dyn BlockRetrieving>,
        poll_interval: Duration,
        network: Option<Network>,
    ) -> Self {
        Self {
            submitter: Submitter::new(api.clone()),
            api,
            blocks,
            poll_interval,
            network,
            stop: Default::default(),
        }
    }

    /// Notifying the handle ends the current or the next watching read.
    pub fn stop_handle(&self) -> Arc<Notify> {
        self.stop.clone()
    }

    pub async fn execute(&self, command: Command, out: &mut impl Write) -> Result<Outcome> {
        match command {
            Command::Info => self.info(out).await,
            Command::Balance(args) => self.balance(args, out).await,
            Command::Order(args) => self.order(args, out).await,
            Command::Allowance(args) => self.allowance(args, out).await,
            Command::ChainSelector(args) => self.chain_selector(args, out).await,
            Command::CreateOrder(form) => self.submit(&form, out).await,
            Command::CancelOrder(form) => self.submit(&form, out).await,
            Command::FillOrder(form) => self.submit(&form, out).await,
            Command::ClaimTokens(form) => self.submit(&form, out).await,
            Command::Approve(form) => self.submit(&form, out).await,
        }
    }

    fn explorer(&self) -> Option<&Url> {
        self.network.as_ref().map(|network| &network.explorer_url)
    }

    async fn info(&self, out: &mut impl Write) -> Result<Outcome> {
        let chain_id = self.api.chain_id().await?;
        let selector = self.api.current_chain_selector().await?;
        if chain_selectors::chain_id(selector).is_some_and(|id| id != chain_id) {
            tracing::warn!(chain_id, selector, "contract reports selector of another chain");
        }
        let fees = self.api.fees().await?;

        writeln!(out, "Contract: {}", self.api.address())?;
        match self.api.account() {
            Some(account) => writeln!(out, "Account: {account}")?,
            None => writeln!(out, "Account: none")?,
        }
        match &self.network {
            Some(network) => writeln!(out, "Chain: {chain_id} ({})", network.name)?,
            None => writeln!(out, "Chain: {chain_id}")?,
        }
        writeln!(out, "{}", render::chain_selector(selector))?;
        for line in render::fees(&fees) {
            writeln!(out, "{line}")?;
        }
        Ok(Outcome::Done)
    }

    async fn balance(&self, args: BalanceArgs, out: &mut impl Write) -> Result<Outcome> {
        let Some(account) = self.api.account() else {
            writeln!(out, "{}", render::disabled("Balance", &["account"]))?;
            return Ok(Outcome::Disabled);
        };
        let token = match address_argument("Balance", "token", &args.token, out)? {
            Ok(token) => token,
            Err(outcome) => return Ok(outcome),
        };
        let account = address_to_bytes32(account);

        if !args.watch {
            let amount = self.api.get_balance(account, token).await?;
            writeln!(out, "{}", render::balance(token, amount))?;
            return Ok(Outcome::Done);
        }
        let api = self.api.clone();
        let observer = Observer::spawn(
            "balance",
            Some(token),
            self.block_stream().await?,
            move |token| {
                let api = api.clone();
                async move { api.get_balance(account, token).await }
            },
        );
        self.print_changes(&observer, |amount| vec![render::balance(token, *amount)], out)
            .await
    }

    async fn order(&self, args: OrderArgs, out: &mut impl Write) -> Result<Outcome> {
        let Some(order_id) = present(&args.order_id) else {
            // Nothing to look up, which shows like an order in an unset state.
            print_lines(out, render::order(None))?;
            return Ok(Outcome::Done);
        };
        let order_id: U256 = match parse("order id", order_id) {
            Ok(order_id) => order_id,
            Err(err) => {
                writeln!(out, "{}", render::error(format!("{err:#}")))?;
                return Ok(Outcome::Failed);
            }
        };

        if !args.watch {
            let order = self.api.get_order(order_id).await?;
            print_lines(out, render::order(Some(&order)))?;
            return Ok(Outcome::Done);
        }
        let api = self.api.clone();
        let observer = Observer::spawn(
            "order",
            Some(order_id),
            self.block_stream().await?,
            move |order_id| {
                let api = api.clone();
                async move { api.get_order(order_id).await }
            },
        );
        self.print_changes(&observer, |order: &Order| render::order(Some(order)), out)
            .await
    }

    async fn allowance(&self, args: AllowanceArgs, out: &mut impl Write) -> Result<Outcome> {
        let Some(owner) = self.api.account() else {
            writeln!(out, "{}", render::disabled("Allowance", &["account"]))?;
            return Ok(Outcome::Disabled);
        };
        let token = match address_argument("Allowance", "token", &args.token, out)? {
            Ok(token) => token,
            Err(outcome) => return Ok(outcome),
        };
        let spender = self.api.address();

        if !args.watch {
            let amount = self.api.allowance(token, owner, spender).await?;
            writeln!(out, "{}", render::allowance(token, spender, amount))?;
            return Ok(Outcome::Done);
        }
        let api = self.api.clone();
        let observer = Observer::spawn(
            "allowance",
            Some(token),
            self.block_stream().await?,
            move |token| {
                let api = api.clone();
                async move { api.allowance(token, owner, spender).await }
            },
        );
        self.print_changes(
            &observer,
            |amount| vec![render::allowance(token, spender, *amount)],
            out,
        )
        .await
    }

    async fn chain_selector(
        &self,
        args: ChainSelectorArgs,
        out: &mut impl Write,
    ) -> Result<Outcome> {
        if !args.watch {
            let selector = self.api.current_chain_selector().await?;
            writeln!(out, "{}", render::chain_selector(selector))?;
            return Ok(Outcome::Done);
        }
        let api = self.api.clone();
        let observer = Observer::spawn(
            "chain selector",
            Some(()),
            self.block_stream().await?,
            move |()| {
                let api = api.clone();
                async move { api.current_chain_selector().await }
            },
        );
        self.print_changes(
            &observer,
            |selector| vec![render::chain_selector(*selector)],
            out,
        )
        .await
    }

    async fn block_stream(&self) -> Result<current_block::CurrentBlockWatcher> {
        current_block::current_block_stream(self.blocks.clone(), self.poll_interval).await
    }

    /// Prints every value the observer publishes until stopped.
    async fn print_changes<A, T>(
        &self,
        observer: &Observer<A, T>,
        render: impl Fn(&T) -> Vec<String>,
        out: &mut impl Write,
    ) -> Result<Outcome>
    where
        A: Clone + PartialEq + Send + Sync + 'static,
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        let mut values = observer.subscribe();
        loop {
            tokio::select! {
                changed = values.changed() => {
                    changed.context("observer stopped")?;
                    let value = values.borrow_and_update().clone();
                    if let Some(value) = value {
                        print_lines(out, render(&value))?;
                        out.flush()?;
                    }
                }
                _ = self.stop.notified() => break,
            }
        }
        Ok(Outcome::Done)
    }

    async fn submit<F: Form>(&self, form: &F, out: &mut impl Write) -> Result<Outcome> {
        let context = FormContext {
            account: self.api.account(),
            contract: self.api.address(),
        };
        let call = match form.prepare(&context) {
            Preparation::Ready(call) => call,
            preparation => {
                if let Some(line) = render::preparation(F::ACTION, &preparation) {
                    writeln!(out, "{line}")?;
                }
                return Ok(match preparation {
                    Preparation::Disabled { .. } => Outcome::Disabled,
                    _ => Outcome::Failed,
                });
            }
        };

        let handle = match self.submitter.submit(call.clone()).await {
            Ok(handle) => handle,
            Err(err) => {
                writeln!(out, "{}", render::error(err))?;
                return Ok(Outcome::Failed);
            }
        };
        writeln!(out, "{}", render::pending(handle.hash(), self.explorer()))?;
        out.flush()?;

        let status = handle.wait().await;
        writeln!(out, "{}", render::tx_status(&status, self.explorer()))?;
        let TxStatus::Succeeded { receipt } = status else {
            return Ok(Outcome::Failed);
        };
        self.after_success(&call, &receipt, out).await?;
        Ok(Outcome::Done)
    }

    async fn after_success(
        &self,
        call: &PreparedCall,
        receipt: &Receipt,
        out: &mut impl Write,
    ) -> Result<()> {
        match call {
            PreparedCall::CreateOrder { .. } => {
                for order_id in created_orders(self.api.address(), &receipt.logs) {
                    writeln!(out, "Order id: {order_id}")?;
                }
            }
            PreparedCall::Approve { token, spender, .. } => {
                let owner = self.api.account().context("no account connected")?;
                let amount = self.api.allowance(*token, owner, *spender).await?;
                writeln!(out, "{}", render::allowance(*token, *spender, amount))?;
            }
            _ => (),
        }
        Ok(())
    }
}

/// Checks and parses a required address argument of a read command. A
/// missing or malformed argument is reported to `out` and turned into the
/// outcome of the command.
fn address_argument(
    action: &str,
    name: &'static str,
    value: &Option<String>,
    out: &mut impl Write,
) -> Result<Result<Address, Outcome>> {
    let Some(value) = present(value) else {
        writeln!(out, "{}", render::disabled(action, &[name]))?;
        return Ok(Err(Outcome::Disabled));
    };
    match parse(name, value) {
        Ok(address) => Ok(Ok(address)),
        Err(err) => {
            writeln!(out, "{}", render::error(format!("{err:#}")))?;
            Ok(Err(Outcome::Failed))
        }
    }
}

/// Ids of the orders a transaction created on `contract`.
fn created_orders(contract: Address, logs: &[Log]) -> Vec<U256> {
    logs.iter()
        .filter(|log| log.address == contract)
        .filter_map(|log| Bindings::OrderCreated::decode_log(log).ok())
        .map(|event| event.data.orderId)
        .collect()
}

fn print_lines(out: &mut impl Write, lines: Vec<String>) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            forms::{ApproveForm, CancelOrderForm, CreateOrderForm},
            traits::{Fees, MockLimitOrderApi},
        },
        alloy::primitives::{B256, TxHash, address},
        ethrpc::current_block::BlockInfo,
        std::sync::atomic::{AtomicU64, AtomicUsize, Ordering},
    };

    const CONTRACT: Address = address!("0x943a837698851f90696e20f009b3bdCB13eE4B27");
    const ACCOUNT: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const TOKEN: Address = address!("0x1111111111111111111111111111111111111111");
    const HASH: TxHash = TxHash::repeat_byte(0x11);

    #[derive(Debug)]
    struct FixedBlock;

    #[async_trait::async_trait]
    impl BlockRetrieving for FixedBlock {
        async fn current_block(&self) -> Result<BlockInfo> {
            Ok(BlockInfo::default())
        }
    }

    /// A new block on every poll.
    #[derive(Debug, Default)]
    struct AdvancingBlocks(AtomicU64);

    #[async_trait::async_trait]
    impl BlockRetrieving for AdvancingBlocks {
        async fn current_block(&self) -> Result<BlockInfo> {
            let number = self.0.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(BlockInfo {
                number,
                hash: B256::left_padding_from(&number.to_be_bytes()),
                ..Default::default()
            })
        }
    }

    fn api(account: Option<Address>) -> MockLimitOrderApi {
        let mut api = MockLimitOrderApi::new();
        api.expect_address().return_const(CONTRACT);
        api.expect_account().return_const(account);
        api
    }

    fn app(api: MockLimitOrderApi) -> App {
        let network = Configuration::default().network(11155111).cloned();
        App::new(
            Arc::new(api),
            Arc::new(FixedBlock),
            Duration::from_secs(1),
            network,
        )
    }

    fn watching_app(api: MockLimitOrderApi) -> App {
        let app = App::new(
            Arc::new(api),
            Arc::new(AdvancingBlocks::default()),
            Duration::from_secs(1),
            None,
        );
        let stop = app.stop_handle();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(10)).await;
            stop.notify_one();
        });
        app
    }

    async fn execute(app: &App, command: Command) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = app.execute(command, &mut out).await.unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn default_order_id_shows_invalid_without_details() {
        let mut api = api(Some(ACCOUNT));
        api.expect_get_order()
            .withf(|order_id| order_id.is_zero())
            .returning(|_| Ok(Order::default()));
        let app = app(api);

        let (outcome, out) = execute(
            &app,
            Command::Order(OrderArgs {
                order_id: Some("0".into()),
                watch: false,
            }),
        )
        .await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out, "State: INVALID\n");
    }

    #[tokio::test(start_paused = true)]
    async fn watched_order_prints_every_change() {
        let reads = AtomicUsize::new(0);
        let mut api = api(Some(ACCOUNT));
        api.expect_get_order()
            .withf(|order_id| *order_id == U256::from(1))
            .returning(move |_| {
                let state = match reads.fetch_add(1, Ordering::SeqCst) {
                    0 | 1 => 1,
                    _ => 2,
                };
                Ok(Order {
                    state,
                    ..Default::default()
                })
            });
        let app = watching_app(api);

        let (outcome, out) = execute(
            &app,
            Command::Order(OrderArgs {
                order_id: Some("1".into()),
                watch: true,
            }),
        )
        .await;
        assert_eq!(outcome, Outcome::Done);
        let states: Vec<_> = out
            .lines()
            .filter(|line| line.starts_with("State:"))
            .collect();
        assert_eq!(states, vec!["State: OPEN", "State: FILLED"]);
        assert!(out.contains("Maker amount: 0"), "{out}");
    }

    #[tokio::test(start_paused = true)]
    async fn watched_chain_selector_prints_once_while_unchanged() {
        let mut api = api(None);
        api.expect_current_chain_selector()
            .returning(|| Ok(chain_selectors::SEPOLIA));
        let app = watching_app(api);

        let (outcome, out) = execute(
            &app,
            Command::ChainSelector(ChainSelectorArgs { watch: true }),
        )
        .await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out, "Chain selector: 16015286601757825753\n");
    }

    #[tokio::test]
    async fn info_lists_contract_account_and_fees() {
        let mut api = api(Some(ACCOUNT));
        api.expect_chain_id().returning(|| Ok(11155111));
        api.expect_current_chain_selector()
            .returning(|| Ok(chain_selectors::SEPOLIA));
        api.expect_fees().returning(|| {
            Ok(Fees {
                maker: U256::from(10),
                taker: U256::from(20),
                max: U256::from(100),
            })
        });
        let app = app(api);

        let (outcome, out) = execute(&app, Command::Info).await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            out,
            format!(
                "Contract: {CONTRACT}\nAccount: {ACCOUNT}\nChain: 11155111 (Sepolia)\nChain \
                 selector: 16015286601757825753\nMaker fee: 10 bps\nTaker fee: 20 bps\nMax fee: \
                 100 bps\n"
            )
        );
    }

    #[tokio::test]
    async fn missing_order_id_is_unknown() {
        let app = app(api(None));
        let (outcome, out) = execute(
            &app,
            Command::Order(OrderArgs {
                order_id: Some(" ".into()),
                watch: false,
            }),
        )
        .await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out, "State: UNKNOWN\n");
    }

    #[tokio::test]
    async fn balance_of_connected_account() {
        let mut api = api(Some(ACCOUNT));
        api.expect_get_balance()
            .withf(|account, token| {
                *account == address_to_bytes32(ACCOUNT) && *token == Address::ZERO
            })
            .returning(|_, _| Ok(U256::from(42)));
        let app = app(api);

        let (outcome, out) = execute(
            &app,
            Command::Balance(BalanceArgs {
                token: Some(Address::ZERO.to_string()),
                watch: false,
            }),
        )
        .await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            out,
            "Balance of 0x0000000000000000000000000000000000000000: 42\n"
        );
    }

    #[tokio::test]
    async fn reads_need_an_account() {
        let app = app(api(None));
        let (outcome, out) = execute(
            &app,
            Command::Allowance(AllowanceArgs {
                token: Some(TOKEN.to_string()),
                watch: false,
            }),
        )
        .await;
        assert_eq!(outcome, Outcome::Disabled);
        assert_eq!(out, "Allowance: disabled (missing: account)\n");
    }

    #[tokio::test]
    async fn incomplete_form_submits_nothing() {
        let mut api = api(Some(ACCOUNT));
        api.expect_submit().never();
        let app = app(api);

        let (outcome, out) = execute(&app, Command::CancelOrder(CancelOrderForm::default())).await;
        assert_eq!(outcome, Outcome::Disabled);
        assert_eq!(out, "Cancel order: disabled (missing: order-id)\n");
    }

    #[tokio::test]
    async fn simulation_failure_is_shown() {
        let mut api = api(Some(ACCOUNT));
        const REVERT: &str = "execution reverted: InvalidState { expected: 1, actual: 3 }";
        api.expect_submit()
            .returning(|_| Err(anyhow::anyhow!(REVERT)));
        let app = app(api);

        let (outcome, out) = execute(
            &app,
            Command::CancelOrder(CancelOrderForm {
                order_id: Some("4".into()),
            }),
        )
        .await;
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(out, format!("Error: {REVERT}\n"));
    }

    #[tokio::test]
    async fn create_order_prints_new_id() {
        let mut api = api(Some(ACCOUNT));
        api.expect_submit()
            .withf(|call| matches!(call, PreparedCall::CreateOrder { .. }))
            .returning(|_| Ok(HASH));
        api.expect_wait_for_receipt().returning(|hash| {
            let event = Bindings::OrderCreated {
                orderId: U256::from(7),
                maker: Bindings::Party {
                    account: address_to_bytes32(ACCOUNT),
                    token: TOKEN,
                    amount: U256::from(1),
                },
                taker: Bindings::Party {
                    account: B256::ZERO,
                    token: TOKEN,
                    amount: U256::from(2),
                },
            };
            Ok(Receipt {
                hash,
                block: Some(5),
                success: true,
                logs: vec![Log {
                    address: CONTRACT,
                    data: event.encode_log_data(),
                }],
            })
        });
        let app = app(api);

        let form = CreateOrderForm {
            maker_token: Some(TOKEN.to_string()),
            maker_amount: Some("1".into()),
            taker_token: Some(TOKEN.to_string()),
            taker_amount: Some("2".into()),
            ..Default::default()
        };
        let (outcome, out) = execute(&app, Command::CreateOrder(form)).await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            out,
            format!(
                "Processing transaction... https://sepolia.etherscan.io/tx/{HASH}\nSuccess!\nOrder id: 7\n"
            )
        );
    }

    #[tokio::test]
    async fn approve_shows_resulting_allowance() {
        let mut api = api(Some(ACCOUNT));
        api.expect_submit().returning(|_| Ok(HASH));
        api.expect_wait_for_receipt().returning(|hash| {
            Ok(Receipt {
                hash,
                block: Some(5),
                success: true,
                logs: vec![],
            })
        });
        api.expect_allowance()
            .withf(|token, owner, spender| {
                *token == TOKEN && *owner == ACCOUNT && *spender == CONTRACT
            })
            .returning(|_, _, _| Ok(U256::from(500)));
        let app = app(api);

        let form = ApproveForm {
            token: Some(TOKEN.to_string()),
            amount: Some("500".into()),
            ..Default::default()
        };
        let (outcome, out) = execute(&app, Command::Approve(form)).await;
        assert_eq!(outcome, Outcome::Done);
        let allowance = render::allowance(TOKEN, CONTRACT, U256::from(500));
        assert!(out.ends_with(&format!("Success!\n{allowance}\n")), "{out}");
    }

    #[tokio::test]
    async fn reverted_transaction_fails() {
        let mut api = api(Some(ACCOUNT));
        api.expect_submit().returning(|_| Ok(HASH));
        api.expect_wait_for_receipt().returning(|hash| {
            Ok(Receipt {
                hash,
                block: Some(5),
                success: false,
                logs: vec![],
            })
        });
        api.expect_allowance().never();
        let app = app(api);

        let form = ApproveForm {
            token: Some(TOKEN.to_string()),
            amount: Some("1".into()),
            ..Default::default()
        };
        let (outcome, out) = execute(&app, Command::Approve(form)).await;
        assert_eq!(outcome, Outcome::Failed);
        assert!(out.ends_with("Error: transaction reverted\n"), "{out}");
    }

    #[test]
    fn ignores_foreign_logs() {
        let event = Bindings::OrderCreated {
            orderId: U256::from(1),
            maker: Bindings::Party {
                account: B256::ZERO,
                token: TOKEN,
                amount: U256::ZERO,
            },
            taker: Bindings::Party {
                account: B256::ZERO,
                token: TOKEN,
                amount: U256::ZERO,
            },
        };
        let logs = vec![
            Log {
                address: TOKEN,
                data: event.encode_log_data(),
            },
            Log {
                address: CONTRACT,
                data: event.encode_log_data(),
            },
        ];
        assert_eq!(created_orders(CONTRACT, &logs), vec![U256::from(1)]);
    }
}
