use {
    crate::{
        call::{PreparedCall, Receipt},
        traits::{Fees, LimitOrderApi},
    },
    alloy::{
        primitives::{Address, B256, TxHash, U256},
        providers::{PendingTransactionBuilder, Provider},
        rpc::types::TransactionRequest,
        sol_types::SolCall,
    },
    anyhow::{Context, Result, anyhow, ensure},
    contracts::alloy::{
        CCIPLimitOrder::{self, CCIPLimitOrder as Bindings},
        ERC20,
    },
    ethrpc::{
        Web3,
        alloy::errors::{ContractErrorExt, describe},
    },
    model::{Order, Party},
};

/// [`LimitOrderApi`] backed by a node.
pub struct OnchainLimitOrder {
    web3: Web3,
    contract: CCIPLimitOrder::Instance,
}

impl OnchainLimitOrder {
    pub fn new(web3: Web3, address: Address) -> Self {
        let contract = CCIPLimitOrder::Instance::new(address, web3.provider.clone());
        Self { web3, contract }
    }

    fn erc20(&self, token: Address) -> ERC20::Instance {
        ERC20::Instance::new(token, self.web3.provider.clone())
    }
}

#[async_trait::async_trait]
impl LimitOrderApi for OnchainLimitOrder {
    fn address(&self) -> Address {
        *self.contract.address()
    }

    fn account(&self) -> Option<Address> {
        self.web3.account
    }

    async fn chain_id(&self) -> Result<u64> {
        self.web3
            .provider
            .get_chain_id()
            .await
            .context("failed to fetch chain id")
    }

    async fn current_chain_selector(&self) -> Result<u64> {
        self.contract
            .currentChainSelector()
            .call()
            .await
            .context("currentChainSelector")
    }

    async fn fees(&self) -> Result<Fees> {
        let maker = self.contract.getMakerFee().call().await.context("getMakerFee")?;
        let taker = self.contract.getTakerFee().call().await.context("getTakerFee")?;
        let max = self.contract.MAX_FEE().call().await.context("MAX_FEE")?;
        Ok(Fees {
            maker: U256::from(maker),
            taker: U256::from(taker),
            max,
        })
    }

    async fn get_balance(&self, account: B256, token: Address) -> Result<U256> {
        self.contract
            .getBalance(account, token)
            .call()
            .await
            .context("getBalance")
    }

    async fn get_order(&self, order_id: U256) -> Result<Order> {
        let order = self
            .contract
            .getOrder(order_id)
            .call()
            .await
            .context("getOrder")?;
        Ok(Order {
            state: order.state,
            maker: from_party(order.maker),
            taker: from_party(order.taker),
        })
    }

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        self.erc20(token)
            .allowance(owner, spender)
            .call()
            .await
            .context("allowance")
    }

    async fn submit(&self, call: PreparedCall) -> Result<TxHash> {
        let from = self.web3.account.context("no account connected")?;
        ensure!(
            self.web3.can_sign,
            "account {from} is read-only, a private key is needed to send transactions"
        );
        let tx = TransactionRequest::default()
            .from(from)
            .to(call.target(self.address()))
            .value(call.value())
            .input(calldata(&call).into());

        // Simulate first so reverts come back with their reason instead of a
        // failed gas estimation.
        self.web3
            .provider
            .call(tx.clone())
            .await
            .map_err(|err| call_error(err.into()))?;
        let pending = self
            .web3
            .provider
            .send_transaction(tx)
            .await
            .map_err(|err| call_error(err.into()))?;
        tracing::debug!(function = call.function(), hash = ?pending.tx_hash(), "sent transaction");
        Ok(*pending.tx_hash())
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> Result<Receipt> {
        let receipt = PendingTransactionBuilder::new(self.web3.provider.root().clone(), hash)
            .get_receipt()
            .await
            .context("failed to fetch transaction receipt")?;
        Ok(Receipt {
            hash: receipt.transaction_hash,
            block: receipt.block_number,
            success: receipt.status(),
            logs: receipt
                .inner
                .logs()
                .iter()
                .map(|log| log.inner.clone())
                .collect(),
        })
    }
}

fn call_error(err: alloy::contract::Error) -> anyhow::Error {
    if err.is_node_error() {
        tracing::debug!(?err, "node rejected call");
    }
    anyhow!(describe::<Bindings::CCIPLimitOrderErrors>(&err))
}

fn to_party(party: &Party) -> Bindings::Party {
    Bindings::Party {
        account: party.account,
        token: party.token,
        amount: party.amount,
    }
}

fn from_party(party: Bindings::Party) -> Party {
    Party {
        account: party.account,
        token: party.token,
        amount: party.amount,
    }
}

/// ABI encoded input of the transaction carrying `call`.
fn calldata(call: &PreparedCall) -> Vec<u8> {
    match call {
        PreparedCall::CreateOrder { maker, taker } => Bindings::createOrderCall {
            maker: to_party(maker),
            taker: to_party(taker),
        }
        .abi_encode(),
        PreparedCall::CancelOrder { order_id } => Bindings::cancelOrderCall {
            orderId: *order_id,
        }
        .abi_encode(),
        PreparedCall::FillOrder {
            chain_selector,
            order_id,
            token,
            amount,
            fee,
            ..
        } => Bindings::fillOrderCall {
            chainSelector: *chain_selector,
            orderId: *order_id,
            token: *token,
            amount: *amount,
            feeToken: fee.fee_token,
            maxFee: fee.max_fee,
            gasLimit: fee.gas_limit,
        }
        .abi_encode(),
        PreparedCall::SendTokens {
            chain_selector,
            account,
            tokens,
            fee,
            ..
        } => Bindings::sendTokensCall {
            chainSelector: *chain_selector,
            account: *account,
            tokenAmounts: tokens
                .iter()
                .map(|token| Bindings::EVMTokenAmount {
                    token: token.token,
                    amount: token.amount,
                })
                .collect(),
            feeToken: fee.fee_token,
            maxFee: fee.max_fee,
            gasLimit: fee.gas_limit,
        }
        .abi_encode(),
        PreparedCall::Approve {
            spender, amount, ..
        } => ERC20::ERC20::approveCall {
            spender: *spender,
            amount: *amount,
        }
        .abi_encode(),
    }
}
