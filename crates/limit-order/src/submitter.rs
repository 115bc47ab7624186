//! Tracks the lifecycle of submitted transactions.
//!
//! A submission is simulated and sent up front. Afterwards a background task
//! waits for the receipt and publishes the outcome on a watch channel, so
//! callers observe the transaction instead of blocking on it. Dropping the
//! handle only stops observing, the transaction itself cannot be withdrawn.

use {
    crate::{
        call::{PreparedCall, Receipt},
        traits::LimitOrderApi,
    },
    alloy::primitives::TxHash,
    std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    tokio::sync::watch,
    tracing::Instrument,
};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("another transaction is still pending")]
    AlreadyPending,
    #[error(transparent)]
    Call(#[from] anyhow::Error),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TxStatus {
    Pending { hash: TxHash },
    Succeeded { receipt: Receipt },
    Failed { hash: TxHash, message: String },
}

impl TxStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

/// Handle of a sent transaction.
#[derive(Debug)]
pub struct TxHandle {
    hash: TxHash,
    status: watch::Receiver<TxStatus>,
}

impl TxHandle {
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// Status updates, starting with `Pending`.
    pub fn status(&self) -> watch::Receiver<TxStatus> {
        self.status.clone()
    }

    /// Waits for the transaction to leave the pending state.
    pub async fn wait(mut self) -> TxStatus {
        match self.status.wait_for(|status| !status.is_pending()).await {
            Ok(status) => status.clone(),
            // The watcher task only exits after publishing a final status,
            // so a closed channel can only mean it panicked.
            Err(_) => TxStatus::Failed {
                hash: self.hash,
                message: "stopped watching transaction".to_string(),
            },
        }
    }
}

/// Submits prepared calls. At most one transaction is pending at a time,
/// further submissions are rejected until it resolves.
#[derive(Clone)]
pub struct Submitter {
    api: Arc<dyn LimitOrderApi>,
    in_flight: Arc<AtomicBool>,
}

impl Submitter {
    pub fn new(api: Arc<dyn LimitOrderApi>) -> Self {
        Self {
            api,
            in_flight: Default::default(),
        }
    }

    /// Whether submitting is currently disabled because a transaction is
    /// pending.
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, call: PreparedCall) -> Result<TxHandle, SubmitError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SubmitError::AlreadyPending);
        }
        let in_flight = scopeguard::guard(self.in_flight.clone(), |flag| {
            flag.store(false, Ordering::SeqCst);
        });

        let function = call.function();
        let hash = match self.api.submit(call).await {
            Ok(hash) => hash,
            Err(err) => {
                tracing::warn!(function, ?err, "failed to submit transaction");
                return Err(err.into());
            }
        };
        tracing::info!(function, ?hash, "submitted transaction");

        let (sender, receiver) = watch::channel(TxStatus::Pending { hash });
        let api = self.api.clone();
        let watch_receipt = async move {
            let status = match api.wait_for_receipt(hash).await {
                Ok(receipt) if receipt.success => TxStatus::Succeeded { receipt },
                Ok(_) => TxStatus::Failed {
                    hash,
                    message: "transaction reverted".to_string(),
                },
                Err(err) => TxStatus::Failed {
                    hash,
                    message: format!("{err:#}"),
                },
            };
            tracing::info!(?status, "transaction resolved");
            // Re-enable submissions before anyone observes the final status.
            drop(in_flight);
            let _ = sender.send(status);
        };
        tokio::spawn(watch_receipt.instrument(tracing::info_span!("tx", ?hash)));

        Ok(TxHandle {
            hash,
            status: receiver,
        })
    }
}
