//! Continuous observation of contract reads.
//!
//! An [`Observer`] owns a background task that repeats its read whenever the
//! watched argument changes or a new block shows up, because any block may
//! have changed the contract state. Consumers see the latest value through a
//! watch channel which is only written when the value actually changed.

use {
    anyhow::Result,
    ethrpc::current_block::CurrentBlockWatcher,
    std::future::Future,
    tokio::sync::watch,
    tracing::Instrument,
};

pub struct Observer<A, T> {
    argument: watch::Sender<Option<A>>,
    value: watch::Receiver<Option<T>>,
}

impl<A, T> Observer<A, T>
where
    A: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Starts observing. `read` is called with the current argument, an
    /// absent argument publishes `None` without reading anything.
    ///
    /// Failed reads are logged and keep the previously published value as
    /// long as the argument did not change in between.
    pub fn spawn<F, Fut>(
        name: &'static str,
        argument: Option<A>,
        mut blocks: CurrentBlockWatcher,
        read: F,
    ) -> Self
    where
        F: Fn(A) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let (argument_sender, mut argument_receiver) = watch::channel(argument);
        let (value_sender, value_receiver) = watch::channel(None);

        let task = async move {
            // Argument the currently published value was read for.
            let mut published_for: Option<A> = None;
            loop {
                let argument = argument_receiver.borrow_and_update().clone();
                blocks.borrow_and_update();

                let value = match argument.clone() {
                    None => Some(None),
                    Some(current) => match read(current).await {
                        Ok(value) => Some(Some(value)),
                        Err(err) => {
                            tracing::warn!(?err, "read failed");
                            (published_for != argument).then_some(None)
                        }
                    },
                };
                if let Some(value) = value {
                    published_for = argument;
                    value_sender.send_if_modified(|current| {
                        if *current == value {
                            return false;
                        }
                        *current = value;
                        true
                    });
                }

                tokio::select! {
                    changed = argument_receiver.changed() => if changed.is_err() {
                        break;
                    },
                    changed = blocks.changed() => if changed.is_err() {
                        break;
                    },
                    _ = value_sender.closed() => break,
                }
            }
            tracing::debug!("stopped observing");
        };
        tokio::spawn(task.instrument(tracing::info_span!("observer", name)));

        Self {
            argument: argument_sender,
            value: value_receiver,
        }
    }

    /// Replaces the watched argument. Setting the same argument again does not
    /// trigger a read.
    pub fn set_argument(&self, argument: Option<A>) {
        self.argument.send_if_modified(|current| {
            if *current == argument {
                return false;
            }
            *current = argument;
            true
        });
    }

    /// Latest published value.
    pub fn latest(&self) -> Option<T> {
        self.value.borrow().clone()
    }

    /// Receiver of all value changes. Observing stops once the observer is
    /// dropped.
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.value.clone()
    }
}
