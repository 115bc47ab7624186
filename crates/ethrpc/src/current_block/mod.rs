use {
    crate::AlloyProvider,
    alloy::{
        eips::{BlockId, BlockNumberOrTag},
        primitives::B256,
        providers::Provider,
        rpc::types::Header,
    },
    anyhow::{Context as _, Result},
    std::{fmt::Debug, sync::Arc, time::Duration},
    tokio::sync::watch,
    tracing::Instrument,
};

/// Block information.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BlockInfo {
    pub number: u64,
    pub hash: B256,
    pub parent_hash: B256,
    pub timestamp: u64,
}

impl From<Header> for BlockInfo {
    fn from(value: Header) -> Self {
        Self {
            number: value.number,
            hash: value.hash,
            parent_hash: value.parent_hash,
            timestamp: value.timestamp,
        }
    }
}

pub type CurrentBlockWatcher = watch::Receiver<BlockInfo>;

/// Creates a cloneable stream that yields the current block whenever it
/// changes.
///
/// The stream is not guaranteed to yield *every* block individually without
/// gaps but it does yield the newest block whenever it detects a block number
/// increase. In practice this means that if the node changes the current block
/// in quick succession we might only observe the last block, skipping some
/// blocks in between.
///
/// The stream is cloneable so that we only have to poll the node once while
/// being able to share the result with several consumers.
pub async fn current_block_stream(
    retriever: Arc<dyn BlockRetrieving>,
    poll_interval: Duration,
) -> Result<CurrentBlockWatcher> {
    let first_block = retriever.current_block().await?;
    tracing::debug!(number=%first_block.number, hash=?first_block.hash, "polled block");

    let (sender, receiver) = watch::channel(first_block);
    let update_future = async move {
        let mut previous_block = first_block;
        loop {
            tokio::time::sleep(poll_interval).await;
            let block = match retriever.current_block().await {
                Ok(block) => block,
                Err(err) => {
                    tracing::warn!(?err, "failed to get current block");
                    continue;
                }
            };

            // If the block is exactly the same, ignore it.
            if previous_block.hash == block.hash {
                continue;
            }

            tracing::debug!(number=%block.number, hash=?block.hash, "polled block");

            // Only update the stream if the number has increased.
            if block.number <= previous_block.number {
                continue;
            }

            if sender.send(block).is_err() {
                tracing::debug!("exiting polling loop");
                break;
            }

            previous_block = block;
        }
    };

    tokio::task::spawn(update_future.instrument(tracing::info_span!("current_block_stream")));
    Ok(receiver)
}

/// Trait for abstracting the retrieval of the latest block.
#[async_trait::async_trait]
pub trait BlockRetrieving: Debug + Send + Sync + 'static {
    async fn current_block(&self) -> Result<BlockInfo>;
}

#[async_trait::async_trait]
impl BlockRetrieving for AlloyProvider {
    async fn current_block(&self) -> Result<BlockInfo> {
        let block = self
            .get_block(BlockId::Number(BlockNumberOrTag::Latest))
            .await
            .context("failed to fetch latest block")?
            .context("latest block not found")?;
        Ok(block.header.into())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::Mutex, tokio::time::timeout};

    /// Hands out a scripted sequence of blocks, repeating the last one.
    #[derive(Debug)]
    struct ScriptedBlocks(Mutex<Vec<Result<BlockInfo, String>>>);

    impl ScriptedBlocks {
        fn new(blocks: Vec<Result<BlockInfo, String>>) -> Arc<Self> {
            let mut blocks = blocks;
            blocks.reverse();
            Arc::new(Self(Mutex::new(blocks)))
        }
    }

    #[async_trait::async_trait]
    impl BlockRetrieving for ScriptedBlocks {
        async fn current_block(&self) -> Result<BlockInfo> {
            let mut blocks = self.0.lock().unwrap();
            let next = if blocks.len() > 1 {
                blocks.pop().unwrap()
            } else {
                blocks.last().cloned().unwrap()
            };
            next.map_err(anyhow::Error::msg)
        }
    }

    fn block(number: u64) -> BlockInfo {
        BlockInfo {
            number,
            hash: B256::with_last_byte(number as u8),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn yields_only_increasing_blocks() {
        let retriever = ScriptedBlocks::new(vec![
            Ok(block(1)),
            Ok(block(1)),
            Err("node hiccup".to_string()),
            Ok(block(3)),
            // reorg to an older block gets ignored
            Ok(block(2)),
            Ok(block(4)),
        ]);
        let mut receiver = current_block_stream(retriever, Duration::from_secs(1))
            .await
            .unwrap();

        let mut seen = vec![receiver.borrow_and_update().number];
        for _ in 0..2 {
            timeout(Duration::from_secs(30), receiver.changed())
                .await
                .unwrap()
                .unwrap();
            seen.push(receiver.borrow_and_update().number);
        }
        assert_eq!(seen, vec![1, 3, 4]);

        // Repeating the last block publishes nothing new.
        let changed = timeout(Duration::from_secs(30), receiver.changed()).await;
        assert!(changed.is_err());
    }

    #[tokio::test]
    #[ignore]
    async fn node_blocks() {
        observe::tracing::initialize_reentrant("ethrpc=debug");
        let node: url::Url = std::env::var("NODE_URL").unwrap().parse().unwrap();
        let provider = crate::alloy::provider(&node, "test");
        let mut receiver = current_block_stream(Arc::new(provider), Duration::from_secs(1))
            .await
            .unwrap();
        for _ in 0..3 {
            receiver.changed().await.unwrap();
            println!("new block number {}", receiver.borrow_and_update().number);
        }
    }
}
