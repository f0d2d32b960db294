use async_trait::async_trait;
use serde::Deserialize;

/// Where a retried payment re-enters the queue. Head-reinsertion keeps
/// retries ahead of fresh work; tail-reinsertion delays them behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequeuePosition {
	Head,
	Tail,
}

/// Shared FIFO of serialised payment intents. Items are opaque bytes:
/// ingress enqueues request bodies untouched and dispatchers decode them.
/// Pops are at-most-once; correlation IDs keep the processors idempotent.
#[async_trait]
pub trait PaymentQueue: Send + Sync + 'static {
	async fn push_back(
		&self,
		item: Vec<u8>,
	) -> Result<(), Box<dyn std::error::Error + Send>>;

	/// Waits for roughly a second before reporting the queue empty.
	async fn pop(
		&self,
	) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send>>;

	async fn requeue(
		&self,
		item: Vec<u8>,
	) -> Result<(), Box<dyn std::error::Error + Send>>;

	async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send>>;

	async fn depth(&self) -> Result<u64, Box<dyn std::error::Error + Send>>;
}
