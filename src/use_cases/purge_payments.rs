use derive_more::derive::{Display, Error};
use log::error;
use reqwest::{Client, StatusCode};

use crate::domain::ledger::PaymentLedger;
use crate::domain::queue::PaymentQueue;

pub const ADMIN_TOKEN_HEADER: &str = "X-Rinha-Token";

#[derive(Debug, Display, Error)]
pub enum PurgePaymentsError {
	#[display("Could not clear the stored payments.")]
	Storage,
	#[display("An upstream processor rejected the purge.")]
	Upstream,
}

#[derive(Clone)]
pub struct PurgePaymentsUseCase<L: PaymentLedger, Q: PaymentQueue> {
	ledger:       L,
	queue:        Q,
	http_client:  Client,
	default_url:  String,
	fallback_url: String,
	admin_token:  String,
}

impl<L: PaymentLedger, Q: PaymentQueue> PurgePaymentsUseCase<L, Q> {
	pub fn new(
		ledger: L,
		queue: Q,
		http_client: Client,
		default_url: String,
		fallback_url: String,
		admin_token: String,
	) -> Self {
		Self {
			ledger,
			queue,
			http_client,
			default_url,
			fallback_url,
			admin_token,
		}
	}

	/// Drops the ledger and the queue, then forwards the purge to both
	/// processors. The caller's token is used when present; the configured
	/// admin token otherwise.
	pub async fn execute(
		&self,
		token: Option<&str>,
	) -> Result<(), PurgePaymentsError> {
		self.ledger.purge().await.map_err(|e| {
			error!("Failed to purge the payments ledger: {e}");
			PurgePaymentsError::Storage
		})?;

		self.queue.clear().await.map_err(|e| {
			error!("Failed to clear the payments queue: {e}");
			PurgePaymentsError::Storage
		})?;

		let token = token.unwrap_or(&self.admin_token);
		self.purge_upstream(&self.default_url, token).await?;
		self.purge_upstream(&self.fallback_url, token).await?;

		Ok(())
	}

	async fn purge_upstream(
		&self,
		url: &str,
		token: &str,
	) -> Result<(), PurgePaymentsError> {
		let response = self
			.http_client
			.post(format!("{url}/admin/purge-payments"))
			.header(ADMIN_TOKEN_HEADER, token)
			.send()
			.await
			.map_err(|e| {
				error!("Failed to purge {url}: {e}");
				PurgePaymentsError::Upstream
			})?;

		if response.status() != StatusCode::OK {
			error!("Purge on {url} returned {}", response.status());
			return Err(PurgePaymentsError::Upstream);
		}

		Ok(())
	}
}
