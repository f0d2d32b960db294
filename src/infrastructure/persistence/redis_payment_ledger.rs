use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use redis::{AsyncCommands, Client};

use crate::domain::ledger::{LedgerSummary, PaymentLedger};
use crate::domain::payment::LedgerEntry;
use crate::infrastructure::config::redis::PAYMENTS_LEDGER_KEY;

/// One hash holds the whole ledger: field = correlation ID, value = the
/// JSON entry. Keyed writes give per-payment isolation without locks.
#[derive(Clone)]
pub struct RedisPaymentLedger {
	client: Client,
}

impl RedisPaymentLedger {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl PaymentLedger for RedisPaymentLedger {
	async fn record(
		&self,
		entry: LedgerEntry,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let value = serde_json::to_string(&entry)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = con
			.hset(
				PAYMENTS_LEDGER_KEY,
				entry.correlation_id.to_string(),
				value,
			)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}

	async fn summary(
		&self,
		window: Option<(DateTime<Utc>, DateTime<Utc>)>,
	) -> Result<LedgerSummary, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let values: Vec<String> = con
			.hvals(PAYMENTS_LEDGER_KEY)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let mut summary = LedgerSummary::default();
		for value in values {
			let entry: LedgerEntry = match serde_json::from_str(&value) {
				Ok(entry) => entry,
				Err(e) => {
					warn!("Skipping undecodable ledger entry: {e}");
					continue;
				}
			};

			if entry.within(window) {
				summary.accumulate(&entry);
			}
		}

		Ok(summary)
	}

	async fn purge(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = con
			.del(PAYMENTS_LEDGER_KEY)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}
}
