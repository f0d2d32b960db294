use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::payment::LedgerEntry;
use crate::domain::processor::ProcessorKind;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProcessorTotals {
	pub total_requests: usize,
	pub total_amount:   f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerSummary {
	pub default:  ProcessorTotals,
	pub fallback: ProcessorTotals,
}

impl LedgerSummary {
	pub fn accumulate(&mut self, entry: &LedgerEntry) {
		let totals = match entry.processor {
			ProcessorKind::Default => &mut self.default,
			ProcessorKind::Fallback => &mut self.fallback,
		};
		totals.total_requests += 1;
		totals.total_amount += entry.amount;
	}
}

/// Durable record of accepted payments, keyed by correlation ID. A second
/// write for the same ID overwrites; the processors reject duplicates, so
/// that only happens when re-recording an identical entry.
#[async_trait]
pub trait PaymentLedger: Send + Sync + 'static {
	async fn record(
		&self,
		entry: LedgerEntry,
	) -> Result<(), Box<dyn std::error::Error + Send>>;

	async fn summary(
		&self,
		window: Option<(DateTime<Utc>, DateTime<Utc>)>,
	) -> Result<LedgerSummary, Box<dyn std::error::Error + Send>>;

	async fn purge(&self) -> Result<(), Box<dyn std::error::Error + Send>>;
}
