use chrono::{DateTime, Utc};

use crate::domain::ledger::{LedgerSummary, PaymentLedger, ProcessorTotals};
use crate::use_cases::dto::{
	GetPaymentSummaryQuery, PaymentsSummaryResponse, ProcessorSummary,
};

#[derive(Clone)]
pub struct GetPaymentSummaryUseCase<L: PaymentLedger> {
	ledger: L,
}

impl<L: PaymentLedger> GetPaymentSummaryUseCase<L> {
	pub fn new(ledger: L) -> Self {
		Self { ledger }
	}

	pub async fn execute(
		&self,
		query: GetPaymentSummaryQuery,
	) -> Result<PaymentsSummaryResponse, Box<dyn std::error::Error + Send>> {
		// A missing or unparseable bound disables filtering entirely.
		let window = match (parse_bound(query.from), parse_bound(query.to)) {
			(Some(from), Some(to)) => Some((from, to)),
			_ => None,
		};

		let summary = self.ledger.summary(window).await?;

		Ok(PaymentsSummaryResponse::from(summary))
	}
}

fn parse_bound(bound: Option<String>) -> Option<DateTime<Utc>> {
	bound.and_then(|raw| {
		DateTime::parse_from_rfc3339(&raw)
			.map(|parsed| parsed.with_timezone(&Utc))
			.ok()
	})
}

impl From<LedgerSummary> for PaymentsSummaryResponse {
	fn from(summary: LedgerSummary) -> Self {
		Self {
			default:  ProcessorSummary::from(summary.default),
			fallback: ProcessorSummary::from(summary.fallback),
		}
	}
}

impl From<ProcessorTotals> for ProcessorSummary {
	fn from(totals: ProcessorTotals) -> Self {
		Self {
			total_requests: totals.total_requests,
			total_amount:   round_to_cents(totals.total_amount),
		}
	}
}

// Half-away-from-zero at two decimals, which is what `f64::round` does
// once scaled to cents.
fn round_to_cents(amount: f64) -> f64 {
	(amount * 100.0).round() / 100.0
}
