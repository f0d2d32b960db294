use std::time::Duration;

use log::{debug, error, warn};
use reqwest::header::CONNECTION;
use reqwest::{Client, StatusCode};

use crate::domain::ledger::PaymentLedger;
use crate::domain::outcome::DispatchOutcome;
use crate::domain::payment::{DispatchRequest, LedgerEntry, PaymentIntent};
use crate::domain::processor::ProcessorKind;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct DispatchPaymentUseCase<L: PaymentLedger> {
	ledger:       L,
	http_client:  Client,
	default_url:  String,
	fallback_url: String,
}

impl<L: PaymentLedger> DispatchPaymentUseCase<L> {
	pub fn new(
		ledger: L,
		http_client: Client,
		default_url: String,
		fallback_url: String,
	) -> Self {
		Self {
			ledger,
			http_client,
			default_url,
			fallback_url,
		}
	}

	pub async fn execute(
		&self,
		intent: &PaymentIntent,
		processor: ProcessorKind,
	) -> DispatchOutcome {
		// Stamped per attempt: the processor must see the actual
		// submission time, not the time of the first try.
		let request = DispatchRequest::stamped(intent);

		let response = self
			.http_client
			.post(format!("{}/payments", self.processor_url(processor)))
			.header(CONNECTION, "keep-alive")
			.timeout(REQUEST_TIMEOUT)
			.json(&request)
			.send()
			.await;

		let response = match response {
			Ok(response) => response,
			Err(e) => {
				warn!(
					"Failed to send payment {} to {processor}: {e}",
					intent.correlation_id
				);
				return DispatchOutcome::Transient;
			}
		};

		let status = response.status();
		if status.is_success() {
			let entry = LedgerEntry::from_dispatch(&request, processor);
			if let Err(e) = self.ledger.record(entry).await {
				// The processor accepted this payment; the retry this
				// triggers resolves upstream as a duplicate.
				error!(
					"Failed to record payment {}: {e}",
					intent.correlation_id
				);
				return DispatchOutcome::Transient;
			}

			return DispatchOutcome::Success;
		}

		debug!(
			"Processor {processor} returned {status} for {}",
			intent.correlation_id
		);
		classify_rejection(status)
	}

	fn processor_url(&self, processor: ProcessorKind) -> &str {
		match processor {
			ProcessorKind::Default => &self.default_url,
			ProcessorKind::Fallback => &self.fallback_url,
		}
	}
}

fn classify_rejection(status: StatusCode) -> DispatchOutcome {
	if status == StatusCode::REQUEST_TIMEOUT
		|| status == StatusCode::TOO_MANY_REQUESTS
		|| status.is_server_error()
	{
		return DispatchOutcome::Transient;
	}

	if status.is_client_error() {
		return DispatchOutcome::Invalid;
	}

	DispatchOutcome::Transient
}
