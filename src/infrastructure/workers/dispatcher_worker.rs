use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::time::sleep;

use crate::domain::ledger::PaymentLedger;
use crate::domain::outcome::DispatchOutcome;
use crate::domain::payment::PaymentIntent;
use crate::domain::queue::PaymentQueue;
use crate::domain::router::PaymentRouter;
use crate::infrastructure::workers::health_probe_worker::HEALTH_CHECK_INTERVAL;
use crate::use_cases::dispatch_payment::DispatchPaymentUseCase;

const QUEUE_ERROR_BACKOFF: Duration = Duration::from_secs(1);
const REQUEUE_BACKOFF: Duration = Duration::from_millis(10);

/// One of W identical competing consumers: pop, route, send, classify.
/// Only a transient outcome puts the item back; the raw bytes travel
/// untouched so every retry re-stamps `requestedAt` from the same intent.
pub async fn payment_dispatch_worker<Q, L, R>(
	queue: Q,
	dispatch_payment_use_case: DispatchPaymentUseCase<L>,
	router: R,
) where
	Q: PaymentQueue + Clone,
	L: PaymentLedger + Clone,
	R: PaymentRouter + Clone,
{
	loop {
		let raw = match queue.pop().await {
			Ok(Some(raw)) => raw,
			// The pop already waited for its timeout on an empty queue.
			Ok(None) => continue,
			Err(e) => {
				error!("Failed to pop from the payments queue: {e}");
				sleep(QUEUE_ERROR_BACKOFF).await;
				continue;
			}
		};

		let intent: PaymentIntent = match serde_json::from_slice(&raw) {
			Ok(intent) => intent,
			Err(e) => {
				warn!("Dropping undecodable queue item: {e}");
				continue;
			}
		};

		let Some(processor) = router.pick_processor() else {
			// Neither upstream is worth a call; park the item instead of
			// burning an attempt on a known-down pair.
			requeue_after_backoff(&queue, raw).await;
			continue;
		};

		match dispatch_payment_use_case.execute(&intent, processor).await {
			DispatchOutcome::Success => {
				debug!(
					"Payment {} accepted by {processor}",
					intent.correlation_id
				);
			}
			DispatchOutcome::Invalid => {
				warn!(
					"Payment {} rejected as invalid. Dropping it.",
					intent.correlation_id
				);
			}
			DispatchOutcome::Transient => {
				requeue_after_backoff(&queue, raw).await;
			}
		}
	}
}

async fn requeue_after_backoff<Q: PaymentQueue>(queue: &Q, raw: Vec<u8>) {
	sleep(REQUEUE_BACKOFF).await;

	if let Err(e) = queue.requeue(raw).await {
		error!("Failed to re-queue payment: {e}");
	}
}

pub async fn queue_depth_monitor<Q: PaymentQueue>(queue: Q) {
	loop {
		sleep(HEALTH_CHECK_INTERVAL).await;

		match queue.depth().await {
			Ok(depth) => info!("Payments queue depth: {depth}"),
			Err(e) => error!("Failed to read the queue depth: {e}"),
		}
	}
}
