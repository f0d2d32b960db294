use log::debug;
use redis::AsyncCommands;
use tokio::time::sleep;

use crate::domain::processor::{HealthSnapshot, ProcessorKind};
use crate::infrastructure::config::redis::health_check_key;
use crate::infrastructure::routing::health_aware_router::HealthAwareRouter;
use crate::infrastructure::workers::health_probe_worker::HEALTH_CHECK_INTERVAL;

/// Mirrors the snapshot under a processor's `health-check:*` key into the
/// router's local slot, so routing decisions never touch Redis.
pub async fn health_sync_worker(
	redis_client: redis::Client,
	router: HealthAwareRouter,
	kind: ProcessorKind,
) {
	let key = health_check_key(kind);

	loop {
		sleep(HEALTH_CHECK_INTERVAL).await;

		match fetch(&redis_client, key).await {
			Ok(Some(snapshot)) => router.publish(kind, snapshot),
			// No probe result published yet; keep the current slot value.
			Ok(None) => {}
			Err(e) => {
				debug!("Failed to sync health snapshot for {kind}: {e}");
			}
		}
	}
}

async fn fetch(
	client: &redis::Client,
	key: &str,
) -> Result<Option<HealthSnapshot>, Box<dyn std::error::Error + Send>> {
	let mut con = client
		.get_multiplexed_async_connection()
		.await
		.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

	let raw: Option<String> = con
		.get(key)
		.await
		.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

	match raw {
		Some(raw) => serde_json::from_str(&raw)
			.map(Some)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>),
		None => Ok(None),
	}
}
