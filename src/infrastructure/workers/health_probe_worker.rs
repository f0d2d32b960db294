use std::time::Duration;

use log::debug;
use redis::AsyncCommands;
use reqwest::Client;
use tokio::time::sleep;

use crate::domain::processor::{HealthSnapshot, ProcessorKind};
use crate::infrastructure::config::redis::health_check_key;

// The processors rate-limit their health endpoint to one call per 5 s, so
// one process probes and everyone else reads the snapshot from Redis.
pub const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(5);
const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

pub async fn health_probe_worker(
	redis_client: redis::Client,
	http_client: Client,
	kind: ProcessorKind,
	processor_url: String,
) {
	let health_url = format!("{processor_url}/payments/service-health");
	let key = health_check_key(kind);

	loop {
		sleep(HEALTH_CHECK_INTERVAL).await;

		// A failed probe keeps the previous snapshot in place.
		let snapshot = match probe(&http_client, &health_url).await {
			Ok(snapshot) => snapshot,
			Err(e) => {
				debug!("Health probe for {kind} failed: {e}");
				continue;
			}
		};

		if let Err(e) = store(&redis_client, key, snapshot).await {
			debug!("Failed to store health snapshot for {kind}: {e}");
		}
	}
}

async fn probe(
	client: &Client,
	url: &str,
) -> Result<HealthSnapshot, reqwest::Error> {
	client
		.get(url)
		.timeout(PROBE_TIMEOUT)
		.send()
		.await?
		.error_for_status()?
		.json::<HealthSnapshot>()
		.await
}

async fn store(
	client: &redis::Client,
	key: &str,
	snapshot: HealthSnapshot,
) -> Result<(), Box<dyn std::error::Error + Send>> {
	let mut con = client
		.get_multiplexed_async_connection()
		.await
		.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

	let raw = serde_json::to_string(&snapshot)
		.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

	let _: () = con
		.set(key, raw)
		.await
		.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

	Ok(())
}
