use std::time::Duration;

use tokio::time::{Instant, sleep};

pub mod memory;
pub mod mock_processor;
pub mod redis_container;

/// Polls `condition` until it holds or `timeout` elapses.
#[allow(dead_code)]
pub async fn wait_until<F>(condition: F, timeout: Duration) -> bool
where
	F: Fn() -> bool,
{
	let deadline = Instant::now() + timeout;
	while Instant::now() < deadline {
		if condition() {
			return true;
		}
		sleep(Duration::from_millis(20)).await;
	}
	condition()
}
