use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::domain::queue::{PaymentQueue, RequeuePosition};
use crate::infrastructure::config::redis::PAYMENTS_QUEUE_KEY;

const POP_TIMEOUT_SECS: f64 = 1.0;

#[derive(Clone)]
pub struct RedisPaymentQueue {
	client:           Client,
	requeue_position: RequeuePosition,
}

impl RedisPaymentQueue {
	pub fn new(client: Client, requeue_position: RequeuePosition) -> Self {
		Self {
			client,
			requeue_position,
		}
	}
}

#[async_trait]
impl PaymentQueue for RedisPaymentQueue {
	async fn push_back(
		&self,
		item: Vec<u8>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = con
			.rpush(PAYMENTS_QUEUE_KEY, item)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}

	async fn pop(
		&self,
	) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let popped: Option<(String, Vec<u8>)> = con
			.blpop(PAYMENTS_QUEUE_KEY, POP_TIMEOUT_SECS)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(popped.map(|(_queue_name, item)| item))
	}

	async fn requeue(
		&self,
		item: Vec<u8>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = match self.requeue_position {
			RequeuePosition::Head => {
				con.lpush(PAYMENTS_QUEUE_KEY, item).await
			}
			RequeuePosition::Tail => {
				con.rpush(PAYMENTS_QUEUE_KEY, item).await
			}
		}
		.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}

	async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = con
			.del(PAYMENTS_QUEUE_KEY)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}

	async fn depth(&self) -> Result<u64, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		con.llen(PAYMENTS_QUEUE_KEY)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)
	}
}
