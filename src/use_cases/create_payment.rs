use derive_more::derive::{Display, Error};
use log::error;

use crate::domain::payment::PaymentIntent;
use crate::domain::queue::PaymentQueue;

#[derive(Debug, Display, Error)]
pub enum CreatePaymentError {
	#[display("Request body is not a valid payment intent.")]
	InvalidBody,
	#[display("Could not enqueue the payment.")]
	QueueUnavailable,
}

#[derive(Clone)]
pub struct CreatePaymentUseCase<Q: PaymentQueue> {
	payment_queue: Q,
}

impl<Q: PaymentQueue> CreatePaymentUseCase<Q> {
	pub fn new(payment_queue: Q) -> Self {
		Self { payment_queue }
	}

	/// Validates that the body decodes as a payment intent, then enqueues
	/// the raw bytes without re-encoding them.
	pub async fn execute(&self, raw: &[u8]) -> Result<(), CreatePaymentError> {
		if serde_json::from_slice::<PaymentIntent>(raw).is_err() {
			return Err(CreatePaymentError::InvalidBody);
		}

		self.payment_queue.push_back(raw.to_vec()).await.map_err(|e| {
			error!("Failed to enqueue payment: {e}");
			CreatePaymentError::QueueUnavailable
		})
	}
}
