use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{debug, warn};

use crate::adapters::web::errors::ApiError;
use crate::infrastructure::queue::redis_payment_queue::RedisPaymentQueue;
use crate::use_cases::create_payment::{
	CreatePaymentError, CreatePaymentUseCase,
};

#[post("/payments")]
pub async fn payments(
	body: web::Bytes,
	create_payment_use_case: web::Data<
		CreatePaymentUseCase<RedisPaymentQueue>,
	>,
) -> impl Responder {
	match create_payment_use_case.execute(&body).await {
		Ok(()) => HttpResponse::Accepted().finish(),
		Err(CreatePaymentError::InvalidBody) => {
			debug!("Rejecting malformed payment body");
			ApiError::BadClientDataError.error_response()
		}
		Err(e @ CreatePaymentError::QueueUnavailable) => {
			warn!("Error accepting payment: {e}");
			ApiError::InternalServerError.error_response()
		}
	}
}
