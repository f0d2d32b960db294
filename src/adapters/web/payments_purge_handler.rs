use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use log::{error, info};

use crate::infrastructure::persistence::redis_payment_ledger::RedisPaymentLedger;
use crate::infrastructure::queue::redis_payment_queue::RedisPaymentQueue;
use crate::use_cases::purge_payments::{
	ADMIN_TOKEN_HEADER, PurgePaymentsUseCase,
};

#[post("/purge-payments")]
pub async fn payments_purge(
	request: HttpRequest,
	purge_use_case: web::Data<
		PurgePaymentsUseCase<RedisPaymentLedger, RedisPaymentQueue>,
	>,
) -> impl Responder {
	info!("Received request to purge payments");

	let token = request
		.headers()
		.get(ADMIN_TOKEN_HEADER)
		.and_then(|value| value.to_str().ok());

	match purge_use_case.execute(token).await {
		Ok(()) => {
			info!("Payments purged successfully");
			HttpResponse::Ok().finish()
		}
		Err(e) => {
			error!("Failed to purge payments: {e}");
			HttpResponse::InternalServerError().finish()
		}
	}
}
