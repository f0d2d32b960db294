use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use crate::adapters::web::handlers::{
	payments, payments_purge, payments_summary,
};
use crate::domain::processor::ProcessorKind;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::persistence::redis_payment_ledger::RedisPaymentLedger;
use crate::infrastructure::queue::redis_payment_queue::RedisPaymentQueue;
use crate::infrastructure::routing::health_aware_router::HealthAwareRouter;
use crate::infrastructure::workers::dispatcher_worker::{
	payment_dispatch_worker, queue_depth_monitor,
};
use crate::infrastructure::workers::health_probe_worker::health_probe_worker;
use crate::infrastructure::workers::health_sync_worker::health_sync_worker;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::dispatch_payment::DispatchPaymentUseCase;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::try_init().ok();

	let redis_client =
		redis::Client::open(config.redis_addr.clone()).expect("Invalid Redis URL");

	// FATAL if the KV store is unreachable at startup; the supervisor
	// restarts us.
	redis_client
		.get_multiplexed_async_connection()
		.await
		.expect("Failed to connect to Redis");

	let http_client = Client::new();
	let router = HealthAwareRouter::new(config.max_response_time);

	if config.monitor_health {
		info!("Starting health probe workers...");
		for kind in ProcessorKind::BOTH {
			tokio::spawn(health_probe_worker(
				redis_client.clone(),
				http_client.clone(),
				kind,
				config.processor_url(kind).to_string(),
			));
		}
	}

	for kind in ProcessorKind::BOTH {
		tokio::spawn(health_sync_worker(
			redis_client.clone(),
			router.clone(),
			kind,
		));
	}

	let payment_queue =
		RedisPaymentQueue::new(redis_client.clone(), config.requeue_position);
	let payment_ledger = RedisPaymentLedger::new(redis_client.clone());

	let dispatch_payment_use_case = DispatchPaymentUseCase::new(
		payment_ledger.clone(),
		http_client.clone(),
		config.payment_processor_url_default.clone(),
		config.payment_processor_url_fallback.clone(),
	);

	info!("Starting {} payment dispatch workers...", config.workers);
	for _ in 0..config.workers {
		tokio::spawn(payment_dispatch_worker(
			payment_queue.clone(),
			dispatch_payment_use_case.clone(),
			router.clone(),
		));
	}

	tokio::spawn(queue_depth_monitor(payment_queue.clone()));

	let create_payment_use_case =
		CreatePaymentUseCase::new(payment_queue.clone());
	let get_payment_summary_use_case =
		GetPaymentSummaryUseCase::new(payment_ledger.clone());
	let purge_payments_use_case = PurgePaymentsUseCase::new(
		payment_ledger.clone(),
		payment_queue.clone(),
		http_client.clone(),
		config.payment_processor_url_default.clone(),
		config.payment_processor_url_fallback.clone(),
		config.admin_token.clone(),
	);

	info!("Starting Actix-Web server on 0.0.0.0:{}...", config.port);

	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(create_payment_use_case.clone()))
			.app_data(web::Data::new(get_payment_summary_use_case.clone()))
			.app_data(web::Data::new(purge_payments_use_case.clone()))
			.service(payments)
			.service(payments_summary)
			.service(payments_purge)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", config.port))?
	.run()
	.await
}
