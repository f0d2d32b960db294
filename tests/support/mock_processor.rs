#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use rinha_payments::domain::processor::HealthSnapshot;
use rinha_payments::use_cases::purge_payments::ADMIN_TOKEN_HEADER;
use serde_json::Value;

/// A scriptable stand-in for a payment processor. Status codes can be
/// queued per request or fixed; accepted payments and purge tokens are
/// recorded for assertions.
pub struct MockProcessor {
	pub url: String,
	state:   Arc<MockProcessorState>,
}

#[derive(Default)]
struct MockProcessorState {
	scripted_statuses: Mutex<VecDeque<u16>>,
	payment_status:    AtomicU16,
	purge_status:      AtomicU16,
	health:            Mutex<Option<HealthSnapshot>>,
	requests:          AtomicUsize,
	accepted:          Mutex<Vec<Value>>,
	purge_tokens:      Mutex<Vec<String>>,
}

impl MockProcessor {
	pub async fn start() -> Self {
		let state = Arc::new(MockProcessorState {
			payment_status: AtomicU16::new(200),
			purge_status: AtomicU16::new(200),
			..Default::default()
		});
		let data = web::Data::from(state.clone());

		let server = HttpServer::new(move || {
			App::new()
				.app_data(data.clone())
				.route("/payments", web::post().to(accept_payment))
				.route(
					"/payments/service-health",
					web::get().to(report_health),
				)
				.route("/admin/purge-payments", web::post().to(purge_payments))
		})
		.workers(1)
		.bind(("127.0.0.1", 0))
		.unwrap();

		let url = format!("http://{}", server.addrs()[0]);
		tokio::spawn(server.run());

		Self { url, state }
	}

	/// Responses consumed in order before `payment_status` applies again.
	pub fn script_statuses(&self, statuses: &[u16]) {
		self.state
			.scripted_statuses
			.lock()
			.unwrap()
			.extend(statuses.iter().copied());
	}

	pub fn set_payment_status(&self, status: u16) {
		self.state.payment_status.store(status, Ordering::SeqCst);
	}

	pub fn set_purge_status(&self, status: u16) {
		self.state.purge_status.store(status, Ordering::SeqCst);
	}

	pub fn set_health(&self, failing: bool, min_response_time: u64) {
		*self.state.health.lock().unwrap() = Some(HealthSnapshot {
			failing,
			min_response_time,
		});
	}

	pub fn requests(&self) -> usize {
		self.state.requests.load(Ordering::SeqCst)
	}

	pub fn accepted(&self) -> Vec<Value> {
		self.state.accepted.lock().unwrap().clone()
	}

	pub fn purge_tokens(&self) -> Vec<String> {
		self.state.purge_tokens.lock().unwrap().clone()
	}
}

async fn accept_payment(
	state: web::Data<MockProcessorState>,
	body: web::Json<Value>,
) -> HttpResponse {
	state.requests.fetch_add(1, Ordering::SeqCst);

	let status = state
		.scripted_statuses
		.lock()
		.unwrap()
		.pop_front()
		.unwrap_or_else(|| state.payment_status.load(Ordering::SeqCst));

	if status == 200 {
		state.accepted.lock().unwrap().push(body.into_inner());
		HttpResponse::Ok().json(serde_json::json!({
			"message": "payment processed successfully"
		}))
	} else {
		HttpResponse::build(StatusCode::from_u16(status).unwrap()).finish()
	}
}

async fn report_health(state: web::Data<MockProcessorState>) -> HttpResponse {
	let health = state
		.health
		.lock()
		.unwrap()
		.unwrap_or_else(HealthSnapshot::optimistic);

	HttpResponse::Ok().json(health)
}

async fn purge_payments(
	state: web::Data<MockProcessorState>,
	request: HttpRequest,
) -> HttpResponse {
	let token = request
		.headers()
		.get(ADMIN_TOKEN_HEADER)
		.and_then(|value| value.to_str().ok())
		.unwrap_or_default()
		.to_string();
	state.purge_tokens.lock().unwrap().push(token);

	let status = state.purge_status.load(Ordering::SeqCst);
	HttpResponse::build(StatusCode::from_u16(status).unwrap()).finish()
}
