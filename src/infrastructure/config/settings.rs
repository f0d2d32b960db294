use config::Environment;
use serde::Deserialize;

use crate::domain::processor::ProcessorKind;
use crate::domain::queue::RequeuePosition;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub port: u16,
	pub redis_addr: String,
	pub payment_processor_url_default: String,
	pub payment_processor_url_fallback: String,
	pub workers: usize,
	pub monitor_health: bool,
	pub admin_token: String,
	pub server_keepalive: u64,
	pub max_response_time: u64,
	pub requeue_position: RequeuePosition,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_from(Environment::default())
	}

	pub fn processor_url(&self, kind: ProcessorKind) -> &str {
		match kind {
			ProcessorKind::Default => &self.payment_processor_url_default,
			ProcessorKind::Fallback => &self.payment_processor_url_fallback,
		}
	}

	fn load_from(environment: Environment) -> Result<Self, config::ConfigError> {
		config::Config::builder()
			.set_default("port", 9999)?
			.set_default("redis_addr", "redis://127.0.0.1:6379")?
			.set_default(
				"payment_processor_url_default",
				"http://localhost:8001",
			)?
			.set_default(
				"payment_processor_url_fallback",
				"http://localhost:8002",
			)?
			.set_default("workers", 300)?
			.set_default("monitor_health", true)?
			.set_default("admin_token", "123")?
			.set_default("server_keepalive", 120)?
			.set_default("max_response_time", 100)?
			.set_default("requeue_position", "head")?
			.add_source(environment)
			.build()?
			.try_deserialize()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn test_config_load_defaults() {
		let source = Environment::default().source(Some(HashMap::new()));

		let config =
			Config::load_from(source).expect("Failed to load config in test");

		assert_eq!(config.port, 9999);
		assert_eq!(config.redis_addr, "redis://127.0.0.1:6379");
		assert_eq!(
			config.payment_processor_url_default,
			"http://localhost:8001"
		);
		assert_eq!(
			config.payment_processor_url_fallback,
			"http://localhost:8002"
		);
		assert_eq!(config.workers, 300);
		assert!(config.monitor_health);
		assert_eq!(config.admin_token, "123");
		assert_eq!(config.server_keepalive, 120);
		assert_eq!(config.max_response_time, 100);
		assert_eq!(config.requeue_position, RequeuePosition::Head);
	}

	#[test]
	fn test_config_load_app_settings() {
		let source = Environment::default().source(Some({
			let mut env = HashMap::new();
			env.insert("PORT".into(), "8080".into());
			env.insert("REDIS_ADDR".into(), "redis://test_redis/".into());
			env.insert(
				"PAYMENT_PROCESSOR_URL_DEFAULT".into(),
				"http://test_default/".into(),
			);
			env.insert(
				"PAYMENT_PROCESSOR_URL_FALLBACK".into(),
				"http://test_fallback/".into(),
			);
			env.insert("WORKERS".into(), "50".into());
			env.insert("MONITOR_HEALTH".into(), "false".into());
			env.insert("ADMIN_TOKEN".into(), "s3cret".into());
			env.insert("SERVER_KEEPALIVE".into(), "60".into());
			env.insert("MAX_RESPONSE_TIME".into(), "200".into());
			env.insert("REQUEUE_POSITION".into(), "tail".into());
			env
		}));

		let config =
			Config::load_from(source).expect("Failed to load config in test");

		assert_eq!(config.port, 8080);
		assert_eq!(config.redis_addr, "redis://test_redis/");
		assert_eq!(config.payment_processor_url_default, "http://test_default/");
		assert_eq!(
			config.payment_processor_url_fallback,
			"http://test_fallback/"
		);
		assert_eq!(config.workers, 50);
		assert!(!config.monitor_health);
		assert_eq!(config.admin_token, "s3cret");
		assert_eq!(config.server_keepalive, 60);
		assert_eq!(config.max_response_time, 200);
		assert_eq!(config.requeue_position, RequeuePosition::Tail);
	}

	#[test]
	fn test_processor_url_lookup() {
		let source = Environment::default().source(Some(HashMap::new()));
		let config =
			Config::load_from(source).expect("Failed to load config in test");

		assert_eq!(
			config.processor_url(ProcessorKind::Default),
			"http://localhost:8001"
		);
		assert_eq!(
			config.processor_url(ProcessorKind::Fallback),
			"http://localhost:8002"
		);
	}
}
