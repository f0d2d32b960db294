use crate::domain::processor::ProcessorKind;

pub const PAYMENTS_QUEUE_KEY: &str = "queue:payments";
pub const PAYMENTS_LEDGER_KEY: &str = "payments";
pub const HEALTH_CHECK_KEY_DEFAULT: &str = "health-check:default";
pub const HEALTH_CHECK_KEY_FALLBACK: &str = "health-check:fallback";

pub fn health_check_key(kind: ProcessorKind) -> &'static str {
	match kind {
		ProcessorKind::Default => HEALTH_CHECK_KEY_DEFAULT,
		ProcessorKind::Fallback => HEALTH_CHECK_KEY_FALLBACK,
	}
}
