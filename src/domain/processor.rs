use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
	Default,
	Fallback,
}

impl ProcessorKind {
	pub const BOTH: [ProcessorKind; 2] =
		[ProcessorKind::Default, ProcessorKind::Fallback];

	pub fn as_str(&self) -> &'static str {
		match self {
			ProcessorKind::Default => "default",
			ProcessorKind::Fallback => "fallback",
		}
	}
}

impl fmt::Display for ProcessorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The `{failing, minResponseTime}` pair a processor reports on
/// `/payments/service-health`; also the shape stored under the
/// `health-check:*` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthSnapshot {
	pub failing:           bool,
	#[serde(rename = "minResponseTime")]
	pub min_response_time: u64,
}

impl HealthSnapshot {
	// Assumed before the first probe result lands, so payments flow
	// immediately after startup.
	pub fn optimistic() -> Self {
		Self {
			failing:           false,
			min_response_time: 0,
		}
	}

	pub fn usable(&self, max_response_time: u64) -> bool {
		!self.failing && self.min_response_time < max_response_time
	}
}
