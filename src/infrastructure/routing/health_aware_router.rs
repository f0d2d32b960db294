use std::sync::Arc;

use crate::domain::processor::{HealthSnapshot, ProcessorKind};
use crate::domain::router::PaymentRouter;
use crate::infrastructure::health::health_slot::HealthSlot;

/// Routes on the cached health snapshots. One independent slot per
/// processor: the probes write them without coordinating and dispatchers
/// read them without locking.
#[derive(Clone)]
pub struct HealthAwareRouter {
	default_slot:      Arc<HealthSlot>,
	fallback_slot:     Arc<HealthSlot>,
	max_response_time: u64,
}

impl HealthAwareRouter {
	pub fn new(max_response_time: u64) -> Self {
		Self {
			default_slot: Arc::new(HealthSlot::new()),
			fallback_slot: Arc::new(HealthSlot::new()),
			max_response_time,
		}
	}

	pub fn publish(&self, kind: ProcessorKind, snapshot: HealthSnapshot) {
		self.slot(kind).store(snapshot);
	}

	fn slot(&self, kind: ProcessorKind) -> &HealthSlot {
		match kind {
			ProcessorKind::Default => &self.default_slot,
			ProcessorKind::Fallback => &self.fallback_slot,
		}
	}
}

impl PaymentRouter for HealthAwareRouter {
	fn pick_processor(&self) -> Option<ProcessorKind> {
		// Prefer default whenever it is healthy and fast enough; its fee
		// penalty is lower.
		if self.default_slot.load().usable(self.max_response_time) {
			return Some(ProcessorKind::Default);
		}

		if self.fallback_slot.load().usable(self.max_response_time) {
			return Some(ProcessorKind::Fallback);
		}

		None
	}
}
