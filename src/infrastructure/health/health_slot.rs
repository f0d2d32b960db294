use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::processor::HealthSnapshot;

// The whole snapshot fits one word: failing flag in the top bit, the
// self-reported minimum response time in the rest. Readers never see a
// torn snapshot and never lock.
const FAILING_BIT: u64 = 1 << 63;

pub struct HealthSlot {
	bits: AtomicU64,
}

impl HealthSlot {
	pub fn new() -> Self {
		Self {
			bits: AtomicU64::new(pack(HealthSnapshot::optimistic())),
		}
	}

	pub fn store(&self, snapshot: HealthSnapshot) {
		self.bits.store(pack(snapshot), Ordering::Release);
	}

	pub fn load(&self) -> HealthSnapshot {
		unpack(self.bits.load(Ordering::Acquire))
	}
}

impl Default for HealthSlot {
	fn default() -> Self {
		Self::new()
	}
}

fn pack(snapshot: HealthSnapshot) -> u64 {
	let time = snapshot.min_response_time.min(FAILING_BIT - 1);
	if snapshot.failing { time | FAILING_BIT } else { time }
}

fn unpack(bits: u64) -> HealthSnapshot {
	HealthSnapshot {
		failing:           bits & FAILING_BIT != 0,
		min_response_time: bits & !FAILING_BIT,
	}
}
