#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rinha_payments::domain::ledger::{LedgerSummary, PaymentLedger};
use rinha_payments::domain::payment::LedgerEntry;
use rinha_payments::domain::processor::ProcessorKind;
use rinha_payments::domain::queue::PaymentQueue;
use rinha_payments::domain::router::PaymentRouter;
use tokio::time::sleep;

/// Drop-in queue for worker tests: same contract as the Redis queue, no
/// daemon required.
#[derive(Clone, Default)]
pub struct InMemoryQueue {
	items: Arc<Mutex<VecDeque<Vec<u8>>>>,
}

impl InMemoryQueue {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl PaymentQueue for InMemoryQueue {
	async fn push_back(
		&self,
		item: Vec<u8>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.items.lock().unwrap().push_back(item);
		Ok(())
	}

	async fn pop(
		&self,
	) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send>> {
		let item = self.items.lock().unwrap().pop_front();
		if item.is_none() {
			// Emulate the short blocking pop of the Redis queue.
			sleep(Duration::from_millis(10)).await;
		}
		Ok(item)
	}

	async fn requeue(
		&self,
		item: Vec<u8>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.items.lock().unwrap().push_front(item);
		Ok(())
	}

	async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.items.lock().unwrap().clear();
		Ok(())
	}

	async fn depth(&self) -> Result<u64, Box<dyn std::error::Error + Send>> {
		Ok(self.items.lock().unwrap().len() as u64)
	}
}

#[derive(Clone, Default)]
pub struct InMemoryLedger {
	entries: Arc<Mutex<Vec<LedgerEntry>>>,
}

impl InMemoryLedger {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn entries(&self) -> Vec<LedgerEntry> {
		self.entries.lock().unwrap().clone()
	}
}

#[async_trait]
impl PaymentLedger for InMemoryLedger {
	async fn record(
		&self,
		entry: LedgerEntry,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut entries = self.entries.lock().unwrap();
		if let Some(existing) = entries
			.iter_mut()
			.find(|e| e.correlation_id == entry.correlation_id)
		{
			*existing = entry;
		} else {
			entries.push(entry);
		}
		Ok(())
	}

	async fn summary(
		&self,
		window: Option<(DateTime<Utc>, DateTime<Utc>)>,
	) -> Result<LedgerSummary, Box<dyn std::error::Error + Send>> {
		let mut summary = LedgerSummary::default();
		for entry in self.entries.lock().unwrap().iter() {
			if entry.within(window) {
				summary.accumulate(entry);
			}
		}
		Ok(summary)
	}

	async fn purge(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.entries.lock().unwrap().clear();
		Ok(())
	}
}

/// Router with a fixed, test-controlled decision.
#[derive(Clone, Default)]
pub struct StubRouter {
	processor: Arc<Mutex<Option<ProcessorKind>>>,
}

impl StubRouter {
	pub fn routing_to(processor: ProcessorKind) -> Self {
		let router = Self::default();
		router.set(Some(processor));
		router
	}

	pub fn unavailable() -> Self {
		Self::default()
	}

	pub fn set(&self, processor: Option<ProcessorKind>) {
		*self.processor.lock().unwrap() = processor;
	}
}

impl PaymentRouter for StubRouter {
	fn pick_processor(&self) -> Option<ProcessorKind> {
		*self.processor.lock().unwrap()
	}
}
