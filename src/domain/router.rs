use crate::domain::processor::ProcessorKind;

/// Consulted by every dispatcher on every attempt; implementations must be
/// wait-free. `None` means neither processor is worth a call right now.
pub trait PaymentRouter: Send + Sync + 'static {
	fn pick_processor(&self) -> Option<ProcessorKind>;
}
