/// The three-valued result of one dispatch attempt. `Transient` is the
/// only variant that puts the payment back on the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
	Success,
	Invalid,
	Transient,
}
