use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::processor::ProcessorKind;

/// What a client submits on `POST /payments`. Queue items carry the raw
/// request bytes; this type only validates and decodes them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentIntent {
	#[serde(rename = "correlationId")]
	pub correlation_id: Uuid,
	pub amount:         f64,
}

/// The body sent to a processor. `requested_at` is stamped immediately
/// before each attempt, so retries carry the actual submission time.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DispatchRequest {
	#[serde(rename = "correlationId")]
	pub correlation_id: Uuid,
	pub amount:         f64,
	#[serde(rename = "requestedAt", with = "rfc3339_nanos")]
	pub requested_at:   DateTime<Utc>,
}

impl DispatchRequest {
	pub fn stamped(intent: &PaymentIntent) -> Self {
		Self {
			correlation_id: intent.correlation_id,
			amount:         intent.amount,
			requested_at:   Utc::now(),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LedgerEntry {
	#[serde(rename = "correlationId")]
	pub correlation_id: Uuid,
	pub amount:         f64,
	#[serde(rename = "requestedAt", with = "rfc3339_nanos")]
	pub requested_at:   DateTime<Utc>,
	pub processor:      ProcessorKind,
}

impl LedgerEntry {
	pub fn from_dispatch(
		request: &DispatchRequest,
		processor: ProcessorKind,
	) -> Self {
		Self {
			correlation_id: request.correlation_id,
			amount: request.amount,
			requested_at: request.requested_at,
			processor,
		}
	}

	/// Window membership is inclusive on both ends.
	pub fn within(
		&self,
		window: Option<(DateTime<Utc>, DateTime<Utc>)>,
	) -> bool {
		match window {
			Some((from, to)) => {
				from <= self.requested_at && self.requested_at <= to
			}
			None => true,
		}
	}
}

/// RFC3339 with a fixed nine-digit fraction. The contest judge compares
/// `requestedAt` at nanosecond precision.
pub mod rfc3339_nanos {
	use chrono::{DateTime, SecondsFormat, Utc};
	use serde::{Deserialize, Deserializer, Serializer, de};

	pub fn serialize<S>(
		timestamp: &DateTime<Utc>,
		serializer: S,
	) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(
			&timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
		)
	}

	pub fn deserialize<'de, D>(
		deserializer: D,
	) -> Result<DateTime<Utc>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;
		DateTime::parse_from_rfc3339(&raw)
			.map(|parsed| parsed.with_timezone(&Utc))
			.map_err(de::Error::custom)
	}
}
