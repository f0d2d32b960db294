use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GetPaymentSummaryQuery {
	pub from: Option<String>,
	pub to:   Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProcessorSummary {
	#[serde(rename = "totalRequests")]
	pub total_requests: usize,
	#[serde(rename = "totalAmount")]
	pub total_amount:   f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaymentsSummaryResponse {
	pub default:  ProcessorSummary,
	pub fallback: ProcessorSummary,
}
