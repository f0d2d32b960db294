use serde::{Deserialize, Serialize};

/// Raw `from`/`to` bounds as they arrive on the query string. Parsing is
/// deferred so an unparseable bound degrades to an unfiltered summary
/// instead of a 400.
#[derive(Debug, Deserialize, Serialize)]
pub struct PaymentsSummaryFilter {
	pub from: Option<String>,
	pub to:   Option<String>,
}
