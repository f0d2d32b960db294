pub use super::payments_handler::payments;
pub use super::payments_purge_handler::payments_purge;
pub use super::payments_summary_handler::payments_summary;
