pub mod errors;
pub mod handlers;
pub mod payments_handler;
pub mod payments_purge_handler;
pub mod payments_summary_handler;
pub mod schema;
