pub mod dispatcher_worker;
pub mod health_probe_worker;
pub mod health_sync_worker;
