pub mod health_aware_router;
