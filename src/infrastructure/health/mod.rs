pub mod health_slot;
