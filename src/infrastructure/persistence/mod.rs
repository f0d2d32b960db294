pub mod redis_payment_ledger;
