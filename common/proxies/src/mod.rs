#![no_std]

pub mod proxy_account_factory;
pub mod proxy_credit_account;
pub mod proxy_pool;
pub mod proxy_quota_keeper;
