pub mod account;
pub mod adapters;
pub mod collateral;
pub mod debt;
pub mod liquidation;
