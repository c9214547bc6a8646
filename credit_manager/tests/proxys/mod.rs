pub mod proxy_credit_manager;
pub mod proxy_price_oracle;
pub mod proxy_swap;

pub use proxy_credit_manager::*;
pub use proxy_price_oracle::*;
pub use proxy_swap::*;
