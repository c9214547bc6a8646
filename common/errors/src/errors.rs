#![no_std]

// Access control

pub static ERROR_CALLER_NOT_CREDIT_FACADE: &[u8] = b"Caller is not the credit facade.";

pub static ERROR_CALLER_NOT_ADAPTER: &[u8] = b"Caller is not an allowed adapter.";

pub static ERROR_CALLER_NOT_CONFIGURATOR: &[u8] = b"Caller is not the credit configurator.";

pub static ERROR_CALLER_NOT_CREDIT_MANAGER: &[u8] = b"Caller is not the credit manager.";

// Reentrancy

pub static ERROR_REENTRANCY: &[u8] = b"Reentrant call.";

// Not found / identity

pub static ERROR_CREDIT_ACCOUNT_DOES_NOT_EXIST: &[u8] = b"Credit account does not exist.";

pub static ERROR_TOKEN_NOT_ALLOWED: &[u8] = b"Token not allowed.";

pub static ERROR_ACTIVE_CREDIT_ACCOUNT_NOT_SET: &[u8] = b"Active credit account not set.";

pub static ERROR_PRICE_FEED_NOT_FOUND: &[u8] = b"Price feed not found for token.";

// Capacity

pub static ERROR_TOKEN_ALREADY_ADDED: &[u8] = b"Token already added.";

pub static ERROR_TOO_MANY_TOKENS: &[u8] = b"Too many collateral tokens.";

pub static ERROR_TOO_MANY_ENABLED_TOKENS: &[u8] = b"Too many enabled tokens.";

// Timing

pub static ERROR_DEBT_UPDATED_TWICE_IN_ONE_BLOCK: &[u8] = b"Debt updated twice in one block.";

pub static ERROR_CLOSE_ACCOUNT_WITH_NON_ZERO_DEBT: &[u8] =
    b"Cannot close a credit account with non zero debt.";

// Solvency

pub static ERROR_NOT_ENOUGH_COLLATERAL: &[u8] = b"Not enough collateral.";

pub static ERROR_CUSTOM_HEALTH_FACTOR_TOO_LOW: &[u8] = b"Custom health factor too low.";

pub static ERROR_INSUFFICIENT_REMAINING_FUNDS: &[u8] = b"Insufficient remaining funds.";

pub static ERROR_DEBT_TO_ZERO_WITH_ACTIVE_QUOTAS: &[u8] =
    b"Debt cannot be repaid to zero while quotas are active.";

// Parameter validity

pub static ERROR_INCORRECT_PARAMETER: &[u8] = b"Incorrect parameter.";

pub static ERROR_ZERO_ADDRESS: &[u8] = b"Zero address not allowed.";

pub static ERROR_INVALID_COLLATERAL_HINT: &[u8] = b"Invalid collateral hint.";

pub static ERROR_INVALID_LIQUIDATION_THRESHOLD: &[u8] =
    b"Liquidation threshold cannot exceed 100%.";

pub static ERROR_INVALID_FEES: &[u8] = b"Invalid fee parameters.";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Invalid payment.";

pub static ERROR_ADAPTER_NOT_ALLOWED: &[u8] = b"Adapter target not allowed.";

// Collaborators

pub static ERROR_QUOTA_OUT_OF_BOUNDS: &[u8] = b"Quota out of bounds.";

pub static ERROR_QUOTA_LIMIT_EXCEEDED: &[u8] = b"Quota limit exceeded.";

pub static ERROR_ACCOUNT_TEMPLATE_EMPTY: &[u8] = b"Credit account template is empty.";
