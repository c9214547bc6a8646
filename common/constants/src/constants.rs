#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Oracle prices and USD values carry 18 decimals
pub const WAD_PRECISION: usize = 18;

/// 100% in basis points
pub const PERCENTAGE_FACTOR: u64 = 10_000;
pub const BPS_PRECISION: usize = 4;

/// Token amounts are kept in their smallest unit
pub const UNITS_PRECISION: usize = 0;

/// Extra digits kept when the cumulative index is recomputed
pub const INDEX_PRECISION: usize = 9;

/// Bit 0 always belongs to the underlying token
pub const UNDERLYING_TOKEN_BIT: usize = 0;

pub const TOKEN_MASK_BITS: usize = 256;

/// Bit 255 is reserved, so at most 255 tokens fit in a mask
pub const MAX_COLLATERAL_TOKENS: usize = 255;

pub const DEFAULT_MAX_ENABLED_TOKENS: usize = 12;

/// A ramp start equal to this value means no ramp is scheduled
pub const RAMP_NOT_SET: u64 = u64::MAX;

/// Balances at or below this amount are treated as empty
pub const DUST_BALANCE: u64 = 1;

pub const FLAG_WITHDRAWAL_PENDING: u16 = 1;
pub const FLAG_BOT_PERMISSIONS: u16 = 1 << 1;
