#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod mask;

pub use mask::*;

use common_constants::{PERCENTAGE_FACTOR, RAMP_NOT_SET, RAY_PRECISION, WAD_PRECISION};

/// Which part of the valuation `calcDebtAndCollateral` must run.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CollateralCalcTask {
    /// Debt and index only
    GenericParams,
    /// Debt, accrued interest, fees and quota data
    DebtOnly,
    /// Full valuation of every enabled token
    DebtCollateral,
    /// Stops as soon as the threshold-weighted value covers the debt. Internal only.
    FullCollateralCheckLazy,
}

impl CollateralCalcTask {
    pub fn includes_debt(&self) -> bool {
        !matches!(self, CollateralCalcTask::GenericParams)
    }

    pub fn includes_collateral(&self) -> bool {
        matches!(
            self,
            CollateralCalcTask::DebtCollateral | CollateralCalcTask::FullCollateralCheckLazy
        )
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, CollateralCalcTask::FullCollateralCheckLazy)
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ManageDebtAction {
    IncreaseDebt,
    DecreaseDebt,
}

/// State of the global reentrancy guard. An empty storage entry decodes as `Idle`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuardStatus {
    Idle,
    Executing,
}

/// Per account ledger record, keyed by the credit account address.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct CreditAccountInfo<M: ManagedTypeApi> {
    pub debt: BigUint<M>,
    /// Pool index (RAY) the interest of `debt` is measured from
    pub cumulative_index_last_update: ManagedDecimal<M, NumDecimals>,
    /// `None` until quota interest has been recorded for the account.
    pub cumulative_quota_interest: Option<BigUint<M>>,
    pub quota_fees: BigUint<M>,
    pub enabled_tokens_mask: TokenMask,
    pub flags: u16,
    pub last_debt_update: u64,
    pub borrower: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> CreditAccountInfo<M> {
    pub fn new(
        borrower: ManagedAddress<M>,
        debt: BigUint<M>,
        cumulative_index: ManagedDecimal<M, NumDecimals>,
        block: u64,
    ) -> Self {
        let last_debt_update = if debt > 0 { block } else { 0 };
        CreditAccountInfo {
            debt,
            cumulative_index_last_update: cumulative_index,
            cumulative_quota_interest: None,
            quota_fees: BigUint::zero(),
            enabled_tokens_mask: TokenMask::underlying(),
            flags: 0,
            last_debt_update,
            borrower,
        }
    }

    pub fn quota_interest(&self) -> BigUint<M> {
        match &self.cumulative_quota_interest {
            Some(interest) => interest.clone(),
            None => BigUint::zero(),
        }
    }

    pub fn has_flag(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }

    pub fn set_flag(&mut self, flag: u16, value: bool) {
        if value {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }
}

/// Liquidation threshold configuration of a registered collateral token.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct CollateralTokenData<M: ManagedTypeApi> {
    pub token: TokenIdentifier<M>,
    pub lt_initial: u16,
    pub lt_final: u16,
    pub timestamp_ramp_start: u64,
    pub ramp_duration: u64,
}

impl<M: ManagedTypeApi> CollateralTokenData<M> {
    pub fn new(token: TokenIdentifier<M>, liquidation_threshold: u16) -> Self {
        CollateralTokenData {
            token,
            lt_initial: liquidation_threshold,
            lt_final: liquidation_threshold,
            timestamp_ramp_start: RAMP_NOT_SET,
            ramp_duration: 0,
        }
    }

    pub fn is_ramping_scheduled(&self) -> bool {
        self.timestamp_ramp_start != RAMP_NOT_SET
    }
}

/// Protocol fee and liquidation parameters, all in basis points.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FeeParameters {
    /// Share of accrued interest taken by the protocol
    pub fee_interest: u16,
    pub fee_liquidation: u16,
    /// Share of total value the liquidator has to pay, e.g. 9500 = 5% premium
    pub liquidation_discount: u16,
    pub fee_liquidation_expired: u16,
    pub liquidation_discount_expired: u16,
}

impl FeeParameters {
    pub fn is_valid(&self) -> bool {
        let pf = PERCENTAGE_FACTOR as u16;
        self.fee_interest <= pf
            && self.liquidation_discount <= pf
            && self.liquidation_discount_expired <= pf
            && self.fee_liquidation <= self.liquidation_discount
            && self.fee_liquidation_expired <= self.liquidation_discount_expired
    }

    pub fn underlying_liquidation_threshold(&self) -> u16 {
        self.liquidation_discount - self.fee_liquidation
    }

    /// Returns `(fee, discount)` for a regular or an expired liquidation.
    pub fn liquidation_parameters(&self, is_expired: bool) -> (u16, u16) {
        if is_expired {
            (self.fee_liquidation_expired, self.liquidation_discount_expired)
        } else {
            (self.fee_liquidation, self.liquidation_discount)
        }
    }
}

/// USD price (WAD) of one whole token and the token's decimals.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub decimals: u8,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct QuotedToken<M: ManagedTypeApi> {
    pub token: TokenIdentifier<M>,
    pub quota: BigUint<M>,
    pub liquidation_threshold: u16,
}

/// Result of a debt and collateral valuation. Never persisted.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct CollateralDebtData<M: ManagedTypeApi> {
    pub debt: BigUint<M>,
    pub cumulative_index_now: ManagedDecimal<M, NumDecimals>,
    pub cumulative_index_last_update: ManagedDecimal<M, NumDecimals>,
    pub cumulative_quota_interest: BigUint<M>,
    pub quota_fees: BigUint<M>,
    pub accrued_interest: BigUint<M>,
    pub accrued_fees: BigUint<M>,
    /// USD values are WAD decimals, `total_value` is in the underlying
    pub total_debt_usd: ManagedDecimal<M, NumDecimals>,
    pub total_value: BigUint<M>,
    pub total_value_usd: ManagedDecimal<M, NumDecimals>,
    pub twv_usd: ManagedDecimal<M, NumDecimals>,
    pub enabled_tokens_mask: TokenMask,
    pub quoted_tokens_mask: TokenMask,
    pub quoted_tokens: ManagedVec<M, QuotedToken<M>>,
}

impl<M: ManagedTypeApi> CollateralDebtData<M> {
    pub fn new(debt: BigUint<M>, enabled_tokens_mask: TokenMask) -> Self {
        CollateralDebtData {
            debt,
            cumulative_index_now: ManagedDecimal::from_raw_units(BigUint::zero(), RAY_PRECISION),
            cumulative_index_last_update: ManagedDecimal::from_raw_units(
                BigUint::zero(),
                RAY_PRECISION,
            ),
            cumulative_quota_interest: BigUint::zero(),
            quota_fees: BigUint::zero(),
            accrued_interest: BigUint::zero(),
            accrued_fees: BigUint::zero(),
            total_debt_usd: ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION),
            total_value: BigUint::zero(),
            total_value_usd: ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION),
            twv_usd: ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION),
            enabled_tokens_mask,
            quoted_tokens_mask: TokenMask::EMPTY,
            quoted_tokens: ManagedVec::new(),
        }
    }

    /// Principal plus accrued interest plus accrued fees.
    pub fn total_debt(&self) -> BigUint<M> {
        &self.debt + &self.accrued_interest + &self.accrued_fees
    }

    pub fn has_active_quotas(&self) -> bool {
        self.quoted_tokens.iter().any(|quoted| quoted.quota > 0)
    }
}
