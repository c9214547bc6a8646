#![no_std]

use common_constants::{INDEX_PRECISION, PERCENTAGE_FACTOR, RAY_PRECISION, UNITS_PRECISION};
use common_structs::{CollateralDebtData, CollateralTokenData};

multiversx_sc::imports!();

/// Outcome of a partial or full debt repayment.
pub struct DebtDecrease<M: ManagedTypeApi> {
    pub new_debt: BigUint<M>,
    pub new_cumulative_index: ManagedDecimal<M, NumDecimals>,
    /// Everything the account sends to the pool, profit included
    pub amount_to_pool: BigUint<M>,
    pub profit: BigUint<M>,
    pub new_cumulative_quota_interest: BigUint<M>,
    pub new_quota_fees: BigUint<M>,
}

/// How the underlying held by a liquidated account is split.
pub struct LiquidationPayments<M: ManagedTypeApi> {
    pub amount_to_pool: BigUint<M>,
    pub remaining_funds: BigUint<M>,
    pub profit: BigUint<M>,
    pub loss: BigUint<M>,
}

/// The CreditLogic module holds the pure accounting rules of a credit account:
/// interest accrual against the pool's cumulative index, debt transitions and the
/// liquidation payment split.
///
/// **Scope**: Stateless math. Callers load and persist account state. Token amounts stay in
/// their smallest unit, indexes are RAY decimals and fees are basis points.
///
/// **Goal**: Keep every rounding step floored so the pool never receives less than it is owed.
#[multiversx_sc::module]
pub trait CreditLogic: common_math::SharedMathModule {
    /// Interest accrued on `amount` while the pool index moved from `index_last_update` to `index_now`.
    ///
    /// **Formula**: `amount * index_now / index_last_update - amount`
    ///
    /// Returns zero for an empty principal, an unset index or an index that did not grow.
    fn calc_accrued_interest(
        &self,
        amount: &BigUint,
        index_last_update: &ManagedDecimal<Self::Api, NumDecimals>,
        index_now: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        if *amount == 0 || *index_last_update.into_raw_units() == 0 {
            return BigUint::zero();
        }

        let principal = self.to_decimal_units(amount.clone());
        let grown = self.div_down(
            &self.mul_down(&principal, index_now, RAY_PRECISION),
            index_last_update,
            UNITS_PRECISION,
        );

        let grown = grown.into_raw_units();
        if grown > amount {
            grown - amount
        } else {
            BigUint::zero()
        }
    }

    /// Adds `amount` of principal while keeping the interest accrued so far unchanged.
    ///
    /// **Formula**:
    /// `new_index = index_now * new_debt / (index_now * debt / index_last_update + amount)`,
    /// with the inner quotient kept at `INDEX_PRECISION` extra digits.
    ///
    /// # Returns
    /// - `(new_debt, new_cumulative_index)`
    fn calc_increase(
        &self,
        amount: &BigUint,
        debt: &BigUint,
        index_now: &ManagedDecimal<Self::Api, NumDecimals>,
        index_last_update: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (BigUint, ManagedDecimal<Self::Api, NumDecimals>) {
        if *amount == 0 {
            return (debt.clone(), index_last_update.clone());
        }
        if *debt == 0 {
            return (amount.clone(), index_now.clone());
        }

        let new_debt = debt + amount;
        let grown_debt = self.div_down(
            &self.mul_down(&self.to_decimal_units(debt.clone()), index_now, RAY_PRECISION),
            index_last_update,
            INDEX_PRECISION,
        );
        let denominator = grown_debt + self.to_decimal_units(amount.clone());

        let new_index = self.div_down(
            &self.mul_down(index_now, &self.to_decimal_units(new_debt.clone()), RAY_PRECISION),
            &denominator,
            RAY_PRECISION,
        );

        (new_debt, new_index)
    }

    /// Repays `amount` following a strict priority:
    /// 1. quota interest, together with the protocol fee charged on it
    /// 2. quota fees
    /// 3. base interest, together with the protocol fee charged on it
    /// 4. principal
    ///
    /// An amount below a bucket is split between the pool and the protocol fee pro rata
    /// (`to_pool = amount * PF / (PF + fee_interest)`) and only that bucket shrinks. Paying
    /// off the base interest resets the index to `index_now`; a partial payment rebases it so
    /// the unpaid interest is preserved. Anything left after principal is absorbed: callers
    /// cap `amount` at the total debt.
    #[allow(clippy::too_many_arguments)]
    fn calc_decrease(
        &self,
        amount: &BigUint,
        debt: &BigUint,
        index_now: &ManagedDecimal<Self::Api, NumDecimals>,
        index_last_update: &ManagedDecimal<Self::Api, NumDecimals>,
        cumulative_quota_interest: &BigUint,
        quota_fees: &BigUint,
        fee_interest: u16,
    ) -> DebtDecrease<Self::Api> {
        if *amount == 0 {
            return DebtDecrease {
                new_debt: debt.clone(),
                new_cumulative_index: index_last_update.clone(),
                amount_to_pool: BigUint::zero(),
                profit: BigUint::zero(),
                new_cumulative_quota_interest: cumulative_quota_interest.clone(),
                new_quota_fees: quota_fees.clone(),
            };
        }

        let mut remaining = amount.clone();
        let mut profit = BigUint::zero();

        let mut new_quota_interest = cumulative_quota_interest.clone();
        if *cumulative_quota_interest > 0 {
            let quota_profit = self.units_bps_down(cumulative_quota_interest, fee_interest);
            let owed = cumulative_quota_interest + &quota_profit;
            if remaining >= owed {
                remaining -= &owed;
                profit += &quota_profit;
                new_quota_interest = BigUint::zero();
            } else {
                let to_pool = self.pro_rata_to_pool(&remaining, fee_interest);
                profit += &(&remaining - &to_pool);
                new_quota_interest = cumulative_quota_interest - &to_pool;
                remaining = BigUint::zero();
            }
        }

        let mut new_quota_fees = quota_fees.clone();
        if remaining > 0 && *quota_fees > 0 {
            if remaining >= *quota_fees {
                remaining -= quota_fees;
                profit += quota_fees;
                new_quota_fees = BigUint::zero();
            } else {
                profit += &remaining;
                new_quota_fees = quota_fees - &remaining;
                remaining = BigUint::zero();
            }
        }

        let mut new_index = index_last_update.clone();
        if remaining > 0 {
            let interest = self.calc_accrued_interest(debt, index_last_update, index_now);
            let interest_profit = self.units_bps_down(&interest, fee_interest);
            let owed = &interest + &interest_profit;
            if remaining >= owed {
                remaining -= &owed;
                profit += &interest_profit;
                new_index = index_now.clone();
            } else {
                let to_pool = self.pro_rata_to_pool(&remaining, fee_interest);
                profit += &(&remaining - &to_pool);
                new_index = self.rebase_index(&to_pool, debt, index_now, index_last_update);
                remaining = BigUint::zero();
            }
        }

        let repaid_principal = if remaining > *debt { debt.clone() } else { remaining };
        DebtDecrease {
            new_debt: debt - &repaid_principal,
            new_cumulative_index: new_index,
            amount_to_pool: amount.clone(),
            profit,
            new_cumulative_quota_interest: new_quota_interest,
            new_quota_fees,
        }
    }

    /// `amount * bps / 10_000` for a token amount.
    fn units_bps_down(&self, amount: &BigUint, bps: u16) -> BigUint {
        self.mul_bps_down(&self.to_decimal_units(amount.clone()), bps)
            .into_raw_units()
            .clone()
    }

    /// Share of `amount` that pays interest when the protocol fee is charged on top of it.
    fn pro_rata_to_pool(&self, amount: &BigUint, fee_interest: u16) -> BigUint {
        let fee_factor = self.to_decimal_bps(BigUint::from(PERCENTAGE_FACTOR + fee_interest as u64));
        self.div_down(
            &self.to_decimal_units(amount.clone()),
            &fee_factor,
            UNITS_PRECISION,
        )
        .into_raw_units()
        .clone()
    }

    /// Index after `interest_paid` of the accrued base interest has been repaid.
    ///
    /// **Formula**:
    /// `index_now * index_last_update / (index_now - interest_paid * index_last_update / debt)`
    fn rebase_index(
        &self,
        interest_paid: &BigUint,
        debt: &BigUint,
        index_now: &ManagedDecimal<Self::Api, NumDecimals>,
        index_last_update: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let extended = RAY_PRECISION + INDEX_PRECISION;

        let paid_share = self.div_down(
            &self.mul_down(
                &self.to_decimal_units(interest_paid.clone()),
                index_last_update,
                RAY_PRECISION,
            ),
            &self.to_decimal_units(debt.clone()),
            extended,
        );
        let denominator = index_now.rescale(extended) - paid_share;

        // Full product of both indexes, nothing floored before the division
        let product = self.mul_down(index_now, index_last_update, RAY_PRECISION * 2);
        self.div_down(&product, &denominator, RAY_PRECISION)
    }

    /// Protocol fee owed on accrued base and quota interest, plus the stored quota fees.
    fn calc_accrued_fees(
        &self,
        base_interest: &BigUint,
        quota_interest: &BigUint,
        quota_fees: &BigUint,
        fee_interest: u16,
    ) -> BigUint {
        let base_fee = self.units_bps_down(base_interest, fee_interest);
        let quota_fee = self.units_bps_down(quota_interest, fee_interest);
        base_fee + &quota_fee + quota_fees
    }

    /// Splits the value of a liquidated account between the pool, the borrower and the liquidator.
    ///
    /// **Formula**:
    /// - `amount_to_pool = total_debt + total_value * fee_liquidation / PF`
    /// - `total_funds = total_value * liquidation_discount / PF`
    /// - if `total_funds > amount_to_pool`: `remaining_funds = total_funds - amount_to_pool - 1`
    /// - otherwise everything recoverable goes to the pool: `amount_to_pool = total_funds`
    /// - profit or loss is `amount_to_pool` against principal plus interest
    ///
    /// `total_value` is expressed in the underlying token.
    fn calc_liquidation_payments(
        &self,
        collateral_debt_data: &CollateralDebtData<Self::Api>,
        fee_liquidation: u16,
        liquidation_discount: u16,
    ) -> LiquidationPayments<Self::Api> {
        let total_value = &collateral_debt_data.total_value;

        let mut amount_to_pool = collateral_debt_data.total_debt()
            + self.units_bps_down(total_value, fee_liquidation);
        let total_funds = self.units_bps_down(total_value, liquidation_discount);

        let mut remaining_funds = BigUint::zero();
        if total_funds > amount_to_pool {
            remaining_funds = &total_funds - &amount_to_pool - 1u64;
        } else {
            amount_to_pool = total_funds;
        }

        let debt_with_interest = &collateral_debt_data.debt + &collateral_debt_data.accrued_interest;
        let (profit, loss) = if amount_to_pool >= debt_with_interest {
            (&amount_to_pool - &debt_with_interest, BigUint::zero())
        } else {
            (BigUint::zero(), &debt_with_interest - &amount_to_pool)
        };

        LiquidationPayments {
            amount_to_pool,
            remaining_funds,
            profit,
            loss,
        }
    }

    /// Liquidation threshold of a token at `timestamp`, following its ramp when one is scheduled.
    ///
    /// **Formula** (inside the ramp window `[start, end)`):
    /// `(lt_initial * (end - now) + lt_final * (now - start)) / (end - start)`
    fn get_liquidation_threshold(
        &self,
        data: &CollateralTokenData<Self::Api>,
        timestamp: u64,
    ) -> u16 {
        if !data.is_ramping_scheduled() {
            return data.lt_initial;
        }

        let ramp_start = data.timestamp_ramp_start;
        let ramp_end = ramp_start.saturating_add(data.ramp_duration);

        if timestamp <= ramp_start {
            return data.lt_initial;
        }
        if timestamp >= ramp_end {
            return data.lt_final;
        }

        let elapsed = (timestamp - ramp_start) as u128;
        let left = (ramp_end - timestamp) as u128;
        let weighted = data.lt_initial as u128 * left + data.lt_final as u128 * elapsed;
        (weighted / data.ramp_duration as u128) as u16
    }
}
