use common_constants::DUST_BALANCE;
use common_errors::ERROR_INVALID_COLLATERAL_HINT;
use common_proxies::proxy_credit_account;
use common_structs::{CollateralCalcTask, CollateralDebtData, CreditAccountInfo, TokenMask};

use crate::{cache::Cache, oracle, quotas, registry, storage};

multiversx_sc::imports!();

/// The CalculatorModule values a credit account: what it owes and what its collateral is worth.
///
/// **Scope**: Read only. The only state it produces is the dust-pruned mask in the returned data;
/// persisting it is up to the caller.
///
/// **Goal**: Run the solvency check in as few token evaluations as possible. In lazy mode the loop
/// stops at the first token that brings the threshold-weighted value over the target, so the
/// order given by the hints decides how much work a check costs.
#[multiversx_sc::module]
pub trait CalculatorModule:
    storage::Storage
    + registry::RegistryModule
    + oracle::OracleModule
    + quotas::QuotaModule
    + common_events::EventsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    /// Runs the part of the valuation selected by `task`.
    ///
    /// **Steps**:
    /// 1. Principal and indexes (`GenericParams` stops here)
    /// 2. Quota data of the quoted enabled tokens, accrued interest and fees, total debt in USD
    ///    (`DebtOnly` stops here)
    /// 3. Collateral: quoted tokens first, capped by their quota, then the remaining enabled
    ///    tokens in hint order followed by ascending bit order
    ///
    /// `min_health_factor` only matters for the lazy task, where it sets the exit target
    /// `total_debt_usd * min_health_factor / 10_000`.
    #[allow(clippy::too_many_arguments)]
    fn calc_debt_and_collateral_data(
        &self,
        credit_account: &ManagedAddress,
        info: &CreditAccountInfo<Self::Api>,
        enabled_tokens_mask: TokenMask,
        task: CollateralCalcTask,
        min_health_factor: u16,
        collateral_hints: &ManagedVec<u32>,
        use_safe_prices: bool,
        cache: &mut Cache<Self>,
    ) -> CollateralDebtData<Self::Api> {
        let mut data = CollateralDebtData::new(info.debt.clone(), enabled_tokens_mask);
        data.cumulative_index_last_update = info.cumulative_index_last_update.clone();
        data.cumulative_index_now = cache.cumulative_index_now.clone();

        if !task.includes_debt() {
            return data;
        }

        let mut quota_interest = info.quota_interest();
        let quoted_enabled_mask = enabled_tokens_mask.intersection(&cache.quoted_tokens_mask);
        if !quoted_enabled_mask.is_empty() {
            let (quoted_tokens, outstanding_interest) =
                self.get_quoted_tokens_data(credit_account, &quoted_enabled_mask, cache);
            data.quoted_tokens = quoted_tokens;
            data.quoted_tokens_mask = quoted_enabled_mask;
            quota_interest += outstanding_interest;
        }

        let base_interest = self.calc_accrued_interest(
            &info.debt,
            &info.cumulative_index_last_update,
            &cache.cumulative_index_now,
        );
        data.accrued_fees = self.calc_accrued_fees(
            &base_interest,
            &quota_interest,
            &info.quota_fees,
            cache.fees.fee_interest,
        );
        data.accrued_interest = base_interest + &quota_interest;
        data.cumulative_quota_interest = quota_interest;
        data.quota_fees = info.quota_fees.clone();

        let underlying = cache.underlying.clone();
        let underlying_feed = cache.get_cached_price_feed(&underlying, false);
        data.total_debt_usd = self.convert_to_usd(&data.total_debt(), &underlying_feed);

        if !task.includes_collateral() {
            return data;
        }

        self.calc_collateral(
            credit_account,
            &mut data,
            task.is_lazy(),
            min_health_factor,
            collateral_hints,
            use_safe_prices,
            cache,
        );

        let underlying_feed = cache.get_cached_price_feed(&underlying, use_safe_prices);
        data.total_value = self.convert_from_usd(&data.total_value_usd, &underlying_feed);

        data
    }

    #[allow(clippy::too_many_arguments)]
    fn calc_collateral(
        &self,
        credit_account: &ManagedAddress,
        data: &mut CollateralDebtData<Self::Api>,
        lazy: bool,
        min_health_factor: u16,
        collateral_hints: &ManagedVec<u32>,
        use_safe_prices: bool,
        cache: &mut Cache<Self>,
    ) {
        let target_usd = self.mul_bps_down(&data.total_debt_usd, min_health_factor);

        if !data.quoted_tokens.is_empty() {
            let underlying = cache.underlying.clone();
            let underlying_feed = cache.get_cached_price_feed(&underlying, use_safe_prices);
            let quoted_tokens = data.quoted_tokens.clone();
            for quoted in quoted_tokens.iter() {
                let balance = self.credit_account_balance(credit_account, &quoted.token);
                if balance <= DUST_BALANCE {
                    continue;
                }

                let feed = cache.get_cached_price_feed(&quoted.token, use_safe_prices);
                let value_usd = self.convert_to_usd(&balance, &feed);
                let quota_usd = self.convert_to_usd(&quoted.quota, &underlying_feed);
                let capped_usd = self.get_min(value_usd, quota_usd);

                data.twv_usd += self.mul_bps_down(&capped_usd, quoted.liquidation_threshold);
                data.total_value_usd += capped_usd;
            }

            if lazy && data.twv_usd >= target_usd {
                return;
            }
        }

        let mut tokens_to_check = data.enabled_tokens_mask.difference(&data.quoted_tokens_mask);

        for hint in collateral_hints.iter() {
            let bit = hint as usize;
            if !tokens_to_check.contains(bit) {
                continue;
            }
            tokens_to_check.disable(bit);

            self.evaluate_collateral_token(credit_account, bit, data, use_safe_prices, cache);
            if lazy && data.twv_usd >= target_usd {
                return;
            }
        }

        for bit in tokens_to_check.enabled_tokens() {
            self.evaluate_collateral_token(credit_account, bit, data, use_safe_prices, cache);
            if lazy && data.twv_usd >= target_usd {
                return;
            }
        }
    }

    /// Adds one non-quoted token to the valuation. A balance at or below dust switches
    /// the token off instead.
    fn evaluate_collateral_token(
        &self,
        credit_account: &ManagedAddress,
        bit: usize,
        data: &mut CollateralDebtData<Self::Api>,
        use_safe_prices: bool,
        cache: &mut Cache<Self>,
    ) {
        let token = cache.get_cached_token_data(bit).token;
        let balance = self.credit_account_balance(credit_account, &token);
        if balance <= DUST_BALANCE {
            data.enabled_tokens_mask.disable(bit);
            return;
        }

        let feed = cache.get_cached_price_feed(&token, use_safe_prices);
        let value_usd = self.convert_to_usd(&balance, &feed);
        let liquidation_threshold = cache.get_liquidation_threshold(bit);

        data.twv_usd += self.mul_bps_down(&value_usd, liquidation_threshold);
        data.total_value_usd += value_usd;
    }

    /// Asks the credit account for its own balance of `token`.
    fn credit_account_balance(
        &self,
        credit_account: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> BigUint {
        self.tx()
            .to(credit_account)
            .typed(proxy_credit_account::CreditAccountProxy)
            .get_balance(token)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Turns the hint masks into bit positions, keeping their order.
    ///
    /// # Errors
    /// - `ERROR_INVALID_COLLATERAL_HINT`: a hint is empty or carries more than one bit.
    fn collect_collateral_hints(
        &self,
        collateral_hints: MultiValueEncoded<TokenMask>,
    ) -> ManagedVec<u32> {
        let mut bits = ManagedVec::new();
        for hint in collateral_hints {
            require!(hint.is_single_bit(), ERROR_INVALID_COLLATERAL_HINT);
            if let Some(bit) = hint.lowest_bit() {
                bits.push(bit as u32);
            }
        }
        bits
    }
}
