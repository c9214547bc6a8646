use common_constants::{DUST_BALANCE, PERCENTAGE_FACTOR};
use common_errors::{
    ERROR_CUSTOM_HEALTH_FACTOR_TOO_LOW, ERROR_INVALID_PAYMENT, ERROR_NOT_ENOUGH_COLLATERAL,
    ERROR_TOKEN_NOT_ALLOWED,
};
use common_proxies::proxy_quota_keeper;
use common_structs::{CollateralCalcTask, TokenMask};

use crate::{cache::Cache, calculator, oracle, quotas, registry, storage, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionCollateralModule:
    storage::Storage
    + validation::ValidationModule
    + registry::RegistryModule
    + oracle::OracleModule
    + quotas::QuotaModule
    + calculator::CalculatorModule
    + account::PositionAccountModule
    + common_events::EventsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    /// Forwards the attached payment to the credit account.
    ///
    /// # Returns
    /// - Mask of the deposited token, for the caller to enable.
    fn process_add_collateral(
        &self,
        payer: &ManagedAddress,
        credit_account: &ManagedAddress,
        payment: &EsdtTokenPayment<Self::Api>,
    ) -> TokenMask {
        self.get_credit_account_info_or_revert(credit_account);
        require!(
            payment.token_nonce == 0 && payment.amount > 0,
            ERROR_INVALID_PAYMENT
        );
        let token_mask = self.get_token_mask_or_revert(&payment.token_identifier);

        self.tx()
            .to(credit_account)
            .single_esdt(&payment.token_identifier, 0, &payment.amount)
            .transfer();

        self.add_collateral_event(
            credit_account,
            payer,
            &payment.token_identifier,
            &payment.amount,
        );

        token_mask
    }

    /// # Returns
    /// - Mask of `token` when the account is left with dust, empty otherwise.
    fn process_withdraw_collateral(
        &self,
        credit_account: &ManagedAddress,
        token: &TokenIdentifier,
        amount: &BigUint,
        to: &ManagedAddress,
    ) -> TokenMask {
        self.get_credit_account_info_or_revert(credit_account);
        self.require_non_zero_address(to);
        let token_mask = self.get_token_mask_or_revert(token);

        self.credit_account_transfer(credit_account, token, amount, to);
        self.withdraw_collateral_event(credit_account, token, amount, to);

        if self.credit_account_balance(credit_account, token) <= DUST_BALANCE {
            token_mask
        } else {
            TokenMask::EMPTY
        }
    }

    /// Changes the quota of a quoted token through the keeper and books the interest and fees
    /// the keeper reports.
    ///
    /// # Returns
    /// - `(tokens_to_enable, tokens_to_disable)`
    #[allow(clippy::too_many_arguments)]
    fn process_update_quota(
        &self,
        credit_account: &ManagedAddress,
        token: &TokenIdentifier,
        quota_change: &BigInt,
        min_quota: &BigUint,
        max_quota: &BigUint,
        cache: &mut Cache<Self>,
    ) -> (TokenMask, TokenMask) {
        let mut info = self.get_credit_account_info_or_revert(credit_account);
        let token_mask = self.get_token_mask_or_revert(token);
        require!(
            !token_mask.intersection(&cache.quoted_tokens_mask).is_empty(),
            ERROR_TOKEN_NOT_ALLOWED
        );

        let (quota_interest, fees, enable, disable) = self
            .tx()
            .to(&cache.quota_keeper)
            .typed(proxy_quota_keeper::QuotaKeeperMockProxy)
            .update_quota(credit_account, token, quota_change, min_quota, max_quota)
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        info.cumulative_quota_interest = Some(info.quota_interest() + quota_interest);
        info.quota_fees += fees;
        self.credit_account_info(credit_account).set(&info);

        self.update_quota_event(
            credit_account,
            token,
            quota_change,
            &info.quota_interest(),
            &info.quota_fees,
        );

        let tokens_to_enable = if enable { token_mask } else { TokenMask::EMPTY };
        let tokens_to_disable = if disable { token_mask } else { TokenMask::EMPTY };
        (tokens_to_enable, tokens_to_disable)
    }

    /// Lazy solvency check. On success the dust-pruned mask becomes the account mask.
    ///
    /// # Errors
    /// - `ERROR_CUSTOM_HEALTH_FACTOR_TOO_LOW`: `min_health_factor` below 100%.
    /// - `ERROR_NOT_ENOUGH_COLLATERAL`
    /// - `ERROR_TOO_MANY_ENABLED_TOKENS`: the resulting mask exceeds the ceiling.
    fn process_full_collateral_check(
        &self,
        credit_account: &ManagedAddress,
        enabled_tokens_mask: TokenMask,
        collateral_hints: &ManagedVec<u32>,
        min_health_factor: u16,
        use_safe_prices: bool,
        cache: &mut Cache<Self>,
    ) -> TokenMask {
        require!(
            min_health_factor as u64 >= PERCENTAGE_FACTOR,
            ERROR_CUSTOM_HEALTH_FACTOR_TOO_LOW
        );
        let mut info = self.get_credit_account_info_or_revert(credit_account);
        self.require_registered_mask(&enabled_tokens_mask);

        let data = self.calc_debt_and_collateral_data(
            credit_account,
            &info,
            enabled_tokens_mask,
            CollateralCalcTask::FullCollateralCheckLazy,
            min_health_factor,
            collateral_hints,
            use_safe_prices,
            cache,
        );

        let target_usd = self.mul_bps_down(&data.total_debt_usd, min_health_factor);
        require!(data.twv_usd >= target_usd, ERROR_NOT_ENOUGH_COLLATERAL);

        self.save_enabled_tokens_mask(
            credit_account,
            &mut info,
            data.enabled_tokens_mask,
            cache.max_enabled_tokens,
        );
        self.credit_account_info(credit_account).set(&info);

        data.enabled_tokens_mask
    }
}
