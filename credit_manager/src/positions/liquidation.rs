use common_constants::DUST_BALANCE;
use common_errors::ERROR_INSUFFICIENT_REMAINING_FUNDS;
use common_proxies::proxy_quota_keeper;
use common_structs::{CollateralDebtData, TokenMask};

use crate::{cache::Cache, calculator, oracle, quotas, registry, storage, validation};

use super::account;

multiversx_sc::imports!();

/// The PositionLiquidationModule force-closes an undercollateralized or expired account.
///
/// **Scope**: The solvency verdict and the valuation come from the caller. This module splits
/// the account's underlying between the pool and the borrower, sweeps every other balance to the
/// liquidator and releases the account.
///
/// **Goal**: The pool receives `amount_to_pool` in full or the call reverts, and every enabled
/// token leaves the account except one unit of dust.
#[multiversx_sc::module]
pub trait PositionLiquidationModule:
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
    /// # Returns
    /// - `(remaining_funds, loss)`
    ///
    /// # Errors
    /// - `ERROR_DEBT_UPDATED_TWICE_IN_ONE_BLOCK`
    /// - `ERROR_INSUFFICIENT_REMAINING_FUNDS`: the underlying on the account does not cover
    ///   `amount_to_pool + remaining_funds`.
    fn process_liquidation(
        &self,
        credit_account: &ManagedAddress,
        collateral_debt_data: &CollateralDebtData<Self::Api>,
        to: &ManagedAddress,
        is_expired: bool,
        cache: &mut Cache<Self>,
    ) -> (BigUint, BigUint) {
        let info = self.get_credit_account_info_or_revert(credit_account);
        self.require_debt_not_updated_in_block(&info, cache.block_nonce);
        self.require_non_zero_address(to);

        let (fee_liquidation, liquidation_discount) =
            cache.fees.liquidation_parameters(is_expired);
        let payments = self.calc_liquidation_payments(
            collateral_debt_data,
            fee_liquidation,
            liquidation_discount,
        );

        if !collateral_debt_data.quoted_tokens.is_empty() {
            let quoted_tokens = self.quoted_token_list(&collateral_debt_data.quoted_tokens);
            if payments.loss > 0 {
                self.tx()
                    .to(&cache.quota_keeper)
                    .typed(proxy_quota_keeper::QuotaKeeperMockProxy)
                    .set_limits_to_zero(credit_account, quoted_tokens.clone())
                    .sync_call();
            }
            self.tx()
                .to(&cache.quota_keeper)
                .typed(proxy_quota_keeper::QuotaKeeperMockProxy)
                .remove_quotas(credit_account, quoted_tokens)
                .sync_call();
        }

        let underlying = cache.underlying.clone();
        let underlying_balance = self.credit_account_balance(credit_account, &underlying);
        require!(
            underlying_balance >= &payments.amount_to_pool + &payments.remaining_funds,
            ERROR_INSUFFICIENT_REMAINING_FUNDS
        );

        self.credit_account_transfer(
            credit_account,
            &underlying,
            &payments.amount_to_pool,
            &cache.pool,
        );
        self.pool_repay(
            &collateral_debt_data.debt,
            &payments.profit,
            &payments.loss,
            cache,
        );
        self.credit_account_transfer(
            credit_account,
            &underlying,
            &payments.remaining_funds,
            &info.borrower,
        );

        let tokens_to_sweep = info
            .enabled_tokens_mask
            .union(&collateral_debt_data.enabled_tokens_mask)
            .union(&TokenMask::underlying());
        self.sweep_tokens(credit_account, &tokens_to_sweep, to, cache);

        self.release_credit_account(credit_account);
        self.liquidate_credit_account_event(
            credit_account,
            &info.borrower,
            to,
            &payments.amount_to_pool,
            &payments.remaining_funds,
            &payments.loss,
            is_expired,
        );

        (payments.remaining_funds, payments.loss)
    }

    /// Sends everything above one unit of dust of each token in `mask` to `to`.
    fn sweep_tokens(
        &self,
        credit_account: &ManagedAddress,
        mask: &TokenMask,
        to: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) {
        for bit in mask.enabled_tokens() {
            let token = cache.get_cached_token_data(bit).token;
            let balance = self.credit_account_balance(credit_account, &token);
            if balance > DUST_BALANCE {
                self.credit_account_transfer(credit_account, &token, &(balance - DUST_BALANCE), to);
            }
        }
    }
}
