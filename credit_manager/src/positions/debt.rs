use common_constants::DUST_BALANCE;
use common_errors::ERROR_DEBT_TO_ZERO_WITH_ACTIVE_QUOTAS;
use common_proxies::proxy_quota_keeper;
use common_structs::{CollateralCalcTask, ManageDebtAction, TokenMask};

use crate::{cache::Cache, calculator, oracle, quotas, registry, storage, validation};

use super::account;

multiversx_sc::imports!();

/// The PositionDebtModule moves principal between the pool and a credit account.
///
/// **Scope**: Increase lends fresh underlying at the current index; decrease settles
/// quota interest, quota fees, base interest and principal in that order.
///
/// **Goal**: Keep the account's accrued interest invariant across an increase and never
/// let a repayment leave quota positions without debt behind them.
#[multiversx_sc::module]
pub trait PositionDebtModule:
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
    /// - `(new_debt, tokens_to_enable, tokens_to_disable)`: the masks are deltas for the caller
    ///   to fold into the account mask, nothing is persisted here.
    ///
    /// # Errors
    /// - `ERROR_DEBT_UPDATED_TWICE_IN_ONE_BLOCK`
    /// - `ERROR_DEBT_TO_ZERO_WITH_ACTIVE_QUOTAS`: a repayment would clear the debt while some
    ///   quoted token still holds a non zero quota.
    fn process_manage_debt(
        &self,
        credit_account: &ManagedAddress,
        amount: &BigUint,
        enabled_tokens_mask: TokenMask,
        action: ManageDebtAction,
        cache: &mut Cache<Self>,
    ) -> (BigUint, TokenMask, TokenMask) {
        let mut info = self.get_credit_account_info_or_revert(credit_account);
        if *amount == 0 {
            return (info.debt, TokenMask::EMPTY, TokenMask::EMPTY);
        }
        self.require_debt_not_updated_in_block(&info, cache.block_nonce);

        let mut tokens_to_enable = TokenMask::EMPTY;
        let mut tokens_to_disable = TokenMask::EMPTY;
        let paid_amount;

        match action {
            ManageDebtAction::IncreaseDebt => {
                let (new_debt, new_index) = self.calc_increase(
                    amount,
                    &info.debt,
                    &cache.cumulative_index_now,
                    &info.cumulative_index_last_update,
                );

                self.pool_lend(amount, credit_account, cache);

                info.debt = new_debt;
                info.cumulative_index_last_update = new_index;
                tokens_to_enable = TokenMask::underlying();
                paid_amount = amount.clone();
            },
            ManageDebtAction::DecreaseDebt => {
                let data = self.calc_debt_and_collateral_data(
                    credit_account,
                    &info,
                    enabled_tokens_mask,
                    CollateralCalcTask::DebtOnly,
                    0,
                    &ManagedVec::new(),
                    false,
                    cache,
                );

                let total_debt = data.total_debt();
                let amount = if *amount > total_debt {
                    total_debt
                } else {
                    amount.clone()
                };
                let decrease = self.calc_decrease(
                    &amount,
                    &data.debt,
                    &data.cumulative_index_now,
                    &data.cumulative_index_last_update,
                    &data.cumulative_quota_interest,
                    &data.quota_fees,
                    cache.fees.fee_interest,
                );

                require!(
                    decrease.new_debt > 0 || !data.has_active_quotas(),
                    ERROR_DEBT_TO_ZERO_WITH_ACTIVE_QUOTAS
                );

                if !data.quoted_tokens.is_empty() {
                    self.tx()
                        .to(&cache.quota_keeper)
                        .typed(proxy_quota_keeper::QuotaKeeperMockProxy)
                        .accrue_quota_interest(
                            credit_account,
                            self.quoted_token_list(&data.quoted_tokens),
                        )
                        .sync_call();
                }

                let underlying = cache.underlying.clone();
                self.credit_account_transfer(
                    credit_account,
                    &underlying,
                    &decrease.amount_to_pool,
                    &cache.pool,
                );
                let repaid_principal = &data.debt - &decrease.new_debt;
                self.pool_repay(&repaid_principal, &decrease.profit, &BigUint::zero(), cache);

                if self.credit_account_balance(credit_account, &underlying) <= DUST_BALANCE {
                    tokens_to_disable = TokenMask::underlying();
                }

                info.debt = decrease.new_debt;
                info.cumulative_index_last_update = decrease.new_cumulative_index;
                info.cumulative_quota_interest = Some(decrease.new_cumulative_quota_interest);
                info.quota_fees = decrease.new_quota_fees;
                paid_amount = amount;
            },
        }

        info.last_debt_update = cache.block_nonce;
        self.credit_account_info(credit_account).set(&info);

        self.manage_debt_event(
            credit_account,
            action,
            &paid_amount,
            &info.debt,
            &info.cumulative_index_last_update,
        );

        (info.debt, tokens_to_enable, tokens_to_disable)
    }
}
