use common_errors::ERROR_CLOSE_ACCOUNT_WITH_NON_ZERO_DEBT;
use common_proxies::{proxy_account_factory, proxy_credit_account, proxy_pool};
use common_structs::CreditAccountInfo;

use crate::{cache::Cache, oracle, registry, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionAccountModule:
    storage::Storage
    + validation::ValidationModule
    + registry::RegistryModule
    + oracle::OracleModule
    + common_events::EventsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    /// Takes an account from the factory and books `debt` against it at the current pool index.
    /// The pool sends the borrowed underlying straight to the account.
    fn process_open_credit_account(
        &self,
        debt: &BigUint,
        borrower: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> ManagedAddress {
        self.require_non_zero_address(borrower);

        let credit_account = self
            .tx()
            .to(self.account_factory().get())
            .typed(proxy_account_factory::AccountFactoryMockProxy)
            .take_credit_account()
            .returns(ReturnsResult)
            .sync_call();

        let info = CreditAccountInfo::new(
            borrower.clone(),
            debt.clone(),
            cache.cumulative_index_now.clone(),
            cache.block_nonce,
        );
        self.credit_account_info(&credit_account).set(&info);
        self.credit_accounts().insert(credit_account.clone());

        if *debt > 0 {
            self.pool_lend(debt, &credit_account, cache);
        }

        self.open_credit_account_event(
            &credit_account,
            borrower,
            debt,
            &info.cumulative_index_last_update,
        );

        credit_account
    }

    /// Removes a debt free account from the ledger and hands it back to the factory.
    fn process_close_credit_account(&self, credit_account: &ManagedAddress) {
        let info = self.get_credit_account_info_or_revert(credit_account);
        require!(info.debt == 0, ERROR_CLOSE_ACCOUNT_WITH_NON_ZERO_DEBT);

        self.release_credit_account(credit_account);
        self.close_credit_account_event(credit_account, &info.borrower);
    }

    fn release_credit_account(&self, credit_account: &ManagedAddress) {
        self.credit_account_info(credit_account).clear();
        self.credit_accounts().swap_remove(credit_account);

        self.tx()
            .to(self.account_factory().get())
            .typed(proxy_account_factory::AccountFactoryMockProxy)
            .return_credit_account(credit_account)
            .sync_call();
    }

    fn pool_lend(&self, amount: &BigUint, credit_account: &ManagedAddress, cache: &Cache<Self>) {
        self.tx()
            .to(&cache.pool)
            .typed(proxy_pool::PoolMockProxy)
            .lend_credit_account(amount, credit_account)
            .sync_call();
    }

    fn pool_repay(
        &self,
        repaid_amount: &BigUint,
        profit: &BigUint,
        loss: &BigUint,
        cache: &Cache<Self>,
    ) {
        self.tx()
            .to(&cache.pool)
            .typed(proxy_pool::PoolMockProxy)
            .repay_credit_account(repaid_amount, profit, loss)
            .sync_call();
    }

    /// Moves `amount` of `token` out of a credit account. Zero amounts are skipped.
    fn credit_account_transfer(
        &self,
        credit_account: &ManagedAddress,
        token: &TokenIdentifier,
        amount: &BigUint,
        to: &ManagedAddress,
    ) {
        if *amount == 0 {
            return;
        }

        self.tx()
            .to(credit_account)
            .typed(proxy_credit_account::CreditAccountProxy)
            .transfer(token, amount, to)
            .sync_call();
    }
}
