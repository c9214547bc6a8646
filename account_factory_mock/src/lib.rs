#![no_std]

use common_errors::ERROR_ACCOUNT_TEMPLATE_EMPTY;
use common_proxies::proxy_credit_account;

multiversx_sc::imports!();

/// Pool of reusable credit accounts. Returned accounts are handed out again first;
/// new ones are deployed from the template with the caller as their credit manager.
#[multiversx_sc::contract]
pub trait AccountFactoryMock {
    #[init]
    fn init(&self, account_template: ManagedAddress) {
        self.account_template().set(&account_template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(takeCreditAccount)]
    fn take_credit_account(&self) -> ManagedAddress {
        self.take_calls().update(|calls| *calls += 1);

        if let Some(credit_account) = self.free_accounts().pop_front() {
            return credit_account;
        }

        require!(
            !self.account_template().is_empty(),
            ERROR_ACCOUNT_TEMPLATE_EMPTY
        );

        let caller = self.blockchain().get_caller();
        self.tx()
            .typed(proxy_credit_account::CreditAccountProxy)
            .init(&caller)
            .from_source(self.account_template().get())
            .code_metadata(
                CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE_BY_SC,
            )
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }

    #[endpoint(returnCreditAccount)]
    fn return_credit_account(&self, credit_account: ManagedAddress) {
        self.return_calls().update(|calls| *calls += 1);
        self.free_accounts().push_back(credit_account);
    }

    #[view(getAccountTemplate)]
    #[storage_mapper("account_template")]
    fn account_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getFreeAccounts)]
    #[storage_mapper("free_accounts")]
    fn free_accounts(&self) -> QueueMapper<ManagedAddress>;

    #[view(getTakeCalls)]
    #[storage_mapper("take_calls")]
    fn take_calls(&self) -> SingleValueMapper<u64>;

    #[view(getReturnCalls)]
    #[storage_mapper("return_calls")]
    fn return_calls(&self) -> SingleValueMapper<u64>;
}
