use common_constants::DUST_BALANCE;
use common_errors::ERROR_ACTIVE_CREDIT_ACCOUNT_NOT_SET;
use common_proxies::proxy_credit_account;

use crate::{registry, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionAdapterModule:
    storage::Storage
    + validation::ValidationModule
    + registry::RegistryModule
    + common_events::EventsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    fn get_active_credit_account_or_revert(&self) -> ManagedAddress {
        let mapper = self.active_credit_account();
        require!(!mapper.is_empty(), ERROR_ACTIVE_CREDIT_ACCOUNT_NOT_SET);

        let credit_account = mapper.get();
        require!(!credit_account.is_zero(), ERROR_ACTIVE_CREDIT_ACCOUNT_NOT_SET);
        credit_account
    }

    /// Lets the adapter's target contract spend `amount` of `token` from the active account.
    fn process_approve_credit_account(
        &self,
        adapter: &ManagedAddress,
        token: &TokenIdentifier,
        amount: &BigUint,
    ) {
        let credit_account = self.get_active_credit_account_or_revert();
        self.get_token_mask_or_revert(token);
        let target_contract = self.adapter_to_contract(adapter).get();

        self.approve_spender(&credit_account, token, &target_contract, amount);
    }

    /// Calls the adapter's target contract from the active account and returns its raw output.
    fn process_execute(
        &self,
        adapter: &ManagedAddress,
        endpoint_name: &ManagedBuffer,
        args: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValueEncoded<ManagedBuffer> {
        let credit_account = self.get_active_credit_account_or_revert();
        let target_contract = self.adapter_to_contract(adapter).get();

        self.tx()
            .to(&credit_account)
            .typed(proxy_credit_account::CreditAccountProxy)
            .execute(&target_contract, endpoint_name, args)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Resets every `(spender, token)` allowance above dust to zero.
    fn process_revoke_adapter_allowances(
        &self,
        credit_account: &ManagedAddress,
        revocations: MultiValueEncoded<MultiValue2<ManagedAddress, TokenIdentifier>>,
    ) {
        self.get_credit_account_info_or_revert(credit_account);

        for revocation in revocations {
            let (spender, token) = revocation.into_tuple();
            self.require_non_zero_address(&spender);
            self.get_token_mask_or_revert(&token);

            let allowance = self
                .credit_account_allowance(credit_account.clone(), token.clone(), spender.clone())
                .get();
            if allowance > DUST_BALANCE {
                self.approve_spender(credit_account, &token, &spender, &BigUint::zero());
            }
        }
    }

    fn approve_spender(
        &self,
        credit_account: &ManagedAddress,
        token: &TokenIdentifier,
        spender: &ManagedAddress,
        amount: &BigUint,
    ) {
        self.tx()
            .to(credit_account)
            .typed(proxy_credit_account::CreditAccountProxy)
            .approve(token, spender, amount)
            .sync_call();
    }
}
