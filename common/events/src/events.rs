#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("open_credit_account")]
    fn open_credit_account_event(
        &self,
        #[indexed] credit_account: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] debt: &BigUint,
        #[indexed] cumulative_index: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("close_credit_account")]
    fn close_credit_account_event(
        &self,
        #[indexed] credit_account: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
    );

    #[event("liquidate_credit_account")]
    fn liquidate_credit_account_event(
        &self,
        #[indexed] credit_account: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] amount_to_pool: &BigUint,
        #[indexed] remaining_funds: &BigUint,
        #[indexed] loss: &BigUint,
        #[indexed] is_expired: bool,
    );

    // Emitted for both directions, `action` tells which one:
    // 1. IncreaseDebt -> amount is the newly lent principal
    // 2. DecreaseDebt -> amount is what the account paid to the pool, interest and fees included
    #[event("manage_debt")]
    fn manage_debt_event(
        &self,
        #[indexed] credit_account: &ManagedAddress,
        #[indexed] action: ManageDebtAction,
        #[indexed] amount: &BigUint,
        #[indexed] new_debt: &BigUint,
        #[indexed] cumulative_index: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("add_collateral")]
    fn add_collateral_event(
        &self,
        #[indexed] credit_account: &ManagedAddress,
        #[indexed] payer: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("withdraw_collateral")]
    fn withdraw_collateral_event(
        &self,
        #[indexed] credit_account: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] to: &ManagedAddress,
    );

    #[event("update_quota")]
    fn update_quota_event(
        &self,
        #[indexed] credit_account: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] quota_change: &BigInt,
        #[indexed] cumulative_quota_interest: &BigUint,
        #[indexed] quota_fees: &BigUint,
    );

    #[event("enabled_tokens_mask")]
    fn enabled_tokens_mask_event(
        &self,
        #[indexed] credit_account: &ManagedAddress,
        #[indexed] enabled_tokens_mask: &TokenMask,
    );

    #[event("add_collateral_token")]
    fn add_collateral_token_event(&self, #[indexed] token: &TokenIdentifier, #[indexed] bit: usize);

    #[event("set_collateral_token_data")]
    fn collateral_token_data_event(&self, #[indexed] data: &CollateralTokenData<Self::Api>);

    #[event("set_fees")]
    fn fees_event(&self, #[indexed] fees: &FeeParameters);

    #[event("set_quoted_mask")]
    fn quoted_mask_event(&self, #[indexed] quoted_tokens_mask: &TokenMask);

    #[event("set_max_enabled_tokens")]
    fn max_enabled_tokens_event(&self, #[indexed] max_enabled_tokens: usize);

    #[event("set_contract_allowance")]
    fn contract_allowance_event(
        &self,
        #[indexed] adapter: &ManagedAddress,
        #[indexed] target_contract: &ManagedAddress,
    );

    #[event("set_credit_facade")]
    fn credit_facade_event(&self, #[indexed] credit_facade: &ManagedAddress);

    #[event("set_credit_configurator")]
    fn credit_configurator_event(&self, #[indexed] credit_configurator: &ManagedAddress);

    #[event("set_price_oracle")]
    fn price_oracle_event(&self, #[indexed] price_oracle: &ManagedAddress);
}
