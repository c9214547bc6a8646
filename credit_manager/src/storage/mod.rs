use common_structs::{
    CollateralTokenData, CreditAccountInfo, FeeParameters, GuardStatus, PriceFeed, TokenMask,
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// COLLABORATORS ///

    #[view(getPool)]
    #[storage_mapper("pool")]
    fn pool(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getAccountFactory)]
    #[storage_mapper("account_factory")]
    fn account_factory(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getQuotaKeeper)]
    #[storage_mapper("quota_keeper")]
    fn quota_keeper(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCreditFacade)]
    #[storage_mapper("credit_facade")]
    fn credit_facade(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCreditConfigurator)]
    #[storage_mapper("credit_configurator")]
    fn credit_configurator(&self) -> SingleValueMapper<ManagedAddress>;

    /// The pool's underlying, cached at deployment. Always registered at bit 0.
    #[view(getUnderlying)]
    #[storage_mapper("underlying")]
    fn underlying(&self) -> SingleValueMapper<TokenIdentifier>;

    /// ACCOUNTS ///

    /// Ledger record of an open credit account. Empty once the account is closed or liquidated.
    #[storage_mapper("credit_account_info")]
    fn credit_account_info(
        &self,
        credit_account: &ManagedAddress,
    ) -> SingleValueMapper<CreditAccountInfo<Self::Api>>;

    #[view(getCreditAccounts)]
    #[storage_mapper("credit_accounts")]
    fn credit_accounts(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Account the allowed adapters operate on during the current multicall.
    #[view(getActiveCreditAccount)]
    #[storage_mapper("active_credit_account")]
    fn active_credit_account(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("guard_status")]
    fn guard_status(&self) -> SingleValueMapper<GuardStatus>;

    /// REGISTRY ///

    #[storage_mapper("collateral_token_data")]
    fn collateral_token_data(
        &self,
        bit: usize,
    ) -> SingleValueMapper<CollateralTokenData<Self::Api>>;

    /// Single bit mask of a registered token. Storing the mask keeps bit 0 distinguishable from "absent".
    #[storage_mapper("token_mask")]
    fn token_mask(&self, token: &TokenIdentifier) -> SingleValueMapper<TokenMask>;

    #[view(getCollateralTokensCount)]
    #[storage_mapper("collateral_tokens_count")]
    fn collateral_tokens_count(&self) -> SingleValueMapper<usize>;

    #[view(getQuotedTokensMask)]
    #[storage_mapper("quoted_tokens_mask")]
    fn quoted_tokens_mask(&self) -> SingleValueMapper<TokenMask>;

    #[view(getMaxEnabledTokens)]
    #[storage_mapper("max_enabled_tokens")]
    fn max_enabled_tokens(&self) -> SingleValueMapper<usize>;

    #[view(getFees)]
    #[storage_mapper("fees")]
    fn fees(&self) -> SingleValueMapper<FeeParameters>;

    /// ADAPTERS ///

    #[view(getAdapterToContract)]
    #[storage_mapper("adapter_to_contract")]
    fn adapter_to_contract(&self, adapter: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    #[view(getContractToAdapter)]
    #[storage_mapper("contract_to_adapter")]
    fn contract_to_adapter(
        &self,
        target_contract: &ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress>;

    /// PROXY STORAGE ///
    ///
    /// Current cumulative base interest index of the pool, RAY-scaled.
    #[storage_mapper_from_address("base_interest_index")]
    fn pool_base_interest_index(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("underlying_token")]
    fn pool_underlying_token(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("price_feed")]
    fn oracle_price_feed(
        &self,
        oracle_address: ManagedAddress,
        token: TokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("safe_price_feed")]
    fn oracle_safe_price_feed(
        &self,
        oracle_address: ManagedAddress,
        token: TokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>, ManagedAddress>;

    /// Quota the keeper holds for `token` on `credit_account`, in underlying units.
    #[storage_mapper_from_address("quotas")]
    fn keeper_quota(
        &self,
        quota_keeper_address: ManagedAddress,
        credit_account: ManagedAddress,
        token: TokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    /// Quota interest accrued by the keeper since the last settlement.
    #[storage_mapper_from_address("outstanding_interest")]
    fn keeper_outstanding_interest(
        &self,
        quota_keeper_address: ManagedAddress,
        credit_account: ManagedAddress,
        token: TokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("allowance")]
    fn credit_account_allowance(
        &self,
        credit_account: ManagedAddress,
        token: TokenIdentifier,
        spender: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;
}
