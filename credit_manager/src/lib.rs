#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod access;
pub mod cache;
pub mod calculator;
pub mod config;
pub mod oracle;
pub mod positions;
pub mod quotas;
pub mod registry;
pub mod storage;
pub mod validation;
pub mod views;

use access::Operation;
use cache::Cache;
use common_constants::DEFAULT_MAX_ENABLED_TOKENS;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait CreditManager:
    positions::account::PositionAccountModule
    + positions::debt::PositionDebtModule
    + positions::collateral::PositionCollateralModule
    + positions::liquidation::PositionLiquidationModule
    + positions::adapters::PositionAdapterModule
    + access::AccessModule
    + calculator::CalculatorModule
    + quotas::QuotaModule
    + registry::RegistryModule
    + config::ConfigModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + views::ViewsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    /// Wires the manager to its collaborators and registers the pool's underlying at bit 0.
    /// The deployer becomes the credit configurator.
    ///
    /// # Arguments
    /// - `pool`: Pool lending the underlying; its token and interest index are read from its storage.
    /// - `account_factory`: Source of credit account handles.
    /// - `price_oracle`: Main and safe USD price feeds.
    /// - `quota_keeper`: Per account quotas and quota interest.
    #[init]
    fn init(
        &self,
        pool: ManagedAddress,
        account_factory: ManagedAddress,
        price_oracle: ManagedAddress,
        quota_keeper: ManagedAddress,
    ) {
        self.require_non_zero_address(&pool);
        self.require_non_zero_address(&account_factory);
        self.require_non_zero_address(&price_oracle);
        self.require_non_zero_address(&quota_keeper);

        let underlying = self.pool_underlying_token(pool.clone()).get();
        require!(underlying.is_valid_esdt_identifier(), ERROR_INCORRECT_PARAMETER);

        self.pool().set(&pool);
        self.account_factory().set(&account_factory);
        self.price_oracle().set(&price_oracle);
        self.quota_keeper().set(&quota_keeper);
        self.underlying().set(&underlying);
        self.credit_configurator()
            .set(self.blockchain().get_caller());
        self.max_enabled_tokens().set(DEFAULT_MAX_ENABLED_TOKENS);

        self.add_collateral_token(&underlying);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Opens a credit account for `borrower` with `debt` borrowed from the pool.
    ///
    /// # Returns
    /// - Address of the credit account.
    #[endpoint(openCreditAccount)]
    fn open_credit_account(&self, debt: BigUint, borrower: ManagedAddress) -> ManagedAddress {
        let _lock = self.enter(Operation::OpenCreditAccount);
        let mut cache = Cache::new(self);

        self.process_open_credit_account(&debt, &borrower, &mut cache)
    }

    /// Closes a debt free account and returns it to the factory.
    #[endpoint(closeCreditAccount)]
    fn close_credit_account(&self, credit_account: ManagedAddress) {
        let _lock = self.enter(Operation::CloseCreditAccount);

        self.process_close_credit_account(&credit_account);
    }

    /// Liquidates `credit_account` using a valuation computed by the facade.
    ///
    /// # Returns
    /// - `(remaining_funds, loss)`
    #[endpoint(liquidateCreditAccount)]
    fn liquidate_credit_account(
        &self,
        credit_account: ManagedAddress,
        collateral_debt_data: CollateralDebtData<Self::Api>,
        to: ManagedAddress,
        is_expired: bool,
    ) -> MultiValue2<BigUint, BigUint> {
        let _lock = self.enter(Operation::LiquidateCreditAccount);
        let mut cache = Cache::new(self);

        self.process_liquidation(
            &credit_account,
            &collateral_debt_data,
            &to,
            is_expired,
            &mut cache,
        )
        .into()
    }

    /// Increases or decreases the debt of `credit_account`.
    ///
    /// # Returns
    /// - `(new_debt, tokens_to_enable, tokens_to_disable)`
    #[endpoint(manageDebt)]
    fn manage_debt(
        &self,
        credit_account: ManagedAddress,
        amount: BigUint,
        enabled_tokens_mask: TokenMask,
        action: ManageDebtAction,
    ) -> MultiValue3<BigUint, TokenMask, TokenMask> {
        let _lock = self.enter(Operation::ManageDebt);
        let mut cache = Cache::new(self);

        self.process_manage_debt(
            &credit_account,
            &amount,
            enabled_tokens_mask,
            action,
            &mut cache,
        )
        .into()
    }

    /// Deposits the attached ESDT into `credit_account` on behalf of `payer`.
    ///
    /// # Returns
    /// - Mask of the deposited token.
    #[payable]
    #[endpoint(addCollateral)]
    fn add_collateral(&self, payer: ManagedAddress, credit_account: ManagedAddress) -> TokenMask {
        let _lock = self.enter(Operation::AddCollateral);
        let payment = self.call_value().single_esdt().clone();

        self.process_add_collateral(&payer, &credit_account, &payment)
    }

    /// # Returns
    /// - Mask of `token` when only dust is left behind, empty otherwise.
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(
        &self,
        credit_account: ManagedAddress,
        token: TokenIdentifier,
        amount: BigUint,
        to: ManagedAddress,
    ) -> TokenMask {
        let _lock = self.enter(Operation::WithdrawCollateral);

        self.process_withdraw_collateral(&credit_account, &token, &amount, &to)
    }

    /// # Returns
    /// - `(tokens_to_enable, tokens_to_disable)`
    #[endpoint(updateQuota)]
    fn update_quota(
        &self,
        credit_account: ManagedAddress,
        token: TokenIdentifier,
        quota_change: BigInt,
        min_quota: BigUint,
        max_quota: BigUint,
    ) -> MultiValue2<TokenMask, TokenMask> {
        let _lock = self.enter(Operation::UpdateQuota);
        let mut cache = Cache::new(self);

        self.process_update_quota(
            &credit_account,
            &token,
            &quota_change,
            &min_quota,
            &max_quota,
            &mut cache,
        )
        .into()
    }

    /// Checks that the account stays above `min_health_factor` and persists the pruned mask.
    ///
    /// # Arguments
    /// - `collateral_hints`: single bit masks evaluated first, in the given order.
    ///
    /// # Returns
    /// - The enabled tokens mask now stored for the account.
    #[endpoint(fullCollateralCheck)]
    fn full_collateral_check(
        &self,
        credit_account: ManagedAddress,
        enabled_tokens_mask: TokenMask,
        min_health_factor: u16,
        use_safe_prices: bool,
        collateral_hints: MultiValueEncoded<TokenMask>,
    ) -> TokenMask {
        let _lock = self.enter(Operation::FullCollateralCheck);
        let mut cache = Cache::new(self);
        let hints = self.collect_collateral_hints(collateral_hints);

        self.process_full_collateral_check(
            &credit_account,
            enabled_tokens_mask,
            &hints,
            min_health_factor,
            use_safe_prices,
            &mut cache,
        )
    }

    /// Zeroes the `(spender, token)` allowances of `credit_account` that are above dust.
    #[endpoint(revokeAdapterAllowances)]
    fn revoke_adapter_allowances(
        &self,
        credit_account: ManagedAddress,
        revocations: MultiValueEncoded<MultiValue2<ManagedAddress, TokenIdentifier>>,
    ) {
        let _lock = self.enter(Operation::RevokeAdapterAllowances);

        self.process_revoke_adapter_allowances(&credit_account, revocations);
    }

    /// Points adapters at `credit_account`. A zero address unsets the pointer.
    #[endpoint(setActiveCreditAccount)]
    fn set_active_credit_account(&self, credit_account: ManagedAddress) {
        let _lock = self.enter(Operation::SetActiveCreditAccount);

        if credit_account.is_zero() {
            self.active_credit_account().clear();
        } else {
            self.active_credit_account().set(&credit_account);
        }
    }

    #[endpoint(setFlagFor)]
    fn set_flag_for(&self, credit_account: ManagedAddress, flag: u16, value: bool) {
        let _lock = self.enter(Operation::SetFlag);

        let mut info = self.get_credit_account_info_or_revert(&credit_account);
        info.set_flag(flag, value);
        self.credit_account_info(&credit_account).set(&info);
    }

    /// ADAPTERS ///

    /// Approves the calling adapter's target contract on the active credit account.
    #[endpoint(approveCreditAccount)]
    fn approve_credit_account(&self, token: TokenIdentifier, amount: BigUint) {
        let _lock = self.enter(Operation::ApproveCreditAccount);
        let adapter = self.blockchain().get_caller();

        self.process_approve_credit_account(&adapter, &token, &amount);
    }

    /// Calls `endpoint_name` on the calling adapter's target contract from the active account.
    #[endpoint(execute)]
    fn execute(
        &self,
        endpoint_name: ManagedBuffer,
        args: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValueEncoded<ManagedBuffer> {
        let _lock = self.enter(Operation::Execute);
        let adapter = self.blockchain().get_caller();

        self.process_execute(&adapter, &endpoint_name, args)
    }
}
