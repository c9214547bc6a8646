use common_constants::{RAMP_NOT_SET, UNDERLYING_TOKEN_BIT};
use common_errors::{ERROR_INCORRECT_PARAMETER, ERROR_INVALID_FEES};
use common_structs::{CollateralTokenData, FeeParameters, TokenMask};

use crate::access::{self, Operation};
use crate::{registry, storage, validation};

multiversx_sc::imports!();

/// Configuration module of the credit manager.
///
/// Every endpoint here is restricted to the credit configurator, which starts out as the
/// deployer and can hand the role over with `setCreditConfigurator`.
///
/// The underlying token's liquidation threshold is not configurable on its own: it follows
/// the fee parameters as `liquidation_discount - fee_liquidation`.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + access::AccessModule
    + validation::ValidationModule
    + registry::RegistryModule
    + common_events::EventsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    /// Registers a collateral token at the next free bit.
    ///
    /// # Returns
    /// - The bit position assigned to the token.
    #[endpoint(addToken)]
    fn add_token(&self, token: TokenIdentifier) -> usize {
        let _lock = self.enter(Operation::Configure);
        require!(token.is_valid_esdt_identifier(), ERROR_INCORRECT_PARAMETER);

        self.add_collateral_token(&token)
    }

    /// Sets the liquidation threshold schedule of a non-underlying collateral token.
    #[endpoint(setCollateralTokenData)]
    fn set_collateral_token_data_endpoint(
        &self,
        token: TokenIdentifier,
        lt_initial: u16,
        lt_final: u16,
        timestamp_ramp_start: u64,
        ramp_duration: u64,
    ) {
        let _lock = self.enter(Operation::Configure);
        require!(token != self.underlying().get(), ERROR_INCORRECT_PARAMETER);

        self.set_collateral_token_data(
            &token,
            lt_initial,
            lt_final,
            timestamp_ramp_start,
            ramp_duration,
        );
    }

    /// Marks which registered tokens carry quotas. The underlying can never be quoted.
    #[endpoint(setQuotedMask)]
    fn set_quoted_mask(&self, quoted_tokens_mask: TokenMask) {
        let _lock = self.enter(Operation::Configure);
        require!(
            !quoted_tokens_mask.contains(UNDERLYING_TOKEN_BIT),
            ERROR_INCORRECT_PARAMETER
        );
        self.require_registered_mask(&quoted_tokens_mask);

        self.quoted_tokens_mask().set(quoted_tokens_mask);
        self.quoted_mask_event(&quoted_tokens_mask);
    }

    #[endpoint(setMaxEnabledTokens)]
    fn set_max_enabled_tokens(&self, max_enabled_tokens: usize) {
        let _lock = self.enter(Operation::Configure);
        require!(max_enabled_tokens > 0, ERROR_INCORRECT_PARAMETER);

        self.max_enabled_tokens().set(max_enabled_tokens);
        self.max_enabled_tokens_event(max_enabled_tokens);
    }

    /// Sets the protocol fees and re-derives the underlying liquidation threshold.
    ///
    /// # Errors
    /// - `ERROR_INVALID_FEES`: a value above 100% or a fee above its discount.
    #[endpoint(setFees)]
    fn set_fees(
        &self,
        fee_interest: u16,
        fee_liquidation: u16,
        liquidation_discount: u16,
        fee_liquidation_expired: u16,
        liquidation_discount_expired: u16,
    ) {
        let _lock = self.enter(Operation::Configure);

        let fees = FeeParameters {
            fee_interest,
            fee_liquidation,
            liquidation_discount,
            fee_liquidation_expired,
            liquidation_discount_expired,
        };
        require!(fees.is_valid(), ERROR_INVALID_FEES);

        self.fees().set(fees);
        self.fees_event(&fees);

        let underlying_data = CollateralTokenData {
            token: self.underlying().get(),
            lt_initial: fees.underlying_liquidation_threshold(),
            lt_final: fees.underlying_liquidation_threshold(),
            timestamp_ramp_start: RAMP_NOT_SET,
            ramp_duration: 0,
        };
        self.collateral_token_data(UNDERLYING_TOKEN_BIT)
            .set(&underlying_data);
        self.collateral_token_data_event(&underlying_data);
    }

    /// Allows `adapter` to act on credit accounts against `target_contract`.
    /// A zero target revokes the adapter.
    #[endpoint(setContractAllowance)]
    fn set_contract_allowance(&self, adapter: ManagedAddress, target_contract: ManagedAddress) {
        let _lock = self.enter(Operation::Configure);
        self.require_non_zero_address(&adapter);

        let previous_target = self.adapter_to_contract(&adapter);
        if !previous_target.is_empty() {
            self.contract_to_adapter(&previous_target.get()).clear();
        }

        if target_contract.is_zero() {
            self.adapter_to_contract(&adapter).clear();
        } else {
            self.adapter_to_contract(&adapter).set(&target_contract);
            self.contract_to_adapter(&target_contract).set(&adapter);
        }

        self.contract_allowance_event(&adapter, &target_contract);
    }

    #[endpoint(setCreditFacade)]
    fn set_credit_facade(&self, credit_facade: ManagedAddress) {
        let _lock = self.enter(Operation::Configure);
        self.require_non_zero_address(&credit_facade);

        self.credit_facade().set(&credit_facade);
        self.credit_facade_event(&credit_facade);
    }

    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, price_oracle: ManagedAddress) {
        let _lock = self.enter(Operation::Configure);
        self.require_non_zero_address(&price_oracle);

        self.price_oracle().set(&price_oracle);
        self.price_oracle_event(&price_oracle);
    }

    #[endpoint(setCreditConfigurator)]
    fn set_credit_configurator(&self, credit_configurator: ManagedAddress) {
        let _lock = self.enter(Operation::Configure);
        self.require_non_zero_address(&credit_configurator);

        self.credit_configurator().set(&credit_configurator);
        self.credit_configurator_event(&credit_configurator);
    }
}
