use common_constants::PERCENTAGE_FACTOR;
use common_errors::{ERROR_CREDIT_ACCOUNT_DOES_NOT_EXIST, ERROR_INCORRECT_PARAMETER};
use common_structs::{
    CollateralCalcTask, CollateralDebtData, CollateralTokenData, CreditAccountInfo, TokenMask,
};

use crate::{cache::Cache, calculator, oracle, quotas, registry, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + registry::RegistryModule
    + oracle::OracleModule
    + quotas::QuotaModule
    + calculator::CalculatorModule
    + common_events::EventsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    /// Values an account with its stored mask and main prices.
    ///
    /// # Errors
    /// - `ERROR_INCORRECT_PARAMETER`: the lazy task is internal to the collateral check.
    #[view(calcDebtAndCollateral)]
    fn calc_debt_and_collateral(
        &self,
        credit_account: ManagedAddress,
        task: CollateralCalcTask,
    ) -> CollateralDebtData<Self::Api> {
        require!(!task.is_lazy(), ERROR_INCORRECT_PARAMETER);

        let mut cache = Cache::new(self);
        let info = self.get_credit_account_info_or_revert(&credit_account);
        self.calc_debt_and_collateral_data(
            &credit_account,
            &info,
            info.enabled_tokens_mask,
            task,
            PERCENTAGE_FACTOR as u16,
            &ManagedVec::new(),
            false,
            &mut cache,
        )
    }

    /// True when the threshold-weighted value falls short of
    /// `total_debt_usd * min_health_factor / 10_000`. Any health factor is accepted here.
    #[view(isLiquidatable)]
    fn is_liquidatable(&self, credit_account: ManagedAddress, min_health_factor: u16) -> bool {
        let mut cache = Cache::new(self);
        let info = self.get_credit_account_info_or_revert(&credit_account);
        let data = self.calc_debt_and_collateral_data(
            &credit_account,
            &info,
            info.enabled_tokens_mask,
            CollateralCalcTask::FullCollateralCheckLazy,
            min_health_factor,
            &ManagedVec::new(),
            false,
            &mut cache,
        );

        data.twv_usd < self.mul_bps_down(&data.total_debt_usd, min_health_factor)
    }

    #[view(getCreditAccountInfo)]
    fn get_credit_account_info(
        &self,
        credit_account: ManagedAddress,
    ) -> CreditAccountInfo<Self::Api> {
        self.get_credit_account_info_or_revert(&credit_account)
    }

    #[view(getBorrowerOrRevert)]
    fn get_borrower_or_revert(&self, credit_account: ManagedAddress) -> ManagedAddress {
        let borrower = self
            .get_credit_account_info_or_revert(&credit_account)
            .borrower;
        require!(!borrower.is_zero(), ERROR_CREDIT_ACCOUNT_DOES_NOT_EXIST);
        borrower
    }

    #[view(getEnabledTokensMask)]
    fn get_enabled_tokens_mask(&self, credit_account: ManagedAddress) -> TokenMask {
        self.get_credit_account_info_or_revert(&credit_account)
            .enabled_tokens_mask
    }

    #[view(flagsOf)]
    fn flags_of(&self, credit_account: ManagedAddress) -> u16 {
        self.get_credit_account_info_or_revert(&credit_account).flags
    }

    #[view(getTokenMaskOrRevert)]
    fn get_token_mask_view(&self, token: TokenIdentifier) -> TokenMask {
        self.get_token_mask_or_revert(&token)
    }

    #[view(getTokenByMask)]
    fn get_token_by_mask_view(&self, token_mask: TokenMask) -> TokenIdentifier {
        self.get_token_by_mask(&token_mask)
    }

    #[view(getCollateralTokenData)]
    fn get_collateral_token_data(&self, token: TokenIdentifier) -> CollateralTokenData<Self::Api> {
        let bit = self.get_token_bit_or_revert(&token);
        self.collateral_token_data(bit).get()
    }

    /// Current liquidation threshold of `token` in basis points.
    #[view(liquidationThresholds)]
    fn liquidation_thresholds(&self, token: TokenIdentifier) -> u16 {
        self.liquidation_threshold_of(&token)
    }
}
