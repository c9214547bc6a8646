#![no_std]

use common_constants::PERCENTAGE_FACTOR;
use common_errors::{ERROR_QUOTA_LIMIT_EXCEEDED, ERROR_QUOTA_OUT_OF_BOUNDS};

multiversx_sc::imports!();

/// Quota keeper stand-in. Tracks per account quotas, outstanding quota interest set by the
/// owner, per token limits and a one-off increase fee.
#[multiversx_sc::contract]
pub trait QuotaKeeperMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Applies a signed quota change.
    ///
    /// # Returns
    /// - `(quota_interest, fees, enable, disable)`: interest accrued since the last update, the
    ///   increase fee, and whether the token bit has to be switched on or off.
    #[endpoint(updateQuota)]
    fn update_quota(
        &self,
        credit_account: ManagedAddress,
        token: TokenIdentifier,
        quota_change: BigInt,
        min_quota: BigUint,
        max_quota: BigUint,
    ) -> MultiValue4<BigUint, BigUint, bool, bool> {
        let quota_interest = self.outstanding_interest(&credit_account, &token).take();

        let old_quota = self.quotas(&credit_account, &token).get();
        let change = quota_change.magnitude();
        let (new_quota, fees) = if quota_change.sign() == Sign::Minus {
            let removed = if change > old_quota {
                old_quota.clone()
            } else {
                change
            };
            (&old_quota - &removed, BigUint::zero())
        } else {
            let fee_bps = self.quota_increase_fee(&token).get();
            let fees = (&change * fee_bps) / PERCENTAGE_FACTOR;
            (&old_quota + &change, fees)
        };

        require!(
            new_quota >= min_quota && new_quota <= max_quota,
            ERROR_QUOTA_OUT_OF_BOUNDS
        );
        let limit = self.token_limit(&token);
        require!(
            limit.is_empty() || new_quota <= limit.get(),
            ERROR_QUOTA_LIMIT_EXCEEDED
        );

        let enable = old_quota == 0 && new_quota > 0;
        let disable = old_quota > 0 && new_quota == 0;
        self.quotas(&credit_account, &token).set(&new_quota);

        (quota_interest, fees, enable, disable).into()
    }

    #[endpoint(accrueQuotaInterest)]
    fn accrue_quota_interest(
        &self,
        credit_account: ManagedAddress,
        tokens: MultiValueEncoded<TokenIdentifier>,
    ) {
        for token in tokens {
            self.outstanding_interest(&credit_account, &token).clear();
        }
        self.accrue_calls().update(|calls| *calls += 1);
    }

    #[endpoint(removeQuotas)]
    fn remove_quotas(
        &self,
        credit_account: ManagedAddress,
        tokens: MultiValueEncoded<TokenIdentifier>,
    ) {
        for token in tokens {
            self.quotas(&credit_account, &token).clear();
            self.outstanding_interest(&credit_account, &token).clear();
        }
    }

    #[endpoint(setLimitsToZero)]
    fn set_limits_to_zero(
        &self,
        credit_account: ManagedAddress,
        tokens: MultiValueEncoded<TokenIdentifier>,
    ) {
        for token in tokens {
            self.token_limit(&token).set(BigUint::zero());
        }
        self.limits_zeroed_for(&credit_account).set(true);
        self.set_limits_to_zero_calls().update(|calls| *calls += 1);
    }

    #[only_owner]
    #[endpoint(setOutstandingInterest)]
    fn set_outstanding_interest(
        &self,
        credit_account: ManagedAddress,
        token: TokenIdentifier,
        amount: BigUint,
    ) {
        self.outstanding_interest(&credit_account, &token).set(amount);
    }

    #[only_owner]
    #[endpoint(setQuotaIncreaseFee)]
    fn set_quota_increase_fee(&self, token: TokenIdentifier, fee_bps: u64) {
        self.quota_increase_fee(&token).set(fee_bps);
    }

    #[only_owner]
    #[endpoint(setTokenLimit)]
    fn set_token_limit(&self, token: TokenIdentifier, limit: BigUint) {
        self.token_limit(&token).set(limit);
    }

    #[view(getQuota)]
    #[storage_mapper("quotas")]
    fn quotas(
        &self,
        credit_account: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[view(getOutstandingInterest)]
    #[storage_mapper("outstanding_interest")]
    fn outstanding_interest(
        &self,
        credit_account: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[view(getTokenLimit)]
    #[storage_mapper("token_limit")]
    fn token_limit(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getQuotaIncreaseFee)]
    #[storage_mapper("quota_increase_fee")]
    fn quota_increase_fee(&self, token: &TokenIdentifier) -> SingleValueMapper<u64>;

    #[view(getLimitsZeroedFor)]
    #[storage_mapper("limits_zeroed_for")]
    fn limits_zeroed_for(&self, credit_account: &ManagedAddress) -> SingleValueMapper<bool>;

    #[view(getSetLimitsToZeroCalls)]
    #[storage_mapper("set_limits_to_zero_calls")]
    fn set_limits_to_zero_calls(&self) -> SingleValueMapper<u64>;

    #[view(getAccrueCalls)]
    #[storage_mapper("accrue_calls")]
    fn accrue_calls(&self) -> SingleValueMapper<u64>;
}
