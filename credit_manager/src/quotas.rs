use common_errors::ERROR_TOO_MANY_ENABLED_TOKENS;
use common_structs::{QuotedToken, TokenMask};

use crate::{cache::Cache, oracle, registry, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait QuotaModule:
    storage::Storage
    + registry::RegistryModule
    + oracle::OracleModule
    + common_events::EventsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    /// Collects the quota data of every token that is both enabled and quoted.
    ///
    /// Tokens whose quota dropped to zero keep their entry as long as their bit is set.
    ///
    /// # Returns
    /// - `(quoted_tokens, outstanding_interest)`: one entry per quoted enabled token in ascending
    ///   bit order, and the quota interest the keeper accrued on them since the last settlement.
    ///
    /// # Errors
    /// - `ERROR_TOO_MANY_ENABLED_TOKENS`: the quoted tokens alone exceed the per account ceiling.
    fn get_quoted_tokens_data(
        &self,
        credit_account: &ManagedAddress,
        quoted_enabled_mask: &TokenMask,
        cache: &mut Cache<Self>,
    ) -> (ManagedVec<QuotedToken<Self::Api>>, BigUint) {
        require!(
            quoted_enabled_mask.calc_enabled_tokens() <= cache.max_enabled_tokens,
            ERROR_TOO_MANY_ENABLED_TOKENS
        );

        let mut quoted_tokens = ManagedVec::new();
        let mut outstanding_interest = BigUint::zero();
        for bit in quoted_enabled_mask.enabled_tokens() {
            let token = cache.get_cached_token_data(bit).token;
            let quota = self
                .keeper_quota(
                    cache.quota_keeper.clone(),
                    credit_account.clone(),
                    token.clone(),
                )
                .get();
            outstanding_interest += self
                .keeper_outstanding_interest(
                    cache.quota_keeper.clone(),
                    credit_account.clone(),
                    token.clone(),
                )
                .get();

            quoted_tokens.push(QuotedToken {
                token,
                quota,
                liquidation_threshold: cache.get_liquidation_threshold(bit),
            });
        }

        (quoted_tokens, outstanding_interest)
    }

    fn quoted_token_list(
        &self,
        quoted_tokens: &ManagedVec<QuotedToken<Self::Api>>,
    ) -> MultiValueEncoded<TokenIdentifier> {
        let mut tokens = MultiValueEncoded::new();
        for quoted in quoted_tokens.iter() {
            tokens.push(quoted.token.clone());
        }
        tokens
    }
}
