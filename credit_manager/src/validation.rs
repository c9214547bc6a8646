use common_errors::{
    ERROR_CREDIT_ACCOUNT_DOES_NOT_EXIST, ERROR_DEBT_UPDATED_TWICE_IN_ONE_BLOCK,
    ERROR_TOO_MANY_ENABLED_TOKENS, ERROR_ZERO_ADDRESS,
};
use common_structs::{CreditAccountInfo, TokenMask};

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage + common_events::EventsModule {
    /// Ledger record of an open account.
    ///
    /// # Errors
    /// - `ERROR_CREDIT_ACCOUNT_DOES_NOT_EXIST`: never opened, closed or liquidated.
    fn get_credit_account_info_or_revert(
        &self,
        credit_account: &ManagedAddress,
    ) -> CreditAccountInfo<Self::Api> {
        let mapper = self.credit_account_info(credit_account);
        require!(!mapper.is_empty(), ERROR_CREDIT_ACCOUNT_DOES_NOT_EXIST);
        mapper.get()
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ZERO_ADDRESS);
    }

    /// Debt may change at most once per block.
    fn require_debt_not_updated_in_block(
        &self,
        info: &CreditAccountInfo<Self::Api>,
        block_nonce: u64,
    ) {
        require!(
            info.last_debt_update != block_nonce,
            ERROR_DEBT_UPDATED_TWICE_IN_ONE_BLOCK
        );
    }

    /// Writes a new enabled tokens mask after checking it against the per account ceiling.
    fn save_enabled_tokens_mask(
        &self,
        credit_account: &ManagedAddress,
        info: &mut CreditAccountInfo<Self::Api>,
        enabled_tokens_mask: TokenMask,
        max_enabled_tokens: usize,
    ) {
        require!(
            enabled_tokens_mask.calc_enabled_tokens() <= max_enabled_tokens,
            ERROR_TOO_MANY_ENABLED_TOKENS
        );

        info.enabled_tokens_mask = enabled_tokens_mask;
        self.enabled_tokens_mask_event(credit_account, &enabled_tokens_mask);
    }
}
