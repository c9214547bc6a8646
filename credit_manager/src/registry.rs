use common_constants::{MAX_COLLATERAL_TOKENS, PERCENTAGE_FACTOR};
use common_errors::{
    ERROR_INCORRECT_PARAMETER, ERROR_INVALID_LIQUIDATION_THRESHOLD, ERROR_TOKEN_ALREADY_ADDED, ERROR_TOKEN_NOT_ALLOWED,
    ERROR_TOO_MANY_TOKENS,
};
use common_structs::{CollateralTokenData, TokenMask};

use crate::storage;

multiversx_sc::imports!();

/// The RegistryModule maps collateral tokens to bit positions of a `TokenMask` and keeps
/// their liquidation threshold configuration.
///
/// **Scope**: Bits are handed out in registration order starting with the underlying at bit 0.
/// A registered token is never removed, so a bit never changes owner.
///
/// **Goal**: Resolve token <-> bit in O(1) and never let an unknown mask through.
#[multiversx_sc::module]
pub trait RegistryModule:
    storage::Storage
    + common_events::EventsModule
    + common_credit::CreditLogic
    + common_math::SharedMathModule
{
    /// Registers `token` at the next free bit with a zero liquidation threshold.
    ///
    /// # Errors
    /// - `ERROR_TOKEN_ALREADY_ADDED`
    /// - `ERROR_TOO_MANY_TOKENS`: 255 tokens are registered already.
    fn add_collateral_token(&self, token: &TokenIdentifier) -> usize {
        require!(self.token_mask(token).is_empty(), ERROR_TOKEN_ALREADY_ADDED);

        let bit = self.collateral_tokens_count().get();
        require!(bit < MAX_COLLATERAL_TOKENS, ERROR_TOO_MANY_TOKENS);

        self.token_mask(token).set(TokenMask::from_bit(bit));
        self.collateral_token_data(bit)
            .set(CollateralTokenData::new(token.clone(), 0));
        self.collateral_tokens_count().set(bit + 1);

        self.add_collateral_token_event(token, bit);
        bit
    }

    fn get_token_mask_or_revert(&self, token: &TokenIdentifier) -> TokenMask {
        let mapper = self.token_mask(token);
        require!(!mapper.is_empty(), ERROR_TOKEN_NOT_ALLOWED);
        mapper.get()
    }

    /// Bit position of a registered token.
    fn get_token_bit_or_revert(&self, token: &TokenIdentifier) -> usize {
        match self.get_token_mask_or_revert(token).lowest_bit() {
            Some(bit) => bit,
            None => sc_panic!(ERROR_TOKEN_NOT_ALLOWED),
        }
    }

    /// Resolves a single bit mask to its token.
    ///
    /// # Errors
    /// - `ERROR_TOKEN_NOT_ALLOWED`: empty mask, more than one bit, or a bit nobody owns.
    fn get_token_by_mask(&self, mask: &TokenMask) -> TokenIdentifier {
        require!(mask.is_single_bit(), ERROR_TOKEN_NOT_ALLOWED);
        match mask.lowest_bit() {
            Some(bit) => self.get_collateral_token_data_by_bit(bit).token,
            None => sc_panic!(ERROR_TOKEN_NOT_ALLOWED),
        }
    }

    fn get_collateral_token_data_by_bit(&self, bit: usize) -> CollateralTokenData<Self::Api> {
        require!(
            bit < self.collateral_tokens_count().get(),
            ERROR_TOKEN_NOT_ALLOWED
        );
        self.collateral_token_data(bit).get()
    }

    /// Rejects masks holding bits that no registered token owns.
    fn require_registered_mask(&self, mask: &TokenMask) {
        let count = self.collateral_tokens_count().get();
        for bit in mask.enabled_tokens() {
            require!(bit < count, ERROR_TOKEN_NOT_ALLOWED);
        }
    }

    /// Stores the liquidation threshold schedule of a registered token.
    ///
    /// `lt_initial` applies until `timestamp_ramp_start`, then the threshold moves linearly to
    /// `lt_final` over `ramp_duration` seconds. A start of `u64::MAX` means no ramp and
    /// `lt_initial` holds for good; a zero duration switches to `lt_final` at the start.
    ///
    /// # Errors
    /// - `ERROR_INVALID_LIQUIDATION_THRESHOLD`: a threshold above 100%.
    /// - `ERROR_INCORRECT_PARAMETER`: a scheduled ramp that would end past `u64::MAX`.
    fn set_collateral_token_data(
        &self,
        token: &TokenIdentifier,
        lt_initial: u16,
        lt_final: u16,
        timestamp_ramp_start: u64,
        ramp_duration: u64,
    ) {
        let pf = PERCENTAGE_FACTOR as u16;
        require!(
            lt_initial <= pf && lt_final <= pf,
            ERROR_INVALID_LIQUIDATION_THRESHOLD
        );

        let bit = self.get_token_bit_or_revert(token);
        let data = CollateralTokenData {
            token: token.clone(),
            lt_initial,
            lt_final,
            timestamp_ramp_start,
            ramp_duration,
        };
        require!(
            !data.is_ramping_scheduled()
                || timestamp_ramp_start.checked_add(ramp_duration).is_some(),
            ERROR_INCORRECT_PARAMETER
        );

        self.collateral_token_data(bit).set(&data);
        self.collateral_token_data_event(&data);
    }

    /// Current liquidation threshold of `token`, ramp applied.
    fn liquidation_threshold_of(&self, token: &TokenIdentifier) -> u16 {
        let bit = self.get_token_bit_or_revert(token);
        let data = self.collateral_token_data(bit).get();
        self.get_liquidation_threshold(&data, self.blockchain().get_block_timestamp())
    }
}
