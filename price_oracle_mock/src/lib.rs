#![no_std]

use common_structs::PriceFeed;

multiversx_sc::imports!();

/// Price oracle stand-in. Keeps a main and a safe USD price per token, both set by the owner.
/// Consumers read the feeds straight from storage.
#[multiversx_sc::contract]
pub trait PriceOracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Sets the main feed. The safe feed follows it unless it was set explicitly.
    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, token: TokenIdentifier, price: BigUint, decimals: u8) {
        let feed = PriceFeed { price, decimals };
        if self.safe_price_feed(&token).is_empty() || !self.custom_safe_price(&token).get() {
            self.safe_price_feed(&token).set(&feed);
        }
        self.price_feed(&token).set(feed);
    }

    #[only_owner]
    #[endpoint(setSafePrice)]
    fn set_safe_price(&self, token: TokenIdentifier, price: BigUint, decimals: u8) {
        self.custom_safe_price(&token).set(true);
        self.safe_price_feed(&token)
            .set(PriceFeed { price, decimals });
    }

    #[view(getPriceFeed)]
    #[storage_mapper("price_feed")]
    fn price_feed(&self, token: &TokenIdentifier) -> SingleValueMapper<PriceFeed<Self::Api>>;

    #[view(getSafePriceFeed)]
    #[storage_mapper("safe_price_feed")]
    fn safe_price_feed(&self, token: &TokenIdentifier) -> SingleValueMapper<PriceFeed<Self::Api>>;

    #[storage_mapper("custom_safe_price")]
    fn custom_safe_price(&self, token: &TokenIdentifier) -> SingleValueMapper<bool>;
}
