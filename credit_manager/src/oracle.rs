use common_constants::WAD_PRECISION;
use common_errors::ERROR_PRICE_FEED_NOT_FOUND;
use common_structs::PriceFeed;

use crate::storage;

multiversx_sc::imports!();

/// Reads USD prices straight from the price oracle's storage and converts between token
/// amounts and USD values (WAD). Both conversions round down.
#[multiversx_sc::module]
pub trait OracleModule: storage::Storage + common_math::SharedMathModule {
    fn fetch_price_feed(
        &self,
        oracle: &ManagedAddress,
        token: &TokenIdentifier,
        use_safe_prices: bool,
    ) -> PriceFeed<Self::Api> {
        let mapper = if use_safe_prices {
            self.oracle_safe_price_feed(oracle.clone(), token.clone())
        } else {
            self.oracle_price_feed(oracle.clone(), token.clone())
        };
        require!(!mapper.is_empty(), ERROR_PRICE_FEED_NOT_FOUND);

        let feed = mapper.get();
        require!(feed.price > 0, ERROR_PRICE_FEED_NOT_FOUND);

        feed
    }

    /// `amount * price / 10^decimals`, as a WAD value.
    fn convert_to_usd(
        &self,
        amount: &BigUint,
        feed: &PriceFeed<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let amount_dec = self.to_decimal(amount.clone(), feed.decimals as usize);
        let price = self.to_decimal_wad(feed.price.clone());

        self.mul_down(&amount_dec, &price, WAD_PRECISION)
    }

    /// `value_usd * 10^decimals / price`, in the token's smallest unit.
    fn convert_from_usd(
        &self,
        value_usd: &ManagedDecimal<Self::Api, NumDecimals>,
        feed: &PriceFeed<Self::Api>,
    ) -> BigUint {
        let price = self.to_decimal_wad(feed.price.clone());

        self.div_down(value_usd, &price, feed.decimals as usize)
            .into_raw_units()
            .clone()
    }
}
