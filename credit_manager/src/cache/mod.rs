use common_math::SharedMathModule;
use common_structs::{CollateralTokenData, FeeParameters, PriceFeed, TokenMask};

multiversx_sc::imports!();

/// Per call snapshot of the manager configuration and of everything it reads from its
/// collaborators. Price feeds and token data are fetched once and reused for the whole call.
pub struct Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::registry::RegistryModule + crate::storage::Storage,
{
    sc_ref: &'a C,

    pub prices: ManagedMapEncoded<C::Api, TokenIdentifier<C::Api>, PriceFeed<C::Api>>,
    pub safe_prices: ManagedMapEncoded<C::Api, TokenIdentifier<C::Api>, PriceFeed<C::Api>>,
    pub token_data: ManagedMapEncoded<C::Api, usize, CollateralTokenData<C::Api>>,
    pub pool: ManagedAddress<C::Api>,
    pub price_oracle: ManagedAddress<C::Api>,
    pub quota_keeper: ManagedAddress<C::Api>,
    pub underlying: TokenIdentifier<C::Api>,
    pub cumulative_index_now: ManagedDecimal<C::Api, NumDecimals>,
    pub fees: FeeParameters,
    pub quoted_tokens_mask: TokenMask,
    pub max_enabled_tokens: usize,
    pub timestamp: u64,
    pub block_nonce: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::registry::RegistryModule + crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let pool = sc_ref.pool().get();
        let cumulative_index_now = sc_ref.to_decimal_ray(sc_ref.pool_base_interest_index(pool.clone()).get());

        Cache {
            sc_ref,
            prices: ManagedMapEncoded::new(),
            safe_prices: ManagedMapEncoded::new(),
            token_data: ManagedMapEncoded::new(),
            pool,
            price_oracle: sc_ref.price_oracle().get(),
            quota_keeper: sc_ref.quota_keeper().get(),
            underlying: sc_ref.underlying().get(),
            cumulative_index_now,
            fees: sc_ref.fees().get(),
            quoted_tokens_mask: sc_ref.quoted_tokens_mask().get(),
            max_enabled_tokens: sc_ref.max_enabled_tokens().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            block_nonce: sc_ref.blockchain().get_block_nonce(),
        }
    }

    pub fn get_cached_price_feed(
        &mut self,
        token: &TokenIdentifier<C::Api>,
        use_safe_prices: bool,
    ) -> PriceFeed<C::Api> {
        let cached = if use_safe_prices {
            &self.safe_prices
        } else {
            &self.prices
        };
        if cached.contains(token) {
            return cached.get(token);
        }

        let feed = self
            .sc_ref
            .fetch_price_feed(&self.price_oracle, token, use_safe_prices);
        if use_safe_prices {
            self.safe_prices.put(token, &feed);
        } else {
            self.prices.put(token, &feed);
        }

        feed
    }

    pub fn get_cached_token_data(&mut self, bit: usize) -> CollateralTokenData<C::Api> {
        if self.token_data.contains(&bit) {
            return self.token_data.get(&bit);
        }

        let data = self.sc_ref.get_collateral_token_data_by_bit(bit);
        self.token_data.put(&bit, &data);

        data
    }

    /// Effective liquidation threshold of the token at `bit` for the current block.
    pub fn get_liquidation_threshold(&mut self, bit: usize) -> u16 {
        let data = self.get_cached_token_data(bit);
        self.sc_ref.get_liquidation_threshold(&data, self.timestamp)
    }
}
