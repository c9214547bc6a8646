#![no_std]

multiversx_sc::imports!();

/// Adapter target used by credit account tests. Pays out the requested token from its own
/// balance and reports the amount sent.
#[multiversx_sc::contract]
pub trait SwapMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(swap)]
    fn swap(&self, wanted_token: TokenIdentifier, wanted_amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&caller)
            .single_esdt(&wanted_token, 0, &wanted_amount)
            .transfer();

        self.swap_calls().update(|calls| *calls += 1);
        wanted_amount
    }

    #[view(getSwapCalls)]
    #[storage_mapper("swap_calls")]
    fn swap_calls(&self) -> SingleValueMapper<u64>;
}
