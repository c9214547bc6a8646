#![no_std]

use common_constants::RAY;

multiversx_sc::imports!();

/// Lending pool stand-in. Lends its underlying to credit accounts and books repayments.
/// The base interest index is set by the owner instead of accruing over time, and
/// liquidity is seeded directly into the contract balance.
#[multiversx_sc::contract]
pub trait PoolMock {
    #[init]
    fn init(&self, underlying_token: TokenIdentifier) {
        self.underlying_token().set(&underlying_token);
        self.base_interest_index().set(BigUint::from(RAY));
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setBaseInterestIndex)]
    fn set_base_interest_index(&self, index: BigUint) {
        self.base_interest_index().set(index);
    }

    #[endpoint(lendCreditAccount)]
    fn lend_credit_account(&self, amount: BigUint, credit_account: ManagedAddress) {
        self.total_borrowed().update(|borrowed| *borrowed += &amount);
        self.tx()
            .to(&credit_account)
            .single_esdt(&self.underlying_token().get(), 0, &amount)
            .transfer();
    }

    #[endpoint(repayCreditAccount)]
    fn repay_credit_account(&self, repaid_amount: BigUint, profit: BigUint, loss: BigUint) {
        self.total_borrowed().update(|borrowed| {
            if *borrowed > repaid_amount {
                *borrowed -= &repaid_amount;
            } else {
                *borrowed = BigUint::zero();
            }
        });
        self.total_profit().update(|total| *total += &profit);
        self.total_loss().update(|total| *total += &loss);
        self.repay_calls().update(|calls| *calls += 1);
    }

    #[view(getUnderlyingToken)]
    #[storage_mapper("underlying_token")]
    fn underlying_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getBaseInterestIndex)]
    #[storage_mapper("base_interest_index")]
    fn base_interest_index(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalBorrowed)]
    #[storage_mapper("total_borrowed")]
    fn total_borrowed(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalProfit)]
    #[storage_mapper("total_profit")]
    fn total_profit(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalLoss)]
    #[storage_mapper("total_loss")]
    fn total_loss(&self) -> SingleValueMapper<BigUint>;

    #[view(getRepayCalls)]
    #[storage_mapper("repay_calls")]
    fn repay_calls(&self) -> SingleValueMapper<u64>;
}
