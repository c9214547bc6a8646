#![no_std]

use common_errors::ERROR_CALLER_NOT_CREDIT_MANAGER;

multiversx_sc::imports!();

/// Holds the funds of one leveraged position. Only the credit manager that owns the account
/// can move funds, grant allowances or call external contracts on its behalf.
#[multiversx_sc::contract]
pub trait CreditAccount {
    #[init]
    fn init(&self, credit_manager: ManagedAddress) {
        self.credit_manager().set(&credit_manager);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(transfer)]
    fn transfer(&self, token: TokenIdentifier, amount: BigUint, to: ManagedAddress) {
        self.require_credit_manager();

        self.tx().to(&to).single_esdt(&token, 0, &amount).transfer();
    }

    #[endpoint(approve)]
    fn approve(&self, token: TokenIdentifier, spender: ManagedAddress, amount: BigUint) {
        self.require_credit_manager();

        self.allowance(&token, &spender).set(&amount);
    }

    /// Calls `endpoint_name` on `target` with raw arguments and hands back the raw results.
    #[endpoint(execute)]
    fn execute(
        &self,
        target: ManagedAddress,
        endpoint_name: ManagedBuffer,
        args: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValueEncoded<ManagedBuffer> {
        self.require_credit_manager();

        let mut arguments = ManagedArgBuffer::new();
        for arg in args {
            arguments.push_arg_raw(arg);
        }

        let results = self
            .tx()
            .to(&target)
            .raw_call(endpoint_name)
            .arguments_raw(arguments)
            .returns(ReturnsRawResult)
            .sync_call();

        MultiValueEncoded::from(results)
    }

    #[view(getBalance)]
    fn get_balance(&self, token: TokenIdentifier) -> BigUint {
        self.blockchain().get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token), 0)
    }

    fn require_credit_manager(&self) {
        require!(
            self.blockchain().get_caller() == self.credit_manager().get(),
            ERROR_CALLER_NOT_CREDIT_MANAGER
        );
    }

    #[view(getCreditManager)]
    #[storage_mapper("credit_manager")]
    fn credit_manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getAllowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        token: &TokenIdentifier,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
