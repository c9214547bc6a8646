use common_errors::{
    ERROR_CALLER_NOT_ADAPTER, ERROR_CALLER_NOT_CONFIGURATOR, ERROR_CALLER_NOT_CREDIT_FACADE,
    ERROR_REENTRANCY,
};
use common_structs::GuardStatus;
use multiversx_sc::api::StorageMapperApi;

use crate::storage;

multiversx_sc::imports!();

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    CreditFacade,
    Adapter,
    CreditConfigurator,
}

/// Every state changing entry point of the manager.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    OpenCreditAccount,
    CloseCreditAccount,
    LiquidateCreditAccount,
    ManageDebt,
    AddCollateral,
    WithdrawCollateral,
    UpdateQuota,
    FullCollateralCheck,
    RevokeAdapterAllowances,
    SetActiveCreditAccount,
    SetFlag,
    ApproveCreditAccount,
    Execute,
    Configure,
}

impl Operation {
    /// Role a caller must hold to run the operation.
    pub const fn required_role(self) -> Role {
        match self {
            Operation::ApproveCreditAccount | Operation::Execute => Role::Adapter,
            Operation::Configure => Role::CreditConfigurator,
            Operation::OpenCreditAccount
            | Operation::CloseCreditAccount
            | Operation::LiquidateCreditAccount
            | Operation::ManageDebt
            | Operation::AddCollateral
            | Operation::WithdrawCollateral
            | Operation::UpdateQuota
            | Operation::FullCollateralCheck
            | Operation::RevokeAdapterAllowances
            | Operation::SetActiveCreditAccount
            | Operation::SetFlag => Role::CreditFacade,
        }
    }
}

/// Holds the global guard in `Executing` and puts it back to `Idle` when dropped.
/// A failing call never reaches the drop, the VM reverts the guard together with everything else.
pub struct ReentrancyLock<SA>
where
    SA: StorageMapperApi,
{
    status: SingleValueMapper<SA, GuardStatus>,
}

impl<SA> Drop for ReentrancyLock<SA>
where
    SA: StorageMapperApi,
{
    fn drop(&mut self) {
        self.status.set(GuardStatus::Idle);
    }
}

#[multiversx_sc::module]
pub trait AccessModule: storage::Storage {
    /// Single entry wrapper of every mutating endpoint: role check first, then the guard.
    ///
    /// Bind the returned lock to a named variable (`let _lock = ...`) so it lives until the
    /// endpoint returns.
    fn enter(&self, operation: Operation) -> ReentrancyLock<Self::Api> {
        self.require_role(operation.required_role());
        self.acquire_lock()
    }

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        match role {
            Role::CreditFacade => {
                let facade = self.credit_facade();
                require!(
                    !facade.is_empty() && caller == facade.get(),
                    ERROR_CALLER_NOT_CREDIT_FACADE
                );
            },
            Role::Adapter => {
                require!(
                    !self.adapter_to_contract(&caller).is_empty(),
                    ERROR_CALLER_NOT_ADAPTER
                );
            },
            Role::CreditConfigurator => {
                require!(
                    caller == self.credit_configurator().get(),
                    ERROR_CALLER_NOT_CONFIGURATOR
                );
            },
        }
    }

    fn acquire_lock(&self) -> ReentrancyLock<Self::Api> {
        let status = self.guard_status();
        require!(status.get() == GuardStatus::Idle, ERROR_REENTRANCY);
        status.set(GuardStatus::Executing);

        ReentrancyLock { status }
    }
}
