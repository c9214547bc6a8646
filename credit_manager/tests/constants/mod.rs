use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;
pub const PERCENTAGE_FACTOR: u16 = 10_000;

pub const FEE_INTEREST: u16 = 1_000; // 10%
pub const FEE_LIQUIDATION: u16 = 150; // 1.5%
pub const LIQUIDATION_DISCOUNT: u16 = 9_600; // 4% premium
pub const FEE_LIQUIDATION_EXPIRED: u16 = 100; // 1%
pub const LIQUIDATION_DISCOUNT_EXPIRED: u16 = 9_800; // 2% premium

pub const WETH_LT: u16 = 8_500; // 85%
pub const WBTC_LT: u16 = 8_000; // 80%
pub const TKN_LT: u16 = 8_000; // 80%
pub const QTKN_LT: u16 = 9_000; // 90%

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_PRICE_IN_DOLLARS: u64 = 1; // $1
pub const USDC_DECIMALS: u8 = 6;

pub const WETH_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WETH-abcdef");
pub const WETH_PRICE_IN_DOLLARS: u64 = 2_000; // $2000
pub const WETH_DECIMALS: u8 = 18;

pub const WBTC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WBTC-abcdef");
pub const WBTC_PRICE_IN_DOLLARS: u64 = 40_000; // $40000
pub const WBTC_DECIMALS: u8 = 8;

pub const TKN_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("TKN-abcdef");
pub const TKN_PRICE_IN_DOLLARS: u64 = 10; // $10
pub const TKN_DECIMALS: u8 = 18;

/// Quoted collateral
pub const QTKN_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("QTKN-abcdef");
pub const QTKN_PRICE_IN_DOLLARS: u64 = 5; // $5
pub const QTKN_DECIMALS: u8 = 18;

pub const UNREGISTERED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NOPE-abcdef");

pub const USDC_BIT: usize = 0;
pub const WETH_BIT: usize = 1;
pub const WBTC_BIT: usize = 2;
pub const TKN_BIT: usize = 3;
pub const QTKN_BIT: usize = 4;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const FACADE_ADDRESS: TestAddress = TestAddress::new("facade");
pub const ADAPTER_ADDRESS: TestAddress = TestAddress::new("adapter");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");

pub const CREDIT_MANAGER_PATH: MxscPath = MxscPath::new("output/credit-manager.mxsc.json");
pub const CREDIT_ACCOUNT_PATH: MxscPath =
    MxscPath::new("../credit_account/output/credit-account.mxsc.json");
pub const ACCOUNT_FACTORY_PATH: MxscPath =
    MxscPath::new("../account_factory_mock/output/account-factory-mock.mxsc.json");
pub const POOL_PATH: MxscPath = MxscPath::new("../pool_mock/output/pool-mock.mxsc.json");
pub const PRICE_ORACLE_PATH: MxscPath =
    MxscPath::new("../price_oracle_mock/output/price-oracle-mock.mxsc.json");
pub const QUOTA_KEEPER_PATH: MxscPath =
    MxscPath::new("../quota_keeper_mock/output/quota-keeper-mock.mxsc.json");
pub const SWAP_PATH: MxscPath = MxscPath::new("../swap_mock/output/swap-mock.mxsc.json");
