#![no_std]

use common_constants::{BPS_PRECISION, RAY_PRECISION, UNITS_PRECISION, WAD_PRECISION};

multiversx_sc::imports!();

/// Fixed-point helpers over `ManagedDecimal`. Every operation rounds down, in favour of the protocol.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b`, floored at `precision`.
    fn mul_down(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        a.clone().mul_with_precision(b.clone(), precision)
    }

    /// `a / b`, floored at `precision`.
    fn div_down(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        // Scale the numerator so the quotient lands directly at `precision`
        let numerator = a.rescale(precision + b.scale());
        let quotient = numerator.into_raw_units() / b.into_raw_units();

        self.to_decimal(quotient, precision)
    }

    /// `value * bps / 10_000`, kept at the scale of `value`.
    fn mul_bps_down(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        bps: u16,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_down(value, &self.to_decimal_bps(BigUint::from(bps)), value.scale())
    }

    fn to_decimal_units(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, UNITS_PRECISION)
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_ray(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn to_decimal_bps(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn get_min(
        self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }
}
