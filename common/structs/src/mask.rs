use core::ops::{BitAnd, BitOr, BitOrAssign};

use common_constants::{TOKEN_MASK_BITS, UNDERLYING_TOKEN_BIT};
use multiversx_sc::derive_imports::*;

const LIMB_BITS: usize = 64;
const LIMBS: usize = TOKEN_MASK_BITS / LIMB_BITS;

/// A set of registry bit positions, one bit per collateral token.
///
/// Backed by four 64-bit limbs so every position of a 256-bit mask is addressable.
/// Positions outside `0..256` are never members: `contains` returns false for them and
/// `enable` / `disable` leave the mask unchanged.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct TokenMask {
    limbs: [u64; LIMBS],
}

impl TokenMask {
    pub const EMPTY: TokenMask = TokenMask { limbs: [0; LIMBS] };

    pub const fn from_bit(bit: usize) -> Self {
        let mut limbs = [0u64; LIMBS];
        if bit < TOKEN_MASK_BITS {
            limbs[bit / LIMB_BITS] = 1u64 << (bit % LIMB_BITS);
        }
        TokenMask { limbs }
    }

    pub const fn underlying() -> Self {
        Self::from_bit(UNDERLYING_TOKEN_BIT)
    }

    pub fn from_bits(bits: &[usize]) -> Self {
        let mut mask = Self::EMPTY;
        for bit in bits {
            mask.enable(*bit);
        }
        mask
    }

    pub fn is_empty(&self) -> bool {
        self.limbs.iter().all(|limb| *limb == 0)
    }

    pub fn contains(&self, bit: usize) -> bool {
        if bit >= TOKEN_MASK_BITS {
            return false;
        }
        self.limbs[bit / LIMB_BITS] & (1u64 << (bit % LIMB_BITS)) != 0
    }

    pub fn enable(&mut self, bit: usize) {
        if bit < TOKEN_MASK_BITS {
            self.limbs[bit / LIMB_BITS] |= 1u64 << (bit % LIMB_BITS);
        }
    }

    pub fn disable(&mut self, bit: usize) {
        if bit < TOKEN_MASK_BITS {
            self.limbs[bit / LIMB_BITS] &= !(1u64 << (bit % LIMB_BITS));
        }
    }

    pub fn union(&self, other: &TokenMask) -> TokenMask {
        let mut limbs = self.limbs;
        for (limb, other_limb) in limbs.iter_mut().zip(other.limbs.iter()) {
            *limb |= *other_limb;
        }
        TokenMask { limbs }
    }

    pub fn intersection(&self, other: &TokenMask) -> TokenMask {
        let mut limbs = self.limbs;
        for (limb, other_limb) in limbs.iter_mut().zip(other.limbs.iter()) {
            *limb &= *other_limb;
        }
        TokenMask { limbs }
    }

    /// Bits set in `self` and not in `other`.
    pub fn difference(&self, other: &TokenMask) -> TokenMask {
        let mut limbs = self.limbs;
        for (limb, other_limb) in limbs.iter_mut().zip(other.limbs.iter()) {
            *limb &= !*other_limb;
        }
        TokenMask { limbs }
    }

    /// Applies a pair of enable / disable deltas. Disabling wins over enabling.
    pub fn apply(&self, tokens_to_enable: &TokenMask, tokens_to_disable: &TokenMask) -> TokenMask {
        self.union(tokens_to_enable).difference(tokens_to_disable)
    }

    pub fn is_subset_of(&self, other: &TokenMask) -> bool {
        self.difference(other).is_empty()
    }

    /// Number of enabled tokens.
    pub fn calc_enabled_tokens(&self) -> usize {
        self.limbs
            .iter()
            .map(|limb| limb.count_ones() as usize)
            .sum()
    }

    pub fn is_single_bit(&self) -> bool {
        self.calc_enabled_tokens() == 1
    }

    pub fn lowest_bit(&self) -> Option<usize> {
        self.limbs
            .iter()
            .enumerate()
            .find(|(_, limb)| **limb != 0)
            .map(|(index, limb)| index * LIMB_BITS + limb.trailing_zeros() as usize)
    }

    /// Enabled bit positions in ascending order.
    pub fn enabled_tokens(&self) -> EnabledTokens {
        EnabledTokens { remaining: *self }
    }
}

impl BitOr for TokenMask {
    type Output = TokenMask;

    fn bitor(self, rhs: TokenMask) -> TokenMask {
        self.union(&rhs)
    }
}

impl BitOrAssign for TokenMask {
    fn bitor_assign(&mut self, rhs: TokenMask) {
        *self = self.union(&rhs);
    }
}

impl BitAnd for TokenMask {
    type Output = TokenMask;

    fn bitand(self, rhs: TokenMask) -> TokenMask {
        self.intersection(&rhs)
    }
}

pub struct EnabledTokens {
    remaining: TokenMask,
}

impl Iterator for EnabledTokens {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let bit = self.remaining.lowest_bit()?;
        self.remaining.disable(bit);
        Some(bit)
    }
}
