//! Raw IEEE-754 bit access and hash mixing.
//!
//! Equality and hashing in this crate never go through float `==`. They compare
//! the raw bit patterns, so `+0.0` and `-0.0` differ and a NaN equals itself
//! exactly when the payloads match.

use num_traits::Float;

/// Multiplier of the order-sensitive hash mix.
const HASH_PRIME: i32 = 31;

/// Floating-point types whose raw bit pattern can be read.
pub trait RawBits: Float {
    /// Returns the raw IEEE-754 representation, zero-extended to 64 bits.
    fn raw_bits(self) -> u64;

    /// Compares two values by raw representation.
    #[inline]
    fn bits_eq(self, other: Self) -> bool {
        self.raw_bits() == other.raw_bits()
    }
}

impl RawBits for f32 {
    #[inline]
    fn raw_bits(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl RawBits for f64 {
    #[inline]
    fn raw_bits(self) -> u64 {
        self.to_bits()
    }
}

/// Folds a 64-bit pattern into 32 bits by xoring the halves.
#[inline]
pub(crate) fn fold_bits(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as i32
}

/// Mixes one more component hash into the running value.
#[inline]
pub(crate) fn mix(acc: i32, component: i32) -> i32 {
    HASH_PRIME.wrapping_mul(acc).wrapping_add(component)
}

/// Starting value of every hash mix.
pub(crate) const HASH_SEED: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_zero_bits_differ() {
        assert!(!0.0_f64.bits_eq(-0.0));
        assert!(0.0_f64.bits_eq(0.0));
    }

    #[test]
    fn test_nan_bits() {
        assert!(f64::NAN.bits_eq(f64::NAN));
        let payload = f64::from_bits(0x7ff8_0000_0000_0001);
        assert!(payload.is_nan());
        assert!(!payload.bits_eq(f64::NAN));
    }

    #[test]
    fn test_f32_zero_extended() {
        assert_eq!(1.0_f32.raw_bits(), 0x3f80_0000);
        assert_eq!(fold_bits(1.0_f32.raw_bits()), 0x3f80_0000);
    }

    #[test]
    fn test_fold_bits() {
        // 1.0_f64 = 0x3ff0_0000_0000_0000
        assert_eq!(fold_bits(1.0_f64.raw_bits()), 0x3ff0_0000);
        assert_eq!(fold_bits(0.0_f64.raw_bits()), 0);
        assert_eq!(fold_bits(0xffff_ffff_0000_0000), -1);
    }

    #[test]
    fn test_mix_is_order_sensitive() {
        let a = mix(mix(HASH_SEED, 1), 2);
        let b = mix(mix(HASH_SEED, 2), 1);
        assert_eq!(a, 31 * (31 + 1) + 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_mix_wraps() {
        assert_eq!(mix(i32::MAX, 0), 31_i32.wrapping_mul(i32::MAX));
    }
}
