// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt::Debug;

use super::{IntoValue, Value};

const POS_ZERO_BITS: u64 = 0x0000_0000_0000_0000;
const NEG_ZERO_BITS: u64 = 0x8000_0000_0000_0000;
const POS_INFINITY_BITS: u64 = 0x7FF0_0000_0000_0000;
const NEG_INFINITY_BITS: u64 = 0xFFF0_0000_0000_0000;

/// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
///
/// An IEEE 754-2019 binary64 value. The bit pattern is kept exactly as
/// given: signed zeroes and NaN payloads are never normalised.
///
/// Equality is SameValue: `+0` and `-0` are different Numbers and NaN is
/// equal to itself.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Number(f64);

/// Coarse classification of a [`Number`] into its special values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberClass {
    NaN,
    PosZero,
    NegZero,
    PosInfinity,
    NegInfinity,
    /// A finite, nonzero value.
    Finite(f64),
}

impl Number {
    pub const fn from_f64(value: f64) -> Self {
        Self(value)
    }

    pub const fn nan() -> Self {
        Self(f64::NAN)
    }

    pub const fn pos_zero() -> Self {
        Self(0.0)
    }

    pub const fn neg_zero() -> Self {
        Self(-0.0)
    }

    pub const fn pos_inf() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn neg_inf() -> Self {
        Self(f64::NEG_INFINITY)
    }

    pub const fn into_f64(self) -> f64 {
        self.0
    }

    pub const fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    pub fn is_pos_zero(self) -> bool {
        self.to_bits() == POS_ZERO_BITS
    }

    pub fn is_neg_zero(self) -> bool {
        self.to_bits() == NEG_ZERO_BITS
    }

    pub fn is_pos_infinity(self) -> bool {
        self.to_bits() == POS_INFINITY_BITS
    }

    pub fn is_neg_infinity(self) -> bool {
        self.to_bits() == NEG_INFINITY_BITS
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// True if the value is finite and equal to its own truncation.
    pub fn is_integral(self) -> bool {
        self.is_finite() && self.0.trunc() == self.0
    }

    pub fn is_odd_integral(self) -> bool {
        self.is_integral() && self.0 % 2.0 != 0.0
    }

    pub fn is_pos_one(self) -> bool {
        self.0 == 1.0
    }

    pub fn is_neg_one(self) -> bool {
        self.0 == -1.0
    }

    /// Strictly less than `-0`. False for NaN and both zeroes.
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Strictly greater than `+0`. False for NaN and both zeroes.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    pub fn classify(self) -> NumberClass {
        if self.is_nan() {
            NumberClass::NaN
        } else if self.is_pos_zero() {
            NumberClass::PosZero
        } else if self.is_neg_zero() {
            NumberClass::NegZero
        } else if self.is_pos_infinity() {
            NumberClass::PosInfinity
        } else if self.is_neg_infinity() {
            NumberClass::NegInfinity
        } else {
            NumberClass::Finite(self.0)
        }
    }

    /// ### [6.1.6.1.20 Number::sameValue ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-sameValue)
    pub fn same_value(self, y: Self) -> bool {
        let x = self;
        // 1. If x is NaN and y is NaN, return true.
        if x.is_nan() && y.is_nan() {
            return true;
        }
        // 2. If x is +0𝔽 and y is -0𝔽, return false.
        // 3. If x is -0𝔽 and y is +0𝔽, return false.
        // 4. If x is y, return true.
        // 5. Return false.
        x.to_bits() == y.to_bits()
    }

    /// ### [6.1.6.1.1 Number::unaryMinus ( x )](https://tc39.es/ecma262/#sec-numeric-types-number-unaryMinus)
    pub fn unary_minus(self) -> Self {
        // 1. If x is NaN, return NaN.
        // 2. Return the negation of x; that is, compute a Number with the same
        //    magnitude but opposite sign.
        Self(-self.0)
    }

    /// ### [6.1.6.1.3 Number::exponentiate ( base, exponent )](https://tc39.es/ecma262/#sec-numeric-types-number-exponentiate)
    pub fn exponentiate(self, exponent: Self) -> Self {
        let base = self;

        // 1. If exponent is NaN, return NaN.
        if exponent.is_nan() {
            return Self::nan();
        }

        // 2. If exponent is either +0𝔽 or -0𝔽, return 1𝔽.
        if exponent.is_pos_zero() || exponent.is_neg_zero() {
            return Self::from(1);
        }

        // 3. If base is NaN, return NaN.
        if base.is_nan() {
            return Self::nan();
        }

        // 4. If base is +∞𝔽, then
        if base.is_pos_infinity() {
            // a. If exponent > +0𝔽, return +∞𝔽. Otherwise, return +0𝔽.
            return if exponent.is_positive() {
                Self::pos_inf()
            } else {
                Self::pos_zero()
            };
        }

        // 5. If base is -∞𝔽, then
        if base.is_neg_infinity() {
            // a. If exponent > +0𝔽, then
            return if exponent.is_positive() {
                // i. If exponent is an odd integral Number, return -∞𝔽. Otherwise, return +∞𝔽.
                if exponent.is_odd_integral() {
                    Self::neg_inf()
                } else {
                    Self::pos_inf()
                }
            } else {
                // b. Else,
                // i. If exponent is an odd integral Number, return -0𝔽. Otherwise, return +0𝔽.
                if exponent.is_odd_integral() {
                    Self::neg_zero()
                } else {
                    Self::pos_zero()
                }
            };
        }

        // 6. If base is +0𝔽, then
        if base.is_pos_zero() {
            // a. If exponent > +0𝔽, return +0𝔽. Otherwise, return +∞𝔽.
            return if exponent.is_positive() {
                Self::pos_zero()
            } else {
                Self::pos_inf()
            };
        }

        // 7. If base is -0𝔽, then
        if base.is_neg_zero() {
            // a. If exponent > +0𝔽, then
            return if exponent.is_positive() {
                // i. If exponent is an odd integral Number, return -0𝔽. Otherwise, return +0𝔽.
                if exponent.is_odd_integral() {
                    Self::neg_zero()
                } else {
                    Self::pos_zero()
                }
            } else {
                // b. Else,
                // i. If exponent is an odd integral Number, return -∞𝔽. Otherwise, return +∞𝔽.
                if exponent.is_odd_integral() {
                    Self::neg_inf()
                } else {
                    Self::pos_inf()
                }
            };
        }

        // 8. Assert: base is finite and is neither +0𝔽 nor -0𝔽.
        debug_assert!(base.is_finite() && base.0 != 0.0);

        // 9. If exponent is +∞𝔽, then
        if exponent.is_pos_infinity() {
            let base = base.0.abs();
            // a. If abs(ℝ(base)) > 1, return +∞𝔽.
            return if base > 1.0 {
                Self::pos_inf()
            } else if base == 1.0 {
                // b. If abs(ℝ(base)) = 1, return NaN.
                Self::nan()
            } else {
                // c. If abs(ℝ(base)) < 1, return +0𝔽.
                Self::pos_zero()
            };
        }

        // 10. If exponent is -∞𝔽, then
        if exponent.is_neg_infinity() {
            let base = base.0.abs();
            // a. If abs(ℝ(base)) > 1, return +0𝔽.
            return if base > 1.0 {
                Self::pos_zero()
            } else if base == 1.0 {
                // b. If abs(ℝ(base)) = 1, return NaN.
                Self::nan()
            } else {
                // c. If abs(ℝ(base)) < 1, return +∞𝔽.
                Self::pos_inf()
            };
        }

        // 11. Assert: exponent is finite and is neither +0𝔽 nor -0𝔽.
        debug_assert!(exponent.is_finite() && exponent.0 != 0.0);

        // 12. If base < -0𝔽 and exponent is not an integral Number, return NaN.
        if base.is_negative() && !exponent.is_integral() {
            return Self::nan();
        }

        // 13. Return an implementation-approximated Number value representing
        //     the result of raising ℝ(base) to the ℝ(exponent) power.
        Self(base.0.powf(exponent.0))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.same_value(*other)
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Number({:?})", self.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self(value as f64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(value as f64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self(value as f64)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl From<NumberClass> for Number {
    fn from(value: NumberClass) -> Self {
        match value {
            NumberClass::NaN => Self::nan(),
            NumberClass::PosZero => Self::pos_zero(),
            NumberClass::NegZero => Self::neg_zero(),
            NumberClass::PosInfinity => Self::pos_inf(),
            NumberClass::NegInfinity => Self::neg_inf(),
            NumberClass::Finite(value) => Self(value),
        }
    }
}

impl TryFrom<Value> for Number {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Number(n) = value {
            Ok(n)
        } else {
            Err(())
        }
    }
}

impl IntoValue for Number {
    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_predicates_are_sign_aware() {
        assert!(Number::pos_zero().is_pos_zero());
        assert!(!Number::pos_zero().is_neg_zero());
        assert!(Number::neg_zero().is_neg_zero());
        assert!(!Number::neg_zero().is_pos_zero());
        assert!(!Number::neg_zero().is_negative());
        assert!(!Number::pos_zero().is_positive());
    }

    #[test]
    fn equality_is_same_value() {
        assert_ne!(Number::pos_zero(), Number::neg_zero());
        assert_eq!(Number::nan(), Number::nan());
        assert_eq!(Number::from(3), Number::from_f64(3.0));
    }

    #[test]
    fn integral_excludes_non_finite() {
        assert!(!Number::nan().is_integral());
        assert!(!Number::pos_inf().is_integral());
        assert!(!Number::neg_inf().is_integral());
        assert!(Number::neg_zero().is_integral());
        assert!(Number::from_f64(-3.0).is_integral());
        assert!(!Number::from_f64(2.5).is_integral());
        assert!(Number::from_f64(-3.0).is_odd_integral());
        assert!(!Number::from_f64(4.0).is_odd_integral());
        assert!(!Number::from_f64(9007199254740994.0).is_odd_integral());
    }

    #[test]
    fn classification_round_trip() {
        let values = [
            Number::nan(),
            Number::pos_zero(),
            Number::neg_zero(),
            Number::pos_inf(),
            Number::neg_inf(),
            Number::from_f64(1.5),
            Number::from_f64(-1e-300),
            Number::from_f64(f64::MAX),
        ];
        for value in values {
            let round_tripped = Number::from(value.classify());
            assert_eq!(round_tripped, value);
            assert_eq!(round_tripped.is_nan(), value.is_nan());
            assert_eq!(round_tripped.is_pos_zero(), value.is_pos_zero());
            assert_eq!(round_tripped.is_neg_zero(), value.is_neg_zero());
            assert_eq!(round_tripped.is_finite(), value.is_finite());
            assert_eq!(round_tripped.is_integral(), value.is_integral());
        }
    }

    #[test]
    fn exponentiate_special_cases() {
        assert_eq!(Number::nan().exponentiate(Number::pos_zero()), Number::from(1));
        assert_eq!(Number::from(2).exponentiate(Number::nan()), Number::nan());
        assert_eq!(
            Number::from(-8).exponentiate(Number::from(3)),
            Number::from(-512)
        );
        assert!(
            Number::from(-8)
                .exponentiate(Number::from_f64(1.0 / 3.0))
                .is_nan()
        );
        assert!(
            Number::neg_inf()
                .exponentiate(Number::from(3))
                .is_neg_infinity()
        );
        assert!(Number::neg_inf().exponentiate(Number::from(-3)).is_neg_zero());
        assert!(Number::neg_zero().exponentiate(Number::from(-1)).is_neg_infinity());
        assert!(Number::pos_zero().exponentiate(Number::from(-1)).is_pos_infinity());
        assert!(Number::from(-1).exponentiate(Number::pos_inf()).is_nan());
        assert!(Number::from_f64(0.5).exponentiate(Number::neg_inf()).is_pos_infinity());
    }
}
