// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [21.3 The Math Object](https://tc39.es/ecma262/#sec-math-object)

use std::f64::consts;

use crate::{
    ecmascript::{
        abstract_operations::type_conversion::{to_number, to_uint32},
        builders::ordinary_object_builder::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin},
        execution::{Agent, JsResult, RealmIdentifier},
        types::{IntoValue, Number, NumberClass, Value},
    },
    heap::WellKnownSymbolIndexes,
};

pub(crate) struct MathObject;

macro_rules! math_builtin {
    ($name:ident, $js_name:literal, $length:literal, $behaviour:ident) => {
        struct $name;
        impl Builtin for $name {
            const NAME: &'static str = $js_name;

            const LENGTH: u8 = $length;

            const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::$behaviour);
        }
    };
}

math_builtin!(MathObjectAbs, "abs", 1, abs);
math_builtin!(MathObjectAcos, "acos", 1, acos);
math_builtin!(MathObjectAcosh, "acosh", 1, acosh);
math_builtin!(MathObjectAsin, "asin", 1, asin);
math_builtin!(MathObjectAsinh, "asinh", 1, asinh);
math_builtin!(MathObjectAtan, "atan", 1, atan);
math_builtin!(MathObjectAtanh, "atanh", 1, atanh);
math_builtin!(MathObjectAtan2, "atan2", 2, atan2);
math_builtin!(MathObjectCbrt, "cbrt", 1, cbrt);
math_builtin!(MathObjectCeil, "ceil", 1, ceil);
math_builtin!(MathObjectClz32, "clz32", 1, clz32);
math_builtin!(MathObjectCos, "cos", 1, cos);
math_builtin!(MathObjectCosh, "cosh", 1, cosh);
math_builtin!(MathObjectExp, "exp", 1, exp);
math_builtin!(MathObjectExpm1, "expm1", 1, expm1);
math_builtin!(MathObjectFloor, "floor", 1, floor);
math_builtin!(MathObjectFround, "fround", 1, fround);
math_builtin!(MathObjectHypot, "hypot", 2, hypot);
math_builtin!(MathObjectImul, "imul", 2, imul);
math_builtin!(MathObjectLog, "log", 1, log);
math_builtin!(MathObjectLog1p, "log1p", 1, log1p);
math_builtin!(MathObjectLog10, "log10", 1, log10);
math_builtin!(MathObjectLog2, "log2", 1, log2);
math_builtin!(MathObjectMax, "max", 2, max);
math_builtin!(MathObjectMin, "min", 2, min);
math_builtin!(MathObjectPow, "pow", 2, pow);
math_builtin!(MathObjectRandom, "random", 0, random);
math_builtin!(MathObjectRound, "round", 1, round);
math_builtin!(MathObjectSign, "sign", 1, sign);
math_builtin!(MathObjectSin, "sin", 1, sin);
math_builtin!(MathObjectSinh, "sinh", 1, sinh);
math_builtin!(MathObjectSqrt, "sqrt", 1, sqrt);
math_builtin!(MathObjectTan, "tan", 1, tan);
math_builtin!(MathObjectTanh, "tanh", 1, tanh);
math_builtin!(MathObjectTrunc, "trunc", 1, trunc);

/// 2^32, the divisor mapping a random `u32` into \[0, 1).
const RANDOM_DIVISOR: f64 = 4294967296.0;

impl MathObject {
    /// ### [21.3.2.1 Math.abs ( x )](https://tc39.es/ecma262/#sec-math.abs)
    fn abs(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is NaN, return NaN.
            NumberClass::NaN => Ok(Value::nan()),
            // 3. If n is -0𝔽, return +0𝔽.
            NumberClass::NegZero => Ok(Value::pos_zero()),
            // 4. If n is -∞𝔽, return +∞𝔽.
            NumberClass::NegInfinity => Ok(Value::pos_inf()),
            // 5. If n < -0𝔽, return -n.
            NumberClass::Finite(_) if n.is_negative() => Ok(n.unary_minus().into_value()),
            // 6. Return n.
            _ => Ok(n.into_value()),
        }
    }

    /// ### [21.3.2.2 Math.acos ( x )](https://tc39.es/ecma262/#sec-math.acos)
    fn acos(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?.into_f64();
        // 2. If n is NaN, n > 1𝔽, or n < -1𝔽, return NaN.
        if n.is_nan() || !(-1.0..=1.0).contains(&n) {
            return Ok(Value::nan());
        }
        // 3. If n is 1𝔽, return +0𝔽.
        if n == 1.0 {
            return Ok(Value::pos_zero());
        }
        // 4. Return an implementation-approximated Number value representing the inverse cosine of ℝ(n).
        Ok(Value::from_f64(n.acos()))
    }

    /// ### [21.3.2.3 Math.acosh ( x )](https://tc39.es/ecma262/#sec-math.acosh)
    fn acosh(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2. If n is either NaN or +∞𝔽, return n.
        if n.is_nan() || n.is_pos_infinity() {
            return Ok(n.into_value());
        }
        // 3. If n is 1𝔽, return +0𝔽.
        if n.is_pos_one() {
            return Ok(Value::pos_zero());
        }
        let n = n.into_f64();
        // 4. If n < 1𝔽, return NaN.
        if n < 1.0 {
            return Ok(Value::nan());
        }
        // 5. Return an implementation-approximated Number value representing the inverse hyperbolic cosine of ℝ(n).
        Ok(Value::from_f64(n.acosh()))
    }

    /// ### [21.3.2.4 Math.asin ( x )](https://tc39.es/ecma262/#sec-math.asin)
    fn asin(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2. If n is one of NaN, +0𝔽, or -0𝔽, return n.
        if n.is_nan() || n.is_pos_zero() || n.is_neg_zero() {
            return Ok(n.into_value());
        }
        let n = n.into_f64();
        // 3. If n > 1𝔽 or n < -1𝔽, return NaN.
        if !(-1.0..=1.0).contains(&n) {
            return Ok(Value::nan());
        }
        // 4. Return an implementation-approximated Number value representing the inverse sine of ℝ(n).
        Ok(Value::from_f64(n.asin()))
    }

    /// ### [21.3.2.5 Math.asinh ( x )](https://tc39.es/ecma262/#sec-math.asinh)
    fn asinh(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 3. Return an implementation-approximated Number value representing the inverse hyperbolic sine of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.asinh())),
            // 2. If n is not finite or n is either +0𝔽 or -0𝔽, return n.
            _ => Ok(n.into_value()),
        }
    }

    /// ### [21.3.2.6 Math.atan ( x )](https://tc39.es/ecma262/#sec-math.atan)
    fn atan(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is one of NaN, +0𝔽, or -0𝔽, return n.
            NumberClass::NaN | NumberClass::PosZero | NumberClass::NegZero => Ok(n.into_value()),
            // 3. If n is +∞𝔽, return an implementation-approximated Number value representing π / 2.
            NumberClass::PosInfinity => Ok(Value::from_f64(consts::FRAC_PI_2)),
            // 4. If n is -∞𝔽, return an implementation-approximated Number value representing -π / 2.
            NumberClass::NegInfinity => Ok(Value::from_f64(-consts::FRAC_PI_2)),
            // 5. Return an implementation-approximated Number value representing the inverse tangent of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.atan())),
        }
    }

    /// ### [21.3.2.7 Math.atanh ( x )](https://tc39.es/ecma262/#sec-math.atanh)
    fn atanh(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2. If n is one of NaN, +0𝔽, or -0𝔽, return n.
        if n.is_nan() || n.is_pos_zero() || n.is_neg_zero() {
            return Ok(n.into_value());
        }
        let n = n.into_f64();
        // 3. If n > 1𝔽 or n < -1𝔽, return NaN.
        if !(-1.0..=1.0).contains(&n) {
            return Ok(Value::nan());
        }
        // 4. If n is 1𝔽, return +∞𝔽.
        if n == 1.0 {
            return Ok(Value::pos_inf());
        }
        // 5. If n is -1𝔽, return -∞𝔽.
        if n == -1.0 {
            return Ok(Value::neg_inf());
        }
        // 6. Return an implementation-approximated Number value representing the inverse hyperbolic tangent of ℝ(n).
        Ok(Value::from_f64(n.atanh()))
    }

    /// ### [21.3.2.8 Math.atan2 ( y, x )](https://tc39.es/ecma262/#sec-math.atan2)
    fn atan2(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let ny be ? ToNumber(y).
        let ny = to_number(agent, arguments.get(0))?;
        // 2. Let nx be ? ToNumber(x).
        let nx = to_number(agent, arguments.get(1))?;
        // 3. If ny is NaN or nx is NaN, return NaN.
        if ny.is_nan() || nx.is_nan() {
            return Ok(Value::nan());
        }
        // 4. If ny is +∞𝔽, then
        if ny.is_pos_infinity() {
            return Ok(Value::from_f64(match nx.classify() {
                // a. If nx is +∞𝔽, return an implementation-approximated Number value representing π / 4.
                NumberClass::PosInfinity => consts::FRAC_PI_4,
                // b. If nx is -∞𝔽, return an implementation-approximated Number value representing 3π / 4.
                NumberClass::NegInfinity => 3.0 * consts::FRAC_PI_4,
                // c. Return an implementation-approximated Number value representing π / 2.
                _ => consts::FRAC_PI_2,
            }));
        }
        // 5. If ny is -∞𝔽, then
        if ny.is_neg_infinity() {
            return Ok(Value::from_f64(match nx.classify() {
                // a. If nx is +∞𝔽, return an implementation-approximated Number value representing -π / 4.
                NumberClass::PosInfinity => -consts::FRAC_PI_4,
                // b. If nx is -∞𝔽, return an implementation-approximated Number value representing -3π / 4.
                NumberClass::NegInfinity => -3.0 * consts::FRAC_PI_4,
                // c. Return an implementation-approximated Number value representing -π / 2.
                _ => -consts::FRAC_PI_2,
            }));
        }
        // 6. If ny is +0𝔽, then
        if ny.is_pos_zero() {
            // a. If nx > +0𝔽 or nx is +0𝔽, return +0𝔽.
            if nx.is_positive() || nx.is_pos_zero() {
                return Ok(Value::pos_zero());
            }
            // b. Return an implementation-approximated Number value representing π.
            return Ok(Value::from_f64(consts::PI));
        }
        // 7. If ny is -0𝔽, then
        if ny.is_neg_zero() {
            // a. If nx > +0𝔽 or nx is +0𝔽, return -0𝔽.
            if nx.is_positive() || nx.is_pos_zero() {
                return Ok(Value::neg_zero());
            }
            // b. Return an implementation-approximated Number value representing -π.
            return Ok(Value::from_f64(-consts::PI));
        }
        // 8. Assert: ny is finite and is neither +0𝔽 nor -0𝔽.
        debug_assert!(matches!(ny.classify(), NumberClass::Finite(_)));
        let y = ny.into_f64();
        // 9. If ny > +0𝔽, then
        if y > 0.0 {
            match nx.classify() {
                // a. If nx is +∞𝔽, return +0𝔽.
                NumberClass::PosInfinity => return Ok(Value::pos_zero()),
                // b. If nx is -∞𝔽, return an implementation-approximated Number value representing π.
                NumberClass::NegInfinity => return Ok(Value::from_f64(consts::PI)),
                // c. If nx is either +0𝔽 or -0𝔽, return an implementation-approximated Number value representing π / 2.
                NumberClass::PosZero | NumberClass::NegZero => {
                    return Ok(Value::from_f64(consts::FRAC_PI_2));
                }
                _ => {}
            }
        }
        // 10. If ny < -0𝔽, then
        if y < 0.0 {
            match nx.classify() {
                // a. If nx is +∞𝔽, return -0𝔽.
                NumberClass::PosInfinity => return Ok(Value::neg_zero()),
                // b. If nx is -∞𝔽, return an implementation-approximated Number value representing -π.
                NumberClass::NegInfinity => return Ok(Value::from_f64(-consts::PI)),
                // c. If nx is either +0𝔽 or -0𝔽, return an implementation-approximated Number value representing -π / 2.
                NumberClass::PosZero | NumberClass::NegZero => {
                    return Ok(Value::from_f64(-consts::FRAC_PI_2));
                }
                _ => {}
            }
        }
        // 11. Assert: nx is finite and is neither +0𝔽 nor -0𝔽.
        debug_assert!(matches!(nx.classify(), NumberClass::Finite(_)));
        // 12. Return an implementation-approximated Number value representing the
        //     inverse tangent of ℝ(ny) / ℝ(nx), placed in the quadrant of the point (ny, nx).
        Ok(Value::from_f64(y.atan2(nx.into_f64())))
    }

    /// ### [21.3.2.9 Math.cbrt ( x )](https://tc39.es/ecma262/#sec-math.cbrt)
    fn cbrt(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 3. Return an implementation-approximated Number value representing the cube root of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.cbrt())),
            // 2. If n is not finite or n is either +0𝔽 or -0𝔽, return n.
            _ => Ok(n.into_value()),
        }
    }

    /// ### [21.3.2.10 Math.ceil ( x )](https://tc39.es/ecma262/#sec-math.ceil)
    fn ceil(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2. If n is not finite or n is either +0𝔽 or -0𝔽, return n.
        let NumberClass::Finite(value) = n.classify() else {
            return Ok(n.into_value());
        };
        // 3. If n < -0𝔽 and n > -1𝔽, return -0𝔽.
        if value < 0.0 && value > -1.0 {
            return Ok(Value::neg_zero());
        }
        // 4. If n is an integral Number, return n.
        if n.is_integral() {
            return Ok(n.into_value());
        }
        // 5. Return the smallest (closest to -∞) integral Number value that is not less than n.
        Ok(Value::from_f64(value.ceil()))
    }

    /// ### [21.3.2.11 Math.clz32 ( x )](https://tc39.es/ecma262/#sec-math.clz32)
    fn clz32(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToUint32(x).
        let n = to_uint32(agent, arguments.get(0))?;
        // 2. Let p be the number of leading zero bits in the unsigned 32-bit binary representation of n.
        let p = n.leading_zeros();
        // 3. Return 𝔽(p).
        Ok(Value::from(p))
    }

    /// ### [21.3.2.12 Math.cos ( x )](https://tc39.es/ecma262/#sec-math.cos)
    fn cos(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is one of NaN, +∞𝔽, or -∞𝔽, return NaN.
            NumberClass::NaN | NumberClass::PosInfinity | NumberClass::NegInfinity => {
                Ok(Value::nan())
            }
            // 3. If n is either +0𝔽 or -0𝔽, return 1𝔽.
            NumberClass::PosZero | NumberClass::NegZero => Ok(Value::from(1)),
            // 4. Return an implementation-approximated Number value representing the cosine of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.cos())),
        }
    }

    /// ### [21.3.2.13 Math.cosh ( x )](https://tc39.es/ecma262/#sec-math.cosh)
    fn cosh(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is NaN, return NaN.
            NumberClass::NaN => Ok(Value::nan()),
            // 3. If n is either +∞𝔽 or -∞𝔽, return +∞𝔽.
            NumberClass::PosInfinity | NumberClass::NegInfinity => Ok(Value::pos_inf()),
            // 4. If n is either +0𝔽 or -0𝔽, return 1𝔽.
            NumberClass::PosZero | NumberClass::NegZero => Ok(Value::from(1)),
            // 5. Return an implementation-approximated Number value representing the hyperbolic cosine of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.cosh())),
        }
    }

    /// ### [21.3.2.14 Math.exp ( x )](https://tc39.es/ecma262/#sec-math.exp)
    fn exp(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is either NaN or +∞𝔽, return n.
            NumberClass::NaN | NumberClass::PosInfinity => Ok(n.into_value()),
            // 3. If n is either +0𝔽 or -0𝔽, return 1𝔽.
            NumberClass::PosZero | NumberClass::NegZero => Ok(Value::from(1)),
            // 4. If n is -∞𝔽, return +0𝔽.
            NumberClass::NegInfinity => Ok(Value::pos_zero()),
            // 5. Return an implementation-approximated Number value representing the exponential function of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.exp())),
        }
    }

    /// ### [21.3.2.15 Math.expm1 ( x )](https://tc39.es/ecma262/#sec-math.expm1)
    fn expm1(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 3. If n is -∞𝔽, return -1𝔽.
            NumberClass::NegInfinity => Ok(Value::from(-1)),
            // 4. Return an implementation-approximated Number value representing the result of subtracting 1 from the exponential function of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.exp_m1())),
            // 2. If n is one of NaN, +0𝔽, -0𝔽, or +∞𝔽, return n.
            _ => Ok(n.into_value()),
        }
    }

    /// ### [21.3.2.16 Math.floor ( x )](https://tc39.es/ecma262/#sec-math.floor)
    fn floor(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2. If n is not finite or n is either +0𝔽 or -0𝔽, return n.
        let NumberClass::Finite(value) = n.classify() else {
            return Ok(n.into_value());
        };
        // 3. If n < 1𝔽 and n > +0𝔽, return +0𝔽.
        if value < 1.0 && value > 0.0 {
            return Ok(Value::pos_zero());
        }
        // 4. If n is an integral Number, return n.
        if n.is_integral() {
            return Ok(n.into_value());
        }
        // 5. Return the greatest (closest to +∞) integral Number value that is not greater than n.
        Ok(Value::from_f64(value.floor()))
    }

    /// ### [21.3.2.17 Math.fround ( x )](https://tc39.es/ecma262/#sec-math.fround)
    fn fround(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is NaN, return NaN.
            NumberClass::NaN => Ok(Value::nan()),
            // 4. Let n32 be the result of converting n to IEEE 754-2019 binary32 format using roundTiesToEven mode.
            // 5. Let n64 be the result of converting n32 to IEEE 754-2019 binary64 format.
            // 6. Return the ECMAScript Number value corresponding to n64.
            NumberClass::Finite(n) => Ok(Value::from_f64(n as f32 as f64)),
            // 3. If n is one of +0𝔽, -0𝔽, +∞𝔽, or -∞𝔽, return n.
            _ => Ok(n.into_value()),
        }
    }

    /// ### [21.3.2.18 Math.hypot ( ...args )](https://tc39.es/ecma262/#sec-math.hypot)
    fn hypot(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let coerced be a new empty List.
        // 2. For each element arg of args, do
        //    a. Let n be ? ToNumber(arg).
        //    b. Append n to coerced.
        let coerced = coerce_all(agent, arguments)?;

        // 3. For each element number of coerced, do
        //    a. If number is either +∞𝔽 or -∞𝔽, return +∞𝔽.
        if coerced
            .iter()
            .any(|number| number.is_pos_infinity() || number.is_neg_infinity())
        {
            return Ok(Value::pos_inf());
        }

        // 4. Let onlyZero be true.
        let mut only_zero = true;
        // 5. For each element number of coerced, do
        for number in coerced.iter() {
            // a. If number is NaN, return NaN.
            if number.is_nan() {
                return Ok(Value::nan());
            }
            // b. If number is neither +0𝔽 nor -0𝔽, set onlyZero to false.
            if !number.is_pos_zero() && !number.is_neg_zero() {
                only_zero = false;
            }
        }

        // 6. If onlyZero is true, return +0𝔽.
        if only_zero {
            return Ok(Value::pos_zero());
        }

        // 7. Return an implementation-approximated Number value representing the square root of the sum of squares of the mathematical values of the elements of coerced.
        let result = coerced
            .iter()
            .map(|number| number.into_f64())
            .fold(0.0, f64::hypot);
        Ok(Value::from_f64(result))
    }

    /// ### [21.3.2.19 Math.imul ( x, y )](https://tc39.es/ecma262/#sec-math.imul)
    fn imul(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let a be ℝ(? ToUint32(x)).
        let a = to_uint32(agent, arguments.get(0))?;
        // 2. Let b be ℝ(? ToUint32(y)).
        let b = to_uint32(agent, arguments.get(1))?;
        // 3. Let product be (a × b) modulo 2**32.
        let product = a.wrapping_mul(b);
        // 4. If product ≥ 2**31, return 𝔽(product - 2**32); otherwise return 𝔽(product).
        Ok(Value::from(product as i32))
    }

    /// ### [21.3.2.20 Math.log ( x )](https://tc39.es/ecma262/#sec-math.log)
    fn log(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2-5.
        if let Some(result) = logarithm_special_case(n) {
            return Ok(result);
        }
        // 6. Return an implementation-approximated Number value representing the natural logarithm of ℝ(n).
        Ok(Value::from_f64(n.into_f64().ln()))
    }

    /// ### [21.3.2.21 Math.log1p ( x )](https://tc39.es/ecma262/#sec-math.log1p)
    fn log1p(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2. If n is one of NaN, +0𝔽, -0𝔽, or +∞𝔽, return n.
        if n.is_nan() || n.is_pos_zero() || n.is_neg_zero() || n.is_pos_infinity() {
            return Ok(n.into_value());
        }
        // 3. If n is -1𝔽, return -∞𝔽.
        if n.is_neg_one() {
            return Ok(Value::neg_inf());
        }
        let n = n.into_f64();
        // 4. If n < -1𝔽, return NaN.
        if n < -1.0 {
            return Ok(Value::nan());
        }
        // 5. Return an implementation-approximated Number value representing the natural logarithm of 1 + ℝ(n).
        Ok(Value::from_f64(n.ln_1p()))
    }

    /// ### [21.3.2.22 Math.log10 ( x )](https://tc39.es/ecma262/#sec-math.log10)
    fn log10(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2-5.
        if let Some(result) = logarithm_special_case(n) {
            return Ok(result);
        }
        // 6. Return an implementation-approximated Number value representing the base 10 logarithm of ℝ(n).
        Ok(Value::from_f64(n.into_f64().log10()))
    }

    /// ### [21.3.2.23 Math.log2 ( x )](https://tc39.es/ecma262/#sec-math.log2)
    fn log2(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2-5.
        if let Some(result) = logarithm_special_case(n) {
            return Ok(result);
        }
        // 6. Return an implementation-approximated Number value representing the base 2 logarithm of ℝ(n).
        Ok(Value::from_f64(n.into_f64().log2()))
    }

    /// ### [21.3.2.24 Math.max ( ...args )](https://tc39.es/ecma262/#sec-math.max)
    fn max(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let coerced be a new empty List.
        // 2. For each element arg of args, do
        //    a. Let n be ? ToNumber(arg).
        //    b. Append n to coerced.
        let coerced = coerce_all(agent, arguments)?;

        // 3. Let highest be -∞𝔽.
        let mut highest = Number::neg_inf();

        // 4. For each element number of coerced, do
        for &number in coerced.iter() {
            // a. If number is NaN, return NaN.
            if number.is_nan() {
                return Ok(Value::nan());
            }
            // b. If number is +0𝔽 and highest is -0𝔽, set highest to +0𝔽.
            if number.is_pos_zero() && highest.is_neg_zero() {
                highest = Number::pos_zero();
            }
            // c. If number > highest, set highest to number.
            if number.into_f64() > highest.into_f64() {
                highest = number;
            }
        }

        // 5. Return highest.
        Ok(highest.into_value())
    }

    /// ### [21.3.2.25 Math.min ( ...args )](https://tc39.es/ecma262/#sec-math.min)
    fn min(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let coerced be a new empty List.
        // 2. For each element arg of args, do
        //    a. Let n be ? ToNumber(arg).
        //    b. Append n to coerced.
        let coerced = coerce_all(agent, arguments)?;

        // 3. Let lowest be +∞𝔽.
        let mut lowest = Number::pos_inf();

        // 4. For each element number of coerced, do
        for &number in coerced.iter() {
            // a. If number is NaN, return NaN.
            if number.is_nan() {
                return Ok(Value::nan());
            }
            // b. If number is -0𝔽 and lowest is +0𝔽, set lowest to -0𝔽.
            if number.is_neg_zero() && lowest.is_pos_zero() {
                lowest = Number::neg_zero();
            }
            // c. If number < lowest, set lowest to number.
            if number.into_f64() < lowest.into_f64() {
                lowest = number;
            }
        }

        // 5. Return lowest.
        Ok(lowest.into_value())
    }

    /// ### [21.3.2.26 Math.pow ( base, exponent )](https://tc39.es/ecma262/#sec-math.pow)
    fn pow(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Set base to ? ToNumber(base).
        let base = to_number(agent, arguments.get(0))?;
        // 2. Set exponent to ? ToNumber(exponent).
        let exponent = to_number(agent, arguments.get(1))?;
        // 3. Return Number::exponentiate(base, exponent).
        Ok(base.exponentiate(exponent).into_value())
    }

    /// ### [21.3.2.27 Math.random ( )](https://tc39.es/ecma262/#sec-math.random)
    ///
    /// Returns a Number value with positive sign, greater than or equal to
    /// +0𝔽 but strictly less than 1𝔽, drawn from the agent's random source.
    fn random(agent: &mut Agent, _this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        let bits = agent.random_source.next_u32();
        Ok(Value::from_f64(f64::from(bits) / RANDOM_DIVISOR))
    }

    /// ### [21.3.2.28 Math.round ( x )](https://tc39.es/ecma262/#sec-math.round)
    fn round(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;

        // 2. If n is not finite or n is an integral Number, return n.
        if !n.is_finite() || n.is_integral() {
            return Ok(n.into_value());
        }

        let n = n.into_f64();

        // 3. If n < 0.5𝔽 and n > +0𝔽, return +0𝔽.
        if n < 0.5 && n > 0.0 {
            return Ok(Value::pos_zero());
        }

        // 4. If n < -0𝔽 and n ≥ -0.5𝔽, return -0𝔽.
        if (-0.5..0.0).contains(&n) {
            return Ok(Value::neg_zero());
        }

        // 5. Return the integral Number closest to n, preferring the Number closer to +∞ in the case of a tie.
        let floor = n.floor();
        if n - floor >= 0.5 {
            Ok(Value::from_f64(floor + 1.0))
        } else {
            Ok(Value::from_f64(floor))
        }
    }

    /// ### [21.3.2.29 Math.sign ( x )](https://tc39.es/ecma262/#sec-math.sign)
    fn sign(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2. If n is one of NaN, +0𝔽, or -0𝔽, return n.
        if n.is_nan() || n.is_pos_zero() || n.is_neg_zero() {
            return Ok(n.into_value());
        }
        // 3. If n < -0𝔽, return -1𝔽.
        if n.is_negative() {
            return Ok(Value::from(-1));
        }
        // 4. Return 1𝔽.
        Ok(Value::from(1))
    }

    /// ### [21.3.2.30 Math.sin ( x )](https://tc39.es/ecma262/#sec-math.sin)
    fn sin(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is one of NaN, +0𝔽, or -0𝔽, return n.
            NumberClass::NaN | NumberClass::PosZero | NumberClass::NegZero => Ok(n.into_value()),
            // 3. If n is either +∞𝔽 or -∞𝔽, return NaN.
            NumberClass::PosInfinity | NumberClass::NegInfinity => Ok(Value::nan()),
            // 4. Return an implementation-approximated Number value representing the sine of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.sin())),
        }
    }

    /// ### [21.3.2.31 Math.sinh ( x )](https://tc39.es/ecma262/#sec-math.sinh)
    fn sinh(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 3. Return an implementation-approximated Number value representing the hyperbolic sine of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.sinh())),
            // 2. If n is not finite or n is either +0𝔽 or -0𝔽, return n.
            _ => Ok(n.into_value()),
        }
    }

    /// ### [21.3.2.32 Math.sqrt ( x )](https://tc39.es/ecma262/#sec-math.sqrt)
    fn sqrt(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        // 2. If n is one of NaN, +0𝔽, -0𝔽, or +∞𝔽, return n.
        if n.is_nan() || n.is_pos_zero() || n.is_neg_zero() || n.is_pos_infinity() {
            return Ok(n.into_value());
        }
        // 3. If n < -0𝔽, return NaN.
        if n.is_negative() {
            return Ok(Value::nan());
        }
        // 4. Return an implementation-approximated Number value representing the square root of ℝ(n).
        Ok(Value::from_f64(n.into_f64().sqrt()))
    }

    /// ### [21.3.2.33 Math.tan ( x )](https://tc39.es/ecma262/#sec-math.tan)
    fn tan(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is one of NaN, +0𝔽, or -0𝔽, return n.
            NumberClass::NaN | NumberClass::PosZero | NumberClass::NegZero => Ok(n.into_value()),
            // 3. If n is either +∞𝔽 or -∞𝔽, return NaN.
            NumberClass::PosInfinity | NumberClass::NegInfinity => Ok(Value::nan()),
            // 4. Return an implementation-approximated Number value representing the tangent of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.tan())),
        }
    }

    /// ### [21.3.2.34 Math.tanh ( x )](https://tc39.es/ecma262/#sec-math.tanh)
    fn tanh(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;
        match n.classify() {
            // 2. If n is one of NaN, +0𝔽, or -0𝔽, return n.
            NumberClass::NaN | NumberClass::PosZero | NumberClass::NegZero => Ok(n.into_value()),
            // 3. If n is +∞𝔽, return 1𝔽.
            NumberClass::PosInfinity => Ok(Value::from(1)),
            // 4. If n is -∞𝔽, return -1𝔽.
            NumberClass::NegInfinity => Ok(Value::from(-1)),
            // 5. Return an implementation-approximated Number value representing the hyperbolic tangent of ℝ(n).
            NumberClass::Finite(n) => Ok(Value::from_f64(n.tanh())),
        }
    }

    /// ### [21.3.2.35 Math.trunc ( x )](https://tc39.es/ecma262/#sec-math.trunc)
    fn trunc(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let n be ? ToNumber(x).
        let n = to_number(agent, arguments.get(0))?;

        // 2. If n is not finite or n is either +0𝔽 or -0𝔽, return n.
        let NumberClass::Finite(n) = n.classify() else {
            return Ok(n.into_value());
        };

        // 3. If n < 1𝔽 and n > +0𝔽, return +0𝔽.
        if n < 1.0 && n > 0.0 {
            return Ok(Value::pos_zero());
        }

        // 4. If n < -0𝔽 and n > -1𝔽, return -0𝔽.
        if n < 0.0 && n > -1.0 {
            return Ok(Value::neg_zero());
        }

        // 5. Return the integral Number nearest n in the direction of +0𝔽.
        Ok(Value::from_f64(n.abs().floor().copysign(n)))
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: RealmIdentifier) {
        let intrinsics = agent.get_realm(realm).intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let this = intrinsics.math();

        // The Math object:
        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_property_capacity(44)
            // has a [[Prototype]] internal slot whose value is %Object.prototype%.
            .with_prototype(object_prototype)
            // 21.3.1 Value Properties of the Math Object
            .with_property(|builder| {
                builder
                    .with_key_from_str("E")
                    .with_value_readonly(Value::from_f64(consts::E))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("LN10")
                    .with_value_readonly(Value::from_f64(consts::LN_10))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("LN2")
                    .with_value_readonly(Value::from_f64(consts::LN_2))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("LOG10E")
                    .with_value_readonly(Value::from_f64(consts::LOG10_E))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("LOG2E")
                    .with_value_readonly(Value::from_f64(consts::LOG2_E))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("PI")
                    .with_value_readonly(Value::from_f64(consts::PI))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("SQRT1_2")
                    .with_value_readonly(Value::from_f64(consts::FRAC_1_SQRT_2))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("SQRT2")
                    .with_value_readonly(Value::from_f64(consts::SQRT_2))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            })
            // 21.3.1.9 Math [ @@toStringTag ]
            .with_property(|builder| {
                builder
                    .with_key(WellKnownSymbolIndexes::ToStringTag.into())
                    .with_value_creator_readonly(|agent| Value::from_str(agent, "Math"))
                    .with_enumerable(false)
                    .with_configurable(true)
                    .build()
            })
            // 21.3.2 Function Properties of the Math Object
            .with_builtin_function_property::<MathObjectAbs>()
            .with_builtin_function_property::<MathObjectAcos>()
            .with_builtin_function_property::<MathObjectAcosh>()
            .with_builtin_function_property::<MathObjectAsin>()
            .with_builtin_function_property::<MathObjectAsinh>()
            .with_builtin_function_property::<MathObjectAtan>()
            .with_builtin_function_property::<MathObjectAtanh>()
            .with_builtin_function_property::<MathObjectAtan2>()
            .with_builtin_function_property::<MathObjectCbrt>()
            .with_builtin_function_property::<MathObjectCeil>()
            .with_builtin_function_property::<MathObjectClz32>()
            .with_builtin_function_property::<MathObjectCos>()
            .with_builtin_function_property::<MathObjectCosh>()
            .with_builtin_function_property::<MathObjectExp>()
            .with_builtin_function_property::<MathObjectExpm1>()
            .with_builtin_function_property::<MathObjectFloor>()
            .with_builtin_function_property::<MathObjectFround>()
            .with_builtin_function_property::<MathObjectHypot>()
            .with_builtin_function_property::<MathObjectImul>()
            .with_builtin_function_property::<MathObjectLog>()
            .with_builtin_function_property::<MathObjectLog1p>()
            .with_builtin_function_property::<MathObjectLog10>()
            .with_builtin_function_property::<MathObjectLog2>()
            .with_builtin_function_property::<MathObjectMax>()
            .with_builtin_function_property::<MathObjectMin>()
            .with_builtin_function_property::<MathObjectPow>()
            .with_builtin_function_property::<MathObjectRandom>()
            .with_builtin_function_property::<MathObjectRound>()
            .with_builtin_function_property::<MathObjectSign>()
            .with_builtin_function_property::<MathObjectSin>()
            .with_builtin_function_property::<MathObjectSinh>()
            .with_builtin_function_property::<MathObjectSqrt>()
            .with_builtin_function_property::<MathObjectTan>()
            .with_builtin_function_property::<MathObjectTanh>()
            .with_builtin_function_property::<MathObjectTrunc>()
            .build();
    }
}

/// Coerces every argument with ToNumber, left to right. The first failing
/// conversion stops the walk.
fn coerce_all(agent: &mut Agent, arguments: ArgumentsList) -> JsResult<Vec<Number>> {
    let mut coerced = Vec::with_capacity(arguments.len());
    for &arg in arguments.iter() {
        coerced.push(to_number(agent, arg)?);
    }
    Ok(coerced)
}

/// Steps 2 to 5 shared by Math.log, Math.log2 and Math.log10.
fn logarithm_special_case(n: Number) -> Option<Value> {
    // 2. If n is either NaN or +∞𝔽, return n.
    if n.is_nan() || n.is_pos_infinity() {
        return Some(n.into_value());
    }
    // 3. If n is 1𝔽, return +0𝔽.
    if n.is_pos_one() {
        return Some(Value::pos_zero());
    }
    // 4. If n is either +0𝔽 or -0𝔽, return -∞𝔽.
    if n.is_pos_zero() || n.is_neg_zero() {
        return Some(Value::neg_inf());
    }
    // 5. If n < -0𝔽, return NaN.
    if n.is_negative() {
        return Some(Value::nan());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        builtins::RegularFn,
        execution::{ExceptionType, Options},
        types::Symbol,
    };

    fn call(f: RegularFn, arguments: &[Value]) -> Number {
        let mut agent = Agent::new(Options::default());
        let result = f(&mut agent, Value::Undefined, ArgumentsList::new(arguments)).unwrap();
        Number::try_from(result).unwrap()
    }

    fn call1(f: RegularFn, x: f64) -> Number {
        call(f, &[Value::from(x)])
    }

    fn call2(f: RegularFn, x: f64, y: f64) -> Number {
        call(f, &[Value::from(x), Value::from(y)])
    }

    const NAN: f64 = f64::NAN;
    const INF: f64 = f64::INFINITY;

    #[test]
    fn abs_table() {
        assert!(call1(MathObject::abs, NAN).is_nan());
        assert!(call1(MathObject::abs, -0.0).is_pos_zero());
        assert!(call1(MathObject::abs, -INF).is_pos_infinity());
        assert_eq!(call1(MathObject::abs, -3.5), Number::from(3.5));
        assert_eq!(call1(MathObject::abs, 2.0), Number::from(2));
    }

    #[test]
    fn sqrt_table() {
        assert!(call1(MathObject::sqrt, -0.0).is_neg_zero());
        assert!(call1(MathObject::sqrt, INF).is_pos_infinity());
        assert!(call1(MathObject::sqrt, -1.0).is_nan());
        assert!(call1(MathObject::sqrt, -INF).is_nan());
        assert_eq!(call1(MathObject::sqrt, 9.0), Number::from(3));
    }

    #[test]
    fn floor_and_ceil_tables() {
        assert_eq!(call1(MathObject::floor, -0.5), Number::from(-1));
        assert!(call1(MathObject::floor, 0.5).is_pos_zero());
        assert!(call1(MathObject::floor, -0.0).is_neg_zero());
        assert_eq!(call1(MathObject::floor, 2.0), Number::from(2));
        assert!(call1(MathObject::ceil, -0.5).is_neg_zero());
        assert!(call1(MathObject::ceil, -0.0).is_neg_zero());
        assert_eq!(call1(MathObject::ceil, 0.5), Number::from(1));
        assert_eq!(call1(MathObject::ceil, -1.5), Number::from(-1));
        assert!(call1(MathObject::ceil, -INF).is_neg_infinity());
    }

    #[test]
    fn round_breaks_ties_towards_positive_infinity() {
        assert_eq!(call1(MathObject::round, 2.5), Number::from(3));
        assert_eq!(call1(MathObject::round, -2.5), Number::from(-2));
        assert_eq!(call1(MathObject::round, -2.6), Number::from(-3));
        assert!(call1(MathObject::round, 0.49999999999999994).is_pos_zero());
        assert!(call1(MathObject::round, -0.5).is_neg_zero());
        assert!(call1(MathObject::round, -0.2).is_neg_zero());
        assert_eq!(call1(MathObject::round, 4503599627370495.5), Number::from(4503599627370496.0));
        assert!(call1(MathObject::round, NAN).is_nan());
    }

    #[test]
    fn trunc_rounds_towards_zero() {
        assert_eq!(call1(MathObject::trunc, -2.5), Number::from(-2));
        assert_eq!(call1(MathObject::trunc, 2.5), Number::from(2));
        assert!(call1(MathObject::trunc, 0.5).is_pos_zero());
        assert!(call1(MathObject::trunc, -0.5).is_neg_zero());
        assert!(call1(MathObject::trunc, -INF).is_neg_infinity());
        assert!(call1(MathObject::trunc, NAN).is_nan());
    }

    #[test]
    fn max_and_min_tables() {
        assert!(call(MathObject::max, &[]).is_neg_infinity());
        assert!(call(MathObject::min, &[]).is_pos_infinity());
        assert!(call2(MathObject::max, 0.0, -0.0).is_pos_zero());
        assert!(call2(MathObject::max, -0.0, 0.0).is_pos_zero());
        assert!(call2(MathObject::min, 0.0, -0.0).is_neg_zero());
        assert!(call2(MathObject::min, -0.0, 0.0).is_neg_zero());
        assert!(call2(MathObject::max, NAN, 1.0).is_nan());
        assert!(call2(MathObject::min, 1.0, NAN).is_nan());
        assert_eq!(call2(MathObject::max, 1.0, 3.0), Number::from(3));
        assert_eq!(call2(MathObject::min, 1.0, 3.0), Number::from(1));
    }

    #[test]
    fn max_stops_at_first_failing_conversion() {
        let mut agent = Agent::new(Options::default());
        let symbol = Symbol::new(&mut agent, None).into_value();
        let error = MathObject::max(
            &mut agent,
            Value::Undefined,
            ArgumentsList::new(&[Value::nan(), symbol]),
        )
        .unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn pow_table() {
        assert!(call2(MathObject::pow, -8.0, 1.0 / 3.0).is_nan());
        assert_eq!(call2(MathObject::pow, -8.0, 3.0), Number::from(-512));
        assert_eq!(call2(MathObject::pow, NAN, 0.0), Number::from(1));
        assert!(call2(MathObject::pow, 1.0, INF).is_nan());
        assert!(call2(MathObject::pow, -0.0, -3.0).is_neg_infinity());
        assert!(call2(MathObject::pow, -0.0, 3.0).is_neg_zero());
        assert!(call2(MathObject::pow, -INF, -3.0).is_neg_zero());
        assert!(call2(MathObject::pow, 0.5, -INF).is_pos_infinity());
    }

    #[test]
    fn exp_and_expm1_tables() {
        assert_eq!(call1(MathObject::exp, -0.0), Number::from(1));
        assert!(call1(MathObject::exp, -INF).is_pos_zero());
        assert!(call1(MathObject::exp, INF).is_pos_infinity());
        assert!(call1(MathObject::expm1, -0.0).is_neg_zero());
        assert_eq!(call1(MathObject::expm1, -INF), Number::from(-1));
    }

    #[test]
    fn sign_table() {
        assert!(call1(MathObject::sign, -0.0).is_neg_zero());
        assert!(call1(MathObject::sign, NAN).is_nan());
        assert_eq!(call1(MathObject::sign, -INF), Number::from(-1));
        assert_eq!(call1(MathObject::sign, 0.1), Number::from(1));
    }

    #[test]
    fn clz32_and_imul() {
        assert_eq!(call1(MathObject::clz32, 0.0), Number::from(32));
        assert_eq!(call1(MathObject::clz32, 1.0), Number::from(31));
        assert_eq!(call1(MathObject::clz32, -1.0), Number::from(0));
        assert_eq!(call1(MathObject::clz32, NAN), Number::from(32));
        assert_eq!(call2(MathObject::imul, 3.0, 4.0), Number::from(12));
        assert_eq!(call2(MathObject::imul, -5.0, 12.0), Number::from(-60));
        assert_eq!(call2(MathObject::imul, 4294967295.0, 5.0), Number::from(-5));
        assert_eq!(call2(MathObject::imul, 2147483648.0, 2.0), Number::from(0));
    }

    #[test]
    fn inverse_trigonometry_tables() {
        assert!(call1(MathObject::acos, 1.5).is_nan());
        assert!(call1(MathObject::acos, 1.0).is_pos_zero());
        assert!(call1(MathObject::acosh, 0.5).is_nan());
        assert!(call1(MathObject::acosh, 1.0).is_pos_zero());
        assert!(call1(MathObject::acosh, INF).is_pos_infinity());
        assert!(call1(MathObject::asin, -0.0).is_neg_zero());
        assert!(call1(MathObject::asin, -1.5).is_nan());
        assert!(call1(MathObject::asinh, -INF).is_neg_infinity());
        assert_eq!(call1(MathObject::atan, INF), Number::from(consts::FRAC_PI_2));
        assert_eq!(call1(MathObject::atan, -INF), Number::from(-consts::FRAC_PI_2));
        assert!(call1(MathObject::atanh, 1.0).is_pos_infinity());
        assert!(call1(MathObject::atanh, -1.0).is_neg_infinity());
        assert!(call1(MathObject::atanh, 2.0).is_nan());
    }

    #[test]
    fn atan2_table() {
        assert_eq!(call2(MathObject::atan2, 0.0, -0.0), Number::from(consts::PI));
        assert_eq!(call2(MathObject::atan2, -0.0, -0.0), Number::from(-consts::PI));
        assert!(call2(MathObject::atan2, 0.0, 1.0).is_pos_zero());
        assert!(call2(MathObject::atan2, -0.0, 0.0).is_neg_zero());
        assert!(call2(MathObject::atan2, NAN, 1.0).is_nan());
        assert_eq!(call2(MathObject::atan2, INF, INF), Number::from(consts::FRAC_PI_4));
        assert_eq!(call2(MathObject::atan2, -INF, -INF), Number::from(-3.0 * consts::FRAC_PI_4));
        assert_eq!(call2(MathObject::atan2, INF, 1.0), Number::from(consts::FRAC_PI_2));
        assert!(call2(MathObject::atan2, -1.0, INF).is_neg_zero());
        assert_eq!(call2(MathObject::atan2, 1.0, -INF), Number::from(consts::PI));
        assert_eq!(call2(MathObject::atan2, -1.0, 0.0), Number::from(-consts::FRAC_PI_2));
        let quadrant = call2(MathObject::atan2, -1.0, -1.0).into_f64();
        assert!((quadrant + 3.0 * consts::FRAC_PI_4).abs() < 1e-15);
    }

    #[test]
    fn hypot_table() {
        assert!(call2(MathObject::hypot, INF, NAN).is_pos_infinity());
        assert!(call2(MathObject::hypot, NAN, -INF).is_pos_infinity());
        assert!(call2(MathObject::hypot, NAN, 1.0).is_nan());
        assert!(call2(MathObject::hypot, -0.0, -0.0).is_pos_zero());
        assert!(call(MathObject::hypot, &[]).is_pos_zero());
        assert_eq!(call2(MathObject::hypot, 3.0, 4.0), Number::from(5));
        assert_eq!(call(MathObject::hypot, &[Value::from(-3.0)]), Number::from(3));
    }

    #[test]
    fn hypot_of_extreme_finite_values() {
        let large = call2(MathObject::hypot, 1e200, 1e200).into_f64();
        assert!(large.is_finite());
        assert!((large / (std::f64::consts::SQRT_2 * 1e200) - 1.0).abs() < 1e-15);

        let tiny = call2(MathObject::hypot, 1e-200, -1e-200).into_f64();
        assert!(tiny > 0.0);
        assert!((tiny / (std::f64::consts::SQRT_2 * 1e-200) - 1.0).abs() < 1e-15);

        let subnormal = call2(MathObject::hypot, f64::MIN_POSITIVE / 4.0, 0.0);
        assert_eq!(subnormal, Number::from(f64::MIN_POSITIVE / 4.0));
    }

    #[test]
    fn logarithm_tables() {
        for f in [MathObject::log as RegularFn, MathObject::log2, MathObject::log10] {
            assert!(call1(f, NAN).is_nan());
            assert!(call1(f, INF).is_pos_infinity());
            assert!(call1(f, 1.0).is_pos_zero());
            assert!(call1(f, -0.0).is_neg_infinity());
            assert!(call1(f, 0.0).is_neg_infinity());
            assert!(call1(f, -1.0).is_nan());
        }
        assert_eq!(call1(MathObject::log2, 8.0), Number::from(3));
        assert!((call1(MathObject::log10, 1000.0).into_f64() - 3.0).abs() < 1e-15);
        assert!(call1(MathObject::log1p, -1.0).is_neg_infinity());
        assert!(call1(MathObject::log1p, -2.0).is_nan());
        assert!(call1(MathObject::log1p, -0.0).is_neg_zero());
    }

    #[test]
    fn trigonometry_and_hyperbolic_tables() {
        assert!(call1(MathObject::sin, -0.0).is_neg_zero());
        assert!(call1(MathObject::sin, INF).is_nan());
        assert!(call1(MathObject::tan, -INF).is_nan());
        assert_eq!(call1(MathObject::cos, -0.0), Number::from(1));
        assert!(call1(MathObject::cos, INF).is_nan());
        assert_eq!(call1(MathObject::cosh, -0.0), Number::from(1));
        assert!(call1(MathObject::cosh, -INF).is_pos_infinity());
        assert!(call1(MathObject::sinh, -INF).is_neg_infinity());
        assert!(call1(MathObject::sinh, -0.0).is_neg_zero());
        assert_eq!(call1(MathObject::tanh, INF), Number::from(1));
        assert_eq!(call1(MathObject::tanh, -INF), Number::from(-1));
        assert!(call1(MathObject::cbrt, -0.0).is_neg_zero());
        assert!((call1(MathObject::cbrt, -27.0).into_f64() + 3.0).abs() < 1e-15);
    }

    #[test]
    fn fround_narrows_to_single_precision() {
        assert!(call1(MathObject::fround, NAN).is_nan());
        assert!(call1(MathObject::fround, -0.0).is_neg_zero());
        assert!(call1(MathObject::fround, INF).is_pos_infinity());
        assert_eq!(call1(MathObject::fround, 5.5), Number::from(5.5));
        assert_eq!(call1(MathObject::fround, 5.05), Number::from(5.050000190734863));
        assert!(call1(MathObject::fround, 1e300).is_pos_infinity());
    }

    #[derive(Debug)]
    struct FixedSource(u32);

    impl crate::ecmascript::execution::RandomSource for FixedSource {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn random_stays_below_one() {
        for bits in [0, 1, u32::MAX / 2, u32::MAX] {
            let mut agent = Agent::with_random_source(Options::default(), Box::new(FixedSource(bits)));
            let result = MathObject::random(&mut agent, Value::Undefined, ArgumentsList::new(&[]))
                .unwrap();
            let result = Number::try_from(result).unwrap().into_f64();
            assert!((0.0..1.0).contains(&result), "{result} out of range");
        }
    }
}
