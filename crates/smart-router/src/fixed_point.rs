//! Fixed-Point Amount Math
//!
//! Conversions between raw ledger integers (scaled by `10^decimals`) and
//! display decimals, Q96 price scaling, and slippage bounds.
//!
//! The plain entry points sit on display and estimation paths: any failure is
//! logged and replaced by a zero default, except `apply_slippage`, which falls
//! back to the unadjusted amount. The `try_*` variants expose the error.

use num_bigint::{BigInt, BigUint};
use num_traits::{Float, FromPrimitive, One, Signed, ToPrimitive, Zero};
use swap_core::MathError;

/// Binary exponent of the Q96 fixed-point format.
pub const Q96_RESOLUTION: usize = 96;

/// Exact `10^n`.
pub fn exponent(n: u32) -> BigUint {
    BigUint::from(10u32).pow(n)
}

/// `2^96` as an integer.
pub fn q96() -> BigUint {
    BigUint::one() << Q96_RESOLUTION
}

/// Convert a raw amount into a display number with `round` fractional digits.
///
/// Digits past `round` are truncated toward zero, never rounded.
pub fn try_redenominate(amount: &BigInt, decimals: u32, round: u32) -> Result<f64, MathError> {
    let scale = BigInt::from(exponent(round));
    let truncated = amount * &scale / BigInt::from(exponent(decimals));

    let divisor = 10f64.powi(round as i32);
    let mut result = truncated.to_f64().unwrap_or(f64::NAN) / divisor;
    if !result.is_finite() {
        // The scaled intermediate overflowed; convert whole and fractional
        // parts separately.
        let whole = &truncated / &scale;
        let fraction = &truncated % &scale;
        result = whole.to_f64().unwrap_or(f64::NAN)
            + fraction.to_f64().unwrap_or(f64::NAN) / divisor;
    }
    if !result.is_finite() {
        return Err(MathError::NonFinite {
            value: truncated.to_string(),
        });
    }
    Ok(result)
}

pub fn redenominate(amount: &BigInt, decimals: u32, round: u32) -> f64 {
    try_redenominate(amount, decimals, round).unwrap_or_else(|e| {
        tracing::warn!("Failed to redenominate {}: {}", amount, e);
        0.0
    })
}

/// Convert decimal text (e.g. `"12.5"`) into raw units scaled by `10^decimals`.
///
/// Fraction digits beyond `decimals` are truncated.
pub fn try_de_redenominate_str(input: &str, decimals: u32) -> Result<BigInt, MathError> {
    let malformed = || MathError::MalformedAmount {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(malformed());
    }

    let kept = &fraction[..fraction.len().min(decimals as usize)];
    let padding = decimals as usize - kept.len();
    let digits = format!("{}{}{}", whole, kept, "0".repeat(padding));
    let digits = digits.trim_start_matches('0');

    let magnitude = if digits.is_empty() {
        BigInt::zero()
    } else {
        digits.parse::<BigInt>().map_err(|_| malformed())?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

pub fn de_redenominate_str(input: &str, decimals: u32) -> BigInt {
    try_de_redenominate_str(input, decimals).unwrap_or_else(|e| {
        tracing::warn!("Failed to de-redenominate {:?}: {}", input, e);
        BigInt::zero()
    })
}

/// Convert a display number into raw units scaled by `10^decimals`.
///
/// Uses the shortest decimal representation of the float, so `1.23` maps to
/// exactly `123 * 10^(decimals - 2)`.
pub fn try_de_redenominate(display: f64, decimals: u32) -> Result<BigInt, MathError> {
    if !display.is_finite() {
        return Err(MathError::NonFinite {
            value: display.to_string(),
        });
    }
    try_de_redenominate_str(&display.to_string(), decimals)
}

pub fn de_redenominate(display: f64, decimals: u32) -> BigInt {
    try_de_redenominate(display, decimals).unwrap_or_else(|e| {
        let value = display;
        tracing::warn!("Failed to de-redenominate {}: {}", value, e);
        BigInt::zero()
    })
}

/// Scale a float by `2^96` exactly, truncating toward zero.
pub fn try_multiply_x96(value: f64) -> Result<BigInt, MathError> {
    if !value.is_finite() {
        return Err(MathError::NonFinite {
            value: value.to_string(),
        });
    }

    // value == sign * mantissa * 2^exp
    let (mantissa, exp, sign) = Float::integer_decode(value);
    let shift = exp as i64 + Q96_RESOLUTION as i64;
    let magnitude = BigInt::from(mantissa);
    let scaled = if shift >= 0 {
        magnitude << (shift as usize)
    } else {
        magnitude >> ((-shift) as usize)
    };

    Ok(if sign < 0 { -scaled } else { scaled })
}

pub fn multiply_x96(value: f64) -> BigInt {
    try_multiply_x96(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to scale {} to Q96: {}", value, e);
        BigInt::zero()
    })
}

/// Convert a Q96 value back to a float.
///
/// The integral part comes from a right shift and the fraction from the
/// masked low 96 bits, so no precision is lost before the final conversion.
pub fn try_divide_x96(value: &BigInt) -> Result<f64, MathError> {
    let magnitude = value.magnitude();
    let integral = magnitude >> Q96_RESOLUTION;
    let fraction = magnitude & &(q96() - BigUint::one());

    let result = integral.to_f64().unwrap_or(f64::INFINITY)
        + fraction.to_f64().unwrap_or(0.0) / 2f64.powi(Q96_RESOLUTION as i32);
    if !result.is_finite() {
        return Err(MathError::NonFinite {
            value: value.to_string(),
        });
    }

    Ok(if value.is_negative() { -result } else { result })
}

pub fn divide_x96(value: &BigInt) -> f64 {
    try_divide_x96(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to scale {} from Q96: {}", value, e);
        0.0
    })
}

/// Slippage-adjusted bound around `amount`.
///
/// `slippage` is a fraction (0.01 = 1%) kept to `round` decimal digits.
/// Exact input subtracts the adjustment (minimum acceptable output, floored
/// at zero); exact output adds it (maximum acceptable input).
///
/// Fails on a non-finite or negative `slippage`.
pub fn try_apply_slippage(
    amount: &BigInt,
    slippage: f64,
    round: u32,
    exact_input: bool,
) -> Result<BigInt, MathError> {
    if !slippage.is_finite() {
        return Err(MathError::NonFinite {
            value: slippage.to_string(),
        });
    }
    if slippage < 0.0 {
        return Err(MathError::NegativeSlippage {
            value: slippage.to_string(),
        });
    }

    let scale = exponent(round);
    let scaled_slippage = (slippage * scale.to_f64().unwrap_or(f64::INFINITY)).round();
    let percentage = BigInt::from_f64(scaled_slippage).ok_or_else(|| MathError::NonFinite {
        value: scaled_slippage.to_string(),
    })?;
    let adjustment = amount * percentage / BigInt::from(scale);

    if exact_input {
        Ok((amount - adjustment).max(BigInt::zero()))
    } else {
        Ok(amount + adjustment)
    }
}

/// Like [`try_apply_slippage`], but a rejected `slippage` is logged and
/// `amount` is returned unchanged (a zero adjustment) rather than zero.
pub fn apply_slippage(amount: &BigInt, slippage: f64, round: u32, exact_input: bool) -> BigInt {
    try_apply_slippage(amount, slippage, round, exact_input).unwrap_or_else(|e| {
        tracing::warn!("Failed to apply slippage {} to {}: {}", slippage, amount, e);
        amount.clone()
    })
}
