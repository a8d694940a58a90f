//! Fixed-point helpers for ratio and decimal-scaling arithmetic.
//!
//! Ratios are 18-decimal fixed point. Products of a share amount and a ratio
//! routinely exceed `i128` (5e25 shares * 5e17 ratio), so every `mul_div`
//! widens to the host `I256` type before dividing and narrows the result back.
//! Inputs are expected to be non-negative; callers reject negatives first.

use bond_errors::BondError;
use soroban_sdk::{Env, I256};

/// One whole unit in 18-decimal fixed point.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Decimals of the bond share token.
pub const SHARE_DECIMALS: u32 = 18;

/// Highest token precision the scaling rules can express.
pub const MAX_TOKEN_DECIMALS: u32 = 18;

fn narrow(value: &I256) -> Result<i128, BondError> {
    value.to_i128().ok_or(BondError::Overflow)
}

/// `floor(a * b / d)` with a 256-bit intermediate.
pub fn mul_div_down(e: &Env, a: i128, b: i128, d: i128) -> Result<i128, BondError> {
    if d == 0 {
        return Err(BondError::DivisionByZero);
    }
    let product = I256::from_i128(e, a).mul(&I256::from_i128(e, b));
    narrow(&product.div(&I256::from_i128(e, d)))
}

/// `ceil(a * b / d)` with a 256-bit intermediate.
pub fn mul_div_up(e: &Env, a: i128, b: i128, d: i128) -> Result<i128, BondError> {
    if d == 0 {
        return Err(BondError::DivisionByZero);
    }
    let divisor = I256::from_i128(e, d);
    let product = I256::from_i128(e, a).mul(&I256::from_i128(e, b));
    let quotient = narrow(&product.div(&divisor))?;
    if product.rem_euclid(&divisor) == I256::from_i32(e, 0) {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(BondError::Overflow)
    }
}

/// `floor(amount * ratio / SCALE)`.
#[inline]
pub fn mul_wad_down(e: &Env, amount: i128, ratio: i128) -> Result<i128, BondError> {
    mul_div_down(e, amount, ratio, SCALE)
}

/// `ceil(amount * ratio / SCALE)`.
#[inline]
pub fn mul_wad_up(e: &Env, amount: i128, ratio: i128) -> Result<i128, BondError> {
    mul_div_up(e, amount, ratio, SCALE)
}

/// Factor that lifts an amount of a `decimals`-precision token to share precision.
pub fn scaling_factor(decimals: u32) -> Result<i128, BondError> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(BondError::DecimalsOver18);
    }
    10_i128
        .checked_pow(SHARE_DECIMALS - decimals)
        .ok_or(BondError::Overflow)
}

/// Payment units -> share units.
#[inline]
pub fn upscale(amount: i128, factor: i128) -> Result<i128, BondError> {
    amount.checked_mul(factor).ok_or(BondError::Overflow)
}

/// Share units -> payment units, rounded up so holders are never short-changed.
#[inline]
pub fn downscale_up(shares: i128, factor: i128) -> Result<i128, BondError> {
    if factor == 0 {
        return Err(BondError::DivisionByZero);
    }
    let quotient = shares / factor;
    if shares % factor == 0 {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(BondError::Overflow)
    }
}

/// Checked `i128` subtraction mapped onto the bond error space.
#[inline]
pub fn sub(a: i128, b: i128) -> Result<i128, BondError> {
    a.checked_sub(b).ok_or(BondError::Overflow)
}

/// Checked `i128` addition mapped onto the bond error space.
#[inline]
pub fn add(a: i128, b: i128) -> Result<i128, BondError> {
    a.checked_add(b).ok_or(BondError::Overflow)
}
