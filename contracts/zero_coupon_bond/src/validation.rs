//! Issue Creation Validation
//!
//! Every bond issue passes these checks once, inside `initialize`, before any
//! state is written. A failure leaves the instance uninitialized.
//!
//! ## Constraints
//! - **Maturity window**: strictly after the creation timestamp and no more than
//!   3650 days (`MAX_TIME_TO_MATURITY`) ahead.
//! - **Ratios**: non-negative, and `convertible_ratio <= collateral_ratio` so that
//!   collateral locked for repayment always covers conversions.
//! - **Supply**: `max_supply > 0`.
//! - **Assets**: payment and collateral token differ, and neither reports more
//!   than 18 decimals.

use crate::math::{self, MAX_TOKEN_DECIMALS};
use crate::types::BondTerms;
use bond_errors::BondError;

/// Furthest a maturity may lie from creation (3650 days, in seconds).
pub const MAX_TIME_TO_MATURITY: u64 = 3_650 * 86_400;

/// Reject maturities that are already reached or beyond the horizon.
pub fn validate_maturity(now: u64, maturity: u64) -> Result<(), BondError> {
    if maturity <= now {
        return Err(BondError::InvalidMaturity);
    }
    let horizon = now
        .checked_add(MAX_TIME_TO_MATURITY)
        .ok_or(BondError::InvalidMaturity)?;
    if maturity > horizon {
        return Err(BondError::InvalidMaturity);
    }
    Ok(())
}

pub fn validate_ratios(collateral_ratio: i128, convertible_ratio: i128) -> Result<(), BondError> {
    if collateral_ratio < 0 || convertible_ratio < 0 {
        return Err(BondError::InvalidRatio);
    }
    if convertible_ratio > collateral_ratio {
        return Err(BondError::RatioInconsistent);
    }
    Ok(())
}

pub fn validate_max_supply(max_supply: i128) -> Result<(), BondError> {
    if max_supply <= 0 {
        return Err(BondError::InvalidMaxSupply);
    }
    Ok(())
}

pub fn validate_decimals(decimals: u32) -> Result<(), BondError> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(BondError::DecimalsOver18);
    }
    Ok(())
}

/// Token-independent checks on `terms`. Runs before any token is queried.
pub fn validate_terms(now: u64, terms: &BondTerms) -> Result<(), BondError> {
    validate_maturity(now, terms.maturity)?;
    validate_ratios(terms.collateral_ratio, terms.convertible_ratio)?;
    validate_max_supply(terms.max_supply)?;
    if terms.payment_token == terms.collateral_token {
        return Err(BondError::IdenticalAssets);
    }
    Ok(())
}

/// Check both assets' precision and derive the payment scaling factor.
pub fn payment_scaling(payment_decimals: u32, collateral_decimals: u32) -> Result<i128, BondError> {
    validate_decimals(payment_decimals)?;
    validate_decimals(collateral_decimals)?;
    math::scaling_factor(payment_decimals)
}
