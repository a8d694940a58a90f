//! Read-only accounting over a point-in-time view of the issue.
//!
//! Payment and collateral held are never stored; they are the bond contract's
//! live token balances. `LedgerSnapshot` captures those balances together with
//! supply, maturity and the ratios so every preview is a pure function of it.
//!
//! Rounding always favours the issue: amounts owed *to* the bond round up,
//! amounts paid *out* of the bond round down.

use crate::math::{self, mul_div_down, mul_wad_down, mul_wad_up};
use bond_errors::BondError;
use soroban_sdk::Env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub total_supply: i128,
    pub payment_balance: i128,
    pub collateral_balance: i128,
    pub is_mature: bool,
    pub collateral_ratio: i128,
    pub convertible_ratio: i128,
    pub payment_scaling: i128,
}

/// Collateral required to mint `shares`, rounded up.
pub fn preview_mint(e: &Env, shares: i128, collateral_ratio: i128) -> Result<i128, BondError> {
    mul_wad_up(e, shares, collateral_ratio)
}

/// Collateral paid out for converting `shares`, rounded down.
pub fn preview_convert(e: &Env, shares: i128, convertible_ratio: i128) -> Result<i128, BondError> {
    mul_wad_down(e, shares, convertible_ratio)
}

impl LedgerSnapshot {
    /// Payment held, expressed in share units.
    pub fn tokens_covered_by_payment(&self) -> Result<i128, BondError> {
        math::upscale(self.payment_balance, self.payment_scaling)
    }

    /// Live recomputation: payment held covers every outstanding share.
    ///
    /// Compared in payment units so a donated balance can never overflow.
    pub fn is_fully_paid(&self) -> Result<bool, BondError> {
        Ok(self.payment_balance >= self.supply_as_payment()?)
    }

    /// Outstanding supply expressed in payment units, rounded up.
    fn supply_as_payment(&self) -> Result<i128, BondError> {
        math::downscale_up(self.total_supply, self.payment_scaling)
    }

    /// Payment units still owed before the issue counts as fully paid.
    pub fn amount_unpaid(&self) -> Result<i128, BondError> {
        if self.total_supply == 0 {
            return Ok(0);
        }
        let owed = self.supply_as_payment()?;
        if owed <= self.payment_balance {
            Ok(0)
        } else {
            math::sub(owed, self.payment_balance)
        }
    }

    /// Payment units held beyond what the outstanding supply can claim.
    pub fn amount_overpaid(&self) -> Result<i128, BondError> {
        if self.total_supply == 0 {
            return Ok(self.payment_balance);
        }
        let owed = self.supply_as_payment()?;
        if self.payment_balance > owed {
            math::sub(self.payment_balance, owed)
        } else {
            Ok(0)
        }
    }

    /// Collateral that must stay locked in the current (paid, mature) branch.
    pub fn required_collateral(&self, e: &Env) -> Result<i128, BondError> {
        let for_convertibility = mul_wad_up(e, self.total_supply, self.convertible_ratio)?;
        if self.is_fully_paid()? {
            return Ok(if self.is_mature { 0 } else { for_convertibility });
        }

        // Unpaid, so the upscaled payment stays below total supply.
        let covered = self.tokens_covered_by_payment()?;
        let for_repayment =
            mul_wad_up(e, math::sub(self.total_supply, covered)?, self.collateral_ratio)?;
        let required = if self.is_mature {
            // Defaulted: conversion is closed, only the repayment shortfall stays locked.
            for_repayment
        } else {
            for_repayment.max(for_convertibility)
        };
        Ok(required)
    }

    /// Collateral the withdraw role may take out right now.
    pub fn preview_withdraw(&self, e: &Env) -> Result<i128, BondError> {
        let required = self.required_collateral(e)?;
        if self.collateral_balance > required {
            math::sub(self.collateral_balance, required)
        } else {
            Ok(0)
        }
    }

    /// `(payment, collateral)` a holder receives for redeeming `shares`.
    pub fn preview_redeem(&self, e: &Env, shares: i128) -> Result<(i128, i128), BondError> {
        if self.total_supply == 0 {
            return Ok((0, 0));
        }
        let paid_amount = if self.is_fully_paid()? {
            self.total_supply
        } else {
            self.tokens_covered_by_payment()?
        };
        let payment = mul_div_down(e, shares, self.payment_balance, self.total_supply)?;
        let non_paid = math::sub(self.total_supply, paid_amount)?;
        let unpaid_shares = mul_div_down(e, shares, non_paid, self.total_supply)?;
        let collateral = mul_wad_down(e, unpaid_shares, self.collateral_ratio)?;
        Ok((payment, collateral))
    }
}
