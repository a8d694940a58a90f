//! Tests for issue creation: parameter validation and initial state.

#![cfg(test)]

use crate::test_helpers::*;
use crate::test_token::create_fee_token;
use crate::validation::MAX_TIME_TO_MATURITY;
use crate::{BondError, BondState, Role};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

// ═══════════════════════════════════════════════════════════════════
// 1. Successful creation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_initialize_stores_terms() {
    let e = Env::default();
    let t = setup(&e);

    let stored = t.client.get_terms();
    assert_eq!(stored, terms(&e, &t.payment, &t.collateral, COLLATERAL_RATIO, CONVERTIBLE_RATIO));
    assert_eq!(t.client.admin(), t.admin);
}

#[test]
fn test_initialize_mints_nothing() {
    let e = Env::default();
    let t = setup(&e);

    assert_eq!(t.client.total_supply(), 0);
    assert_eq!(t.client.total_minted(), 0);
    assert_eq!(t.client.balance(&t.admin), 0);
    assert_eq!(t.client.collateral_balance(), 0);
    assert_eq!(t.client.payment_balance(), 0);
}

#[test]
fn test_initialize_grants_every_role_to_admin() {
    let e = Env::default();
    let t = setup(&e);

    assert!(t.client.has_role(&Role::Admin, &t.admin));
    assert!(t.client.has_role(&Role::Mint, &t.admin));
    assert!(t.client.has_role(&Role::Withdraw, &t.admin));
    assert!(!t.client.has_role(&Role::Mint, &t.holder));
}

#[test]
fn test_fresh_issue_without_supply_reads_as_paid() {
    let e = Env::default();
    let t = setup(&e);

    // Nothing outstanding means nothing owed.
    assert!(!t.client.is_mature());
    assert!(t.client.is_fully_paid());
    assert_eq!(t.client.bond_state(), BondState::PaidEarly);

    t.client.mint(&t.admin, &ONE);
    assert_eq!(t.client.bond_state(), BondState::Active);
}

#[test]
fn test_share_metadata_follows_terms() {
    let e = Env::default();
    let t = setup(&e);

    assert_eq!(t.client.name(), String::from_str(&e, "Acme 2025 Convertible"));
    assert_eq!(t.client.symbol(), String::from_str(&e, "ACME25"));
    assert_eq!(t.client.decimals(), 18);
}

#[test]
fn test_initialize_at_maximum_horizon() {
    let e = Env::default();
    let t = setup_uninitialized(&e);
    let mut bond_terms = terms(&e, &t.payment, &t.collateral, COLLATERAL_RATIO, CONVERTIBLE_RATIO);
    bond_terms.maturity = START + MAX_TIME_TO_MATURITY;

    t.client.initialize(&t.admin, &bond_terms);
    assert_eq!(t.client.get_terms().maturity, START + MAX_TIME_TO_MATURITY);
}

#[test]
fn test_non_convertible_issue_is_allowed() {
    let e = Env::default();
    let t = setup_with_ratios(&e, COLLATERAL_RATIO, 0);
    assert_eq!(t.client.get_terms().convertible_ratio, 0);
}

#[test]
fn test_equal_ratios_are_allowed() {
    let e = Env::default();
    let t = setup_with_ratios(&e, COLLATERAL_RATIO, COLLATERAL_RATIO);
    assert_eq!(t.client.get_terms().convertible_ratio, COLLATERAL_RATIO);
}

// ═══════════════════════════════════════════════════════════════════
// 2. One-shot initialization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let t = setup(&e);
    let bond_terms = terms(&e, &t.payment, &t.collateral, COLLATERAL_RATIO, CONVERTIBLE_RATIO);

    let result = t.client.try_initialize(&t.admin, &bond_terms);
    assert_eq!(result, Err(Ok(BondError::AlreadyInitialized)));
}

#[test]
fn test_queries_before_initialize_fail() {
    let e = Env::default();
    let t = setup_uninitialized(&e);

    assert_eq!(t.client.try_get_terms(), Err(Ok(BondError::NotInitialized)));
    assert_eq!(t.client.try_admin(), Err(Ok(BondError::NotInitialized)));
    assert_eq!(t.client.try_preview_withdraw(), Err(Ok(BondError::NotInitialized)));
    assert_eq!(t.client.try_mint(&t.admin, &ONE), Err(Ok(BondError::MissingRole)));
    assert_eq!(t.client.total_supply(), 0);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Maturity window
// ═══════════════════════════════════════════════════════════════════

fn try_with_maturity(e: &Env, maturity: u64) -> BondError {
    let t = setup_uninitialized(e);
    let mut bond_terms = terms(e, &t.payment, &t.collateral, COLLATERAL_RATIO, CONVERTIBLE_RATIO);
    bond_terms.maturity = maturity;
    let err = t.client.try_initialize(&t.admin, &bond_terms).unwrap_err().unwrap();
    assert_eq!(t.client.try_get_terms(), Err(Ok(BondError::NotInitialized)));
    err
}

#[test]
fn test_maturity_in_the_past_fails() {
    let e = Env::default();
    assert_eq!(try_with_maturity(&e, START - ONE_DAY), BondError::InvalidMaturity);
}

#[test]
fn test_maturity_equal_to_now_fails() {
    let e = Env::default();
    assert_eq!(try_with_maturity(&e, START), BondError::InvalidMaturity);
}

#[test]
fn test_maturity_beyond_horizon_fails() {
    let e = Env::default();
    assert_eq!(
        try_with_maturity(&e, START + MAX_TIME_TO_MATURITY + 1),
        BondError::InvalidMaturity
    );
}

// ═══════════════════════════════════════════════════════════════════
// 4. Ratios, supply, assets
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_convertible_above_collateral_ratio_fails_and_creates_nothing() {
    let e = Env::default();
    let t = setup_uninitialized(&e);
    let bond_terms = terms(&e, &t.payment, &t.collateral, ONE / 4, ONE / 2);

    let result = t.client.try_initialize(&t.admin, &bond_terms);
    assert_eq!(result, Err(Ok(BondError::RatioInconsistent)));

    assert_eq!(t.client.try_get_terms(), Err(Ok(BondError::NotInitialized)));
    assert!(!t.client.has_role(&Role::Admin, &t.admin));
    assert_eq!(t.client.total_supply(), 0);
}

#[test]
fn test_negative_ratio_fails() {
    let e = Env::default();
    let t = setup_uninitialized(&e);
    let bond_terms = terms(&e, &t.payment, &t.collateral, -1, 0);

    let result = t.client.try_initialize(&t.admin, &bond_terms);
    assert_eq!(result, Err(Ok(BondError::InvalidRatio)));
}

#[test]
fn test_zero_max_supply_fails() {
    let e = Env::default();
    let t = setup_uninitialized(&e);
    let mut bond_terms = terms(&e, &t.payment, &t.collateral, COLLATERAL_RATIO, CONVERTIBLE_RATIO);
    bond_terms.max_supply = 0;

    let result = t.client.try_initialize(&t.admin, &bond_terms);
    assert_eq!(result, Err(Ok(BondError::InvalidMaxSupply)));
}

#[test]
fn test_identical_assets_fail() {
    let e = Env::default();
    let t = setup_uninitialized(&e);
    let bond_terms = terms(&e, &t.payment, &t.payment, COLLATERAL_RATIO, CONVERTIBLE_RATIO);

    let result = t.client.try_initialize(&t.admin, &bond_terms);
    assert_eq!(result, Err(Ok(BondError::IdenticalAssets)));
}

#[test]
fn test_payment_token_over_18_decimals_fails() {
    let e = Env::default();
    let t = setup_uninitialized(&e);
    let issuer = Address::generate(&e);
    let payment = create_fee_token(&e, 19, 0, &issuer, 1_000);
    let bond_terms = terms(&e, &payment, &t.collateral, COLLATERAL_RATIO, CONVERTIBLE_RATIO);

    let result = t.client.try_initialize(&t.admin, &bond_terms);
    assert_eq!(result, Err(Ok(BondError::DecimalsOver18)));
}

#[test]
fn test_collateral_token_over_18_decimals_fails() {
    let e = Env::default();
    let t = setup_uninitialized(&e);
    let issuer = Address::generate(&e);
    let collateral = create_fee_token(&e, 24, 0, &issuer, 1_000);
    let bond_terms = terms(&e, &t.payment, &collateral, COLLATERAL_RATIO, CONVERTIBLE_RATIO);

    let result = t.client.try_initialize(&t.admin, &bond_terms);
    assert_eq!(result, Err(Ok(BondError::DecimalsOver18)));
}

#[test]
fn test_18_decimal_payment_token_has_unit_scaling() {
    let e = Env::default();
    let t = setup_uninitialized(&e);
    let payment = create_fee_token(&e, 18, 0, &t.admin, 10 * ONE);
    let bond_terms = terms(&e, &payment, &t.collateral, COLLATERAL_RATIO, CONVERTIBLE_RATIO);
    t.client.initialize(&t.admin, &bond_terms);

    t.client.mint(&t.admin, &(10 * ONE));
    assert_eq!(t.client.amount_unpaid(), 10 * ONE);
}
