//! Tests for recovering stray tokens sent to the bond.

#![cfg(test)]

use crate::test_helpers::*;
use crate::test_token::{create_side_effect_token, SideEffectTokenClient};
use crate::BondError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

fn stray_asset(e: &Env, bond_id: &Address, amount: i128) -> Address {
    let asset = e
        .register_stellar_asset_contract_v2(Address::generate(e))
        .address();
    if amount > 0 {
        StellarAssetClient::new(e, &asset).mint(bond_id, &amount);
    }
    asset
}

#[test]
fn test_sweep_stray_token() {
    let e = Env::default();
    let t = setup_minted(&e);
    let stray = stray_asset(&e, &t.bond_id, 777);
    let receiver = Address::generate(&e);

    let swept = t.client.sweep(&t.admin, &stray, &receiver);

    assert_eq!(swept, 777);
    assert_eq!(TokenClient::new(&e, &stray).balance(&receiver), 777);
    assert_eq!(TokenClient::new(&e, &stray).balance(&t.bond_id), 0);
    assert_eq!(t.client.collateral_balance(), 25_000_000 * ONE);
}

#[test]
fn test_sweep_payment_token_fails() {
    let e = Env::default();
    let t = setup_minted(&e);
    t.client.pay(&t.admin, &PAYMENT_UNIT);

    let result = t.client.try_sweep(&t.admin, &t.payment, &t.admin);
    assert_eq!(result, Err(Ok(BondError::SweepDisallowedForToken)));
}

#[test]
fn test_sweep_collateral_token_fails() {
    let e = Env::default();
    let t = setup_minted(&e);

    let result = t.client.try_sweep(&t.admin, &t.collateral, &t.admin);
    assert_eq!(result, Err(Ok(BondError::SweepDisallowedForToken)));
}

#[test]
fn test_sweep_own_shares_fails() {
    let e = Env::default();
    let t = setup_minted(&e);
    t.client.transfer(&t.admin, &t.bond_id, &ONE);

    let result = t.client.try_sweep(&t.admin, &t.bond_id, &t.admin);
    assert_eq!(result, Err(Ok(BondError::SweepDisallowedForToken)));
}

#[test]
fn test_sweep_empty_balance_fails() {
    let e = Env::default();
    let t = setup(&e);
    let stray = stray_asset(&e, &t.bond_id, 0);

    let result = t.client.try_sweep(&t.admin, &stray, &t.admin);
    assert_eq!(result, Err(Ok(BondError::ZeroAmount)));
}

#[test]
fn test_sweep_requires_admin() {
    let e = Env::default();
    let t = setup(&e);
    let stray = stray_asset(&e, &t.bond_id, 10);

    let result = t.client.try_sweep(&t.holder, &stray, &t.holder);
    assert_eq!(result, Err(Ok(BondError::NotAdmin)));
}

#[test]
fn test_sweep_that_moves_payment_is_rejected() {
    let e = Env::default();
    let t = setup_minted(&e);
    let proxy = create_side_effect_token(&e, &t.bond_id, 500, &t.payment, PAYMENT_UNIT);
    StellarAssetClient::new(&e, &t.payment).mint(&proxy, &PAYMENT_UNIT);
    let payment_before = t.client.payment_balance();
    let collateral_before = t.client.collateral_balance();

    let result = t.client.try_sweep(&t.admin, &proxy, &t.admin);

    assert_eq!(result, Err(Ok(BondError::SweepDisallowedForToken)));
    assert_eq!(t.client.payment_balance(), payment_before);
    assert_eq!(t.client.collateral_balance(), collateral_before);
    assert_eq!(SideEffectTokenClient::new(&e, &proxy).balance(&t.bond_id), 500);
}

#[test]
fn test_sweep_that_moves_collateral_is_rejected() {
    let e = Env::default();
    let t = setup_minted(&e);
    let proxy = create_side_effect_token(&e, &t.bond_id, 500, &t.collateral, ONE);
    StellarAssetClient::new(&e, &t.collateral).mint(&proxy, &ONE);
    let collateral_before = t.client.collateral_balance();

    let result = t.client.try_sweep(&t.admin, &proxy, &t.admin);

    assert_eq!(result, Err(Ok(BondError::SweepDisallowedForToken)));
    assert_eq!(t.client.collateral_balance(), collateral_before);
    assert_eq!(TokenClient::new(&e, &t.collateral).balance(&proxy), ONE);
}
