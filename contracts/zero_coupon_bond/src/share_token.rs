//! Fungible share ledger backing the bond's token interface.
//!
//! Balances and allowances live in persistent storage keyed per holder.
//! `total_supply` tracks outstanding shares; `total_minted` only ever grows
//! and is what the max-supply ceiling is checked against.

use crate::events;
use crate::math;
use crate::types::{AllowanceKey, AllowanceValue, DataKey};
use bond_errors::BondError;
use soroban_sdk::{Address, Env};

pub fn balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn set_balance(e: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &amount);
    }
}

pub fn total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn total_minted(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalMinted)
        .unwrap_or(0)
}

fn receive_balance(e: &Env, id: &Address, amount: i128) -> Result<(), BondError> {
    let updated = math::add(balance(e, id), amount)?;
    set_balance(e, id, updated);
    Ok(())
}

fn spend_balance(e: &Env, id: &Address, amount: i128) -> Result<(), BondError> {
    let current = balance(e, id);
    if current < amount {
        return Err(BondError::InsufficientBalance);
    }
    set_balance(e, id, current - amount);
    Ok(())
}

/// Credit freshly minted shares to `to` and grow both supply counters.
pub fn mint(e: &Env, to: &Address, amount: i128) -> Result<(), BondError> {
    let supply = math::add(total_supply(e), amount)?;
    let minted = math::add(total_minted(e), amount)?;
    receive_balance(e, to, amount)?;
    e.storage().instance().set(&DataKey::TotalSupply, &supply);
    e.storage().instance().set(&DataKey::TotalMinted, &minted);
    events::emit_share_mint(e, to, amount);
    Ok(())
}

/// Destroy `amount` of `from`'s shares. Outstanding supply shrinks; minted count does not.
pub fn burn(e: &Env, from: &Address, amount: i128) -> Result<(), BondError> {
    spend_balance(e, from, amount)?;
    let supply = math::sub(total_supply(e), amount)?;
    e.storage().instance().set(&DataKey::TotalSupply, &supply);
    events::emit_share_burn(e, from, amount);
    Ok(())
}

pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), BondError> {
    spend_balance(e, from, amount)?;
    receive_balance(e, to, amount)?;
    events::emit_share_transfer(e, from, to, amount);
    Ok(())
}

pub fn allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match e.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(a) if a.live_until_ledger >= e.ledger().sequence() => a.amount,
        _ => 0,
    }
}

pub fn approve(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    live_until_ledger: u32,
) -> Result<(), BondError> {
    if amount < 0 {
        return Err(BondError::InvalidAmount);
    }
    let current_ledger = e.ledger().sequence();
    if amount > 0 && live_until_ledger < current_ledger {
        return Err(BondError::InvalidExpiration);
    }
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    e.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            live_until_ledger,
        },
    );
    if amount > 0 {
        let live_for = live_until_ledger - current_ledger;
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    events::emit_share_approve(e, from, spender, amount, live_until_ledger);
    Ok(())
}

pub fn spend_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), BondError> {
    let current = allowance(e, from, spender);
    if current < amount {
        return Err(BondError::InsufficientAllowance);
    }
    if amount > 0 {
        let key = DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        let live_until_ledger = e
            .storage()
            .temporary()
            .get::<_, AllowanceValue>(&key)
            .map(|a| a.live_until_ledger)
            .unwrap_or(0);
        e.storage().temporary().set(
            &key,
            &AllowanceValue {
                amount: current - amount,
                live_until_ledger,
            },
        );
    }
    Ok(())
}

pub fn require_non_negative(amount: i128) -> Result<(), BondError> {
    if amount < 0 {
        return Err(BondError::InvalidAmount);
    }
    Ok(())
}
