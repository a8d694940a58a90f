use crate::types::{BondTerms, Role};
use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the issue is created.
///
/// # Topics
/// * `Symbol` - "bond_created"
/// * `Address` - The admin that created the issue
///
/// # Data
/// * `BondTerms` - Every configuration field, for off-chain indexing
pub fn emit_bond_created(e: &Env, admin: &Address, terms: &BondTerms) {
    let topics = (Symbol::new(e, "bond_created"), admin.clone());
    e.events().publish(topics, terms.clone());
}

/// Emitted when collateral is deposited and shares are minted.
///
/// # Data
/// * `i128` - Collateral deposited
/// * `i128` - Shares minted
pub fn emit_collateral_deposited(e: &Env, minter: &Address, collateral: i128, shares: i128) {
    let topics = (Symbol::new(e, "collateral_deposited"), minter.clone());
    e.events().publish(topics, (collateral, shares));
}

/// Emitted when releasable collateral leaves the bond.
///
/// # Data
/// * `Address` - Receiver of the collateral
/// * `i128` - Amount withdrawn
pub fn emit_collateral_withdrawn(e: &Env, caller: &Address, receiver: &Address, amount: i128) {
    let topics = (Symbol::new(e, "collateral_withdrawn"), caller.clone());
    e.events().publish(topics, (receiver.clone(), amount));
}

/// Emitted on every payment with the amount actually received.
pub fn emit_payment(e: &Env, payer: &Address, received: i128) {
    let topics = (Symbol::new(e, "payment"), payer.clone());
    e.events().publish(topics, received);
}

/// Emitted by the payment that makes the issue fully paid.
///
/// # Data
/// * `i128` - Total payment balance after the deposit
pub fn emit_payment_in_full(e: &Env, payer: &Address, payment_balance: i128) {
    let topics = (Symbol::new(e, "payment_in_full"), payer.clone());
    e.events().publish(topics, payment_balance);
}

/// # Data
/// * `i128` - Shares burned
/// * `i128` - Collateral sent
pub fn emit_converted(e: &Env, holder: &Address, shares: i128, collateral: i128) {
    let topics = (Symbol::new(e, "converted"), holder.clone());
    e.events().publish(topics, (shares, collateral));
}

/// # Data
/// * `i128` - Shares burned
/// * `i128` - Payment sent
/// * `i128` - Collateral sent
pub fn emit_redeemed(e: &Env, holder: &Address, shares: i128, payment: i128, collateral: i128) {
    let topics = (Symbol::new(e, "redeemed"), holder.clone());
    e.events().publish(topics, (shares, payment, collateral));
}

pub fn emit_excess_payment_withdrawn(e: &Env, receiver: &Address, amount: i128) {
    let topics = (Symbol::new(e, "excess_payment_withdrawn"), receiver.clone());
    e.events().publish(topics, amount);
}

/// # Topics
/// * `Symbol` - "token_swept"
/// * `Address` - The swept token
///
/// # Data
/// * `Address` - Receiver
/// * `i128` - Amount swept
pub fn emit_token_swept(e: &Env, token: &Address, receiver: &Address, amount: i128) {
    let topics = (Symbol::new(e, "token_swept"), token.clone());
    e.events().publish(topics, (receiver.clone(), amount));
}

pub fn emit_role_granted(e: &Env, role: Role, account: &Address, admin: &Address) {
    let topics = (Symbol::new(e, "role_granted"), account.clone());
    e.events().publish(topics, (role, admin.clone()));
}

pub fn emit_role_revoked(e: &Env, role: Role, account: &Address, admin: &Address) {
    let topics = (Symbol::new(e, "role_revoked"), account.clone());
    e.events().publish(topics, (role, admin.clone()));
}

// ─── Share token standard events ───────────────────────────────────────────

pub fn emit_share_mint(e: &Env, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "mint"), to.clone());
    e.events().publish(topics, amount);
}

pub fn emit_share_burn(e: &Env, from: &Address, amount: i128) {
    let topics = (Symbol::new(e, "burn"), from.clone());
    e.events().publish(topics, amount);
}

pub fn emit_share_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "transfer"), from.clone(), to.clone());
    e.events().publish(topics, amount);
}

pub fn emit_share_approve(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    live_until_ledger: u32,
) {
    let topics = (Symbol::new(e, "approve"), from.clone(), spender.clone());
    e.events().publish(topics, (amount, live_until_ledger));
}
