//! Zero-Coupon Bond Contract
//!
//! One instance represents one debt issue: fungible shares that the issuer
//! promises to repay 1:1 in a payment token at maturity, backed until then by
//! a collateral token.
//!
//! ## Lifecycle
//!
//! State is derived on every call from `(now, payment balance, total supply)`:
//!
//! | mature | fully paid | state       |
//! |--------|------------|-------------|
//! | no     | no         | `Active`    |
//! | no     | yes        | `PaidEarly` |
//! | yes    | no         | `Defaulted` |
//! | yes    | yes        | `Paid`      |
//!
//! ## Key design decisions
//!
//! - **Mint on demand**: `initialize` mints nothing. The Mint role deposits
//!   collateral and mints incrementally; cumulative mints never exceed `max_supply`.
//! - **Live full-payment check**: `upscale(payment balance) >= total supply`,
//!   recomputed each time, never latched.
//! - **Late payment allowed**: `pay` stays open after maturity until the issue
//!   is fully paid.
//! - **Balance-derived accounting**: payment and collateral held are the
//!   contract's token balances, measured around every transfer.
//! - **Checks-Effects-Interactions** plus an explicit reentrancy lock on every
//!   mutating entrypoint: shares are burned before any asset leaves.

#![no_std]

mod access_control;
mod accounting;
mod events;
mod math;
mod reentrancy;
mod share_token;
mod token_integration;
mod types;
mod validation;

pub use bond_errors::{BondError, ErrorCategory, ErrorExt};
pub use types::{BondConfig, BondState, BondTerms, Role};

use accounting::LedgerSnapshot;
use reentrancy::non_reentrant;
use types::DataKey;

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error,
    token::{TokenClient, TokenInterface},
    Address, Env, String,
};





#[cfg(test)]
mod test_issuance;






#[cfg(test)]
mod test_sweep;






// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_config(e: &Env) -> Result<BondConfig, BondError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(BondError::NotInitialized)
}

fn has_matured(e: &Env, cfg: &BondConfig) -> bool {
    e.ledger().timestamp() >= cfg.terms.maturity
}

fn snapshot(e: &Env, cfg: &BondConfig) -> LedgerSnapshot {
    LedgerSnapshot {
        total_supply: share_token::total_supply(e),
        payment_balance: token_integration::balance_of(e, &cfg.terms.payment_token),
        collateral_balance: token_integration::balance_of(e, &cfg.terms.collateral_token),
        is_mature: has_matured(e, cfg),
        collateral_ratio: cfg.terms.collateral_ratio,
        convertible_ratio: cfg.terms.convertible_ratio,
        payment_scaling: cfg.payment_scaling,
    }
}

/// Negative amounts are malformed; zero is a distinct, recoverable mistake.
fn require_positive(amount: i128) -> Result<(), BondError> {
    if amount < 0 {
        return Err(BondError::InvalidAmount);
    }
    if amount == 0 {
        return Err(BondError::ZeroAmount);
    }
    Ok(())
}

fn or_panic<T>(e: &Env, result: Result<T, BondError>) -> T {
    result.unwrap_or_else(|err| panic_with_error!(e, err))
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct ZeroCouponBond;

#[contractimpl]
impl ZeroCouponBond {
    // ── Issuance ───────────────────────────────────────────────────────────

    /// Create the issue. Callable exactly once per instance.
    ///
    /// Validates the maturity window, ratio consistency, max supply, asset
    /// distinctness and token precision before writing anything. `admin`
    /// receives every role; no shares are minted here.
    pub fn initialize(e: Env, admin: Address, terms: BondTerms) -> Result<(), BondError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(BondError::AlreadyInitialized);
        }
        admin.require_auth();

        validation::validate_terms(e.ledger().timestamp(), &terms)?;
        let payment_decimals = TokenClient::new(&e, &terms.payment_token).decimals();
        let collateral_decimals = TokenClient::new(&e, &terms.collateral_token).decimals();
        let payment_scaling = validation::payment_scaling(payment_decimals, collateral_decimals)?;

        let cfg = BondConfig {
            terms: terms.clone(),
            payment_scaling,
        };
        e.storage().instance().set(&DataKey::Config, &cfg);
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::TotalSupply, &0_i128);
        e.storage().instance().set(&DataKey::TotalMinted, &0_i128);
        for role in [Role::Admin, Role::Mint, Role::Withdraw] {
            access_control::set_role(&e, role, &admin);
        }

        events::emit_bond_created(&e, &admin, &terms);
        Ok(())
    }

    // ── Roles ──────────────────────────────────────────────────────────────

    pub fn grant_role(e: Env, admin: Address, role: Role, account: Address) -> Result<(), BondError> {
        load_config(&e)?;
        access_control::grant_role(&e, &admin, role, &account)
    }

    pub fn revoke_role(e: Env, admin: Address, role: Role, account: Address) -> Result<(), BondError> {
        load_config(&e)?;
        access_control::revoke_role(&e, &admin, role, &account)
    }

    pub fn has_role(e: Env, role: Role, account: Address) -> bool {
        access_control::has_role(&e, role, &account)
    }

    // ── Ledger mutations ───────────────────────────────────────────────────

    /// Deposit `preview_mint(shares)` collateral and receive `shares`.
    ///
    /// Requires the Mint role and an allowance on the collateral token. Fails
    /// after maturity and when cumulative mints would pass `max_supply`.
    /// Returns the collateral deposited.
    pub fn mint(e: Env, caller: Address, shares: i128) -> Result<i128, BondError> {
        non_reentrant(&e, || {
            access_control::require_role(&e, Role::Mint, &caller)?;
            require_positive(shares)?;
            let cfg = load_config(&e)?;
            if has_matured(&e, &cfg) {
                return Err(BondError::BondPastMaturity);
            }
            let headroom = math::sub(cfg.terms.max_supply, share_token::total_minted(&e))?;
            if shares > headroom {
                return Err(BondError::BondSupplyExceeded);
            }
            let collateral = accounting::preview_mint(&e, shares, cfg.terms.collateral_ratio)?;

            share_token::mint(&e, &caller, shares)?;
            token_integration::pull_exact(&e, &cfg.terms.collateral_token, &caller, collateral)?;

            events::emit_collateral_deposited(&e, &caller, collateral, shares);
            Ok(collateral)
        })
    }

    /// Deposit payment toward repayment. Open before and after maturity until
    /// the issue is fully paid. Returns the amount actually received, which
    /// may be lower than `amount` for fee-on-transfer tokens.
    pub fn pay(e: Env, payer: Address, amount: i128) -> Result<i128, BondError> {
        non_reentrant(&e, || {
            payer.require_auth();
            let cfg = load_config(&e)?;
            if snapshot(&e, &cfg).is_fully_paid()? {
                return Err(BondError::PaymentAlreadyMet);
            }
            require_positive(amount)?;

            let received = token_integration::pull(&e, &cfg.terms.payment_token, &payer, amount)?;
            events::emit_payment(&e, &payer, received);

            let after = snapshot(&e, &cfg);
            if after.is_fully_paid()? {
                events::emit_payment_in_full(&e, &payer, after.payment_balance);
            }
            Ok(received)
        })
    }

    /// Burn `shares` before maturity for `shares * convertible_ratio` collateral,
    /// rounded down. Returns the collateral sent.
    pub fn convert(e: Env, holder: Address, shares: i128) -> Result<i128, BondError> {
        non_reentrant(&e, || {
            holder.require_auth();
            share_token::require_non_negative(shares)?;
            let cfg = load_config(&e)?;
            if has_matured(&e, &cfg) {
                return Err(BondError::BondPastMaturity);
            }
            if cfg.terms.convertible_ratio == 0 {
                return Err(BondError::NotConvertible);
            }
            let collateral = accounting::preview_convert(&e, shares, cfg.terms.convertible_ratio)?;
            if collateral == 0 {
                return Err(BondError::ZeroAmount);
            }

            share_token::burn(&e, &holder, shares)?;
            token_integration::push(&e, &cfg.terms.collateral_token, &holder, collateral)?;

            events::emit_converted(&e, &holder, shares, collateral);
            Ok(collateral)
        })
    }

    /// Release up to `preview_withdraw()` collateral to `receiver`.
    pub fn withdraw_collateral(
        e: Env,
        caller: Address,
        amount: i128,
        receiver: Address,
    ) -> Result<(), BondError> {
        non_reentrant(&e, || {
            access_control::require_role(&e, Role::Withdraw, &caller)?;
            require_positive(amount)?;
            let cfg = load_config(&e)?;
            let releasable = snapshot(&e, &cfg).preview_withdraw(&e)?;
            if amount > releasable {
                return Err(BondError::InsufficientCollateral);
            }

            token_integration::push(&e, &cfg.terms.collateral_token, &receiver, amount)?;

            events::emit_collateral_withdrawn(&e, &caller, &receiver, amount);
            Ok(())
        })
    }

    /// Burn `shares` for a pro-rata split of payment and collateral.
    /// Open once the issue is mature or fully paid. Returns `(payment, collateral)`.
    pub fn redeem(e: Env, holder: Address, shares: i128) -> Result<(i128, i128), BondError> {
        non_reentrant(&e, || {
            holder.require_auth();
            share_token::require_non_negative(shares)?;
            let cfg = load_config(&e)?;
            let view = snapshot(&e, &cfg);
            if !view.is_mature && !view.is_fully_paid()? {
                return Err(BondError::BondNotYetMaturedOrPaid);
            }
            let (payment, collateral) = view.preview_redeem(&e, shares)?;
            if payment == 0 && collateral == 0 {
                return Err(BondError::ZeroAmount);
            }

            share_token::burn(&e, &holder, shares)?;
            token_integration::push(&e, &cfg.terms.payment_token, &holder, payment)?;
            token_integration::push(&e, &cfg.terms.collateral_token, &holder, collateral)?;

            log!(&e, "redeemed", shares, payment, collateral);
            events::emit_redeemed(&e, &holder, shares, payment, collateral);
            Ok((payment, collateral))
        })
    }

    /// Send payment held beyond what outstanding shares can claim to `receiver`.
    pub fn withdraw_excess_payment(
        e: Env,
        caller: Address,
        receiver: Address,
    ) -> Result<i128, BondError> {
        non_reentrant(&e, || {
            access_control::require_admin(&e, &caller)?;
            let cfg = load_config(&e)?;
            let overpaid = snapshot(&e, &cfg).amount_overpaid()?;
            if overpaid == 0 {
                return Err(BondError::NoPaymentToWithdraw);
            }

            token_integration::push(&e, &cfg.terms.payment_token, &receiver, overpaid)?;

            events::emit_excess_payment_withdrawn(&e, &receiver, overpaid);
            Ok(overpaid)
        })
    }

    /// Move the whole balance of a stray `token` to `receiver`. Payment,
    /// collateral and the bond's own shares can never be swept.
    pub fn sweep(e: Env, caller: Address, token: Address, receiver: Address) -> Result<i128, BondError> {
        non_reentrant(&e, || {
            access_control::require_admin(&e, &caller)?;
            let cfg = load_config(&e)?;
            if token == cfg.terms.payment_token
                || token == cfg.terms.collateral_token
                || token == e.current_contract_address()
            {
                return Err(BondError::SweepDisallowedForToken);
            }

            let payment_before = token_integration::balance_of(&e, &cfg.terms.payment_token);
            let collateral_before = token_integration::balance_of(&e, &cfg.terms.collateral_token);
            let amount = token_integration::balance_of(&e, &token);
            if amount == 0 {
                return Err(BondError::ZeroAmount);
            }

            token_integration::push(&e, &token, &receiver, amount)?;

            // A proxying token must not be able to drain a protected asset.
            if token_integration::balance_of(&e, &cfg.terms.payment_token) != payment_before
                || token_integration::balance_of(&e, &cfg.terms.collateral_token)
                    != collateral_before
            {
                return Err(BondError::SweepDisallowedForToken);
            }

            events::emit_token_swept(&e, &token, &receiver, amount);
            Ok(amount)
        })
    }

    // ── Previews ───────────────────────────────────────────────────────────

    /// Collateral required to mint `shares`, rounded up.
    pub fn preview_mint(e: Env, shares: i128) -> Result<i128, BondError> {
        share_token::require_non_negative(shares)?;
        let cfg = load_config(&e)?;
        accounting::preview_mint(&e, shares, cfg.terms.collateral_ratio)
    }

    /// Collateral received for converting `shares`, rounded down.
    pub fn preview_convert_before_maturity(e: Env, shares: i128) -> Result<i128, BondError> {
        share_token::require_non_negative(shares)?;
        let cfg = load_config(&e)?;
        accounting::preview_convert(&e, shares, cfg.terms.convertible_ratio)
    }

    /// Collateral the Withdraw role could take out right now.
    pub fn preview_withdraw(e: Env) -> Result<i128, BondError> {
        let cfg = load_config(&e)?;
        snapshot(&e, &cfg).preview_withdraw(&e)
    }

    /// `(payment, collateral)` paid out for redeeming `shares` in the current state.
    pub fn preview_redeem_at_maturity(e: Env, shares: i128) -> Result<(i128, i128), BondError> {
        share_token::require_non_negative(shares)?;
        let cfg = load_config(&e)?;
        snapshot(&e, &cfg).preview_redeem(&e, shares)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Payment units still owed before the issue is fully paid.
    pub fn amount_unpaid(e: Env) -> Result<i128, BondError> {
        let cfg = load_config(&e)?;
        snapshot(&e, &cfg).amount_unpaid()
    }

    /// Payment units held beyond the outstanding supply.
    pub fn amount_overpaid(e: Env) -> Result<i128, BondError> {
        let cfg = load_config(&e)?;
        snapshot(&e, &cfg).amount_overpaid()
    }

    pub fn is_mature(e: Env) -> Result<bool, BondError> {
        let cfg = load_config(&e)?;
        Ok(has_matured(&e, &cfg))
    }

    pub fn is_fully_paid(e: Env) -> Result<bool, BondError> {
        let cfg = load_config(&e)?;
        snapshot(&e, &cfg).is_fully_paid()
    }

    pub fn bond_state(e: Env) -> Result<BondState, BondError> {
        let cfg = load_config(&e)?;
        let view = snapshot(&e, &cfg);
        Ok(BondState::from_flags(view.is_mature, view.is_fully_paid()?))
    }

    pub fn payment_balance(e: Env) -> Result<i128, BondError> {
        let cfg = load_config(&e)?;
        Ok(token_integration::balance_of(&e, &cfg.terms.payment_token))
    }

    pub fn collateral_balance(e: Env) -> Result<i128, BondError> {
        let cfg = load_config(&e)?;
        Ok(token_integration::balance_of(&e, &cfg.terms.collateral_token))
    }

    pub fn total_supply(e: Env) -> i128 {
        share_token::total_supply(&e)
    }

    /// Shares ever minted. Never decreases.
    pub fn total_minted(e: Env) -> i128 {
        share_token::total_minted(&e)
    }

    pub fn get_terms(e: Env) -> Result<BondTerms, BondError> {
        Ok(load_config(&e)?.terms)
    }

    pub fn admin(e: Env) -> Result<Address, BondError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(BondError::NotInitialized)
    }
}

// ─── Share token interface ─────────────────────────────────────────────────

#[contractimpl]
impl TokenInterface for ZeroCouponBond {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        share_token::allowance(&e, &from, &spender)
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        or_panic(
            &e,
            share_token::approve(&e, &from, &spender, amount, expiration_ledger),
        );
    }

    fn balance(e: Env, id: Address) -> i128 {
        share_token::balance(&e, &id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        or_panic(&e, share_token::require_non_negative(amount));
        or_panic(&e, share_token::transfer(&e, &from, &to, amount));
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        or_panic(&e, share_token::require_non_negative(amount));
        or_panic(&e, share_token::spend_allowance(&e, &from, &spender, amount));
        or_panic(&e, share_token::transfer(&e, &from, &to, amount));
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        or_panic(&e, share_token::require_non_negative(amount));
        or_panic(&e, share_token::burn(&e, &from, amount));
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        or_panic(&e, share_token::require_non_negative(amount));
        or_panic(&e, share_token::spend_allowance(&e, &from, &spender, amount));
        or_panic(&e, share_token::burn(&e, &from, amount));
    }

    fn decimals(_e: Env) -> u32 {
        math::SHARE_DECIMALS
    }

    fn name(e: Env) -> String {
        or_panic(&e, load_config(&e)).terms.name
    }

    fn symbol(e: Env) -> String {
        or_panic(&e, load_config(&e)).terms.symbol
    }
}
