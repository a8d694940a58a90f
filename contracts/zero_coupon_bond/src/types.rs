use soroban_sdk::{contracttype, Address, String};

// ─── Issue terms ───────────────────────────────────────────────────────────

/// Creation parameters of one bond issue. Immutable once stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondTerms {
    /// Share token name.
    pub name: String,
    /// Share token symbol.
    pub symbol: String,
    /// Ledger timestamp from which the issue is mature.
    pub maturity: u64,
    /// Asset redeemed 1:1 against shares once paid.
    pub payment_token: Address,
    /// Asset backing unpaid shares.
    pub collateral_token: Address,
    /// Collateral units per unpaid share, scaled by 1e18.
    pub collateral_ratio: i128,
    /// Collateral units a share converts into before maturity, scaled by 1e18.
    pub convertible_ratio: i128,
    /// Ceiling on shares ever minted.
    pub max_supply: i128,
}

/// Stored configuration: the terms plus values derived from them at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondConfig {
    pub terms: BondTerms,
    /// `10^(18 - payment_token.decimals())`, multiplies payment units into share units.
    pub payment_scaling: i128,
}

// ─── Lifecycle ─────────────────────────────────────────────────────────────

/// Derived lifecycle state. Never stored; computed from time, payment and supply.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum BondState {
    /// Not mature, not fully paid.
    Active = 0,
    /// Fully paid before maturity.
    PaidEarly = 1,
    /// Mature and not fully paid.
    Defaulted = 2,
    /// Mature and fully paid.
    Paid = 3,
}

impl BondState {
    pub fn from_flags(is_mature: bool, is_fully_paid: bool) -> Self {
        match (is_mature, is_fully_paid) {
            (false, false) => BondState::Active,
            (false, true) => BondState::PaidEarly,
            (true, false) => BondState::Defaulted,
            (true, true) => BondState::Paid,
        }
    }
}

// ─── Roles ─────────────────────────────────────────────────────────────────

/// Capabilities checked at the top of privileged operations.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    /// Grants/revokes roles, sweeps stray tokens, reclaims overpayment.
    Admin = 0,
    /// Deposits collateral and mints shares.
    Mint = 1,
    /// Withdraws releasable collateral.
    Withdraw = 2,
}

// ─── Share token ───────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceValue {
    pub amount: i128,
    pub live_until_ledger: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address that created the issue.
    Admin,
    /// BondConfig, present once initialized.
    Config,
    /// Outstanding shares.
    TotalSupply,
    /// Shares ever minted; only grows.
    TotalMinted,
    /// Reentrancy lock flag.
    Lock,
    /// Role membership flag.
    Role(Role, Address),
    /// Share balance per holder.
    Balance(Address),
    /// Share allowance per (owner, spender).
    Allowance(AllowanceKey),
}
