#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups bond errors by the kind of failure for monitoring and dashboards.
/// @dev    Integrators should switch on this value first. `Transfer` errors mean
///         a token misbehaved and the call must not be retried blindly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Issue creation and initialization errors (codes 1-99).
    Configuration,
    /// Caller identity and privilege errors (codes 100-199).
    Authorization,
    /// Wrong lifecycle phase or malformed request (codes 200-299).
    Lifecycle,
    /// Not enough collateral, payment, supply or balance (codes 300-399).
    Insufficiency,
    /// A token moved a different amount than requested (codes 400-499).
    Transfer,
    /// Fixed-point arithmetic errors (codes 700-799).
    Arithmetic,
}

/// @title  BondError
/// @notice Canonical error enum for the zero-coupon bond contract.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Configuration
///   100 - 199 : Authorization
///   200 - 299 : Lifecycle
///   300 - 399 : Insufficiency
///   400 - 499 : Transfer
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BondError {
    // --- Configuration (1-99) ---
    /// Bond terms have not been set yet.
    NotInitialized = 1,

    /// `initialize` was already called on this instance.
    AlreadyInitialized = 2,

    /// Maturity is not in the future or lies beyond the ten year horizon.
    InvalidMaturity = 3,

    /// Convertible ratio exceeds the collateral ratio.
    RatioInconsistent = 4,

    /// A ratio argument is negative.
    InvalidRatio = 5,

    /// Maximum supply must be strictly positive.
    InvalidMaxSupply = 6,

    /// Payment and collateral token are the same contract.
    IdenticalAssets = 7,

    /// A token reports more than 18 decimals.
    DecimalsOver18 = 8,

    // --- Authorization (100-199) ---
    /// Caller does not hold the admin role.
    NotAdmin = 100,

    /// Caller does not hold the role required by the operation.
    MissingRole = 101,

    // --- Lifecycle (200-299) ---
    /// Operation is only valid before maturity.
    BondPastMaturity = 200,

    /// Redemption requires the issue to be mature or fully paid.
    BondNotYetMaturedOrPaid = 201,

    /// The issue is already fully paid.
    PaymentAlreadyMet = 202,

    /// The issue has a zero convertible ratio.
    NotConvertible = 203,

    /// Request or its computed payout is zero.
    ZeroAmount = 204,

    /// Amount argument is negative.
    InvalidAmount = 205,

    /// A guarded entrypoint was entered while another one was running.
    ReentrancyDetected = 206,

    /// Allowance expiration ledger is already in the past.
    InvalidExpiration = 207,

    // --- Insufficiency (300-399) ---
    /// Minting would push cumulative supply past `max_supply`.
    BondSupplyExceeded = 300,

    /// Withdrawal exceeds the collateral that is currently releasable.
    InsufficientCollateral = 301,

    /// There is no overpayment to hand back to the issuer.
    NoPaymentToWithdraw = 302,

    /// Share balance is lower than the requested amount.
    InsufficientBalance = 303,

    /// Share allowance is lower than the requested amount.
    InsufficientAllowance = 304,

    // --- Transfer (400-499) ---
    /// A token transfer moved a different amount than requested.
    UnexpectedTokenOperation = 400,

    /// Sweeping this token would move payment, collateral or shares.
    SweepDisallowedForToken = 401,

    // --- Arithmetic (700-799) ---
    /// Intermediate or final value does not fit the target integer.
    Overflow = 700,

    /// Fixed-point division by zero.
    DivisionByZero = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every BondError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;

    /// @return true when retrying the same call can never succeed without
    ///         changing the token involved.
    fn is_token_fault(&self) -> bool {
        self.category() == ErrorCategory::Transfer
    }
}

impl ErrorExt for BondError {
    fn category(&self) -> ErrorCategory {
        match self {
            BondError::NotInitialized
            | BondError::AlreadyInitialized
            | BondError::InvalidMaturity
            | BondError::RatioInconsistent
            | BondError::InvalidRatio
            | BondError::InvalidMaxSupply
            | BondError::IdenticalAssets
            | BondError::DecimalsOver18 => ErrorCategory::Configuration,

            BondError::NotAdmin | BondError::MissingRole => ErrorCategory::Authorization,

            BondError::BondPastMaturity
            | BondError::BondNotYetMaturedOrPaid
            | BondError::PaymentAlreadyMet
            | BondError::NotConvertible
            | BondError::ZeroAmount
            | BondError::InvalidAmount
            | BondError::ReentrancyDetected
            | BondError::InvalidExpiration => ErrorCategory::Lifecycle,

            BondError::BondSupplyExceeded
            | BondError::InsufficientCollateral
            | BondError::NoPaymentToWithdraw
            | BondError::InsufficientBalance
            | BondError::InsufficientAllowance => ErrorCategory::Insufficiency,

            BondError::UnexpectedTokenOperation | BondError::SweepDisallowedForToken => {
                ErrorCategory::Transfer
            }

            BondError::Overflow | BondError::DivisionByZero => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            BondError::NotInitialized => "Bond has not been initialized",
            BondError::AlreadyInitialized => "Bond has already been initialized",
            BondError::InvalidMaturity => "Maturity must be in the future and within ten years",
            BondError::RatioInconsistent => "Convertible ratio exceeds collateral ratio",
            BondError::InvalidRatio => "Ratios must be non-negative",
            BondError::InvalidMaxSupply => "Maximum supply must be strictly positive",
            BondError::IdenticalAssets => "Payment and collateral token must differ",
            BondError::DecimalsOver18 => "Tokens with more than 18 decimals are unsupported",
            BondError::NotAdmin => "Caller is not the admin",
            BondError::MissingRole => "Caller lacks the required role",
            BondError::BondPastMaturity => "Bond is past maturity",
            BondError::BondNotYetMaturedOrPaid => "Bond is neither mature nor fully paid",
            BondError::PaymentAlreadyMet => "Bond is already fully paid",
            BondError::NotConvertible => "Bond is not convertible",
            BondError::ZeroAmount => "Amount or resulting payout is zero",
            BondError::InvalidAmount => "Amount must be non-negative",
            BondError::ReentrancyDetected => "Reentrancy detected; call rejected",
            BondError::InvalidExpiration => "Allowance expiration is in the past",
            BondError::BondSupplyExceeded => "Mint would exceed the maximum supply",
            BondError::InsufficientCollateral => "Not enough releasable collateral",
            BondError::NoPaymentToWithdraw => "No excess payment to withdraw",
            BondError::InsufficientBalance => "Share balance is insufficient",
            BondError::InsufficientAllowance => "Share allowance is insufficient",
            BondError::UnexpectedTokenOperation => {
                "Token transfer moved an unexpected amount"
            }
            BondError::SweepDisallowedForToken => "Token cannot be swept from the bond",
            BondError::Overflow => "Integer overflow in fixed-point arithmetic",
            BondError::DivisionByZero => "Division by zero in fixed-point arithmetic",
        }
    }
}
