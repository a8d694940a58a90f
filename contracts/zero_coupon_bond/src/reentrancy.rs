//! Mutual-exclusion guard shared by every state-mutating entrypoint.
//!
//! The flag lives in instance storage, so a nested call into any other guarded
//! entrypoint of the same instance sees it set and is rejected.

use crate::types::DataKey;
use bond_errors::BondError;
use soroban_sdk::Env;

pub fn is_locked(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Lock).unwrap_or(false)
}

pub fn enter(e: &Env) -> Result<(), BondError> {
    if is_locked(e) {
        return Err(BondError::ReentrancyDetected);
    }
    e.storage().instance().set(&DataKey::Lock, &true);
    Ok(())
}

pub fn exit(e: &Env) {
    e.storage().instance().set(&DataKey::Lock, &false);
}

/// Run `f` with the lock held. An `Err` from `f` aborts the whole invocation,
/// which also rolls the lock write back.
pub fn non_reentrant<T, F>(e: &Env, f: F) -> Result<T, BondError>
where
    F: FnOnce() -> Result<T, BondError>,
{
    enter(e)?;
    let result = f()?;
    exit(e);
    Ok(result)
}
