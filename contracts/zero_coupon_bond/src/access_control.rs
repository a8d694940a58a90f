//! Role checks for privileged bond operations.

use crate::events;
use crate::types::{DataKey, Role};
use bond_errors::BondError;
use soroban_sdk::{Address, Env};

pub fn has_role(e: &Env, role: Role, account: &Address) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Role(role, account.clone()))
        .unwrap_or(false)
}

pub(crate) fn set_role(e: &Env, role: Role, account: &Address) {
    e.storage()
        .instance()
        .set(&DataKey::Role(role, account.clone()), &true);
}

/// Authenticate `caller` and require it to hold `role`.
pub fn require_role(e: &Env, role: Role, caller: &Address) -> Result<(), BondError> {
    caller.require_auth();
    if !has_role(e, role, caller) {
        return Err(match role {
            Role::Admin => BondError::NotAdmin,
            Role::Mint | Role::Withdraw => BondError::MissingRole,
        });
    }
    Ok(())
}

pub fn require_admin(e: &Env, caller: &Address) -> Result<(), BondError> {
    require_role(e, Role::Admin, caller)
}

pub fn grant_role(e: &Env, admin: &Address, role: Role, account: &Address) -> Result<(), BondError> {
    require_admin(e, admin)?;
    if !has_role(e, role, account) {
        set_role(e, role, account);
        events::emit_role_granted(e, role, account, admin);
    }
    Ok(())
}

pub fn revoke_role(e: &Env, admin: &Address, role: Role, account: &Address) -> Result<(), BondError> {
    require_admin(e, admin)?;
    let key = DataKey::Role(role, account.clone());
    if e.storage().instance().has(&key) {
        e.storage().instance().remove(&key);
        events::emit_role_revoked(e, role, account, admin);
    }
    Ok(())
}
