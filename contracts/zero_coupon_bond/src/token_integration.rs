//! Payment/collateral token movements for the bond.
//!
//! Every transfer is bracketed by balance reads of the bond contract and the
//! observed delta is what the ledger records. Fee-on-transfer assets are
//! tolerated where the caller opts in (`pull`); everywhere else a mismatch is
//! `UnexpectedTokenOperation`.

use bond_errors::BondError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, Address, Env};

/// Balance of `token` held by this contract.
pub fn balance_of(e: &Env, token: &Address) -> i128 {
    TokenClient::new(e, token).balance(&e.current_contract_address())
}

/// Pull up to `amount` from `from` and return the delta actually received.
/// Requires `from` to have approved this contract as spender.
pub fn pull(e: &Env, token: &Address, from: &Address, amount: i128) -> Result<i128, BondError> {
    let contract = e.current_contract_address();
    let client = TokenClient::new(e, token);

    let before = client.balance(&contract);
    client.transfer_from(&contract, from, &contract, &amount);
    let after = client.balance(&contract);

    let received = after.checked_sub(before).ok_or(BondError::Overflow)?;
    if received <= 0 || received > amount {
        log!(e, "unexpected inbound delta", token.clone(), amount, received);
        return Err(BondError::UnexpectedTokenOperation);
    }
    Ok(received)
}

/// Pull exactly `amount`; any shortfall or surplus aborts the call.
pub fn pull_exact(e: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), BondError> {
    if amount == 0 {
        return Ok(());
    }
    if pull(e, token, from, amount)? != amount {
        return Err(BondError::UnexpectedTokenOperation);
    }
    Ok(())
}

/// Send `amount` of `token` to `to`. The contract balance must drop by exactly `amount`.
pub fn push(e: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), BondError> {
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    let client = TokenClient::new(e, token);

    let before = client.balance(&contract);
    client.transfer(&contract, to, &amount);
    let after = client.balance(&contract);

    if before.checked_sub(after) != Some(amount) {
        log!(e, "unexpected outbound delta", token.clone(), amount, before, after);
        return Err(BondError::UnexpectedTokenOperation);
    }
    Ok(())
}
