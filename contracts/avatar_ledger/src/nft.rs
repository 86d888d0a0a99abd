use soroban_sdk::{Address, Env, String};
use crate::events;
use crate::storage;
use crate::types::AvatarError;
use crate::validation;

// ============================================================================
// PRIMITIVAS DE POSSE (NFT)
// ============================================================================

/// Maior id u32 tem 10 dígitos
const MAX_ID_DIGITS: usize = 10;

const URI_BUFFER_LEN: usize = storage::MAX_BASE_URI_LEN as usize + MAX_ID_DIGITS;

/// Emite `quantity` ids sequenciais para `to` e devolve o primeiro id.
///
/// Todos os cálculos (e overflows) acontecem antes da primeira escrita.
pub fn issue(env: &Env, to: &Address, quantity: u32) -> Result<u32, AvatarError> {
    let total = storage::get_total_minted(env);
    let new_total = validation::checked_add(total, quantity)?;
    let new_balance = validation::checked_add(storage::get_balance(env, to), quantity)?;

    storage::set_total_minted(env, new_total);
    storage::set_balance(env, to, new_balance);
    for token_id in (total + 1)..=new_total {
        storage::set_owner(env, token_id, to);
    }

    Ok(total + 1)
}

pub fn owner_of(env: &Env, token_id: u32) -> Result<Address, AvatarError> {
    storage::get_owner(env, token_id).ok_or(AvatarError::TokenNotFound)
}

pub fn is_approved_for_all(env: &Env, owner: &Address, operator: &Address) -> bool {
    validation::is_marketplace_operator(env, operator) || storage::is_operator(env, owner, operator)
}

fn is_approved_or_owner(env: &Env, owner: &Address, spender: &Address, token_id: u32) -> bool {
    spender == owner
        || storage::get_approved(env, token_id).as_ref() == Some(spender)
        || is_approved_for_all(env, owner, spender)
}

/// Move `token_id` de `from` para `to` em nome de `spender`.
pub fn transfer(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    token_id: u32,
) -> Result<(), AvatarError> {
    // === CHECKS ===
    let owner = owner_of(env, token_id)?;
    if &owner != from || !is_approved_or_owner(env, &owner, spender, token_id) {
        return Err(AvatarError::NotOwnerNorApproved);
    }
    validation::require_transfer_allowed(env, spender)?;

    let from_balance = storage::get_balance(env, from)
        .checked_sub(1)
        .ok_or(AvatarError::ArithmeticOverflow)?;

    // === EFFECTS ===
    storage::set_approved(env, token_id, None);
    if from != to {
        let to_balance = validation::checked_add(storage::get_balance(env, to), 1)?;
        storage::set_balance(env, from, from_balance);
        storage::set_balance(env, to, to_balance);
        storage::set_owner(env, token_id, to);
    }

    // === INTERACTIONS ===
    events::emit_transfer(env, from, to, token_id);
    Ok(())
}

/// Aprova `spender` para um único token. Permitido durante a pré-venda.
pub fn approve(
    env: &Env,
    caller: &Address,
    spender: &Address,
    token_id: u32,
) -> Result<(), AvatarError> {
    let owner = owner_of(env, token_id)?;
    if caller != &owner && !is_approved_for_all(env, &owner, caller) {
        return Err(AvatarError::NotOwnerNorApproved);
    }
    if spender == &owner {
        return Err(AvatarError::InvalidRecipient);
    }

    storage::set_approved(env, token_id, Some(spender));
    events::emit_approval(env, &owner, spender, token_id);
    Ok(())
}

pub fn set_approval_for_all(
    env: &Env,
    owner: &Address,
    operator: &Address,
    approved: bool,
) -> Result<(), AvatarError> {
    if owner == operator {
        return Err(AvatarError::InvalidRecipient);
    }

    storage::set_operator(env, owner, operator, approved);
    events::emit_approval_for_all(env, owner, operator, approved);
    Ok(())
}

/// Base URI atual concatenada com o id decimal.
pub fn token_uri(env: &Env, token_id: u32) -> Result<String, AvatarError> {
    owner_of(env, token_id)?;
    let base_uri = storage::get_metadata(env)?.base_uri;
    let base_len = base_uri.len() as usize;
    if base_len > storage::MAX_BASE_URI_LEN as usize {
        return Err(AvatarError::InvalidConfiguration);
    }

    let mut buf = [0u8; URI_BUFFER_LEN];
    base_uri.copy_into_slice(&mut buf[..base_len]);

    let mut digits = [0u8; MAX_ID_DIGITS];
    let mut start = MAX_ID_DIGITS;
    let mut n = token_id;
    loop {
        start -= 1;
        digits[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let id_len = MAX_ID_DIGITS - start;
    buf[base_len..base_len + id_len].copy_from_slice(&digits[start..]);

    let uri = core::str::from_utf8(&buf[..base_len + id_len])
        .map_err(|_| AvatarError::InvalidConfiguration)?;
    Ok(String::from_str(env, uri))
}
