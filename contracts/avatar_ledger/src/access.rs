use soroban_sdk::{Address, Env};
use crate::events;
use crate::storage;
use crate::types::{AvatarError, Role};
use crate::validation;

// ============================================================================
// ACCESS CONTROL - TABELA (PAPEL, CONTA) -> BOOL
// ============================================================================

/// Concede `ADMIN` ao administrador inicial. Só é chamada por `initialize`.
pub fn bootstrap_admin(env: &Env, admin: &Address) {
    storage::set_role(env, Role::Admin, admin, true);
    storage::set_admin_count(env, 1);
    events::emit_role_granted(env, Role::Admin, admin, admin);
}

/// Concede `role` a `account` (apenas ADMIN). Conceder um papel já detido é no-op.
pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), AvatarError> {
    // === CHECKS ===
    caller.require_auth();
    storage::bump_critical_storage(env);
    validation::require_initialized(env)?;
    validation::require_role(env, Role::Admin, caller)?;

    if storage::has_role(env, role, account) {
        return Ok(());
    }

    // === EFFECTS ===
    if role == Role::Admin {
        let count = validation::checked_add(storage::get_admin_count(env), 1)?;
        storage::set_admin_count(env, count);
    }
    storage::set_role(env, role, account, true);

    // === INTERACTIONS ===
    events::emit_role_granted(env, role, account, caller);
    Ok(())
}

/// Revoga `role` de `account` (apenas ADMIN). Revogar um papel não detido é no-op.
pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), AvatarError> {
    caller.require_auth();
    storage::bump_critical_storage(env);
    validation::require_initialized(env)?;
    validation::require_role(env, Role::Admin, caller)?;

    remove_member(env, role, account, caller)
}

/// A própria conta abre mão de `role`.
pub fn renounce_role(env: &Env, account: &Address, role: Role) -> Result<(), AvatarError> {
    account.require_auth();
    storage::bump_critical_storage(env);
    validation::require_initialized(env)?;

    remove_member(env, role, account, account)
}

fn remove_member(
    env: &Env,
    role: Role,
    account: &Address,
    sender: &Address,
) -> Result<(), AvatarError> {
    if !storage::has_role(env, role, account) {
        return Ok(());
    }

    if role == Role::Admin {
        let count = storage::get_admin_count(env);
        if count <= 1 {
            return Err(AvatarError::LastAdmin);
        }
        storage::set_admin_count(env, count - 1);
    }
    storage::set_role(env, role, account, false);

    events::emit_role_revoked(env, role, account, sender);
    Ok(())
}
