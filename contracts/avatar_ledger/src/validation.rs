use soroban_sdk::{log, Address, Env, String};
use crate::storage;
use crate::types::{AvatarError, Role};

// ============================================================================
// VALIDAÇÕES (CHECKS do padrão CEI)
// ============================================================================

/// Exige que o contrato já tenha sido inicializado
pub fn require_initialized(env: &Env) -> Result<(), AvatarError> {
    if !storage::is_initialized(env) {
        return Err(AvatarError::NotInitialized);
    }
    Ok(())
}

/// Exige que `caller` detenha `role`
pub fn require_role(env: &Env, role: Role, caller: &Address) -> Result<(), AvatarError> {
    if !storage::has_role(env, role, caller) {
        return Err(AvatarError::Unauthorized);
    }
    Ok(())
}

/// Valida se a quantidade é positiva
pub fn require_positive_quantity(quantity: u32) -> Result<(), AvatarError> {
    if quantity == 0 {
        return Err(AvatarError::InvalidAmount);
    }
    Ok(())
}

/// Bloqueia transferências durante a pré-venda (exceto o operador do marketplace)
pub fn require_transfer_allowed(env: &Env, operator: &Address) -> Result<(), AvatarError> {
    if !is_transfer_allowed(env, operator) {
        return Err(AvatarError::PresaleActive);
    }
    Ok(())
}

pub fn is_transfer_allowed(env: &Env, operator: &Address) -> bool {
    !storage::get_phase(env).is_presale() || is_marketplace_operator(env, operator)
}

pub fn is_marketplace_operator(env: &Env, operator: &Address) -> bool {
    let marketplace = Address::from_string(&String::from_str(env, storage::MARKETPLACE_OPERATOR));
    operator == &marketplace
}

/// Valida a base URI de metadata
pub fn require_valid_base_uri(env: &Env, uri: &String) -> Result<(), AvatarError> {
    if uri.len() == 0 || uri.len() > storage::MAX_BASE_URI_LEN {
        log!(env, "base uri length out of range", uri.len());
        return Err(AvatarError::InvalidConfiguration);
    }
    Ok(())
}

/// Soma com verificação de overflow
pub fn checked_add(current: u32, quantity: u32) -> Result<u32, AvatarError> {
    current
        .checked_add(quantity)
        .ok_or(AvatarError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_quantity() {
        assert_eq!(require_positive_quantity(0), Err(AvatarError::InvalidAmount));
        assert_eq!(require_positive_quantity(1), Ok(()));
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(checked_add(u32::MAX, 1), Err(AvatarError::ArithmeticOverflow));
        assert_eq!(checked_add(5, 1), Ok(6));
    }

    #[test]
    fn test_marketplace_operator_constant_parses() {
        let env = Env::default();
        let marketplace = Address::from_string(&String::from_str(&env, storage::MARKETPLACE_OPERATOR));
        assert!(is_marketplace_operator(&env, &marketplace));
    }
}
