use soroban_sdk::{symbol_short, Address, Env};
use crate::types::{SaleConfig, SaleError};

// ============================================================================
// CONSTANTES
// ============================================================================

/// Conta ed25519 toda zerada: equivalente ao "endereço zero"
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

pub fn bump_bought(env: &Env, addr: &Address) {
    let key = (symbol_short!("bought"), addr);
    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            CRITICAL_STORAGE_THRESHOLD,
            CRITICAL_STORAGE_TTL,
        );
    }
}

// ============================================================================
// CONFIGURAÇÃO
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("config"))
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&symbol_short!("config"))
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&symbol_short!("config"), config);
}

// ============================================================================
// CONTADORES DA RODADA
// ============================================================================

pub fn get_total_minted(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("minted"))
        .unwrap_or(0)
}

pub fn set_total_minted(env: &Env, amount: u32) {
    env.storage().instance().set(&symbol_short!("minted"), &amount);
}

/// Contador canônico do cap por endereço desta rodada
pub fn get_bought(env: &Env, addr: &Address) -> u32 {
    let key = (symbol_short!("bought"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_bought(env: &Env, addr: &Address, amount: u32) {
    let key = (symbol_short!("bought"), addr);
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// REENTRANCY GUARD
// ============================================================================

pub fn is_reentrancy_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("lock"))
        .unwrap_or(false)
}

pub fn set_reentrancy_guard(env: &Env, locked: bool) {
    env.storage().instance().set(&symbol_short!("lock"), &locked);
}
