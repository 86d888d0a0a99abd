use soroban_sdk::{symbol_short, Address, Env};
use crate::types::{AvatarError, CollectionMetadata, Phase, ReservedBucket, ReservedRecipients, Role};

// ============================================================================
// CONSTANTES
// ============================================================================

/// Alocação fixa do time de desenvolvimento
pub const DEV_RESERVED_LIMIT: u32 = 6;

/// Alocação fixa do time do projeto
pub const TEAM_RESERVED_LIMIT: u32 = 494;

/// Tamanho máximo da base URI (precisa caber no buffer de `token_uri`)
pub const MAX_BASE_URI_LEN: u32 = 200;

/// Operador de marketplace sempre aprovado (bypass de integração)
pub const MARKETPLACE_OPERATOR: &str = "CCXHVQ53FBN4MQWUYGACEILWBIHPKIJGNPCU25PU3URBAQVACFBOFY2E";

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (metadata, fase, contadores)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

fn bump_persistent<K>(env: &Env, key: &K)
where
    K: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    if env.storage().persistent().has(key) {
        env.storage().persistent().extend_ttl(
            key,
            CRITICAL_STORAGE_THRESHOLD,
            CRITICAL_STORAGE_TTL,
        );
    }
}

// ============================================================================
// INICIALIZAÇÃO E METADATA
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("meta"))
}

pub fn get_metadata(env: &Env) -> Result<CollectionMetadata, AvatarError> {
    env.storage()
        .instance()
        .get(&symbol_short!("meta"))
        .ok_or(AvatarError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &CollectionMetadata) {
    env.storage().instance().set(&symbol_short!("meta"), metadata);
}

pub fn get_recipients(env: &Env) -> Result<ReservedRecipients, AvatarError> {
    env.storage()
        .instance()
        .get(&symbol_short!("recips"))
        .ok_or(AvatarError::NotInitialized)
}

pub fn set_recipients(env: &Env, recipients: &ReservedRecipients) {
    env.storage().instance().set(&symbol_short!("recips"), recipients);
}

// ============================================================================
// FASE (PRESALE / PUBLIC)
// ============================================================================

pub fn get_phase(env: &Env) -> Phase {
    env.storage()
        .instance()
        .get(&symbol_short!("phase"))
        .unwrap_or(Phase::Presale)
}

pub fn set_phase(env: &Env, phase: Phase) {
    env.storage().instance().set(&symbol_short!("phase"), &phase);
}

// ============================================================================
// CONTADORES DE SUPPLY
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

pub fn get_reserved_supply(env: &Env, bucket: ReservedBucket) -> u32 {
    let key = (symbol_short!("reserved"), bucket);
    env.storage().instance().get(&key).unwrap_or(0)
}

pub fn set_reserved_supply(env: &Env, bucket: ReservedBucket, amount: u32) {
    let key = (symbol_short!("reserved"), bucket);
    env.storage().instance().set(&key, &amount);
}

/// Emissão pública acumulada por conta (todas as rodadas, todos os MINTERs)
pub fn get_purchased(env: &Env, addr: &Address) -> u32 {
    let key = (symbol_short!("purchased"), addr);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_purchased(env: &Env, addr: &Address, amount: u32) {
    let key = (symbol_short!("purchased"), addr);
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// PAPÉIS
// ============================================================================

pub fn has_role(env: &Env, role: Role, addr: &Address) -> bool {
    let key = (symbol_short!("role"), role, addr);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_role(env: &Env, role: Role, addr: &Address, member: bool) {
    let key = (symbol_short!("role"), role, addr);
    if member {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn get_admin_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("admins"))
        .unwrap_or(0)
}

pub fn set_admin_count(env: &Env, count: u32) {
    env.storage().instance().set(&symbol_short!("admins"), &count);
}

// ============================================================================
// POSSE DOS TOKENS
// ============================================================================

pub fn get_owner(env: &Env, token_id: u32) -> Option<Address> {
    let key = (symbol_short!("owner"), token_id);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key)
}

pub fn set_owner(env: &Env, token_id: u32, owner: &Address) {
    let key = (symbol_short!("owner"), token_id);
    env.storage().persistent().set(&key, owner);
}

pub fn get_balance(env: &Env, addr: &Address) -> u32 {
    let key = (symbol_short!("balance"), addr);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: u32) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// APROVAÇÕES
// ============================================================================

pub fn get_approved(env: &Env, token_id: u32) -> Option<Address> {
    let key = (symbol_short!("approved"), token_id);
    env.storage().persistent().get(&key)
}

pub fn set_approved(env: &Env, token_id: u32, spender: Option<&Address>) {
    let key = (symbol_short!("approved"), token_id);
    match spender {
        Some(spender) => env.storage().persistent().set(&key, spender),
        None => env.storage().persistent().remove(&key),
    }
}

pub fn is_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    let key = (symbol_short!("op_all"), owner, operator);
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_operator(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = (symbol_short!("op_all"), owner, operator);
    if approved {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}
