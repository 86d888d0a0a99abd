use soroban_sdk::{symbol_short, Address, Env, String};
use crate::types::{ReservedBucket, Role};

//
// EVENTOS DO LEDGER DE AVATARES
//

// Papel concedido
pub fn emit_role_granted(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_grnt"), role, account),
        sender.clone(),
    );
}

// Papel revogado (também usado em renounce)
pub fn emit_role_revoked(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_rvk"), role, account),
        sender.clone(),
    );
}

// Emissão pública: (primeiro id, quantidade)
pub fn emit_mint(env: &Env, to: &Address, first_id: u32, quantity: u32) {
    env.events().publish(
        (symbol_short!("mint"), to),
        (first_id, quantity),
    );
}

// Emissão reservada (team/dev)
pub fn emit_reserved_mint(env: &Env, bucket: ReservedBucket, to: &Address, first_id: u32, quantity: u32) {
    env.events().publish(
        (symbol_short!("rsv_mint"), bucket, to),
        (first_id, quantity),
    );
}

// Fim da pré-venda, com a nova base URI
pub fn emit_presale_finished(env: &Env, base_uri: &String) {
    env.events().publish(
        (symbol_short!("presale"),),
        base_uri.clone(),
    );
}

// Transferência de um token
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("transfer"), from, to),
        token_id,
    );
}

// Aprovação de um token
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("approve"), owner, spender),
        token_id,
    );
}

// Aprovação de operador para todos os tokens
pub fn emit_approval_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    env.events().publish(
        (symbol_short!("appr_all"), owner, operator),
        approved,
    );
}

//
// TESTES
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AvatarLedger;
    use soroban_sdk::{testutils::{Address as _, Events}, Env};

    // Eventos precisam de um contrato no call stack
    fn with_contract(env: &Env, f: impl FnOnce()) {
        let contract_id = env.register_contract(None, AvatarLedger);
        env.as_contract(&contract_id, f);
    }

    #[test]
    fn test_role_events() {
        let env = Env::default();
        let a = Address::generate(&env);
        let admin = Address::generate(&env);
        with_contract(&env, || {
            emit_role_granted(&env, Role::Minter, &a, &admin);
            emit_role_revoked(&env, Role::Minter, &a, &admin);
        });
        assert_eq!(env.events().all().len(), 2);
    }

    #[test]
    fn test_mint_events() {
        let env = Env::default();
        let a = Address::generate(&env);
        with_contract(&env, || {
            emit_mint(&env, &a, 1, 3);
            emit_reserved_mint(&env, ReservedBucket::Dev, &a, 4, 2);
        });
        assert_eq!(env.events().all().len(), 2);
    }

    #[test]
    fn test_transfer_and_approval() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        with_contract(&env, || {
            emit_transfer(&env, &a, &b, 1);
            emit_approval(&env, &a, &b, 1);
            emit_approval_for_all(&env, &a, &b, true);
        });
        assert_eq!(env.events().all().len(), 3);
    }

    #[test]
    fn test_presale_finished() {
        let env = Env::default();
        with_contract(&env, || {
            emit_presale_finished(&env, &String::from_str(&env, "ipfs://new/"));
        });
        assert_eq!(env.events().all().len(), 1);
    }
}
