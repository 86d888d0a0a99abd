use soroban_sdk::{contractclient, Address, Env};

/// Superfície do ledger de avatares usada pela venda.
///
/// A venda se autentica como `current_contract_address()` e precisa ter
/// recebido o papel MINTER no ledger.
#[allow(dead_code)]
#[contractclient(name = "AvatarLedgerClient")]
pub trait AvatarLedgerInterface {
    fn mint_public(env: Env, minter: Address, to: Address, quantity: u32);
}
