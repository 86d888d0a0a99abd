#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use soroban_sdk::{Address, Env, String};
// IMPORTANTE: Trazemos o Trait para o escopo para habilitar Address::generate()
use soroban_sdk::testutils::Address as _;

use avatar_ledger::{AvatarLedger, AvatarLedgerClient, Role};

pub const INIT_URI: &str = "https://ipfs.io/ipfs/QmNoHTHHbZcMzxxiWYPqz8aEpvqdJzSZ1DUZYDVj7TWZD6/metadata/";
pub const NEW_URI: &str = "https://ipfs.io/ipfs/QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn/metadata/";

pub struct TestEnv<'a> {
    pub env: Env,
    pub client: AvatarLedgerClient<'a>,
    pub admin: Address,
    pub minter: Address,
    pub team: Address,
    pub dev: Address,
}

impl<'a> TestEnv<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        // Emissões reservadas grandes (50+ ids) passam do budget padrão
        env.budget().reset_unlimited();

        let admin = Address::generate(&env);
        let minter = Address::generate(&env);
        let team = Address::generate(&env);
        let dev = Address::generate(&env);

        let contract_id = env.register_contract(None, AvatarLedger);
        let client = AvatarLedgerClient::new(&env, &contract_id);

        client.initialize(
            &String::from_str(&env, "Godji Game Avatar"),
            &String::from_str(&env, "GGA"),
            &String::from_str(&env, INIT_URI),
            &team,
            &dev,
            &admin,
        );
        client.grant_role(&admin, &Role::Minter, &minter);

        Self { env, client, admin, minter, team, dev }
    }

    pub fn user(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn uri(&self, s: &str) -> String {
        String::from_str(&self.env, s)
    }
}
