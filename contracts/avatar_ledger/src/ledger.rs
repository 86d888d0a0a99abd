use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use crate::access;
use crate::events;
use crate::nft;
use crate::storage;
use crate::types::{AvatarError, CollectionMetadata, Phase, ReservedBucket, ReservedRecipients, Role};
use crate::validation;

//
// CONTRATO PRINCIPAL - LEDGER DE AVATARES
//

#[contract]
pub struct AvatarLedger;

#[contractimpl]
impl AvatarLedger {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa a coleção.
    ///
    /// # Parâmetros
    /// - `name`, `symbol`: identificação da coleção
    /// - `base_uri`: base URI de metadata durante a pré-venda
    /// - `team`, `dev`: únicos destinos aceitos pela emissão reservada
    /// - `admin`: recebe o papel `ADMIN`
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    /// - `InvalidConfiguration`: base URI vazia/longa demais ou `team == dev`
    pub fn initialize(
        env: Env,
        name: String,
        symbol: String,
        base_uri: String,
        team: Address,
        dev: Address,
        admin: Address,
    ) -> Result<(), AvatarError> {
        // CHECKS: Verificar se já foi inicializado
        if storage::is_initialized(&env) {
            return Err(AvatarError::AlreadyInitialized);
        }
        validation::require_valid_base_uri(&env, &base_uri)?;
        if team == dev {
            log!(&env, "team and dev addresses must differ");
            return Err(AvatarError::InvalidConfiguration);
        }

        // EFFECTS: Configurar estado inicial
        storage::set_metadata(&env, &CollectionMetadata { name, symbol, base_uri });
        storage::set_recipients(&env, &ReservedRecipients { team, dev });
        storage::set_phase(&env, Phase::Presale);
        storage::set_total_minted(&env, 0);
        storage::bump_critical_storage(&env);

        access::bootstrap_admin(&env, &admin);
        Ok(())
    }

    //
    // ACCESS CONTROL
    //

    pub fn grant_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), AvatarError> {
        access::grant_role(&env, &caller, role, &account)
    }

    pub fn revoke_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), AvatarError> {
        access::revoke_role(&env, &caller, role, &account)
    }

    pub fn renounce_role(env: Env, account: Address, role: Role) -> Result<(), AvatarError> {
        access::renounce_role(&env, &account, role)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        storage::has_role(&env, role, &account)
    }

    //
    // EMISSÃO - CEI PATTERN
    //

    /// Emissão da venda pública (apenas MINTER).
    ///
    /// O cap público é política do MINTER (contrato de venda); aqui só se
    /// garante papel, quantidade positiva e ausência de overflow.
    pub fn mint_public(env: Env, minter: Address, to: Address, quantity: u32) -> Result<(), AvatarError> {
        // === CHECKS ===
        minter.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, Role::Minter, &minter)?;
        validation::require_positive_quantity(quantity)?;

        let purchased = validation::checked_add(storage::get_purchased(&env, &to), quantity)?;

        // === EFFECTS ===
        let first_id = nft::issue(&env, &to, quantity)?;
        storage::set_purchased(&env, &to, purchased);

        // === INTERACTIONS ===
        events::emit_mint(&env, &to, first_id, quantity);
        Ok(())
    }

    /// Emissão reservada para team/dev (apenas ADMIN).
    ///
    /// # Erros
    /// - `InvalidRecipient`: `to` não é o endereço de team nem de dev
    /// - `DevCapExceeded` / `TeamCapExceeded`: o bucket passaria do limite
    pub fn mint_reserved(env: Env, caller: Address, to: Address, quantity: u32) -> Result<(), AvatarError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, Role::Admin, &caller)?;
        validation::require_positive_quantity(quantity)?;

        let bucket = storage::get_recipients(&env)?.bucket_for(&to)?;
        let new_bucket_supply = validation::checked_add(storage::get_reserved_supply(&env, bucket), quantity)?;
        if new_bucket_supply > bucket.limit() {
            return Err(bucket.cap_error());
        }

        // === EFFECTS ===
        // Leitura e escrita do bucket na mesma invocação: o host serializa as chamadas
        let first_id = nft::issue(&env, &to, quantity)?;
        storage::set_reserved_supply(&env, bucket, new_bucket_supply);

        // === INTERACTIONS ===
        events::emit_reserved_mint(&env, bucket, &to, first_id, quantity);
        Ok(())
    }

    //
    // PRÉ-VENDA
    //

    /// Encerra a pré-venda e troca a base URI numa única transição.
    pub fn finish_presale(env: Env, caller: Address, new_base_uri: String) -> Result<(), AvatarError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, Role::Admin, &caller)?;
        let next = storage::get_phase(&env).finish()?;
        validation::require_valid_base_uri(&env, &new_base_uri)?;

        // === EFFECTS ===
        let mut metadata = storage::get_metadata(&env)?;
        metadata.base_uri = new_base_uri;
        storage::set_metadata(&env, &metadata);
        storage::set_phase(&env, next);

        // === INTERACTIONS ===
        events::emit_presale_finished(&env, &metadata.base_uri);
        Ok(())
    }

    /// `true` após a pré-venda, ou sempre para o operador do marketplace.
    pub fn is_transfer_allowed(env: Env, operator: Address) -> bool {
        validation::is_transfer_allowed(&env, &operator)
    }

    pub fn phase(env: Env) -> Phase {
        storage::get_phase(&env)
    }

    pub fn is_presale(env: Env) -> bool {
        storage::get_phase(&env).is_presale()
    }

    //
    // CONSULTAS (leitura)
    //

    pub fn name(env: Env) -> Result<String, AvatarError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, AvatarError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.symbol)
    }

    pub fn base_uri(env: Env) -> Result<String, AvatarError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.base_uri)
    }

    pub fn total_minted(env: Env) -> u32 {
        storage::get_total_minted(&env)
    }

    pub fn dev_reserved_supply(env: Env) -> u32 {
        storage::get_reserved_supply(&env, ReservedBucket::Dev)
    }

    pub fn team_reserved_supply(env: Env) -> u32 {
        storage::get_reserved_supply(&env, ReservedBucket::Team)
    }

    /// Total emitido via caminho público para `account`, em todas as rodadas.
    pub fn purchased_by(env: Env, account: Address) -> u32 {
        storage::get_purchased(&env, &account)
    }

    pub fn team_address(env: Env) -> Result<Address, AvatarError> {
        Ok(storage::get_recipients(&env)?.team)
    }

    pub fn dev_address(env: Env) -> Result<Address, AvatarError> {
        Ok(storage::get_recipients(&env)?.dev)
    }

    //
    // NFT - POSSE, APROVAÇÃO E TRANSFERÊNCIA
    //

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, AvatarError> {
        nft::owner_of(&env, token_id)
    }

    pub fn balance(env: Env, owner: Address) -> u32 {
        storage::get_balance(&env, &owner)
    }

    pub fn token_uri(env: Env, token_id: u32) -> Result<String, AvatarError> {
        nft::token_uri(&env, token_id)
    }

    pub fn approve(env: Env, caller: Address, spender: Address, token_id: u32) -> Result<(), AvatarError> {
        caller.require_auth();
        nft::approve(&env, &caller, &spender, token_id)
    }

    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        storage::get_approved(&env, token_id)
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) -> Result<(), AvatarError> {
        owner.require_auth();
        nft::set_approval_for_all(&env, &owner, &operator, approved)
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        nft::is_approved_for_all(&env, &owner, &operator)
    }

    /// Transferência direta pelo dono. Bloqueada durante a pré-venda.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), AvatarError> {
        from.require_auth();
        nft::transfer(&env, &from, &from, &to, token_id)
    }

    /// Transferência por um aprovado/operador.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), AvatarError> {
        spender.require_auth();
        nft::transfer(&env, &spender, &from, &to, token_id)
    }
}

//
// TESTES UNITÁRIOS
//
