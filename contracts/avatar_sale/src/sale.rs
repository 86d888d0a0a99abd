use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};
use crate::events;
use crate::ledger_client::AvatarLedgerClient;
use crate::storage;
use crate::types::{SaleConfig, SaleError};
use crate::validation;

//
// CONTRATO PRINCIPAL - VENDA DE AVATARES
//

#[contract]
pub struct AvatarSale;

#[contractimpl]
impl AvatarSale {

    //
    // INICIALIZAÇÃO
    //

    /// Configura uma rodada de venda.
    ///
    /// Depois de inicializada, a venda precisa receber o papel MINTER no ledger.
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    /// - `InvalidConfiguration`: wallet zero, ou rate/cap/max_per_address não positivos
    pub fn initialize(
        env: Env,
        token: Address,
        ledger: Address,
        rate: i128,
        wallet: Address,
        cap: u32,
        max_per_address: u32,
    ) -> Result<(), SaleError> {
        // CHECKS
        if storage::is_initialized(&env) {
            return Err(SaleError::AlreadyInitialized);
        }
        let config = SaleConfig { token, ledger, rate, wallet, cap, max_per_address };
        validation::require_valid_config(&env, &config)?;

        // EFFECTS
        storage::set_config(&env, &config);
        storage::set_total_minted(&env, 0);
        storage::bump_critical_storage(&env);

        // INTERACTIONS
        events::emit_initialized(&env, &config.ledger, cap, max_per_address);
        Ok(())
    }

    //
    // COMPRA - CEI PATTERN
    //

    /// Cobra `quantity * rate` de `buyer` (via allowance) e emite `quantity` avatares.
    ///
    /// # Padrão CEI:
    /// 1. CHECKS: quantidade, custo, cap por endereço, cap geral
    /// 2. EFFECTS: contadores da rodada gravados antes de qualquer chamada externa
    /// 3. INTERACTIONS: pagamento (transfer_from) e depois mint_public no ledger
    ///
    /// Qualquer erro aborta a invocação inteira e o host desfaz pagamento,
    /// emissão e contadores juntos.
    pub fn purchase(env: Env, buyer: Address, quantity: u32) -> Result<(), SaleError> {
        // === REENTRANCY GUARD ===
        if storage::is_reentrancy_locked(&env) {
            return Err(SaleError::ReentrantCall);
        }

        // === CHECKS ===
        buyer.require_auth();
        storage::bump_critical_storage(&env);

        let config = storage::get_config(&env)?;
        validation::require_positive_quantity(quantity)?;
        let cost = validation::cost_of(&config, quantity)?;
        let buyer_total = validation::next_buyer_total(&config, storage::get_bought(&env, &buyer), quantity)?;
        let sale_total = validation::next_sale_total(&config, storage::get_total_minted(&env), quantity)?;

        // === EFFECTS ===
        storage::set_bought(&env, &buyer, buyer_total);
        storage::set_total_minted(&env, sale_total);
        storage::bump_bought(&env, &buyer);

        // === INTERACTIONS ===
        // O guard fica travado durante as chamadas externas; num erro o rollback
        // do host também o libera.
        storage::set_reentrancy_guard(&env, true);
        let this = env.current_contract_address();

        let payment = TokenClient::new(&env, &config.token);
        if !matches!(payment.try_transfer_from(&this, &buyer, &config.wallet, &cost), Ok(Ok(()))) {
            return Err(SaleError::PaymentTransferFailed);
        }

        let ledger = AvatarLedgerClient::new(&env, &config.ledger);
        if !matches!(ledger.try_mint_public(&this, &buyer, &quantity), Ok(Ok(()))) {
            return Err(SaleError::IssuanceFailed);
        }

        storage::set_reentrancy_guard(&env, false);
        events::emit_purchase(&env, &buyer, &config.wallet, quantity, cost);
        Ok(())
    }

    //
    // CONSULTAS (leitura)
    //

    /// Quantidade comprada por `account` nesta rodada.
    pub fn bought_amount_of(env: Env, account: Address) -> u32 {
        storage::get_bought(&env, &account)
    }

    /// Total vendido nesta rodada.
    pub fn total_minted(env: Env) -> u32 {
        storage::get_total_minted(&env)
    }

    pub fn remaining(env: Env) -> Result<u32, SaleError> {
        let config = storage::get_config(&env)?;
        Ok(config.cap.saturating_sub(storage::get_total_minted(&env)))
    }

    pub fn cost_of(env: Env, quantity: u32) -> Result<i128, SaleError> {
        validation::cost_of(&storage::get_config(&env)?, quantity)
    }

    pub fn rate(env: Env) -> Result<i128, SaleError> {
        Ok(storage::get_config(&env)?.rate)
    }

    pub fn cap(env: Env) -> Result<u32, SaleError> {
        Ok(storage::get_config(&env)?.cap)
    }

    pub fn max_per_address(env: Env) -> Result<u32, SaleError> {
        Ok(storage::get_config(&env)?.max_per_address)
    }

    pub fn wallet(env: Env) -> Result<Address, SaleError> {
        Ok(storage::get_config(&env)?.wallet)
    }

    pub fn token(env: Env) -> Result<Address, SaleError> {
        Ok(storage::get_config(&env)?.token)
    }

    pub fn ledger(env: Env) -> Result<Address, SaleError> {
        Ok(storage::get_config(&env)?.ledger)
    }
}
