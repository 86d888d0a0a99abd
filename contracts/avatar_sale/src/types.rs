use soroban_sdk::{contracterror, contracttype, Address};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    ArithmeticOverflow = 4,

    // Caps da rodada
    PerAddressCapExceeded = 5,
    OverallCapExceeded = 6,

    PaymentTransferFailed = 7,

    // mint_public rejeitado pelo ledger (ex: venda sem papel MINTER)
    IssuanceFailed = 8,

    InvalidConfiguration = 9,
    ReentrantCall = 10,
}

// ============================================================================
// PARÂMETROS DA VENDA (imutáveis após initialize)
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Token fungível de pagamento (SEP-41)
    pub token: Address,
    /// Contrato do ledger de avatares
    pub ledger: Address,
    /// Unidades do token de pagamento por avatar
    pub rate: i128,
    /// Carteira que recebe os pagamentos
    pub wallet: Address,
    /// Máximo de avatares vendidos nesta rodada
    pub cap: u32,
    /// Máximo de avatares por comprador nesta rodada
    pub max_per_address: u32,
}
