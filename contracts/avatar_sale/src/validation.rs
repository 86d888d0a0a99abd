use soroban_sdk::{log, Address, Env, String};
use crate::storage;
use crate::types::{SaleConfig, SaleError};

// ============================================================================
// VALIDAÇÕES
// ============================================================================

/// Valida os parâmetros de construção da venda
pub fn require_valid_config(env: &Env, config: &SaleConfig) -> Result<(), SaleError> {
    let zero = Address::from_string(&String::from_str(env, storage::ZERO_ACCOUNT));
    if config.wallet == zero || config.wallet == env.current_contract_address() {
        log!(env, "wallet must not be zero");
        return Err(SaleError::InvalidConfiguration);
    }
    if config.rate <= 0 {
        log!(env, "rate must be positive", config.rate);
        return Err(SaleError::InvalidConfiguration);
    }
    if config.cap == 0 {
        log!(env, "cap must be positive");
        return Err(SaleError::InvalidConfiguration);
    }
    if config.max_per_address == 0 {
        log!(env, "max per address must be positive");
        return Err(SaleError::InvalidConfiguration);
    }
    Ok(())
}

pub fn require_positive_quantity(quantity: u32) -> Result<(), SaleError> {
    if quantity == 0 {
        return Err(SaleError::InvalidAmount);
    }
    Ok(())
}

/// `quantity * rate` com overflow verificado
pub fn cost_of(config: &SaleConfig, quantity: u32) -> Result<i128, SaleError> {
    (quantity as i128)
        .checked_mul(config.rate)
        .ok_or(SaleError::ArithmeticOverflow)
}

/// Novo total do comprador, limitado a `max_per_address`
pub fn next_buyer_total(config: &SaleConfig, bought: u32, quantity: u32) -> Result<u32, SaleError> {
    let total = bought
        .checked_add(quantity)
        .ok_or(SaleError::ArithmeticOverflow)?;
    if total > config.max_per_address {
        return Err(SaleError::PerAddressCapExceeded);
    }
    Ok(total)
}

/// Novo total da rodada, limitado a `cap`
pub fn next_sale_total(config: &SaleConfig, minted: u32, quantity: u32) -> Result<u32, SaleError> {
    let total = minted
        .checked_add(quantity)
        .ok_or(SaleError::ArithmeticOverflow)?;
    if total > config.cap {
        return Err(SaleError::OverallCapExceeded);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn config(env: &Env, rate: i128, cap: u32, max_per_address: u32) -> SaleConfig {
        SaleConfig {
            token: Address::generate(env),
            ledger: Address::generate(env),
            rate,
            wallet: Address::generate(env),
            cap,
            max_per_address,
        }
    }

    #[test]
    fn test_cost_of() {
        let env = Env::default();
        let c = config(&env, 80_000_000, 2000, 3);
        assert_eq!(cost_of(&c, 3), Ok(240_000_000));
    }

    #[test]
    fn test_cost_of_overflow() {
        let env = Env::default();
        let c = config(&env, i128::MAX, 2000, 3);
        assert_eq!(cost_of(&c, 2), Err(SaleError::ArithmeticOverflow));
        assert_eq!(cost_of(&c, 1), Ok(i128::MAX));
    }

    #[test]
    fn test_per_address_cap() {
        let env = Env::default();
        let c = config(&env, 1, 2000, 3);
        assert_eq!(next_buyer_total(&c, 0, 3), Ok(3));
        assert_eq!(next_buyer_total(&c, 3, 1), Err(SaleError::PerAddressCapExceeded));
        assert_eq!(next_buyer_total(&c, u32::MAX, 1), Err(SaleError::ArithmeticOverflow));
    }

    #[test]
    fn test_overall_cap() {
        let env = Env::default();
        let c = config(&env, 1, 10, 100);
        assert_eq!(next_sale_total(&c, 9, 1), Ok(10));
        assert_eq!(next_sale_total(&c, 9, 2), Err(SaleError::OverallCapExceeded));
    }

    #[test]
    fn test_positive_quantity() {
        assert_eq!(require_positive_quantity(0), Err(SaleError::InvalidAmount));
        assert_eq!(require_positive_quantity(1), Ok(()));
    }
}
