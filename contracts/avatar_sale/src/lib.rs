#![no_std]

pub mod storage;
pub mod types;
mod validation;
mod events;
mod ledger_client;
pub mod sale;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use sale::{AvatarSale, AvatarSaleClient};
pub use types::*;
