#![no_std]

pub mod storage;
pub mod types;
mod validation;
mod events;
mod access;
mod nft;
pub mod ledger;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use ledger::{AvatarLedger, AvatarLedgerClient};
pub use types::*;
