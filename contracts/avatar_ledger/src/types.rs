use soroban_sdk::{contracterror, contracttype, Address, String};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AvatarError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidRecipient = 5,

    // Caps de emissão reservada (um código por bucket)
    DevCapExceeded = 6,
    TeamCapExceeded = 7,

    PresaleInactive = 8,
    PresaleActive = 9,
    ArithmeticOverflow = 10,
    InvalidConfiguration = 11,

    // Primitivas de posse do NFT
    TokenNotFound = 12,
    NotOwnerNorApproved = 13,

    // Revogar o último ADMIN trancaria o contrato para sempre
    LastAdmin = 14,
}

// ============================================================================
// PAPÉIS (ACCESS CONTROL)
// ============================================================================

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin = 0,
    Minter = 1,
}

// ============================================================================
// FASE DA COLEÇÃO
// ============================================================================

/// Única transição permitida: `Presale -> Public` (via `finish_presale`).
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Phase {
    Presale = 0,
    Public = 1,
}

impl Phase {
    pub fn finish(self) -> Result<Phase, AvatarError> {
        match self {
            Phase::Presale => Ok(Phase::Public),
            Phase::Public => Err(AvatarError::PresaleInactive),
        }
    }

    pub fn is_presale(self) -> bool {
        self == Phase::Presale
    }
}

// ============================================================================
// BUCKETS DE EMISSÃO RESERVADA
// ============================================================================

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ReservedBucket {
    Team = 0,
    Dev = 1,
}

impl ReservedBucket {
    pub fn limit(self) -> u32 {
        match self {
            ReservedBucket::Team => crate::storage::TEAM_RESERVED_LIMIT,
            ReservedBucket::Dev => crate::storage::DEV_RESERVED_LIMIT,
        }
    }

    pub fn cap_error(self) -> AvatarError {
        match self {
            ReservedBucket::Team => AvatarError::TeamCapExceeded,
            ReservedBucket::Dev => AvatarError::DevCapExceeded,
        }
    }
}

// ============================================================================
// METADADOS DA COLEÇÃO
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionMetadata {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
}

// ============================================================================
// CONFIGURAÇÃO IMUTÁVEL
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReservedRecipients {
    pub team: Address,
    pub dev: Address,
}

impl ReservedRecipients {
    /// Resolve o bucket pelo endereço de destino.
    pub fn bucket_for(&self, to: &Address) -> Result<ReservedBucket, AvatarError> {
        if to == &self.team {
            Ok(ReservedBucket::Team)
        } else if to == &self.dev {
            Ok(ReservedBucket::Dev)
        } else {
            Err(AvatarError::InvalidRecipient)
        }
    }
}
