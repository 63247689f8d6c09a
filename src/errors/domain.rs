//! Domain-level error type used across the engine.
//!
//! This error type is transport- and storage-agnostic. Every public engine
//! operation returns `Result<T, DomainError>`; callers translate the stable
//! [`ErrorCode`] into user-facing messages. Expected rule violations are
//! values, never panics.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// Rule/validation failure kinds. Each maps to exactly one stable error code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    DeckSizeMismatch,
    DuplicatePlayers,
    GameNotActive,
    NotPlayerTurn,
    CannotTargetSelf,
    InvalidTargetPlayer,
    CardNotInHand,
    RoundNotActive,
    NotTargetPlayer,
    MaxPassLimitReached,
    Other(String),
}

/// Semantic conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Initialization,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other(String::new()), detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// The stable code callers surface verbatim.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::DeckSizeMismatch => ErrorCode::DeckSizeMismatch,
                ValidationKind::DuplicatePlayers => ErrorCode::DuplicatePlayers,
                ValidationKind::GameNotActive => ErrorCode::GameNotActive,
                ValidationKind::NotPlayerTurn => ErrorCode::NotPlayerTurn,
                ValidationKind::CannotTargetSelf => ErrorCode::CannotTargetSelf,
                ValidationKind::InvalidTargetPlayer => ErrorCode::InvalidTargetPlayer,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::RoundNotActive => ErrorCode::RoundNotActive,
                ValidationKind::NotTargetPlayer => ErrorCode::NotTargetPlayer,
                ValidationKind::MaxPassLimitReached => ErrorCode::MaxPassLimitReached,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::OptimisticLock => ErrorCode::VersionConflict,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::Initialization => ErrorCode::InitializationError,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
            },
        }
    }
}
