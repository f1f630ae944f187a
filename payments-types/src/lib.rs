//! # Payments Types
//!
//! Domain types and port traits for the payments service.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Payment aggregate, its value objects and the byte codec
//! - `validation/` - Table-driven rule engine every entity declares against
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Response envelopes for API boundaries
//! - `error/` - Repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod validation;

// Re-export commonly used types
pub use domain::{
    Account, BeneficiaryParty, Charge, ChargesInformation, DebtorParty, DecodeError, EncodeError,
    Fx, Payment, PaymentAttributes, PaymentId, PaymentParty, SponsorParty,
};
pub use dto::*;
pub use error::{AppError, InputError, RepoError};
pub use ports::PaymentRepository;
pub use validation::{ValidationErrors, Validator, Violation};
