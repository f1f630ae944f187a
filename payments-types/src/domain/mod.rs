//! Domain models for the payment service.

pub mod charges;
pub mod codec;
pub mod fx;
pub mod party;
pub mod payment;

pub use charges::{Charge, ChargesInformation};
pub use codec::{DecodeError, EncodeError};
pub use fx::Fx;
pub use party::{Account, BeneficiaryParty, DebtorParty, PaymentParty, SponsorParty};
pub use payment::{Payment, PaymentAttributes, PaymentId};
