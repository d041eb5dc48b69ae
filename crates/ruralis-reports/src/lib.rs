#![deny(warnings)]
//! Ruralis report persistence and account collaborators.
//!
//! Everything the calculator engine delegates outward lives here: the
//! report storage contract with in-memory and JSON-file implementations,
//! the session/entitlement collaborator, the payment-webhook provisioning
//! handler, and the `CalculatorPage` composition root that wires a page's
//! fields, formula, views, gate, and store together.

pub mod error;
pub mod page;
pub mod provisioning;
pub mod record;
pub mod session;
pub mod store;

pub use error::{PageError, ReportError, SessionError};
pub use page::CalculatorPage;
pub use provisioning::{
    AccountRecord, AccountStore, PaymentCustomer, PaymentNotification, ProvisionOutcome,
    provision_account,
};
pub use record::{ReportData, ReportPatch, ReportRecord};
pub use session::{Session, StaticSession, UserProfile, resolve_entitlement};
pub use store::{JsonFileReportStore, MemoryReportStore, ReportStore};
