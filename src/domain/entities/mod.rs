//! Core domain entities of the medical records service.
//!
//! Entities are plain data structures mapped one-to-one onto table rows.
//!
//! # Entity Types
//!
//! - [`User`] - Login identity
//! - [`Patient`] - A patient, unique by national ID
//! - [`Record`] - A clinical encounter of a patient
//! - [`RecordObst`] - Obstetric history attached to a record
//! - [`Pay`] - A payment attached to a record
//!
//! # Design Pattern
//!
//! Each entity has a companion input struct holding its writable columns
//! (`PatientFields`, `RecordFields`, ...). `PUT` is a full replacement, so the
//! same struct serves creation and update. Users are the exception: their
//! update may keep the stored password hash (see [`UserUpdate`]).

pub mod obstetric;
pub mod patient;
pub mod pay;
pub mod record;
pub mod user;

pub use obstetric::{ObstetricFields, RecordObst};
pub use patient::{Patient, PatientFields};
pub use pay::{Pay, PayFields};
pub use record::{Record, RecordFields};
pub use user::{NewUser, User, UserUpdate};
