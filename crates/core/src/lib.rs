//! # Clinic Core
//!
//! Query/reporting engine for a small clinic's records.
//!
//! This crate contains pure in-memory data operations:
//! - Entity model for patients, doctors, and the appointments linking them
//! - An insertion-ordered entity store with indexed key lookup
//! - Read-only query services that filter, join, group, and aggregate the
//!   store into derived reports
//!
//! **No presentation concerns**: seeding demo data, argument parsing, and
//! report printing belong in `clinic-cli`. Every query here is a pure
//! function of the store's contents; the clock-dependent reports take their
//! reference instant as an explicit parameter.

pub mod constants;
pub mod error;
pub mod model;
pub mod queries;
pub mod store;

pub use clinic_types::{NonEmptyText, PassportNumber, TextError};
pub use error::{ClinicError, ClinicResult};
pub use model::{Appointment, AppointmentId, Doctor, DoctorId, Patient, PatientId};
pub use queries::{AppointmentQueries, DoctorQueries, PatientQueries};
pub use store::ClinicStore;
