//! Read-only query services over the entity store.
//!
//! Each service borrows the store for the duration of a query and returns
//! freshly constructed results. Services compose joins through the store's
//! relationship accessors; no service depends on another service's output.

pub mod appointments;
pub mod doctors;
pub mod patients;

pub use appointments::AppointmentQueries;
pub use doctors::DoctorQueries;
pub use patients::PatientQueries;
