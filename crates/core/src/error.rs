use crate::model::{AppointmentId, DoctorId, PatientId};
use chrono::{DateTime, Utc};

/// Errors reported by the store and the query services.
///
/// Only programmer-error-class inputs are reported here. Data absence (an
/// unknown id in a query, a doctor with no appointments, an empty store)
/// yields an empty result, never an error.
#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("date range start {start} is after end {end}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("top-N report size must be at least 1")]
    InvalidTopN,
    #[error("reference time is outside the representable calendar range")]
    InvalidReferenceTime,
    #[error("patient {0} already exists")]
    DuplicatePatient(PatientId),
    #[error("doctor {0} already exists")]
    DuplicateDoctor(DoctorId),
    #[error("appointment {0} already exists")]
    DuplicateAppointment(AppointmentId),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
