//! Entity model for the clinic: patients, doctors, and appointments.
//!
//! Entities are plain data joined by typed identifiers. The back-reference
//! from a person to their appointments is deliberately not stored here; it is
//! a derived view recomputed from the appointment collection on every read
//! (see [`crate::store::ClinicStore`]), so it can never diverge from the
//! appointments themselves.

use crate::constants::UNSPECIFIED_DIAGNOSIS;
use chrono::{DateTime, Utc};
use clinic_types::{NonEmptyText, PassportNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a patient record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub u32);

/// Unique identifier of a doctor record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(pub u32);

/// Unique identifier of an appointment record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub u32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person receiving care at the clinic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier of the patient.
    pub id: PatientId,
    /// Passport number; unique and opaque.
    pub passport: PassportNumber,
    /// Full display name.
    pub full_name: NonEmptyText,
    /// Year of birth.
    pub birth_year: i32,
    /// Home address, if recorded.
    pub address: Option<String>,
}

impl Patient {
    /// Age in whole years relative to an explicitly supplied reference year.
    ///
    /// The reference year is a parameter so that age-based queries stay
    /// deterministic under test instead of reading the wall clock.
    pub fn age_in(&self, current_year: i32) -> i32 {
        current_year - self.birth_year
    }
}

/// A clinician seeing patients at the clinic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique identifier of the doctor.
    pub id: DoctorId,
    /// Passport number; unique and opaque.
    pub passport: PassportNumber,
    /// Full display name.
    pub full_name: NonEmptyText,
    /// Year of birth.
    pub birth_year: i32,
    /// Free-text specialization (e.g. "cardiologist").
    pub specialization: NonEmptyText,
    /// Years of professional experience.
    pub experience_years: u32,
}

/// A scheduled encounter between one patient and one doctor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier of the appointment.
    pub id: AppointmentId,
    /// The patient attending the appointment.
    pub patient: PatientId,
    /// The doctor seeing the patient.
    pub doctor: DoctorId,
    /// When the appointment is scheduled.
    pub scheduled_at: DateTime<Utc>,
    /// Diagnosis/finding recorded at the appointment, if any.
    pub conclusion: Option<String>,
    /// Post-appointment state of the patient. An open label, not a closed
    /// enum; see [`crate::constants::HEALTHY_STATUS`] for the designated
    /// resolved value.
    pub status: String,
}

impl Appointment {
    /// The diagnosis label this appointment contributes to frequency reports.
    ///
    /// Absent and blank conclusions collapse into the
    /// [`UNSPECIFIED_DIAGNOSIS`] group rather than being dropped.
    pub fn conclusion_label(&self) -> &str {
        match self.conclusion.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNSPECIFIED_DIAGNOSIS,
        }
    }
}
