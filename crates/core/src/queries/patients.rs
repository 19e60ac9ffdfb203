//! Queries that start from patients and relate to appointments and doctors.

use crate::constants::HEALTHY_STATUS;
use crate::error::{ClinicError, ClinicResult};
use crate::model::{DoctorId, Patient, PatientId};
use crate::store::ClinicStore;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Query service for patient-centred reports.
#[derive(Clone, Copy, Debug)]
pub struct PatientQueries<'a> {
    store: &'a ClinicStore,
}

impl<'a> PatientQueries<'a> {
    /// Creates a query service borrowing the given store.
    pub fn new(store: &'a ClinicStore) -> Self {
        Self { store }
    }

    /// Patients classified as currently healthy.
    ///
    /// A patient qualifies when **any** of their appointments carries the
    /// designated [`HEALTHY_STATUS`] label (exact string equality); a later
    /// appointment with another status does not revoke the classification.
    /// Results are de-duplicated and kept in first-encountered order of the
    /// appointment collection. Appointments whose patient id no longer
    /// resolves are skipped with a warning.
    pub fn currently_healthy(&self) -> Vec<&'a Patient> {
        let mut seen = HashSet::new();
        let mut healthy: Vec<&Patient> = Vec::new();

        for appointment in self.store.appointments() {
            if appointment.status != HEALTHY_STATUS {
                continue;
            }
            if !seen.insert(appointment.patient) {
                continue;
            }
            match self.store.find_patient(appointment.patient) {
                Some(patient) => healthy.push(patient),
                None => tracing::warn!(
                    patient = %appointment.patient,
                    appointment = %appointment.id,
                    "skipping healthy appointment with unresolvable patient"
                ),
            }
        }

        healthy
    }

    /// Patients older than `min_age` who have appointments with strictly
    /// more than one distinct doctor, ascending by birth year. Equal birth
    /// years keep store order.
    ///
    /// Age is `current_year - birth_year`, strictly greater than `min_age`.
    /// The reference year is a parameter so the query stays deterministic;
    /// callers wanting the conventional report pass
    /// [`crate::constants::DEFAULT_MULTI_DOCTOR_MIN_AGE`].
    pub fn multi_doctor_patients_over(
        &self,
        current_year: i32,
        min_age: u32,
    ) -> Vec<&'a Patient> {
        let mut doctors_by_patient: HashMap<PatientId, HashSet<DoctorId>> = HashMap::new();
        for appointment in self.store.appointments() {
            doctors_by_patient
                .entry(appointment.patient)
                .or_default()
                .insert(appointment.doctor);
        }

        let mut matches: Vec<&Patient> = self
            .store
            .patients()
            .iter()
            .filter(|p| {
                doctors_by_patient
                    .get(&p.id)
                    .is_some_and(|doctors| doctors.len() > 1)
            })
            .filter(|p| p.age_in(current_year) > min_age as i32)
            .collect();
        matches.sort_by_key(|p| p.birth_year);
        matches
    }

    /// Patients strictly older than `min_age` relative to `current_year`, in
    /// store order.
    pub fn older_than(&self, current_year: i32, min_age: u32) -> Vec<&'a Patient> {
        self.store
            .patients()
            .iter()
            .filter(|p| p.age_in(current_year) > min_age as i32)
            .collect()
    }

    /// The `n` most frequent diagnoses across all appointments.
    ///
    /// Groups strictly by the recorded conclusion, never by status; absent
    /// and blank conclusions form their own
    /// [`crate::constants::UNSPECIFIED_DIAGNOSIS`] group. Returns
    /// `(label, count)` pairs descending by count; equal counts keep
    /// first-encountered group order.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidTopN`] when `n` is zero; an empty
    /// ranking request is a programming error, not an empty report.
    pub fn top_diagnoses(&self, n: usize) -> ClinicResult<Vec<(String, usize)>> {
        if n == 0 {
            return Err(ClinicError::InvalidTopN);
        }

        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for appointment in self.store.appointments() {
            let label = appointment.conclusion_label();
            if !counts.contains_key(label) {
                order.push(label);
            }
            *counts.entry(label).or_insert(0) += 1;
        }

        let mut groups: Vec<(&str, usize)> =
            order.into_iter().map(|label| (label, counts[label])).collect();
        groups.sort_by_key(|&(_, count)| Reverse(count));

        Ok(groups
            .into_iter()
            .take(n)
            .map(|(label, count)| (label.to_owned(), count))
            .collect())
    }
}
