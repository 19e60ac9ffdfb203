//! Queries over the appointment collection alone.
//!
//! Status grouping, date-range filtering, and status-based selection. No
//! joins happen here; anything that relates appointments to the people
//! involved lives in [`crate::queries::doctors`] and
//! [`crate::queries::patients`].

use crate::error::{ClinicError, ClinicResult};
use crate::model::{Appointment, DoctorId, PatientId};
use crate::store::ClinicStore;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Query service over the appointment collection.
#[derive(Clone, Copy, Debug)]
pub struct AppointmentQueries<'a> {
    store: &'a ClinicStore,
}

impl<'a> AppointmentQueries<'a> {
    /// Creates a query service borrowing the given store.
    pub fn new(store: &'a ClinicStore) -> Self {
        Self { store }
    }

    /// Groups all appointments by their exact status string.
    ///
    /// Returns one entry per distinct status value present. An empty store
    /// yields an empty map; the values always sum to the total appointment
    /// count.
    pub fn status_histogram(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for appointment in self.store.appointments() {
            *counts.entry(appointment.status.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Appointments scheduled within `[start, end]` inclusive, ascending by
    /// scheduled time. Equal timestamps keep their insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidDateRange`] when `start > end`; a
    /// reversed range is a programming error, not an empty result.
    pub fn in_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ClinicResult<Vec<&'a Appointment>> {
        if start > end {
            return Err(ClinicError::InvalidDateRange { start, end });
        }

        let mut matches: Vec<&Appointment> = self
            .store
            .appointments()
            .iter()
            .filter(|a| a.scheduled_at >= start && a.scheduled_at <= end)
            .collect();
        matches.sort_by_key(|a| a.scheduled_at);
        Ok(matches)
    }

    /// The appointments of one doctor, ascending by scheduled time.
    ///
    /// An unknown doctor id yields an empty list.
    pub fn for_doctor(&self, doctor: DoctorId) -> Vec<&'a Appointment> {
        let mut matches = self.store.appointments_for_doctor(doctor);
        matches.sort_by_key(|a| a.scheduled_at);
        matches
    }

    /// The appointments of one patient, ascending by scheduled time.
    ///
    /// An unknown patient id yields an empty list.
    pub fn for_patient(&self, patient: PatientId) -> Vec<&'a Appointment> {
        let mut matches = self.store.appointments_for_patient(patient);
        matches.sort_by_key(|a| a.scheduled_at);
        matches
    }

    /// Appointments whose status matches `status` case-insensitively, in
    /// insertion order.
    pub fn with_status(&self, status: &str) -> Vec<&'a Appointment> {
        let wanted = status.to_lowercase();
        self.store
            .appointments()
            .iter()
            .filter(|a| a.status.to_lowercase() == wanted)
            .collect()
    }

    /// Appointments scheduled within `[now, now + days_ahead days]`
    /// inclusive, ascending by scheduled time.
    ///
    /// This is a clock-dependent operation: `now` is the caller's reference
    /// instant, so two calls with different instants see different windows.
    /// Pass a fixed instant for deterministic results.
    pub fn upcoming(&self, now: DateTime<Utc>, days_ahead: u32) -> Vec<&'a Appointment> {
        let end = now + Duration::days(i64::from(days_ahead));
        let mut matches: Vec<&Appointment> = self
            .store
            .appointments()
            .iter()
            .filter(|a| a.scheduled_at >= now && a.scheduled_at <= end)
            .collect();
        matches.sort_by_key(|a| a.scheduled_at);
        matches
    }
}
