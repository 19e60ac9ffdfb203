//! Queries that start from doctors and relate to appointments and patients.

use crate::error::{ClinicError, ClinicResult};
use crate::model::{Doctor, DoctorId, Patient};
use crate::store::ClinicStore;
use chrono::{DateTime, Months, Utc};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Query service for doctor-centred reports.
#[derive(Clone, Copy, Debug)]
pub struct DoctorQueries<'a> {
    store: &'a ClinicStore,
}

impl<'a> DoctorQueries<'a> {
    /// Creates a query service borrowing the given store.
    pub fn new(store: &'a ClinicStore) -> Self {
        Self { store }
    }

    /// Doctors with at least `min_years` of experience, descending by
    /// experience. Equal experience keeps store order. A zero threshold
    /// returns every doctor.
    pub fn with_experience(&self, min_years: u32) -> Vec<&'a Doctor> {
        let mut matches: Vec<&Doctor> = self
            .store
            .doctors()
            .iter()
            .filter(|d| d.experience_years >= min_years)
            .collect();
        matches.sort_by_key(|d| Reverse(d.experience_years));
        matches
    }

    /// Doctors whose specialization matches `specialization`
    /// case-insensitively, in store order.
    pub fn with_specialization(&self, specialization: &str) -> Vec<&'a Doctor> {
        let wanted = specialization.to_lowercase();
        self.store
            .doctors()
            .iter()
            .filter(|d| d.specialization.as_str().to_lowercase() == wanted)
            .collect()
    }

    /// The patients seen by one doctor, de-duplicated and ordered ascending
    /// by full name (ordinal comparison on the display string).
    ///
    /// A doctor with no appointments and an unknown doctor id are
    /// indistinguishable here: both yield an empty list. Appointments whose
    /// patient id no longer resolves are skipped with a warning.
    pub fn patients_of(&self, doctor: DoctorId) -> Vec<&'a Patient> {
        let mut seen = HashSet::new();
        let mut roster: Vec<&Patient> = Vec::new();

        for appointment in self.store.appointments_for_doctor(doctor) {
            if !seen.insert(appointment.patient) {
                continue;
            }
            match self.store.find_patient(appointment.patient) {
                Some(patient) => roster.push(patient),
                None => tracing::warn!(
                    patient = %appointment.patient,
                    appointment = %appointment.id,
                    "skipping appointment with unresolvable patient"
                ),
            }
        }

        roster.sort_by(|a, b| a.full_name.as_str().cmp(b.full_name.as_str()));
        roster
    }

    /// Appointment counts per doctor over the trailing calendar month,
    /// `[now - 1 month, now]` inclusive.
    ///
    /// Returns `(doctor full name, count)` pairs in first-encountered doctor
    /// order; doctors without an in-window appointment are omitted rather
    /// than zero-filled. Appointments whose doctor id no longer resolves are
    /// skipped with a warning.
    ///
    /// This is a clock-dependent operation: `now` is the caller's reference
    /// instant. Pass a fixed instant for deterministic results.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidReferenceTime`] when subtracting one
    /// calendar month from `now` leaves the representable range.
    pub fn appointment_counts_last_month(
        &self,
        now: DateTime<Utc>,
    ) -> ClinicResult<Vec<(String, usize)>> {
        let start = now
            .checked_sub_months(Months::new(1))
            .ok_or(ClinicError::InvalidReferenceTime)?;

        let mut order: Vec<DoctorId> = Vec::new();
        let mut counts: HashMap<DoctorId, usize> = HashMap::new();
        for appointment in self.store.appointments() {
            if appointment.scheduled_at < start || appointment.scheduled_at > now {
                continue;
            }
            if !counts.contains_key(&appointment.doctor) {
                order.push(appointment.doctor);
            }
            *counts.entry(appointment.doctor).or_insert(0) += 1;
        }

        let mut report = Vec::with_capacity(order.len());
        for doctor in order {
            match self.store.find_doctor(doctor) {
                Some(d) => report.push((d.full_name.to_string(), counts[&doctor])),
                None => tracing::warn!(
                    doctor = %doctor,
                    "skipping appointment count for unresolvable doctor"
                ),
            }
        }
        Ok(report)
    }

    /// Number of distinct patients across all of one doctor's appointments,
    /// with no time restriction.
    pub fn distinct_patient_count(&self, doctor: DoctorId) -> usize {
        self.store
            .appointments_for_doctor(doctor)
            .iter()
            .map(|a| a.patient)
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Appointment, AppointmentId, PatientId};
    use clinic_types::{NonEmptyText, PassportNumber};

    fn at(timestamp: &str) -> DateTime<Utc> {
        timestamp.parse().expect("valid timestamp")
    }

    fn doctor(id: u32, name: &str, specialization: &str, experience: u32) -> Doctor {
        Doctor {
            id: DoctorId(id),
            passport: PassportNumber::new(format!("D{id:09}")).expect("valid passport"),
            full_name: NonEmptyText::new(name).expect("valid name"),
            birth_year: 1975,
            specialization: NonEmptyText::new(specialization).expect("valid specialization"),
            experience_years: experience,
        }
    }

    fn patient(id: u32, name: &str) -> Patient {
        Patient {
            id: PatientId(id),
            passport: PassportNumber::new(format!("P{id:09}")).expect("valid passport"),
            full_name: NonEmptyText::new(name).expect("valid name"),
            birth_year: 1985,
            address: None,
        }
    }

    fn appointment(id: u32, patient: u32, doctor: u32, scheduled: &str) -> Appointment {
        Appointment {
            id: AppointmentId(id),
            patient: PatientId(patient),
            doctor: DoctorId(doctor),
            scheduled_at: at(scheduled),
            conclusion: None,
            status: "healthy".to_owned(),
        }
    }

    fn sample_store() -> ClinicStore {
        let mut store = ClinicStore::new();
        for d in [
            doctor(1, "Ann Abel", "general practice", 20),
            doctor(2, "Ben Cole", "surgery", 8),
            doctor(3, "Cass Dunn", "cardiology", 15),
        ] {
            store.add_doctor(d).expect("insert should succeed");
        }
        for p in [
            patient(1, "Zoe Young"),
            patient(2, "Mia North"),
            patient(3, "Abe Vigo"),
        ] {
            store.add_patient(p).expect("insert should succeed");
        }
        for a in [
            appointment(1, 1, 1, "2026-07-20T10:00:00Z"),
            appointment(2, 2, 1, "2026-07-25T10:00:00Z"),
            appointment(3, 3, 2, "2026-07-28T10:00:00Z"),
            appointment(4, 1, 1, "2026-06-01T10:00:00Z"),
            appointment(5, 1, 3, "2026-08-01T10:00:00Z"),
        ] {
            store.add_appointment(a).expect("insert should succeed");
        }
        store
    }

    #[test]
    fn test_with_experience_filters_and_sorts_descending() {
        let store = sample_store();
        let result = DoctorQueries::new(&store).with_experience(10);

        let summary: Vec<(&str, u32)> = result
            .iter()
            .map(|d| (d.full_name.as_str(), d.experience_years))
            .collect();
        assert_eq!(summary, [("Ann Abel", 20), ("Cass Dunn", 15)]);
    }

    #[test]
    fn test_with_experience_zero_threshold_returns_all() {
        let store = sample_store();
        let result = DoctorQueries::new(&store).with_experience(0);
        assert_eq!(result.len(), store.doctors().len());
    }

    #[test]
    fn test_with_experience_ties_keep_store_order() {
        let mut store = ClinicStore::new();
        for d in [
            doctor(1, "Second In", "surgery", 12),
            doctor(2, "First In", "surgery", 12),
        ] {
            store.add_doctor(d).expect("insert should succeed");
        }

        let names: Vec<&str> = DoctorQueries::new(&store)
            .with_experience(10)
            .iter()
            .map(|d| d.full_name.as_str())
            .collect();
        assert_eq!(names, ["Second In", "First In"]);
    }

    #[test]
    fn test_with_specialization_matches_case_insensitively() {
        let store = sample_store();
        let queries = DoctorQueries::new(&store);

        let result = queries.with_specialization("Cardiology");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].full_name.as_str(), "Cass Dunn");
        assert!(queries.with_specialization("dermatology").is_empty());
    }

    #[test]
    fn test_patients_of_deduplicates_and_orders_by_name() {
        let store = sample_store();
        // Doctor 1 saw Zoe twice and Mia once.
        let names: Vec<&str> = DoctorQueries::new(&store)
            .patients_of(DoctorId(1))
            .iter()
            .map(|p| p.full_name.as_str())
            .collect();
        assert_eq!(names, ["Mia North", "Zoe Young"]);
    }

    #[test]
    fn test_patients_of_unknown_doctor_is_empty() {
        let store = sample_store();
        assert!(DoctorQueries::new(&store).patients_of(DoctorId(99)).is_empty());
    }

    #[test]
    fn test_patients_of_skips_dangling_patient_reference() {
        let mut store = sample_store();
        assert!(store.remove_patient(PatientId(2)));

        let names: Vec<&str> = DoctorQueries::new(&store)
            .patients_of(DoctorId(1))
            .iter()
            .map(|p| p.full_name.as_str())
            .collect();
        assert_eq!(names, ["Zoe Young"], "removed patient is skipped, not an error");
    }

    #[test]
    fn test_last_month_counts_window_and_order() {
        let store = sample_store();
        // Window [Jul 1, Aug 1]: appointments 1, 2 (doctor 1), 3 (doctor 2),
        // 5 (doctor 3); appointment 4 (Jun 1) is out of window.
        let report = DoctorQueries::new(&store)
            .appointment_counts_last_month(at("2026-08-01T12:00:00Z"))
            .expect("report should succeed");

        assert_eq!(
            report,
            [
                ("Ann Abel".to_owned(), 2),
                ("Ben Cole".to_owned(), 1),
                ("Cass Dunn".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn test_last_month_omits_doctors_without_appointments() {
        let store = sample_store();
        // A window in the distant past matches nothing at all.
        let report = DoctorQueries::new(&store)
            .appointment_counts_last_month(at("2020-01-01T00:00:00Z"))
            .expect("report should succeed");
        assert!(report.is_empty());
    }

    #[test]
    fn test_last_month_skips_dangling_doctor_reference() {
        let mut store = sample_store();
        assert!(store.remove_doctor(DoctorId(2)));

        let report = DoctorQueries::new(&store)
            .appointment_counts_last_month(at("2026-08-01T12:00:00Z"))
            .expect("report should succeed");
        assert_eq!(
            report,
            [("Ann Abel".to_owned(), 2), ("Cass Dunn".to_owned(), 1)]
        );
    }

    #[test]
    fn test_distinct_patient_count_ignores_repeat_visits() {
        let store = sample_store();
        let queries = DoctorQueries::new(&store);
        // Doctor 1: Zoe twice + Mia once.
        assert_eq!(queries.distinct_patient_count(DoctorId(1)), 2);
        assert_eq!(queries.distinct_patient_count(DoctorId(3)), 1);
        assert_eq!(queries.distinct_patient_count(DoctorId(99)), 0);
    }
}
