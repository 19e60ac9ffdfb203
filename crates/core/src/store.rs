//! The entity store: three insertion-ordered collections and their indices.
//!
//! The store owns the patient, doctor, and appointment collections and
//! answers relationship lookups by foreign key. It carries no query logic;
//! the services in [`crate::queries`] borrow it read-only and compose joins
//! from the accessors here.
//!
//! Key lookup goes through a positional `HashMap` index rather than a list
//! scan, so `find_*` stays O(1) expected as the collections grow. Insertion
//! order is preserved in every collection: it is the default and tiebreak
//! order for any query without an explicit sort key.

use crate::error::{ClinicError, ClinicResult};
use crate::model::{Appointment, AppointmentId, Doctor, DoctorId, Patient, PatientId};
use std::collections::HashMap;
use std::hash::Hash;

/// In-memory holder of the three entity collections.
///
/// Mutation is single-key and explicit: inserts reject duplicate ids with an
/// error, updates and removals report whether the key existed. Removing a
/// person may leave appointments whose foreign key no longer resolves; the
/// query services tolerate such dangling references by treating the related
/// entity as absent.
#[derive(Clone, Debug, Default)]
pub struct ClinicStore {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    patient_index: HashMap<PatientId, usize>,
    doctor_index: HashMap<DoctorId, usize>,
    appointment_index: HashMap<AppointmentId, usize>,
}

fn rebuild_index<T, K>(items: &[T], key: impl Fn(&T) -> K) -> HashMap<K, usize>
where
    K: Eq + Hash,
{
    items
        .iter()
        .enumerate()
        .map(|(position, item)| (key(item), position))
        .collect()
}

impl ClinicStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================================
    // PATIENTS
    // ============================================================================

    /// Adds a patient, rejecting an already-present id.
    pub fn add_patient(&mut self, patient: Patient) -> ClinicResult<()> {
        if self.patient_index.contains_key(&patient.id) {
            return Err(ClinicError::DuplicatePatient(patient.id));
        }
        self.patient_index.insert(patient.id, self.patients.len());
        self.patients.push(patient);
        Ok(())
    }

    /// Exact-key lookup of a patient. `None` when the id is unknown.
    pub fn find_patient(&self, id: PatientId) -> Option<&Patient> {
        self.patient_index.get(&id).map(|&i| &self.patients[i])
    }

    /// Replaces the patient with the same id. Returns `false` when the id is
    /// unknown; the record's position in store order is unchanged.
    pub fn update_patient(&mut self, patient: Patient) -> bool {
        match self.patient_index.get(&patient.id) {
            Some(&i) => {
                self.patients[i] = patient;
                true
            }
            None => false,
        }
    }

    /// Removes a patient by id. Returns `false` when the id is unknown.
    ///
    /// Appointments referencing the removed patient are left in place and
    /// become dangling; queries skip them.
    pub fn remove_patient(&mut self, id: PatientId) -> bool {
        match self.patient_index.remove(&id) {
            Some(i) => {
                self.patients.remove(i);
                self.patient_index = rebuild_index(&self.patients, |p| p.id);
                true
            }
            None => false,
        }
    }

    /// All patients in insertion order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    // ============================================================================
    // DOCTORS
    // ============================================================================

    /// Adds a doctor, rejecting an already-present id.
    pub fn add_doctor(&mut self, doctor: Doctor) -> ClinicResult<()> {
        if self.doctor_index.contains_key(&doctor.id) {
            return Err(ClinicError::DuplicateDoctor(doctor.id));
        }
        self.doctor_index.insert(doctor.id, self.doctors.len());
        self.doctors.push(doctor);
        Ok(())
    }

    /// Exact-key lookup of a doctor. `None` when the id is unknown.
    pub fn find_doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctor_index.get(&id).map(|&i| &self.doctors[i])
    }

    /// Replaces the doctor with the same id. Returns `false` when the id is
    /// unknown.
    pub fn update_doctor(&mut self, doctor: Doctor) -> bool {
        match self.doctor_index.get(&doctor.id) {
            Some(&i) => {
                self.doctors[i] = doctor;
                true
            }
            None => false,
        }
    }

    /// Removes a doctor by id. Returns `false` when the id is unknown.
    pub fn remove_doctor(&mut self, id: DoctorId) -> bool {
        match self.doctor_index.remove(&id) {
            Some(i) => {
                self.doctors.remove(i);
                self.doctor_index = rebuild_index(&self.doctors, |d| d.id);
                true
            }
            None => false,
        }
    }

    /// All doctors in insertion order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    // ============================================================================
    // APPOINTMENTS
    // ============================================================================

    /// Adds an appointment, rejecting an already-present id.
    ///
    /// Foreign keys are not checked here: population order is the caller's
    /// concern, and queries already tolerate unresolvable references.
    pub fn add_appointment(&mut self, appointment: Appointment) -> ClinicResult<()> {
        if self.appointment_index.contains_key(&appointment.id) {
            return Err(ClinicError::DuplicateAppointment(appointment.id));
        }
        self.appointment_index
            .insert(appointment.id, self.appointments.len());
        self.appointments.push(appointment);
        Ok(())
    }

    /// Exact-key lookup of an appointment. `None` when the id is unknown.
    pub fn find_appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointment_index
            .get(&id)
            .map(|&i| &self.appointments[i])
    }

    /// Replaces the appointment with the same id. Returns `false` when the id
    /// is unknown.
    pub fn update_appointment(&mut self, appointment: Appointment) -> bool {
        match self.appointment_index.get(&appointment.id) {
            Some(&i) => {
                self.appointments[i] = appointment;
                true
            }
            None => false,
        }
    }

    /// Removes an appointment by id. Returns `false` when the id is unknown.
    pub fn remove_appointment(&mut self, id: AppointmentId) -> bool {
        match self.appointment_index.remove(&id) {
            Some(i) => {
                self.appointments.remove(i);
                self.appointment_index = rebuild_index(&self.appointments, |a| a.id);
                true
            }
            None => false,
        }
    }

    /// All appointments in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    // ============================================================================
    // DERIVED BACK-REFERENCES
    // ============================================================================

    /// The appointments of one patient, in insertion order.
    ///
    /// Recomputed from the appointment collection on every call; there is no
    /// stored list to fall out of sync.
    pub fn appointments_for_patient(&self, id: PatientId) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient == id)
            .collect()
    }

    /// The appointments of one doctor, in insertion order.
    pub fn appointments_for_doctor(&self, id: DoctorId) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.doctor == id)
            .collect()
    }
}
