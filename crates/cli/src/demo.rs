//! Fixed demo dataset for the CLI.
//!
//! A small, consistent triple of collections: four patients, three doctors,
//! and the appointments linking them. Dates are fixed so report output is
//! reproducible; the clock-dependent reports simply see whatever part of the
//! dataset falls inside their window at run time.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clinic_core::constants::{HEALTHY_STATUS, IN_TREATMENT_STATUS};
use clinic_core::{
    Appointment, AppointmentId, ClinicStore, Doctor, DoctorId, Patient, PatientId,
};
use clinic_types::{NonEmptyText, PassportNumber};

/// Status given to demo appointments that have not happened yet.
const SCHEDULED_STATUS: &str = "scheduled";

fn at(timestamp: &str) -> anyhow::Result<DateTime<Utc>> {
    timestamp
        .parse()
        .with_context(|| format!("invalid demo timestamp: {timestamp}"))
}

fn patient(
    id: u32,
    passport: &str,
    name: &str,
    birth_year: i32,
    address: &str,
) -> anyhow::Result<Patient> {
    Ok(Patient {
        id: PatientId(id),
        passport: PassportNumber::new(passport)?,
        full_name: NonEmptyText::new(name)?,
        birth_year,
        address: Some(address.to_owned()),
    })
}

fn doctor(
    id: u32,
    passport: &str,
    name: &str,
    birth_year: i32,
    specialization: &str,
    experience_years: u32,
) -> anyhow::Result<Doctor> {
    Ok(Doctor {
        id: DoctorId(id),
        passport: PassportNumber::new(passport)?,
        full_name: NonEmptyText::new(name)?,
        birth_year,
        specialization: NonEmptyText::new(specialization)?,
        experience_years,
    })
}

fn appointment(
    id: u32,
    patient: u32,
    doctor: u32,
    scheduled: &str,
    conclusion: Option<&str>,
    status: &str,
) -> anyhow::Result<Appointment> {
    Ok(Appointment {
        id: AppointmentId(id),
        patient: PatientId(patient),
        doctor: DoctorId(doctor),
        scheduled_at: at(scheduled)?,
        conclusion: conclusion.map(str::to_owned),
        status: status.to_owned(),
    })
}

/// Builds the populated demo store.
pub fn demo_store() -> anyhow::Result<ClinicStore> {
    let mut store = ClinicStore::new();

    for p in [
        patient(1, "9876543210", "Alex Smith", 1992, "15 Victory Ave")?,
        patient(2, "1234567891", "Maria Ivers", 1985, "25 Peace St")?,
        patient(3, "1928374655", "Igor Petty", 1980, "50 Oak Lane")?,
        patient(4, "5647382910", "Olga Kern", 1982, "40 Cherry Row")?,
    ] {
        store.add_patient(p)?;
    }

    for d in [
        doctor(1, "3344556677", "Odette Sewell", 1975, "general practice", 20)?,
        doctor(2, "4455667788", "Aldo Vance", 1990, "surgery", 8)?,
        doctor(3, "5566778899", "Mikel Kozlov", 1985, "cardiology", 15)?,
    ] {
        store.add_doctor(d)?;
    }

    for a in [
        appointment(
            1,
            1,
            1,
            "2026-07-15T10:00:00Z",
            Some("seasonal flu"),
            HEALTHY_STATUS,
        )?,
        appointment(
            2,
            2,
            1,
            "2026-07-16T11:00:00Z",
            Some("hypertension"),
            IN_TREATMENT_STATUS,
        )?,
        appointment(
            3,
            3,
            2,
            "2026-07-17T12:00:00Z",
            Some("appendicitis"),
            HEALTHY_STATUS,
        )?,
        appointment(
            4,
            4,
            1,
            "2026-07-18T13:00:00Z",
            Some("hypertension"),
            IN_TREATMENT_STATUS,
        )?,
        appointment(
            5,
            4,
            3,
            "2026-07-30T09:30:00Z",
            Some("arrhythmia"),
            IN_TREATMENT_STATUS,
        )?,
        appointment(6, 2, 1, "2026-08-05T14:00:00Z", None, SCHEDULED_STATUS)?,
        appointment(7, 1, 1, "2026-08-08T09:00:00Z", None, SCHEDULED_STATUS)?,
        appointment(8, 3, 3, "2026-08-12T15:00:00Z", None, SCHEDULED_STATUS)?,
    ] {
        store.add_appointment(a)?;
    }

    Ok(store)
}
