use anyhow::Context;
use chrono::{DateTime, Datelike, Utc};
use clap::{Parser, Subcommand};
use clinic_core::constants::{DEFAULT_MULTI_DOCTOR_MIN_AGE, DEFAULT_TOP_DIAGNOSES};
use clinic_core::{
    Appointment, AppointmentQueries, Doctor, DoctorId, DoctorQueries, Patient, PatientQueries,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod demo;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic records reporting CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Appointment counts per status
    StatusHistogram,
    /// Appointments within an inclusive date range
    Appointments {
        /// Range start (RFC 3339, e.g. 2026-08-01T00:00:00Z)
        start: String,
        /// Range end (RFC 3339)
        end: String,
    },
    /// Appointments in the next N days
    Upcoming {
        /// Days ahead of now
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Doctors with at least the given years of experience
    Experienced {
        /// Minimum years of experience
        #[arg(long, default_value_t = 10)]
        min_years: u32,
    },
    /// Patients of one doctor, ordered by full name
    PatientsOf {
        /// Doctor id
        doctor: u32,
    },
    /// Appointment counts per doctor over the trailing calendar month
    LastMonth,
    /// Patients currently classified healthy
    Healthy,
    /// Patients over an age threshold seen by more than one doctor
    MultiDoctor {
        /// Age threshold (strictly greater than)
        #[arg(long, default_value_t = DEFAULT_MULTI_DOCTOR_MIN_AGE)]
        min_age: u32,
    },
    /// Most common diagnoses
    TopDiagnoses {
        /// Number of entries to report
        #[arg(long, default_value_t = DEFAULT_TOP_DIAGNOSES)]
        count: usize,
    },
    /// Dump the demo records as JSON
    Export,
}

#[derive(serde::Serialize)]
struct ExportedRecords<'a> {
    patients: &'a [Patient],
    doctors: &'a [Doctor],
    appointments: &'a [Appointment],
}

fn parse_instant(value: &str) -> anyhow::Result<DateTime<Utc>> {
    value
        .parse()
        .with_context(|| format!("invalid RFC 3339 timestamp: {value}"))
}

fn print_appointments(appointments: &[&Appointment]) {
    if appointments.is_empty() {
        println!("No appointments found.");
        return;
    }
    for a in appointments {
        println!(
            "ID: {}, Patient: {}, Doctor: {}, At: {}, Status: {}",
            a.id, a.patient, a.doctor, a.scheduled_at, a.status
        );
    }
}

fn print_patients(patients: &[&Patient]) {
    if patients.is_empty() {
        println!("No patients found.");
        return;
    }
    for p in patients {
        println!(
            "ID: {}, Name: {}, Passport: {}, Born: {}",
            p.id, p.full_name, p.passport, p.birth_year
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let store = demo::demo_store()?;

    match cli.command {
        Some(Commands::StatusHistogram) => {
            let histogram = AppointmentQueries::new(&store).status_histogram();
            let mut entries: Vec<(&String, &usize)> = histogram.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (status, count) in entries {
                println!("Status: {status}, Appointments: {count}");
            }
        }
        Some(Commands::Appointments { start, end }) => {
            let start = parse_instant(&start)?;
            let end = parse_instant(&end)?;
            let matches = AppointmentQueries::new(&store).in_date_range(start, end)?;
            print_appointments(&matches);
        }
        Some(Commands::Upcoming { days }) => {
            let matches = AppointmentQueries::new(&store).upcoming(Utc::now(), days);
            print_appointments(&matches);
        }
        Some(Commands::Experienced { min_years }) => {
            let doctors = DoctorQueries::new(&store).with_experience(min_years);
            if doctors.is_empty() {
                println!("No doctors found.");
            }
            for d in doctors {
                println!(
                    "Name: {}, Specialization: {}, Experience: {} years",
                    d.full_name, d.specialization, d.experience_years
                );
            }
        }
        Some(Commands::PatientsOf { doctor }) => {
            let patients = DoctorQueries::new(&store).patients_of(DoctorId(doctor));
            print_patients(&patients);
        }
        Some(Commands::LastMonth) => {
            let report = DoctorQueries::new(&store).appointment_counts_last_month(Utc::now())?;
            if report.is_empty() {
                println!("No appointments in the last month.");
            }
            for (name, count) in report {
                println!("Doctor: {name}, Appointments: {count}");
            }
        }
        Some(Commands::Healthy) => {
            let patients = PatientQueries::new(&store).currently_healthy();
            print_patients(&patients);
        }
        Some(Commands::MultiDoctor { min_age }) => {
            let current_year = Utc::now().year();
            let patients =
                PatientQueries::new(&store).multi_doctor_patients_over(current_year, min_age);
            print_patients(&patients);
        }
        Some(Commands::TopDiagnoses { count }) => {
            let report = PatientQueries::new(&store).top_diagnoses(count)?;
            for (diagnosis, occurrences) in report {
                println!("Diagnosis: {diagnosis}, Occurrences: {occurrences}");
            }
        }
        Some(Commands::Export) => {
            let records = ExportedRecords {
                patients: store.patients(),
                doctors: store.doctors(),
                appointments: store.appointments(),
            };
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        None => {
            println!("Use 'clinic --help' for commands");
        }
    }

    Ok(())
}
