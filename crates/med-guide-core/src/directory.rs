//! Appointment directory: bookable specialties, doctors and the hospitals they
//! practise at.
//!
//! Doctors are filtered by specialty with a case-insensitive substring match, so
//! "cardio" finds the cardiologist. A blank filter lists everyone.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Specialty {
    /// Stable identifier, e.g. "cardiology"
    pub id: String,
    /// Display name, also the value doctors are filtered by, e.g. "Cardiology"
    pub name: String,
}

/// A doctor who takes appointments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// Patient rating out of 5
    pub rating: f32,
    pub experience_years: u32,
    /// Name of the hospital, see [`hospital_named`]
    pub hospital: String,
    pub address: String,
    pub phone: String,
    /// Bookable times, "HH:MM" 24-hour
    pub available_slots: Vec<String>,
    /// Consultation fee in rupees
    pub consultation_fee: u32,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Patient rating out of 5
    pub rating: f32,
    /// e.g. "24/7"
    pub open_hours: String,
}

const SPECIALTIES: &[(&str, &str)] = &[
    ("general", "General Medicine"),
    ("cardiology", "Cardiology"),
    ("neurology", "Neurology"),
    ("ophthalmology", "Ophthalmology"),
    ("orthopedics", "Orthopedics"),
    ("pediatrics", "Pediatrics"),
    ("emergency", "Emergency Medicine"),
];

struct DoctorEntry {
    id: &'static str,
    name: &'static str,
    specialty: &'static str,
    rating: f32,
    experience_years: u32,
    hospital: &'static str,
    address: &'static str,
    phone: &'static str,
    slots: &'static [&'static str],
    fee: u32,
    languages: &'static [&'static str],
}

const DOCTORS: &[DoctorEntry] = &[
    DoctorEntry {
        id: "1",
        name: "Dr. Rajesh Kumar",
        specialty: "General Medicine",
        rating: 4.8,
        experience_years: 15,
        hospital: "Apollo Hospital",
        address: "123 Main Street, Chennai - 600001",
        phone: "+91 98765 43210",
        slots: &["09:00", "10:30", "14:00", "15:30", "17:00"],
        fee: 500,
        languages: &["English", "Tamil", "Hindi"],
    },
    DoctorEntry {
        id: "2",
        name: "Dr. Priya Sharma",
        specialty: "Cardiology",
        rating: 4.9,
        experience_years: 12,
        hospital: "Fortis Hospital",
        address: "456 Heart Lane, Chennai - 600002",
        phone: "+91 98765 43211",
        slots: &["10:00", "11:30", "15:00", "16:30"],
        fee: 800,
        languages: &["English", "Tamil"],
    },
    DoctorEntry {
        id: "3",
        name: "Dr. Arjun Patel",
        specialty: "Neurology",
        rating: 4.7,
        experience_years: 18,
        hospital: "AIIMS Chennai",
        address: "789 Brain Avenue, Chennai - 600003",
        phone: "+91 98765 43212",
        slots: &["09:30", "11:00", "14:30", "16:00"],
        fee: 1000,
        languages: &["English", "Hindi"],
    },
];

const HOSPITALS: &[(&str, &str, &str, &str, f64, f64, f32)] = &[
    ("1", "Apollo Hospital", "123 Main Street, Chennai - 600001", "+91 44 2829 0200", 13.0827, 80.2707, 4.5),
    ("2", "Fortis Hospital", "456 Heart Lane, Chennai - 600002", "+91 44 6676 1000", 13.0878, 80.2785, 4.3),
    ("3", "AIIMS Chennai", "789 Brain Avenue, Chennai - 600003", "+91 44 2659 3040", 13.0732, 80.2609, 4.7),
];

const OPEN_HOURS: &str = "24/7";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl DoctorEntry {
    fn to_doctor(&self) -> Doctor {
        Doctor {
            id: self.id.to_string(),
            name: self.name.to_string(),
            specialty: self.specialty.to_string(),
            rating: self.rating,
            experience_years: self.experience_years,
            hospital: self.hospital.to_string(),
            address: self.address.to_string(),
            phone: self.phone.to_string(),
            available_slots: owned(self.slots),
            consultation_fee: self.fee,
            languages: owned(self.languages),
        }
    }
}

pub fn specialties() -> Vec<Specialty> {
    SPECIALTIES
        .iter()
        .map(|(id, name)| Specialty {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

/// Doctors whose specialty contains `specialty`, ignoring case, in directory order.
pub fn doctors(specialty: Option<&str>) -> Vec<Doctor> {
    let wanted = specialty.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    DOCTORS
        .iter()
        .filter(|d| d.specialty.to_lowercase().contains(&wanted))
        .map(DoctorEntry::to_doctor)
        .collect()
}

pub fn hospitals() -> Vec<Hospital> {
    HOSPITALS
        .iter()
        .map(|&(id, name, address, phone, latitude, longitude, rating)| Hospital {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            latitude,
            longitude,
            rating,
            open_hours: OPEN_HOURS.to_string(),
        })
        .collect()
}

/// The hospital a doctor practises at, by exact name.
pub fn hospital_named(name: &str) -> Option<Hospital> {
    hospitals().into_iter().find(|h| h.name == name)
}
