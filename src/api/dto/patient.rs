//! DTOs for patient management.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Patient, PatientFields};

/// National ID: letters, digits, dots and dashes (e.g. `V-12.345.678`).
static DNI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.\-]+$").expect("valid DNI regex"));

/// Phone number: digits with optional `+`, dashes, spaces and parentheses.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\- ]+$").expect("valid phone regex"));

/// Body of `POST /patient` and `PUT /patient/{id}`.
///
/// `date` is optional; an empty string is treated as absent.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct PatientRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(min = 1, max = 120))]
    pub last_name: String,

    #[validate(length(min = 1, max = 15))]
    #[validate(regex(path = "*DNI_REGEX", message = "Invalid DNI format"))]
    pub dni: String,

    #[validate(length(max = 50))]
    pub parish: String,

    #[validate(length(max = 50))]
    pub city: String,

    #[validate(length(max = 40))]
    pub mun: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[validate(length(max = 20))]
    pub gender: String,

    #[validate(length(min = 1, max = 15))]
    #[validate(regex(path = "*PHONE_REGEX", message = "Invalid phone number"))]
    pub number: String,

    #[validate(length(max = 1000))]
    pub ant_fam: String,

    #[validate(length(max = 1000))]
    pub ant_per: String,
}

impl From<PatientRequest> for PatientFields {
    fn from(req: PatientRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            dni: req.dni,
            parish: req.parish,
            city: req.city,
            mun: req.mun,
            date: req.date,
            gender: req.gender,
            number: req.number,
            ant_fam: req.ant_fam,
            ant_per: req.ant_per,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub dni: String,
    pub parish: String,
    pub city: String,
    pub mun: String,
    pub date: Option<NaiveDate>,
    pub gender: String,
    pub number: String,
    pub ant_fam: String,
    pub ant_per: String,
}

impl From<Patient> for PatientResponse {
    fn from(p: Patient) -> Self {
        Self {
            id: p.id,
            name: p.name,
            last_name: p.last_name,
            dni: p.dni,
            parish: p.parish,
            city: p.city,
            mun: p.mun,
            date: p.date,
            gender: p.gender,
            number: p.number,
            ant_fam: p.ant_fam,
            ant_per: p.ant_per,
        }
    }
}
