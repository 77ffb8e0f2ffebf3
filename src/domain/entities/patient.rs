//! Patient entity.

use chrono::NaiveDate;

/// A patient, identified to the outside world by its national ID (`dni`).
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Patient {
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

/// Every writable patient column.
///
/// Used for both creation and full replacement (`PUT`).
#[derive(Debug, Clone, PartialEq)]
pub struct PatientFields {
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

impl Patient {
    /// Builds a patient from its id and column values.
    pub fn from_fields(id: i64, fields: PatientFields) -> Self {
        Self {
            id,
            name: fields.name,
            last_name: fields.last_name,
            dni: fields.dni,
            parish: fields.parish,
            city: fields.city,
            mun: fields.mun,
            date: fields.date,
            gender: fields.gender,
            number: fields.number,
            ant_fam: fields.ant_fam,
            ant_per: fields.ant_per,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_keeps_every_column() {
        let fields = PatientFields {
            name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            dni: "V-12345678".to_string(),
            parish: "Catedral".to_string(),
            city: "Mérida".to_string(),
            mun: "Libertador".to_string(),
            date: NaiveDate::from_ymd_opt(1990, 5, 17),
            gender: "F".to_string(),
            number: "04141234567".to_string(),
            ant_fam: "Diabetes".to_string(),
            ant_per: "None".to_string(),
        };

        let patient = Patient::from_fields(3, fields.clone());

        assert_eq!(patient.id, 3);
        assert_eq!(patient.dni, fields.dni);
        assert_eq!(patient.date, fields.date);
        assert_eq!(patient.ant_per, "None");
    }
}
