//! DTOs for clinical records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Record, RecordFields};

/// Body of `POST /record/{id_patient}` and `PUT /record/{id}`.
///
/// The owning patient comes from the path on creation and cannot be changed.
/// Older clients send `symtomps`; it is accepted as an alias of `symptoms`.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordRequest {
    #[validate(length(min = 1, max = 1000))]
    pub diagnosis: String,

    #[validate(length(max = 1000))]
    pub recommendations: String,

    #[validate(length(max = 1000))]
    pub treatment: String,

    pub date: NaiveDate,

    #[validate(length(max = 1000))]
    pub diagnosis_diff: String,

    #[validate(length(max = 1000))]
    pub diagnosis_eco: String,

    #[validate(length(max = 1000))]
    pub exams: String,

    #[validate(length(max = 1000))]
    pub medications: String,

    #[serde(alias = "symtomps")]
    #[validate(length(max = 1000))]
    pub symptoms: String,

    #[validate(length(max = 1000))]
    pub phy_exa: String,

    #[validate(length(max = 1000))]
    pub signs: String,

    #[validate(length(min = 1, max = 30))]
    pub type_pat: String,

    #[validate(length(max = 1000))]
    pub observations: String,
}

impl From<RecordRequest> for RecordFields {
    fn from(req: RecordRequest) -> Self {
        Self {
            diagnosis: req.diagnosis,
            recommendations: req.recommendations,
            treatment: req.treatment,
            date: req.date,
            diagnosis_diff: req.diagnosis_diff,
            diagnosis_eco: req.diagnosis_eco,
            exams: req.exams,
            medications: req.medications,
            symptoms: req.symptoms,
            phy_exa: req.phy_exa,
            signs: req.signs,
            type_pat: req.type_pat,
            observations: req.observations,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub id: i64,
    pub diagnosis: String,
    pub recommendations: String,
    pub treatment: String,
    pub date: NaiveDate,
    pub diagnosis_diff: String,
    pub diagnosis_eco: String,
    pub exams: String,
    pub medications: String,
    pub symptoms: String,
    pub phy_exa: String,
    pub signs: String,
    pub type_pat: String,
    pub observations: String,
    pub id_patient: i64,
}

impl From<Record> for RecordResponse {
    fn from(r: Record) -> Self {
        Self {
            id: r.id,
            diagnosis: r.diagnosis,
            recommendations: r.recommendations,
            treatment: r.treatment,
            date: r.date,
            diagnosis_diff: r.diagnosis_diff,
            diagnosis_eco: r.diagnosis_eco,
            exams: r.exams,
            medications: r.medications,
            symptoms: r.symptoms,
            phy_exa: r.phy_exa,
            signs: r.signs,
            type_pat: r.type_pat,
            observations: r.observations,
            id_patient: r.id_patient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(symptoms_key: &str) -> serde_json::Value {
        let mut value = json!({
            "diagnosis": "Migraine",
            "recommendations": "Rest",
            "treatment": "Ibuprofen",
            "date": "2024-03-01",
            "diagnosis_diff": "",
            "diagnosis_eco": "",
            "exams": "",
            "medications": "",
            "phy_exa": "",
            "signs": "",
            "type_pat": "general",
            "observations": ""
        });
        value[symptoms_key] = json!("Headache");
        value
    }

    #[test]
    fn test_misspelled_symptoms_accepted() {
        let req: RecordRequest = serde_json::from_value(body("symtomps")).unwrap();
        assert_eq!(req.symptoms, "Headache");
    }

    #[test]
    fn test_symptoms_accepted() {
        let req: RecordRequest = serde_json::from_value(body("symptoms")).unwrap();
        assert_eq!(req.symptoms, "Headache");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_date_rejected() {
        let mut value = body("symptoms");
        value.as_object_mut().unwrap().remove("date");

        assert!(serde_json::from_value::<RecordRequest>(value).is_err());
    }

    #[test]
    fn test_empty_diagnosis_rejected() {
        let mut value = body("symptoms");
        value["diagnosis"] = json!("");

        let req: RecordRequest = serde_json::from_value(value).unwrap();

        assert!(req.validate().is_err());
    }
}
