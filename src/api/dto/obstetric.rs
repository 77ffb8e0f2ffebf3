//! DTOs for obstetric records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ObstetricFields, RecordObst};

/// Body of `POST /record/obstetric/{id_record}` and
/// `PUT /record/obstetric/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct ObstetricRequest {
    #[validate(range(min = 0))]
    pub num_births: i32,

    #[validate(range(min = 0))]
    pub num_abort: i32,

    /// Last menstruation date.
    pub menst_date: NaiveDate,

    #[validate(length(min = 1, max = 20))]
    pub type_preg: String,
}

impl From<ObstetricRequest> for ObstetricFields {
    fn from(req: ObstetricRequest) -> Self {
        Self {
            num_births: req.num_births,
            num_abort: req.num_abort,
            menst_date: req.menst_date,
            type_preg: req.type_preg,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ObstetricResponse {
    pub id: i64,
    pub num_births: i32,
    pub num_abort: i32,
    pub menst_date: NaiveDate,
    pub type_preg: String,
    pub id_record: i64,
}

impl From<RecordObst> for ObstetricResponse {
    fn from(o: RecordObst) -> Self {
        Self {
            id: o.id,
            num_births: o.num_births,
            num_abort: o.num_abort,
            menst_date: o.menst_date,
            type_preg: o.type_preg,
            id_record: o.id_record,
        }
    }
}
