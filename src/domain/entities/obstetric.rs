//! Obstetric history attached to a clinical record.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RecordObst {
    pub id: i64,
    pub num_births: i32,
    pub num_abort: i32,
    pub menst_date: NaiveDate,
    pub type_preg: String,
    pub id_record: i64,
}

/// Writable obstetric columns, shared by creation and replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstetricFields {
    pub num_births: i32,
    pub num_abort: i32,
    pub menst_date: NaiveDate,
    pub type_preg: String,
}

impl RecordObst {
    pub fn from_fields(id: i64, id_record: i64, fields: ObstetricFields) -> Self {
        Self {
            id,
            num_births: fields.num_births,
            num_abort: fields.num_abort,
            menst_date: fields.menst_date,
            type_preg: fields.type_preg,
            id_record,
        }
    }
}
