//! Payment entity attached to a clinical record.

/// A payment split across currencies and methods.
///
/// `pesos` and `cash` are whole amounts; the electronic methods carry
/// fractional amounts.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Pay {
    pub id: i64,
    pub pesos: i32,
    pub cash: i32,
    pub pay_mov: f64,
    pub biopago: f64,
    pub point: f64,
    pub id_record: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayFields {
    pub pesos: i32,
    pub cash: i32,
    pub pay_mov: f64,
    pub biopago: f64,
    pub point: f64,
}

impl Pay {
    pub fn from_fields(id: i64, id_record: i64, fields: PayFields) -> Self {
        Self {
            id,
            pesos: fields.pesos,
            cash: fields.cash,
            pay_mov: fields.pay_mov,
            biopago: fields.biopago,
            point: fields.point,
            id_record,
        }
    }
}

