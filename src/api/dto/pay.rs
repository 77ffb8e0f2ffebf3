//! DTOs for payments.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Pay, PayFields};

/// Body of `POST /pay/{id_record}` and `PUT /pay/{id}`.
///
/// Every amount is required on update too: `PUT` replaces the whole row.
#[derive(Debug, Deserialize, Validate)]
pub struct PayRequest {
    #[validate(range(min = 0))]
    pub pesos: i32,

    #[validate(range(min = 0))]
    pub cash: i32,

    #[validate(range(min = 0.0))]
    pub pay_mov: f64,

    #[validate(range(min = 0.0))]
    pub biopago: f64,

    #[validate(range(min = 0.0))]
    pub point: f64,
}

impl From<PayRequest> for PayFields {
    fn from(req: PayRequest) -> Self {
        Self {
            pesos: req.pesos,
            cash: req.cash,
            pay_mov: req.pay_mov,
            biopago: req.biopago,
            point: req.point,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayResponse {
    pub id: i64,
    pub pesos: i32,
    pub cash: i32,
    pub pay_mov: f64,
    pub biopago: f64,
    pub point: f64,
    pub id_record: i64,
}

impl From<Pay> for PayResponse {
    fn from(p: Pay) -> Self {
        Self {
            id: p.id,
            pesos: p.pesos,
            cash: p.cash,
            pay_mov: p.pay_mov,
            biopago: p.biopago,
            point: p.point,
            id_record: p.id_record,
        }
    }
}
