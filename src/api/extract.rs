//! Request extractors that reject with the common error envelope.
//!
//! Axum's stock `Json` and `Path` extractors answer malformed input with a
//! plain-text body. These wrappers convert the rejection into
//! [`AppError::Validation`] so every failure shares one JSON shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
///
/// Unknown fields are ignored; missing or mistyped fields are rejected
/// with `400 Bad Request`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);

/// Typed path parameters.
///
/// A non-numeric id in `/patient/{id}` is rejected with `400 Bad Request`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
