//! Response envelopes shared by every resource.

use serde::Serialize;

/// Wrapper for list endpoints.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    pub fn from_entities<E>(entities: Vec<E>) -> Self
    where
        T: From<E>,
    {
        Self {
            items: entities.into_iter().map(T::from).collect(),
        }
    }
}

/// Confirmation returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
