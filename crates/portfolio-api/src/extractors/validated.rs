//! Validated form extractor
//!
//! Extracts `application/x-www-form-urlencoded` bodies and validates them
//! using the validator crate.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated form extractor
///
/// Repeated keys (`skill_ids=1&skill_ids=2`) deserialize into a `Vec`.
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_form(e.to_string()))?;

        value.validate()?;

        Ok(ValidatedForm(value))
    }
}
