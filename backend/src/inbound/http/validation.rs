//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures and malformed `{id}` segments are converted into domain
//! `invalid_request` errors so every 400 response uses the same envelope as
//! service-level validation.

use actix_web::{HttpRequest, error::JsonPayloadError, error::PathError, web};
use serde_json::json;

use crate::domain::{Error, UserId};

/// Validation error codes placed in the `context.code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidBody,
    InvalidId,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidBody => "invalid_body",
            Self::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn invalid_id_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::InvalidId,
        format!("user {name} must be an integer"),
    )
}

/// Require an optional body field to be present.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a `{id}` path segment as a base-10 integer.
///
/// Integers outside the `i32` range are well-formed but can never name a
/// stored user, so they yield `Ok(None)` rather than a validation error.
pub(crate) fn parse_user_id(raw: &str) -> Result<Option<UserId>, Error> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_id_error(FieldName::new("id")));
    }
    Ok(raw.parse::<i32>().ok().map(UserId::new))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) => format!("invalid JSON body: {inner}"),
        other => format!("invalid request body: {other}"),
    };
    Error::invalid_request(message)
        .with_details(json!({ "code": ValidationCode::InvalidBody.as_str() }))
        .into()
}

fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    invalid_id_error(FieldName::new("id")).into()
}

/// JSON extractor configuration producing domain `invalid_request` errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path extractor configuration producing domain `invalid_request` errors.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}
