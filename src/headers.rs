use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use chrono_tz::Tz;

use crate::error::AppError;
use crate::timezone;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const TIMEZONE_HEADER: &str = "x-timezone";

/// Caller identity and display zone taken from the `/ping` request headers.
///
/// The user id is checked before the timezone, and both before any handler
/// body runs, so a rejected request never reaches the store.
#[derive(Debug)]
pub struct PingHeaders {
    pub user_id: String,
    pub tz: Tz,
}

impl<S> FromRequestParts<S> for PingHeaders
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = user_id(&parts.headers)?;
        let tz = timezone::resolve(timezone_name(&parts.headers)?.as_deref())?;

        Ok(PingHeaders { user_id, tz })
    }
}

fn user_id(headers: &HeaderMap) -> Result<String, AppError> {
    let value = headers
        .get(USER_ID_HEADER)
        .ok_or(AppError::MissingUserId)?;

    let id = value.to_str().map_err(|_| AppError::InvalidUserId)?.trim();
    if id.is_empty() {
        return Err(AppError::MissingUserId);
    }

    Ok(id.to_string())
}

/// A blank header counts as absent; bytes that are not visible ASCII can
/// never name a zone.
fn timezone_name(headers: &HeaderMap) -> Result<Option<String>, AppError> {
    let Some(value) = headers.get(TIMEZONE_HEADER) else {
        return Ok(None);
    };

    let name = value
        .to_str()
        .map_err(|_| AppError::InvalidTimezone(String::from_utf8_lossy(value.as_bytes()).into_owned()))?
        .trim();

    Ok((!name.is_empty()).then(|| name.to_string()))
}
