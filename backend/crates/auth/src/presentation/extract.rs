//! Body Extractors

use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::{Form, Json};
use kernel::error::app_error::AppError;
use serde::de::DeserializeOwned;

/// Deserializes a request body sent either as JSON or as
/// `application/x-www-form-urlencoded`, chosen by `Content-Type`.
///
/// Rejections are `AppError`s so clients get the usual
/// `{status, error, message, action}` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(&req) {
            Some(BodyKind::Json) => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
                Ok(Self(value))
            }
            Some(BodyKind::Form) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
                Ok(Self(value))
            }
            None => Err(AppError::unsupported_media_type(
                "Expected a JSON or form-encoded request body",
            )
            .with_action("Send Content-Type: application/json")),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
}

impl BodyKind {
    fn of(req: &Request) -> Option<Self> {
        let content_type = req.headers().get(header::CONTENT_TYPE)?.to_str().ok()?;
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        {
            Some(BodyKind::Json)
        } else if mime == "application/x-www-form-urlencoded" {
            Some(BodyKind::Form)
        } else {
            None
        }
    }
}
