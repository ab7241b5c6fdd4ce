//! Request body extraction accepting either JSON or urlencoded forms.

use axum::{
    async_trait,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Form,
};
use serde::de::DeserializeOwned;

use super::handlers::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Deserializes the body as a form when the request says so, as JSON otherwise.
///
/// A missing `Content-Type` is read as JSON. An empty body is a missing parameter.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE));

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Bind(e.body_text()))?;
        if bytes.trim_ascii().is_empty() {
            return Err(ApiError::InvalidParameter);
        }

        if is_form {
            let mut form_req = Request::new(Body::from(bytes));
            *form_req.method_mut() = Method::POST;
            form_req
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            let Form(value) = Form::<T>::from_request(form_req, state)
                .await
                .map_err(|e| ApiError::Bind(e.body_text()))?;
            Ok(Payload(value))
        } else {
            serde_json::from_slice(&bytes)
                .map(Payload)
                .map_err(|e| ApiError::Bind(format!("Failed to parse the request body as JSON: {}", e)))
        }
    }
}
