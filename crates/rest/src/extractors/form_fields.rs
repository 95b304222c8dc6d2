//! Form field extractor.
//!
//! Extracts `application/x-www-form-urlencoded` request bodies as a flat
//! field map.

use std::collections::HashMap;

use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
};
use tracing::debug;

use crate::error::RestError;

/// Axum extractor for submitted form fields.
///
/// A request without a form content type yields an empty map, so that the
/// repository answers with its missing-fields message rather than the
/// request failing on its media type.
///
/// # Example
///
/// ```rust,ignore
/// use hms_rest::extractors::FormFields;
///
/// async fn create_handler(FormFields(fields): FormFields) {
///     println!("Surname: {:?}", fields.get("surname"));
/// }
/// ```
#[derive(Debug, Default)]
pub struct FormFields(pub HashMap<String, String>);

impl FormFields {
    /// Returns a submitted field, or the empty string when absent.
    pub fn field(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<HashMap<String, String>>::from_request(req, state).await {
            Ok(Form(fields)) => Ok(FormFields(fields)),
            Err(FormRejection::InvalidFormContentType(rejection)) => {
                debug!(reason = %rejection.body_text(), "No form body, using empty form");
                Ok(FormFields::default())
            }
            Err(rejection) => Err(RestError::BadRequest {
                message: rejection.body_text(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};

    fn post(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method(Method::POST).uri("/hospital");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_urlencoded_body() {
        let req = post(
            Some("application/x-www-form-urlencoded"),
            "name=St.+Mary&address=1%20Main%20St",
        );
        let form = FormFields::from_request(req, &()).await.unwrap();
        assert_eq!(form.field("name"), "St. Mary");
        assert_eq!(form.field("address"), "1 Main St");
        assert_eq!(form.field("phone"), "");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_empty_form() {
        let form = FormFields::from_request(post(None, ""), &()).await.unwrap();
        assert!(form.0.is_empty());
    }
}
