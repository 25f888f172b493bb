use crate::error::HttpError;
use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::Instant;

/// Type alias for the boxed response body.
pub type ResponseBody =
    http_body_util::combinators::BoxBody<Bytes, Box<dyn std::error::Error + Send + Sync>>;

/// HTTP response wrapper with body-reading helpers
///
/// - `resp.bytes().await?` - Read raw bytes
/// - `resp.text().await?` - Read body as (lossy) UTF-8
/// - `resp.json::<T>().await?` - Parse body as JSON
/// - `resp.expect_status(StatusCode::CREATED).await?` - Read bytes, failing
///   with the full body unless the status matches exactly
///
/// None of the readers except `expect_status` look at the status code.
/// All body reads enforce the configured `max_body_size` limit and must
/// finish before the deadline set when the request was sent.
#[derive(Debug)]
pub struct HttpResponse {
    pub(crate) inner: Response<ResponseBody>,
    pub(crate) max_body_size: usize,
    pub(crate) deadline: Instant,
    pub(crate) timeout: Duration,
}

impl HttpResponse {
    /// Get the response status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Get the response headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Read response body as bytes
    ///
    /// # Errors
    /// Returns `HttpError::BodyTooLarge` if body exceeds limit.
    /// Returns `HttpError::Timeout` if the body is not complete by the deadline.
    pub async fn bytes(self) -> Result<Bytes, HttpError> {
        tokio::time::timeout_at(
            self.deadline,
            read_body_limited(self.inner, self.max_body_size),
        )
        .await
        .map_err(|_| HttpError::Timeout(self.timeout))?
    }

    /// Read response body as text (UTF-8)
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    ///
    /// # Errors
    /// Returns `HttpError::BodyTooLarge` if body exceeds limit.
    pub async fn text(self) -> Result<String, HttpError> {
        let body = self.bytes().await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Parse response body as JSON
    ///
    /// # Errors
    /// Returns `HttpError::BodyTooLarge` if body exceeds limit.
    /// Returns `HttpError::Json` if parsing fails.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let body = self.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Read the body and return it if the status equals `expected`
    ///
    /// Any other status, including other 2xx codes, yields
    /// `HttpError::HttpStatus` carrying the status and the whole body.
    ///
    /// # Errors
    /// Returns `HttpError::HttpStatus` on status mismatch.
    /// Returns `HttpError::BodyTooLarge` if body exceeds limit.
    pub async fn expect_status(self, expected: StatusCode) -> Result<Bytes, HttpError> {
        let status = self.inner.status();
        let body = self.bytes().await?;

        if status != expected {
            return Err(HttpError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body)
    }
}

async fn read_body_limited(
    response: Response<ResponseBody>,
    limit: usize,
) -> Result<Bytes, HttpError> {
    let (_parts, body) = response.into_parts();

    let mut collected = Vec::new();
    let mut body = std::pin::pin!(body);

    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(HttpError::Transport)?;
        if let Some(chunk) = frame.data_ref() {
            if collected.len() + chunk.len() > limit {
                return Err(HttpError::BodyTooLarge {
                    limit,
                    actual: collected.len() + chunk.len(),
                });
            }
            collected.extend_from_slice(chunk);
        }
    }

    Ok(Bytes::from(collected))
}
