//! CODI-IT REST API client.
//!
//! All requests are made relative to the configured base URL and carry the
//! session's bearer token. Non-2xx responses are converted into
//! [`ApiError::Backend`] with the parsed error payload attached so the
//! normalizer can produce user-facing text.
//!
//! # Example
//!
//! ```rust,ignore
//! use codiit_client::api::ApiClient;
//! use codiit_client::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()?;
//! let api = ApiClient::new(&config)?;
//!
//! let me = api.me().await?;
//! let stores = api.favorite_stores().await?;
//! ```

pub mod types;

pub use types::*;

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;

use codiit_core::{OrderId, ReviewId};

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Account-facing operations used by the profile and withdrawal flows.
///
/// Implemented by [`ApiClient`]; test suites substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait AccountApi {
    /// Fetch the authenticated user's profile.
    async fn me(&self) -> Result<UserProfile, ApiError>;

    /// Submit a profile update as one atomic multipart PATCH.
    async fn update_profile(&self, request: ProfileUpdateRequest) -> Result<(), ApiError>;

    /// Delete the account. Irreversible on the server side.
    async fn withdraw(&self) -> Result<(), ApiError>;
}

/// Order-facing operations used by the cancellation and review flows.
#[allow(async_fn_in_trait)]
pub trait OrdersApi {
    /// Cancel an entire order, all its line items included.
    async fn cancel_order(&self, order_id: &OrderId) -> Result<(), ApiError>;

    /// Delete one of the buyer's reviews.
    async fn delete_review(&self, review_id: ReviewId) -> Result<(), ApiError>;
}

/// HTTP client for the CODI-IT REST API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the bearer token installed as a
    /// default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.api_token.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| ApiError::Config(format!("Invalid API token format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
            }),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// List the user's favorite stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn favorite_stores(&self) -> Result<Vec<StoreSummary>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/users/me/likes"))
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }
}

impl AccountApi for ApiClient {
    async fn me(&self) -> Result<UserProfile, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/users/me"))
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn update_profile(&self, request: ProfileUpdateRequest) -> Result<(), ApiError> {
        // The backend expects currentPassword/name/newPassword on every
        // submission; the image part is appended only when a file was
        // selected.
        let mut form = Form::new()
            .text("currentPassword", request.current_password)
            .text("name", request.name)
            .text("newPassword", request.new_password);

        if let Some(image) = request.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }

        let response = self
            .inner
            .client
            .patch(self.endpoint("/users/me"))
            .multipart(form)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    async fn withdraw(&self) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.endpoint("/users/delete"))
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}

impl OrdersApi for ApiClient {
    async fn cancel_order(&self, order_id: &OrderId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.endpoint(&format!("/orders/{order_id}")))
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    async fn delete_review(&self, review_id: ReviewId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.endpoint(&format!("/review/{review_id}")))
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}

/// Convert a non-2xx response into `ApiError::Backend` with its parsed body.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Backend {
        status: status.as_u16(),
        payload: ErrorPayload::from_body(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = ClientConfig::new("https://api.codiit.example/", "token").expect("valid");
        ApiClient::new(&config).expect("client builds")
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = client();
        assert_eq!(
            api.endpoint("/users/me"),
            "https://api.codiit.example/users/me"
        );
        assert_eq!(
            api.endpoint("/orders/ord_01H"),
            "https://api.codiit.example/orders/ord_01H"
        );
    }
}
