use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ClientError;

/// Whether a request needs a logged-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Sent with the session header when one exists, without it otherwise.
    Public,
    /// Refused before any I/O when there is no session.
    Authenticated,
}

/// Shared HTTP client that owns the session's bearer credential.
///
/// Clones share the same credential, so every accessor built from one
/// gateway sees a login or logout immediately.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

pub fn bearer_header(token: &str) -> Result<HeaderValue, ClientError> {
    if token.trim().is_empty() {
        return Err(ClientError::InvalidToken("token is empty".to_string()));
    }
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|err| ClientError::InvalidToken(err.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}

impl Gateway {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
                token: RwLock::new(None),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    pub fn set_token(&self, token: &str) -> Result<(), ClientError> {
        bearer_header(token)?;
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    pub fn clear_token(&self) {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn authorization(&self, access: Access) -> Result<Option<HeaderValue>, ClientError> {
        match (self.token(), access) {
            (Some(token), _) => bearer_header(&token).map(Some),
            (None, Access::Public) => Ok(None),
            (None, Access::Authenticated) => Err(ClientError::Unauthenticated),
        }
    }

    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        access: Access,
    ) -> Result<reqwest::Response, ClientError> {
        let authorization = self.authorization(access)?;
        let url = self.url(path);
        let mut builder = self.inner.client.request(method.clone(), &url);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        debug!(method = %method, url = %url, ?access, "http request");
        let start = Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, access: Access) -> Result<T, ClientError> {
        let response = self.send::<()>(Method::GET, path, None, access).await?;
        decode_json_response(ensure_success(response).await?).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, access: Access) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body), access).await?;
        decode_json_response(ensure_success(response).await?).await
    }

    /// POST whose response body is of no interest beyond its status.
    pub async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        access: Access,
    ) -> Result<(), ClientError> {
        let response = self.send(Method::POST, path, Some(body), access).await?;
        ensure_success(response).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, access: Access) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, Some(body), access).await?;
        decode_json_response(ensure_success(response).await?).await
    }

    pub async fn delete(&self, path: &str, access: Access) -> Result<(), ClientError> {
        let response = self.send::<()>(Method::DELETE, path, None, access).await?;
        ensure_success(response).await?;
        Ok(())
    }
}

pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_status(status, body))
}

pub async fn decode_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    serde_json::from_str::<T>(&body).map_err(|err| {
        let snippet: String = body.chars().take(512).collect();
        ClientError::Decode {
            status,
            message: format!("{err} body: {snippet}"),
        }
    })
}
