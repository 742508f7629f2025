//! HTTP client for making requests to the search provider

use crate::config::{OutgoingSettings, DEFAULT_REQUEST_TIMEOUT};
use reqwest::{Client, Response};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// User agent sent with every outgoing request
pub const USER_AGENT: &str = concat!("research-radar/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper with Research Radar configuration
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> reqwest::Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    ///
    /// An unusable `request_timeout` falls back to the default; settings
    /// loaded from a file have already been validated.
    pub fn with_settings(settings: &OutgoingSettings) -> reqwest::Result<Self> {
        let timeout = settings
            .timeout()
            .unwrap_or(Duration::from_secs_f64(DEFAULT_REQUEST_TIMEOUT));

        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(USER_AGENT)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            extra_headers: settings.extra_headers.clone(),
        })
    }

    /// POST a JSON body with the given headers
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &B,
    ) -> reqwest::Result<HttpResponse> {
        let mut req_builder = self.client.post(url).json(body);

        for (key, value) in &self.extra_headers {
            req_builder = req_builder.header(key, value);
        }
        for (key, value) in headers {
            req_builder = req_builder.header(*key, *value);
        }

        let response = req_builder.send().await?;
        HttpResponse::read(response).await
    }
}

/// A fully-read HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl HttpResponse {
    async fn read(response: Response) -> reqwest::Result<Self> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok(Self { status, text })
    }

    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
