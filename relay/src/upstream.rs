//! Executes `todo_core` requests against the upstream service.

use reqwest::{Client, Method};
use todo_core::{HttpMethod, HttpRequest, HttpResponse};

/// Shared, connection-pooled HTTP client for the upstream service.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct Upstream {
    http: Client,
}

impl Upstream {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("todo-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Performs one round trip. Non-2xx statuses are returned as data;
    /// only transport failures are errors.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            "Relaying request upstream"
        );

        let mut builder = self.http.request(to_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        tracing::debug!(status, "Upstream responded");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
