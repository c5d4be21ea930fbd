use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

pub struct ApiClient {
    pub url: String,
    client: reqwest::Client,
}

pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    /// Sends a request with a raw `Authorization` header value and a raw
    /// JSON body.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        authorization: Option<&str>,
        body: Option<String>,
    ) -> ApiResponse {
        let mut request = self.request(method, endpoint, authorization);
        if let Some(body) = body {
            request = request
                .header("content-type", "application/json")
                .body(body);
        }
        Self::dispatch(request).await
    }

    fn request(
        &self,
        method: Method,
        endpoint: &str,
        authorization: Option<&str>,
    ) -> RequestBuilder {
        let request = self.client.request(method, self.path(endpoint));
        match authorization {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }

    async fn dispatch(request: RequestBuilder) -> ApiResponse {
        let response = request.send().await.expect("Failed to send http request");
        let status = response.status();
        let text = response.text().await.expect("Failed to get response text");

        ApiResponse {
            status,
            body: serde_json::from_str(&text).unwrap_or(Value::Null),
        }
    }

    async fn send_with_token<T: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        token: Option<&str>,
        body: Option<&T>,
    ) -> ApiResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        let mut request = self.request(method, endpoint, authorization.as_deref());
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::dispatch(request).await
    }

    pub async fn get(&self, endpoint: &str, token: Option<&str>) -> ApiResponse {
        self.send_with_token::<()>(Method::GET, endpoint, token, None)
            .await
    }

    pub async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        token: Option<&str>,
        body: &T,
    ) -> ApiResponse {
        self.send_with_token(Method::POST, endpoint, token, Some(body))
            .await
    }

    pub async fn put<T: Serialize>(
        &self,
        endpoint: &str,
        token: Option<&str>,
        body: &T,
    ) -> ApiResponse {
        self.send_with_token(Method::PUT, endpoint, token, Some(body))
            .await
    }

    pub async fn delete(&self, endpoint: &str, token: Option<&str>) -> ApiResponse {
        self.send_with_token::<()>(Method::DELETE, endpoint, token, None)
            .await
    }
}
