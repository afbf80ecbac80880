use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Mutex;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::config::ApiConfig;
use crate::errors::CoreError;
use crate::models::alert::Alert;
use crate::models::holding::{Holding, NewHolding};
use crate::models::report::DailyReport;
use crate::models::rule::{Rule, RuleUpdate};
use crate::models::snapshot::Snapshot;
use crate::models::user::{NewUser, Token, User};

use super::traits::StockApi;

/// Turn a raw response into the caller's expected type.
///
/// Non-2xx: the body text becomes the error message when non-empty, else
/// `HTTP <status>`. 2xx: the body is parsed as JSON into `T`; a parse
/// failure is a decode error naming the request path.
pub fn decode_response<T: DeserializeOwned>(
    path: &str,
    status: u16,
    body: &str,
) -> Result<T, CoreError> {
    if !(200..300).contains(&status) {
        return Err(CoreError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| CoreError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// The reqwest-backed backend client.
///
/// A thin wrapper: merge JSON headers, attach the bearer token when one is
/// held, surface non-success bodies as errors. No retry, cancellation, or
/// request deduplication — overlapping calls race with last-resolved-wins
/// semantics at the caller.
pub struct HttpStockApi {
    base_url: String,
    client: Client,
    /// Bearer token for authenticated requests. Interior mutability so a
    /// login can install the token without exclusive access to the client.
    token: Mutex<Option<String>>,
}

impl HttpStockApi {
    pub fn new(config: &ApiConfig) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            base_url: config.base_url.clone(),
            client: builder.build().unwrap_or_else(|_| Client::new()),
            token: Mutex::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        let token = self.token.lock().unwrap_or_else(|e| e.into_inner());
        match token.as_deref() {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        req: RequestBuilder,
    ) -> Result<T, CoreError> {
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        decode_response(path, status, &body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let req = self
            .client
            .get(format!("{}{path}", self.base_url))
            .header(CONTENT_TYPE, "application/json");
        self.execute(path, self.authorize(req)).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, CoreError> {
        let req = self
            .client
            .request(method, format!("{}{path}", self.base_url))
            .json(body);
        self.execute(path, self.authorize(req)).await
    }

    /// Legacy form-encoded POST, used only by the login endpoint.
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, CoreError> {
        let req = self
            .client
            .post(format!("{}{path}", self.base_url))
            .form(fields);
        self.execute(path, req).await
    }

    async fn delete_json(&self, path: &str) -> Result<serde_json::Value, CoreError> {
        let req = self
            .client
            .delete(format!("{}{path}", self.base_url))
            .header(CONTENT_TYPE, "application/json");
        self.execute(path, self.authorize(req)).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StockApi for HttpStockApi {
    async fn list_holdings(&self) -> Result<Vec<Holding>, CoreError> {
        self.get_json("/api/portfolio/holdings").await
    }

    async fn add_holding(&self, holding: &NewHolding) -> Result<Holding, CoreError> {
        self.send_json(Method::POST, "/api/portfolio/holdings", holding)
            .await
    }

    async fn delete_holding(&self, id: i64) -> Result<(), CoreError> {
        // Backend acks with `{"ok": true}`; nothing in it is useful here.
        self.delete_json(&format!("/api/portfolio/holdings/{id}"))
            .await?;
        Ok(())
    }

    async fn snapshots(&self, symbol: &str) -> Result<Vec<Snapshot>, CoreError> {
        self.get_json(&format!("/api/reports/stock/{symbol}/snapshots"))
            .await
    }

    async fn alerts(&self, symbol: &str) -> Result<Vec<Alert>, CoreError> {
        self.get_json(&format!("/api/reports/stock/{symbol}/alerts"))
            .await
    }

    async fn rule(&self, symbol: &str) -> Result<Rule, CoreError> {
        self.get_json(&format!("/api/rules/stock/{symbol}")).await
    }

    async fn update_rule(&self, symbol: &str, patch: &RuleUpdate) -> Result<Rule, CoreError> {
        self.send_json(Method::PATCH, &format!("/api/rules/stock/{symbol}"), patch)
            .await
    }

    async fn daily_reports(&self) -> Result<Vec<DailyReport>, CoreError> {
        self.get_json("/api/daily/reports").await
    }

    async fn register(&self, user: &NewUser) -> Result<User, CoreError> {
        self.send_json(Method::POST, "/api/auth/register", user).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<Token, CoreError> {
        self.post_form("/api/auth/login", &[("username", username), ("password", password)])
            .await
    }

    async fn me(&self) -> Result<User, CoreError> {
        self.get_json("/api/auth/me").await
    }

    fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }
}
