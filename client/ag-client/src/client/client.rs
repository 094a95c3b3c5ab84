use crate::client::responses::{
    DataEnvelope, LoginResponse, MessageEnvelope, UserRecord, UserUpdate,
};
use crate::error::{ClientError, Result as ClientErrorResult};
use crate::forms::RegisterForm;

use ag_core::{FieldError, UserIdentity};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use uuid::Uuid;

const USERS_PATH: &str = "/api/users";
const LOGIN_PATH: &str = "/api/users/auth";
const ME_PATH: &str = "/api/users/me";

/// HTTP client for the authgate REST API
pub struct Client {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(String::from);
        self
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Send the request and decode a 2xx body as `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientErrorResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!("Response {} ({} bytes)", status, bytes.len());

        if !status.is_success() {
            return Err(Self::api_error(status, &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Build `ClientError::Api` from an error body.
    ///
    /// Understands `{"error": {code, message, fields}}` and a bare
    /// `{"message"}`; anything else falls back to the status text.
    #[track_caller]
    fn api_error(status: StatusCode, bytes: &[u8]) -> ClientError {
        let body: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);
        let error = body.get("error");

        let code = error
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));

        let message = error
            .and_then(|e| e.get("message"))
            .or_else(|| body.get("message"))
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        let fields: Vec<FieldError> = error
            .and_then(|e| e.get("fields"))
            .cloned()
            .and_then(|f| serde_json::from_value(f).ok())
            .unwrap_or_default();

        ClientError::Api {
            status: status.as_u16(),
            code,
            message,
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Register a new account
    pub async fn register(&self, form: &RegisterForm) -> ClientErrorResult<UserRecord> {
        let body = json!({
            "name": form.name,
            "email": form.email,
            "password": form.password,
        });
        let req = self.request(Method::POST, USERS_PATH).json(&body);
        let envelope: DataEnvelope<UserRecord> = self.execute(req).await?;
        Ok(envelope.data)
    }

    /// Exchange credentials for a token
    pub async fn login(&self, email: &str, password: &str) -> ClientErrorResult<LoginResponse> {
        let body = json!({ "email": email, "password": password });
        let req = self.request(Method::POST, LOGIN_PATH).json(&body);
        self.execute(req).await
    }

    /// Identity behind the current token, verified by the server
    pub async fn me(&self) -> ClientErrorResult<UserIdentity> {
        let req = self.request(Method::GET, ME_PATH);
        let envelope: DataEnvelope<UserIdentity> = self.execute(req).await?;
        Ok(envelope.data)
    }

    // =========================================================================
    // User Management
    // =========================================================================

    pub async fn list_users(&self) -> ClientErrorResult<Vec<UserRecord>> {
        let req = self.request(Method::GET, USERS_PATH);
        let envelope: DataEnvelope<Vec<UserRecord>> = self.execute(req).await?;
        Ok(envelope.data)
    }

    pub async fn update_user(
        &self,
        id: Uuid,
        update: &UserUpdate,
    ) -> ClientErrorResult<UserRecord> {
        let req = self
            .request(Method::PUT, &format!("{USERS_PATH}?id={id}"))
            .json(update);
        let envelope: DataEnvelope<UserRecord> = self.execute(req).await?;
        Ok(envelope.data)
    }

    /// Delete a user, returning the server's confirmation message
    pub async fn delete_user(&self, id: Uuid) -> ClientErrorResult<String> {
        let req = self.request(Method::DELETE, &format!("{USERS_PATH}?id={id}"));
        let envelope: MessageEnvelope = self.execute(req).await?;
        Ok(envelope.message)
    }
}
