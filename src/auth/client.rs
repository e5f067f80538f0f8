use super::error::{AuthError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

/// Login or registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            AuthMode::Login => "/api/admin/login",
            AuthMode::Register => "/api/admin/register",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Admin Login",
            AuthMode::Register => "Admin Registration",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Logging in...",
            AuthMode::Register => "Registering...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Logged in successfully",
            AuthMode::Register => "Registered successfully",
        }
    }

    /// Prompt on the button that flips to the other mode.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Register",
            AuthMode::Register => "Already have an account? Login",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// JSON body posted to both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// JSON body returned by both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Shortened token for logs, e.g. `abcd...wxyz`
pub fn token_preview(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}

/// HTTP client for the admin authentication API.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http_client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("assimox/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign in. A successful response must carry a token.
    pub async fn login(&self, request: &AuthRequest) -> Result<AuthResponse> {
        let response = self.post(AuthMode::Login, request).await?;
        match response.token.as_deref() {
            Some(token) if !token.is_empty() => {
                info!(username = %request.username, token = %token_preview(token), "Admin login succeeded");
                Ok(response)
            }
            _ => {
                error!(username = %request.username, "Login response did not include a token");
                Err(AuthError::InvalidResponse(
                    "response did not include a token".to_string(),
                ))
            }
        }
    }

    pub async fn register(&self, request: &AuthRequest) -> Result<AuthResponse> {
        let response = self.post(AuthMode::Register, request).await?;
        info!(username = %request.username, "Admin registration succeeded");
        Ok(response)
    }

    pub async fn submit(&self, mode: AuthMode, request: &AuthRequest) -> Result<AuthResponse> {
        match mode {
            AuthMode::Login => self.login(request).await,
            AuthMode::Register => self.register(request).await,
        }
    }

    async fn post(&self, mode: AuthMode, request: &AuthRequest) -> Result<AuthResponse> {
        let url = format!("{}{}", self.base_url, mode.endpoint());
        info!(url = %url, username = %request.username, "Sending admin auth request");

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .inspect_err(|e| error!(url = %url, error = %e, "Admin auth request failed"))?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Admin auth response received");

        let parsed = serde_json::from_str::<AuthResponse>(&body);

        if !status.is_success() {
            let message = parsed.ok().and_then(|r| r.message).filter(|m| !m.is_empty());
            error!(status = status.as_u16(), message = ?message, "Admin auth request rejected");
            return Err(match message {
                Some(message) => AuthError::Rejected {
                    status: status.as_u16(),
                    message,
                },
                None => AuthError::Status {
                    status: status.as_u16(),
                },
            });
        }

        parsed.map_err(|e| {
            error!(error = %e, "Admin auth response was not valid JSON");
            AuthError::InvalidResponse(e.to_string())
        })
    }
}
