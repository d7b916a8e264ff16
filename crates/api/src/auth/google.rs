//! Google OAuth authorization-code exchange.
//!
//! The callback handler hands over the `code` query parameter; this module
//! swaps it for an access token and reads the account email from the
//! userinfo endpoint. Everything else about the account is ignored.

use serde::Deserialize;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Google OAuth client settings.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

impl GoogleOAuthConfig {
    /// Load from `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET` and
    /// `GOOGLE_REDIRECT_URL`. Returns `None` unless all three are set and
    /// non-empty.
    pub fn from_env() -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Some(Self {
            client_id: var("GOOGLE_CLIENT_ID")?,
            client_secret: var("GOOGLE_CLIENT_SECRET")?,
            redirect_url: var("GOOGLE_REDIRECT_URL")?,
        })
    }
}

/// Failure while talking to Google.
#[derive(Debug, thiserror::Error)]
pub enum GoogleAuthError {
    /// Network failure or a non-2xx response.
    #[error("Google request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The userinfo response carried no email.
    #[error("Google account has no email address")]
    MissingEmail,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfo {
    email: Option<String>,
}

/// Exchange an authorization code and return the account's email.
pub async fn fetch_email(
    client: &reqwest::Client,
    config: &GoogleOAuthConfig,
    code: &str,
) -> Result<String, GoogleAuthError> {
    let token: TokenResponse = client
        .post(TOKEN_URL)
        .form(&[
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let info: UserInfo = client
        .get(USERINFO_URL)
        .bearer_auth(&token.access_token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    info.email
        .filter(|e| !e.is_empty())
        .ok_or(GoogleAuthError::MissingEmail)
}
