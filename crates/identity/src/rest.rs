//! REST implementation of the provider boundary.
//!
//! Wire shape of the Google Identity Toolkit v1 API: JSON bodies posted to
//! `accounts:signUp`, `accounts:signInWithPassword` and
//! `accounts:sendOobCode`, with the project API key as a query parameter.
//! Failures come back as `{"error": {"message": "<CODE>"}}`.

use chrono::{Duration, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{AuthUser, IdentityError, IdentityProvider, ResultIdentity};

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1/";

/// Connection settings for the REST provider.
#[derive(Clone, Debug, Deserialize)]
pub struct RestConfig {
    /// Project API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Override for the service base URL (points at an emulator in tests).
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RestProvider {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    email: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsResponse {
    local_id: String,
    email: String,
    id_token: String,
    /// Token lifetime in seconds, serialized as a string by the service.
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestProvider {
    pub fn new(config: &RestConfig) -> ResultIdentity<Self> {
        let mut base = config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|err| IdentityError::Provider(format!("invalid base_url: {err}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    // The action segment contains a ':', which `Url::join` would read as a
    // scheme, so the endpoint is parsed from the full string.
    fn endpoint(&self, action: &str) -> ResultIdentity<Url> {
        let mut url = Url::parse(&format!("{}accounts:{action}", self.base_url))
            .map_err(|err| IdentityError::Provider(format!("invalid endpoint: {err}")))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn credentials_call(
        &self,
        action: &str,
        email: &str,
        password: &str,
    ) -> ResultIdentity<AuthUser> {
        let endpoint = self.endpoint(action)?;
        tracing::debug!(action, email, "identity credential call");

        let res = self
            .http
            .post(endpoint)
            .json(&CredentialsRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(classify_failure(res).await);
        }

        let body: CredentialsResponse = res.json().await?;
        Ok(auth_user_from(body))
    }
}

impl IdentityProvider for RestProvider {
    async fn sign_up(&self, email: &str, password: &str) -> ResultIdentity<AuthUser> {
        self.credentials_call("signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> ResultIdentity<AuthUser> {
        self.credentials_call("signInWithPassword", email, password)
            .await
    }

    async fn send_password_reset(&self, email: &str) -> ResultIdentity<()> {
        let endpoint = self.endpoint("sendOobCode")?;
        tracing::debug!(email, "identity password reset request");

        let res = self
            .http
            .post(endpoint)
            .json(&OobCodeRequest {
                request_type: "PASSWORD_RESET",
                email,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(classify_failure(res).await);
        }
        Ok(())
    }
}

fn auth_user_from(body: CredentialsResponse) -> AuthUser {
    let lifetime_secs: i64 = body.expires_in.parse().unwrap_or(3600);
    AuthUser {
        uid: body.local_id,
        email: body.email,
        id_token: body.id_token,
        expires_at: Utc::now() + Duration::seconds(lifetime_secs),
    }
}

/// Turns a non-success response into a classified error. A body that does
/// not parse as the service's error envelope falls back to the HTTP status.
async fn classify_failure(res: reqwest::Response) -> IdentityError {
    let status = res.status();
    match res.json::<ErrorResponse>().await {
        Ok(body) => IdentityError::from_code(&body.error.message),
        Err(_) => IdentityError::Provider(format!("unexpected response status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(base_url: Option<&str>) -> ResultIdentity<RestProvider> {
        RestProvider::new(&RestConfig {
            api_key: "test-key".to_string(),
            base_url: base_url.map(str::to_string),
        })
    }

    #[test]
    fn endpoint_carries_action_and_key() {
        let provider = provider(None).unwrap();
        let url = provider.endpoint("signInWithPassword").unwrap();
        assert_eq!(
            url.as_str(),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=test-key"
        );
    }

    #[test]
    fn base_url_override_is_respected() {
        let provider = provider(Some("http://127.0.0.1:9099/identitytoolkit.googleapis.com/v1/"))
            .unwrap();
        let url = provider.endpoint("signUp").unwrap();
        assert!(url.as_str().starts_with("http://127.0.0.1:9099/"));
        assert!(url.as_str().contains("accounts:signUp"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(provider(Some("not a url")).is_err());
    }

    #[test]
    fn expiry_falls_back_on_unparsable_lifetime() {
        let user = auth_user_from(CredentialsResponse {
            local_id: "uid-1".to_string(),
            email: "a@b.c".to_string(),
            id_token: "tok".to_string(),
            expires_in: "bogus".to_string(),
        });
        assert!(user.expires_at > Utc::now());
    }
}
