//! Clerk Backend API calls authenticated with the instance secret key.

use client::net::types::UserProfile;
use serde::Deserialize;

use super::ClerkError;

#[derive(Debug, Clone, Deserialize)]
pub struct EmailAddress {
    pub id: String,
    pub email_address: String,
}

/// Subset of the Backend API user object the demo displays.
#[derive(Debug, Clone, Deserialize)]
pub struct ClerkUser {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub primary_email_address_id: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

impl ClerkUser {
    /// The address marked primary, else the first one listed.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        let primary = self
            .primary_email_address_id
            .as_deref()
            .and_then(|id| self.email_addresses.iter().find(|e| e.id == id));
        primary
            .or_else(|| self.email_addresses.first())
            .map(|e| e.email_address.as_str())
    }

    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        let email_address = self.primary_email().map(str::to_owned);
        UserProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            email_address,
            username: self.username,
            has_image: self.has_image,
            image_url: self.image_url.unwrap_or_default(),
        }
    }
}

pub struct BackendApi {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl BackendApi {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: String, secret_key: String) -> Self {
        Self { http, base_url, secret_key }
    }

    /// `GET /v1/users/{user_id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is malformed, the request fails, the API
    /// answers with a non-success status, or the body is not the requested
    /// user.
    pub async fn get_user(&self, user_id: &str) -> Result<UserProfile, ClerkError> {
        check_id(user_id)?;
        let url = format!("{}/v1/users/{user_id}", self.base_url);
        let text = self.send(self.http.get(url)).await?;
        let user = parse_user(&text)?;
        if user.id != user_id {
            return Err(ClerkError::ApiParse(format!("asked for {user_id}, got {}", user.id)));
        }
        tracing::debug!(user_id = %user.id, "clerk user fetched");
        Ok(user.into_profile())
    }

    /// `POST /v1/sessions/{session_id}/revoke`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is malformed, the request fails, or the API
    /// answers with a non-success status.
    pub async fn revoke_session(&self, session_id: &str) -> Result<(), ClerkError> {
        check_id(session_id)?;
        let url = format!("{}/v1/sessions/{session_id}/revoke", self.base_url);
        self.send(self.http.post(url)).await?;
        tracing::info!(%session_id, "clerk session revoked");
        Ok(())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ClerkError> {
        let response = request
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| ClerkError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ClerkError::ApiRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ClerkError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

/// Parse a Backend API user object.
///
/// # Errors
///
/// Returns [`ClerkError::ApiParse`] when the body is not a user.
pub fn parse_user(text: &str) -> Result<ClerkUser, ClerkError> {
    serde_json::from_str(text).map_err(|e| ClerkError::ApiParse(e.to_string()))
}

fn check_id(id: &str) -> Result<(), ClerkError> {
    let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid { Ok(()) } else { Err(ClerkError::InvalidId(id.to_owned())) }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
