//! Service account authentication
//!
//! Signs an RS256 JWT assertion with the service account key and trades it
//! at the OAuth token endpoint for a short-lived bearer token.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use ring::rand::SystemRandom;
use ring::signature::{self, RsaKeyPair};
use serde::{Deserialize, Serialize};

use crate::config::SheetsConfig;
use crate::error::{RelayError, RelayResult};

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Serialize)]
struct JwtHeader<'a> {
    alg: &'a str,
    typ: &'a str,
}

/// Claims of the assertion sent to the token endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct TokenError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

pub struct ServiceAccount {
    client_email: String,
    token_uri: String,
    key_pair: RsaKeyPair,
}

impl ServiceAccount {
    /// Build the account from configuration, parsing the private key
    pub fn from_config(config: &SheetsConfig) -> RelayResult<Self> {
        let client_email = config
            .client_email
            .as_deref()
            .ok_or(RelayError::MissingConfig("GOOGLE_SHEETS_CLIENT_EMAIL"))?;
        let private_key = config
            .private_key
            .as_deref()
            .ok_or(RelayError::MissingConfig("GOOGLE_SHEETS_PRIVATE_KEY"))?;

        Ok(ServiceAccount {
            client_email: client_email.to_string(),
            token_uri: config.token_uri.clone(),
            key_pair: parse_private_key(private_key)?,
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    pub fn claims(&self, issued_at: i64) -> Claims {
        Claims {
            iss: self.client_email.clone(),
            scope: SHEETS_SCOPE.to_string(),
            aud: self.token_uri.clone(),
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        }
    }

    /// Signed JWT assertion issued at `issued_at` (unix seconds)
    pub fn assertion(&self, issued_at: i64) -> RelayResult<String> {
        let header = serde_json::to_vec(&JwtHeader {
            alg: "RS256",
            typ: "JWT",
        })
        .map_err(|_| RelayError::Signing)?;
        let claims =
            serde_json::to_vec(&self.claims(issued_at)).map_err(|_| RelayError::Signing)?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(claims)
        );

        let mut sig = vec![0u8; self.key_pair.public().modulus_len()];
        self.key_pair
            .sign(
                &signature::RSA_PKCS1_SHA256,
                &SystemRandom::new(),
                signing_input.as_bytes(),
                &mut sig,
            )
            .map_err(|_| RelayError::Signing)?;

        Ok(format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(sig)))
    }

    /// Exchange a fresh assertion for an access token
    pub async fn fetch_access_token(&self, client: &reqwest::Client) -> RelayResult<String> {
        let assertion = self.assertion(chrono::Utc::now().timestamp())?;

        let response = client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<TokenError>(&body) {
                Ok(TokenError {
                    error,
                    error_description: Some(description),
                }) => format!("{}: {}", error, description),
                Ok(TokenError { error, .. }) => error,
                Err(_) if body.trim().is_empty() => "empty response".to_string(),
                Err(_) => body,
            };
            return Err(RelayError::TokenRejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<TokenResponse>(&body)
            .map(|token| token.access_token)
            .map_err(|e| RelayError::UnexpectedResponse(format!("token response: {}", e)))
    }
}

/// Decode a PEM private key (PKCS#8 or PKCS#1) into a signing key pair
pub fn parse_private_key(pem: &str) -> RelayResult<RsaKeyPair> {
    let label = pem
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("-----BEGIN "))
        .ok_or_else(|| RelayError::InvalidKey("no PEM header found".to_string()))?;

    let body: String = pem
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("-----"))
        .collect();

    let der = STANDARD
        .decode(body.as_bytes())
        .map_err(|e| RelayError::InvalidKey(format!("bad base64: {}", e)))?;

    let parsed = if label.contains("RSA PRIVATE KEY") {
        RsaKeyPair::from_der(&der)
    } else {
        RsaKeyPair::from_pkcs8(&der)
    };

    parsed.map_err(|e| RelayError::InvalidKey(e.to_string()))
}
