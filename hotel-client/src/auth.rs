//! Sign in and sign out against the backend

use serde_json::Value;
use shared::ApiResponse;
use shared::client::{LoginRequest, LoginResponse};

use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::session::Session;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

/// Exchange credentials for a token; the client starts using it right away
pub async fn login<H: HttpClient>(http: &mut H, email: &str, password: &str) -> ClientResult<Session> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let resp: ApiResponse<Value> = http.post(LOGIN_PATH, &request).await?;
    let LoginResponse { token, user } = resp.into_item()?;
    tracing::info!(user = %user.id, role = %user.role, "signed in");
    http.set_token(Some(token.clone()));
    Ok(Session::new(token, user))
}

/// Tell the backend the token is done with and forget it locally
///
/// The local token is dropped even when the backend call fails.
pub async fn logout<H: HttpClient>(http: &mut H) -> ClientResult<()> {
    if http.token().is_none() {
        return Ok(());
    }
    let result: ClientResult<ApiResponse<Value>> = http.post(LOGOUT_PATH, &serde_json::json!({})).await;
    http.set_token(None);
    match result {
        Ok(resp) => {
            resp.into_ack()?;
            tracing::info!("signed out");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "logout request failed");
            Err(e)
        }
    }
}
