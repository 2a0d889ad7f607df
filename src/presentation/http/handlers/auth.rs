use axum::{Json, extract::State, http::HeaderMap};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::domain::account::entity::{Account, NewAccount};
use crate::presentation::http::{
    errors::AppError,
    middleware::user::{UserClaims, decode_required_user_claims},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub account: AccountResponse,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            surname: account.surname,
            email: account.email,
            phone: account.phone,
            created_at: account.created_at,
        }
    }
}

fn issue_token(state: &AppState, account_id: i64, email: &str) -> Result<String, AppError> {
    let exp = (chrono::Utc::now() + chrono::Duration::days(7)).timestamp() as usize;
    let claims = UserClaims {
        sub: account_id.to_string(),
        email: email.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = body.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Valid email is required".to_string()));
    }
    let name = body.name.trim().to_string();
    let surname = body.surname.trim().to_string();
    let phone = body.phone.trim().to_string();
    if name.is_empty() || surname.is_empty() || phone.is_empty() {
        return Err(AppError::BadRequest(
            "Name, surname and phone are required".to_string(),
        ));
    }
    if body.password.len() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let password_hash = hash(&body.password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    let account = state
        .accounts
        .create(NewAccount {
            name,
            surname,
            email,
            phone,
            password_hash,
        })
        .await?;

    let token = issue_token(&state, account.id, &account.email)?;
    tracing::info!(account_id = account.id, "account registered");

    Ok(Json(AuthResponse {
        token,
        account: account.into(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = body.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    let account = state
        .accounts
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::Forbidden("Invalid credentials".to_string()))?;

    let valid = verify(&body.password, &account.password_hash)
        .map_err(|_| AppError::Internal("Password verification failed".to_string()))?;

    if !valid {
        return Err(AppError::Forbidden("Invalid credentials".to_string()));
    }

    let token = issue_token(&state, account.id, &account.email)?;

    Ok(Json(AuthResponse {
        token,
        account: account.into(),
    }))
}

pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccountResponse>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let account_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::Forbidden("Invalid token subject".to_string()))?;

    let account = state
        .accounts
        .find_by_id(account_id)
        .await?
        .ok_or_else(|| AppError::Forbidden("Account not found".to_string()))?;

    Ok(Json(account.into()))
}
