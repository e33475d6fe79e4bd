//! Authentication Handlers
//!
//! Handles registration, login, logout and the current profile

use std::time::Duration;

use axum::{Json, extract::State};

use crate::auth::{
    CurrentUser, MIN_PASSWORD_LEN, ROLE_ADMIN, ROLE_CUSTOMER, hash_password, verify_dummy_password,
    verify_password,
};
use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::security_log;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_required_text, validate_text_len,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use shared::models::{User, normalize_email};
use shared::util::new_document_id;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// 签发令牌；管理员身份 = 档案标记或邮箱在 ADMIN_EMAILS 中
fn issue_token(state: &ServerState, user: &User) -> AppResult<LoginResponse> {
    let is_admin = user.is_admin || state.config.is_admin_email(&user.email);
    let role = if is_admin { ROLE_ADMIN } else { ROLE_CUSTOMER };

    let token = state
        .get_jwt_service()
        .generate_token(&user.id, &user.email, &user.name, role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    Ok(LoginResponse {
        token,
        user: UserInfo::from_user(user, is_admin),
    })
}

/// Register handler
///
/// Creates a customer account and signs it in
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = normalize_email(&req.email);
    validate_email(&email)?;
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&req.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort)
            .with_detail("min_length", MIN_PASSWORD_LEN));
    }
    validate_text_len(&req.password, "password", MAX_PASSWORD_LEN)?;

    let user = User {
        id: new_document_id(),
        email,
        name: req.name.trim().to_string(),
        phone: req
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
        is_admin: false,
    };

    let password_hash = hash_password(&req.password)?;
    let user = state
        .users()
        .create(user, password_hash)
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::new(ErrorCode::EmailAlreadyRegistered),
            other => other.into(),
        })?;

    security_log!(
        "INFO",
        "user_registered",
        user_id = user.id.clone(),
        email = user.email.clone()
    );

    Ok(Json(issue_token(&state, &user)?))
}

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = normalize_email(&req.email);
    let stored = state.users().find_by_email(&email)?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error to prevent email enumeration
    let stored = match stored {
        Some(s) if verify_password(&req.password, &s.password_hash)? => s,
        Some(_) => {
            security_log!("WARN", "login_failed", email = email.clone(), reason = "invalid_password");
            return Err(AppError::invalid_credentials());
        }
        None => {
            verify_dummy_password(&req.password);
            security_log!("WARN", "login_failed", email = email.clone(), reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    let response = issue_token(&state, &stored.user)?;

    tracing::info!(
        user_id = %stored.user.id,
        email = %stored.user.email,
        is_admin = response.user.is_admin,
        "User logged in successfully"
    );

    Ok(Json(response))
}

/// Get current user info
pub async fn me(State(state): State<ServerState>, user: CurrentUser) -> AppResult<Json<UserInfo>> {
    let profile = state
        .users()
        .find_by_id(&user.id)?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    Ok(Json(UserInfo::from_user(&profile, user.is_admin())))
}

/// Logout handler
///
/// 令牌无状态，仅记录安全日志
pub async fn logout(user: CurrentUser) -> Json<ApiResponse<()>> {
    security_log!("INFO", "logout", user_id = user.id.clone(), email = user.email.clone());
    Json(ApiResponse::ok())
}
