use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar, WithRejection,
};
use kernel::model::auth::event::CreateToken;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AuthorizedUser, SESSION_COOKIE},
    model::auth::{LoginRequest, SessionResponse},
};

pub async fn login(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<(CookieJar, Json<SessionResponse>)> {
    let email = req.email.trim().to_lowercase();
    let user_id = registry
        .auth_repository()
        .verify_user(&email, &req.password)
        .await?;
    let user = registry
        .user_repository()
        .find_current_user(user_id)
        .await?
        .ok_or(AppError::UnauthenticatedError)?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user_id))
        .await?;

    // トークンの有効期限は Redis 側の TTL で管理する
    let cookie = Cookie::build((SESSION_COOKIE, access_token.0))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), Json(SessionResponse::new(user.into()))))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<(CookieJar, StatusCode)> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await?;
    Ok((
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        StatusCode::NO_CONTENT,
    ))
}

pub async fn me(user: AuthorizedUser) -> Json<SessionResponse> {
    Json(SessionResponse::new(user.user.into()))
}
