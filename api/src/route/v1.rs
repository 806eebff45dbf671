use super::{
    auth::build_auth_routers, event::build_event_routers, health::build_health_check_routers,
    user::build_user_routers,
};
use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use registry::AppRegistry;
use shared::error::AppError;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_routers())
        .merge(build_event_routers());
    Router::new()
        .nest("/api", router)
        .layer(middleware::map_response(method_not_allowed_as_json))
}

// ルーターが返す 405 は本文が空なので、他のエラーと同じ JSON に差し替える
async fn method_not_allowed_as_json(res: Response) -> Response {
    if res.status() != StatusCode::METHOD_NOT_ALLOWED {
        return res;
    }
    let (parts, _) = res.into_parts();
    let mut json = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = parts.headers.get(axum::http::header::ALLOW) {
        json.headers_mut()
            .insert(axum::http::header::ALLOW, allow.clone());
    }
    json
}
