use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{show_user_responses, signup};

pub fn build_user_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/signup", post(signup))
        .route("/users/:user_id/responses", get(show_user_responses))
}
