use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    event::{delete_event, register_event, show_event, show_event_list, update_event},
    participation::{attend_event, show_participants},
};

pub fn build_event_routers() -> Router<AppRegistry> {
    let events_routers = Router::new()
        .route("/", get(show_event_list).post(register_event))
        .route(
            "/:event_id",
            get(show_event).put(update_event).delete(delete_event),
        )
        .route("/:event_id/attend", post(attend_event))
        .route("/:event_id/participants", get(show_participants));

    Router::new().nest("/events", events_routers)
}
