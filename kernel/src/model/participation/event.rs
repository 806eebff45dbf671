use crate::model::id::{EventId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateParticipation {
    pub event_id: EventId,
    pub user_id: UserId,
}
