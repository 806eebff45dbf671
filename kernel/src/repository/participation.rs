use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{EventId, ParticipationId},
    participation::{event::CreateParticipation, Participant},
};

#[mockall::automock]
#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    // 同じユーザーによる二重登録は Conflict になる
    async fn create(&self, event: CreateParticipation) -> AppResult<ParticipationId>;
    async fn count_by_event_id(&self, event_id: EventId) -> AppResult<i64>;
    async fn find_participants_by_event_id(&self, event_id: EventId)
        -> AppResult<Vec<Participant>>;
}
