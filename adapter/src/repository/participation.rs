use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{EventId, ParticipationId},
    participation::{event::CreateParticipation, Participant},
};
use kernel::repository::participation::ParticipationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{map_insert_error, model::participation::ParticipantRow, ConnectionPool};

#[derive(new)]
pub struct ParticipationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ParticipationRepository for ParticipationRepositoryImpl {
    async fn create(&self, event: CreateParticipation) -> AppResult<ParticipationId> {
        let participation_id = ParticipationId::new();
        // (event_id, user_id) の一意制約で二重登録を防ぐ
        let res = sqlx::query(
            r#"
                INSERT INTO participations (participation_id, event_id, user_id)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(participation_id)
        .bind(event.event_id)
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                "You already confirmed participation",
                &[
                    ("participations_event_id_fkey", "Event not found"),
                    ("participations_user_id_fkey", "User not found"),
                ],
            )
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No participation record has been created".into(),
            ));
        }

        Ok(participation_id)
    }

    async fn count_by_event_id(&self, event_id: EventId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM participations WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_participants_by_event_id(
        &self,
        event_id: EventId,
    ) -> AppResult<Vec<Participant>> {
        sqlx::query_as::<_, ParticipantRow>(
            r#"
                SELECT u.user_id, u.name, u.email
                FROM participations AS p
                INNER JOIN users AS u ON p.user_id = u.user_id
                WHERE p.event_id = $1
                ORDER BY p.created_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Participant::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
