use kernel::model::{id::UserId, participation::Participant};

#[derive(sqlx::FromRow)]
pub struct ParticipantRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

impl From<ParticipantRow> for Participant {
    fn from(value: ParticipantRow) -> Self {
        let ParticipantRow {
            user_id,
            name,
            email,
        } = value;
        Participant {
            user_id,
            name,
            email,
        }
    }
}
