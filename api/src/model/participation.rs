use kernel::model::{id::UserId, participation::Participant};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendResponse {
    pub ok: bool,
    pub message: String,
    pub attendees_count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<Participant> for ParticipantResponse {
    fn from(value: Participant) -> Self {
        let Participant {
            user_id,
            name,
            email,
        } = value;
        Self {
            id: user_id,
            name,
            email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsResponse {
    pub ok: bool,
    pub participants: Vec<ParticipantResponse>,
    pub attendees_count: i64,
}

impl From<Vec<Participant>> for ParticipantsResponse {
    fn from(value: Vec<Participant>) -> Self {
        let participants: Vec<ParticipantResponse> =
            value.into_iter().map(ParticipantResponse::from).collect();
        Self {
            ok: true,
            attendees_count: participants.len() as i64,
            participants,
        }
    }
}
