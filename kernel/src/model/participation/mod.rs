use crate::model::id::UserId;

pub mod event;

// イベントに参加登録しているユーザー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}
