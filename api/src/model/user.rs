use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

use super::not_blank;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Organizer,
    Attendee,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Organizer => Self::Organizer,
            Role::Attendee => Self::Attendee,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: RoleName,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            email,
            role,
        } = value;
        Self {
            id: user_id,
            name,
            email,
            role: RoleName::from(role),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[garde(custom(not_blank), length(chars, max = 80))]
    name: String,
    #[garde(email)]
    email: String,
    #[garde(length(chars, min = 6))]
    password: String,
    // "organizer" 以外の値（未指定を含む）は参加者として登録する
    #[garde(skip)]
    role: Option<String>,
}

impl SignupRequest {
    // 名前は前後の空白を除き、メールアドレスは小文字に揃える
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            ..self
        }
    }
}

impl From<SignupRequest> for CreateUser {
    fn from(value: SignupRequest) -> Self {
        let SignupRequest {
            name,
            email,
            password,
            role,
        } = value;
        let role = match role.as_deref() {
            Some("organizer") => Role::Organizer,
            _ => Role::Attendee,
        };
        CreateUser::new(name, email, password, role)
    }
}
