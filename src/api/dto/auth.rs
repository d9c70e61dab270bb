use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::models::session::{Credentials, Registration};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpDTO {
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,

    #[schema(examples("Your Name"))]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginDTO {
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,
}

/// 201 body: the user record exactly as the auth provider returned it.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignUpResponseDTO {
    #[schema(value_type = Object)]
    pub user: Value,
}

/// 200 body: fixed greeting plus the provider's session payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponseDTO {
    #[schema(value_type = String, examples("Login successful"))]
    pub message: &'static str,

    #[schema(value_type = Object)]
    pub data: Value,
}

impl From<SignUpDTO> for Registration {
    fn from(dto: SignUpDTO) -> Self {
        Registration {
            email: dto.email,
            password: dto.password,
            name: dto.name,
        }
    }
}

impl From<LoginDTO> for Credentials {
    fn from(dto: LoginDTO) -> Self {
        Credentials {
            email: dto.email,
            password: dto.password,
        }
    }
}
