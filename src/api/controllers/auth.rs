use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::payload::Json;
use crate::domain::error::ErrorBody;
use crate::domain::remote::RemoteDataService;

use crate::api::dto::auth::{LoginDTO, LoginResponseDTO, SignUpDTO, SignUpResponseDTO};

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub static LOGIN_SUCCESSFUL: &str = "Login successful";

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup).service(login);
}

/// Forwards the credentials to the remote auth provider. The gateway holds
/// no state and applies no validation of its own; the provider is the
/// authority on duplicate emails and password rules.
#[utoipa::path(
    responses(
        (status = 201, body = SignUpResponseDTO, description = "Account created"),
        (status = 400, body = ErrorBody, example = json!(ErrorBody::example_400())),
        (status = 500, body = ErrorBody, example = json!(ErrorBody::example_500()))
    ),
    request_body = SignUpDTO,
    tag = "Auth",
)]
#[post("/auth/signup")]
pub async fn signup(
    payload: Json<SignUpDTO>,
    remote: State<Arc<dyn RemoteDataService>>,
) -> ApiResult {
    let user = remote.sign_up(payload.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(SignUpResponseDTO { user }))
}

#[utoipa::path(
    responses(
        (status = 200, body = LoginResponseDTO, description = "Session established"),
        (status = 400, body = ErrorBody, example = json!(ErrorBody::example_400())),
        (status = 500, body = ErrorBody, example = json!(ErrorBody::example_500()))
    ),
    request_body = LoginDTO,
    tag = "Auth",
)]
#[post("/auth/login")]
pub async fn login(
    payload: Json<LoginDTO>,
    remote: State<Arc<dyn RemoteDataService>>,
) -> ApiResult {
    let data = remote
        .sign_in_with_password(payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponseDTO {
        message: LOGIN_SUCCESSFUL,
        data,
    }))
}
