pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod panic_handler;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        authenticated_user::AuthenticatedUser,
        validated_json::{ValidateRequest, ValidatedJson},
    },
    users::{
        auth::{login, me},
        identity_response::IdentityResponse,
        login_request::LoginRequest,
        login_response::LoginResponse,
        message_response::MessageResponse,
        register_request::RegisterRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_id_query::UserIdQuery,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{delete_user, list_users, register, update_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
