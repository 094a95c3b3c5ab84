pub mod auth;
pub mod identity_response;
pub mod login_request;
pub mod login_response;
pub mod message_response;
pub(crate) mod password;
pub mod register_request;
pub mod update_user_request;
pub mod user_dto;
pub mod user_id_query;
pub mod user_list_response;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
