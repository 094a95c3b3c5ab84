pub mod authenticated_user;
pub mod validated_json;
