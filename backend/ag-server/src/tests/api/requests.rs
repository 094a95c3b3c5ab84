use crate::{LoginRequest, RegisterRequest, UpdateUserRequest, UserIdQuery, ValidateRequest};

use googletest::prelude::*;

fn register(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        name: name.map(String::from),
        email: email.map(String::from),
        password: password.map(String::from),
    }
}

#[test]
fn given_complete_registration_when_validated_then_ok() {
    let req = register(Some("Ada"), Some("ada@example.com"), Some("password1"));

    assert_that!(req.validate(), ok(anything()));
}

#[test]
fn given_empty_registration_when_validated_then_every_field_is_required() {
    let req = RegisterRequest::default();

    let errors = req.validate().unwrap_err();

    assert_eq!(
        errors.to_string(),
        "name is required, email is required, password is required"
    );
}

#[test]
fn given_short_password_when_registering_then_password_error() {
    let req = register(Some("Ada"), Some("ada@example.com"), Some("short"));

    let errors = req.validate().unwrap_err();

    assert_eq!(errors.first_field(), Some("password"));
    assert_that!(
        errors.to_string(),
        contains_substring("must be at least 8 characters")
    );
}

#[test]
fn given_six_char_password_when_logging_in_then_ok() {
    let req = LoginRequest {
        email: Some("ada@example.com".into()),
        password: Some("secret".into()),
    };

    assert_that!(req.validate(), ok(anything()));
}

#[test]
fn given_invalid_email_when_logging_in_then_email_error() {
    let req = LoginRequest {
        email: Some("not-an-email".into()),
        password: Some("secret".into()),
    };

    let errors = req.validate().unwrap_err();

    assert_eq!(errors.first_field(), Some("email"));
}

#[test]
fn given_empty_update_when_validated_then_ok() {
    assert_that!(UpdateUserRequest::default().validate(), ok(anything()));
}

#[test]
fn given_update_with_short_password_when_validated_then_error() {
    let req = UpdateUserRequest {
        password: Some("short".into()),
        ..UpdateUserRequest::default()
    };

    assert_that!(req.validate(), err(anything()));
}

#[test]
fn given_missing_id_when_require_id_then_bad_request() {
    let query = UserIdQuery { id: None };

    let result = query.require_id();

    assert_that!(result, err(anything()));
}

#[test]
fn given_blank_id_when_require_id_then_bad_request() {
    let query = UserIdQuery {
        id: Some("  ".into()),
    };

    assert_that!(query.require_id(), err(anything()));
}

#[test]
fn given_valid_uuid_when_require_id_then_parsed() {
    let id = uuid::Uuid::new_v4();
    let query = UserIdQuery {
        id: Some(id.to_string()),
    };

    assert_eq!(query.require_id().unwrap(), id);
}
