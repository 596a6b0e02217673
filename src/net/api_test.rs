use super::*;
use crate::net::types::FieldError;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn classify_prefers_field_errors_over_message() {
    let body = ErrorBody {
        msg: Some("ignored".to_owned()),
        errors: vec![FieldError { param: "cedula".to_owned(), msg: "obligatoria".to_owned() }],
    };
    match classify_error_body(body, "fallback") {
        ApiError::Fields(errors) => assert_eq!(errors[0].param, "cedula"),
        other => panic!("expected field errors, got {other:?}"),
    }
}

#[test]
fn classify_uses_server_message_when_present() {
    let body = ErrorBody { msg: Some("Credenciales inválidas".to_owned()), errors: vec![] };
    assert_eq!(
        classify_error_body(body, "Error al iniciar sesión"),
        ApiError::Server("Credenciales inválidas".to_owned())
    );
}

#[test]
fn classify_falls_back_when_body_is_empty() {
    assert_eq!(
        classify_error_body(ErrorBody::default(), "Error al crear la rifa"),
        ApiError::Server("Error al crear la rifa".to_owned())
    );
}
