use super::*;

#[test]
fn connection_error_renders_generic_message() {
    assert_eq!(ApiError::Connection.to_string(), "Error de conexión. Intente nuevamente.");
}

#[test]
fn server_error_renders_backend_message_verbatim() {
    let err = ApiError::Server("Credenciales inválidas".to_owned());
    assert_eq!(err.to_string(), "Credenciales inválidas");
}

#[test]
fn missing_session_is_its_own_variant() {
    assert_eq!(ApiError::NotSignedIn.to_string(), "No se ha iniciado sesión");
}
