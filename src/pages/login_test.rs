use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("  ana@example.com  ", "secreta "),
        Ok(("ana@example.com".to_owned(), "secreta ".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_missing_email() {
    assert_eq!(
        validate_login_input("   ", "secreta"),
        Err("Por favor, complete todos los campos")
    );
}

#[test]
fn validate_login_input_rejects_missing_password() {
    assert_eq!(
        validate_login_input("ana@example.com", ""),
        Err("Por favor, complete todos los campos")
    );
}
