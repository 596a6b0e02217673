use super::*;

#[test]
fn user_deserializes_numeric_operator_flag() {
    let user: User = serde_json::from_str(
        r#"{"id": 7, "nombre": "Ana", "tipo_usuario": "persona", "es_operador": 1}"#,
    )
    .unwrap();
    assert_eq!(user.id, "7");
    assert!(user.es_operador);
    assert_eq!(user.tipo_usuario, UserKind::Persona);
}

#[test]
fn user_deserializes_bool_operator_flag_from_persisted_json() {
    // Round-trip: we persist `es_operador` as a real bool.
    let user = User {
        id: "u1".to_owned(),
        nombre: "Ana".to_owned(),
        apellido: Some("Pérez".to_owned()),
        correo_electronico: Some("ana@example.com".to_owned()),
        tipo_usuario: UserKind::Empresa,
        es_operador: false,
    };
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_missing_optional_fields_defaults() {
    let user: User =
        serde_json::from_str(r#"{"id": "9", "nombre": "Luis", "tipo_usuario": "gobierno"}"#).unwrap();
    assert_eq!(user.apellido, None);
    assert!(!user.es_operador);
    assert!(!user.can_create_raffles());
}

#[test]
fn can_create_raffles_allows_persona_and_empresa_only() {
    let mut user: User =
        serde_json::from_str(r#"{"id": "1", "nombre": "A", "tipo_usuario": "persona"}"#).unwrap();
    assert!(user.can_create_raffles());
    user.tipo_usuario = UserKind::Empresa;
    assert!(user.can_create_raffles());
    user.tipo_usuario = UserKind::Gobierno;
    assert!(!user.can_create_raffles());
}

#[test]
fn login_request_serializes_accented_password_field() {
    let req = LoginRequest {
        correo_electronico: "ana@example.com".to_owned(),
        password: "secreta".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["correo_electronico"], "ana@example.com");
    assert_eq!(value["contraseña"], "secreta");
}

#[test]
fn error_body_accepts_field_error_list() {
    let body: ErrorBody = serde_json::from_str(
        r#"{"errors": [{"param": "cedula", "msg": "La cédula es obligatoria"}]}"#,
    )
    .unwrap();
    assert_eq!(body.msg, None);
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].param, "cedula");
}

#[test]
fn parse_rifa_creada_accepts_nested_and_flat_bodies() {
    let flat: serde_json::Value = serde_json::from_str(
        r#"{"id": 12, "nombre": "Rifa X", "cantidad_tickets": 100,
            "valor_ticket": 2.5, "valor_total_premios": 150.0,
            "modalidad_tickets": "limitado"}"#,
    )
    .unwrap();
    let nested = serde_json::json!({ "msg": "ok", "rifa": flat });

    let from_flat = parse_rifa_creada(&flat).unwrap();
    let from_nested = parse_rifa_creada(&nested).unwrap();
    assert_eq!(from_flat, from_nested);
    assert_eq!(from_flat.id, "12");
    assert_eq!(from_flat.cantidad_tickets, 100);
}

#[test]
fn parse_rifa_creada_rejects_unrelated_body() {
    let body = serde_json::json!({ "msg": "created" });
    assert!(parse_rifa_creada(&body).is_none());
}
