use super::*;

fn valid_draft() -> RaffleDraft {
    let mut draft = RaffleDraft {
        nombre: "Rifa del barrio".to_owned(),
        valor_ticket: 2.5,
        fecha_inicio: "2026-09-01".to_owned(),
        fecha_fin: "2026-09-08".to_owned(),
        hora_sorteo: "20:30".to_owned(),
        ..RaffleDraft::default()
    };
    draft.premios[0].descripcion = "Bicicleta".to_owned();
    draft.premios[0].valor = 150.0;
    draft
}

#[test]
fn default_draft_starts_with_one_blank_prize() {
    let draft = RaffleDraft::default();
    assert_eq!(draft.premios.len(), 1);
    assert_eq!(draft.premios[0].posicion, 1);
    assert_eq!(draft.total_prize_value(), 0.0);
}

#[test]
fn total_prize_value_tracks_every_mutation() {
    let mut draft = valid_draft();
    draft.add_premio();
    draft.premios[1].valor = 50.0;
    assert_eq!(draft.total_prize_value(), 200.0);

    draft.premios[0].valor = 100.0;
    assert_eq!(draft.total_prize_value(), 150.0);

    draft.remove_premio(0);
    assert_eq!(draft.total_prize_value(), 50.0);
}

#[test]
fn positions_stay_contiguous_after_arbitrary_removals() {
    let mut draft = valid_draft();
    for _ in 0..4 {
        draft.add_premio();
    }
    assert_eq!(draft.premios.iter().map(|p| p.posicion).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    draft.remove_premio(2);
    draft.remove_premio(0);
    assert_eq!(draft.premios.len(), 3);
    assert_eq!(draft.premios.iter().map(|p| p.posicion).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn last_prize_cannot_be_removed() {
    let mut draft = valid_draft();
    draft.remove_premio(0);
    assert_eq!(draft.premios.len(), 1);
}

#[test]
fn remove_out_of_range_is_a_no_op() {
    let mut draft = valid_draft();
    draft.add_premio();
    draft.remove_premio(9);
    assert_eq!(draft.premios.len(), 2);
}

#[test]
fn validate_rejects_empty_name_first() {
    let mut draft = valid_draft();
    draft.nombre = "   ".to_owned();
    draft.valor_ticket = 0.0;
    assert_eq!(draft.validate().unwrap_err(), "El nombre de la rifa es obligatorio");
}

#[test]
fn validate_rejects_non_positive_ticket_price() {
    let mut draft = valid_draft();
    draft.valor_ticket = 0.0;
    assert_eq!(draft.validate().unwrap_err(), "El valor del boleto debe ser mayor a 0");
}

#[test]
fn validate_limited_mode_requires_ticket_count() {
    let mut draft = valid_draft();
    draft.cantidad_tickets = 0;
    assert_eq!(draft.validate().unwrap_err(), "La cantidad de boletos debe ser mayor a 0");
}

#[test]
fn validate_unlimited_mode_ignores_ticket_count() {
    let mut draft = valid_draft();
    draft.modalidad_tickets = TicketMode::Ilimitado;
    draft.cantidad_tickets = 0;
    assert!(draft.validate().is_ok());
}

#[test]
fn validate_rejects_incomplete_prizes() {
    let mut draft = valid_draft();
    draft.add_premio();
    assert_eq!(
        draft.validate().unwrap_err(),
        "Todos los premios deben tener descripción y valor mayor a 0"
    );
}

#[test]
fn validate_accepts_complete_draft() {
    assert!(valid_draft().validate().is_ok());
}

#[test]
fn multipart_fields_carry_wire_names_and_derived_total() {
    let mut draft = valid_draft();
    draft.add_premio();
    draft.premios[1].descripcion = "Cena para dos".to_owned();
    draft.premios[1].valor = 80.0;
    draft.premios[1].tipo = PrizeKind::Servicio;

    let fields = draft.multipart_fields();
    let get = |name: &str| {
        fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| panic!("missing field {name}"))
    };

    assert_eq!(get("modalidad_tickets"), "limitado");
    assert_eq!(get("cantidad_tickets"), "100");
    assert_eq!(get("hora_sorteo"), "20:30:00");
    assert_eq!(get("modalidad_premio"), "minirifa");
    assert_eq!(get("valor_total_premios"), "230");
    assert_eq!(get("comision_operador"), "5");

    let premios: serde_json::Value = serde_json::from_str(&get("premios")).unwrap();
    assert_eq!(premios[0]["posicion"], 1);
    assert_eq!(premios[1]["tipo"], "servicio");
    assert_eq!(premios[1]["valor"], 80.0);
}

#[test]
fn normalize_draw_time_widens_hh_mm_only() {
    assert_eq!(normalize_draw_time("20:30"), "20:30:00");
    assert_eq!(normalize_draw_time("20:30:15"), "20:30:15");
    assert_eq!(normalize_draw_time(""), "");
}

#[test]
fn image_validation_checks_type_then_size() {
    assert!(validate_image("image/png", 2 * 1024 * 1024).is_ok());
    assert!(validate_image("image/jpeg", MAX_IMAGE_BYTES).is_ok());
    assert_eq!(
        validate_image("image/webp", 1024).unwrap_err(),
        "Solo se permiten archivos de imagen (JPEG, PNG, GIF)"
    );
    assert_eq!(
        validate_image("image/png", MAX_IMAGE_BYTES + 1).unwrap_err(),
        "La imagen no debe superar los 5MB"
    );
}

#[test]
fn submit_phase_is_single_flight() {
    let mut phase = SubmitPhase::Editing;
    assert!(phase.begin());
    assert!(!phase.begin());
    phase = SubmitPhase::Failed;
    assert!(phase.begin());
}
