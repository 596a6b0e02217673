use super::*;

fn created() -> RifaCreada {
    serde_json::from_value(serde_json::json!({
        "id": 12,
        "nombre": "Rifa del barrio",
        "cantidad_tickets": 100,
        "valor_ticket": 2.5,
        "valor_total_premios": 230.0,
        "modalidad_tickets": "limitado",
    }))
    .unwrap()
}

#[test]
fn success_message_reports_name_count_and_price() {
    assert_eq!(
        success_message(&created()),
        "¡Rifa \"Rifa del barrio\" creada con éxito! Se han generado 100 tickets con un valor de $2.5 cada uno."
    );
}

#[test]
fn select_values_map_onto_ticket_modes() {
    assert_eq!(ticket_mode_from_value("ilimitado"), TicketMode::Ilimitado);
    assert_eq!(ticket_mode_from_value("limitado"), TicketMode::Limitado);
    assert_eq!(ticket_mode_from_value("???"), TicketMode::Limitado);
}

#[test]
fn select_values_map_onto_prize_tiers() {
    assert_eq!(prize_tier_from_value("superrifa"), PrizeTier::Superrifa);
    assert_eq!(prize_tier_from_value("maxirifa"), PrizeTier::Maxirifa);
    assert_eq!(prize_tier_from_value("minirifa"), PrizeTier::Minirifa);
}

#[test]
fn select_values_map_onto_prize_kinds() {
    assert_eq!(prize_kind_from_value("fisico"), PrizeKind::Fisico);
    assert_eq!(prize_kind_from_value("servicio"), PrizeKind::Servicio);
    assert_eq!(prize_kind_from_value("monetario"), PrizeKind::Monetario);
}
