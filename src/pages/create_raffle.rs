//! Create-raffle form: metadata, prize line items, image upload, submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only protected route. The page owns one `RwSignal<RaffleDraft>` and a
//! submit phase; every prize mutation goes through the draft's methods so the
//! position/total invariants hold, and the submit pipeline is single-flight.

#[cfg(test)]
#[path = "create_raffle_test.rs"]
mod create_raffle_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::RifaCreada;
use crate::state::draft::{
    PrizeKind, PrizeTier, RaffleDraft, SelectedImage, SubmitPhase, TicketMode,
};
use crate::state::session::SessionState;
use crate::util::guard::{RouteKind, install_guard};

/// Confirmation banner for a created raffle.
#[cfg(any(test, feature = "hydrate"))]
fn success_message(rifa: &RifaCreada) -> String {
    format!(
        "¡Rifa \"{}\" creada con éxito! Se han generado {} tickets con un valor de ${} cada uno.",
        rifa.nombre, rifa.cantidad_tickets, rifa.valor_ticket
    )
}

/// Map a `<select>` value onto a ticket mode.
fn ticket_mode_from_value(value: &str) -> TicketMode {
    match value {
        "ilimitado" => TicketMode::Ilimitado,
        _ => TicketMode::Limitado,
    }
}

/// Map a `<select>` value onto a raffle tier.
fn prize_tier_from_value(value: &str) -> PrizeTier {
    match value {
        "superrifa" => PrizeTier::Superrifa,
        "maxirifa" => PrizeTier::Maxirifa,
        _ => PrizeTier::Minirifa,
    }
}

/// Map a `<select>` value onto a prize kind.
fn prize_kind_from_value(value: &str) -> PrizeKind {
    match value {
        "fisico" => PrizeKind::Fisico,
        "servicio" => PrizeKind::Servicio,
        _ => PrizeKind::Monetario,
    }
}

#[cfg(feature = "hydrate")]
fn iso_date(date: &js_sys::Date) -> String {
    format!("{:04}-{:02}-{:02}", date.get_full_year(), date.get_month() + 1, date.get_date())
}

#[component]
pub fn CreateRafflePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_guard(session, RouteKind::Protected, navigate.clone());

    let draft = RwSignal::new(RaffleDraft::default());
    let phase = RwSignal::new(SubmitPhase::Editing);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let created = RwSignal::new(None::<RifaCreada>);
    // `SelectedImage` holds a DOM handle on the browser build, so this one
    // signal stays thread-local.
    let image = RwSignal::new_local(None::<SelectedImage>);
    let preview_url = RwSignal::new(None::<String>);

    // Sensible default window: starts today, draws in a week.
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let in_a_week = js_sys::Date::new_0();
        in_a_week.set_time(now.get_time() + 7.0 * 24.0 * 60.0 * 60.0 * 1000.0);
        draft.update(|d| {
            d.fecha_inicio = iso_date(&now);
            d.fecha_fin = iso_date(&in_a_week);
        });
    }

    // Only persona/empresa accounts may create raffles; everyone else is told
    // so and sent home.
    let navigate_denied = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        let Some(user) = state.user else {
            return;
        };
        if user.can_create_raffles() {
            return;
        }
        error.set(Some("No tienes permisos para crear rifas".to_owned()));
        #[cfg(feature = "hydrate")]
        {
            let navigate_denied = navigate_denied.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                navigate_denied("/", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate_denied;
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let mime = file.type_();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(msg) = crate::state::draft::validate_image(&mime, size) {
                error.set(Some(msg));
                return;
            }
            if let Some(old) = preview_url.get_untracked() {
                let _ = web_sys::Url::revoke_object_url(&old);
            }
            preview_url.set(web_sys::Url::create_object_url_with_blob(&file).ok());
            image.set(Some(SelectedImage { name: file.name(), mime, size, file }));
            error.set(None);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let navigate_done = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut claimed = false;
        phase.update(|p| claimed = p.begin());
        if !claimed {
            return;
        }
        error.set(None);
        success.set(None);
        created.set(None);

        let snapshot = draft.get_untracked();
        if let Err(msg) = snapshot.validate() {
            error.set(Some(msg));
            phase.set(SubmitPhase::Editing);
            return;
        }
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            error.set(Some(ApiError::NotSignedIn.to_string()));
            phase.set(SubmitPhase::Failed);
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate_done = navigate_done.clone();
            let attachment = image.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_rifa(&token, &snapshot, attachment.as_ref()).await {
                    Ok(rifa) => {
                        success.set(Some(success_message(&rifa)));
                        created.set(Some(rifa));
                        phase.set(SubmitPhase::Succeeded);
                        gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                        navigate_done("/mis-rifas", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        phase.set(SubmitPhase::Failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&token, &navigate_done);
            phase.set(SubmitPhase::Failed);
        }
    };

    let busy = move || phase.get() == SubmitPhase::Submitting;
    // Prize rows are rebuilt only when the list length changes; individual
    // field edits flow through prop bindings so inputs keep focus.
    let premio_count = Memo::new(move |_| draft.with(|d| d.premios.len()));

    view! {
        <div class="rifa-page">
            <div class="rifa-card">
                <h1>"Crear Nueva Rifa"</h1>

                <Show when=move || error.get().is_some()>
                    <p class="rifa-message rifa-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="rifa-message rifa-message--success">
                        {move || success.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || created.get().is_some()>
                    {move || {
                        created
                            .get()
                            .map(|rifa| {
                                view! {
                                    <div class="rifa-created">
                                        <h2>"Detalles de la Rifa Creada:"</h2>
                                        <p><strong>"ID: "</strong>{rifa.id.clone()}</p>
                                        <p><strong>"Nombre: "</strong>{rifa.nombre.clone()}</p>
                                        <p>
                                            <strong>"Tickets generados: "</strong>
                                            {rifa.cantidad_tickets}
                                        </p>
                                        <p>
                                            <strong>"Valor por ticket: "</strong>
                                            {format!("${}", rifa.valor_ticket)}
                                        </p>
                                        <p>
                                            <strong>"Valor total de premios: "</strong>
                                            {format!("${}", rifa.valor_total_premios)}
                                        </p>
                                    </div>
                                }
                            })
                    }}
                </Show>

                <form class="rifa-form" on:submit=on_submit>
                    <label class="rifa-field">
                        <span>"Nombre de la Rifa"</span>
                        <input
                            type="text"
                            prop:value=move || draft.get().nombre
                            on:input=move |ev| draft.update(|d| d.nombre = event_target_value(&ev))
                        />
                    </label>

                    <div class="rifa-field-row">
                        <label class="rifa-field">
                            <span>"Modalidad de Tickets"</span>
                            <select on:change=move |ev| {
                                draft.update(|d| {
                                    d.modalidad_tickets =
                                        ticket_mode_from_value(&event_target_value(&ev));
                                });
                            }>
                                <option value="limitado">"Limitado"</option>
                                <option value="ilimitado">"Ilimitado"</option>
                            </select>
                        </label>
                        <label class="rifa-field">
                            <span>"Número de entradas"</span>
                            <input
                                type="number"
                                min="1"
                                disabled=move || {
                                    draft.get().modalidad_tickets != TicketMode::Limitado
                                }
                                prop:value=move || draft.get().cantidad_tickets.to_string()
                                on:input=move |ev| {
                                    draft.update(|d| {
                                        d.cantidad_tickets =
                                            event_target_value(&ev).parse().unwrap_or(0);
                                    });
                                }
                            />
                        </label>
                    </div>

                    <div class="rifa-field-row">
                        <label class="rifa-field">
                            <span>"Valor del billete"</span>
                            <input
                                type="number"
                                min="0.01"
                                step="0.01"
                                prop:value=move || draft.get().valor_ticket.to_string()
                                on:input=move |ev| {
                                    draft.update(|d| {
                                        d.valor_ticket =
                                            event_target_value(&ev).parse().unwrap_or(0.0);
                                    });
                                }
                            />
                        </label>
                        <label class="rifa-field">
                            <span>"Modalidad del Premio"</span>
                            <select on:change=move |ev| {
                                draft.update(|d| {
                                    d.modalidad_premio =
                                        prize_tier_from_value(&event_target_value(&ev));
                                });
                            }>
                                <option value="minirifa">"Mini Rifa"</option>
                                <option value="superrifa">"Super Rifa"</option>
                                <option value="maxirifa">"Maxi Rifa"</option>
                            </select>
                        </label>
                    </div>

                    <div class="rifa-field-row">
                        <label class="rifa-field">
                            <span>"Fecha de inicio"</span>
                            <input
                                type="date"
                                prop:value=move || draft.get().fecha_inicio
                                on:input=move |ev| {
                                    draft.update(|d| d.fecha_inicio = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="rifa-field">
                            <span>"Fecha de finalización"</span>
                            <input
                                type="date"
                                prop:value=move || draft.get().fecha_fin
                                on:input=move |ev| {
                                    draft.update(|d| d.fecha_fin = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="rifa-field">
                            <span>"Hora de Ejecución"</span>
                            <input
                                type="time"
                                prop:value=move || draft.get().hora_sorteo
                                on:input=move |ev| {
                                    draft.update(|d| d.hora_sorteo = event_target_value(&ev));
                                }
                            />
                        </label>
                    </div>

                    <div class="rifa-upload">
                        <span>"Imagen de la Rifa"</span>
                        <input type="file" accept="image/*" on:change=on_file_change />
                        <Show when=move || image.get().is_some()>
                            <p class="rifa-upload__name">
                                "Archivo seleccionado: "
                                {move || image.get().map(|img| img.name).unwrap_or_default()}
                            </p>
                        </Show>
                        <Show when=move || preview_url.get().is_some()>
                            <img
                                class="rifa-upload__preview"
                                alt="Vista previa"
                                src=move || preview_url.get().unwrap_or_default()
                            />
                        </Show>
                    </div>

                    <div class="rifa-premios">
                        <div class="rifa-premios__header">
                            <h2>"Premios"</h2>
                            <button
                                type="button"
                                class="rifa-button rifa-button--small"
                                on:click=move |_| draft.update(RaffleDraft::add_premio)
                            >
                                "Añadir Premio"
                            </button>
                        </div>
                        {move || {
                            (0..premio_count.get())
                                .map(|i| {
                                    let initial_tipo =
                                        draft.with_untracked(|d| {
                                            d.premios.get(i).map_or(PrizeKind::Monetario, |p| p.tipo)
                                        });
                                    view! {
                                        <div class="rifa-premio">
                                            <input
                                                type="text"
                                                placeholder="Descripción"
                                                prop:value=move || {
                                                    draft.with(|d| {
                                                        d.premios
                                                            .get(i)
                                                            .map(|p| p.descripcion.clone())
                                                            .unwrap_or_default()
                                                    })
                                                }
                                                on:input=move |ev| {
                                                    draft.update(|d| {
                                                        if let Some(p) = d.premios.get_mut(i) {
                                                            p.descripcion = event_target_value(&ev);
                                                        }
                                                    });
                                                }
                                            />
                                            <input
                                                type="number"
                                                min="0.01"
                                                step="0.01"
                                                placeholder="Valor"
                                                prop:value=move || {
                                                    draft.with(|d| {
                                                        d.premios
                                                            .get(i)
                                                            .map(|p| p.valor.to_string())
                                                            .unwrap_or_default()
                                                    })
                                                }
                                                on:input=move |ev| {
                                                    draft.update(|d| {
                                                        if let Some(p) = d.premios.get_mut(i) {
                                                            p.valor = event_target_value(&ev)
                                                                .parse()
                                                                .unwrap_or(0.0);
                                                        }
                                                    });
                                                }
                                            />
                                            <select on:change=move |ev| {
                                                draft.update(|d| {
                                                    if let Some(p) = d.premios.get_mut(i) {
                                                        p.tipo = prize_kind_from_value(
                                                            &event_target_value(&ev),
                                                        );
                                                    }
                                                });
                                            }>
                                                <option
                                                    value="monetario"
                                                    selected=initial_tipo == PrizeKind::Monetario
                                                >
                                                    "Valor Monetario"
                                                </option>
                                                <option
                                                    value="fisico"
                                                    selected=initial_tipo == PrizeKind::Fisico
                                                >
                                                    "Producto Físico"
                                                </option>
                                                <option
                                                    value="servicio"
                                                    selected=initial_tipo == PrizeKind::Servicio
                                                >
                                                    "Servicio"
                                                </option>
                                            </select>
                                            <button
                                                type="button"
                                                class="rifa-premio__remove"
                                                disabled=move || premio_count.get() <= 1
                                                on:click=move |_| {
                                                    draft.update(|d| d.remove_premio(i));
                                                }
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <p class="rifa-premios__total">
                            {move || {
                                format!(
                                    "Valor total de premios: ${:.2}",
                                    draft.get().total_prize_value(),
                                )
                            }}
                        </p>
                    </div>

                    <button class="rifa-button" type="submit" disabled=busy>
                        {move || if busy() { "Creando..." } else { "Crear Rifa" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
