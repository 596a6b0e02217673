//! FAQ accordion ("Rifácil te brinda"): one panel open at a time.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use leptos::prelude::*;

const PANELS: [(&str, &str); 4] = [
    (
        "Rifa personalizada",
        "Define nombre, imagen, premios y modalidad de tickets; la rifa queda publicada con tu marca.",
    ),
    (
        "Fácil de usar",
        "Un solo formulario para crear la rifa y un enlace para compartirla donde quieras.",
    ),
    (
        "Administrable",
        "Sigue la venta de tickets y los premios entregados desde tu panel de organizador.",
    ),
    (
        "Proceso rápido",
        "El sorteo se ejecuta automáticamente a la hora programada y el resultado se publica al instante.",
    ),
];

/// Next open-panel state after clicking panel `clicked`: clicking the open
/// panel closes it, anything else opens that panel.
fn toggle_panel(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) { None } else { Some(clicked) }
}

#[component]
pub fn FaqSection() -> impl IntoView {
    // First panel open by default, matching the marketing layout.
    let open = RwSignal::new(Some(0_usize));

    view! {
        <section class="faq">
            <h2>"Rifácil te brinda"</h2>
            <div class="faq__panels">
                {PANELS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, body))| {
                        view! {
                            <div class="faq__panel" class:faq__panel--open=move || open.get() == Some(i)>
                                <button
                                    type="button"
                                    class="faq__summary"
                                    on:click=move |_| open.update(|o| *o = toggle_panel(*o, i))
                                >
                                    {*title}
                                </button>
                                <Show when=move || open.get() == Some(i)>
                                    <p class="faq__body">{*body}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
