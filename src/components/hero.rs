//! Landing hero: headline, pitch, and the two calls to action.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__copy">
                <h1>"Tu rifa, sin complicaciones"</h1>
                <p class="hero__subtitle">
                    "Crea, publica y sortea en minutos. Rifácil se encarga de los tickets, \
                     los pagos y el sorteo para que tú solo pienses en el premio."
                </p>
                <div class="hero__actions">
                    <a class="hero__button hero__button--primary" href="#rifas">"Jugar"</a>
                    <a class="hero__button" href="#beneficios">"Leer más"</a>
                </div>
            </div>
            <img class="hero__image" src="/img/tlf.png" alt="Rifácil en el teléfono" />
        </section>
    }
}
