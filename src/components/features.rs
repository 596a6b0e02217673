//! Feature blurbs section of the landing page.

use leptos::prelude::*;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features" id="beneficios">
            <h3 class="features__kicker">"Bienvenido"</h3>
            <h2>"Alcanza en el mundo de las rifas"</h2>
            <p class="features__body">
                "Publica tu rifa con premios, fechas y tickets en un solo formulario. \
                 Los participantes compran en línea y el sorteo se ejecuta a la hora \
                 que tú definas."
            </p>
            <ul class="features__list">
                <li>"Tickets limitados o ilimitados, tú decides."</li>
                <li>"Premios monetarios, físicos o de servicio."</li>
                <li>"Resultados publicados al instante."</li>
            </ul>
        </section>
    }
}
