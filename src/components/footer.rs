//! Site footer with brand, section links, and the copyright line.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__brand">"RIFÁCIL"</span>
            <nav class="footer__links">
                <a href="/">"Inicio"</a>
                <a href="/nosotros">"Nosotros"</a>
                <a href="/blog">"Blog"</a>
            </nav>
            <p class="footer__copyright">"© 2026 Rifácil. Todos los derechos reservados."</p>
        </footer>
    }
}
