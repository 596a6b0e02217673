//! Landing page assembling the marketing sections.

use leptos::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::features::FeaturesSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::products::ProductsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <Hero />
            <ProductsSection />
            <FeaturesSection />
            <FaqSection />
            <Footer />
        </main>
    }
}
