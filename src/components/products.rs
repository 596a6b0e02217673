//! Raffle showcase: the horizontal card carousel on the landing page.
//!
//! DESIGN
//! ======
//! Cards are presentational; the carousel content is a static sample until a
//! public listing endpoint exists.

use leptos::prelude::*;

/// One showcased raffle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RafflePreview {
    pub date: &'static str,
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tickets: u32,
    pub image: &'static str,
}

/// Sample raffles shown while the platform has no public listing API.
pub fn sample_raffles() -> Vec<RafflePreview> {
    vec![
        RafflePreview {
            date: "15/09",
            time: "20:00",
            title: "Moto eléctrica 0 km",
            description: "Sorteo entre todos los tickets vendidos.",
            tickets: 500,
            image: "/img/rifa-moto.jpg",
        },
        RafflePreview {
            date: "22/09",
            time: "19:30",
            title: "Cena para dos",
            description: "Una noche completa en el casco antiguo.",
            tickets: 150,
            image: "/img/rifa-cena.jpg",
        },
        RafflePreview {
            date: "30/09",
            time: "21:00",
            title: "Smart TV 55\"",
            description: "Entrega a domicilio en todo el país.",
            tickets: 300,
            image: "/img/rifa-tv.jpg",
        },
        RafflePreview {
            date: "05/10",
            time: "18:00",
            title: "Bono de $500",
            description: "Premio en efectivo, transferido el mismo día.",
            tickets: 1000,
            image: "/img/rifa-bono.jpg",
        },
    ]
}

/// A single raffle card in the carousel.
#[component]
pub fn RaffleCard(preview: RafflePreview) -> impl IntoView {
    view! {
        <article class="raffle-card">
            <img class="raffle-card__image" src=preview.image alt=preview.title />
            <div class="raffle-card__meta">
                <span>{preview.date}</span>
                <span>{preview.time}</span>
            </div>
            <div class="raffle-card__body">
                <h3>{preview.title}</h3>
                <p>{preview.description}</p>
            </div>
            <span class="raffle-card__tickets">
                {preview.tickets} " Ticket a sortear"
            </span>
        </article>
    }
}

/// The "rifas activas" strip on the landing page.
#[component]
pub fn ProductsSection() -> impl IntoView {
    view! {
        <section class="products" id="rifas">
            <h2>"Rifas activas"</h2>
            <div class="products__carousel">
                {sample_raffles()
                    .into_iter()
                    .map(|preview| view! { <RaffleCard preview=preview /> })
                    .collect_view()}
            </div>
        </section>
    }
}
