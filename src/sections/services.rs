use yew::prelude::*;

use crate::components::entrance::{entrance_class, stagger, use_entrance};
use crate::config::Section;
use crate::content::{Service, SERVICES};
use crate::particles::component::ParticleCanvas;

#[derive(Properties, PartialEq)]
struct CardProps {
    service: Service,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &CardProps) -> Html {
    let visible = use_entrance(stagger(300, props.index, 100));
    let service = &props.service;

    html! {
        <div class={classes!("card", "service-card", entrance_class(visible))}>
            <div class="service-icon gradient-bg">{service.icon}</div>
            <h3>{service.title}</h3>
            <p class="service-description">{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <a href="#contact" class="service-more">{"Pelajari Lebih Lanjut →"}</a>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let banner_visible = use_entrance(700);

    html! {
        <section id="services" class="services">
            <style>
                {r#"
                    .services {
                        position: relative; overflow: hidden; padding: 5rem 0;
                        background: linear-gradient(135deg, #f9fafb, #eff6ff);
                    }
                    .services-header { text-align: center; margin-bottom: 4rem; }
                    .services-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .service-card { padding: 2rem; text-align: center; transition: transform 0.3s ease, opacity 0.7s ease; }
                    .service-card.visible:hover { transform: scale(1.05); }
                    .service-icon {
                        width: 4rem; height: 4rem; margin: 0 auto 1rem; border-radius: 1rem;
                        display: flex; align-items: center; justify-content: center; font-size: 2rem;
                    }
                    .service-description { color: #4b5563; line-height: 1.7; }
                    .service-features { list-style: none; padding: 0; margin: 1.5rem 0; text-align: left; }
                    .service-features li { display: flex; align-items: center; gap: 0.75rem; font-size: 0.9rem; margin-bottom: 0.75rem; }
                    .service-features li::before {
                        content: ''; width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #06b6d4;
                    }
                    .service-more {
                        display: block; padding-top: 1.5rem; border-top: 1px solid #f3f4f6;
                        color: #0891b2; font-weight: 500;
                    }
                    .services-banner {
                        margin-top: 4rem; padding: 2rem; text-align: center; color: #fff;
                        background: linear-gradient(90deg, #06b6d4, #0891b2);
                    }
                    .services-banner a {
                        display: inline-block; margin-top: 1rem; padding: 0.75rem 2rem; border-radius: 0.5rem;
                        background: #fff; color: #0891b2; font-weight: 600;
                    }
                    @media (max-width: 1024px) { .services-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <ParticleCanvas preset={Section::Services} />
            <div class="section-container">
                <div class="services-header">
                    <h2 class="section-title">{"Layanan "}<span class="gradient-text">{"Kami"}</span></h2>
                    <p class="section-subtitle">{"Bekerja dengan Kreatif untuk Perkembangan Bisnis Anda"}</p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard service={*service} {index} />
                    }) }
                </div>

                <div class={classes!("card", "services-banner", entrance_class(banner_visible))}>
                    <h3>{"Siap Memulai Project Anda?"}</h3>
                    <p>{"Mari diskusikan kebutuhan bisnis Anda dan dapatkan solusi terbaik dari tim ahli kami"}</p>
                    <a href="#contact">{"Konsultasi Gratis →"}</a>
                </div>
            </div>
        </section>
    }
}
