use yew::prelude::*;

use crate::components::entrance::{entrance_class, use_entrance};
use crate::config::Section;
use crate::content::{HERO_STATS, LEGAL_NAME, MOTTO};
use crate::particles::component::ParticleCanvas;

const OFFERINGS: [(&str, &str); 3] = [
    ("🌐", "Website Development"),
    ("📱", "Mobile App Development"),
    ("💻", "Custom Software"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let copy_visible = use_entrance(100);
    let card_visible = use_entrance(400);

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        background: linear-gradient(135deg, #f9fafb, #eff6ff, #ecfeff);
                    }
                    .hero .section-container {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        padding-top: 5rem;
                        padding-bottom: 5rem;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: #cffafe;
                        color: #0e7490;
                        font-size: 0.9rem;
                        font-weight: 500;
                    }
                    .hero h1 { font-size: 3.75rem; line-height: 1.1; margin: 1rem 0; }
                    .hero-legal { font-size: 1.5rem; font-weight: 300; color: #4b5563; margin: 0; }
                    .hero-lead { font-size: 1.1rem; line-height: 1.7; color: #374151; max-width: 42rem; }
                    .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; margin: 2rem 0; }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        padding-top: 2rem;
                        border-top: 1px solid #e5e7eb;
                        text-align: center;
                    }
                    .hero-stat-value { font-size: 1.9rem; font-weight: 700; color: #0891b2; }
                    .hero-stat-label { font-size: 0.9rem; color: #4b5563; }
                    .hero-card { max-width: 28rem; margin: 0 auto; padding: 2rem; text-align: center; }
                    .hero-card-icon {
                        width: 4rem; height: 4rem; margin: 0 auto 1.5rem;
                        border-radius: 0.75rem; display: flex; align-items: center; justify-content: center;
                        font-size: 2rem;
                    }
                    .hero-offering { display: flex; align-items: center; gap: 0.75rem; margin-top: 0.75rem; text-align: left; }
                    .hero-offering-icon {
                        width: 2rem; height: 2rem; border-radius: 0.5rem; background: #cffafe;
                        display: flex; align-items: center; justify-content: center;
                    }
                    @media (max-width: 1024px) {
                        .hero .section-container { grid-template-columns: 1fr; }
                        .hero h1 { font-size: 2.5rem; }
                    }
                "#}
            </style>
            <ParticleCanvas preset={Section::Hero} />
            <div class="section-container">
                <div class={entrance_class(copy_visible)}>
                    <div class="hero-badge">{"🌐 Software House Terpercaya"}</div>
                    <h1>{"99 AERO "}<span class="gradient-text">{"POWER"}</span></h1>
                    <p class="hero-legal">{LEGAL_NAME}</p>
                    <p class="hero-lead">
                        {"Sejalan dengan perkembangan teknologi digital yang makin hari semakin pesat, nampaknya peran dari sebuah software house di dalam berbisnis pun menjadi semakin vital, apalagi demi kemajuan bisnis tersebut."}
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn-primary">{"Hubungi Kami →"}</a>
                        <a href="#portfolio" class="btn-secondary">{"Lihat Portfolio"}</a>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div>
                                <div class="hero-stat-value">{stat.value}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={entrance_class(card_visible)}>
                    <div class="card hero-card">
                        <div class="hero-card-icon gradient-bg">{"</>"}</div>
                        <h3>{MOTTO}</h3>
                        <p>{"Menghadirkan solusi teknologi terdepan untuk kemajuan bisnis Anda"}</p>
                        { for OFFERINGS.iter().map(|(icon, label)| html! {
                            <div class="hero-offering">
                                <div class="hero-offering-icon">{*icon}</div>
                                <span>{*label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
