use yew::prelude::*;
use web_sys::HtmlElement;

use crate::components::entrance::{entrance_class, stagger, use_entrance};
use crate::components::stat_counter::StatCounter;
use crate::config::Section;
use crate::content::{Advantage, ADVANTAGES, ADVANTAGE_STATS, TRUST_INDICATORS};
use crate::particles::component::ParticleCanvas;

const RESTING_TRANSFORM: &str = "perspective(1000px) rotateY(0deg) rotateX(0deg) translateZ(0px)";
const STAT_ICONS: [&str; 4] = ["⭐", "🏆", "⏱️", "📈"];

/// 3-d tilt for a card, given the pointer offset from the card centre.
pub fn tilt_transform(dx: f64, dy: f64, hovered: bool) -> String {
    format!(
        "perspective(1000px) rotateY({}deg) rotateX({}deg) translateZ({}px)",
        dx / 20.0,
        0.0 - dy / 20.0,
        if hovered { 20 } else { 0 }
    )
}

#[derive(Properties, PartialEq)]
struct CardProps {
    advantage: Advantage,
    index: usize,
}

#[function_component(AdvantageCard)]
fn advantage_card(props: &CardProps) -> Html {
    let visible = use_entrance(stagger(400, props.index, 150));
    let hovered = use_state(|| false);
    let card_ref = use_node_ref();

    let onmousemove = {
        let card_ref = card_ref.clone();
        let hovered = hovered.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let rect = card.get_bounding_client_rect();
                let dx = e.client_x() as f64 - rect.left() - rect.width() / 2.0;
                let dy = e.client_y() as f64 - rect.top() - rect.height() / 2.0;
                let _ = card.style().set_property("transform", &tilt_transform(dx, dy, *hovered));
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let card_ref = card_ref.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let _ = card.style().set_property("transform", RESTING_TRANSFORM);
            }
            hovered.set(false);
        })
    };

    let advantage = &props.advantage;

    html! {
        <div class={entrance_class(visible)}>
            <div
                ref={card_ref}
                class={classes!("advantage-card", (*hovered).then(|| "hovered"))}
                {onmousemove}
                {onmouseenter}
                {onmouseleave}
            >
                <div class="advantage-icon">{advantage.icon}</div>
                <h3>{advantage.title}</h3>
                <p>{advantage.description}</p>
                <ul class="advantage-benefits">
                    { for advantage.benefits.iter().map(|benefit| html! { <li>{"✔ "}{*benefit}</li> }) }
                </ul>
                <a href="#contact" class="advantage-more">{"Learn More →"}</a>
            </div>
        </div>
    }
}

#[function_component(Advantages)]
pub fn advantages() -> Html {
    let visible = use_entrance(200);

    html! {
        <section id="advantages" class="advantages">
            <style>
                {r#"
                    .advantages {
                        position: relative; overflow: hidden; padding: 5rem 0; color: #fff;
                        background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
                    }
                    .advantages .particle-canvas { opacity: 0.3; }
                    .advantages-header { text-align: center; margin-bottom: 5rem; }
                    .advantages-badge {
                        display: inline-block; padding: 0.5rem 1rem; margin-bottom: 1.5rem; border-radius: 9999px;
                        border: 1px solid rgba(103, 232, 249, 0.3); color: #a5f3fc;
                        background: linear-gradient(90deg, rgba(6, 182, 212, 0.2), rgba(8, 145, 178, 0.2));
                    }
                    .advantages-header h2 { font-size: 3.5rem; margin: 0 0 1.5rem; }
                    .advantages-header p { max-width: 48rem; margin: 0 auto; font-size: 1.2rem; color: #d1d5db; }
                    .advantages-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-bottom: 5rem; }
                    .stat-counter-card {
                        padding: 1.5rem; text-align: center; border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: linear-gradient(135deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
                    }
                    .stat-counter-icon { font-size: 1.5rem; margin-bottom: 1rem; }
                    .stat-counter-value { font-size: 1.9rem; font-weight: 700; color: #67e8f9; }
                    .stat-counter-label { color: rgba(255, 255, 255, 0.7); font-weight: 500; }
                    .advantages-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-bottom: 5rem; }
                    .advantage-card {
                        height: 100%; padding: 2rem; text-align: center; border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: linear-gradient(135deg, rgba(255, 255, 255, 0.15), rgba(255, 255, 255, 0.05));
                        transition: transform 0.5s ease, box-shadow 0.5s ease;
                    }
                    .advantage-card.hovered { box-shadow: 0 0 40px rgba(6, 182, 212, 0.3); }
                    .advantage-icon {
                        width: 5rem; height: 5rem; margin: 0 auto 1.5rem; border-radius: 1rem; font-size: 2.5rem;
                        display: flex; align-items: center; justify-content: center;
                        background: linear-gradient(135deg, #06b6d4, #0891b2);
                        transition: transform 0.5s ease;
                    }
                    .advantage-card.hovered .advantage-icon { transform: scale(1.1) rotate(12deg); }
                    .advantage-card p { color: #d1d5db; line-height: 1.7; }
                    .advantage-benefits { list-style: none; padding: 0; margin: 1.5rem 0; font-size: 0.9rem; color: #d1d5db; }
                    .advantage-benefits li { margin-bottom: 0.5rem; }
                    .advantage-more { color: #67e8f9; font-weight: 500; }
                    .advantages-cta {
                        max-width: 56rem; margin: 0 auto; padding: 2rem; text-align: center; border-radius: 1.5rem;
                        border: 1px solid rgba(103, 232, 249, 0.3);
                        background: linear-gradient(90deg, rgba(6, 182, 212, 0.2), rgba(8, 145, 178, 0.2));
                    }
                    .advantages-cta-actions { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; margin: 2rem 0; }
                    .advantages-cta-actions a {
                        padding: 1rem 2rem; border-radius: 1rem; font-weight: 600;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                    }
                    .advantages-cta-actions a.primary { border: none; background: linear-gradient(90deg, #06b6d4, #0891b2); }
                    .advantages-trust {
                        display: flex; justify-content: center; gap: 2rem; flex-wrap: wrap;
                        padding-top: 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.9rem; color: #d1d5db;
                    }
                    @media (max-width: 1024px) {
                        .advantages-grid { grid-template-columns: 1fr; }
                        .advantages-stats { grid-template-columns: repeat(2, 1fr); }
                        .advantages-header h2 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <ParticleCanvas preset={Section::Advantages} />
            <div class="section-container">
                <div class={classes!("advantages-header", entrance_class(visible))}>
                    <div class="advantages-badge">{"✨ Keunggulan Kami"}</div>
                    <h2>{"Mengapa Memilih "}<span class="gradient-text">{"Kami?"}</span></h2>
                    <p>{"Keunggulan kompetitif yang membuat kami menjadi pilihan terbaik untuk transformasi digital bisnis Anda"}</p>
                </div>

                <div class="advantages-stats">
                    { for ADVANTAGE_STATS.iter().zip(STAT_ICONS).enumerate().map(|(index, (stat, icon))| html! {
                        <StatCounter
                            value={stat.value}
                            label={stat.label}
                            {icon}
                            delay_ms={stagger(200, index, 200)}
                        />
                    }) }
                </div>

                <div class="advantages-grid">
                    { for ADVANTAGES.iter().enumerate().map(|(index, advantage)| html! {
                        <AdvantageCard advantage={*advantage} {index} />
                    }) }
                </div>

                <div class={classes!("advantages-cta", entrance_class(visible))}>
                    <h3>{"⭐ Bergabunglah dengan Klien Terpuaskan"}</h3>
                    <p>
                        {"Ribuan klien telah mempercayai kami untuk mentransformasi bisnis mereka. Saatnya giliran Anda merasakan keunggulan layanan kami."}
                    </p>
                    <div class="advantages-cta-actions">
                        <a href="#contact" class="primary">{"Mulai Sekarang →"}</a>
                        <a href="#services">{"👥 Lihat Testimoni"}</a>
                    </div>
                    <div class="advantages-trust">
                        { for TRUST_INDICATORS.iter().map(|item| html! { <span>{"✔ "}{*item}</span> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_leaves_card_flat() {
        assert_eq!(
            tilt_transform(0.0, 0.0, false),
            "perspective(1000px) rotateY(0deg) rotateX(0deg) translateZ(0px)"
        );
    }

    #[test]
    fn tilt_follows_pointer_and_lifts_when_hovered() {
        assert_eq!(
            tilt_transform(40.0, 20.0, true),
            "perspective(1000px) rotateY(2deg) rotateX(-1deg) translateZ(20px)"
        );
    }
}
