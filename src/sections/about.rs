use yew::prelude::*;

use crate::components::entrance::{entrance_class, use_entrance};
use crate::config::Section;
use crate::content::{ABOUT_STATS, MOTTO};
use crate::particles::component::ParticleCanvas;

#[function_component(About)]
pub fn about() -> Html {
    let visible = use_entrance(200);

    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about { position: relative; overflow: hidden; padding: 5rem 0; background: #fff; }
                    .about-header { text-align: center; margin-bottom: 4rem; }
                    .about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
                    .about-copy p { font-size: 1.1rem; line-height: 1.7; color: #374151; }
                    .about-stats { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-top: 2rem; }
                    .about-stat {
                        padding: 1.5rem; text-align: center; border-radius: 0.75rem;
                        background: linear-gradient(135deg, #ecfeff, #cffafe);
                    }
                    .about-stat-value { font-size: 1.9rem; font-weight: 700; color: #0891b2; }
                    .about-stat-label { font-weight: 500; color: #374151; }
                    .about-card { padding: 2rem; margin-bottom: 2rem; }
                    .about-card-title { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
                    .about-card-title h3 { margin: 0; font-size: 1.5rem; }
                    .about-card-icon {
                        width: 3rem; height: 3rem; border-radius: 0.75rem;
                        display: flex; align-items: center; justify-content: center; font-size: 1.4rem;
                    }
                    .about-quote { padding-left: 1.5rem; border-left: 3px solid #a5f3fc; font-size: 1.1rem; line-height: 1.7; }
                    .about-motto {
                        margin-top: 1.5rem; padding: 1rem; border-radius: 0.5rem;
                        background: #ecfeff; color: #0e7490; font-weight: 500; text-align: center;
                    }
                    @media (max-width: 1024px) { .about-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <ParticleCanvas preset={Section::About} />
            <div class={classes!("section-container", entrance_class(visible))}>
                <div class="about-header">
                    <h2 class="section-title">{"Tentang "}<span class="gradient-text">{"Perusahaan"}</span></h2>
                    <p class="section-subtitle">
                        {"99 Aero Power adalah perusahaan yang bergerak di dalam bidang teknologi digital, yang menyediakan jasa pembuatan dan pengembang aplikasi, alias software development."}
                    </p>
                </div>

                <div class="about-grid">
                    <div class="about-copy">
                        <p>
                            {"Sebuah software house akan membantu kebutuhan para pebisnis dalam mengembangkan software maupun aplikasi lainnya. Kini, kehadiran Software house menjadi semakin penting dan semakin dibutuhkan bagi banyak perusahaan, karena akan membuat semuanya menjadi semakin praktis serta lebih mudah."}
                        </p>
                        <p>
                            {"Segera otomatiskan aktivitas pekerjaan Anda dengan menggunakan aplikasi. Mari diskusikan permasalahan Anda dan dapatkan solusi serta penawaran terbaik dari kami."}
                        </p>
                        <div class="about-stats">
                            { for ABOUT_STATS.iter().map(|stat| html! {
                                <div class="about-stat">
                                    <div class="about-stat-value">{stat.value}</div>
                                    <div class="about-stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div>
                        <div class="card about-card">
                            <div class="about-card-title">
                                <div class="about-card-icon gradient-bg">{"👁️"}</div>
                                <h3>{"Visi"}</h3>
                            </div>
                            <p class="about-quote">
                                {"99 Aero Power Menjadi Perusahaan Berbasis IT yang dapat memberikan solusi terbaik untuk semua kalangan"}
                            </p>
                            <p class="about-motto">{format!("\"{}\"", MOTTO)}</p>
                        </div>

                        <div class="card about-card">
                            <div class="about-card-title">
                                <div class="about-card-icon gradient-bg">{"🎯"}</div>
                                <h3>{"Misi"}</h3>
                            </div>
                            <p>
                                {"Kami Berkomitmen untuk memberikan pelayan terbaik dan dapat memberikan solusi untuk permasalahan IT. Terdapat berbagai layanan yang dapat kami sediakan untuk anda. Kami membrikan layanan dalam pembuatan (Website Development, Mobile App Development, Ecommerce, Company Profile, UI UX Design)."}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
