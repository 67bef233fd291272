use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::content::{
    ADDRESS_LINES, BUSINESS_HOURS, COMPANY, EMAIL, EMAIL_LINK, FOOTER_LINKS, FOOTER_SERVICES, LEGAL_NAME, MOTTO,
    PHONE_DISPLAY, PHONE_LINK, SOCIAL_LINKS,
};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, COMPANY)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    let on_back_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #111827; color: #fff; }
                    .site-footer .section-container { padding-top: 4rem; padding-bottom: 4rem; }
                    .footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 2rem; }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
                    .footer-brand-mark {
                        width: 3rem; height: 3rem; border-radius: 0.75rem;
                        display: flex; align-items: center; justify-content: center; font-weight: 700;
                    }
                    .footer-brand h3 { margin: 0; font-size: 1.25rem; }
                    .footer-brand p { margin: 0; font-size: 0.9rem; color: #9ca3af; }
                    .footer-about { color: #d1d5db; line-height: 1.7; margin-bottom: 1.5rem; }
                    .footer-contact a { display: block; color: #d1d5db; margin-bottom: 0.75rem; }
                    .footer-address { color: #d1d5db; font-size: 0.9rem; line-height: 1.6; margin: 0; }
                    .footer-contact a:hover, .footer-list a:hover { color: #22d3ee; }
                    .footer-social { display: flex; gap: 1rem; margin-top: 1.5rem; }
                    .footer-social a {
                        width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; background: #1f2937; color: #fff;
                        display: flex; align-items: center; justify-content: center; font-size: 0.8rem;
                        transition: background 0.2s ease;
                    }
                    .footer-social a:hover { background: #0891b2; }
                    .site-footer h4 { font-size: 1.1rem; margin: 0 0 1.5rem; }
                    .footer-list { list-style: none; padding: 0; margin: 0; }
                    .footer-list li { margin-bottom: 0.75rem; color: #d1d5db; }
                    .footer-list a { color: #d1d5db; }
                    .footer-hours { margin-top: 2rem; }
                    .footer-hours div { display: flex; justify-content: space-between; font-size: 0.9rem; color: #d1d5db; margin-bottom: 0.25rem; }
                    .footer-bottom { border-top: 1px solid #1f2937; }
                    .footer-bottom .section-container {
                        display: flex; align-items: center; justify-content: space-between; flex-wrap: wrap; gap: 1rem;
                        padding-top: 1.5rem; padding-bottom: 1.5rem; font-size: 0.9rem; color: #9ca3af;
                    }
                    .back-to-top {
                        width: 2.5rem; height: 2.5rem; border: none; border-radius: 0.5rem; cursor: pointer;
                        background: #0891b2; color: #fff; font-size: 1.1rem;
                    }
                    .back-to-top:hover { background: #0e7490; }
                    @media (max-width: 1024px) { .footer-grid { grid-template-columns: 1fr 1fr; } }
                    @media (max-width: 640px) { .footer-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="section-container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <div class="footer-brand-mark gradient-bg">{"99"}</div>
                            <div>
                                <h3>{COMPANY}</h3>
                                <p>{LEGAL_NAME}</p>
                            </div>
                        </div>
                        <p class="footer-about">
                            {"Software house terpercaya yang menyediakan solusi teknologi digital untuk kemajuan bisnis Anda. "}
                            {MOTTO}{"."}
                        </p>
                        <div class="footer-contact">
                            <a href={PHONE_LINK}>{"📞 "}{PHONE_DISPLAY}</a>
                            <a href={EMAIL_LINK}>{"✉️ "}{EMAIL}</a>
                            <p class="footer-address">{"📍 "}{ADDRESS_LINES.join(", ")}</p>
                        </div>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a href={social.href} aria-label={social.label} title={social.label}>{social.short}</a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Layanan"}</h4>
                        <ul class="footer-list">
                            { for FOOTER_SERVICES.iter().map(|service| html! { <li>{*service}</li> }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Navigasi"}</h4>
                        <ul class="footer-list">
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Jam Operasional"}</h4>
                        <div class="footer-hours">
                            { for BUSINESS_HOURS.iter().map(|slot| html! {
                                <div>
                                    <span>{slot.short_days}</span>
                                    <span>{slot.hours}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="section-container">
                    <span>{copyright_line(year)}</span>
                    <button class="back-to-top" aria-label="Back to top" onclick={on_back_to_top}>{"↑"}</button>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_company_and_year() {
        assert_eq!(copyright_line(2025), "© 2025 99 Aero Power. All rights reserved.");
    }
}
