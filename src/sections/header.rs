use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SCROLL_THRESHOLD;
use crate::content::NAV_ITEMS;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = is_scrolled(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Let the anchor navigate, just fold the menu away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                        width: 90%;
                        max-width: 64rem;
                        transition: all 0.5s ease;
                    }
                    .site-header.scrolled {
                        width: 95%;
                        max-width: 72rem;
                    }
                    .site-header-shell {
                        position: relative;
                        padding: 0.9rem 1.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.8);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(40px);
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.15);
                        transition: all 0.5s ease;
                    }
                    .site-header.scrolled .site-header-shell {
                        background: rgba(255, 255, 255, 0.9);
                        box-shadow: 0 10px 15px rgba(15, 23, 42, 0.1);
                    }
                    .site-header.menu-open .site-header-shell {
                        border-radius: 1.5rem;
                    }
                    .site-header-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .brand-mark {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-size: 1.4rem;
                    }
                    .brand-name { margin: 0; font-size: 1.1rem; font-weight: 700; }
                    .brand-sub { margin: -0.2rem 0 0; font-size: 0.85rem; color: #0891b2; font-weight: 500; }
                    .desktop-nav { display: flex; gap: 1.5rem; }
                    .desktop-nav a, .mobile-nav a {
                        font-weight: 500;
                        color: #374151;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .desktop-nav a:hover, .mobile-nav a:hover {
                        color: #0891b2;
                        background: #ecfeff;
                    }
                    .header-cta {
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        color: #fff;
                        font-weight: 600;
                        background: linear-gradient(90deg, #06b6d4, #0891b2);
                    }
                    .burger-menu {
                        display: none;
                        background: rgba(243, 244, 246, 0.8);
                        border: none;
                        border-radius: 9999px;
                        padding: 0.75rem;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 1.5rem;
                        height: 2px;
                        margin: 0.3rem 0;
                        background: #374151;
                        transition: all 0.3s ease;
                    }
                    .menu-open .burger-menu span:nth-child(1) { transform: translateY(0.45rem) rotate(45deg); }
                    .menu-open .burger-menu span:nth-child(2) { opacity: 0; }
                    .menu-open .burger-menu span:nth-child(3) { transform: translateY(-0.45rem) rotate(-45deg); }
                    .mobile-nav {
                        display: none;
                        flex-direction: column;
                        gap: 0.5rem;
                        overflow: hidden;
                        max-height: 0;
                        opacity: 0;
                        transition: all 0.5s ease-in-out;
                    }
                    .header-spacer { height: 6rem; }
                    @media (max-width: 1024px) {
                        .desktop-nav, .site-header-row > .header-cta { display: none; }
                        .burger-menu { display: block; }
                        .mobile-nav { display: flex; }
                        .menu-open .mobile-nav {
                            max-height: 24rem;
                            opacity: 1;
                            margin-top: 1.5rem;
                            padding-top: 1.5rem;
                            border-top: 1px solid rgba(229, 231, 235, 0.5);
                        }
                        .mobile-nav .header-cta { text-align: center; margin-top: 1rem; }
                    }
                "#}
            </style>
            <header class={classes!("site-header", scrolled.then(|| "scrolled"), (*menu_open).then(|| "menu-open"))}>
                <div class="site-header-shell">
                    <div class="site-header-row">
                        <a href="#" class="brand">
                            <div class="brand-mark gradient-bg">{"🌐"}</div>
                            <div>
                                <h1 class="brand-name">{"99 AERO"}</h1>
                                <p class="brand-sub">{"POWER"}</p>
                            </div>
                        </a>

                        <nav class="desktop-nav">
                            { for NAV_ITEMS.iter().map(|item| html! {
                                <a href={item.href}>{item.label}</a>
                            }) }
                        </nav>

                        <a href="#contact" class="header-cta">{"Hubungi Kami"}</a>

                        <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>

                    <nav class="mobile-nav">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a href={item.href} onclick={close_menu.clone()}>{item.label}</a>
                        }) }
                        <a href="#contact" class="header-cta" onclick={close_menu.clone()}>{"Hubungi Kami"}</a>
                    </nav>
                </div>
            </header>
            <div class="header-spacer"></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
    }
}
