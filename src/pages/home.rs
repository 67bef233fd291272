use yew::prelude::*;

use crate::sections::{
    about::About, advantages::Advantages, contact::Contact, footer::Footer, header::Header,
    hero::Hero, portfolio::Portfolio, services::Services,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Header />
            <main>
                <Hero />
                <About />
                <Services />
                <Advantages />
                <Portfolio />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
