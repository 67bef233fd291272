use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page section-container">
            <style>
                {r#"
                    .not-found-page {
                        min-height: 100vh; display: flex; flex-direction: column;
                        align-items: center; justify-content: center; text-align: center;
                    }
                    .not-found-page h1 { font-size: 5rem; margin: 0; }
                    .not-found-page p { color: #4b5563; margin-bottom: 2rem; }
                "#}
            </style>
            <h1 class="gradient-text">{"404"}</h1>
            <p>{"Halaman yang Anda cari tidak ditemukan."}</p>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"Kembali ke Beranda"}
            </Link<Route>>
        </div>
    }
}
