use yew::prelude::*;

use crate::components::entrance::{entrance_class, use_entrance};
use crate::config::Section;
use crate::content::{PortfolioItem, ALL_CATEGORIES, CATEGORIES, CLIENTS, PORTFOLIO_ITEMS};
use crate::particles::component::ParticleCanvas;

/// Items shown for `category`. The `"all"` sentinel bypasses filtering,
/// anything else is an exact match on the item's category.
pub fn filter_items<'a>(items: &'a [PortfolioItem], category: &str) -> Vec<&'a PortfolioItem> {
    if category == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category == category).collect()
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active_category = use_state(|| ALL_CATEGORIES);
    let visible = use_entrance(300);

    let shown = filter_items(PORTFOLIO_ITEMS, *active_category);

    html! {
        <section id="portfolio" class="portfolio">
            <style>
                {r#"
                    .portfolio {
                        position: relative; overflow: hidden; padding: 5rem 0;
                        background: linear-gradient(135deg, #f9fafb, #eff6ff);
                    }
                    .portfolio-header { text-align: center; margin-bottom: 4rem; }
                    .portfolio-filters { display: flex; justify-content: center; flex-wrap: wrap; gap: 1rem; margin-bottom: 3rem; }
                    .portfolio-filter {
                        padding: 0.75rem 1.5rem; border: none; border-radius: 9999px; cursor: pointer;
                        font-weight: 500; background: #fff; color: #4b5563;
                        box-shadow: 0 4px 6px rgba(15, 23, 42, 0.08);
                        transition: all 0.2s ease;
                    }
                    .portfolio-filter:hover { background: #ecfeff; color: #0891b2; }
                    .portfolio-filter.active { background: #06b6d4; color: #fff; box-shadow: 0 10px 15px rgba(6, 182, 212, 0.3); }
                    .portfolio-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                    .portfolio-card { overflow: hidden; }
                    .portfolio-banner {
                        height: 16rem; display: flex; flex-direction: column;
                        align-items: center; justify-content: center; color: #fff; text-align: center;
                    }
                    .portfolio-banner h3 { font-size: 1.5rem; margin: 0 0 0.5rem; }
                    .portfolio-body { padding: 1.5rem; }
                    .portfolio-meta { display: flex; gap: 1rem; font-size: 0.9rem; color: #4b5563; margin-bottom: 0.75rem; }
                    .portfolio-body p { color: #4b5563; line-height: 1.7; }
                    .portfolio-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
                    .portfolio-tag {
                        padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 500;
                        background: #cffafe; color: #0e7490;
                    }
                    .portfolio-body .btn-primary { width: 100%; justify-content: center; }
                    .portfolio-empty { grid-column: 1 / -1; text-align: center; color: #6b7280; }
                    .clients { margin-top: 5rem; }
                    .clients h3 { text-align: center; font-size: 1.5rem; margin-bottom: 3rem; }
                    .clients-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .client-card { padding: 1.5rem; text-align: center; transition: transform 0.3s ease; }
                    .client-card:hover { transform: scale(1.05); }
                    .client-logo {
                        width: 4rem; height: 4rem; margin: 0 auto 0.75rem; border-radius: 0.75rem;
                        display: flex; align-items: center; justify-content: center;
                        font-weight: 700; font-size: 1.1rem; color: #4b5563;
                        background: linear-gradient(135deg, #f3f4f6, #e5e7eb);
                    }
                    .client-card p { font-size: 0.9rem; font-weight: 500; color: #4b5563; margin: 0; }
                    @media (max-width: 1024px) {
                        .portfolio-grid { grid-template-columns: 1fr; }
                        .clients-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <ParticleCanvas preset={Section::Portfolio} />
            <div class={classes!("section-container", entrance_class(visible))}>
                <div class="portfolio-header">
                    <h2 class="section-title">{"Portfolio "}<span class="gradient-text">{"Kami"}</span></h2>
                    <p class="section-subtitle">
                        {"Beberapa project yang telah kami kerjakan dengan berbagai klien dari berbagai industri"}
                    </p>
                </div>

                <div class="portfolio-filters">
                    { for CATEGORIES.iter().map(|category| {
                        let onclick = {
                            let active_category = active_category.clone();
                            let id = category.id;
                            Callback::from(move |_: MouseEvent| active_category.set(id))
                        };
                        html! {
                            <button
                                class={classes!("portfolio-filter", (*active_category == category.id).then(|| "active"))}
                                {onclick}
                            >
                                {category.label}
                            </button>
                        }
                    }) }
                </div>

                <div class="portfolio-grid">
                    if shown.is_empty() {
                        <p class="portfolio-empty">{"Belum ada project di kategori ini."}</p>
                    }
                    { for shown.iter().map(|item| html! {
                        <div key={item.id} class="card portfolio-card">
                            <div
                                class="portfolio-banner"
                                style={format!("background: linear-gradient(135deg, {}, {});", item.colors.0, item.colors.1)}
                            >
                                <h3>{item.title}</h3>
                                <span>{item.year}</span>
                            </div>
                            <div class="portfolio-body">
                                <h3>{item.title}</h3>
                                <div class="portfolio-meta">
                                    <span>{"👤 "}{item.client}</span>
                                    <span>{"📅 "}{item.year}</span>
                                </div>
                                <p>{item.description}</p>
                                <div class="portfolio-tags">
                                    { for item.tags.iter().map(|tag| html! {
                                        <span class="portfolio-tag">{"🏷 "}{*tag}</span>
                                    }) }
                                </div>
                                <a href="#contact" class="btn-primary">{"Lihat Detail Project ↗"}</a>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="clients">
                    <h3>{"Klien "}<span class="gradient-text">{"Kami"}</span></h3>
                    <div class="clients-grid">
                        { for CLIENTS.iter().map(|client| html! {
                            <div class="card client-card">
                                <div class="client-logo">{client.logo}</div>
                                <p>{client.name}</p>
                            </div>
                        }) }
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
    fn web_returns_exactly_the_web_items() {
        let shown = filter_items(PORTFOLIO_ITEMS, "web");
        let expected: Vec<_> = PORTFOLIO_ITEMS.iter().filter(|i| i.category == "web").collect();
        assert_eq!(shown, expected);
        assert_eq!(shown.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn all_returns_everything_in_order() {
        let shown = filter_items(PORTFOLIO_ITEMS, ALL_CATEGORIES);
        assert_eq!(shown.len(), PORTFOLIO_ITEMS.len());
        assert!(shown.iter().zip(PORTFOLIO_ITEMS).all(|(a, b)| *a == b));
    }

    #[test]
    fn every_category_button_partitions_the_items() {
        let total: usize = CATEGORIES
            .iter()
            .filter(|c| c.id != ALL_CATEGORIES)
            .map(|c| filter_items(PORTFOLIO_ITEMS, c.id).len())
            .sum();
        assert_eq!(total, PORTFOLIO_ITEMS.len());
    }

    #[test]
    fn match_is_exact() {
        assert!(filter_items(PORTFOLIO_ITEMS, "Web").is_empty());
        assert!(filter_items(PORTFOLIO_ITEMS, "we").is_empty());
        assert!(filter_items(PORTFOLIO_ITEMS, "").is_empty());
    }
}
