use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::entrance::{entrance_class, use_entrance};
use crate::config::SUBMIT_DELAY_MS;
use crate::content::{BUSINESS_HOURS, CONTACT_CHANNELS, PHONE_LINK};

#[derive(Serialize, Default, Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    /// Maps an input's `name` attribute to its field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "company" => Some(Self::Company),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Applies an input event keyed by the element's `name`. Edits are
    /// refused while a submit is in flight. Returns whether the form changed.
    pub fn apply_input(&mut self, name: &str, value: String, submitting: bool) -> bool {
        if submitting {
            return false;
        }
        match ContactField::from_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let submitting = use_state(|| false);
    let visible = use_entrance(200);

    let update = {
        let form = form.clone();
        let submitting = submitting.clone();
        move |name: String, value: String| {
            let mut next = (*form).clone();
            if next.apply_input(&name, value, *submitting) {
                form.set(next);
            }
        }
    };

    let on_input = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.name(), input.value());
        })
    };

    let on_textarea = Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        update(input.name(), input.value());
    });

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                match serde_json::to_string(&*form) {
                    Ok(payload) => gloo_console::log!(format!("Form submitted: {}", payload)),
                    Err(e) => log::warn!("Failed to serialize contact form: {}", e),
                }
                let mut cleared = (*form).clone();
                cleared.reset();
                form.set(cleared);
                submitting.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact { padding: 5rem 0; background: #fff; }
                    .contact-header { text-align: center; margin-bottom: 4rem; }
                    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
                    .contact-form { padding: 2rem; }
                    .contact-form h3, .contact-info h3 { font-size: 1.5rem; margin: 0 0 1.5rem; }
                    .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                    .contact-field { margin-bottom: 1.5rem; }
                    .contact-field label { display: block; margin-bottom: 0.5rem; font-size: 0.9rem; font-weight: 500; color: #374151; }
                    .contact-field input, .contact-field textarea {
                        width: 100%; box-sizing: border-box; padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .contact-field input:focus, .contact-field textarea:focus {
                        outline: none; border-color: transparent; box-shadow: 0 0 0 2px #06b6d4;
                    }
                    .contact-field textarea { resize: none; }
                    .contact-form .btn-primary { width: 100%; justify-content: center; }
                    .contact-channels { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-bottom: 2rem; }
                    .contact-channel { padding: 1.5rem; text-align: center; }
                    .contact-channel-icon {
                        width: 3rem; height: 3rem; margin: 0 auto 1rem; border-radius: 0.75rem;
                        display: flex; align-items: center; justify-content: center; font-size: 1.4rem;
                    }
                    .contact-channel h4 { margin: 0 0 0.5rem; }
                    .contact-channel a { color: #0891b2; font-size: 0.9rem; }
                    .contact-channel p { margin: 0; color: #4b5563; font-size: 0.9rem; white-space: pre-line; }
                    .contact-hours { padding: 1.5rem; }
                    .contact-hours h4 { margin: 0 0 1rem; }
                    .contact-hours-row { display: flex; justify-content: space-between; margin-bottom: 0.5rem; color: #4b5563; }
                    .contact-hours-row span:last-child { font-weight: 500; }
                    .contact-cta {
                        margin-top: 2rem; padding: 1.5rem; text-align: center; color: #fff;
                        background: linear-gradient(90deg, #06b6d4, #0891b2);
                    }
                    .contact-cta a {
                        display: inline-block; margin-top: 1rem; padding: 0.5rem 1.5rem; border-radius: 0.5rem;
                        background: #fff; color: #0891b2; font-weight: 600;
                    }
                    @media (max-width: 1024px) {
                        .contact-grid, .contact-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class={classes!("section-container", entrance_class(visible))}>
                <div class="contact-header">
                    <h2 class="section-title">{"Hubungi "}<span class="gradient-text">{"Kami"}</span></h2>
                    <p class="section-subtitle">
                        {"Siap membantu mewujudkan ide digital Anda. Mari diskusikan project Anda bersama tim ahli kami"}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="card contact-form">
                        <h3>{"Kirim Pesan"}</h3>
                        <form {onsubmit}>
                            <div class="contact-row">
                                <div class="contact-field">
                                    <label for="contact-name">{"Nama Lengkap *"}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        name="name"
                                        required=true
                                        placeholder="Masukkan nama lengkap"
                                        value={form.name.clone()}
                                        disabled={*submitting}
                                        oninput={on_input.clone()}
                                    />
                                </div>
                                <div class="contact-field">
                                    <label for="contact-email">{"Email *"}</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        name="email"
                                        required=true
                                        placeholder="nama@email.com"
                                        value={form.email.clone()}
                                        disabled={*submitting}
                                        oninput={on_input.clone()}
                                    />
                                </div>
                            </div>
                            <div class="contact-field">
                                <label for="contact-company">{"Nama Perusahaan"}</label>
                                <input
                                    id="contact-company"
                                    type="text"
                                    name="company"
                                    placeholder="Nama perusahaan (opsional)"
                                    value={form.company.clone()}
                                    disabled={*submitting}
                                    oninput={on_input}
                                />
                            </div>
                            <div class="contact-field">
                                <label for="contact-message">{"Pesan *"}</label>
                                <textarea
                                    id="contact-message"
                                    name="message"
                                    rows="6"
                                    required=true
                                    placeholder="Ceritakan tentang project Anda..."
                                    value={form.message.clone()}
                                    disabled={*submitting}
                                    oninput={on_textarea}
                                />
                            </div>
                            <button type="submit" class="btn-primary" disabled={*submitting}>
                                if *submitting {
                                    {"Mengirim..."}
                                } else {
                                    {"Kirim Pesan ➤"}
                                }
                            </button>
                        </form>
                    </div>

                    <div class="contact-info">
                        <h3>{"Informasi Kontak"}</h3>
                        <div class="contact-channels">
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <div class="card contact-channel">
                                    <div class="contact-channel-icon gradient-bg">{channel.icon}</div>
                                    <h4>{channel.title}</h4>
                                    {
                                        match channel.link {
                                            Some(href) => html! { <a {href}>{channel.info}</a> },
                                            None => html! { <p>{channel.info}</p> },
                                        }
                                    }
                                </div>
                            }) }
                        </div>

                        <div class="card contact-hours">
                            <h4>{"🕘 Jam Operasional"}</h4>
                            { for BUSINESS_HOURS.iter().map(|slot| html! {
                                <div class="contact-hours-row">
                                    <span>{slot.days}</span>
                                    <span>{slot.hours}</span>
                                </div>
                            }) }
                        </div>

                        <div class="card contact-cta">
                            <h4>{"Konsultasi Gratis!"}</h4>
                            <p>{"Dapatkan konsultasi gratis untuk project Anda. Tim ahli kami siap membantu."}</p>
                            <a href={PHONE_LINK}>{"Hubungi Sekarang"}</a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Budi".into(),
            email: "budi@example.com".into(),
            company: "PT Contoh".into(),
            message: "Halo".into(),
        }
    }

    #[test]
    fn setting_one_field_leaves_the_rest() {
        let mut form = filled();
        form.set(ContactField::Email, "a@b.c".into());
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.name, "Budi");
        assert_eq!(form.company, "PT Contoh");
        assert_eq!(form.message, "Halo");
    }

    #[test]
    fn reset_empties_every_field() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, ContactForm::default());
        assert!(form.name.is_empty() && form.email.is_empty());
        assert!(form.company.is_empty() && form.message.is_empty());
    }

    #[test]
    fn typing_while_submitting_is_refused() {
        let mut form = filled();
        assert!(!form.apply_input("email", "late@b.c".into(), true));
        assert_eq!(form, filled());

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn typing_when_idle_updates_the_named_field() {
        let mut form = filled();
        assert!(form.apply_input("company", "PT Baru".into(), false));
        assert_eq!(form.company, "PT Baru");
        assert_eq!(form.name, "Budi");
        assert!(!form.apply_input("phone", "123".into(), false));
    }

    #[test]
    fn input_names_map_to_fields() {
        assert_eq!(ContactField::from_name("name"), Some(ContactField::Name));
        assert_eq!(ContactField::from_name("company"), Some(ContactField::Company));
        assert_eq!(ContactField::from_name("phone"), None);
    }

    #[test]
    fn payload_carries_all_four_fields() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Budi");
        assert_eq!(json["email"], "budi@example.com");
        assert_eq!(json["company"], "PT Contoh");
        assert_eq!(json["message"], "Halo");
    }
}
