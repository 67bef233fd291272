use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use log::warn;

use crate::config::{self, Section};
use super::animation::FieldAnimation;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub preset: Section,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |preset| {
            let mut animation = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => match FieldAnimation::start(canvas, config::field_preset(*preset)) {
                    Ok(animation) => Some(animation),
                    Err(e) => {
                        warn!("{:?} particles disabled: {:?}", preset, e);
                        None
                    }
                },
                None => {
                    warn!("{:?} particles disabled: canvas not mounted", preset);
                    None
                }
            };
            move || {
                if let Some(animation) = animation.as_mut() {
                    animation.stop();
                }
            }
        }, props.preset);
    }

    html! {
        <canvas
            ref={canvas_ref}
            class={classes!("particle-canvas", props.class.clone())}
            aria-hidden="true"
        />
    }
}
