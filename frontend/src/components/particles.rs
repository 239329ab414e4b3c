use web_sys::js_sys;
use yew::prelude::*;

use crate::state::particles::{scatter, ParticleField};

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    pub field: ParticleField,
    #[prop_or_default]
    pub class: Classes,
}

/// Floating decorative dots. Positions are drawn once per mount.
#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let field = props.field;
    let particles = use_state(move || scatter(js_sys::Date::now() as u64, &field));

    html! {
        <div class="particle-field" aria-hidden="true">
            { for particles.iter().map(|particle| html! {
                <div
                    class={classes!("particle", "floating", props.class.clone())}
                    style={particle.style()}
                />
            })}
        </div>
    }
}
