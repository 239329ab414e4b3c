use yew::prelude::*;

use crate::components::{
    call_to_action::CallToAction, characters::Characters, footer::Footer, gameplay::Gameplay,
    hero::Hero, platforms::Platforms, story::Story,
};
use crate::signup::SignupClient;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub signups: SignupClient,
}

/// The whole landing page, sections in scroll order.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <Story />
            <Gameplay />
            <Characters />
            <Platforms />
            <CallToAction signups={props.signups.clone()} />
            <Footer />
        </div>
    }
}
