use log::info;
use yew::prelude::*;

use wilderland::components::theme::Theme;
use wilderland::config;
use wilderland::pages::home::Home;
use wilderland::signup::SignupClient;

#[function_component]
fn App() -> Html {
    let signups = use_memo(|_| SignupClient::from_config(), ());

    // Start at the hero on every load
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Theme />
            <Home signups={(*signups).clone()} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Wilderland");
    yew::Renderer::<App>::new().render();
}
