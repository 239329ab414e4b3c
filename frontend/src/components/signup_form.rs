use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::signup::{MailingList, SignupClient, SignupRequest};
use crate::state::email::{EmailField, SignupStatus};

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub client: SignupClient,
    pub list: MailingList,
    pub title: AttrValue,
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub blurb: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Email capture bound to local state. Submitting clears the field and hands
/// the address to the configured transport.
#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let field = use_state(EmailField::default);
    let status = use_state(SignupStatus::default);

    let oninput = {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*field).clone();
            next.on_change(input.value());
            field.set(next);
        })
    };

    let onsubmit = {
        let field = field.clone();
        let status = status.clone();
        let client = props.client.clone();
        let list = props.list;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*field).clone();
            let email = next.take_for_submit();
            field.set(next);

            info!("{:?} signup submitted", list);
            status.set(SignupStatus::Sending);
            let status = status.clone();
            let pending = client.submit(SignupRequest { email, list });
            spawn_local(async move {
                match pending.await {
                    Ok(_) => status.set(SignupStatus::Joined),
                    Err(reason) => {
                        warn!("{:?} signup rejected: {}", list, reason);
                        status.set(SignupStatus::Rejected(reason));
                    }
                }
            });
        })
    };

    html! {
        <form class={classes!("game-card", "signup-form", props.class.clone())} onsubmit={onsubmit}>
            <h3>{props.title.clone()}</h3>
            <div class="signup-row">
                <input
                    type="email"
                    placeholder={props.placeholder.clone()}
                    value={field.value().to_string()}
                    oninput={oninput}
                    required=true
                />
                <button type="submit" class="btn btn-magic signup-send" aria-label="Sign up">{"✉"}</button>
            </div>
            {
                if let Some(blurb) = &props.blurb {
                    html! { <p class="signup-blurb">{blurb.clone()}</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(message) = status.message() {
                    html! { <p class="signup-status" role="status">{message}</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
