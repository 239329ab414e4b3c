use yew::prelude::*;

use crate::components::particles::Particles;
use crate::components::signup_form::SignupForm;
use crate::config::{self, thresholds};
use crate::content::BETA_BENEFITS;
use crate::hooks::use_reveal;
use crate::signup::{MailingList, SignupClient};
use crate::state::visibility::{reveal_class, reveal_style, Entrance};

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub signups: SignupClient,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let (section, shown) = use_reveal(thresholds::CALL_TO_ACTION);

    html! {
        <section ref={section} class="section call-to-action" id="join-beta">
            <style>
                {r#"
                    .call-to-action { background: linear-gradient(to bottom, var(--card), var(--shadow-deep), var(--background)); }
                    .cta-title {
                        font-family: "Orbitron", sans-serif;
                        font-weight: 900;
                        font-size: clamp(3rem, 9vw, 6rem);
                        margin: 0 0 1.5rem;
                    }
                    .cta-stack { display: flex; flex-direction: column; align-items: center; gap: 2rem; }
                    .signup-form { width: 100%; max-width: 28rem; padding: 1.5rem; text-align: left; }
                    .signup-form h3 { font-family: "Orbitron", sans-serif; margin: 0 0 1rem; color: var(--magic); }
                    .signup-row { display: flex; gap: 0.75rem; }
                    .signup-row input {
                        flex: 1;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid hsla(280, 85%, 65%, 0.3);
                        background: hsla(240, 8%, 25%, 0.2);
                        color: var(--foreground);
                    }
                    .signup-row input:focus { outline: none; border-color: var(--magic); }
                    .signup-send { padding: 0.75rem 1.5rem; }
                    .signup-blurb, .signup-status { font-size: 0.75rem; margin: 0.75rem 0 0; color: hsla(40, 30%, 92%, 0.6); }
                    .signup-status { color: var(--frost); }
                    .newsletter h3 { color: var(--frost); font-size: 1.1rem; }
                    .newsletter input { border-color: hsla(195, 90%, 62%, 0.3); }
                    .cta-actions { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; }
                    .cta-actions .btn { font-size: 1.25rem; padding: 2rem 3rem; border-radius: 1rem; }
                    .benefits { margin: 4rem 0; }
                    .social-proof {
                        padding: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                        text-align: center;
                    }
                    .social-proof .figure { font-family: "Orbitron", sans-serif; font-size: 1.9rem; margin-bottom: 0.5rem; }
                    .newsletter-wrap { margin-top: 4rem; display: flex; justify-content: center; }
                "#}
            </style>

            <div class="orb floating" style="top: 25%; left: 25%; width: 16rem; height: 16rem; background: hsla(280, 85%, 65%, 0.05);" />
            <div class="orb floating" style="top: 75%; right: 25%; width: 12rem; height: 12rem; background: hsla(22, 95%, 58%, 0.05); animation-delay: 2s;" />
            <Particles field={config::CTA_PARTICLES} class="faint" />

            <div class="section-inner">
                <div class={classes!("section-heading", reveal_class(shown, Entrance::Rise))}>
                    <h2 class="cta-title">{"THE CALL AWAITS"}</h2>
                    <p>
                        {"Join thousands of adventurers preparing to explore the untamed wilds. Be among the first to shape the legend of Wilderland."}
                    </p>
                </div>

                <div class="cta-stack">
                    <div class={reveal_class(shown, Entrance::Rise)} style={reveal_style(300)}>
                        <SignupForm
                            client={props.signups.clone()}
                            list={MailingList::Beta}
                            title="Join the Beta"
                            placeholder="Enter your email"
                            blurb={Some(AttrValue::from("Get exclusive access, early gameplay, and special rewards"))}
                        />
                    </div>

                    <div class={classes!("cta-actions", reveal_class(shown, Entrance::Rise))} style={reveal_style(600)}>
                        <a class="btn btn-magic" href="#join-beta">{"⬇ Download Beta"}</a>
                        <a class="btn btn-ember" href="#platforms">{"🎁 Pre-Order Now"}</a>
                    </div>
                </div>

                <div class={classes!("grid", "grid-3", "benefits", reveal_class(shown, Entrance::Rise))} style={reveal_style(900)}>
                    { for BETA_BENEFITS.iter().map(|benefit| html! {
                        <div class="game-card feature-card">
                            <div class="icon">{benefit.icon}</div>
                            <h4 class={benefit.accent.text()}>{benefit.title}</h4>
                            <p class="text-dim">{benefit.description}</p>
                        </div>
                    })}
                </div>

                <div class={reveal_class(shown, Entrance::Rise)} style={reveal_style(1200)}>
                    <div class="game-card social-proof">
                        <div>
                            <div class="figure text-magic">{"50K+"}</div>
                            <div class="text-dim">{"Beta Signups"}</div>
                        </div>
                        <div>
                            <div class="figure text-ember">{"95%"}</div>
                            <div class="text-dim">{"Positive Feedback"}</div>
                        </div>
                        <div>
                            <div class="figure text-wilderness">{"★★★★★"}</div>
                            <div class="text-dim">{"Community Rating"}</div>
                        </div>
                    </div>
                </div>

                <div class={classes!("newsletter-wrap", reveal_class(shown, Entrance::Rise))} style={reveal_style(1500)}>
                    <SignupForm
                        client={props.signups.clone()}
                        list={MailingList::Newsletter}
                        title="Stay Connected"
                        placeholder="Newsletter signup"
                        blurb={Some(AttrValue::from("Get the latest updates, development insights, and exclusive content"))}
                        class="newsletter"
                    />
                </div>
            </div>
        </section>
    }
}
