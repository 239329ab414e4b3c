use yew::prelude::*;

use crate::config::thresholds;
use crate::content::{platforms, Platform, PlatformAction, MINIMUM_REQUIREMENTS, RECOMMENDED_REQUIREMENTS};
use crate::hooks::use_reveal;
use crate::state::visibility::{reveal_class, reveal_style, Entrance};

fn platform_card(platform: &Platform) -> Html {
    let accent = platform.accent;
    let action = match platform.action {
        PlatformAction::JoinBeta => html! {
            <a class={classes!("btn", "platform-action", accent.bg())} href="#join-beta" style="color: var(--background);">
                {"⬇ Join Beta Now"}
            </a>
        },
        PlatformAction::Notify => html! {
            <a class={classes!("btn", "platform-action", accent.border(), accent.text())} href="#join-beta">
                {"🔔 Get Notified"}
            </a>
        },
    };

    html! {
        <div class="game-card platform-card">
            <div class="platform-header">
                <div class="platform-icon">{platform.icon}</div>
                <h3 class={accent.text()}>{platform.name}</h3>
                <div class={classes!("release", accent.border(), accent.text())}>
                    {platform.release.label()}
                </div>
            </div>
            <div class="platform-features">
                { for platform.features.iter().map(|feature| html! {
                    <div class="platform-feature">
                        <div class={classes!("dot", "pulse-glow", accent.bg())} />
                        <span>{*feature}</span>
                    </div>
                })}
            </div>
            { action }
            <button class="btn btn-ghost platform-action">{"📅 Add to Wishlist"}</button>
        </div>
    }
}

fn requirement_rows(rows: &[(&'static str, &'static str)]) -> Html {
    html! {
        for rows.iter().map(|(label, value)| html! {
            <div class="requirement">
                <span class="font-display text-dim">{*label}</span>
                <span>{*value}</span>
            </div>
        })
    }
}

#[function_component(Platforms)]
pub fn platforms_section() -> Html {
    let (section, shown) = use_reveal(thresholds::PLATFORMS);
    let catalog = use_memo(|_| platforms(), ());

    html! {
        <section ref={section} class="section platforms" id="platforms">
            <style>
                {r#"
                    .platforms { background: linear-gradient(to bottom, var(--background), var(--card)); }
                    .platform-grid { margin-bottom: 4rem; }
                    .platform-card { padding: 2rem; transition: transform 0.5s ease; }
                    .platform-card:hover { transform: scale(1.05); }
                    .platform-header { text-align: center; margin-bottom: 1.5rem; }
                    .platform-icon { font-size: 3.75rem; margin-bottom: 1rem; }
                    .platform-header h3 { font-family: "Orbitron", sans-serif; font-size: 1.5rem; margin: 0 0 0.5rem; }
                    .release {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        border: 1px solid;
                        border-radius: 9999px;
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                    }
                    .platform-feature {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem;
                        margin-bottom: 0.75rem;
                        border-radius: 0.5rem;
                        background: hsla(240, 8%, 25%, 0.1);
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                    }
                    .platform-feature .dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; }
                    .platform-action { width: 100%; margin-top: 0.75rem; font-size: 0.95rem; }
                    .requirements { padding: 2rem; }
                    .requirements h3 { font-family: "Orbitron", sans-serif; text-align: center; margin: 0 0 2rem; }
                    .requirements h4 { font-family: "Orbitron", sans-serif; margin: 0 0 1rem; }
                    .requirement {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 0.5rem;
                        padding: 0.75rem;
                        margin-bottom: 0.75rem;
                        border-radius: 0.5rem;
                        background: hsla(240, 8%, 25%, 0.1);
                        font-size: 0.875rem;
                    }
                "#}
            </style>

            <div class="section-inner">
                <div class={classes!("section-heading", reveal_class(shown, Entrance::Rise))}>
                    <h2>{"CONQUER ALL REALMS"}</h2>
                    <p>{"Experience Wilderland across your favorite gaming platforms with optimized performance"}</p>
                    <div class="heading-rule ember" />
                </div>

                <div class={classes!("grid", "grid-3", "platform-grid", reveal_class(shown, Entrance::Rise))} style={reveal_style(300)}>
                    { for catalog.iter().map(platform_card) }
                </div>

                <div class={classes!("game-card", "requirements", reveal_class(shown, Entrance::Rise))} style={reveal_style(600)}>
                    <h3 class="text-magic">{"PC System Requirements"}</h3>
                    <div class="grid grid-2">
                        <div>
                            <h4 class="text-wilderness">{"Minimum Requirements"}</h4>
                            { requirement_rows(&MINIMUM_REQUIREMENTS) }
                        </div>
                        <div>
                            <h4 class="text-ember">{"Recommended Requirements"}</h4>
                            { requirement_rows(&RECOMMENDED_REQUIREMENTS) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
