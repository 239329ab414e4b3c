use yew::prelude::*;

use crate::config::thresholds;
use crate::content::{STORY_FEATURES, STORY_TAGS};
use crate::hooks::use_reveal;
use crate::state::visibility::{reveal_class, reveal_style, Entrance};

#[function_component(Story)]
pub fn story() -> Html {
    let (section, shown) = use_reveal(thresholds::STORY);

    html! {
        <section ref={section} class="section story">
            <style>
                {r#"
                    .story-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, var(--background), var(--card), var(--background));
                    }
                    .story-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 3rem;
                        align-items: center;
                    }
                    .story-card { padding: 2rem; }
                    .story-card h3 {
                        font-family: "Cinzel", serif;
                        font-size: 1.9rem;
                        margin: 0 0 1.5rem;
                    }
                    .story-card p {
                        font-size: 1.1rem;
                        line-height: 1.7;
                        color: hsla(40, 30%, 92%, 0.8);
                    }
                    .story-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        padding-top: 1rem;
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                    }
                    .story-tags .dot {
                        display: inline-block;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        margin-right: 0.5rem;
                    }
                    .endless {
                        position: relative;
                        padding: 2rem;
                        transition: transform 0.5s ease;
                    }
                    .endless:hover { transform: scale(1.05); }
                    .endless-face {
                        aspect-ratio: 1;
                        border-radius: 0.75rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        font-family: "Cinzel", serif;
                        background: linear-gradient(135deg, hsla(280, 85%, 65%, 0.2), hsla(22, 95%, 58%, 0.2));
                    }
                    .endless-face .infinity {
                        font-family: "Orbitron", sans-serif;
                        font-size: 3.75rem;
                        margin-bottom: 1rem;
                    }
                    .story-features { margin-top: 5rem; }
                "#}
            </style>

            <div class="story-backdrop">
                <div class="orb floating" style="top: 25%; left: 25%; width: 8rem; height: 8rem; background: hsla(280, 85%, 65%, 0.1);" />
                <div class="orb floating" style="top: 75%; right: 25%; width: 6rem; height: 6rem; background: hsla(22, 95%, 58%, 0.1); animation-delay: 2s;" />
                <div class="orb floating" style="top: 50%; left: 75%; width: 5rem; height: 5rem; background: hsla(195, 90%, 62%, 0.1); animation-delay: 4s;" />
            </div>

            <div class="section-inner">
                <div class={classes!("section-heading", reveal_class(shown, Entrance::Rise))}>
                    <h2>{"THE LEGEND AWAITS"}</h2>
                    <div class="heading-rule" />
                </div>

                <div class="story-grid">
                    <div class={reveal_class(shown, Entrance::FromLeft)} style={reveal_style(300)}>
                        <div class="game-card story-card">
                            <h3 class="text-magic">{"A World Unleashed"}</h3>
                            <p>
                                {"In the far reaches of an ancient realm, where civilization's light fades into primal darkness, lies "}
                                <span class="text-magic">{"Wilderland"}</span>
                                {", a vast wilderness where forgotten gods still walk and untamed magic flows through every stone and stream."}
                            </p>
                            <p>
                                {"As a wandering warrior seeking redemption, you must navigate treacherous landscapes, forge alliances with mysterious beings, and master both blade and sorcery to uncover the truth behind the realm's growing corruption."}
                            </p>
                            <div class="story-tags">
                                { for STORY_TAGS.iter().map(|(tag, accent)| html! {
                                    <span class={accent.text()}>
                                        <span class={classes!("dot", "pulse-glow", accent.bg())} />
                                        {*tag}
                                    </span>
                                })}
                            </div>
                        </div>
                    </div>

                    <div class={reveal_class(shown, Entrance::FromRight)} style={reveal_style(600)}>
                        <div class="game-card endless">
                            <div class="endless-face">
                                <div class="infinity text-magic">{"∞"}</div>
                                <div>{"Endless"}</div>
                                <div class="text-dim">{"Adventures"}</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class={classes!("grid", "grid-3", "story-features", reveal_class(shown, Entrance::Rise))} style={reveal_style(900)}>
                    { for STORY_FEATURES.iter().map(|feature| html! {
                        <div class="game-card feature-card">
                            <div class="icon">{feature.icon}</div>
                            <h4 class={feature.accent.text()}>{feature.title}</h4>
                            <p class="text-dim">{feature.description}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
