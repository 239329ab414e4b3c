use yew::prelude::*;

use crate::config::{assets, thresholds};
use crate::content::{GAMEPLAY_HIGHLIGHTS, HERO_ABILITIES, HERO_STATS};
use crate::hooks::{use_media, use_reveal};
use crate::state::playback::MediaKind;
use crate::state::visibility::{reveal_class, reveal_style, Entrance};

#[function_component(Gameplay)]
pub fn gameplay() -> Html {
    let (section, shown) = use_reveal(thresholds::GAMEPLAY);
    let video = use_media(MediaKind::Video);

    let play_overlay = if video.state.is_playing() {
        html! {}
    } else {
        html! {
            <div class="video-overlay">
                <button class="btn btn-magic" onclick={video.toggle_play.reform(|_: MouseEvent| ())}>
                    {"▶ Play Gameplay Trailer"}
                </button>
            </div>
        }
    };

    html! {
        <section ref={section} class="section gameplay">
            <style>
                {r#"
                    .gameplay { background: linear-gradient(to bottom, var(--card), var(--shadow-deep)); }
                    .showcase { padding: 1.5rem; margin-bottom: 4rem; }
                    .showcase-caption { margin-top: 1.5rem; text-align: center; }
                    .showcase-caption h3 { font-family: "Orbitron", sans-serif; font-size: 1.5rem; margin: 0 0 0.5rem; }
                    .meet-hero { margin: 4rem 0 5rem; }
                    .meet-hero-heading { text-align: center; margin-bottom: 3rem; }
                    .meet-hero-heading h3 { font-family: "Orbitron", sans-serif; font-size: 2.25rem; margin: 0 0 1rem; }
                    .hero-profile {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 2rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 2rem;
                        align-items: center;
                    }
                    .portrait { position: relative; }
                    .portrait img {
                        width: 100%;
                        aspect-ratio: 1;
                        object-fit: cover;
                        border-radius: 0.75rem;
                        filter: contrast(1.1) brightness(1.05) saturate(1.1);
                    }
                    .portrait .badge {
                        position: absolute;
                        padding: 0.25rem 0.75rem;
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.75rem;
                        border-radius: 9999px;
                    }
                    .portrait .badge.top { top: -0.5rem; right: -0.5rem; }
                    .portrait .badge.bottom { bottom: -0.5rem; left: -0.5rem; }
                    .profile-name { font-family: "Orbitron", sans-serif; font-size: 3rem; margin: 0 0 0.5rem; color: white; }
                    .profile-epithet { font-family: "Cinzel", serif; font-size: 1.25rem; letter-spacing: 0.1em; margin-bottom: 1rem; }
                    .profile-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; padding-top: 1rem; }
                    .profile-stats .game-card { text-align: center; padding: 0.75rem; font-family: "Orbitron", sans-serif; }
                    .abilities { display: flex; flex-wrap: wrap; gap: 0.5rem; padding-top: 0.5rem; }
                    .abilities .game-card { padding: 0.25rem 0.75rem; font-family: "Orbitron", sans-serif; font-size: 0.75rem; border-radius: 9999px; }
                    .highlight { position: relative; }
                    .dev-badge {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.7rem;
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                        color: hsla(40, 30%, 92%, 0.5);
                        background: hsla(240, 15%, 6%, 0.2);
                    }
                "#}
            </style>

            <div class="section-inner">
                <div class={classes!("section-heading", reveal_class(shown, Entrance::Rise))}>
                    <h2>{"WITNESS THE ADVENTURE"}</h2>
                    <p>{"Experience the visceral combat and breathtaking world of Wilderland"}</p>
                    <div class="heading-rule ember" />
                </div>

                <div class={reveal_class(shown, Entrance::Grow)} style={reveal_style(300)}>
                    <div class="game-card showcase">
                        <div class="video-frame">
                            <video
                                ref={video.node.clone()}
                                muted=true
                                loop=true
                                preload="metadata"
                                onclick={video.toggle_play.reform(|_: MouseEvent| ())}
                                onended={video.on_ended.reform(|_: Event| ())}
                            >
                                <source src={assets::GAMEPLAY_VIDEO} type="video/mp4" />
                                {"Your browser does not support the video tag."}
                            </video>
                            { play_overlay }
                            <div class="video-controls">
                                <button
                                    class="icon-button game-card"
                                    aria-label="Toggle gameplay sound"
                                    onclick={video.toggle_mute.reform(|_: MouseEvent| ())}
                                >
                                    { if video.state.is_muted() { "🔇" } else { "🔊" } }
                                </button>
                            </div>
                        </div>
                        <div class="showcase-caption">
                            <h3 class="text-magic">{"Combat Showcase"}</h3>
                            <p class="text-dim">{"Watch our hero face the untamed creatures of Wilderland in epic real-time combat"}</p>
                        </div>
                    </div>
                </div>

                <div class={classes!("meet-hero", reveal_class(shown, Entrance::Rise))} style={reveal_style(900)}>
                    <div class="meet-hero-heading">
                        <h3 class="text-magic">{"MEET YOUR HERO"}</h3>
                        <p class="font-serif text-dim">{"Discover the warrior who will guide you through the untamed realms of Wilderland"}</p>
                    </div>

                    <div class="game-card hero-profile">
                        <div class="portrait">
                            <img src={assets::HERO_PORTRAIT} alt="Paul - Wilderland Warrior" loading="lazy" />
                            <div class="badge top game-card text-magic">{"LEVEL 50"}</div>
                            <div class="badge bottom game-card text-ember">{"WARRIOR"}</div>
                        </div>

                        <div>
                            <h4 class="profile-name">{"PAUL"}</h4>
                            <div class="profile-epithet text-magic">{"THE UNTAMED WARRIOR"}</div>
                            <p class="text-dim">
                                {"A battle-hardened warrior who has survived the harshest trials of the wilderness. Paul's journey began in the shadow of the ancient mountains, where he learned to harness both steel and sorcery in his quest for redemption."}
                            </p>
                            <p class="text-dim">
                                {"With a blade forged in dragon fire and armor blessed by forgotten gods, Paul stands as the last hope against the corruption spreading through Wilderland."}
                            </p>

                            <div class="profile-stats">
                                { for HERO_STATS.iter().map(|(icon, label, rank, accent)| html! {
                                    <div class={classes!("game-card", accent.text())}>
                                        <div>{*icon}</div>
                                        <div>{*label}</div>
                                        <div class="text-dim">{*rank}</div>
                                    </div>
                                })}
                            </div>

                            <h5 class="font-display text-magic">{"SPECIAL ABILITIES"}</h5>
                            <div class="abilities">
                                { for HERO_ABILITIES.iter().map(|(ability, accent)| html! {
                                    <span class={classes!("game-card", accent.text())}>{*ability}</span>
                                })}
                            </div>
                        </div>
                    </div>
                </div>

                <div class={classes!("grid", "grid-4", reveal_class(shown, Entrance::Rise))} style={reveal_style(600)}>
                    { for GAMEPLAY_HIGHLIGHTS.iter().map(|feature| html! {
                        <div class="game-card feature-card highlight">
                            <span class="dev-badge">{"Development"}</span>
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
