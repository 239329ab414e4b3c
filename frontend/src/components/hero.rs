use log::{info, warn};
use yew::prelude::*;

use crate::components::particles::Particles;
use crate::config::{self, assets};
use crate::hooks::{use_delayed_reveal, use_media};
use crate::state::playback::MediaKind;
use crate::state::visibility::{reveal_class, reveal_style, Entrance};

#[function_component(Hero)]
pub fn hero() -> Html {
    let shown = use_delayed_reveal(config::HERO_REVEAL_DELAY_MS);
    let theme = use_media(MediaKind::AmbientAudio);
    let trailer = use_media(MediaKind::Video);
    let trailer_open = use_state(|| false);

    let open_trailer = {
        let trailer_open = trailer_open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening trailer");
            trailer_open.set(true);
        })
    };

    let close_trailer = {
        let trailer_open = trailer_open.clone();
        let stop = trailer.stop.clone();
        Callback::from(move |_: MouseEvent| {
            stop.emit(());
            trailer_open.set(false);
        })
    };

    let theme_playing = theme.state.is_playing();

    html! {
        <>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        filter: brightness(0.7) contrast(1.2);
                    }
                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--shadow-deep), transparent, hsla(245, 30%, 3%, 0.5));
                    }
                    .hero-audio {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 20;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .hero-title {
                        font-family: "Orbitron", sans-serif;
                        font-weight: 900;
                        font-size: clamp(3.75rem, 12vw, 8rem);
                        margin: 0 0 1rem;
                        color: white;
                        text-shadow: 0 0 40px hsla(280, 85%, 65%, 0.6);
                    }
                    .hero-genre {
                        font-family: "Cinzel", serif;
                        letter-spacing: 0.1em;
                        font-size: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .hero-tagline {
                        font-family: "Cinzel", serif;
                        font-size: clamp(1.25rem, 3vw, 1.9rem);
                        max-width: 42rem;
                        margin: 0 0 3rem;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        justify-content: center;
                    }
                    .scroll-cue {
                        position: absolute;
                        bottom: 2rem;
                        left: 0;
                        right: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                    }
                    .scroll-cue .line {
                        width: 2px;
                        height: 2rem;
                        margin-top: 0.5rem;
                        background: linear-gradient(var(--magic), transparent);
                    }
                    .hero-badges {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 1.5rem;
                        display: flex;
                        gap: 1rem;
                        z-index: 20;
                    }
                    .hero-badges .game-card {
                        padding: 0.5rem 1rem;
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                    }
                    .trailer-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: hsla(245, 30%, 3%, 0.95);
                        backdrop-filter: blur(4px);
                    }
                    .trailer-modal .video-frame {
                        width: 100%;
                        max-width: 72rem;
                        margin: 0 1rem;
                    }
                "#}
            </style>

            <audio
                ref={theme.node.clone()}
                src={assets::THEME_AUDIO}
                preload="auto"
                muted=true
                onended={theme.on_ended.reform(|_: Event| ())}
                onerror={Callback::from(|_: Event| warn!("Theme audio failed to load"))}
            />

            <section class="hero">
                <div
                    class="hero-backdrop"
                    style={format!("background-image: url('{}');", assets::HERO_BACKDROP)}
                />
                <div class="hero-shade" />
                <Particles field={config::HERO_PARTICLES} />

                <div class="hero-audio">
                    <button
                        class={classes!("icon-button", "game-card", theme_playing.then(|| "active"))}
                        aria-label="Toggle theme music"
                        onclick={theme.toggle_play.reform(|_: MouseEvent| ())}
                    >
                        { if theme_playing { "🔊" } else { "🔇" } }
                    </button>
                </div>

                <div class="hero-content">
                    <div class={reveal_class(shown, Entrance::Rise)} style={reveal_style(300)}>
                        <h1 class="hero-title">{"WILDERLAND"}</h1>
                        <div class="hero-genre text-magic">{"ACTION RPG"}</div>
                    </div>

                    <div class={reveal_class(shown, Entrance::Rise)} style={reveal_style(700)}>
                        <p class="hero-tagline">{"\"Where the untamed beckons\""}</p>
                    </div>

                    <div class={classes!("hero-actions", reveal_class(shown, Entrance::Rise))} style={reveal_style(1000)}>
                        <button class="btn btn-magic" onclick={open_trailer}>
                            {"▶ Watch Trailer"}
                        </button>
                        <a class="btn btn-ember" href="#join-beta">{"Join Beta"}</a>
                    </div>

                    <div class={classes!("scroll-cue", "text-magic", reveal_class(shown, Entrance::Rise))} style={reveal_style(1500)}>
                        <div>{"EXPLORE"}</div>
                        <div class="line" />
                    </div>
                </div>

                <div class="hero-badges">
                    <div class="game-card text-wilderness">{"XBOX"}</div>
                    <div class="game-card text-frost">{"PLAYSTATION"}</div>
                </div>
            </section>

            {
                if *trailer_open {
                    html! {
                        <div class="trailer-modal">
                            <div class="video-frame game-card">
                                <video
                                    ref={trailer.node.clone()}
                                    muted={trailer.state.is_muted()}
                                    preload="metadata"
                                    onclick={trailer.toggle_play.reform(|_: MouseEvent| ())}
                                    onended={trailer.on_ended.reform(|_: Event| ())}
                                >
                                    <source src={assets::TRAILER_VIDEO} type="video/mp4" />
                                    {"Your browser does not support the video tag."}
                                </video>
                                {
                                    if !trailer.state.is_playing() {
                                        html! {
                                            <div class="video-overlay">
                                                <button
                                                    class="btn btn-magic"
                                                    onclick={trailer.toggle_play.reform(|_: MouseEvent| ())}
                                                >
                                                    {"▶ Play Trailer"}
                                                </button>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="video-controls">
                                    <button
                                        class="icon-button game-card"
                                        aria-label="Toggle trailer sound"
                                        onclick={trailer.toggle_mute.reform(|_: MouseEvent| ())}
                                    >
                                        { if trailer.state.is_muted() { "🔇" } else { "🔊" } }
                                    </button>
                                    <button
                                        class="icon-button game-card"
                                        aria-label="Close trailer"
                                        onclick={close_trailer}
                                    >
                                        {"✕"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
