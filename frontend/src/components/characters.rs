use log::{debug, warn};
use yew::prelude::*;

use crate::components::particles::Particles;
use crate::config::{self, thresholds};
use crate::content::{CHARACTERS, STAT_GROUPS};
use crate::hooks::use_reveal;
use crate::state::carousel::CarouselIndex;
use crate::state::visibility::{reveal_class, reveal_style, Entrance};

#[function_component(Characters)]
pub fn characters() -> Html {
    let (section, shown) = use_reveal(thresholds::CHARACTERS);
    let carousel = use_state(|| CarouselIndex::new(CHARACTERS.len()).ok());

    let Some(selection) = *carousel else {
        warn!("No characters to show");
        return html! {};
    };

    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut selection = selection;
            selection.next();
            carousel.set(Some(selection));
        })
    };

    let previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut selection = selection;
            selection.previous();
            carousel.set(Some(selection));
        })
    };

    let select = {
        let carousel = carousel.clone();
        Callback::from(move |index: usize| {
            let mut selection = selection;
            match selection.select(index) {
                Ok(()) => {
                    debug!("Selected character {}", index);
                    carousel.set(Some(selection));
                }
                Err(e) => warn!("{}", e),
            }
        })
    };

    let current = selection.current();
    let character = &CHARACTERS[current];

    html! {
        <section ref={section} class="section characters">
            <style>
                {r#"
                    .characters { background: linear-gradient(to bottom, var(--shadow-deep), var(--background)); }
                    .character-card {
                        padding: 2rem;
                        margin-bottom: 2rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 3rem;
                        align-items: center;
                    }
                    .character-visual { position: relative; }
                    .character-face {
                        aspect-ratio: 1;
                        border-radius: 1rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, hsla(280, 85%, 65%, 0.2), hsla(135, 55%, 48%, 0.2), hsla(22, 95%, 58%, 0.2));
                    }
                    .character-face .glyph { font-size: 6rem; margin-bottom: 1rem; }
                    .character-face .name { font-family: "Cinzel", serif; font-size: 1.5rem; }
                    .indicators {
                        position: absolute;
                        bottom: -1rem;
                        left: 0;
                        right: 0;
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .indicator {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        border: none;
                        cursor: pointer;
                        background: hsla(40, 30%, 92%, 0.3);
                        transition: all 0.3s ease;
                    }
                    .indicator.current { background: var(--magic); transform: scale(1.25); }
                    .character-info h3 { font-family: "Orbitron", sans-serif; font-size: 2.25rem; margin: 0 0 0.5rem; }
                    .character-info .title { font-family: "Cinzel", serif; font-size: 1.25rem; margin-bottom: 1.5rem; color: hsla(40, 30%, 92%, 0.6); }
                    .ability {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        margin-bottom: 0.75rem;
                        background: hsla(240, 8%, 25%, 0.2);
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                    }
                    .ability .dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; }
                    .carousel-nav { display: flex; justify-content: center; gap: 1rem; }
                    .stat-card { padding: 1.5rem; }
                    .stat-card h5 { font-family: "Orbitron", sans-serif; font-size: 1.1rem; text-align: center; margin: 0 0 1rem; }
                    .stat-row { display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.75rem; font-size: 0.875rem; }
                    .stat-bar { width: 4rem; height: 0.5rem; border-radius: 9999px; overflow: hidden; background: var(--muted); }
                    .stat-bar div { height: 100%; transition: width 1s ease; }
                    .stat-value { width: 2rem; font-size: 0.75rem; margin-left: 0.5rem; color: hsla(40, 30%, 92%, 0.6); }
                    .stat-comparison { margin-top: 4rem; }
                "#}
            </style>

            <Particles field={config::CHARACTER_PARTICLES} class="large" />

            <div class="section-inner">
                <div class={classes!("section-heading", reveal_class(shown, Entrance::Rise))}>
                    <h2>{"CHOOSE YOUR PATH"}</h2>
                    <p>{"Every hero has a story. Which legend will you forge in the Wilderland?"}</p>
                    <div class="heading-rule" />
                </div>

                <div class={reveal_class(shown, Entrance::Grow)} style={reveal_style(300)}>
                    <div class="game-card character-card">
                        <div class="character-visual">
                            <div class="character-face">
                                <div class={classes!("glyph", character.accent.text())}>{character.glyph}</div>
                                <div class="name">{character.name}</div>
                            </div>
                            <div class="indicators">
                                { for (0..CHARACTERS.len()).map(|index| {
                                    let select = select.clone();
                                    html! {
                                        <button
                                            class={classes!("indicator", (index == current).then(|| "current"))}
                                            aria-label={format!("Show {}", CHARACTERS[index].name)}
                                            onclick={Callback::from(move |_: MouseEvent| select.emit(index))}
                                        />
                                    }
                                })}
                            </div>
                        </div>

                        <div class="character-info">
                            <h3 class={character.accent.text()}>{character.name}</h3>
                            <div class="title">{character.title}</div>
                            <p class="text-dim">{character.description}</p>
                            <h4 class="font-display">{"Key Abilities"}</h4>
                            { for character.abilities.iter().map(|ability| html! {
                                <div class="ability">
                                    <div class={classes!("dot", character.accent.bg())} />
                                    <span>{*ability}</span>
                                </div>
                            })}
                        </div>
                    </div>

                    <div class="carousel-nav">
                        <button class="icon-button game-card" aria-label="Previous character" onclick={previous}>{"‹"}</button>
                        <button class="icon-button game-card" aria-label="Next character" onclick={next}>{"›"}</button>
                    </div>
                </div>

                <div class={classes!("grid", "grid-3", "stat-comparison", reveal_class(shown, Entrance::Rise))} style={reveal_style(600)}>
                    { for STAT_GROUPS.iter().map(|group| html! {
                        <div class="game-card stat-card">
                            <h5 class="text-magic">{group.stat}</h5>
                            { for CHARACTERS.iter().zip(group.values.iter()).map(|(character, value)| html! {
                                <div class="stat-row">
                                    <span class="text-dim">{character.name}</span>
                                    <div style="display: flex; align-items: center;">
                                        <div class="stat-bar">
                                            <div class={character.accent.bg()} style={format!("width: {}%;", value)} />
                                        </div>
                                        <span class="stat-value">{*value}</span>
                                    </div>
                                </div>
                            })}
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
