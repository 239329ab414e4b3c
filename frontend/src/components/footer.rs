use yew::prelude::*;

use crate::components::particles::Particles;
use crate::config;
use crate::content::{CONSOLES, FOOTER_COLUMNS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        padding: 4rem 1rem;
                        background: linear-gradient(to top, var(--shadow-deep), var(--background));
                        border-top: 1px solid hsla(280, 85%, 65%, 0.2);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    @media (max-width: 900px) {
                        .footer-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .footer-brand h3 { font-family: "Orbitron", sans-serif; font-weight: 900; font-size: 1.9rem; margin: 0 0 0.5rem; }
                    .footer-brand .motto { font-family: "Cinzel", serif; font-size: 1.1rem; margin-bottom: 1.5rem; }
                    .socials { display: flex; gap: 0.75rem; }
                    .socials .icon-button { width: 2.5rem; height: 2.5rem; color: var(--foreground); }
                    .footer-column h4 { font-family: "Orbitron", sans-serif; margin: 0 0 1rem; }
                    .footer-column ul { list-style: none; padding: 0; margin: 0; }
                    .footer-column li { margin-bottom: 0.75rem; }
                    .site-footer a { color: hsla(40, 30%, 92%, 0.7); text-decoration: none; transition: color 0.3s ease; }
                    .site-footer a:hover { color: var(--magic); }
                    .consoles {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 2rem 0;
                        border-top: 1px solid hsla(280, 85%, 65%, 0.1);
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                    }
                    .consoles .row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                    .consoles .game-card { padding: 0.5rem 1rem; border-radius: 0.5rem; }
                    .bottom-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid hsla(280, 85%, 65%, 0.1);
                        font-size: 0.875rem;
                        color: hsla(40, 30%, 92%, 0.6);
                    }
                    .bottom-bar .legal { display: flex; gap: 1.5rem; }
                    .credits {
                        text-align: center;
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid hsla(280, 85%, 65%, 0.05);
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.75rem;
                        color: hsla(40, 30%, 92%, 0.4);
                    }
                "#}
            </style>

            <Particles field={config::FOOTER_PARTICLES} class="faint" />

            <div class="section-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{"WILDERLAND"}</h3>
                        <div class="motto text-magic">{"Where the untamed beckons"}</div>
                        <p class="text-dim">
                            {"Embark on an epic journey through the untamed wilderness where ancient magic meets modern adventure. Your legend begins in the Wilderland."}
                        </p>
                        <div class="socials">
                            { for SOCIAL_LINKS.iter().map(|(label, icon, accent)| html! {
                                <a class={classes!("icon-button", "game-card", accent.border())} href="#" aria-label={*label} title={*label}>
                                    {*icon}
                                </a>
                            })}
                        </div>
                    </div>

                    { for FOOTER_COLUMNS.iter().map(|(title, links)| html! {
                        <div class="footer-column">
                            <h4 class="text-magic">{*title}</h4>
                            <ul>
                                { for links.iter().map(|link| html! {
                                    <li><a href="#">{*link}</a></li>
                                })}
                            </ul>
                        </div>
                    })}
                </div>

                <div class="consoles">
                    <div class="text-wilderness">{"AVAILABLE ON"}</div>
                    <div class="row">
                        { for CONSOLES.iter().map(|(name, accent)| html! {
                            <div class={classes!("game-card", accent.text())}>{*name}</div>
                        })}
                    </div>
                </div>

                <div class="bottom-bar">
                    <div>{"© 2025 Wilderland Game Studio. All rights reserved by Developers World LLC."}</div>
                    <div class="legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#">{"Cookie Policy"}</a>
                    </div>
                    <div>{"Made with "}<span class="text-ember">{"♥"}</span>{" for gamers"}</div>
                </div>

                <div class="credits">
                    {"Game Development • Art Direction • Sound Design • Community Management"}
                </div>
            </div>
        </footer>
    }
}
