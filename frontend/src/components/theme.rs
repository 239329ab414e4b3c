use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Palette, base typography and the shared utility classes.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                :root {
                    --background: hsl(240, 15%, 6%);
                    --card: hsl(240, 14%, 10%);
                    --foreground: hsl(40, 30%, 92%);
                    --muted: hsl(240, 8%, 25%);
                    --magic: hsl(280, 85%, 65%);
                    --ember: hsl(22, 95%, 58%);
                    --frost: hsl(195, 90%, 62%);
                    --wilderness: hsl(135, 55%, 48%);
                    --shadow-deep: hsl(245, 30%, 3%);
                }
                html, body {
                    margin: 0;
                    padding: 0;
                    background: var(--background);
                    color: var(--foreground);
                    font-family: "Inter", system-ui, sans-serif;
                    scroll-behavior: smooth;
                }
                * {
                    box-sizing: border-box;
                }
            "#)} />
            <style>
                {r#"
                    .font-display { font-family: "Orbitron", sans-serif; }
                    .font-serif { font-family: "Cinzel", serif; }

                    .text-magic { color: var(--magic); }
                    .text-ember { color: var(--ember); }
                    .text-frost { color: var(--frost); }
                    .text-wilderness { color: var(--wilderness); }
                    .text-foreground { color: var(--foreground); }
                    .text-dim { color: hsla(40, 30%, 92%, 0.7); }
                    .bg-magic { background: var(--magic); }
                    .bg-ember { background: var(--ember); }
                    .bg-frost { background: var(--frost); }
                    .bg-wilderness { background: var(--wilderness); }
                    .bg-foreground { background: var(--foreground); }
                    .border-magic { border-color: var(--magic); }
                    .border-ember { border-color: var(--ember); }
                    .border-frost { border-color: var(--frost); }
                    .border-wilderness { border-color: var(--wilderness); }
                    .border-foreground { border-color: var(--foreground); }

                    .section {
                        position: relative;
                        min-height: 100vh;
                        padding: 5rem 1rem;
                        overflow: hidden;
                    }
                    .section-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-family: "Orbitron", sans-serif;
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        margin: 0 0 1.5rem;
                        background: linear-gradient(90deg, var(--magic), var(--frost));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .section-heading p {
                        font-family: "Cinzel", serif;
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto;
                        color: hsla(40, 30%, 92%, 0.8);
                    }
                    .heading-rule {
                        width: 6rem;
                        height: 0.25rem;
                        margin: 2rem auto 0;
                        background: linear-gradient(90deg, var(--magic), var(--frost));
                    }
                    .heading-rule.ember {
                        background: linear-gradient(90deg, var(--ember), var(--magic));
                    }

                    .game-card {
                        background: hsla(240, 14%, 12%, 0.75);
                        border: 1px solid hsla(280, 85%, 65%, 0.2);
                        border-radius: 1rem;
                        backdrop-filter: blur(8px);
                    }
                    .grid {
                        display: grid;
                        gap: 1.5rem;
                    }
                    .grid-2 { grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
                    .grid-3 { grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); }
                    .grid-4 { grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); }
                    .feature-card {
                        padding: 1.5rem;
                        text-align: center;
                        transition: transform 0.3s ease;
                    }
                    .feature-card:hover { transform: scale(1.05); }
                    .feature-card .icon { font-size: 2.25rem; margin-bottom: 1rem; }
                    .feature-card h4 { font-family: "Orbitron", sans-serif; margin: 0 0 0.75rem; }

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 0.75rem;
                        font-family: "Orbitron", sans-serif;
                        font-weight: 700;
                        font-size: 1.1rem;
                        cursor: pointer;
                        text-decoration: none;
                        border: 2px solid transparent;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .btn:hover { transform: scale(1.05); }
                    .btn-magic {
                        background: linear-gradient(135deg, var(--magic), hsl(260, 80%, 55%));
                        color: white;
                        border-color: hsla(280, 85%, 65%, 0.5);
                        box-shadow: 0 0 30px hsla(280, 85%, 65%, 0.35);
                    }
                    .btn-ember {
                        background: hsla(22, 95%, 58%, 0.1);
                        color: var(--ember);
                        border-color: var(--ember);
                    }
                    .btn-ember:hover { background: var(--ember); color: var(--background); }
                    .btn-ghost {
                        background: transparent;
                        color: hsla(40, 30%, 92%, 0.6);
                        font-size: 0.875rem;
                    }
                    .icon-button {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        color: var(--magic);
                        font-size: 1.1rem;
                    }
                    .icon-button.active {
                        background: hsla(280, 85%, 65%, 0.2);
                        border-color: hsla(280, 85%, 65%, 0.5);
                    }

                    .reveal {
                        opacity: 0;
                        transition: opacity 1s ease, transform 1s ease;
                    }
                    .reveal-rise { transform: translateY(5rem); }
                    .reveal-grow { transform: scale(0.95); }
                    .reveal-left { transform: translateX(-5rem); }
                    .reveal-right { transform: translateX(5rem) rotate(3deg); }
                    .reveal.shown {
                        opacity: 1;
                        transform: none;
                    }

                    .particle-field {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .particle {
                        position: absolute;
                        width: 0.25rem;
                        height: 0.25rem;
                        border-radius: 9999px;
                        background: var(--magic);
                        opacity: 0.6;
                    }
                    .particle.large { width: 0.5rem; height: 0.5rem; opacity: 0.3; }
                    .particle.faint { opacity: 0.2; }
                    .orb {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(24px);
                    }
                    .floating { animation: floating 6s ease-in-out infinite; }
                    @keyframes floating {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    .pulse-glow { animation: pulse-glow 2s ease-in-out infinite; }
                    @keyframes pulse-glow {
                        0%, 100% { box-shadow: 0 0 4px currentColor; }
                        50% { box-shadow: 0 0 14px currentColor; }
                    }

                    .video-frame {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: linear-gradient(135deg, var(--shadow-deep), var(--card));
                    }
                    .video-frame video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        cursor: pointer;
                    }
                    .video-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: hsla(245, 30%, 3%, 0.4);
                    }
                    .video-controls {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        display: flex;
                        gap: 0.5rem;
                    }
                    .video-controls .icon-button { width: 2.5rem; height: 2.5rem; }
                "#}
            </style>
        </>
    }
}
