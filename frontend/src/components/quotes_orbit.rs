use std::rc::Rc;

use log::{debug, warn};
use stylist::yew::styled_component;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{self, OrbitConfig};
use crate::content::{self, ORBIT_LOGO, ORBIT_SUBTITLE, ORBIT_TITLE};
use crate::dom::{self, DomError, FrameScheduler, WindowListener};
use crate::layout::orbit::{self, SectionViewport};

fn measure_section(section: &Element) -> Result<SectionViewport, DomError> {
    let window = dom::window()?;
    let rect = section.get_bounding_client_rect();
    Ok(SectionViewport {
        section_top: rect.top(),
        section_height: rect.height(),
        viewport_height: dom::viewport_height(&window)?,
    })
}

/*
  Centered logo with quote bubbles placed radially around it. Scrolling down
  through the section pulls the bubbles inward, scrolling up pushes them out.
*/
#[styled_component]
pub fn QuotesOrbit() -> Html {
    let orbit_config = OrbitConfig::default();
    let section_ref = use_node_ref();
    // 0 -> fully expanded, 1 -> fully contracted
    let progress = use_state_eq(|| 0.0_f64);
    let quotes = use_memo(|_| content::quotes(), ());

    {
        let section_ref = section_ref.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                if section_ref.get().is_none() {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }

                let update = {
                    let section_ref = section_ref.clone();
                    move || {
                        if let Some(section) = section_ref.cast::<Element>() {
                            match measure_section(&section) {
                                Ok(viewport) => progress.set(orbit::progress(&viewport)),
                                Err(err) => warn!("quotes orbit measure skipped: {}", err),
                            }
                        }
                    }
                };

                let scheduler = match FrameScheduler::new(update) {
                    Ok(scheduler) => Rc::new(scheduler),
                    Err(err) => {
                        warn!("quotes orbit disabled: {}", err);
                        return Box::new(|| ()) as Box<dyn FnOnce()>;
                    }
                };

                let listen = |events: &'static [&'static str], passive: bool| {
                    let scheduler = scheduler.clone();
                    WindowListener::new(events, passive, move || scheduler.schedule())
                        .map_err(|err| warn!("quotes orbit {:?} listener not registered: {}", events, err))
                        .ok()
                };
                let on_scroll = listen(&["scroll"], true);
                let on_resize = listen(&["resize"], false);

                scheduler.schedule();
                debug!("quotes orbit mounted");

                Box::new(move || {
                    drop(on_scroll);
                    drop(on_resize);
                    // Last reference: cancels a frame that has not fired yet.
                    drop(scheduler);
                    debug!("quotes orbit listeners released");
                }) as Box<dyn FnOnce()>
            },
            (),
        );
    }

    let section = css!(
        r#"
        position: relative;
        width: 100%;
        min-height: 140vh;
        background: #ffffff;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        border-top-left-radius: 36px;
        border-top-right-radius: 36px;
        padding-bottom: 1120px;

        @media (max-width: 768px) {
            padding-bottom: 80px;
        }
        "#
    );

    let inner = css!(
        r#"
        position: relative;
        top: 0;
        width: 100%;
        height: 100vh;
        display: grid;
        place-items: center;
        --orbit-offset: 700px;

        @media (max-width: 768px) {
            --orbit-offset: 80px;
        }
        "#
    );

    let header = css!(
        r#"
        position: absolute;
        top: 100px;
        left: 50%;
        transform: translateX(-50%);
        width: min(1100px, 92%);
        text-align: center;
        z-index: 10;

        h2 {
            margin: 0 0 10px 0;
            font-size: clamp(30px, 4.5vw, 54px);
            font-family: 'Playfair Display', serif;
            line-height: 1.2;
            font-weight: 800;
            color: #1f2a44;
        }

        p {
            margin: 0 auto;
            max-width: 820px;
            font-size: clamp(12px, 1.6vw, 16px);
            line-height: 1.6;
            color: #6b7280;
        }

        @media (max-width: 768px) {
            top: 12px;
        }
        "#
    );

    let center = css!(
        r#"
        position: absolute;
        left: 50%;
        top: 50%;
        transform: translate(-50%, -50%) translateY(var(--orbit-offset));
        width: 120px;
        height: 120px;
        border-radius: 50%;
        display: grid;
        place-items: center;
        z-index: 2;
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
        background: #fff;

        img {
            width: 100px;
            height: 100px;
            object-fit: contain;
            user-select: none;
            pointer-events: none;
        }
        "#
    );

    // Zero-size origin that every bubble is translated from.
    let layer = css!(
        r#"
        position: absolute;
        left: 50%;
        top: 50%;
        transform: translate(-50%, -50%) translateY(var(--orbit-offset));
        width: 0px;
        height: 0px;
        z-index: 1;
        "#
    );

    let bubble = css!(
        r#"
        position: absolute;
        transition: transform 0.25s ease-out;
        min-width: 320px;
        max-width: 480px;
        padding: 16px 26px;
        color: #fff;
        font-size: 15px;
        line-height: 1.4;
        border-radius: 18px;
        border: 1px solid rgb(0, 0, 0);
        background: var(--bubble-color, #3498db);

        .open-quote,
        .close-quote {
            font-weight: 800;
            font-size: 1.3em;
            line-height: 1;
        }
        .open-quote {
            margin-right: 6px;
        }
        .close-quote {
            margin-left: 6px;
        }

        @media (max-width: 768px) {
            min-width: 200px;
            max-width: 280px;
            font-size: 13.5px;
        }
        "#
    );

    let radius = orbit::radius(*progress, &orbit_config);
    let bubbles = quotes
        .iter()
        .map(|quote| {
            let (x, y) = orbit::bubble_offset(quote.angle_index, quotes.len(), radius);
            let style = format!(
                "top: 50%; left: 50%; transform: translate(-50%, -50%) translate({:.2}px, {:.2}px); --bubble-color: {};",
                x, y, quote.color
            );
            html! {
                <div key={quote.text} class={bubble.clone()} style={style}>
                    <span class="open-quote">{"“"}</span>
                    {quote.text}
                    <span class="close-quote">{"”"}</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="quotes-orbit" ref={section_ref} class={section}>
            <div class={inner}>
                <div class={header}>
                    <h2>{ORBIT_TITLE}</h2>
                    <p>{ORBIT_SUBTITLE}</p>
                </div>
                <div class={center}>
                    <img src={config::resolve_asset(ORBIT_LOGO)} alt="logo" />
                </div>
                <div class={layer}>
                    { bubbles }
                </div>
            </div>
        </section>
    }
}
