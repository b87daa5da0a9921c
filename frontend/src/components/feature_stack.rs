use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{self, StackConfig};
use crate::content::{CardEntry, CARDS};
use crate::dom::{self, DomError, WindowListener};
use crate::layout::stack::{CardLayout, ScrollState, StackFrame, StackGeometry};

const STACK_EVENTS: &[&str] = &["scroll", "resize"];

/// Measures the stack, writes inline position and stacking styles on every
/// card, and sizes the container so content below the stack stays reachable.
fn animate_stack(
    stack: &HtmlElement,
    cards: &[HtmlElement],
    config: &StackConfig,
) -> Result<StackFrame, DomError> {
    let window = dom::window()?;
    let card_height = cards
        .first()
        .map(|card| card.offset_height() as f64)
        .unwrap_or(0.0);
    let geometry = StackGeometry::new(cards.len(), card_height, config);
    let state = ScrollState {
        scroll_y: dom::scroll_y(&window)?,
        stack_top_in_viewport: stack.get_bounding_client_rect().top(),
    };
    let width = format!("calc(100vw - {}px)", dom::scrollbar_width(&window)?);

    let frame = geometry.frame(&state);
    for (card, layout) in cards.iter().zip(&frame.cards) {
        let top = format!("{}px", layout.placement.top());
        let z_index = layout.z_index.to_string();
        dom::set_styles(
            card,
            &[
                ("position", layout.placement.css_position()),
                ("top", top.as_str()),
                ("left", "0px"),
                ("width", width.as_str()),
                ("z-index", z_index.as_str()),
            ],
        )?;
    }

    let height = format!("{}px", frame.container_height);
    dom::set_styles(stack, &[("height", height.as_str())])?;
    Ok(frame)
}

/// All card elements in order, or `None` unless exactly `expected` are mounted.
/// A partial list would shift card indices and shrink the container.
fn mounted_cards<T>(cards: impl Iterator<Item = Option<T>>, expected: usize) -> Option<Vec<T>> {
    let cards = cards.collect::<Option<Vec<T>>>()?;
    if expected == 0 || cards.len() != expected {
        return None;
    }
    Some(cards)
}

fn card_style(index: usize, card: &CardEntry, config: &StackConfig) -> String {
    format!(
        "position: absolute; top: {}px; left: 0px; width: 100vw; \
         border-top-left-radius: 36px; border-top-right-radius: 36px; \
         border-bottom-left-radius: 0px; border-bottom-right-radius: 0px; \
         background-color: {}; overflow: hidden;",
        index as f64 * (config.card_height + config.overlap),
        card.background_color,
    )
}

#[function_component(FeatureStack)]
pub fn feature_stack() -> Html {
    let stack_config = StackConfig::default();
    let stack_ref = use_node_ref();
    let card_refs = use_memo(
        |_| CARDS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );

    {
        let stack_ref = stack_ref.clone();
        let card_refs = card_refs.clone();
        use_effect_with_deps(
            move |_| {
                let last_logged = Rc::new(Cell::new(None::<(usize, bool)>));
                let animate = move || {
                    let stack = match stack_ref.cast::<HtmlElement>() {
                        Some(stack) => stack,
                        None => return,
                    };
                    let cards = match mounted_cards(
                        card_refs.iter().map(|card| card.cast::<HtmlElement>()),
                        CARDS.len(),
                    ) {
                        Some(cards) => cards,
                        None => return,
                    };

                    match animate_stack(&stack, &cards, &stack_config) {
                        Ok(frame) => {
                            let phase = (frame.active_index, frame.end_phase);
                            if last_logged.get() != Some(phase) {
                                last_logged.set(Some(phase));
                                info!(
                                    "feature stack: active card {}, pinned {:?}, end phase {}",
                                    frame.active_index,
                                    frame.cards.iter().position(CardLayout::is_active),
                                    frame.end_phase
                                );
                            }
                        }
                        Err(err) => warn!("feature stack layout skipped: {}", err),
                    }
                };

                // Lay out once before the first scroll event arrives.
                animate();
                let listener = match WindowListener::new(STACK_EVENTS, false, animate) {
                    Ok(listener) => Some(listener),
                    Err(err) => {
                        warn!("feature stack listener not registered: {}", err);
                        None
                    }
                };
                debug!("feature stack mounted");

                move || {
                    drop(listener);
                    debug!("feature stack listeners released");
                }
            },
            (),
        );
    }

    let cards = CARDS
        .iter()
        .zip(card_refs.iter())
        .enumerate()
        .map(|(index, (card, node_ref))| {
            html! {
                <div
                    key={card.title}
                    ref={node_ref.clone()}
                    class="stack-cards__item"
                    style={card_style(index, card, &stack_config)}
                >
                    <div style={format!("display: flex; flex-direction: row; height: {}px;", stack_config.card_height)}>
                        <div style="flex: 1; padding: 2rem; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: left; gap: 0.5rem;">
                            <div style="max-width: 38ch;">
                                <h2 style="font-family: 'Playfair Display', serif; font-size: 2rem; margin-bottom: 0.75rem; color: #111;">
                                    {card.title}
                                </h2>
                                <p style="font-size: 1rem; line-height: 1.6; color: #222; margin: 0;">
                                    {card.description}
                                </p>
                            </div>
                        </div>
                        <div style="flex: 1; height: 100%;">
                            <img
                                src={config::resolve_asset(card.image_ref)}
                                alt={card.title}
                                style="width: 100%; height: 100%; object-fit: cover;"
                            />
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div
            class="stack-cards-wrapper"
            style="position: relative; min-height: 100vh; overflow: hidden; z-index: 1; width: 100vw;"
        >
            <div class="stack-cards" ref={stack_ref} style="position: relative; width: 100vw;">
                { cards }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_mounted_keeps_order() {
        let refs = vec![Some("a"), Some("b"), Some("c")];
        assert_eq!(mounted_cards(refs.into_iter(), 3), Some(vec!["a", "b", "c"]));
    }

    #[test]
    fn unmounted_card_skips_the_tick() {
        let refs = vec![Some(0), None, Some(2)];
        assert_eq!(mounted_cards(refs.into_iter(), 3), None);
    }

    #[test]
    fn missing_or_empty_cards_skip_the_tick() {
        assert_eq!(mounted_cards(vec![Some(0), Some(1)].into_iter(), CARDS.len()), None);
        assert_eq!(mounted_cards(Vec::<Option<u8>>::new().into_iter(), 0), None);
    }
}
