use yew::prelude::*;

use crate::components::feature_stack::FeatureStack;
use crate::components::quotes_orbit::QuotesOrbit;
use crate::dom;

#[function_component(Landing)]
pub fn landing() -> Html {
    let scrollbar_width = dom::window()
        .and_then(|window| dom::scrollbar_width(&window))
        .unwrap_or(0.0);

    html! {
        <div
            id="feature-stack"
            class="container"
            style="width: 100vw; margin: 0; padding: 2rem 0; position: relative; z-index: 1;"
        >
            <FeatureStack />
            // White panel sliding over the end of the stack
            <div style={format!(
                "width: calc(100vw - {}px); border-top-left-radius: 36px; border-top-right-radius: 36px; \
                 overflow: hidden; background: #ffffff; position: relative; z-index: 1000; \
                 margin-top: -34px; box-shadow: 0 -8px 24px rgba(0,0,0,0.06);",
                scrollbar_width
            )}>
                <QuotesOrbit />
            </div>
        </div>
    }
}
