use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use super::use_planner;
use crate::model::Feature;
use crate::state::PlannerAction;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub feature: Feature,
}

fn scroll_into_view(el: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let state = use_planner();
    let node = use_node_ref();
    let feature = props.feature;
    let panel = state.panel(feature).clone();

    // Effects run after the DOM update, so the panel is already displayed here.
    {
        let node = node.clone();
        use_effect_with(panel.revision, move |rev| {
            if *rev > 0 {
                if let Some(el) = node.cast::<Element>() {
                    scroll_into_view(&el);
                }
            }
            || ()
        });
    }

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PlannerAction::ClosePanel(feature)))
    };

    let style = if panel.visible { "display: block;" } else { "display: none;" };
    let content = panel
        .html
        .map(Html::from_html_unchecked)
        .unwrap_or_default();

    html! {
        <div
            id={format!("{}-result", feature.key())}
            class="result-card"
            {style}
            ref={node}
        >
            <div class="result-header">
                <h3>{ feature.panel_title() }</h3>
                <button type="button" class="btn-close" aria-label="Close" onclick={on_close}>
                    { "✕" }
                </button>
            </div>
            <div id={format!("{}-content", feature.key())} class="result-content">
                { content }
            </div>
        </div>
    }
}
