use yew::prelude::*;

use super::use_planner;
use crate::model::Feature;
use crate::state::PlannerAction;

#[function_component(TabBar)]
pub fn tab_bar() -> Html {
    let state = use_planner();
    let active = state.active_tab;

    html! {
        <nav class="tabs">
            { for Feature::ALL.iter().map(|&f| {
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |_: MouseEvent| state.dispatch(PlannerAction::SwitchTab(f)))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("tab-btn", (f == active).then_some("active"))}
                        data-tab={f.key()}
                        {onclick}
                    >
                        { f.tab_label() }
                    </button>
                }
            }) }
        </nav>
    }
}
