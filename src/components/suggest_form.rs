use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::{spawn_request, use_config, use_planner, SubmitButton};
use crate::api;
use crate::model::Feature;
use crate::render;

#[function_component(SuggestForm)]
pub fn suggest_form() -> Html {
    let state = use_planner();
    let cfg = use_config();
    let preferences = use_state(String::new);
    let loading = state.is_loading(Feature::Suggest);

    let oninput = {
        let preferences = preferences.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            preferences.set(area.value());
        })
    };

    // Empty preferences are allowed; the backend treats them as "anything".
    let onsubmit = {
        let state = state.clone();
        let preferences = preferences.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.is_loading(Feature::Suggest) {
                return;
            }

            let prefs = (*preferences).clone();
            let cfg = cfg.clone();
            let escape = !cfg.trust_backend_html;
            spawn_request(
                state.clone(),
                Feature::Suggest,
                async move { api::suggest(&cfg, &prefs).await },
                move |s| render::suggest_html(s, escape),
            );
        })
    };

    html! {
        <form id="suggest-form" class="form" {onsubmit}>
            <div class="form-group">
                <label for="preferences">{ "Your Travel Preferences" }</label>
                <textarea
                    id="preferences"
                    rows="4"
                    placeholder="e.g., beaches, warm weather, good food, affordable, relaxing"
                    value={(*preferences).clone()}
                    {oninput}
                />
            </div>

            <SubmitButton label="Get Suggestions" {loading} />
        </form>
    }
}
