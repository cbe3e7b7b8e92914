use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{notify, spawn_request, use_config, use_planner, SubmitButton};
use crate::api;
use crate::model::{require_destination, Feature};
use crate::render;
use crate::state::ToastKind;

#[function_component(TipsForm)]
pub fn tips_form() -> Html {
    let state = use_planner();
    let cfg = use_config();
    let destination = use_state(String::new);
    let loading = state.is_loading(Feature::Tips);

    let oninput = {
        let destination = destination.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            destination.set(input.value());
        })
    };

    let onsubmit = {
        let state = state.clone();
        let destination = destination.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.is_loading(Feature::Tips) {
                return;
            }

            let dest = match require_destination(&destination) {
                Ok(d) => d.to_string(),
                Err(err) => {
                    notify(&state, ToastKind::Error, err.to_string());
                    return;
                }
            };

            let cfg = cfg.clone();
            let escape = !cfg.trust_backend_html;
            spawn_request(
                state.clone(),
                Feature::Tips,
                async move { api::tips(&cfg, &dest).await },
                move |tips| render::tips_html(tips, escape),
            );
        })
    };

    html! {
        <form id="travel-tips-form" class="form" {onsubmit}>
            <div class="form-group">
                <label for="tips-destination">{ "Destination *" }</label>
                <input
                    id="tips-destination"
                    type="text"
                    placeholder="e.g., Tokyo, Japan"
                    required=true
                    value={(*destination).clone()}
                    {oninput}
                />
            </div>

            <SubmitButton label="Get Travel Tips" {loading} />
        </form>
    }
}
