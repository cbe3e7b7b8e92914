use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{notify, spawn_request, use_config, use_planner, SubmitButton};
use crate::api;
use crate::model::{self, Feature};
use crate::render;
use crate::state::ToastKind;

const BUDGETS: &[(&str, &str)] = &[
    ("", "Any budget"),
    ("budget", "Budget"),
    ("moderate", "Moderate"),
    ("luxury", "Luxury"),
];

const STYLES: &[(&str, &str)] = &[
    ("", "Any style"),
    ("relaxed", "Relaxed"),
    ("balanced", "Balanced"),
    ("packed", "Packed"),
];

fn options(choices: &[(&'static str, &'static str)], current: &str) -> Html {
    html! {
        { for choices.iter().map(|(value, label)| html! {
            <option value={*value} selected={*value == current}>{ *label }</option>
        }) }
    }
}

#[function_component(PlanForm)]
pub fn plan_form() -> Html {
    let state = use_planner();
    let cfg = use_config();
    let form = use_state(model::PlanForm::default);
    let loading = state.is_loading(Feature::Plan);

    let set_text = |apply: fn(&mut model::PlanForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let set_choice = |apply: fn(&mut model::PlanForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, select.value());
            form.set(next);
        })
    };

    let on_destination = set_text(|f, v| f.destination = v);
    let on_days = set_text(|f, v| f.number_of_days = v);
    let on_interests = set_text(|f, v| f.interests = v);
    let on_budget = set_choice(|f, v| f.budget = v);
    let on_style = set_choice(|f, v| f.travel_style = v);

    let onsubmit = {
        let state = state.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.is_loading(Feature::Plan) {
                return;
            }

            let req = match form.to_request() {
                Ok(r) => r,
                Err(err) => {
                    gloo::console::warn!(format!("plan form rejected: {err}"));
                    notify(&state, ToastKind::Error, err.to_string());
                    return;
                }
            };

            let cfg = cfg.clone();
            let escape = !cfg.trust_backend_html;
            spawn_request(
                state.clone(),
                Feature::Plan,
                async move { api::plan(&cfg, &req).await },
                move |plan| render::plan_html(plan, escape),
            );
        })
    };

    html! {
        <form id="travel-plan-form" class="form" {onsubmit}>
            <div class="form-group">
                <label for="destination">{ "Destination *" }</label>
                <input
                    id="destination"
                    type="text"
                    placeholder="e.g., Paris, France"
                    required=true
                    value={form.destination.clone()}
                    oninput={on_destination}
                />
            </div>

            <div class="form-group">
                <label for="numberOfDays">{ "Number of Days *" }</label>
                <input
                    id="numberOfDays"
                    type="number"
                    min="1"
                    placeholder="e.g., 5"
                    required=true
                    value={form.number_of_days.clone()}
                    oninput={on_days}
                />
            </div>

            <div class="form-group">
                <label for="interests">{ "Interests" }</label>
                <input
                    id="interests"
                    type="text"
                    placeholder="e.g., culture, food, adventure"
                    value={form.interests.clone()}
                    oninput={on_interests}
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="budget">{ "Budget" }</label>
                    <select id="budget" onchange={on_budget}>
                        { options(BUDGETS, &form.budget) }
                    </select>
                </div>

                <div class="form-group">
                    <label for="travelStyle">{ "Travel Style" }</label>
                    <select id="travelStyle" onchange={on_style}>
                        { options(STYLES, &form.travel_style) }
                    </select>
                </div>
            </div>

            <SubmitButton label="Generate Travel Plan" {loading} />
        </form>
    }
}
