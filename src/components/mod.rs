use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::PlannerConfig;
use crate::error::ApiError;
use crate::model::Feature;
use crate::state::{PlannerAction, PlannerState, ToastKind};

mod plan_form;
mod result_panel;
mod suggest_form;
mod tabs;
mod tips_form;
mod toast;

pub use plan_form::PlanForm;
pub use result_panel::ResultPanel;
pub use suggest_form::SuggestForm;
pub use tabs::TabBar;
pub use tips_form::TipsForm;
pub use toast::Toast;

pub type PlannerContext = UseReducerHandle<PlannerState>;

#[hook]
pub fn use_planner() -> PlannerContext {
    use_context::<PlannerContext>().expect("PlannerContext is provided by App")
}

#[hook]
pub fn use_config() -> PlannerConfig {
    use_context::<PlannerConfig>().unwrap_or_default()
}

pub fn notify(state: &PlannerContext, kind: ToastKind, message: impl Into<AttrValue>) {
    state.dispatch(PlannerAction::ShowToast {
        kind,
        message: message.into(),
    });
}

/// Runs one backend call for `feature`: loading on, await, render or report, loading off.
pub fn spawn_request<T, Fut, R>(state: PlannerContext, feature: Feature, call: Fut, render: R)
where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    R: FnOnce(&T) -> String + 'static,
{
    state.dispatch(PlannerAction::RequestStarted(feature));

    spawn_local(async move {
        match call.await {
            Ok(data) => {
                state.dispatch(PlannerAction::RequestSucceeded {
                    feature,
                    html: render(&data).into(),
                });
                notify(&state, ToastKind::Success, feature.success_message());
            }
            Err(e) => {
                gloo::console::error!(format!("{} request failed: {e}", feature.key()));
                state.dispatch(PlannerAction::RequestFailed(feature));
                notify(&state, ToastKind::Error, feature.failure_message());
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub loading: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button
            type="submit"
            class={classes!("btn-primary", props.loading.then_some("loading"))}
            disabled={props.loading}
        >
            <span class="btn-text">{ props.label.clone() }</span>
            <span class="btn-loader" aria-hidden="true"></span>
        </button>
    }
}
