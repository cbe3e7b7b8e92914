// src/main.rs — AI Travel Planner (Rust + Yew + WASM)
// Plan a trip, get destination tips, or ask for suggestions. All text comes
// from the travel-planning backend under /api/travel.

mod api;
mod components;
mod config;
mod error;
mod format;
mod model;
mod render;
mod state;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::{
    notify, PlanForm, PlannerContext, ResultPanel, SuggestForm, TabBar, TipsForm, Toast,
};
use config::PlannerConfig;
use model::Feature;
use state::{PlannerState, ToastKind};

const HEALTH_WARNING: &str =
    "Warning: Could not connect to API. Please ensure the server is running.";

/// Advisory only: the UI stays usable whatever the outcome.
async fn check_health(cfg: &PlannerConfig, state: &PlannerContext) {
    match api::health(cfg).await {
        Ok(Some(h)) => gloo::console::log!(format!(
            "✅ API is connected and ready ({} {})",
            h.service.unwrap_or_default(),
            h.status.unwrap_or_default()
        )),
        Ok(None) => gloo::console::log!("✅ API is connected and ready"),
        Err(e) => {
            gloo::console::warn!(format!("⚠️ API connection issue: {e}"));
            notify(state, ToastKind::Error, HEALTH_WARNING);
        }
    }
}

fn feature_body(f: Feature) -> Html {
    match f {
        Feature::Plan => html! { <PlanForm /> },
        Feature::Tips => html! { <TipsForm /> },
        Feature::Suggest => html! { <SuggestForm /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(PlannerState::default);
    let cfg = use_state(PlannerConfig::default);

    // Resolve config once, then fire the health check against it.
    {
        let state = state.clone();
        let cfg = cfg.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let loaded = config::load().await;
                cfg.set(loaded.clone());
                check_health(&loaded, &state).await;
            });
            || ()
        });
    }

    let active = state.active_tab;

    html! {
        <ContextProvider<PlannerContext> context={state.clone()}>
        <ContextProvider<PlannerConfig> context={(*cfg).clone()}>
            <div class="container">
                <header class="header">
                    <h1>{ "🌍 AI Travel Planner" }</h1>
                    <p class="subtitle">{ "Plan trips, get local tips, and discover where to go next." }</p>
                </header>

                <TabBar />

                <main>
                    { for Feature::ALL.iter().map(|&f| html! {
                        <div
                            id={format!("{}-tab", f.key())}
                            class={classes!("tab-content", (f == active).then_some("active"))}
                        >
                            { feature_body(f) }
                            <ResultPanel feature={f} />
                        </div>
                    }) }
                </main>

                <footer class="footer">
                    { "Front-end: Rust + Yew WASM · Results are generated by AI; double-check before you book." }
                </footer>
            </div>

            <Toast />
        </ContextProvider<PlannerConfig>>
        </ContextProvider<PlannerContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
