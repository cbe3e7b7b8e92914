use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::{use_config, use_planner};
use crate::state::PlannerAction;

/// The single pending auto-hide. Arming drops, and so cancels, whatever was pending.
pub struct HideTimer<H> {
    pending: Option<H>,
}

impl<H> Default for HideTimer<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> HideTimer<H> {
    pub fn arm(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[function_component(Toast)]
pub fn toast() -> Html {
    let state = use_planner();
    let cfg = use_config();
    let timer = use_mut_ref(HideTimer::<Timeout>::default);
    let t = state.toast.clone();

    {
        let state = state.clone();
        let ms = cfg.toast_ms;
        use_effect_with((t.seq, t.visible), move |&(seq, visible)| {
            if visible {
                timer.borrow_mut().arm(Timeout::new(ms, move || {
                    state.dispatch(PlannerAction::HideToast { seq })
                }));
            } else {
                timer.borrow_mut().clear();
            }
            || ()
        });
    }

    html! {
        <div
            id="toast"
            class={classes!("toast", t.kind.class(), t.visible.then_some("show"))}
            role="status"
        >
            { t.message.clone() }
        </div>
    }
}
