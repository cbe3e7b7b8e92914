//! Shared UI state: active tab, the three result panels, per-form loading
//! flags and the single toast. Every change goes through [`PlannerAction`].

use std::rc::Rc;

use yew::prelude::*;

use crate::model::Feature;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    pub html: Option<AttrValue>,
    pub visible: bool,
    /// Bumped on every successful render so the panel can scroll itself into view.
    pub revision: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: AttrValue,
    pub kind: ToastKind,
    pub visible: bool,
    /// Identifies the message currently shown; a hide for an older seq is ignored.
    pub seq: u64,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            message: AttrValue::default(),
            kind: ToastKind::Info,
            visible: false,
            seq: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    pub active_tab: Feature,
    panels: [Panel; 3],
    loading: [bool; 3],
    pub toast: Toast,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            active_tab: Feature::Plan,
            panels: Default::default(),
            loading: [false; 3],
            toast: Toast::default(),
        }
    }
}

impl PlannerState {
    pub fn panel(&self, f: Feature) -> &Panel {
        &self.panels[f.index()]
    }

    pub fn is_loading(&self, f: Feature) -> bool {
        self.loading[f.index()]
    }

    fn close_all(&mut self) {
        for p in self.panels.iter_mut() {
            p.visible = false;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerAction {
    SwitchTab(Feature),
    ClosePanel(Feature),
    RequestStarted(Feature),
    RequestSucceeded { feature: Feature, html: AttrValue },
    RequestFailed(Feature),
    ShowToast { kind: ToastKind, message: AttrValue },
    HideToast { seq: u64 },
}

impl Reducible for PlannerState {
    type Action = PlannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            PlannerAction::SwitchTab(f) => {
                next.active_tab = f;
                next.close_all();
            }
            PlannerAction::ClosePanel(f) => {
                next.panels[f.index()].visible = false;
            }
            PlannerAction::RequestStarted(f) => {
                next.loading[f.index()] = true;
            }
            PlannerAction::RequestSucceeded { feature, html } => {
                next.loading[feature.index()] = false;
                let panel = &mut next.panels[feature.index()];
                panel.html = Some(html);
                panel.visible = true;
                panel.revision = panel.revision.wrapping_add(1);
            }
            PlannerAction::RequestFailed(f) => {
                next.loading[f.index()] = false;
            }
            PlannerAction::ShowToast { kind, message } => {
                next.toast = Toast {
                    message,
                    kind,
                    visible: true,
                    seq: self.toast.seq + 1,
                };
            }
            PlannerAction::HideToast { seq } => {
                if seq != self.toast.seq || !self.toast.visible {
                    return self;
                }
                next.toast.visible = false;
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlanResult;
    use crate::render;

    fn apply(state: Rc<PlannerState>, actions: Vec<PlannerAction>) -> Rc<PlannerState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn fresh() -> Rc<PlannerState> {
        Rc::new(PlannerState::default())
    }

    #[test]
    fn starts_on_plan_tab_with_everything_hidden() {
        let s = fresh();
        assert_eq!(s.active_tab, Feature::Plan);
        for f in Feature::ALL {
            assert!(!s.panel(f).visible);
            assert!(!s.is_loading(f));
        }
        assert!(!s.toast.visible);
    }

    #[test]
    fn successful_plan_request_shows_panel_and_toast() {
        let result: PlanResult = serde_json::from_str(
            r#"{"destination":"Paris","numberOfDays":3,"overview":"Day 1\n- Visit Louvre"}"#,
        )
        .unwrap();
        let html = render::plan_html(&result, true);

        let s = fresh().reduce(PlannerAction::RequestStarted(Feature::Plan));
        assert!(s.is_loading(Feature::Plan));
        assert!(!s.panel(Feature::Plan).visible);

        let s = apply(
            s,
            vec![
                PlannerAction::RequestSucceeded {
                    feature: Feature::Plan,
                    html: html.into(),
                },
                PlannerAction::ShowToast {
                    kind: ToastKind::Success,
                    message: Feature::Plan.success_message().into(),
                },
            ],
        );

        let panel = s.panel(Feature::Plan);
        assert!(panel.visible);
        assert_eq!(panel.revision, 1);
        let body = panel.html.as_ref().unwrap();
        let h = body.find(">Day 1</h4>").unwrap();
        let li = body.find(">Visit Louvre</li>").unwrap();
        assert!(h < li);

        assert!(!s.is_loading(Feature::Plan));
        assert!(s.toast.visible);
        assert_eq!(s.toast.kind, ToastKind::Success);
        assert_eq!(s.toast.message.as_str(), "Travel plan generated successfully!");
    }

    #[test]
    fn failed_tips_request_restores_control_and_keeps_panel_hidden() {
        let s = apply(
            fresh(),
            vec![
                PlannerAction::RequestStarted(Feature::Tips),
                PlannerAction::RequestFailed(Feature::Tips),
                PlannerAction::ShowToast {
                    kind: ToastKind::Error,
                    message: Feature::Tips.failure_message().into(),
                },
            ],
        );
        assert!(!s.panel(Feature::Tips).visible);
        assert!(s.panel(Feature::Tips).html.is_none());
        assert!(!s.is_loading(Feature::Tips));
        assert_eq!(s.toast.kind, ToastKind::Error);
        assert!(s.toast.visible);
    }

    #[test]
    fn failure_leaves_previous_result_untouched() {
        let s = apply(
            fresh(),
            vec![
                PlannerAction::RequestStarted(Feature::Suggest),
                PlannerAction::RequestSucceeded {
                    feature: Feature::Suggest,
                    html: "<p>Lisbon</p>".into(),
                },
            ],
        );
        let before = s.panel(Feature::Suggest).clone();

        let s = apply(
            s,
            vec![
                PlannerAction::RequestStarted(Feature::Suggest),
                PlannerAction::RequestFailed(Feature::Suggest),
            ],
        );
        assert_eq!(s.panel(Feature::Suggest), &before);
    }

    #[test]
    fn switching_tabs_hides_every_panel() {
        for target in Feature::ALL {
            let s = apply(
                fresh(),
                vec![
                    PlannerAction::RequestSucceeded {
                        feature: Feature::Plan,
                        html: "<p>x</p>".into(),
                    },
                    PlannerAction::RequestSucceeded {
                        feature: Feature::Tips,
                        html: "<p>y</p>".into(),
                    },
                    PlannerAction::SwitchTab(target),
                ],
            );
            assert_eq!(s.active_tab, target);
            for f in Feature::ALL {
                assert!(!s.panel(f).visible, "{f:?} still visible after switching to {target:?}");
            }
        }
    }

    #[test]
    fn close_panel_only_affects_its_own_panel() {
        let s = apply(
            fresh(),
            vec![
                PlannerAction::RequestSucceeded {
                    feature: Feature::Plan,
                    html: "<p>x</p>".into(),
                },
                PlannerAction::RequestSucceeded {
                    feature: Feature::Tips,
                    html: "<p>y</p>".into(),
                },
                PlannerAction::ClosePanel(Feature::Plan),
            ],
        );
        assert!(!s.panel(Feature::Plan).visible);
        assert!(s.panel(Feature::Tips).visible);
    }

    #[test]
    fn loading_flags_are_per_feature() {
        let s = apply(
            fresh(),
            vec![
                PlannerAction::RequestStarted(Feature::Plan),
                PlannerAction::RequestStarted(Feature::Suggest),
                PlannerAction::RequestFailed(Feature::Plan),
            ],
        );
        assert!(!s.is_loading(Feature::Plan));
        assert!(!s.is_loading(Feature::Tips));
        assert!(s.is_loading(Feature::Suggest));
    }

    #[test]
    fn second_toast_replaces_first_and_stale_hide_is_ignored() {
        let s = apply(
            fresh(),
            vec![
                PlannerAction::ShowToast {
                    kind: ToastKind::Success,
                    message: "first".into(),
                },
                PlannerAction::ShowToast {
                    kind: ToastKind::Error,
                    message: "second".into(),
                },
            ],
        );
        assert_eq!(s.toast.message.as_str(), "second");
        assert_eq!(s.toast.seq, 2);

        // the first message's timer fires
        let s = s.reduce(PlannerAction::HideToast { seq: 1 });
        assert!(s.toast.visible);
        assert_eq!(s.toast.message.as_str(), "second");

        let s = s.reduce(PlannerAction::HideToast { seq: 2 });
        assert!(!s.toast.visible);
    }

    #[test]
    fn hiding_twice_is_a_no_op() {
        let s = apply(
            fresh(),
            vec![
                PlannerAction::ShowToast {
                    kind: ToastKind::Info,
                    message: "hi".into(),
                },
                PlannerAction::HideToast { seq: 1 },
            ],
        );
        let again = s.clone().reduce(PlannerAction::HideToast { seq: 1 });
        assert!(Rc::ptr_eq(&s, &again));
    }
}
