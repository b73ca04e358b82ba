use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Experiment milestones reported to Umami
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    HeatingStarted,
    PlanckStarted,
    PortalOpened,
    ExperimentReset,
}

impl Milestone {
    pub fn event_name(&self) -> &'static str {
        match self {
            Milestone::HeatingStarted => "heating-started",
            Milestone::PlanckStarted => "planck-started",
            Milestone::PortalOpened => "portal-opened",
            Milestone::ExperimentReset => "experiment-reset",
        }
    }
}

/// Track a milestone in Umami analytics.
/// Fails silently if Umami is not loaded (e.g., blocked by adblocker)
pub fn track(milestone: Milestone) {
    let loaded = js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|val| val.as_bool())
        .unwrap_or(false);
    if loaded {
        umami_track(milestone.event_name());
    }
}
