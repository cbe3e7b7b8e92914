use serde::Deserialize;

/// Served next to index.html; every key is optional.
pub const CONFIG_URL: &str = "./planner-config.json";

const DEFAULT_API_BASE: &str = "/api/travel";
const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    pub api_base: String,
    pub toast_ms: u32,
    /// Insert backend text into the page without escaping.
    pub trust_backend_html: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            toast_ms: DEFAULT_TOAST_MS,
            trust_backend_html: false,
        }
    }
}

impl PlannerConfig {
    pub fn from_json(s: &str) -> Result<Self, String> {
        let mut cfg: PlannerConfig =
            serde_json::from_str(s).map_err(|e| format!("Failed parsing planner-config.json: {e}"))?;
        if cfg.api_base.trim().is_empty() {
            cfg.api_base = DEFAULT_API_BASE.to_string();
        }
        if cfg.toast_ms == 0 {
            cfg.toast_ms = DEFAULT_TOAST_MS;
        }
        Ok(cfg)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Fetch the optional config file; anything short of a valid file yields the defaults.
pub async fn load() -> PlannerConfig {
    let resp = gloo_net::http::Request::get(CONFIG_URL).send().await;
    let text = match resp {
        Ok(r) if r.ok() => r.text().await.map_err(|e| e.to_string()),
        Ok(r) => Err(format!("HTTP {}", r.status())),
        Err(e) => Err(e.to_string()),
    };

    match text.and_then(|t| PlannerConfig::from_json(&t)) {
        Ok(cfg) => {
            gloo::console::log!(format!("Using API base {}", cfg.api_base));
            cfg
        }
        Err(e) => {
            gloo::console::warn!(format!("No usable {CONFIG_URL} ({e}); using defaults"));
            PlannerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = PlannerConfig::from_json("{}").unwrap();
        assert_eq!(cfg, PlannerConfig::default());
        assert_eq!(cfg.api_base, "/api/travel");
        assert_eq!(cfg.toast_ms, 3000);
        assert!(!cfg.trust_backend_html);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = PlannerConfig::from_json(
            r#"{"apiBase":"https://planner.example.com/api/travel/","toastMs":1500,"trustBackendHtml":true}"#,
        )
        .unwrap();
        assert_eq!(cfg.toast_ms, 1500);
        assert!(cfg.trust_backend_html);
        assert_eq!(
            cfg.endpoint("/plan"),
            "https://planner.example.com/api/travel/plan"
        );
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = PlannerConfig::from_json(r#"{"apiBase":"  ","toastMs":0}"#).unwrap();
        assert_eq!(cfg.api_base, "/api/travel");
        assert_eq!(cfg.toast_ms, 3000);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(PlannerConfig::from_json("not json").is_err());
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.endpoint("health"), "/api/travel/health");
        assert_eq!(cfg.endpoint("/suggest"), "/api/travel/suggest");
    }
}
