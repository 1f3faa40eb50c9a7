//! Page configuration.
//!
//! Every value has a default matching the shipped markup. A page can override
//! any subset with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "phrases": ["Rustacean", "Tinkerer"], "banner": { "displayMs": 8000 } }
//! </script>
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::contact::{BannerTiming, RELAY_ENDPOINT};
use crate::error::{FolioError, FolioResult};
use crate::typewriter::{TypewriterTiming, DEFAULT_PHRASES};

/// Id of the inline script element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Ids and selectors of the markup each component binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub theme_toggle_id: String,
    pub menu_toggle_id: String,
    pub nav_links: String,
    pub nav_link: String,
    pub sections: String,
    pub typed_text_id: String,
    pub scroll_top_id: String,
    pub fade_in: String,
    pub skill_item: String,
    pub contact_form_id: String,
    pub submit_button: String,
    pub loader: String,
    pub page_anchor: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle_id: "themeToggle".into(),
            menu_toggle_id: "menuToggle".into(),
            nav_links: ".nav-links".into(),
            nav_link: ".nav-links a".into(),
            sections: "section".into(),
            typed_text_id: "typedText".into(),
            scroll_top_id: "scrollTop".into(),
            fade_in: ".fade-in".into(),
            skill_item: ".skill-item".into(),
            contact_form_id: "contactForm".into(),
            submit_button: r#"button[type="submit"]"#.into(),
            loader: ".loader-wrapper".into(),
            page_anchor: r##"a[href^="#"]"##.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub selectors: Selectors,
    pub phrases: Vec<String>,
    pub typewriter: TypewriterTiming,
    pub relay_endpoint: String,
    pub banner: BannerTiming,
    pub loader_delay_ms: u64,
    /// Most verbose level written to the console: trace, debug, info, warn, error or off
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
            typewriter: TypewriterTiming::default(),
            relay_endpoint: RELAY_ENDPOINT.to_string(),
            banner: BannerTiming::default(),
            loader_delay_ms: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse overrides; fields not present keep their defaults.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: PageConfig =
            serde_json::from_str(json).map_err(|e| FolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.phrases.is_empty() {
            return Err(FolioError::Config("phrases must not be empty".to_string()));
        }
        if self.relay_endpoint.is_empty() {
            return Err(FolioError::Config("relayEndpoint must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn loader_delay(&self) -> Duration {
        Duration::from_millis(self.loader_delay_ms)
    }
}
