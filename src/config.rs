use serde::Deserialize;
use web_sys::window;

// Fixed page identifiers
pub const CONFIG_ELEMENT_ID: &str = "board-config";
pub const LIST_ID: &str = "activities-list";
pub const SELECT_ID: &str = "activity";
pub const FORM_ID: &str = "signup-form";
pub const MESSAGE_ID: &str = "message";
pub const EMAIL_ID: &str = "email";

// User-facing copy
pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FALLBACK_TEXT: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    pub message_timeout_ms: u32,
    pub school_name: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
            school_name: "Mergington High School".into(),
        }
    }
}

impl BoardConfig {
    /// Blank input yields the defaults; missing fields fall back individually.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Reads the `<script id="board-config" type="application/json">` block
    /// embedded in index.html.
    pub fn from_page() -> Self {
        let Some(raw) = embedded_config() else {
            log::debug!("no #{CONFIG_ELEMENT_ID} block, using defaults");
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::error!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}

fn embedded_config() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content()
}
