//! Application Context
//!
//! Startup configuration, provided to all components via Leptos Context API.

use web_sys::UrlSearchParams;

/// Which to-do page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Tasks held in memory only
    #[default]
    Local,
    /// Tasks persisted through `/api/tasks`
    Synced,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Local, Variant::Synced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Local => "local",
            Variant::Synced => "synced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Local => "Local",
            Variant::Synced => "Synced",
        }
    }

    /// Unknown names fall back to `Local`
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "synced" | "sync" | "server" => Variant::Synced,
            _ => Variant::Local,
        }
    }
}

/// App-wide configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for `/api/tasks`; empty means same origin
    pub api_base: String,
    /// Page selected at startup
    pub initial_variant: Variant,
}

impl AppConfig {
    /// `variant` is the raw `?variant=` value, already decoded
    pub fn new(api_base: Option<&str>, variant: Option<&str>) -> Self {
        Self {
            api_base: api_base.unwrap_or("").trim_end_matches('/').to_string(),
            initial_variant: variant.map(Variant::from_str).unwrap_or_default(),
        }
    }

    /// `TODO_API_BASE` at build time, `?variant=` from the page URL
    pub fn from_environment() -> Self {
        let variant = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get("variant"));
        let config = Self::new(option_env!("TODO_API_BASE"), variant.as_deref());
        log::info!("[APP] api base {:?}, starting on {:?}", config.api_base, config.initial_variant);
        config
    }
}
