use crate::pane::{LayoutState, OvershootPolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial window width
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial window height
    #[serde(default = "default_height")]
    pub height: u32,

    /// Maximize window on startup
    #[serde(default = "default_maximize")]
    pub maximize: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Layout at startup, must be symmetric and sum to 100
    #[serde(default)]
    pub initial: LayoutState,

    /// What happens when a boundary is dragged past the midpoint: "mirror" or "clamp"
    #[serde(default)]
    pub overshoot: OvershootPolicy,

    /// Width of the drawn handle bar in pixels
    #[serde(default = "default_handle_width")]
    pub handle_width: u32,

    /// Distance in pixels from a boundary that still grabs its handle
    #[serde(default = "default_grab_tolerance")]
    pub grab_tolerance: u32,

    /// Percentage moved per arrow key press
    #[serde(default = "default_nudge_step")]
    pub nudge_step: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_background")]
    pub background: String,

    #[serde(default = "default_margin")]
    pub margin: String,

    #[serde(default = "default_center")]
    pub center: String,

    #[serde(default = "default_handle")]
    pub handle: String,

    #[serde(default = "default_active_handle")]
    pub active_handle: String,
}

// Default functions
fn default_title() -> String {
    "tripane".to_string()
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    800
}

fn default_maximize() -> bool {
    false
}

fn default_handle_width() -> u32 {
    4
}

fn default_grab_tolerance() -> u32 {
    8
}

fn default_nudge_step() -> f32 {
    2.0
}

fn default_background() -> String {
    "#1e1e2e".to_string()
}

fn default_margin() -> String {
    "#313244".to_string()
}

fn default_center() -> String {
    "#eff1f5".to_string()
}

fn default_handle() -> String {
    "#6c7086".to_string()
}

fn default_active_handle() -> String {
    "#89b4fa".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            maximize: default_maximize(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            initial: LayoutState::default(),
            overshoot: OvershootPolicy::default(),
            handle_width: default_handle_width(),
            grab_tolerance: default_grab_tolerance(),
            nudge_step: default_nudge_step(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            margin: default_margin(),
            center: default_center(),
            handle: default_handle(),
            active_handle: default_active_handle(),
        }
    }
}
