// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery_page;
use crate::ui::viewer::component;
use iced::window;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(gallery_page::Message),
    Viewer(component::Message),
    /// Window events, used to learn the window id and to notice mode changes
    /// made outside the application.
    Window {
        id: window::Id,
        event: window::Event,
    },
    /// Result of querying the window mode.
    WindowModeQueried(window::Mode),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Config directory override.
    pub config_dir: Option<String>,
    /// Manifest file, taking precedence over any configured source.
    pub manifest: Option<String>,
    /// Remote endpoint base URL.
    pub remote_url: Option<String>,
    /// Public API key for the remote endpoint.
    pub api_key: Option<String>,
}
