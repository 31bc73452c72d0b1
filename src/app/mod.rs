// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery page and the
//! viewer.
//!
//! The `App` struct wires together the page, the viewer, localization and
//! window state, and translates component effects into work on the other
//! component or on the window.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::source::{ContentSource, SourceSettings};
use crate::ui::gallery_page;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component::{self, ViewerSettings};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    page: gallery_page::State,
    viewer: component::State,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
    /// Localized key of a startup warning shown above the page.
    warning_key: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer_open", &self.viewer.is_open())
            .field("records", &self.page.records().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Merges CLI flags, the environment and `[source]` config into source
/// settings. Flags win over the environment, which wins over the file.
fn source_settings(flags: &Flags, config: &Config) -> SourceSettings {
    let mut settings = config.source.to_settings(paths::config_dir().as_deref());
    if let Some(manifest) = &flags.manifest {
        settings.manifest = Some(PathBuf::from(manifest));
    }
    if let Some(url) = &flags.remote_url {
        settings.remote_url = Some(url.clone());
        // An explicit URL replaces a manifest that only came from the file.
        if flags.manifest.is_none() {
            settings.manifest = None;
        }
    }
    if let Some(key) = flags.api_key.clone().or_else(paths::env_api_key) {
        settings.api_key = Some(key);
    }
    settings
}

impl App {
    /// Initializes application state and starts fetching gallery records.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        match config::write_defaults_if_missing(None) {
            Ok(Some(path)) => tracing::info!(path = %path.display(), "wrote default settings"),
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "could not write default settings"),
        }

        let (config, warning_key) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let source: Result<ContentSource, Error> =
            ContentSource::from_settings(&source_settings(&flags, &config));

        let viewer = component::State::new(ViewerSettings::from(&config.viewer));

        let mut page = gallery_page::State::new(source, config.page.columns());
        let task = page.load().map(Message::Page);

        let app = App {
            i18n,
            page,
            viewer,
            window_id: None,
            theme_mode: config.general.theme_mode,
            warning_key,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_viewer_subscription(self.viewer.is_open()),
            self.viewer.subscription().map(Message::Viewer),
            self.page.subscription().map(Message::Page),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            page: &mut self.page,
            viewer: &mut self.viewer,
            window_id: &mut self.window_id,
        };

        match message {
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Window { id, event } => update::handle_window_event(&mut ctx, id, &event),
            Message::WindowModeQueried(mode) => update::handle_window_mode(&mut ctx, mode),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: &self.page,
            viewer: &self.viewer,
            warning_key: self.warning_key.as_deref(),
        })
    }
}
