// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer component encapsulating state and update logic.
//!
//! The viewer shows one image of an [`ImageSequence`] at a time. The host
//! drives it with [`Message::Open`] and [`Message::Close`] and learns about
//! user actions through the returned [`Effect`]. Everything asynchronous the
//! viewer needs (image loads, neighbor preloads, thumbnails, the close reset
//! timer) comes back as a [`Task`] that resolves into another [`Message`].

use super::fullscreen::FullscreenState;
use super::navigation::{self, Direction};
use super::reset::PendingReset;
use super::swipe::SwipeTracker;
use crate::config::{self, ViewerConfig};
use crate::error::Error;
use crate::gallery::{ImageDescriptor, ImageSequence, ImagesInput};
use crate::media::{self, AssetCache, CacheConfig, ImageData};
use crate::ui::widgets::animated_spinner;
use iced::keyboard::{self, key::Named};
use iced::{touch, Subscription, Task};
use std::collections::HashMap;
use std::time::Duration;

/// Longest edge of thumbnail strip images.
pub const THUMBNAIL_MAX_SIDE: u32 = 128;

/// Independent display toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub show_thumbnails: bool,
    pub show_navigation: bool,
    pub show_caption: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            show_thumbnails: true,
            show_navigation: true,
            show_caption: true,
        }
    }
}

/// Construction-time settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub options: ViewerOptions,
    pub close_reset_delay: Duration,
    pub swipe_threshold: f32,
    pub cache_max_images: usize,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            options: ViewerOptions::default(),
            close_reset_delay: Duration::from_millis(config::DEFAULT_CLOSE_RESET_DELAY_MS),
            swipe_threshold: config::DEFAULT_SWIPE_THRESHOLD_PX,
            cache_max_images: config::DEFAULT_CACHE_MAX_IMAGES,
        }
    }
}

impl From<&ViewerConfig> for ViewerSettings {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            options: ViewerOptions {
                show_thumbnails: config.show_thumbnails,
                show_navigation: config.show_navigation,
                show_caption: config.show_caption,
            },
            close_reset_delay: config.close_reset_delay(),
            swipe_threshold: config.swipe_threshold(),
            cache_max_images: config.cache_max_images(),
        }
    }
}

/// What the image pane currently holds.
#[derive(Debug, Clone, Default)]
pub enum Slot {
    #[default]
    Pending,
    Ready(ImageData),
    Broken,
}

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(ImageData),
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Show the viewer starting at `initial_index`.
    Open { initial_index: usize },
    /// The host picked a new starting index.
    SetInitialIndex(usize),
    Close,
    NavigateNext,
    NavigatePrevious,
    JumpTo(usize),
    ToggleFullscreen,
    /// Window mode reported by the host after a request or a resize.
    FullscreenChanged(bool),
    KeyPressed(keyboard::Key),
    Touch(touch::Event),
    ImageLoaded {
        source: String,
        result: Result<ImageData, Error>,
    },
    ThumbnailLoaded {
        source: String,
        result: Result<ImageData, Error>,
    },
    CloseResetElapsed(u64),
    SpinnerTick,
    /// Right and middle presses on viewer surfaces land here and are dropped.
    ContentGuard,
}

/// Notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user dismissed the viewer. When the window was fullscreen the host
    /// should restore windowed mode.
    Closed { exit_fullscreen: bool },
    /// The displayed index changed.
    IndexChanged(usize),
    /// Put the window in (or out of) fullscreen.
    SetFullscreen(bool),
}

#[derive(Debug)]
pub struct State {
    images: ImageSequence,
    options: ViewerOptions,
    close_reset_delay: Duration,
    is_open: bool,
    current_index: usize,
    is_loading: bool,
    slot: Slot,
    fullscreen: FullscreenState,
    swipe: SwipeTracker,
    reset: PendingReset,
    cache: AssetCache,
    thumbnails: HashMap<String, Thumbnail>,
    spinner_rotation: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ViewerSettings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        Self {
            images: ImageSequence::default(),
            options: settings.options,
            close_reset_delay: settings.close_reset_delay,
            is_open: false,
            current_index: 0,
            is_loading: true,
            slot: Slot::Pending,
            fullscreen: FullscreenState::default(),
            swipe: SwipeTracker::new(settings.swipe_threshold),
            reset: PendingReset::default(),
            cache: AssetCache::new(CacheConfig::with_max_images(settings.cache_max_images)),
            thumbnails: HashMap::new(),
            spinner_rotation: 0.0,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    #[must_use]
    pub fn images(&self) -> &ImageSequence {
        &self.images
    }

    #[must_use]
    pub fn options(&self) -> ViewerOptions {
        self.options
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageDescriptor> {
        self.images.get(self.current_index)
    }

    #[must_use]
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    #[must_use]
    pub fn thumbnail(&self, source: &str) -> Option<&Thumbnail> {
        self.thumbnails.get(source)
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn cache(&self) -> &AssetCache {
        &self.cache
    }

    #[must_use]
    pub fn is_tracking_swipe(&self) -> bool {
        self.swipe.is_tracking()
    }

    #[must_use]
    pub fn has_pending_reset(&self) -> bool {
        self.reset.is_pending()
    }

    /// Navigation controls are only meaningful with more than one image.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.images.has_multiple()
    }

    fn current_source(&self) -> Option<&str> {
        self.current_image().map(|image| image.source.as_str())
    }

    // ------------------------------------------------------------------
    // Host inputs
    // ------------------------------------------------------------------

    /// Replaces the image sequence.
    ///
    /// While open, an index that no longer exists falls back to the first
    /// image, and an empty sequence closes the viewer.
    pub fn set_images(&mut self, input: impl Into<ImagesInput>) -> (Effect, Task<Message>) {
        self.images = input.into().normalize();
        self.thumbnails
            .retain(|source, _| self.images.iter().any(|image| &image.source == source));

        let index_lost = self.current_index >= self.images.len();
        if !self.is_open {
            if index_lost {
                self.current_index = 0;
            }
            return (Effect::None, Task::none());
        }

        if self.images.is_empty() {
            return self.close();
        }

        let effect = if index_lost {
            self.current_index = 0;
            Effect::IndexChanged(0)
        } else {
            Effect::None
        };
        (effect, self.begin_display())
    }

    pub fn set_options(&mut self, options: ViewerOptions) {
        self.options = options;
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Open { initial_index } => self.open(initial_index),
            Message::SetInitialIndex(index) => self.apply_initial_index(index),
            Message::Close => self.close(),
            Message::NavigateNext => self.navigate(Direction::Next),
            Message::NavigatePrevious => self.navigate(Direction::Previous),
            Message::JumpTo(index) => self.jump_to(index),
            Message::ToggleFullscreen => self.toggle_fullscreen(),
            Message::FullscreenChanged(actual) => {
                self.fullscreen.reconcile(actual);
                (Effect::None, Task::none())
            }
            Message::KeyPressed(key) => self.handle_key(&key),
            Message::Touch(event) => self.handle_touch(event),
            Message::ImageLoaded { source, result } => {
                self.handle_image_loaded(source, result);
                (Effect::None, Task::none())
            }
            Message::ThumbnailLoaded { source, result } => {
                let entry = match result {
                    Ok(image) => Thumbnail::Ready(image),
                    Err(err) => {
                        tracing::debug!(%source, %err, "thumbnail failed");
                        Thumbnail::Failed
                    }
                };
                if let Some(slot) = self.thumbnails.get_mut(&source) {
                    *slot = entry;
                }
                (Effect::None, Task::none())
            }
            Message::CloseResetElapsed(generation) => {
                if self.reset.complete(generation) && !self.is_open {
                    self.apply_reset();
                }
                (Effect::None, Task::none())
            }
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::next_rotation(self.spinner_rotation);
                (Effect::None, Task::none())
            }
            Message::ContentGuard => (Effect::None, Task::none()),
        }
    }

    /// Spinner animation while the active image loads.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_open && self.is_loading {
            iced::time::every(animated_spinner::TICK_INTERVAL).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    fn open(&mut self, initial_index: usize) -> (Effect, Task<Message>) {
        self.reset.cancel();

        if self.images.is_empty() {
            tracing::debug!("ignoring open request for an empty gallery");
            return (Effect::None, Task::none());
        }

        if initial_index < self.images.len() {
            self.current_index = initial_index;
        } else {
            tracing::debug!(
                initial_index,
                len = self.images.len(),
                "ignoring out-of-range initial index"
            );
            if self.current_index >= self.images.len() {
                self.current_index = 0;
            }
        }

        self.is_open = true;
        self.swipe.reset();
        (Effect::None, self.begin_display())
    }

    fn apply_initial_index(&mut self, index: usize) -> (Effect, Task<Message>) {
        if !self.is_open || index == self.current_index {
            return (Effect::None, Task::none());
        }
        if index >= self.images.len() {
            tracing::debug!(index, "ignoring out-of-range initial index");
            return (Effect::None, Task::none());
        }
        self.current_index = index;
        (Effect::None, self.begin_display())
    }

    fn close(&mut self) -> (Effect, Task<Message>) {
        if !self.is_open {
            return (Effect::None, Task::none());
        }
        self.is_open = false;
        self.swipe.reset();
        let exit_fullscreen = self.fullscreen.request(false).is_some();

        let task = if self.close_reset_delay.is_zero() {
            self.apply_reset();
            Task::none()
        } else {
            self.reset
                .schedule(self.close_reset_delay)
                .map(Message::CloseResetElapsed)
        };
        (Effect::Closed { exit_fullscreen }, task)
    }

    fn apply_reset(&mut self) {
        self.current_index = 0;
        self.is_loading = true;
        self.slot = Slot::Pending;
        self.fullscreen.reset();
    }

    fn navigate(&mut self, direction: Direction) -> (Effect, Task<Message>) {
        if !self.is_open {
            return (Effect::None, Task::none());
        }
        match navigation::step(self.current_index, self.images.len(), direction) {
            Some(index) => self.show_index(index),
            None => (Effect::None, Task::none()),
        }
    }

    fn jump_to(&mut self, index: usize) -> (Effect, Task<Message>) {
        if !self.is_open {
            return (Effect::None, Task::none());
        }
        match navigation::jump(index, self.images.len()) {
            Some(index) => self.show_index(index),
            None => {
                tracing::debug!(index, "ignoring out-of-range jump");
                (Effect::None, Task::none())
            }
        }
    }

    fn show_index(&mut self, index: usize) -> (Effect, Task<Message>) {
        self.current_index = index;
        (Effect::IndexChanged(index), self.begin_display())
    }

    fn toggle_fullscreen(&mut self) -> (Effect, Task<Message>) {
        if !self.is_open {
            return (Effect::None, Task::none());
        }
        let target = self.fullscreen.toggle();
        (Effect::SetFullscreen(target), Task::none())
    }

    fn handle_key(&mut self, key: &keyboard::Key) -> (Effect, Task<Message>) {
        if !self.is_open {
            return (Effect::None, Task::none());
        }
        match key.as_ref() {
            keyboard::Key::Named(Named::Escape) => self.close(),
            keyboard::Key::Named(Named::ArrowLeft) => self.navigate(Direction::Previous),
            keyboard::Key::Named(Named::ArrowRight) => self.navigate(Direction::Next),
            keyboard::Key::Character("f") => self.toggle_fullscreen(),
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_touch(&mut self, event: touch::Event) -> (Effect, Task<Message>) {
        if !self.is_open {
            return (Effect::None, Task::none());
        }
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.swipe.press(id, position);
                (Effect::None, Task::none())
            }
            touch::Event::FingerMoved { id, position } => {
                if !self.can_navigate() {
                    return (Effect::None, Task::none());
                }
                match self.swipe.moved(id, position) {
                    Some(direction) => self.navigate(direction),
                    None => (Effect::None, Task::none()),
                }
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                self.swipe.release(id);
                (Effect::None, Task::none())
            }
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Marks the current image as loading and schedules everything needed to
    /// show it.
    fn begin_display(&mut self) -> Task<Message> {
        self.is_loading = true;
        self.slot = Slot::Pending;
        Task::batch([
            self.load_current(),
            self.preload_neighbors(),
            self.request_thumbnails(),
        ])
    }

    fn load_current(&mut self) -> Task<Message> {
        let Some(source) = self.current_source().map(str::to_owned) else {
            return Task::none();
        };
        if let Some(image) = self.cache.get(&source) {
            return Task::done(Message::ImageLoaded {
                source,
                result: Ok(image),
            });
        }
        self.fetch(source)
    }

    /// Starts a fetch unless the source is cached or already on its way.
    fn fetch(&mut self, source: String) -> Task<Message> {
        if !self.cache.begin_fetch(&source) {
            return Task::none();
        }
        Task::perform(media::load_image(source.clone()), move |result| {
            Message::ImageLoaded { source, result }
        })
    }

    fn preload_neighbors(&mut self) -> Task<Message> {
        if !self.is_open || !self.can_navigate() {
            return Task::none();
        }
        let neighbors: Vec<String> = self
            .images
            .neighbors(self.current_index)
            .into_iter()
            .map(str::to_owned)
            .collect();
        let tasks: Vec<_> = neighbors
            .into_iter()
            .map(|source| self.fetch(source))
            .collect();
        Task::batch(tasks)
    }

    fn request_thumbnails(&mut self) -> Task<Message> {
        if !self.options.show_thumbnails || !self.can_navigate() {
            return Task::none();
        }
        let mut tasks = Vec::new();
        for image in self.images.iter() {
            if self.thumbnails.contains_key(&image.source) {
                continue;
            }
            self.thumbnails
                .insert(image.source.clone(), Thumbnail::Loading);
            let source = image.source.clone();
            tasks.push(Task::perform(
                media::load_thumbnail(source.clone(), THUMBNAIL_MAX_SIDE),
                move |result| Message::ThumbnailLoaded { source, result },
            ));
        }
        Task::batch(tasks)
    }

    fn handle_image_loaded(&mut self, source: String, result: Result<ImageData, Error>) {
        let is_current = self.is_open && self.current_source() == Some(source.as_str());

        match result {
            Ok(image) => {
                if is_current {
                    self.slot = Slot::Ready(image.clone());
                    self.is_loading = false;
                }
                if !self.cache.contains(&source) {
                    self.cache.insert(source, image);
                }
            }
            Err(err) => {
                self.cache.abandon_fetch(&source);
                if is_current {
                    tracing::warn!(%source, %err, "image failed to load");
                    self.slot = Slot::Broken;
                    self.is_loading = false;
                } else {
                    tracing::debug!(%source, %err, "preload failed");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::touch::Finger;
    use iced::Point;

    fn viewer_with(sources: &[&str]) -> State {
        let mut state = State::default();
        let sources: Vec<String> = sources.iter().map(|s| (*s).to_string()).collect();
        let _ = state.set_images(sources);
        state
    }

    fn abc() -> State {
        viewer_with(&["a.jpg", "b.jpg", "c.jpg"])
    }

    fn open(state: &mut State, index: usize) {
        let _ = state.handle_message(Message::Open {
            initial_index: index,
        });
    }

    fn key(state: &mut State, key: keyboard::Key) -> Effect {
        state.handle_message(Message::KeyPressed(key)).0
    }

    fn named(named: Named) -> keyboard::Key {
        keyboard::Key::Named(named)
    }

    fn test_image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0; 16])
    }

    #[test]
    fn open_applies_initial_index() {
        for i in 0..3 {
            let mut state = abc();
            open(&mut state, i);
            assert!(state.is_open());
            assert_eq!(state.current_index(), i);
            assert!(state.is_loading());
        }
    }

    #[test]
    fn open_with_out_of_range_index_keeps_previous() {
        let mut state = abc();
        open(&mut state, 2);
        let _ = state.handle_message(Message::Close);
        open(&mut state, 7);
        assert!(state.is_open());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn open_empty_gallery_stays_closed() {
        let mut state = State::default();
        open(&mut state, 0);
        assert!(!state.is_open());
    }

    #[test]
    fn arrow_keys_walk_the_example_sequence() {
        let mut state = abc();
        open(&mut state, 1);
        assert_eq!(state.current_index(), 1);

        assert_eq!(key(&mut state, named(Named::ArrowRight)), Effect::IndexChanged(2));
        assert_eq!(state.current_index(), 2);

        key(&mut state, named(Named::ArrowRight));
        assert_eq!(state.current_index(), 0);

        key(&mut state, named(Named::ArrowLeft));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn navigation_sets_loading_until_image_arrives() {
        let mut state = abc();
        open(&mut state, 0);
        let _ = state.handle_message(Message::ImageLoaded {
            source: "a.jpg".into(),
            result: Ok(test_image()),
        });
        assert!(!state.is_loading());

        let _ = state.handle_message(Message::NavigateNext);
        assert!(state.is_loading());
        assert!(matches!(state.slot(), Slot::Pending));
    }

    #[test]
    fn preload_result_does_not_clear_loading() {
        let mut state = abc();
        open(&mut state, 0);
        assert!(state.cache().is_in_flight("b.jpg"));
        assert!(state.cache().is_in_flight("c.jpg"));

        let _ = state.handle_message(Message::ImageLoaded {
            source: "b.jpg".into(),
            result: Ok(test_image()),
        });
        assert!(state.is_loading());
        assert!(state.cache().contains("b.jpg"));
    }

    #[test]
    fn failed_load_clears_loading_and_marks_broken() {
        let mut state = abc();
        open(&mut state, 0);
        let _ = state.handle_message(Message::ImageLoaded {
            source: "a.jpg".into(),
            result: Err(Error::Decode("bad".into())),
        });
        assert!(!state.is_loading());
        assert!(matches!(state.slot(), Slot::Broken));
        assert!(!state.cache().is_in_flight("a.jpg"));
    }

    #[test]
    fn jump_within_bounds_notifies_host() {
        let mut state = abc();
        open(&mut state, 0);
        let (effect, _) = state.handle_message(Message::JumpTo(2));
        assert_eq!(effect, Effect::IndexChanged(2));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn jump_out_of_bounds_is_ignored() {
        let mut state = abc();
        open(&mut state, 1);
        let (effect, _) = state.handle_message(Message::JumpTo(3));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn single_image_ignores_all_navigation() {
        let mut state = viewer_with(&["only.jpg"]);
        open(&mut state, 0);
        assert!(!state.can_navigate());

        for message in [
            Message::NavigateNext,
            Message::NavigatePrevious,
            Message::JumpTo(0),
        ] {
            let (effect, _) = state.handle_message(message);
            assert_eq!(effect, Effect::None);
        }
        key(&mut state, named(Named::ArrowRight));

        let _ = state.handle_message(Message::Touch(touch::Event::FingerPressed {
            id: Finger(0),
            position: Point::new(300.0, 0.0),
        }));
        let (effect, _) = state.handle_message(Message::Touch(touch::Event::FingerMoved {
            id: Finger(0),
            position: Point::new(0.0, 0.0),
        }));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn swipe_navigates_exactly_once() {
        let mut state = abc();
        open(&mut state, 0);
        let finger = Finger(3);

        let _ = state.handle_message(Message::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(200.0, 50.0),
        }));
        let (effect, _) = state.handle_message(Message::Touch(touch::Event::FingerMoved {
            id: finger,
            position: Point::new(160.0, 50.0),
        }));
        assert_eq!(effect, Effect::None);

        let (effect, _) = state.handle_message(Message::Touch(touch::Event::FingerMoved {
            id: finger,
            position: Point::new(149.0, 50.0),
        }));
        assert_eq!(effect, Effect::IndexChanged(1));

        let (effect, _) = state.handle_message(Message::Touch(touch::Event::FingerMoved {
            id: finger,
            position: Point::new(0.0, 50.0),
        }));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.current_index(), 1);
        assert!(!state.is_tracking_swipe());
    }

    #[test]
    fn escape_closes() {
        let mut state = abc();
        open(&mut state, 0);
        let effect = key(&mut state, named(Named::Escape));
        assert_eq!(
            effect,
            Effect::Closed {
                exit_fullscreen: false
            }
        );
        assert!(!state.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut state = abc();
        assert_eq!(key(&mut state, named(Named::ArrowRight)), Effect::None);
        assert_eq!(key(&mut state, keyboard::Key::Character("f".into())), Effect::None);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn close_schedules_reset_that_returns_to_start() {
        let mut state = abc();
        open(&mut state, 2);
        let _ = state.handle_message(Message::Close);
        assert!(state.has_pending_reset());
        assert_eq!(state.current_index(), 2);

        let generation = state.reset.generation();
        let _ = state.handle_message(Message::CloseResetElapsed(generation));
        assert_eq!(state.current_index(), 0);
        assert!(state.is_loading());
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn reopen_before_reset_keeps_new_initial_index() {
        let mut state = abc();
        open(&mut state, 2);
        let _ = state.handle_message(Message::Close);
        let stale = state.reset.generation();

        open(&mut state, 1);
        let _ = state.handle_message(Message::CloseResetElapsed(stale));

        assert!(state.is_open());
        assert_eq!(state.current_index(), 1);
        assert!(!state.has_pending_reset());
    }

    #[test]
    fn zero_delay_resets_immediately() {
        let mut state = State::new(ViewerSettings {
            close_reset_delay: Duration::ZERO,
            ..ViewerSettings::default()
        });
        let _ = state.set_images(vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        open(&mut state, 1);
        let _ = state.handle_message(Message::Close);
        assert_eq!(state.current_index(), 0);
        assert!(!state.has_pending_reset());
    }

    #[test]
    fn fullscreen_follows_platform_notifications() {
        let mut state = abc();
        open(&mut state, 0);

        let effect = key(&mut state, keyboard::Key::Character("f".into()));
        assert_eq!(effect, Effect::SetFullscreen(true));
        assert!(state.is_fullscreen());

        let _ = state.handle_message(Message::FullscreenChanged(true));
        let _ = state.handle_message(Message::FullscreenChanged(false));
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn closing_while_fullscreen_asks_host_to_exit() {
        let mut state = abc();
        open(&mut state, 0);
        let _ = state.handle_message(Message::ToggleFullscreen);
        let _ = state.handle_message(Message::FullscreenChanged(true));

        let (effect, _) = state.handle_message(Message::Close);
        assert_eq!(
            effect,
            Effect::Closed {
                exit_fullscreen: true
            }
        );
    }

    #[test]
    fn set_initial_index_while_open_moves_view() {
        let mut state = abc();
        open(&mut state, 0);
        let (effect, _) = state.handle_message(Message::SetInitialIndex(2));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.current_index(), 2);

        let _ = state.handle_message(Message::SetInitialIndex(9));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn shrinking_images_while_open_falls_back_to_first() {
        let mut state = abc();
        open(&mut state, 2);
        let (effect, _) = state.set_images(vec!["a.jpg".to_string()]);
        assert_eq!(effect, Effect::IndexChanged(0));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn emptying_images_while_open_closes() {
        let mut state = abc();
        open(&mut state, 1);
        let (effect, _) = state.set_images(Vec::<String>::new());
        assert!(matches!(effect, Effect::Closed { .. }));
        assert!(!state.is_open());
    }

    #[test]
    fn thumbnails_requested_once_per_source() {
        let mut state = abc();
        open(&mut state, 0);
        assert!(matches!(state.thumbnail("c.jpg"), Some(Thumbnail::Loading)));

        let _ = state.handle_message(Message::ThumbnailLoaded {
            source: "c.jpg".into(),
            result: Ok(test_image()),
        });
        let _ = state.handle_message(Message::NavigateNext);
        assert!(matches!(state.thumbnail("c.jpg"), Some(Thumbnail::Ready(_))));
    }

    #[test]
    fn settings_follow_config() {
        let config = ViewerConfig {
            show_caption: false,
            swipe_threshold_px: Some(80.0),
            close_reset_delay_ms: Some(100),
            ..ViewerConfig::default()
        };
        let settings = ViewerSettings::from(&config);
        assert!(!settings.options.show_caption);
        assert_eq!(settings.swipe_threshold, 80.0);
        assert_eq!(settings.close_reset_delay, Duration::from_millis(100));
    }
}
