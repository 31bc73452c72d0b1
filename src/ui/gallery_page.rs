// SPDX-License-Identifier: MPL-2.0
//! Gallery page: a grid of tiles fetched from the content source.
//!
//! The page owns the gallery records and tile thumbnails. Clicking a tile asks
//! the host to open the viewer at that position; the host reports viewer index
//! changes back through [`State::select`] so the grid highlights the image
//! being viewed.

use crate::error::{Error, SourceError};
use crate::gallery::record::to_images_input;
use crate::gallery::{GalleryRecord, ImagesInput};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::source::{self, ContentSource};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, scrollable, Column, Row, Space, Text};
use iced::{ContentFit, Element, Length, Subscription, Task};
use std::collections::HashMap;

/// Longest edge of tile thumbnails.
pub const TILE_THUMBNAIL_SIDE: u32 = 400;

#[derive(Debug, Clone)]
pub enum Status {
    Loading,
    Empty,
    Failed(Error),
    Ready,
}

#[derive(Debug, Clone)]
pub enum Tile {
    Loading,
    Ready(ImageData),
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    RecordsLoaded(Result<Vec<GalleryRecord>, Error>),
    TileLoaded {
        source: String,
        result: Result<ImageData, Error>,
    },
    TilePressed(usize),
    Reload,
    SpinnerTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The record list changed; the host should hand [`State::images`] to the
    /// viewer.
    ImagesChanged,
    OpenViewer { initial_index: usize },
}

#[derive(Debug)]
pub struct State {
    source: Result<ContentSource, Error>,
    status: Status,
    records: Vec<GalleryRecord>,
    tiles: HashMap<String, Tile>,
    selected_index: Option<usize>,
    columns: usize,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new(source: Result<ContentSource, Error>, columns: usize) -> Self {
        Self {
            source,
            status: Status::Loading,
            records: Vec::new(),
            tiles: HashMap::new(),
            selected_index: None,
            columns: columns.max(1),
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn records(&self) -> &[GalleryRecord] {
        &self.records
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn tile(&self, source: &str) -> Option<&Tile> {
        self.tiles.get(source)
    }

    /// Viewer input built from the current records.
    #[must_use]
    pub fn images(&self) -> ImagesInput {
        to_images_input(&self.records)
    }

    /// Follows the viewer's position; `None` once the viewer closes.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected_index = index.filter(|i| *i < self.records.len());
    }

    /// Starts fetching records from the content source.
    pub fn load(&mut self) -> Task<Message> {
        self.status = Status::Loading;
        match &self.source {
            Ok(source) => {
                tracing::debug!(source = %source.describe(), "loading gallery records");
                Task::perform(source::fetch_records(source.clone()), Message::RecordsLoaded)
            }
            Err(err) => {
                tracing::warn!(%err, "gallery source unavailable");
                self.status = Status::Failed(err.clone());
                Task::none()
            }
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::RecordsLoaded(Ok(records)) => {
                self.records = records;
                self.selected_index = None;
                self.tiles
                    .retain(|source, _| self.records.iter().any(|r| &r.image_url == source));
                self.status = if self.records.is_empty() {
                    Status::Empty
                } else {
                    Status::Ready
                };
                (Effect::ImagesChanged, self.request_tiles())
            }
            Message::RecordsLoaded(Err(err)) => {
                tracing::warn!(%err, "gallery records failed to load");
                self.status = Status::Failed(err);
                (Effect::None, Task::none())
            }
            Message::TileLoaded { source, result } => {
                let tile = match result {
                    Ok(image) => Tile::Ready(image),
                    Err(err) => {
                        tracing::debug!(%source, %err, "tile thumbnail failed");
                        Tile::Failed
                    }
                };
                if let Some(slot) = self.tiles.get_mut(&source) {
                    *slot = tile;
                }
                (Effect::None, Task::none())
            }
            Message::TilePressed(index) => {
                if index < self.records.len() {
                    self.selected_index = Some(index);
                    (Effect::OpenViewer { initial_index: index }, Task::none())
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::Reload => (Effect::None, self.load()),
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::next_rotation(self.spinner_rotation);
                (Effect::None, Task::none())
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if matches!(self.status, Status::Loading) {
            iced::time::every(animated_spinner::TICK_INTERVAL).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    fn request_tiles(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        for record in &self.records {
            if self.tiles.contains_key(&record.image_url) {
                continue;
            }
            self.tiles.insert(record.image_url.clone(), Tile::Loading);
            let source = record.image_url.clone();
            tasks.push(Task::perform(
                media::load_thumbnail(source.clone(), TILE_THUMBNAIL_SIDE),
                move |result| Message::TileLoaded { source, result },
            ));
        }
        Task::batch(tasks)
    }
}

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("page-title")).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr("page-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    let body: Element<'a, Message> = match state.status() {
        Status::Loading => Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(AnimatedSpinner::new(palette::PRIMARY_500, state.spinner_rotation).into_element())
            .push(Text::new(ctx.i18n.tr("page-loading")).size(typography::BODY))
            .into(),
        Status::Empty => Text::new(ctx.i18n.tr("page-empty"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
        Status::Failed(err) => failure(ctx, err),
        Status::Ready => grid(ctx, state),
    };

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(body);

    scrollable(
        container(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn failure<'a>(ctx: ViewContext<'a>, err: &Error) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("page-error-title")).size(typography::TITLE_SM))
        .push(Text::new(ctx.i18n.tr(err.i18n_key())).size(typography::BODY));

    // A missing source will not appear on reload.
    if !matches!(err, Error::Source(SourceError::NotConfigured)) {
        column = column.push(
            button(Text::new(ctx.i18n.tr("page-reload")))
                .on_press(Message::Reload)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );
    }

    container(column)
        .padding(spacing::LG)
        .style(styles::container::error_banner)
        .into()
}

fn grid<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let rows = state
        .records()
        .chunks(state.columns())
        .enumerate()
        .map(|(row_index, chunk)| {
            let mut row = Row::new().spacing(spacing::MD);
            for (offset, record) in chunk.iter().enumerate() {
                row = row.push(tile(ctx, state, row_index * state.columns() + offset, record));
            }
            // Pad the last row so tiles keep their size.
            for _ in chunk.len()..state.columns() {
                row = row.push(
                    Space::new()
                        .width(Length::Fixed(sizing::TILE))
                        .height(Length::Fixed(sizing::TILE)),
                );
            }
            Element::from(row)
        });

    Column::with_children(rows)
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .into()
}

fn tile<'a>(
    ctx: ViewContext<'a>,
    state: &'a State,
    index: usize,
    record: &'a GalleryRecord,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match state.tile(&record.image_url) {
        Some(Tile::Ready(data)) => image(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::TILE))
            .height(Length::Fixed(sizing::TILE))
            .into(),
        Some(Tile::Failed) => placeholder(
            Text::new(ctx.i18n.tr("tile-unavailable"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400)
                .into(),
        ),
        _ => placeholder(Space::new().into()),
    };

    let mut content = Column::new().spacing(spacing::XS).push(picture);
    if let Some(caption) = record.caption.as_deref().filter(|c| !c.trim().is_empty()) {
        content = content.push(
            Text::new(caption)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::TILE)),
        );
    }

    let selected = state.selected_index() == Some(index);
    button(content)
        .padding(spacing::XXS)
        .on_press(Message::TilePressed(index))
        .style(styles::button::tile(selected))
        .into()
}

fn placeholder(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fixed(sizing::TILE))
        .height(Length::Fixed(sizing::TILE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(id: &str, url: &str) -> GalleryRecord {
        GalleryRecord {
            id: id.to_string(),
            image_url: url.to_string(),
            caption: Some(format!("caption {id}")),
            display_order: 0,
            is_active: true,
            uploaded_at: None,
        }
    }

    fn page() -> State {
        State::new(
            Ok(ContentSource::Manifest(PathBuf::from("gallery.toml"))),
            3,
        )
    }

    #[test]
    fn starts_loading() {
        assert!(matches!(page().status(), Status::Loading));
    }

    #[test]
    fn loaded_records_become_ready_and_request_tiles() {
        let mut page = page();
        let (effect, _) = page.handle_message(Message::RecordsLoaded(Ok(vec![
            record("1", "a.jpg"),
            record("2", "b.jpg"),
        ])));
        assert_eq!(effect, Effect::ImagesChanged);
        assert!(matches!(page.status(), Status::Ready));
        assert!(matches!(page.tile("a.jpg"), Some(Tile::Loading)));
        assert_eq!(page.images().normalize().len(), 2);
    }

    #[test]
    fn no_records_is_empty_state() {
        let mut page = page();
        let _ = page.handle_message(Message::RecordsLoaded(Ok(Vec::new())));
        assert!(matches!(page.status(), Status::Empty));
    }

    #[test]
    fn fetch_failure_is_reported() {
        let mut page = page();
        let _ = page.handle_message(Message::RecordsLoaded(Err(Error::Network(
            "offline".into(),
        ))));
        assert!(matches!(page.status(), Status::Failed(Error::Network(_))));
    }

    #[test]
    fn unconfigured_source_fails_without_fetching() {
        let mut page = State::new(Err(SourceError::NotConfigured.into()), 3);
        let _ = page.load();
        assert!(matches!(
            page.status(),
            Status::Failed(Error::Source(SourceError::NotConfigured))
        ));
    }

    #[test]
    fn tile_press_opens_viewer_at_index() {
        let mut page = page();
        let _ = page.handle_message(Message::RecordsLoaded(Ok(vec![
            record("1", "a.jpg"),
            record("2", "b.jpg"),
        ])));
        let (effect, _) = page.handle_message(Message::TilePressed(1));
        assert_eq!(effect, Effect::OpenViewer { initial_index: 1 });
        assert_eq!(page.selected_index(), Some(1));

        let (effect, _) = page.handle_message(Message::TilePressed(5));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn selection_follows_viewer_and_clears() {
        let mut page = page();
        let _ = page.handle_message(Message::RecordsLoaded(Ok(vec![
            record("1", "a.jpg"),
            record("2", "b.jpg"),
        ])));
        page.select(Some(0));
        assert_eq!(page.selected_index(), Some(0));
        page.select(Some(9));
        assert_eq!(page.selected_index(), None);
        page.select(Some(1));
        page.select(None);
        assert_eq!(page.selected_index(), None);
    }

    #[test]
    fn failed_tile_is_marked() {
        let mut page = page();
        let _ = page.handle_message(Message::RecordsLoaded(Ok(vec![record("1", "a.jpg")])));
        let _ = page.handle_message(Message::TileLoaded {
            source: "a.jpg".into(),
            result: Err(Error::Decode("bad".into())),
        });
        assert!(matches!(page.tile("a.jpg"), Some(Tile::Failed)));
    }

    #[test]
    fn columns_are_at_least_one() {
        let page = State::new(Err(SourceError::NotConfigured.into()), 0);
        assert_eq!(page.columns(), 1);
    }

    #[test]
    fn grid_builds_with_partial_last_row() {
        let i18n = I18n::default();
        let mut page = page();
        let _ = page.handle_message(Message::RecordsLoaded(Ok(vec![
            record("1", "a.jpg"),
            record("2", "b.jpg"),
            record("3", "c.jpg"),
            record("4", "d.jpg"),
        ])));
        let _ = page.handle_message(Message::TileLoaded {
            source: "b.jpg".into(),
            result: Err(Error::Decode("bad".into())),
        });
        assert!(matches!(page.status(), Status::Ready));
        let _ = view(ViewContext { i18n: &i18n }, &page);
    }
}
