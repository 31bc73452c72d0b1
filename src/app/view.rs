// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery page is always rendered; the viewer is stacked on top of it
//! while open.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery_page;
use crate::ui::styles;
use crate::ui::viewer::{component, view as viewer_view};
use iced::widget::{container, Column, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a gallery_page::State,
    pub viewer: &'a component::State,
    pub warning_key: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = gallery_page::view(gallery_page::ViewContext { i18n: ctx.i18n }, ctx.page)
        .map(Message::Page);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.warning_key {
        column = column.push(
            container(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY)
                    .color(palette::WHITE),
            )
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::error_banner),
        );
    }
    column = column.push(page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column);

    if ctx.viewer.is_open() {
        layers = layers.push(
            viewer_view::view(viewer_view::ViewContext { i18n: ctx.i18n }, ctx.viewer)
                .map(Message::Viewer),
        );
    }

    layers.into()
}
