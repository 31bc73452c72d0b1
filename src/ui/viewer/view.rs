// SPDX-License-Identifier: MPL-2.0
//! Viewer layout: backdrop, header, image pane, caption and thumbnail strip.

use super::component::{Message, Slot, State, Thumbnail};
use crate::gallery::DEFAULT_ALT_TEXT;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, center, container, image, mouse_area, opaque, scrollable, tooltip, Column, Row, Space,
    Stack, Text,
};
use iced::{ContentFit, Element, Length};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the open viewer. Callers only invoke this while
/// [`State::is_open`] holds.
pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Close);

    let mut panel = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::VIEWER_MAX_WIDTH)
        .push(header(ctx, state))
        .push(image_pane(ctx, state));

    if let Some(caption) = caption(state) {
        panel = panel.push(caption);
    }

    if state.options().show_thumbnails && state.can_navigate() {
        panel = panel.push(thumbnail_strip(ctx, state));
    }

    let panel = mouse_area(panel)
        .on_right_press(Message::ContentGuard)
        .on_middle_press(Message::ContentGuard);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(center(opaque(panel)).padding(spacing::MD))
        .into()
}

fn header<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let close = overlay_button(
        "×",
        ctx.i18n.tr("viewer-close"),
        Message::Close,
        sizing::HEADER_BUTTON,
    );
    let (glyph, label_key) = if state.is_fullscreen() {
        ("⤡", "viewer-fullscreen-exit")
    } else {
        ("⤢", "viewer-fullscreen-enter")
    };
    let fullscreen = overlay_button(
        glyph,
        ctx.i18n.tr(label_key),
        Message::ToggleFullscreen,
        sizing::HEADER_BUTTON,
    );

    let title = Text::new(ctx.i18n.tr("viewer-title"))
        .size(typography::TITLE_SM)
        .color(palette::WHITE);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill));

    if state.can_navigate() {
        row = row.push(counter(ctx, state));
    }

    row.push(fullscreen).push(close).into()
}

fn counter<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let label = ctx.i18n.tr_with_args(
        "viewer-counter",
        &[
            ("current", FluentValue::from(state.current_index() + 1)),
            ("total", FluentValue::from(state.images().len())),
        ],
    );

    container(
        Text::new(label)
            .size(typography::BODY)
            .color(palette::WHITE),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::indicator(sizing::HEADER_BUTTON / 2.0))
    .into()
}

fn image_pane<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let alt_text = state
        .current_image()
        .and_then(|image| image.alt_text())
        .map_or_else(|| ctx.i18n.tr("viewer-image-alt"), str::to_owned);

    let content: Element<'a, Message> = match state.slot() {
        Slot::Ready(data) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(if state.is_loading() {
                opacity::TRANSPARENT
            } else {
                opacity::OPAQUE
            })
            .into(),
        Slot::Broken => unavailable(ctx, alt_text),
        Slot::Pending => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::FillPortion(5))
        .push(center(content));

    if state.is_loading() {
        layers = layers.push(center(
            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(AnimatedSpinner::new(palette::WHITE, state.spinner_rotation()).into_element())
                .push(
                    Text::new(ctx.i18n.tr("viewer-loading"))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_200),
                ),
        ));
    }

    if state.options().show_navigation && state.can_navigate() {
        layers = layers.push(navigation_arrows(ctx));
    }

    layers.into()
}

fn unavailable<'a>(ctx: ViewContext<'a>, alt_text: String) -> Element<'a, Message> {
    let alt_text = if alt_text.is_empty() {
        DEFAULT_ALT_TEXT.to_string()
    } else {
        alt_text
    };

    container(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("viewer-image-unavailable"))
                    .size(typography::BODY)
                    .color(palette::GRAY_200),
            )
            .push(
                Text::new(alt_text)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            ),
    )
    .padding(spacing::XL)
    .style(styles::container::placeholder)
    .into()
}

fn navigation_arrows<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let previous = overlay_button(
        "‹",
        ctx.i18n.tr("viewer-previous"),
        Message::NavigatePrevious,
        sizing::NAV_BUTTON,
    );
    let next = overlay_button(
        "›",
        ctx.i18n.tr("viewer-next"),
        Message::NavigateNext,
        sizing::NAV_BUTTON,
    );

    container(
        Row::new()
            .align_y(Vertical::Center)
            .push(previous)
            .push(Space::new().width(Length::Fill))
            .push(next),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .padding(spacing::XS)
    .into()
}

/// Round translucent button with a localized tooltip.
fn overlay_button<'a>(
    glyph: &'a str,
    label: String,
    message: Message,
    size: f32,
) -> Element<'a, Message> {
    let control = button(
        Text::new(glyph)
            .size(typography::TITLE_SM)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(message)
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    tooltip(
        control,
        container(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::indicator(radius::SM)),
        tooltip::Position::Bottom,
    )
    .into()
}

fn caption(state: &State) -> Option<Element<'_, Message>> {
    if !state.options().show_caption {
        return None;
    }
    let caption = state.current_image()?.caption()?;
    Some(
        container(
            Text::new(caption)
                .size(typography::BODY)
                .color(palette::GRAY_100),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into(),
    )
}

fn thumbnail_strip<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let row = state
        .images()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, descriptor)| {
            let selected = index == state.current_index();
            let content: Element<'a, Message> = match state.thumbnail(&descriptor.source) {
                Some(Thumbnail::Ready(data)) => image(data.handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .opacity(if selected {
                        opacity::OPAQUE
                    } else {
                        opacity::THUMBNAIL_DIMMED
                    })
                    .into(),
                _ => container(
                    Text::new(
                        ctx.i18n
                            .tr_with_args("viewer-thumbnail", &[("index", FluentValue::from(index + 1))]),
                    )
                    .size(typography::CAPTION),
                )
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::placeholder)
                .into(),
            };

            row.push(
                button(content)
                    .padding(spacing::XXS)
                    .on_press(Message::JumpTo(index))
                    .style(styles::button::thumbnail(selected)),
            )
        });

    container(
        scrollable(row).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        )),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([spacing::XS, 0.0])
    .into()
}
