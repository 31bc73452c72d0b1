// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (reload).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Translucent round buttons drawn over the image (arrows, close, fullscreen).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Thumbnail strip entry. The current image gets a brand ring, the others are
/// drawn without a frame.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = if selected {
            palette::PRIMARY_500
        } else if matches!(status, button::Status::Hovered) {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            }
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: None,
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Gallery tile. The image open in the viewer gets a brand ring.
pub fn tile(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered);
        button::Style {
            background: None,
            text_color: theme.palette().text,
            border: Border {
                color: if selected {
                    palette::PRIMARY_500
                } else {
                    Color::TRANSPARENT
                },
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: if hovered { shadow::MD } else { shadow::SM },
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_ring_only_on_selected_entries() {
        let theme = Theme::Dark;
        let selected = thumbnail(true)(&theme, button::Status::Active);
        let plain = thumbnail(false)(&theme, button::Status::Active);
        assert_eq!(selected.border.color, palette::PRIMARY_500);
        assert_eq!(plain.border.color, Color::TRANSPARENT);

        let tile_selected = tile(true)(&theme, button::Status::Active);
        assert_eq!(tile_selected.border.color, palette::PRIMARY_500);
        assert_eq!(tile_selected.text_color, theme.palette().text);
    }
}
