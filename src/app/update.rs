// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Components report what happened through their `Effect`; this module turns
//! those effects into work on the other component or on the window.

use super::Message;
use crate::ui::gallery_page;
use crate::ui::viewer::component::{self, Effect as ViewerEffect};
use iced::{window, Task};

pub struct UpdateContext<'a> {
    pub page: &'a mut gallery_page::State,
    pub viewer: &'a mut component::State,
    pub window_id: &'a mut Option<window::Id>,
}

/// Handles gallery page messages.
pub fn handle_page_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_page::Message,
) -> Task<Message> {
    let (effect, task) = ctx.page.handle_message(message);
    let page_task = task.map(Message::Page);

    let side_effect = match effect {
        gallery_page::Effect::None => Task::none(),
        gallery_page::Effect::ImagesChanged => {
            let (viewer_effect, viewer_task) = ctx.viewer.set_images(ctx.page.images());
            Task::batch([
                viewer_task.map(Message::Viewer),
                apply_viewer_effect(ctx, viewer_effect),
            ])
        }
        gallery_page::Effect::OpenViewer { initial_index } => {
            let (viewer_effect, viewer_task) = ctx
                .viewer
                .handle_message(component::Message::Open { initial_index });
            Task::batch([
                viewer_task.map(Message::Viewer),
                apply_viewer_effect(ctx, viewer_effect),
            ])
        }
    };

    Task::batch([page_task, side_effect])
}

/// Handles viewer component messages.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    let (effect, task) = ctx.viewer.handle_message(message);
    let viewer_task = task.map(Message::Viewer);
    let side_effect = apply_viewer_effect(ctx, effect);
    Task::batch([viewer_task, side_effect])
}

/// Handles window events.
pub fn handle_window_event(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    event: &window::Event,
) -> Task<Message> {
    *ctx.window_id = Some(id);

    // Fullscreen can be left through OS controls; the resize that follows is
    // the only notice the application gets.
    if matches!(event, window::Event::Resized(_)) && ctx.viewer.is_open() {
        return query_window_mode(id);
    }
    Task::none()
}

/// Forwards the reported window mode to the viewer.
pub fn handle_window_mode(ctx: &mut UpdateContext<'_>, mode: window::Mode) -> Task<Message> {
    let is_fullscreen = matches!(mode, window::Mode::Fullscreen);
    handle_viewer_message(ctx, component::Message::FullscreenChanged(is_fullscreen))
}

fn apply_viewer_effect(ctx: &mut UpdateContext<'_>, effect: ViewerEffect) -> Task<Message> {
    match effect {
        ViewerEffect::None => Task::none(),
        ViewerEffect::IndexChanged(index) => {
            ctx.page.select(Some(index));
            Task::none()
        }
        ViewerEffect::Closed { exit_fullscreen } => {
            ctx.page.select(None);
            if exit_fullscreen {
                set_window_mode(*ctx.window_id, false)
            } else {
                Task::none()
            }
        }
        ViewerEffect::SetFullscreen(fullscreen) => set_window_mode(*ctx.window_id, fullscreen),
    }
}

/// Requests a window mode, then reports back what the window actually did.
fn set_window_mode(window_id: Option<window::Id>, fullscreen: bool) -> Task<Message> {
    let Some(id) = window_id else {
        tracing::warn!("no window id yet, fullscreen request dropped");
        return Task::done(Message::Viewer(component::Message::FullscreenChanged(false)));
    };

    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode::<Message>(id, mode).chain(query_window_mode(id))
}

fn query_window_mode(id: window::Id) -> Task<Message> {
    window::mode(id).map(Message::WindowModeQueried)
}
