// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always observed. Keyboard and touch events are only
//! routed while the viewer is open, so closing the viewer detaches them.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, keyboard, window, Event, Subscription};

type EventRouter = fn(Event, event::Status, window::Id) -> Option<Message>;

/// Window events for id capture and mode re-queries.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, id| match event {
        Event::Window(event) => Some(Message::Window { id, event }),
        _ => None,
    })
}

/// Keyboard and touch routing for the open viewer.
pub fn create_viewer_subscription(viewer_open: bool) -> Subscription<Message> {
    match viewer_router(viewer_open) {
        Some(router) => event::listen_with(router),
        None => Subscription::none(),
    }
}

/// The input router to listen with, if any.
fn viewer_router(viewer_open: bool) -> Option<EventRouter> {
    viewer_open.then_some(route_viewer_event as EventRouter)
}

fn route_viewer_event(event: Event, status: event::Status, _id: window::Id) -> Option<Message> {
    match (event, status) {
        (Event::Keyboard(keyboard::Event::KeyPressed { key, .. }), event::Status::Ignored) => {
            Some(Message::Viewer(component::Message::KeyPressed(key)))
        }
        (Event::Touch(touch), _) => Some(Message::Viewer(component::Message::Touch(touch))),
        _ => None,
    }
}
