// SPDX-License-Identifier: MPL-2.0
//! Viewer behavior driven only through its public messages.

use gallery_lens::gallery::ImageDescriptor;
use gallery_lens::ui::viewer::component::{Effect, Message, State, ViewerOptions};
use iced::keyboard::{self, key::Named};
use iced::touch::{self, Finger};
use iced::Point;

fn viewer(count: usize) -> State {
    let mut state = State::default();
    let images: Vec<ImageDescriptor> = (0..count)
        .map(|i| ImageDescriptor::new(format!("https://cdn.example.test/{i}.jpg")))
        .collect();
    let _ = state.set_images(images);
    state
}

fn send(state: &mut State, message: Message) -> Effect {
    state.handle_message(message).0
}

fn arrow(state: &mut State, named: Named) -> Effect {
    send(state, Message::KeyPressed(keyboard::Key::Named(named)))
}

fn swipe(state: &mut State, from_x: f32, to_x: f32) -> Vec<Effect> {
    let finger = Finger(1);
    let mut effects = Vec::new();
    effects.push(send(
        state,
        Message::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(from_x, 100.0),
        }),
    ));
    // Walk the finger in small steps like a real gesture.
    let steps = 10;
    for step in 1..=steps {
        let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
        effects.push(send(
            state,
            Message::Touch(touch::Event::FingerMoved {
                id: finger,
                position: Point::new(x, 100.0),
            }),
        ));
    }
    effects.push(send(
        state,
        Message::Touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(to_x, 100.0),
        }),
    ));
    effects
        .into_iter()
        .filter(|effect| *effect != Effect::None)
        .collect()
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 2..6 {
        for start in 0..n {
            let mut state = viewer(n);
            let _ = send(&mut state, Message::Open { initial_index: start });
            for _ in 0..n {
                let _ = send(&mut state, Message::NavigateNext);
            }
            assert_eq!(state.current_index(), start);
        }
    }
}

#[test]
fn next_then_previous_is_identity() {
    let mut state = viewer(4);
    let _ = send(&mut state, Message::Open { initial_index: 3 });
    let _ = send(&mut state, Message::NavigateNext);
    let _ = send(&mut state, Message::NavigatePrevious);
    assert_eq!(state.current_index(), 3);
}

#[test]
fn short_swipe_does_not_navigate() {
    let mut state = viewer(3);
    let _ = send(&mut state, Message::Open { initial_index: 0 });
    assert!(swipe(&mut state, 300.0, 260.0).is_empty());
    assert_eq!(state.current_index(), 0);
}

#[test]
fn left_swipe_past_threshold_navigates_once() {
    let mut state = viewer(3);
    let _ = send(&mut state, Message::Open { initial_index: 0 });
    let effects = swipe(&mut state, 300.0, 0.0);
    assert_eq!(effects, [Effect::IndexChanged(1)]);
}

#[test]
fn right_swipe_goes_back_with_wraparound() {
    let mut state = viewer(3);
    let _ = send(&mut state, Message::Open { initial_index: 0 });
    let effects = swipe(&mut state, 0.0, 300.0);
    assert_eq!(effects, [Effect::IndexChanged(2)]);
}

#[test]
fn keyboard_scenario_walks_and_wraps() {
    let mut state = viewer(3);
    let _ = send(&mut state, Message::Open { initial_index: 1 });
    assert_eq!(state.current_index(), 1);

    let expected = [
        (Named::ArrowRight, 2),
        (Named::ArrowRight, 0),
        (Named::ArrowLeft, 2),
    ];
    for (key, index) in expected {
        assert_eq!(arrow(&mut state, key), Effect::IndexChanged(index));
        assert_eq!(state.current_index(), index);
    }
}

#[test]
fn reopening_before_reset_uses_new_index() {
    let mut state = viewer(5);
    let _ = send(&mut state, Message::Open { initial_index: 4 });
    let _ = send(&mut state, Message::Close);
    let _ = send(&mut state, Message::Open { initial_index: 2 });

    // Every generation a stale timer could carry.
    for generation in 0..8 {
        let _ = send(&mut state, Message::CloseResetElapsed(generation));
    }
    assert!(state.is_open());
    assert_eq!(state.current_index(), 2);
}

#[test]
fn external_fullscreen_exit_clears_flag() {
    let mut state = viewer(2);
    let _ = send(&mut state, Message::Open { initial_index: 0 });
    assert_eq!(
        send(&mut state, Message::ToggleFullscreen),
        Effect::SetFullscreen(true)
    );
    let _ = send(&mut state, Message::FullscreenChanged(true));
    assert!(state.is_fullscreen());

    let _ = send(&mut state, Message::FullscreenChanged(false));
    assert!(!state.is_fullscreen());
}

#[test]
fn options_can_change_while_open() {
    let mut state = viewer(3);
    let _ = send(&mut state, Message::Open { initial_index: 0 });
    state.set_options(ViewerOptions {
        show_thumbnails: false,
        show_navigation: false,
        show_caption: false,
    });
    assert!(!state.options().show_thumbnails);

    // Hidden arrows do not disable keyboard navigation.
    assert_eq!(arrow(&mut state, Named::ArrowRight), Effect::IndexChanged(1));
}

#[test]
fn content_guard_is_inert() {
    let mut state = viewer(2);
    let _ = send(&mut state, Message::Open { initial_index: 1 });
    assert_eq!(send(&mut state, Message::ContentGuard), Effect::None);
    assert!(state.is_open());
    assert_eq!(state.current_index(), 1);
}
