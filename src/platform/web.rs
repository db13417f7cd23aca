//! Browser host (WASM only)
//!
//! Owns the session in an `Rc<RefCell<_>>`, drives the ticker from
//! `requestAnimationFrame`, maps pointer input to events and pauses on
//! tab hide or window blur. High scores and settings live in LocalStorage.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::input::{hold_event, tap_event};
use super::ticker::Ticker;
use crate::persistence::LocalStoragePreferences;
use crate::session::GameSession;
use crate::settings::Settings;

/// Game instance holding all host-side state
struct WebGame {
    session: GameSession<LocalStoragePreferences>,
    ticker: Ticker,
    last_time: f64,
}

impl WebGame {
    fn update(&mut self, time: f64) {
        let elapsed_ms = if self.last_time > 0.0 {
            (time - self.last_time).max(0.0)
        } else {
            0.0
        };
        self.last_time = time;
        self.ticker
            .advance(&mut self.session, Duration::from_secs_f64(elapsed_ms / 1000.0));
    }
}

/// Build the session and start the frame loop
pub fn run() {
    let settings = Settings::load();
    // Write back so a first run leaves editable settings behind
    settings.save();

    let mut session = GameSession::from_settings(LocalStoragePreferences::default(), &settings);
    session.initialize(settings.density());

    let game = Rc::new(RefCell::new(WebGame {
        session,
        ticker: Ticker::new(),
        last_time: 0.0,
    }));

    setup_input_handlers(game.clone());
    setup_auto_pause(game.clone());
    request_animation_frame(game);

    log::info!("Brick Car running!");
}

fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<WebGame>>, time: f64) {
    game.borrow_mut().update(time);
    request_animation_frame(game);
}

fn setup_input_handlers(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    for (name, pressed) in [("pointerdown", true), ("pointerup", false)] {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
            let mut g = game.borrow_mut();
            let WebGame {
                session, ticker, ..
            } = &mut *g;
            ticker.dispatch(session, hold_event(pressed));
        });
        let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        let mut g = game.borrow_mut();
        let WebGame {
            session, ticker, ..
        } = &mut *g;
        let event = tap_event(session.state().status());
        ticker.dispatch(session, event);
    });
    let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_auto_pause(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    // Visibility change (tab switch, minimize)
    if let Some(document) = window.document() {
        let game = game.clone();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                let WebGame {
                    session, ticker, ..
                } = &mut *g;
                ticker.focus_lost(session);
                log::info!("Auto-paused (tab hidden)");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Window blur (click outside)
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
        let mut g = game.borrow_mut();
        let WebGame {
            session, ticker, ..
        } = &mut *g;
        ticker.focus_lost(session);
        log::info!("Auto-paused (window blur)");
    });
    let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    closure.forget();
}
