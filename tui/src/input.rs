//! Input handling for Folio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use folio_engine::{App, Focus, SectionId};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and hands them to the UI loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; never block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Backpressure instead of dropping: a large paste must arrive whole.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain up to one frame's worth of queued events into `app`.
///
/// Returns `Ok(true)` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        if apply_event(app, ev) {
            return Ok(true);
        }
    }
    Ok(app.should_quit())
}

fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            match app.focus() {
                Focus::Page => handle_page_keys(app, key),
                Focus::Form(_) => handle_form_keys(app, key),
                Focus::Faq => handle_faq_keys(app, key),
                Focus::CertificateModal => handle_modal_keys(app, key),
                Focus::Menu { .. } => handle_menu_keys(app, key),
            }
        }
        Event::Paste(text) => {
            if let Some(token) = app.form_token() {
                debug!(bytes = text.len(), "Paste into contact form");
                app.form_mode(token).enter_text(&text);
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_page_keys(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('u') if ctrl => app.scroll_page_up(),
        KeyCode::Char('d') if ctrl => app.scroll_page_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::PageUp => app.scroll_page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page_down(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Char(digit @ '1'..='6') => {
            if let Some(section) = SectionId::from_nav_digit(digit) {
                app.navigate_to(section);
            }
        }
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('p') => app.select_next_project(),
        KeyCode::Char('s') => app.share_selected_project(),
        KeyCode::Char('e') => app.toggle_certificate(),
        KeyCode::Char('v') => app.open_certificate_modal(),
        KeyCode::Char('f') => app.enter_faq(),
        KeyCode::Char('c') | KeyCode::Tab => app.focus_form(),
        KeyCode::Esc => app.dismiss_toast(),
        _ => {}
    }
}

fn handle_form_keys(app: &mut App, key: KeyEvent) {
    let Some(token) = app.form_token() else {
        return;
    };
    let mut form = app.form_mode(token);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => form.leave(),
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_prev(),
        KeyCode::Char('s') if ctrl => {
            form.submit();
        }
        // Alt-Enter breaks the line in the message field; single-line
        // fields flatten it to a space.
        KeyCode::Enter if alt => form.enter_text("\n"),
        KeyCode::Enter => {
            form.activate();
        }
        KeyCode::Backspace => form.delete_char(),
        KeyCode::Delete => form.delete_char_forward(),
        KeyCode::Left => form.move_cursor_left(),
        KeyCode::Right => form.move_cursor_right(),
        KeyCode::Home => form.move_cursor_home(),
        KeyCode::End => form.move_cursor_end(),
        KeyCode::Char(c) if !ctrl && !alt => form.enter_char(c),
        _ => {}
    }
}

fn handle_faq_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.faq_select_prev(),
        KeyCode::Char('j') | KeyCode::Down => app.faq_select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.faq_toggle_selected(),
        KeyCode::Esc | KeyCode::Char('q') => app.escape(),
        _ => {}
    }
}

fn handle_modal_keys(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | 'v') | KeyCode::Enter) {
        app.escape();
    }
}

fn handle_menu_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.menu_select_prev(),
        KeyCode::Char('j') | KeyCode::Down => app.menu_select_next(),
        KeyCode::Enter => app.menu_choose(),
        KeyCode::Char(digit @ '1'..='6') => {
            if let Some(section) = SectionId::from_nav_digit(digit) {
                app.navigate_to(section);
            }
        }
        KeyCode::Esc | KeyCode::Char('m' | 'q') => app.escape(),
        _ => {}
    }
}
