//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Events are read and handled one at a time on this thread. Each
//! transition is applied and the frame redrawn before the next event is
//! read, so the selection has exactly one writer.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::tab::TabInfo;

use super::layout::ShellLayout;
use super::state::{Action, App};
use super::update::{apply, update};
use super::view::render;

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Direct activation by position in the bar
        KeyCode::Char(c @ '1'..='9') => Some(Action::ActivateAt((c as u8 - b'1') as usize)),

        // Neighbours
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::Next),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(Action::Previous),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

/// Map a mouse event to an activation of the button under the pointer.
///
/// `area` and `tabs` are what the visible frame was drawn from.
pub fn map_mouse(mouse: MouseEvent, area: Rect, tabs: &[TabInfo]) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => ShellLayout::new(area, tabs)
            .hit_test(mouse.column, mouse.row)
            .map(Action::Activate),
        _ => None,
    }
}

/// Map any terminal event to an Action.
pub fn map_event(event: &Event, area: Rect, tabs: &[TabInfo]) -> Option<Action> {
    match event {
        // Ignore release/repeat so one press is one activation
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse, area, tabs),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        tracing::error!(panic = %panic_info, "panic");
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the tab shell until the user quits.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal);

    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut app = App::new();
    tracing::info!(tabs = app.tabs.len(), selected = %app.selection.current(), "shell mounted");

    loop {
        // Hit testing uses the area of the frame the user is looking at
        let area = terminal.draw(|frame| render(&app, frame))?.area;

        if app.should_quit {
            break;
        }

        let event = event::read()?;
        if let Event::Resize(width, height) = event {
            tracing::debug!(width, height, "terminal resized");
            continue;
        }

        if let Some(action) = map_event(&event, area, &app.tabs) {
            let transition = update(&app.selection, &app.tabs, &action);
            apply(&mut app, transition);
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
