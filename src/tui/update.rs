//! Pure state transitions: (Selection, registry, Action) → Transition.
//!
//! Fully testable without a terminal. Positional actions resolve against
//! the registry order, the same order the bar is drawn in. [`apply`] is the
//! only place the selection is written.

use crate::tab::{Tab, TabInfo};

use super::state::{Action, App, Selection, Transition};

/// Pure state transition function.
pub fn update(selection: &Selection, tabs: &[TabInfo], action: &Action) -> Transition {
    let target = match action {
        Action::Activate(tab) => Some(*tab),
        Action::ActivateAt(position) => tabs.get(*position).map(|info| info.view),
        Action::Next => neighbour(selection.current(), tabs, 1),
        Action::Previous => neighbour(selection.current(), tabs, tabs.len().saturating_sub(1)),
        Action::Quit => return Transition::Quit,
    };

    match target {
        Some(tab) if !selection.is_selected(tab) => Transition::Select(tab),
        _ => Transition::Unchanged,
    }
}

/// The tab `step` places to the right of `current` in registry order.
fn neighbour(current: Tab, tabs: &[TabInfo], step: usize) -> Option<Tab> {
    let position = tabs.iter().position(|info| info.view == current)?;
    Some(tabs[(position + step) % tabs.len()].view)
}

/// Commit a transition to the app.
pub fn apply(app: &mut App, transition: Transition) {
    match transition {
        Transition::Select(tab) => {
            let from = app.selection.current();
            if app.selection.set(tab) {
                tracing::info!(%from, to = %tab, "tab activated");
            }
        }
        Transition::Unchanged => {
            tracing::debug!(tab = %app.selection.current(), "re-activation ignored");
        }
        Transition::Quit => {
            tracing::info!("quit requested");
            app.should_quit = true;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::registry;

    fn selected(tab: Tab) -> Selection {
        let mut selection = Selection::default();
        selection.set(tab);
        selection
    }

    #[test]
    fn activating_each_tab_selects_exactly_that_tab() {
        for target in Tab::ALL {
            let mut app = App::new();
            let transition = update(&app.selection, &app.tabs, &Action::Activate(target));
            apply(&mut app, transition);
            assert_eq!(app.selection.current(), target);
        }
    }

    #[test]
    fn activating_selected_tab_is_unchanged() {
        let selection = selected(Tab::Add);
        assert_eq!(
            update(&selection, &registry(), &Action::Activate(Tab::Add)),
            Transition::Unchanged
        );
    }

    #[test]
    fn activating_other_tab_selects_it() {
        let selection = selected(Tab::Add);
        assert_eq!(
            update(&selection, &registry(), &Action::Activate(Tab::Settings)),
            Transition::Select(Tab::Settings)
        );
    }

    #[test]
    fn position_resolves_through_registry() {
        let tabs = registry();
        let selection = Selection::default();
        assert_eq!(
            update(&selection, &tabs, &Action::ActivateAt(3)),
            Transition::Select(Tab::Account)
        );
        assert_eq!(
            update(&selection, &tabs, &Action::ActivateAt(5)),
            Transition::Unchanged
        );
    }

    #[test]
    fn position_follows_reordered_registry() {
        let mut tabs = registry();
        tabs.reverse();
        assert_eq!(
            update(&Selection::default(), &tabs, &Action::ActivateAt(0)),
            Transition::Select(Tab::Settings)
        );
    }

    #[test]
    fn next_and_previous_move_through_neighbours() {
        let tabs = registry();
        assert_eq!(
            update(&selected(Tab::Home), &tabs, &Action::Next),
            Transition::Select(Tab::Feed)
        );
        assert_eq!(
            update(&selected(Tab::Settings), &tabs, &Action::Next),
            Transition::Select(Tab::Home)
        );
        assert_eq!(
            update(&selected(Tab::Home), &tabs, &Action::Previous),
            Transition::Select(Tab::Settings)
        );
        assert_eq!(
            update(&selected(Tab::Add), &tabs, &Action::Previous),
            Transition::Select(Tab::Feed)
        );
    }

    #[test]
    fn neighbours_follow_reordered_registry() {
        let mut tabs = registry();
        tabs.reverse();
        assert_eq!(
            update(&selected(Tab::Home), &tabs, &Action::Next),
            Transition::Select(Tab::Settings)
        );
        assert_eq!(
            update(&selected(Tab::Home), &tabs, &Action::Previous),
            Transition::Select(Tab::Account)
        );
    }

    #[test]
    fn quit_transitions_to_quit() {
        assert_eq!(
            update(&Selection::default(), &registry(), &Action::Quit),
            Transition::Quit
        );
    }

    #[test]
    fn apply_quit_sets_flag_and_keeps_selection() {
        let mut app = App::new();
        apply(&mut app, Transition::Select(Tab::Account));
        apply(&mut app, Transition::Quit);
        assert!(app.should_quit);
        assert_eq!(app.selection.current(), Tab::Account);
    }

    #[test]
    fn apply_unchanged_is_a_no_op() {
        let mut app = App::new();
        apply(&mut app, Transition::Unchanged);
        assert_eq!(app.selection.current(), Tab::Home);
        assert!(!app.should_quit);
    }
}
