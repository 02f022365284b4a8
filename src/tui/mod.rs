//! Terminal tab shell.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: selection container, App, Action, Transition
//! - `update`: pure transitions
//! - `layout`, `button`, `view`, `theme`: pure rendering
//! - `run`: effects (terminal, events)

pub mod button;
pub mod layout;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
