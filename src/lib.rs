//! tabshell: a terminal tab-bar shell with five placeholder screens.

pub mod logging;
pub mod report;
pub mod symbols;
pub mod tab;
pub mod tui;
