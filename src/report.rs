//! Registry listing for the `tabs` command.
//!
//! Pure functions — (&[TabInfo], OutputFormat) → String.
//! No I/O, no side effects.

use crate::symbols;
use crate::tab::TabInfo;

/// Output format for the registry listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Format the tab registry for output.
pub fn format_tabs(tabs: &[TabInfo], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(tabs),
        OutputFormat::Json => format_json(tabs),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(tabs: &[TabInfo]) -> String {
    let mut out = String::new();
    for (position, info) in tabs.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} {} ({}) [{}]\n",
            position + 1,
            symbols::resolve(info.icon),
            info.name,
            info.icon,
            info.id
        ));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(tabs: &[TabInfo]) -> String {
    // TabInfo holds only strings and a unit enum; serialization cannot fail
    serde_json::to_string_pretty(tabs)
        .unwrap_or_else(|e| panic!("Failed to serialize tabs to JSON: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================
