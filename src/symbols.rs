//! Symbol-name to glyph lookup.
//!
//! Tab icons are platform symbol names ("star.fill", "gear"). The terminal
//! has no symbol catalogue, so this table maps the names the registry uses
//! onto single-cell glyphs.

/// Glyph shown for a symbol name that has no mapping.
pub const FALLBACK_GLYPH: &str = "?";

/// Resolve a symbol name to the glyph drawn in the tab bar.
pub fn resolve(name: &str) -> &'static str {
    match name {
        "person" => "☺",
        "envelope" => "✉",
        "plus" => "+",
        "star.fill" => "★",
        "gear" => "⚙",
        _ => FALLBACK_GLYPH,
    }
}
