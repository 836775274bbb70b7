//! Fixed tracker palettes.
//!
//! Every tracker carries one of 18 predefined colors and one of 18
//! predefined emoji. Commands accept either a palette index (1-based)
//! or the literal value, validated against these arrays.

pub const COLORS: [&str; 18] = [
    "#FD4C49", "#FF881E", "#007BFA", "#6E44FE", "#33CF69", "#E66DD4", "#F9D4D4", "#34A7FE", "#46E69D", "#35347C", "#FF674D", "#FF99CC",
    "#F6C48B", "#7994F5", "#832CF1", "#AD56DA", "#8D72E6", "#2FD058",
];

pub const EMOJIS: [&str; 18] = [
    "🙂", "😻", "🌺", "🐶", "❤️", "😱", "😇", "😡", "🥶", "🤔", "🙌", "🍔", "🥦", "🏓", "🥇", "🎸", "🏝️", "😪",
];

pub fn color_at(index: usize) -> Option<&'static str> {
    if index == 0 {
        return None;
    }
    COLORS.get(index - 1).copied()
}

pub fn emoji_at(index: usize) -> Option<&'static str> {
    if index == 0 {
        return None;
    }
    EMOJIS.get(index - 1).copied()
}

pub fn is_palette_color(value: &str) -> bool {
    COLORS.iter().any(|color| color.eq_ignore_ascii_case(value))
}

pub fn is_palette_emoji(value: &str) -> bool {
    EMOJIS.contains(&value)
}

/// Resolve a user-supplied color: a 1-based palette index or a literal
/// palette hex value.
pub fn resolve_color(value: &str) -> Option<String> {
    if let Ok(index) = value.parse::<usize>() {
        return color_at(index).map(str::to_uppercase);
    }
    is_palette_color(value).then(|| value.to_uppercase())
}

/// Resolve a user-supplied emoji: a 1-based palette index or a literal
/// palette emoji.
pub fn resolve_emoji(value: &str) -> Option<String> {
    if let Ok(index) = value.parse::<usize>() {
        return emoji_at(index).map(str::to_string);
    }
    is_palette_emoji(value).then(|| value.to_string())
}
