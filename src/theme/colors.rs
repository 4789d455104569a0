//! Color constants for the card.
//!
//! Lavender-and-purple greeting card palette.

#![allow(dead_code)]

// === LAVENDER (Backgrounds) ===
pub const LAVENDER: &str = "#e6e6fa";
pub const LAVENDER_DEEP: &str = "#d8d0f0";
pub const CARD_WHITE: &str = "#ffffff";

// === PURPLE (Accents, Text) ===
pub const PURPLE_LIGHT: &str = "#c084fc";
pub const PURPLE: &str = "#9333ea";
pub const PURPLE_DEEP: &str = "#6b21a8";
pub const PURPLE_BORDER: &str = "#d8b4fe";

// === SEMANTIC ===
pub const DANGER: &str = "#ef4444";
pub const DANGER_SOFT: &str = "#fef2f2";

/// Balloon fills, light to deep, one per balloon in the strip.
pub const BALLOON_COLORS: [&str; 9] = [
    "#d8b4fe", // purple-300
    "#c084fc", // purple-400
    "#a855f7", // purple-500
    "#9333ea", // purple-600
    "#7e22ce", // purple-700
    "#818cf8", // indigo-400
    "#6366f1", // indigo-500
    "#a78bfa", // violet-400
    "#8b5cf6", // violet-500
];

/// Confetti piece fills, cycled by piece id.
pub const CONFETTI_COLORS: [&str; 6] = [
    "#a855f7", "#f472b6", "#facc15", "#34d399", "#60a5fa", "#fb923c",
];
