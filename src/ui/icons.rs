// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single Unicode glyphs rendered as text, so they follow the text
//! color of whatever widget hosts them and need no image assets.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let bell = icons::sized(icons::bell(), sizing::ICON_MD);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `box` not `inventory`).

use iced::widget::{text, Text};

/// Defines an icon function returning a text widget with one glyph.
macro_rules! define_icon {
    ($name:ident, $glyph:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Text<'a> {
            text($glyph)
        }
    };
}

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(grid, "▦", "Grid icon: dashboard overview.");
define_icon!(package, "▣", "Package icon: boxed goods.");
define_icon!(truck, "⛟", "Truck icon: road transport.");
define_icon!(file, "▤", "File icon: lined sheet.");
define_icon!(chat, "✉", "Chat icon: envelope.");
define_icon!(gear, "⚙", "Gear icon: settings.");
define_icon!(logout, "⇥", "Logout icon: arrow to bar.");

// =============================================================================
// Status Icons
// =============================================================================

define_icon!(checkmark, "✓", "Checkmark icon: success.");
define_icon!(info, "ℹ", "Info icon: lowercase i.");
define_icon!(warning, "⚠", "Warning icon: triangle with exclamation mark.");
define_icon!(cross, "✕", "Cross icon: dismiss or mismatch.");
define_icon!(bell, "🔔", "Bell icon: alerts.");
define_icon!(dot, "●", "Dot icon: timeline marker.");

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(search, "⌕", "Search icon: magnifier.");
define_icon!(upload, "⇪", "Upload icon: arrow up from bar.");
define_icon!(download, "⇩", "Download icon: arrow down.");
define_icon!(plus, "+", "Plus icon: create.");
define_icon!(eye, "◉", "Eye icon: reveal.");
define_icon!(eye_closed, "◎", "Closed eye icon: conceal.");
define_icon!(send, "➤", "Send icon: arrowhead.");
define_icon!(phone, "☎", "Phone icon: handset.");
define_icon!(globe, "◍", "Globe icon: worldwide.");
define_icon!(chart, "▲", "Chart icon: rising bar.");
define_icon!(shield, "⛨", "Shield icon: security.");
define_icon!(pin, "⌖", "Pin icon: location.");
define_icon!(arrow_up, "↑", "Arrow up icon: positive trend.");
define_icon!(arrow_down, "↓", "Arrow down icon: negative trend.");

/// Sets the glyph size.
pub fn sized(icon: Text<'static>, size: f32) -> Text<'static> {
    icon.size(size)
}
