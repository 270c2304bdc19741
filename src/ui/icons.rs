//! Shared UI icons and emojis for command output.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "*");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[WARN]");

// File indicators
pub static FILE_NEW: Emoji<'_, '_> = Emoji("📄 ", "+");

// Wall indicators
pub static POSTER: Emoji<'_, '_> = Emoji("🖼️  ", "#");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "->");
pub static EDIT: Emoji<'_, '_> = Emoji("✏️  ", "~");
pub static RESET: Emoji<'_, '_> = Emoji("🔄 ", "[RESET]");
