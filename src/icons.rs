// Header glyphs, one per template.
pub const STATS: &str = "📊";
pub const TOXICITY: &str = "☠️";
pub const REPLY_SPEED: &str = "⚡";
pub const GHOSTING: &str = "👻";
pub const TALK_BALANCE: &str = "🗣️";
pub const TOP_WORDS: &str = "💬";
pub const EMOJI: &str = "😂";
pub const NIGHT_OWL: &str = "🦉";
pub const INITIATOR: &str = "👋";
pub const QUOTE: &str = "✨";
pub const SWEET_TALK: &str = "💕";
pub const TOPICS: &str = "🔥";
pub const STREAK: &str = "📅";
pub const RED_FLAGS: &str = "🚩";
pub const COMPATIBILITY: &str = "💞";
pub const SUMMARY: &str = "🎁";

pub const CROWN: &str = "👑";
pub const HANDSHAKE: &str = "🤝";

/// Opening quotation mark drawn above quote blocks.
pub const QUOTE_MARK: &str = "“";
