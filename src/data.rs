use serde::{Deserialize, Serialize};

pub const DEFAULT_PERSON1: &str = "Elfan";
pub const DEFAULT_PERSON2: &str = "Savira";
pub const DEFAULT_START_DATE: &str = "1 Jan 2024";
pub const DEFAULT_END_DATE: &str = "31 Dec 2024";

pub const DEFAULT_TOTAL_MESSAGES: u64 = 12847;
pub const DEFAULT_TOTAL_WORDS: u64 = 98234;
pub const DEFAULT_TOTAL_DAYS: u64 = 365;
pub const DEFAULT_AVG_MESSAGES_PER_DAY: f64 = 35.2;
pub const DEFAULT_MEDIA_SHARED: u64 = 1203;
pub const DEFAULT_VOICE_NOTES: u64 = 214;
pub const DEFAULT_PERSON1_MESSAGES: u64 = 6680;
pub const DEFAULT_PERSON2_MESSAGES: u64 = 6167;
pub const DEFAULT_PERSON1_WORDS: u64 = 51230;
pub const DEFAULT_PERSON2_WORDS: u64 = 47004;

pub const DEFAULT_PERSON1_TOXICITY: f64 = 23.0;
pub const DEFAULT_PERSON2_TOXICITY: f64 = 17.0;
pub const DEFAULT_TOXIC_WORDS: [&str; 3] = ["anjir", "bodo amat", "terserah"];
pub const DEFAULT_TOXICITY_VERDICT: &str = "Still in the safe zone";

pub const DEFAULT_PERSON1_REPLY_MINUTES: f64 = 4.2;
pub const DEFAULT_PERSON2_REPLY_MINUTES: f64 = 12.5;
pub const DEFAULT_FASTEST_REPLY: &str = "3 sec";
pub const DEFAULT_SLOWEST_REPLY: &str = "2 days";

pub const DEFAULT_PERSON1_GHOST_COUNT: u64 = 7;
pub const DEFAULT_PERSON2_GHOST_COUNT: u64 = 12;
pub const DEFAULT_LONGEST_GHOST: &str = "3 days";
pub const DEFAULT_LAST_GHOST_DATE: &str = "14 Feb 2024";

pub const DEFAULT_PERSON1_PERCENTAGE: f64 = 52.0;
pub const DEFAULT_PERSON2_PERCENTAGE: f64 = 48.0;

pub const DEFAULT_TOP_WORDS: [(&str, u64); 5] = [
    ("wkwk", 1523),
    ("sayang", 892),
    ("iya", 756),
    ("makan", 543),
    ("besok", 421),
];
pub const DEFAULT_TOP_EMOJIS: [(&str, u64); 5] = [
    ("😂", 2341),
    ("❤️", 1876),
    ("🥺", 982),
    ("😭", 754),
    ("🔥", 432),
];

pub const DEFAULT_PERSON1_NIGHT_PERCENTAGE: f64 = 38.0;
pub const DEFAULT_PERSON2_NIGHT_PERCENTAGE: f64 = 29.0;
pub const DEFAULT_PEAK_HOUR: &str = "23:00";
pub const DEFAULT_LATE_NIGHT_MESSAGES: u64 = 3421;

pub const DEFAULT_PERSON1_INITIATES: f64 = 61.0;
pub const DEFAULT_PERSON2_INITIATES: f64 = 39.0;
pub const DEFAULT_FIRST_MESSAGE: &str = "Hai, boleh kenalan?";
pub const DEFAULT_FIRST_MESSAGE_DATE: &str = "3 Mar 2023";

pub const DEFAULT_BEST_QUOTE: &str = "Kamu tuh ya, bikin aku senyum terus";
pub const DEFAULT_QUOTE_DATE: &str = "14 Feb 2024";

pub const DEFAULT_SWEET_WORDS_COUNT: u64 = 892;
pub const DEFAULT_PERSON1_SWEET_COUNT: u64 = 480;
pub const DEFAULT_PERSON2_SWEET_COUNT: u64 = 412;
pub const DEFAULT_TOP_SWEET_WORD: &str = "sayang";
pub const DEFAULT_SWEETEST_MESSAGE: &str = "Makasih ya udah selalu ada";

pub const DEFAULT_TOP_TOPICS: [(&str, f64); 5] = [
    ("Food", 32.0),
    ("Plans", 24.0),
    ("Work", 18.0),
    ("Movies", 14.0),
    ("Gossip", 12.0),
];

pub const DEFAULT_LONGEST_STREAK: u64 = 87;
pub const DEFAULT_CURRENT_STREAK: u64 = 23;
pub const DEFAULT_STREAK_START: &str = "1 Jun 2024";
pub const DEFAULT_STREAK_END: &str = "26 Aug 2024";

pub const DEFAULT_RED_FLAGS: [(&str, &str); 3] = [
    ("Left on read", "ok."),
    ("Dry replies", "hmm"),
    ("Late replies", "sorry baru bangun"),
];

pub const DEFAULT_COMPATIBILITY_SCORE: f64 = 87.0;
pub const DEFAULT_VIBE_LABEL: &str = "Soulmates in progress";
pub const DEFAULT_SHARED_INTERESTS: [&str; 3] = ["Food", "Movies", "Memes"];

pub const DEFAULT_MOST_ACTIVE_MONTH: &str = "December";
pub const DEFAULT_MOST_ACTIVE_DAY: &str = "Saturday";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicShare {
    pub topic: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    pub title: String,
    pub example: String,
}

/// Precomputed chat statistics, as supplied by whatever analysed the chat.
///
/// Every field is optional. Accessors return the field when present and a
/// fixed fallback otherwise. Blank strings and empty lists count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryData {
    pub person1_name: Option<String>,
    pub person2_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,

    pub total_messages: Option<u64>,
    pub total_words: Option<u64>,
    pub total_days: Option<u64>,
    pub avg_messages_per_day: Option<f64>,
    pub media_shared: Option<u64>,
    pub voice_notes: Option<u64>,
    pub person1_messages: Option<u64>,
    pub person2_messages: Option<u64>,
    pub person1_words: Option<u64>,
    pub person2_words: Option<u64>,

    pub person1_toxicity: Option<f64>,
    pub person2_toxicity: Option<f64>,
    pub toxic_words: Option<Vec<String>>,
    pub toxicity_verdict: Option<String>,

    pub person1_reply_minutes: Option<f64>,
    pub person2_reply_minutes: Option<f64>,
    pub fastest_reply: Option<String>,
    pub slowest_reply: Option<String>,

    pub person1_ghost_count: Option<u64>,
    pub person2_ghost_count: Option<u64>,
    pub longest_ghost: Option<String>,
    pub last_ghost_date: Option<String>,

    pub person1_percentage: Option<f64>,
    pub person2_percentage: Option<f64>,

    pub top_words: Option<Vec<WordCount>>,
    pub top_emojis: Option<Vec<EmojiCount>>,

    pub person1_night_percentage: Option<f64>,
    pub person2_night_percentage: Option<f64>,
    pub peak_hour: Option<String>,
    pub late_night_messages: Option<u64>,

    pub person1_initiates: Option<f64>,
    pub person2_initiates: Option<f64>,
    pub first_message: Option<String>,
    pub first_message_date: Option<String>,

    pub best_quote: Option<String>,
    pub quote_author: Option<String>,
    pub quote_date: Option<String>,

    pub sweet_words_count: Option<u64>,
    pub person1_sweet_count: Option<u64>,
    pub person2_sweet_count: Option<u64>,
    pub top_sweet_word: Option<String>,
    pub sweetest_message: Option<String>,

    pub top_topics: Option<Vec<TopicShare>>,

    pub longest_streak: Option<u64>,
    pub current_streak: Option<u64>,
    pub streak_start: Option<String>,
    pub streak_end: Option<String>,

    pub red_flags: Option<Vec<RedFlag>>,

    pub compatibility_score: Option<f64>,
    pub vibe_label: Option<String>,
    pub shared_interests: Option<Vec<String>>,

    pub most_active_month: Option<String>,
    pub most_active_day: Option<String>,
}

fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback,
    }
}

fn list_or<T: Clone>(value: &Option<Vec<T>>, fallback: impl FnOnce() -> Vec<T>) -> Vec<T> {
    match value {
        Some(items) if !items.is_empty() => items.clone(),
        _ => fallback(),
    }
}

impl StoryData {
    /// Parse a JSON payload. Unknown keys are ignored.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn person1_name(&self) -> &str {
        text_or(&self.person1_name, DEFAULT_PERSON1)
    }

    pub fn person2_name(&self) -> &str {
        text_or(&self.person2_name, DEFAULT_PERSON2)
    }

    pub fn start_date(&self) -> &str {
        text_or(&self.start_date, DEFAULT_START_DATE)
    }

    pub fn end_date(&self) -> &str {
        text_or(&self.end_date, DEFAULT_END_DATE)
    }

    pub fn total_messages(&self) -> u64 {
        self.total_messages.unwrap_or(DEFAULT_TOTAL_MESSAGES)
    }

    pub fn total_words(&self) -> u64 {
        self.total_words.unwrap_or(DEFAULT_TOTAL_WORDS)
    }

    pub fn total_days(&self) -> u64 {
        self.total_days.unwrap_or(DEFAULT_TOTAL_DAYS)
    }

    pub fn avg_messages_per_day(&self) -> f64 {
        self.avg_messages_per_day
            .unwrap_or(DEFAULT_AVG_MESSAGES_PER_DAY)
    }

    pub fn media_shared(&self) -> u64 {
        self.media_shared.unwrap_or(DEFAULT_MEDIA_SHARED)
    }

    pub fn voice_notes(&self) -> u64 {
        self.voice_notes.unwrap_or(DEFAULT_VOICE_NOTES)
    }

    pub fn person1_messages(&self) -> u64 {
        self.person1_messages.unwrap_or(DEFAULT_PERSON1_MESSAGES)
    }

    pub fn person2_messages(&self) -> u64 {
        self.person2_messages.unwrap_or(DEFAULT_PERSON2_MESSAGES)
    }

    pub fn person1_words(&self) -> u64 {
        self.person1_words.unwrap_or(DEFAULT_PERSON1_WORDS)
    }

    pub fn person2_words(&self) -> u64 {
        self.person2_words.unwrap_or(DEFAULT_PERSON2_WORDS)
    }

    pub fn person1_toxicity(&self) -> f64 {
        self.person1_toxicity.unwrap_or(DEFAULT_PERSON1_TOXICITY)
    }

    pub fn person2_toxicity(&self) -> f64 {
        self.person2_toxicity.unwrap_or(DEFAULT_PERSON2_TOXICITY)
    }

    pub fn toxic_words(&self) -> Vec<String> {
        list_or(&self.toxic_words, || {
            DEFAULT_TOXIC_WORDS.iter().map(|w| w.to_string()).collect()
        })
    }

    pub fn toxicity_verdict(&self) -> &str {
        text_or(&self.toxicity_verdict, DEFAULT_TOXICITY_VERDICT)
    }

    pub fn person1_reply_minutes(&self) -> f64 {
        self.person1_reply_minutes
            .unwrap_or(DEFAULT_PERSON1_REPLY_MINUTES)
    }

    pub fn person2_reply_minutes(&self) -> f64 {
        self.person2_reply_minutes
            .unwrap_or(DEFAULT_PERSON2_REPLY_MINUTES)
    }

    pub fn fastest_reply(&self) -> &str {
        text_or(&self.fastest_reply, DEFAULT_FASTEST_REPLY)
    }

    pub fn slowest_reply(&self) -> &str {
        text_or(&self.slowest_reply, DEFAULT_SLOWEST_REPLY)
    }

    pub fn person1_ghost_count(&self) -> u64 {
        self.person1_ghost_count
            .unwrap_or(DEFAULT_PERSON1_GHOST_COUNT)
    }

    pub fn person2_ghost_count(&self) -> u64 {
        self.person2_ghost_count
            .unwrap_or(DEFAULT_PERSON2_GHOST_COUNT)
    }

    pub fn longest_ghost(&self) -> &str {
        text_or(&self.longest_ghost, DEFAULT_LONGEST_GHOST)
    }

    pub fn last_ghost_date(&self) -> &str {
        text_or(&self.last_ghost_date, DEFAULT_LAST_GHOST_DATE)
    }

    pub fn person1_percentage(&self) -> f64 {
        self.person1_percentage.unwrap_or(DEFAULT_PERSON1_PERCENTAGE)
    }

    pub fn person2_percentage(&self) -> f64 {
        self.person2_percentage.unwrap_or(DEFAULT_PERSON2_PERCENTAGE)
    }

    pub fn top_words(&self) -> Vec<WordCount> {
        list_or(&self.top_words, || {
            DEFAULT_TOP_WORDS
                .iter()
                .map(|(word, count)| WordCount {
                    word: word.to_string(),
                    count: *count,
                })
                .collect()
        })
    }

    pub fn top_emojis(&self) -> Vec<EmojiCount> {
        list_or(&self.top_emojis, || {
            DEFAULT_TOP_EMOJIS
                .iter()
                .map(|(emoji, count)| EmojiCount {
                    emoji: emoji.to_string(),
                    count: *count,
                })
                .collect()
        })
    }

    pub fn person1_night_percentage(&self) -> f64 {
        self.person1_night_percentage
            .unwrap_or(DEFAULT_PERSON1_NIGHT_PERCENTAGE)
    }

    pub fn person2_night_percentage(&self) -> f64 {
        self.person2_night_percentage
            .unwrap_or(DEFAULT_PERSON2_NIGHT_PERCENTAGE)
    }

    pub fn peak_hour(&self) -> &str {
        text_or(&self.peak_hour, DEFAULT_PEAK_HOUR)
    }

    pub fn late_night_messages(&self) -> u64 {
        self.late_night_messages
            .unwrap_or(DEFAULT_LATE_NIGHT_MESSAGES)
    }

    pub fn person1_initiates(&self) -> f64 {
        self.person1_initiates.unwrap_or(DEFAULT_PERSON1_INITIATES)
    }

    pub fn person2_initiates(&self) -> f64 {
        self.person2_initiates.unwrap_or(DEFAULT_PERSON2_INITIATES)
    }

    pub fn first_message(&self) -> &str {
        text_or(&self.first_message, DEFAULT_FIRST_MESSAGE)
    }

    pub fn first_message_date(&self) -> &str {
        text_or(&self.first_message_date, DEFAULT_FIRST_MESSAGE_DATE)
    }

    pub fn best_quote(&self) -> &str {
        text_or(&self.best_quote, DEFAULT_BEST_QUOTE)
    }

    /// Falls back to the first participant when no author was recorded.
    pub fn quote_author(&self) -> &str {
        text_or(&self.quote_author, self.person1_name())
    }

    pub fn quote_date(&self) -> &str {
        text_or(&self.quote_date, DEFAULT_QUOTE_DATE)
    }

    pub fn sweet_words_count(&self) -> u64 {
        self.sweet_words_count.unwrap_or(DEFAULT_SWEET_WORDS_COUNT)
    }

    pub fn person1_sweet_count(&self) -> u64 {
        self.person1_sweet_count
            .unwrap_or(DEFAULT_PERSON1_SWEET_COUNT)
    }

    pub fn person2_sweet_count(&self) -> u64 {
        self.person2_sweet_count
            .unwrap_or(DEFAULT_PERSON2_SWEET_COUNT)
    }

    pub fn top_sweet_word(&self) -> &str {
        text_or(&self.top_sweet_word, DEFAULT_TOP_SWEET_WORD)
    }

    pub fn sweetest_message(&self) -> &str {
        text_or(&self.sweetest_message, DEFAULT_SWEETEST_MESSAGE)
    }

    pub fn top_topics(&self) -> Vec<TopicShare> {
        list_or(&self.top_topics, || {
            DEFAULT_TOP_TOPICS
                .iter()
                .map(|(topic, percentage)| TopicShare {
                    topic: topic.to_string(),
                    percentage: *percentage,
                })
                .collect()
        })
    }

    pub fn longest_streak(&self) -> u64 {
        self.longest_streak.unwrap_or(DEFAULT_LONGEST_STREAK)
    }

    pub fn current_streak(&self) -> u64 {
        self.current_streak.unwrap_or(DEFAULT_CURRENT_STREAK)
    }

    pub fn streak_start(&self) -> &str {
        text_or(&self.streak_start, DEFAULT_STREAK_START)
    }

    pub fn streak_end(&self) -> &str {
        text_or(&self.streak_end, DEFAULT_STREAK_END)
    }

    pub fn red_flags(&self) -> Vec<RedFlag> {
        list_or(&self.red_flags, || {
            DEFAULT_RED_FLAGS
                .iter()
                .map(|(title, example)| RedFlag {
                    title: title.to_string(),
                    example: example.to_string(),
                })
                .collect()
        })
    }

    pub fn compatibility_score(&self) -> f64 {
        self.compatibility_score
            .unwrap_or(DEFAULT_COMPATIBILITY_SCORE)
    }

    pub fn vibe_label(&self) -> &str {
        text_or(&self.vibe_label, DEFAULT_VIBE_LABEL)
    }

    pub fn shared_interests(&self) -> Vec<String> {
        list_or(&self.shared_interests, || {
            DEFAULT_SHARED_INTERESTS
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }

    pub fn most_active_month(&self) -> &str {
        text_or(&self.most_active_month, DEFAULT_MOST_ACTIVE_MONTH)
    }

    pub fn most_active_day(&self) -> &str {
        text_or(&self.most_active_day, DEFAULT_MOST_ACTIVE_DAY)
    }

    /// The most used word, or the first fallback word.
    pub fn top_word(&self) -> String {
        self.top_words()
            .into_iter()
            .next()
            .map(|w| w.word)
            .unwrap_or_else(|| DEFAULT_TOP_WORDS[0].0.to_string())
    }

    /// The most used emoji, or the first fallback emoji.
    pub fn top_emoji(&self) -> String {
        self.top_emojis()
            .into_iter()
            .next()
            .map(|e| e.emoji)
            .unwrap_or_else(|| DEFAULT_TOP_EMOJIS[0].0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_uses_fallbacks() {
        let data = StoryData::default();
        assert_eq!(data.person1_name(), "Elfan");
        assert_eq!(data.person2_name(), "Savira");
        assert_eq!(data.total_messages(), 12847);
        assert_eq!(data.top_words().len(), 5);
        assert_eq!(data.red_flags()[0].title, "Left on read");
    }

    #[test]
    fn parses_camel_case_json() {
        let data = StoryData::from_json(
            r#"{
                "person1Name": "Raka",
                "person2Name": "Dinda",
                "totalMessages": 500,
                "person1Percentage": 60.5,
                "topWords": [{"word": "halo", "count": 10}],
                "somethingElse": true
            }"#,
        )
        .unwrap();
        assert_eq!(data.person1_name(), "Raka");
        assert_eq!(data.person2_name(), "Dinda");
        assert_eq!(data.total_messages(), 500);
        assert_eq!(data.person1_percentage(), 60.5);
        assert_eq!(data.top_word(), "halo");
    }

    #[test]
    fn null_and_blank_count_as_missing() {
        let data =
            StoryData::from_json(r#"{"person1Name": null, "person2Name": "  ", "topEmojis": []}"#)
                .unwrap();
        assert_eq!(data.person1_name(), DEFAULT_PERSON1);
        assert_eq!(data.person2_name(), DEFAULT_PERSON2);
        assert_eq!(data.top_emoji(), "😂");
    }

    #[test]
    fn quote_author_follows_person1() {
        let data = StoryData {
            person1_name: Some("Raka".into()),
            ..Default::default()
        };
        assert_eq!(data.quote_author(), "Raka");

        let data = StoryData {
            quote_author: Some("Dinda".into()),
            ..data
        };
        assert_eq!(data.quote_author(), "Dinda");
    }
}
