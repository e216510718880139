mod compatibility;
mod emoji;
mod ghosting;
mod initiator;
mod night_owl;
mod parts;
mod quote;
mod red_flags;
mod reply_speed;
mod stats;
mod streak;
mod summary;
mod sweet_talk;
mod talk_balance;
mod top_words;
mod topics;
mod toxicity;

pub use parts::{Rule, Verdict};

use crate::data::StoryData;
use crate::icons;
use crate::privacy::PrivacyMode;
use crate::svg::Element;
use crate::theme::Theme;
use log::debug;

// Canvas
pub const WIDTH: u32 = 1080;
pub const HEIGHT: u32 = 1920;
pub const CENTER_X: u32 = WIDTH / 2;
pub const FONT_FAMILY: &str =
    "Inter, -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif";

// Filter ids referenced from the card body
pub const DECOR_BLUR_ID: &str = "decor-blur";
pub const SENSITIVE_BLUR_ID: &str = "sensitive-blur";
const BACKGROUND_ID: &str = "bg";

// Header and footer baselines
const ICON_Y: u32 = 300;
const TITLE_Y: u32 = 440;
const SUBTITLE_Y: u32 = 510;
const PERIOD_Y: u32 = 1740;
const BRAND_Y: u32 = 1810;
const HASHTAG_Y: u32 = 1860;

pub const BRAND: &str = "ChatStory";
pub const HASHTAG: &str = "#chatstory";

/// The sixteen story layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    #[default]
    Stats,
    Toxicity,
    ReplySpeed,
    Ghosting,
    TalkBalance,
    TopWords,
    Emoji,
    NightOwl,
    Initiator,
    Quote,
    SweetTalk,
    Topics,
    Streak,
    RedFlags,
    Compatibility,
    Summary,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 16] = [
        TemplateKind::Stats,
        TemplateKind::Toxicity,
        TemplateKind::ReplySpeed,
        TemplateKind::Ghosting,
        TemplateKind::TalkBalance,
        TemplateKind::TopWords,
        TemplateKind::Emoji,
        TemplateKind::NightOwl,
        TemplateKind::Initiator,
        TemplateKind::Quote,
        TemplateKind::SweetTalk,
        TemplateKind::Topics,
        TemplateKind::Streak,
        TemplateKind::RedFlags,
        TemplateKind::Compatibility,
        TemplateKind::Summary,
    ];

    /// Resolve a template tag. Unknown or empty tags give [`TemplateKind::Stats`].
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
            .unwrap_or_default()
    }

    pub fn tag(self) -> &'static str {
        match self {
            TemplateKind::Stats => "stats",
            TemplateKind::Toxicity => "toxicity",
            TemplateKind::ReplySpeed => "replySpeed",
            TemplateKind::Ghosting => "ghosting",
            TemplateKind::TalkBalance => "talkBalance",
            TemplateKind::TopWords => "topWords",
            TemplateKind::Emoji => "emoji",
            TemplateKind::NightOwl => "nightOwl",
            TemplateKind::Initiator => "initiator",
            TemplateKind::Quote => "quote",
            TemplateKind::SweetTalk => "sweetTalk",
            TemplateKind::Topics => "topics",
            TemplateKind::Streak => "streak",
            TemplateKind::RedFlags => "redFlags",
            TemplateKind::Compatibility => "compatibility",
            TemplateKind::Summary => "summary",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TemplateKind::Stats => "Chat Stats",
            TemplateKind::Toxicity => "Toxicity Meter",
            TemplateKind::ReplySpeed => "Reply Speed",
            TemplateKind::Ghosting => "Ghosting Report",
            TemplateKind::TalkBalance => "Who Talks More",
            TemplateKind::TopWords => "Top Words",
            TemplateKind::Emoji => "Emoji Favorites",
            TemplateKind::NightOwl => "Night Owl",
            TemplateKind::Initiator => "Who Texts First",
            TemplateKind::Quote => "Quote of the Year",
            TemplateKind::SweetTalk => "Sweet Talk",
            TemplateKind::Topics => "Hot Topics",
            TemplateKind::Streak => "Chat Streak",
            TemplateKind::RedFlags => "Red Flags",
            TemplateKind::Compatibility => "Compatibility",
            TemplateKind::Summary => "Chat Wrapped",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TemplateKind::Stats => icons::STATS,
            TemplateKind::Toxicity => icons::TOXICITY,
            TemplateKind::ReplySpeed => icons::REPLY_SPEED,
            TemplateKind::Ghosting => icons::GHOSTING,
            TemplateKind::TalkBalance => icons::TALK_BALANCE,
            TemplateKind::TopWords => icons::TOP_WORDS,
            TemplateKind::Emoji => icons::EMOJI,
            TemplateKind::NightOwl => icons::NIGHT_OWL,
            TemplateKind::Initiator => icons::INITIATOR,
            TemplateKind::Quote => icons::QUOTE,
            TemplateKind::SweetTalk => icons::SWEET_TALK,
            TemplateKind::Topics => icons::TOPICS,
            TemplateKind::Streak => icons::STREAK,
            TemplateKind::RedFlags => icons::RED_FLAGS,
            TemplateKind::Compatibility => icons::COMPATIBILITY,
            TemplateKind::Summary => icons::SUMMARY,
        }
    }

    /// Generate filename for the given theme
    pub fn filename(self, theme_name: &str) -> String {
        format!("{}_{}.svg", self.tag(), theme_name)
    }

    fn card(self) -> &'static dyn Card {
        match self {
            TemplateKind::Stats => &stats::Stats,
            TemplateKind::Toxicity => &toxicity::Toxicity,
            TemplateKind::ReplySpeed => &reply_speed::ReplySpeed,
            TemplateKind::Ghosting => &ghosting::Ghosting,
            TemplateKind::TalkBalance => &talk_balance::TalkBalance,
            TemplateKind::TopWords => &top_words::TopWords,
            TemplateKind::Emoji => &emoji::Emoji,
            TemplateKind::NightOwl => &night_owl::NightOwl,
            TemplateKind::Initiator => &initiator::Initiator,
            TemplateKind::Quote => &quote::Quote,
            TemplateKind::SweetTalk => &sweet_talk::SweetTalk,
            TemplateKind::Topics => &topics::Topics,
            TemplateKind::Streak => &streak::Streak,
            TemplateKind::RedFlags => &red_flags::RedFlags,
            TemplateKind::Compatibility => &compatibility::Compatibility,
            TemplateKind::Summary => &summary::Summary,
        }
    }
}

/// Configuration for rendering a card
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub theme: Theme,
    pub privacy: PrivacyMode,
}

impl RenderConfig {
    pub fn new(theme: Theme, privacy: PrivacyMode) -> Self {
        Self { theme, privacy }
    }

    /// Both participant names, redacted when names are hidden.
    pub fn names<'a>(&self, data: &'a StoryData) -> (&'a str, &'a str) {
        (
            self.privacy.name(data.person1_name()),
            self.privacy.name(data.person2_name()),
        )
    }

    /// Apply the sensitive-content blur to an element when enabled.
    pub fn sensitive(&self, element: Element) -> Element {
        if self.privacy.blur_sensitive {
            element.attr("filter", format!("url(#{})", SENSITIVE_BLUR_ID))
        } else {
            element
        }
    }
}

/// One story layout. Implementors only draw the body; the canvas, header and
/// footer are shared.
trait Card {
    fn kind(&self) -> TemplateKind;

    fn subtitle(&self, data: &StoryData, config: &RenderConfig) -> String {
        let (name1, name2) = config.names(data);
        format!("{} & {}", name1, name2)
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element;
}

/// Render one story card.
pub fn render(
    kind: TemplateKind,
    theme: &Theme,
    data: &StoryData,
    privacy: &PrivacyMode,
) -> Element {
    let config = RenderConfig::new(*theme, *privacy);
    debug!(
        "Rendering {} card (theme: {}, privacy: {:?})",
        kind.tag(),
        theme.name,
        privacy
    );
    compose(kind.card(), data, &config)
}

/// Render by tag and serialise. Unknown tags fall back to the defaults.
pub fn render_svg(tag: &str, theme_tag: &str, data: &StoryData, privacy: &PrivacyMode) -> String {
    let kind = TemplateKind::from_tag(tag);
    let theme = Theme::from_tag(theme_tag);
    render(kind, &theme, data, privacy).to_svg()
}

fn compose(card: &dyn Card, data: &StoryData, config: &RenderConfig) -> Element {
    let kind = card.kind();
    let theme = config.theme;

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", WIDTH)
        .attr("height", HEIGHT)
        .attr("viewBox", format!("0 0 {} {}", WIDTH, HEIGHT))
        .attr("font-family", FONT_FAMILY)
        .attr("data-template", kind.tag())
        .child(defs(config))
        .child(
            Element::new("rect")
                .attr("width", WIDTH)
                .attr("height", HEIGHT)
                .attr("fill", format!("url(#{})", BACKGROUND_ID)),
        )
        .child(decorations(&theme))
        .child(header(kind, &card.subtitle(data, config), &theme))
        .child(
            Element::new("g")
                .attr("class", "content")
                .child(card.body(data, config)),
        )
        .child(footer(data, config))
}

fn defs(config: &RenderConfig) -> Element {
    let theme = config.theme;
    let mut defs = Element::new("defs")
        .child(
            Element::new("linearGradient")
                .attr("id", BACKGROUND_ID)
                .attr("x1", 0)
                .attr("y1", 0)
                .attr("x2", 0)
                .attr("y2", 1)
                .child(
                    Element::new("stop")
                        .attr("offset", "0%")
                        .attr("stop-color", theme.background),
                )
                .child(
                    Element::new("stop")
                        .attr("offset", "100%")
                        .attr("stop-color", theme.card),
                ),
        )
        .child(blur_filter(DECOR_BLUR_ID, 80));

    if config.privacy.blur_sensitive {
        defs.push(blur_filter(SENSITIVE_BLUR_ID, 10));
    }
    defs
}

fn blur_filter(id: &str, deviation: u32) -> Element {
    Element::new("filter")
        .attr("id", id)
        .attr("x", "-50%")
        .attr("y", "-50%")
        .attr("width", "200%")
        .attr("height", "200%")
        .child(Element::new("feGaussianBlur").attr("stdDeviation", deviation))
}

// Soft colour blobs behind the content
fn decorations(theme: &Theme) -> Element {
    let blobs = [
        (180, 260, 260, theme.primary, 0.35),
        (940, 900, 300, theme.accent, 0.30),
        (260, 1650, 280, theme.primary, 0.25),
    ];

    Element::new("g")
        .attr("class", "decorations")
        .attr("filter", format!("url(#{})", DECOR_BLUR_ID))
        .children(blobs.into_iter().map(|(cx, cy, r, fill, opacity)| {
            Element::new("circle")
                .attr("cx", cx)
                .attr("cy", cy)
                .attr("r", r)
                .attr("fill", fill)
                .attr("opacity", opacity)
        }))
}

fn header(kind: TemplateKind, subtitle: &str, theme: &Theme) -> Element {
    Element::new("g")
        .attr("class", "header")
        .attr("text-anchor", "middle")
        .child(parts::text(CENTER_X, ICON_Y, 120, theme.text).text(kind.icon()))
        .child(
            parts::text(CENTER_X, TITLE_Y, 72, theme.text)
                .attr("font-weight", 800)
                .text(kind.title()),
        )
        .child(parts::text(CENTER_X, SUBTITLE_Y, 36, theme.text_light).text(subtitle))
}

fn footer(data: &StoryData, config: &RenderConfig) -> Element {
    let theme = config.theme;
    let period = format!(
        "{} – {}",
        config.privacy.date(data.start_date()),
        config.privacy.date(data.end_date())
    );

    Element::new("g")
        .attr("class", "footer")
        .attr("text-anchor", "middle")
        .child(parts::text(CENTER_X, PERIOD_Y, 30, theme.text_light).text(period))
        .child(
            parts::text(CENTER_X, BRAND_Y, 40, theme.primary)
                .attr("font-weight", 700)
                .text(BRAND),
        )
        .child(parts::text(CENTER_X, HASHTAG_Y, 28, theme.text_light).text(HASHTAG))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn every_tag_round_trips() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(TemplateKind::from_tag("REPLYSPEED"), TemplateKind::ReplySpeed);
        assert_eq!(TemplateKind::from_tag(" redflags "), TemplateKind::RedFlags);
    }

    #[test]
    fn unknown_tag_falls_back_to_stats() {
        assert_eq!(TemplateKind::from_tag("horoscope"), TemplateKind::Stats);
        assert_eq!(TemplateKind::from_tag(""), TemplateKind::Stats);
    }

    #[test]
    fn every_card_reports_its_own_kind() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.card().kind(), kind);
        }
    }

    #[test]
    fn filename_combines_tag_and_theme() {
        assert_eq!(
            TemplateKind::NightOwl.filename(theme::OCEAN.name),
            "nightOwl_ocean.svg"
        );
    }

    #[test]
    fn canvas_has_fixed_size() {
        let card = render(
            TemplateKind::Stats,
            &theme::DARK,
            &StoryData::default(),
            &PrivacyMode::default(),
        );
        assert_eq!(card.name(), "svg");
        assert_eq!(card.get_attr("width"), Some("1080"));
        assert_eq!(card.get_attr("height"), Some("1920"));
        assert_eq!(card.get_attr("viewBox"), Some("0 0 1080 1920"));
    }

    #[test]
    fn sensitive_filter_defined_only_when_blurring() {
        let data = StoryData::default();
        let plain = render(
            TemplateKind::Toxicity,
            &theme::DARK,
            &data,
            &PrivacyMode::default(),
        )
        .to_svg();
        assert!(!plain.contains(SENSITIVE_BLUR_ID));

        let blurred = render(
            TemplateKind::Toxicity,
            &theme::DARK,
            &data,
            &PrivacyMode {
                blur_sensitive: true,
                ..Default::default()
            },
        )
        .to_svg();
        assert!(blurred.contains(r#"<filter id="sensitive-blur""#));
        assert!(blurred.contains("url(#sensitive-blur)"));
    }

    #[test]
    fn footer_shows_period_and_brand() {
        let text = render(
            TemplateKind::Streak,
            &theme::LIGHT,
            &StoryData::default(),
            &PrivacyMode::default(),
        )
        .text_content();
        assert!(text.contains("1 Jan 2024 – 31 Dec 2024"));
        assert!(text.contains(BRAND));
        assert!(text.contains(HASHTAG));
    }
}
