use super::parts::{caption, ranked_row};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_number};

const MAX_EMOJIS: usize = 5;

/// The favourite emoji large, the runners-up as a leaderboard.
pub struct Emoji;

impl Card for Emoji {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Emoji
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let emojis = data.top_emojis();
        let mut body = Element::new("g").attr("class", "emoji");

        let Some((top, rest)) = emojis.split_first() else {
            return body;
        };

        body.push(caption(860, 220, theme.text, &top.emoji));
        body.push(caption(
            960,
            40,
            theme.text_light,
            &format!("used {} times", format_number(top.count)),
        ));

        for (i, entry) in rest.iter().take(MAX_EMOJIS - 1).enumerate() {
            body.push(ranked_row(
                1040 + 140 * i as u32,
                i + 2,
                &entry.emoji,
                &format_number(entry.count),
                config,
            ));
        }
        body
    }
}
