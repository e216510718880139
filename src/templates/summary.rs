use super::parts::{banner, tile_pair};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::icons;
use crate::svg::{Element, format_number, format_percent};

const TILE_HEIGHT: u32 = 230;

/// One-card recap pulling a headline number from most of the other cards.
pub struct Summary;

impl Card for Summary {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Summary
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let streak = format!("{} days", data.longest_streak());
        let top_word = data.top_word();
        let top_emoji = data.top_emoji();
        let score = format!(
            "{} compatible",
            format_percent(data.compatibility_score())
        );

        Element::new("g")
            .attr("class", "summary")
            .child(tile_pair(
                620,
                TILE_HEIGHT,
                (&format_number(data.total_messages()), "Messages"),
                (&streak, "Longest Streak"),
                config,
            ))
            .child(tile_pair(
                880,
                TILE_HEIGHT,
                (&top_word, "Top Word"),
                (&top_emoji, "Top Emoji"),
                config,
            ))
            .child(tile_pair(
                1140,
                TILE_HEIGHT,
                (data.most_active_month(), "Busiest Month"),
                (data.most_active_day(), "Busiest Day"),
                config,
            ))
            .child(banner(1420, icons::COMPATIBILITY, &score, config))
    }
}
