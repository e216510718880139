use super::parts::{comparison_pair, relative_fractions, tile_pair};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_number};
use log::debug;

const GRID_TOP: u32 = 640;
const TILE_HEIGHT: u32 = 240;
const ROW_GAP: u32 = 30;

/// Headline totals plus each person's share of the messages.
pub struct Stats;

impl Card for Stats {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Stats
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        debug!("Rendering stats body");
        let (name1, name2) = config.names(data);
        let messages1 = data.person1_messages();
        let messages2 = data.person2_messages();
        let avg = format!("{:.1}", data.avg_messages_per_day());

        let second_row = GRID_TOP + TILE_HEIGHT + ROW_GAP;
        let third_row = second_row + TILE_HEIGHT + ROW_GAP;
        let bars_top = third_row + 180 + 80;

        Element::new("g")
            .attr("class", "stats")
            .child(tile_pair(
                GRID_TOP,
                TILE_HEIGHT,
                (&format_number(data.total_messages()), "Messages"),
                (&format_number(data.total_words()), "Words"),
                config,
            ))
            .child(tile_pair(
                second_row,
                TILE_HEIGHT,
                (&data.total_days().to_string(), "Days"),
                (&avg, "Msgs / Day"),
                config,
            ))
            .child(tile_pair(
                third_row,
                180,
                (&format_number(data.media_shared()), "Media Shared"),
                (&format_number(data.voice_notes()), "Voice Notes"),
                config,
            ))
            .child(comparison_pair(
                bars_top,
                (name1, name2),
                (&format_number(messages1), &format_number(messages2)),
                relative_fractions(messages1 as f64, messages2 as f64),
                config,
            ))
    }
}
