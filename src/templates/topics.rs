use super::parts::share_row;
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_percent};

const MAX_TOPICS: usize = 5;
const FIRST_ROW: u32 = 700;
const ROW_STEP: u32 = 170;

pub struct Topics;

impl Card for Topics {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Topics
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        Element::new("g").attr("class", "topics").children(
            data.top_topics()
                .iter()
                .take(MAX_TOPICS)
                .enumerate()
                .map(|(i, entry)| {
                    share_row(
                        FIRST_ROW + ROW_STEP * i as u32,
                        &entry.topic,
                        &format_percent(entry.percentage),
                        entry.percentage,
                        config,
                    )
                }),
        )
    }
}
