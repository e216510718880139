use super::parts::{caption, chips, score_ring};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_percent};

const MAX_INTERESTS: usize = 4;

pub struct Compatibility;

impl Card for Compatibility {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Compatibility
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let score = data.compatibility_score();
        let mut interests = data.shared_interests();
        interests.truncate(MAX_INTERESTS);

        Element::new("g")
            .attr("class", "compatibility")
            .child(score_ring(900, 220, score, &format_percent(score), config))
            .child(
                caption(1260, 52, theme.text, data.vibe_label()).attr("font-weight", 800),
            )
            .child(caption(1380, 32, theme.text_light, "Shared interests"))
            .child(chips(1420, &interests, false, config))
    }
}
