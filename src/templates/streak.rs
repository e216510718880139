use super::parts::{COLUMN_WIDTH, LEFT, caption, stat_tile};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::Element;

pub struct Streak;

impl Card for Streak {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Streak
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let privacy = config.privacy;
        let range = format!(
            "{} – {}",
            privacy.date(data.streak_start()),
            privacy.date(data.streak_end())
        );

        Element::new("g")
            .attr("class", "streak")
            .child(stat_tile(
                LEFT,
                640,
                COLUMN_WIDTH,
                340,
                &format!("{} days", data.longest_streak()),
                "Longest Streak",
                config,
            ))
            .child(caption(1050, 36, theme.text_light, &range))
            .child(stat_tile(
                LEFT,
                1160,
                COLUMN_WIDTH,
                260,
                &format!("{} days", data.current_streak()),
                "Current Streak",
                config,
            ))
            .child(caption(1520, 40, theme.text, "Don't break the chain!"))
    }
}
