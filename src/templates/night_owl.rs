use super::parts::{Rule, Verdict, comparison_pair, percent_fractions, tile_pair, verdict_banner};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_number, format_percent};

pub struct NightOwl;

impl Card for NightOwl {
    fn kind(&self) -> TemplateKind {
        TemplateKind::NightOwl
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let (name1, name2) = config.names(data);
        let night1 = data.person1_night_percentage();
        let night2 = data.person2_night_percentage();

        let verdict = Verdict::compare(night1, night2, Rule::Higher);
        let headline = verdict.headline(
            name1,
            name2,
            |name| format!("{} is the night owl", name),
            "Both night owls",
        );

        Element::new("g")
            .attr("class", "night-owl")
            .child(tile_pair(
                640,
                260,
                (
                    &format_number(data.late_night_messages()),
                    "Late Night Messages",
                ),
                (data.peak_hour(), "Peak Hour"),
                config,
            ))
            .child(comparison_pair(
                1000,
                (name1, name2),
                (&format_percent(night1), &format_percent(night2)),
                percent_fractions(night1, night2),
                config,
            ))
            .child(verdict_banner(1320, verdict, &headline, config))
    }
}
