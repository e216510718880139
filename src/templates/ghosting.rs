use super::parts::{
    COLUMN_WIDTH, LEFT, Rule, Verdict, caption, comparison_pair, relative_fractions, stat_tile,
    verdict_banner,
};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::Element;

pub struct Ghosting;

impl Card for Ghosting {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Ghosting
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let (name1, name2) = config.names(data);
        let count1 = data.person1_ghost_count();
        let count2 = data.person2_ghost_count();

        let verdict = Verdict::compare(count1, count2, Rule::Higher);
        let headline = verdict.headline(
            name1,
            name2,
            |name| format!("{} is the ghost", name),
            "Both ghost equally",
        );
        let last = format!(
            "Last ghosted on {}",
            config.privacy.date(data.last_ghost_date())
        );

        Element::new("g")
            .attr("class", "ghosting")
            .child(stat_tile(
                LEFT,
                620,
                COLUMN_WIDTH,
                260,
                data.longest_ghost(),
                "Longest Silence",
                config,
            ))
            .child(comparison_pair(
                980,
                (name1, name2),
                (&format!("{}x", count1), &format!("{}x", count2)),
                relative_fractions(count1 as f64, count2 as f64),
                config,
            ))
            .child(verdict_banner(1290, verdict, &headline, config))
            .child(caption(1560, 34, theme.text_light, &last))
    }
}
