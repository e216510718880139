use super::parts::{
    Rule, Verdict, caption, chips, comparison_pair, percent_fractions, verdict_banner,
};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_percent};
use log::debug;

const MAX_WORDS: usize = 3;

pub struct Toxicity;

impl Card for Toxicity {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Toxicity
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let (name1, name2) = config.names(data);
        let score1 = data.person1_toxicity();
        let score2 = data.person2_toxicity();

        let verdict = Verdict::compare(score1, score2, Rule::Higher);
        debug!("Toxicity verdict: {:?}", verdict);
        let headline = verdict.headline(
            name1,
            name2,
            |name| format!("{} is the spicier one", name),
            "Equally spicy",
        );

        let mut words = data.toxic_words();
        words.truncate(MAX_WORDS);

        Element::new("g")
            .attr("class", "toxicity")
            .child(comparison_pair(
                680,
                (name1, name2),
                (&format_percent(score1), &format_percent(score2)),
                percent_fractions(score1, score2),
                config,
            ))
            .child(verdict_banner(1000, verdict, &headline, config))
            .child(caption(1240, 34, theme.text_light, "Most used spicy words"))
            .child(chips(1290, &words, true, config))
            .child(caption(1500, 40, theme.text, data.toxicity_verdict()))
    }
}
