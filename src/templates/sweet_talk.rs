use super::parts::{
    Rule, Verdict, caption, comparison_pair, quote_block, relative_fractions, tile_pair,
    verdict_banner,
};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_number};

pub struct SweetTalk;

impl Card for SweetTalk {
    fn kind(&self) -> TemplateKind {
        TemplateKind::SweetTalk
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let (name1, name2) = config.names(data);
        let sweet1 = data.person1_sweet_count();
        let sweet2 = data.person2_sweet_count();

        let verdict = Verdict::compare(sweet1, sweet2, Rule::Higher);
        let headline = verdict.headline(
            name1,
            name2,
            |name| format!("{} is the sweeter one", name),
            "Equally sweet",
        );
        let (sweetest, _) = quote_block(
            1420,
            config.privacy.quote(data.sweetest_message()),
            40,
            2,
            config,
        );

        Element::new("g")
            .attr("class", "sweet-talk")
            .child(tile_pair(
                620,
                220,
                (&format_number(data.sweet_words_count()), "Sweet Words"),
                (data.top_sweet_word(), "Favourite Word"),
                config,
            ))
            .child(comparison_pair(
                920,
                (name1, name2),
                (&format_number(sweet1), &format_number(sweet2)),
                relative_fractions(sweet1 as f64, sweet2 as f64),
                config,
            ))
            .child(verdict_banner(1180, verdict, &headline, config))
            .child(caption(1390, 32, theme.text_light, "Sweetest message"))
            .child(sweetest)
    }
}
