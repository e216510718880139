use super::parts::{
    Rule, Verdict, caption, comparison_pair, percent_fractions, quote_block, verdict_banner,
};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_percent};

/// Who opens conversations, plus the very first message of the chat.
pub struct Initiator;

impl Card for Initiator {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Initiator
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let privacy = config.privacy;
        let (name1, name2) = config.names(data);
        let starts1 = data.person1_initiates();
        let starts2 = data.person2_initiates();

        let verdict = Verdict::compare(starts1, starts2, Rule::Higher);
        let headline = verdict.headline(
            name1,
            name2,
            |name| format!("{} texts first", name),
            "You take turns",
        );

        let (first_message, bottom) =
            quote_block(1200, privacy.quote(data.first_message()), 44, 2, config);
        let sent_on = format!("Sent on {}", privacy.date(data.first_message_date()));

        Element::new("g")
            .attr("class", "initiator")
            .child(comparison_pair(
                660,
                (name1, name2),
                (&format_percent(starts1), &format_percent(starts2)),
                percent_fractions(starts1, starts2),
                config,
            ))
            .child(verdict_banner(960, verdict, &headline, config))
            .child(caption(1160, 34, theme.text_light, "The very first message"))
            .child(first_message)
            .child(caption(bottom + 60, 32, theme.text_light, &sent_on))
    }
}
