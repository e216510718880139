use super::parts::{Rule, Verdict, comparison_pair, relative_fractions, tile_pair, verdict_banner};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_minutes};

/// Average reply time per person. The smaller time wins.
pub struct ReplySpeed;

impl Card for ReplySpeed {
    fn kind(&self) -> TemplateKind {
        TemplateKind::ReplySpeed
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let (name1, name2) = config.names(data);
        let minutes1 = data.person1_reply_minutes();
        let minutes2 = data.person2_reply_minutes();

        let verdict = Verdict::compare(minutes1, minutes2, Rule::Lower);
        let headline = verdict.headline(
            name1,
            name2,
            |name| format!("{} replies faster", name),
            "Same speed, same energy",
        );

        Element::new("g")
            .attr("class", "reply-speed")
            .child(comparison_pair(
                680,
                (name1, name2),
                (&format_minutes(minutes1), &format_minutes(minutes2)),
                relative_fractions(minutes1, minutes2),
                config,
            ))
            .child(verdict_banner(1000, verdict, &headline, config))
            .child(tile_pair(
                1240,
                240,
                (data.fastest_reply(), "Fastest Reply"),
                (data.slowest_reply(), "Slowest Reply"),
                config,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faster_person_wins() {
        let data = StoryData {
            person1_reply_minutes: Some(30.0),
            person2_reply_minutes: Some(2.0),
            ..Default::default()
        };
        let text = ReplySpeed
            .body(&data, &RenderConfig::default())
            .text_content();
        assert!(text.contains("Savira replies faster"));
        assert!(text.contains("30 min"));
        assert!(text.contains("2 min"));
    }

    #[test]
    fn equal_times_tie() {
        let data = StoryData {
            person1_reply_minutes: Some(5.0),
            person2_reply_minutes: Some(5.0),
            ..Default::default()
        };
        let text = ReplySpeed
            .body(&data, &RenderConfig::default())
            .text_content();
        assert!(text.contains("Same speed, same energy"));
        assert!(!text.contains("replies faster"));
    }
}
