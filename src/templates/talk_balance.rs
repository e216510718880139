use super::parts::{COLUMN_WIDTH, LEFT, RIGHT, Rule, Verdict, text, tile_pair, verdict_banner};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_number, format_percent};
use log::debug;

const SPLIT_Y: u32 = 800;
const SPLIT_HEIGHT: u32 = 120;

/// Who talks more, drawn as one bar split between the two people.
pub struct TalkBalance;

/// First person's share of the split bar. Falls back to an even split when
/// the inputs cannot be divided.
fn split(first: f64, second: f64) -> f64 {
    let total = first + second;
    if !total.is_finite() || total <= 0.0 || first < 0.0 || second < 0.0 {
        return 0.5;
    }
    first / total
}

impl Card for TalkBalance {
    fn kind(&self) -> TemplateKind {
        TemplateKind::TalkBalance
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let (name1, name2) = config.names(data);
        let share1 = data.person1_percentage();
        let share2 = data.person2_percentage();

        let verdict = Verdict::compare(share1, share2, Rule::Higher);
        debug!("Talk balance {} vs {}: {:?}", share1, share2, verdict);
        let headline = verdict.headline(
            name1,
            name2,
            |name| format!("{} talks more", name),
            "Perfectly balanced",
        );

        let first_width = COLUMN_WIDTH as f64 * split(share1, share2);
        let words1 = format!("{} words", name1);
        let words2 = format!("{} words", name2);

        Element::new("g")
            .attr("class", "talk-balance")
            .child(
                text(LEFT, 700, 96, theme.primary)
                    .attr("font-weight", 800)
                    .text(format_percent(share1)),
            )
            .child(
                text(RIGHT, 700, 96, theme.accent)
                    .attr("text-anchor", "end")
                    .attr("font-weight", 800)
                    .text(format_percent(share2)),
            )
            .child(text(LEFT, 760, 38, theme.text).text(name1))
            .child(
                text(RIGHT, 760, 38, theme.text)
                    .attr("text-anchor", "end")
                    .text(name2),
            )
            .child(
                Element::new("rect")
                    .attr("x", LEFT)
                    .attr("y", SPLIT_Y)
                    .attr("width", COLUMN_WIDTH)
                    .attr("height", SPLIT_HEIGHT)
                    .attr("rx", SPLIT_HEIGHT / 2)
                    .attr("fill", theme.accent),
            )
            .child(
                Element::new("rect")
                    .attr("x", LEFT)
                    .attr("y", SPLIT_Y)
                    .attr("width", format!("{:.1}", first_width))
                    .attr("height", SPLIT_HEIGHT)
                    .attr("rx", SPLIT_HEIGHT / 2)
                    .attr("fill", theme.primary),
            )
            .child(verdict_banner(1020, verdict, &headline, config))
            .child(tile_pair(
                1260,
                240,
                (&format_number(data.person1_words()), &words1),
                (&format_number(data.person2_words()), &words2),
                config,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_proportional() {
        assert_eq!(split(75.0, 25.0), 0.75);
        assert_eq!(split(0.0, 0.0), 0.5);
        assert_eq!(split(f64::NAN, 10.0), 0.5);
    }

    #[test]
    fn tie_shows_balanced_copy() {
        let data = StoryData {
            person1_percentage: Some(50.0),
            person2_percentage: Some(50.0),
            ..Default::default()
        };
        let text = TalkBalance
            .body(&data, &RenderConfig::default())
            .text_content();
        assert!(text.contains("Perfectly balanced"));
        assert!(!text.contains("talks more"));
    }

    #[test]
    fn default_winner_is_first_person() {
        let text = TalkBalance
            .body(&StoryData::default(), &RenderConfig::default())
            .text_content();
        assert!(text.contains("Elfan talks more"));
        assert!(text.contains("52%"));
        assert!(text.contains("48%"));
    }
}
