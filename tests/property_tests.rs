use proptest::prelude::*;
use story_cards::svg::{Element, escape, wrap_text};
use story_cards::{PrivacyMode, Rule, StoryData, TemplateKind, Verdict, render, theme};
use unicode_width::UnicodeWidthStr;

proptest! {
    #[test]
    fn verdict_is_antisymmetric(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
        let forward = Verdict::compare(a, b, Rule::Higher);
        let backward = Verdict::compare(b, a, Rule::Higher);
        let expected = match forward {
            Verdict::First => Verdict::Second,
            Verdict::Second => Verdict::First,
            Verdict::Tie => Verdict::Tie,
        };
        prop_assert_eq!(backward, expected);
    }

    #[test]
    fn lower_rule_mirrors_higher(a in 0u64..500, b in 0u64..500) {
        prop_assert_eq!(
            Verdict::compare(a, b, Rule::Lower),
            Verdict::compare(b, a, Rule::Higher)
        );
    }

    #[test]
    fn only_strictly_greater_wins(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let data = StoryData {
            person1_percentage: Some(a),
            person2_percentage: Some(b),
            ..Default::default()
        };
        let text = render(TemplateKind::TalkBalance, &theme::DARK, &data, &PrivacyMode::default())
            .text_content();
        prop_assert_eq!(text.contains("Elfan talks more"), a > b);
        prop_assert_eq!(text.contains("Savira talks more"), b > a);
        prop_assert_eq!(text.contains("Perfectly balanced"), a == b);
    }

    #[test]
    fn escaped_text_has_no_markup(s in ".*") {
        let escaped = escape(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
    }

    #[test]
    fn arbitrary_names_never_leak_when_hidden(name in "[A-Za-z]{6,12}") {
        let data = StoryData {
            person1_name: Some(format!("Zq{name}")),
            ..Default::default()
        };
        let privacy = PrivacyMode { hide_names: true, ..Default::default() };
        for kind in TemplateKind::ALL {
            let card: Element = render(kind, &theme::OCEAN, &data, &privacy);
            let needle = format!("Zq{}", name);
            prop_assert!(!card.text_content().contains(&needle));
        }
    }

    #[test]
    fn wrapped_lines_respect_width(words in prop::collection::vec("[a-z]{1,8}", 1..40)) {
        let text = words.join(" ");
        for line in wrap_text(&text, 20) {
            prop_assert!(line.width() <= 20);
        }
    }
}
