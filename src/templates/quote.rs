use super::parts::{caption, quote_block};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::Element;

const MAX_LINES: usize = 6;

pub struct Quote;

impl Card for Quote {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Quote
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let privacy = config.privacy;

        let (block, bottom) =
            quote_block(700, privacy.quote(data.best_quote()), 60, MAX_LINES, config);
        let author = format!("— {}", privacy.name(data.quote_author()));

        Element::new("g")
            .attr("class", "quote-of-the-year")
            .child(block)
            .child(
                caption(bottom + 90, 44, theme.accent, &author).attr("font-weight", 700),
            )
            .child(caption(
                bottom + 150,
                32,
                theme.text_light,
                privacy.date(data.quote_date()),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::privacy::{PrivacyMode, REDACTED};

    #[test]
    fn author_and_quote_are_shown() {
        let text = Quote
            .body(&StoryData::default(), &RenderConfig::default())
            .text_content();
        assert!(text.contains("— Elfan"));
        assert!(text.contains("senyum terus"));
        assert!(text.contains("14 Feb 2024"));
    }

    #[test]
    fn safe_quote_hides_only_the_quote() {
        let config = RenderConfig {
            privacy: PrivacyMode {
                safe_quote: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let text = Quote.body(&StoryData::default(), &config).text_content();
        assert!(!text.contains("senyum"));
        assert!(text.contains(REDACTED));
        assert!(text.contains("— Elfan"));
    }
}
