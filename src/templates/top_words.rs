use super::parts::ranked_row;
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::svg::{Element, format_number};

const MAX_WORDS: usize = 5;
const FIRST_ROW: u32 = 660;
const ROW_STEP: u32 = 150;

pub struct TopWords;

impl Card for TopWords {
    fn kind(&self) -> TemplateKind {
        TemplateKind::TopWords
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        Element::new("g").attr("class", "top-words").children(
            data.top_words()
                .iter()
                .take(MAX_WORDS)
                .enumerate()
                .map(|(i, entry)| {
                    ranked_row(
                        FIRST_ROW + ROW_STEP * i as u32,
                        i + 1,
                        &entry.word,
                        &format_number(entry.count),
                        config,
                    )
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WordCount;

    #[test]
    fn shows_at_most_five_words() {
        let data = StoryData {
            top_words: Some(
                (0..8)
                    .map(|i| WordCount {
                        word: format!("word{i}"),
                        count: 100 - i,
                    })
                    .collect(),
            ),
            ..Default::default()
        };
        let text = TopWords
            .body(&data, &RenderConfig::default())
            .text_content();
        assert!(text.contains("word4"));
        assert!(!text.contains("word5"));
    }
}
