use super::parts::{COLUMN_WIDTH, LEFT, text};
use super::{Card, RenderConfig, TemplateKind};
use crate::data::StoryData;
use crate::icons;
use crate::svg::Element;

const MAX_FLAGS: usize = 4;
const FIRST_ROW: u32 = 640;
const ROW_STEP: u32 = 230;
const CARD_HEIGHT: u32 = 200;

/// Red flags with an example message each. Examples are both quotes and
/// sensitive content.
pub struct RedFlags;

impl Card for RedFlags {
    fn kind(&self) -> TemplateKind {
        TemplateKind::RedFlags
    }

    fn body(&self, data: &StoryData, config: &RenderConfig) -> Element {
        let theme = config.theme;
        let mut body = Element::new("g").attr("class", "red-flags");

        for (i, flag) in data.red_flags().iter().take(MAX_FLAGS).enumerate() {
            let y = FIRST_ROW + ROW_STEP * i as u32;
            let example = format!("“{}”", config.privacy.quote(&flag.example));

            body.push(
                Element::new("g")
                    .child(
                        Element::new("rect")
                            .attr("x", LEFT)
                            .attr("y", y)
                            .attr("width", COLUMN_WIDTH)
                            .attr("height", CARD_HEIGHT)
                            .attr("rx", 32)
                            .attr("fill", theme.card)
                            .attr("stroke", theme.accent)
                            .attr("stroke-width", 3),
                    )
                    .child(
                        text(LEFT + 50, y + 80, 44, theme.text)
                            .attr("font-weight", 700)
                            .text(format!("{} {}", icons::RED_FLAGS, flag.title)),
                    )
                    .child(config.sensitive(
                        text(LEFT + 50, y + 150, 36, theme.text_light)
                            .attr("font-style", "italic")
                            .text(example),
                    )),
            );
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::privacy::PrivacyMode;

    #[test]
    fn blur_keeps_text_but_adds_filter() {
        let config = RenderConfig {
            privacy: PrivacyMode {
                blur_sensitive: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let body = RedFlags.body(&StoryData::default(), &config);
        assert!(body.text_content().contains("sorry baru bangun"));

        let mut blurred = 0;
        body.walk(&mut |el| {
            if el.get_attr("filter") == Some("url(#sensitive-blur)") {
                blurred += 1;
            }
        });
        assert_eq!(blurred, 3);
    }
}
