//! Building blocks shared by the card bodies.

use super::{CENTER_X, RenderConfig};
use crate::icons;
use crate::svg::{Element, bar_fraction, wrap_text};
use std::f64::consts::PI;
use unicode_width::UnicodeWidthStr;

// Content column
pub const LEFT: u32 = 120;
pub const RIGHT: u32 = 960;
pub const COLUMN_WIDTH: u32 = RIGHT - LEFT;

const BORDER_RADIUS: u32 = 32;
const BAR_HEIGHT: u32 = 28;
// Rough advance of one display column at 1px font size
const CHAR_WIDTH: f64 = 0.55;

/// Which side of a comparison wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Higher,
    Lower,
}

/// Outcome of a two-sided comparison. Only a strict win crowns a side;
/// equal (or incomparable) values are a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    First,
    Second,
    Tie,
}

impl Verdict {
    pub fn compare<T: PartialOrd>(first: T, second: T, rule: Rule) -> Self {
        let (first_wins, second_wins) = match rule {
            Rule::Higher => (first > second, second > first),
            Rule::Lower => (first < second, second < first),
        };
        if first_wins {
            Verdict::First
        } else if second_wins {
            Verdict::Second
        } else {
            Verdict::Tie
        }
    }

    pub fn pick<'a>(self, first: &'a str, second: &'a str) -> Option<&'a str> {
        match self {
            Verdict::First => Some(first),
            Verdict::Second => Some(second),
            Verdict::Tie => None,
        }
    }

    /// Winner copy with the name filled in, or the tie copy.
    pub fn headline(
        self,
        first: &str,
        second: &str,
        winner: impl FnOnce(&str) -> String,
        tie: &str,
    ) -> String {
        match self.pick(first, second) {
            Some(name) => winner(name),
            None => tie.to_string(),
        }
    }
}

/// Bare text element; anchor and weight are left to the caller.
pub fn text(x: u32, y: u32, size: u32, fill: &str) -> Element {
    Element::new("text")
        .attr("x", x)
        .attr("y", y)
        .attr("font-size", size)
        .attr("fill", fill)
}

/// Centred line of text.
pub fn caption(y: u32, size: u32, fill: &str, content: &str) -> Element {
    text(CENTER_X, y, size, fill)
        .attr("text-anchor", "middle")
        .text(content)
}

fn card_rect(x: u32, y: u32, width: u32, height: u32, config: &RenderConfig) -> Element {
    Element::new("rect")
        .attr("x", x)
        .attr("y", y)
        .attr("width", width)
        .attr("height", height)
        .attr("rx", BORDER_RADIUS)
        .attr("fill", config.theme.card)
        .attr("stroke", config.theme.primary)
        .attr("stroke-opacity", 0.25)
        .attr("stroke-width", 2)
}

/// Rounded tile with a big value over a small label.
pub fn stat_tile(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    value: &str,
    label: &str,
    config: &RenderConfig,
) -> Element {
    let theme = config.theme;
    let mid = x + width / 2;
    let value_y = y + height / 2 + 10;

    Element::new("g")
        .attr("class", "stat")
        .child(card_rect(x, y, width, height, config))
        .child(
            text(mid, value_y, 68, theme.primary)
                .attr("text-anchor", "middle")
                .attr("font-weight", 800)
                .text(value),
        )
        .child(
            text(mid, value_y + 56, 28, theme.text_light)
                .attr("text-anchor", "middle")
                .text(label),
        )
}

/// Two tiles side by side across the content column.
pub fn tile_pair(
    y: u32,
    height: u32,
    left: (&str, &str),
    right: (&str, &str),
    config: &RenderConfig,
) -> Element {
    let gap = 40;
    let width = (COLUMN_WIDTH - gap) / 2;
    Element::new("g")
        .child(stat_tile(LEFT, y, width, height, left.0, left.1, config))
        .child(stat_tile(
            LEFT + width + gap,
            y,
            width,
            height,
            right.0,
            right.1,
            config,
        ))
}

/// Name and value on one line with a proportional bar underneath.
pub fn comparison_row(
    y: u32,
    name: &str,
    value: &str,
    fraction: f64,
    color: &str,
    config: &RenderConfig,
) -> Element {
    let theme = config.theme;
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let fill_width = COLUMN_WIDTH as f64 * fraction;
    let bar_y = y + 30;

    Element::new("g")
        .attr("class", "comparison")
        .child(
            text(LEFT, y, 40, theme.text)
                .attr("font-weight", 700)
                .text(name),
        )
        .child(
            text(RIGHT, y, 40, color)
                .attr("text-anchor", "end")
                .attr("font-weight", 800)
                .text(value),
        )
        .child(
            Element::new("rect")
                .attr("x", LEFT)
                .attr("y", bar_y)
                .attr("width", COLUMN_WIDTH)
                .attr("height", BAR_HEIGHT)
                .attr("rx", BAR_HEIGHT / 2)
                .attr("fill", theme.card),
        )
        .child(
            Element::new("rect")
                .attr("x", LEFT)
                .attr("y", bar_y)
                .attr("width", format!("{:.1}", fill_width))
                .attr("height", BAR_HEIGHT)
                .attr("rx", BAR_HEIGHT / 2)
                .attr("fill", color),
        )
}

/// The pair of comparison rows every two-sided card draws, coloured primary
/// for the first person and accent for the second.
pub fn comparison_pair(
    y: u32,
    names: (&str, &str),
    values: (&str, &str),
    fractions: (f64, f64),
    config: &RenderConfig,
) -> Element {
    let theme = config.theme;
    Element::new("g")
        .child(comparison_row(
            y,
            names.0,
            values.0,
            fractions.0,
            theme.primary,
            config,
        ))
        .child(comparison_row(
            y + 140,
            names.1,
            values.1,
            fractions.1,
            theme.accent,
            config,
        ))
}

/// Each value as a share of the larger one. Zero or invalid input gives empty bars.
pub fn relative_fractions(first: f64, second: f64) -> (f64, f64) {
    let max = first.max(second);
    if !max.is_finite() || max <= 0.0 {
        return (0.0, 0.0);
    }
    let share = |value: f64| {
        if value.is_finite() {
            (value / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    };
    (share(first), share(second))
}

/// Percentages straight into bar fractions.
pub fn percent_fractions(first: f64, second: f64) -> (f64, f64) {
    (bar_fraction(first), bar_fraction(second))
}

/// Highlighted pill with an icon and one line of text.
pub fn banner(y: u32, icon: &str, headline: &str, config: &RenderConfig) -> Element {
    let theme = config.theme;
    let height = 150;

    Element::new("g")
        .attr("class", "banner")
        .child(
            Element::new("rect")
                .attr("x", LEFT)
                .attr("y", y)
                .attr("width", COLUMN_WIDTH)
                .attr("height", height)
                .attr("rx", height / 2)
                .attr("fill", theme.primary)
                .attr("opacity", 0.9),
        )
        .child(
            text(CENTER_X, y + 95, 44, theme.text)
                .attr("text-anchor", "middle")
                .attr("font-weight", 800)
                .text(format!("{} {}", icon, headline)),
        )
}

/// Banner announcing a comparison: a crown for a winner, a handshake for a tie.
pub fn verdict_banner(y: u32, verdict: Verdict, headline: &str, config: &RenderConfig) -> Element {
    let icon = match verdict {
        Verdict::Tie => icons::HANDSHAKE,
        Verdict::First | Verdict::Second => icons::CROWN,
    };
    banner(y, icon, headline, config)
}

/// One row of a leaderboard: rank badge, label and value.
pub fn ranked_row(y: u32, rank: usize, label: &str, value: &str, config: &RenderConfig) -> Element {
    let theme = config.theme;
    let height = 120;
    let badge_x = LEFT + 70;
    let mid_y = y + height / 2;
    let badge_fill = if rank == 1 { theme.accent } else { theme.primary };

    Element::new("g")
        .attr("class", "rank")
        .child(card_rect(LEFT, y, COLUMN_WIDTH, height, config))
        .child(
            Element::new("circle")
                .attr("cx", badge_x)
                .attr("cy", mid_y)
                .attr("r", 36)
                .attr("fill", badge_fill),
        )
        .child(
            text(badge_x, mid_y + 12, 34, theme.text)
                .attr("text-anchor", "middle")
                .attr("font-weight", 800)
                .text(rank.to_string()),
        )
        .child(
            text(LEFT + 140, mid_y + 16, 46, theme.text)
                .attr("font-weight", 700)
                .text(label),
        )
        .child(
            text(RIGHT - 40, mid_y + 14, 36, theme.text_light)
                .attr("text-anchor", "end")
                .text(value),
        )
}

/// Labelled percentage bar, used for topic shares.
pub fn share_row(y: u32, label: &str, value: &str, percent: f64, config: &RenderConfig) -> Element {
    comparison_row(
        y,
        label,
        value,
        bar_fraction(percent),
        config.theme.accent,
        config,
    )
}

/// A wrapped quote in a card. Returns the element and the y just below it.
pub fn quote_block(
    y: u32,
    quote: &str,
    size: u32,
    max_lines: usize,
    config: &RenderConfig,
) -> (Element, u32) {
    let theme = config.theme;
    let max_columns = ((COLUMN_WIDTH - 120) as f64 / (size as f64 * CHAR_WIDTH)) as usize;
    let mut lines = wrap_text(quote, max_columns.max(1));
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }

    let line_height = size + size / 3;
    let padding = 70;
    let text_top = y + padding + size;
    let height = padding * 2 + line_height * lines.len().max(1) as u32;

    let body = Element::new("text")
        .attr("class", "quote")
        .attr("font-size", size)
        .attr("fill", theme.text)
        .attr("font-style", "italic")
        .attr("text-anchor", "middle")
        .children(lines.iter().enumerate().map(|(i, line)| {
            Element::new("tspan")
                .attr("x", CENTER_X)
                .attr("y", text_top + line_height * i as u32)
                .text(line.as_str())
        }));

    let block = Element::new("g")
        .child(card_rect(LEFT, y, COLUMN_WIDTH, height, config))
        .child(
            text(LEFT + 50, y + 90, 120, theme.accent)
                .attr("opacity", 0.6)
                .text(icons::QUOTE_MARK),
        )
        .child(body);

    (block, y + height)
}

const CHIP_ROWS: usize = 2;

/// Centred pills, wrapping onto a second row. Items that fit on neither row
/// are dropped.
pub fn chips(y: u32, items: &[String], sensitive: bool, config: &RenderConfig) -> Element {
    let theme = config.theme;
    let size = 36;
    let gap = 24;
    let height = 80;

    let mut rows: Vec<(u32, Vec<(&str, u32)>)> = Vec::new();
    for item in items {
        let width = (item.width() as f64 * size as f64 * CHAR_WIDTH) as u32 + 64;
        let fits = rows
            .last()
            .is_some_and(|(total, _)| total + gap + width <= COLUMN_WIDTH);
        if fits {
            if let Some((total, row)) = rows.last_mut() {
                *total += gap + width;
                row.push((item.as_str(), width));
            }
        } else if rows.len() < CHIP_ROWS {
            rows.push((width, vec![(item.as_str(), width)]));
        } else {
            break;
        }
    }

    let mut group = Element::new("g").attr("class", "chips");
    for (row_index, (total, row)) in rows.iter().enumerate() {
        let top = y + (height + gap) * row_index as u32;
        let mut x = CENTER_X.saturating_sub(total / 2);
        for &(item, width) in row {
            let label = text(x + width / 2, top + 52, size, theme.text)
                .attr("text-anchor", "middle")
                .attr("font-weight", 600)
                .text(item);
            let label = if sensitive {
                config.sensitive(label)
            } else {
                label
            };
            group.push(
                Element::new("g")
                    .child(
                        Element::new("rect")
                            .attr("x", x)
                            .attr("y", top)
                            .attr("width", width)
                            .attr("height", height)
                            .attr("rx", height / 2)
                            .attr("fill", theme.card)
                            .attr("stroke", theme.accent)
                            .attr("stroke-width", 3),
                    )
                    .child(label),
            );
            x += width + gap;
        }
    }
    group
}

/// Circular progress ring with the score in the middle.
pub fn score_ring(cy: u32, radius: u32, score: f64, label: &str, config: &RenderConfig) -> Element {
    let theme = config.theme;
    let circumference = 2.0 * PI * radius as f64;
    let filled = circumference * bar_fraction(score);
    let stroke = 48;

    Element::new("g")
        .attr("class", "ring")
        .child(
            Element::new("circle")
                .attr("cx", CENTER_X)
                .attr("cy", cy)
                .attr("r", radius)
                .attr("fill", "none")
                .attr("stroke", theme.card)
                .attr("stroke-width", stroke),
        )
        .child(
            Element::new("circle")
                .attr("cx", CENTER_X)
                .attr("cy", cy)
                .attr("r", radius)
                .attr("fill", "none")
                .attr("stroke", theme.accent)
                .attr("stroke-width", stroke)
                .attr("stroke-linecap", "round")
                .attr(
                    "stroke-dasharray",
                    format!("{:.1} {:.1}", filled, circumference),
                )
                .attr("transform", format!("rotate(-90 {} {})", CENTER_X, cy)),
        )
        .child(
            text(CENTER_X, cy + 40, 140, theme.text)
                .attr("text-anchor", "middle")
                .attr("font-weight", 800)
                .text(label),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_rule_is_strict() {
        assert_eq!(Verdict::compare(52.0, 48.0, Rule::Higher), Verdict::First);
        assert_eq!(Verdict::compare(48.0, 52.0, Rule::Higher), Verdict::Second);
        assert_eq!(Verdict::compare(50.0, 50.0, Rule::Higher), Verdict::Tie);
    }

    #[test]
    fn lower_rule_prefers_smaller() {
        assert_eq!(Verdict::compare(4.2, 12.5, Rule::Lower), Verdict::First);
        assert_eq!(Verdict::compare(12.5, 4.2, Rule::Lower), Verdict::Second);
        assert_eq!(Verdict::compare(3, 3, Rule::Lower), Verdict::Tie);
    }

    #[test]
    fn nan_is_a_tie() {
        assert_eq!(Verdict::compare(f64::NAN, 1.0, Rule::Higher), Verdict::Tie);
        assert_eq!(Verdict::compare(1.0, f64::NAN, Rule::Lower), Verdict::Tie);
    }

    #[test]
    fn headline_uses_tie_copy() {
        let line = Verdict::Tie.headline("A", "B", |n| format!("{n} wins"), "Draw");
        assert_eq!(line, "Draw");
        let line = Verdict::Second.headline("A", "B", |n| format!("{n} wins"), "Draw");
        assert_eq!(line, "B wins");
    }

    #[test]
    fn relative_fractions_scale_to_max() {
        assert_eq!(relative_fractions(5.0, 10.0), (0.5, 1.0));
        assert_eq!(relative_fractions(0.0, 0.0), (0.0, 0.0));
        assert_eq!(relative_fractions(-1.0, -2.0), (0.0, 0.0));
    }

    #[test]
    fn quote_block_truncates_lines() {
        let config = RenderConfig::default();
        let long = "word ".repeat(200);
        let (block, bottom) = quote_block(600, &long, 56, 3, &config);
        let text = block.text_content();
        assert_eq!(text.lines().filter(|l| l.starts_with("word")).count(), 3);
        assert!(text.contains('…'));
        assert!(bottom > 600);
    }

    #[test]
    fn chips_wrap_onto_a_second_row() {
        let config = RenderConfig::default();
        let items: Vec<String> = ["Kulineran bareng", "Nonton film horor", "Main game online"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let group = chips(1000, &items, false, &config);
        assert_eq!(group.text_content().lines().count(), items.len());

        let mut tops = Vec::new();
        group.walk(&mut |el| {
            if el.name() == "rect" {
                tops.push(el.get_attr("y").unwrap_or_default().to_string());
            }
        });
        tops.dedup();
        assert_eq!(tops, ["1000", "1104"]);
    }

    #[test]
    fn chips_beyond_two_rows_are_dropped() {
        let config = RenderConfig::default();
        let items: Vec<String> = (0..20).map(|i| format!("interest-{i}")).collect();
        let shown = chips(1000, &items, false, &config)
            .text_content()
            .lines()
            .count();
        assert!(shown > 1 && shown < items.len());
    }

    #[test]
    fn chips_blur_only_when_sensitive_and_enabled() {
        let mut config = RenderConfig::default();
        config.privacy.blur_sensitive = true;
        let items = vec!["anjir".to_string()];

        let blurred = chips(1000, &items, true, &config).to_svg();
        assert!(blurred.contains("url(#sensitive-blur)"));

        let plain = chips(1000, &items, false, &config).to_svg();
        assert!(!plain.contains("url(#sensitive-blur)"));
    }
}
