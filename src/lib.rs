//! Shareable 1080×1920 story cards summarising a chat between two people.
//!
//! Pick a [`TemplateKind`], a [`Theme`] and feed it precomputed [`StoryData`];
//! [`render`] returns an SVG element tree ready to serialise.

pub mod data;
pub mod icons;
pub mod privacy;
pub mod svg;
pub mod templates;
pub mod theme;

pub use data::StoryData;
pub use privacy::{PrivacyMode, REDACTED};
pub use svg::Element;
pub use templates::{RenderConfig, Rule, TemplateKind, Verdict, render, render_svg};
pub use theme::Theme;
