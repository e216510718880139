use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use story_cards::{PrivacyMode, StoryData, TemplateKind, Theme, theme};

#[derive(Parser)]
#[command(name = "story-cards")]
#[command(about = "Render chat statistic story cards as 1080x1920 SVGs")]
struct Args {
    /// Template tag, or "all" for every template
    #[arg(short, long, env = "STORY_TEMPLATE", default_value = "stats")]
    template: String,

    /// Theme name, or "all" for every theme
    #[arg(long, env = "STORY_THEME", default_value = "dark")]
    theme: String,

    /// StoryData JSON file ("-" reads stdin). Fallback values are used when omitted.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "stories")]
    output: PathBuf,

    /// Replace participant names with ***
    #[arg(long)]
    hide_names: bool,

    /// Blur sensitive words and examples
    #[arg(long)]
    blur_sensitive: bool,

    /// Replace dates with ***
    #[arg(long)]
    hide_dates: bool,

    /// Replace quoted messages with ***
    #[arg(long)]
    safe_quote: bool,

    /// Run the SVG optimiser over every card
    #[cfg(feature = "optimize")]
    #[arg(long)]
    optimize: bool,

    /// List template tags and theme names, then exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn privacy(&self) -> PrivacyMode {
        PrivacyMode {
            hide_names: self.hide_names,
            blur_sensitive: self.blur_sensitive,
            hide_dates: self.hide_dates,
            safe_quote: self.safe_quote,
        }
    }

    fn templates(&self) -> Vec<TemplateKind> {
        if self.template.eq_ignore_ascii_case("all") {
            TemplateKind::ALL.to_vec()
        } else {
            vec![TemplateKind::from_tag(&self.template)]
        }
    }

    fn themes(&self) -> Vec<Theme> {
        if self.theme.eq_ignore_ascii_case("all") {
            theme::ALL.to_vec()
        } else {
            vec![Theme::from_tag(&self.theme)]
        }
    }

    fn finish(&self, svg: String) -> String {
        #[cfg(feature = "optimize")]
        if self.optimize {
            return story_cards::svg::optimize(&svg);
        }
        svg
    }
}

fn load_data(path: Option<&Path>) -> Result<StoryData> {
    let Some(path) = path else {
        debug!("No data file given, using fallback values");
        return Ok(StoryData::default());
    };

    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read story data from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read story data from {}", path.display()))?
    };

    StoryData::from_json(&json).context("Story data is not valid JSON")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        println!("Templates:");
        for kind in TemplateKind::ALL {
            println!("  {:<14} {}", kind.tag(), kind.title());
        }
        println!("Themes:");
        for theme in theme::ALL {
            println!("  {}", theme.name);
        }
        return Ok(());
    }

    let data = load_data(args.data.as_deref())?;
    let privacy = args.privacy();
    if privacy.is_active() {
        info!("Privacy mode: {:?}", privacy);
    }

    fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output.display()
        )
    })?;

    let templates = args.templates();
    for theme in args.themes() {
        for kind in &templates {
            let svg = args.finish(story_cards::render(*kind, &theme, &data, &privacy).to_svg());
            let path = args.output.join(kind.filename(theme.name));
            fs::write(&path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        println!("Generated {} theme story cards", theme.name);
    }

    println!("Done! SVGs saved to {}/", args.output.display());

    Ok(())
}
