use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comments::{Comment, LoadedComments};
use pipeline::filters::TopNByCount;
use pipeline::presets::{
    create_basic_social_pipeline, create_comprehensive_social_pipeline,
    create_engagement_analysis_pipeline, create_geographic_pipeline, create_multilingual_pipeline,
    create_sentiment_analysis_pipeline, create_spam_detection_pipeline,
    create_text_processing_pipeline,
};
use pipeline::{Pipeline, PipelineConfig, SocialCommentPipeline, Take};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Pipes - lazy pipes-and-filters processing for text and social comments
#[derive(Parser)]
#[command(name = "pipes")]
#[command(about = "Run composable filter pipelines over text and social comments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a social comment pipeline over a JSON file
    Comments {
        /// JSON file holding an array of comment objects
        #[arg(short, long)]
        input: PathBuf,

        /// Ready-made pipeline to run
        #[arg(long, value_enum, default_value = "comprehensive", conflicts_with = "config")]
        preset: Preset,

        /// Language for the multilingual preset (repeatable)
        #[arg(long = "language", conflicts_with = "config")]
        languages: Vec<String>,

        /// Country for the geographic preset (repeatable)
        #[arg(long = "country", conflicts_with = "config")]
        countries: Vec<String>,

        /// JSON pipeline description to run instead of a preset
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop after this many output records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Run the text-processing pipeline over the given items
    Text {
        /// Raw text items, e.g. "  123 " abc 1,500
        items: Vec<String>,
    },

    /// Rank the most frequent countries or users
    Top {
        /// JSON file holding an array of comment objects
        #[arg(short, long)]
        input: PathBuf,

        /// Field to group by
        #[arg(long, value_enum, default_value = "country")]
        by: GroupBy,

        /// Number of entries to show
        #[arg(short, long, default_value = "5")]
        n: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Basic,
    Sentiment,
    Spam,
    Engagement,
    Comprehensive,
    /// Needs at least one --language
    Multilingual,
    /// Needs at least one --country
    Geographic,
}

#[derive(Clone, Copy, ValueEnum)]
enum GroupBy {
    Country,
    User,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Comments {
            input,
            preset,
            languages,
            countries,
            config,
            limit,
        } => {
            let social = match config {
                Some(path) => load_config(&path)?,
                None => build_preset(preset, &languages, &countries)?,
            };
            handle_comments(&input, social, limit)?
        }
        Commands::Text { items } => handle_text(items)?,
        Commands::Top { input, by, n } => handle_top(&input, by, n)?,
    }

    Ok(())
}

/// Handle the 'comments' command
fn handle_comments(input: &Path, social: SocialCommentPipeline, limit: Option<usize>) -> Result<()> {
    let loaded = load_comments(input)?;

    tracing::info!("Running stages: {}", social.stage_names().join(" → "));

    let mut pipeline: Pipeline<Comment> = social.into_pipeline();
    if let Some(limit) = limit {
        pipeline = pipeline.add_filter(Take::new(limit));
    }

    let start = Instant::now();
    let output = pipeline.execute(loaded.comments);
    let elapsed = start.elapsed();

    println!("{}", serde_json::to_string_pretty(&output)?);
    eprintln!(
        "{} {} records out ({} skipped at load) in {:?}",
        "✓".green(),
        output.len(),
        loaded.skipped,
        elapsed
    );
    Ok(())
}

/// Handle the 'text' command
fn handle_text(items: Vec<String>) -> Result<()> {
    let pipeline = create_text_processing_pipeline();
    let output = pipeline.execute(items.into_iter().map(Value::String));

    println!("{}", "Text pipeline output:".bold().blue());
    for value in &output {
        println!("  {}", value);
    }
    println!("{} {} values out", "✓".green(), output.len());
    Ok(())
}

/// Handle the 'top' command
fn handle_top(input: &Path, by: GroupBy, n: usize) -> Result<()> {
    let loaded = load_comments(input)?;

    let key: fn(&Comment) -> Option<String> = match by {
        GroupBy::Country => |comment| comment.country.clone(),
        GroupBy::User => |comment| comment.user.clone(),
    };
    let pipeline = Pipeline::new().add_filter(TopNByCount::new(n, key));
    let ranked = pipeline.execute(loaded.comments);

    let label = match by {
        GroupBy::Country => "countries",
        GroupBy::User => "users",
    };
    println!("{}", format!("Top {} {}:", n, label).bold().blue());
    for (rank, (key, count)) in ranked.iter().enumerate() {
        println!("{}. {} ({} comments)", (rank + 1).to_string().green(), key, count);
    }
    Ok(())
}

fn load_comments(input: &Path) -> Result<LoadedComments> {
    eprintln!("Loading comments from {}...", input.display());
    let start = Instant::now();
    let loaded = comments::load_from_file(input)
        .with_context(|| format!("Failed to load comments from {}", input.display()))?;
    eprintln!(
        "{} Loaded {} comments in {:?}",
        "✓".green(),
        loaded.comments.len(),
        start.elapsed()
    );
    Ok(loaded)
}

fn load_config(path: &Path) -> Result<SocialCommentPipeline> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pipeline config {}", path.display()))?;
    let config = PipelineConfig::from_json(&json)
        .with_context(|| format!("Invalid pipeline config {}", path.display()))?;
    Ok(config.build())
}

fn build_preset(preset: Preset, languages: &[String], countries: &[String]) -> Result<SocialCommentPipeline> {
    let pipeline = match preset {
        Preset::Basic => create_basic_social_pipeline(),
        Preset::Sentiment => create_sentiment_analysis_pipeline(),
        Preset::Spam => create_spam_detection_pipeline(),
        Preset::Engagement => create_engagement_analysis_pipeline(),
        Preset::Comprehensive => create_comprehensive_social_pipeline(),
        Preset::Multilingual => {
            ensure!(!languages.is_empty(), "The multilingual preset needs at least one --language");
            create_multilingual_pipeline(languages)
        }
        Preset::Geographic => {
            ensure!(!countries.is_empty(), "The geographic preset needs at least one --country");
            create_geographic_pipeline(countries.iter().cloned())
        }
    };
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_presets_ignore_stage_arguments() {
        let pipeline = build_preset(Preset::Basic, &[], &[]).unwrap();
        assert_eq!(pipeline.len(), 3);
    }

    #[test]
    fn test_multilingual_preset_uses_languages() {
        let languages = vec!["english".to_string(), "german".to_string()];

        let pipeline = build_preset(Preset::Multilingual, &languages, &[]).unwrap();

        assert_eq!(
            pipeline.stage_names(),
            ["CleanText", "LanguageFilter", "LanguageFilter", "TextMetrics"]
        );
    }

    #[test]
    fn test_geographic_preset_uses_countries() {
        let countries = vec!["Brasil".to_string()];

        let pipeline = build_preset(Preset::Geographic, &[], &countries).unwrap();

        assert_eq!(pipeline.stage_names()[1], "CountryFilter");
    }

    #[test]
    fn test_parameterized_presets_require_values() {
        assert!(build_preset(Preset::Multilingual, &[], &[]).is_err());
        assert!(build_preset(Preset::Geographic, &[], &[]).is_err());
    }

    #[test]
    fn test_cli_accepts_repeated_countries() {
        let cli = Cli::try_parse_from([
            "pipes", "comments", "--input", "data.json", "--preset", "geographic",
            "--country", "Brasil", "--country", "França",
        ])
        .unwrap();

        match cli.command {
            Commands::Comments { countries, .. } => assert_eq!(countries, ["Brasil", "França"]),
            _ => panic!("expected the comments command"),
        }
    }
}
