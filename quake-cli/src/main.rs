use quake_core::{
    DEFAULT_FEED_URL, FeedLoader, FetchError, FixtureFeedLoader, HttpFeedLoader, LeafletPresenter,
    MapOptions, OutputFormat, RenderSession, SvgPresenter, error_page,
};

use std::{
    fs::{create_dir_all as create_generated_dir, write as write_file},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use svg::save as save_as_svg;
use tracing::{Level, error, info};

const GENERATED_DIR: &str = "generated";

#[derive(Parser, Debug)]
#[command(version, about = "Render an earthquake feed as a map", long_about = None)]
struct Args {
    /// GeoJSON feed to fetch
    #[arg(short, long, default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Read the feed from a local GeoJSON file instead of the network
    #[arg(long)]
    fixture: Option<PathBuf>,

    #[clap(short = 'F', long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Where to write the map, defaults to `generated/earthquakes.<format>`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Request timeout for the feed, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Log every stage of the render pass
    #[arg(short, long)]
    verbose: bool,
}

enum Rendered {
    Page(String),
    Snapshot(svg::Document),
}

async fn render<L: FeedLoader>(
    session: &RenderSession<L>,
    format: OutputFormat,
) -> Result<Rendered, FetchError> {
    let options = session.options().clone();

    match format {
        OutputFormat::Html => session
            .run(LeafletPresenter::new(options))
            .await
            .map(Rendered::Page),
        OutputFormat::Svg => session
            .run(SvgPresenter::new(options))
            .await
            .map(Rendered::Snapshot),
    }
}

/// A fixture that cannot be read fails the pass like any other feed error.
async fn render_fixture(path: &Path, format: OutputFormat) -> Result<Rendered, FetchError> {
    let loader = FixtureFeedLoader::from_path(path)?;
    let session = RenderSession::new(loader, path.display().to_string(), MapOptions::default());

    render(&session, format).await
}

fn save(
    output: &Path,
    format: OutputFormat,
    rendered: Result<Rendered, FetchError>,
) -> anyhow::Result<()> {
    match rendered {
        Ok(Rendered::Page(page)) => {
            info!("Saving map as HTML to: {}", output.display());
            write_file(output, page)
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
        Ok(Rendered::Snapshot(document)) => {
            info!("Saving map as SVG to: {}", output.display());
            save_as_svg(output, &document)
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
        Err(e) => {
            error!("Render aborted: {e}");
            // An HTML target still gets a page, so whoever opens it sees why the map is missing.
            if format == OutputFormat::Html {
                write_file(output, error_page(&e.to_string()))
                    .with_context(|| format!("failed to write {}", output.display()))?;
            }
            return Err(e).context("failed to render earthquake map");
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let output = match args.output {
        Some(path) => path,
        None => {
            create_generated_dir(GENERATED_DIR)
                .with_context(|| format!("failed to create '{GENERATED_DIR}' directory"))?;
            Path::new(GENERATED_DIR).join(format!("earthquakes.{}", args.format.extension()))
        }
    };

    let rendered = match args.fixture {
        Some(ref path) => {
            info!("Reading earthquakes from fixture: {}", path.display());
            render_fixture(path, args.format).await
        }
        None => {
            info!("Fetching earthquakes from: {}", args.feed_url);
            let loader = HttpFeedLoader::with_timeout(Duration::from_secs(args.timeout_secs))
                .context("failed to build HTTP client")?;
            let session = RenderSession::new(loader, args.feed_url.as_str(), MapOptions::default());
            render(&session, args.format).await
        }
    };

    save(&output, args.format, rendered)
}
