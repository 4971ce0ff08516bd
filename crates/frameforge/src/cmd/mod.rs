use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use frameforge_nav::DEFAULT_BIND;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod deck;
pub mod frames;
pub mod render;
pub mod serve;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the deck and serve it over HTTP until interrupted.
    Serve(ServeArgs),
    /// Build the deck and print one frame.
    Render(RenderArgs),
    /// Build the deck and list its frames.
    Frames(FramesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Serve(args) => serve::run(args, format),
        Command::Render(args) => render::run(args),
        Command::Frames(args) => frames::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Deck contents, built in flag order: landing, readme, slides, keyboard.
#[derive(Args, Debug, Clone, Default)]
pub struct DeckArgs {
    /// Landing page heading.
    #[arg(long, env = "FRAMEFORGE_HEADING", default_value = "frameforge")]
    pub heading: String,
    /// Landing page logo URL. Default: {api-url}/img/logo.
    #[arg(long, env = "FRAMEFORGE_LOGO", default_value = "")]
    pub logo: String,
    /// GitHub username for the landing footer.
    #[arg(long, env = "FRAMEFORGE_GITHUB")]
    pub github: Option<String>,
    /// X username for the landing footer.
    #[arg(long, env = "FRAMEFORGE_X")]
    pub x: Option<String>,
    /// Skip the landing frame.
    #[arg(long, conflicts_with_all = ["github", "x"])]
    pub no_landing: bool,
    /// Markdown file rendered as a text frame.
    #[arg(long, value_name = "FILE")]
    pub readme: Option<PathBuf>,
    /// Slide directory; the client fetches {api-url}/{dir name}/slides.json.
    #[arg(long, value_name = "DIR")]
    pub slides: Option<PathBuf>,
    /// Append the keyboard overlay frame.
    #[arg(long)]
    pub keyboard: bool,
    /// Base URL used by client scripts and images.
    #[arg(long, env = "FRAMEFORGE_API_URL", default_value = "")]
    pub api_url: String,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub deck: DeckArgs,
    /// Listen address.
    #[arg(long, env = "FRAMEFORGE_BIND", default_value_t = DEFAULT_BIND)]
    pub bind: SocketAddr,
    /// Reject invalid or out-of-range cursors with 400.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub deck: DeckArgs,
    /// Frame index, interpreted like the X-Frame request header.
    #[arg(long, allow_hyphen_values = true)]
    pub index: Option<String>,
    /// Fail on invalid or out-of-range indices instead of falling back to 0.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct FramesArgs {
    #[command(flatten)]
    pub deck: DeckArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
