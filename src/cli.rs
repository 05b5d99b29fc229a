use clap::Parser;
use maplem_lookup::application::dto::OutputFormat;
use maplem_lookup::character_lookup::domain::World;
use std::path::PathBuf;

/// Look up a MapleStory M character through the NEXON Open API
#[derive(Parser, Debug)]
#[command(name = "maplem-lookup")]
#[command(version)]
#[command(about = "Look up a MapleStory M character through the NEXON Open API", long_about = None)]
pub struct Args {
    /// Character name to search for
    #[arg(short, long, required_unless_present = "query")]
    pub name: Option<String>,

    /// World the character lives on (아케인, 크로아, 엘니도, 루나, 스카니아, 유니온, 제니스)
    #[arg(short, long, default_value_t = World::default())]
    pub world: World,

    /// Shared query string, e.g. "characterName=...&worldName=..."
    #[arg(short, long, conflicts_with_all = ["name", "world"])]
    pub query: Option<String>,

    /// Output format: markdown or json
    #[arg(short, long, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
