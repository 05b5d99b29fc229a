mod cli;

use chrono::Utc;
use cli::Args;
use maplem_lookup::adapters::outbound::console::{colored_tag_line, StderrProgressReporter};
use maplem_lookup::adapters::outbound::network::NexonOpenApiClient;
use maplem_lookup::application::factories::{FormatterFactory, PresenterFactory};
use maplem_lookup::application::read_models::CharacterReadModelBuilder;
use maplem_lookup::application::search_session::{SearchSession, SessionState};
use maplem_lookup::application::use_cases::LookupCharacterUseCase;
use maplem_lookup::character_lookup::domain::SearchQuery;
use maplem_lookup::character_lookup::policies::MarkerTable;
use maplem_lookup::config::ApiConfig;
use maplem_lookup::shared::error::{ExitCode, LookupError};
use maplem_lookup::shared::Result;
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let args = Args::parse_args();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::for_error(&e)
        }
    };

    process::exit(code.as_i32());
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<ExitCode> {
    let mut session = SearchSession::new();

    // Step 1: Validate the search before touching configuration or the network
    let query = submit(&mut session, &args)?;

    // Step 2: Load configuration and wire adapters
    let config = ApiConfig::from_env()?;
    let repository = NexonOpenApiClient::new(&config)?;
    let use_case = LookupCharacterUseCase::new(repository, StderrProgressReporter::new());

    // Step 3: Run the lookup
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(use_case.execute(&query)).map(|character| {
        CharacterReadModelBuilder::build(&query, character, &MarkerTable::default(), Utc::now())
    });
    let code = match &outcome {
        Ok(_) => ExitCode::Success,
        Err(e) => ExitCode::for_error(e),
    };
    session.resolve(outcome);

    // Step 4: Present the result
    match session.state() {
        SessionState::Loaded { model, .. } => {
            eprintln!("{}", FormatterFactory::progress_message(args.format));
            let output = FormatterFactory::create(args.format).format(model)?;
            PresenterFactory::create(args.output.into()).present(&output)?;

            let colored = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
            eprintln!("{}", colored_tag_line(&model.equipment_tags, colored));
            if let Some(share) = session.share_query() {
                eprintln!("🔗 ?{}", share);
            }
        }
        SessionState::Failed { message, .. } => {
            eprintln!("❌ {}", message);
        }
        SessionState::Idle | SessionState::Loading { .. } => {}
    }

    Ok(code)
}

fn submit(session: &mut SearchSession, args: &Args) -> Result<SearchQuery> {
    match (&args.query, &args.name) {
        (Some(query_string), _) => session.submit_query_string(query_string)?.ok_or_else(|| {
            LookupError::invalid_input(
                "The query string must contain both characterName and worldName",
            )
            .into()
        }),
        (None, Some(name)) => session.submit(name, args.world),
        (None, None) => Err(LookupError::invalid_input("Please enter a character name").into()),
    }
}
