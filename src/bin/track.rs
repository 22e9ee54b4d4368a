//! `track` 바이너리 진입점.

use act::application::ports::ConfigRepository;
use act::infrastructure::adapters::JsonConfigRepository;
use act::interface::cli::TrackCli;
use act::interface::cli::track;
use act::interface::composition::TrackComposition;
use act::interface::logging::init_tracing;
use act::interface::runtime::run_with_timeout;

#[tokio::main]
async fn main() {
    init_tracing();

    let action = match TrackCli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let config_repo = JsonConfigRepository::default();
    let config = match config_repo.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let limit = config.command_timeout();
    let result = run_with_timeout(limit, move || {
        let composition = TrackComposition::new(config_repo, config)?;
        track::execute(action, &composition)
    })
    .await;

    match result {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
