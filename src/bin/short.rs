//! `short` 바이너리 진입점.

use act::application::ports::ConfigRepository;
use act::infrastructure::adapters::JsonConfigRepository;
use act::interface::cli::ShortCli;
use act::interface::cli::short;
use act::interface::composition::ShortComposition;
use act::interface::logging::init_tracing;
use act::interface::runtime::run_with_timeout;

#[tokio::main]
async fn main() {
    init_tracing();

    let invocation = match ShortCli::parse_action() {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let config = match JsonConfigRepository::default().load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let limit = config.command_timeout();
    let result = run_with_timeout(limit, move || {
        let composition = ShortComposition::new(config, invocation.path.as_deref());
        short::execute(invocation.action, &composition)
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
