//! tracing 구독자 초기화.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG`가 없으면 `warn` 수준으로 stderr에 출력한다.
/// 명령 결과(stdout)와 로그가 섞이지 않게 한다.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
