//! 명령 실행 시간 제한.

use std::time::Duration;

use anyhow::{Context, Result, bail};

/// 블로킹 작업을 별도 스레드에서 돌리고 `limit` 안에 끝나지 않으면 실패로 돌려준다.
/// 시간 초과 시 작업을 취소하지는 않는다(호출 측에서 프로세스를 종료한다).
pub async fn run_with_timeout<T, F>(limit: Duration, job: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::task::spawn_blocking(job);
    match tokio::time::timeout(limit, handle).await {
        Ok(joined) => joined.context("command task failed")?,
        Err(_) => bail!("command timed out after {}s", limit.as_secs_f32()),
    }
}
