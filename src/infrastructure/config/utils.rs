//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::{Component, Path, PathBuf};

/// 사용자 입력 경로를 절대 경로로 정규화한다.
/// - `~`/`~/...` 는 홈 디렉터리로 확장한다.
/// - 상대 경로는 현재 작업 디렉터리 기준으로 바꾼다.
/// - `.`/`..` 구성요소를 어휘적으로 정리한다(파일시스템 접근 없음).
pub fn expand_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    let expanded = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
            match dirs::home_dir() {
                Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
                None => PathBuf::from(raw),
            }
        }
        _ => PathBuf::from(raw),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };

    clean(&absolute)
}

fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // 루트 위로는 올라가지 않는다.
                if !out.pop() && !out.has_root() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
