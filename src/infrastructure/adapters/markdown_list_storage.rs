//! shortlist 저장소 포트 구현 어댑터(목록당 Markdown 파일 하나).

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};

use crate::application::ports::ListStorage;
use crate::domain::shortlist::{ListConfig, ShortList};
use crate::infrastructure::list_document::{parse_document, render_document};

/// `<base>/.short/<name>.md` 파일들을 다루는 저장소.
/// 목록과 무관하게 인스턴스 전체의 읽기/쓰기를 mutex 하나로 직렬화한다.
pub struct MarkdownListStorage {
    base_dir: PathBuf,
    lock: Mutex<()>,
}

impl MarkdownListStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn list_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(".short").join(format!("{name}.md"))
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| anyhow!("list storage lock poisoned"))
    }
}

impl ListStorage for MarkdownListStorage {
    fn exists(&self, name: &str) -> Result<bool> {
        let _guard = self.guard()?;
        Ok(self.list_path(name).is_file())
    }

    fn load(&self, name: &str) -> Result<ShortList> {
        let _guard = self.guard()?;
        let path = self.list_path(name);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(list = name, "list file missing, using defaults");
                return Ok(ShortList::new(name, ListConfig::default()));
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read list at {}", path.display()));
            }
        };

        parse_document(name, &content)
    }

    fn save(&self, list: &ShortList) -> Result<()> {
        let _guard = self.guard()?;
        let path = self.list_path(&list.name);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory {}", dir.display()))?;
        }

        let content = render_document(list)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write list at {}", path.display()))?;
        tracing::debug!(path = %path.display(), "list written");
        Ok(())
    }
}
