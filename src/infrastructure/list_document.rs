//! shortlist Markdown 문서(YAML front-matter + `# Open`/`# Closed` 섹션) 변환 모듈.
//!
//! ```text
//! ---
//! maxCount: 3
//! limitHandling: moveLastToClosed
//! ---
//!
//! # Open
//! first item
//!
//! # Closed
//! done item
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::shortlist::{LimitHandling, ListConfig, ShortList};

/// front-matter 원본 값. 빠진 키는 기본 설정으로 채운다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    max_count: Option<i64>,
    limit_handling: Option<LimitHandling>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Open,
    Closed,
    Other,
}

/// 문서를 목록으로 해석한다.
/// 빈 줄과 알 수 없는 heading 아래의 줄은 무시한다.
/// `maxCount`가 없거나 1 미만이면 전체 설정을 기본값으로 둔다.
/// 손으로 고쳐 open이 용량을 넘으면 넘치는 꼬리를 closed로 보낸다.
pub fn parse_document(name: &str, content: &str) -> Result<ShortList> {
    let mut list = ShortList::new(name, ListConfig::default());
    let mut section = Section::None;
    let mut in_front_matter = false;
    let mut front_matter = Vec::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if line == "---" {
            if in_front_matter {
                list.config = config_from_front_matter(&front_matter.join("\n"))
                    .with_context(|| format!("parsing front-matter of list '{name}'"))?;
                front_matter.clear();
            }
            in_front_matter = !in_front_matter;
            continue;
        }

        if in_front_matter {
            front_matter.push(line);
            continue;
        }

        if let Some(heading) = line.strip_prefix("# ") {
            section = match heading.trim() {
                "Open" => Section::Open,
                "Closed" => Section::Closed,
                _ => Section::Other,
            };
            continue;
        }

        match section {
            Section::Open => list.open.push(line.to_string()),
            Section::Closed => list.closed.push(line.to_string()),
            Section::None | Section::Other => {}
        }
    }

    let config = list.config;
    list.set_config(config)?;
    Ok(list)
}

fn config_from_front_matter(raw: &str) -> Result<ListConfig> {
    let parsed: FrontMatter = if raw.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(raw)?
    };

    let fallback = ListConfig::default();
    match parsed.max_count {
        Some(count) if count > 0 => Ok(ListConfig {
            max_count: usize::try_from(count)?,
            limit_handling: parsed.limit_handling.unwrap_or(fallback.limit_handling),
        }),
        _ => Ok(fallback),
    }
}

/// 목록을 문서 문자열로 만든다.
pub fn render_document(list: &ShortList) -> Result<String> {
    let yaml = serde_yaml::to_string(&list.config).context("serializing list config")?;

    let mut out = String::new();
    out.push_str("---\n");
    out.push_str(&yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n\n");

    out.push_str("# Open\n");
    for item in &list.open {
        out.push_str(item);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("# Closed\n");
    for item in &list.closed {
        out.push_str(item);
        out.push('\n');
    }
    Ok(out)
}
