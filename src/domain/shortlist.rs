//! 용량이 제한된 open/closed 목록(shortlist) 도메인.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortListError {
    #[error("invalid index {index}: list has {len} item(s)")]
    InvalidIndex { index: usize, len: usize },
    #[error("list already exists: {0}")]
    ListAlreadyExists(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid item: {0}")]
    InvalidItem(String),
    #[error("invalid list name: {0}")]
    InvalidName(String),
    #[error("unknown setting: {0} (expected max-count or limit-handling)")]
    UnknownSetting(String),
}

/// open 목록이 가득 찼을 때의 처리 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LimitHandling {
    /// 마지막 open 항목을 closed로 보내고 새 항목을 뒤에 붙인다.
    #[default]
    MoveLastToClosed,
    /// 마지막 open 항목을 closed로 보내고 새 항목을 맨 앞에 넣는다.
    PushFront,
}

impl LimitHandling {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MoveLastToClosed => "moveLastToClosed",
            Self::PushFront => "pushFront",
        }
    }
}

impl fmt::Display for LimitHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LimitHandling {
    type Err = ShortListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "moveLastToClosed" => Ok(Self::MoveLastToClosed),
            "pushFront" => Ok(Self::PushFront),
            other => Err(ShortListError::InvalidConfig(format!(
                "limit handling must be moveLastToClosed or pushFront, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    pub max_count: usize,
    pub limit_handling: LimitHandling,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            limit_handling: LimitHandling::MoveLastToClosed,
        }
    }
}

impl ListConfig {
    pub fn new(max_count: usize, limit_handling: LimitHandling) -> Result<Self, ShortListError> {
        let config = Self {
            max_count,
            limit_handling,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShortListError> {
        if self.max_count == 0 {
            return Err(ShortListError::InvalidConfig(
                "max count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 이름 붙은 shortlist.
///
/// 불변식: 모든 변경 이후 `open.len() <= config.max_count`.
/// 항목은 open <-> closed 사이로만 이동하며 삭제되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortList {
    pub name: String,
    pub config: ListConfig,
    pub open: Vec<String>,
    pub closed: Vec<String>,
}

impl ShortList {
    pub fn new(name: impl Into<String>, config: ListConfig) -> Self {
        Self {
            name: name.into(),
            config,
            open: Vec::new(),
            closed: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.open.len() >= self.config.max_count
    }

    /// 새 항목을 open에 추가한다. 가득 차 있으면 정책에 따라 자리를 만든다.
    pub fn add_to_open(&mut self, item: &str) -> Result<(), ShortListError> {
        let item = normalize_item(item)?;
        let displaced = self.make_room();
        self.place(item, displaced);
        Ok(())
    }

    /// open[index]를 closed 끝으로 옮긴다.
    pub fn move_to_closed(&mut self, index: usize) -> Result<(), ShortListError> {
        if index >= self.open.len() {
            return Err(ShortListError::InvalidIndex {
                index,
                len: self.open.len(),
            });
        }

        let item = self.open.remove(index);
        self.closed.push(item);
        Ok(())
    }

    /// closed[index]를 open으로 되돌린다.
    /// 항목을 closed에서 먼저 빼낸 뒤 overflow 처리를 하므로,
    /// 밀려난 항목이 closed에 붙어도 잘못된 원소를 지우지 않는다.
    pub fn move_to_open(&mut self, index: usize) -> Result<(), ShortListError> {
        if index >= self.closed.len() {
            return Err(ShortListError::InvalidIndex {
                index,
                len: self.closed.len(),
            });
        }

        let item = self.closed.remove(index);
        let displaced = self.make_room();
        self.place(item, displaced);
        Ok(())
    }

    /// 설정을 교체한다. 용량이 줄면 넘치는 open 꼬리 항목을 순서대로 closed로 보낸다.
    pub fn set_config(&mut self, config: ListConfig) -> Result<(), ShortListError> {
        config.validate()?;
        self.config = config;
        if self.open.len() > config.max_count {
            let surplus = self.open.split_off(config.max_count);
            self.closed.extend(surplus);
        }
        Ok(())
    }

    /// 가득 찼을 때만 open 꼬리를 closed로 보낸다. 밀어낸 항목이 있으면 true.
    fn make_room(&mut self) -> bool {
        if !self.is_full() {
            return false;
        }
        let keep = self.config.max_count.saturating_sub(1);
        let displaced = self.open.split_off(keep.min(self.open.len()));
        self.closed.extend(displaced);
        true
    }

    /// 여유가 있으면 정책과 무관하게 끝에 붙인다. PushFront는 overflow 때만 맨 앞.
    fn place(&mut self, item: String, displaced: bool) {
        match self.config.limit_handling {
            LimitHandling::PushFront if displaced => self.open.insert(0, item),
            _ => self.open.push(item),
        }
    }
}

/// 목록 이름은 파일명으로 쓰이므로 경로 구분자/상위 경로를 허용하지 않는다.
pub fn validate_list_name(name: &str) -> Result<(), ShortListError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ShortListError::InvalidName("name must not be empty".to_string()));
    }
    if trimmed != name
        || name.contains(['/', '\\'])
        || name.starts_with('.')
        || name.chars().any(char::is_control)
    {
        return Err(ShortListError::InvalidName(format!(
            "'{name}' cannot be used as a file name"
        )));
    }
    Ok(())
}

fn normalize_item(item: &str) -> Result<String, ShortListError> {
    let trimmed = item.trim();
    if trimmed.is_empty() {
        return Err(ShortListError::InvalidItem("item must not be empty".to_string()));
    }
    if trimmed.contains(['\n', '\r']) {
        return Err(ShortListError::InvalidItem(
            "item must be a single line".to_string(),
        ));
    }
    // 목록 문서에서 heading/front-matter 구분선으로 읽히는 줄은 보존되지 않는다.
    if trimmed.starts_with("# ") || trimmed == "---" {
        return Err(ShortListError::InvalidItem(format!(
            "'{trimmed}' would be read back as list markup"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(policy: LimitHandling, open: &[&str]) -> ShortList {
        let mut list = ShortList::new("work", ListConfig::new(3, policy).unwrap());
        list.open = open.iter().map(|s| s.to_string()).collect();
        list
    }

    #[test]
    fn move_last_to_closed_replaces_last_open_item() {
        let mut list = list_with(LimitHandling::MoveLastToClosed, &["a", "b", "c"]);
        list.add_to_open("d").unwrap();
        assert_eq!(list.open, vec!["a", "b", "d"]);
        assert_eq!(list.closed, vec!["c"]);
    }

    #[test]
    fn push_front_shifts_and_closes_last_slot() {
        let mut list = list_with(LimitHandling::PushFront, &["a", "b", "c"]);
        list.add_to_open("d").unwrap();
        assert_eq!(list.open, vec!["d", "a", "b"]);
        assert_eq!(list.closed, vec!["c"]);
    }

    #[test]
    fn push_front_appends_while_there_is_room() {
        let mut list = list_with(LimitHandling::PushFront, &[]);
        list.add_to_open("a").unwrap();
        list.add_to_open("b").unwrap();
        assert_eq!(list.open, vec!["a", "b"]);
        assert!(list.closed.is_empty());
    }

    #[test]
    fn push_front_move_to_open_with_room_appends() {
        let mut list = list_with(LimitHandling::PushFront, &["a"]);
        list.closed = vec!["x".into()];
        list.move_to_open(0).unwrap();
        assert_eq!(list.open, vec!["a", "x"]);
        assert!(list.closed.is_empty());
    }

    #[test]
    fn open_never_exceeds_capacity() {
        for policy in [LimitHandling::MoveLastToClosed, LimitHandling::PushFront] {
            let mut list = list_with(policy, &[]);
            for n in 0..10 {
                list.add_to_open(&format!("item {n}")).unwrap();
                assert!(list.open.len() <= 3);
            }
            assert_eq!(list.open.len() + list.closed.len(), 10);
        }
    }

    #[test]
    fn rejects_blank_and_markup_items() {
        let mut list = list_with(LimitHandling::MoveLastToClosed, &[]);
        assert!(matches!(list.add_to_open("   "), Err(ShortListError::InvalidItem(_))));
        assert!(matches!(list.add_to_open("a\nb"), Err(ShortListError::InvalidItem(_))));
        assert!(matches!(list.add_to_open("# Closed"), Err(ShortListError::InvalidItem(_))));
        assert!(matches!(list.add_to_open("---"), Err(ShortListError::InvalidItem(_))));
        list.add_to_open("  #42 fix login  ").unwrap();
        assert_eq!(list.open, vec!["#42 fix login"]);
    }

    #[test]
    fn move_to_closed_appends_to_closed() {
        let mut list = list_with(LimitHandling::MoveLastToClosed, &["a", "b", "c"]);
        list.move_to_closed(1).unwrap();
        assert_eq!(list.open, vec!["a", "c"]);
        assert_eq!(list.closed, vec!["b"]);
        assert_eq!(
            list.move_to_closed(2),
            Err(ShortListError::InvalidIndex { index: 2, len: 2 })
        );
    }

    #[test]
    fn move_to_open_with_room_appends() {
        let mut list = list_with(LimitHandling::MoveLastToClosed, &["a"]);
        list.closed = vec!["x".into(), "y".into()];
        list.move_to_open(1).unwrap();
        assert_eq!(list.open, vec!["a", "y"]);
        assert_eq!(list.closed, vec!["x"]);
    }

    #[test]
    fn move_to_open_push_front_removes_the_chosen_closed_item() {
        let mut list = list_with(LimitHandling::PushFront, &["a", "b", "c"]);
        list.closed = vec!["x".into(), "y".into(), "z".into()];
        list.move_to_open(2).unwrap();
        assert_eq!(list.open, vec!["z", "a", "b"]);
        assert_eq!(list.closed, vec!["x", "y", "c"]);
    }

    #[test]
    fn move_to_open_move_last_at_capacity() {
        let mut list = list_with(LimitHandling::MoveLastToClosed, &["a", "b", "c"]);
        list.closed = vec!["x".into(), "y".into()];
        list.move_to_open(0).unwrap();
        assert_eq!(list.open, vec!["a", "b", "x"]);
        assert_eq!(list.closed, vec!["y", "c"]);
    }

    #[test]
    fn move_to_open_rejects_out_of_range_index() {
        let mut list = list_with(LimitHandling::PushFront, &["a"]);
        assert_eq!(
            list.move_to_open(0),
            Err(ShortListError::InvalidIndex { index: 0, len: 0 })
        );
    }

    #[test]
    fn shrinking_capacity_moves_surplus_to_closed() {
        let mut list = list_with(LimitHandling::MoveLastToClosed, &["a", "b", "c"]);
        list.set_config(ListConfig::new(1, LimitHandling::PushFront).unwrap())
            .unwrap();
        assert_eq!(list.open, vec!["a"]);
        assert_eq!(list.closed, vec!["b", "c"]);
        assert!(list.set_config(ListConfig { max_count: 0, ..list.config }).is_err());
    }

    #[test]
    fn limit_handling_parses_wire_names() {
        assert_eq!("pushFront".parse::<LimitHandling>().unwrap(), LimitHandling::PushFront);
        assert_eq!(
            "moveLastToClosed".parse::<LimitHandling>().unwrap(),
            LimitHandling::MoveLastToClosed
        );
        assert!("push-front".parse::<LimitHandling>().is_err());
    }

    #[test]
    fn list_names_must_be_plain_file_names() {
        assert!(validate_list_name("work").is_ok());
        assert!(validate_list_name("reading-2025").is_ok());
        for bad in ["", " work", "a/b", "..", ".hidden", "a\\b"] {
            assert!(validate_list_name(bad).is_err(), "{bad}");
        }
    }
}
