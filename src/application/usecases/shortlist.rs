//! shortlist 조작 유스케이스.
//! 모든 변경은 목록 전체를 읽고, 한 번 바꾸고, 전체를 다시 쓴다.

use anyhow::{Context, Result};

use crate::application::ports::ListStorage;
use crate::domain::shortlist::{
    LimitHandling, ListConfig, ShortList, ShortListError, validate_list_name,
};

pub struct ListService<'a> {
    pub storage: &'a dyn ListStorage,
}

impl<'a> ListService<'a> {
    pub fn get_list(&self, name: &str) -> Result<ShortList> {
        validate_list_name(name)?;
        self.storage
            .load(name)
            .with_context(|| format!("loading list '{name}'"))
    }

    /// 새 목록을 만든다. 같은 이름이 이미 있으면 `ListAlreadyExists`.
    pub fn create_list(&self, name: &str, config: ListConfig) -> Result<ShortList> {
        validate_list_name(name)?;
        config.validate()?;
        if self.storage.exists(name)? {
            return Err(ShortListError::ListAlreadyExists(name.to_string()).into());
        }

        let list = ShortList::new(name, config);
        self.storage.save(&list)?;
        tracing::info!(list = name, max_count = config.max_count, "list created");
        Ok(list)
    }

    pub fn add_item(&self, name: &str, item: &str) -> Result<ShortList> {
        self.mutate(name, |list| list.add_to_open(item))
    }

    pub fn move_to_open(&self, name: &str, index: usize) -> Result<ShortList> {
        self.mutate(name, |list| list.move_to_open(index))
    }

    pub fn move_to_closed(&self, name: &str, index: usize) -> Result<ShortList> {
        self.mutate(name, |list| list.move_to_closed(index))
    }

    pub fn update_config(&self, name: &str, config: ListConfig) -> Result<ShortList> {
        self.mutate(name, |list| list.set_config(config))
    }

    /// `config <list> <setting> <value>` 명령용 단일 설정 변경.
    /// 지원 키: `max-count`, `limit-handling`
    pub fn update_setting(&self, name: &str, setting: &str, value: &str) -> Result<ShortList> {
        self.mutate(name, |list| {
            let mut config = list.config;
            match setting {
                "max-count" => {
                    config.max_count = value.trim().parse().map_err(|_| {
                        ShortListError::InvalidConfig(format!(
                            "max count must be a positive number, got '{value}'"
                        ))
                    })?;
                }
                "limit-handling" => {
                    config.limit_handling = value.parse::<LimitHandling>()?;
                }
                other => return Err(ShortListError::UnknownSetting(other.to_string())),
            }
            list.set_config(config)
        })
    }

    fn mutate<F>(&self, name: &str, apply: F) -> Result<ShortList>
    where
        F: FnOnce(&mut ShortList) -> Result<(), ShortListError>,
    {
        let mut list = self.get_list(name)?;
        apply(&mut list)?;
        self.storage
            .save(&list)
            .with_context(|| format!("saving list '{name}'"))?;
        tracing::debug!(list = name, open = list.open.len(), closed = list.closed.len(), "list saved");
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::testing::MemoryListStorage;

    #[test]
    fn create_fails_when_list_exists() {
        let storage = MemoryListStorage::default();
        let service = ListService { storage: &storage };

        service.create_list("work", ListConfig::default()).unwrap();
        let err = service.create_list("work", ListConfig::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ShortListError>(),
            Some(&ShortListError::ListAlreadyExists("work".into()))
        );
    }

    #[test]
    fn add_materializes_missing_list_with_defaults() {
        let storage = MemoryListStorage::default();
        let service = ListService { storage: &storage };

        service.add_item("inbox", "call mom").unwrap();
        let saved = storage.saved("inbox").unwrap();
        assert_eq!(saved.config, ListConfig::default());
        assert_eq!(saved.open, vec!["call mom"]);
    }

    #[test]
    fn failed_mutation_does_not_save() {
        let storage = MemoryListStorage::default();
        let service = ListService { storage: &storage };

        let err = service.move_to_closed("inbox", 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShortListError>(),
            Some(ShortListError::InvalidIndex { index: 0, len: 0 })
        ));
        assert!(storage.saved("inbox").is_none());
    }

    #[test]
    fn round_trip_between_open_and_closed() {
        let storage = MemoryListStorage::default();
        let service = ListService { storage: &storage };
        let config = ListConfig::new(2, LimitHandling::PushFront).unwrap();

        service.create_list("reading", config).unwrap();
        for item in ["a", "b", "c"] {
            service.add_item("reading", item).unwrap();
        }
        let list = service.get_list("reading").unwrap();
        assert_eq!(list.open, vec!["c", "a"]);
        assert_eq!(list.closed, vec!["b"]);

        let list = service.move_to_open("reading", 0).unwrap();
        assert_eq!(list.open, vec!["b", "c"]);
        assert_eq!(list.closed, vec!["a"]);
    }

    #[test]
    fn update_config_shrinks_open_and_keeps_items() {
        let storage = MemoryListStorage::default();
        let service = ListService { storage: &storage };
        service.create_list("work", ListConfig::default()).unwrap();
        for item in ["a", "b", "c"] {
            service.add_item("work", item).unwrap();
        }

        let config = ListConfig::new(1, LimitHandling::PushFront).unwrap();
        service.update_config("work", config).unwrap();

        let saved = storage.saved("work").unwrap();
        assert_eq!(saved.config, config);
        assert_eq!(saved.open, vec!["a"]);
        assert_eq!(saved.closed, vec!["b", "c"]);
    }

    #[test]
    fn update_config_rejects_zero_capacity_without_saving() {
        let storage = MemoryListStorage::default();
        let service = ListService { storage: &storage };
        service.create_list("work", ListConfig::default()).unwrap();
        service.add_item("work", "a").unwrap();

        let zero = ListConfig {
            max_count: 0,
            limit_handling: LimitHandling::MoveLastToClosed,
        };
        let err = service.update_config("work", zero).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShortListError>(),
            Some(ShortListError::InvalidConfig(_))
        ));

        let saved = storage.saved("work").unwrap();
        assert_eq!(saved.config, ListConfig::default());
        assert_eq!(saved.open, vec!["a"]);
    }

    #[test]
    fn update_setting_validates_key_and_value() {
        let storage = MemoryListStorage::default();
        let service = ListService { storage: &storage };
        service.create_list("work", ListConfig::default()).unwrap();

        let list = service.update_setting("work", "limit-handling", "pushFront").unwrap();
        assert_eq!(list.config.limit_handling, LimitHandling::PushFront);

        let list = service.update_setting("work", "max-count", "5").unwrap();
        assert_eq!(list.config.max_count, 5);

        for (key, value) in [("max-count", "0"), ("max-count", "many"), ("limit-handling", "x")] {
            let err = service.update_setting("work", key, value).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ShortListError>(),
                Some(ShortListError::InvalidConfig(_))
            ));
        }
        let err = service.update_setting("work", "colour", "red").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShortListError>(),
            Some(ShortListError::UnknownSetting(_))
        ));
    }

    #[test]
    fn rejects_names_that_escape_the_list_directory() {
        let storage = MemoryListStorage::default();
        let service = ListService { storage: &storage };
        let err = service.add_item("../etc", "x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShortListError>(),
            Some(ShortListError::InvalidName(_))
        ));
    }
}
