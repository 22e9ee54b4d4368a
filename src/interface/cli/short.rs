//! `short` 명령 파싱/실행 모듈.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::domain::shortlist::{LimitHandling, ListConfig, validate_list_name};
use crate::infrastructure::render::render_shortlist;
use crate::interface::composition::ShortComposition;

#[derive(Debug, Parser)]
#[command(name = "short")]
#[command(about = "Short List - Helping you separate the critical few from the trivial many.")]
#[command(long_about = "Life is short, lists are long, unless you use a finite list manager.")]
pub struct ShortCli {
    /// Override default storage location
    #[arg(long, global = true)]
    path: Option<String>,

    #[command(subcommand)]
    command: ShortCommands,
}

#[derive(Debug, Subcommand)]
enum ShortCommands {
    /// Create a new list
    AddList {
        name: String,

        /// Maximum number of open items
        #[arg(long)]
        max_count: Option<usize>,

        /// What happens when the list is full: moveLastToClosed or pushFront
        #[arg(long)]
        limit_handling: Option<String>,
    },
    /// Add an item to a list
    Add { list: String, item: String },
    /// Show a list
    List { name: String },
    /// Move an open item to the closed items
    Close { list: String, index: usize },
    /// Move a closed item back to the open items
    Open { list: String, index: usize },
    /// Configure list settings (max-count, limit-handling)
    Config {
        list: String,
        setting: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortAction {
    CreateList {
        name: String,
        max_count: Option<usize>,
        limit_handling: Option<LimitHandling>,
    },
    AddItem {
        list: String,
        item: String,
    },
    ShowList {
        name: String,
    },
    Close {
        list: String,
        index: usize,
    },
    Open {
        list: String,
        index: usize,
    },
    UpdateSetting {
        list: String,
        setting: String,
        value: String,
    },
}

/// 저장 위치 재지정(`--path`)과 실행할 액션.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortInvocation {
    pub path: Option<String>,
    pub action: ShortAction,
}

impl ShortCli {
    pub fn parse_action() -> Result<ShortInvocation, String> {
        Self::parse().into_invocation()
    }

    pub fn into_invocation(self) -> Result<ShortInvocation, String> {
        let action = match self.command {
            ShortCommands::AddList {
                name,
                max_count,
                limit_handling,
            } => {
                validate_list_name(&name).map_err(|e| e.to_string())?;
                if max_count == Some(0) {
                    return Err("invalid max count: must be at least 1".to_string());
                }
                let limit_handling = limit_handling
                    .map(|raw| raw.parse::<LimitHandling>())
                    .transpose()
                    .map_err(|e| e.to_string())?;
                ShortAction::CreateList {
                    name,
                    max_count,
                    limit_handling,
                }
            }
            ShortCommands::Add { list, item } => ShortAction::AddItem { list, item },
            ShortCommands::List { name } => ShortAction::ShowList { name },
            ShortCommands::Close { list, index } => ShortAction::Close { list, index },
            ShortCommands::Open { list, index } => ShortAction::Open { list, index },
            ShortCommands::Config {
                list,
                setting,
                value,
            } => ShortAction::UpdateSetting {
                list,
                setting,
                value,
            },
        };

        Ok(ShortInvocation {
            path: self.path,
            action,
        })
    }
}

/// 액션을 실행하고 stdout에 쓸 텍스트를 돌려준다.
pub fn execute(action: ShortAction, app: &ShortComposition) -> Result<String> {
    let service = app.list_service();
    match action {
        ShortAction::CreateList {
            name,
            max_count,
            limit_handling,
        } => {
            // 플래그가 없으면 설정 파일의 기본값을 쓴다.
            let defaults = app.list_defaults()?;
            let config = ListConfig::new(
                max_count.unwrap_or(defaults.max_count),
                limit_handling.unwrap_or(defaults.limit_handling),
            )?;
            let list = service
                .create_list(&name, config)
                .context("failed to create list")?;
            Ok(format!(
                "Created new list '{}' with maxCount={} and limitHandling={}\n",
                list.name, list.config.max_count, list.config.limit_handling
            ))
        }
        ShortAction::AddItem { list, item } => {
            service
                .add_item(&list, &item)
                .context("failed to add item")?;
            Ok(format!("Added item to list '{list}'\n"))
        }
        ShortAction::ShowList { name } => {
            let list = service.get_list(&name).context("failed to get list")?;
            Ok(render_shortlist(&list))
        }
        ShortAction::Close { list, index } => {
            service
                .move_to_closed(&list, index)
                .context("failed to close item")?;
            Ok(format!("Moved item at index {index} to closed list\n"))
        }
        ShortAction::Open { list, index } => {
            service
                .move_to_open(&list, index)
                .context("failed to open item")?;
            Ok(format!("Moved item at index {index} to open list\n"))
        }
        ShortAction::UpdateSetting {
            list,
            setting,
            value,
        } => {
            service
                .update_setting(&list, &setting, &value)
                .context("failed to update config")?;
            Ok(format!("Updated {setting} setting for list '{list}'\n"))
        }
    }
}
