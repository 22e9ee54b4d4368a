//! `track` 명령 파싱/실행 모듈.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::domain::day_id::DayId;
use crate::domain::rating::Rating;
use crate::infrastructure::render::{render_day_list, render_set_outcome, render_week_report};
use crate::interface::composition::TrackComposition;

#[derive(Debug, Parser)]
#[command(name = "track")]
#[command(about = "Track the important stuff")]
pub struct TrackCli {
    #[command(subcommand)]
    command: TrackCommands,
}

#[derive(Debug, Subcommand)]
enum TrackCommands {
    /// Rate days
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Show effective merged config
    Config,
}

#[derive(Debug, Subcommand)]
enum DayCommands {
    /// Set a day rating between 1 and 5, for today
    Set {
        /// Rating 1-5
        #[arg(allow_negative_numbers = true)]
        score: String,

        /// Day ID in format YYwWW-D, e.g. 25w05-3
        #[arg(short = 'l', long = "long")]
        long: Option<String>,

        /// Week day 1-7 (1 = Monday) inside the selected week
        #[arg(short = 'd', long)]
        weekday: Option<u32>,

        /// Fill days since the last rating with the same score
        #[arg(short, long)]
        fill: bool,
    },
    /// List ratings for a week, default current
    List {
        /// Any day of the week to list, format YYwWW-D
        #[arg(short = 'l', long = "long")]
        long: Option<String>,
    },
    /// Show ratings for current week with trend analysis
    Report,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackAction {
    SetDay {
        rating: Rating,
        day: Option<DayId>,
        weekday: Option<u32>,
        fill: bool,
    },
    ListWeek {
        day: Option<DayId>,
    },
    Report,
    InspectConfig,
}

impl TrackCli {
    pub fn parse_action() -> Result<TrackAction, String> {
        Self::parse().into_action()
    }

    /// 서비스 호출 전에 점수/식별자/요일 형식을 모두 검증한다.
    pub fn into_action(self) -> Result<TrackAction, String> {
        match self.command {
            TrackCommands::Config => Ok(TrackAction::InspectConfig),
            TrackCommands::Day { command } => match command {
                DayCommands::Set {
                    score,
                    long,
                    weekday,
                    fill,
                } => {
                    let rating = score.parse::<Rating>().map_err(|e| e.to_string())?;
                    let day = parse_day_id(long.as_deref())?;
                    if let Some(wd) = weekday
                        && !(1..=7).contains(&wd)
                    {
                        return Err(format!("invalid weekday: {wd}, must be between 1 and 7"));
                    }
                    Ok(TrackAction::SetDay {
                        rating,
                        day,
                        weekday,
                        fill,
                    })
                }
                DayCommands::List { long } => Ok(TrackAction::ListWeek {
                    day: parse_day_id(long.as_deref())?,
                }),
                DayCommands::Report => Ok(TrackAction::Report),
            },
        }
    }
}

fn parse_day_id(raw: Option<&str>) -> Result<Option<DayId>, String> {
    raw.map(|s| DayId::parse(s.trim()).map_err(|e| format!("invalid day ID: {e}")))
        .transpose()
}

/// 액션을 실행하고 stdout에 쓸 텍스트를 돌려준다.
pub fn execute(action: TrackAction, app: &TrackComposition) -> Result<String> {
    match action {
        TrackAction::SetDay {
            rating,
            day,
            weekday,
            fill,
        } => {
            let service = app.rating_service();
            let mut target = day.map(DayId::date).unwrap_or_else(|| service.today());
            if let Some(wd) = weekday {
                target = service.weekday_in_week_of(target, wd)?;
            }
            let outcome = service.set_day_rating(target, rating, fill)?;
            Ok(render_set_outcome(&outcome))
        }
        TrackAction::ListWeek { day } => {
            let service = app.rating_service();
            let reference = day.unwrap_or_else(|| DayId::from_date(service.today()));
            let ratings = service
                .get_week_ratings(reference.year(), reference.week())
                .context("getting week ratings")?;
            Ok(render_day_list(reference.year(), reference.week(), &ratings))
        }
        TrackAction::Report => {
            let report = app
                .week_report_usecase()
                .execute()
                .context("building week report")?;
            Ok(render_week_report(&report))
        }
        TrackAction::InspectConfig => {
            let mut out = app.inspect_config_usecase().execute()?;
            out.push('\n');
            Ok(out)
        }
    }
}
