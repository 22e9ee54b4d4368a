//! 콘솔 출력용 텍스트 렌더링 모듈.

use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

use crate::application::usecases::rating::SetOutcome;
use crate::application::usecases::week_report::WeekReport;
use crate::domain::rating::DayRating;
use crate::domain::shortlist::ShortList;
use crate::domain::trend::WeekTrendPoint;

const GRID_CELL_WIDTH: usize = 4;
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// `day set` 결과.
pub fn render_set_outcome(outcome: &SetOutcome) -> String {
    let mut out = format!("Rated {}\n", outcome.rating);
    if !outcome.filled.is_empty() {
        out.push_str(&format!(
            "Filled {} missing day(s) with rating {}\n",
            outcome.filled.len(),
            outcome.rating.rating
        ));
    }
    out
}

/// `day list` 결과(한 주).
pub fn render_day_list(year: i32, week: u32, ratings: &[DayRating]) -> String {
    let mut out = format!("Week {week:02}, {year}:\n");
    if ratings.is_empty() {
        out.push_str("No ratings recorded this week\n");
        return out;
    }
    for r in ratings {
        out.push_str(&format!("{r}\n"));
    }
    out
}

/// `day report` 결과(요약 + 일별 목록/그리드 + 추세).
pub fn render_week_report(report: &WeekReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str(&format!("Week {}, {} Summary:\n", summary.week, summary.year));
    out.push_str("─────────────────────\n");

    match (&summary.best, &summary.worst) {
        (Some(best), Some(worst)) if summary.day_count > 0 => {
            out.push_str(&format!("Days Rated: {}\n", summary.day_count));
            out.push_str(&format!("Average:    {:.1}\n", summary.average));
            out.push_str(&format!("Best Day:   {} {}\n", best.id, best.rating.emoji()));
            out.push_str(&format!("Worst Day:  {} {}\n", worst.id, worst.rating.emoji()));

            out.push_str("\nDaily List:\n");
            out.push_str("───────────────\n");
            for r in &report.days {
                out.push_str(&format!(
                    "{}: {} {}\n",
                    WEEKDAYS[r.date.weekday().num_days_from_monday() as usize],
                    r.rating,
                    r.rating.emoji()
                ));
            }

            out.push('\n');
            out.push_str(&render_day_grid(&report.days));
        }
        _ => out.push_str("No ratings recorded this week\n"),
    }

    out.push_str(&format!("\n{}-Week Trend:\n", report.trend.len()));
    out.push_str("─────────────\n");
    for point in &report.trend {
        out.push_str(&render_trend_line(point));
        out.push('\n');
    }

    out
}

/// 요일 머리글 아래에 이모지를 한 칸씩 맞춰 놓는다. 기록 없는 날은 `·`.
pub fn render_day_grid(days: &[DayRating]) -> String {
    let mut cells: [&str; 7] = ["·"; 7];
    for r in days {
        cells[r.date.weekday().num_days_from_monday() as usize] = r.rating.emoji();
    }

    let header: String = WEEKDAYS.iter().map(|d| pad_cell(d)).collect();
    let row: String = cells.iter().map(|c| pad_cell(c)).collect();
    format!("{}\n{}\n", header.trim_end(), row.trim_end())
}

fn render_trend_line(point: &WeekTrendPoint) -> String {
    match point.average {
        Some(avg) => format!(
            "Week {:02}: {:.1} {} ({} days)",
            point.week,
            avg,
            point.direction.arrow(),
            point.day_count
        ),
        None => format!("Week {:02}: No data", point.week),
    }
}

fn pad_cell(text: &str) -> String {
    let width = UnicodeWidthStr::width(text);
    let padding = GRID_CELL_WIDTH.saturating_sub(width).max(1);
    format!("{text}{}", " ".repeat(padding))
}

/// `list <name>` 결과.
pub fn render_shortlist(list: &ShortList) -> String {
    let mut out = format!(
        "List: {} (max: {}, handling: {})\n\n",
        list.name, list.config.max_count, list.config.limit_handling
    );

    out.push_str("Open items:\n");
    push_items(&mut out, &list.open);

    out.push_str("\nClosed items:\n");
    push_items(&mut out, &list.closed);
    out
}

fn push_items(out: &mut String, items: &[String]) {
    if items.is_empty() {
        out.push_str("  (empty)\n");
    }
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("  {i}: {item}\n"));
    }
}
