use crate::models::{HistoryEntry, PhraseTotal, Statistics};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use std::collections::HashMap;

pub fn build_stats(history: &[HistoryEntry]) -> Statistics {
    build_stats_at(Local::now(), history)
}

/// Aggregates `history` as seen at `now`. "Today" uses the calendar day of
/// `now` in its own time zone; week and month are rolling 7 and 30 days.
pub fn build_stats_at<Tz: TimeZone>(now: DateTime<Tz>, history: &[HistoryEntry]) -> Statistics {
    const TOP_PHRASE_LIMIT: usize = 5;

    let tz = now.timezone();
    let today = now.date_naive();
    let week_start: DateTime<Utc> = (now.clone() - Duration::days(7)).with_timezone(&Utc);
    let month_start: DateTime<Utc> = (now - Duration::days(30)).with_timezone(&Utc);

    let mut stats = Statistics {
        total_sessions: history.len(),
        ..Statistics::default()
    };
    let mut totals: Vec<PhraseTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in history {
        let count = u64::from(entry.count);
        stats.total = stats.total.saturating_add(count);

        if entry.completed_at.with_timezone(&tz).date_naive() >= today {
            stats.today = stats.today.saturating_add(count);
        }
        if entry.completed_at >= week_start {
            stats.week = stats.week.saturating_add(count);
        }
        if entry.completed_at >= month_start {
            stats.month = stats.month.saturating_add(count);
        }

        match positions.get(entry.phrase_name.as_str()) {
            Some(&index) => totals[index].count = totals[index].count.saturating_add(count),
            None => {
                positions.insert(entry.phrase_name.as_str(), totals.len());
                totals.push(PhraseTotal {
                    name: entry.phrase_name.clone(),
                    count,
                });
            }
        }
    }

    // Stable sort: equal sums stay in first-seen order.
    totals.sort_by(|a, b| b.count.cmp(&a.count));
    totals.truncate(TOP_PHRASE_LIMIT);
    stats.top_phrases = totals;

    stats
}
