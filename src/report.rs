use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, TimeZone};
use tracing::{info, warn};

use crate::models::projects::Project;
use crate::utils::constants::SECONDS_PER_HOUR;

pub fn seconds_to_hours(seconds: i64) -> f64 {
    seconds as f64 / SECONDS_PER_HOUR
}

/// `today - days`, saturating at the earliest representable date.
pub fn cutoff_date(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Calendar date of an RFC 3339 instant in `tz`.
///
/// GitLab stores date-only timelogs at local midnight, so taking the UTC date
/// would move them to the previous day east of Greenwich.
pub fn local_date<Tz: TimeZone>(spent_at: &str, tz: &Tz) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(spent_at)
        .ok()
        .map(|instant| instant.with_timezone(tz).date_naive())
}

pub fn is_tracking_issue(title: &str, pattern: Option<&str>) -> bool {
    pattern.is_some_and(|p| !p.is_empty() && title.contains(p))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub date: NaiveDate,
    pub username: String,
    pub issue_iid: String,
    pub issue_title: String,
    pub seconds: i64,
}

impl ReportLine {
    pub fn hours(&self) -> f64 {
        seconds_to_hours(self.seconds)
    }
}

/// Walks every timelog with its local date, skipping unparseable timestamps.
fn dated_timelogs<'a, Tz: TimeZone>(
    project: &'a Project,
    tz: &'a Tz,
) -> impl Iterator<Item = ReportLine> + 'a {
    project.issues.nodes.iter().flat_map(move |issue| {
        issue.timelogs.nodes.iter().filter_map(move |timelog| {
            let Some(date) = local_date(&timelog.spent_at, tz) else {
                warn!(
                    "skipping timelog by {} on #{} with invalid spentAt {:?}",
                    timelog.user.username, issue.iid, timelog.spent_at
                );
                return None;
            };
            Some(ReportLine {
                date,
                username: timelog.user.username.clone(),
                issue_iid: issue.iid.clone(),
                issue_title: issue.title.clone(),
                seconds: timelog.time_spent,
            })
        })
    })
}

/// Time one user logged on a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    pub username: String,
    pub date: NaiveDate,
    pub lines: Vec<ReportLine>,
    pub total_seconds: i64,
}

impl UserReport {
    pub fn total_hours(&self) -> f64 {
        seconds_to_hours(self.total_seconds)
    }

    /// Rendered output, one entry per log line.
    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                format!(
                    "{:.1}h at {} - #{}: {}",
                    line.hours(),
                    line.date,
                    line.issue_iid,
                    line.issue_title
                )
            })
            .collect();
        out.push(format!(
            "Total spent time on {} for {} : {:.1}h",
            self.date,
            self.username,
            self.total_hours()
        ));
        out
    }

    pub fn log(&self) {
        for line in self.lines() {
            info!("{}", line);
        }
    }
}

/// Entries of `username` whose local date is exactly `date`.
///
/// Unlike [`all_users_spent_time`] this is not a range: with a non-zero day
/// count it reports that one past day only.
pub fn user_spent_time<Tz: TimeZone>(
    project: &Project,
    username: &str,
    date: NaiveDate,
    tz: &Tz,
) -> UserReport {
    let lines: Vec<ReportLine> = dated_timelogs(project, tz)
        .filter(|line| line.date == date && line.username == username)
        .collect();
    let total_seconds = lines
        .iter()
        .fold(0i64, |total, line| total.saturating_add(line.seconds));

    UserReport {
        username: username.to_string(),
        date,
        lines,
        total_seconds,
    }
}

/// Time logged by everyone since a cutoff date, split per user into dev and
/// tracking buckets. Amounts are seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamReport {
    pub since: NaiveDate,
    pub lines: Vec<ReportLine>,
    pub dev: BTreeMap<String, i64>,
    pub tracking: BTreeMap<String, i64>,
}

impl TeamReport {
    pub fn dev_total_hours(&self) -> f64 {
        seconds_to_hours(bucket_total(&self.dev))
    }

    pub fn tracking_total_hours(&self) -> f64 {
        seconds_to_hours(bucket_total(&self.tracking))
    }

    /// Rendered output, one entry per log line.
    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                format!(
                    "{:.1}h at {} by {} - #{}: {}",
                    line.hours(),
                    line.date,
                    line.username,
                    line.issue_iid,
                    line.issue_title
                )
            })
            .collect();

        out.push("-- Total dev time spent --".to_string());
        self.render_bucket(&self.dev, self.dev_total_hours(), &mut out);

        out.push("-- Total NON dev time spent --".to_string());
        self.render_bucket(&self.tracking, self.tracking_total_hours(), &mut out);

        out
    }

    pub fn log(&self) {
        for line in self.lines() {
            info!("{}", line);
        }
    }

    fn render_bucket(
        &self,
        bucket: &BTreeMap<String, i64>,
        total_hours: f64,
        out: &mut Vec<String>,
    ) {
        for (username, seconds) in bucket {
            out.push(format!(
                "since {} for {} : {:.1}h",
                self.since,
                username,
                seconds_to_hours(*seconds)
            ));
        }
        out.push(format!("Total : {:.1}h", total_hours));
    }
}

fn bucket_total(bucket: &BTreeMap<String, i64>) -> i64 {
    bucket.values().fold(0, |total, seconds| total.saturating_add(*seconds))
}

/// Entries of every user whose local date is on or after `since`.
pub fn all_users_spent_time<Tz: TimeZone>(
    project: &Project,
    tracking_issue: Option<&str>,
    since: NaiveDate,
    tz: &Tz,
) -> TeamReport {
    let mut report = TeamReport {
        since,
        lines: Vec::new(),
        dev: BTreeMap::new(),
        tracking: BTreeMap::new(),
    };

    for line in dated_timelogs(project, tz).filter(|line| line.date >= since) {
        let bucket = if is_tracking_issue(&line.issue_title, tracking_issue) {
            &mut report.tracking
        } else {
            &mut report.dev
        };
        let total = bucket.entry(line.username.clone()).or_insert(0);
        *total = total.saturating_add(line.seconds);
        report.lines.push(line);
    }

    report
}
