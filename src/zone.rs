use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Time zone used for calendar-day arithmetic and for rendering dates.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Zone {
  #[default]
  Local,
  Utc,
  Named(chrono_tz::Tz),
}

impl FromStr for Zone {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    if s.eq_ignore_ascii_case("local") {
      return Ok(Zone::Local);
    }
    if s.eq_ignore_ascii_case("utc") {
      return Ok(Zone::Utc);
    }
    match s.parse::<chrono_tz::Tz>() {
      Ok(tz) => Ok(Zone::Named(tz)),
      Err(_) => bail!("unknown time zone '{s}': expected local, utc, or an IANA name like Europe/Moscow"),
    }
  }
}

impl fmt::Display for Zone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Zone::Local => f.write_str("local"),
      Zone::Utc => f.write_str("utc"),
      Zone::Named(tz) => f.write_str(tz.name()),
    }
  }
}

impl Zone {
  /// Calendar date of `at` as seen in this zone.
  pub fn date_of(&self, at: DateTime<Utc>) -> NaiveDate {
    match self {
      Zone::Local => at.with_timezone(&Local).date_naive(),
      Zone::Utc => at.date_naive(),
      Zone::Named(tz) => at.with_timezone(tz).date_naive(),
    }
  }

  /// Whole calendar days from `start` to `end`; partial days are dropped by
  /// the day boundaries, not rounded.
  pub fn days_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (self.date_of(end) - self.date_of(start)).num_days()
  }

  /// RFC3339 rendering in this zone.
  pub fn iso(&self, at: DateTime<Utc>) -> String {
    match self {
      Zone::Local => at.with_timezone(&Local).to_rfc3339_opts(SecondsFormat::Secs, true),
      Zone::Utc => at.to_rfc3339_opts(SecondsFormat::Secs, true),
      Zone::Named(tz) => tz
        .from_utc_datetime(&at.naive_utc())
        .to_rfc3339_opts(SecondsFormat::Secs, true),
    }
  }

  /// Date rendered with a strftime pattern in this zone.
  pub fn format_date(&self, at: DateTime<Utc>, pattern: &str) -> String {
    self.date_of(at).format(pattern).to_string()
  }
}
