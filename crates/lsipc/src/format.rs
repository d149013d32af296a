//! Cell formatting shared by every resource class.

use std::fmt::Display;

use chrono::{DateTime, Datelike, TimeZone};
use clap::ValueEnum;

/// How timestamps are printed (`--time-format`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TimeMode {
    /// Time of day today, month and day this year, else year, month and day.
    #[default]
    Short,
    /// Complete date and time.
    Full,
    /// ISO 8601 with the timezone offset.
    Iso,
}

/// Format a Unix timestamp relative to `now`.
///
/// Zero means the event never happened and yields `None`, as does a
/// timestamp chrono cannot represent.
pub fn time<Tz>(mode: TimeMode, secs: i64, now: &DateTime<Tz>) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if secs == 0 {
        return None;
    }
    let when = now.timezone().timestamp_opt(secs, 0).earliest()?;
    let pattern = match mode {
        TimeMode::Full => "%a %b %e %H:%M:%S %Y",
        TimeMode::Iso => "%Y-%m-%dT%H:%M:%S%z",
        TimeMode::Short if when.date_naive() == now.date_naive() => "%H:%M",
        TimeMode::Short if when.year() == now.year() => "%b%d",
        TimeMode::Short => "%Y-%b%d",
    };
    Some(when.format(pattern).to_string())
}

const UNITS: [char; 7] = ['B', 'K', 'M', 'G', 'T', 'P', 'E'];

/// Binary-scaled size with a one letter suffix and at most one decimal.
///
/// `512` is `512B`, `1536` is `1.5K`, `1048576` is `1M`.
pub fn human_size(bytes: u64) -> String {
    let mut exp = 0;
    while exp < UNITS.len() - 1 && bytes >= 1u64 << ((exp + 1) * 10) {
        exp += 1;
    }
    if exp == 0 {
        return format!("{}B", bytes);
    }

    let shift = exp * 10;
    let mut whole = bytes >> shift;
    let rest = bytes & ((1u64 << shift) - 1);
    // Remainder in thousandths of the unit, then rounded to tenths.
    let thousandths = if rest >= u64::MAX / 1000 {
        (rest / 1024 * 1000) >> (shift - 10)
    } else {
        (rest * 1000) >> shift
    };
    let mut tenths = (thousandths + 50) / 100;
    if tenths == 10 {
        whole += 1;
        tenths = 0;
    }

    if tenths == 0 {
        format!("{}{}", whole, UNITS[exp])
    } else {
        format!("{}.{}{}", whole, tenths, UNITS[exp])
    }
}

/// Permission bits, as `0644` or `rw-r--r--`.
pub fn perms(mode: u32, numeric: bool) -> String {
    let bits = mode & 0o777;
    if numeric {
        return if bits == 0 {
            "0".to_string()
        } else {
            format!("0{:o}", bits)
        };
    }
    let mut out = String::with_capacity(9);
    for shift in [6, 3, 0] {
        let triple = bits >> shift;
        out.push(if triple & 0o4 != 0 { 'r' } else { '-' });
        out.push(if triple & 0o2 != 0 { 'w' } else { '-' });
        out.push(if triple & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// IPC key as eight hex digits.
pub fn key(key: i32) -> String {
    format!("0x{:08x}", key as u32)
}

/// `used` as a percentage of `limit` with two decimals.
pub fn percent(used: u64, limit: u64) -> Option<String> {
    if limit == 0 {
        return None;
    }
    Some(format!("{:.2}%", used as f64 * 100.0 / limit as f64))
}
