// SPDX-License-Identifier: GPL-3.0-or-later

//! Local release moment -> UTC, and UTC -> display zones.
//!
//! Offsets come from the fixed timezone table; daylight saving time is not
//! modelled.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use releasekit_config::ReleaseTimeConfig;
use releasekit_domain::reference::timezone_by_name;
use releasekit_domain::{Release, ReleaseMoment, Track};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub type Result<T> = std::result::Result<T, ReleaseTimeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseTimeError {
    #[error("invalid release time '{0}', expected hh:mm AM/PM")]
    InvalidTime(String),

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("release date is not set")]
    MissingDate,
}

lazy_static! {
    static ref TIME_REGEX: Regex =
        Regex::new(r"^(\d{1,2}):(\d{2})\s*([AaPp][Mm])?$").expect("valid release time regex");
}

/// Parses `hh:mm AM/PM`; a string without a meridiem is read as 24-hour `HH:MM`.
pub fn parse_time_12h(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    let invalid = || ReleaseTimeError::InvalidTime(value.to_string());
    let caps = TIME_REGEX.captures(trimmed).ok_or_else(invalid)?;

    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
    if minute > 59 {
        return Err(invalid());
    }

    let hour = match caps.get(3).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return Err(invalid());
            }
            match (meridiem.as_str(), hour) {
                ("AM", 12) => 0,
                ("AM", h) => h,
                ("PM", 12) => 12,
                (_, h) => h + 12,
            }
        }
        None if hour <= 23 => hour,
        None => return Err(invalid()),
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

pub fn zone_offset(zone: &str) -> Result<FixedOffset> {
    timezone_by_name(zone)
        .and_then(|tz| FixedOffset::east_opt(tz.offset_minutes * 60))
        .ok_or_else(|| ReleaseTimeError::UnknownTimezone(zone.to_string()))
}

pub fn to_utc(date: NaiveDate, time: &str, zone: &str) -> Result<DateTime<Utc>> {
    let local = date.and_time(parse_time_12h(time)?);
    let offset = zone_offset(zone)?;
    let instant = offset
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| ReleaseTimeError::InvalidTime(time.to_string()))?
        .with_timezone(&Utc);
    debug!(target: "release_time", %date, time, zone, %instant, "resolved release instant");
    Ok(instant)
}

pub fn format_in_zone(instant: DateTime<Utc>, zone: &str) -> Result<String> {
    let offset = zone_offset(zone)?;
    Ok(instant
        .with_timezone(&offset)
        .format("%Y-%m-%d %I:%M %p (UTC%:z)")
        .to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneProjection {
    pub zone: String,
    pub label: String,
    pub display: String,
}

/// Renders `instant` in each zone. Unknown zones are skipped.
pub fn project(instant: DateTime<Utc>, zones: &[String]) -> Vec<ZoneProjection> {
    zones
        .iter()
        .filter_map(|zone| match (timezone_by_name(zone), format_in_zone(instant, zone)) {
            (Some(info), Ok(display)) => Some(ZoneProjection {
                zone: info.name.to_string(),
                label: info.label.to_string(),
                display,
            }),
            _ => {
                warn!(target: "release_time", zone = %zone, "skipping unknown display timezone");
                None
            }
        })
        .collect()
}

/// The moment a track goes live: its own custom moment if set, else the release's.
pub fn effective_release_moment(release: &Release, track: &Track) -> Option<ReleaseMoment> {
    track
        .custom_release
        .clone()
        .or_else(|| release.consumer_release())
}

/// Release-time resolution with the configured default zone and display zones.
#[derive(Debug, Clone)]
pub struct ReleaseTimeResolver {
    default_timezone: String,
    display_zones: Vec<String>,
}

impl Default for ReleaseTimeResolver {
    fn default() -> Self {
        Self::from(&ReleaseTimeConfig::default())
    }
}

impl From<&ReleaseTimeConfig> for ReleaseTimeResolver {
    fn from(config: &ReleaseTimeConfig) -> Self {
        Self {
            default_timezone: config.default_timezone.clone(),
            display_zones: config.display_zones.clone(),
        }
    }
}

impl ReleaseTimeResolver {
    pub fn resolve(&self, moment: &ReleaseMoment) -> Result<DateTime<Utc>> {
        to_utc(moment.date, &moment.time, &moment.timezone)
    }

    /// UTC instant of the release; missing time means midnight, missing zone the default.
    pub fn release_instant(&self, release: &Release) -> Result<DateTime<Utc>> {
        let date = release.consumer_release_date.ok_or(ReleaseTimeError::MissingDate)?;
        let time = release.release_time.as_deref().unwrap_or("12:00 AM");
        let zone = release.timezone.as_deref().unwrap_or(&self.default_timezone);
        to_utc(date, time, zone)
    }

    pub fn track_instant(&self, release: &Release, track: &Track) -> Result<DateTime<Utc>> {
        match &track.custom_release {
            Some(moment) => self.resolve(moment),
            None => self.release_instant(release),
        }
    }

    pub fn project(&self, instant: DateTime<Utc>) -> Vec<ZoneProjection> {
        project(instant, &self.display_zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};
    use releasekit_domain::AlbumType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_twelve_hour_times() {
        assert_eq!(parse_time_12h("12:00 AM"), Ok(NaiveTime::from_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(parse_time_12h("12:30 pm"), Ok(NaiveTime::from_hms_opt(12, 30, 0).unwrap()));
        assert_eq!(parse_time_12h("07:05PM"), Ok(NaiveTime::from_hms_opt(19, 5, 0).unwrap()));
        assert_eq!(parse_time_12h("18:00"), Ok(NaiveTime::from_hms_opt(18, 0, 0).unwrap()));
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["13:00 PM", "0:15 AM", "10:60 AM", "24:00", "noon", ""] {
            assert!(
                matches!(parse_time_12h(bad), Err(ReleaseTimeError::InvalidTime(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn seoul_midnight_is_nine_hours_earlier_in_utc() {
        let instant = to_utc(date(2025, 6, 1), "12:00 AM", "Asia/Seoul").unwrap();
        let wall_clock = NaiveDateTime::new(date(2025, 6, 1), NaiveTime::MIN).and_utc();
        assert_eq!(wall_clock - instant, Duration::hours(9));
    }

    #[test]
    fn half_hour_offsets_are_supported() {
        let instant = to_utc(date(2025, 1, 1), "05:30 AM", "Asia/Mumbai").unwrap();
        assert_eq!(instant, date(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap().and_utc());
    }

    #[test]
    fn unknown_zone_is_an_error() {
        assert_eq!(
            to_utc(date(2025, 1, 1), "12:00 AM", "Mars/Olympus"),
            Err(ReleaseTimeError::UnknownTimezone("Mars/Olympus".into()))
        );
    }

    #[test]
    fn projects_into_display_zones() {
        let instant = to_utc(date(2025, 6, 1), "12:00 AM", "Asia/Seoul").unwrap();
        let zones = vec!["Asia/Tokyo".to_string(), "Nowhere".to_string(), "UTC".to_string()];
        let projected = project(instant, &zones);
        assert_eq!(projected.len(), 2);
        assert_eq!(projected[0].display, "2025-06-01 12:00 AM (UTC+09:00)");
        assert_eq!(projected[1].display, "2025-05-31 03:00 PM (UTC+00:00)");
    }

    #[test]
    fn track_moment_overrides_release() {
        let mut release = Release::new("Blue Hour", AlbumType::Single);
        release.consumer_release_date = Some(date(2025, 6, 1));
        release.release_time = Some("06:00 PM".into());
        release.timezone = Some("Asia/Seoul".into());

        let mut track = Track::new("Blue Hour");
        assert_eq!(effective_release_moment(&release, &track), release.consumer_release());

        let custom = ReleaseMoment {
            date: date(2025, 6, 2),
            time: "09:00 AM".into(),
            timezone: "Europe/London".into(),
        };
        track.custom_release = Some(custom.clone());
        assert_eq!(effective_release_moment(&release, &track), Some(custom));

        let resolver = ReleaseTimeResolver::default();
        assert_eq!(
            resolver.track_instant(&release, &track).unwrap(),
            date(2025, 6, 2).and_hms_opt(9, 0, 0).unwrap().and_utc()
        );
    }

    #[test]
    fn release_instant_defaults_to_midnight_in_default_zone() {
        let mut release = Release::new("Blue Hour", AlbumType::Single);
        let resolver = ReleaseTimeResolver::default();
        assert_eq!(resolver.release_instant(&release), Err(ReleaseTimeError::MissingDate));

        release.consumer_release_date = Some(date(2025, 6, 1));
        assert_eq!(
            resolver.release_instant(&release).unwrap(),
            date(2025, 5, 31).and_hms_opt(15, 0, 0).unwrap().and_utc()
        );
        assert_eq!(resolver.project(resolver.release_instant(&release).unwrap()).len(), 6);
    }
}
