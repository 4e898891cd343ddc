// SPDX-License-Identifier: GPL-3.0-or-later

//! Release timezones with fixed UTC offsets.
//!
//! Offsets are constants per zone and ignore daylight saving time, so zones
//! that observe DST are off by up to one hour for part of the year.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub offset_minutes: i32,
}

pub const TIMEZONES: &[TimezoneInfo] = &[
    TimezoneInfo { name: "UTC", label: "UTC", offset_minutes: 0 },
    TimezoneInfo { name: "Asia/Seoul", label: "Seoul (KST)", offset_minutes: 9 * 60 },
    TimezoneInfo { name: "Asia/Tokyo", label: "Tokyo (JST)", offset_minutes: 9 * 60 },
    TimezoneInfo { name: "Asia/Shanghai", label: "Shanghai (CST)", offset_minutes: 8 * 60 },
    TimezoneInfo { name: "Asia/Singapore", label: "Singapore (SGT)", offset_minutes: 8 * 60 },
    TimezoneInfo { name: "Asia/Bangkok", label: "Bangkok (ICT)", offset_minutes: 7 * 60 },
    TimezoneInfo { name: "Asia/Mumbai", label: "Mumbai (IST)", offset_minutes: 5 * 60 + 30 },
    TimezoneInfo { name: "Europe/London", label: "London (GMT)", offset_minutes: 0 },
    TimezoneInfo { name: "Europe/Paris", label: "Paris (CET)", offset_minutes: 60 },
    TimezoneInfo { name: "Europe/Berlin", label: "Berlin (CET)", offset_minutes: 60 },
    TimezoneInfo { name: "Europe/Moscow", label: "Moscow (MSK)", offset_minutes: 3 * 60 },
    TimezoneInfo { name: "America/New_York", label: "New York (EST)", offset_minutes: -5 * 60 },
    TimezoneInfo { name: "America/Chicago", label: "Chicago (CST)", offset_minutes: -6 * 60 },
    TimezoneInfo { name: "America/Denver", label: "Denver (MST)", offset_minutes: -7 * 60 },
    TimezoneInfo { name: "America/Los_Angeles", label: "Los Angeles (PST)", offset_minutes: -8 * 60 },
    TimezoneInfo { name: "America/Sao_Paulo", label: "Sao Paulo (BRT)", offset_minutes: -3 * 60 },
    TimezoneInfo { name: "Australia/Sydney", label: "Sydney (AEDT)", offset_minutes: 11 * 60 },
    TimezoneInfo { name: "Pacific/Auckland", label: "Auckland (NZDT)", offset_minutes: 13 * 60 },
];

pub fn timezone_by_name(name: &str) -> Option<&'static TimezoneInfo> {
    let name = name.trim();
    TIMEZONES.iter().find(|tz| tz.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let seoul = timezone_by_name("asia/seoul").expect("seoul");
        assert_eq!(seoul.offset_minutes, 540);
        assert_eq!(timezone_by_name("Asia/Mumbai").map(|tz| tz.offset_minutes), Some(330));
        assert!(timezone_by_name("Mars/Olympus").is_none());
    }
}
