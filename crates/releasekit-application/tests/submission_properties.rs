// SPDX-License-Identifier: GPL-3.0-or-later
use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use releasekit_application::{
    can_submit, resolve_territories, to_utc, validate_submission, TerritoryEditor,
};
use releasekit_domain::reference::Continent;
use releasekit_domain::{
    AlbumType, Artist, Contributor, CountryCode, DspTerritoryOverride, FileRef, IssueCode,
    OverrideType, Release, TerritorySelection, Track,
};

fn track(title: &str) -> Track {
    let mut track = Track::new(title);
    track.genre = Some("Pop".into());
    track.artists.push(Artist::main("Jane Doe"));
    track
        .contributors
        .push(Contributor::new("John Smith", ["composer", "lyricist"]));
    track
}

fn release_with_tracks(count: usize) -> Release {
    let album_type = AlbumType::expected_for_track_count(count).unwrap_or(AlbumType::Single);
    let mut release = Release::new("Night Drive", album_type);
    release.consumer_release_date = NaiveDate::from_ymd_opt(2025, 6, 1);
    release.tracks = (0..count)
        .map(|i| {
            if count <= 3 {
                track(&format!("Night Drive (Version {i})"))
            } else {
                track(&format!("Song Number {i}"))
            }
        })
        .collect();
    release.files.cover_image = Some(FileRef::named("cover.jpg"));
    release.files.audio_files = (0..count).map(|i| FileRef::named(format!("{i:02}.wav"))).collect();
    release
}

#[test]
fn title_track_errors_and_warnings_are_mutually_exclusive() {
    for count in 0..=8 {
        for flagged in 0..=count {
            let mut release = release_with_tracks(count);
            for track in release.tracks.iter_mut().take(flagged) {
                track.is_title = true;
            }
            let report = validate_submission(&release);
            let no_title = report
                .errors
                .iter()
                .any(|issue| issue.code == IssueCode::NoTitleTrack);
            let multiple = report
                .warnings
                .iter()
                .any(|issue| issue.code == IssueCode::MultipleTitleTracks);

            assert_eq!(no_title, flagged == 0, "{count} tracks, {flagged} flagged");
            assert_eq!(multiple, flagged > 1, "{count} tracks, {flagged} flagged");
            assert!(!(no_title && multiple));
            assert!(!report.warnings.iter().any(|i| i.code == IssueCode::NoTitleTrack));
        }
    }
}

#[test]
fn duplicate_isrc_is_reported_exactly_once() {
    for repeats in 2..=5 {
        let mut release = release_with_tracks(6);
        release.tracks[0].is_title = true;
        for track in release.tracks.iter_mut().take(repeats) {
            track.isrc = Some("USRC17607839".into());
        }
        release.tracks[5].isrc = Some("KRA402400001".into());

        let report = validate_submission(&release);
        let duplicates: Vec<_> = report
            .errors
            .iter()
            .filter(|issue| issue.code == IssueCode::DuplicateIsrc)
            .collect();
        assert_eq!(duplicates.len(), 1, "{repeats} repeats");
        assert!(duplicates[0].message.contains("USRC17607839"));
    }
}

#[test]
fn empty_isrcs_are_not_duplicates() {
    let mut release = release_with_tracks(3);
    release.tracks[0].is_title = true;
    release.tracks[1].isrc = Some(String::new());
    release.tracks[2].isrc = Some("  ".into());
    assert!(!validate_submission(&release).contains(IssueCode::DuplicateIsrc));
}

#[test]
fn territory_resolution_is_idempotent() {
    let mut release = release_with_tracks(1);
    release.territories = TerritorySelection::Selected(
        ["KR", "JP", "US"].into_iter().map(CountryCode::new).collect(),
    );
    release
        .dsp_territories
        .insert("melon".into(), DspTerritoryOverride::custom([CountryCode::new("KR")]));

    for dsp in ["melon", "spotify", "unknown_dsp"] {
        assert_eq!(
            resolve_territories(&release, dsp),
            resolve_territories(&release, dsp)
        );
    }
}

#[test]
fn default_overrides_resolve_like_any_other_default_dsp() {
    let mut release = release_with_tracks(1);
    release.territories = TerritorySelection::Selected(
        ["KR", "FR"].into_iter().map(CountryCode::new).collect(),
    );
    release.dsp_territories.insert(
        "apple_music".into(),
        DspTerritoryOverride {
            territory_type: OverrideType::Default,
            territories: [CountryCode::new("BR")].into_iter().collect(),
        },
    );

    let apple = resolve_territories(&release, "apple_music");
    assert_eq!(apple, resolve_territories(&release, "spotify"));
    assert_eq!(apple, resolve_territories(&release, "deezer"));

    release.territories = TerritorySelection::World;
    assert_eq!(
        resolve_territories(&release, "apple_music"),
        resolve_territories(&release, "tidal")
    );
}

#[test]
fn seoul_midnight_is_nine_hours_behind_wall_clock() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let instant = to_utc(date, "12:00 AM", "Asia/Seoul").unwrap();
    let wall_clock = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
    assert_eq!(wall_clock - instant, Duration::hours(9));

    // Same offset in summer: no DST adjustment.
    let summer = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
    let instant = to_utc(summer, "12:00 AM", "Asia/Seoul").unwrap();
    assert_eq!(summer.and_hms_opt(0, 0, 0).unwrap().and_utc() - instant, Duration::hours(9));
}

#[test]
fn continent_select_then_deselect_restores_selection() {
    let before: BTreeSet<CountryCode> = ["KR", "JP"].into_iter().map(CountryCode::new).collect();
    for continent in [Continent::Africa, Continent::Europe, Continent::Oceania, Continent::Americas] {
        let mut selection = TerritorySelection::Selected(before.clone());
        selection.select_continent(continent);
        assert!(selection.is_selected(&continent.country_codes().into_iter().next().unwrap()));
        selection.deselect_continent(continent);
        assert_eq!(selection, TerritorySelection::Selected(before.clone()));
    }
}

#[test]
fn incomplete_release_cannot_be_submitted() {
    let mut release = release_with_tracks(3);
    release.files.cover_image = None;
    release.files.audio_files.truncate(2);

    let report = validate_submission(&release);
    assert!(report.errors.len() >= 2);
    assert!(report.contains(IssueCode::NoTitleTrack));
    assert!(report.contains(IssueCode::CoverImageRequired));
    assert!(report.contains(IssueCode::AudioFileCountMismatch));
    assert!(report.has_errors());
    assert!(!can_submit(&report, true));
}

#[test]
fn pre_order_after_release_is_a_single_error() {
    let mut release = release_with_tracks(1);
    release.tracks[0].is_title = true;
    release.consumer_release_date = NaiveDate::from_ymd_opt(2025, 6, 1);
    release.pre_order_date = NaiveDate::from_ymd_opt(2025, 6, 10);

    let report = validate_submission(&release);
    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert_eq!(report.errors[0].code, IssueCode::PreOrderNotBeforeRelease);
    assert_eq!(report.errors[0].field, "pre_order_date");
}
