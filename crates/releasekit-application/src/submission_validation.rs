// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-submission QC.
//!
//! Walks release -> tracks -> artists/contributors, runs the field rules on
//! every populated field and adds the cross-track checks (title track count,
//! duplicate ISRCs, advisory consistency, date ordering, file completeness).
//! The aggregator never fails; callers gate on [`QcReport::has_errors`].

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use releasekit_config::QcConfig;
use releasekit_domain::reference::{contributor_role, is_known_genre, is_known_instrument};
use releasekit_domain::{
    AlbumType, Issue, IssueCode, OverrideType, ParentalAdvisory, QcReport, Release,
    TerritorySelection, Track,
};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::field_validation::{
    normalize_isrc, validate_contributor_name, validate_copyright_year, validate_explicit_consistency,
    validate_featuring, validate_isrc, validate_title_in, validate_upc, validate_version, FieldKind,
    FieldRules,
};

lazy_static! {
    static ref VERSION_SUFFIX_REGEX: Regex =
        Regex::new(r"\s*\([^)]*\)\s*$").expect("valid version suffix regex");
}

/// Configured QC pass over a [`Release`].
#[derive(Debug, Clone)]
pub struct QcValidator {
    rules: FieldRules,
    config: QcConfig,
    reference_date: Option<NaiveDate>,
}

impl Default for QcValidator {
    fn default() -> Self {
        Self::new(QcConfig::default())
    }
}

impl QcValidator {
    pub fn new(config: QcConfig) -> Self {
        Self {
            rules: FieldRules::from(&config),
            config,
            reference_date: None,
        }
    }

    /// Enables the checks that depend on "today": past release dates, short
    /// release notice and future copyright years.
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.reference_date = Some(today);
        self
    }

    pub fn validate(&self, release: &Release) -> QcReport {
        let mut report = QcReport::default();

        self.check_release_fields(release, &mut report);
        for (index, track) in release.tracks.iter().enumerate() {
            report.extend(
                self.track_issues(track)
                    .into_iter()
                    .map(|issue| issue.scoped(&format!("tracks[{index}]"))),
            );
        }

        check_title_tracks(release, &mut report);
        check_duplicate_isrc(release, &mut report);
        check_parental_advisory(release, &mut report);
        self.check_dates(release, &mut report);
        check_files(release, &mut report);
        check_format(release, &mut report);
        self.check_languages(release, &mut report);
        check_territories(release, &mut report);
        check_credits(release, &mut report);

        debug!(
            target: "qc",
            release_id = %release.id,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            info = report.info.len(),
            "submission validated"
        );
        report
    }

    fn check_release_fields(&self, release: &Release, report: &mut QcReport) {
        report.extend(validate_title_in(
            &release.title,
            "title",
            release_title_language(release),
        ));
        for (index, translation) in release.translations.iter().enumerate() {
            if !translation.value.is_empty() {
                report.extend(validate_title_in(
                    &translation.value,
                    &format!("translations[{index}].value"),
                    Some(translation.language.as_str()),
                ));
            }
        }
        if let Some(upc) = &release.upc {
            report.extend(validate_upc(upc, "upc"));
        }

        for (year, field) in [
            (&release.copyright_year, "copyright_year"),
            (&release.phonogram_year, "phonogram_year"),
        ] {
            let Some(year) = year else { continue };
            let issues = validate_copyright_year(year, field);
            let malformed = !issues.is_empty();
            report.extend(issues);
            if malformed {
                continue;
            }
            if let (Some(today), Ok(parsed)) = (self.reference_date, year.trim().parse::<i32>()) {
                if parsed > today.year() {
                    report.push(Issue::error(IssueCode::FutureCopyrightYear, field));
                }
            }
        }

        if let Some(text) = &release.copyright_text {
            report.extend(self.rules.validate(FieldKind::CLine, text));
        }
        if let Some(text) = &release.phonogram_text {
            report.extend(self.rules.validate(FieldKind::PLine, text));
        }
    }

    fn track_issues(&self, track: &Track) -> Vec<Issue> {
        let mut issues = validate_title_in(&track.title, "title", title_language(track));

        for (index, translation) in track.translations.iter().enumerate() {
            if !translation.value.is_empty() {
                issues.extend(validate_title_in(
                    &translation.value,
                    &format!("translations[{index}].value"),
                    Some(translation.language.as_str()),
                ));
            }
        }
        if let Some(version) = &track.version {
            issues.extend(validate_version(&track.title, version, "version"));
        }
        if let Some(isrc) = &track.isrc {
            issues.extend(validate_isrc(isrc, "isrc"));
        }
        if let Some(featuring) = &track.featuring {
            issues.extend(validate_featuring(featuring, "featuring"));
        }

        match track.genre.as_deref().map(str::trim) {
            None | Some("") => issues.push(Issue::error(IssueCode::Required, "genre")),
            Some(genre) if !is_known_genre(genre) => {
                issues.push(Issue::warning(IssueCode::UnknownGenre, "genre"))
            }
            Some(_) => {}
        }
        if let Some(genre) = track.alternate_genre.as_deref().map(str::trim) {
            if !genre.is_empty() && !is_known_genre(genre) {
                issues.push(Issue::warning(IssueCode::UnknownGenre, "alternate_genre"));
            }
        }

        if !track.stereo && !track.dolby_atmos {
            issues.push(Issue::error(IssueCode::NoAudioFormat, "audio_format"));
        }

        issues.extend(validate_explicit_consistency(track));

        for (index, artist) in track.artists.iter().enumerate() {
            issues.extend(
                self.rules
                    .validate_artist_name(&artist.name, &format!("artists[{index}].name")),
            );
        }

        for (index, contributor) in track.contributors.iter().enumerate() {
            let prefix = format!("contributors[{index}]");
            if contributor.is_songwriter() {
                issues.extend(validate_contributor_name(
                    &contributor.name,
                    &format!("{prefix}.name"),
                ));
            } else if contributor.name.trim().is_empty() {
                issues.push(Issue::error(IssueCode::Required, format!("{prefix}.name")));
            }

            if contributor.roles.is_empty() {
                issues.push(Issue::error(IssueCode::Required, format!("{prefix}.roles")));
            }
            for role in &contributor.roles {
                if contributor_role(role).is_none() {
                    issues.push(
                        Issue::warning(IssueCode::UnknownContributorRole, format!("{prefix}.roles"))
                            .with_message(format!("unknown contributor role '{role}'")),
                    );
                }
            }
            for instrument in &contributor.instruments {
                if !is_known_instrument(instrument) {
                    issues.push(
                        Issue::warning(IssueCode::UnknownInstrument, format!("{prefix}.instruments"))
                            .with_message(format!("unknown instrument '{instrument}'")),
                    );
                }
            }
        }

        issues
    }

    fn check_dates(&self, release: &Release, report: &mut QcReport) {
        let Some(consumer) = release.consumer_release_date else {
            report.push(Issue::warning(IssueCode::MissingReleaseDate, "consumer_release_date"));
            return;
        };

        if let Some(pre_order) = release.pre_order_date {
            if pre_order >= consumer {
                report.push(
                    Issue::error(IssueCode::PreOrderNotBeforeRelease, "pre_order_date").with_message(
                        format!("pre-order date {pre_order} must be before the release date {consumer}"),
                    ),
                );
            }
        }

        if let Some(today) = self.reference_date {
            let days_until = (consumer - today).num_days();
            if days_until < 0 {
                report.push(Issue::error(IssueCode::PastReleaseDate, "consumer_release_date"));
            } else if days_until < self.config.min_release_notice_days {
                report.push(
                    Issue::warning(IssueCode::ShortReleaseNotice, "consumer_release_date")
                        .with_message(format!(
                            "release is {days_until} days away, at least {} are recommended",
                            self.config.min_release_notice_days
                        )),
                );
            }
        }
    }

    fn check_languages(&self, release: &Release, report: &mut QcReport) {
        let languages: BTreeSet<String> = release
            .tracks
            .iter()
            .filter_map(|t| t.audio_language.as_deref())
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        if languages.len() > self.config.max_distinct_languages {
            report.push(Issue::warning(IssueCode::MixedLanguages, "tracks"));
        }
    }
}

/// The language a track title is written in: lyrics first, then metadata.
fn title_language(track: &Track) -> Option<&str> {
    [&track.audio_language, &track.metadata_language]
        .into_iter()
        .filter_map(|language| language.as_deref())
        .find(|language| !language.trim().is_empty())
}

/// The tracks' title language when they all agree on one.
fn release_title_language(release: &Release) -> Option<&str> {
    let mut languages = release.tracks.iter().filter_map(title_language);
    let first = languages.next()?;
    languages
        .all(|language| language.trim().eq_ignore_ascii_case(first.trim()))
        .then_some(first)
}

/// QC with default rules and no time-dependent checks.
pub fn validate_submission(release: &Release) -> QcReport {
    QcValidator::default().validate(release)
}

fn check_title_tracks(release: &Release, report: &mut QcReport) {
    if release.tracks.is_empty() {
        report.push(Issue::error(IssueCode::NoTracks, "tracks"));
        report.push(Issue::error(IssueCode::NoTitleTrack, "tracks"));
        return;
    }
    match release.title_tracks().count() {
        0 => report.push(Issue::error(IssueCode::NoTitleTrack, "tracks")),
        1 => {}
        _ => report.push(Issue::warning(IssueCode::MultipleTitleTracks, "tracks")),
    }
}

/// One error for the first repeated ISRC, however many tracks share it.
fn check_duplicate_isrc(release: &Release, report: &mut QcReport) {
    let mut seen = HashSet::new();
    for (index, track) in release.tracks.iter().enumerate() {
        let Some(isrc) = track.isrc.as_deref() else { continue };
        let normalized = normalize_isrc(isrc);
        if normalized.is_empty() {
            continue;
        }
        if !seen.insert(normalized.clone()) {
            report.push(
                Issue::error(IssueCode::DuplicateIsrc, format!("tracks[{index}].isrc"))
                    .with_message(format!("ISRC {normalized} is used on more than one track")),
            );
            return;
        }
    }
}

fn check_parental_advisory(release: &Release, report: &mut QcReport) {
    let has_explicit = release.tracks.iter().any(|t| t.explicit_content);
    let has_clean_version = release.tracks.iter().any(|t| {
        t.version
            .as_deref()
            .map(|v| v.trim().eq_ignore_ascii_case("clean"))
            .unwrap_or(false)
    });

    if has_explicit && release.parental_advisory == ParentalAdvisory::None {
        report.push(Issue::warning(
            IssueCode::ExplicitContentWithoutAdvisory,
            "parental_advisory",
        ));
    }
    if !has_explicit && release.parental_advisory == ParentalAdvisory::Explicit {
        report.push(Issue::warning(
            IssueCode::AdvisoryWithoutExplicitContent,
            "parental_advisory",
        ));
    }
    if has_clean_version && !has_explicit {
        report.push(Issue::warning(IssueCode::CleanVersionWithoutExplicit, "tracks"));
    }
}

fn check_files(release: &Release, report: &mut QcReport) {
    if release.files.cover_image.is_none() {
        report.push(Issue::error(IssueCode::CoverImageRequired, "files.cover_image"));
    }
    let audio = release.files.audio_files.len();
    let tracks = release.tracks.len();
    if audio != tracks {
        report.push(
            Issue::error(IssueCode::AudioFileCountMismatch, "files.audio_files")
                .with_message(format!("{audio} audio files for {tracks} tracks")),
        );
    }
}

fn base_title(title: &str) -> String {
    VERSION_SUFFIX_REGEX
        .replace(title, "")
        .trim()
        .nfc()
        .collect::<String>()
        .to_lowercase()
}

fn check_format(release: &Release, report: &mut QcReport) {
    let count = release.tracks.len();
    if let Some(expected) = AlbumType::expected_for_track_count(count) {
        if expected != release.album_type {
            report.push(
                Issue::warning(IssueCode::IncorrectFormat, "album_type").with_suggestion(format!(
                    "{count} tracks should be released as {expected}"
                )),
            );
        }
    }

    if (1..=3).contains(&count) {
        let album_base = base_title(&release.title);
        for (index, track) in release.tracks.iter().enumerate() {
            let track_base = base_title(&track.title);
            if !track_base.is_empty() && track_base != album_base {
                report.push(Issue::warning(
                    IssueCode::SingleTitleMismatch,
                    format!("tracks[{index}].title"),
                ));
            }
        }
    }
}

fn check_territories(release: &Release, report: &mut QcReport) {
    if let TerritorySelection::Selected(countries) = &release.territories {
        if countries.is_empty() {
            report.push(Issue::warning(IssueCode::EmptyTerritorySelection, "territories"));
        }
    }
    for (dsp, override_) in &release.dsp_territories {
        if override_.territory_type == OverrideType::Custom && override_.territories.is_empty() {
            report.push(
                Issue::warning(IssueCode::EmptyDspOverride, format!("dsp_territories.{dsp}"))
                    .with_message(format!("custom territory list for {dsp} is empty")),
            );
        }
    }
}

fn check_credits(release: &Release, report: &mut QcReport) {
    if release.tracks.is_empty() {
        return;
    }
    let contributors = || release.tracks.iter().flat_map(|t| t.contributors.iter());
    if !contributors().any(|c| c.has_role("composer")) {
        report.push(Issue::info(IssueCode::MissingComposer, "tracks"));
    }
    if !contributors().any(|c| c.has_role("lyricist")) {
        report.push(Issue::info(IssueCode::MissingLyricist, "tracks"));
    }
    if !release.tracks.iter().any(|t| t.main_artists().next().is_some()) {
        report.push(Issue::info(IssueCode::MissingMainArtist, "tracks"));
    }
}
