// SPDX-License-Identifier: GPL-3.0-or-later

//! Versioned submission documents.
//!
//! Drafts saved by older clients use split Korean/English fields and a
//! nested layout (`v1`). They are normalized once into the canonical
//! [`Release`] (`v2`) when loaded; nothing downstream reads the legacy shape.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use releasekit_domain::{
    AlbumType, Artist, Contributor, CountryCode, FileRef, ParentalAdvisory, Release, ReleaseFiles,
    TerritorySelection, Track, Translation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::field_validation::strip_featuring_prefix;

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("document is not valid JSON for schema {schema}: {source}")]
    Json {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid date in {field}: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "lowercase")]
pub enum SubmissionDocument {
    V1(LegacySubmission),
    V2(Release),
}

impl SubmissionDocument {
    /// Reads a document, detecting untagged legacy drafts by their `album`/`artist` blocks.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|source| SchemaError::Json { schema: "unknown", source })?;

        let tagged = value.get("schema").and_then(|v| v.as_str()).map(str::to_string);
        let document = match tagged.as_deref() {
            Some(_) => serde_json::from_value(value)
                .map_err(|source| SchemaError::Json { schema: "tagged", source })?,
            None if value.get("album").is_some() && value.get("artist").is_some() => {
                SubmissionDocument::V1(
                    serde_json::from_value(value)
                        .map_err(|source| SchemaError::Json { schema: "v1", source })?,
                )
            }
            None => SubmissionDocument::V2(
                serde_json::from_value(value)
                    .map_err(|source| SchemaError::Json { schema: "v2", source })?,
            ),
        };
        debug!(target: "submission", version = document.version(), "submission document parsed");
        Ok(document)
    }

    pub fn version(&self) -> &'static str {
        match self {
            SubmissionDocument::V1(_) => "v1",
            SubmissionDocument::V2(_) => "v2",
        }
    }

    pub fn normalize(self) -> Result<Release> {
        match self {
            SubmissionDocument::V1(legacy) => {
                let release = legacy.into_release()?;
                info!(
                    target: "submission",
                    release_id = %release.id,
                    tracks = release.tracks.len(),
                    "migrated v1 submission"
                );
                Ok(release)
            }
            SubmissionDocument::V2(release) => Ok(release),
        }
    }
}

/// Parse and normalize in one step.
pub fn load_release(input: &str) -> Result<Release> {
    SubmissionDocument::from_json(input)?.normalize()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacySubmission {
    pub artist: LegacyArtist,
    pub album: LegacyAlbum,
    pub tracks: LegacyTrackList,
    pub release: LegacyRelease,
    pub files: LegacyFiles,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyArtist {
    pub name_ko: String,
    pub name_en: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyAlbum {
    pub title_ko: String,
    pub title_en: String,
    pub format: Option<String>,
}

/// Older drafts nest the track array one level down (`tracks.tracks`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyTrackList {
    Flat(Vec<LegacyTrack>),
    Nested { tracks: Vec<LegacyTrack> },
}

impl Default for LegacyTrackList {
    fn default() -> Self {
        LegacyTrackList::Flat(Vec::new())
    }
}

impl LegacyTrackList {
    fn into_vec(self) -> Vec<LegacyTrack> {
        match self {
            LegacyTrackList::Flat(tracks) | LegacyTrackList::Nested { tracks } => tracks,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyTrack {
    pub title_ko: String,
    pub title_en: String,
    pub featuring: String,
    pub composer: String,
    pub lyricist: String,
    pub arranger: String,
    pub isrc: String,
    pub genre: String,
    pub is_title: bool,
    pub explicit_content: bool,
    pub dolby_atmos: bool,
    pub preview_start: Option<u32>,
    pub preview_end: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyRelease {
    pub consumer_release_date: String,
    pub original_release_date: String,
    pub release_time: String,
    pub selected_timezone: String,
    pub copyright_year: String,
    pub c_rights: String,
    pub p_rights: String,
    pub upc: String,
    pub parental_advisory: String,
    pub pre_order_enabled: bool,
    pub pre_order_date: String,
    pub territory_type: String,
    pub territories: Vec<String>,
    pub distributors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyFiles {
    pub cover_image: Option<String>,
    pub audio_files: Vec<String>,
}

impl LegacySubmission {
    pub fn into_release(self) -> Result<Release> {
        let (title, translations) = localized(&self.album.title_ko, &self.album.title_en)
            .ok_or(SchemaError::MissingField("album.titleKo"))?;
        let main_artist = localized(&self.artist.name_ko, &self.artist.name_en).map(|(name, translations)| {
            let mut artist = Artist::main(name);
            artist.translations = translations;
            artist
        });

        let tracks = self
            .tracks
            .into_vec()
            .into_iter()
            .enumerate()
            .map(|(index, track)| track.into_track(index, main_artist.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let album_type = match self.album.format.as_deref().map(str::trim) {
            Some(format) if !format.is_empty() => parse_album_type(format)?,
            _ => AlbumType::expected_for_track_count(tracks.len()).unwrap_or(AlbumType::Single),
        };

        let mut release = Release::new(title, album_type);
        release.translations = translations;
        release.tracks = tracks;

        let legacy = self.release;
        release.consumer_release_date = parse_date("release.consumerReleaseDate", &legacy.consumer_release_date)?;
        release.original_release_date = parse_date("release.originalReleaseDate", &legacy.original_release_date)?;
        if legacy.pre_order_enabled {
            release.pre_order_date = parse_date("release.preOrderDate", &legacy.pre_order_date)?;
        }
        release.release_time = non_empty(&legacy.release_time);
        release.timezone = non_empty(&legacy.selected_timezone);
        release.copyright_year = non_empty(&legacy.copyright_year);
        release.copyright_text = non_empty(&legacy.c_rights);
        release.phonogram_year = release.copyright_year.clone();
        release.phonogram_text = non_empty(&legacy.p_rights);
        release.upc = non_empty(&legacy.upc);
        release.parental_advisory = parse_advisory(&legacy.parental_advisory)?;
        release.territories = match legacy.territory_type.trim().to_ascii_uppercase().as_str() {
            "" | "WORLDWIDE" | "WORLD" => TerritorySelection::World,
            _ => TerritorySelection::Selected(
                legacy.territories.iter().map(CountryCode::new).collect::<BTreeSet<_>>(),
            ),
        };
        release.platforms = legacy
            .distributors
            .iter()
            .map(|d| d.trim().to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        release.files = ReleaseFiles {
            cover_image: self.files.cover_image.as_deref().and_then(non_empty).map(FileRef::named),
            audio_files: self.files.audio_files.into_iter().map(FileRef::named).collect(),
        };

        Ok(release)
    }
}

impl LegacyTrack {
    fn into_track(self, index: usize, main_artist: Option<&Artist>) -> Result<Track> {
        let (title, translations) = localized(&self.title_ko, &self.title_en)
            .ok_or(SchemaError::MissingField("tracks[].titleKo"))?;
        debug!(target: "submission", index, title = %title, "migrating legacy track");

        let mut track = Track::new(title);
        track.translations = translations;
        track.isrc = non_empty(&self.isrc);
        track.genre = non_empty(&self.genre);
        track.is_title = self.is_title;
        track.explicit_content = self.explicit_content;
        track.dolby_atmos = self.dolby_atmos;
        track.preview_start = self.preview_start;
        if let (Some(start), Some(end)) = (self.preview_start, self.preview_end) {
            track.preview_length = end.checked_sub(start).filter(|len| *len > 0);
        }

        track.artists.extend(main_artist.cloned());
        track.featuring = non_empty(&self.featuring);
        track
            .artists
            .extend(split_names(strip_featuring_prefix(&self.featuring)).map(Artist::featuring));

        for (names, role) in [
            (&self.composer, "composer"),
            (&self.lyricist, "lyricist"),
            (&self.arranger, "arranger"),
        ] {
            for name in split_names(names) {
                match track.contributors.iter_mut().find(|c| c.name == name) {
                    Some(existing) => existing.roles.push(role.to_string()),
                    None => track.contributors.push(Contributor::new(name, [role])),
                }
            }
        }

        Ok(track)
    }
}

/// Primary value plus an English translation when both halves are present.
fn localized(ko: &str, en: &str) -> Option<(String, Vec<Translation>)> {
    match (non_empty(ko), non_empty(en)) {
        (Some(ko), Some(en)) if ko != en => Some((ko, vec![Translation::new("en", en)])),
        (Some(primary), _) | (None, Some(primary)) => Some((primary, Vec::new())),
        (None, None) => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn split_names(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn parse_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    // Some drafts store full ISO timestamps.
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| SchemaError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn parse_album_type(value: &str) -> Result<AlbumType> {
    match value.to_ascii_lowercase().as_str() {
        "single" => Ok(AlbumType::Single),
        "ep" | "mini" => Ok(AlbumType::Ep),
        "album" | "full" | "lp" => Ok(AlbumType::Album),
        _ => Err(SchemaError::InvalidValue {
            field: "album.format",
            value: value.to_string(),
        }),
    }
}

fn parse_advisory(value: &str) -> Result<ParentalAdvisory> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "none" => Ok(ParentalAdvisory::None),
        "explicit" => Ok(ParentalAdvisory::Explicit),
        "clean" => Ok(ParentalAdvisory::Clean),
        other => Err(SchemaError::InvalidValue {
            field: "release.parentalAdvisory",
            value: other.to_string(),
        }),
    }
}
