// SPDX-License-Identifier: GPL-3.0-or-later
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

pub mod reference;

// ============================================================================
// Value Objects & IDs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseId(pub Uuid);

impl ReleaseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ReleaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub Uuid);

impl TrackId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier handed back by the submission service once a release is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two-letter country code, stored upper-case.
///
/// Codes outside the continent tables are accepted as-is; membership in the
/// reference data is never required to be part of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CountryCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CountryCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub language: String,
    pub value: String,
}

impl Translation {
    pub fn new(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            value: value.into(),
        }
    }
}

/// Local wall-clock release moment as entered in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMoment {
    pub date: NaiveDate,
    /// `hh:mm AM/PM`, or `HH:MM` 24-hour.
    pub time: String,
    pub timezone: String,
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Single,
    Ep,
    Album,
}

impl AlbumType {
    /// Distributor classification by track count: 1-3 single, 4-6 EP, 7+ album.
    pub fn expected_for_track_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1..=3 => Some(Self::Single),
            4..=6 => Some(Self::Ep),
            _ => Some(Self::Album),
        }
    }
}

impl std::fmt::Display for AlbumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Ep => write!(f, "EP"),
            Self::Album => write!(f, "Album"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentalAdvisory {
    #[default]
    None,
    Explicit,
    Clean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistRole {
    #[default]
    Main,
    Featuring,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "countries", rename_all = "lowercase")]
pub enum TerritorySelection {
    #[default]
    World,
    Selected(BTreeSet<CountryCode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideType {
    #[default]
    Default,
    Custom,
}

/// Per-DSP deviation from the release's territory selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DspTerritoryOverride {
    pub territory_type: OverrideType,
    #[serde(default)]
    pub territories: BTreeSet<CountryCode>,
}

impl DspTerritoryOverride {
    pub fn custom(territories: impl IntoIterator<Item = CountryCode>) -> Self {
        Self {
            territory_type: OverrideType::Custom,
            territories: territories.into_iter().collect(),
        }
    }
}

// ============================================================================
// Entities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    #[serde(default)]
    pub role: ArtistRole,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub spotify_id: Option<String>,
    #[serde(default)]
    pub apple_music_id: Option<String>,
}

impl Artist {
    pub fn new(name: impl Into<String>, role: ArtistRole) -> Self {
        Self {
            name: name.into(),
            role,
            translations: Vec::new(),
            spotify_id: None,
            apple_music_id: None,
        }
    }

    pub fn main(name: impl Into<String>) -> Self {
        Self::new(name, ArtistRole::Main)
    }

    pub fn featuring(name: impl Into<String>) -> Self {
        Self::new(name, ArtistRole::Featuring)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
    /// Keys from [`reference::taxonomy::CONTRIBUTOR_ROLES`].
    pub roles: Vec<String>,
    #[serde(default)]
    pub instruments: Vec<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub apple_music_url: Option<String>,
}

impl Contributor {
    pub fn new<R, S>(name: impl Into<String>, roles: R) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            translations: Vec::new(),
            roles: roles.into_iter().map(Into::into).collect(),
            instruments: Vec::new(),
            spotify_url: None,
            apple_music_url: None,
        }
    }

    pub fn has_role(&self, key: &str) -> bool {
        self.roles.iter().any(|role| role.eq_ignore_ascii_case(key))
    }

    /// Composer and lyricist credits must carry a full name.
    pub fn is_songwriter(&self) -> bool {
        self.has_role("composer") || self.has_role("lyricist")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: TrackId,
    pub title: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub isrc: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub subgenre: Option<String>,
    #[serde(default)]
    pub alternate_genre: Option<String>,
    #[serde(default)]
    pub alternate_subgenre: Option<String>,
    #[serde(default)]
    pub audio_language: Option<String>,
    #[serde(default)]
    pub metadata_language: Option<String>,
    #[serde(default)]
    pub explicit_content: bool,
    #[serde(default)]
    pub is_title: bool,
    #[serde(default)]
    pub dolby_atmos: bool,
    #[serde(default = "default_true")]
    pub stereo: bool,
    #[serde(default)]
    pub preview_start: Option<u32>,
    #[serde(default)]
    pub preview_length: Option<u32>,
    #[serde(default)]
    pub custom_release: Option<ReleaseMoment>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    /// Free-text featuring line as typed, e.g. "feat. Jane Doe".
    #[serde(default)]
    pub featuring: Option<String>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
}

fn default_true() -> bool {
    true
}

impl Track {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TrackId::new(),
            title: title.into(),
            translations: Vec::new(),
            version: None,
            isrc: None,
            genre: None,
            subgenre: None,
            alternate_genre: None,
            alternate_subgenre: None,
            audio_language: None,
            metadata_language: None,
            explicit_content: false,
            is_title: false,
            dolby_atmos: false,
            stereo: true,
            preview_start: None,
            preview_length: Some(30),
            custom_release: None,
            artists: Vec::new(),
            featuring: None,
            contributors: Vec::new(),
        }
    }

    pub fn main_artists(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().filter(|a| a.role == ArtistRole::Main)
    }

    pub fn featuring_artists(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().filter(|a| a.role == ArtistRole::Featuring)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

impl FileRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: None,
            size_bytes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReleaseFiles {
    #[serde(default)]
    pub cover_image: Option<FileRef>,
    #[serde(default)]
    pub audio_files: Vec<FileRef>,
}

/// Aggregate root of a submission session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub id: ReleaseId,
    pub title: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
    pub album_type: AlbumType,
    #[serde(default)]
    pub consumer_release_date: Option<NaiveDate>,
    #[serde(default)]
    pub original_release_date: Option<NaiveDate>,
    #[serde(default)]
    pub release_time: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub pre_order_date: Option<NaiveDate>,
    #[serde(default)]
    pub copyright_year: Option<String>,
    #[serde(default)]
    pub copyright_text: Option<String>,
    #[serde(default)]
    pub phonogram_year: Option<String>,
    #[serde(default)]
    pub phonogram_text: Option<String>,
    #[serde(default)]
    pub territories: TerritorySelection,
    #[serde(default)]
    pub dsp_territories: BTreeMap<String, DspTerritoryOverride>,
    #[serde(default)]
    pub parental_advisory: ParentalAdvisory,
    #[serde(default)]
    pub upc: Option<String>,
    #[serde(default)]
    pub platforms: BTreeSet<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub files: ReleaseFiles,
}

impl Release {
    pub fn new(title: impl Into<String>, album_type: AlbumType) -> Self {
        Self {
            id: ReleaseId::new(),
            title: title.into(),
            translations: Vec::new(),
            album_type,
            consumer_release_date: None,
            original_release_date: None,
            release_time: None,
            timezone: None,
            pre_order_date: None,
            copyright_year: None,
            copyright_text: None,
            phonogram_year: None,
            phonogram_text: None,
            territories: TerritorySelection::World,
            dsp_territories: BTreeMap::new(),
            parental_advisory: ParentalAdvisory::None,
            upc: None,
            platforms: BTreeSet::new(),
            tracks: Vec::new(),
            files: ReleaseFiles::default(),
        }
    }

    pub fn title_tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.is_title)
    }

    /// The title track, if exactly one track carries the flag.
    pub fn title_track(&self) -> Option<&Track> {
        let mut iter = self.title_tracks();
        match (iter.next(), iter.next()) {
            (Some(track), None) => Some(track),
            _ => None,
        }
    }

    /// Marks `id` as the only title track. Returns false if no such track exists.
    pub fn set_title_track(&mut self, id: TrackId) -> bool {
        if !self.tracks.iter().any(|t| t.id == id) {
            return false;
        }
        for track in &mut self.tracks {
            track.is_title = track.id == id;
        }
        true
    }

    /// Moves the track at `from` to position `to`, shifting the others.
    pub fn move_track(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tracks.len() || to >= self.tracks.len() {
            return false;
        }
        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);
        true
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Release-level local moment, when date, time and zone are all present.
    pub fn consumer_release(&self) -> Option<ReleaseMoment> {
        Some(ReleaseMoment {
            date: self.consumer_release_date?,
            time: self.release_time.clone()?,
            timezone: self.timezone.clone()?,
        })
    }
}

// ============================================================================
// QC Issues
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Stable identifier of a QC rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    Required,
    DoubleSpaces,
    LeadingTrailingSpaces,
    EmojiInTitle,
    PromotionalText,
    TitleCase,
    SentenceCase,
    GermanOrthography,
    UnmatchedBrackets,
    InvalidCharacters,
    GenericArtistName,
    MisleadingArtistName,
    AkaInArtistName,
    AbbreviationInArtistName,
    NameTooLong,
    IncompleteName,
    InitialsOnly,
    ReversedName,
    SingleTokenName,
    FeaturingFormat,
    FeaturingInconsistent,
    ForbiddenVersionTerm,
    VersionDuplicate,
    VersionCapitalization,
    VersionFormat,
    IsrcFormat,
    UpcFormat,
    CopyrightYearFormat,
    FutureCopyrightYear,
    CopyrightSymbolIncluded,
    ExplicitFlagMismatch,
    CleanVersionMarkedExplicit,
    NoTitleTrack,
    MultipleTitleTracks,
    DuplicateIsrc,
    ExplicitContentWithoutAdvisory,
    AdvisoryWithoutExplicitContent,
    CleanVersionWithoutExplicit,
    PreOrderNotBeforeRelease,
    PastReleaseDate,
    ShortReleaseNotice,
    MissingReleaseDate,
    CoverImageRequired,
    AudioFileCountMismatch,
    IncorrectFormat,
    SingleTitleMismatch,
    MixedLanguages,
    NoAudioFormat,
    EmptyTerritorySelection,
    EmptyDspOverride,
    UnknownGenre,
    UnknownContributorRole,
    UnknownInstrument,
    MissingComposer,
    MissingLyricist,
    MissingMainArtist,
    NoTracks,
}

impl IssueCode {
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "a value is required",
            Self::DoubleSpaces => "contains consecutive spaces",
            Self::LeadingTrailingSpaces => "has leading or trailing whitespace",
            Self::EmojiInTitle => "titles must not contain emoji",
            Self::PromotionalText => "promotional wording is not allowed",
            Self::TitleCase => "English titles should use title case",
            Self::SentenceCase => "titles in this language should use sentence case",
            Self::GermanOrthography => "German words should use umlauts and sharp s",
            Self::UnmatchedBrackets => "brackets are not balanced",
            Self::InvalidCharacters => "contains characters that are not allowed",
            Self::GenericArtistName => "generic artist names are rejected by stores",
            Self::MisleadingArtistName => "collaborators must be credited as separate artists",
            Self::AkaInArtistName => "aliases (aka) should not be part of the artist name",
            Self::AbbreviationInArtistName => "abbreviations must be written out in artist names",
            Self::NameTooLong => "name exceeds the maximum length",
            Self::IncompleteName => "composers and lyricists need a full name",
            Self::InitialsOnly => "use the full name instead of initials",
            Self::ReversedName => "write names as \"First Last\", not \"Last, First\"",
            Self::SingleTokenName => "composer and lyricist credits should include first and last name",
            Self::FeaturingFormat => "featured artists should be prefixed with \"feat.\"",
            Self::FeaturingInconsistent => "use \"feat.\" consistently",
            Self::ForbiddenVersionTerm => "original versions must not carry a version label",
            Self::VersionDuplicate => "the version is already part of the title",
            Self::VersionCapitalization => "version label is not capitalized correctly",
            Self::VersionFormat => "versions are displayed in parentheses after the title",
            Self::IsrcFormat => "ISRC does not look like CC-XXX-YY-NNNNN",
            Self::UpcFormat => "UPC must be 12 or 13 digits",
            Self::CopyrightYearFormat => "copyright year must be a four digit year",
            Self::FutureCopyrightYear => "copyright year is in the future",
            Self::CopyrightSymbolIncluded => "the copyright symbol is added automatically",
            Self::ExplicitFlagMismatch => "title mentions explicit content but the track is not flagged explicit",
            Self::CleanVersionMarkedExplicit => "clean versions must not be flagged explicit",
            Self::NoTitleTrack => "no title track selected",
            Self::MultipleTitleTracks => "multiple title tracks selected",
            Self::DuplicateIsrc => "the same ISRC is used on more than one track",
            Self::ExplicitContentWithoutAdvisory => "explicit tracks present but parental advisory is none",
            Self::AdvisoryWithoutExplicitContent => "parental advisory set but no track is explicit",
            Self::CleanVersionWithoutExplicit => "clean versions listed without an explicit counterpart",
            Self::PreOrderNotBeforeRelease => "pre-order date must be before the release date",
            Self::PastReleaseDate => "release date is in the past",
            Self::ShortReleaseNotice => "release date is less than the recommended notice away",
            Self::MissingReleaseDate => "consumer release date is required",
            Self::CoverImageRequired => "cover image is required",
            Self::AudioFileCountMismatch => "number of audio files does not match the track count",
            Self::IncorrectFormat => "album type does not match the track count",
            Self::SingleTitleMismatch => "single tracks must share the release title",
            Self::MixedLanguages => "tracks use many different languages",
            Self::NoAudioFormat => "select stereo, Dolby Atmos, or both",
            Self::EmptyTerritorySelection => "no territories selected",
            Self::EmptyDspOverride => "custom DSP territory list is empty",
            Self::UnknownGenre => "genre is not in the distributor list",
            Self::UnknownContributorRole => "unknown contributor role",
            Self::UnknownInstrument => "unknown instrument",
            Self::MissingComposer => "no composer credited on the release",
            Self::MissingLyricist => "no lyricist credited on the release",
            Self::MissingMainArtist => "no main artist credited on the release",
            Self::NoTracks => "release has no tracks",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub code: IssueCode,
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, code: IssueCode, field: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            field: field.into(),
            message: code.message().to_string(),
            suggestion: None,
        }
    }

    pub fn error(code: IssueCode, field: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, field)
    }

    pub fn warning(code: IssueCode, field: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, field)
    }

    pub fn info(code: IssueCode, field: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, field)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Re-roots the issue's field path, e.g. `title` -> `tracks[2].title`.
    pub fn scoped(mut self, prefix: &str) -> Self {
        self.field = format!("{prefix}.{}", self.field);
        self
    }
}

/// QC outcome partitioned by severity. Derived fresh on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QcReport {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub info: Vec<Issue>,
}

impl QcReport {
    pub fn push(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Info => self.info.push(issue),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.info.iter())
    }

    pub fn contains(&self, code: IssueCode) -> bool {
        self.iter().any(|issue| issue.code == code)
    }

    pub fn count(&self, code: IssueCode) -> usize {
        self.iter().filter(|issue| issue.code == code).count()
    }
}

impl Extend<Issue> for QcReport {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        for issue in iter {
            self.push(issue);
        }
    }
}

// ============================================================================
// Domain Events
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent<TPayload> {
    pub name: &'static str,
    pub occurred_at: DateTime<Utc>,
    pub payload: TPayload,
}

impl<TPayload> DomainEvent<TPayload> {
    pub fn new(name: &'static str, payload: TPayload) -> Self {
        Self {
            name,
            occurred_at: Utc::now(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseSubmittedPayload {
    pub release_id: ReleaseId,
    pub submission_id: SubmissionId,
    pub track_count: usize,
    pub warning_count: usize,
}

pub type ReleaseSubmitted = DomainEvent<ReleaseSubmittedPayload>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseSubmissionFailedPayload {
    pub release_id: ReleaseId,
    pub reason: String,
}

pub type ReleaseSubmissionFailed = DomainEvent<ReleaseSubmissionFailedPayload>;
