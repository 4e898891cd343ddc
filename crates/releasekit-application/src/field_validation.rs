// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-field QC rules.
//!
//! Every function here is total: a value goes in, a (possibly empty) list of
//! [`Issue`]s comes out. Field paths on the returned issues are relative
//! (`title`, `name`, `isrc`); the submission aggregator re-roots them under
//! the owning track or artist.

use lazy_static::lazy_static;
use regex::Regex;
use releasekit_config::QcConfig;
use releasekit_domain::{Issue, IssueCode, Track};
use serde::{Deserialize, Serialize};

const MINOR_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
];

const GENERIC_ARTIST_NAMES: &[&str] = &[
    "various artists",
    "various",
    "unknown artist",
    "unknown",
    "artist",
    "tbd",
    "tba",
    "n/a",
    "none",
    "untitled",
];

/// Words that credit a second act inside one artist name.
const MISLEADING_ARTIST_WORDS: &[&str] = &["featuring", "with", "versus", "vs", "presents"];

const ARTIST_ABBREVIATIONS: &[(&str, &str)] = &[
    ("ft.", "featuring"),
    ("feat.", "featuring"),
    ("vs.", "versus"),
    ("pres.", "presents"),
];

const FORBIDDEN_VERSIONS: &[&str] = &[
    "original",
    "original mix",
    "original version",
    "studio version",
    "album version",
];

const CANONICAL_VERSIONS: &[(&str, &str)] = &[
    ("remix", "Remix"),
    ("acoustic", "Acoustic"),
    ("live", "Live"),
    ("instrumental", "Instrumental"),
    ("demo", "Demo"),
    ("radio edit", "Radio Edit"),
    ("extended", "Extended Mix"),
    ("extended mix", "Extended Mix"),
    ("clean", "Clean"),
    ("explicit", "Explicit"),
    ("remastered", "Remastered"),
    ("unplugged", "Unplugged"),
];

const FEATURING_PREFIXES: &[&str] = &["feat.", "feat", "ft.", "ft", "featuring", "featuring."];

const FRENCH_ARTICLES: &[&str] = &["le", "la", "les", "un", "une", "des", "du", "de"];
const ITALIAN_ARTICLES: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "del", "dello", "della", "dei",
    "degli", "delle",
];
const SPANISH_ARTICLES: &[&str] = &["el", "la", "los", "las", "un", "una", "unos", "unas", "del", "al"];

/// Transliterations that German titles should spell with umlauts or sharp s.
const GERMAN_SPELLINGS: &[(&str, &str)] = &[
    ("fuer", "für"),
    ("ueber", "über"),
    ("koennen", "können"),
    ("moechte", "möchte"),
    ("waehrend", "während"),
    ("grosse", "große"),
    ("strasse", "straße"),
];

const ARTIST_FORBIDDEN_CHARS: &[char] = &['<', '>', '{', '}', '[', ']', '\\', '|', '^', '`', '~'];
const CONTRIBUTOR_FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

lazy_static! {
    static ref DOUBLE_SPACE_REGEX: Regex = Regex::new(r" {2,}").expect("valid double space regex");
    static ref PROMOTIONAL_REGEX: Regex = Regex::new(
        r"(?i)\b(out now|available now|stream now|pre-order|free download|digital download|limited edition|exclusive|click here|bonus track|new single|new album|must have)\b"
    )
    .expect("valid promotional regex");
    static ref ISRC_REGEX: Regex =
        Regex::new(r"^[A-Z]{2}[A-Z0-9]{3}\d{7}$").expect("valid isrc regex");
    static ref COPYRIGHT_YEAR_REGEX: Regex =
        Regex::new(r"^(19|20)\d{2}$").expect("valid copyright year regex");
    static ref INITIALS_REGEX: Regex =
        Regex::new(r"^[A-Z]\.[A-Z]\.?$").expect("valid initials regex");
    static ref AKA_REGEX: Regex =
        Regex::new(r"(?i)(^|\s)(aka|a\.k\.a\.?)(\s|$)").expect("valid aka regex");
    static ref TRAILING_PARENS_REGEX: Regex =
        Regex::new(r"\s*\([^)]+\)\s*$").expect("valid trailing parens regex");
    static ref GERMAN_SPELLING_REGEXES: Vec<(Regex, &'static str)> = GERMAN_SPELLINGS
        .iter()
        .map(|(wrong, right)| {
            let regex = Regex::new(&format!("(?i){wrong}")).expect("valid german spelling regex");
            (regex, *right)
        })
        .collect();
}

/// Languages whose titles follow their own casing conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleLanguage {
    English,
    French,
    Italian,
    Spanish,
    Swedish,
    Norwegian,
    Danish,
    German,
}

impl TitleLanguage {
    /// Accepts ISO 639-1/639-2 codes (optionally with a region, `fr-CA`) and
    /// English language names. Anything else yields `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        let language = match primary {
            "en" | "eng" | "english" => Self::English,
            "fr" | "fra" | "fre" | "french" => Self::French,
            "it" | "ita" | "italian" => Self::Italian,
            "es" | "spa" | "spanish" => Self::Spanish,
            "sv" | "swe" | "swedish" => Self::Swedish,
            "no" | "nb" | "nn" | "nor" | "nob" | "nno" | "norwegian" => Self::Norwegian,
            "da" | "dan" | "danish" => Self::Danish,
            "de" | "deu" | "ger" | "german" => Self::German,
            _ => return None,
        };
        Some(language)
    }

    fn uses_sentence_case(self) -> bool {
        matches!(
            self,
            Self::French | Self::Italian | Self::Spanish | Self::Swedish | Self::Norwegian | Self::Danish
        )
    }

    fn articles(self) -> &'static [&'static str] {
        match self {
            Self::French => FRENCH_ARTICLES,
            Self::Italian => ITALIAN_ARTICLES,
            Self::Spanish => SPANISH_ARTICLES,
            _ => &[],
        }
    }
}

impl std::fmt::Display for TitleLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::French => write!(f, "French"),
            Self::Italian => write!(f, "Italian"),
            Self::Spanish => write!(f, "Spanish"),
            Self::Swedish => write!(f, "Swedish"),
            Self::Norwegian => write!(f, "Norwegian"),
            Self::Danish => write!(f, "Danish"),
            Self::German => write!(f, "German"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    AlbumTitle,
    TrackTitle,
    ArtistName,
    ContributorName,
    Featuring,
    TrackVersion,
    Isrc,
    Upc,
    CopyrightYear,
    CLine,
    PLine,
}

impl FieldKind {
    /// Resolves the field names used by form clients. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let kind = match normalized.as_str() {
            "albumtitle" | "releasetitle" => Self::AlbumTitle,
            "tracktitle" | "title" => Self::TrackTitle,
            "artistname" | "artist" => Self::ArtistName,
            "contributorname" | "composer" | "lyricist" | "songwriter" => Self::ContributorName,
            "featuring" => Self::Featuring,
            "trackversion" | "version" => Self::TrackVersion,
            "isrc" => Self::Isrc,
            "upc" => Self::Upc,
            "copyrightyear" | "phonogramyear" => Self::CopyrightYear,
            "cline" | "copyrighttext" => Self::CLine,
            "pline" | "phonogramtext" => Self::PLine,
            _ => return None,
        };
        Some(kind)
    }

    pub fn field_name(self) -> &'static str {
        match self {
            Self::AlbumTitle | Self::TrackTitle => "title",
            Self::ArtistName | Self::ContributorName => "name",
            Self::Featuring => "featuring",
            Self::TrackVersion => "version",
            Self::Isrc => "isrc",
            Self::Upc => "upc",
            Self::CopyrightYear => "copyright_year",
            Self::CLine => "copyright_text",
            Self::PLine => "phonogram_text",
        }
    }
}

/// Field rule set parameterised by the QC configuration.
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub max_artist_name_length: usize,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::from(&QcConfig::default())
    }
}

impl From<&QcConfig> for FieldRules {
    fn from(config: &QcConfig) -> Self {
        Self {
            max_artist_name_length: config.max_artist_name_length,
        }
    }
}

impl FieldRules {
    pub fn validate(&self, kind: FieldKind, value: &str) -> Vec<Issue> {
        self.validate_in(kind, value, None)
    }

    /// Like [`FieldRules::validate`], with titles checked against the casing
    /// rules of `language`.
    pub fn validate_in(&self, kind: FieldKind, value: &str, language: Option<&str>) -> Vec<Issue> {
        let field = kind.field_name();
        match kind {
            FieldKind::AlbumTitle | FieldKind::TrackTitle => {
                validate_title_in(value, field, language)
            }
            FieldKind::ArtistName => self.validate_artist_name(value, field),
            FieldKind::ContributorName => validate_contributor_name(value, field),
            FieldKind::Featuring => validate_featuring(value, field),
            FieldKind::TrackVersion => validate_version("", value, field),
            FieldKind::Isrc => validate_isrc(value, field),
            FieldKind::Upc => validate_upc(value, field),
            FieldKind::CopyrightYear => validate_copyright_year(value, field),
            FieldKind::CLine => validate_rights_line(value, field, &["©", "(C)", "(c)"]),
            FieldKind::PLine => validate_rights_line(value, field, &["℗", "(P)", "(p)"]),
        }
    }

    pub fn validate_artist_name(&self, name: &str, field: &str) -> Vec<Issue> {
        if name.trim().is_empty() {
            return vec![Issue::error(IssueCode::Required, field)];
        }

        let mut issues = whitespace_issues(name, field);

        if name.contains(ARTIST_FORBIDDEN_CHARS) {
            let cleaned: String = name
                .chars()
                .filter(|c| !ARTIST_FORBIDDEN_CHARS.contains(c))
                .collect();
            issues.push(Issue::error(IssueCode::InvalidCharacters, field).with_suggestion(cleaned));
        }

        if PROMOTIONAL_REGEX.is_match(name) {
            issues.push(Issue::error(IssueCode::PromotionalText, field));
        }

        let lowered = name.trim().to_lowercase();
        if GENERIC_ARTIST_NAMES.contains(&lowered.as_str()) {
            issues.push(Issue::error(IssueCode::GenericArtistName, field));
        }

        let words: Vec<&str> = lowered.split_whitespace().collect();
        if words.iter().any(|w| MISLEADING_ARTIST_WORDS.contains(w)) {
            issues.push(Issue::error(IssueCode::MisleadingArtistName, field));
        }

        for (abbreviation, full) in ARTIST_ABBREVIATIONS {
            if words.contains(abbreviation) {
                let expanded = name
                    .split_whitespace()
                    .map(|w| {
                        if w.eq_ignore_ascii_case(abbreviation) {
                            *full
                        } else {
                            w
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                issues.push(
                    Issue::error(IssueCode::AbbreviationInArtistName, field)
                        .with_suggestion(expanded),
                );
            }
        }

        if AKA_REGEX.is_match(name) {
            issues.push(Issue::warning(IssueCode::AkaInArtistName, field));
        }

        let length = name.chars().count();
        if length > self.max_artist_name_length {
            issues.push(Issue::error(IssueCode::NameTooLong, field).with_message(format!(
                "name is {length} characters, the maximum is {}",
                self.max_artist_name_length
            )));
        }

        issues
    }
}

/// Validate a single field with the default rule set.
pub fn validate_field(kind: FieldKind, value: &str) -> Vec<Issue> {
    FieldRules::default().validate(kind, value)
}

/// Like [`validate_field`] but keyed by the client's field name; unknown names produce no issues.
pub fn validate_field_named(name: &str, value: &str) -> Vec<Issue> {
    FieldKind::from_name(name)
        .map(|kind| validate_field(kind, value))
        .unwrap_or_default()
}

fn whitespace_issues(value: &str, field: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    if DOUBLE_SPACE_REGEX.is_match(value) {
        issues.push(
            Issue::error(IssueCode::DoubleSpaces, field)
                .with_suggestion(DOUBLE_SPACE_REGEX.replace_all(value, " ").into_owned()),
        );
    }
    if value.trim() != value {
        issues.push(
            Issue::error(IssueCode::LeadingTrailingSpaces, field).with_suggestion(value.trim()),
        );
    }
    issues
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F600..=0x1F64F
            | 0x1F300..=0x1F5FF
            | 0x1F680..=0x1F6FF
            | 0x1F1E0..=0x1F1FF
            | 0x1F900..=0x1F9FF
            | 0x2600..=0x26FF
            | 0x2700..=0x27BF
    )
}

fn is_minor_word(word: &str) -> bool {
    MINOR_WORDS.contains(&word.to_lowercase().as_str())
}

fn title_case(value: &str) -> String {
    value
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if index > 0 && is_minor_word(word) {
                return word.to_lowercase();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence_case(value: &str, language: TitleLanguage) -> (String, Vec<String>) {
    let articles = language.articles();
    let mut flagged = Vec::new();
    let words: Vec<String> = value
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            let lowered = word.to_lowercase();
            if index == 0 || articles.contains(&lowered.as_str()) {
                return word.to_string();
            }
            let starts_upper = word.chars().next().map(char::is_uppercase).unwrap_or(false);
            if starts_upper && word.chars().count() > 1 && word != word.to_uppercase() {
                flagged.push(word.to_string());
                return lowered;
            }
            word.to_string()
        })
        .collect();
    (words.join(" "), flagged)
}

/// Album and track titles with English title casing.
pub fn validate_title(title: &str, field: &str) -> Vec<Issue> {
    validate_title_in(title, field, None)
}

/// Album and track titles in a given language.
///
/// French, Italian, Spanish and the Scandinavian languages use sentence case.
/// German titles skip casing and get a spelling check instead. Unknown or
/// missing languages fall back to English title case.
pub fn validate_title_in(title: &str, field: &str, language: Option<&str>) -> Vec<Issue> {
    let language = language.and_then(TitleLanguage::from_tag);
    if title.trim().is_empty() {
        return vec![Issue::error(IssueCode::Required, field)];
    }

    let mut issues = whitespace_issues(title, field);

    if title.chars().any(is_emoji) {
        issues.push(Issue::error(IssueCode::EmojiInTitle, field));
    }

    if PROMOTIONAL_REGEX.is_match(title) {
        issues.push(Issue::error(IssueCode::PromotionalText, field));
    }

    match language {
        Some(TitleLanguage::German) => issues.extend(validate_german_orthography(title, field)),
        Some(language) if language.uses_sentence_case() => {
            let (suggestion, flagged) = sentence_case(title, language);
            if !flagged.is_empty() {
                issues.push(
                    Issue::warning(IssueCode::SentenceCase, field)
                        .with_message(format!(
                            "{language} titles use sentence case, check: {}",
                            flagged.join(", ")
                        ))
                        .with_suggestion(suggestion),
                );
            }
        }
        _ => {
            // Only words that start with an ASCII letter are subject to casing;
            // other scripts have no case.
            let lowercase_word = title.split(' ').enumerate().any(|(index, word)| {
                if index > 0 && is_minor_word(word) {
                    return false;
                }
                word.chars()
                    .next()
                    .map(|c| c.is_ascii_lowercase())
                    .unwrap_or(false)
            });
            if lowercase_word {
                issues.push(
                    Issue::warning(IssueCode::TitleCase, field).with_suggestion(title_case(title)),
                );
            }
        }
    }

    for (open, close) in [('(', ')'), ('[', ']'), ('{', '}')] {
        let opened = title.chars().filter(|c| *c == open).count();
        let closed = title.chars().filter(|c| *c == close).count();
        if opened != closed {
            issues.push(
                Issue::error(IssueCode::UnmatchedBrackets, field)
                    .with_message(format!("unbalanced '{open}{close}' brackets")),
            );
        }
    }

    issues
}

/// One warning per transliterated German word, each suggesting the text with
/// that word spelled properly. Capitalisation of the match is kept.
pub fn validate_german_orthography(text: &str, field: &str) -> Vec<Issue> {
    GERMAN_SPELLING_REGEXES
        .iter()
        .filter(|(regex, _)| regex.is_match(text))
        .map(|(regex, right)| {
            let corrected = regex.replace_all(text, |caps: &regex::Captures| {
                let capitalised = caps[0].chars().next().map(char::is_uppercase).unwrap_or(false);
                if capitalised {
                    let mut chars = right.chars();
                    chars
                        .next()
                        .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                        .unwrap_or_default()
                } else {
                    right.to_string()
                }
            });
            Issue::warning(IssueCode::GermanOrthography, field)
                .with_message(format!("use '{right}' instead of its transliteration"))
                .with_suggestion(corrected.into_owned())
        })
        .collect()
}

/// Composer and lyricist names, which stores expect as "First Last".
pub fn validate_contributor_name(name: &str, field: &str) -> Vec<Issue> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return vec![Issue::error(IssueCode::Required, field)];
    }

    let mut issues = whitespace_issues(name, field);

    if name.contains(CONTRIBUTOR_FORBIDDEN_CHARS) {
        issues.push(Issue::error(IssueCode::InvalidCharacters, field));
    }

    if trimmed.chars().count() == 1 {
        issues.push(Issue::error(IssueCode::IncompleteName, field));
        return issues;
    }

    if INITIALS_REGEX.is_match(trimmed) {
        issues.push(Issue::warning(IssueCode::InitialsOnly, field));
        return issues;
    }

    if let Some((last, first)) = trimmed.split_once(',') {
        let (last, first) = (last.trim(), first.trim());
        let mut issue = Issue::warning(IssueCode::ReversedName, field);
        if !last.is_empty() && !first.is_empty() && !first.contains(',') {
            issue = issue.with_suggestion(format!("{first} {last}"));
        }
        issues.push(issue);
        return issues;
    }

    // Hangul and other non-Latin names are commonly written without spaces.
    let single_latin_token = !trimmed.contains(char::is_whitespace)
        && trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '-' || c == '\'');
    if single_latin_token {
        issues.push(Issue::warning(IssueCode::SingleTokenName, field));
    }

    issues
}

/// The free-text "featuring" line of a track.
pub fn validate_featuring(featuring: &str, field: &str) -> Vec<Issue> {
    let trimmed = featuring.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.starts_with("feat. ") {
        return Vec::new();
    }

    let (head, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let head_lower = head.to_lowercase();
    if FEATURING_PREFIXES.contains(&head_lower.as_str()) {
        let rest = rest.trim();
        let mut issue = Issue::warning(IssueCode::FeaturingInconsistent, field);
        if !rest.is_empty() {
            issue = issue.with_suggestion(format!("feat. {rest}"));
        }
        return vec![issue];
    }

    vec![Issue::warning(IssueCode::FeaturingFormat, field).with_suggestion(format!("feat. {trimmed}"))]
}

/// Removes a leading "feat."/"ft."/"featuring" from a featuring line.
pub fn strip_featuring_prefix(featuring: &str) -> &str {
    let trimmed = featuring.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) if FEATURING_PREFIXES.contains(&head.to_lowercase().as_str()) => {
            rest.trim_start()
        }
        _ => trimmed,
    }
}

/// Version label of a track, checked against the track title.
pub fn validate_version(title: &str, version: &str, field: &str) -> Vec<Issue> {
    let version = version.trim();
    if version.is_empty() {
        return Vec::new();
    }
    let lowered = version.to_lowercase();

    if FORBIDDEN_VERSIONS.contains(&lowered.as_str()) {
        return vec![Issue::error(IssueCode::ForbiddenVersionTerm, field)
            .with_suggestion("leave the version empty for original recordings")];
    }

    let mut issues = Vec::new();

    if !title.is_empty() && title.to_lowercase().contains(&lowered) {
        issues.push(Issue::warning(IssueCode::VersionDuplicate, field));
    }

    if let Some((_, canonical)) = CANONICAL_VERSIONS.iter().find(|(key, _)| *key == lowered) {
        if version != *canonical {
            issues.push(
                Issue::warning(IssueCode::VersionCapitalization, field).with_suggestion(*canonical),
            );
        }
    }

    if !title.is_empty() && !TRAILING_PARENS_REGEX.is_match(title) {
        issues.push(
            Issue::info(IssueCode::VersionFormat, field)
                .with_suggestion(format!("{} ({version})", title.trim())),
        );
    }

    issues
}

/// Strips the separators people commonly type into ISRCs and upper-cases the rest.
pub fn normalize_isrc(isrc: &str) -> String {
    isrc.chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect::<String>()
        .to_ascii_uppercase()
}

/// ISRCs are free text; a malformed code is flagged but never blocks.
pub fn validate_isrc(isrc: &str, field: &str) -> Vec<Issue> {
    if isrc.trim().is_empty() {
        return Vec::new();
    }
    let normalized = normalize_isrc(isrc);
    if ISRC_REGEX.is_match(&normalized) {
        Vec::new()
    } else {
        vec![Issue::warning(IssueCode::IsrcFormat, field).with_suggestion("e.g. KRA402400001")]
    }
}

pub fn validate_upc(upc: &str, field: &str) -> Vec<Issue> {
    let upc = upc.trim();
    if upc.is_empty() {
        return Vec::new();
    }
    let digits_only = upc.chars().all(|c| c.is_ascii_digit());
    if digits_only && matches!(upc.len(), 12 | 13) {
        Vec::new()
    } else {
        vec![Issue::warning(IssueCode::UpcFormat, field)]
    }
}

pub fn validate_copyright_year(year: &str, field: &str) -> Vec<Issue> {
    let year = year.trim();
    if year.is_empty() || COPYRIGHT_YEAR_REGEX.is_match(year) {
        Vec::new()
    } else {
        vec![Issue::error(IssueCode::CopyrightYearFormat, field)]
    }
}

fn validate_rights_line(line: &str, field: &str, symbols: &[&str]) -> Vec<Issue> {
    if !symbols.iter().any(|symbol| line.contains(symbol)) {
        return Vec::new();
    }
    let stripped = symbols
        .iter()
        .fold(line.to_string(), |acc, symbol| acc.replace(symbol, ""));
    vec![Issue::warning(IssueCode::CopyrightSymbolIncluded, field).with_suggestion(stripped.trim())]
}

/// Explicit-content flag against what the title and version say.
pub fn validate_explicit_consistency(track: &Track) -> Vec<Issue> {
    let version = track.version.as_deref().unwrap_or("").trim().to_lowercase();
    let title = track.title.to_lowercase();
    let mut issues = Vec::new();

    if !track.explicit_content && (version == "explicit" || title.contains("explicit")) {
        issues.push(Issue::warning(IssueCode::ExplicitFlagMismatch, "explicit_content"));
    }
    if track.explicit_content && version == "clean" {
        issues.push(Issue::warning(IssueCode::CleanVersionMarkedExplicit, "explicit_content"));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use releasekit_domain::Severity;

    fn codes(issues: &[Issue]) -> Vec<IssueCode> {
        issues.iter().map(|i| i.code).collect()
    }

    #[test]
    fn unknown_field_names_yield_nothing() {
        assert!(validate_field_named("favouriteColour", "  x  ").is_empty());
        assert!(!validate_field_named("trackTitle", "  x  ").is_empty());
    }

    #[test]
    fn validation_is_deterministic() {
        let first = validate_field(FieldKind::ArtistName, "DJ  ft. Someone ");
        let second = validate_field(FieldKind::ArtistName, "DJ  ft. Someone ");
        assert_eq!(first, second);
    }

    #[test]
    fn title_whitespace_rules_carry_suggestions() {
        let issues = validate_field(FieldKind::TrackTitle, " Love  Song");
        let double = issues
            .iter()
            .find(|i| i.code == IssueCode::DoubleSpaces)
            .expect("double spaces flagged");
        assert_eq!(double.suggestion.as_deref(), Some(" Love Song"));
        let trim = issues
            .iter()
            .find(|i| i.code == IssueCode::LeadingTrailingSpaces)
            .expect("leading space flagged");
        assert_eq!(trim.suggestion.as_deref(), Some("Love  Song"));
    }

    #[test]
    fn clean_title_has_no_issues() {
        assert!(validate_field(FieldKind::AlbumTitle, "Songs of the Night").is_empty());
        assert!(validate_field(FieldKind::AlbumTitle, "밤의 노래").is_empty());
    }

    #[test]
    fn title_case_suggestion_keeps_minor_words_lowercase() {
        let issues = validate_field(FieldKind::TrackTitle, "the end of the road");
        let issue = issues
            .iter()
            .find(|i| i.code == IssueCode::TitleCase)
            .expect("title case warning");
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.suggestion.as_deref(), Some("The End of the Road"));
    }

    #[test]
    fn title_rejects_emoji_promo_and_brackets() {
        let issues = validate_field(FieldKind::TrackTitle, "Summer 🌞 (Out Now");
        let found = codes(&issues);
        assert!(found.contains(&IssueCode::EmojiInTitle));
        assert!(found.contains(&IssueCode::PromotionalText));
        assert!(found.contains(&IssueCode::UnmatchedBrackets));
    }

    #[test]
    fn empty_title_is_required() {
        assert_eq!(codes(&validate_field(FieldKind::TrackTitle, "   ")), vec![IssueCode::Required]);
    }

    #[test]
    fn artist_abbreviation_and_misleading_words() {
        let issues = validate_field(FieldKind::ArtistName, "Alpha ft. Beta");
        let abbreviation = issues
            .iter()
            .find(|i| i.code == IssueCode::AbbreviationInArtistName)
            .expect("abbreviation flagged");
        assert_eq!(abbreviation.suggestion.as_deref(), Some("Alpha featuring Beta"));

        let issues = validate_field(FieldKind::ArtistName, "Alpha with Beta");
        assert!(codes(&issues).contains(&IssueCode::MisleadingArtistName));
    }

    #[test]
    fn artist_collaborations_with_ampersand_are_allowed() {
        assert!(validate_field(FieldKind::ArtistName, "Simon & Garfunkel").is_empty());
        assert!(validate_field(FieldKind::ArtistName, "Sandra").is_empty());
    }

    #[test]
    fn generic_and_forbidden_artist_names() {
        assert!(codes(&validate_field(FieldKind::ArtistName, "Various Artists"))
            .contains(&IssueCode::GenericArtistName));
        let issues = validate_field(FieldKind::ArtistName, "Band<X>");
        let invalid = issues
            .iter()
            .find(|i| i.code == IssueCode::InvalidCharacters)
            .expect("invalid characters");
        assert_eq!(invalid.suggestion.as_deref(), Some("BandX"));
        assert!(codes(&validate_field(FieldKind::ArtistName, "Kim aka K")).contains(&IssueCode::AkaInArtistName));
    }

    #[test]
    fn artist_name_length_uses_configured_limit() {
        let rules = FieldRules {
            max_artist_name_length: 5,
        };
        let issues = rules.validate(FieldKind::ArtistName, "Abcdefg");
        assert_eq!(codes(&issues), vec![IssueCode::NameTooLong]);
    }

    #[test]
    fn contributor_reversed_name_is_a_warning_with_suggestion() {
        let issues = validate_field(FieldKind::ContributorName, "Smith, John");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::ReversedName);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].suggestion.as_deref(), Some("John Smith"));
    }

    #[test]
    fn contributor_single_token_and_initials() {
        assert_eq!(
            codes(&validate_field(FieldKind::ContributorName, "Smith")),
            vec![IssueCode::SingleTokenName]
        );
        assert_eq!(
            codes(&validate_field(FieldKind::ContributorName, "J.K.")),
            vec![IssueCode::InitialsOnly]
        );
        assert_eq!(
            codes(&validate_field(FieldKind::ContributorName, "J")),
            vec![IssueCode::IncompleteName]
        );
        assert!(validate_field(FieldKind::ContributorName, "John Smith").is_empty());
        assert!(validate_field(FieldKind::ContributorName, "김동욱").is_empty());
    }

    #[test]
    fn featuring_prefix_rules() {
        assert!(validate_field(FieldKind::Featuring, "feat. Jane").is_empty());
        let issues = validate_field(FieldKind::Featuring, "ft. Jane");
        assert_eq!(issues[0].code, IssueCode::FeaturingInconsistent);
        assert_eq!(issues[0].suggestion.as_deref(), Some("feat. Jane"));
        let issues = validate_field(FieldKind::Featuring, "Jane");
        assert_eq!(issues[0].code, IssueCode::FeaturingFormat);
        assert_eq!(issues[0].suggestion.as_deref(), Some("feat. Jane"));
    }

    #[test]
    fn featuring_prefix_is_stripped_case_insensitively() {
        assert_eq!(strip_featuring_prefix("feat. Jane Doe"), "Jane Doe");
        assert_eq!(strip_featuring_prefix("  FT.  Jane Doe, John Roe"), "Jane Doe, John Roe");
        assert_eq!(strip_featuring_prefix("Featuring Jane"), "Jane");
        assert_eq!(strip_featuring_prefix("Jane Doe"), "Jane Doe");
        assert_eq!(strip_featuring_prefix("Feather"), "Feather");
    }

    #[test]
    fn language_tags_resolve() {
        assert_eq!(TitleLanguage::from_tag("fr"), Some(TitleLanguage::French));
        assert_eq!(TitleLanguage::from_tag("fr-CA"), Some(TitleLanguage::French));
        assert_eq!(TitleLanguage::from_tag("Norwegian"), Some(TitleLanguage::Norwegian));
        assert_eq!(TitleLanguage::from_tag("deu"), Some(TitleLanguage::German));
        assert_eq!(TitleLanguage::from_tag("ko"), None);
    }

    #[test]
    fn sentence_case_languages_skip_title_case() {
        assert!(validate_title_in("La vie en rose", "title", Some("fr")).is_empty());
        assert!(validate_title_in("Det är vår", "title", Some("sv")).is_empty());

        let issues = validate_title_in("La Vie En Rose", "title", Some("french"));
        assert_eq!(codes(&issues), vec![IssueCode::SentenceCase]);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].suggestion.as_deref(), Some("La vie en rose"));
        assert!(issues[0].message.contains("Vie, En, Rose"));
    }

    #[test]
    fn sentence_case_keeps_articles_and_acronyms() {
        assert!(validate_title_in("Canzone della notte", "title", Some("it")).is_empty());
        assert!(validate_title_in("Amor en NYC", "title", Some("es")).is_empty());
    }

    #[test]
    fn unknown_language_falls_back_to_title_case() {
        let issues = validate_title_in("la vie en rose", "title", Some("ko"));
        assert!(codes(&issues).contains(&IssueCode::TitleCase));
        let issues = validate_title_in("la vie en rose", "title", None);
        assert!(codes(&issues).contains(&IssueCode::TitleCase));
    }

    #[test]
    fn german_titles_get_spelling_suggestions() {
        let issues = validate_title_in("Fuer die Strasse", "title", Some("de"));
        assert_eq!(
            codes(&issues),
            vec![IssueCode::GermanOrthography, IssueCode::GermanOrthography]
        );
        let suggestions: Vec<_> = issues.iter().filter_map(|i| i.suggestion.as_deref()).collect();
        assert!(suggestions.contains(&"Für die Strasse"));
        assert!(suggestions.contains(&"Fuer die Straße"));
        assert!(validate_title_in("Für dich", "title", Some("german")).is_empty());
    }

    #[test]
    fn field_rules_take_a_language() {
        let rules = FieldRules::default();
        assert!(rules
            .validate_in(FieldKind::TrackTitle, "La vie en rose", Some("fr"))
            .is_empty());
        assert!(!rules.validate(FieldKind::TrackTitle, "La vie en rose").is_empty());
    }

    #[test]
    fn version_rules() {
        assert_eq!(
            codes(&validate_version("Song", "Original Mix", "version")),
            vec![IssueCode::ForbiddenVersionTerm]
        );
        let issues = validate_version("Song", "remix", "version");
        assert!(codes(&issues).contains(&IssueCode::VersionCapitalization));
        assert!(codes(&issues).contains(&IssueCode::VersionFormat));
        assert!(codes(&validate_version("Song (Remix)", "Remix", "version"))
            .contains(&IssueCode::VersionDuplicate));
    }

    #[test]
    fn isrc_is_normalized_and_only_warned() {
        assert!(validate_field(FieldKind::Isrc, "kr-a40-24-00001").is_empty());
        let issues = validate_field(FieldKind::Isrc, "12345");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn upc_and_copyright_rules() {
        assert!(validate_field(FieldKind::Upc, "012345678905").is_empty());
        assert_eq!(codes(&validate_field(FieldKind::Upc, "12AB")), vec![IssueCode::UpcFormat]);
        assert!(validate_field(FieldKind::CopyrightYear, "2024").is_empty());
        assert_eq!(
            codes(&validate_field(FieldKind::CopyrightYear, "24")),
            vec![IssueCode::CopyrightYearFormat]
        );
        let issues = validate_field(FieldKind::CLine, "© 2024 Label");
        assert_eq!(issues[0].suggestion.as_deref(), Some("2024 Label"));
        assert!(validate_field(FieldKind::PLine, "2024 Label").is_empty());
    }

    #[test]
    fn explicit_consistency() {
        let mut track = Track::new("Song (Explicit)");
        assert_eq!(
            codes(&validate_explicit_consistency(&track)),
            vec![IssueCode::ExplicitFlagMismatch]
        );
        track.title = "Song".into();
        track.version = Some("Clean".into());
        track.explicit_content = true;
        assert_eq!(
            codes(&validate_explicit_consistency(&track)),
            vec![IssueCode::CleanVersionMarkedExplicit]
        );
    }
}
