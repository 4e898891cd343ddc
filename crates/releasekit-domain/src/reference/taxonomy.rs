// SPDX-License-Identifier: GPL-3.0-or-later

//! Credit taxonomies: contributor roles, instruments and main genres.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Production,
    Engineering,
    Performance,
    Vocal,
    Direction,
    Composition,
    Technical,
    Video,
    Creative,
    Management,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributorRoleInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub category: RoleCategory,
}

pub const CONTRIBUTOR_ROLES: &[ContributorRoleInfo] = &[
    ContributorRoleInfo { key: "composer", label: "Composer", category: RoleCategory::Production },
    ContributorRoleInfo { key: "lyricist", label: "Lyricist", category: RoleCategory::Production },
    ContributorRoleInfo { key: "arranger", label: "Arranger", category: RoleCategory::Production },
    ContributorRoleInfo { key: "producer", label: "Producer", category: RoleCategory::Production },
    ContributorRoleInfo { key: "co_producer", label: "Co-Producer", category: RoleCategory::Production },
    ContributorRoleInfo { key: "executive_producer", label: "Executive Producer", category: RoleCategory::Production },
    ContributorRoleInfo { key: "assistant_producer", label: "Assistant Producer", category: RoleCategory::Production },
    ContributorRoleInfo { key: "post_producer", label: "Post-Producer", category: RoleCategory::Production },
    ContributorRoleInfo { key: "vocal_producer", label: "Vocal Producer", category: RoleCategory::Production },
    ContributorRoleInfo { key: "recording_engineer", label: "Recording Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "mixing_engineer", label: "Mixing Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "mastering_engineer", label: "Mastering Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "sound_engineer", label: "Sound Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "engineer", label: "Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "assistant_recording_engineer", label: "Assistant Recording Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "assistant_mixing_engineer", label: "Assistant Mixing Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "assistant_mastering_engineer", label: "Assistant Mastering Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "assistant_sound_engineer", label: "Assistant Sound Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "vocal_engineer", label: "Vocal Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "immersive_audio_engineer", label: "Immersive Audio Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "immersive_mixing_engineer", label: "Immersive Mixing Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "immersive_mastering_engineer", label: "Immersive Mastering Engineer", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "tonmeister", label: "Tonmeister", category: RoleCategory::Engineering },
    ContributorRoleInfo { key: "performer", label: "Performer", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "studio_musician", label: "Studio Musician", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "soloist", label: "Soloist", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "conductor", label: "Conductor", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "orchestra", label: "Orchestra", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "choir", label: "Choir", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "chorus", label: "Chorus", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "ensemble", label: "Ensemble", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "band", label: "Band", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "featuring", label: "Featuring", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "guest_vocals", label: "Guest Vocals", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "contributing_artist", label: "Contributing Artist", category: RoleCategory::Performance },
    ContributorRoleInfo { key: "rap", label: "Rap", category: RoleCategory::Vocal },
    ContributorRoleInfo { key: "mc", label: "MC", category: RoleCategory::Vocal },
    ContributorRoleInfo { key: "narrator", label: "Narrator", category: RoleCategory::Vocal },
    ContributorRoleInfo { key: "spoken_word", label: "Spoken Word", category: RoleCategory::Vocal },
    ContributorRoleInfo { key: "vocal_effects", label: "Vocal Effects", category: RoleCategory::Vocal },
    ContributorRoleInfo { key: "director", label: "Director", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "assistant_director", label: "Assistant Director", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "musical_director", label: "Musical Director", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "creative_director", label: "Creative Director", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "art_direction", label: "Art Direction", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "choir_conductor", label: "Choir Conductor", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "chorus_master", label: "Chorus Master", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "strings_conductor", label: "Strings Conductor", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "assistant_conductor", label: "Assistant Conductor", category: RoleCategory::Direction },
    ContributorRoleInfo { key: "assistant_composer", label: "Assistant Composer", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "orchestrator", label: "Orchestrator", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "adapter", label: "Adapter", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "writer", label: "Writer", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "author", label: "Author", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "playwright", label: "Playwright", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "librettist", label: "Librettist", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "translator", label: "Translator", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "liner_notes", label: "Liner Notes", category: RoleCategory::Composition },
    ContributorRoleInfo { key: "programmer", label: "Programmer", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "dj", label: "DJ", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "remixer", label: "Remixer", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "sampled_artist", label: "Sampled Artist", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "mixer", label: "Mixer", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "editor", label: "Editor", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "sound_editor", label: "Sound Editor", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "sound_effects", label: "Sound Effects", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "special_effects", label: "Special Effects", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "computer_graphic_creator", label: "Computer Graphic Creator", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "visual_effects_technician", label: "Visual Effects Technician", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "tape", label: "Tape", category: RoleCategory::Technical },
    ContributorRoleInfo { key: "video_director", label: "Video Director", category: RoleCategory::Video },
    ContributorRoleInfo { key: "video_producer", label: "Video Producer", category: RoleCategory::Video },
    ContributorRoleInfo { key: "cinematographer", label: "Cinematographer", category: RoleCategory::Video },
    ContributorRoleInfo { key: "camera_operator", label: "Camera Operator", category: RoleCategory::Video },
    ContributorRoleInfo { key: "lighting_director", label: "Lighting Director", category: RoleCategory::Video },
    ContributorRoleInfo { key: "gaffer", label: "Gaffer", category: RoleCategory::Video },
    ContributorRoleInfo { key: "key_grip", label: "Key Grip", category: RoleCategory::Video },
    ContributorRoleInfo { key: "choreographer", label: "Choreographer", category: RoleCategory::Creative },
    ContributorRoleInfo { key: "dancer", label: "Dancer", category: RoleCategory::Creative },
    ContributorRoleInfo { key: "actor", label: "Actor", category: RoleCategory::Creative },
    ContributorRoleInfo { key: "costume_designer", label: "Costume Designer", category: RoleCategory::Creative },
    ContributorRoleInfo { key: "set_designer", label: "Set Designer", category: RoleCategory::Creative },
    ContributorRoleInfo { key: "a&r_administrator", label: "A&R Administrator", category: RoleCategory::Management },
    ContributorRoleInfo { key: "a&r_manager", label: "A&R Manager", category: RoleCategory::Management },
    ContributorRoleInfo { key: "artist_management", label: "Artist Management", category: RoleCategory::Management },
    ContributorRoleInfo { key: "agent", label: "Agent", category: RoleCategory::Management },
    ContributorRoleInfo { key: "production_assistant", label: "Production Assistant", category: RoleCategory::Management },
    ContributorRoleInfo { key: "studio_personnel", label: "Studio Personnel", category: RoleCategory::Management },
];

pub const INSTRUMENTS: &[&str] = &[
    "Accordion",
    "Acoustic Guitar",
    "Banjo",
    "Bass Clarinet",
    "Bass Guitar",
    "Bassoon",
    "Buzuq",
    "Cello",
    "Cembalo",
    "Clarinet",
    "Classical Guitar",
    "Djembe",
    "Double Bass",
    "Drum Kit",
    "Electric Guitar",
    "Erhu",
    "Flute",
    "French Horn",
    "Harmonica",
    "Harp",
    "Harpsichord",
    "Horn",
    "Mandolin",
    "Marimba",
    "Oboe",
    "Orchestra",
    "Organ",
    "Oud",
    "Pedal Steel Guitar",
    "Piano",
    "Piccolo",
    "Recorder",
    "Samples",
    "Saxophone",
    "Sitar",
    "Steel Drum",
    "Synthesizer",
    "Trombone",
    "Trumpet",
    "Ukelele",
    "Vibraphone",
    "Viola",
    "Violin",
    "Vocals",
    "Xylophone",
];

pub const GENRES: &[&str] = &[
    "African Music",
    "Alternative",
    "Asian Music",
    "Blues",
    "Classical",
    "Country",
    "Dance",
    "Electronic",
    "Folk",
    "Hip Hop/Rap",
    "Inspirational",
    "Jazz",
    "Kids Music",
    "Latin",
    "New Age",
    "Pop",
    "R&B/Soul",
    "Reggae",
    "Rock",
    "Singer/Songwriter",
    "Soundtrack",
    "Spoken Word",
];

lazy_static! {
    static ref ROLE_INDEX: HashMap<&'static str, &'static ContributorRoleInfo> = CONTRIBUTOR_ROLES
        .iter()
        .map(|role| (role.key, role))
        .collect();
}

pub fn contributor_role(key: &str) -> Option<&'static ContributorRoleInfo> {
    ROLE_INDEX.get(key.trim().to_ascii_lowercase().as_str()).copied()
}

pub fn is_known_instrument(name: &str) -> bool {
    INSTRUMENTS
        .iter()
        .any(|instrument| instrument.eq_ignore_ascii_case(name.trim()))
}

pub fn is_known_genre(name: &str) -> bool {
    GENRES.iter().any(|genre| genre.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_keys_are_unique() {
        assert_eq!(ROLE_INDEX.len(), CONTRIBUTOR_ROLES.len());
    }

    #[test]
    fn looks_up_roles_and_instruments() {
        let composer = contributor_role("Composer").expect("composer is a role");
        assert_eq!(composer.category, RoleCategory::Production);
        assert!(contributor_role("kazoo_whisperer").is_none());
        assert!(is_known_instrument("piano"));
        assert!(is_known_genre("Hip Hop/Rap"));
    }
}
