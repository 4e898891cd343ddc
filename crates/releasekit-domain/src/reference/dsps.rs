// SPDX-License-Identifier: GPL-3.0-or-later

//! Digital service providers a release can be delivered to.

use std::collections::BTreeSet;

use crate::CountryCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DspInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Countries the platform cannot serve regardless of the release's territory.
    pub excluded: &'static [&'static str],
}

const SANCTIONED: &[&str] = &["SY", "IR", "CU", "KP"];

pub const DSPS: &[DspInfo] = &[
    DspInfo { id: "spotify", name: "Spotify", excluded: SANCTIONED },
    DspInfo { id: "apple_music", name: "Apple Music", excluded: &["SY", "IR", "CU", "KP", "SD"] },
    DspInfo { id: "youtube_music", name: "YouTube Music", excluded: SANCTIONED },
    DspInfo { id: "amazon_music", name: "Amazon Music", excluded: &[] },
    DspInfo { id: "deezer", name: "Deezer", excluded: &[] },
    DspInfo { id: "tidal", name: "TIDAL", excluded: &[] },
    DspInfo { id: "melon", name: "Melon", excluded: &[] },
    DspInfo { id: "genie", name: "Genie Music", excluded: &[] },
    DspInfo { id: "bugs", name: "Bugs!", excluded: &[] },
    DspInfo { id: "flo", name: "FLO", excluded: &[] },
    DspInfo { id: "vibe", name: "VIBE", excluded: &[] },
    DspInfo { id: "line_music", name: "LINE MUSIC", excluded: &[] },
    DspInfo { id: "awa", name: "AWA", excluded: &[] },
    DspInfo { id: "qq_music", name: "QQ Music", excluded: &[] },
    DspInfo { id: "netease", name: "NetEase Cloud Music", excluded: &[] },
    DspInfo { id: "kuwo", name: "Kuwo Music", excluded: &[] },
    DspInfo { id: "itunes", name: "iTunes Store", excluded: &[] },
    DspInfo { id: "amazon_mp3", name: "Amazon MP3", excluded: &[] },
    DspInfo { id: "beatport", name: "Beatport", excluded: &[] },
    DspInfo { id: "tiktok", name: "TikTok", excluded: &["IN"] },
    DspInfo { id: "instagram", name: "Instagram/Facebook", excluded: &[] },
    DspInfo { id: "snapchat", name: "Snapchat", excluded: &[] },
    DspInfo { id: "peloton", name: "Peloton", excluded: &[] },
    DspInfo { id: "soundcloud", name: "SoundCloud", excluded: &[] },
    DspInfo { id: "pandora", name: "Pandora", excluded: &[] },
    DspInfo { id: "anghami", name: "Anghami", excluded: &[] },
    DspInfo { id: "kkbox", name: "KKBOX", excluded: &[] },
];

pub fn dsp_by_id(id: &str) -> Option<&'static DspInfo> {
    let id = id.trim();
    DSPS.iter().find(|dsp| dsp.id.eq_ignore_ascii_case(id))
}

/// Union of the exclusion lists of every listed DSP. Unknown ids contribute nothing.
pub fn excluded_countries_for<'a>(dsps: impl IntoIterator<Item = &'a str>) -> BTreeSet<CountryCode> {
    dsps.into_iter()
        .filter_map(dsp_by_id)
        .flat_map(|dsp| dsp.excluded.iter().map(|code| CountryCode::new(code)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusions_are_unioned() {
        let excluded = excluded_countries_for(["spotify", "tiktok", "nope"]);
        let codes: Vec<&str> = excluded.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["CU", "IN", "IR", "KP", "SY"]);
    }

    #[test]
    fn dsp_lookup_ignores_case() {
        assert_eq!(dsp_by_id("Apple_Music").map(|d| d.name), Some("Apple Music"));
    }
}
