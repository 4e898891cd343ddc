// SPDX-License-Identifier: GPL-3.0-or-later

//! Effective territory sets per DSP and the bulk editing operations used by the
//! territory picker.

use std::collections::{BTreeMap, BTreeSet};

use releasekit_domain::reference::{all_countries, excluded_countries_for, Continent};
use releasekit_domain::{CountryCode, OverrideType, Release, TerritorySelection};
use tracing::debug;

/// Territories `dsp` will distribute to.
///
/// A custom override for the DSP replaces the release selection outright;
/// otherwise the release selection applies (`World` being every known country).
pub fn resolve_territories(release: &Release, dsp: &str) -> BTreeSet<CountryCode> {
    if let Some(override_) = release.dsp_territories.get(dsp) {
        if override_.territory_type == OverrideType::Custom {
            debug!(target: "territory", dsp, count = override_.territories.len(), "using custom override");
            return override_.territories.clone();
        }
    }
    selection_countries(&release.territories)
}

pub fn resolve_all<'a>(
    release: &Release,
    dsps: impl IntoIterator<Item = &'a str>,
) -> BTreeMap<String, BTreeSet<CountryCode>> {
    dsps.into_iter()
        .map(|dsp| (dsp.to_string(), resolve_territories(release, dsp)))
        .collect()
}

/// Resolved territories minus the countries the DSP does not serve.
pub fn available_territories(release: &Release, dsp: &str) -> BTreeSet<CountryCode> {
    let excluded = excluded_countries_for([dsp]);
    resolve_territories(release, dsp)
        .into_iter()
        .filter(|code| !excluded.contains(code))
        .collect()
}

fn selection_countries(selection: &TerritorySelection) -> BTreeSet<CountryCode> {
    match selection {
        TerritorySelection::World => all_countries().clone(),
        TerritorySelection::Selected(countries) => countries.clone(),
    }
}

/// Bulk edits on a [`TerritorySelection`].
///
/// Continent operations are set union and set difference against the
/// continent's fixed country list, so repeating one is a no-op. Editing a
/// `World` selection first materialises it into every known country.
pub trait TerritoryEditor {
    fn select_continent(&mut self, continent: Continent);
    fn deselect_continent(&mut self, continent: Continent);
    /// Returns whether the country is selected afterwards.
    fn toggle_country(&mut self, code: CountryCode) -> bool;
    fn select_all(&mut self);
    fn clear(&mut self);
    fn is_selected(&self, code: &CountryCode) -> bool;
}

impl TerritoryEditor for TerritorySelection {
    fn select_continent(&mut self, continent: Continent) {
        if let TerritorySelection::Selected(countries) = self {
            countries.extend(continent.country_codes());
        }
    }

    fn deselect_continent(&mut self, continent: Continent) {
        let remove = continent.country_codes();
        let countries = materialise(self);
        countries.retain(|code| !remove.contains(code));
    }

    fn toggle_country(&mut self, code: CountryCode) -> bool {
        let countries = materialise(self);
        if countries.remove(&code) {
            false
        } else {
            countries.insert(code);
            true
        }
    }

    fn select_all(&mut self) {
        *self = TerritorySelection::World;
    }

    fn clear(&mut self) {
        *self = TerritorySelection::Selected(BTreeSet::new());
    }

    fn is_selected(&self, code: &CountryCode) -> bool {
        match self {
            TerritorySelection::World => all_countries().contains(code),
            TerritorySelection::Selected(countries) => countries.contains(code),
        }
    }
}

fn materialise(selection: &mut TerritorySelection) -> &mut BTreeSet<CountryCode> {
    if matches!(selection, TerritorySelection::World) {
        *selection = TerritorySelection::Selected(all_countries().clone());
    }
    match selection {
        TerritorySelection::Selected(countries) => countries,
        TerritorySelection::World => unreachable!("world selection was just materialised"),
    }
}
