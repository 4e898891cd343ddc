// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable lookup tables shared by the validators and resolvers.

pub mod dsps;
pub mod taxonomy;
pub mod territories;
pub mod timezones;

pub use dsps::{dsp_by_id, excluded_countries_for, DspInfo, DSPS};
pub use taxonomy::{
    contributor_role, is_known_genre, is_known_instrument, ContributorRoleInfo, RoleCategory,
    CONTRIBUTOR_ROLES, GENRES, INSTRUMENTS,
};
pub use territories::{
    all_countries, countries_in_continent, country_by_code, is_known_country, Continent, Country,
};
pub use timezones::{timezone_by_name, TimezoneInfo, TIMEZONES};
