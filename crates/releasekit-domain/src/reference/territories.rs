// SPDX-License-Identifier: GPL-3.0-or-later

//! Countries grouped by continent.
//!
//! The continent lists are the unit of the "select all / deselect all" bulk
//! actions, and their union is what a worldwide release resolves to.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::CountryCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub continent: Continent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 5] = [
        Continent::Africa,
        Continent::Americas,
        Continent::Asia,
        Continent::Europe,
        Continent::Oceania,
    ];

    pub fn countries(self) -> &'static [Country] {
        match self {
            Continent::Africa => AFRICA,
            Continent::Americas => AMERICAS,
            Continent::Asia => ASIA,
            Continent::Europe => EUROPE,
            Continent::Oceania => OCEANIA,
        }
    }

    /// The continent's country codes as a set, ready for union/difference.
    pub fn country_codes(self) -> BTreeSet<CountryCode> {
        self.countries()
            .iter()
            .map(|country| CountryCode::new(country.code))
            .collect()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "africa" => Some(Continent::Africa),
            "americas" | "america" => Some(Continent::Americas),
            "asia" => Some(Continent::Asia),
            "europe" => Some(Continent::Europe),
            "oceania" => Some(Continent::Oceania),
            _ => None,
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Africa => write!(f, "Africa"),
            Self::Americas => write!(f, "Americas"),
            Self::Asia => write!(f, "Asia"),
            Self::Europe => write!(f, "Europe"),
            Self::Oceania => write!(f, "Oceania"),
        }
    }
}

lazy_static! {
    static ref COUNTRY_INDEX: HashMap<&'static str, &'static Country> = Continent::ALL
        .iter()
        .flat_map(|continent| continent.countries().iter())
        .map(|country| (country.code, country))
        .collect();
    static ref ALL_COUNTRY_CODES: BTreeSet<CountryCode> = Continent::ALL
        .iter()
        .flat_map(|continent| continent.country_codes())
        .collect();
}

/// Every country known to the continent tables.
pub fn all_countries() -> &'static BTreeSet<CountryCode> {
    &ALL_COUNTRY_CODES
}

pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRY_INDEX
        .get(code.trim().to_ascii_uppercase().as_str())
        .copied()
}

pub fn countries_in_continent(continent: Continent) -> &'static [Country] {
    continent.countries()
}

pub fn is_known_country(code: &CountryCode) -> bool {
    COUNTRY_INDEX.contains_key(code.as_str())
}


const AFRICA: &[Country] = &[
    Country { code: "DZ", name: "Algeria", continent: Continent::Africa },
    Country { code: "AO", name: "Angola", continent: Continent::Africa },
    Country { code: "BJ", name: "Benin", continent: Continent::Africa },
    Country { code: "BW", name: "Botswana", continent: Continent::Africa },
    Country { code: "BF", name: "Burkina Faso", continent: Continent::Africa },
    Country { code: "BI", name: "Burundi", continent: Continent::Africa },
    Country { code: "CM", name: "Cameroon", continent: Continent::Africa },
    Country { code: "CV", name: "Cape Verde", continent: Continent::Africa },
    Country { code: "CF", name: "Central African Republic", continent: Continent::Africa },
    Country { code: "TD", name: "Chad", continent: Continent::Africa },
    Country { code: "KM", name: "Comoros", continent: Continent::Africa },
    Country { code: "CG", name: "Congo", continent: Continent::Africa },
    Country { code: "CD", name: "Congo, Democratic Republic", continent: Continent::Africa },
    Country { code: "CI", name: "Côte d'Ivoire", continent: Continent::Africa },
    Country { code: "DJ", name: "Djibouti", continent: Continent::Africa },
    Country { code: "EG", name: "Egypt", continent: Continent::Africa },
    Country { code: "GQ", name: "Equatorial Guinea", continent: Continent::Africa },
    Country { code: "ER", name: "Eritrea", continent: Continent::Africa },
    Country { code: "SZ", name: "Eswatini", continent: Continent::Africa },
    Country { code: "ET", name: "Ethiopia", continent: Continent::Africa },
    Country { code: "GA", name: "Gabon", continent: Continent::Africa },
    Country { code: "GM", name: "Gambia", continent: Continent::Africa },
    Country { code: "GH", name: "Ghana", continent: Continent::Africa },
    Country { code: "GN", name: "Guinea", continent: Continent::Africa },
    Country { code: "GW", name: "Guinea-Bissau", continent: Continent::Africa },
    Country { code: "KE", name: "Kenya", continent: Continent::Africa },
    Country { code: "LS", name: "Lesotho", continent: Continent::Africa },
    Country { code: "LR", name: "Liberia", continent: Continent::Africa },
    Country { code: "LY", name: "Libya", continent: Continent::Africa },
    Country { code: "MG", name: "Madagascar", continent: Continent::Africa },
    Country { code: "MW", name: "Malawi", continent: Continent::Africa },
    Country { code: "ML", name: "Mali", continent: Continent::Africa },
    Country { code: "MR", name: "Mauritania", continent: Continent::Africa },
    Country { code: "MU", name: "Mauritius", continent: Continent::Africa },
    Country { code: "MA", name: "Morocco", continent: Continent::Africa },
    Country { code: "MZ", name: "Mozambique", continent: Continent::Africa },
    Country { code: "NA", name: "Namibia", continent: Continent::Africa },
    Country { code: "NE", name: "Niger", continent: Continent::Africa },
    Country { code: "NG", name: "Nigeria", continent: Continent::Africa },
    Country { code: "RW", name: "Rwanda", continent: Continent::Africa },
    Country { code: "ST", name: "São Tomé and Príncipe", continent: Continent::Africa },
    Country { code: "SN", name: "Senegal", continent: Continent::Africa },
    Country { code: "SC", name: "Seychelles", continent: Continent::Africa },
    Country { code: "SL", name: "Sierra Leone", continent: Continent::Africa },
    Country { code: "SO", name: "Somalia", continent: Continent::Africa },
    Country { code: "ZA", name: "South Africa", continent: Continent::Africa },
    Country { code: "SS", name: "South Sudan", continent: Continent::Africa },
    Country { code: "SD", name: "Sudan", continent: Continent::Africa },
    Country { code: "TZ", name: "Tanzania", continent: Continent::Africa },
    Country { code: "TG", name: "Togo", continent: Continent::Africa },
    Country { code: "TN", name: "Tunisia", continent: Continent::Africa },
    Country { code: "UG", name: "Uganda", continent: Continent::Africa },
    Country { code: "ZM", name: "Zambia", continent: Continent::Africa },
    Country { code: "ZW", name: "Zimbabwe", continent: Continent::Africa },
];

const AMERICAS: &[Country] = &[
    Country { code: "AR", name: "Argentina", continent: Continent::Americas },
    Country { code: "BS", name: "Bahamas", continent: Continent::Americas },
    Country { code: "BB", name: "Barbados", continent: Continent::Americas },
    Country { code: "BZ", name: "Belize", continent: Continent::Americas },
    Country { code: "BO", name: "Bolivia", continent: Continent::Americas },
    Country { code: "BR", name: "Brazil", continent: Continent::Americas },
    Country { code: "CA", name: "Canada", continent: Continent::Americas },
    Country { code: "CL", name: "Chile", continent: Continent::Americas },
    Country { code: "CO", name: "Colombia", continent: Continent::Americas },
    Country { code: "CR", name: "Costa Rica", continent: Continent::Americas },
    Country { code: "CU", name: "Cuba", continent: Continent::Americas },
    Country { code: "DM", name: "Dominica", continent: Continent::Americas },
    Country { code: "DO", name: "Dominican Republic", continent: Continent::Americas },
    Country { code: "EC", name: "Ecuador", continent: Continent::Americas },
    Country { code: "SV", name: "El Salvador", continent: Continent::Americas },
    Country { code: "GD", name: "Grenada", continent: Continent::Americas },
    Country { code: "GT", name: "Guatemala", continent: Continent::Americas },
    Country { code: "GY", name: "Guyana", continent: Continent::Americas },
    Country { code: "HT", name: "Haiti", continent: Continent::Americas },
    Country { code: "HN", name: "Honduras", continent: Continent::Americas },
    Country { code: "JM", name: "Jamaica", continent: Continent::Americas },
    Country { code: "MX", name: "Mexico", continent: Continent::Americas },
    Country { code: "NI", name: "Nicaragua", continent: Continent::Americas },
    Country { code: "PA", name: "Panama", continent: Continent::Americas },
    Country { code: "PY", name: "Paraguay", continent: Continent::Americas },
    Country { code: "PE", name: "Peru", continent: Continent::Americas },
    Country { code: "KN", name: "Saint Kitts and Nevis", continent: Continent::Americas },
    Country { code: "LC", name: "Saint Lucia", continent: Continent::Americas },
    Country { code: "VC", name: "Saint Vincent and the Grenadines", continent: Continent::Americas },
    Country { code: "SR", name: "Suriname", continent: Continent::Americas },
    Country { code: "TT", name: "Trinidad and Tobago", continent: Continent::Americas },
    Country { code: "US", name: "United States", continent: Continent::Americas },
    Country { code: "UY", name: "Uruguay", continent: Continent::Americas },
    Country { code: "VE", name: "Venezuela", continent: Continent::Americas },
];

const ASIA: &[Country] = &[
    Country { code: "AF", name: "Afghanistan", continent: Continent::Asia },
    Country { code: "AM", name: "Armenia", continent: Continent::Asia },
    Country { code: "AZ", name: "Azerbaijan", continent: Continent::Asia },
    Country { code: "BH", name: "Bahrain", continent: Continent::Asia },
    Country { code: "BD", name: "Bangladesh", continent: Continent::Asia },
    Country { code: "BT", name: "Bhutan", continent: Continent::Asia },
    Country { code: "BN", name: "Brunei", continent: Continent::Asia },
    Country { code: "KH", name: "Cambodia", continent: Continent::Asia },
    Country { code: "CN", name: "China", continent: Continent::Asia },
    Country { code: "CY", name: "Cyprus", continent: Continent::Asia },
    Country { code: "GE", name: "Georgia", continent: Continent::Asia },
    Country { code: "IN", name: "India", continent: Continent::Asia },
    Country { code: "ID", name: "Indonesia", continent: Continent::Asia },
    Country { code: "IR", name: "Iran", continent: Continent::Asia },
    Country { code: "IQ", name: "Iraq", continent: Continent::Asia },
    Country { code: "IL", name: "Israel", continent: Continent::Asia },
    Country { code: "JP", name: "Japan", continent: Continent::Asia },
    Country { code: "JO", name: "Jordan", continent: Continent::Asia },
    Country { code: "KZ", name: "Kazakhstan", continent: Continent::Asia },
    Country { code: "KW", name: "Kuwait", continent: Continent::Asia },
    Country { code: "KG", name: "Kyrgyzstan", continent: Continent::Asia },
    Country { code: "LA", name: "Laos", continent: Continent::Asia },
    Country { code: "LB", name: "Lebanon", continent: Continent::Asia },
    Country { code: "MY", name: "Malaysia", continent: Continent::Asia },
    Country { code: "MV", name: "Maldives", continent: Continent::Asia },
    Country { code: "MN", name: "Mongolia", continent: Continent::Asia },
    Country { code: "MM", name: "Myanmar", continent: Continent::Asia },
    Country { code: "NP", name: "Nepal", continent: Continent::Asia },
    Country { code: "KP", name: "North Korea", continent: Continent::Asia },
    Country { code: "OM", name: "Oman", continent: Continent::Asia },
    Country { code: "PK", name: "Pakistan", continent: Continent::Asia },
    Country { code: "PS", name: "Palestine", continent: Continent::Asia },
    Country { code: "PH", name: "Philippines", continent: Continent::Asia },
    Country { code: "QA", name: "Qatar", continent: Continent::Asia },
    Country { code: "SA", name: "Saudi Arabia", continent: Continent::Asia },
    Country { code: "SG", name: "Singapore", continent: Continent::Asia },
    Country { code: "KR", name: "South Korea", continent: Continent::Asia },
    Country { code: "LK", name: "Sri Lanka", continent: Continent::Asia },
    Country { code: "SY", name: "Syria", continent: Continent::Asia },
    Country { code: "TW", name: "Taiwan", continent: Continent::Asia },
    Country { code: "TJ", name: "Tajikistan", continent: Continent::Asia },
    Country { code: "TH", name: "Thailand", continent: Continent::Asia },
    Country { code: "TL", name: "Timor-Leste", continent: Continent::Asia },
    Country { code: "TR", name: "Turkey", continent: Continent::Asia },
    Country { code: "TM", name: "Turkmenistan", continent: Continent::Asia },
    Country { code: "AE", name: "United Arab Emirates", continent: Continent::Asia },
    Country { code: "UZ", name: "Uzbekistan", continent: Continent::Asia },
    Country { code: "VN", name: "Vietnam", continent: Continent::Asia },
    Country { code: "YE", name: "Yemen", continent: Continent::Asia },
];

const EUROPE: &[Country] = &[
    Country { code: "AL", name: "Albania", continent: Continent::Europe },
    Country { code: "AD", name: "Andorra", continent: Continent::Europe },
    Country { code: "AT", name: "Austria", continent: Continent::Europe },
    Country { code: "BY", name: "Belarus", continent: Continent::Europe },
    Country { code: "BE", name: "Belgium", continent: Continent::Europe },
    Country { code: "BA", name: "Bosnia and Herzegovina", continent: Continent::Europe },
    Country { code: "BG", name: "Bulgaria", continent: Continent::Europe },
    Country { code: "HR", name: "Croatia", continent: Continent::Europe },
    Country { code: "CZ", name: "Czech Republic", continent: Continent::Europe },
    Country { code: "DK", name: "Denmark", continent: Continent::Europe },
    Country { code: "EE", name: "Estonia", continent: Continent::Europe },
    Country { code: "FI", name: "Finland", continent: Continent::Europe },
    Country { code: "FR", name: "France", continent: Continent::Europe },
    Country { code: "DE", name: "Germany", continent: Continent::Europe },
    Country { code: "GR", name: "Greece", continent: Continent::Europe },
    Country { code: "HU", name: "Hungary", continent: Continent::Europe },
    Country { code: "IS", name: "Iceland", continent: Continent::Europe },
    Country { code: "IE", name: "Ireland", continent: Continent::Europe },
    Country { code: "IT", name: "Italy", continent: Continent::Europe },
    Country { code: "XK", name: "Kosovo", continent: Continent::Europe },
    Country { code: "LV", name: "Latvia", continent: Continent::Europe },
    Country { code: "LI", name: "Liechtenstein", continent: Continent::Europe },
    Country { code: "LT", name: "Lithuania", continent: Continent::Europe },
    Country { code: "LU", name: "Luxembourg", continent: Continent::Europe },
    Country { code: "MT", name: "Malta", continent: Continent::Europe },
    Country { code: "MD", name: "Moldova", continent: Continent::Europe },
    Country { code: "MC", name: "Monaco", continent: Continent::Europe },
    Country { code: "ME", name: "Montenegro", continent: Continent::Europe },
    Country { code: "NL", name: "Netherlands", continent: Continent::Europe },
    Country { code: "MK", name: "North Macedonia", continent: Continent::Europe },
    Country { code: "NO", name: "Norway", continent: Continent::Europe },
    Country { code: "PL", name: "Poland", continent: Continent::Europe },
    Country { code: "PT", name: "Portugal", continent: Continent::Europe },
    Country { code: "RO", name: "Romania", continent: Continent::Europe },
    Country { code: "RU", name: "Russia", continent: Continent::Europe },
    Country { code: "SM", name: "San Marino", continent: Continent::Europe },
    Country { code: "RS", name: "Serbia", continent: Continent::Europe },
    Country { code: "SK", name: "Slovakia", continent: Continent::Europe },
    Country { code: "SI", name: "Slovenia", continent: Continent::Europe },
    Country { code: "ES", name: "Spain", continent: Continent::Europe },
    Country { code: "SE", name: "Sweden", continent: Continent::Europe },
    Country { code: "CH", name: "Switzerland", continent: Continent::Europe },
    Country { code: "UA", name: "Ukraine", continent: Continent::Europe },
    Country { code: "GB", name: "United Kingdom", continent: Continent::Europe },
    Country { code: "VA", name: "Vatican City", continent: Continent::Europe },
];

const OCEANIA: &[Country] = &[
    Country { code: "AU", name: "Australia", continent: Continent::Oceania },
    Country { code: "FJ", name: "Fiji", continent: Continent::Oceania },
    Country { code: "KI", name: "Kiribati", continent: Continent::Oceania },
    Country { code: "MH", name: "Marshall Islands", continent: Continent::Oceania },
    Country { code: "FM", name: "Micronesia", continent: Continent::Oceania },
    Country { code: "NR", name: "Nauru", continent: Continent::Oceania },
    Country { code: "NZ", name: "New Zealand", continent: Continent::Oceania },
    Country { code: "PW", name: "Palau", continent: Continent::Oceania },
    Country { code: "PG", name: "Papua New Guinea", continent: Continent::Oceania },
    Country { code: "WS", name: "Samoa", continent: Continent::Oceania },
    Country { code: "SB", name: "Solomon Islands", continent: Continent::Oceania },
    Country { code: "TO", name: "Tonga", continent: Continent::Oceania },
    Country { code: "TV", name: "Tuvalu", continent: Continent::Oceania },
    Country { code: "VU", name: "Vanuatu", continent: Continent::Oceania },
];
