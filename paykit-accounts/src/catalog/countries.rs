//! Country repository.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Geographic region of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    /// Human readable region name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
        }
    }
}

/// An ISO-3166 alpha-2 country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub region: Region,
}

impl Country {
    const fn new(code: &'static str, name: &'static str, region: Region) -> Self {
        Self { code, name, region }
    }
}

/// Eurozone members and microstates that use SEPA with the euro.
pub const SEPA_EURO_COUNTRY_CODES: &[&str] = &[
    "AT", "BE", "CY", "DE", "EE", "FI", "FR", "GR", "IE", "IT", "LV", "LT", "LU", "MC", "MT", "NL",
    "PT", "SK", "SI", "ES", "AD", "SM", "VA",
];

/// SEPA members that keep their own currency.
pub const SEPA_NON_EURO_COUNTRY_CODES: &[&str] = &[
    "BG", "HR", "CZ", "DK", "GB", "HU", "PL", "RO", "SE", "IS", "NO", "LI", "CH", "JE", "GI",
];

static COUNTRIES: &[Country] = &[
    Country::new("AD", "Andorra", Region::Europe),
    Country::new("AE", "United Arab Emirates", Region::Asia),
    Country::new("AF", "Afghanistan", Region::Asia),
    Country::new("AG", "Antigua and Barbuda", Region::Americas),
    Country::new("AI", "Anguilla", Region::Americas),
    Country::new("AL", "Albania", Region::Europe),
    Country::new("AM", "Armenia", Region::Asia),
    Country::new("AO", "Angola", Region::Africa),
    Country::new("AR", "Argentina", Region::Americas),
    Country::new("AS", "American Samoa", Region::Oceania),
    Country::new("AT", "Austria", Region::Europe),
    Country::new("AU", "Australia", Region::Oceania),
    Country::new("AW", "Aruba", Region::Americas),
    Country::new("AX", "Åland Islands", Region::Europe),
    Country::new("AZ", "Azerbaijan", Region::Asia),
    Country::new("BA", "Bosnia and Herzegovina", Region::Europe),
    Country::new("BB", "Barbados", Region::Americas),
    Country::new("BD", "Bangladesh", Region::Asia),
    Country::new("BE", "Belgium", Region::Europe),
    Country::new("BF", "Burkina Faso", Region::Africa),
    Country::new("BG", "Bulgaria", Region::Europe),
    Country::new("BH", "Bahrain", Region::Asia),
    Country::new("BI", "Burundi", Region::Africa),
    Country::new("BJ", "Benin", Region::Africa),
    Country::new("BL", "Saint Barthélemy", Region::Americas),
    Country::new("BM", "Bermuda", Region::Americas),
    Country::new("BN", "Brunei Darussalam", Region::Asia),
    Country::new("BO", "Bolivia (Plurinational State of)", Region::Americas),
    Country::new("BQ", "Bonaire, Sint Eustatius and Saba", Region::Americas),
    Country::new("BR", "Brazil", Region::Americas),
    Country::new("BS", "Bahamas", Region::Americas),
    Country::new("BT", "Bhutan", Region::Asia),
    Country::new("BW", "Botswana", Region::Africa),
    Country::new("BY", "Belarus", Region::Europe),
    Country::new("BZ", "Belize", Region::Americas),
    Country::new("CA", "Canada", Region::Americas),
    Country::new("CC", "Cocos (Keeling) Islands", Region::Oceania),
    Country::new("CD", "Congo (Democratic Republic of the)", Region::Africa),
    Country::new("CF", "Central African Republic", Region::Africa),
    Country::new("CG", "Congo", Region::Africa),
    Country::new("CH", "Switzerland", Region::Europe),
    Country::new("CI", "Côte d'Ivoire", Region::Africa),
    Country::new("CK", "Cook Islands", Region::Oceania),
    Country::new("CL", "Chile", Region::Americas),
    Country::new("CM", "Cameroon", Region::Africa),
    Country::new("CN", "China", Region::Asia),
    Country::new("CO", "Colombia", Region::Americas),
    Country::new("CR", "Costa Rica", Region::Americas),
    Country::new("CU", "Cuba", Region::Americas),
    Country::new("CV", "Cabo Verde", Region::Africa),
    Country::new("CW", "Curaçao", Region::Americas),
    Country::new("CX", "Christmas Island", Region::Oceania),
    Country::new("CY", "Cyprus", Region::Europe),
    Country::new("CZ", "Czech Republic", Region::Europe),
    Country::new("DE", "Germany", Region::Europe),
    Country::new("DJ", "Djibouti", Region::Africa),
    Country::new("DK", "Denmark", Region::Europe),
    Country::new("DM", "Dominica", Region::Americas),
    Country::new("DO", "Dominican Republic", Region::Americas),
    Country::new("DZ", "Algeria", Region::Africa),
    Country::new("EC", "Ecuador", Region::Americas),
    Country::new("EE", "Estonia", Region::Europe),
    Country::new("EG", "Egypt", Region::Africa),
    Country::new("EH", "Western Sahara", Region::Africa),
    Country::new("ER", "Eritrea", Region::Africa),
    Country::new("ES", "Spain", Region::Europe),
    Country::new("ET", "Ethiopia", Region::Africa),
    Country::new("FI", "Finland", Region::Europe),
    Country::new("FJ", "Fiji", Region::Oceania),
    Country::new("FK", "Falkland Islands (Malvinas)", Region::Americas),
    Country::new("FM", "Micronesia (Federated States of)", Region::Oceania),
    Country::new("FO", "Faroe Islands", Region::Europe),
    Country::new("FR", "France", Region::Europe),
    Country::new("GA", "Gabon", Region::Africa),
    Country::new("GB", "United Kingdom of Great Britain and Northern Ireland", Region::Europe),
    Country::new("GD", "Grenada", Region::Americas),
    Country::new("GE", "Georgia", Region::Asia),
    Country::new("GF", "French Guiana", Region::Americas),
    Country::new("GG", "Guernsey", Region::Europe),
    Country::new("GH", "Ghana", Region::Africa),
    Country::new("GI", "Gibraltar", Region::Europe),
    Country::new("GL", "Greenland", Region::Americas),
    Country::new("GM", "Gambia", Region::Africa),
    Country::new("GN", "Guinea", Region::Africa),
    Country::new("GP", "Guadeloupe", Region::Americas),
    Country::new("GQ", "Equatorial Guinea", Region::Africa),
    Country::new("GR", "Greece", Region::Europe),
    Country::new("GS", "South Georgia and the South Sandwich Islands", Region::Americas),
    Country::new("GT", "Guatemala", Region::Americas),
    Country::new("GU", "Guam", Region::Oceania),
    Country::new("GW", "Guinea-Bissau", Region::Africa),
    Country::new("GY", "Guyana", Region::Americas),
    Country::new("HK", "Hong Kong", Region::Asia),
    Country::new("HN", "Honduras", Region::Americas),
    Country::new("HR", "Croatia", Region::Europe),
    Country::new("HT", "Haiti", Region::Americas),
    Country::new("HU", "Hungary", Region::Europe),
    Country::new("ID", "Indonesia", Region::Asia),
    Country::new("IE", "Ireland", Region::Europe),
    Country::new("IL", "Israel", Region::Asia),
    Country::new("IM", "Isle of Man", Region::Europe),
    Country::new("IN", "India", Region::Asia),
    Country::new("IO", "British Indian Ocean Territory", Region::Africa),
    Country::new("IQ", "Iraq", Region::Asia),
    Country::new("IR", "Iran (Islamic Republic of)", Region::Asia),
    Country::new("IS", "Iceland", Region::Europe),
    Country::new("IT", "Italy", Region::Europe),
    Country::new("JE", "Jersey", Region::Europe),
    Country::new("JM", "Jamaica", Region::Americas),
    Country::new("JO", "Jordan", Region::Asia),
    Country::new("JP", "Japan", Region::Asia),
    Country::new("KE", "Kenya", Region::Africa),
    Country::new("KG", "Kyrgyzstan", Region::Asia),
    Country::new("KH", "Cambodia", Region::Asia),
    Country::new("KI", "Kiribati", Region::Oceania),
    Country::new("KM", "Comoros", Region::Africa),
    Country::new("KN", "Saint Kitts and Nevis", Region::Americas),
    Country::new("KP", "Korea (Democratic People's Republic of)", Region::Asia),
    Country::new("KR", "Korea (Republic of)", Region::Asia),
    Country::new("KW", "Kuwait", Region::Asia),
    Country::new("KY", "Cayman Islands", Region::Americas),
    Country::new("KZ", "Kazakhstan", Region::Asia),
    Country::new("LA", "Lao People's Democratic Republic", Region::Asia),
    Country::new("LB", "Lebanon", Region::Asia),
    Country::new("LC", "Saint Lucia", Region::Americas),
    Country::new("LI", "Liechtenstein", Region::Europe),
    Country::new("LK", "Sri Lanka", Region::Asia),
    Country::new("LR", "Liberia", Region::Africa),
    Country::new("LS", "Lesotho", Region::Africa),
    Country::new("LT", "Lithuania", Region::Europe),
    Country::new("LU", "Luxembourg", Region::Europe),
    Country::new("LV", "Latvia", Region::Europe),
    Country::new("LY", "Libya", Region::Africa),
    Country::new("MA", "Morocco", Region::Africa),
    Country::new("MC", "Monaco", Region::Europe),
    Country::new("MD", "Moldova (Republic of)", Region::Europe),
    Country::new("ME", "Montenegro", Region::Europe),
    Country::new("MF", "Saint Martin (French part)", Region::Americas),
    Country::new("MG", "Madagascar", Region::Africa),
    Country::new("MH", "Marshall Islands", Region::Oceania),
    Country::new("MK", "Macedonia (the former Yugoslav Republic of)", Region::Europe),
    Country::new("ML", "Mali", Region::Africa),
    Country::new("MM", "Myanmar", Region::Asia),
    Country::new("MN", "Mongolia", Region::Asia),
    Country::new("MO", "Macao", Region::Asia),
    Country::new("MP", "Northern Mariana Islands", Region::Oceania),
    Country::new("MQ", "Martinique", Region::Americas),
    Country::new("MR", "Mauritania", Region::Africa),
    Country::new("MS", "Montserrat", Region::Americas),
    Country::new("MT", "Malta", Region::Europe),
    Country::new("MU", "Mauritius", Region::Africa),
    Country::new("MV", "Maldives", Region::Asia),
    Country::new("MW", "Malawi", Region::Africa),
    Country::new("MX", "Mexico", Region::Americas),
    Country::new("MY", "Malaysia", Region::Asia),
    Country::new("MZ", "Mozambique", Region::Africa),
    Country::new("NA", "Namibia", Region::Africa),
    Country::new("NC", "New Caledonia", Region::Oceania),
    Country::new("NE", "Niger", Region::Africa),
    Country::new("NF", "Norfolk Island", Region::Oceania),
    Country::new("NG", "Nigeria", Region::Africa),
    Country::new("NI", "Nicaragua", Region::Americas),
    Country::new("NL", "Netherlands", Region::Europe),
    Country::new("NO", "Norway", Region::Europe),
    Country::new("NP", "Nepal", Region::Asia),
    Country::new("NR", "Nauru", Region::Oceania),
    Country::new("NU", "Niue", Region::Oceania),
    Country::new("NZ", "New Zealand", Region::Oceania),
    Country::new("OM", "Oman", Region::Asia),
    Country::new("PA", "Panama", Region::Americas),
    Country::new("PE", "Peru", Region::Americas),
    Country::new("PF", "French Polynesia", Region::Oceania),
    Country::new("PG", "Papua New Guinea", Region::Oceania),
    Country::new("PH", "Philippines", Region::Asia),
    Country::new("PK", "Pakistan", Region::Asia),
    Country::new("PL", "Poland", Region::Europe),
    Country::new("PM", "Saint Pierre and Miquelon", Region::Americas),
    Country::new("PN", "Pitcairn", Region::Oceania),
    Country::new("PR", "Puerto Rico", Region::Americas),
    Country::new("PS", "Palestine, State of", Region::Asia),
    Country::new("PT", "Portugal", Region::Europe),
    Country::new("PW", "Palau", Region::Oceania),
    Country::new("PY", "Paraguay", Region::Americas),
    Country::new("QA", "Qatar", Region::Asia),
    Country::new("RE", "Réunion", Region::Africa),
    Country::new("RO", "Romania", Region::Europe),
    Country::new("RS", "Serbia", Region::Europe),
    Country::new("RU", "Russian Federation", Region::Europe),
    Country::new("RW", "Rwanda", Region::Africa),
    Country::new("SA", "Saudi Arabia", Region::Asia),
    Country::new("SB", "Solomon Islands", Region::Oceania),
    Country::new("SC", "Seychelles", Region::Africa),
    Country::new("SD", "Sudan", Region::Africa),
    Country::new("SE", "Sweden", Region::Europe),
    Country::new("SG", "Singapore", Region::Asia),
    Country::new("SH", "Saint Helena, Ascension and Tristan da Cunha", Region::Africa),
    Country::new("SI", "Slovenia", Region::Europe),
    Country::new("SJ", "Svalbard and Jan Mayen", Region::Europe),
    Country::new("SK", "Slovakia", Region::Europe),
    Country::new("SL", "Sierra Leone", Region::Africa),
    Country::new("SM", "San Marino", Region::Europe),
    Country::new("SN", "Senegal", Region::Africa),
    Country::new("SO", "Somalia", Region::Africa),
    Country::new("SR", "Suriname", Region::Americas),
    Country::new("SS", "South Sudan", Region::Africa),
    Country::new("ST", "Sao Tome and Principe", Region::Africa),
    Country::new("SV", "El Salvador", Region::Americas),
    Country::new("SX", "Sint Maarten (Dutch part)", Region::Americas),
    Country::new("SY", "Syrian Arab Republic", Region::Asia),
    Country::new("SZ", "Swaziland", Region::Africa),
    Country::new("TC", "Turks and Caicos Islands", Region::Americas),
    Country::new("TD", "Chad", Region::Africa),
    Country::new("TF", "French Southern Territories", Region::Africa),
    Country::new("TG", "Togo", Region::Africa),
    Country::new("TH", "Thailand", Region::Asia),
    Country::new("TJ", "Tajikistan", Region::Asia),
    Country::new("TK", "Tokelau", Region::Oceania),
    Country::new("TL", "Timor-Leste", Region::Asia),
    Country::new("TM", "Turkmenistan", Region::Asia),
    Country::new("TN", "Tunisia", Region::Africa),
    Country::new("TO", "Tonga", Region::Oceania),
    Country::new("TR", "Turkey", Region::Asia),
    Country::new("TT", "Trinidad and Tobago", Region::Americas),
    Country::new("TV", "Tuvalu", Region::Oceania),
    Country::new("TW", "Taiwan", Region::Asia),
    Country::new("TZ", "Tanzania, United Republic of", Region::Africa),
    Country::new("UA", "Ukraine", Region::Europe),
    Country::new("UG", "Uganda", Region::Africa),
    Country::new("UM", "United States Minor Outlying Islands", Region::Americas),
    Country::new("US", "United States of America", Region::Americas),
    Country::new("UY", "Uruguay", Region::Americas),
    Country::new("UZ", "Uzbekistan", Region::Asia),
    Country::new("VA", "Holy See", Region::Europe),
    Country::new("VC", "Saint Vincent and the Grenadines", Region::Americas),
    Country::new("VE", "Venezuela (Bolivarian Republic of)", Region::Americas),
    Country::new("VG", "Virgin Islands (British)", Region::Americas),
    Country::new("VI", "Virgin Islands (U.S.)", Region::Americas),
    Country::new("VN", "Vietnam", Region::Asia),
    Country::new("VU", "Vanuatu", Region::Oceania),
    Country::new("WF", "Wallis and Futuna", Region::Oceania),
    Country::new("WS", "Samoa", Region::Oceania),
    Country::new("XK", "Republic of Kosovo", Region::Europe),
    Country::new("YE", "Yemen", Region::Asia),
    Country::new("YT", "Mayotte", Region::Africa),
    Country::new("ZA", "South Africa", Region::Africa),
    Country::new("ZM", "Zambia", Region::Africa),
    Country::new("ZW", "Zimbabwe", Region::Africa),
];

fn index() -> &'static HashMap<&'static str, &'static Country> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Country>> = OnceLock::new();
    INDEX.get_or_init(|| COUNTRIES.iter().map(|c| (c.code, c)).collect())
}

/// Look up a country by its alpha-2 code. Codes are case sensitive.
pub fn find_country(code: &str) -> Option<&'static Country> {
    index().get(code).copied()
}

/// Returns true if the code is a known country.
pub fn is_known_country(code: &str) -> bool {
    index().contains_key(code)
}

/// Every known country, sorted by code.
pub fn all_countries() -> &'static [Country] {
    COUNTRIES
}

/// Every known country code, sorted.
pub fn all_country_codes() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().map(|c| c.code)
}

/// Resolve a list of codes, skipping unknown ones.
pub fn countries_from_codes<'a>(codes: &'a [&'a str]) -> impl Iterator<Item = &'static Country> + 'a {
    codes.iter().filter_map(|code| find_country(code))
}

/// Euro and non-euro SEPA countries, sorted.
pub fn all_sepa_country_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = SEPA_EURO_COUNTRY_CODES
        .iter()
        .chain(SEPA_NON_EURO_COUNTRY_CODES)
        .copied()
        .collect();
    codes.sort_unstable();
    codes
}

pub fn is_sepa_country(code: &str) -> bool {
    SEPA_EURO_COUNTRY_CODES.contains(&code) || SEPA_NON_EURO_COUNTRY_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_country() {
        let de = find_country("DE").unwrap();
        assert_eq!(de.name, "Germany");
        assert_eq!(de.region, Region::Europe);
        assert!(find_country("de").is_none());
        assert!(find_country("ZZ").is_none());
    }

    #[test]
    fn test_table_sorted_and_unique() {
        let codes: Vec<_> = all_country_codes().collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_sepa_lists() {
        let all = all_sepa_country_codes();
        assert_eq!(all.len(), 38);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.iter().all(|c| is_known_country(c)));
        assert!(is_sepa_country("CH"));
        assert!(!is_sepa_country("US"));
    }
}
