//! Fiat currency repository.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

/// An ISO-4217 fiat currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FiatCurrency {
    pub code: &'static str,
    pub name: &'static str,
}

impl FiatCurrency {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    /// `"Euro (EUR)"` style display string.
    pub fn display_name_and_code(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

static CURRENCIES: &[FiatCurrency] = &[
    FiatCurrency::new("AED", "UAE Dirham"),
    FiatCurrency::new("AFN", "Afghan Afghani"),
    FiatCurrency::new("ALL", "Albanian Lek"),
    FiatCurrency::new("AMD", "Armenian Dram"),
    FiatCurrency::new("ANG", "Netherlands Antillean Guilder"),
    FiatCurrency::new("AOA", "Angolan Kwanza"),
    FiatCurrency::new("ARS", "Argentine Peso"),
    FiatCurrency::new("AUD", "Australian Dollar"),
    FiatCurrency::new("AWG", "Aruban Florin"),
    FiatCurrency::new("AZN", "Azerbaijani Manat"),
    FiatCurrency::new("BAM", "Bosnia-Herzegovina Convertible Mark"),
    FiatCurrency::new("BBD", "Barbadian Dollar"),
    FiatCurrency::new("BDT", "Bangladeshi Taka"),
    FiatCurrency::new("BGN", "Bulgarian Lev"),
    FiatCurrency::new("BHD", "Bahraini Dinar"),
    FiatCurrency::new("BIF", "Burundian Franc"),
    FiatCurrency::new("BMD", "Bermudan Dollar"),
    FiatCurrency::new("BND", "Brunei Dollar"),
    FiatCurrency::new("BOB", "Bolivian Boliviano"),
    FiatCurrency::new("BRL", "Brazilian Real"),
    FiatCurrency::new("BSD", "Bahamian Dollar"),
    FiatCurrency::new("BTN", "Bhutanese Ngultrum"),
    FiatCurrency::new("BWP", "Botswanan Pula"),
    FiatCurrency::new("BYN", "Belarusian Ruble"),
    FiatCurrency::new("BZD", "Belize Dollar"),
    FiatCurrency::new("CAD", "Canadian Dollar"),
    FiatCurrency::new("CDF", "Congolese Franc"),
    FiatCurrency::new("CHF", "Swiss Franc"),
    FiatCurrency::new("CLP", "Chilean Peso"),
    FiatCurrency::new("CNY", "Chinese Yuan"),
    FiatCurrency::new("COP", "Colombian Peso"),
    FiatCurrency::new("CRC", "Costa Rican Colon"),
    FiatCurrency::new("CUP", "Cuban Peso"),
    FiatCurrency::new("CVE", "Cape Verdean Escudo"),
    FiatCurrency::new("CZK", "Czech Koruna"),
    FiatCurrency::new("DJF", "Djiboutian Franc"),
    FiatCurrency::new("DKK", "Danish Krone"),
    FiatCurrency::new("DOP", "Dominican Peso"),
    FiatCurrency::new("DZD", "Algerian Dinar"),
    FiatCurrency::new("EGP", "Egyptian Pound"),
    FiatCurrency::new("ERN", "Eritrean Nakfa"),
    FiatCurrency::new("ETB", "Ethiopian Birr"),
    FiatCurrency::new("EUR", "Euro"),
    FiatCurrency::new("FJD", "Fijian Dollar"),
    FiatCurrency::new("FKP", "Falkland Islands Pound"),
    FiatCurrency::new("GBP", "British Pound"),
    FiatCurrency::new("GEL", "Georgian Lari"),
    FiatCurrency::new("GHS", "Ghanaian Cedi"),
    FiatCurrency::new("GIP", "Gibraltar Pound"),
    FiatCurrency::new("GMD", "Gambian Dalasi"),
    FiatCurrency::new("GNF", "Guinean Franc"),
    FiatCurrency::new("GTQ", "Guatemalan Quetzal"),
    FiatCurrency::new("GYD", "Guyanaese Dollar"),
    FiatCurrency::new("HKD", "Hong Kong Dollar"),
    FiatCurrency::new("HNL", "Honduran Lempira"),
    FiatCurrency::new("HTG", "Haitian Gourde"),
    FiatCurrency::new("HUF", "Hungarian Forint"),
    FiatCurrency::new("IDR", "Indonesian Rupiah"),
    FiatCurrency::new("ILS", "Israeli New Shekel"),
    FiatCurrency::new("INR", "Indian Rupee"),
    FiatCurrency::new("IQD", "Iraqi Dinar"),
    FiatCurrency::new("IRR", "Iranian Rial"),
    FiatCurrency::new("ISK", "Icelandic Krona"),
    FiatCurrency::new("JMD", "Jamaican Dollar"),
    FiatCurrency::new("JOD", "Jordanian Dinar"),
    FiatCurrency::new("JPY", "Japanese Yen"),
    FiatCurrency::new("KES", "Kenyan Shilling"),
    FiatCurrency::new("KGS", "Kyrgystani Som"),
    FiatCurrency::new("KHR", "Cambodian Riel"),
    FiatCurrency::new("KMF", "Comorian Franc"),
    FiatCurrency::new("KPW", "North Korean Won"),
    FiatCurrency::new("KRW", "South Korean Won"),
    FiatCurrency::new("KWD", "Kuwaiti Dinar"),
    FiatCurrency::new("KYD", "Cayman Islands Dollar"),
    FiatCurrency::new("KZT", "Kazakhstani Tenge"),
    FiatCurrency::new("LAK", "Laotian Kip"),
    FiatCurrency::new("LBP", "Lebanese Pound"),
    FiatCurrency::new("LKR", "Sri Lankan Rupee"),
    FiatCurrency::new("LRD", "Liberian Dollar"),
    FiatCurrency::new("LSL", "Lesotho Loti"),
    FiatCurrency::new("LYD", "Libyan Dinar"),
    FiatCurrency::new("MAD", "Moroccan Dirham"),
    FiatCurrency::new("MDL", "Moldovan Leu"),
    FiatCurrency::new("MGA", "Malagasy Ariary"),
    FiatCurrency::new("MKD", "Macedonian Denar"),
    FiatCurrency::new("MMK", "Myanmar Kyat"),
    FiatCurrency::new("MNT", "Mongolian Tugrik"),
    FiatCurrency::new("MOP", "Macanese Pataca"),
    FiatCurrency::new("MRU", "Mauritanian Ouguiya"),
    FiatCurrency::new("MUR", "Mauritian Rupee"),
    FiatCurrency::new("MVR", "Maldivian Rufiyaa"),
    FiatCurrency::new("MWK", "Malawian Kwacha"),
    FiatCurrency::new("MXN", "Mexican Peso"),
    FiatCurrency::new("MYR", "Malaysian Ringgit"),
    FiatCurrency::new("MZN", "Mozambican Metical"),
    FiatCurrency::new("NAD", "Namibian Dollar"),
    FiatCurrency::new("NGN", "Nigerian Naira"),
    FiatCurrency::new("NIO", "Nicaraguan Cordoba"),
    FiatCurrency::new("NOK", "Norwegian Krone"),
    FiatCurrency::new("NPR", "Nepalese Rupee"),
    FiatCurrency::new("NZD", "New Zealand Dollar"),
    FiatCurrency::new("OMR", "Omani Rial"),
    FiatCurrency::new("PAB", "Panamanian Balboa"),
    FiatCurrency::new("PEN", "Peruvian Sol"),
    FiatCurrency::new("PGK", "Papua New Guinean Kina"),
    FiatCurrency::new("PHP", "Philippine Peso"),
    FiatCurrency::new("PKR", "Pakistani Rupee"),
    FiatCurrency::new("PLN", "Polish Zloty"),
    FiatCurrency::new("PYG", "Paraguayan Guarani"),
    FiatCurrency::new("QAR", "Qatari Riyal"),
    FiatCurrency::new("RON", "Romanian Leu"),
    FiatCurrency::new("RSD", "Serbian Dinar"),
    FiatCurrency::new("RUB", "Russian Ruble"),
    FiatCurrency::new("RWF", "Rwandan Franc"),
    FiatCurrency::new("SAR", "Saudi Riyal"),
    FiatCurrency::new("SBD", "Solomon Islands Dollar"),
    FiatCurrency::new("SCR", "Seychellois Rupee"),
    FiatCurrency::new("SDG", "Sudanese Pound"),
    FiatCurrency::new("SEK", "Swedish Krona"),
    FiatCurrency::new("SGD", "Singapore Dollar"),
    FiatCurrency::new("SHP", "St. Helena Pound"),
    FiatCurrency::new("SLE", "Sierra Leonean Leone"),
    FiatCurrency::new("SOS", "Somali Shilling"),
    FiatCurrency::new("SRD", "Surinamese Dollar"),
    FiatCurrency::new("SSP", "South Sudanese Pound"),
    FiatCurrency::new("STN", "Sao Tome and Principe Dobra"),
    FiatCurrency::new("SYP", "Syrian Pound"),
    FiatCurrency::new("SZL", "Swazi Lilangeni"),
    FiatCurrency::new("THB", "Thai Baht"),
    FiatCurrency::new("TJS", "Tajikistani Somoni"),
    FiatCurrency::new("TMT", "Turkmenistani Manat"),
    FiatCurrency::new("TND", "Tunisian Dinar"),
    FiatCurrency::new("TOP", "Tongan Paanga"),
    FiatCurrency::new("TRY", "Turkish Lira"),
    FiatCurrency::new("TTD", "Trinidad and Tobago Dollar"),
    FiatCurrency::new("TWD", "New Taiwan Dollar"),
    FiatCurrency::new("TZS", "Tanzanian Shilling"),
    FiatCurrency::new("UAH", "Ukrainian Hryvnia"),
    FiatCurrency::new("UGX", "Ugandan Shilling"),
    FiatCurrency::new("USD", "US Dollar"),
    FiatCurrency::new("UYU", "Uruguayan Peso"),
    FiatCurrency::new("UZS", "Uzbekistani Som"),
    FiatCurrency::new("VES", "Venezuelan Bolivar"),
    FiatCurrency::new("VND", "Vietnamese Dong"),
    FiatCurrency::new("VUV", "Vanuatu Vatu"),
    FiatCurrency::new("WST", "Samoan Tala"),
    FiatCurrency::new("XAF", "Central African CFA Franc"),
    FiatCurrency::new("XCD", "East Caribbean Dollar"),
    FiatCurrency::new("XOF", "West African CFA Franc"),
    FiatCurrency::new("XPF", "CFP Franc"),
    FiatCurrency::new("YER", "Yemeni Rial"),
    FiatCurrency::new("ZAR", "South African Rand"),
    FiatCurrency::new("ZMW", "Zambian Kwacha"),
    FiatCurrency::new("ZWL", "Zimbabwean Dollar"),
];

// Primary currency per country code.
static COUNTRY_CURRENCY: &[(&str, &str)] = &[
    ("AD", "EUR"), ("AE", "AED"), ("AF", "AFN"), ("AG", "XCD"), ("AI", "XCD"), ("AL", "ALL"),
    ("AM", "AMD"), ("AO", "AOA"), ("AR", "ARS"), ("AS", "USD"), ("AT", "EUR"), ("AU", "AUD"),
    ("AW", "AWG"), ("AX", "EUR"), ("AZ", "AZN"), ("BA", "BAM"), ("BB", "BBD"), ("BD", "BDT"),
    ("BE", "EUR"), ("BF", "XOF"), ("BG", "BGN"), ("BH", "BHD"), ("BI", "BIF"), ("BJ", "XOF"),
    ("BL", "EUR"), ("BM", "BMD"), ("BN", "BND"), ("BO", "BOB"), ("BQ", "USD"), ("BR", "BRL"),
    ("BS", "BSD"), ("BT", "BTN"), ("BW", "BWP"), ("BY", "BYN"), ("BZ", "BZD"), ("CA", "CAD"),
    ("CC", "AUD"), ("CD", "CDF"), ("CF", "XAF"), ("CG", "XAF"), ("CH", "CHF"), ("CI", "XOF"),
    ("CK", "NZD"), ("CL", "CLP"), ("CM", "XAF"), ("CN", "CNY"), ("CO", "COP"), ("CR", "CRC"),
    ("CU", "CUP"), ("CV", "CVE"), ("CW", "ANG"), ("CX", "AUD"), ("CY", "EUR"), ("CZ", "CZK"),
    ("DE", "EUR"), ("DJ", "DJF"), ("DK", "DKK"), ("DM", "XCD"), ("DO", "DOP"), ("DZ", "DZD"),
    ("EC", "USD"), ("EE", "EUR"), ("EG", "EGP"), ("EH", "MAD"), ("ER", "ERN"), ("ES", "EUR"),
    ("ET", "ETB"), ("FI", "EUR"), ("FJ", "FJD"), ("FK", "FKP"), ("FM", "USD"), ("FO", "DKK"),
    ("FR", "EUR"), ("GA", "XAF"), ("GB", "GBP"), ("GD", "XCD"), ("GE", "GEL"), ("GF", "EUR"),
    ("GG", "GBP"), ("GH", "GHS"), ("GI", "GIP"), ("GL", "DKK"), ("GM", "GMD"), ("GN", "GNF"),
    ("GP", "EUR"), ("GQ", "XAF"), ("GR", "EUR"), ("GS", "GBP"), ("GT", "GTQ"), ("GU", "USD"),
    ("GW", "XOF"), ("GY", "GYD"), ("HK", "HKD"), ("HN", "HNL"), ("HR", "EUR"), ("HT", "HTG"),
    ("HU", "HUF"), ("ID", "IDR"), ("IE", "EUR"), ("IL", "ILS"), ("IM", "GBP"), ("IN", "INR"),
    ("IO", "USD"), ("IQ", "IQD"), ("IR", "IRR"), ("IS", "ISK"), ("IT", "EUR"), ("JE", "GBP"),
    ("JM", "JMD"), ("JO", "JOD"), ("JP", "JPY"), ("KE", "KES"), ("KG", "KGS"), ("KH", "KHR"),
    ("KI", "AUD"), ("KM", "KMF"), ("KN", "XCD"), ("KP", "KPW"), ("KR", "KRW"), ("KW", "KWD"),
    ("KY", "KYD"), ("KZ", "KZT"), ("LA", "LAK"), ("LB", "LBP"), ("LC", "XCD"), ("LI", "CHF"),
    ("LK", "LKR"), ("LR", "LRD"), ("LS", "LSL"), ("LT", "EUR"), ("LU", "EUR"), ("LV", "EUR"),
    ("LY", "LYD"), ("MA", "MAD"), ("MC", "EUR"), ("MD", "MDL"), ("ME", "EUR"), ("MF", "EUR"),
    ("MG", "MGA"), ("MH", "USD"), ("MK", "MKD"), ("ML", "XOF"), ("MM", "MMK"), ("MN", "MNT"),
    ("MO", "MOP"), ("MP", "USD"), ("MQ", "EUR"), ("MR", "MRU"), ("MS", "XCD"), ("MT", "EUR"),
    ("MU", "MUR"), ("MV", "MVR"), ("MW", "MWK"), ("MX", "MXN"), ("MY", "MYR"), ("MZ", "MZN"),
    ("NA", "NAD"), ("NC", "XPF"), ("NE", "XOF"), ("NF", "AUD"), ("NG", "NGN"), ("NI", "NIO"),
    ("NL", "EUR"), ("NO", "NOK"), ("NP", "NPR"), ("NR", "AUD"), ("NU", "NZD"), ("NZ", "NZD"),
    ("OM", "OMR"), ("PA", "PAB"), ("PE", "PEN"), ("PF", "XPF"), ("PG", "PGK"), ("PH", "PHP"),
    ("PK", "PKR"), ("PL", "PLN"), ("PM", "EUR"), ("PN", "NZD"), ("PR", "USD"), ("PS", "ILS"),
    ("PT", "EUR"), ("PW", "USD"), ("PY", "PYG"), ("QA", "QAR"), ("RE", "EUR"), ("RO", "RON"),
    ("RS", "RSD"), ("RU", "RUB"), ("RW", "RWF"), ("SA", "SAR"), ("SB", "SBD"), ("SC", "SCR"),
    ("SD", "SDG"), ("SE", "SEK"), ("SG", "SGD"), ("SH", "SHP"), ("SI", "EUR"), ("SJ", "NOK"),
    ("SK", "EUR"), ("SL", "SLE"), ("SM", "EUR"), ("SN", "XOF"), ("SO", "SOS"), ("SR", "SRD"),
    ("SS", "SSP"), ("ST", "STN"), ("SV", "USD"), ("SX", "ANG"), ("SY", "SYP"), ("SZ", "SZL"),
    ("TC", "USD"), ("TD", "XAF"), ("TF", "EUR"), ("TG", "XOF"), ("TH", "THB"), ("TJ", "TJS"),
    ("TK", "NZD"), ("TL", "USD"), ("TM", "TMT"), ("TN", "TND"), ("TO", "TOP"), ("TR", "TRY"),
    ("TT", "TTD"), ("TV", "AUD"), ("TW", "TWD"), ("TZ", "TZS"), ("UA", "UAH"), ("UG", "UGX"),
    ("UM", "USD"), ("US", "USD"), ("UY", "UYU"), ("UZ", "UZS"), ("VA", "EUR"), ("VC", "XCD"),
    ("VE", "VES"), ("VG", "USD"), ("VI", "USD"), ("VN", "VND"), ("VU", "VUV"), ("WF", "XPF"),
    ("WS", "WST"), ("XK", "EUR"), ("YE", "YER"), ("YT", "EUR"), ("ZA", "ZAR"), ("ZM", "ZMW"),
    ("ZW", "ZWL"),
];

fn currency_index() -> &'static HashMap<&'static str, &'static FiatCurrency> {
    static INDEX: OnceLock<HashMap<&'static str, &'static FiatCurrency>> = OnceLock::new();
    INDEX.get_or_init(|| CURRENCIES.iter().map(|c| (c.code, c)).collect())
}

fn country_index() -> &'static HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| COUNTRY_CURRENCY.iter().copied().collect())
}

/// Look up a currency by its ISO-4217 code.
pub fn find_currency(code: &str) -> Option<&'static FiatCurrency> {
    currency_index().get(code).copied()
}

pub fn is_known_currency(code: &str) -> bool {
    currency_index().contains_key(code)
}

/// The currency used in a country.
pub fn currency_for_country(country_code: &str) -> Option<&'static FiatCurrency> {
    country_index()
        .get(country_code)
        .and_then(|code| find_currency(code))
}

/// Every known currency, sorted by code.
pub fn all_currencies() -> &'static [FiatCurrency] {
    CURRENCIES
}

pub fn all_currency_codes() -> impl Iterator<Item = &'static str> {
    CURRENCIES.iter().map(|c| c.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::countries::all_country_codes;

    #[test]
    fn test_find_currency() {
        assert_eq!(find_currency("EUR").map(|c| c.name), Some("Euro"));
        assert!(find_currency("XXX").is_none());
        assert_eq!(
            find_currency("USD").unwrap().display_name_and_code(),
            "US Dollar (USD)"
        );
    }

    #[test]
    fn test_currency_for_country() {
        assert_eq!(currency_for_country("DE").map(|c| c.code), Some("EUR"));
        assert_eq!(currency_for_country("SE").map(|c| c.code), Some("SEK"));
        assert_eq!(currency_for_country("TH").map(|c| c.code), Some("THB"));
        assert!(currency_for_country("ZZ").is_none());
    }

    #[test]
    fn test_every_country_has_a_known_currency() {
        for code in all_country_codes() {
            assert!(currency_for_country(code).is_some(), "no currency for {}", code);
        }
    }
}
