//! Built-in region table: ISO 3166-1 alpha-2 code, English name, IANA zones.
//!
//! Zone lists are per region; North American numbers are narrowed further
//! by area code before falling back to these.

pub(crate) struct RegionEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub zones: &'static [&'static str],
}

macro_rules! region {
    ($code:literal, $name:literal, [$($zone:literal),* $(,)?]) => {
        RegionEntry {
            code: $code,
            name: $name,
            zones: &[$($zone),*],
        }
    };
}

pub(crate) fn find(code: &str) -> Option<&'static RegionEntry> {
    REGIONS.iter().find(|r| r.code.eq_ignore_ascii_case(code))
}

static REGIONS: &[RegionEntry] = &[
    region!("AC", "Ascension Island", ["Atlantic/St_Helena"]),
    region!("AD", "Andorra", ["Europe/Andorra"]),
    region!("AE", "United Arab Emirates", ["Asia/Dubai"]),
    region!("AF", "Afghanistan", ["Asia/Kabul"]),
    region!("AG", "Antigua & Barbuda", ["America/Antigua"]),
    region!("AI", "Anguilla", ["America/Anguilla"]),
    region!("AL", "Albania", ["Europe/Tirane"]),
    region!("AM", "Armenia", ["Asia/Yerevan"]),
    region!("AO", "Angola", ["Africa/Luanda"]),
    region!("AR", "Argentina", ["America/Buenos_Aires"]),
    region!("AS", "American Samoa", ["Pacific/Pago_Pago"]),
    region!("AT", "Austria", ["Europe/Vienna"]),
    region!(
        "AU",
        "Australia",
        [
            "Australia/Adelaide",
            "Australia/Brisbane",
            "Australia/Darwin",
            "Australia/Hobart",
            "Australia/Melbourne",
            "Australia/Perth",
            "Australia/Sydney",
        ]
    ),
    region!("AW", "Aruba", ["America/Aruba"]),
    region!("AX", "Åland Islands", ["Europe/Mariehamn"]),
    region!("AZ", "Azerbaijan", ["Asia/Baku"]),
    region!("BA", "Bosnia & Herzegovina", ["Europe/Sarajevo"]),
    region!("BB", "Barbados", ["America/Barbados"]),
    region!("BD", "Bangladesh", ["Asia/Dhaka"]),
    region!("BE", "Belgium", ["Europe/Brussels"]),
    region!("BF", "Burkina Faso", ["Africa/Ouagadougou"]),
    region!("BG", "Bulgaria", ["Europe/Sofia"]),
    region!("BH", "Bahrain", ["Asia/Bahrain"]),
    region!("BI", "Burundi", ["Africa/Bujumbura"]),
    region!("BJ", "Benin", ["Africa/Porto-Novo"]),
    region!("BL", "St. Barthélemy", ["America/St_Barthelemy"]),
    region!("BM", "Bermuda", ["Atlantic/Bermuda"]),
    region!("BN", "Brunei", ["Asia/Brunei"]),
    region!("BO", "Bolivia", ["America/La_Paz"]),
    region!("BQ", "Caribbean Netherlands", ["America/Kralendijk"]),
    region!(
        "BR",
        "Brazil",
        [
            "America/Sao_Paulo",
            "America/Manaus",
            "America/Fortaleza",
            "America/Recife",
            "America/Belem",
            "America/Cuiaba",
            "America/Porto_Velho",
            "America/Rio_Branco",
            "America/Noronha",
        ]
    ),
    region!("BS", "Bahamas", ["America/Nassau"]),
    region!("BT", "Bhutan", ["Asia/Thimphu"]),
    region!("BW", "Botswana", ["Africa/Gaborone"]),
    region!("BY", "Belarus", ["Europe/Minsk"]),
    region!("BZ", "Belize", ["America/Belize"]),
    region!(
        "CA",
        "Canada",
        [
            "America/Toronto",
            "America/Vancouver",
            "America/Edmonton",
            "America/Winnipeg",
            "America/Regina",
            "America/Halifax",
            "America/St_Johns",
            "America/Whitehorse",
        ]
    ),
    region!("CC", "Cocos (Keeling) Islands", ["Indian/Cocos"]),
    region!("CD", "Congo - Kinshasa", ["Africa/Kinshasa", "Africa/Lubumbashi"]),
    region!("CF", "Central African Republic", ["Africa/Bangui"]),
    region!("CG", "Congo - Brazzaville", ["Africa/Brazzaville"]),
    region!("CH", "Switzerland", ["Europe/Zurich"]),
    region!("CI", "Côte d’Ivoire", ["Africa/Abidjan"]),
    region!("CK", "Cook Islands", ["Pacific/Rarotonga"]),
    region!("CL", "Chile", ["America/Santiago", "Pacific/Easter"]),
    region!("CM", "Cameroon", ["Africa/Douala"]),
    region!("CN", "China", ["Asia/Shanghai"]),
    region!("CO", "Colombia", ["America/Bogota"]),
    region!("CR", "Costa Rica", ["America/Costa_Rica"]),
    region!("CU", "Cuba", ["America/Havana"]),
    region!("CV", "Cape Verde", ["Atlantic/Cape_Verde"]),
    region!("CW", "Curaçao", ["America/Curacao"]),
    region!("CX", "Christmas Island", ["Indian/Christmas"]),
    region!("CY", "Cyprus", ["Asia/Nicosia"]),
    region!("CZ", "Czechia", ["Europe/Prague"]),
    region!("DE", "Germany", ["Europe/Berlin"]),
    region!("DJ", "Djibouti", ["Africa/Djibouti"]),
    region!("DK", "Denmark", ["Europe/Copenhagen"]),
    region!("DM", "Dominica", ["America/Dominica"]),
    region!("DO", "Dominican Republic", ["America/Santo_Domingo"]),
    region!("DZ", "Algeria", ["Africa/Algiers"]),
    region!("EC", "Ecuador", ["America/Guayaquil", "Pacific/Galapagos"]),
    region!("EE", "Estonia", ["Europe/Tallinn"]),
    region!("EG", "Egypt", ["Africa/Cairo"]),
    region!("EH", "Western Sahara", ["Africa/El_Aaiun"]),
    region!("ER", "Eritrea", ["Africa/Asmera"]),
    region!("ES", "Spain", ["Europe/Madrid", "Atlantic/Canary"]),
    region!("ET", "Ethiopia", ["Africa/Addis_Ababa"]),
    region!("FI", "Finland", ["Europe/Helsinki"]),
    region!("FJ", "Fiji", ["Pacific/Fiji"]),
    region!("FK", "Falkland Islands", ["Atlantic/Stanley"]),
    region!("FM", "Micronesia", ["Pacific/Ponape", "Pacific/Truk"]),
    region!("FO", "Faroe Islands", ["Atlantic/Faeroe"]),
    region!("FR", "France", ["Europe/Paris"]),
    region!("GA", "Gabon", ["Africa/Libreville"]),
    region!("GB", "United Kingdom", ["Europe/London"]),
    region!("GD", "Grenada", ["America/Grenada"]),
    region!("GE", "Georgia", ["Asia/Tbilisi"]),
    region!("GF", "French Guiana", ["America/Cayenne"]),
    region!("GG", "Guernsey", ["Europe/Guernsey"]),
    region!("GH", "Ghana", ["Africa/Accra"]),
    region!("GI", "Gibraltar", ["Europe/Gibraltar"]),
    region!("GL", "Greenland", ["America/Godthab"]),
    region!("GM", "Gambia", ["Africa/Banjul"]),
    region!("GN", "Guinea", ["Africa/Conakry"]),
    region!("GP", "Guadeloupe", ["America/Guadeloupe"]),
    region!("GQ", "Equatorial Guinea", ["Africa/Malabo"]),
    region!("GR", "Greece", ["Europe/Athens"]),
    region!("GT", "Guatemala", ["America/Guatemala"]),
    region!("GU", "Guam", ["Pacific/Guam"]),
    region!("GW", "Guinea-Bissau", ["Africa/Bissau"]),
    region!("GY", "Guyana", ["America/Guyana"]),
    region!("HK", "Hong Kong", ["Asia/Hong_Kong"]),
    region!("HN", "Honduras", ["America/Tegucigalpa"]),
    region!("HR", "Croatia", ["Europe/Zagreb"]),
    region!("HT", "Haiti", ["America/Port-au-Prince"]),
    region!("HU", "Hungary", ["Europe/Budapest"]),
    region!(
        "ID",
        "Indonesia",
        ["Asia/Jakarta", "Asia/Makassar", "Asia/Jayapura", "Asia/Pontianak"]
    ),
    region!("IE", "Ireland", ["Europe/Dublin"]),
    region!("IL", "Israel", ["Asia/Jerusalem"]),
    region!("IM", "Isle of Man", ["Europe/Isle_of_Man"]),
    region!("IN", "India", ["Asia/Calcutta"]),
    region!("IO", "British Indian Ocean Territory", ["Indian/Chagos"]),
    region!("IQ", "Iraq", ["Asia/Baghdad"]),
    region!("IR", "Iran", ["Asia/Tehran"]),
    region!("IS", "Iceland", ["Atlantic/Reykjavik"]),
    region!("IT", "Italy", ["Europe/Rome"]),
    region!("JE", "Jersey", ["Europe/Jersey"]),
    region!("JM", "Jamaica", ["America/Jamaica"]),
    region!("JO", "Jordan", ["Asia/Amman"]),
    region!("JP", "Japan", ["Asia/Tokyo"]),
    region!("KE", "Kenya", ["Africa/Nairobi"]),
    region!("KG", "Kyrgyzstan", ["Asia/Bishkek"]),
    region!("KH", "Cambodia", ["Asia/Phnom_Penh"]),
    region!("KI", "Kiribati", ["Pacific/Tarawa", "Pacific/Enderbury", "Pacific/Kiritimati"]),
    region!("KM", "Comoros", ["Indian/Comoro"]),
    region!("KN", "St. Kitts & Nevis", ["America/St_Kitts"]),
    region!("KP", "North Korea", ["Asia/Pyongyang"]),
    region!("KR", "South Korea", ["Asia/Seoul"]),
    region!("KW", "Kuwait", ["Asia/Kuwait"]),
    region!("KY", "Cayman Islands", ["America/Cayman"]),
    region!("KZ", "Kazakhstan", ["Asia/Almaty", "Asia/Aqtobe", "Asia/Oral"]),
    region!("LA", "Laos", ["Asia/Vientiane"]),
    region!("LB", "Lebanon", ["Asia/Beirut"]),
    region!("LC", "St. Lucia", ["America/St_Lucia"]),
    region!("LI", "Liechtenstein", ["Europe/Vaduz"]),
    region!("LK", "Sri Lanka", ["Asia/Colombo"]),
    region!("LR", "Liberia", ["Africa/Monrovia"]),
    region!("LS", "Lesotho", ["Africa/Maseru"]),
    region!("LT", "Lithuania", ["Europe/Vilnius"]),
    region!("LU", "Luxembourg", ["Europe/Luxembourg"]),
    region!("LV", "Latvia", ["Europe/Riga"]),
    region!("LY", "Libya", ["Africa/Tripoli"]),
    region!("MA", "Morocco", ["Africa/Casablanca"]),
    region!("MC", "Monaco", ["Europe/Monaco"]),
    region!("MD", "Moldova", ["Europe/Chisinau"]),
    region!("ME", "Montenegro", ["Europe/Podgorica"]),
    region!("MF", "St. Martin", ["America/Marigot"]),
    region!("MG", "Madagascar", ["Indian/Antananarivo"]),
    region!("MH", "Marshall Islands", ["Pacific/Majuro"]),
    region!("MK", "North Macedonia", ["Europe/Skopje"]),
    region!("ML", "Mali", ["Africa/Bamako"]),
    region!("MM", "Myanmar (Burma)", ["Asia/Rangoon"]),
    region!("MN", "Mongolia", ["Asia/Ulaanbaatar", "Asia/Hovd"]),
    region!("MO", "Macao", ["Asia/Macau"]),
    region!("MP", "Northern Mariana Islands", ["Pacific/Saipan"]),
    region!("MQ", "Martinique", ["America/Martinique"]),
    region!("MR", "Mauritania", ["Africa/Nouakchott"]),
    region!("MS", "Montserrat", ["America/Montserrat"]),
    region!("MT", "Malta", ["Europe/Malta"]),
    region!("MU", "Mauritius", ["Indian/Mauritius"]),
    region!("MV", "Maldives", ["Indian/Maldives"]),
    region!("MW", "Malawi", ["Africa/Blantyre"]),
    region!(
        "MX",
        "Mexico",
        [
            "America/Mexico_City",
            "America/Cancun",
            "America/Chihuahua",
            "America/Hermosillo",
            "America/Mazatlan",
            "America/Tijuana",
        ]
    ),
    region!("MY", "Malaysia", ["Asia/Kuala_Lumpur"]),
    region!("MZ", "Mozambique", ["Africa/Maputo"]),
    region!("NA", "Namibia", ["Africa/Windhoek"]),
    region!("NC", "New Caledonia", ["Pacific/Noumea"]),
    region!("NE", "Niger", ["Africa/Niamey"]),
    region!("NF", "Norfolk Island", ["Pacific/Norfolk"]),
    region!("NG", "Nigeria", ["Africa/Lagos"]),
    region!("NI", "Nicaragua", ["America/Managua"]),
    region!("NL", "Netherlands", ["Europe/Amsterdam"]),
    region!("NO", "Norway", ["Europe/Oslo"]),
    region!("NP", "Nepal", ["Asia/Katmandu"]),
    region!("NR", "Nauru", ["Pacific/Nauru"]),
    region!("NU", "Niue", ["Pacific/Niue"]),
    region!("NZ", "New Zealand", ["Pacific/Auckland", "Pacific/Chatham"]),
    region!("OM", "Oman", ["Asia/Muscat"]),
    region!("PA", "Panama", ["America/Panama"]),
    region!("PE", "Peru", ["America/Lima"]),
    region!("PF", "French Polynesia", ["Pacific/Tahiti", "Pacific/Marquesas", "Pacific/Gambier"]),
    region!("PG", "Papua New Guinea", ["Pacific/Port_Moresby", "Pacific/Bougainville"]),
    region!("PH", "Philippines", ["Asia/Manila"]),
    region!("PK", "Pakistan", ["Asia/Karachi"]),
    region!("PL", "Poland", ["Europe/Warsaw"]),
    region!("PM", "St. Pierre & Miquelon", ["America/Miquelon"]),
    region!("PR", "Puerto Rico", ["America/Puerto_Rico"]),
    region!("PS", "Palestinian Territories", ["Asia/Gaza", "Asia/Hebron"]),
    region!("PT", "Portugal", ["Europe/Lisbon", "Atlantic/Azores", "Atlantic/Madeira"]),
    region!("PW", "Palau", ["Pacific/Palau"]),
    region!("PY", "Paraguay", ["America/Asuncion"]),
    region!("QA", "Qatar", ["Asia/Qatar"]),
    region!("RE", "Réunion", ["Indian/Reunion"]),
    region!("RO", "Romania", ["Europe/Bucharest"]),
    region!("RS", "Serbia", ["Europe/Belgrade"]),
    region!(
        "RU",
        "Russia",
        [
            "Europe/Moscow",
            "Europe/Kaliningrad",
            "Europe/Samara",
            "Asia/Yekaterinburg",
            "Asia/Omsk",
            "Asia/Novosibirsk",
            "Asia/Krasnoyarsk",
            "Asia/Irkutsk",
            "Asia/Yakutsk",
            "Asia/Vladivostok",
            "Asia/Magadan",
            "Asia/Kamchatka",
        ]
    ),
    region!("RW", "Rwanda", ["Africa/Kigali"]),
    region!("SA", "Saudi Arabia", ["Asia/Riyadh"]),
    region!("SB", "Solomon Islands", ["Pacific/Guadalcanal"]),
    region!("SC", "Seychelles", ["Indian/Mahe"]),
    region!("SD", "Sudan", ["Africa/Khartoum"]),
    region!("SE", "Sweden", ["Europe/Stockholm"]),
    region!("SG", "Singapore", ["Asia/Singapore"]),
    region!("SH", "St. Helena", ["Atlantic/St_Helena"]),
    region!("SI", "Slovenia", ["Europe/Ljubljana"]),
    region!("SJ", "Svalbard & Jan Mayen", ["Arctic/Longyearbyen"]),
    region!("SK", "Slovakia", ["Europe/Bratislava"]),
    region!("SL", "Sierra Leone", ["Africa/Freetown"]),
    region!("SM", "San Marino", ["Europe/San_Marino"]),
    region!("SN", "Senegal", ["Africa/Dakar"]),
    region!("SO", "Somalia", ["Africa/Mogadishu"]),
    region!("SR", "Suriname", ["America/Paramaribo"]),
    region!("SS", "South Sudan", ["Africa/Juba"]),
    region!("ST", "São Tomé & Príncipe", ["Africa/Sao_Tome"]),
    region!("SV", "El Salvador", ["America/El_Salvador"]),
    region!("SX", "Sint Maarten", ["America/Lower_Princes"]),
    region!("SY", "Syria", ["Asia/Damascus"]),
    region!("SZ", "Eswatini", ["Africa/Mbabane"]),
    region!("TA", "Tristan da Cunha", ["Atlantic/St_Helena"]),
    region!("TC", "Turks & Caicos Islands", ["America/Grand_Turk"]),
    region!("TD", "Chad", ["Africa/Ndjamena"]),
    region!("TG", "Togo", ["Africa/Lome"]),
    region!("TH", "Thailand", ["Asia/Bangkok"]),
    region!("TJ", "Tajikistan", ["Asia/Dushanbe"]),
    region!("TK", "Tokelau", ["Pacific/Fakaofo"]),
    region!("TL", "Timor-Leste", ["Asia/Dili"]),
    region!("TM", "Turkmenistan", ["Asia/Ashgabat"]),
    region!("TN", "Tunisia", ["Africa/Tunis"]),
    region!("TO", "Tonga", ["Pacific/Tongatapu"]),
    region!("TR", "Turkey", ["Europe/Istanbul"]),
    region!("TT", "Trinidad & Tobago", ["America/Port_of_Spain"]),
    region!("TV", "Tuvalu", ["Pacific/Funafuti"]),
    region!("TW", "Taiwan", ["Asia/Taipei"]),
    region!("TZ", "Tanzania", ["Africa/Dar_es_Salaam"]),
    region!("UA", "Ukraine", ["Europe/Kiev"]),
    region!("UG", "Uganda", ["Africa/Kampala"]),
    region!(
        "US",
        "United States",
        [
            "America/New_York",
            "America/Chicago",
            "America/Denver",
            "America/Phoenix",
            "America/Los_Angeles",
            "America/Anchorage",
            "Pacific/Honolulu",
        ]
    ),
    region!("UY", "Uruguay", ["America/Montevideo"]),
    region!("UZ", "Uzbekistan", ["Asia/Tashkent", "Asia/Samarkand"]),
    region!("VA", "Vatican City", ["Europe/Vatican"]),
    region!("VC", "St. Vincent & Grenadines", ["America/St_Vincent"]),
    region!("VE", "Venezuela", ["America/Caracas"]),
    region!("VG", "British Virgin Islands", ["America/Tortola"]),
    region!("VI", "U.S. Virgin Islands", ["America/St_Thomas"]),
    region!("VN", "Vietnam", ["Asia/Saigon"]),
    region!("VU", "Vanuatu", ["Pacific/Efate"]),
    region!("WF", "Wallis & Futuna", ["Pacific/Wallis"]),
    region!("WS", "Samoa", ["Pacific/Apia"]),
    region!("XK", "Kosovo", ["Europe/Belgrade"]),
    region!("YE", "Yemen", ["Asia/Aden"]),
    region!("YT", "Mayotte", ["Indian/Mayotte"]),
    region!("ZA", "South Africa", ["Africa/Johannesburg"]),
    region!("ZM", "Zambia", ["Africa/Lusaka"]),
    region!("ZW", "Zimbabwe", ["Africa/Harare"]),
];
