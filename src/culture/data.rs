//! Built-in culture tables.

use super::Culture;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const ENGLISH_MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const ENGLISH_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const ENGLISH_DAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DUTCH_MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];
const DUTCH_MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];
const DUTCH_DAYS: [&str; 7] = [
    "zondag",
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
];
const DUTCH_DAY_ABBREVIATIONS: [&str; 7] = ["zo", "ma", "di", "wo", "do", "vr", "za"];
const DUTCH_CURRENCIES: &[(&str, &str)] = &[
    ("ANG", "Nederlands-Antilliaanse gulden"),
    ("AUD", "Australische dollar"),
    ("BRL", "Braziliaanse real"),
    ("CAD", "Canadese dollar"),
    ("CHF", "Zwitserse frank"),
    ("CNY", "Chinese yuan"),
    ("CZK", "Tsjechische kroon"),
    ("DKK", "Deense kroon"),
    ("EUR", "Euro"),
    ("GBP", "Brits pond"),
    ("HKD", "Hongkongse dollar"),
    ("INR", "Indiase roepie"),
    ("JPY", "Japanse yen"),
    ("MXN", "Mexicaanse peso"),
    ("NOK", "Noorse kroon"),
    ("NZD", "Nieuw-Zeelandse dollar"),
    ("PLN", "Poolse zloty"),
    ("RUB", "Russische roebel"),
    ("SEK", "Zweedse kroon"),
    ("SRD", "Surinaamse dollar"),
    ("TRY", "Turkse lira"),
    ("USD", "Amerikaanse dollar"),
    ("ZAR", "Zuid-Afrikaanse rand"),
];

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];
const GERMAN_MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];
const GERMAN_DAYS: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];
const GERMAN_DAY_ABBREVIATIONS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];
const GERMAN_CURRENCIES: &[(&str, &str)] = &[
    ("AUD", "Australischer Dollar"),
    ("CAD", "Kanadischer Dollar"),
    ("CHF", "Schweizer Franken"),
    ("CNY", "Renminbi Yuan"),
    ("DKK", "Dänische Krone"),
    ("EUR", "Euro"),
    ("GBP", "Britisches Pfund"),
    ("JPY", "Japanischer Yen"),
    ("NOK", "Norwegische Krone"),
    ("PLN", "Polnischer Złoty"),
    ("RUB", "Russischer Rubel"),
    ("SEK", "Schwedische Krone"),
    ("USD", "US-Dollar"),
];

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];
const FRENCH_MONTH_ABBREVIATIONS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const FRENCH_DAYS: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];
const FRENCH_DAY_ABBREVIATIONS: [&str; 7] = [
    "dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam.",
];
const FRENCH_CURRENCIES: &[(&str, &str)] = &[
    ("AUD", "dollar australien"),
    ("CAD", "dollar canadien"),
    ("CHF", "franc suisse"),
    ("CNY", "yuan renminbi chinois"),
    ("EUR", "euro"),
    ("GBP", "livre sterling"),
    ("JPY", "yen japonais"),
    ("SEK", "couronne suédoise"),
    ("USD", "dollar des États-Unis"),
    ("XOF", "franc CFA (BCEAO)"),
];

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];
const SPANISH_MONTH_ABBREVIATIONS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];
const SPANISH_DAYS: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];
const SPANISH_DAY_ABBREVIATIONS: [&str; 7] = ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"];
const SPANISH_CURRENCIES: &[(&str, &str)] = &[
    ("ARS", "peso argentino"),
    ("AUD", "dólar australiano"),
    ("CAD", "dólar canadiense"),
    ("CHF", "franco suizo"),
    ("EUR", "euro"),
    ("GBP", "libra esterlina"),
    ("JPY", "yen"),
    ("MXN", "peso mexicano"),
    ("USD", "dólar estadounidense"),
];

pub(super) static INVARIANT: Culture = Culture {
    name: "",
    english_name: "Invariant Language (Invariant Country)",
    decimal_separator: '.',
    group_separator: ',',
    date_separator: "/",
    short_date_pattern: "MM/dd/yyyy",
    long_date_pattern: "dddd, dd MMMM yyyy",
    short_time_pattern: "HH:mm",
    long_time_pattern: "HH:mm:ss",
    am_designator: "AM",
    pm_designator: "PM",
    month_names: ENGLISH_MONTHS,
    month_abbreviations: ENGLISH_MONTH_ABBREVIATIONS,
    day_names: ENGLISH_DAYS,
    day_abbreviations: ENGLISH_DAY_ABBREVIATIONS,
    currency_names: &[],
};

static EN_US: Culture = Culture {
    name: "en-US",
    english_name: "English (United States)",
    decimal_separator: '.',
    group_separator: ',',
    date_separator: "/",
    short_date_pattern: "M/d/yyyy",
    long_date_pattern: "dddd, MMMM d, yyyy",
    short_time_pattern: "h:mm tt",
    long_time_pattern: "h:mm:ss tt",
    am_designator: "AM",
    pm_designator: "PM",
    month_names: ENGLISH_MONTHS,
    month_abbreviations: ENGLISH_MONTH_ABBREVIATIONS,
    day_names: ENGLISH_DAYS,
    day_abbreviations: ENGLISH_DAY_ABBREVIATIONS,
    currency_names: &[],
};

static EN_GB: Culture = Culture {
    name: "en-GB",
    english_name: "English (United Kingdom)",
    decimal_separator: '.',
    group_separator: ',',
    date_separator: "/",
    short_date_pattern: "dd/MM/yyyy",
    long_date_pattern: "dd MMMM yyyy",
    short_time_pattern: "HH:mm",
    long_time_pattern: "HH:mm:ss",
    am_designator: "am",
    pm_designator: "pm",
    month_names: ENGLISH_MONTHS,
    month_abbreviations: ENGLISH_MONTH_ABBREVIATIONS,
    day_names: ENGLISH_DAYS,
    day_abbreviations: ENGLISH_DAY_ABBREVIATIONS,
    currency_names: &[],
};

static NL_NL: Culture = Culture {
    name: "nl-NL",
    english_name: "Dutch (Netherlands)",
    decimal_separator: ',',
    group_separator: '.',
    date_separator: "-",
    short_date_pattern: "d/M/yyyy",
    long_date_pattern: "dddd d MMMM yyyy",
    short_time_pattern: "HH:mm",
    long_time_pattern: "HH:mm:ss",
    am_designator: "a.m.",
    pm_designator: "p.m.",
    month_names: DUTCH_MONTHS,
    month_abbreviations: DUTCH_MONTH_ABBREVIATIONS,
    day_names: DUTCH_DAYS,
    day_abbreviations: DUTCH_DAY_ABBREVIATIONS,
    currency_names: DUTCH_CURRENCIES,
};

static NL_BE: Culture = Culture {
    name: "nl-BE",
    english_name: "Dutch (Belgium)",
    decimal_separator: ',',
    group_separator: '.',
    date_separator: "/",
    short_date_pattern: "d/MM/yyyy",
    long_date_pattern: "dddd d MMMM yyyy",
    short_time_pattern: "H:mm",
    long_time_pattern: "H:mm:ss",
    am_designator: "a.m.",
    pm_designator: "p.m.",
    month_names: DUTCH_MONTHS,
    month_abbreviations: DUTCH_MONTH_ABBREVIATIONS,
    day_names: DUTCH_DAYS,
    day_abbreviations: DUTCH_DAY_ABBREVIATIONS,
    currency_names: DUTCH_CURRENCIES,
};

static DE_DE: Culture = Culture {
    name: "de-DE",
    english_name: "German (Germany)",
    decimal_separator: ',',
    group_separator: '.',
    date_separator: ".",
    short_date_pattern: "dd/MM/yyyy",
    long_date_pattern: "dddd, d. MMMM yyyy",
    short_time_pattern: "HH:mm",
    long_time_pattern: "HH:mm:ss",
    am_designator: "AM",
    pm_designator: "PM",
    month_names: GERMAN_MONTHS,
    month_abbreviations: GERMAN_MONTH_ABBREVIATIONS,
    day_names: GERMAN_DAYS,
    day_abbreviations: GERMAN_DAY_ABBREVIATIONS,
    currency_names: GERMAN_CURRENCIES,
};

static FR_FR: Culture = Culture {
    name: "fr-FR",
    english_name: "French (France)",
    decimal_separator: ',',
    group_separator: '\u{a0}',
    date_separator: "/",
    short_date_pattern: "dd/MM/yyyy",
    long_date_pattern: "dddd d MMMM yyyy",
    short_time_pattern: "HH:mm",
    long_time_pattern: "HH:mm:ss",
    am_designator: "AM",
    pm_designator: "PM",
    month_names: FRENCH_MONTHS,
    month_abbreviations: FRENCH_MONTH_ABBREVIATIONS,
    day_names: FRENCH_DAYS,
    day_abbreviations: FRENCH_DAY_ABBREVIATIONS,
    currency_names: FRENCH_CURRENCIES,
};

static ES_ES: Culture = Culture {
    name: "es-ES",
    english_name: "Spanish (Spain)",
    decimal_separator: ',',
    group_separator: '.',
    date_separator: "/",
    short_date_pattern: "dd/MM/yyyy",
    long_date_pattern: "dddd, d 'de' MMMM 'de' yyyy",
    short_time_pattern: "H:mm",
    long_time_pattern: "H:mm:ss",
    am_designator: "a. m.",
    pm_designator: "p. m.",
    month_names: SPANISH_MONTHS,
    month_abbreviations: SPANISH_MONTH_ABBREVIATIONS,
    day_names: SPANISH_DAYS,
    day_abbreviations: SPANISH_DAY_ABBREVIATIONS,
    currency_names: SPANISH_CURRENCIES,
};

pub(super) static ALL: &[&Culture] = &[
    &INVARIANT, &EN_US, &EN_GB, &NL_NL, &NL_BE, &DE_DE, &FR_FR, &ES_ES,
];

pub(super) static NEUTRAL_DEFAULTS: &[(&str, &Culture)] = &[
    ("en", &EN_US),
    ("nl", &NL_NL),
    ("de", &DE_DE),
    ("fr", &FR_FR),
    ("es", &ES_ES),
];
