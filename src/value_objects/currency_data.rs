//! ISO 4217 reference data.

/// Reference data for one ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub numeric: u16,
    /// Digits after the decimal separator; `None` when not applicable.
    pub minor_unit: Option<u8>,
    pub symbol: &'static str,
    pub english_name: &'static str,
}

const fn info(
    code: &'static str,
    numeric: u16,
    minor_unit: Option<u8>,
    symbol: &'static str,
    english_name: &'static str,
) -> CurrencyInfo {
    CurrencyInfo {
        code,
        numeric,
        minor_unit,
        symbol,
        english_name,
    }
}

pub(super) static CURRENCIES: &[CurrencyInfo] = &[
    info("AED", 784, Some(2), "AED", "UAE Dirham"),
    info("ANG", 532, Some(2), "NAf.", "Netherlands Antillean Guilder"),
    info("ARS", 32, Some(2), "ARS", "Argentine Peso"),
    info("AUD", 36, Some(2), "A$", "Australian Dollar"),
    info("BGN", 975, Some(2), "BGN", "Bulgarian Lev"),
    info("BRL", 986, Some(2), "R$", "Brazilian Real"),
    info("CAD", 124, Some(2), "CA$", "Canadian Dollar"),
    info("CHF", 756, Some(2), "CHF", "Swiss Franc"),
    info("CLP", 152, Some(0), "CLP", "Chilean Peso"),
    info("CNY", 156, Some(2), "CN¥", "Yuan Renminbi"),
    info("CZK", 203, Some(2), "Kč", "Czech Koruna"),
    info("DKK", 208, Some(2), "kr.", "Danish Krone"),
    info("EGP", 818, Some(2), "EGP", "Egyptian Pound"),
    info("EUR", 978, Some(2), "€", "Euro"),
    info("GBP", 826, Some(2), "£", "Pound Sterling"),
    info("HKD", 344, Some(2), "HK$", "Hong Kong Dollar"),
    info("HUF", 348, Some(2), "Ft", "Forint"),
    info("IDR", 360, Some(2), "Rp", "Rupiah"),
    info("ILS", 376, Some(2), "₪", "New Israeli Sheqel"),
    info("INR", 356, Some(2), "₹", "Indian Rupee"),
    info("ISK", 352, Some(0), "ISK", "Iceland Krona"),
    info("JPY", 392, Some(0), "¥", "Yen"),
    info("KRW", 410, Some(0), "₩", "Won"),
    info("KWD", 414, Some(3), "KWD", "Kuwaiti Dinar"),
    info("MXN", 484, Some(2), "MX$", "Mexican Peso"),
    info("NOK", 578, Some(2), "NOK", "Norwegian Krone"),
    info("NZD", 554, Some(2), "NZ$", "New Zealand Dollar"),
    info("PLN", 985, Some(2), "zł", "Zloty"),
    info("RON", 946, Some(2), "RON", "Romanian Leu"),
    info("RUB", 643, Some(2), "₽", "Russian Ruble"),
    info("SEK", 752, Some(2), "SEK", "Swedish Krona"),
    info("SGD", 702, Some(2), "SGD", "Singapore Dollar"),
    info("SRD", 968, Some(2), "SRD", "Surinam Dollar"),
    info("THB", 764, Some(2), "฿", "Baht"),
    info("TRY", 949, Some(2), "₺", "Turkish Lira"),
    info("UAH", 980, Some(2), "₴", "Hryvnia"),
    info("USD", 840, Some(2), "$", "US Dollar"),
    info("XAU", 959, None, "XAU", "Gold"),
    info("XOF", 952, Some(0), "CFA", "CFA Franc BCEAO"),
    info("ZAR", 710, Some(2), "R", "Rand"),
];
