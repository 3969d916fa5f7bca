//! Names for the Hebrew calendar side.

use luach_hebrew::{Holiday, Parasha, Weekday, YearType};

use crate::Locale;

/// Month display names; the last three slots are Adar, Adar I, Adar II.
const MONTH_NAMES: [&str; 14] = [
    "ניסן", "אייר", "סיוון", "תמוז", "אב", "אלול", "תשרי", "חשוון", "כסלו", "טבת", "שבט",
    "אדר", "אדר א", "אדר ב",
];
const MONTH_NAMES_EN: [&str; 14] = [
    "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar I", "Adar II",
];

const WEEKDAY_NAMES: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];
const WEEKDAY_NAMES_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Year-type mnemonics: start weekday, length class, Pesach weekday.
const TYPE_SIGNS: [&str; 14] = [
    "בחג", "זחא", "גכה", "הכז", "בשה", "זשא", "זשג", "בחה", "החא", "זחג", "גכז", "בשז",
    "השג", "זשה",
];
const TYPE_SIGNS_EN: [&str; 14] = [
    "BHG", "ZHA", "GCH", "HCZ", "BSH", "ZSA", "ZSG", "BHH", "HHA", "ZHG", "GCZ", "BSZ", "HSG",
    "ZSH",
];

/// Name of `month` (1 = Nisan .. 13), or `None` for an invalid number.
///
/// `leap` selects between Adar and Adar I for month 12; month 13 is always
/// Adar II.
pub fn month_name(month: u8, leap: bool, locale: Locale) -> Option<&'static str> {
    if !(1..=13).contains(&month) || (month == 13 && !leap) {
        return None;
    }
    let index = if month > 11 && leap { month + 1 } else { month };
    let table = match locale {
        Locale::Hebrew => &MONTH_NAMES,
        Locale::English => &MONTH_NAMES_EN,
    };
    Some(table[usize::from(index) - 1])
}

/// Name of a weekday.
pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    let table = match locale {
        Locale::Hebrew => &WEEKDAY_NAMES,
        Locale::English => &WEEKDAY_NAMES_EN,
    };
    table[usize::from(weekday.number()) - 1]
}

/// Three-letter year-type mnemonic.
pub fn year_type_sign(year_type: YearType, locale: Locale) -> &'static str {
    let table = match locale {
        Locale::Hebrew => &TYPE_SIGNS,
        Locale::English => &TYPE_SIGNS_EN,
    };
    table[year_type.index()]
}

/// Display name of a holiday.
pub fn holiday_name(holiday: Holiday, locale: Locale) -> &'static str {
    match locale {
        Locale::Hebrew => match holiday {
            Holiday::Pesach => "פסח א",
            Holiday::PesachDiaspora => "פסח ב",
            Holiday::CholHamoedPesach => "חול המועד פסח",
            Holiday::PesachSeventh => "פסח ז",
            Holiday::PesachEighthDiaspora => "פסח ח",
            Holiday::HolocaustDay => "יום השואה",
            Holiday::RemembranceDay => "יום הזכרון",
            Holiday::IndependenceDay => "יום העצמאות",
            Holiday::SecondPesach => "פסח שני",
            Holiday::LagBaomer => "לג בעומר",
            Holiday::JerusalemDay => "יום רושלים",
            Holiday::Shavuot => "שבועות",
            Holiday::ShavuotDiaspora => "שבועוץ ב",
            Holiday::FastOfTamuz => "יז בתמוז",
            Holiday::FastOfAv => "ט באב",
            Holiday::TuBeAv => "טו באב",
            Holiday::RoshHashana => "ראש השנה א",
            Holiday::RoshHashanaSecond => "ראש השנה ב",
            Holiday::FastOfGedaliah => "צום גדליה",
            Holiday::Kippur => "כיפור",
            Holiday::Sukkot => "סוכות",
            Holiday::SukkotDiaspora => "סוכות ב",
            Holiday::CholHamoedSukkot => "חול המועד סוכות",
            Holiday::HoshaanaRabba => "הושענה רבא",
            Holiday::SheminiAtzeretSimchatTorah => "שמיני עצרת שמחת תורה",
            Holiday::SheminiAtzeret => "שמיני עצרת",
            Holiday::SimchatTorah => "שמחת תורה",
            Holiday::Chanukka1 => "חנוכה א",
            Holiday::Chanukka2 => "חנוכה ב",
            Holiday::Chanukka3 => "חנוכה ג",
            Holiday::Chanukka4 => "חנוכה ד",
            Holiday::Chanukka5 => "חנוכה ה",
            Holiday::Chanukka6 => "חנוכה ו",
            Holiday::Chanukka7 => "חנוכה ז",
            Holiday::Chanukka8 => "חנוכה ח",
            Holiday::FastOfTevet => "י בטבת",
            Holiday::TuBiShvat => "טו בשבט",
            Holiday::FastOfEsther => "תענית אסתר",
            Holiday::Purim => "פורים",
            Holiday::ShushanPurim => "שושן פורים",
            Holiday::PurimKatan => "פורים קטן",
            Holiday::ShushanPurimKatan => "שושן פורים קטן",
        },
        Locale::English => match holiday {
            Holiday::Pesach => "Pesach",
            Holiday::PesachDiaspora => "Pesach (diaspora)",
            Holiday::CholHamoedPesach => "Chol Hamoed Pesach",
            Holiday::PesachSeventh => "Pesach 7",
            Holiday::PesachEighthDiaspora => "Pesach 7 (diaspora)",
            Holiday::HolocaustDay => "Holocaust Day",
            Holiday::RemembranceDay => "Remembrance Day",
            Holiday::IndependenceDay => "Independence Day",
            Holiday::SecondPesach => "Second Pesach",
            Holiday::LagBaomer => "Lag Baomer",
            Holiday::JerusalemDay => "Jerusalem Day",
            Holiday::Shavuot => "Shavuot",
            Holiday::ShavuotDiaspora => "Shavuot (diaspora)",
            Holiday::FastOfTamuz => "Fast of Tamuz",
            Holiday::FastOfAv => "Fast of Av",
            Holiday::TuBeAv => "Tu beAv",
            Holiday::RoshHashana => "Rosh haShana",
            Holiday::RoshHashanaSecond => "Rosh haShana 2",
            Holiday::FastOfGedaliah => "Fast of Gedaliah",
            Holiday::Kippur => "Kippur",
            Holiday::Sukkot => "Sukkot",
            Holiday::SukkotDiaspora => "Sukkot Diaspora",
            Holiday::CholHamoedSukkot => "Chol haMoed Sukkot",
            Holiday::HoshaanaRabba => "Hoshaana Rabba",
            Holiday::SheminiAtzeretSimchatTorah => "Shemini Atzeret Simchat Torah",
            Holiday::SheminiAtzeret => "Shemini Atzeret",
            Holiday::SimchatTorah => "Simchat Torah",
            Holiday::Chanukka1 => "Chanukka 1",
            Holiday::Chanukka2 => "Chanukka 2",
            Holiday::Chanukka3 => "Chanukka 3",
            Holiday::Chanukka4 => "Chanukka 4",
            Holiday::Chanukka5 => "Chanukka 5",
            Holiday::Chanukka6 => "Chanukka 6",
            Holiday::Chanukka7 => "Chanukka 7",
            Holiday::Chanukka8 => "Chanukka 8",
            Holiday::FastOfTevet => "Fast of Tevet",
            Holiday::TuBiShvat => "Tu BiShvat",
            Holiday::FastOfEsther => "Fast of Esther",
            Holiday::Purim => "Purim",
            Holiday::ShushanPurim => "Shushan Purim",
            Holiday::PurimKatan => "Purim Katan",
            Holiday::ShushanPurimKatan => "Shushan Purim Katan",
        },
    }
}

const PARASHA_NAMES: [&str; 54] = [
    "בראשית",
    "נח",
    "לך לך",
    "וירא",
    "חיי שרה",
    "תולדות",
    "ויצא",
    "וישלח",
    "וישב",
    "מקץ",
    "ויגש",
    "ויחי",
    "שמות",
    "וארא",
    "בא",
    "בשלח",
    "יתרו",
    "משפטים",
    "תרומה",
    "תצוה",
    "כי תשא",
    "ויקהל",
    "פקודי",
    "ויקרא",
    "צו",
    "שמיני",
    "תזריע",
    "מצורע",
    "אחרי מות",
    "קדושים",
    "אמור",
    "בהר",
    "בחוקותי",
    "במדבר",
    "נשא",
    "בהעלותך",
    "שלח לך",
    "קרח",
    "חקת",
    "בלק",
    "פינחס",
    "מטות",
    "מסעי",
    "דברים",
    "ואתחנן",
    "עקב",
    "ראה",
    "שופטים",
    "כי תצא",
    "כי תבוא",
    "נצבים",
    "וילך",
    "האזינו",
    "וזאת הברכה",
];

const PARASHA_NAMES_EN: [&str; 54] = [
    "Bereshit",
    "Noach",
    "Lech Lecha",
    "Vayera",
    "Chayei Sarah",
    "Toldot",
    "Vayetze",
    "Vayishlach",
    "Vayeshev",
    "Miketz",
    "Vayigash",
    "Vayechi",
    "Shemot",
    "Vaera",
    "Bo",
    "Beshalach",
    "Yitro",
    "Mishpatim",
    "Terumah",
    "Tetzaveh",
    "Ki Tisa",
    "Vayakhel",
    "Pekudei",
    "Vayikra",
    "Tzav",
    "Shemini",
    "Tazria",
    "Metzora",
    "Acharei Mot",
    "Kedoshim",
    "Emor",
    "Behar",
    "Bechukotai",
    "Bamidbar",
    "Naso",
    "Behaalotcha",
    "Shelach",
    "Korach",
    "Chukat",
    "Balak",
    "Pinchas",
    "Matot",
    "Masei",
    "Devarim",
    "Vaetchanan",
    "Ekev",
    "Reeh",
    "Shoftim",
    "Ki Tetze",
    "Ki Tavo",
    "Nitzavim",
    "Vayelech",
    "Haazinu",
    "Vezot Haberachah",
];

/// Display name of a weekly reading.
pub fn parasha_name(parasha: Parasha, locale: Locale) -> &'static str {
    let table = match locale {
        Locale::Hebrew => &PARASHA_NAMES,
        Locale::English => &PARASHA_NAMES_EN,
    };
    table[usize::from(parasha.number()) - 1]
}
