use chrono::{Datelike, Local, NaiveDate};

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
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

/// Date longue espagnole, première lettre en majuscule :
/// `Miércoles, 14 de febrero de 2024`.
pub fn format_spanish_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    capitalize_first(&format!(
        "{}, {} de {} de {}",
        weekday,
        date.day(),
        month,
        date.year()
    ))
}

/// Date du jour (fuseau local), affichée en tête de la lettre.
pub fn today_letter_date() -> String {
    format_spanish_date(Local::now().date_naive())
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
