//! Date helpers for the report query form (`%Y-%m-%d` strings end to end).

use chrono::{Datelike, NaiveDate};

/// Today's date from the browser clock, as "YYYY-MM-DD".
pub fn hoy() -> String {
    let ahora = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        ahora.get_full_year(),
        ahora.get_month() + 1,
        ahora.get_date()
    )
}

/// First day of the month of `fecha`; input unchanged when unparseable.
pub fn primer_dia_del_mes(fecha: &str) -> String {
    match NaiveDate::parse_from_str(fecha, "%Y-%m-%d") {
        Ok(fecha) => format!("{:04}-{:02}-01", fecha.year(), fecha.month()),
        Err(_) => fecha.to_string(),
    }
}

/// Format ISO timestamps for the tables: "2025-01-10T09:30:00" ->
/// "10/01/2025 09:30".
pub fn formatear_fecha_hora(fecha: &str) -> String {
    if let Some((dia, hora)) = fecha.split_once('T') {
        if let Some((anio, resto)) = dia.split_once('-') {
            if let Some((mes, dia)) = resto.split_once('-') {
                let hora = hora.get(..5).unwrap_or(hora);
                return format!("{}/{}/{} {}", dia, mes, anio, hora);
            }
        }
    }
    fecha.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primer_dia_del_mes() {
        assert_eq!(primer_dia_del_mes("2025-08-23"), "2025-08-01");
        assert_eq!(primer_dia_del_mes("2024-02-29"), "2024-02-01");
    }

    #[test]
    fn test_primer_dia_entrada_invalida() {
        assert_eq!(primer_dia_del_mes(""), "");
        assert_eq!(primer_dia_del_mes("23/08/2025"), "23/08/2025");
    }

    #[test]
    fn test_formatear_fecha_hora() {
        assert_eq!(
            formatear_fecha_hora("2025-01-10T09:30:00"),
            "10/01/2025 09:30"
        );
        assert_eq!(formatear_fecha_hora("sin formato"), "sin formato");
    }
}
