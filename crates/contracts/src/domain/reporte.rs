use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Estado de cuenta: vista agregada de solo lectura sobre las cuentas de un
/// cliente y sus movimientos dentro de un rango de fechas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadoCuenta {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub cliente: ClienteReporte,
    pub cuentas: Vec<CuentaReporte>,
    pub total_creditos: f64,
    pub total_debitos: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteReporte {
    pub cliente_id: u32,
    pub nombre: String,
    pub identificacion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuentaReporte {
    pub numero_cuenta: String,
    pub tipo_cuenta: String,
    pub saldo_inicial: f64,
    pub saldo_actual: f64,
    pub movimientos: Vec<MovimientoReporte>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovimientoReporte {
    pub fecha: String,
    pub tipo_movimiento: String,
    pub valor: f64,
    pub saldo: f64,
}

impl EstadoCuenta {
    /// Distingue "rango sin actividad" de "reporte fallido": true si al
    /// menos una cuenta trae movimientos.
    pub fn tiene_movimientos(&self) -> bool {
        self.cuentas.iter().any(|c| !c.movimientos.is_empty())
    }
}

/// Documento PDF del estado de cuenta, codificado en base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespuestaPdf {
    pub pdf: String,
    pub filename: String,
}

const FORMATO_FECHA: &str = "%Y-%m-%d";

/// Valida la consulta de reporte antes de tocar la red: cliente
/// seleccionado, ambas fechas presentes y rango no invertido (inclusivo).
pub fn validar_consulta(
    cliente_id: u32,
    fecha_inicio: &str,
    fecha_fin: &str,
) -> Result<(), String> {
    if cliente_id == 0 {
        return Err("Debe seleccionar un cliente".to_string());
    }
    let inicio = NaiveDate::parse_from_str(fecha_inicio, FORMATO_FECHA);
    let fin = NaiveDate::parse_from_str(fecha_fin, FORMATO_FECHA);
    match (inicio, fin) {
        (Ok(inicio), Ok(fin)) => {
            if inicio > fin {
                Err("La fecha de inicio debe ser menor a la fecha fin".to_string())
            } else {
                Ok(())
            }
        }
        _ => Err("Debe seleccionar el rango de fechas".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estado(movimientos: Vec<MovimientoReporte>) -> EstadoCuenta {
        EstadoCuenta {
            fecha_inicio: "2025-01-01".to_string(),
            fecha_fin: "2025-01-31".to_string(),
            cliente: ClienteReporte {
                cliente_id: 1,
                nombre: "Jose Lema".to_string(),
                identificacion: "098254785".to_string(),
            },
            cuentas: vec![
                CuentaReporte {
                    numero_cuenta: "478758".to_string(),
                    tipo_cuenta: "Ahorro".to_string(),
                    saldo_inicial: 2000.0,
                    saldo_actual: 1500.0,
                    movimientos,
                },
                CuentaReporte {
                    numero_cuenta: "225487".to_string(),
                    tipo_cuenta: "Corriente".to_string(),
                    saldo_inicial: 100.0,
                    saldo_actual: 100.0,
                    movimientos: Vec::new(),
                },
            ],
            total_creditos: 0.0,
            total_debitos: 0.0,
        }
    }

    #[test]
    fn test_rango_invertido_rechazado() {
        assert_eq!(
            validar_consulta(1, "2025-02-01", "2025-01-01").unwrap_err(),
            "La fecha de inicio debe ser menor a la fecha fin"
        );
    }

    #[test]
    fn test_rango_de_un_dia_aceptado() {
        assert!(validar_consulta(1, "2025-01-01", "2025-01-01").is_ok());
    }

    #[test]
    fn test_cliente_sin_seleccionar() {
        assert_eq!(
            validar_consulta(0, "2025-01-01", "2025-02-01").unwrap_err(),
            "Debe seleccionar un cliente"
        );
    }

    #[test]
    fn test_fechas_ausentes_o_invalidas() {
        assert!(validar_consulta(1, "", "2025-01-01").is_err());
        assert!(validar_consulta(1, "2025-01-01", "").is_err());
        assert!(validar_consulta(1, "01/01/2025", "2025-02-01").is_err());
    }

    #[test]
    fn test_tiene_movimientos() {
        assert!(!estado(Vec::new()).tiene_movimientos());
        assert!(estado(vec![MovimientoReporte {
            fecha: "2025-01-05T10:00:00".to_string(),
            tipo_movimiento: "Credito".to_string(),
            valor: 500.0,
            saldo: 2500.0,
        }])
        .tiene_movimientos());
    }
}
