use serde::{Deserialize, Serialize};

pub const TIPO_MOVIMIENTO_CREDITO: u8 = 1;
pub const TIPO_MOVIMIENTO_DEBITO: u8 = 2;

/// Movimiento aplicado a una cuenta. El signo del valor y el saldo
/// resultante los determina el servidor; el cliente solo envía la magnitud.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movimiento {
    pub id: u32,
    pub fecha: String,
    pub tipo_movimiento: String,
    pub valor: f64,
    pub saldo: f64,
    pub cuenta_id: u32,
    #[serde(default)]
    pub numero_cuenta: Option<String>,
}

/// Los movimientos son inmutables: solo existe payload de creación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovimientoDto {
    /// 1 = Crédito (depósito), 2 = Débito (retiro)
    pub tipo_movimiento: u8,
    pub valor: f64,
    pub cuenta_id: u32,
}

impl Default for CreateMovimientoDto {
    fn default() -> Self {
        Self {
            tipo_movimiento: TIPO_MOVIMIENTO_CREDITO,
            valor: 0.0,
            cuenta_id: 0,
        }
    }
}

/// Valida el borrador de movimiento. La suficiencia de saldo la decide
/// el servidor, aquí solo se controla la forma de la entrada.
pub fn validar_movimiento(form: &CreateMovimientoDto) -> Result<(), String> {
    if form.cuenta_id == 0 {
        return Err("Debe seleccionar una cuenta".to_string());
    }
    if form.valor <= 0.0 {
        return Err("El valor debe ser mayor a cero".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movimiento_valido_pasa() {
        let form = CreateMovimientoDto {
            tipo_movimiento: TIPO_MOVIMIENTO_CREDITO,
            valor: 500.0,
            cuenta_id: 1,
        };
        assert!(validar_movimiento(&form).is_ok());
    }

    #[test]
    fn test_valor_cero_rechazado() {
        let form = CreateMovimientoDto {
            valor: 0.0,
            cuenta_id: 1,
            ..Default::default()
        };
        assert_eq!(
            validar_movimiento(&form).unwrap_err(),
            "El valor debe ser mayor a cero"
        );
    }

    #[test]
    fn test_cuenta_cero_rechazada_primero() {
        // sin cuenta seleccionada gana la primera regla, no la del valor
        let form = CreateMovimientoDto::default();
        assert_eq!(
            validar_movimiento(&form).unwrap_err(),
            "Debe seleccionar una cuenta"
        );
    }

    #[test]
    fn test_payload_de_creacion() {
        let form = CreateMovimientoDto {
            tipo_movimiento: 1,
            valor: 500.0,
            cuenta_id: 1,
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"tipoMovimiento":1,"valor":500.0,"cuentaId":1})
        );
    }
}
