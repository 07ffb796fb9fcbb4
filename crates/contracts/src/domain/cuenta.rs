use serde::{Deserialize, Serialize};

pub const TIPO_CUENTA_AHORRO: u8 = 1;
pub const TIPO_CUENTA_CORRIENTE: u8 = 2;

/// Cuenta bancaria. `tipo_cuenta` llega como texto ("Ahorro" / "Corriente");
/// `nombre_cliente` es un campo desnormalizado solo para listados.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cuenta {
    pub id: u32,
    pub numero_cuenta: String,
    pub tipo_cuenta: String,
    pub saldo_inicial: f64,
    pub saldo_actual: f64,
    pub estado: bool,
    pub cliente_id: u32,
    #[serde(default)]
    pub nombre_cliente: Option<String>,
}

impl Cuenta {
    /// Código numérico del tipo de cuenta tal como lo espera la API
    /// al crear o actualizar: "Ahorro" -> 1, cualquier otro valor -> 2.
    pub fn codigo_tipo(&self) -> u8 {
        if self.tipo_cuenta == "Ahorro" {
            TIPO_CUENTA_AHORRO
        } else {
            TIPO_CUENTA_CORRIENTE
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCuentaDto {
    pub numero_cuenta: String,
    /// 1 = Ahorro, 2 = Corriente
    pub tipo_cuenta: u8,
    pub saldo_inicial: f64,
    pub estado: bool,
    pub cliente_id: u32,
}

impl Default for CreateCuentaDto {
    fn default() -> Self {
        Self {
            numero_cuenta: String::new(),
            tipo_cuenta: TIPO_CUENTA_AHORRO,
            saldo_inicial: 0.0,
            estado: true,
            cliente_id: 0,
        }
    }
}

/// El saldo inicial no se puede modificar una vez abierta la cuenta,
/// por eso no forma parte del payload de actualización.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCuentaDto {
    pub numero_cuenta: String,
    pub tipo_cuenta: u8,
    pub estado: bool,
}

impl UpdateCuentaDto {
    pub fn desde_borrador(form: &CreateCuentaDto) -> Self {
        Self {
            numero_cuenta: form.numero_cuenta.clone(),
            tipo_cuenta: form.tipo_cuenta,
            estado: form.estado,
        }
    }
}

/// Valida el borrador de cuenta. El saldo inicial solo se controla al crear.
pub fn validar_cuenta(form: &CreateCuentaDto, es_edicion: bool) -> Result<(), String> {
    if form.numero_cuenta.trim().is_empty() {
        return Err("El número de cuenta es obligatorio".to_string());
    }
    if form.cliente_id == 0 {
        return Err("Debe seleccionar un cliente".to_string());
    }
    if !es_edicion && form.saldo_inicial < 0.0 {
        return Err("El saldo inicial no puede ser negativo".to_string());
    }
    Ok(())
}
