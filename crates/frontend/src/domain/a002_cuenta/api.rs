use crate::shared::api_utils::{self, get_json};
use crate::shared::controller::{ApiFuture, EntityApi, Modo};
use crate::shared::search::Selector;
use contracts::domain::cuenta::{
    validar_cuenta, CreateCuentaDto, Cuenta, UpdateCuentaDto,
};

pub async fn fetch_cuentas() -> Result<Vec<Cuenta>, String> {
    get_json("/cuentas").await
}

/// Roster para el select de movimientos: solo cuentas activas.
pub async fn fetch_cuentas_activas() -> Result<Vec<Cuenta>, String> {
    Ok(fetch_cuentas()
        .await?
        .into_iter()
        .filter(|c| c.estado)
        .collect())
}

pub async fn fetch_cuenta(id: u32) -> Result<Cuenta, String> {
    get_json(&format!("/cuentas/{}", id)).await
}

pub async fn fetch_cuentas_por_cliente(cliente_id: u32) -> Result<Vec<Cuenta>, String> {
    get_json(&format!("/cuentas/cliente/{}", cliente_id)).await
}

pub struct CuentaApi;

impl EntityApi for CuentaApi {
    type Record = Cuenta;
    type Draft = CreateCuentaDto;

    fn listar(&self) -> ApiFuture<Vec<Cuenta>> {
        Box::pin(fetch_cuentas())
    }

    fn crear(&self, borrador: CreateCuentaDto) -> ApiFuture<()> {
        Box::pin(async move {
            api_utils::send_json("POST", "/cuentas", &borrador, "Error al crear cuenta").await
        })
    }

    fn actualizar(&self, id: u32, borrador: CreateCuentaDto) -> ApiFuture<()> {
        let dto = UpdateCuentaDto::desde_borrador(&borrador);
        Box::pin(async move {
            api_utils::send_json(
                "PUT",
                &format!("/cuentas/{}", id),
                &dto,
                "Error al actualizar cuenta",
            )
            .await
        })
    }

    fn eliminar(&self, id: u32) -> ApiFuture<()> {
        Box::pin(async move {
            api_utils::delete(&format!("/cuentas/{}", id), "Error al eliminar cuenta").await
        })
    }

    fn validar(&self, borrador: &CreateCuentaDto, modo: Modo) -> Result<(), String> {
        validar_cuenta(borrador, modo == Modo::Editar)
    }

    fn id_de(&self, registro: &Cuenta) -> u32 {
        registro.id
    }

    fn borrador_de(&self, registro: &Cuenta) -> CreateCuentaDto {
        CreateCuentaDto {
            numero_cuenta: registro.numero_cuenta.clone(),
            // el listado trae el tipo como texto, la API lo espera numérico
            tipo_cuenta: registro.codigo_tipo(),
            saldo_inicial: registro.saldo_inicial,
            estado: registro.estado,
            cliente_id: registro.cliente_id,
        }
    }

    fn selectores(&self) -> Vec<Selector<Cuenta>> {
        vec![
            Box::new(|c: &Cuenta| Some(c.numero_cuenta.clone())),
            Box::new(|c: &Cuenta| Some(c.tipo_cuenta.clone())),
            Box::new(|c: &Cuenta| c.nombre_cliente.clone()),
        ]
    }

    fn mensaje_creado(&self) -> &'static str {
        "Cuenta creada exitosamente"
    }
    fn mensaje_actualizado(&self) -> &'static str {
        "Cuenta actualizada exitosamente"
    }
    fn mensaje_eliminado(&self) -> &'static str {
        "Cuenta eliminada exitosamente"
    }
    fn confirmacion_eliminar(&self) -> &'static str {
        "¿Está seguro de eliminar esta cuenta?"
    }
    fn error_carga(&self, detalle: &str) -> String {
        format!("Error al cargar cuentas: {}", detalle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::cuenta::{TIPO_CUENTA_AHORRO, TIPO_CUENTA_CORRIENTE};

    fn cuenta(tipo: &str) -> Cuenta {
        Cuenta {
            id: 9,
            numero_cuenta: "478758".to_string(),
            tipo_cuenta: tipo.to_string(),
            saldo_inicial: 2000.0,
            saldo_actual: 1425.0,
            estado: true,
            cliente_id: 4,
            nombre_cliente: Some("Jose Lema".to_string()),
        }
    }

    #[test]
    fn test_borrador_deriva_codigo_de_tipo() {
        assert_eq!(
            CuentaApi.borrador_de(&cuenta("Ahorro")).tipo_cuenta,
            TIPO_CUENTA_AHORRO
        );
        assert_eq!(
            CuentaApi.borrador_de(&cuenta("Corriente")).tipo_cuenta,
            TIPO_CUENTA_CORRIENTE
        );
        // cualquier texto desconocido cae a corriente
        assert_eq!(
            CuentaApi.borrador_de(&cuenta("Otro")).tipo_cuenta,
            TIPO_CUENTA_CORRIENTE
        );
    }

    #[test]
    fn test_borrador_conserva_saldo_inicial() {
        let borrador = CuentaApi.borrador_de(&cuenta("Ahorro"));
        assert_eq!(borrador.saldo_inicial, 2000.0);
        assert_eq!(borrador.cliente_id, 4);
    }
}
