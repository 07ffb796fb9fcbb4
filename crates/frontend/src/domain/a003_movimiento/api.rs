use crate::shared::api_utils::{self, get_json};
use crate::shared::controller::{ApiFuture, EntityApi, Modo};
use crate::shared::search::Selector;
use contracts::domain::movimiento::{validar_movimiento, CreateMovimientoDto, Movimiento};

/// Los errores de movimiento traen explicaciones de negocio largas
/// ("Saldo no disponible..."), por eso se muestran 16 s en vez de 5 s.
const DURACION_ERROR_MOVIMIENTO_MS: u32 = 16_000;

pub async fn fetch_movimientos() -> Result<Vec<Movimiento>, String> {
    get_json("/movimientos").await
}

pub async fn fetch_movimiento(id: u32) -> Result<Movimiento, String> {
    get_json(&format!("/movimientos/{}", id)).await
}

pub async fn fetch_movimientos_por_cuenta(cuenta_id: u32) -> Result<Vec<Movimiento>, String> {
    get_json(&format!("/movimientos/cuenta/{}", cuenta_id)).await
}

pub struct MovimientoApi;

impl EntityApi for MovimientoApi {
    type Record = Movimiento;
    type Draft = CreateMovimientoDto;

    fn listar(&self) -> ApiFuture<Vec<Movimiento>> {
        Box::pin(fetch_movimientos())
    }

    fn crear(&self, borrador: CreateMovimientoDto) -> ApiFuture<()> {
        Box::pin(async move {
            api_utils::send_json(
                "POST",
                "/movimientos",
                &borrador,
                "Error al registrar movimiento",
            )
            .await
        })
    }

    // sin `actualizar`: los movimientos son inmutables

    fn eliminar(&self, id: u32) -> ApiFuture<()> {
        Box::pin(async move {
            api_utils::delete(
                &format!("/movimientos/{}", id),
                "Error al eliminar movimiento",
            )
            .await
        })
    }

    fn validar(&self, borrador: &CreateMovimientoDto, _modo: Modo) -> Result<(), String> {
        validar_movimiento(borrador)
    }

    fn id_de(&self, registro: &Movimiento) -> u32 {
        registro.id
    }

    fn borrador_de(&self, _registro: &Movimiento) -> CreateMovimientoDto {
        CreateMovimientoDto::default()
    }

    fn selectores(&self) -> Vec<Selector<Movimiento>> {
        vec![
            Box::new(|m: &Movimiento| m.numero_cuenta.clone()),
            Box::new(|m: &Movimiento| Some(m.tipo_movimiento.clone())),
        ]
    }

    /// Más recientes primero (las fechas ISO ordenan lexicográficamente).
    fn preparar_lista(&self, mut items: Vec<Movimiento>) -> Vec<Movimiento> {
        items.sort_by(|a, b| b.fecha.cmp(&a.fecha));
        items
    }

    fn mensaje_creado(&self) -> &'static str {
        "Movimiento registrado exitosamente"
    }
    fn mensaje_eliminado(&self) -> &'static str {
        "Movimiento eliminado exitosamente"
    }
    fn confirmacion_eliminar(&self) -> &'static str {
        "¿Está seguro de eliminar este movimiento?"
    }
    fn error_carga(&self, detalle: &str) -> String {
        format!("Error al cargar movimientos: {}", detalle)
    }
    fn duracion_error_crear(&self) -> u32 {
        DURACION_ERROR_MOVIMIENTO_MS
    }
}
