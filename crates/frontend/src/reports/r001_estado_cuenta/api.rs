use crate::shared::api_utils::{api_url, get_json_con_detalle};
use crate::shared::controller::ApiFuture;
use contracts::domain::reporte::{EstadoCuenta, RespuestaPdf};

/// Acceso a los reportes; trait para poder sustituirlo en pruebas.
pub trait ReporteApi: Send + Sync + 'static {
    fn estado_cuenta(
        &self,
        cliente_id: u32,
        fecha_inicio: String,
        fecha_fin: String,
    ) -> ApiFuture<EstadoCuenta>;

    fn estado_cuenta_pdf(
        &self,
        cliente_id: u32,
        fecha_inicio: String,
        fecha_fin: String,
    ) -> ApiFuture<RespuestaPdf>;

    /// URL determinista del endpoint de descarga; no decodifica nada, se
    /// entrega tal cual a la navegación del navegador.
    fn url_descarga_pdf(&self, cliente_id: u32, fecha_inicio: &str, fecha_fin: &str) -> String;
}

/// Query string del reporte, siempre en el orden clienteId, fechaInicio,
/// fechaFin que espera el backend.
pub fn query_reporte(cliente_id: u32, fecha_inicio: &str, fecha_fin: &str) -> String {
    format!(
        "clienteId={}&fechaInicio={}&fechaFin={}",
        cliente_id,
        urlencoding::encode(fecha_inicio),
        urlencoding::encode(fecha_fin)
    )
}

pub struct HttpReporteApi;

impl ReporteApi for HttpReporteApi {
    fn estado_cuenta(
        &self,
        cliente_id: u32,
        fecha_inicio: String,
        fecha_fin: String,
    ) -> ApiFuture<EstadoCuenta> {
        let path = format!(
            "/reportes?{}",
            query_reporte(cliente_id, &fecha_inicio, &fecha_fin)
        );
        Box::pin(async move {
            get_json_con_detalle(&path, "Error al generar el reporte").await
        })
    }

    fn estado_cuenta_pdf(
        &self,
        cliente_id: u32,
        fecha_inicio: String,
        fecha_fin: String,
    ) -> ApiFuture<RespuestaPdf> {
        let path = format!(
            "/reportes/pdf?{}",
            query_reporte(cliente_id, &fecha_inicio, &fecha_fin)
        );
        Box::pin(async move {
            get_json_con_detalle(&path, "Error al descargar el PDF").await
        })
    }

    fn url_descarga_pdf(&self, cliente_id: u32, fecha_inicio: &str, fecha_fin: &str) -> String {
        api_url(&format!(
            "/reportes/pdf/download?{}",
            query_reporte(cliente_id, fecha_inicio, fecha_fin)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orden_fijo_de_parametros() {
        assert_eq!(
            query_reporte(4, "2025-01-01", "2025-01-31"),
            "clienteId=4&fechaInicio=2025-01-01&fechaFin=2025-01-31"
        );
    }

    #[test]
    fn test_codifica_las_fechas() {
        // una fecha mal formada no rompe la URL
        assert_eq!(
            query_reporte(1, "2025 01 01", "2025-01-31"),
            "clienteId=1&fechaInicio=2025%2001%2001&fechaFin=2025-01-31"
        );
    }
}
