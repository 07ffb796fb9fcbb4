//! Pantalla de reportes: consulta del estado de cuenta de un cliente en un
//! rango de fechas, con exportación a PDF.

use super::api::ReporteApi;
use crate::shared::date_utils::primer_dia_del_mes;
use crate::shared::export;
use crate::shared::messages::MessageBus;
use contracts::domain::cliente::Cliente;
use contracts::domain::reporte::{validar_consulta, EstadoCuenta};
use leptos::prelude::*;
use std::sync::Arc;

pub struct ReporteController<A: ReporteApi> {
    api: Arc<A>,
    pub clientes: RwSignal<Vec<Cliente>>,
    pub cliente_id: RwSignal<u32>,
    pub fecha_inicio: RwSignal<String>,
    pub fecha_fin: RwSignal<String>,
    pub estado: RwSignal<Option<EstadoCuenta>>,
    pub cargando: RwSignal<bool>,
    pub mensajes: MessageBus,
}

impl<A: ReporteApi> Clone for ReporteController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            clientes: self.clientes,
            cliente_id: self.cliente_id,
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            estado: self.estado,
            cargando: self.cargando,
            mensajes: self.mensajes,
        }
    }
}

impl<A: ReporteApi> ReporteController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            clientes: RwSignal::new(Vec::new()),
            cliente_id: RwSignal::new(0),
            fecha_inicio: RwSignal::new(String::new()),
            fecha_fin: RwSignal::new(String::new()),
            estado: RwSignal::new(None),
            cargando: RwSignal::new(false),
            mensajes: MessageBus::new(),
        }
    }

    /// Rango por defecto: del primer día del mes de `hoy` hasta `hoy`.
    pub fn restablecer_fechas(&self, hoy: &str) {
        self.fecha_inicio.set(primer_dia_del_mes(hoy));
        self.fecha_fin.set(hoy.to_string());
    }

    /// Valida la consulta; si falla, reporta el error y no se toca la red.
    fn validar(&self) -> bool {
        let resultado = validar_consulta(
            self.cliente_id.get_untracked(),
            &self.fecha_inicio.get_untracked(),
            &self.fecha_fin.get_untracked(),
        );
        match resultado {
            Ok(()) => true,
            Err(mensaje) => {
                self.mensajes.mostrar_error(mensaje);
                false
            }
        }
    }

    /// Consulta el estado de cuenta. Un rango sin movimientos no es un
    /// fallo: se informa por la ranura de éxito.
    pub async fn generar(&self) {
        if !self.validar() {
            return;
        }

        self.cargando.set(true);
        self.mensajes.error.set(None);
        // descartar el reporte anterior antes de resolver la consulta nueva
        self.estado.set(None);

        match self
            .api
            .estado_cuenta(
                self.cliente_id.get_untracked(),
                self.fecha_inicio.get_untracked(),
                self.fecha_fin.get_untracked(),
            )
            .await
        {
            Ok(reporte) => {
                let sin_movimientos = !reporte.tiene_movimientos();
                self.estado.set(Some(reporte));
                if sin_movimientos {
                    self.mensajes
                        .mostrar_info("No se encontraron movimientos en el período seleccionado");
                }
            }
            Err(mensaje) => self.mensajes.mostrar_error(mensaje),
        }
        self.cargando.set(false);
    }

    /// Descarga el PDF del estado de cuenta con el rango vigente.
    pub async fn descargar_pdf(&self) {
        if !self.validar() {
            return;
        }

        self.cargando.set(true);
        self.mensajes.error.set(None);

        match self
            .api
            .estado_cuenta_pdf(
                self.cliente_id.get_untracked(),
                self.fecha_inicio.get_untracked(),
                self.fecha_fin.get_untracked(),
            )
            .await
        {
            Ok(respuesta) => match export::descargar_pdf(&respuesta) {
                Ok(()) => self.mensajes.mostrar_exito("PDF descargado exitosamente"),
                Err(mensaje) => self.mensajes.mostrar_error(mensaje),
            },
            Err(mensaje) => self.mensajes.mostrar_error(mensaje),
        }
        self.cargando.set(false);
    }

    /// URL de visualización del PDF, o `None` si la consulta no valida.
    pub fn url_ver_pdf(&self) -> Option<String> {
        if !self.validar() {
            return None;
        }
        Some(self.api.url_descarga_pdf(
            self.cliente_id.get_untracked(),
            &self.fecha_inicio.get_untracked(),
            &self.fecha_fin.get_untracked(),
        ))
    }

    pub fn limpiar(&self) {
        self.cliente_id.set(0);
        self.estado.set(None);
        self.mensajes.limpiar();
    }
}
