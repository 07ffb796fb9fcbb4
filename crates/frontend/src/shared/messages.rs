//! Transient user-facing notifications: one error slot and one success
//! slot, each with its own auto-expiry timer.
//!
//! A timer is an epoch number rather than a handle: setting a slot bumps
//! its epoch, so a previously scheduled expiry (carrying the old epoch)
//! becomes a no-op instead of clearing the newer message.

use leptos::prelude::*;

pub const DURACION_ERROR_MS: u32 = 5_000;
pub const DURACION_EXITO_MS: u32 = 3_000;
/// Informational texts share the success slot but stay a little longer.
pub const DURACION_INFO_MS: u32 = 5_000;

#[derive(Clone, Copy)]
pub struct MessageBus {
    pub error: RwSignal<Option<String>>,
    pub exito: RwSignal<Option<String>>,
    epoca_error: RwSignal<u64>,
    epoca_exito: RwSignal<u64>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self {
            error: RwSignal::new(None),
            exito: RwSignal::new(None),
            epoca_error: RwSignal::new(0),
            epoca_exito: RwSignal::new(0),
        }
    }

    pub fn mostrar_error(&self, mensaje: impl Into<String>) {
        self.mostrar_error_durante(mensaje, DURACION_ERROR_MS);
    }

    /// Variante con duración explícita; los errores de negocio largos
    /// (movimientos) se muestran más tiempo que el resto.
    pub fn mostrar_error_durante(&self, mensaje: impl Into<String>, duracion_ms: u32) {
        self.error.set(Some(mensaje.into()));
        let epoca = Self::avanzar(self.epoca_error);
        Self::programar(self.error, self.epoca_error, epoca, duracion_ms);
    }

    pub fn mostrar_exito(&self, mensaje: impl Into<String>) {
        self.exito.set(Some(mensaje.into()));
        let epoca = Self::avanzar(self.epoca_exito);
        Self::programar(self.exito, self.epoca_exito, epoca, DURACION_EXITO_MS);
    }

    /// "Sin datos" no es un fallo: viaja por la ranura de éxito.
    pub fn mostrar_info(&self, mensaje: impl Into<String>) {
        self.exito.set(Some(mensaje.into()));
        let epoca = Self::avanzar(self.epoca_exito);
        Self::programar(self.exito, self.epoca_exito, epoca, DURACION_INFO_MS);
    }

    /// Vacía ambas ranuras y cancela sus timers.
    pub fn limpiar(&self) {
        self.error.set(None);
        self.exito.set(None);
        Self::avanzar(self.epoca_error);
        Self::avanzar(self.epoca_exito);
    }

    fn avanzar(epoca: RwSignal<u64>) -> u64 {
        let nueva = epoca.get_untracked() + 1;
        epoca.set(nueva);
        nueva
    }

    /// Expiry scheduled for `epoca`: clears the slot only if no newer
    /// message (or an explicit clear) has claimed it since.
    fn expirar(ranura: RwSignal<Option<String>>, epoca_actual: RwSignal<u64>, epoca: u64) {
        if epoca_actual.get_untracked() == epoca {
            ranura.set(None);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn programar(
        ranura: RwSignal<Option<String>>,
        epoca_actual: RwSignal<u64>,
        epoca: u64,
        duracion_ms: u32,
    ) {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duracion_ms).await;
            Self::expirar(ranura, epoca_actual, epoca);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn programar(
        _ranura: RwSignal<Option<String>>,
        _epoca_actual: RwSignal<u64>,
        _epoca: u64,
        _duracion_ms: u32,
    ) {
        // Sin navegador no hay timers; las pruebas disparan `expirar` a mano.
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_una_sola_ranura_por_tipo() {
        let bus = MessageBus::new();
        bus.mostrar_error("primero");
        bus.mostrar_error("segundo");
        // reemplaza, nunca encola
        assert_eq!(bus.error.get_untracked().as_deref(), Some("segundo"));
    }

    #[test]
    fn test_expiracion_limpia_la_ranura() {
        let bus = MessageBus::new();
        bus.mostrar_exito("guardado");
        let epoca = bus.epoca_exito.get_untracked();
        MessageBus::expirar(bus.exito, bus.epoca_exito, epoca);
        assert!(bus.exito.get_untracked().is_none());
    }

    #[test]
    fn test_reemplazo_cancela_el_timer_anterior() {
        let bus = MessageBus::new();
        bus.mostrar_error("viejo");
        let epoca_vieja = bus.epoca_error.get_untracked();
        bus.mostrar_error("nuevo");
        // el timer del mensaje viejo dispara y no debe tocar al nuevo
        MessageBus::expirar(bus.error, bus.epoca_error, epoca_vieja);
        assert_eq!(bus.error.get_untracked().as_deref(), Some("nuevo"));
    }

    #[test]
    fn test_limpiar_vacia_y_cancela_ambas() {
        let bus = MessageBus::new();
        bus.mostrar_error("error");
        let epoca_error = bus.epoca_error.get_untracked();
        bus.mostrar_exito("exito");
        bus.limpiar();
        assert!(bus.error.get_untracked().is_none());
        assert!(bus.exito.get_untracked().is_none());

        bus.mostrar_error("posterior");
        MessageBus::expirar(bus.error, bus.epoca_error, epoca_error);
        assert_eq!(bus.error.get_untracked().as_deref(), Some("posterior"));
    }

    #[test]
    fn test_ranuras_independientes() {
        let bus = MessageBus::new();
        bus.mostrar_error("error");
        bus.mostrar_info("sin movimientos");
        assert!(bus.error.get_untracked().is_some());
        assert!(bus.exito.get_untracked().is_some());
    }
}
