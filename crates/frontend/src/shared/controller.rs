//! Generic entity workflow: list load, substring search, modal-driven
//! create/edit with validation, confirm-gated delete and reload-on-success.
//!
//! The four console screens (clientes, cuentas, movimientos) used to be
//! independent copies of the same state machine; this module keeps a single
//! one, parametrized by an [`EntityApi`] capability set per entity kind.

use crate::shared::confirm::ConfirmFn;
use crate::shared::messages::{MessageBus, DURACION_ERROR_MS};
use crate::shared::search::{filtrar, Selector};
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, String>>>>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Modo {
    Crear,
    Editar,
}

/// Capacidades de una clase de entidad: operaciones remotas, validación
/// local y los textos propios de cada pantalla.
pub trait EntityApi: Send + Sync + 'static {
    type Record: Clone + Send + Sync + 'static;
    type Draft: Clone + Default + Send + Sync + 'static;

    fn listar(&self) -> ApiFuture<Vec<Self::Record>>;
    fn crear(&self, borrador: Self::Draft) -> ApiFuture<()>;
    /// Las entidades inmutables (movimientos) no la redefinen.
    fn actualizar(&self, _id: u32, _borrador: Self::Draft) -> ApiFuture<()> {
        Box::pin(async { Err("Operación no soportada".to_string()) })
    }
    fn eliminar(&self, id: u32) -> ApiFuture<()>;

    /// Validación local previa a cualquier llamada de red.
    fn validar(&self, borrador: &Self::Draft, modo: Modo) -> Result<(), String>;
    fn id_de(&self, registro: &Self::Record) -> u32;
    /// Siembra el borrador de edición a partir del registro listado.
    fn borrador_de(&self, registro: &Self::Record) -> Self::Draft;
    /// Campos sobre los que busca la barra de búsqueda.
    fn selectores(&self) -> Vec<Selector<Self::Record>>;
    /// Post-proceso del listado recién cargado (p. ej. orden cronológico).
    fn preparar_lista(&self, items: Vec<Self::Record>) -> Vec<Self::Record> {
        items
    }

    fn mensaje_creado(&self) -> &'static str;
    fn mensaje_actualizado(&self) -> &'static str {
        "Registro actualizado exitosamente"
    }
    fn mensaje_eliminado(&self) -> &'static str;
    fn confirmacion_eliminar(&self) -> &'static str;
    fn error_carga(&self, detalle: &str) -> String;
    /// Duración del error de creación; los movimientos la alargan porque
    /// el servidor devuelve explicaciones de negocio extensas.
    fn duracion_error_crear(&self) -> u32 {
        DURACION_ERROR_MS
    }
}

pub struct EntityController<A: EntityApi> {
    api: Arc<A>,
    confirmar: ConfirmFn,
    pub items: RwSignal<Vec<A::Record>>,
    pub filtrados: RwSignal<Vec<A::Record>>,
    pub termino: RwSignal<String>,
    pub modal_abierto: RwSignal<bool>,
    pub modo: RwSignal<Modo>,
    pub borrador: RwSignal<A::Draft>,
    pub enviando: RwSignal<bool>,
    pub mensajes: MessageBus,
    id_en_edicion: RwSignal<Option<u32>>,
}

impl<A: EntityApi> Clone for EntityController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            confirmar: Arc::clone(&self.confirmar),
            items: self.items,
            filtrados: self.filtrados,
            termino: self.termino,
            modal_abierto: self.modal_abierto,
            modo: self.modo,
            borrador: self.borrador,
            enviando: self.enviando,
            mensajes: self.mensajes,
            id_en_edicion: self.id_en_edicion,
        }
    }
}

impl<A: EntityApi> EntityController<A> {
    pub fn new(api: A, confirmar: ConfirmFn) -> Self {
        Self {
            api: Arc::new(api),
            confirmar,
            items: RwSignal::new(Vec::new()),
            filtrados: RwSignal::new(Vec::new()),
            termino: RwSignal::new(String::new()),
            modal_abierto: RwSignal::new(false),
            modo: RwSignal::new(Modo::Crear),
            borrador: RwSignal::new(A::Draft::default()),
            enviando: RwSignal::new(false),
            mensajes: MessageBus::new(),
            id_en_edicion: RwSignal::new(None),
        }
    }

    /// Recarga el listado completo y la vista filtrada.
    ///
    /// Las cargas concurrentes no se cancelan: si el usuario dispara dos
    /// recargas, la última respuesta en llegar pisa a la anterior.
    pub async fn cargar(&self) {
        match self.api.listar().await {
            Ok(datos) => {
                let datos = self.api.preparar_lista(datos);
                self.items.set(datos.clone());
                self.filtrados.set(datos);
            }
            Err(detalle) => self.mensajes.mostrar_error(self.api.error_carga(&detalle)),
        }
    }

    /// Recalcula la vista filtrada; seguro de llamar en cada pulsación.
    pub fn buscar(&self, termino: &str) {
        self.termino.set(termino.to_string());
        let selectores = self.api.selectores();
        self.filtrados
            .set(filtrar(&self.items.get_untracked(), termino, &selectores));
    }

    pub fn abrir_crear(&self) {
        self.modo.set(Modo::Crear);
        self.id_en_edicion.set(None);
        self.borrador.set(A::Draft::default());
        self.modal_abierto.set(true);
    }

    pub fn abrir_editar(&self, registro: &A::Record) {
        self.modo.set(Modo::Editar);
        self.id_en_edicion.set(Some(self.api.id_de(registro)));
        self.borrador.set(self.api.borrador_de(registro));
        self.modal_abierto.set(true);
    }

    /// Descarta el borrador y limpia ambas ranuras de mensajes.
    pub fn cerrar_modal(&self) {
        self.modal_abierto.set(false);
        self.id_en_edicion.set(None);
        self.borrador.set(A::Draft::default());
        self.mensajes.limpiar();
    }

    /// Valida y envía el borrador. Si la validación falla no se toca la
    /// red; si el servidor rechaza, el modal queda abierto con su mensaje.
    pub async fn enviar(&self) {
        let modo = self.modo.get_untracked();
        let borrador = self.borrador.get_untracked();
        if let Err(mensaje) = self.api.validar(&borrador, modo) {
            self.mensajes.mostrar_error(mensaje);
            return;
        }

        self.enviando.set(true);
        let id_edicion = self.id_en_edicion.get_untracked();
        let (resultado, es_edicion) = if let (Modo::Editar, Some(id)) = (modo, id_edicion) {
            (self.api.actualizar(id, borrador).await, true)
        } else {
            (self.api.crear(borrador).await, false)
        };
        self.enviando.set(false);

        match resultado {
            Ok(()) => {
                self.cargar().await;
                // cerrar primero: el cierre limpia ambas ranuras y se
                // comería el mensaje de éxito emitido antes
                self.cerrar_modal();
                self.mensajes.mostrar_exito(if es_edicion {
                    self.api.mensaje_actualizado()
                } else {
                    self.api.mensaje_creado()
                });
            }
            Err(mensaje) => {
                if es_edicion {
                    self.mensajes.mostrar_error(mensaje);
                } else {
                    self.mensajes
                        .mostrar_error_durante(mensaje, self.api.duracion_error_crear());
                }
            }
        }
    }

    /// Borra tras confirmación. Una respuesta negativa es un no-op
    /// silencioso: sin petición, sin mensajes, sin cambio de estado.
    pub async fn eliminar(&self, id: u32) {
        if !(self.confirmar)(self.api.confirmacion_eliminar()) {
            return;
        }
        match self.api.eliminar(id).await {
            Ok(()) => {
                self.mensajes.mostrar_exito(self.api.mensaje_eliminado());
                self.cargar().await;
            }
            Err(mensaje) => self.mensajes.mostrar_error(mensaje),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::confirm;
    use contracts::domain::movimiento::{validar_movimiento, CreateMovimientoDto, Movimiento};
    use futures::executor::block_on;
    use std::sync::Mutex;

    /// API falsa de movimientos: registra cada llamada y permite forzar
    /// fallos por operación.
    struct MovimientoFake {
        llamadas: Arc<Mutex<Vec<String>>>,
        fallo_listar: Option<String>,
        fallo_crear: Option<String>,
        fallo_eliminar: Option<String>,
    }

    impl MovimientoFake {
        fn nueva(llamadas: Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                llamadas,
                fallo_listar: None,
                fallo_crear: None,
                fallo_eliminar: None,
            }
        }
    }

    fn movimiento(id: u32, fecha: &str) -> Movimiento {
        Movimiento {
            id,
            fecha: fecha.to_string(),
            tipo_movimiento: "Credito".to_string(),
            valor: 500.0,
            saldo: 1000.0,
            cuenta_id: 1,
            numero_cuenta: Some("478758".to_string()),
        }
    }

    impl EntityApi for MovimientoFake {
        type Record = Movimiento;
        type Draft = CreateMovimientoDto;

        fn listar(&self) -> ApiFuture<Vec<Movimiento>> {
            self.llamadas.lock().unwrap().push("listar".to_string());
            let fallo = self.fallo_listar.clone();
            Box::pin(async move {
                match fallo {
                    Some(e) => Err(e),
                    None => Ok(vec![movimiento(1, "2025-01-10T09:00:00")]),
                }
            })
        }

        fn crear(&self, borrador: CreateMovimientoDto) -> ApiFuture<()> {
            self.llamadas.lock().unwrap().push(format!(
                "crear {}",
                serde_json::to_string(&borrador).unwrap()
            ));
            let fallo = self.fallo_crear.clone();
            Box::pin(async move {
                match fallo {
                    Some(e) => Err(e),
                    None => Ok(()),
                }
            })
        }

        fn eliminar(&self, id: u32) -> ApiFuture<()> {
            self.llamadas
                .lock()
                .unwrap()
                .push(format!("eliminar {}", id));
            let fallo = self.fallo_eliminar.clone();
            Box::pin(async move {
                match fallo {
                    Some(e) => Err(e),
                    None => Ok(()),
                }
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
            16_000
        }
    }

    fn controlador(
        api: MovimientoFake,
        respuesta_confirmacion: bool,
    ) -> EntityController<MovimientoFake> {
        EntityController::new(api, confirm::siempre(respuesta_confirmacion))
    }

    #[test]
    fn test_crear_de_punta_a_punta() {
        let llamadas = Arc::new(Mutex::new(Vec::new()));
        let ctrl = controlador(MovimientoFake::nueva(llamadas.clone()), true);

        ctrl.abrir_crear();
        ctrl.borrador.set(CreateMovimientoDto {
            tipo_movimiento: 1,
            valor: 500.0,
            cuenta_id: 1,
        });
        block_on(ctrl.enviar());

        // exactamente una creación con el payload literal y una recarga
        assert_eq!(
            *llamadas.lock().unwrap(),
            vec![
                r#"crear {"tipoMovimiento":1,"valor":500.0,"cuentaId":1}"#.to_string(),
                "listar".to_string(),
            ]
        );
        assert!(!ctrl.modal_abierto.get_untracked());
        assert_eq!(
            ctrl.mensajes.exito.get_untracked().as_deref(),
            Some("Movimiento registrado exitosamente")
        );
        assert!(ctrl.mensajes.error.get_untracked().is_none());
    }

    #[test]
    fn test_validacion_bloquea_la_red() {
        let llamadas = Arc::new(Mutex::new(Vec::new()));
        let ctrl = controlador(MovimientoFake::nueva(llamadas.clone()), true);

        ctrl.abrir_crear();
        // borrador por defecto: cuenta sin seleccionar
        block_on(ctrl.enviar());

        assert!(llamadas.lock().unwrap().is_empty());
        assert!(ctrl.modal_abierto.get_untracked());
        assert_eq!(
            ctrl.mensajes.error.get_untracked().as_deref(),
            Some("Debe seleccionar una cuenta")
        );
    }

    #[test]
    fn test_rechazo_del_servidor_mantiene_el_modal() {
        let llamadas = Arc::new(Mutex::new(Vec::new()));
        let mut api = MovimientoFake::nueva(llamadas.clone());
        api.fallo_crear = Some("Saldo no disponible".to_string());
        let ctrl = controlador(api, true);

        ctrl.abrir_crear();
        ctrl.borrador.set(CreateMovimientoDto {
            tipo_movimiento: 2,
            valor: 200.0,
            cuenta_id: 1,
        });
        block_on(ctrl.enviar());

        // sin recarga tras el fallo
        assert_eq!(llamadas.lock().unwrap().len(), 1);
        assert!(ctrl.modal_abierto.get_untracked());
        assert_eq!(
            ctrl.mensajes.error.get_untracked().as_deref(),
            Some("Saldo no disponible")
        );
        assert!(!ctrl.enviando.get_untracked());
    }

    #[test]
    fn test_confirmacion_negada_es_noop() {
        let llamadas = Arc::new(Mutex::new(Vec::new()));
        let ctrl = controlador(MovimientoFake::nueva(llamadas.clone()), false);

        block_on(ctrl.eliminar(7));

        assert!(llamadas.lock().unwrap().is_empty());
        assert!(ctrl.mensajes.error.get_untracked().is_none());
        assert!(ctrl.mensajes.exito.get_untracked().is_none());
    }

    #[test]
    fn test_confirmacion_afirmativa_borra_y_recarga() {
        let llamadas = Arc::new(Mutex::new(Vec::new()));
        let ctrl = controlador(MovimientoFake::nueva(llamadas.clone()), true);

        block_on(ctrl.eliminar(7));

        assert_eq!(
            *llamadas.lock().unwrap(),
            vec!["eliminar 7".to_string(), "listar".to_string()]
        );
        assert_eq!(
            ctrl.mensajes.exito.get_untracked().as_deref(),
            Some("Movimiento eliminado exitosamente")
        );
    }

    #[test]
    fn test_fallo_de_carga_conserva_datos_previos() {
        let llamadas = Arc::new(Mutex::new(Vec::new()));
        let ctrl = controlador(MovimientoFake::nueva(llamadas.clone()), true);
        block_on(ctrl.cargar());
        assert_eq!(ctrl.items.get_untracked().len(), 1);

        let mut api_rota = MovimientoFake::nueva(llamadas.clone());
        api_rota.fallo_listar = Some("HTTP 500".to_string());
        let ctrl_rota = controlador(api_rota, true);
        ctrl_rota.items.set(ctrl.items.get_untracked());
        ctrl_rota.filtrados.set(ctrl.filtrados.get_untracked());
        block_on(ctrl_rota.cargar());

        assert_eq!(ctrl_rota.items.get_untracked().len(), 1);
        assert_eq!(
            ctrl_rota.mensajes.error.get_untracked().as_deref(),
            Some("Error al cargar movimientos: HTTP 500")
        );
    }

    #[test]
    fn test_buscar_recalcula_el_filtro() {
        let llamadas = Arc::new(Mutex::new(Vec::new()));
        let ctrl = controlador(MovimientoFake::nueva(llamadas), true);
        ctrl.items.set(vec![
            movimiento(1, "2025-01-10T09:00:00"),
            Movimiento {
                numero_cuenta: Some("225487".to_string()),
                ..movimiento(2, "2025-01-11T09:00:00")
            },
        ]);

        ctrl.buscar("2254");
        assert_eq!(ctrl.filtrados.get_untracked().len(), 1);
        ctrl.buscar("");
        assert_eq!(ctrl.filtrados.get_untracked().len(), 2);
    }

    #[test]
    fn test_cerrar_modal_descarta_borrador_y_mensajes() {
        let llamadas = Arc::new(Mutex::new(Vec::new()));
        let ctrl = controlador(MovimientoFake::nueva(llamadas), true);

        ctrl.abrir_crear();
        ctrl.borrador.set(CreateMovimientoDto {
            tipo_movimiento: 2,
            valor: 50.0,
            cuenta_id: 3,
        });
        ctrl.mensajes.mostrar_error("algo");
        ctrl.cerrar_modal();

        assert!(!ctrl.modal_abierto.get_untracked());
        assert_eq!(
            ctrl.borrador.get_untracked(),
            CreateMovimientoDto::default()
        );
        assert!(ctrl.mensajes.error.get_untracked().is_none());
    }
}
