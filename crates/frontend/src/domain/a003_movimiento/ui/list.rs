use super::form::MovimientoForm;
use crate::domain::a002_cuenta::api::fetch_cuentas_activas;
use crate::domain::a003_movimiento::api::MovimientoApi;
use crate::shared::components::message_boxes::MessageBoxes;
use crate::shared::components::search_bar::SearchBar;
use crate::shared::confirm::confirmar_navegador;
use crate::shared::controller::EntityController;
use crate::shared::date_utils::formatear_fecha_hora;
use contracts::domain::cuenta::Cuenta;
use leptos::prelude::*;

/// Pantalla de movimientos: listado cronológico y registro de depósitos y
/// retiros. Los movimientos no se editan, solo se crean o eliminan.
#[component]
pub fn MovimientosPage() -> impl IntoView {
    let ctrl = EntityController::new(MovimientoApi, confirmar_navegador());
    // roster de cuentas activas para el select del formulario
    let cuentas = RwSignal::new(Vec::<Cuenta>::new());

    {
        let ctrl = ctrl.clone();
        wasm_bindgen_futures::spawn_local(async move { ctrl.cargar().await });
    }
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_cuentas_activas().await {
            Ok(datos) => cuentas.set(datos),
            Err(e) => log::error!("Error al cargar cuentas: {}", e),
        }
    });

    let buscar = {
        let ctrl = ctrl.clone();
        Callback::new(move |termino: String| ctrl.buscar(&termino))
    };
    let abrir_crear = {
        let ctrl = ctrl.clone();
        move |_| ctrl.abrir_crear()
    };
    let ctrl_filas = ctrl.clone();
    let ctrl_modal = ctrl.clone();
    let ctrl_form = ctrl.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Movimientos"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=abrir_crear>
                        {"Nuevo Movimiento"}
                    </button>
                </div>
            </div>

            <SearchBar
                on_search=buscar
                placeholder="Buscar por número de cuenta o tipo..."
            />
            <MessageBoxes bus=ctrl.mensajes />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Fecha"}</th>
                            <th class="table__header-cell">{"Cuenta"}</th>
                            <th class="table__header-cell">{"Tipo"}</th>
                            <th class="table__header-cell">{"Valor"}</th>
                            <th class="table__header-cell">{"Saldo"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || ctrl_filas.filtrados.get().into_iter().map(|movimiento| {
                            let id = movimiento.id;
                            let ctrl_borrar = ctrl_filas.clone();
                            let clase_tipo = if movimiento.tipo_movimiento == "Credito" {
                                "badge badge--credito"
                            } else {
                                "badge badge--debito"
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{formatear_fecha_hora(&movimiento.fecha)}</td>
                                    <td class="table__cell">{movimiento.numero_cuenta.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">
                                        <span class=clase_tipo>{movimiento.tipo_movimiento.clone()}</span>
                                    </td>
                                    <td class="table__cell">{format!("{:.2}", movimiento.valor)}</td>
                                    <td class="table__cell">{format!("{:.2}", movimiento.saldo)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--danger"
                                            on:click=move |_| {
                                                let ctrl = ctrl_borrar.clone();
                                                wasm_bindgen_futures::spawn_local(async move {
                                                    ctrl.eliminar(id).await;
                                                });
                                            }
                                        >
                                            {"Eliminar"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || ctrl_modal.modal_abierto.get()>
                <MovimientoForm ctrl=ctrl_form.clone() cuentas=cuentas />
            </Show>
        </div>
    }
}
