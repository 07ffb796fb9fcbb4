use super::form::CuentaForm;
use crate::domain::a001_cliente::api::fetch_clientes_activos;
use crate::domain::a002_cuenta::api::CuentaApi;
use crate::shared::components::message_boxes::MessageBoxes;
use crate::shared::components::search_bar::SearchBar;
use crate::shared::confirm::confirmar_navegador;
use crate::shared::controller::EntityController;
use contracts::domain::cliente::Cliente;
use leptos::prelude::*;

#[component]
pub fn CuentasPage() -> impl IntoView {
    let ctrl = EntityController::new(CuentaApi, confirmar_navegador());
    // roster de clientes activos para el select del formulario
    let clientes = RwSignal::new(Vec::<Cliente>::new());

    {
        let ctrl = ctrl.clone();
        wasm_bindgen_futures::spawn_local(async move { ctrl.cargar().await });
    }
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_clientes_activos().await {
            Ok(datos) => clientes.set(datos),
            Err(e) => log::error!("Error al cargar clientes: {}", e),
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
                    <h1 class="header__title">{"Cuentas"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=abrir_crear>
                        {"Nueva Cuenta"}
                    </button>
                </div>
            </div>

            <SearchBar
                on_search=buscar
                placeholder="Buscar por número, tipo o cliente..."
            />
            <MessageBoxes bus=ctrl.mensajes />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Número de Cuenta"}</th>
                            <th class="table__header-cell">{"Tipo"}</th>
                            <th class="table__header-cell">{"Saldo Inicial"}</th>
                            <th class="table__header-cell">{"Saldo Actual"}</th>
                            <th class="table__header-cell">{"Cliente"}</th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || ctrl_filas.filtrados.get().into_iter().map(|cuenta| {
                            let id = cuenta.id;
                            let ctrl_editar = ctrl_filas.clone();
                            let ctrl_borrar = ctrl_filas.clone();
                            let registro = cuenta.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{cuenta.numero_cuenta.clone()}</td>
                                    <td class="table__cell">{cuenta.tipo_cuenta.clone()}</td>
                                    <td class="table__cell">{format!("{:.2}", cuenta.saldo_inicial)}</td>
                                    <td class="table__cell">{format!("{:.2}", cuenta.saldo_actual)}</td>
                                    <td class="table__cell">{cuenta.nombre_cliente.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">
                                        <span class=if cuenta.estado { "badge badge--activo" } else { "badge badge--inactivo" }>
                                            {if cuenta.estado { "Activa" } else { "Inactiva" }}
                                        </span>
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--secondary"
                                            on:click=move |_| ctrl_editar.abrir_editar(&registro)
                                        >
                                            {"Editar"}
                                        </button>
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
                <CuentaForm ctrl=ctrl_form.clone() clientes=clientes />
            </Show>
        </div>
    }
}
