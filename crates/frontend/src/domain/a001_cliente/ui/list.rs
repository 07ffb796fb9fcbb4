use super::form::ClienteForm;
use crate::domain::a001_cliente::api::ClienteApi;
use crate::shared::components::message_boxes::MessageBoxes;
use crate::shared::components::search_bar::SearchBar;
use crate::shared::confirm::confirmar_navegador;
use crate::shared::controller::EntityController;
use leptos::prelude::*;

#[component]
pub fn ClientesPage() -> impl IntoView {
    let ctrl = EntityController::new(ClienteApi, confirmar_navegador());

    {
        let ctrl = ctrl.clone();
        wasm_bindgen_futures::spawn_local(async move { ctrl.cargar().await });
    }

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
                    <h1 class="header__title">{"Clientes"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=abrir_crear>
                        {"Nuevo Cliente"}
                    </button>
                </div>
            </div>

            <SearchBar
                on_search=buscar
                placeholder="Buscar por nombre, identificación o teléfono..."
            />
            <MessageBoxes bus=ctrl.mensajes />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Nombre"}</th>
                            <th class="table__header-cell">{"Género"}</th>
                            <th class="table__header-cell">{"Edad"}</th>
                            <th class="table__header-cell">{"Identificación"}</th>
                            <th class="table__header-cell">{"Dirección"}</th>
                            <th class="table__header-cell">{"Teléfono"}</th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || ctrl_filas.filtrados.get().into_iter().map(|cliente| {
                            let id = cliente.cliente_id;
                            let ctrl_editar = ctrl_filas.clone();
                            let ctrl_borrar = ctrl_filas.clone();
                            let registro = cliente.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{cliente.nombre.clone()}</td>
                                    <td class="table__cell">{cliente.genero.clone()}</td>
                                    <td class="table__cell">{cliente.edad}</td>
                                    <td class="table__cell">{cliente.identificacion.clone()}</td>
                                    <td class="table__cell">{cliente.direccion.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{cliente.telefono.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">
                                        <span class=if cliente.estado { "badge badge--activo" } else { "badge badge--inactivo" }>
                                            {if cliente.estado { "Activo" } else { "Inactivo" }}
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
                <ClienteForm ctrl=ctrl_form.clone() />
            </Show>
        </div>
    }
}
