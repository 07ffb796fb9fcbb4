use crate::domain::a002_cuenta::api::CuentaApi;
use crate::shared::controller::{EntityController, Modo};
use contracts::domain::cliente::Cliente;
use contracts::domain::cuenta::{TIPO_CUENTA_AHORRO, TIPO_CUENTA_CORRIENTE};
use leptos::prelude::*;

/// Modal de alta/edición de cuenta. En edición solo viajan número, tipo y
/// estado: ni el dueño ni el saldo inicial se pueden cambiar.
#[component]
pub fn CuentaForm(
    ctrl: EntityController<CuentaApi>,
    clientes: RwSignal<Vec<Cliente>>,
) -> impl IntoView {
    let ctrl_titulo = ctrl.clone();
    let ctrl_cerrar = ctrl.clone();
    let ctrl_enviar = ctrl.clone();
    let es_edicion = {
        let ctrl = ctrl.clone();
        move || ctrl.modo.get() == Modo::Editar
    };
    let es_edicion_saldo = es_edicion.clone();
    let es_edicion_cliente = es_edicion.clone();
    let borrador = ctrl.borrador;
    let enviando = ctrl.enviando;

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal__header">
                    <h2 class="modal__title">
                        {move || if ctrl_titulo.modo.get() == Modo::Editar {
                            "Editar Cuenta"
                        } else {
                            "Nueva Cuenta"
                        }}
                    </h2>
                </div>

                <div class="modal__body">
                    <div class="form-group">
                        <label for="numero-cuenta">{"Número de Cuenta"}</label>
                        <input
                            type="text"
                            id="numero-cuenta"
                            prop:value=move || borrador.get().numero_cuenta
                            on:input=move |ev| borrador.update(|b| {
                                b.numero_cuenta = event_target_value(&ev);
                            })
                        />
                    </div>

                    <div class="form-group">
                        <label for="tipo-cuenta">{"Tipo de Cuenta"}</label>
                        <select
                            id="tipo-cuenta"
                            prop:value=move || borrador.get().tipo_cuenta.to_string()
                            on:change=move |ev| borrador.update(|b| {
                                b.tipo_cuenta = event_target_value(&ev)
                                    .parse()
                                    .unwrap_or(TIPO_CUENTA_AHORRO);
                            })
                        >
                            <option value=TIPO_CUENTA_AHORRO.to_string()>{"Ahorro"}</option>
                            <option value=TIPO_CUENTA_CORRIENTE.to_string()>{"Corriente"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="saldo-inicial">{"Saldo Inicial"}</label>
                        <input
                            type="number"
                            id="saldo-inicial"
                            min="0"
                            step="0.01"
                            prop:value=move || borrador.get().saldo_inicial.to_string()
                            prop:disabled=move || es_edicion_saldo()
                            on:input=move |ev| borrador.update(|b| {
                                b.saldo_inicial = event_target_value(&ev).parse().unwrap_or(0.0);
                            })
                        />
                    </div>

                    <div class="form-group">
                        <label for="cliente">{"Cliente"}</label>
                        <select
                            id="cliente"
                            prop:value=move || borrador.get().cliente_id.to_string()
                            prop:disabled=move || es_edicion_cliente()
                            on:change=move |ev| borrador.update(|b| {
                                b.cliente_id = event_target_value(&ev).parse().unwrap_or(0);
                            })
                        >
                            <option value="0">{"Seleccione un cliente..."}</option>
                            {move || clientes.get().into_iter().map(|cliente| view! {
                                <option value=cliente.cliente_id.to_string()>
                                    {cliente.nombre.clone()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group form-group--inline">
                        <label for="estado-cuenta">{"Activa"}</label>
                        <input
                            type="checkbox"
                            id="estado-cuenta"
                            prop:checked=move || borrador.get().estado
                            on:change=move |ev| borrador.update(|b| {
                                b.estado = event_target_checked(&ev);
                            })
                        />
                    </div>
                </div>

                <div class="modal__footer">
                    <button
                        class="button button--secondary"
                        on:click=move |_| ctrl_cerrar.cerrar_modal()
                    >
                        {"Cancelar"}
                    </button>
                    <button
                        class="button button--primary"
                        prop:disabled=move || enviando.get()
                        on:click=move |_| {
                            let ctrl = ctrl_enviar.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                ctrl.enviar().await;
                            });
                        }
                    >
                        {"Guardar"}
                    </button>
                </div>
            </div>
        </div>
    }
}
