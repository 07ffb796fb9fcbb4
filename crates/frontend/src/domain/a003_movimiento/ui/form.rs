use crate::domain::a003_movimiento::api::MovimientoApi;
use crate::shared::controller::EntityController;
use contracts::domain::movimiento::{TIPO_MOVIMIENTO_CREDITO, TIPO_MOVIMIENTO_DEBITO};
use leptos::prelude::*;

/// Modal de registro de movimiento. El signo y el saldo resultante los
/// calcula el servidor; aquí solo se elige cuenta, tipo y magnitud.
#[component]
pub fn MovimientoForm(
    ctrl: EntityController<MovimientoApi>,
    cuentas: RwSignal<Vec<contracts::domain::cuenta::Cuenta>>,
) -> impl IntoView {
    let ctrl_cerrar = ctrl.clone();
    let ctrl_enviar = ctrl.clone();
    let borrador = ctrl.borrador;
    let enviando = ctrl.enviando;

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal__header">
                    <h2 class="modal__title">{"Nuevo Movimiento"}</h2>
                </div>

                <div class="modal__body">
                    <div class="form-group">
                        <label for="cuenta">{"Cuenta"}</label>
                        <select
                            id="cuenta"
                            prop:value=move || borrador.get().cuenta_id.to_string()
                            on:change=move |ev| borrador.update(|b| {
                                b.cuenta_id = event_target_value(&ev).parse().unwrap_or(0);
                            })
                        >
                            <option value="0">{"Seleccione una cuenta..."}</option>
                            {move || cuentas.get().into_iter().map(|cuenta| {
                                let etiqueta = format!(
                                    "{} - {}",
                                    cuenta.numero_cuenta,
                                    cuenta.nombre_cliente.clone().unwrap_or_default()
                                );
                                view! {
                                    <option value=cuenta.id.to_string()>{etiqueta}</option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="tipo-movimiento">{"Tipo de Movimiento"}</label>
                        <select
                            id="tipo-movimiento"
                            prop:value=move || borrador.get().tipo_movimiento.to_string()
                            on:change=move |ev| borrador.update(|b| {
                                b.tipo_movimiento = event_target_value(&ev)
                                    .parse()
                                    .unwrap_or(TIPO_MOVIMIENTO_CREDITO);
                            })
                        >
                            <option value=TIPO_MOVIMIENTO_CREDITO.to_string()>
                                {"Crédito (Depósito)"}
                            </option>
                            <option value=TIPO_MOVIMIENTO_DEBITO.to_string()>
                                {"Débito (Retiro)"}
                            </option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="valor">{"Valor"}</label>
                        <input
                            type="number"
                            id="valor"
                            min="0"
                            step="0.01"
                            prop:value=move || borrador.get().valor.to_string()
                            on:input=move |ev| borrador.update(|b| {
                                b.valor = event_target_value(&ev).parse().unwrap_or(0.0);
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
                        {"Registrar"}
                    </button>
                </div>
            </div>
        </div>
    }
}
