use crate::domain::a001_cliente::api::ClienteApi;
use crate::shared::controller::{EntityController, Modo};
use leptos::prelude::*;

/// Modal de alta/edición de cliente. En edición la identificación es
/// inmutable y la contraseña queda en blanco salvo que se escriba una nueva.
#[component]
pub fn ClienteForm(ctrl: EntityController<ClienteApi>) -> impl IntoView {
    let ctrl_titulo = ctrl.clone();
    let ctrl_cerrar = ctrl.clone();
    let ctrl_enviar = ctrl.clone();
    let es_edicion = {
        let ctrl = ctrl.clone();
        move || ctrl.modo.get() == Modo::Editar
    };
    let es_edicion_ident = es_edicion.clone();
    let es_edicion_clave = es_edicion.clone();
    let borrador = ctrl.borrador;
    let enviando = ctrl.enviando;

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal__header">
                    <h2 class="modal__title">
                        {move || if ctrl_titulo.modo.get() == Modo::Editar {
                            "Editar Cliente"
                        } else {
                            "Nuevo Cliente"
                        }}
                    </h2>
                </div>

                <div class="modal__body">
                    <div class="form-group">
                        <label for="nombre">{"Nombre"}</label>
                        <input
                            type="text"
                            id="nombre"
                            prop:value=move || borrador.get().nombre
                            on:input=move |ev| borrador.update(|b| b.nombre = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="genero">{"Género"}</label>
                        <select
                            id="genero"
                            prop:value=move || borrador.get().genero
                            on:change=move |ev| borrador.update(|b| b.genero = event_target_value(&ev))
                        >
                            <option value="">{"Seleccione..."}</option>
                            <option value="M">{"Masculino"}</option>
                            <option value="F">{"Femenino"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="edad">{"Edad"}</label>
                        <input
                            type="number"
                            id="edad"
                            min="0"
                            prop:value=move || borrador.get().edad.to_string()
                            on:input=move |ev| borrador.update(|b| {
                                b.edad = event_target_value(&ev).parse().unwrap_or(0);
                            })
                        />
                    </div>

                    <div class="form-group">
                        <label for="identificacion">{"Identificación"}</label>
                        <input
                            type="text"
                            id="identificacion"
                            prop:value=move || borrador.get().identificacion
                            prop:disabled=move || es_edicion_ident()
                            on:input=move |ev| borrador.update(|b| {
                                b.identificacion = event_target_value(&ev);
                            })
                        />
                    </div>

                    <div class="form-group">
                        <label for="direccion">{"Dirección"}</label>
                        <input
                            type="text"
                            id="direccion"
                            prop:value=move || borrador.get().direccion
                            on:input=move |ev| borrador.update(|b| b.direccion = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="telefono">{"Teléfono"}</label>
                        <input
                            type="text"
                            id="telefono"
                            prop:value=move || borrador.get().telefono
                            on:input=move |ev| borrador.update(|b| b.telefono = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="contrasena">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="contrasena"
                            placeholder=move || if es_edicion_clave() {
                                "Dejar en blanco para no cambiarla"
                            } else {
                                "Contraseña"
                            }
                            prop:value=move || borrador.get().contrasena
                            on:input=move |ev| borrador.update(|b| b.contrasena = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <label for="estado">{"Activo"}</label>
                        <input
                            type="checkbox"
                            id="estado"
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
