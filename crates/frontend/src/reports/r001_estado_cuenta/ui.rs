use super::api::HttpReporteApi;
use super::controller::ReporteController;
use crate::domain::a001_cliente::api::fetch_clientes_activos;
use crate::shared::components::message_boxes::MessageBoxes;
use crate::shared::date_utils::{formatear_fecha_hora, hoy};
use leptos::prelude::*;

/// Pantalla de reportes: estado de cuenta por cliente y rango de fechas,
/// con descarga y visualización del PDF.
#[component]
pub fn ReportesPage() -> impl IntoView {
    let ctrl = ReporteController::new(HttpReporteApi);
    ctrl.restablecer_fechas(&hoy());

    {
        let clientes = ctrl.clientes;
        let mensajes = ctrl.mensajes;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_clientes_activos().await {
                Ok(datos) => clientes.set(datos),
                Err(e) => {
                    log::error!("Error al cargar clientes: {}", e);
                    mensajes.mostrar_error("Error al cargar clientes");
                }
            }
        });
    }

    let ctrl_generar = ctrl.clone();
    let ctrl_descargar = ctrl.clone();
    let ctrl_ver = ctrl.clone();
    let ctrl_limpiar = ctrl.clone();
    let clientes = ctrl.clientes;
    let cliente_id = ctrl.cliente_id;
    let fecha_inicio = ctrl.fecha_inicio;
    let fecha_fin = ctrl.fecha_fin;
    let estado = ctrl.estado;
    let cargando = ctrl.cargando;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Reportes"}</h1>
                </div>
            </div>

            <MessageBoxes bus=ctrl.mensajes />

            <div class="report-query">
                <div class="form-group">
                    <label for="cliente">{"Cliente"}</label>
                    <select
                        id="cliente"
                        prop:value=move || cliente_id.get().to_string()
                        on:change=move |ev| {
                            cliente_id.set(event_target_value(&ev).parse().unwrap_or(0));
                        }
                    >
                        <option value="0">{"Seleccione un cliente..."}</option>
                        {move || clientes.get().into_iter().map(|cliente| {
                            view! {
                                <option value=cliente.cliente_id.to_string()>
                                    {cliente.nombre.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="fecha-inicio">{"Fecha Inicio"}</label>
                    <input
                        type="date"
                        id="fecha-inicio"
                        prop:value=move || fecha_inicio.get()
                        on:input=move |ev| fecha_inicio.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="fecha-fin">{"Fecha Fin"}</label>
                    <input
                        type="date"
                        id="fecha-fin"
                        prop:value=move || fecha_fin.get()
                        on:input=move |ev| fecha_fin.set(event_target_value(&ev))
                    />
                </div>

                <div class="report-query__actions">
                    <button
                        class="button button--primary"
                        prop:disabled=move || cargando.get()
                        on:click=move |_| {
                            let ctrl = ctrl_generar.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                ctrl.generar().await;
                            });
                        }
                    >
                        {"Generar"}
                    </button>
                    <button
                        class="button button--secondary"
                        prop:disabled=move || cargando.get()
                        on:click=move |_| {
                            let ctrl = ctrl_descargar.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                ctrl.descargar_pdf().await;
                            });
                        }
                    >
                        {"Descargar PDF"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Some(url) = ctrl_ver.url_ver_pdf() {
                                abrir_en_pestana(&url);
                            }
                        }
                    >
                        {"Ver PDF"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| ctrl_limpiar.limpiar()
                    >
                        {"Limpiar"}
                    </button>
                </div>
            </div>

            <Show when=move || cargando.get()>
                <div class="loading">{"Generando reporte..."}</div>
            </Show>

            {move || estado.get().map(|reporte| view! {
                <div class="report">
                    <div class="report__summary">
                        <h2 class="report__title">{"Estado de Cuenta"}</h2>
                        <p>
                            <strong>{"Cliente: "}</strong>
                            {reporte.cliente.nombre.clone()}
                            {" ("}{reporte.cliente.identificacion.clone()}{")"}
                        </p>
                        <p>
                            <strong>{"Período: "}</strong>
                            {reporte.fecha_inicio.clone()}
                            {" a "}
                            {reporte.fecha_fin.clone()}
                        </p>
                    </div>

                    {reporte.cuentas.iter().map(|cuenta| view! {
                        <div class="report__account">
                            <h3 class="report__account-title">
                                {format!(
                                    "Cuenta {} ({})",
                                    cuenta.numero_cuenta, cuenta.tipo_cuenta
                                )}
                            </h3>
                            <p>
                                <strong>{"Saldo inicial: "}</strong>
                                {format!("{:.2}", cuenta.saldo_inicial)}
                                {" | "}
                                <strong>{"Saldo actual: "}</strong>
                                {format!("{:.2}", cuenta.saldo_actual)}
                            </p>
                            <div class="table">
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Fecha"}</th>
                                            <th class="table__header-cell">{"Tipo"}</th>
                                            <th class="table__header-cell">{"Valor"}</th>
                                            <th class="table__header-cell">{"Saldo"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {cuenta.movimientos.iter().map(|movimiento| view! {
                                            <tr class="table__row">
                                                <td class="table__cell">
                                                    {formatear_fecha_hora(&movimiento.fecha)}
                                                </td>
                                                <td class="table__cell">
                                                    {movimiento.tipo_movimiento.clone()}
                                                </td>
                                                <td class="table__cell">
                                                    {format!("{:.2}", movimiento.valor)}
                                                </td>
                                                <td class="table__cell">
                                                    {format!("{:.2}", movimiento.saldo)}
                                                </td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    }).collect_view()}

                    <div class="report__totals">
                        <p>
                            <strong>{"Total créditos: "}</strong>
                            {format!("{:.2}", reporte.total_creditos)}
                        </p>
                        <p>
                            <strong>{"Total débitos: "}</strong>
                            {format!("{:.2}", reporte.total_debitos)}
                        </p>
                    </div>
                </div>
            })}
        </div>
    }
}

fn abrir_en_pestana(url: &str) {
    if let Some(ventana) = web_sys::window() {
        if let Err(e) = ventana.open_with_url_and_target(url, "_blank") {
            log::error!("No se pudo abrir el PDF: {:?}", e);
        }
    }
}
