use crate::domain::a001_cliente::ui::ClientesPage;
use crate::domain::a002_cuenta::ui::CuentasPage;
use crate::domain::a003_movimiento::ui::MovimientosPage;
use crate::layout::Shell;
use crate::reports::r001_estado_cuenta::ui::ReportesPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"Página no encontrada"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/clientes" /> } />
                    <Route path=path!("/clientes") view=ClientesPage />
                    <Route path=path!("/cuentas") view=CuentasPage />
                    <Route path=path!("/movimientos") view=MovimientosPage />
                    <Route path=path!("/reportes") view=ReportesPage />
                </Routes>
            </Shell>
        </Router>
    }
}
