use leptos::prelude::*;
use leptos_router::components::A;

/// Application frame: top navigation plus the routed screen.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="navbar">
                <span class="navbar__brand">{"Banco - Administración"}</span>
                <nav class="navbar__links">
                    <A href="/clientes">{"Clientes"}</A>
                    <A href="/cuentas">{"Cuentas"}</A>
                    <A href="/movimientos">{"Movimientos"}</A>
                    <A href="/reportes">{"Reportes"}</A>
                </nav>
            </header>
            <main class="app-shell__content">{children()}</main>
        </div>
    }
}
