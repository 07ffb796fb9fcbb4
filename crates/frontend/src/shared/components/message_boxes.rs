use crate::shared::messages::MessageBus;
use leptos::prelude::*;

/// Renders whatever the message bus currently holds: at most one error and
/// one success/info text.
#[component]
pub fn MessageBoxes(bus: MessageBus) -> impl IntoView {
    view! {
        {move || bus.error.get().map(|mensaje| view! {
            <div class="alert alert--error">
                <span class="alert__icon">"⚠"</span>
                <span class="alert__text">{mensaje}</span>
            </div>
        })}
        {move || bus.exito.get().map(|mensaje| view! {
            <div class="alert alert--success">
                <span class="alert__text">{mensaje}</span>
            </div>
        })}
    }
}
