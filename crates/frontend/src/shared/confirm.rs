//! Yes/no confirmation gate used before every delete. The handle is a plain
//! closure so tests can force either branch deterministically.

use std::sync::Arc;

pub type ConfirmFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Browser-backed gate (`window.confirm`). Answers "no" when the dialog
/// cannot be shown.
pub fn confirmar_navegador() -> ConfirmFn {
    Arc::new(|mensaje| {
        if let Some(win) = web_sys::window() {
            win.confirm_with_message(mensaje).unwrap_or(false)
        } else {
            false
        }
    })
}

#[cfg(test)]
pub fn siempre(respuesta: bool) -> ConfirmFn {
    Arc::new(move |_| respuesta)
}
