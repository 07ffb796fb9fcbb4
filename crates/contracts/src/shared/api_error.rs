use serde::Deserialize;

/// Cuerpo de error que devuelve la API. `details` trae la explicación de
/// negocio ("Saldo no disponible"), `message` un texto genérico; cualquiera
/// de los dos puede faltar.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerErrorInfo {
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerErrorInfo {
    /// Orden de preferencia: details, message, texto por defecto.
    pub fn mensaje(&self, por_defecto: &str) -> String {
        self.details
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| por_defecto.to_string())
    }
}

/// Extrae el mensaje a mostrar desde un cuerpo de respuesta de error.
/// Un cuerpo no-JSON o con otra forma cae al texto por defecto.
pub fn extraer_mensaje(cuerpo: &str, por_defecto: &str) -> String {
    serde_json::from_str::<ServerErrorInfo>(cuerpo)
        .map(|info| info.mensaje(por_defecto))
        .unwrap_or_else(|_| por_defecto.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefiere_details() {
        let mensaje = extraer_mensaje(
            r#"{"details":"Saldo no disponible","message":"Error de negocio"}"#,
            "Error al registrar movimiento",
        );
        assert_eq!(mensaje, "Saldo no disponible");
    }

    #[test]
    fn test_cae_a_message() {
        let mensaje = extraer_mensaje(
            r#"{"message":"Cliente no encontrado"}"#,
            "Error al crear cliente",
        );
        assert_eq!(mensaje, "Cliente no encontrado");
    }

    #[test]
    fn test_cae_al_defecto() {
        assert_eq!(
            extraer_mensaje("{}", "Error al crear cliente"),
            "Error al crear cliente"
        );
        assert_eq!(
            extraer_mensaje("<html>502</html>", "Error al crear cliente"),
            "Error al crear cliente"
        );
        assert_eq!(extraer_mensaje("", "Error al eliminar cuenta"), "Error al eliminar cuenta");
    }
}
