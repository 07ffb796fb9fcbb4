use serde::{Deserialize, Serialize};

/// Cliente del banco, dueño de cero o más cuentas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub cliente_id: u32,
    pub nombre: String,
    pub genero: String,
    pub edad: u32,
    pub identificacion: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    pub estado: bool,
}

/// Payload de creación. La contraseña solo viaja en esta dirección;
/// el servidor nunca la devuelve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClienteDto {
    pub nombre: String,
    pub genero: String,
    pub edad: u32,
    pub identificacion: String,
    pub direccion: String,
    pub telefono: String,
    pub contrasena: String,
    pub estado: bool,
}

impl Default for CreateClienteDto {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            genero: String::new(),
            edad: 0,
            identificacion: String::new(),
            direccion: String::new(),
            telefono: String::new(),
            contrasena: String::new(),
            estado: true,
        }
    }
}

/// Payload de actualización. `contrasena` se omite por completo cuando el
/// usuario no escribió una nueva.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClienteDto {
    pub nombre: String,
    pub genero: String,
    pub edad: u32,
    pub direccion: String,
    pub telefono: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    pub estado: bool,
}

impl UpdateClienteDto {
    /// Deriva el payload de actualización a partir del borrador del formulario.
    pub fn desde_borrador(form: &CreateClienteDto) -> Self {
        Self {
            nombre: form.nombre.clone(),
            genero: form.genero.clone(),
            edad: form.edad,
            direccion: form.direccion.clone(),
            telefono: form.telefono.clone(),
            contrasena: if form.contrasena.is_empty() {
                None
            } else {
                Some(form.contrasena.clone())
            },
            estado: form.estado,
        }
    }
}

/// Valida el borrador de cliente. Primera regla violada gana.
/// `es_edicion` relaja la regla de contraseña (campo de solo escritura).
pub fn validar_cliente(form: &CreateClienteDto, es_edicion: bool) -> Result<(), String> {
    if form.nombre.trim().is_empty() {
        return Err("El nombre es obligatorio".to_string());
    }
    if form.identificacion.trim().is_empty() {
        return Err("La identificación es obligatoria".to_string());
    }
    if form.edad < 18 {
        return Err("La edad debe ser mayor a 18 años".to_string());
    }
    if !es_edicion && form.contrasena.is_empty() {
        return Err("La contraseña es obligatoria".to_string());
    }
    Ok(())
}
