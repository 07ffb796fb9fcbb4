use crate::shared::api_utils::{self, get_json};
use crate::shared::controller::{ApiFuture, EntityApi, Modo};
use crate::shared::search::Selector;
use contracts::domain::cliente::{
    validar_cliente, Cliente, CreateClienteDto, UpdateClienteDto,
};

pub async fn fetch_clientes() -> Result<Vec<Cliente>, String> {
    get_json("/clientes").await
}

/// Roster para los selects de otras pantallas: solo clientes activos.
pub async fn fetch_clientes_activos() -> Result<Vec<Cliente>, String> {
    Ok(fetch_clientes()
        .await?
        .into_iter()
        .filter(|c| c.estado)
        .collect())
}

pub async fn fetch_cliente(id: u32) -> Result<Cliente, String> {
    get_json(&format!("/clientes/{}", id)).await
}

pub struct ClienteApi;

impl EntityApi for ClienteApi {
    type Record = Cliente;
    type Draft = CreateClienteDto;

    fn listar(&self) -> ApiFuture<Vec<Cliente>> {
        Box::pin(fetch_clientes())
    }

    fn crear(&self, borrador: CreateClienteDto) -> ApiFuture<()> {
        Box::pin(async move {
            api_utils::send_json("POST", "/clientes", &borrador, "Error al crear cliente").await
        })
    }

    fn actualizar(&self, id: u32, borrador: CreateClienteDto) -> ApiFuture<()> {
        // la contraseña en blanco se omite del payload (campo de solo escritura)
        let dto = UpdateClienteDto::desde_borrador(&borrador);
        Box::pin(async move {
            api_utils::send_json(
                "PUT",
                &format!("/clientes/{}", id),
                &dto,
                "Error al actualizar cliente",
            )
            .await
        })
    }

    fn eliminar(&self, id: u32) -> ApiFuture<()> {
        Box::pin(async move {
            api_utils::delete(&format!("/clientes/{}", id), "Error al eliminar cliente").await
        })
    }

    fn validar(&self, borrador: &CreateClienteDto, modo: Modo) -> Result<(), String> {
        validar_cliente(borrador, modo == Modo::Editar)
    }

    fn id_de(&self, registro: &Cliente) -> u32 {
        registro.cliente_id
    }

    fn borrador_de(&self, registro: &Cliente) -> CreateClienteDto {
        CreateClienteDto {
            nombre: registro.nombre.clone(),
            genero: registro.genero.clone(),
            edad: registro.edad,
            identificacion: registro.identificacion.clone(),
            direccion: registro.direccion.clone().unwrap_or_default(),
            telefono: registro.telefono.clone().unwrap_or_default(),
            // siempre en blanco: el valor almacenado nunca se muestra
            contrasena: String::new(),
            estado: registro.estado,
        }
    }

    fn selectores(&self) -> Vec<Selector<Cliente>> {
        vec![
            Box::new(|c: &Cliente| Some(c.nombre.clone())),
            Box::new(|c: &Cliente| Some(c.identificacion.clone())),
            Box::new(|c: &Cliente| c.telefono.clone()),
        ]
    }

    fn mensaje_creado(&self) -> &'static str {
        "Cliente creado exitosamente"
    }
    fn mensaje_actualizado(&self) -> &'static str {
        "Cliente actualizado exitosamente"
    }
    fn mensaje_eliminado(&self) -> &'static str {
        "Cliente eliminado exitosamente"
    }
    fn confirmacion_eliminar(&self) -> &'static str {
        "¿Está seguro de eliminar este cliente?"
    }
    fn error_carga(&self, detalle: &str) -> String {
        format!("Error al cargar clientes: {}", detalle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente() -> Cliente {
        Cliente {
            cliente_id: 4,
            nombre: "Jose Lema".to_string(),
            genero: "M".to_string(),
            edad: 30,
            identificacion: "098254785".to_string(),
            direccion: Some("Otavalo sn y principal".to_string()),
            telefono: None,
            estado: true,
        }
    }

    #[test]
    fn test_borrador_de_edicion_sin_contrasena() {
        let borrador = ClienteApi.borrador_de(&cliente());
        assert_eq!(borrador.nombre, "Jose Lema");
        assert_eq!(borrador.direccion, "Otavalo sn y principal");
        assert_eq!(borrador.telefono, "");
        assert!(borrador.contrasena.is_empty());
    }

    #[test]
    fn test_busca_por_nombre_identificacion_y_telefono() {
        let selectores = ClienteApi.selectores();
        let registro = cliente();
        let valores: Vec<Option<String>> =
            selectores.iter().map(|s| s(&registro)).collect();
        assert_eq!(valores[0].as_deref(), Some("Jose Lema"));
        assert_eq!(valores[1].as_deref(), Some("098254785"));
        assert!(valores[2].is_none());
    }
}
