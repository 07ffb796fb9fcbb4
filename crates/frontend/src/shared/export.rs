//! Client-side download of the statement PDF.
//!
//! The API returns the document as standard base64 text; here it becomes an
//! `application/pdf` Blob behind a temporary object URL that is revoked on
//! every exit path, whether or not the save trigger worked.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use contracts::domain::reporte::RespuestaPdf;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Decodifica el documento (alfabeto base64 estándar, sin variante URL).
pub fn decodificar_pdf(b64: &str) -> Result<Vec<u8>, String> {
    STANDARD
        .decode(b64)
        .map_err(|e| format!("Documento PDF corrupto: {}", e))
}

/// Decodifica el payload y dispara la descarga con su nombre sugerido.
pub fn descargar_pdf(respuesta: &RespuestaPdf) -> Result<(), String> {
    let bytes = decodificar_pdf(&respuesta.pdf)?;
    let blob = crear_blob_pdf(&bytes)?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
    // liberar la URL temporal pase lo que pase con el disparo
    let resultado = disparar_descarga(&url, &respuesta.filename);
    let _ = Url::revoke_object_url(&url);
    resultado
}

fn crear_blob_pdf(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn disparar_descarga(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodifica_bytes_exactos() {
        // "%PDF-1.4" en base64
        let bytes = decodificar_pdf("JVBERi0xLjQ=").unwrap();
        assert_eq!(bytes, b"%PDF-1.4");
    }

    #[test]
    fn test_longitud_decodificada() {
        let b64 = "JVBERi0xLjQKJcTl8uXrCg==";
        let bytes = decodificar_pdf(b64).unwrap();
        // L caracteres base64 con relleno: L / 4 * 3 - padding
        assert_eq!(bytes.len(), b64.len() / 4 * 3 - 2);
    }

    #[test]
    fn test_ida_y_vuelta() {
        let original = "JVBERi0xLjQKJcTl8uXrCg==";
        let bytes = decodificar_pdf(original).unwrap();
        assert_eq!(STANDARD.encode(&bytes), original);
    }

    #[test]
    fn test_rechaza_texto_invalido() {
        assert!(decodificar_pdf("esto no es base64!!").is_err());
        // alfabeto URL-safe no aceptado
        assert!(decodificar_pdf("a-b_").is_err());
    }
}
