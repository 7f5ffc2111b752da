//! Renderer del informe PDF de inspección
//!
//! Produce el documento paginado a partir de una inspección persistida y el
//! catálogo de ítems. El layout se arma en dos pasadas explícitas: la
//! primera construye las páginas con el encabezado repetido y la tabla
//! paginada; la segunda superpone el pie "Página X de Y" una vez conocido
//! el total, antes de serializar.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point,
    Rect, Rgb,
};

use crate::models::inspeccion::InspeccionItem;
use crate::repositories::inspeccion_repository::InspeccionReporte;
use crate::reports::catalog::{merge_con_catalogo, FilaChecklist};
use crate::reports::layout::{
    approx_text_width, clip_to_width, row_fits, usable_width, wrap_to_width, COL_WIDTHS,
    HEADER_BOTTOM, MARGIN_LEFT, PAGE_HEIGHT, PAGE_WIDTH, ROW_HEIGHT, SIGNATURE_BLOCK_HEIGHT,
    table_width, TABLE_LIMIT,
};
use crate::utils::errors::{AppError, AppResult};

const FOTO_ANCHO: f64 = 88.0;
const FOTO_ALTO: f64 = 56.0;
const LINEA: f64 = 4.6;

fn azul() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.2, 0.4, None))
}

fn negro() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn blanco() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn gris_fila() -> Color {
    Color::Rgb(Rgb::new(0.976, 0.976, 0.976, None))
}

fn gris_borde() -> Color {
    Color::Rgb(Rgb::new(0.8, 0.8, 0.8, None))
}

fn gris_pie() -> Color {
    Color::Rgb(Rgb::new(0.4, 0.4, 0.4, None))
}

fn verde() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.5, 0.0, None))
}

fn rojo() -> Color {
    Color::Rgb(Rgb::new(0.8, 0.0, 0.0, None))
}

/// Renderizar el informe de inspección como bytes PDF
pub fn render_inspeccion_pdf(
    data: &InspeccionReporte,
    items: &[InspeccionItem],
    logo_path: Option<&str>,
) -> AppResult<Vec<u8>> {
    let filas = merge_con_catalogo(items);

    let mut writer = PdfWriter::new(data.id, logo_path)?;
    writer.datos_inspeccion(data);
    writer.datos_conductor(data);
    writer.observaciones(data);
    writer.foto(data);
    writer.tabla_items(&filas);
    writer.firmas(data);
    writer.finish()
}

/// Estado de escritura de la primera pasada: documento, página y cursor
/// vertical medido desde el borde superior, en mm.
struct PdfWriter {
    doc: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    layer: PdfLayerReference,
    y: f64,
    logo: Option<printpdf::image_crate::DynamicImage>,
}

impl PdfWriter {
    fn new(inspeccion_id: i32, logo_path: Option<&str>) -> AppResult<Self> {
        let (doc, page, layer_idx) = PdfDocument::new(
            format!("Informe de Inspección Vehicular N° {}", inspeccion_id),
            Mm(PAGE_WIDTH as f32),
            Mm(PAGE_HEIGHT as f32),
            "contenido",
        );

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::Internal(format!("Error cargando fuente: {}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::Internal(format!("Error cargando fuente: {}", e)))?;

        let layer = doc.get_page(page).get_layer(layer_idx);

        let logo = logo_path.and_then(|path| match std::fs::read(path) {
            Ok(bytes) => printpdf::image_crate::load_from_memory(&bytes).ok(),
            Err(_) => {
                tracing::warn!("No se encontró el logo institucional en {}", path);
                None
            }
        });

        let mut writer = Self {
            doc,
            regular,
            bold,
            pages: vec![(page, layer_idx)],
            layer,
            y: 0.0,
            logo,
        };
        writer.encabezado();

        Ok(writer)
    }

    /// Iniciar una página nueva y repetir el encabezado institucional
    fn nueva_pagina(&mut self) {
        let (page, layer_idx) = self
            .doc
            .add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "contenido");
        self.layer = self.doc.get_page(page).get_layer(layer_idx);
        self.pages.push((page, layer_idx));
        self.encabezado();
    }

    /// Encabezado repetido en todas las páginas: logo, membrete, línea
    /// divisoria y título del informe. Deja el cursor bajo el encabezado.
    fn encabezado(&mut self) {
        if let Some(logo) = &self.logo {
            let image = Image::from_dynamic_image(logo);
            let ancho_px = image.image.width.0 as f64;
            let alto_px = image.image.height.0 as f64;
            let ancho_mm = ancho_px / 300.0 * 25.4;
            let alto_mm = alto_px / 300.0 * 25.4;
            image.add_to_layer(
                self.layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(MARGIN_LEFT as f32)),
                    translate_y: Some(Mm((PAGE_HEIGHT - 27.0) as f32)),
                    scale_x: Some((20.0 / ancho_mm) as f32),
                    scale_y: Some((18.0 / alto_mm) as f32),
                    dpi: Some(300.0),
                    ..Default::default()
                },
            );
        }

        let x_membrete = MARGIN_LEFT + 26.0;
        self.texto("MUNICIPALIDAD DE CURACAVÍ", 14.0, x_membrete, 14.0, true, azul());
        self.texto(
            "Dirección de Operaciones, Departamento de Movilización.",
            10.0,
            x_membrete,
            19.5,
            false,
            negro(),
        );

        self.linea_horizontal(23.0, azul(), 0.6);

        self.texto(
            "INFORME DE INSPECCIÓN VEHICULAR",
            14.0,
            MARGIN_LEFT,
            32.0,
            true,
            azul(),
        );

        self.y = HEADER_BOTTOM;
    }

    fn texto(&self, text: &str, size: f64, x: f64, y_top: f64, bold: bool, color: Color) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.set_fill_color(color);
        self.layer.use_text(
            text,
            size as f32,
            Mm(x as f32),
            Mm((PAGE_HEIGHT - y_top) as f32),
            font,
        );
    }

    fn linea_horizontal(&self, y_top: f64, color: Color, thickness: f64) {
        self.layer.set_outline_color(color);
        self.layer.set_outline_thickness(thickness as f32);
        let line = Line {
            points: vec![
                (
                    Point::new(Mm(MARGIN_LEFT as f32), Mm((PAGE_HEIGHT - y_top) as f32)),
                    false,
                ),
                (
                    Point::new(
                        Mm((PAGE_WIDTH - MARGIN_LEFT) as f32),
                        Mm((PAGE_HEIGHT - y_top) as f32),
                    ),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    /// Rectángulo relleno con borde; `y_top` es el borde superior
    fn rect(&self, x: f64, y_top: f64, width: f64, height: f64, fill: Color, stroke: Color) {
        self.layer.set_fill_color(fill);
        self.layer.set_outline_color(stroke);
        self.layer.set_outline_thickness(0.2);
        let rect = Rect::new(
            Mm(x as f32),
            Mm((PAGE_HEIGHT - y_top - height) as f32),
            Mm((x + width) as f32),
            Mm((PAGE_HEIGHT - y_top) as f32),
        )
        .with_mode(PaintMode::FillStroke);
        self.layer.add_rect(rect);
    }

    fn titulo_seccion(&mut self, titulo: &str) {
        self.y += LINEA;
        self.texto(titulo, 11.0, MARGIN_LEFT, self.y, true, azul());
        self.y += LINEA + 1.0;
    }

    /// Línea "Etiqueta: valor" con el valor en negrita
    fn campo(&mut self, etiqueta: &str, valor: &str) {
        self.texto(etiqueta, 10.0, MARGIN_LEFT, self.y, false, negro());
        let offset = approx_text_width(etiqueta, 10.0) + 2.0;
        self.texto(valor, 10.0, MARGIN_LEFT + offset, self.y, true, negro());
        self.y += LINEA;
    }

    fn datos_inspeccion(&mut self, data: &InspeccionReporte) {
        self.titulo_seccion("Datos de la Inspección");
        self.campo("ID Inspección:", &data.id.to_string());
        self.campo("Vehículo:", &data.vehiculo);
        self.campo(
            "Fecha:",
            &data.created_at.format("%d-%m-%Y %H:%M").to_string(),
        );
        self.campo("Estado General:", &data.estado);
    }

    /// Bloque del conductor: los campos opcionales vacíos se omiten,
    /// no se imprimen en blanco
    fn datos_conductor(&mut self, data: &InspeccionReporte) {
        self.titulo_seccion("Datos del Conductor");
        self.campo("Conductor:", &data.conductor);
        if !data.rut_conductor.is_empty() {
            self.campo("RUT:", &data.rut_conductor);
        }
        if !data.direccion_conductor.is_empty() {
            self.campo("Dirección:", &data.direccion_conductor);
        }
        if !data.telefono_conductor.is_empty() {
            self.campo("Teléfono:", &data.telefono_conductor);
        }
        if !data.licencia_conductor.is_empty() {
            self.campo("Clase Licencia:", &data.licencia_conductor);
        }
    }

    /// Observaciones con flujo de página: la observación es TEXT sin tope,
    /// así que cada línea verifica que quepa sobre el límite inferior antes
    /// de dibujarse.
    fn observaciones(&mut self, data: &InspeccionReporte) {
        self.titulo_seccion("Observaciones Generales");
        let texto = if data.observacion.trim().is_empty() {
            "Sin observaciones registradas."
        } else {
            data.observacion.as_str()
        };
        for linea in wrap_to_width(texto, 10.0, usable_width()) {
            if self.y + LINEA > TABLE_LIMIT {
                self.nueva_pagina();
                self.y += LINEA;
            }
            self.texto(&linea, 10.0, MARGIN_LEFT, self.y, false, negro());
            self.y += LINEA;
        }
    }

    /// Foto centrada horizontalmente a tamaño fijo. Una foto malformada se
    /// descarta con un warning; el resto del informe no se ve afectado.
    fn foto(&mut self, data: &InspeccionReporte) {
        let Some(payload) = data.foto.as_deref() else {
            return;
        };

        let imagen = match decode_data_url(payload)
            .and_then(|bytes| printpdf::image_crate::load_from_memory(&bytes).ok())
        {
            Some(imagen) => imagen,
            None => {
                tracing::warn!(
                    inspeccion_id = data.id,
                    "Foto de inspección ilegible, se omite del informe"
                );
                return;
            }
        };

        if !row_fits(self.y + FOTO_ALTO + LINEA * 2.0) {
            self.nueva_pagina();
        }

        self.titulo_seccion("Evidencia Fotográfica");

        let image = Image::from_dynamic_image(&imagen);
        let ancho_px = image.image.width.0 as f64;
        let alto_px = image.image.height.0 as f64;
        let ancho_mm = ancho_px / 300.0 * 25.4;
        let alto_mm = alto_px / 300.0 * 25.4;

        let x = MARGIN_LEFT + (usable_width() - FOTO_ANCHO) / 2.0;
        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x as f32)),
                translate_y: Some(Mm((PAGE_HEIGHT - self.y - FOTO_ALTO) as f32)),
                scale_x: Some((FOTO_ANCHO / ancho_mm) as f32),
                scale_y: Some((FOTO_ALTO / alto_mm) as f32),
                dpi: Some(300.0),
                ..Default::default()
            },
        );

        self.y += FOTO_ALTO + LINEA * 2.0;
    }

    fn cabecera_tabla(&mut self) {
        self.rect(MARGIN_LEFT, self.y, table_width(), ROW_HEIGHT, azul(), azul());

        let mut x = MARGIN_LEFT;
        for (titulo, ancho) in ["Ítem", "Existe", "Estado", "Observaciones"]
            .iter()
            .zip(COL_WIDTHS)
        {
            self.texto(titulo, 10.0, x + 1.5, self.y + ROW_HEIGHT - 2.0, true, blanco());
            x += ancho;
        }

        self.y += ROW_HEIGHT;
    }

    /// Tabla del checklist con paginación: antes de cada fila se verifica
    /// que quepa entera; si no, página nueva, encabezado y cabecera de
    /// tabla otra vez, y recién entonces la misma fila.
    fn tabla_items(&mut self, filas: &[FilaChecklist]) {
        self.y += LINEA;

        // El título, la cabecera y al menos una fila van juntos: si no
        // caben, la tabla completa arranca en página nueva.
        if self.y + LINEA + 1.0 + ROW_HEIGHT * 2.0 > TABLE_LIMIT {
            self.nueva_pagina();
            self.y += LINEA;
        }

        self.texto("Ítems Inspeccionados", 11.0, MARGIN_LEFT, self.y, true, azul());
        self.y += LINEA + 1.0;

        self.cabecera_tabla();

        for (index, fila) in filas.iter().enumerate() {
            if !row_fits(self.y) {
                self.nueva_pagina();
                self.cabecera_tabla();
            }

            let fondo = if index % 2 == 0 { gris_fila() } else { blanco() };
            self.rect(MARGIN_LEFT, self.y, table_width(), ROW_HEIGHT, fondo, gris_borde());

            let baseline = self.y + ROW_HEIGHT - 2.0;
            let mut x = MARGIN_LEFT;

            self.texto(
                &clip_to_width(fila.nombre, 9.0, COL_WIDTHS[0] - 3.0),
                9.0,
                x + 1.5,
                baseline,
                false,
                negro(),
            );
            x += COL_WIDTHS[0];

            self.texto(&fila.existe, 9.0, x + 1.5, baseline, false, negro());
            x += COL_WIDTHS[1];

            let color_estado = if fila.estado == "Bueno" { verde() } else { rojo() };
            self.texto(&fila.estado, 9.0, x + 1.5, baseline, false, color_estado);
            x += COL_WIDTHS[2];

            let obs = if fila.obs.is_empty() { "-" } else { fila.obs.as_str() };
            self.texto(
                &clip_to_width(obs, 9.0, COL_WIDTHS[3] - 3.0),
                9.0,
                x + 1.5,
                baseline,
                false,
                negro(),
            );

            self.y += ROW_HEIGHT;
        }
    }

    /// Bloque de firmas, en la página actual o en una nueva si no queda
    /// espacio suficiente
    fn firmas(&mut self, data: &InspeccionReporte) {
        self.y += LINEA * 3.0;

        if self.y + SIGNATURE_BLOCK_HEIGHT > PAGE_HEIGHT - 24.0 {
            self.nueva_pagina();
            self.y += LINEA * 2.0;
        }

        let linea_firma = "_____________________________";
        let x_derecha = MARGIN_LEFT + 92.0;

        self.texto(linea_firma, 10.0, MARGIN_LEFT, self.y, true, negro());
        self.texto(linea_firma, 10.0, x_derecha, self.y, true, negro());

        self.y += LINEA;
        self.texto(
            &format!("Conductor: {}", data.conductor),
            10.0,
            MARGIN_LEFT + 5.0,
            self.y,
            true,
            negro(),
        );
        self.texto("Supervisor:", 10.0, x_derecha + 5.0, self.y, true, negro());

        if !data.rut_conductor.is_empty() {
            self.y += LINEA;
            self.texto(
                &format!("RUT: {}", data.rut_conductor),
                10.0,
                MARGIN_LEFT + 5.0,
                self.y,
                true,
                negro(),
            );
        }
    }

    /// Segunda pasada: con el total de páginas ya conocido, superponer el
    /// pie institucional y el número de página en cada página almacenada.
    fn finish(self) -> AppResult<Vec<u8>> {
        let total = self.pages.len();

        for (numero, (page, layer_idx)) in self.pages.iter().enumerate() {
            let layer = self.doc.get_page(*page).get_layer(*layer_idx);

            let institucional = "Municipalidad de Curacaví - Departamento de Transporte";
            let x_centro = MARGIN_LEFT + (usable_width() - approx_text_width(institucional, 8.0)) / 2.0;
            layer.set_fill_color(gris_pie());
            layer.use_text(institucional, 8.0, Mm(x_centro as f32), Mm(12.0), &self.regular);

            let paginado = format!("Página {} de {}", numero + 1, total);
            let x_paginado = PAGE_WIDTH - MARGIN_LEFT - approx_text_width(&paginado, 8.0);
            layer.use_text(paginado, 8.0, Mm(x_paginado as f32), Mm(12.0), &self.regular);
        }

        self.doc
            .save_to_bytes()
            .map_err(|e| AppError::Internal(format!("Error serializando PDF: {}", e)))
    }
}

/// Decodificar una foto enviada como data URL base64. Acepta también el
/// payload base64 desnudo.
pub fn decode_data_url(payload: &str) -> Option<Vec<u8>> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let data = match payload.find(";base64,") {
        Some(pos) => &payload[pos + ";base64,".len()..],
        None if payload.starts_with("data:") => return None,
        None => payload,
    };

    STANDARD.decode(data.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reporte(foto: Option<String>) -> InspeccionReporte {
        InspeccionReporte {
            id: 1,
            observacion: "Revisión mensual".to_string(),
            estado: "OK".to_string(),
            foto,
            created_at: Utc::now(),
            conductor: "Juan Pérez".to_string(),
            rut_conductor: "12.345.678-9".to_string(),
            direccion_conductor: String::new(),
            telefono_conductor: String::new(),
            licencia_conductor: "B".to_string(),
            vehiculo: "AB-CD 12".to_string(),
        }
    }

    #[test]
    fn test_decode_data_url_with_prefix() {
        let payload = "data:image/png;base64,aG9sYQ==";
        assert_eq!(decode_data_url(payload).unwrap(), b"hola");
    }

    #[test]
    fn test_decode_data_url_bare_base64() {
        assert_eq!(decode_data_url("aG9sYQ==").unwrap(), b"hola");
    }

    #[test]
    fn test_decode_data_url_malformed() {
        assert!(decode_data_url("data:image/png;charset=utf8").is_none());
        assert!(decode_data_url("data:image/png;base64,!!!no-es-base64!!!").is_none());
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_inspeccion_pdf(&reporte(None), &[], None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_with_malformed_photo_still_succeeds() {
        let data = reporte(Some("data:image/png;base64,no-decodifica".to_string()));
        let bytes = render_inspeccion_pdf(&data, &[], None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_observation_flows_to_new_pages() {
        let mut data = reporte(None);
        data.observacion = "revisión con detalle extenso ".repeat(250);

        let mut writer = PdfWriter::new(data.id, None).unwrap();
        writer.datos_inspeccion(&data);
        writer.datos_conductor(&data);
        writer.observaciones(&data);

        // el texto desbordó y pasó a páginas nuevas; el cursor nunca
        // queda bajo el límite inferior
        assert!(writer.pages.len() > 1);
        assert!(writer.y <= TABLE_LIMIT);
    }

    #[test]
    fn test_table_title_moves_to_new_page_when_cursor_is_low() {
        let data = reporte(None);
        let mut writer = PdfWriter::new(data.id, None).unwrap();
        writer.y = TABLE_LIMIT - 1.0;

        let paginas_antes = writer.pages.len();
        writer.tabla_items(&merge_con_catalogo(&[]));

        assert!(writer.pages.len() > paginas_antes);
    }

    #[test]
    fn test_render_long_observation_succeeds() {
        let mut data = reporte(None);
        data.observacion = "observación del conductor ".repeat(250);
        let bytes = render_inspeccion_pdf(&data, &[], None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_with_items_succeeds() {
        let items = vec![InspeccionItem {
            item_key: "Freno de mano".to_string(),
            existe: "NO".to_string(),
            estado: "Malo".to_string(),
            obs: "sin tensión".to_string(),
        }];
        let bytes = render_inspeccion_pdf(&reporte(None), &items, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
