//! Prompt construction.
//!
//! One structured block embedding the recognized text, a metadata summary,
//! the caller's expected values, and the seven fixed analytical questions.
//! Absent fields render as "Não informado" / "Não disponível" so the prompt
//! shape is stable regardless of what the caller supplied.

use forensics::ImageMetadata;

use crate::types::ExpectedData;

const NOT_INFORMED: &str = "Não informado";
const NOT_AVAILABLE: &str = "Não disponível";

/// Builds the assessment prompt for one receipt.
pub fn build_prompt(text: &str, metadata: &ImageMetadata, expected: &ExpectedData) -> String {
    let software = metadata
        .exif
        .get("Software")
        .map(String::as_str)
        .unwrap_or(NOT_AVAILABLE);

    format!(
        "Analise este comprovante de pagamento e verifique sua autenticidade.\n\
         \n\
         DADOS DO COMPROVANTE:\n\
         Texto extraído: {text}\n\
         \n\
         METADADOS DA IMAGEM:\n\
         Tamanho: {size}\n\
         Data de Criação: {created}\n\
         Data de Modificação: {modified}\n\
         Resolução: {width}x{height}\n\
         Formato: {format}\n\
         Software: {software}\n\
         \n\
         DADOS ESPERADOS (se fornecidos):\n\
         Valor esperado: {valor}\n\
         CPF/CNPJ do beneficiário: {documento}\n\
         Nome do beneficiário: {beneficiario}\n\
         Banco do beneficiário: {banco}\n\
         \n\
         Por favor, analise e responda:\n\
         1. O comprovante parece autêntico?\n\
         2. Os horários de criação do arquivo e data do pagamento são coerentes?\n\
         3. Os dados do beneficiário conferem com os esperados?\n\
         4. Há sinais de manipulação ou edição?\n\
         5. O valor do pagamento confere?\n\
         6. Existem inconsistências nos metadados?\n\
         7. Qual sua conclusão final sobre a autenticidade deste comprovante?\n\
         \n\
         Forneça uma análise detalhada e justifique sua conclusão.",
        size = metadata.basic.size,
        created = metadata.basic.created,
        modified = metadata.basic.modified,
        width = metadata.image_info.width,
        height = metadata.image_info.height,
        format = metadata.image_info.format,
        valor = or_not_informed(&expected.valor),
        documento = or_not_informed(&expected.documento),
        beneficiario = or_not_informed(&expected.beneficiario),
        banco = or_not_informed(&expected.banco),
    )
}

fn or_not_informed(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_INFORMED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forensics::{FileStats, ImageInfo};
    use std::collections::BTreeMap;

    fn sample_metadata() -> ImageMetadata {
        ImageMetadata {
            basic: FileStats {
                size: "120.50 KB".into(),
                created: "10/10/2023 14:00:00".into(),
                modified: "10/10/2023 14:00:01".into(),
                accessed: "10/10/2023 14:05:00".into(),
            },
            image_info: ImageInfo {
                width: 1080,
                height: 1920,
                format: "jpeg".into(),
                ..ImageInfo::default()
            },
            exif: BTreeMap::from([("Software".to_string(), "iOS 16".to_string())]),
            warnings: Vec::new(),
            is_screenshot: true,
        }
    }

    #[test]
    fn prompt_embeds_text_metadata_and_questions() {
        let prompt = build_prompt("Comprovante R$ 10,00", &sample_metadata(), &ExpectedData::default());
        assert!(prompt.contains("Texto extraído: Comprovante R$ 10,00"));
        assert!(prompt.contains("Tamanho: 120.50 KB"));
        assert!(prompt.contains("Resolução: 1080x1920"));
        assert!(prompt.contains("Software: iOS 16"));
        assert!(prompt.contains("7. Qual sua conclusão final"));
    }

    #[test]
    fn absent_expected_fields_render_not_informed() {
        let prompt = build_prompt("texto", &sample_metadata(), &ExpectedData::default());
        assert_eq!(prompt.matches("Não informado").count(), 4);
    }

    #[test]
    fn supplied_expected_fields_are_embedded() {
        let expected = ExpectedData {
            valor: Some("150,00".into()),
            beneficiario: Some("Maria Silva".into()),
            ..ExpectedData::default()
        };
        let prompt = build_prompt("texto", &sample_metadata(), &expected);
        assert!(prompt.contains("Valor esperado: 150,00"));
        assert!(prompt.contains("Nome do beneficiário: Maria Silva"));
        assert_eq!(prompt.matches("Não informado").count(), 2);
    }

    #[test]
    fn missing_software_tag_renders_not_available() {
        let mut metadata = sample_metadata();
        metadata.exif.clear();
        let prompt = build_prompt("texto", &metadata, &ExpectedData::default());
        assert!(prompt.contains("Software: Não disponível"));
    }
}
