//! # Pipeline de Rotulagem de Endereços
//!
//! Orquestrador que conecta todos os estágios: limpeza do endereço bruto,
//! correspondência fuzzy dos valores do geocodificador e resolução dos spans.
//! O fluxo de dados é estritamente linear:
//!
//! ```text
//! endereço bruto ──limpeza──▶ sentença ──n-gramas──▶ candidatos ─┐
//!                valores da geocodificação ──▶ matcher ◀─────────┘
//!                                                 └──▶ resolvedor ──▶ spans
//! ```
//!
//! Cada sentença é completamente independente das demais: o estado do pipeline
//! é imutável durante a rotulagem, então o lote inteiro é particionado entre
//! threads com `rayon` sem nenhuma coordenação.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cleaning::{CleaningConfig, CleaningOptions};
use crate::entity::{EntityLabel, LabelledSentence};
use crate::error::{Error, Result};
use crate::labeller::label_sentence;
use crate::matcher::{match_tags, DEFAULT_TOLERANCE};

/// Campos de endereço devolvidos pelo serviço de geocodificação.
///
/// Os nomes seguem o JSON da resposta do serviço (camelCase). Campos ausentes
/// na resposta ficam `None` e não participam da rotulagem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeocodedFields {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub municipality: Option<String>,
    pub country_subdivision: Option<String>,
    pub country_subdivision_name: Option<String>,
    pub postal_code: Option<String>,
    pub extended_postal_code: Option<String>,
    pub country: Option<String>,
}

impl GeocodedFields {
    /// Pares (rótulo, valor) na ordem de prioridade da rotulagem, com os valores
    /// em minúsculas (convenção das sentenças limpas). Campos `None` são pulados.
    ///
    /// A ordem replica a lista de features do pipeline de dados: número, rua,
    /// município, subdivisão (código e nome), código postal (curto e estendido),
    /// país. Ela define quem vence quando dois valores disputam o mesmo trecho.
    pub fn tag_pairs(&self) -> Vec<(EntityLabel, String)> {
        let ordered: [(EntityLabel, &Option<String>); 8] = [
            (EntityLabel::StreetNumber, &self.street_number),
            (EntityLabel::StreetName, &self.street_name),
            (EntityLabel::Municipality, &self.municipality),
            (EntityLabel::Subdivision, &self.country_subdivision),
            (EntityLabel::Subdivision, &self.country_subdivision_name),
            (EntityLabel::PostalCode, &self.postal_code),
            (EntityLabel::PostalCode, &self.extended_postal_code),
            (EntityLabel::Country, &self.country),
        ];
        ordered
            .iter()
            .filter_map(|(label, value)| value.as_ref().map(|v| (*label, v.to_lowercase())))
            .collect()
    }
}

/// Um registro de entrada: o endereço em texto livre e os campos estruturados
/// obtidos do geocodificador para o mesmo endereço.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Endereço em texto livre, como digitado (antes da limpeza)
    pub address: String,
    /// Campos estruturados da geocodificação
    #[serde(default)]
    pub geocode: GeocodedFields,
}

/// O pipeline de rotulagem completo.
///
/// Imutável após a construção; uma instância pode ser compartilhada entre
/// threads (`label_batch` faz exatamente isso).
pub struct AddressLabeller {
    tolerance: f64,
    cleaning: CleaningConfig,
    cleaning_options: CleaningOptions,
}

impl AddressLabeller {
    /// Pipeline padrão: tolerância 0.6 e limpeza sem remoção de informação
    /// adicional — o ruído de apartamento/andar permanece como texto não
    /// rotulado, que é o que o modelo treinado precisa aprender a ignorar.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            cleaning: CleaningConfig::new(),
            cleaning_options: CleaningOptions { extra_info: false, ..CleaningOptions::default() },
        }
    }

    /// Ajusta a tolerância da correspondência fuzzy.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Substitui a configuração e os toggles de limpeza.
    pub fn with_cleaning(mut self, config: CleaningConfig, options: CleaningOptions) -> Self {
        self.cleaning = config;
        self.cleaning_options = options;
        self
    }

    /// Rotula uma sentença **já limpa** contra listas paralelas de rótulos e
    /// valores.
    ///
    /// Esta é a porta de entrada com validação: listas de comprimentos
    /// diferentes falham imediatamente com [`Error::MismatchedTags`], antes de
    /// qualquer trabalho de correspondência. Todos os demais desfechos ruins
    /// (sem candidatos, abaixo da tolerância, sem fronteira válida) são
    /// absorvidos e viram simplesmente "menos spans".
    ///
    /// Os spans resultantes usam offsets de byte (veja [`crate::Span`]); na saída
    /// ASCII da limpeza padrão eles coincidem com offsets de caractere.
    pub fn label_cleaned(
        &self,
        sentence: &str,
        labels: &[EntityLabel],
        values: &[&str],
    ) -> Result<LabelledSentence> {
        if labels.len() != values.len() {
            return Err(Error::MismatchedTags {
                labels: labels.len(),
                values: values.len(),
            });
        }

        let outcomes = match_tags(sentence, values, self.tolerance);
        let pairs: Vec<_> = labels.iter().copied().zip(outcomes).collect();
        Ok(label_sentence(sentence, &pairs))
    }

    /// Limpa e rotula um registro completo (endereço + campos geocodificados).
    pub fn label_record(&self, record: &AddressRecord) -> LabelledSentence {
        let sentence = self.cleaning.clean(&record.address, &self.cleaning_options);
        let pairs = record.geocode.tag_pairs();
        let labels: Vec<EntityLabel> = pairs.iter().map(|(l, _)| *l).collect();
        let values: Vec<&str> = pairs.iter().map(|(_, v)| v.as_str()).collect();

        // Comprimentos iguais por construção; o Err é inalcançável aqui
        self.label_cleaned(&sentence, &labels, &values)
            .unwrap_or_else(|_| LabelledSentence { sentence, entities: Vec::new() })
    }

    /// Rotula um lote de registros em paralelo.
    ///
    /// A unidade de paralelismo é a sentença: cada registro é independente,
    /// então o lote é dividido entre as threads do pool global do rayon.
    /// A ordem do resultado corresponde à ordem da entrada.
    pub fn label_batch(&self, records: &[AddressRecord]) -> Vec<LabelledSentence> {
        records.par_iter().map(|r| self.label_record(r)).collect()
    }
}

impl Default for AddressLabeller {
    fn default() -> Self {
        Self::new()
    }
}

/// Acurácia simples de um conjunto de predições contra o padrão-ouro:
/// para cada registro, a fração dos spans preditos presentes no conjunto
/// ouro; a média sobre os registros é devolvida em `[0.0, 1.0]`.
///
/// O pareamento é posicional (`gold[i]` com `predictions[i]`); a média é
/// tomada sobre os pares comparados, e registros excedentes de qualquer
/// lado são ignorados. Listas sem nenhum par comparável devolvem 0.
///
/// Registro sem nenhum span predito conta como 0 (divisão por zero guardada).
pub fn accuracy(gold: &[LabelledSentence], predictions: &[LabelledSentence]) -> f64 {
    let compared = gold.len().min(predictions.len());
    if compared == 0 {
        return 0.0;
    }
    let total: f64 = predictions
        .iter()
        .zip(gold)
        .map(|(pred, gold)| {
            if pred.entities.is_empty() {
                return 0.0;
            }
            let good = pred
                .entities
                .iter()
                .filter(|span| gold.entities.contains(span))
                .count();
            good as f64 / pred.entities.len() as f64
        })
        .sum();
    total / compared as f64
}
