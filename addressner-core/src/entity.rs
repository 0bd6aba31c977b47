//! # Rótulos de Entidade e Spans de Caractere
//!
//! Define o vocabulário de entidades de endereço e as estruturas de saída da
//! rotulagem. Os códigos seguem o alfabeto fixo usado no conjunto de dados de
//! treinamento:
//!
//! | Código | Significado            | Exemplos                 |
//! |--------|------------------------|--------------------------|
//! | N      | Número da rua          | 123, 45b                 |
//! | S      | Nome da rua            | main street, calle mayor |
//! | M      | Município              | springfield, madrid      |
//! | SP     | Subdivisão (estado/UF) | il, comunidad de madrid  |
//! | PC     | Código postal          | 62704, 28013             |
//! | C      | País                   | united states, spain     |

use serde::{Deserialize, Serialize};

/// Categorias de entidade reconhecidas na rotulagem de endereços.
///
/// Os códigos curtos definem o "vocabulário" semântico do modelo treinado
/// em seguida. Adicionar novas categorias exigiria reanotar os dados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    /// **Número da rua** (`N`). Ex: "123", "45b".
    #[serde(rename = "N")]
    StreetNumber,
    /// **Nome da rua** (`S`). Ex: "main street", "calle mayor".
    #[serde(rename = "S")]
    StreetName,
    /// **Município** (`M`). Ex: "springfield", "madrid".
    #[serde(rename = "M")]
    Municipality,
    /// **Subdivisão do país** (`SP`): estado, província ou comunidade. Ex: "il", "texas".
    #[serde(rename = "SP")]
    Subdivision,
    /// **Código postal** (`PC`). Ex: "62704", "28013".
    #[serde(rename = "PC")]
    PostalCode,
    /// **País** (`C`). Ex: "united states", "spain".
    #[serde(rename = "C")]
    Country,
}

impl EntityLabel {
    /// Código curto da categoria como string (para serialização e anotação)
    pub fn code(&self) -> &'static str {
        match self {
            EntityLabel::StreetNumber => "N",
            EntityLabel::StreetName => "S",
            EntityLabel::Municipality => "M",
            EntityLabel::Subdivision => "SP",
            EntityLabel::PostalCode => "PC",
            EntityLabel::Country => "C",
        }
    }

    /// Tenta parsear a partir do código curto (ex: "PC" → Some(PostalCode))
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "N" => Some(EntityLabel::StreetNumber),
            "S" => Some(EntityLabel::StreetName),
            "M" => Some(EntityLabel::Municipality),
            "SP" => Some(EntityLabel::Subdivision),
            "PC" => Some(EntityLabel::PostalCode),
            "C" => Some(EntityLabel::Country),
            _ => None,
        }
    }

    /// Todas as categorias na ordem de prioridade usada pelo pipeline.
    ///
    /// A ordem importa: na resolução de spans, categorias anteriores têm
    /// prioridade quando dois valores disputam o mesmo trecho do endereço.
    pub fn all() -> [EntityLabel; 6] {
        [
            EntityLabel::StreetNumber,
            EntityLabel::StreetName,
            EntityLabel::Municipality,
            EntityLabel::Subdivision,
            EntityLabel::PostalCode,
            EntityLabel::Country,
        ]
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Um span de entidade em offsets de **byte** da sentença rotulada.
///
/// Intervalo semiaberto `[start, end)`, indexável direto com
/// `&sentence[start..end]`. Para sentenças limpas pelo pipeline padrão a
/// saída é ASCII puro, então os offsets de byte e de caractere coincidem;
/// sentenças com bytes multibyte produzem offsets de byte mesmo assim.
/// Invariantes mantidas pelo resolvedor: `0 <= start < end <= sentence.len()`
/// e nenhum par de spans aceitos se sobrepõe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Offset inicial (inclusivo)
    pub start: usize,
    /// Offset final (exclusivo)
    pub end: usize,
    /// Rótulo da entidade
    pub label: EntityLabel,
}

impl Span {
    /// Quantos bytes dois intervalos compartilham (0 = sem sobreposição).
    pub fn overlap(&self, other: &Span) -> usize {
        let lo = self.start.max(other.start);
        let hi = self.end.min(other.end);
        hi.saturating_sub(lo)
    }
}

/// O artefato final da rotulagem: a sentença e seus spans de entidade.
///
/// Serializa no formato de tupla esperado pelo pipeline de treinamento:
/// `["123 main st", {"entities": [[0, 3, "N"], ...]}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledSentence {
    pub sentence: String,
    pub entities: Vec<Span>,
}

impl LabelledSentence {
    /// Converte para o valor JSON no formato de treinamento
    /// (tupla `[texto, {"entities": [[start, end, label], ...]}]`).
    pub fn to_training_json(&self) -> serde_json::Value {
        let entities: Vec<serde_json::Value> = self
            .entities
            .iter()
            .map(|s| serde_json::json!([s.start, s.end, s.label.code()]))
            .collect();
        serde_json::json!([self.sentence, { "entities": entities }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_codes_roundtrip() {
        for label in EntityLabel::all() {
            assert_eq!(EntityLabel::from_code(label.code()), Some(label));
        }
        assert_eq!(EntityLabel::from_code("X"), None);
    }

    #[test]
    fn test_span_overlap() {
        let a = Span { start: 0, end: 5, label: EntityLabel::StreetNumber };
        let b = Span { start: 3, end: 8, label: EntityLabel::StreetName };
        let c = Span { start: 5, end: 9, label: EntityLabel::Municipality };
        assert_eq!(a.overlap(&b), 2);
        assert_eq!(b.overlap(&a), 2);
        // Intervalos semiabertos adjacentes não se sobrepõem
        assert_eq!(a.overlap(&c), 0);
    }

    #[test]
    fn test_training_json_shape() {
        let labelled = LabelledSentence {
            sentence: "123 main".to_string(),
            entities: vec![Span { start: 0, end: 3, label: EntityLabel::StreetNumber }],
        };
        let json = labelled.to_training_json();
        assert_eq!(json[0], "123 main");
        assert_eq!(json[1]["entities"][0][2], "N");
    }
}
