//! # Correspondência Fuzzy de Tags
//!
//! Associa cada valor vindo do geocodificador (a "tag": número da rua, cidade...)
//! ao n-grama da sentença que mais se parece com ele, segundo a razão de
//! Levenshtein. A correspondência é **aproximada** de propósito: o geocodificador
//! devolve valores normalizados ("street" por extenso, códigos postais completos)
//! que raramente aparecem idênticos no endereço digitado pelo usuário.
//!
//! Um valor só é aceito se a melhor razão for **estritamente maior** que a
//! tolerância; caso contrário o resultado é [`MatchOutcome::Unmatched`] — um
//! desfecho esperado e frequente (ex: números de rua embutidos de forma
//! inconsistente), nunca um erro.

use serde::{Deserialize, Serialize};

use crate::levenshtein::levenshtein_ratio;
use crate::ngram::all_ngrams;

/// Tolerância padrão: razão mínima para aceitar uma correspondência fuzzy.
pub const DEFAULT_TOLERANCE: f64 = 0.6;

/// Resultado da correspondência de uma tag contra os candidatos da sentença.
///
/// Modelado como tipo soma em vez de um valor sentinela ("NONE"), para que um
/// endereço que contenha literalmente a palavra "none" jamais seja confundido
/// com ausência de correspondência.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "text", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// O n-grama com melhor pontuação acima da tolerância.
    Matched(String),
    /// Nenhum candidato superou a tolerância (ou não havia candidatos).
    Unmatched,
}

impl MatchOutcome {
    /// Texto correspondido, se houver
    pub fn text(&self) -> Option<&str> {
        match self {
            MatchOutcome::Matched(t) => Some(t),
            MatchOutcome::Unmatched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Pontua a tag contra cada candidato e devolve o melhor acima da tolerância.
///
/// Desempate: com pontuações iguais vence o **primeiro** candidato na ordem de
/// geração (janela crescente, esquerda para direita). Essa ordem é preservada
/// deliberadamente — ela afeta qual ocorrência o resolvedor de spans aceita.
///
/// Conjunto de candidatos vazio (sentença degenerada) resolve para
/// `Unmatched` em vez de falhar.
pub fn match_tag(candidates: &[String], tag: &str, tolerance: f64) -> MatchOutcome {
    let mut best: Option<(&String, f64)> = None;
    for gram in candidates {
        let ratio = levenshtein_ratio(gram, tag);
        // Estritamente maior: empates mantêm o candidato anterior
        if best.map(|(_, b)| ratio > b).unwrap_or(true) {
            best = Some((gram, ratio));
        }
    }
    match best {
        Some((gram, ratio)) if ratio > tolerance => MatchOutcome::Matched(gram.clone()),
        _ => MatchOutcome::Unmatched,
    }
}

/// Corresponde uma lista de tags contra os n-gramas de uma sentença,
/// preservando a ordem de entrada.
///
/// Os candidatos são gerados uma única vez e reutilizados para todas as tags.
pub fn match_tags(sentence: &str, tags: &[&str], tolerance: f64) -> Vec<MatchOutcome> {
    let candidates = all_ngrams(sentence);
    tags.iter()
        .map(|tag| match_tag(&candidates, tag, tolerance))
        .collect()
}
