//! # Resolução de Spans com Correção de Fronteira
//!
//! O [`crate::matcher`] entrega apenas o **texto** do melhor n-grama; este módulo
//! reconstrói os offsets exatos em bytes daquele texto dentro da sentença,
//! garantindo três propriedades:
//!
//! 1. **Fronteira de palavra**: um trecho aceito deve ser uma palavra inteira
//!    (ou sequência de palavras), nunca um pedaço interno de uma palavra maior
//!    (ex: "as" dentro de "las").
//! 2. **Não sobreposição**: nenhum caractere pertence a dois spans; tags
//!    anteriores na lista de entrada têm prioridade sobre as posteriores.
//! 3. **Determinismo**: mesma entrada, mesmo conjunto de spans, sempre.
//!
//! ## Variantes de busca literal
//!
//! Para distinguir palavra isolada de substring aninhada sem um tokenizador
//! completo, cada texto `m` é procurado literalmente em quatro variantes, nesta
//! ordem de prioridade: `" m "`, `" m"`, `"m "` e `"m"`. Os offsets do próprio
//! `m` são recuperados descontando o preenchimento da variante. A primeira
//! ocorrência (na ordem variante → esquerda-para-direita) que passa nas
//! verificações de sobreposição e fronteira é aceita; o restante é descartado.

use crate::entity::{EntityLabel, LabelledSentence, Span};
use crate::matcher::MatchOutcome;

/// Resolve os offsets de cada tag correspondida e monta o conjunto final de
/// spans, sem sobreposições e com duplicatas colapsadas.
///
/// Os offsets são de **byte**, sempre alinhados a caracteres do texto
/// correspondido (`&sentence[start..end]` nunca entra em pânico). Nas
/// sentenças ASCII que o pipeline de limpeza produz eles coincidem com
/// offsets de caractere.
///
/// `pairs` deve vir na ordem de prioridade do chamador: quando duas tags
/// disputam o mesmo trecho, a que aparece antes vence. Tags `Unmatched` são
/// puladas; tags cujo texto existe na sentença mas falha em todas as
/// verificações de fronteira simplesmente não contribuem span (descarte
/// silencioso, nunca erro).
pub fn resolve_spans(sentence: &str, pairs: &[(EntityLabel, MatchOutcome)]) -> Vec<Span> {
    let mut accepted: Vec<Span> = Vec::new();

    for (label, outcome) in pairs {
        let matched = match outcome.text() {
            Some(m) if !m.is_empty() => m,
            _ => continue,
        };

        if let Some((start, end)) = find_span(sentence, matched, &accepted) {
            accepted.push(Span { start, end, label: *label });
        }
    }

    dedup_preserving_order(accepted)
}

/// Procura a primeira ocorrência aceitável de `matched` na sentença.
///
/// Retorna os offsets de `matched` em si (sem o preenchimento da variante),
/// ou `None` se toda ocorrência de toda variante falhar nas verificações.
fn find_span(sentence: &str, matched: &str, accepted: &[Span]) -> Option<(usize, usize)> {
    // (texto da variante, desconto no início, desconto no fim)
    let variants = [
        (format!(" {matched} "), 1, 1),
        (format!(" {matched}"), 1, 0),
        (format!("{matched} "), 0, 1),
        (matched.to_string(), 0, 0),
    ];

    for (needle, pad_start, pad_end) in &variants {
        for (raw_start, _) in sentence.match_indices(needle.as_str()) {
            let start = raw_start + pad_start;
            let end = raw_start + needle.len() - pad_end;

            let overlaps = accepted
                .iter()
                .any(|span| end.min(span.end).saturating_sub(start.max(span.start)) > 0);
            if overlaps {
                continue;
            }

            if is_boundary_correct(sentence, matched, start, end) {
                return Some((start, end));
            }
        }
    }

    None
}

/// Verifica se a ocorrência `[start, end)` de `matched` está alinhada a
/// fronteiras de palavra da sentença.
///
/// Quatro condições, qualquer uma basta:
/// - **unique**: o texto é a sentença inteira;
/// - **first**: começa com o primeiro token da sentença e é seguido por espaço;
/// - **last**: termina com o último token da sentença e é precedido por espaço;
/// - **between**: há espaço imediatamente antes e imediatamente depois.
///
/// Nos extremos da sentença não existe caractere vizinho para inspecionar;
/// as correções `scorr`/`ecorr` recuam o índice para dentro do próprio trecho,
/// reproduzindo exatamente o comportamento de referência do pipeline de dados.
fn is_boundary_correct(sentence: &str, matched: &str, start: usize, end: usize) -> bool {
    if matched == sentence {
        return true;
    }

    let bytes = sentence.as_bytes();

    // Correções de extremo: em start == 0 / end == len não há vizinho externo
    let before = if start == 0 { 0 } else { start - 1 };
    let after = if end == sentence.len() { end - 1 } else { end };

    let space_before = bytes.get(before) == Some(&b' ');
    let space_after = bytes.get(after) == Some(&b' ');

    let matched_first = matched.split_whitespace().next();
    let matched_last = matched.split_whitespace().next_back();
    let sentence_first = sentence.split_whitespace().next();
    let sentence_last = sentence.split_whitespace().next_back();

    let first = matched_first.is_some() && matched_first == sentence_first && space_after;
    let last = matched_last.is_some() && matched_last == sentence_last && space_before;
    let between = space_before && space_after;

    first || last || between
}

/// Colapsa spans idênticos preservando a ordem da primeira inserção.
fn dedup_preserving_order(spans: Vec<Span>) -> Vec<Span> {
    let mut seen: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if !seen.contains(&span) {
            seen.push(span);
        }
    }
    seen
}

/// Conveniência: monta o [`LabelledSentence`] final a partir da sentença e dos
/// pares (rótulo, resultado da correspondência).
pub fn label_sentence(sentence: &str, pairs: &[(EntityLabel, MatchOutcome)]) -> LabelledSentence {
    LabelledSentence {
        sentence: sentence.to_string(),
        entities: resolve_spans(sentence, pairs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchOutcome;

    fn matched(text: &str) -> MatchOutcome {
        MatchOutcome::Matched(text.to_string())
    }

    #[test]
    fn test_single_first_token_span() {
        let sentence = "123 main street springfield il";
        let spans = resolve_spans(sentence, &[(EntityLabel::StreetNumber, matched("123"))]);
        assert_eq!(spans, vec![Span { start: 0, end: 3, label: EntityLabel::StreetNumber }]);
    }

    #[test]
    fn test_multi_tag_non_overlapping() {
        let sentence = "123 main street springfield il";
        let pairs = [
            (EntityLabel::StreetNumber, matched("123")),
            (EntityLabel::StreetName, matched("main street")),
            (EntityLabel::Municipality, matched("springfield")),
            (EntityLabel::Subdivision, matched("il")),
        ];
        let spans = resolve_spans(sentence, &pairs);
        assert_eq!(
            spans,
            vec![
                Span { start: 0, end: 3, label: EntityLabel::StreetNumber },
                Span { start: 4, end: 15, label: EntityLabel::StreetName },
                Span { start: 16, end: 27, label: EntityLabel::Municipality },
                Span { start: 28, end: 30, label: EntityLabel::Subdivision },
            ]
        );
        // Invariante: nenhum par se sobrepõe
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                assert_eq!(a.overlap(b), 0);
            }
        }
    }

    #[test]
    fn test_unmatched_contributes_nothing() {
        let sentence = "123 main street";
        let pairs = [
            (EntityLabel::StreetNumber, matched("123")),
            (EntityLabel::Country, MatchOutcome::Unmatched),
        ];
        let spans = resolve_spans(sentence, &pairs);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_nested_substring_rejected() {
        // "as" ocorre dentro de "las" e de "vegas", mas nunca como palavra:
        // todas as ocorrências falham nas verificações de fronteira
        let sentence = "las vegas";
        let spans = resolve_spans(sentence, &[(EntityLabel::Municipality, matched("as"))]);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_whole_sentence_match() {
        let sentence = "springfield";
        let spans = resolve_spans(sentence, &[(EntityLabel::Municipality, matched("springfield"))]);
        assert_eq!(spans, vec![Span { start: 0, end: 11, label: EntityLabel::Municipality }]);
    }

    #[test]
    fn test_last_token_span() {
        let sentence = "123 main street springfield il";
        let spans = resolve_spans(sentence, &[(EntityLabel::Subdivision, matched("il"))]);
        assert_eq!(spans, vec![Span { start: 28, end: 30, label: EntityLabel::Subdivision }]);
    }

    #[test]
    fn test_earlier_tag_wins_overlap() {
        // As duas tags resolvem para o mesmo texto. A primeira tag fica com a
        // ocorrência de maior prioridade: a variante " main " (espaço dos dois
        // lados) vence antes de "main " ser tentada, então o "main" do meio é
        // tomado primeiro. A segunda tag recebe a ocorrência inicial.
        let sentence = "main main street";
        let pairs = [
            (EntityLabel::StreetName, matched("main")),
            (EntityLabel::Municipality, matched("main")),
        ];
        let spans = resolve_spans(sentence, &pairs);
        assert_eq!(spans[0], Span { start: 5, end: 9, label: EntityLabel::StreetName });
        assert_eq!(spans[1], Span { start: 0, end: 4, label: EntityLabel::Municipality });
    }

    #[test]
    fn test_idempotence() {
        let sentence = "123 main street springfield il";
        let pairs = [
            (EntityLabel::StreetNumber, matched("123")),
            (EntityLabel::Municipality, matched("springfield")),
        ];
        let first = resolve_spans(sentence, &pairs);
        let second = resolve_spans(sentence, &pairs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_spans_within_bounds() {
        let sentence = "calle mayor 10 madrid";
        let pairs = [
            (EntityLabel::StreetName, matched("calle mayor")),
            (EntityLabel::StreetNumber, matched("10")),
            (EntityLabel::Municipality, matched("madrid")),
        ];
        for span in resolve_spans(sentence, &pairs) {
            assert!(span.start < span.end);
            assert!(span.end <= sentence.len());
        }
    }

    #[test]
    fn test_byte_offsets_on_multibyte_sentence() {
        // "ß" ocupa 2 bytes: o span de "mayor" começa no byte 8, não no
        // caractere 7. Fatiar a sentença com os offsets devolve o texto exato.
        let sentence = "straße mayor 12";
        let spans = resolve_spans(sentence, &[(EntityLabel::StreetName, matched("mayor"))]);
        assert_eq!(spans, vec![Span { start: 8, end: 13, label: EntityLabel::StreetName }]);
        assert_eq!(&sentence[8..13], "mayor");
    }
}
