//! # Geração de N-gramas
//!
//! Enumera todas as substrings contíguas de tokens ("n-gramas") de uma sentença,
//! que servem como candidatas na correspondência fuzzy. A tokenização aqui é
//! deliberadamente simples — apenas separação por espaços em branco — porque os
//! endereços já chegam limpos (ver [`crate::cleaning`]).
//!
//! A **ordem** de geração é parte do contrato: janelas de tamanho crescente,
//! e dentro de cada tamanho, da esquerda para a direita. O desempate do
//! [`crate::matcher`] depende dessa ordem determinística.
//!
//! ## Exemplo
//!
//! ```rust
//! use addressner_core::ngram::{ngrams, all_ngrams};
//!
//! let grams = ngrams("123 main street", 2);
//! assert_eq!(grams, vec!["123 main", "main street"]);
//!
//! // Todas as janelas de 1 até o total de tokens
//! assert_eq!(all_ngrams("a b").len(), 3); // "a", "b", "a b"
//! ```

/// Gera todos os n-gramas de `n` tokens da sentença, reunidos com espaço simples.
///
/// Para `n == 0` ou `n` maior que o número de tokens, retorna lista vazia.
/// Para `n` igual ao número de tokens, retorna a sentença inteira (um elemento).
pub fn ngrams(sentence: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    if n > tokens.len() {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.join(" ")).collect()
}

/// Gera o conjunto completo de candidatos: a união dos n-gramas para todas as
/// janelas de 1 até o número de tokens da sentença.
///
/// O custo é O(W²) substrings para W tokens — força bruta deliberada, aceita
/// como o preço da correspondência aproximada exaustiva. Para endereços
/// (tipicamente < 15 tokens) isso é irrelevante na prática.
pub fn all_ngrams(sentence: &str) -> Vec<String> {
    let token_count = sentence.split_whitespace().count();
    let mut grams = Vec::new();
    for n in 1..=token_count {
        grams.extend(ngrams(sentence, n));
    }
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngrams_basic() {
        assert_eq!(ngrams("a b c", 1), vec!["a", "b", "c"]);
        assert_eq!(ngrams("a b c", 2), vec!["a b", "b c"]);
        assert_eq!(ngrams("a b c", 3), vec!["a b c"]);
    }

    #[test]
    fn test_ngrams_window_too_large() {
        assert!(ngrams("a b c", 4).is_empty());
        assert!(ngrams("a b c", 0).is_empty());
    }

    #[test]
    fn test_ngrams_collapse_whitespace() {
        // Espaços múltiplos não geram tokens vazios
        assert_eq!(ngrams("a   b", 2), vec!["a b"]);
    }

    #[test]
    fn test_all_ngrams_count() {
        // W tokens => W*(W+1)/2 candidatos
        let grams = all_ngrams("123 main street springfield");
        assert_eq!(grams.len(), 4 + 3 + 2 + 1);
        // Primeiro candidato é o unigrama mais à esquerda, último é a sentença inteira
        assert_eq!(grams.first().map(String::as_str), Some("123"));
        assert_eq!(grams.last().map(String::as_str), Some("123 main street springfield"));
    }

    #[test]
    fn test_all_ngrams_empty_sentence() {
        assert!(all_ngrams("").is_empty());
        assert!(all_ngrams("   ").is_empty());
    }
}
