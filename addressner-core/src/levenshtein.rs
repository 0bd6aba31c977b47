//! # Distância e Razão de Levenshtein
//!
//! Implementa a métrica clássica de distância de edição via programação dinâmica,
//! em duas variantes:
//!
//! - **Distância**: número mínimo de edições (inserção, remoção, substituição)
//!   para transformar uma string na outra. Custo de substituição = 1.
//! - **Razão (ratio)**: similaridade normalizada em `[0.0, 1.0]`, onde 1.0 significa
//!   strings idênticas. Segue a convenção dos pacotes de fuzzy matching populares:
//!   a substituição custa **2** (equivale a uma remoção + uma inserção), e a razão é
//!   `((|s| + |t|) - d) / (|s| + |t|)`.
//!
//! Este módulo é puro e independente do restante do pipeline — pode ser usado
//! como utilitário avulso de comparação de strings.
//!
//! ## Exemplo
//!
//! ```rust
//! use addressner_core::levenshtein::{levenshtein_distance, levenshtein_ratio};
//!
//! assert_eq!(levenshtein_distance("casa", "caso"), 1);
//! assert_eq!(levenshtein_ratio("rua", "rua"), 1.0);
//! assert!(levenshtein_ratio("madrid", "madri") > 0.9);
//! ```
//!
//! ## Complexidade
//!
//! Tempo e espaço O(|s|·|t|). A matriz completa é mantida por clareza didática;
//! uma versão com duas linhas teria o mesmo comportamento observável.

/// Custo de substituição usado por cada variante do algoritmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubstitutionCost {
    /// Substituição conta como 1 edição (distância clássica).
    Distance,
    /// Substituição conta como 2 edições (convenção da razão de similaridade).
    Ratio,
}

impl SubstitutionCost {
    fn value(self) -> usize {
        match self {
            SubstitutionCost::Distance => 1,
            SubstitutionCost::Ratio => 2,
        }
    }
}

/// Preenche a matriz de programação dinâmica e retorna o valor da célula final.
///
/// `distance[i][j]` contém o custo mínimo para transformar os primeiros `i`
/// caracteres de `s` nos primeiros `j` caracteres de `t`.
fn edit_matrix_cost(s: &[char], t: &[char], sub_cost: SubstitutionCost) -> usize {
    let rows = s.len() + 1;
    let cols = t.len() + 1;
    let mut distance = vec![vec![0usize; cols]; rows];

    // Casos base: transformar prefixo em string vazia = i remoções / j inserções
    for (i, row) in distance.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..cols {
        distance[0][j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = if s[i - 1] == t[j - 1] {
                0
            } else {
                sub_cost.value()
            };
            distance[i][j] = (distance[i - 1][j] + 1) // remoção
                .min(distance[i][j - 1] + 1) // inserção
                .min(distance[i - 1][j - 1] + cost); // substituição
        }
    }

    distance[rows - 1][cols - 1]
}

/// Distância de Levenshtein clássica entre duas strings (custo de substituição 1).
///
/// Opera sobre `char`s, não bytes, para contar edições corretamente em
/// texto com acentos (antes da limpeza, os endereços podem contê-los).
pub fn levenshtein_distance(s: &str, t: &str) -> usize {
    let s_chars: Vec<char> = s.chars().collect();
    let t_chars: Vec<char> = t.chars().collect();
    edit_matrix_cost(&s_chars, &t_chars, SubstitutionCost::Distance)
}

/// Razão de similaridade de Levenshtein em `[0.0, 1.0]`.
///
/// Calculada como `((|s| + |t|) - d) / (|s| + |t|)` com custo de substituição 2.
/// Quando ambas as strings são vazias a divisão seria 0/0; por definição o
/// resultado é `0.0` (nunca um erro).
pub fn levenshtein_ratio(s: &str, t: &str) -> f64 {
    let s_chars: Vec<char> = s.chars().collect();
    let t_chars: Vec<char> = t.chars().collect();
    let total = s_chars.len() + t_chars.len();
    if total == 0 {
        return 0.0;
    }
    let d = edit_matrix_cost(&s_chars, &t_chars, SubstitutionCost::Ratio);
    (total - d) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("casa", "caso"), 1);
    }

    #[test]
    fn test_ratio_identical() {
        assert_eq!(levenshtein_ratio("springfield", "springfield"), 1.0);
        assert_eq!(levenshtein_ratio("a", "a"), 1.0);
    }

    #[test]
    fn test_ratio_empty_strings() {
        // 0/0 é definido como 0.0, nunca pânico
        assert_eq!(levenshtein_ratio("", ""), 0.0);
        // Totalmente diferente de uma string não vazia
        assert_eq!(levenshtein_ratio("", "rua"), 0.0);
    }

    #[test]
    fn test_ratio_symmetry() {
        let pairs = [("madrid", "madri"), ("123", "12"), ("calle mayor", "mayor")];
        for (s, t) in pairs {
            assert_eq!(levenshtein_ratio(s, t), levenshtein_ratio(t, s));
        }
    }

    #[test]
    fn test_ratio_range() {
        let pairs = [
            ("xyzxyz", "springfield"),
            ("", "a"),
            ("main street", "main st"),
            ("ão", "ao"),
        ];
        for (s, t) in pairs {
            let r = levenshtein_ratio(s, t);
            assert!((0.0..=1.0).contains(&r), "ratio({s:?}, {t:?}) = {r} fora de [0,1]");
        }
    }

    #[test]
    fn test_ratio_substitution_costs_two() {
        // "ab" -> "ac": 1 substituição com custo 2 => (4 - 2) / 4 = 0.5
        assert_eq!(levenshtein_ratio("ab", "ac"), 0.5);
    }

    #[test]
    fn test_ratio_unicode() {
        // Caracteres multibyte contam como um só
        assert_eq!(levenshtein_distance("são", "sao"), 1);
    }
}
