//! # Limpeza e Normalização de Endereços
//!
//! Antes da correspondência fuzzy, o endereço bruto passa por três etapas de
//! normalização, cada uma com um toggle independente:
//!
//! 1. **Acentos** ([`strip_accents`]): "São João" → "sao joao". Necessário
//!    porque o geocodificador devolve valores sem acento.
//! 2. **Informação adicional** ([`CleaningConfig::strip_extra_info`]): remove o
//!    "ruído" de apartamento/andar/porta ("piso 3 dcha", "apt 2b") que não
//!    existe nos campos estruturados e só atrapalharia a correspondência.
//! 3. **Símbolos** ([`CleaningConfig::strip_symbols`]): qualquer caractere não
//!    alfanumérico vira espaço, e espaços consecutivos são colapsados.
//!
//! As listas de stopwords e os padrões são **dados de configuração estáticos**
//! empacotados em [`CleaningConfig`] — nada de estado global mutável. Um
//! chamador com outro domínio de ruído pode construir a sua própria configuração.

use regex::Regex;

/// Stopwords de "informação adicional" que aparecem **depois** do número
/// (ex: "2 floor", "1 dcha"). Mistura espanhol e inglês, refletindo os dados.
const STOPWORDS_AFTER: &[&str] = &[
    "floor", "derecha", "izquierda", "dcha", "izda", "izqda", "departamento", "apto", "dpto",
    "depto", "apartment", "department", "apt", "dpt", "door", "first", "second", "third", "fourth",
    "fifth", "sixth", "seventh", "eighth", "nineth", "tenth",
];

/// Stopwords que aparecem **antes** do número (ex: "piso 3", "puerta 2b").
const STOPWORDS_BEFORE: &[&str] = &[
    "piso", "derecha", "izquierda", "dcha", "izda", "izqda", "apartamento", "departamento", "apto",
    "dpto", "depto", "dp", "apartment", "department", "apt", "dpt", "puerta", "pta", "door", "bajo",
    "entresuelo", "sotano", "bloque", "portal", "salon", "primero", "segundo", "tercero", "cuarto",
    "quinto", "sexto", "septimo", "octavo", "noveno", "decimo", "suite",
];

/// Substitui letras acentuadas pela letra base correspondente
/// (á/à/â/ä/ã → a, ç → c, ñ → n, etc.), preservando maiúsculas.
///
/// Com `lowercase = true` (o padrão do pipeline), a sentença é convertida
/// para minúsculas antes da substituição.
pub fn strip_accents(sentence: &str, lowercase: bool) -> String {
    let source = if lowercase {
        sentence.to_lowercase()
    } else {
        sentence.to_string()
    };

    source
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            'ý' | 'ÿ' => 'y',
            'Á' | 'À' | 'Â' | 'Ä' | 'Ã' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'Ç' => 'C',
            'Ñ' => 'N',
            'Ý' => 'Y',
            other => other,
        })
        .collect()
}

/// Toggles de cada etapa da limpeza.
#[derive(Debug, Clone, Copy)]
pub struct CleaningOptions {
    /// Remover acentos
    pub accents: bool,
    /// Remover informação de apartamento/andar/porta
    pub extra_info: bool,
    /// Remover símbolos não alfanuméricos
    pub symbols: bool,
    /// Converter para minúsculas em cada etapa
    pub lowercase: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self { accents: true, extra_info: true, symbols: true, lowercase: true }
    }
}

/// Configuração compilada da limpeza: padrões de informação adicional e de
/// símbolos, prontos para aplicação repetida em lote.
#[derive(Debug, Clone)]
pub struct CleaningConfig {
    /// Padrões de "informação adicional", aplicados em ordem.
    info_patterns: Vec<Regex>,
    /// Qualquer caractere fora de `[a-zA-Z0-9\s]`.
    symbol_pattern: Regex,
}

impl CleaningConfig {
    /// Constrói a configuração padrão com as listas de stopwords embutidas.
    pub fn new() -> Self {
        // Número de porta/andar: "3", "2b", "1-a"...
        let number = r"\d{1,3}\W{0,2}[a-z]{0,2}";

        // "piso 3", "puerta 2b" (stopword antes do número)
        let before: Vec<String> = STOPWORDS_BEFORE
            .iter()
            .map(|sw| format!(r"{sw}\W{{0,1}}{number}"))
            .collect();
        // "2 floor", "1 dcha" (número antes da stopword)
        let after: Vec<String> = STOPWORDS_AFTER
            .iter()
            .map(|sw| format!(r"{number}\s{{0,1}}{sw}"))
            .collect();

        let combined = [before, after].concat().join("|");

        // Stopwords soltas, sem número por perto
        let mut bare: Vec<&str> = [STOPWORDS_BEFORE, STOPWORDS_AFTER].concat();
        bare.sort_unstable();
        bare.dedup();
        let bare_pattern = bare.join("|");

        // Resíduo no fim da sentença: " 2b", " 1-a"
        let trailing = r"\s\d{1,2}\W{0,2}[a-z]{1,2}$";

        // O padrão combinado roda duas vezes: a primeira remoção pode expor
        // uma nova ocorrência adjacente
        let info_patterns = [combined.as_str(), combined.as_str(), bare_pattern.as_str(), trailing]
            .iter()
            .map(|p| Regex::new(p).expect("padrão de limpeza estático válido"))
            .collect();

        Self {
            info_patterns,
            symbol_pattern: Regex::new(r"[^a-zA-Z0-9\s]").expect("padrão de símbolos válido"),
        }
    }

    /// Remove a informação de apartamento/andar/porta e colapsa os espaços.
    pub fn strip_extra_info(&self, sentence: &str, lowercase: bool) -> String {
        let mut result = if lowercase {
            sentence.to_lowercase()
        } else {
            sentence.to_string()
        };
        for pattern in &self.info_patterns {
            result = pattern.replace_all(&result, " ").into_owned();
        }
        collapse_whitespace(&result)
    }

    /// Substitui todo caractere não alfanumérico por espaço e colapsa os espaços.
    pub fn strip_symbols(&self, sentence: &str, lowercase: bool) -> String {
        let source = if lowercase {
            sentence.to_lowercase()
        } else {
            sentence.to_string()
        };
        let replaced = self.symbol_pattern.replace_all(&source, " ");
        collapse_whitespace(&replaced)
    }

    /// Limpeza completa conforme os toggles de [`CleaningOptions`].
    ///
    /// A ordem das etapas importa: acentos primeiro (senão "sótano" não casa
    /// com a stopword "sotano"), símbolos por último (para não destruir os
    /// padrões `\W` da etapa anterior).
    pub fn clean(&self, sentence: &str, options: &CleaningOptions) -> String {
        let mut result = sentence.to_string();
        if options.accents {
            result = strip_accents(&result, options.lowercase);
        }
        if options.extra_info {
            result = self.strip_extra_info(&result, options.lowercase);
        }
        if options.symbols {
            result = self.strip_symbols(&result, options.lowercase);
        }
        result
    }
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Colapsa sequências de espaço em branco em um único espaço, sem bordas.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("São João", true), "sao joao");
        assert_eq!(strip_accents("Málaga", false), "Malaga");
        assert_eq!(strip_accents("peña", true), "pena");
    }

    #[test]
    fn test_strip_symbols() {
        let config = CleaningConfig::new();
        assert_eq!(config.strip_symbols("c/ mayor, 10 - 2ºb", true), "c mayor 10 2 b");
        assert_eq!(config.strip_symbols("main st.", true), "main st");
    }

    #[test]
    fn test_strip_extra_info_floor() {
        let config = CleaningConfig::new();
        let cleaned = config.strip_extra_info("calle mayor 10 piso 3 dcha madrid", true);
        assert!(!cleaned.contains("piso"));
        assert!(!cleaned.contains("dcha"));
        assert!(cleaned.contains("calle mayor 10"));
        assert!(cleaned.contains("madrid"));
    }

    #[test]
    fn test_strip_extra_info_apartment_english() {
        let config = CleaningConfig::new();
        let cleaned = config.strip_extra_info("123 main street apt 4b springfield", true);
        assert!(!cleaned.contains("apt"));
        assert!(cleaned.contains("123 main street"));
        assert!(cleaned.contains("springfield"));
    }

    #[test]
    fn test_full_cleaning() {
        let config = CleaningConfig::new();
        let cleaned = config.clean("Calle Alcalá, 23 - Piso 2º Izqda. MADRID", &CleaningOptions::default());
        assert!(!cleaned.contains(','));
        assert!(!cleaned.contains("izqda"));
        assert!(cleaned.contains("calle alcala 23"));
        assert!(cleaned.contains("madrid"));
    }

    #[test]
    fn test_cleaning_without_extra_info() {
        // O pipeline de preparação de dados usa extra_info = false:
        // o ruído de apartamento vira parte do texto "extra" não rotulado
        let config = CleaningConfig::new();
        let options = CleaningOptions { extra_info: false, ..CleaningOptions::default() };
        let cleaned = config.clean("123 Main St. Apt 4B, Springfield", &options);
        assert_eq!(cleaned, "123 main st apt 4b springfield");
    }

    #[test]
    fn test_collapse_whitespace() {
        let config = CleaningConfig::new();
        assert_eq!(config.strip_symbols("a   b\t c", true), "a b c");
    }
}
