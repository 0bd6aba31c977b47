//! # Tipos de Erro
//!
//! Quase tudo neste crate resolve desfechos "ruins" localmente: tag sem
//! correspondência, razão degenerada, ocorrência sem fronteira válida — nenhum
//! deles é erro. A única condição fatal é entrada malformada, detectada na
//! porta de entrada do pipeline antes de qualquer trabalho de correspondência.

use thiserror::Error;

/// Result padrão das operações do crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Erros do pipeline de rotulagem.
///
/// A leitura e a gravação dos lotes ficam a cargo do binário consumidor
/// (com `anyhow`); o crate em si só falha por entrada malformada.
#[derive(Error, Debug)]
pub enum Error {
    /// As listas de rótulos e de valores devem ter o mesmo comprimento,
    /// pois o pareamento é posicional.
    #[error("listas de rótulos e valores com comprimentos diferentes: {labels} rótulos vs {values} valores")]
    MismatchedTags { labels: usize, values: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_tags_message() {
        let err = Error::MismatchedTags { labels: 6, values: 4 };
        let msg = err.to_string();
        assert!(msg.contains('6'));
        assert!(msg.contains('4'));
    }
}
