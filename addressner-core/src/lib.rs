//! # addressner-core — Rotulagem Automática de Endereços para NER
//!
//! Este crate transforma registros de endereço fracamente estruturados (o texto
//! livre digitado pelo usuário + os campos normalizados devolvidos por um
//! geocodificador) em spans de entidade com offsets de byte, prontos para
//! treinar um modelo de rotulagem de sequências.
//!
//! O problema central é a **anotação automática aproximada**: os valores do
//! geocodificador ("main street", "62704") raramente aparecem idênticos no
//! endereço digitado ("main st."), então a localização é fuzzy — mas os spans
//! emitidos precisam ser exatos, alinhados a palavras e sem sobreposição.
//!
//! ## Arquitetura do Sistema
//!
//! Pipeline linear, cada estágio dependendo apenas do anterior:
//!
//! 1. **Limpeza** ([`cleaning`]): acentos, símbolos e ruído de apartamento/andar.
//! 2. **Candidatos** ([`ngram`]): todas as substrings contíguas de tokens.
//! 3. **Similaridade** ([`levenshtein`]): razão de Levenshtein normalizada.
//! 4. **Correspondência** ([`matcher`]): melhor candidato acima da tolerância,
//!    ou [`matcher::MatchOutcome::Unmatched`].
//! 5. **Resolução** ([`labeller`]): offsets exatos com correção de fronteira,
//!    rejeição de sobreposições e deduplicação.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use addressner_core::{AddressLabeller, EntityLabel};
//!
//! let labeller = AddressLabeller::new();
//! let result = labeller.label_cleaned(
//!     "123 main street springfield il",
//!     &[EntityLabel::StreetNumber, EntityLabel::Municipality],
//!     &["123", "springfield"],
//! ).unwrap();
//!
//! for span in &result.entities {
//!     println!("{} -> [{}, {})", span.label, span.start, span.end);
//! }
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: orquestrador (validação, limpeza, lote paralelo).
//! - [`labeller`]: resolução de spans com correção de fronteira.
//! - [`levenshtein`]: métrica de similaridade, utilizável isoladamente.
//! - [`corpus`]: endereços de demonstração para testes e para a CLI.

pub mod cleaning;
pub mod corpus;
pub mod entity;
pub mod error;
pub mod labeller;
pub mod levenshtein;
pub mod matcher;
pub mod ngram;
pub mod pipeline;

pub use cleaning::{CleaningConfig, CleaningOptions};
pub use entity::{EntityLabel, LabelledSentence, Span};
pub use error::{Error, Result};
pub use matcher::MatchOutcome;
pub use pipeline::{accuracy, AddressLabeller, AddressRecord, GeocodedFields};
