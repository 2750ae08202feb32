//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** da lógica proposicional
//! sobre os quais o resto do sistema é construído:
//!
//! - [`Term`] — constante ou variável, os argumentos de uma fórmula atômica
//! - [`Predicate`] — símbolo de relação (ex: `Say`, `Rain`)
//! - [`Atomic`] — a menor afirmação possível: predicado + argumentos
//! - [`Expression`] — árvore de fórmula com conectivos (¬, &, |, >)
//! - [`Knowledge`] — conjunto de fatos atômicos conhecidos
//!
//! Os tipos são valores imutáveis com igualdade e hash **estruturais**,
//! porque o motor de inferência os usa como membros de conjuntos e chaves
//! de mapas.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{Atomic, Expression, Knowledge, Predicate, Term};
//!
//! let chove = Atomic::new(Predicate::new("Rain"), vec![Term::constant("today")]);
//! let mut conhecimento = Knowledge::new();
//! conhecimento.insert(chove.clone());
//!
//! assert!(Expression::Atomic(chove).evaluate(&conhecimento));
//! ```

/// Sub-módulo com a implementação de [`Term`] e [`Predicate`].
pub mod term;

/// Sub-módulo com a implementação de [`Atomic`], [`Expression`] e [`Knowledge`].
pub mod expression;

// Re-exports para conveniência — permite usar `crate::core::Expression` diretamente.
pub use expression::{Atomic, Expression, Knowledge};
pub use term::{Predicate, Term};
