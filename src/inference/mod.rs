//! # Módulo Inference — Motor de Inferência Proposicional
//!
//! Este módulo contém o **motor de inferência** do sistema: o [`Brain`]
//! recebe expressões já analisadas, decompõe cada uma em fatos atômicos e
//! regras condicionais, e propaga consequências por encadeamento direto no
//! momento em que cada fato chega.
//!
//! ## Divisão de Responsabilidades
//!
//! | Peça | Papel |
//! |------|-------|
//! | [`Brain`] | estado (fatos, regras, lembretes) e aprendizado |
//! | [`LearnError`] | expressões sem forma de aprendizado |
//!
//! A análise textual fica fora daqui (ver [`crate::parser`]); o motor só
//! conhece árvores de [`Expression`](crate::core::Expression).
//!
//! Veja [`Brain`] para o despacho completo do aprendizado.

/// Sub-módulo com o motor de encadeamento direto.
pub mod brain;

/// Re-export para acesso via `crate::inference::Brain`.
pub use brain::{Brain, LearnError};
