//! # Term & Predicate — Símbolos Elementares das Fórmulas
//!
//! Os blocos de construção de toda fórmula atômica: **termos** (constantes
//! e variáveis) e **predicados** (símbolos de relação aplicados aos termos).
//!
//! ## Classificação Léxica
//!
//! Um token textual é classificado pela **primeira letra** e depois
//! normalizado por caixa:
//!
//! | Token | Primeiro caractere | Classe | Normalização |
//! |-------|--------------------|--------|--------------|
//! | `ariel` | minúscula | [`Term::Constant`] | `ariel` (lowercase) |
//! | `Ariel` | maiúscula | [`Term::Variable`] | `ARIEL` (UPPERCASE) |
//! | `42` | dígito | [`Term::Constant`] | `42` |
//! | `_x` | sublinhado | [`Term::Constant`] | `_x` |
//!
//! ## Identidade de Variáveis
//!
//! **Todas as variáveis são indistinguíveis entre si**: `X == Y` é verdadeiro
//! e ambas produzem o mesmo hash. O motor não rastreia identidade de variável
//! (não há unificação nem binding); o nome sobrevive apenas para exibição.
//! Consequência prática: `P(X)` e `P(Y)` são o **mesmo fato** em qualquer
//! conjunto ou tabela de regras.
//!
//! Constantes, ao contrário, são comparadas pelo nome normalizado.
//!
//! ## Exemplo
//!
//! ```rust
//! use crate::core::Term;
//!
//! let a = Term::from_token("Ariel"); // Variable "ARIEL"
//! let b = Term::from_token("Bia");   // Variable "BIA"
//! assert_eq!(a, b); // variáveis não têm identidade própria
//!
//! let c = Term::from_token("ariel"); // Constant "ariel"
//! assert_ne!(a, c);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Termo de uma fórmula atômica — constante ou variável.
///
/// Termos são valores imutáveis: uma vez construídos, o nome normalizado
/// não muda. A construção passa sempre por [`constant()`](Term::constant),
/// [`variable()`](Term::variable) ou [`from_token()`](Term::from_token),
/// que aplicam a normalização de caixa.
#[derive(Clone, Debug)]
pub enum Term {
    /// Objeto concreto e nomeado — nome sempre em minúsculas.
    Constant(String),
    /// Objeto abstrato indeterminado — nome sempre em maiúsculas,
    /// mantido apenas para exibição (ver doc do módulo).
    Variable(String),
}

impl Term {
    /// Cria uma constante, normalizando o nome para minúsculas.
    ///
    /// # Exemplo
    ///
    /// ```rust
    /// let c = Term::constant("Ariel");
    /// assert_eq!(c.name(), "ariel");
    /// ```
    pub fn constant(name: &str) -> Term {
        Term::Constant(name.to_lowercase())
    }

    /// Cria uma variável, normalizando o nome para maiúsculas.
    ///
    /// # Exemplo
    ///
    /// ```rust
    /// let v = Term::variable("x");
    /// assert_eq!(v.name(), "X");
    /// ```
    pub fn variable(name: &str) -> Term {
        Term::Variable(name.to_uppercase())
    }

    /// Classifica um token textual em constante ou variável.
    ///
    /// A regra é a primeira letra: maiúscula → variável; qualquer outro
    /// caso (minúscula, dígito, sublinhado) → constante. É a regra usada
    /// pelo parser para a lista de argumentos de uma fórmula atômica.
    pub fn from_token(token: &str) -> Term {
        if token.chars().next().is_some_and(char::is_uppercase) {
            Term::variable(token)
        } else {
            Term::constant(token)
        }
    }

    /// Retorna o nome normalizado do termo.
    pub fn name(&self) -> &str {
        match self {
            Term::Constant(name) | Term::Variable(name) => name,
        }
    }
}

/// Igualdade estrutural com variáveis indistinguíveis.
///
/// - `Constant == Constant` — compara os nomes normalizados.
/// - `Variable == Variable` — **sempre verdadeiro**, qualquer que seja o nome.
/// - Classes diferentes nunca são iguais.
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Constant(a), Term::Constant(b)) => a == b,
            (Term::Variable(_), Term::Variable(_)) => true,
            _ => false,
        }
    }
}

impl Eq for Term {}

/// Hash consistente com a igualdade acima: constantes misturam o nome,
/// variáveis misturam apenas a tag da classe (todas colidem de propósito).
impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Term::Constant(name) => {
                state.write_u8(0);
                name.hash(state);
            }
            Term::Variable(_) => state.write_u8(1),
        }
    }
}

/// Exibe o nome normalizado, sem decoração.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Símbolo de relação de uma fórmula atômica.
///
/// Diferente dos termos, o nome do predicado é mantido **exatamente como
/// escrito** — `Say` e `say` são predicados distintos. A igualdade e o
/// hash derivam do nome.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Predicate {
    /// Nome do predicado, sem normalização de caixa.
    pub name: String,
}

impl Predicate {
    /// Cria um predicado com o nome dado.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
