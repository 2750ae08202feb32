//! # Expression — Árvore de Fórmulas Proposicionais
//!
//! A [`Expression`] é a representação em árvore de uma fórmula da lógica
//! proposicional. Cada nó é dono exclusivo dos filhos (`Box`), a árvore é
//! acíclica e imutável após a construção.
//!
//! ## Variantes
//!
//! | Variante | Forma textual | Avaliação |
//! |----------|---------------|-----------|
//! | [`Atomic`] | `P(x, Y)` | pertinência no conjunto de fatos |
//! | `Negation` | `(¬E)` | NOT |
//! | `Conjunction` | `(A & B)` | AND |
//! | `Disjunction` | `(A \| B)` | OR |
//! | `Implication` | `(A > B)` | `!A \|\| B` |
//! | `Tautology` | `T` | sempre verdadeiro |
//! | `Contradiction` | `F` | sempre falso |
//!
//! ## Igualdade Estrutural
//!
//! Expressões servem de **membros de conjunto e chaves de mapa** no motor
//! de inferência, então igualdade e hash são derivados estruturalmente:
//! variante + filhos, recursivamente. Vale a ressalva de [`Term`]: variáveis
//! são indistinguíveis, logo `P(X)` e `P(Y)` são a mesma chave.
//!
//! ## Exemplo
//!
//! ```rust
//! use crate::core::{Atomic, Expression, Knowledge, Predicate, Term};
//!
//! let fato = Atomic::new(Predicate::new("P"), vec![Term::constant("c")]);
//! let mut conhecimento = Knowledge::new();
//! conhecimento.insert(fato.clone());
//!
//! let formula = Expression::Atomic(fato);
//! assert!(formula.evaluate(&conhecimento));
//! assert_eq!(formula.to_string(), "P(c)");
//! ```

use std::collections::HashSet;
use std::fmt;

use super::term::{Predicate, Term};

/// Conjunto de fatos atômicos conhecidos.
///
/// A pertinência é estrutural: um fato está no conjunto quando existe um
/// [`Atomic`] igual (mesmo predicado, mesmos argumentos na mesma ordem).
/// O conjunto não exige fatos "ground" — variáveis são aceitas e colapsam
/// entre si.
pub type Knowledge = HashSet<Atomic>;

/// Fórmula atômica: um predicado aplicado a uma lista ordenada de termos.
///
/// É a menor afirmação possível — `Say(ariel, hello)` — e a única forma
/// que o conjunto de conhecimento armazena.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Atomic {
    /// Símbolo de relação.
    pub predicate: Predicate,
    /// Argumentos na ordem escrita. A ordem importa para igualdade e hash.
    pub arguments: Vec<Term>,
}

impl Atomic {
    /// Cria uma fórmula atômica com predicado e argumentos dados.
    pub fn new(predicate: Predicate, arguments: Vec<Term>) -> Self {
        Self {
            predicate,
            arguments,
        }
    }
}

/// Formato `Predicado(arg1, arg2, ...)` — sem parênteses externos.
///
/// Uma atômica sem argumentos é exibida como `P()`.
impl fmt::Display for Atomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments: Vec<String> = self.arguments.iter().map(|t| t.to_string()).collect();
        write!(f, "{}({})", self.predicate, arguments.join(", "))
    }
}

/// Árvore de fórmula proposicional (ver doc do módulo).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Afirmação simples — folha da árvore.
    Atomic(Atomic),
    /// NOT lógico da sub-expressão.
    Negation(Box<Expression>),
    /// AND lógico das duas sub-expressões.
    Conjunction(Box<Expression>, Box<Expression>),
    /// OR lógico das duas sub-expressões.
    Disjunction(Box<Expression>, Box<Expression>),
    /// Implicação material: antecedente → consequente.
    Implication(Box<Expression>, Box<Expression>),
    /// Constante verdadeira.
    Tautology,
    /// Constante falsa.
    Contradiction,
}

impl Expression {
    /// Avalia a fórmula contra um conjunto de fatos.
    ///
    /// A avaliação é **pura e total**: nunca modifica o conjunto, nunca
    /// falha, e o conhecimento é sempre um parâmetro explícito — a mesma
    /// fórmula pode ser avaliada contra conjuntos diferentes.
    ///
    /// | Variante | Resultado |
    /// |----------|-----------|
    /// | `Atomic` | o fato pertence ao conjunto? |
    /// | `Negation` | `!inner` |
    /// | `Conjunction` | `left && right` |
    /// | `Disjunction` | `left \|\| right` |
    /// | `Implication` | `!antecedent \|\| consequent` |
    /// | `Tautology` | `true` |
    /// | `Contradiction` | `false` |
    ///
    /// # Exemplo
    ///
    /// ```rust
    /// let vazio = Knowledge::new();
    /// assert!(Expression::Tautology.evaluate(&vazio));
    /// assert!(!Expression::Contradiction.evaluate(&vazio));
    /// ```
    pub fn evaluate(&self, knowledge: &Knowledge) -> bool {
        match self {
            Expression::Atomic(atomic) => knowledge.contains(atomic),
            Expression::Negation(inner) => !inner.evaluate(knowledge),
            Expression::Conjunction(left, right) => {
                left.evaluate(knowledge) && right.evaluate(knowledge)
            }
            Expression::Disjunction(left, right) => {
                left.evaluate(knowledge) || right.evaluate(knowledge)
            }
            Expression::Implication(antecedent, consequent) => {
                !antecedent.evaluate(knowledge) || consequent.evaluate(knowledge)
            }
            Expression::Tautology => true,
            Expression::Contradiction => false,
        }
    }

    /// Nome da variante, para diagnósticos e mensagens de erro.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Atomic(_) => "atomic",
            Expression::Negation(_) => "negation",
            Expression::Conjunction(_, _) => "conjunction",
            Expression::Disjunction(_, _) => "disjunction",
            Expression::Implication(_, _) => "implication",
            Expression::Tautology => "tautology",
            Expression::Contradiction => "contradiction",
        }
    }
}

/// Forma canônica re-parseável: operadores binários e negação sempre
/// parentesizados, atômicas nuas, `T`/`F` para as constantes.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Atomic(atomic) => write!(f, "{}", atomic),
            Expression::Negation(inner) => write!(f, "(¬{})", inner),
            Expression::Conjunction(left, right) => write!(f, "({} & {})", left, right),
            Expression::Disjunction(left, right) => write!(f, "({} | {})", left, right),
            Expression::Implication(antecedent, consequent) => {
                write!(f, "({} > {})", antecedent, consequent)
            }
            Expression::Tautology => f.write_str("T"),
            Expression::Contradiction => f.write_str("F"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(predicate: &str, arguments: &[&str]) -> Atomic {
        Atomic::new(
            Predicate::new(predicate),
            arguments.iter().map(|a| Term::from_token(a)).collect(),
        )
    }

    fn atomic(predicate: &str, arguments: &[&str]) -> Expression {
        Expression::Atomic(atom(predicate, arguments))
    }

    /// Tautologia e contradição avaliam igual sob qualquer conhecimento,
    /// inclusive o vazio.
    #[test]
    fn test_constants_ignore_knowledge() {
        let empty = Knowledge::new();
        let mut populated = Knowledge::new();
        populated.insert(atom("P", &["c"]));

        assert!(Expression::Tautology.evaluate(&empty));
        assert!(Expression::Tautology.evaluate(&populated));
        assert!(!Expression::Contradiction.evaluate(&empty));
        assert!(!Expression::Contradiction.evaluate(&populated));
    }

    /// Atômica avalia por pertinência estrutural no conjunto.
    #[test]
    fn test_atomic_membership() {
        let mut knowledge = Knowledge::new();
        knowledge.insert(atom("P", &["c"]));

        assert!(atomic("P", &["c"]).evaluate(&knowledge));
        assert!(!atomic("P", &["d"]).evaluate(&knowledge));
        assert!(!atomic("Q", &["c"]).evaluate(&knowledge));
    }

    /// `P(X)` e `P(Y)` são o mesmo fato: variáveis não têm identidade.
    #[test]
    fn test_atomic_membership_collapses_variables() {
        let mut knowledge = Knowledge::new();
        knowledge.insert(atom("P", &["X"]));

        assert!(atomic("P", &["Y"]).evaluate(&knowledge));
        assert!(!atomic("P", &["x"]).evaluate(&knowledge));
    }

    /// Tabela-verdade dos conectivos sobre as constantes T e F.
    #[test]
    fn test_connective_truth_tables() {
        let empty = Knowledge::new();
        let t = || Box::new(Expression::Tautology);
        let f = || Box::new(Expression::Contradiction);

        assert!(!Expression::Negation(t()).evaluate(&empty));
        assert!(Expression::Negation(f()).evaluate(&empty));

        assert!(Expression::Conjunction(t(), t()).evaluate(&empty));
        assert!(!Expression::Conjunction(t(), f()).evaluate(&empty));

        assert!(Expression::Disjunction(f(), t()).evaluate(&empty));
        assert!(!Expression::Disjunction(f(), f()).evaluate(&empty));

        assert!(Expression::Implication(f(), f()).evaluate(&empty));
        assert!(Expression::Implication(t(), t()).evaluate(&empty));
        assert!(!Expression::Implication(t(), f()).evaluate(&empty));
    }

    /// Implicação com antecedente desconhecido é vacuamente verdadeira.
    #[test]
    fn test_implication_vacuous_truth() {
        let mut knowledge = Knowledge::new();
        knowledge.insert(atom("Q", &["c"]));

        let implication = Expression::Implication(
            Box::new(atomic("P", &["c"])),
            Box::new(atomic("R", &["c"])),
        );
        assert!(implication.evaluate(&knowledge));
    }

    /// Formas textuais canônicas de cada variante.
    #[test]
    fn test_display_forms() {
        assert_eq!(atomic("P", &["x", "Y"]).to_string(), "P(x, Y)");
        assert_eq!(atomic("P", &[]).to_string(), "P()");
        assert_eq!(
            Expression::Negation(Box::new(atomic("P", &["x"]))).to_string(),
            "(¬P(x))"
        );
        assert_eq!(
            Expression::Conjunction(
                Box::new(atomic("P", &["x"])),
                Box::new(atomic("Q", &["y"])),
            )
            .to_string(),
            "(P(x) & Q(y))"
        );
        assert_eq!(
            Expression::Implication(
                Box::new(Expression::Tautology),
                Box::new(Expression::Contradiction),
            )
            .to_string(),
            "(T > F)"
        );
    }

    /// Igualdade estrutural compara variante e filhos recursivamente.
    #[test]
    fn test_structural_equality() {
        let left = Expression::Conjunction(
            Box::new(atomic("P", &["c"])),
            Box::new(atomic("Q", &["d"])),
        );
        let same = Expression::Conjunction(
            Box::new(atomic("P", &["c"])),
            Box::new(atomic("Q", &["d"])),
        );
        let flipped = Expression::Conjunction(
            Box::new(atomic("Q", &["d"])),
            Box::new(atomic("P", &["c"])),
        );
        assert_eq!(left, same);
        assert_ne!(left, flipped);
    }

    /// Rótulos de variante para mensagens de diagnóstico.
    #[test]
    fn test_kind_labels() {
        assert_eq!(atomic("P", &[]).kind(), "atomic");
        assert_eq!(Expression::Tautology.kind(), "tautology");
        assert_eq!(
            Expression::Negation(Box::new(Expression::Contradiction)).kind(),
            "negation"
        );
    }
}
