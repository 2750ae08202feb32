//! # Parser — Fórmulas por Varredura de Parênteses
//!
//! O [`Parser`] reconstrói uma [`Expression`] a partir da forma textual de
//! uma fórmula proposicional. Não há tokenizador: a análise trabalha sobre
//! a própria string, localizando o operador de topo por **varredura de
//! balanceamento de parênteses** a partir da direita.
//!
//! ## Gramática Aceita
//!
//! ```text
//! expr      := atomic | negation | binary | "(" expr ")"
//! atomic    := nome "(" [ arg ("," arg)* ] ")"      nome, arg: \w+
//! negation  := "¬" expr
//! binary    := expr OP expr                         OP ∈ { &, |, > }
//! ```
//!
//! Argumentos iniciados por letra maiúscula viram [`Term::Variable`];
//! qualquer outro início vira [`Term::Constant`].
//!
//! ## Estratégia (4 etapas, em ordem)
//!
//! | Etapa | O que faz |
//! |-------|-----------|
//! | 1. unbox | remove pares de parênteses que envolvem a string inteira |
//! | 2. atômica | regex `^\w+\(...\)$` + split da lista de argumentos |
//! | 3. negação | `¬` inicial consome **todo o restante** da string |
//! | 4. binária | varredura reversa isola a última unidade; o caractere anterior deve ser `&`, `\|` ou `>` |
//!
//! ## Precedência e Associatividade
//!
//! Os três operadores binários têm **a mesma precedência**. O operador de
//! topo é sempre o mais à direita no nível zero de parênteses, então
//! operadores repetidos associam à esquerda e operadores mistos agrupam
//! pela posição:
//!
//! ```text
//! P(x) & P(y) & P(z)   ≡   ((P(x) & P(y)) & P(z))
//! P(x) & P(y) | P(z)   ≡   ((P(x) & P(y)) | P(z))
//! ```
//!
//! ## Escopo da Negação
//!
//! `¬` no início da string nega **o restante inteiro**: `¬P(x) & Q(y)`
//! é `(¬(P(x) & Q(y)))`, não `((¬P(x)) & Q(y))`. Para negar só um operando,
//! parentesize: `(¬P(x)) & Q(y)`. No operando direito a negação **exige**
//! parênteses — `P(x) & ¬Q(y)` não é reconhecido.
//!
//! ## Falha
//!
//! [`parse`](Parser::parse) é total e devolve `Option`: qualquer string que
//! não case com as quatro etapas (incluindo parênteses desbalanceados)
//! resulta em `None`, nunca em árvore parcial ou pânico.

use regex::Regex;

use crate::core::{Atomic, Expression, Predicate, Term};

/// Parser de fórmulas proposicionais.
///
/// Mantém a regex de fórmula atômica compilada uma única vez e reutilizada
/// em todas as chamadas a [`parse()`](Parser::parse).
///
/// ## Exemplo de Uso
///
/// ```rust
/// let parser = Parser::new();
/// let formula = parser.parse("Say(ariel, hello) > Say(self, hello)");
/// assert!(formula.is_some());
/// ```
pub struct Parser {
    /// Regex para validar fórmulas atômicas: nome seguido da lista de
    /// argumentos entre parênteses (`P(x, Y, z)`, `Done()`).
    atomic_re: Regex,
}

impl Parser {
    /// Cria um parser com a regex de fórmula atômica compilada.
    pub fn new() -> Self {
        Self {
            // Nome \w+, abre-parêntese, lista possivelmente vazia de
            // argumentos \w separados por vírgula, fecha-parêntese no fim.
            atomic_re: Regex::new(r"^\w+\(\s*\w*(,\s*\w+\s*)*\)$").unwrap(),
        }
    }

    /// Analisa o texto de uma fórmula e devolve a árvore correspondente.
    ///
    /// Aplica as quatro etapas descritas na doc do módulo. `None` significa
    /// "isto não é uma fórmula" — o chamador decide o que fazer com o texto
    /// (o agente, por exemplo, trata a linha como fala comum).
    ///
    /// # Exemplo
    ///
    /// ```rust
    /// let parser = Parser::new();
    /// assert!(parser.parse("P(x) & Q(y)").is_some());
    /// assert!(parser.parse("P(x, y").is_none()); // parêntese aberto
    /// ```
    pub fn parse(&self, text: &str) -> Option<Expression> {
        let text = unbox(text);

        self.try_atomic(text)
            .or_else(|| self.try_negation(text))
            .or_else(|| self.try_binary(text))
    }

    /// Etapa 2 — fórmula atômica `Predicado(arg, ...)`.
    ///
    /// A regex valida a forma inteira; os argumentos são separados por
    /// vírgula, aparados e classificados por [`Term::from_token`]. Tokens
    /// vazios (lista `()` ou vírgula seguida só de espaços) são ignorados.
    fn try_atomic(&self, text: &str) -> Option<Expression> {
        if !self.atomic_re.is_match(text) {
            return None;
        }

        // A regex garante exatamente um '(' e um ')' — o do fim da string.
        let open = text.find('(')?;
        let close = text.find(')')?;

        let predicate = Predicate::new(&text[..open]);
        let arguments: Vec<Term> = text[open + 1..close]
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Term::from_token)
            .collect();

        Some(Expression::Atomic(Atomic::new(predicate, arguments)))
    }

    /// Etapa 3 — negação prefixada.
    ///
    /// O `¬` inicial nega o restante **inteiro** da string (ver doc do
    /// módulo); o restante passa de novo pelas quatro etapas.
    fn try_negation(&self, text: &str) -> Option<Expression> {
        let remainder = text.strip_prefix('¬')?;
        let inner = self.parse(remainder)?;
        Some(Expression::Negation(Box::new(inner)))
    }

    /// Etapa 4 — operador binário de topo, localizado pela direita.
    ///
    /// A string precisa terminar em `)`. A varredura reversa acha o `(`
    /// casado e continua à esquerda sobre caracteres de palavra, isolando a
    /// última unidade (grupo parentesizado ou atômica nua). O caractere
    /// imediatamente anterior, ignorando espaços, deve ser um operador;
    /// os dois lados são analisados recursivamente.
    fn try_binary(&self, text: &str) -> Option<Expression> {
        if !text.ends_with(')') {
            return None;
        }

        let open = opening_index(text)?;

        // Estende a unidade à esquerda sobre o nome do predicado, se houver.
        let mut start = open;
        for (idx, ch) in text[..open].char_indices().rev() {
            if !is_word_char(ch) {
                break;
            }
            start = idx;
        }
        if start == 0 {
            // A unidade ocupa a string inteira: não sobra lugar para operador.
            return None;
        }

        let last_unit = &text[start..];
        let remainder = text[..start].trim();
        let operator = remainder.chars().last()?;
        if !matches!(operator, '&' | '|' | '>') {
            return None;
        }

        let left_text = remainder[..remainder.len() - operator.len_utf8()].trim();
        if left_text.is_empty() {
            return None;
        }

        let left = self.parse(left_text)?;
        let right = self.parse(last_unit)?;

        Some(match operator {
            '&' => Expression::Conjunction(Box::new(left), Box::new(right)),
            '|' => Expression::Disjunction(Box::new(left), Box::new(right)),
            _ => Expression::Implication(Box::new(left), Box::new(right)),
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Etapa 1 — remove pares de parênteses redundantes que envolvem a string
/// inteira, reaparando espaços a cada remoção.
///
/// Só remove quando o `(` inicial casa com o **último** caractere da
/// string; `(P(x)) & (Q(y))` fica intacto.
///
/// ```text
/// "((P(x)))"          → "P(x)"
/// "( (P(x) & Q(y)) )" → "P(x) & Q(y)"
/// "(P(x)) & (Q(y))"   → inalterado
/// ```
fn unbox(text: &str) -> &str {
    let mut text = text.trim();
    while text.starts_with('(') && closing_index(text) == Some(text.len() - 1) {
        text = text[1..text.len() - 1].trim();
    }
    text
}

/// Varredura direta: índice (em bytes) do `)` que fecha o primeiro `(`
/// da string, ou `None` se os parênteses não fecham.
fn closing_index(text: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Varredura reversa: índice (em bytes) do `(` que abre o último `)` da
/// string, ou `None` se os parênteses não abrem.
fn opening_index(text: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (idx, ch) in text.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Caractere de palavra: alfanumérico ou sublinhado (a classe `\w`).
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Knowledge;

    fn atom(predicate: &str, arguments: &[&str]) -> Expression {
        Expression::Atomic(Atomic::new(
            Predicate::new(predicate),
            arguments.iter().map(|a| Term::from_token(a)).collect(),
        ))
    }

    fn conj(left: Expression, right: Expression) -> Expression {
        Expression::Conjunction(Box::new(left), Box::new(right))
    }

    fn disj(left: Expression, right: Expression) -> Expression {
        Expression::Disjunction(Box::new(left), Box::new(right))
    }

    fn implies(left: Expression, right: Expression) -> Expression {
        Expression::Implication(Box::new(left), Box::new(right))
    }

    fn neg(inner: Expression) -> Expression {
        Expression::Negation(Box::new(inner))
    }

    // ─── varreduras de balanceamento ───────────────────────────

    #[test]
    fn closing_index_finds_matching_paren() {
        assert_eq!(closing_index("(a(b))c)"), Some(5));
        assert_eq!(closing_index("()"), Some(1));
    }

    #[test]
    fn closing_index_unbalanced_is_none() {
        assert_eq!(closing_index("((a)"), None);
        assert_eq!(closing_index("abc"), None);
    }

    #[test]
    fn opening_index_finds_matching_paren() {
        assert_eq!(opening_index("a(b(c))"), Some(1));
        assert_eq!(opening_index("(a)(b)"), Some(3));
    }

    #[test]
    fn opening_index_unbalanced_is_none() {
        assert_eq!(opening_index("a)b)"), None);
    }

    #[test]
    fn unbox_strips_redundant_pairs() {
        assert_eq!(unbox("((P(x)))"), "P(x)");
        assert_eq!(unbox("  ( P(x) ) "), "P(x)");
    }

    #[test]
    fn unbox_keeps_partial_spans() {
        assert_eq!(unbox("(P(x)) & (Q(y))"), "(P(x)) & (Q(y))");
        assert_eq!(unbox("P(x)"), "P(x)");
        assert_eq!(unbox(""), "");
    }

    // ─── fórmulas atômicas ─────────────────────────────────────

    #[test]
    fn atomic_single_constant() {
        let parser = Parser::new();
        assert_eq!(parser.parse("P(x)"), Some(atom("P", &["x"])));
    }

    #[test]
    fn atomic_argument_list() {
        let parser = Parser::new();
        assert_eq!(
            parser.parse("Say(ariel, hello)"),
            Some(atom("Say", &["ariel", "hello"]))
        );
    }

    #[test]
    fn atomic_without_arguments() {
        let parser = Parser::new();
        let parsed = parser.parse("Done()");
        assert_eq!(parsed, Some(atom("Done", &[])));
    }

    #[test]
    fn atomic_classifies_and_folds_arguments() {
        let parser = Parser::new();
        let parsed = parser.parse("Knows(Ariel, bob)").unwrap();
        let expected = Expression::Atomic(Atomic::new(
            Predicate::new("Knows"),
            vec![Term::variable("ARIEL"), Term::constant("bob")],
        ));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn atomic_whitespace_only_argument_is_dropped() {
        // "P( )" casa com a regex mas o token é vazio após trim.
        let parser = Parser::new();
        assert_eq!(parser.parse("P( )"), Some(atom("P", &[])));
    }

    #[test]
    fn bare_word_is_not_a_formula() {
        let parser = Parser::new();
        assert_eq!(parser.parse("hello"), None);
    }

    // ─── negação ───────────────────────────────────────────────

    #[test]
    fn negation_of_atomic() {
        let parser = Parser::new();
        assert_eq!(parser.parse("¬P(x)"), Some(neg(atom("P", &["x"]))));
    }

    #[test]
    fn negation_covers_whole_remainder() {
        // ¬ no início nega a string inteira, não só o primeiro operando.
        let parser = Parser::new();
        assert_eq!(
            parser.parse("¬P(x) & Q(y)"),
            Some(neg(conj(atom("P", &["x"]), atom("Q", &["y"]))))
        );
    }

    #[test]
    fn negation_scoped_by_parentheses() {
        let parser = Parser::new();
        assert_eq!(
            parser.parse("(¬P(x)) & Q(y)"),
            Some(conj(neg(atom("P", &["x"])), atom("Q", &["y"])))
        );
    }

    #[test]
    fn negation_on_right_operand_needs_parentheses() {
        // Sem parênteses a unidade final fica precedida de '¬', não de operador.
        let parser = Parser::new();
        assert_eq!(parser.parse("P(x) & ¬Q(y)"), None);
        assert_eq!(
            parser.parse("P(x) & (¬Q(y))"),
            Some(conj(atom("P", &["x"]), neg(atom("Q", &["y"]))))
        );
    }

    #[test]
    fn double_negation() {
        let parser = Parser::new();
        assert_eq!(parser.parse("¬¬P(x)"), Some(neg(neg(atom("P", &["x"])))));
    }

    // ─── operadores binários ───────────────────────────────────

    #[test]
    fn conjunction_of_atomics() {
        let parser = Parser::new();
        assert_eq!(
            parser.parse("P(x) & Q(y)"),
            Some(conj(atom("P", &["x"]), atom("Q", &["y"])))
        );
    }

    #[test]
    fn disjunction_of_variables() {
        let parser = Parser::new();
        assert_eq!(
            parser.parse("P(X) | Q(Y)"),
            Some(disj(atom("P", &["X"]), atom("Q", &["Y"])))
        );
    }

    #[test]
    fn implication_of_atomics() {
        let parser = Parser::new();
        assert_eq!(
            parser.parse("P(c) > Q(c)"),
            Some(implies(atom("P", &["c"]), atom("Q", &["c"])))
        );
    }

    #[test]
    fn repeated_operator_associates_left() {
        let parser = Parser::new();
        let expected = conj(
            conj(atom("P", &["x"]), atom("P", &["y"])),
            atom("P", &["z"]),
        );
        assert_eq!(parser.parse("P(x) & P(y) & P(z)"), Some(expected));
    }

    #[test]
    fn mixed_operators_group_by_position() {
        // O operador mais à direita no nível zero vira a raiz.
        let parser = Parser::new();
        let expected = disj(
            conj(atom("P", &["x"]), atom("P", &["y"])),
            atom("P", &["z"]),
        );
        assert_eq!(parser.parse("P(x) & P(y) | P(z)"), Some(expected));
    }

    #[test]
    fn parenthesized_group_as_right_operand() {
        let parser = Parser::new();
        let expected = conj(
            atom("P", &["x"]),
            disj(atom("Q", &["y"]), atom("R", &["z"])),
        );
        assert_eq!(parser.parse("P(x) & (Q(y) | R(z))"), Some(expected));
    }

    #[test]
    fn parenthesized_group_as_left_operand() {
        let parser = Parser::new();
        let expected = implies(
            implies(atom("P", &["x"]), atom("Q", &["x"])),
            atom("R", &["x"]),
        );
        assert_eq!(parser.parse("((P(x) > Q(x)) > R(x))"), Some(expected));
    }

    #[test]
    fn compact_spacing_is_accepted() {
        let parser = Parser::new();
        assert_eq!(
            parser.parse("Say(ariel,hello)>Say(self,hello)"),
            Some(implies(
                atom("Say", &["ariel", "hello"]),
                atom("Say", &["self", "hello"]),
            ))
        );
    }

    // ─── entradas rejeitadas ───────────────────────────────────

    #[test]
    fn unclosed_parenthesis_is_none() {
        let parser = Parser::new();
        assert_eq!(parser.parse("P(x, y"), None);
        assert_eq!(parser.parse("(P(x) > Q(x)"), None);
    }

    #[test]
    fn extra_closing_parenthesis_is_none() {
        let parser = Parser::new();
        assert_eq!(parser.parse("P(x))"), None);
    }

    #[test]
    fn empty_input_is_none() {
        let parser = Parser::new();
        assert_eq!(parser.parse(""), None);
        assert_eq!(parser.parse("   "), None);
    }

    #[test]
    fn operator_without_left_operand_is_none() {
        let parser = Parser::new();
        assert_eq!(parser.parse("& P(y)"), None);
        assert_eq!(parser.parse("> P(y)"), None);
    }

    #[test]
    fn speech_with_spaces_is_none() {
        // Argumentos são \w+ — fala livre não vira fórmula.
        let parser = Parser::new();
        assert_eq!(parser.parse("Say(ariel, hello world)"), None);
    }

    // ─── ida e volta render → parse ────────────────────────────

    #[test]
    fn canonical_render_reparses_to_same_tree() {
        let parser = Parser::new();
        let trees = [
            atom("P", &["x", "Y"]),
            neg(atom("P", &["x"])),
            conj(atom("P", &["x"]), neg(atom("Q", &["y"]))),
            implies(
                disj(atom("P", &["c"]), atom("Q", &["c"])),
                atom("R", &["c"]),
            ),
            neg(conj(atom("P", &["x"]), atom("Q", &["y"]))),
        ];

        for tree in trees {
            let rendered = tree.to_string();
            let reparsed = parser.parse(&rendered);
            assert_eq!(reparsed, Some(tree), "round trip failed for {}", rendered);
        }
    }

    #[test]
    fn parsed_tree_evaluates_consistently() {
        let parser = Parser::new();
        let mut knowledge = Knowledge::new();
        knowledge.insert(Atomic::new(
            Predicate::new("P"),
            vec![Term::constant("c")],
        ));

        let formula = parser.parse("P(c) | Q(c)").unwrap();
        assert!(formula.evaluate(&knowledge));

        let formula = parser.parse("¬P(c)").unwrap();
        assert!(!formula.evaluate(&knowledge));
    }
}
