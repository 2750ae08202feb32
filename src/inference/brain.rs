//! # Brain — Motor de Inferência por Encadeamento Direto
//!
//! O [`Brain`] acumula fatos atômicos e regras condicionais e propaga
//! consequências no momento em que cada fato chega (*forward chaining*):
//! aprender um fato dispara as regras cujo antecedente é esse fato, e cada
//! consequente aprendido pode disparar novas regras, recursivamente.
//!
//! ## Estado
//!
//! | Campo | Conteúdo |
//! |-------|----------|
//! | `knowledge` | conjunto de fatos atômicos (monotônico, nunca esquece) |
//! | `rules` | antecedente → conjunto de consequentes |
//! | `memory` | lembrete → expressão associada (gatilho indireto) |
//!
//! ## Aprendizado ([`learn`](Brain::learn))
//!
//! O despacho segue a variante da expressão:
//!
//! | Variante | Ação |
//! |----------|------|
//! | `Conjunction(a, b)` | aprende `a` e `b` como compromissos independentes |
//! | `Atomic` | insere o fato e propaga (ver abaixo) |
//! | `Implication(p, q)` | registra a regra `p → q` e dispara retroativamente |
//! | `Disjunction(p, q)` | reescreve como `¬p → q` e `¬q → p` |
//! | demais | [`LearnError::Unsupported`], sem mutação |
//!
//! A reescrita da disjunção dispara na hora: aprender `P(c) | Q(c)` com os
//! dois lados desconhecidos registra `¬P(c) → Q(c)`, cujo antecedente já
//! vale, e portanto aprende `Q(c)` imediatamente.
//!
//! ## Propagação e Terminação
//!
//! Um fato **já conhecido não propaga de novo**: a inserção no conjunto é o
//! guarda da recursão. Cada nível da cascata exige um fato inédito, então
//! ciclos de regras (`P → Q`, `Q → P`) terminam — a profundidade é limitada
//! pelo número de fatos novos aprendidos na cascata.
//!
//! ## Memória
//!
//! [`add_memory`](Brain::add_memory) associa um *lembrete* a uma *memória*.
//! Ao aprender um fato que é lembrete, se a memória associada já for
//! conhecida, as regras registradas sob a memória disparam de novo — um
//! gatilho indireto para regras cujo antecedente composto só se completou
//! agora.
//!
//! ## Exemplo
//!
//! ```rust
//! let mut brain = Brain::new();
//! let parser = Parser::new();
//!
//! brain.learn(parser.parse("P(c) > Q(c)").unwrap())?;
//! brain.learn(parser.parse("P(c)").unwrap())?;
//!
//! // Q(c) foi aprendido pela cascata.
//! assert!(brain.evaluate(&parser.parse("Q(c)").unwrap()));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{Atomic, Expression, Knowledge};

/// Erro devolvido por [`Brain::learn`] para expressões que não têm forma
/// de aprendizado.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LearnError {
    /// Negação, tautologia ou contradição no topo: não há fato nem regra
    /// a extrair. Nenhuma mutação acontece.
    #[error("não sei aprender expressões do tipo {kind}")]
    Unsupported {
        /// Rótulo da variante rejeitada (ver [`Expression::kind`]).
        kind: &'static str,
    },
}

/// Motor de inferência proposicional com encadeamento direto.
///
/// Todo o estado é privado; mutação só através de [`learn`](Brain::learn),
/// [`add_memory`](Brain::add_memory) e dos registros internos que eles
/// acionam. [`evaluate`](Brain::evaluate) é somente leitura.
pub struct Brain {
    /// Fatos atômicos conhecidos.
    knowledge: Knowledge,
    /// Regras condicionais: antecedente → consequentes registrados.
    rules: HashMap<Expression, HashSet<Expression>>,
    /// Gatilhos indiretos: lembrete → memória associada.
    memory: HashMap<Expression, Expression>,
}

impl Brain {
    /// Cria um cérebro sem conhecimento algum.
    pub fn new() -> Self {
        Self {
            knowledge: Knowledge::new(),
            rules: HashMap::new(),
            memory: HashMap::new(),
        }
    }

    /// Avalia uma expressão contra o conhecimento atual. Somente leitura.
    pub fn evaluate(&self, expression: &Expression) -> bool {
        expression.evaluate(&self.knowledge)
    }

    /// Aprende uma expressão, despachando pela variante (ver doc do módulo).
    ///
    /// Os dois lados de uma conjunção são compromissos independentes: ambos
    /// são tentados e o primeiro erro, se houver, é devolvido — o lado que
    /// funcionou permanece aprendido.
    pub fn learn(&mut self, expression: Expression) -> Result<(), LearnError> {
        match expression {
            Expression::Conjunction(left, right) => {
                let first = self.learn(*left);
                let second = self.learn(*right);
                first.and(second)
            }
            Expression::Atomic(fact) => {
                self.add_fact(fact);
                Ok(())
            }
            Expression::Implication(antecedent, consequent) => {
                self.add_rule(*antecedent, *consequent);
                Ok(())
            }
            Expression::Disjunction(left, right) => {
                self.add_rule(Expression::Negation(left.clone()), (*right).clone());
                self.add_rule(Expression::Negation(right), *left);
                Ok(())
            }
            other => Err(LearnError::Unsupported { kind: other.kind() }),
        }
    }

    /// Associa uma memória a um lembrete. Registro puro, sem propagação.
    pub fn add_memory(&mut self, memory: Expression, reminder: Expression) {
        debug!(reminder = %reminder, memory = %memory, "Brain: lembrete registrado");
        self.memory.insert(reminder, memory);
    }

    /// Consequentes registrados sob um antecedente exato. Consulta pura:
    /// nunca aprende nem dispara nada; chave ausente devolve lista vazia.
    pub fn consequents(&self, antecedent: &Expression) -> Vec<&Expression> {
        self.rules
            .get(antecedent)
            .map(|set| set.iter().collect())
            .unwrap_or_default()
    }

    /// Acesso de leitura ao conjunto de fatos.
    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Quantidade de fatos conhecidos.
    pub fn fact_count(&self) -> usize {
        self.knowledge.len()
    }

    /// Quantidade de regras registradas (pares antecedente/consequente).
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(HashSet::len).sum()
    }

    /// Insere um fato e propaga as consequências.
    ///
    /// Um fato repetido não propaga: sem inserção nova não há disparo, o
    /// que torna o aprendizado idempotente e limita a recursão da cascata.
    fn add_fact(&mut self, fact: Atomic) {
        if !self.knowledge.insert(fact.clone()) {
            debug!(fact = %fact, "Brain: fato já conhecido, propagação suprimida");
            return;
        }
        debug!(fact = %fact, total = self.knowledge.len(), "Brain: fato armazenado");

        let key = Expression::Atomic(fact);

        // Gatilho indireto: se o fato é lembrete de uma memória já
        // conhecida, as regras registradas sob a memória disparam de novo.
        let reminded: Vec<Expression> = match self.memory.get(&key) {
            Some(memory) if self.is_known(memory) => self
                .rules
                .get(memory)
                .into_iter()
                .flatten()
                .cloned()
                .collect(),
            _ => Vec::new(),
        };
        self.fire(reminded);

        // Disparo direto. A tabela é relida aqui: o passo anterior pode
        // ter registrado regras novas sob este mesmo fato.
        let direct: Vec<Expression> = self
            .rules
            .get(&key)
            .into_iter()
            .flatten()
            .cloned()
            .collect();
        self.fire(direct);
    }

    /// Registra `antecedente → consequente` e dispara retroativamente: se o
    /// antecedente já vale e o consequente ainda não é fato, aprende-o agora.
    fn add_rule(&mut self, antecedent: Expression, consequent: Expression) {
        debug!(
            antecedent = %antecedent,
            consequent = %consequent,
            "Brain: regra registrada"
        );
        self.rules
            .entry(antecedent.clone())
            .or_default()
            .insert(consequent.clone());

        if antecedent.evaluate(&self.knowledge) && !self.is_known(&consequent) {
            if let Err(error) = self.learn(consequent) {
                warn!(%error, "Brain: consequente retroativo ignorado");
            }
        }
    }

    /// Aprende cada consequente de uma lista disparada. Um consequente sem
    /// forma de aprendizado é registrado em log e pulado; os demais seguem.
    fn fire(&mut self, consequents: Vec<Expression>) {
        for consequent in consequents {
            if let Err(error) = self.learn(consequent) {
                warn!(%error, "Brain: consequente ignorado na cascata");
            }
        }
    }

    /// Um fato atômico já consta do conhecimento? Expressões compostas
    /// nunca constam — o conjunto só guarda fatos atômicos.
    fn is_known(&self, expression: &Expression) -> bool {
        match expression {
            Expression::Atomic(fact) => self.knowledge.contains(fact),
            _ => false,
        }
    }
}

impl Default for Brain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Brain {
    /// Despejo legível do estado em três seções, uma entrada por linha.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conhecimento:")?;
        for fact in &self.knowledge {
            writeln!(f, "  {}", fact)?;
        }

        writeln!(f)?;
        writeln!(f, "Regras:")?;
        for (antecedent, consequents) in &self.rules {
            for consequent in consequents {
                writeln!(f, "  {} => {}", antecedent, consequent)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Lembretes:")?;
        for (reminder, memory) in &self.memory {
            writeln!(f, "  {} lembra {}", reminder, memory)?;
        }

        Ok(())
    }
}
