//! # Agente — Laço de Conversa sobre o Motor
//!
//! O [`Agent`] é o colaborador externo do motor de inferência: lê linhas do
//! usuário, decide se cada linha é **fórmula** ou **fala**, alimenta o
//! [`Brain`] e responde consultando a tabela de regras.
//!
//! ## Fluxo de cada linha
//!
//! ```text
//! Linha do usuário (normalizada NFC, aparada)
//!   │
//!   ├── analisa como fórmula?
//!   │   ├── sim → ecoa a forma canônica, aprende
//!   │   │         (aprendizado rejeitado → aviso no chat)
//!   │   └── não → embrulha como Say(<falante>, <linha>) e analisa
//!   │             (não analisou → fala livre, silêncio)
//!   │
//!   └── consulta os consequentes da chave exata na tabela de regras:
//!       cada consequente Say(self, ...) vira uma resposta falada,
//!       um argumento por linha
//! ```
//!
//! O agente só usa três contratos do núcleo: `Parser::parse`,
//! `Brain::learn` e `Brain::consequents`. Nenhuma inferência acontece
//! aqui dentro.
//!
//! ## Roles das Mensagens
//!
//! | Role | Significado | Exemplo |
//! |------|-------------|---------|
//! | `Echo` | forma canônica da fórmula aceita | `(P(c) > Q(c))` |
//! | `Say` | fala do agente, vinda de um consequente `Say(self, ...)` | `hello` |
//! | `Notice` | aviso sobre aprendizado rejeitado | `não sei aprender...` |

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::core::{Expression, Term};
use crate::inference::Brain;
use crate::parser::Parser;

/// Regra de saudação semeada em todo agente novo: ouvir `hello` de `ariel`
/// faz o agente responder `hello`.
const GREETING_RULE: &str = "Say(ariel, hello) > Say(self, hello)";

/// Mensagem produzida pelo processamento de uma linha.
///
/// A role indica a origem semântica da mensagem; o laço interativo imprime
/// só o conteúdo, mas testes e outros frontends distinguem pela role.
pub struct ChatMessage {
    /// Role semântica da mensagem (Echo, Say, Notice).
    pub role: MessageRole,
    /// Conteúdo textual pronto para exibição.
    pub content: String,
}

/// Role semântica das mensagens do agente.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageRole {
    /// Forma canônica de uma fórmula aceita, ecoada de volta.
    Echo,
    /// Fala do agente, extraída de um consequente `Say(self, ...)`.
    Say,
    /// Aviso sobre uma fórmula que o motor não soube aprender.
    Notice,
}

/// Agente conversacional sobre um [`Brain`].
///
/// Possui o parser e o cérebro; todo o estado conversacional vive no
/// próprio cérebro (fatos e regras acumulados pela conversa).
pub struct Agent {
    /// Parser de fórmulas, compartilhado por todas as linhas.
    parser: Parser,
    /// Motor de inferência alimentado pela conversa.
    brain: Brain,
}

impl Agent {
    /// Cria um agente com a regra de saudação já aprendida.
    pub fn new() -> Self {
        let parser = Parser::new();
        let mut brain = Brain::new();

        if let Some(rule) = parser.parse(GREETING_RULE) {
            if let Err(error) = brain.learn(rule) {
                warn!(%error, "Agent: regra de saudação rejeitada");
            }
        }

        Self { parser, brain }
    }

    /// Processa uma linha do falante e devolve as mensagens resultantes,
    /// em ordem cronológica (ver o fluxo na doc do módulo).
    ///
    /// Linha vazia não produz nada; fala livre que não couber no molde
    /// `Say(falante, palavra)` também não — o agente fica em silêncio.
    pub fn process_line(&mut self, speaker: &str, line: &str) -> Vec<ChatMessage> {
        let line: String = line.nfc().collect();
        let line = line.trim();

        let mut responses = Vec::new();
        if line.is_empty() {
            return responses;
        }

        let key = match self.parser.parse(line) {
            Some(formula) => {
                responses.push(ChatMessage {
                    role: MessageRole::Echo,
                    content: formula.to_string(),
                });
                if let Err(error) = self.brain.learn(formula.clone()) {
                    responses.push(ChatMessage {
                        role: MessageRole::Notice,
                        content: error.to_string(),
                    });
                }
                Some(formula)
            }
            None => self.hear_speech(speaker, line),
        };

        if let Some(key) = key {
            self.push_spoken_responses(&key, &mut responses);
        }

        responses
    }

    /// Laço interativo no terminal: pergunta o nome do falante, imprime o
    /// despejo do cérebro e processa linhas até EOF ou `quit`.
    ///
    /// # Erros
    ///
    /// Propaga falhas de leitura/escrita no terminal.
    pub fn interact(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        write!(stdout, "Qual é o seu nome? ")?;
        stdout.flush().context("falha ao escrever no terminal")?;

        let mut name = String::new();
        stdin.read_line(&mut name).context("falha ao ler o nome")?;
        let speaker = name.trim().to_string();

        println!();
        println!("{}", self.brain);

        loop {
            write!(stdout, "{}: ", speaker)?;
            stdout.flush().context("falha ao escrever no terminal")?;

            let mut line = String::new();
            let read = stdin
                .read_line(&mut line)
                .context("falha ao ler a linha")?;
            if read == 0 {
                break;
            }

            let line = line.trim();
            if line == "quit" {
                break;
            }

            for message in self.process_line(&speaker, line) {
                println!("{}", message.content);
            }
        }

        println!("Até logo.");
        Ok(())
    }

    /// Embrulha uma linha de fala como o fato `Say(<falante>, <linha>)`.
    ///
    /// Fala que não couber na gramática (espaços, pontuação) é registrada
    /// em log e ignorada; o fato embrulhado é aprendido e devolvido como
    /// chave de consulta.
    fn hear_speech(&mut self, speaker: &str, line: &str) -> Option<Expression> {
        let wrapped = format!("Say({}, {})", speaker, line);
        match self.parser.parse(&wrapped) {
            Some(fact) => {
                if let Err(error) = self.brain.learn(fact.clone()) {
                    warn!(%error, "Agent: fala rejeitada pelo motor");
                }
                Some(fact)
            }
            None => {
                debug!(line = %line, "Agent: fala livre, nada a aprender");
                None
            }
        }
    }

    /// Converte os consequentes registrados sob a chave em falas do agente:
    /// cada `Say(self, ...)` atômico vira uma mensagem por argumento
    /// restante.
    fn push_spoken_responses(&self, key: &Expression, responses: &mut Vec<ChatMessage>) {
        let myself = Term::constant("self");

        for consequent in self.brain.consequents(key) {
            if let Expression::Atomic(atomic) = consequent {
                if atomic.predicate.name == "Say" && atomic.arguments.first() == Some(&myself) {
                    for argument in &atomic.arguments[1..] {
                        responses.push(ChatMessage {
                            role: MessageRole::Say,
                            content: argument.name().to_string(),
                        });
                    }
                }
            }
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}
