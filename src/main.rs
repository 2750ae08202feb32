#![allow(dead_code, unused_imports)]
#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]
//! # Logic Brain — Cérebro Lógico Proposicional
//!
//! **Ponto de entrada principal** da aplicação.
//!
//! O sistema analisa fórmulas de lógica proposicional em forma textual,
//! acumula fatos e regras num motor de encadeamento direto e conversa com
//! o usuário num laço de terminal.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Cria o Agent (parser + cérebro com a regra de saudação)
//!   └── Agent::interact()
//!       ├── pergunta o nome do falante
//!       ├── imprime o estado do cérebro
//!       └── processa linhas até EOF ou "quit"
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados do motor
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## Caso de Uso
//!
//! O usuário alterna entre ensinar fórmulas e conversar:
//! - `Chove(hoje) > Molhado(chao)` registra uma regra
//! - `Chove(hoje)` registra um fato e dispara a regra
//! - fala comum vira o fato `Say(<nome>, <fala>)`, e consequentes
//!   `Say(self, ...)` viram respostas do agente

// Declaração dos módulos da aplicação.
// Cada módulo corresponde a uma camada da arquitetura:

/// Módulo `agent` — laço de conversa sobre o motor (fala, eco, avisos).
mod agent;

/// Módulo `core` — tipos fundamentais: Term, Predicate, Atomic, Expression.
mod core;

/// Módulo `inference` — motor de encadeamento direto (Brain).
mod inference;

/// Módulo `parser` — análise textual de fórmulas por balanceamento de parênteses.
mod parser;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::agent::Agent;

/// Função principal: configura o logging e entrega o terminal ao agente.
///
/// # Erros
///
/// Retorna erro se a leitura ou escrita no terminal falhar.
fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    // Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧠 Logic Brain — Starting...");

    let mut agent = Agent::new();
    agent.interact()
}
