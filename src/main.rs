//! # LusoBot — Demo Interativa de Terminal
//!
//! **Ponto de entrada** da demo do LusoBot: um REPL de linha de comandos
//! que exercita o motor de conversa completo numa única sessão. É uma
//! conveniência de anfitrião — o contrato do motor vive na biblioteca.
//!
//! ## Fluxo de Execução
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG, defeito "info")
//!   ├── Cria a Session com as boas-vindas
//!   └── Loop de leitura do stdin:
//!       ├── /lang pt|en → muda a língua dos turnos seguintes
//!       ├── /export     → imprime o snapshot JSON da sessão
//!       ├── /quit       → termina
//!       └── texto livre → send_message + imprime resposta e sugestões
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados
//! RUST_LOG=debug cargo run
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use lusobot::core::Language;
use lusobot::session::Session;

fn main() -> Result<()> {
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    // Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("LusoBot — demo de terminal");

    let mut session = Session::new("cli-demo", None, Language::Pt);

    // A sessão nasce com as boas-vindas já no transcript
    if let Some(welcome) = session.messages().first() {
        println!("{}\n", welcome.content);
    }
    println!("Comandos: /lang pt|en, /export, /quit\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) => break,
            ("/export", _) => {
                println!("{}", session.export_json()?);
            }
            ("/lang", code) => match code.parse::<Language>() {
                Ok(language) => {
                    session.set_language(language);
                    println!("língua: {language}");
                }
                Err(e) => println!("{e}"),
            },
            _ => {
                let reply = session.send_message(line);
                println!("\n{}\n", reply.content);
                for suggestion in reply.suggestions.iter().flatten() {
                    match &suggestion.link {
                        Some(link) => println!("  → {} ({link})", suggestion.title),
                        None => println!("  → {}", suggestion.title),
                    }
                }
                if reply.suggestions.as_ref().is_some_and(|s| !s.is_empty()) {
                    println!();
                }
            }
        }
    }

    tracing::info!("sessão terminada");
    Ok(())
}
