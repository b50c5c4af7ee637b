//! # LusoBot — Motor de Conversa Cultural da Diáspora Portuguesa
//!
//! O LusoBot é um motor **determinístico** de classificação cultural e
//! geração de diálogo para uma comunidade da diáspora portuguesa: deteta
//! o tom emocional de uma mensagem (com a saudade no centro), classifica
//! a região e o tópico cultural implicados, compõe uma resposta bilingue
//! (pt/en) e propõe até quatro sugestões acionáveis.
//!
//! Toda a análise é acumulação de evidência por keywords sobre texto
//! normalizado — sem modelos estatísticos, sem chamadas externas, sem
//! aprendizagem persistente. A mesma entrada produz sempre a mesma saída.
//!
//! ## Arquitetura
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │          Session            │
//!                    │  transcript · língua · ctx  │
//!                    └──────────────┬──────────────┘
//!                                   │ send_message
//!          ┌────────────────┬───────┴────────┬────────────────┐
//!          ▼                ▼                ▼                ▼
//!   ┌────────────┐  ┌──────────────┐  ┌────────────┐  ┌────────────┐
//!   │ ToneDetect │  │  Classifier  │  │  Response  │  │   Ranker   │
//!   │ (nlu)      │  │  (nlu)       │  │ (response) │  │ (suggest)  │
//!   └────────────┘  └──────────────┘  └─────┬──────┘  └────────────┘
//!                                           │
//!                                    ┌──────▼──────┐
//!                                    │  knowledge  │
//!                                    │ (tabelas KB)│
//!                                    └─────────────┘
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```no_run
//! use lusobot::core::Language;
//! use lusobot::session::Session;
//!
//! let mut session = Session::new("demo", None, Language::Pt);
//! let reply = session.send_message("Tenho saudades de Portugal");
//! println!("{}", reply.content);
//! for suggestion in reply.suggestions.iter().flatten() {
//!     println!("→ {}", suggestion.title);
//! }
//! ```

/// Tipos fundamentais do domínio: mensagens, tom, contexto, sugestões.
pub mod core;

/// Base de conhecimento cultural estática (regiões, cozinha, fado, história).
pub mod knowledge;

/// Pipeline NLU: detetor de tom emocional e classificador cultural.
pub mod nlu;

/// Gerador de respostas guiado por política ordenada.
pub mod response;

/// Ranker de sugestões de seguimento.
pub mod suggest;

/// Sessão de conversa: transcript, turnos e export.
pub mod session;

pub use crate::core::{
    CallerContext, CallerContextUpdate, CulturalContext, EmotionalTone, Language, Message,
    Suggestion,
};
pub use nlu::NluPipeline;
pub use response::ResponseGenerator;
pub use session::{Session, SessionSnapshot, SharedSession};
pub use suggest::SuggestionRanker;
