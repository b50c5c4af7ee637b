//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** do motor de conversação.
//! Tudo no LusoBot gira em torno destes tipos:
//!
//! - [`EmotionalTone`] — vetor emocional de cinco dimensões ([0, 1] cada)
//! - [`CulturalContext`] — classificação (região, tópico, especialidades, confiança)
//! - [`Message`] — entrada imutável do transcript de uma sessão
//! - [`Suggestion`] — recomendação de seguimento, pontuada e ordenável
//! - [`CallerContext`] — metadados do utilizador fornecidos pelo anfitrião
//!
//! ## Fluxo de Um Turno
//!
//! ```text
//! texto do utilizador
//!   ├── detetor       → EmotionalTone
//!   ├── classificador → CulturalContext
//!   ├── gerador       → String (resposta)
//!   └── ranker        → Vec<Suggestion> (≤ 4)
//!         ↓
//! Message::assistant(...) acrescentada ao transcript
//! ```

/// Sub-módulo com a implementação de [`EmotionalTone`].
pub mod tone;

/// Sub-módulo com [`CulturalContext`] e os enums de região/tópico/especialidade.
pub mod context;

/// Sub-módulo com [`Message`], [`MessageRole`] e [`Language`].
pub mod message;

/// Sub-módulo com [`Suggestion`], [`SuggestionKind`] e [`Priority`].
pub mod suggestion;

/// Sub-módulo com [`CallerContext`] e o merge parcial via [`CallerContextUpdate`].
pub mod caller;

// Re-exports para conveniência — permite usar `crate::core::EmotionalTone` diretamente.
pub use caller::{
    CallerContext, CallerContextUpdate, CommunityLevel, LanguageProficiency, UserMood,
};
pub use context::{CulturalContext, CulturalTopic, ExpertiseArea, PortugueseRegion};
pub use message::{Language, Message, MessageId, MessageMetadata, MessageRole, ParseLanguageError};
pub use suggestion::{Priority, Suggestion, SuggestionKind};
pub use tone::EmotionalTone;
