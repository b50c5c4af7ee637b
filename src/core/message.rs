//! # Message — Entrada do Transcript
//!
//! Uma [`Message`] é uma entrada **imutável** no transcript de uma sessão:
//! texto, autor ([`MessageRole`]), timestamp e — para mensagens do
//! assistente — o contexto cultural, o tom emocional e as sugestões
//! calculadas nesse turno.
//!
//! ## Identidade
//!
//! Cada mensagem recebe um UUID v4 na criação. Dentro de um transcript
//! não há dois ids iguais; as mensagens são acrescentadas por ordem de
//! chegada e nunca editadas depois.
//!
//! ## Línguas
//!
//! O motor gera texto em duas línguas ([`Language::Pt`] e [`Language::En`]).
//! Códigos desconhecidos nunca são um erro em runtime: o construtor
//! tolerante [`Language::from_code`] recua para inglês, conforme o
//! contrato de tolerância a entrada malformada. O parse estrito via
//! `FromStr` existe para fronteiras que queiram distinguir código inválido.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::caller::CallerContext;
use super::context::CulturalContext;
use super::suggestion::Suggestion;
use super::tone::EmotionalTone;

/// Alias de tipo para o identificador de uma [Message].
///
/// Utiliza UUID v4 para garantir unicidade sem coordenação central.
pub type MessageId = Uuid;

/// Língua de geração das respostas do motor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Português.
    Pt,
    /// Inglês — o recuo para códigos desconhecidos.
    #[default]
    En,
}

/// Erro de parse estrito de um código de língua.
///
/// Só ocorre via [`FromStr`]; o caminho tolerante é [`Language::from_code`].
#[derive(Debug, thiserror::Error)]
#[error("código de língua não suportado: {0:?}")]
pub struct ParseLanguageError(pub String);

impl Language {
    /// Converte um código de língua de forma tolerante.
    ///
    /// Aceita "pt"/"en" em qualquer capitalização; qualquer outro valor
    /// recua para [`Language::En`] em vez de falhar.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or(Language::En)
    }

    /// Código de duas letras da língua ("pt" ou "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Autor de uma mensagem no transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Mensagem escrita pelo utilizador.
    User,
    /// Resposta gerada pelo motor.
    Assistant,
    /// Mensagem de sistema (reservado ao anfitrião).
    System,
}

/// Metadados anexados a uma mensagem do assistente — eco do contexto
/// do utilizador usado nesse turno.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    /// Cópia do contexto do utilizador em vigor quando a resposta
    /// foi gerada.
    pub caller_context: CallerContext,
}

/// Entrada imutável do transcript de uma sessão.
///
/// Mensagens do utilizador transportam apenas `content`; mensagens do
/// assistente transportam também a classificação cultural, o tom
/// emocional, as sugestões do turno e os metadados.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Identificador único (UUID v4) — gerado na criação.
    pub id: MessageId,

    /// Autor da mensagem.
    pub role: MessageRole,

    /// Texto da mensagem. Nunca vazio nas mensagens do assistente.
    pub content: String,

    /// Momento de criação.
    pub timestamp: DateTime<Utc>,

    /// Língua em vigor quando a mensagem foi criada.
    pub language: Language,

    /// Classificação cultural do turno — só em mensagens do assistente.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_context: Option<CulturalContext>,

    /// Tom emocional detetado no turno — só em mensagens do assistente.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotional_tone: Option<EmotionalTone>,

    /// Sugestões de seguimento do turno (0 a 4 entradas).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,

    /// Eco do contexto do utilizador usado na geração.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl Message {
    /// Cria uma mensagem do utilizador — sem anotações do motor.
    pub fn user(content: String, language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::User,
            content,
            timestamp: Utc::now(),
            language,
            cultural_context: None,
            emotional_tone: None,
            suggestions: None,
            metadata: None,
        }
    }

    /// Cria uma mensagem do assistente com as anotações completas
    /// do turno.
    pub fn assistant(
        content: String,
        language: Language,
        cultural_context: CulturalContext,
        emotional_tone: EmotionalTone,
        suggestions: Vec<Suggestion>,
        caller_context: CallerContext,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Assistant,
            content,
            timestamp: Utc::now(),
            language,
            cultural_context: Some(cultural_context),
            emotional_tone: Some(emotional_tone),
            suggestions: Some(suggestions),
            metadata: Some(MessageMetadata { caller_context }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── Language ────────────────────────────────────────────

    /// O parse estrito aceita pt/en em qualquer capitalização.
    #[test]
    fn test_language_from_str() {
        assert_eq!("pt".parse::<Language>().unwrap(), Language::Pt);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    /// O construtor tolerante recua para inglês em código desconhecido.
    #[test]
    fn test_language_from_code_fallback() {
        assert_eq!(Language::from_code("pt"), Language::Pt);
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    /// A língua serializa em minúsculas ("pt"/"en").
    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
    }

    // ─── Message ─────────────────────────────────────────────

    /// Mensagens do utilizador não transportam anotações do motor.
    #[test]
    fn test_user_message_has_no_annotations() {
        let msg = Message::user("olá".into(), Language::Pt);
        assert_eq!(msg.role, MessageRole::User);
        assert!(msg.cultural_context.is_none());
        assert!(msg.emotional_tone.is_none());
        assert!(msg.suggestions.is_none());
        assert!(msg.metadata.is_none());
    }

    /// Mensagens distintas recebem ids distintos.
    #[test]
    fn test_message_ids_unique() {
        let a = Message::user("a".into(), Language::Pt);
        let b = Message::user("b".into(), Language::Pt);
        assert_ne!(a.id, b.id);
    }
}
