//! # Sessão de Conversa — O Transcript e o Seu Dono
//!
//! Uma [`Session`] é o agregado de estado do motor: o transcript ordenado
//! de mensagens, a língua em vigor e a cópia local do contexto do
//! utilizador. Todo o processamento de um turno passa por aqui:
//!
//! ```text
//! send_message(texto)
//!   ├── Message::user(texto)                 → transcript
//!   ├── NluPipeline::analyze(texto)          → tom + contexto
//!   ├── ResponseGenerator::generate(...)     → resposta
//!   ├── SuggestionRanker::rank(...)          → sugestões (≤ 4)
//!   └── Message::assistant(...)              → transcript
//! ```
//!
//! ## Invariante de Ordem
//!
//! O transcript nasce com **1** mensagem (as boas-vindas do assistente) e
//! cada turno acrescenta exatamente **2** (utilizador, assistente). Depois
//! de N turnos o comprimento é sempre `1 + 2N`, e as mensagens nunca são
//! editadas nem removidas.
//!
//! ## Concorrência
//!
//! Uma sessão tem um único escritor. O alias [`SharedSession`]
//! (`Arc<parking_lot::Mutex<Session>>`) é a forma recomendada de a
//! partilhar entre threads — o mutex serializa os turnos. Sessões
//! diferentes são completamente independentes e não partilham estado.
//!
//! ## Exemplo de Uso
//!
//! ```no_run
//! use lusobot::core::Language;
//! use lusobot::session::Session;
//!
//! let mut session = Session::new("demo", None, Language::Pt);
//! let reply = session.send_message("tenho saudades de casa");
//! println!("{}", reply.content);
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

use crate::core::{
    CallerContext, CallerContextUpdate, CulturalContext, EmotionalTone, Language, Message,
    PortugueseRegion,
};
use crate::nlu::NluPipeline;
use crate::response::ResponseGenerator;
use crate::suggest::SuggestionRanker;

/// Texto de boas-vindas que seeda o transcript.
const WELCOME_PT: &str = "Olá! Sou o LusoBot, o teu companheiro da comunidade portuguesa. \
     Estou aqui para conversar sobre a nossa cultura, matar saudades e ajudar-te a \
     encontrar a tua comunidade. Como te posso ajudar hoje?";

const WELCOME_EN: &str = "Hello! I'm LusoBot, your Portuguese community companion. \
     I'm here to talk about our culture, ease the saudades and help you find your \
     community. How can I help you today?";

/// Sessão partilhável entre threads — um escritor de cada vez.
pub type SharedSession = Arc<Mutex<Session>>;

/// Vista serializável do estado de uma sessão num instante.
///
/// É o formato do export (§ superfície de exportação): o momento da
/// captura, a língua em vigor, o contexto do utilizador e o transcript
/// completo.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    /// Momento da captura.
    pub timestamp: DateTime<Utc>,
    /// Língua em vigor.
    pub language: Language,
    /// Contexto do utilizador em vigor.
    pub caller_context: CallerContext,
    /// Transcript completo, por ordem de chegada.
    pub messages: Vec<Message>,
}

/// Sessão de conversa: transcript, língua e contexto do utilizador.
pub struct Session {
    id: String,
    language: Language,
    caller_context: CallerContext,
    messages: Vec<Message>,
    nlu: NluPipeline,
    generator: ResponseGenerator,
    ranker: SuggestionRanker,
}

impl Session {
    /// Cria uma sessão e seeda o transcript com as boas-vindas.
    ///
    /// A mensagem de boas-vindas é do assistente e transporta anotações
    /// fixas: tom acolhedor (hope 0.8, community 0.9, heritage 0.7),
    /// contexto com a região do utilizador (ou o defeito da diáspora),
    /// tópico de comunidade e confiança 1.0.
    ///
    /// # Parâmetros
    ///
    /// - `id` — identificador da sessão, atribuído pelo anfitrião
    /// - `caller_region` — região do utilizador, se o anfitrião a souber
    /// - `language` — língua inicial das respostas
    pub fn new(
        id: impl Into<String>,
        caller_region: Option<PortugueseRegion>,
        language: Language,
    ) -> Self {
        let id = id.into();
        let caller_context = CallerContext {
            region: caller_region,
            ..CallerContext::default()
        };

        let welcome = Message::assistant(
            match language {
                Language::Pt => WELCOME_PT.to_string(),
                Language::En => WELCOME_EN.to_string(),
            },
            language,
            CulturalContext::welcoming(caller_region),
            EmotionalTone::welcoming(),
            Vec::new(),
            caller_context.clone(),
        );

        tracing::info!(
            session_id = %id,
            language = %language,
            region = ?caller_region,
            "sessão criada"
        );

        Self {
            id,
            language,
            caller_context,
            messages: vec![welcome],
            nlu: NluPipeline::new(),
            generator: ResponseGenerator::new(),
            ranker: SuggestionRanker::new(),
        }
    }

    /// Processa um turno completo e devolve a resposta do assistente.
    ///
    /// Acrescenta a mensagem do utilizador, corre a análise NLU, gera a
    /// resposta e as sugestões, e acrescenta a mensagem do assistente —
    /// exatamente duas mensagens novas por chamada. Mensagens vazias são
    /// entrada válida: produzem afeto neutro e a resposta de comunidade.
    pub fn send_message(&mut self, content: &str) -> &Message {
        let language = self.language;
        self.messages.push(Message::user(content.to_string(), language));

        let analysis = self.nlu.analyze(content, language);
        let reply = self.generator.generate(
            content,
            &analysis.context,
            &analysis.tone,
            &self.caller_context,
            language,
        );
        let suggestions =
            self.ranker
                .rank(&analysis.context, &analysis.tone, &self.caller_context, language);

        tracing::info!(
            session_id = %self.id,
            language = %language,
            topic = ?analysis.context.topic,
            saudade = analysis.tone.saudade,
            suggestions = suggestions.len(),
            "turno processado"
        );

        self.messages.push(Message::assistant(
            reply,
            language,
            analysis.context,
            analysis.tone,
            suggestions,
            self.caller_context.clone(),
        ));

        // O push acima garante que o transcript não está vazio
        &self.messages[self.messages.len() - 1]
    }

    /// Aplica uma atualização parcial ao contexto do utilizador.
    ///
    /// Merge raso — campos `None` no update deixam o valor guardado
    /// intocado. Afeta apenas os turnos seguintes.
    pub fn update_caller_context(&mut self, update: CallerContextUpdate) {
        self.caller_context.merge(update);
        tracing::debug!(session_id = %self.id, "contexto do utilizador atualizado");
    }

    /// Muda a língua das respostas.
    ///
    /// Afeta apenas os turnos seguintes — mensagens já no transcript
    /// mantêm a língua com que foram criadas.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        tracing::debug!(session_id = %self.id, language = %language, "língua alterada");
    }

    /// Identificador da sessão.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Língua em vigor.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Contexto do utilizador em vigor.
    pub fn caller_context(&self) -> &CallerContext {
        &self.caller_context
    }

    /// Transcript completo, por ordem de chegada.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Captura uma vista serializável do estado atual.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            timestamp: Utc::now(),
            language: self.language,
            caller_context: self.caller_context.clone(),
            messages: self.messages.clone(),
        }
    }

    /// Exporta o snapshot da sessão como JSON legível.
    ///
    /// # Erros
    ///
    /// Falha apenas se a serialização falhar — o único caminho de erro
    /// de todo o motor.
    pub fn export_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .with_context(|| format!("falha ao serializar a sessão {}", self.id))
    }

    /// Converte a sessão num [`SharedSession`] partilhável entre threads.
    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }
}
