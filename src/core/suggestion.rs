//! # Suggestion — Recomendação de Seguimento
//!
//! Uma [`Suggestion`] é uma recomendação concreta anexada à resposta do
//! assistente: um encontro da comunidade, um diretório de restaurantes,
//! um intercâmbio de língua. Cada turno gera as suas sugestões de fresco —
//! não há persistência nem identidade entre turnos.
//!
//! ## Pontuação
//!
//! Cada sugestão tem uma prioridade ([`Priority`]) e uma relevância
//! cultural em [0, 1]. O ranker ordena por:
//!
//! ```text
//! score = peso(priority) + cultural_relevance
//!         peso: High = 3.0, Medium = 2.0, Low = 1.0
//! ```
//!
//! Empates preservam a ordem de emissão das regras (ordenação estável).

use serde::{Deserialize, Serialize};

/// Categoria de uma sugestão de seguimento.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Evento — festa, aula, calendário cultural.
    Event,
    /// Negócio — diretório de restaurantes, serviços.
    Business,
    /// Recurso — material de apoio, guias.
    Resource,
    /// Comunidade — encontros, grupos, networking.
    Community,
    /// Língua — intercâmbio e aprendizagem de português.
    Language,
}

/// Prioridade de exibição de uma sugestão.
///
/// Convertida em peso numérico pelo ranker: High=3, Medium=2, Low=1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Alta — mostrada primeiro.
    High,
    /// Média.
    Medium,
    /// Baixa.
    Low,
}

impl Priority {
    /// Peso numérico usado na fórmula de pontuação do ranker.
    pub fn weight(&self) -> f32 {
        match self {
            Priority::High => 3.0,
            Priority::Medium => 2.0,
            Priority::Low => 1.0,
        }
    }
}

/// Recomendação de seguimento gerada para um turno de conversa.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Categoria da sugestão.
    pub kind: SuggestionKind,

    /// Título curto, na língua do turno.
    pub title: String,

    /// Descrição de uma frase.
    pub description: String,

    /// Caminho de navegação na aplicação anfitriã, se aplicável.
    pub link: Option<String>,

    /// Prioridade de exibição.
    pub priority: Priority,

    /// Relevância cultural em [0, 1] — afina a ordenação dentro da
    /// mesma prioridade.
    pub cultural_relevance: f32,
}

impl Suggestion {
    /// Pontuação usada para ordenar sugestões: peso da prioridade
    /// mais a relevância cultural.
    pub fn score(&self) -> f32 {
        self.priority.weight() + self.cultural_relevance
    }
}
