//! # CallerContext — Metadados do Utilizador
//!
//! O [`CallerContext`] transporta o que a aplicação anfitriã sabe sobre o
//! utilizador: região de origem, tempo de comunidade, proficiência em
//! português, interesses e disposição atual. O motor **lê** este contexto
//! para afinar respostas e sugestões, mas nunca o altera — a sessão guarda
//! uma cópia que só muda por merge explícito ([`CallerContextUpdate`]).
//!
//! ## Merge Raso
//!
//! ```text
//! guardado:  { region: Some(North), proficiency: Some(Learning), mood: None }
//! update:    { region: None,        proficiency: Some(Fluent),   mood: Some(Curious) }
//! resultado: { region: Some(North), proficiency: Some(Fluent),   mood: Some(Curious) }
//! ```
//!
//! Campos `None` no update deixam o valor guardado intocado — é uma
//! sobreposição campo a campo, não uma substituição do contexto inteiro.

use serde::{Deserialize, Serialize};

use super::context::PortugueseRegion;

/// Nível de envolvimento do utilizador na comunidade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunityLevel {
    /// Recém-chegado — ainda a descobrir a comunidade.
    Newcomer,
    /// Ativo — participa em eventos ocasionalmente.
    Active,
    /// Envolvido — presença regular.
    Engaged,
    /// Líder — organiza atividades.
    Leader,
    /// Decano — membro de longa data e referência da comunidade.
    Elder,
}

/// Proficiência do utilizador em português.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageProficiency {
    /// Falante nativo.
    Native,
    /// Fluente.
    Fluent,
    /// Intermédio.
    Intermediate,
    /// Principiante.
    Beginner,
    /// Em aprendizagem ativa — dispara sugestões de intercâmbio de língua.
    Learning,
}

/// Disposição declarada ou inferida pelo anfitrião.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserMood {
    /// Curioso — à procura de informação.
    Curious,
    /// Com saudades de casa.
    Homesick,
    /// Entusiasmado.
    Excited,
    /// À procura de ajuda concreta.
    SeekingHelp,
    /// Em celebração.
    Celebratory,
}

/// Metadados do utilizador fornecidos pela aplicação anfitriã.
///
/// Todos os campos são opcionais — um contexto vazio é válido e o motor
/// responde com os seus defeitos. A lista de interesses é texto livre
/// do anfitrião (ex.: "fado", "futebol").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallerContext {
    /// Região de origem do utilizador, se conhecida.
    pub region: Option<PortugueseRegion>,

    /// Nível de envolvimento na comunidade.
    pub community_level: Option<CommunityLevel>,

    /// Proficiência em português.
    pub language_proficiency: Option<LanguageProficiency>,

    /// Interesses declarados (texto livre do anfitrião).
    #[serde(default)]
    pub interests: Vec<String>,

    /// Disposição atual.
    pub mood: Option<UserMood>,
}

/// Atualização parcial de um [`CallerContext`] — espelho com todos os
/// campos opcionais, aplicado por merge raso.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CallerContextUpdate {
    /// Nova região, se fornecida.
    pub region: Option<PortugueseRegion>,
    /// Novo nível de comunidade, se fornecido.
    pub community_level: Option<CommunityLevel>,
    /// Nova proficiência, se fornecida.
    pub language_proficiency: Option<LanguageProficiency>,
    /// Nova lista de interesses — substitui a anterior por inteiro.
    pub interests: Option<Vec<String>>,
    /// Nova disposição, se fornecida.
    pub mood: Option<UserMood>,
}

impl CallerContext {
    /// Aplica uma atualização parcial, campo a campo.
    ///
    /// Campos `None` no update deixam o valor guardado intocado.
    /// A lista de interesses, quando presente, substitui a anterior
    /// por inteiro (não faz append).
    pub fn merge(&mut self, update: CallerContextUpdate) {
        if let Some(region) = update.region {
            self.region = Some(region);
        }
        if let Some(level) = update.community_level {
            self.community_level = Some(level);
        }
        if let Some(proficiency) = update.language_proficiency {
            self.language_proficiency = Some(proficiency);
        }
        if let Some(interests) = update.interests {
            self.interests = interests;
        }
        if let Some(mood) = update.mood {
            self.mood = Some(mood);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// O merge raso sobrepõe campos presentes e preserva os ausentes.
    #[test]
    fn test_merge_shallow() {
        let mut ctx = CallerContext {
            region: Some(PortugueseRegion::North),
            community_level: None,
            language_proficiency: Some(LanguageProficiency::Learning),
            interests: vec!["fado".into()],
            mood: None,
        };

        ctx.merge(CallerContextUpdate {
            region: None,
            community_level: Some(CommunityLevel::Active),
            language_proficiency: Some(LanguageProficiency::Fluent),
            interests: None,
            mood: Some(UserMood::Curious),
        });

        assert_eq!(ctx.region, Some(PortugueseRegion::North));
        assert_eq!(ctx.community_level, Some(CommunityLevel::Active));
        assert_eq!(ctx.language_proficiency, Some(LanguageProficiency::Fluent));
        assert_eq!(ctx.interests, vec!["fado".to_string()]);
        assert_eq!(ctx.mood, Some(UserMood::Curious));
    }

    /// Um update vazio não altera nada.
    #[test]
    fn test_merge_empty_update() {
        let mut ctx = CallerContext {
            region: Some(PortugueseRegion::Madeira),
            ..CallerContext::default()
        };
        let before = ctx.clone();
        ctx.merge(CallerContextUpdate::default());
        assert_eq!(ctx, before);
    }

    /// A lista de interesses é substituída por inteiro, não concatenada.
    #[test]
    fn test_merge_replaces_interests() {
        let mut ctx = CallerContext {
            interests: vec!["fado".into(), "futebol".into()],
            ..CallerContext::default()
        };
        ctx.merge(CallerContextUpdate {
            interests: Some(vec!["gastronomia".into()]),
            ..CallerContextUpdate::default()
        });
        assert_eq!(ctx.interests, vec!["gastronomia".to_string()]);
    }
}
