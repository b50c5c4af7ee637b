//! # Ranker de Sugestões — O Que Propor a Seguir
//!
//! O [`SuggestionRanker`] transforma o resultado da análise de um turno
//! numa lista curta de sugestões acionáveis: no máximo **4**, ordenadas
//! por relevância decrescente.
//!
//! ## Regras de Emissão
//!
//! Cinco regras independentes, avaliadas em ordem fixa; cada uma emite
//! as suas sugestões quando a condição se verifica:
//!
//! | # | Condição | Emissão | Score |
//! |---|----------|---------|-------|
//! | 1 | saudade > 0.5 | encontro da comunidade | 3.9 |
//! | 2 | tópico = cozinha | diretório de restaurantes | 3.8 |
//! |   |                  | aula de cozinha | 2.7 |
//! | 3 | tópico = língua OU proficiência = Learning | intercâmbio de língua | 3.8 |
//! | 4 | tópico = negócios | networking empresarial | 3.8 |
//! | 5 | heritage > 0.4 | calendário cultural | 2.9 |
//!
//! ## Ordenação e Corte
//!
//! `score = peso da prioridade {High: 3, Medium: 2, Low: 1} +
//! cultural_relevance`. A ordenação é **estável** — sugestões com o
//! mesmo score mantêm a ordem de emissão — e o corte a 4 acontece
//! depois de ordenar, garantindo que são sempre as 4 melhores que
//! sobrevivem quando as cinco regras disparam ao mesmo tempo.
//!
//! ## Pureza
//!
//! O ranker não tem estado: a mesma entrada produz sempre a mesma
//! lista, e uma entrada sem qualquer condição ativa produz a lista
//! vazia — um resultado válido, não um erro.

use crate::core::{
    CallerContext, CulturalContext, CulturalTopic, EmotionalTone, Language, LanguageProficiency,
    Priority, Suggestion, SuggestionKind,
};

/// Número máximo de sugestões devolvidas por turno.
const MAX_SUGGESTIONS: usize = 4;

/// Ranker de sugestões por regras de emissão e ordenação estável.
pub struct SuggestionRanker;

impl SuggestionRanker {
    /// Cria um novo ranker.
    pub fn new() -> Self {
        Self
    }

    /// Emite, ordena e corta as sugestões de um turno.
    ///
    /// ## Algoritmo (3 fases)
    ///
    /// 1. **Emissão**: as cinco regras correm em ordem fixa e acumulam
    ///    candidatos (0 a 6).
    /// 2. **Ordenação**: sort estável por score decrescente.
    /// 3. **Corte**: truncagem a [`MAX_SUGGESTIONS`].
    ///
    /// # Retorno
    ///
    /// Entre 0 e 4 sugestões, por relevância decrescente.
    pub fn rank(
        &self,
        context: &CulturalContext,
        tone: &EmotionalTone,
        caller: &CallerContext,
        language: Language,
    ) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        // ─── Fase 1: regras de emissão ───────────────────────────

        // Regra 1: saudade alta pede convívio presencial
        if tone.saudade > 0.5 {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Community,
                title: pick(
                    language,
                    "Encontro da Comunidade Portuguesa",
                    "Portuguese Community Meetup",
                ),
                description: pick(
                    language,
                    "Junta-te a outros portugueses perto de ti — nada cura a saudade como o convívio.",
                    "Join other Portuguese people near you — nothing eases saudade like good company.",
                ),
                link: Some("/events/?category=cultural".to_string()),
                priority: Priority::High,
                cultural_relevance: 0.9,
            });
        }

        // Regra 2: cozinha emite duas sugestões distintas
        if context.topic == CulturalTopic::Cuisine {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Business,
                title: pick(
                    language,
                    "Restaurantes Portugueses",
                    "Portuguese Restaurants",
                ),
                description: pick(
                    language,
                    "Descobre restaurantes portugueses autênticos no diretório da comunidade.",
                    "Discover authentic Portuguese restaurants in the community directory.",
                ),
                link: Some("/directory?category=restaurants".to_string()),
                priority: Priority::High,
                cultural_relevance: 0.8,
            });
            suggestions.push(Suggestion {
                kind: SuggestionKind::Event,
                title: pick(
                    language,
                    "Aula de Cozinha Portuguesa",
                    "Portuguese Cooking Class",
                ),
                description: pick(
                    language,
                    "Aprende a fazer os pratos tradicionais com quem os conhece de casa.",
                    "Learn to make the traditional dishes from people who grew up with them.",
                ),
                link: Some("/events?type=cooking".to_string()),
                priority: Priority::Medium,
                cultural_relevance: 0.7,
            });
        }

        // Regra 3: interesse na língua, explícito ou no perfil
        let learning = caller.language_proficiency == Some(LanguageProficiency::Learning);
        if context.topic == CulturalTopic::Language || learning {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Language,
                title: pick(language, "Intercâmbio de Língua", "Language Exchange"),
                description: pick(
                    language,
                    "Pratica português com falantes nativos da comunidade.",
                    "Practice Portuguese with native speakers from the community.",
                ),
                link: Some("/language-exchange".to_string()),
                priority: Priority::High,
                cultural_relevance: 0.8,
            });
        }

        // Regra 4: negócios pede rede de contactos
        if context.topic == CulturalTopic::Business {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Community,
                title: pick(
                    language,
                    "Networking Empresarial Português",
                    "Portuguese Business Networking",
                ),
                description: pick(
                    language,
                    "Liga-te a empresários e profissionais portugueses da tua zona.",
                    "Connect with Portuguese entrepreneurs and professionals in your area.",
                ),
                link: Some("/business-networking".to_string()),
                priority: Priority::High,
                cultural_relevance: 0.8,
            });
        }

        // Regra 5: herança cultural pede o calendário de eventos
        if tone.heritage > 0.4 {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Event,
                title: pick(
                    language,
                    "Calendário de Eventos Culturais",
                    "Cultural Events Calendar",
                ),
                description: pick(
                    language,
                    "Festivais, fado ao vivo e celebrações tradicionais da comunidade.",
                    "Festivals, live fado and traditional celebrations from the community.",
                ),
                link: Some("/cultural-calendar".to_string()),
                priority: Priority::Medium,
                cultural_relevance: 0.9,
            });
        }

        // ─── Fase 2: ordenação estável por score decrescente ─────
        suggestions.sort_by(|a, b| b.score().total_cmp(&a.score()));

        // ─── Fase 3: corte ───────────────────────────────────────
        suggestions.truncate(MAX_SUGGESTIONS);

        tracing::debug!(
            count = suggestions.len(),
            topic = ?context.topic,
            saudade = tone.saudade,
            heritage = tone.heritage,
            "sugestões ordenadas"
        );

        suggestions
    }
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// Seleciona a variante de língua de um par de textos.
fn pick(language: Language, pt: &str, en: &str) -> String {
    match language {
        Language::Pt => pt.to_string(),
        Language::En => en.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PortugueseRegion;

    fn neutral_inputs() -> (CulturalContext, EmotionalTone, CallerContext) {
        (
            CulturalContext::general_diaspora(),
            EmotionalTone::neutral(),
            CallerContext::default(),
        )
    }

    // ─── Emissão ─────────────────────────────────────────────

    /// Sem condições ativas, a lista é vazia.
    #[test]
    fn test_no_conditions_yields_empty() {
        let (context, tone, caller) = neutral_inputs();
        let ranker = SuggestionRanker::new();
        let suggestions = ranker.rank(&context, &tone, &caller, Language::Pt);
        assert!(suggestions.is_empty());
    }

    /// Saudade alta emite o encontro da comunidade em primeiro lugar.
    #[test]
    fn test_saudade_emits_meetup() {
        let (context, mut tone, caller) = neutral_inputs();
        tone.saudade = 0.8;
        let suggestions =
            SuggestionRanker::new().rank(&context, &tone, &caller, Language::Pt);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Community);
        assert_eq!(
            suggestions[0].link.as_deref(),
            Some("/events/?category=cultural")
        );
    }

    /// O tópico de cozinha emite duas sugestões distintas.
    #[test]
    fn test_cuisine_emits_two() {
        let (mut context, tone, caller) = neutral_inputs();
        context.topic = CulturalTopic::Cuisine;
        let suggestions =
            SuggestionRanker::new().rank(&context, &tone, &caller, Language::En);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].kind, SuggestionKind::Business);
        assert_eq!(suggestions[1].kind, SuggestionKind::Event);
    }

    /// A proficiência Learning ativa o intercâmbio mesmo sem tópico de língua.
    #[test]
    fn test_learning_proficiency_emits_exchange() {
        let (context, tone, mut caller) = neutral_inputs();
        caller.language_proficiency = Some(LanguageProficiency::Learning);
        let suggestions =
            SuggestionRanker::new().rank(&context, &tone, &caller, Language::Pt);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Language);
    }

    // ─── Ordenação e corte ───────────────────────────────────

    /// Com as cinco regras ativas, o corte devolve exatamente 4 e a aula
    /// de cozinha (score mais baixo, 2.7) é a descartada.
    #[test]
    fn test_cap_keeps_best_four() {
        let mut context = CulturalContext::general_diaspora();
        context.topic = CulturalTopic::Cuisine;
        let mut tone = EmotionalTone::neutral();
        tone.saudade = 0.8;
        tone.heritage = 0.6;
        let mut caller = CallerContext::default();
        caller.language_proficiency = Some(LanguageProficiency::Learning);

        let suggestions =
            SuggestionRanker::new().rank(&context, &tone, &caller, Language::Pt);

        // candidatos: encontro 3.9, restaurantes 3.8, intercâmbio 3.8,
        // calendário 2.9, aula 2.7 — a aula cai no corte
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[0].link.as_deref(), Some("/events/?category=cultural"));
        assert!(suggestions
            .iter()
            .all(|s| s.link.as_deref() != Some("/events?type=cooking")));
    }

    /// A ordenação é decrescente por score.
    #[test]
    fn test_sorted_descending() {
        let mut context = CulturalContext::general_diaspora();
        context.topic = CulturalTopic::Cuisine;
        let mut tone = EmotionalTone::neutral();
        tone.saudade = 0.8;
        let suggestions = SuggestionRanker::new().rank(
            &context,
            &tone,
            &CallerContext::default(),
            Language::Pt,
        );
        for pair in suggestions.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }

    /// Empates de score mantêm a ordem de emissão (sort estável).
    #[test]
    fn test_stable_tie_break_preserves_emission_order() {
        let mut context = CulturalContext::general_diaspora();
        context.topic = CulturalTopic::Cuisine;
        let (_, tone, mut caller) = neutral_inputs();
        caller.language_proficiency = Some(LanguageProficiency::Learning);

        let suggestions =
            SuggestionRanker::new().rank(&context, &tone, &caller, Language::Pt);

        // restaurantes (3.8) e intercâmbio (3.8) empatam; restaurantes
        // foi emitido primeiro e fica à frente
        assert_eq!(suggestions[0].kind, SuggestionKind::Business);
        assert_eq!(suggestions[1].kind, SuggestionKind::Language);
        assert_eq!(suggestions[2].kind, SuggestionKind::Event);
    }

    // ─── Determinismo e línguas ──────────────────────────────

    /// A mesma entrada produz sempre a mesma lista.
    #[test]
    fn test_rank_is_deterministic() {
        let mut context = CulturalContext::general_diaspora();
        context.topic = CulturalTopic::Business;
        context.region = PortugueseRegion::North;
        let (_, tone, caller) = neutral_inputs();
        let ranker = SuggestionRanker::new();
        let a = ranker.rank(&context, &tone, &caller, Language::En);
        let b = ranker.rank(&context, &tone, &caller, Language::En);
        assert_eq!(a, b);
    }

    /// Os textos seguem a língua pedida.
    #[test]
    fn test_language_variants() {
        let mut context = CulturalContext::general_diaspora();
        context.topic = CulturalTopic::Business;
        let (_, tone, caller) = neutral_inputs();
        let ranker = SuggestionRanker::new();
        let pt = ranker.rank(&context, &tone, &caller, Language::Pt);
        let en = ranker.rank(&context, &tone, &caller, Language::En);
        assert!(pt[0].title.contains("Empresarial"));
        assert!(en[0].title.contains("Business"));
    }
}
