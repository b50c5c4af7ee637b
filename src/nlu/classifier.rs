//! # Classificador de Contexto Cultural
//!
//! O [`ContextClassifier`] infere de que fala uma mensagem em termos
//! culturais: **região** portuguesa implicada e **tópico** dominante,
//! com a confiança correspondente.
//!
//! ## Duas Passagens Independentes
//!
//! ```text
//! texto normalizado
//!   ├── passagem de região (prioridade fixa, primeiro grupo ganha, +0.3)
//!   │     norte → centro → sul → lisboa → açores → madeira
//!   └── passagem de tópico (prioridade fixa, primeiro grupo ganha)
//!         cozinha (+0.4) → fado (+0.4) → história (+0.4)
//!         → língua (+0.4) → festas (+0.3) → negócios (+0.3)
//! ```
//!
//! A ordem de prioridade é **contrato**: uma mensagem que nomeia duas
//! regiões fica com a que aparece primeiro na lista de grupos (não a
//! última encontrada no texto). O mesmo vale para tópicos.
//!
//! ## Confiança
//!
//! Parte de 0.5 e acumula por faceta reconhecida; o total é limitado a
//! [0, 1]. Uma mensagem sem qualquer marcador devolve a classificação
//! por defeito — diáspora UK, comunidade, confiança 0.5 — que é um
//! resultado válido de baixa confiança, nunca um erro.

use crate::core::{CulturalContext, CulturalTopic, ExpertiseArea, Language, PortugueseRegion};

use super::normalize;

/// Grupos de keywords regionais, em ordem de prioridade.
///
/// O primeiro grupo com correspondência determina a região. Cada hit
/// de região vale +0.3 de confiança.
const REGION_GROUPS: &[(PortugueseRegion, &[&str])] = &[
    (PortugueseRegion::North, &["norte", "porto", "minho"]),
    (PortugueseRegion::Center, &["centro", "coimbra", "beira"]),
    (PortugueseRegion::South, &["sul", "alentejo", "algarve"]),
    (PortugueseRegion::Lisbon, &["lisboa", "lisbon"]),
    (PortugueseRegion::Azores, &["açores", "azores"]),
    (PortugueseRegion::Madeira, &["madeira"]),
];

/// Grupos de keywords de tópico, em ordem de prioridade.
///
/// O primeiro grupo com correspondência determina o tópico, acrescenta
/// a especialidade associada e soma o incremento de confiança indicado.
const TOPIC_GROUPS: &[(CulturalTopic, ExpertiseArea, f32, &[&str])] = &[
    (
        CulturalTopic::Cuisine,
        ExpertiseArea::PortugueseCuisine,
        0.4,
        &["comida", "food", "receita", "recipe"],
    ),
    (
        CulturalTopic::Fado,
        ExpertiseArea::FadoMusic,
        0.4,
        &["fado", "música", "music"],
    ),
    (
        CulturalTopic::History,
        ExpertiseArea::PortugueseHistory,
        0.4,
        &["história", "history"],
    ),
    (
        CulturalTopic::Language,
        ExpertiseArea::LanguageLearning,
        0.4,
        &["língua", "language", "portuguese"],
    ),
    (
        CulturalTopic::Festivals,
        ExpertiseArea::CulturalEvents,
        0.3,
        &["evento", "event", "festa"],
    ),
    (
        CulturalTopic::Business,
        ExpertiseArea::BusinessCulture,
        0.3,
        &["negócio", "business", "trabalho"],
    ),
];

/// Classificador de contexto cultural por grupos de keywords priorizados.
///
/// Struct sem estado — as tabelas são constantes do módulo e a
/// classificação é uma função pura de `(mensagem, língua)`.
pub struct ContextClassifier;

impl ContextClassifier {
    /// Cria um novo classificador.
    pub fn new() -> Self {
        Self
    }

    /// Classifica o contexto cultural de uma mensagem.
    ///
    /// Corre as duas passagens (região e tópico) de forma independente
    /// sobre o texto normalizado, acumula a confiança e limita-a a
    /// [0, 1] no fim.
    ///
    /// # Retorno
    ///
    /// Sempre um [`CulturalContext`] válido — na pior das hipóteses, a
    /// classificação por defeito com confiança 0.5.
    pub fn classify(&self, message: &str, language: Language) -> CulturalContext {
        let text = normalize(message);
        let mut context = CulturalContext::general_diaspora();

        // ─── Passagem 1: região (primeiro grupo ganha) ───────────
        for (region, keywords) in REGION_GROUPS {
            if keywords.iter().any(|kw| text.contains(kw)) {
                context.region = *region;
                context.confidence += 0.3;
                break;
            }
        }

        // ─── Passagem 2: tópico (primeiro grupo ganha) ───────────
        for (topic, expertise, increment, keywords) in TOPIC_GROUPS {
            if keywords.iter().any(|kw| text.contains(kw)) {
                context.topic = *topic;
                context.add_expertise(*expertise);
                context.confidence += increment;
                break;
            }
        }

        context.confidence = context.confidence.clamp(0.0, 1.0);

        tracing::debug!(
            language = %language,
            region = ?context.region,
            topic = ?context.topic,
            confidence = context.confidence,
            "contexto cultural classificado"
        );

        context
    }
}

impl Default for ContextClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── Defeitos ────────────────────────────────────────────

    /// Sem marcadores, devolve a classificação por defeito.
    #[test]
    fn test_defaults_without_markers() {
        let classifier = ContextClassifier::new();
        let ctx = classifier.classify("olá, tudo bem?", Language::Pt);
        assert_eq!(ctx.region, PortugueseRegion::DiasporaUk);
        assert_eq!(ctx.topic, CulturalTopic::Community);
        assert!(ctx.expertise.is_empty());
        assert_eq!(ctx.confidence, 0.5);
    }

    /// A mesma entrada produz sempre a mesma classificação.
    #[test]
    fn test_classify_is_deterministic() {
        let classifier = ContextClassifier::new();
        let a = classifier.classify("receitas do norte", Language::Pt);
        let b = classifier.classify("receitas do norte", Language::Pt);
        assert_eq!(a, b);
    }

    // ─── Prioridade de região ────────────────────────────────

    /// Mensagem com duas regiões fica com a de maior prioridade.
    #[test]
    fn test_region_priority_tie_break() {
        let classifier = ContextClassifier::new();
        let ctx = classifier.classify("norte e também algarve", Language::Pt);
        assert_eq!(ctx.region, PortugueseRegion::North);
    }

    /// Cada região é reconhecida pelas suas keywords.
    #[test]
    fn test_region_detection() {
        let classifier = ContextClassifier::new();
        let cases = [
            ("sou do minho", PortugueseRegion::North),
            ("estudei em coimbra", PortugueseRegion::Center),
            ("férias no alentejo", PortugueseRegion::South),
            ("I live near lisbon", PortugueseRegion::Lisbon),
            ("os açores são lindos", PortugueseRegion::Azores),
            ("a madeira tem levadas", PortugueseRegion::Madeira),
        ];
        for (text, expected) in cases {
            let ctx = classifier.classify(text, Language::Pt);
            assert_eq!(ctx.region, expected, "texto: {text}");
        }
    }

    // ─── Prioridade de tópico ────────────────────────────────

    /// Cozinha vem antes de fado na ordem de prioridade.
    #[test]
    fn test_topic_priority_cuisine_over_fado() {
        let classifier = ContextClassifier::new();
        let ctx = classifier.classify("uma receita ao som de fado", Language::Pt);
        assert_eq!(ctx.topic, CulturalTopic::Cuisine);
        assert_eq!(ctx.expertise, vec![ExpertiseArea::PortugueseCuisine]);
    }

    /// O tópico selecionado acrescenta a especialidade correspondente.
    #[test]
    fn test_topic_sets_expertise() {
        let classifier = ContextClassifier::new();
        let ctx = classifier.classify("quero aprender a língua", Language::Pt);
        assert_eq!(ctx.topic, CulturalTopic::Language);
        assert_eq!(ctx.expertise, vec![ExpertiseArea::LanguageLearning]);
    }

    // ─── Confiança ───────────────────────────────────────────

    /// Região + tópico acumulam mais confiança do que uma faceta só.
    #[test]
    fn test_confidence_is_additive() {
        let classifier = ContextClassifier::new();
        let both = classifier.classify("receitas do porto", Language::Pt);
        let topic_only = classifier.classify("receitas novas", Language::Pt);
        assert!(both.confidence > topic_only.confidence);
        // 0.5 base + 0.3 região + 0.4 tópico, clamp a 1.0
        assert_eq!(both.confidence, 1.0);
        assert!((topic_only.confidence - 0.9).abs() < 1e-6);
    }

    /// A confiança nunca passa de 1.0.
    #[test]
    fn test_confidence_clamped() {
        let classifier = ContextClassifier::new();
        let ctx = classifier.classify(
            "comida do norte, história de lisboa, eventos de fado",
            Language::Pt,
        );
        assert!(ctx.confidence <= 1.0);
    }
}
