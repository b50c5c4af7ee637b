//! # Pipeline NLU — Análise Determinística de Mensagens
//!
//! Este módulo agrupa os dois analisadores do LusoBot e a normalização
//! de texto que ambos partilham:
//!
//! - [`ToneDetector`] — deteta o vetor emocional de cinco dimensões
//! - [`ContextClassifier`] — classifica região, tópico e especialidades
//!
//! ## Pipeline de Análise
//!
//! ```text
//! Mensagem do utilizador
//!   ├── normalize() — NFC + minúsculas
//!   ├── ToneDetector::detect()        → EmotionalTone
//!   └── ContextClassifier::classify() → CulturalContext
//!         ↓
//! NluResult { tone, context }
//! ```
//!
//! Os dois analisadores são **funções puras** sem estado partilhado —
//! podem correr em paralelo para a mesma mensagem e entre sessões sem
//! qualquer coordenação. Toda a correspondência é por contenção de
//! substring sobre o texto normalizado; não há modelo estatístico.

use unicode_normalization::UnicodeNormalization;

use crate::core::{CulturalContext, EmotionalTone, Language};

/// Sub-módulo com o detetor de tom emocional.
pub mod detector;

/// Sub-módulo com o classificador de contexto cultural.
pub mod classifier;

pub use classifier::ContextClassifier;
pub use detector::ToneDetector;

/// Resultado completo da análise NLU de uma mensagem.
#[derive(Clone, Debug)]
pub struct NluResult {
    /// Vetor emocional detetado.
    pub tone: EmotionalTone,
    /// Classificação cultural.
    pub context: CulturalContext,
}

/// Pipeline NLU — fachada que agrega os dois analisadores.
pub struct NluPipeline {
    detector: ToneDetector,
    classifier: ContextClassifier,
}

impl NluPipeline {
    /// Cria o pipeline com os analisadores por defeito.
    pub fn new() -> Self {
        Self {
            detector: ToneDetector::new(),
            classifier: ContextClassifier::new(),
        }
    }

    /// Analisa uma mensagem: deteta o tom emocional e classifica o
    /// contexto cultural.
    ///
    /// Determinístico — a mesma mensagem produz sempre o mesmo resultado.
    pub fn analyze(&self, message: &str, language: Language) -> NluResult {
        let tone = self.detector.detect(message, language);
        let context = self.classifier.classify(message, language);
        NluResult { tone, context }
    }
}

impl Default for NluPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Normaliza texto para correspondência de keywords.
///
/// Aplica normalização Unicode **NFC** e converte para minúsculas.
/// A forma NFC garante que "família" escrito com acento composto ou
/// decomposto corresponde à mesma keyword.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CulturalTopic, PortugueseRegion};

    /// NFC faz corresponder acentos compostos e decompostos.
    #[test]
    fn test_normalize_nfc_composition() {
        // "família" com 'í' decomposto (i + acento combinante)
        let decomposed = "fami\u{0301}lia";
        assert_eq!(normalize(decomposed), "família");
    }

    /// A normalização baixa a capitalização.
    #[test]
    fn test_normalize_lowercase() {
        assert_eq!(normalize("SAUDADE de Portugal"), "saudade de portugal");
    }

    /// O pipeline devolve tom e contexto coerentes para a mesma mensagem.
    #[test]
    fn test_pipeline_analyze() {
        let nlu = NluPipeline::new();
        let result = nlu.analyze("Adoro fado e tenho saudades de Lisboa", Language::Pt);
        assert!(result.tone.saudade > 0.0);
        assert_eq!(result.context.region, PortugueseRegion::Lisbon);
        assert_eq!(result.context.topic, CulturalTopic::Fado);
    }
}
