//! # Detetor de Tom Emocional — A Leitura da Saudade
//!
//! O [`ToneDetector`] transforma uma mensagem de texto livre num
//! [`EmotionalTone`] de cinco dimensões. A deteção é puramente lexical:
//! grupos de keywords bilingues (pt/en) testados por contenção de
//! substring sobre o texto normalizado.
//!
//! ## Grupos de Keywords e Pesos
//!
//! | Grupo | Dimensões afetadas | Peso por hit |
//! |-------|--------------------|--------------|
//! | saudade | saudade, nostalgia | +0.30, +0.15 |
//! | comunidade | community, hope | +0.25, +0.10 |
//! | herança | heritage, hope | +0.30, +0.15 |
//!
//! O peso do grupo de saudade garante que uma expressão direta como
//! "tenho saudades de X" (dois hits por substring: "saudades" e
//! "saudade") ultrapassa o limiar 0.5 que dá precedência à resposta
//! empática.
//!
//! Nenhum grupo mapeia para exatamente uma dimensão — "ter saudades de
//! casa" e "querer comunidade" são sinais correlacionados, e os pesos
//! cruzados modelam essa correlação.
//!
//! ## Regras Contextuais
//!
//! Depois da passagem por keywords correm duas regras adicionais:
//!
//! - marcador de solidão ("sozinho"/"alone") → saudade +0.3, community +0.2
//! - marcador de celebração ("festa"/"celebration") → hope +0.4, community +0.3
//!
//! ## Clamp Final
//!
//! A evidência acumula aditivamente e o clamp para [0, 1] acontece uma
//! única vez, no fim — uma mensagem adversarial que repita keywords
//! centenas de vezes nunca reporta uma dimensão acima de 1.0.

use crate::core::{EmotionalTone, Language};

use super::normalize;

/// Keywords de saudade/longing — cada hit soma +0.3 saudade, +0.15 nostalgia.
///
/// Metade portuguesa e metade inglesa na mesma tabela; a correspondência
/// é por substring, por isso "saudades" também acerta em "saudade".
const SAUDADE_KEYWORDS: &[&str] = &[
    // Português
    "saudades",
    "saudade",
    "falta",
    "nostalgia",
    "longe",
    "casa",
    "família",
    "terra",
    "portugal",
    "pátria",
    "raízes",
    "origem",
    "coração",
    // Inglês
    "miss",
    "missing",
    "homesick",
    "homeland",
    "roots",
    "family",
    "heritage",
    "belong",
    "longing",
];

/// Keywords de comunidade — cada hit soma +0.25 community, +0.1 hope.
const COMMUNITY_KEYWORDS: &[&str] = &[
    "comunidade",
    "amigos",
    "vizinhos",
    "convívio",
    "união",
    "community",
    "friends",
    "neighbors",
    "gathering",
    "belonging",
];

/// Keywords de herança cultural — cada hit soma +0.3 heritage, +0.15 hope.
const HERITAGE_KEYWORDS: &[&str] = &[
    "tradição",
    "cultura",
    "costumes",
    "herança",
    "história",
    "tradition",
    "culture",
    "customs",
    "heritage",
    "history",
];

/// Detetor de tom emocional baseado em keywords bilingues.
///
/// Struct sem estado (unit struct) — as tabelas de keywords são
/// constantes do módulo. A deteção é uma função pura de
/// `(mensagem, língua)`.
pub struct ToneDetector;

impl ToneDetector {
    /// Cria um novo detetor.
    pub fn new() -> Self {
        Self
    }

    /// Deteta o vetor emocional de uma mensagem.
    ///
    /// ## Algoritmo (3 fases)
    ///
    /// 1. **Keywords**: para cada grupo, testa contenção de substring
    ///    de cada keyword no texto normalizado e acumula os pesos.
    /// 2. **Regras contextuais**: marcadores de solidão e de celebração
    ///    ajustam dimensões correlacionadas.
    /// 3. **Clamp**: todas as dimensões são limitadas a [0, 1].
    ///
    /// A ausência de qualquer keyword produz o vetor zero — afeto
    /// neutro, um resultado válido e não um erro.
    ///
    /// # Parâmetros
    ///
    /// - `message` — texto livre do utilizador
    /// - `language` — língua do turno (as tabelas são bilingues; a
    ///   língua serve apenas para o registo estruturado)
    pub fn detect(&self, message: &str, language: Language) -> EmotionalTone {
        let text = normalize(message);
        let mut tone = EmotionalTone::neutral();

        // ─── Fase 1: grupos de keywords ──────────────────────────
        for keyword in SAUDADE_KEYWORDS {
            if text.contains(keyword) {
                tone.saudade += 0.3;
                tone.nostalgia += 0.15;
            }
        }

        for keyword in COMMUNITY_KEYWORDS {
            if text.contains(keyword) {
                tone.community += 0.25;
                tone.hope += 0.1;
            }
        }

        for keyword in HERITAGE_KEYWORDS {
            if text.contains(keyword) {
                tone.heritage += 0.3;
                tone.hope += 0.15;
            }
        }

        // ─── Fase 2: regras contextuais ──────────────────────────
        // Solidão intensifica a saudade e o desejo de comunidade
        if text.contains("sozinho") || text.contains("alone") {
            tone.saudade += 0.3;
            tone.community += 0.2;
        }

        // Celebração sobe a esperança e a dimensão comunitária
        if text.contains("festa") || text.contains("celebration") {
            tone.hope += 0.4;
            tone.community += 0.3;
        }

        // ─── Fase 3: clamp final ─────────────────────────────────
        let tone = tone.clamped();

        tracing::debug!(
            language = %language,
            saudade = tone.saudade,
            nostalgia = tone.nostalgia,
            hope = tone.hope,
            community = tone.community,
            heritage = tone.heritage,
            "tom emocional detetado"
        );

        tone
    }
}

impl Default for ToneDetector {
    fn default() -> Self {
        Self::new()
    }
}
