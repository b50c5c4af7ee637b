//! # EmotionalTone — Vetor Emocional da Mensagem
//!
//! Um [`EmotionalTone`] representa o **perfil emocional** de uma mensagem
//! em cinco dimensões independentes, cada uma no intervalo fechado [0, 1].
//!
//! ## As Cinco Dimensões
//!
//! | Dimensão | Significado | Exemplo de gatilho |
//! |----------|-------------|--------------------|
//! | `saudade` | Longing português — falta de casa, da terra | "tenho saudades de Portugal" |
//! | `nostalgia` | Memória afetiva do passado | "lembro-me da minha infância" |
//! | `hope` | Esperança, expectativa positiva | "vai correr tudo bem" |
//! | `community` | Desejo de pertença e convívio | "quero conhecer a comunidade" |
//! | `heritage` | Orgulho na herança cultural | "as nossas tradições" |
//!
//! ## Acumulação e Clamp
//!
//! A evidência acumula **aditivamente**: cada keyword detetada soma um peso
//! fixo à(s) dimensão(ões) associada(s). O clamp para [0, 1] acontece uma
//! única vez, no final da acumulação — assim uma mensagem com dezenas de
//! keywords repetidas nunca reporta valores acima de 1.0.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lusobot::core::EmotionalTone;
//!
//! let mut tone = EmotionalTone::neutral();
//! tone.saudade += 0.2;
//! tone.saudade += 0.2;
//! tone.nostalgia += 0.15;
//! let tone = tone.clamped();
//! assert!(tone.saudade <= 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// Vetor emocional de cinco dimensões, cada uma em [0, 1].
///
/// Produzido pelo detetor de tom emocional e anexado a cada mensagem
/// do assistente. O vetor **zero** é um resultado válido — significa
/// "afeto neutro", não erro.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionalTone {
    /// Saudade — o longing culturalmente específico português.
    pub saudade: f32,

    /// Nostalgia — memória afetiva, fortemente correlacionada com saudade.
    pub nostalgia: f32,

    /// Esperança — expectativa positiva, celebração.
    pub hope: f32,

    /// Comunidade — desejo de pertença, convívio, união.
    pub community: f32,

    /// Herança — ligação a tradições, costumes, história.
    pub heritage: f32,
}

impl EmotionalTone {
    /// Vetor emocional neutro — todas as dimensões a zero.
    ///
    /// É o ponto de partida da acumulação de evidência e também o
    /// resultado válido para mensagens sem nenhum marcador emocional.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Vetor fixo "calmo e acolhedor" usado na mensagem de boas-vindas
    /// que semeia cada sessão.
    ///
    /// Valores: hope=0.8, community=0.9, heritage=0.7, saudade=0, nostalgia=0.
    pub fn welcoming() -> Self {
        Self {
            saudade: 0.0,
            nostalgia: 0.0,
            hope: 0.8,
            community: 0.9,
            heritage: 0.7,
        }
    }

    /// Retorna uma cópia com todas as dimensões limitadas a [0, 1].
    ///
    /// Chamado uma única vez no final da acumulação de evidência.
    /// Valores negativos nunca ocorrem na prática (os pesos são positivos),
    /// mas o clamp inferior mantém o invariante total.
    pub fn clamped(self) -> Self {
        Self {
            saudade: self.saudade.clamp(0.0, 1.0),
            nostalgia: self.nostalgia.clamp(0.0, 1.0),
            hope: self.hope.clamp(0.0, 1.0),
            community: self.community.clamp(0.0, 1.0),
            heritage: self.heritage.clamp(0.0, 1.0),
        }
    }

    /// Verifica se todas as dimensões estão dentro de [0, 1].
    pub fn is_normalized(&self) -> bool {
        [
            self.saudade,
            self.nostalgia,
            self.hope,
            self.community,
            self.heritage,
        ]
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// O vetor neutro é zero em todas as dimensões e é normalizado.
    #[test]
    fn test_neutral_is_zero() {
        let tone = EmotionalTone::neutral();
        assert_eq!(tone.saudade, 0.0);
        assert_eq!(tone.nostalgia, 0.0);
        assert_eq!(tone.hope, 0.0);
        assert_eq!(tone.community, 0.0);
        assert_eq!(tone.heritage, 0.0);
        assert!(tone.is_normalized());
    }

    /// O clamp limita acumulação excessiva a 1.0 sem afetar as outras dimensões.
    #[test]
    fn test_clamped_caps_at_one() {
        let tone = EmotionalTone {
            saudade: 4.2,
            nostalgia: 0.3,
            hope: 1.5,
            community: 0.0,
            heritage: -0.1,
        }
        .clamped();
        assert_eq!(tone.saudade, 1.0);
        assert_eq!(tone.nostalgia, 0.3);
        assert_eq!(tone.hope, 1.0);
        assert_eq!(tone.heritage, 0.0);
        assert!(tone.is_normalized());
    }

    /// O vetor de boas-vindas tem os valores fixos documentados.
    #[test]
    fn test_welcoming_vector() {
        let tone = EmotionalTone::welcoming();
        assert_eq!(tone.hope, 0.8);
        assert_eq!(tone.community, 0.9);
        assert_eq!(tone.heritage, 0.7);
        assert_eq!(tone.saudade, 0.0);
        assert_eq!(tone.nostalgia, 0.0);
    }
}
