//! # CulturalContext — Classificação Cultural da Mensagem
//!
//! Um [`CulturalContext`] descreve **de que fala** uma mensagem em termos
//! culturais: a região portuguesa implicada, o tópico cultural dominante,
//! as áreas de especialidade relevantes e a confiança da classificação.
//!
//! ## Estrutura
//!
//! ```text
//! CulturalContext {
//!     region: North,                      ← detetada por "porto", "minho"...
//!     topic: Cuisine,                     ← detetado por "receita", "comida"...
//!     expertise: [PortugueseCuisine],     ← acompanha o tópico selecionado
//!     confidence: 1.0,                    ← 0.5 base + 0.3 região + 0.4 tópico (clamp)
//! }
//! ```
//!
//! ## Confiança Aditiva
//!
//! A confiança parte de 0.5 (classificação por defeito) e sobe com cada
//! faceta reconhecida — região (+0.3) e tópico (+0.3 ou +0.4). O total é
//! limitado a [0, 1]. Uma mensagem que nomeia região **e** tópico termina
//! com confiança mais alta do que uma que só nomeia um deles.

use serde::{Deserialize, Serialize};

/// Região do mundo lusófono associada a uma mensagem ou utilizador.
///
/// Cobre as regiões continentais e insulares de Portugal, os grandes
/// países lusófonos e as comunidades da diáspora. O valor por defeito
/// da classificação é [`DiasporaUk`](PortugueseRegion::DiasporaUk) —
/// a comunidade que o assistente serve em primeiro lugar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortugueseRegion {
    /// Norte de Portugal — Porto, Minho, Trás-os-Montes.
    North,
    /// Centro — Coimbra, Beiras.
    Center,
    /// Sul — Alentejo e Algarve.
    South,
    /// Lisboa e Vale do Tejo.
    Lisbon,
    /// Porto e área metropolitana (quando referido como cidade, não região).
    Porto,
    /// Açores.
    Azores,
    /// Madeira.
    Madeira,
    /// Brasil.
    Brazil,
    /// Angola.
    Angola,
    /// Moçambique.
    Mozambique,
    /// Diáspora no Reino Unido.
    DiasporaUk,
    /// Diáspora nos Estados Unidos.
    DiasporaUsa,
    /// Diáspora em França.
    DiasporaFrance,
    /// Outras comunidades da diáspora.
    DiasporaOther,
}

impl PortugueseRegion {
    /// Nome legível da região, em português.
    pub fn label(&self) -> &'static str {
        match self {
            PortugueseRegion::North => "Norte",
            PortugueseRegion::Center => "Centro",
            PortugueseRegion::South => "Sul",
            PortugueseRegion::Lisbon => "Lisboa",
            PortugueseRegion::Porto => "Porto",
            PortugueseRegion::Azores => "Açores",
            PortugueseRegion::Madeira => "Madeira",
            PortugueseRegion::Brazil => "Brasil",
            PortugueseRegion::Angola => "Angola",
            PortugueseRegion::Mozambique => "Moçambique",
            PortugueseRegion::DiasporaUk => "Diáspora (Reino Unido)",
            PortugueseRegion::DiasporaUsa => "Diáspora (EUA)",
            PortugueseRegion::DiasporaFrance => "Diáspora (França)",
            PortugueseRegion::DiasporaOther => "Diáspora (outros)",
        }
    }
}

/// Tópico cultural dominante de uma mensagem.
///
/// O classificador seleciona **um** tópico por mensagem (primeiro grupo
/// de keywords que corresponder, em ordem fixa de prioridade). O valor
/// por defeito é [`Community`](CulturalTopic::Community).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CulturalTopic {
    /// História de Portugal e do mundo lusófono.
    History,
    /// Tradições e costumes.
    Traditions,
    /// Gastronomia portuguesa.
    Cuisine,
    /// Língua portuguesa e aprendizagem.
    Language,
    /// Fado e música portuguesa.
    Fado,
    /// Literatura lusófona.
    Literature,
    /// Festas e festivais.
    Festivals,
    /// Desporto.
    Sports,
    /// Religião e práticas religiosas.
    Religion,
    /// Arte portuguesa.
    Art,
    /// Família e tradições familiares.
    Family,
    /// Vida em comunidade — o tópico por defeito.
    Community,
    /// Experiência da diáspora.
    Diaspora,
    /// Negócios e cultura empresarial.
    Business,
    /// Educação.
    Education,
}

/// Área de especialidade cultural associada a um tópico classificado.
///
/// As áreas acompanham o tópico selecionado: quando o classificador
/// escolhe `Cuisine`, acrescenta `PortugueseCuisine` ao conjunto de
/// especialidades da mensagem. O conjunto nunca contém duplicados.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseArea {
    /// História portuguesa — descobrimentos, 25 de Abril, adesão à CEE.
    PortugueseHistory,
    /// Culturas regionais de Portugal.
    RegionalCultures,
    /// Gastronomia portuguesa.
    PortugueseCuisine,
    /// Fado e património musical.
    FadoMusic,
    /// Aprendizagem da língua portuguesa.
    LanguageLearning,
    /// Apoio à diáspora.
    DiasporaSupport,
    /// Cultura empresarial lusófona.
    BusinessCulture,
    /// Tradições familiares.
    FamilyTraditions,
    /// Práticas religiosas.
    ReligiousPractices,
    /// Comunidade portuguesa no Reino Unido.
    UkPortugueseCommunity,
    /// Apoio à imigração.
    ImmigrationSupport,
    /// Eventos culturais.
    CulturalEvents,
}

/// Resultado da classificação cultural de uma mensagem.
///
/// Produzido pelo classificador de contexto e anexado às mensagens do
/// assistente. A ausência de marcadores na mensagem produz a classificação
/// por defeito (diáspora UK, comunidade, confiança 0.5) — um resultado
/// válido de baixa confiança, nunca um erro.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CulturalContext {
    /// Região detetada na mensagem (ou o defeito, diáspora UK).
    pub region: PortugueseRegion,

    /// Tópico cultural dominante (ou o defeito, comunidade).
    pub topic: CulturalTopic,

    /// Áreas de especialidade acrescentadas pelo tópico selecionado.
    /// Sem duplicados — cada área aparece no máximo uma vez.
    pub expertise: Vec<ExpertiseArea>,

    /// Confiança da classificação, em [0, 1]. Aditiva por faceta, com
    /// clamp no final.
    pub confidence: f32,
}

impl CulturalContext {
    /// Classificação por defeito: diáspora UK, comunidade, confiança 0.5.
    ///
    /// É o ponto de partida do classificador e também o resultado para
    /// mensagens sem nenhum marcador regional ou temático.
    pub fn general_diaspora() -> Self {
        Self {
            region: PortugueseRegion::DiasporaUk,
            topic: CulturalTopic::Community,
            expertise: Vec::new(),
            confidence: 0.5,
        }
    }

    /// Contexto fixo "comunidade geral" usado na mensagem de boas-vindas.
    ///
    /// Região do utilizador (se conhecida) ou diáspora UK, tópico
    /// comunidade, especialidades de acolhimento, confiança 1.0.
    pub fn welcoming(region: Option<PortugueseRegion>) -> Self {
        Self {
            region: region.unwrap_or(PortugueseRegion::DiasporaUk),
            topic: CulturalTopic::Community,
            expertise: vec![
                ExpertiseArea::UkPortugueseCommunity,
                ExpertiseArea::CulturalEvents,
                ExpertiseArea::DiasporaSupport,
            ],
            confidence: 1.0,
        }
    }

    /// Acrescenta uma área de especialidade, ignorando duplicados.
    pub fn add_expertise(&mut self, area: ExpertiseArea) {
        if !self.expertise.contains(&area) {
            self.expertise.push(area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A classificação por defeito tem os valores documentados.
    #[test]
    fn test_general_diaspora_defaults() {
        let ctx = CulturalContext::general_diaspora();
        assert_eq!(ctx.region, PortugueseRegion::DiasporaUk);
        assert_eq!(ctx.topic, CulturalTopic::Community);
        assert!(ctx.expertise.is_empty());
        assert_eq!(ctx.confidence, 0.5);
    }

    /// add_expertise nunca introduz duplicados no conjunto.
    #[test]
    fn test_add_expertise_dedup() {
        let mut ctx = CulturalContext::general_diaspora();
        ctx.add_expertise(ExpertiseArea::FadoMusic);
        ctx.add_expertise(ExpertiseArea::FadoMusic);
        ctx.add_expertise(ExpertiseArea::PortugueseCuisine);
        assert_eq!(ctx.expertise.len(), 2);
    }

    /// O contexto de boas-vindas respeita a região do utilizador quando dada.
    #[test]
    fn test_welcoming_region_override() {
        let ctx = CulturalContext::welcoming(Some(PortugueseRegion::Azores));
        assert_eq!(ctx.region, PortugueseRegion::Azores);
        assert_eq!(ctx.confidence, 1.0);

        let ctx = CulturalContext::welcoming(None);
        assert_eq!(ctx.region, PortugueseRegion::DiasporaUk);
    }

    /// Os enums serializam em snake_case para o snapshot JSON.
    #[test]
    fn test_region_serde_snake_case() {
        let json = serde_json::to_string(&PortugueseRegion::DiasporaUk).unwrap();
        assert_eq!(json, "\"diaspora_uk\"");
        let json = serde_json::to_string(&CulturalTopic::Cuisine).unwrap();
        assert_eq!(json, "\"cuisine\"");
        let json = serde_json::to_string(&ExpertiseArea::FadoMusic).unwrap();
        assert_eq!(json, "\"fado_music\"");
    }
}
