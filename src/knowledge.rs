//! # Base de Conhecimento Cultural — Tabelas Estáticas
//!
//! Este módulo expõe o **corpus cultural imutável** do LusoBot: perfis
//! regionais, gastronomia, fado, expressões idiomáticas e períodos
//! históricos. É pura consulta — sem comportamento, sem efeitos laterais.
//!
//! ## Construção Preguiçosa
//!
//! As tabelas são construídas **uma única vez**, no primeiro acesso, via
//! `once_cell::sync::Lazy`. As consultas subsequentes são leituras baratas
//! de estruturas partilhadas — nunca se reconstrói nada por chamada.
//!
//! ## Contrato de Consulta
//!
//! Todas as consultas por chave devolvem `Option`: chave desconhecida
//! significa "sem detalhe cultural adicional disponível", nunca um erro.
//!
//! | Consulta | Chave | Conteúdo |
//! |----------|-------|----------|
//! | [`region_profile`] | [`PortugueseRegion`] | características, cozinha, tradições, música |
//! | [`staple`] | nome ("bacalhau", "pão", "vinho") | significado e sentido cultural |
//! | [`traditional_dish`] | nome do prato | descrição de uma linha |
//! | [`fado`] | — | essência, tipos, temas, figuras lendárias |
//! | [`idiom`] | expressão ("saudade", "desenrascanço"...) | glosa e uso |
//! | [`history_period`] | chave ("discoveries"...) | período, significado, impacto |

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::PortugueseRegion;

/// Perfil cultural de uma região lusófona.
///
/// Todos os campos são fatias estáticas — o perfil vive no binário e
/// nunca é clonado nas consultas.
#[derive(Debug)]
pub struct RegionProfile {
    /// Traços culturais gerais da região.
    pub characteristics: &'static [&'static str],
    /// Pratos e produtos emblemáticos.
    pub cuisine: &'static [&'static str],
    /// Festas e tradições locais.
    pub traditions: &'static [&'static str],
    /// Património musical.
    pub music: &'static [&'static str],
}

/// Alimento estruturante da gastronomia portuguesa.
#[derive(Debug)]
pub struct Staple {
    /// Significado cultural curto (ex.: «o "fiel amigo"»).
    pub significance: &'static str,
    /// Exemplos, variedades ou regiões associadas.
    pub varieties: &'static [&'static str],
    /// O que o alimento representa na cultura.
    pub cultural_meaning: &'static str,
}

/// Factos sobre o fado — o único registo musical com entrada dedicada.
#[derive(Debug)]
pub struct FadoFacts {
    /// Essência do género.
    pub essence: &'static str,
    /// Tipos de fado.
    pub kinds: &'static [&'static str],
    /// Temas recorrentes.
    pub themes: &'static [&'static str],
    /// Papel cultural (inclui a classificação UNESCO de 2011).
    pub cultural_role: &'static str,
    /// Figuras lendárias.
    pub legendary_figures: &'static [&'static str],
}

/// Expressão idiomática portuguesa com glosa.
#[derive(Debug)]
pub struct Idiom {
    /// Significado/definição da expressão.
    pub meaning: &'static str,
    /// Nota de uso ou importância cultural.
    pub usage: &'static str,
}

/// Período histórico com significado cultural.
#[derive(Debug)]
pub struct HistoryPeriod {
    /// Janela temporal (ex.: "séculos XV–XVI").
    pub period: &'static str,
    /// O que aconteceu e porque importa.
    pub significance: &'static str,
    /// Impacto na identidade cultural.
    pub cultural_impact: &'static str,
}

static REGIONS: Lazy<HashMap<PortugueseRegion, RegionProfile>> = Lazy::new(|| {
    use PortugueseRegion::*;

    let mut map = HashMap::new();
    map.insert(
        North,
        RegionProfile {
            characteristics: &["Tradicional", "Religioso", "Herança rural"],
            cuisine: &["Francesinha", "Caldo verde", "Vinho verde"],
            traditions: &["Festa de São João", "Romarias", "Trabalho comunitário"],
            music: &["Danças folclóricas", "Cantares tradicionais"],
        },
    );
    map.insert(
        Center,
        RegionProfile {
            characteristics: &["Académico", "Histórico", "Equilibrado"],
            cuisine: &["Leitão da Bairrada", "Queijo da Serra", "Ovos moles"],
            traditions: &["Queima das Fitas", "Festa dos Tabuleiros"],
            music: &["Tradições universitárias", "Influência clássica"],
        },
    );
    map.insert(
        South,
        RegionProfile {
            characteristics: &["Acolhedor", "Agrícola", "Influência moura"],
            cuisine: &["Cataplana", "Migas", "Medronho"],
            traditions: &["Cante alentejano", "Apanha da cortiça"],
            music: &["Cante alentejano", "Baladas tradicionais"],
        },
    );
    map.insert(
        Lisbon,
        RegionProfile {
            characteristics: &["Cosmopolita", "Histórica", "Diversa"],
            cuisine: &["Pastéis de nata", "Bacalhau", "Fusão internacional"],
            traditions: &["Santos Populares", "Casas de fado"],
            music: &["Fado", "Música portuguesa moderna"],
        },
    );
    map.insert(
        Porto,
        RegionProfile {
            characteristics: &["Orgulhosa", "Trabalhadora", "Ribeirinha"],
            cuisine: &["Francesinha", "Tripas à moda do Porto", "Vinho do Porto"],
            traditions: &["São João do Porto", "Rabelos no Douro"],
            music: &["Fado do Porto", "Música académica"],
        },
    );
    map.insert(
        Azores,
        RegionProfile {
            characteristics: &["Vida insular", "Ligada à natureza", "Comunitária"],
            cuisine: &["Cozido das Furnas", "Queijo São Jorge", "Linguiça"],
            traditions: &["Festa do Divino Espírito Santo", "Herança baleeira"],
            music: &["Chamarrita", "Cantigas populares"],
        },
    );
    map.insert(
        Madeira,
        RegionProfile {
            characteristics: &["Subtropical", "Turística", "Agrícola"],
            cuisine: &["Espetada", "Bolo de mel", "Poncha"],
            traditions: &["Festa da Flor", "Fogo de artifício de Ano Novo"],
            music: &["Bailinho madeirense", "Tradições folclóricas"],
        },
    );
    map.insert(
        Brazil,
        RegionProfile {
            characteristics: &["Diversidade lusófona", "Alegria", "Escala continental"],
            cuisine: &["Feijoada", "Pão de queijo", "Caipirinha"],
            traditions: &["Carnaval", "Festas juninas"],
            music: &["Samba", "Bossa nova", "MPB"],
        },
    );
    map.insert(
        Angola,
        RegionProfile {
            characteristics: &["Lusofonia africana", "Juventude", "Resiliência"],
            cuisine: &["Muamba de galinha", "Funge", "Calulu"],
            traditions: &["Carnaval de Luanda", "Cerimónias tradicionais"],
            music: &["Semba", "Kizomba", "Kuduro"],
        },
    );
    map.insert(
        Mozambique,
        RegionProfile {
            characteristics: &["Costa índica", "Multicultural", "Hospitaleira"],
            cuisine: &["Frango à zambeziana", "Matapa", "Camarão de Moçambique"],
            traditions: &["Timbila", "Danças makonde"],
            music: &["Marrabenta", "Timbila"],
        },
    );
    map.insert(
        DiasporaUk,
        RegionProfile {
            characteristics: &["Comunidade unida", "Bilingue", "Empreendedora"],
            cuisine: &["Pastelarias portuguesas", "Churrasqueiras", "Mercearias lusas"],
            traditions: &["Festas da comunidade", "Santos Populares em Londres"],
            music: &["Noites de fado", "Folclore das associações"],
        },
    );
    map.insert(
        DiasporaUsa,
        RegionProfile {
            characteristics: &["Raízes açorianas", "Associativismo", "Herança preservada"],
            cuisine: &["Linguiça", "Massa sovada", "Caçoila"],
            traditions: &["Festas do Espírito Santo", "Paradas portuguesas"],
            music: &["Filarmónicas", "Folclore açoriano"],
        },
    );
    map.insert(
        DiasporaFrance,
        RegionProfile {
            characteristics: &["Maior comunidade europeia", "Trabalhadora", "Ligação forte à terra"],
            cuisine: &["Cozinha minhota", "Bacalhau", "Vinho verde"],
            traditions: &["Regresso em agosto", "Festas das associações"],
            music: &["Folclore minhoto", "Concertinas"],
        },
    );
    map.insert(
        DiasporaOther,
        RegionProfile {
            characteristics: &["Espalhada pelo mundo", "Adaptável", "Saudade partilhada"],
            cuisine: &["Bacalhau", "Doçaria conventual", "Petiscos"],
            traditions: &["Associações culturais", "Celebração do 10 de Junho"],
            music: &["Fado", "Folclore regional"],
        },
    );
    map
});

static STAPLES: &[(&str, Staple)] = &[
    (
        "bacalhau",
        Staple {
            significance: "O peixe nacional, o \"fiel amigo\"",
            varieties: &["Mil e uma maneiras de preparar", "Tradição de Natal", "Símbolo de identidade"],
            cultural_meaning: "Representa o engenho e a tradição portuguesa",
        },
    ),
    (
        "pão",
        Staple {
            significance: "O pão de cada dia, centro da mesa",
            varieties: &["Broa de milho", "Pão de centeio", "Pão alentejano"],
            cultural_meaning: "Hospitalidade e partilha",
        },
    ),
    (
        "vinho",
        Staple {
            significance: "Cultura do vinho profundamente enraizada",
            varieties: &["Douro", "Alentejo", "Vinho Verde", "Porto"],
            cultural_meaning: "Celebração, tradição, qualidade de vida",
        },
    ),
];

static TRADITIONAL_DISHES: &[(&str, &str)] = &[
    ("cozido à portuguesa", "O cozinhado nacional — unidade na diversidade"),
    ("francesinha", "A sanduíche robusta do Porto, orgulho local"),
    ("pastéis de nata", "Símbolo doce da mestria culinária portuguesa"),
    ("cataplana", "Celebração de marisco do Algarve"),
    ("bifana", "Conforto do dia a dia, identidade popular"),
];

static FADO: Lazy<FadoFacts> = Lazy::new(|| FadoFacts {
    essence: "A alma da música portuguesa, expressão da saudade",
    kinds: &["Fado de Lisboa", "Fado de Coimbra", "Fado vadio"],
    themes: &["Amor", "Perda", "Destino", "Terra", "Nostalgia"],
    cultural_role: "Escape emocional e identidade cultural — Património Imaterial da UNESCO desde 2011",
    legendary_figures: &["Amália Rodrigues", "Alfredo Marceneiro", "Carlos do Carmo"],
});

static IDIOMS: &[(&str, Idiom)] = &[
    (
        "saudade",
        Idiom {
            meaning: "Sentimento intraduzível de falta, nostalgia e amor pelo que está longe",
            usage: "Central na expressão emocional portuguesa: \"tenho saudades\", \"matar saudades\"",
        },
    ),
    (
        "desenrascanço",
        Idiom {
            meaning: "A arte portuguesa de resolver problemas com criatividade e poucos meios",
            usage: "Dito com orgulho — improviso eficaz perante qualquer aperto",
        },
    ),
    (
        "fado",
        Idiom {
            meaning: "Destino — aceitação das voltas que a vida dá",
            usage: "Tanto o género musical como a ideia de sina",
        },
    ),
    (
        "coração",
        Idiom {
            meaning: "O coração — centro da expressão emocional",
            usage: "\"De coração cheio\", \"com o coração nas mãos\"",
        },
    ),
    (
        "família",
        Idiom {
            meaning: "A família — valor nuclear e unidade social",
            usage: "O jantar de família é tempo sagrado",
        },
    ),
];

static HISTORY: &[(&str, HistoryPeriod)] = &[
    (
        "discoveries",
        HistoryPeriod {
            period: "Séculos XV–XVI",
            significance: "Expansão marítima portuguesa e influência global",
            cultural_impact: "Fundação da identidade e do orgulho global português",
        },
    ),
    (
        "revolution_1974",
        HistoryPeriod {
            period: "25 de Abril de 1974",
            significance: "Fim da ditadura e início do Portugal moderno",
            cultural_impact: "Símbolo de mudança pacífica e de valores democráticos",
        },
    ),
    (
        "eu_membership",
        HistoryPeriod {
            period: "1986 até hoje",
            significance: "Integração de Portugal na comunidade europeia",
            cultural_impact: "Equilíbrio entre identidade europeia e herança portuguesa",
        },
    ),
];

/// Devolve o perfil cultural de uma região, se existir.
///
/// Todas as 14 regiões têm perfil; a assinatura `Option` mantém o
/// contrato de consulta uniforme com as restantes tabelas.
pub fn region_profile(region: PortugueseRegion) -> Option<&'static RegionProfile> {
    REGIONS.get(&region)
}

/// Devolve o alimento estruturante com o nome dado ("bacalhau", "pão", "vinho").
pub fn staple(name: &str) -> Option<&'static Staple> {
    STAPLES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, staple)| staple)
}

/// Devolve a descrição de um prato tradicional, se conhecido.
pub fn traditional_dish(name: &str) -> Option<&'static str> {
    TRADITIONAL_DISHES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, desc)| *desc)
}

/// Devolve os factos sobre o fado.
pub fn fado() -> &'static FadoFacts {
    &FADO
}

/// Devolve a glosa de uma expressão idiomática, se conhecida.
pub fn idiom(expression: &str) -> Option<&'static Idiom> {
    IDIOMS
        .iter()
        .find(|(key, _)| *key == expression)
        .map(|(_, idiom)| idiom)
}

/// Devolve um período histórico pela sua chave
/// ("discoveries", "revolution_1974", "eu_membership").
pub fn history_period(key: &str) -> Option<&'static HistoryPeriod> {
    HISTORY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, period)| period)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Todas as 14 regiões têm perfil preenchido.
    #[test]
    fn test_every_region_has_profile() {
        use PortugueseRegion::*;
        let all = [
            North, Center, South, Lisbon, Porto, Azores, Madeira, Brazil, Angola, Mozambique,
            DiasporaUk, DiasporaUsa, DiasporaFrance, DiasporaOther,
        ];
        for region in all {
            let profile = region_profile(region);
            assert!(profile.is_some(), "região sem perfil: {:?}", region);
            let profile = profile.unwrap();
            assert!(!profile.cuisine.is_empty());
            assert!(!profile.traditions.is_empty());
        }
    }

    /// Chave desconhecida devolve None em todas as tabelas.
    #[test]
    fn test_unknown_keys_return_none() {
        assert!(staple("sushi").is_none());
        assert!(traditional_dish("paella").is_none());
        assert!(idiom("schadenfreude").is_none());
        assert!(history_period("roman_empire").is_none());
    }

    /// O bacalhau é o "fiel amigo".
    #[test]
    fn test_bacalhau_staple() {
        let bacalhau = staple("bacalhau").unwrap();
        assert!(bacalhau.significance.contains("fiel amigo"));
    }

    /// Os factos do fado incluem Amália e a classificação UNESCO.
    #[test]
    fn test_fado_facts() {
        let facts = fado();
        assert!(facts.legendary_figures.contains(&"Amália Rodrigues"));
        assert!(facts.cultural_role.contains("UNESCO"));
        assert_eq!(facts.kinds.len(), 3);
    }

    /// A saudade tem glosa na tabela de expressões.
    #[test]
    fn test_saudade_idiom() {
        let saudade = idiom("saudade").unwrap();
        assert!(saudade.meaning.contains("intraduzível"));
    }
}
