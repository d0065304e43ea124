// src/shared/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::erros::Resultado;

/// Nome do arquivo de configuração procurado dentro do diretório de dados.
pub const ARQUIVO_CONFIG: &str = "frutaria.toml";

/// Configuração da loja. Todos os campos são opcionais no TOML.
///
/// ```toml
/// nome_loja = "Frutaria"
/// limite_estoque_baixo = 5
///
/// [senhas]
/// caixa = "123"
/// supervisor = "$2b$12$..."   # hash bcrypt também é aceito
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub nome_loja: String,
    /// Produtos com estoque até este valor aparecem no painel do caixa.
    pub limite_estoque_baixo: u32,
    pub limpar_tela: bool,
    pub custo_bcrypt: u32,
    pub arquivos: ArquivosConfig,
    pub senhas: SenhasConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArquivosConfig {
    pub produtos: String,
    pub caixa: String,
    pub log: String,
    pub nota: String,
}

/// Senhas em texto claro ou já no formato bcrypt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SenhasConfig {
    pub caixa: String,
    pub supervisor: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            nome_loja: "Frutaria".to_string(),
            limite_estoque_baixo: 5,
            limpar_tela: true,
            custo_bcrypt: bcrypt::DEFAULT_COST,
            arquivos: ArquivosConfig::default(),
            senhas: SenhasConfig::default(),
        }
    }
}

impl Default for ArquivosConfig {
    fn default() -> Self {
        ArquivosConfig {
            produtos: "produtos.csv".to_string(),
            caixa: "caixa.csv".to_string(),
            log: "log_supervisor.txt".to_string(),
            nota: "nota.txt".to_string(),
        }
    }
}

impl Default for SenhasConfig {
    fn default() -> Self {
        SenhasConfig {
            caixa: "123".to_string(),
            supervisor: "admin".to_string(),
        }
    }
}

impl Config {
    /// Lê a configuração de um arquivo TOML.
    pub fn carregar(caminho: &Path) -> Resultado<Self> {
        let conteudo = fs::read_to_string(caminho)?;
        Ok(toml::from_str(&conteudo)?)
    }

    /// Usa o arquivo indicado; sem ele, procura `frutaria.toml` no diretório
    /// de dados e cai nos valores padrão se não existir.
    pub fn resolver(dados: &Path, explicito: Option<&Path>) -> Resultado<Self> {
        if let Some(caminho) = explicito {
            return Self::carregar(caminho);
        }
        let padrao = dados.join(ARQUIVO_CONFIG);
        if padrao.exists() {
            Self::carregar(&padrao)
        } else {
            Ok(Self::default())
        }
    }
}

/// Caminhos completos dos arquivos da loja, já resolvidos contra o diretório de dados.
#[derive(Debug, Clone)]
pub struct Caminhos {
    pub produtos: PathBuf,
    pub caixa: PathBuf,
    pub log: PathBuf,
    pub nota: PathBuf,
}

impl Caminhos {
    pub fn new(dados: &Path, arquivos: &ArquivosConfig) -> Self {
        Caminhos {
            produtos: dados.join(&arquivos.produtos),
            caixa: dados.join(&arquivos.caixa),
            log: dados.join(&arquivos.log),
            nota: dados.join(&arquivos.nota),
        }
    }
}
