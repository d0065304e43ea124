// src/persistencia/csv_store.rs

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::shared::erros::{FrutariaError, Resultado};

/// Carrega todos os registros de um arquivo CSV com cabeçalho.
///
/// Arquivo inexistente não é erro: devolve lista vazia e registra um aviso.
/// Uma linha malformada interrompe o carregamento, para que dados que não
/// puderam ser lidos não sejam sobrescritos ao salvar.
pub fn carregar_csv<T: DeserializeOwned>(caminho: &Path) -> Resultado<Vec<T>> {
    if !caminho.exists() {
        warn!("Arquivo '{}' não encontrado. Iniciando com dados vazios.", caminho.display());
        return Ok(Vec::new());
    }

    let erro_csv = |origem| FrutariaError::Csv { caminho: caminho.to_path_buf(), origem };

    let mut leitor = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(caminho)
        .map_err(erro_csv)?;

    let registros = leitor
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(erro_csv)?;

    info!("{} registro(s) carregado(s) de '{}'", registros.len(), caminho.display());
    Ok(registros)
}

/// Salva os registros sobrescrevendo o arquivo inteiro.
/// O cabeçalho é sempre gravado, mesmo sem registros.
pub fn salvar_csv<T: Serialize>(caminho: &Path, cabecalho: &[&str], registros: &[T]) -> Resultado<()> {
    let erro_csv = |origem| FrutariaError::Csv { caminho: caminho.to_path_buf(), origem };

    let mut escritor = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(caminho)
        .map_err(erro_csv)?;

    escritor.write_record(cabecalho).map_err(erro_csv)?;
    for registro in registros {
        escritor.serialize(registro).map_err(erro_csv)?;
    }
    escritor.flush()?;

    info!("{} registro(s) salvo(s) em '{}'", registros.len(), caminho.display());
    Ok(())
}

/// Serialização de valores monetários no CSV: grava com duas casas decimais
/// e lê qualquer decimal (inclusive com vírgula).
pub mod decimal_csv {
    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::shared::shared_structs::ler_valor;

    pub fn serialize<S: Serializer>(valor: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&valor.round(2).with_scale(2).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let texto = String::deserialize(deserializer)?;
        ler_valor(&texto).map_err(serde::de::Error::custom)
    }
}
