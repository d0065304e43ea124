// src/shared/shared_structs.rs

use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

use super::erros::{FrutariaError, Resultado};

/// Formata um valor monetário com duas casas decimais: `R$ 12.50`.
pub fn formatar_reais(valor: &BigDecimal) -> String {
    format!("R$ {}", valor.round(2).with_scale(2))
}

/// Dígitos com no máximo duas casas decimais, separadas por vírgula ou ponto.
static VALOR_MONETARIO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+([.,][0-9]{1,2})?$").expect("regex de valor monetário"));

/// Converte o texto digitado em um valor monetário com escala 2.
/// Aceita vírgula ou ponto como separador decimal ("4,50" ou "4.50");
/// sinal, expoente e mais de duas casas decimais são rejeitados.
pub fn ler_valor(texto: &str) -> Resultado<BigDecimal> {
    let texto = texto.trim();
    let invalido = || FrutariaError::EntradaInvalida(format!("'{}' não é um valor válido.", texto));

    if !VALOR_MONETARIO.is_match(texto) {
        return Err(invalido());
    }
    let valor = BigDecimal::from_str(&texto.replace(',', ".")).map_err(|_| invalido())?;
    Ok(valor.with_scale(2))
}

/// Valor positivo sem frações de centavo, o único formato que o CSV guarda sem perda.
pub fn is_valor_monetario(valor: &BigDecimal) -> bool {
    *valor > BigDecimal::from(0) && valor.with_scale(2) == *valor
}

/// Converte o texto digitado em um número inteiro não negativo (IDs e quantidades).
pub fn ler_inteiro(texto: &str) -> Resultado<u32> {
    texto
        .trim()
        .parse::<u32>()
        .map_err(|_| FrutariaError::EntradaInvalida(format!("'{}' não é um número válido.", texto.trim())))
}

/// Saudação de acordo com a hora do dia (0-23).
pub fn saudacao_para_hora(hora: u32) -> &'static str {
    match hora {
        5..=11 => "Bom dia!",
        12..=17 => "Boa tarde!",
        _ => "Boa noite!",
    }
}
