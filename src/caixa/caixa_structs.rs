// src/caixa/caixa_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::persistencia::csv_store::decimal_csv;
use crate::shared::erros::{FrutariaError, Resultado};
use crate::shared::shared_structs::is_valor_monetario;

/// Cabeçalho do arquivo `caixa.csv`.
pub const CABECALHO_CAIXA: [&str; 3] = ["tipo", "valor", "quantidade"];

/// Entrada do fundo de caixa, ex.: `nota_10`, R$ 10.00, 5 unidades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntradaCaixa {
    pub tipo: String,
    #[serde(with = "decimal_csv")]
    pub valor: BigDecimal,
    pub quantidade: u32,
}

impl EntradaCaixa {
    pub fn total(&self) -> BigDecimal {
        &self.valor * &BigDecimal::from(self.quantidade)
    }
}

/// Fundo de caixa carregado do CSV mais o total vendido nesta sessão.
/// O total de vendas não é persistido.
#[derive(Debug, Clone)]
pub struct Caixa {
    pub entradas: Vec<EntradaCaixa>,
    pub total_vendas_sessao: BigDecimal,
}

impl Caixa {
    pub fn new(entradas: Vec<EntradaCaixa>) -> Self {
        Caixa {
            entradas,
            total_vendas_sessao: BigDecimal::from(0),
        }
    }

    /// Soma de valor × quantidade das entradas.
    pub fn valor_inicial(&self) -> BigDecimal {
        let mut total = BigDecimal::from(0);
        for entrada in &self.entradas {
            total += entrada.total();
        }
        total
    }

    pub fn registrar_venda(&mut self, total: &BigDecimal) {
        self.total_vendas_sessao += total.clone();
    }

    pub fn total_atual(&self) -> BigDecimal {
        self.valor_inicial() + self.total_vendas_sessao.clone()
    }

    /// Registra uma entrada no fundo de caixa. Se o tipo já existir, as
    /// quantidades são somadas e o valor unitário passa a ser o informado.
    pub fn registrar_entrada(&mut self, entrada: EntradaCaixa) -> Resultado<&EntradaCaixa> {
        let tipo = entrada.tipo.trim().to_string();
        if tipo.is_empty() {
            return Err(FrutariaError::EntradaInvalida("o tipo da entrada não pode ficar vazio.".to_string()));
        }
        if !is_valor_monetario(&entrada.valor) {
            return Err(FrutariaError::PrecoInvalido(entrada.valor));
        }
        let valor = entrada.valor.with_scale(2);
        if entrada.quantidade == 0 {
            return Err(FrutariaError::QuantidadeInvalida);
        }

        let posicao = match self.entradas.iter().position(|e| e.tipo == tipo) {
            Some(posicao) => {
                let existente = &mut self.entradas[posicao];
                existente.valor = valor;
                existente.quantidade = existente.quantidade.saturating_add(entrada.quantidade);
                posicao
            }
            None => {
                self.entradas.push(EntradaCaixa { tipo, valor, quantidade: entrada.quantidade });
                self.entradas.len() - 1
            }
        };
        let registrada = &self.entradas[posicao];
        info!(tipo = %registrada.tipo, quantidade = registrada.quantidade, "entrada de caixa registrada");
        Ok(registrada)
    }
}
