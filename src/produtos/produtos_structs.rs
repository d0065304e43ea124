// src/produtos/produtos_structs.rs

use serde::{Deserialize, Serialize};
use bigdecimal::BigDecimal;

use crate::persistencia::csv_store::decimal_csv;

/// Cabeçalho do arquivo `produtos.csv`, na ordem dos campos de `Produto`.
pub const CABECALHO_PRODUTOS: [&str; 4] = ["id", "nome", "preco_venda", "quantidade_estoque"];

/// Estrutura que representa um produto do catálogo.
/// É gravada diretamente como uma linha de `produtos.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub id: u32,
    pub nome: String,
    #[serde(with = "decimal_csv")]
    pub preco_venda: BigDecimal,
    pub quantidade_estoque: u32,
}

/// Estrutura para receber os dados de um novo produto no cadastro do supervisor
#[derive(Debug, Clone)]
pub struct NovoProduto {
    pub nome: String,
    pub preco_venda: BigDecimal,
    pub quantidade_estoque: u32,
}

/// Alterações de um produto existente. Campo `None` mantém o valor atual.
#[derive(Debug, Clone, Default)]
pub struct AtualizacaoProduto {
    pub nome: Option<String>,
    pub preco_venda: Option<BigDecimal>,
    pub quantidade_estoque: Option<u32>,
}

impl AtualizacaoProduto {
    pub fn is_vazia(&self) -> bool {
        self.nome.is_none() && self.preco_venda.is_none() && self.quantidade_estoque.is_none()
    }
}
