// src/vendas/carrinho.rs

use bigdecimal::BigDecimal;
use tracing::{debug, info};

use super::vendas_structs::{Carrinho, ItemCarrinho, VendaConcluida};
use crate::produtos::catalogo::Catalogo;
use crate::shared::erros::{FrutariaError, Resultado};

impl Carrinho {
    pub fn is_empty(&self) -> bool {
        self.itens.is_empty()
    }

    /// Quantidade deste produto já reservada no carrinho.
    pub fn quantidade_de(&self, id: u32) -> u32 {
        self.itens
            .iter()
            .filter(|item| item.id == id)
            .map(|item| item.quantidade)
            .sum()
    }

    /// Adiciona um produto ao carrinho.
    ///
    /// O estoque é verificado considerando o que já está no carrinho; se o
    /// produto já estiver lá, a quantidade é somada à linha existente.
    pub fn adicionar(&mut self, catalogo: &Catalogo, id: u32, quantidade: u32) -> Resultado<&ItemCarrinho> {
        if quantidade == 0 {
            return Err(FrutariaError::QuantidadeInvalida);
        }
        let produto = catalogo.buscar(id).ok_or(FrutariaError::ProdutoNaoEncontrado(id))?;

        let solicitado = self.quantidade_de(id).saturating_add(quantidade);
        if solicitado > produto.quantidade_estoque {
            return Err(FrutariaError::EstoqueInsuficiente {
                nome: produto.nome.clone(),
                disponivel: produto.quantidade_estoque,
                solicitado,
            });
        }

        let posicao = match self.itens.iter().position(|item| item.id == id) {
            Some(posicao) => {
                self.itens[posicao].quantidade = solicitado;
                posicao
            }
            None => {
                self.itens.push(ItemCarrinho {
                    id,
                    nome: produto.nome.clone(),
                    preco_venda: produto.preco_venda.clone(),
                    quantidade,
                });
                self.itens.len() - 1
            }
        };
        debug!(id, quantidade = solicitado, "item no carrinho");
        Ok(&self.itens[posicao])
    }

    /// Remove a linha do produto. Devolve `false` se ele não estava no carrinho.
    pub fn remover(&mut self, id: u32) -> bool {
        let antes = self.itens.len();
        self.itens.retain(|item| item.id != id);
        self.itens.len() != antes
    }

    pub fn total(&self) -> BigDecimal {
        let mut total = BigDecimal::from(0);
        for item in &self.itens {
            total += item.subtotal();
        }
        total
    }
}

/// Finaliza a compra: baixa o estoque de cada item e esvazia o carrinho.
///
/// Todos os itens são conferidos contra o estoque atual antes de qualquer
/// baixa; se algum falhar, nenhum produto é alterado e o carrinho fica intacto.
pub fn finalizar_compra(catalogo: &mut Catalogo, carrinho: &mut Carrinho) -> Resultado<VendaConcluida> {
    if carrinho.is_empty() {
        return Err(FrutariaError::CarrinhoVazio);
    }

    for item in &carrinho.itens {
        let produto = catalogo
            .buscar(item.id)
            .ok_or(FrutariaError::ProdutoNaoEncontrado(item.id))?;
        if produto.quantidade_estoque < item.quantidade {
            return Err(FrutariaError::EstoqueInsuficiente {
                nome: produto.nome.clone(),
                disponivel: produto.quantidade_estoque,
                solicitado: item.quantidade,
            });
        }
    }

    for item in &carrinho.itens {
        if let Some(produto) = catalogo.buscar_mut(item.id) {
            produto.quantidade_estoque -= item.quantidade;
        }
    }

    let total = carrinho.total();
    let itens = std::mem::take(&mut carrinho.itens);
    info!(itens = itens.len(), total = %total, "compra finalizada");
    Ok(VendaConcluida { itens, total })
}
