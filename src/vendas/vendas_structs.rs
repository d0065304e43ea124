// src/vendas/vendas_structs.rs

use bigdecimal::BigDecimal;

/// Item individual do carrinho.
/// Guarda nome e preço do produto no momento em que foi adicionado.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCarrinho {
    pub id: u32,
    pub nome: String,
    pub preco_venda: BigDecimal,
    pub quantidade: u32,
}

impl ItemCarrinho {
    pub fn subtotal(&self) -> BigDecimal {
        &self.preco_venda * &BigDecimal::from(self.quantidade)
    }
}

/// Carrinho de compras da sessão do cliente (descartado ao voltar ao menu principal)
#[derive(Debug, Default, Clone)]
pub struct Carrinho {
    pub itens: Vec<ItemCarrinho>,
}

/// Resultado de uma compra finalizada: os itens vendidos e o total.
#[derive(Debug, Clone)]
pub struct VendaConcluida {
    pub itens: Vec<ItemCarrinho>,
    pub total: BigDecimal,
}
