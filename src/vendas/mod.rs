// src/vendas/mod.rs

// Structs do carrinho e da venda concluída
pub mod vendas_structs;
// Regras do carrinho e finalização da compra
pub mod carrinho;
// Geração da nota fiscal em texto
pub mod nota_fiscal;
// Menu do cliente
pub mod vendas_menu;
