// src/caixa/mod.rs

// Fundo de caixa e total de vendas da sessão
pub mod caixa_structs;
