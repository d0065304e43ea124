// src/lib.rs

//! Frutaria: ponto de venda e controle de estoque em terminal.
//!
//! Produtos e fundo de caixa ficam em arquivos CSV, carregados na abertura e
//! gravados por inteiro na saída. As ações de venda e do supervisor são
//! registradas em `log_supervisor.txt`.

pub mod caixa;      // Módulo do caixa
pub mod loja;       // Estado da loja (catálogo, caixa, senhas, arquivos)
pub mod menu_principal;
pub mod persistencia; // Módulo de persistência (CSV e log)
pub mod produtos;   // Módulo de produtos
pub mod shared;     // Módulo shared
pub mod usuarios;   // Módulo de usuários e área administrativa
pub mod vendas;     // Módulo de vendas (carrinho, compra, nota fiscal)
