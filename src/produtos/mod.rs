// src/produtos/mod.rs

// Structs do produto (registro do CSV e dados de cadastro/alteração)
pub mod produtos_structs;
// Catálogo em memória com as operações de CRUD
pub mod catalogo;
