// src/shared/mod.rs

// Tipos de erro compartilhados por todos os módulos
pub mod erros;
// Funções de formatação e conversão de entrada
pub mod shared_structs;
// Leitura e escrita no terminal
pub mod console;
// Configuração (arquivo TOML opcional)
pub mod config;
