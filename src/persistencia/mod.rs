// src/persistencia/mod.rs

// Leitura e gravação dos arquivos CSV
pub mod csv_store;
// Log de auditoria do supervisor
pub mod log_supervisor;
