// src/persistencia/log_supervisor.rs

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::shared::erros::Resultado;

/// Trilha de auditoria em texto puro: uma linha `[AAAA-MM-DD HH:MM:SS] mensagem`
/// por ação, sempre acrescentada ao final do arquivo.
pub struct LogSupervisor {
    caminho: PathBuf,
}

impl LogSupervisor {
    pub fn new(caminho: PathBuf) -> Self {
        LogSupervisor { caminho }
    }

    pub fn registrar(&self, mensagem: &str) -> Resultado<()> {
        self.registrar_em(Local::now(), mensagem)
    }

    pub fn registrar_em(&self, instante: DateTime<Local>, mensagem: &str) -> Resultado<()> {
        let mut arquivo = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.caminho)?;
        writeln!(arquivo, "[{}] {}", instante.format("%Y-%m-%d %H:%M:%S"), mensagem)?;
        debug!(acao = mensagem, "registrado no log do supervisor");
        Ok(())
    }

    /// Últimas `n` linhas do log, da mais antiga para a mais recente.
    /// Bytes que não são UTF-8 aparecem como `\u{FFFD}`.
    pub fn ultimas(&self, n: usize) -> Resultado<Vec<String>> {
        if !self.caminho.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.caminho)?;
        let conteudo = String::from_utf8_lossy(&bytes);
        let linhas: Vec<&str> = conteudo.lines().collect();
        let inicio = linhas.len().saturating_sub(n);
        Ok(linhas[inicio..].iter().map(|l| l.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn acrescenta_linhas_com_data_e_hora() {
        let dir = tempfile::tempdir().unwrap();
        let log = LogSupervisor::new(dir.path().join("log.txt"));
        let instante = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        log.registrar_em(instante, "PRIMEIRA").unwrap();
        log.registrar_em(instante, "SEGUNDA").unwrap();

        let conteudo = fs::read_to_string(dir.path().join("log.txt")).unwrap();
        assert_eq!(conteudo, "[2024-03-09 14:05:07] PRIMEIRA\n[2024-03-09 14:05:07] SEGUNDA\n");
    }

    #[test]
    fn ultimas_linhas() {
        let dir = tempfile::tempdir().unwrap();
        let log = LogSupervisor::new(dir.path().join("log.txt"));
        assert!(log.ultimas(5).unwrap().is_empty());

        for i in 0..4 {
            log.registrar(&format!("acao {}", i)).unwrap();
        }
        let ultimas = log.ultimas(2).unwrap();
        assert_eq!(ultimas.len(), 2);
        assert!(ultimas[0].ends_with("acao 2"));
        assert!(ultimas[1].ends_with("acao 3"));
    }

    #[test]
    fn ultimas_tolera_bytes_invalidos() {
        let dir = tempfile::tempdir().unwrap();
        let caminho = dir.path().join("log.txt");
        fs::write(&caminho, b"[2024-01-01 08:00:00] PRODUTO \xff\xfe\n").unwrap();
        let log = LogSupervisor::new(caminho);
        log.registrar("ACESSO SUPERVISOR.").unwrap();

        let ultimas = log.ultimas(5).unwrap();
        assert_eq!(ultimas.len(), 2);
        assert!(ultimas[0].contains('\u{FFFD}'));
        assert!(ultimas[1].ends_with("ACESSO SUPERVISOR."));
    }
}
