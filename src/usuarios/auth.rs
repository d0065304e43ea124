// src/usuarios/auth.rs

use bcrypt::{hash, verify};
use tracing::{debug, warn};

use super::usuario_structs::Papel;
use crate::shared::config::SenhasConfig;
use crate::shared::erros::Resultado;

/// Hashes bcrypt das senhas de cada papel. As senhas em texto claro não
/// ficam guardadas em memória depois de construído.
pub struct Credenciais {
    hash_caixa: String,
    hash_supervisor: String,
}

impl Credenciais {
    /// Constrói a partir da configuração. Valores que já estão no formato
    /// bcrypt (`$2a$`, `$2b$`, ...) são usados como estão.
    pub fn from_config(senhas: &SenhasConfig, custo: u32) -> Resultado<Self> {
        Ok(Credenciais {
            hash_caixa: preparar_hash(&senhas.caixa, custo)?,
            hash_supervisor: preparar_hash(&senhas.supervisor, custo)?,
        })
    }

    /// Verifica a senha informada para o papel.
    pub fn autenticar(&self, papel: Papel, senha: &str) -> bool {
        let hash_papel = match papel {
            Papel::Caixa => &self.hash_caixa,
            Papel::Supervisor => &self.hash_supervisor,
        };

        match verify(senha, hash_papel) {
            Ok(confere) => {
                debug!(%papel, confere, "verificação de senha");
                confere
            }
            Err(e) => {
                warn!(%papel, "erro ao verificar senha: {:?}", e);
                false
            }
        }
    }
}

fn preparar_hash(senha: &str, custo: u32) -> Resultado<String> {
    if senha.starts_with("$2") {
        return Ok(senha.to_string());
    }
    Ok(hash(senha, custo)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Custo mínimo aceito pelo bcrypt, para os testes não ficarem lentos.
    const CUSTO_TESTE: u32 = 4;

    #[test]
    fn senhas_padrao() {
        let credenciais = Credenciais::from_config(&SenhasConfig::default(), CUSTO_TESTE).unwrap();
        assert!(credenciais.autenticar(Papel::Caixa, "123"));
        assert!(credenciais.autenticar(Papel::Supervisor, "admin"));
        assert!(!credenciais.autenticar(Papel::Caixa, "admin"));
        assert!(!credenciais.autenticar(Papel::Supervisor, "123"));
        assert!(!credenciais.autenticar(Papel::Supervisor, ""));
    }

    #[test]
    fn aceita_hash_pronto_na_configuracao() {
        let hash_pronto = hash("frutas", CUSTO_TESTE).unwrap();
        let senhas = SenhasConfig { caixa: "123".into(), supervisor: hash_pronto };
        let credenciais = Credenciais::from_config(&senhas, CUSTO_TESTE).unwrap();
        assert!(credenciais.autenticar(Papel::Supervisor, "frutas"));
    }
}
