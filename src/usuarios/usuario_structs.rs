// src/usuarios/usuario_structs.rs

use std::fmt;

/// Papéis com acesso à área administrativa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Papel {
    /// Consulta o painel do caixa (estoque zerado/baixo e situação do caixa)
    Caixa,
    /// Acesso completo ao cadastro de produtos e ao fundo de caixa
    Supervisor,
}

impl fmt::Display for Papel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Papel::Caixa => write!(f, "Caixa"),
            Papel::Supervisor => write!(f, "Supervisor"),
        }
    }
}
