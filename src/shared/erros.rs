// src/shared/erros.rs

use std::path::PathBuf;

use bigdecimal::BigDecimal;
use thiserror::Error;

/// Erros da aplicação. Cada operação de domínio devolve `Result<T, FrutariaError>`
/// e a mensagem é exibida diretamente ao usuário no terminal.
#[derive(Debug, Error)]
pub enum FrutariaError {
    #[error("Produto com ID {0} não encontrado.")]
    ProdutoNaoEncontrado(u32),

    #[error("Estoque insuficiente para o produto {nome}. Disponível: {disponivel}, solicitado: {solicitado}.")]
    EstoqueInsuficiente {
        nome: String,
        disponivel: u32,
        solicitado: u32,
    },

    #[error("A quantidade deve ser maior que zero.")]
    QuantidadeInvalida,

    #[error("O valor deve ser maior que zero e ter no máximo duas casas decimais (recebido {0}).")]
    PrecoInvalido(BigDecimal),

    #[error("O nome do produto não pode ficar vazio.")]
    NomeVazio,

    #[error("Carrinho vazio. Adicione itens para finalizar.")]
    CarrinhoVazio,

    #[error("Entrada inválida: {0}")]
    EntradaInvalida(String),

    /// A entrada padrão terminou (Ctrl+D ou fim do script de teste).
    #[error("Entrada encerrada.")]
    EntradaEncerrada,

    #[error("Erro ao ler/gravar o arquivo '{}': {origem}", .caminho.display())]
    Csv {
        caminho: PathBuf,
        #[source]
        origem: csv::Error,
    },

    #[error("Arquivo de configuração inválido: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Erro ao processar senha: {0}")]
    Senha(#[from] bcrypt::BcryptError),

    #[error("Dados inválidos em '{}': {motivo}", .caminho.display())]
    DadosInvalidos { caminho: PathBuf, motivo: String },

    #[error("Erro de entrada/saída: {0}")]
    Io(#[from] std::io::Error),
}

impl FrutariaError {
    /// Erros que encerram a sessão. Os demais são exibidos e o menu continua.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FrutariaError::EntradaEncerrada
                | FrutariaError::Io(_)
                | FrutariaError::Csv { .. }
                | FrutariaError::DadosInvalidos { .. }
                | FrutariaError::Config(_)
                | FrutariaError::Senha(_)
        )
    }
}

pub type Resultado<T> = Result<T, FrutariaError>;
