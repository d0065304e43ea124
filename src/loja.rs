// src/loja.rs

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::caixa::caixa_structs::{Caixa, EntradaCaixa, CABECALHO_CAIXA};
use crate::persistencia::csv_store::{carregar_csv, salvar_csv};
use crate::persistencia::log_supervisor::LogSupervisor;
use crate::produtos::catalogo::{validar_nome, validar_preco, Catalogo};
use crate::produtos::produtos_structs::{Produto, CABECALHO_PRODUTOS};
use crate::shared::config::{Caminhos, Config};
use crate::shared::erros::{FrutariaError, Resultado};
use crate::shared::shared_structs::is_valor_monetario;
use crate::usuarios::auth::Credenciais;

/// Estado da loja durante a execução: catálogo, caixa, senhas e arquivos.
/// É carregado uma vez na abertura e salvo por inteiro na saída.
pub struct Loja {
    pub config: Config,
    pub caminhos: Caminhos,
    pub catalogo: Catalogo,
    pub caixa: Caixa,
    pub credenciais: Credenciais,
    pub log: LogSupervisor,
    /// Avisos da abertura (arquivos ausentes), exibidos no primeiro menu.
    pub avisos: Vec<String>,
}

impl Loja {
    /// Carrega produtos e caixa do diretório de dados.
    pub fn abrir(dados: &Path, config: Config) -> Resultado<Self> {
        let caminhos = Caminhos::new(dados, &config.arquivos);
        let mut avisos = Vec::new();

        for caminho in [&caminhos.produtos, &caminhos.caixa] {
            if !caminho.exists() {
                avisos.push(format!(
                    "AVISO: Arquivo '{}' não encontrado. Iniciando com dados vazios.",
                    caminho.display()
                ));
            }
        }

        let produtos: Vec<Produto> = carregar_csv(&caminhos.produtos)?;
        let entradas: Vec<EntradaCaixa> = carregar_csv(&caminhos.caixa)?;

        validar_produtos(&caminhos.produtos, &produtos)?;
        validar_entradas(&caminhos.caixa, &entradas)?;

        let credenciais = Credenciais::from_config(&config.senhas, config.custo_bcrypt)?;
        let log = LogSupervisor::new(caminhos.log.clone());

        info!(
            produtos = produtos.len(),
            entradas_caixa = entradas.len(),
            "loja aberta a partir de '{}'",
            dados.display()
        );

        Ok(Loja {
            config,
            caminhos,
            catalogo: Catalogo::new(produtos),
            caixa: Caixa::new(entradas),
            credenciais,
            log,
            avisos,
        })
    }

    /// Grava produtos e caixa, sobrescrevendo os arquivos.
    pub fn salvar(&self) -> Resultado<()> {
        salvar_csv(&self.caminhos.produtos, &CABECALHO_PRODUTOS, &self.catalogo.produtos)?;
        salvar_csv(&self.caminhos.caixa, &CABECALHO_CAIXA, &self.caixa.entradas)?;
        Ok(())
    }

    /// Registra uma ação no log do supervisor. Uma falha de gravação não
    /// desfaz a ação: fica registrada no log da aplicação e é devolvida como aviso.
    pub fn registrar_log(&self, mensagem: &str) -> Option<String> {
        match self.log.registrar(mensagem) {
            Ok(()) => None,
            Err(e) => {
                warn!("falha ao gravar log do supervisor: {}", e);
                Some(format!("AVISO: não foi possível gravar o log do supervisor ({}).", e))
            }
        }
    }
}

/// Registros lidos do CSV passam pelas mesmas regras do cadastro; um registro
/// inválido impede a abertura, como uma linha malformada.
fn validar_produtos(caminho: &Path, produtos: &[Produto]) -> Resultado<()> {
    let invalido = |motivo: String| {
        warn!("{}: {}", caminho.display(), motivo);
        FrutariaError::DadosInvalidos { caminho: caminho.to_path_buf(), motivo }
    };

    let mut vistos = HashSet::new();
    for produto in produtos {
        if !vistos.insert(produto.id) {
            return Err(invalido(format!("ID de produto {} aparece mais de uma vez.", produto.id)));
        }
        if let Err(e) = validar_nome(&produto.nome).and_then(|_| validar_preco(&produto.preco_venda)) {
            return Err(invalido(format!("produto ID {}: {}", produto.id, e)));
        }
    }
    Ok(())
}

fn validar_entradas(caminho: &Path, entradas: &[EntradaCaixa]) -> Resultado<()> {
    for entrada in entradas {
        let motivo = if entrada.tipo.trim().is_empty() {
            "entrada de caixa sem tipo.".to_string()
        } else if !is_valor_monetario(&entrada.valor) {
            format!("entrada '{}' com valor inválido ({}).", entrada.tipo, entrada.valor)
        } else {
            continue;
        };
        warn!("{}: {}", caminho.display(), motivo);
        return Err(FrutariaError::DadosInvalidos { caminho: caminho.to_path_buf(), motivo });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::produtos::produtos_structs::NovoProduto;
    use crate::shared::shared_structs::{formatar_reais, ler_valor};
    use bigdecimal::BigDecimal;
    use std::fs;

    fn config_teste() -> Config {
        Config { custo_bcrypt: 4, limpar_tela: false, ..Config::default() }
    }

    #[test]
    fn abre_vazia_quando_nao_ha_arquivos() {
        let dir = tempfile::tempdir().unwrap();
        let loja = Loja::abrir(dir.path(), config_teste()).unwrap();
        assert!(loja.catalogo.produtos.is_empty());
        assert!(loja.caixa.entradas.is_empty());
        assert_eq!(loja.avisos.len(), 2);
    }

    #[test]
    fn salva_e_reabre() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("produtos.csv"),
            "id,nome,preco_venda,quantidade_estoque\n1,Banana,4.5,10\n3,Laranja,6.00,0\n",
        )
        .unwrap();
        fs::write(dir.path().join("caixa.csv"), "tipo,valor,quantidade\nnota_10,10.0,3\n").unwrap();

        let mut loja = Loja::abrir(dir.path(), config_teste()).unwrap();
        assert!(loja.avisos.is_empty());
        assert_eq!(loja.catalogo.produtos.len(), 2);
        assert_eq!(loja.caixa.valor_inicial(), BigDecimal::from(30));

        loja.catalogo.repor_estoque(3, 4).unwrap();
        loja.salvar().unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("produtos.csv")).unwrap(),
            "id,nome,preco_venda,quantidade_estoque\n1,Banana,4.50,10\n3,Laranja,6.00,4\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("caixa.csv")).unwrap(),
            "tipo,valor,quantidade\nnota_10,10.00,3\n"
        );
    }

    fn abrir_com_produtos(linhas: &str) -> Resultado<Loja> {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("produtos.csv"),
            format!("id,nome,preco_venda,quantidade_estoque\n{}", linhas),
        )
        .unwrap();
        Loja::abrir(dir.path(), config_teste())
    }

    #[test]
    fn ids_repetidos_impedem_a_abertura() {
        let resultado = abrir_com_produtos("1,Banana,4.5,10\n1,Pera,6.00,2\n");
        assert!(matches!(
            resultado,
            Err(FrutariaError::DadosInvalidos { ref motivo, .. }) if motivo.contains("ID de produto 1")
        ));
    }

    #[test]
    fn produtos_com_preco_ou_nome_invalido_impedem_a_abertura() {
        assert!(matches!(abrir_com_produtos("1,Kiwi,0.00,10\n"), Err(FrutariaError::DadosInvalidos { .. })));
        assert!(matches!(abrir_com_produtos("1, ,1.00,10\n"), Err(FrutariaError::DadosInvalidos { .. })));
        // Frações de centavo e notação científica nem chegam a ser lidas.
        assert!(matches!(abrir_com_produtos("1,Kiwi,0.004,10\n"), Err(FrutariaError::Csv { .. })));
        assert!(matches!(abrir_com_produtos("1,Kiwi,1e-9,10\n"), Err(FrutariaError::Csv { .. })));
    }

    #[test]
    fn caixa_com_valor_zero_impede_a_abertura() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("caixa.csv"), "tipo,valor,quantidade\nnota_10,0.00,3\n").unwrap();
        assert!(matches!(
            Loja::abrir(dir.path(), config_teste()),
            Err(FrutariaError::DadosInvalidos { .. })
        ));
    }

    #[test]
    fn precos_digitados_sobrevivem_a_reabertura() {
        let dir = tempfile::tempdir().unwrap();
        let mut loja = Loja::abrir(dir.path(), config_teste()).unwrap();

        let novo = NovoProduto {
            nome: "Kiwi".into(),
            preco_venda: ler_valor("3,9").unwrap(),
            quantidade_estoque: 4,
        };
        let cadastrado = loja.catalogo.cadastrar(novo).unwrap();
        let entrada = EntradaCaixa { tipo: "moeda_025".into(), valor: ler_valor("0,25").unwrap(), quantidade: 8 };
        loja.caixa.registrar_entrada(entrada).unwrap();
        loja.salvar().unwrap();

        let reaberta = Loja::abrir(dir.path(), config_teste()).unwrap();
        assert_eq!(reaberta.catalogo.buscar(cadastrado.id), Some(&cadastrado));
        assert_eq!(
            formatar_reais(&reaberta.catalogo.buscar(cadastrado.id).unwrap().preco_venda),
            formatar_reais(&cadastrado.preco_venda)
        );
        assert_eq!(reaberta.caixa.entradas, loja.caixa.entradas);
        assert_eq!(reaberta.caixa.valor_inicial(), BigDecimal::from(2));
    }

    #[test]
    fn produtos_corrompidos_impedem_a_abertura() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("produtos.csv"),
            "id,nome,preco_venda,quantidade_estoque\n1,Banana,quatro,10\n",
        )
        .unwrap();
        assert!(Loja::abrir(dir.path(), config_teste()).is_err());
    }
}
