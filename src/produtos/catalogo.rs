// src/produtos/catalogo.rs

use bigdecimal::BigDecimal;
use tracing::info;

use super::produtos_structs::{AtualizacaoProduto, NovoProduto, Produto};
use crate::shared::erros::{FrutariaError, Resultado};
use crate::shared::shared_structs::is_valor_monetario;

/// Catálogo de produtos em memória, na ordem em que foram carregados/cadastrados.
#[derive(Debug, Default, Clone)]
pub struct Catalogo {
    pub produtos: Vec<Produto>,
}

impl Catalogo {
    pub fn new(produtos: Vec<Produto>) -> Self {
        Catalogo { produtos }
    }

    pub fn buscar(&self, id: u32) -> Option<&Produto> {
        self.produtos.iter().find(|p| p.id == id)
    }

    pub fn buscar_mut(&mut self, id: u32) -> Option<&mut Produto> {
        self.produtos.iter_mut().find(|p| p.id == id)
    }

    /// Produtos com estoque, exibidos ao cliente.
    pub fn disponiveis(&self) -> impl Iterator<Item = &Produto> {
        self.produtos.iter().filter(|p| p.quantidade_estoque > 0)
    }

    /// Produtos com estoque zerado.
    pub fn sem_estoque(&self) -> impl Iterator<Item = &Produto> {
        self.produtos.iter().filter(|p| p.quantidade_estoque == 0)
    }

    /// Produtos com estoque positivo mas menor ou igual ao limite.
    pub fn estoque_baixo(&self, limite: u32) -> impl Iterator<Item = &Produto> {
        self.produtos
            .iter()
            .filter(move |p| p.quantidade_estoque > 0 && p.quantidade_estoque <= limite)
    }

    /// Maior ID existente + 1 (ou 1 para o catálogo vazio).
    pub fn proximo_id(&self) -> u32 {
        self.produtos.iter().map(|p| p.id).max().map_or(1, |id| id + 1)
    }

    /// Cadastra um novo produto e devolve o registro criado (com o ID atribuído).
    pub fn cadastrar(&mut self, novo: NovoProduto) -> Resultado<Produto> {
        let nome = validar_nome(&novo.nome)?;
        validar_preco(&novo.preco_venda)?;

        let produto = Produto {
            id: self.proximo_id(),
            nome,
            preco_venda: novo.preco_venda.with_scale(2),
            quantidade_estoque: novo.quantidade_estoque,
        };
        info!(id = produto.id, nome = %produto.nome, "produto cadastrado");
        self.produtos.push(produto.clone());
        Ok(produto)
    }

    /// Aplica as alterações informadas. Tudo é validado antes de qualquer campo mudar.
    pub fn atualizar(&mut self, id: u32, alteracao: AtualizacaoProduto) -> Resultado<Produto> {
        let nome = alteracao.nome.as_deref().map(validar_nome).transpose()?;
        if let Some(preco) = &alteracao.preco_venda {
            validar_preco(preco)?;
        }

        let produto = self.buscar_mut(id).ok_or(FrutariaError::ProdutoNaoEncontrado(id))?;
        if let Some(nome) = nome {
            produto.nome = nome;
        }
        if let Some(preco) = alteracao.preco_venda {
            produto.preco_venda = preco.with_scale(2);
        }
        if let Some(quantidade) = alteracao.quantidade_estoque {
            produto.quantidade_estoque = quantidade;
        }
        info!(id, "produto atualizado");
        Ok(produto.clone())
    }

    pub fn remover(&mut self, id: u32) -> Resultado<Produto> {
        let posicao = self
            .produtos
            .iter()
            .position(|p| p.id == id)
            .ok_or(FrutariaError::ProdutoNaoEncontrado(id))?;
        let removido = self.produtos.remove(posicao);
        info!(id, nome = %removido.nome, "produto removido");
        Ok(removido)
    }

    /// Soma `quantidade` ao estoque do produto.
    pub fn repor_estoque(&mut self, id: u32, quantidade: u32) -> Resultado<Produto> {
        if quantidade == 0 {
            return Err(FrutariaError::QuantidadeInvalida);
        }
        let produto = self.buscar_mut(id).ok_or(FrutariaError::ProdutoNaoEncontrado(id))?;
        produto.quantidade_estoque = produto
            .quantidade_estoque
            .checked_add(quantidade)
            .ok_or_else(|| FrutariaError::EntradaInvalida("quantidade grande demais.".to_string()))?;
        info!(id, estoque = produto.quantidade_estoque, "estoque reposto");
        Ok(produto.clone())
    }
}

pub(crate) fn validar_nome(nome: &str) -> Resultado<String> {
    let nome = nome.trim();
    if nome.is_empty() {
        return Err(FrutariaError::NomeVazio);
    }
    Ok(nome.to_string())
}

pub(crate) fn validar_preco(preco: &BigDecimal) -> Resultado<()> {
    if !is_valor_monetario(preco) {
        return Err(FrutariaError::PrecoInvalido(preco.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn preco(texto: &str) -> BigDecimal {
        BigDecimal::from_str(texto).unwrap()
    }

    fn catalogo_exemplo() -> Catalogo {
        Catalogo::new(vec![
            Produto { id: 1, nome: "Banana".into(), preco_venda: preco("4.50"), quantidade_estoque: 10 },
            Produto { id: 4, nome: "Maçã".into(), preco_venda: preco("7.90"), quantidade_estoque: 0 },
            Produto { id: 2, nome: "Uva".into(), preco_venda: preco("12.00"), quantidade_estoque: 3 },
        ])
    }

    fn novo(nome: &str, valor: &str, estoque: u32) -> NovoProduto {
        NovoProduto { nome: nome.into(), preco_venda: preco(valor), quantidade_estoque: estoque }
    }

    #[test]
    fn proximo_id_usa_o_maior_existente() {
        assert_eq!(Catalogo::default().proximo_id(), 1);
        assert_eq!(catalogo_exemplo().proximo_id(), 5);
    }

    #[test]
    fn cadastro_atribui_id_e_limpa_nome() {
        let mut catalogo = catalogo_exemplo();
        let produto = catalogo.cadastrar(novo("  Pera ", "6.00", 8)).unwrap();
        assert_eq!(produto.id, 5);
        assert_eq!(produto.nome, "Pera");
        assert_eq!(catalogo.buscar(5), Some(&produto));
    }

    #[test]
    fn cadastro_rejeita_nome_vazio_e_preco_nao_positivo() {
        let mut catalogo = catalogo_exemplo();
        assert!(matches!(catalogo.cadastrar(novo("   ", "1.00", 1)), Err(FrutariaError::NomeVazio)));
        assert!(matches!(catalogo.cadastrar(novo("Kiwi", "0", 1)), Err(FrutariaError::PrecoInvalido(_))));
        assert!(matches!(catalogo.cadastrar(novo("Kiwi", "-2", 1)), Err(FrutariaError::PrecoInvalido(_))));
        assert!(matches!(catalogo.cadastrar(novo("Kiwi", "0.004", 1)), Err(FrutariaError::PrecoInvalido(_))));
        assert!(matches!(catalogo.cadastrar(novo("Kiwi", "4.555", 1)), Err(FrutariaError::PrecoInvalido(_))));
        assert_eq!(catalogo.produtos.len(), 3);
    }

    #[test]
    fn ids_nao_sao_reaproveitados_apos_remocao_do_meio() {
        let mut catalogo = catalogo_exemplo();
        catalogo.remover(2).unwrap();
        assert_eq!(catalogo.cadastrar(novo("Pera", "6.00", 1)).unwrap().id, 5);
    }

    #[test]
    fn atualizacao_parcial() {
        let mut catalogo = catalogo_exemplo();
        let alterado = catalogo
            .atualizar(1, AtualizacaoProduto { preco_venda: Some(preco("5.00")), ..Default::default() })
            .unwrap();
        assert_eq!(alterado.nome, "Banana");
        assert_eq!(alterado.preco_venda, preco("5.00"));
        assert_eq!(alterado.quantidade_estoque, 10);
    }

    #[test]
    fn atualizacao_invalida_nao_altera_nada() {
        let mut catalogo = catalogo_exemplo();
        let alteracao = AtualizacaoProduto {
            nome: Some("Banana Prata".into()),
            preco_venda: Some(preco("0")),
            quantidade_estoque: None,
        };
        assert!(catalogo.atualizar(1, alteracao).is_err());
        assert_eq!(catalogo.buscar(1).unwrap().nome, "Banana");
    }

    #[test]
    fn operacoes_com_id_inexistente() {
        let mut catalogo = catalogo_exemplo();
        assert!(matches!(catalogo.remover(99), Err(FrutariaError::ProdutoNaoEncontrado(99))));
        assert!(matches!(
            catalogo.atualizar(99, AtualizacaoProduto::default()),
            Err(FrutariaError::ProdutoNaoEncontrado(99))
        ));
        assert!(matches!(catalogo.repor_estoque(99, 1), Err(FrutariaError::ProdutoNaoEncontrado(99))));
    }

    #[test]
    fn reposicao_soma_ao_estoque() {
        let mut catalogo = catalogo_exemplo();
        assert_eq!(catalogo.repor_estoque(4, 6).unwrap().quantidade_estoque, 6);
        assert!(matches!(catalogo.repor_estoque(4, 0), Err(FrutariaError::QuantidadeInvalida)));
    }

    #[test]
    fn filtros_de_estoque() {
        let catalogo = catalogo_exemplo();
        let disponiveis: Vec<u32> = catalogo.disponiveis().map(|p| p.id).collect();
        assert_eq!(disponiveis, vec![1, 2]);

        let zerados: Vec<u32> = catalogo.sem_estoque().map(|p| p.id).collect();
        assert_eq!(zerados, vec![4]);

        let baixos: Vec<u32> = catalogo.estoque_baixo(5).map(|p| p.id).collect();
        assert_eq!(baixos, vec![2]);

        // O limite é inclusivo.
        assert_eq!(catalogo.estoque_baixo(3).map(|p| p.id).collect::<Vec<_>>(), vec![2]);
        assert!(catalogo.estoque_baixo(2).next().is_none());
        assert_eq!(catalogo.estoque_baixo(10).map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
