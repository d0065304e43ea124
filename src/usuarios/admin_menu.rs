// src/usuarios/admin_menu.rs

use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::usuario_structs::Papel;
use crate::caixa::caixa_structs::EntradaCaixa;
use crate::loja::Loja;
use crate::produtos::produtos_structs::{AtualizacaoProduto, NovoProduto};
use crate::shared::console::Console;
use crate::shared::erros::Resultado;
use crate::shared::shared_structs::{formatar_reais, ler_inteiro, ler_valor};

/// Quantidade de linhas do log exibidas ao supervisor.
const LINHAS_DO_LOG: usize = 15;

/// Menu de acesso à área administrativa.
pub fn menu_administrativo<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    loop {
        console.cabecalho("ÁREA ADMINISTRATIVA")?;
        console.escrever("[1] Acessar como Caixa\n[2] Acessar como Supervisor\n[0] Voltar")?;

        let papel = match console.ler_opcao()?.as_str() {
            "1" => Papel::Caixa,
            "2" => Papel::Supervisor,
            "0" => return Ok(()),
            _ => {
                console.escrever("Opção inválida!")?;
                console.pausar()?;
                continue;
            }
        };

        let senha = console.ler_linha(&format!("Senha de {}: ", papel))?;
        if !loja.credenciais.autenticar(papel, &senha) {
            warn!(%papel, "senha incorreta");
            if let Some(aviso) = loja.registrar_log(&format!("FALHA DE ACESSO: {}.", papel)) {
                console.escrever(aviso)?;
            }
            console.escrever("Senha incorreta!")?;
            console.pausar()?;
            continue;
        }

        info!(%papel, "acesso à área administrativa");
        match papel {
            Papel::Caixa => painel_caixa(loja, console)?,
            Papel::Supervisor => {
                if let Some(aviso) = loja.registrar_log("ACESSO SUPERVISOR.") {
                    console.escrever(aviso)?;
                }
                menu_supervisor(loja, console)?;
            }
        }
    }
}

/// Painel de consulta do caixa: estoque zerado, estoque baixo e situação do caixa.
pub fn painel_caixa<R: BufRead, W: Write>(loja: &Loja, console: &mut Console<R, W>) -> Resultado<()> {
    console.cabecalho("PAINEL DO CAIXA")?;

    console.escrever("[Produtos com Estoque Zerado]")?;
    let zerados: Vec<_> = loja.catalogo.sem_estoque().collect();
    if zerados.is_empty() {
        console.escrever("Nenhum.")?;
    }
    for p in zerados {
        console.escrever(format!("- {}", p.nome))?;
    }

    let limite = loja.config.limite_estoque_baixo;
    console.escrever(format!("\n[Produtos com Estoque Baixo (até {} un.)]", limite))?;
    let baixos: Vec<_> = loja.catalogo.estoque_baixo(limite).collect();
    if baixos.is_empty() {
        console.escrever("Nenhum.")?;
    }
    for p in baixos {
        console.escrever(format!("- {} ({} un.)", p.nome, p.quantidade_estoque))?;
    }

    let caixa = &loja.caixa;
    console.escrever("\n[Situação do Caixa]")?;
    console.escrever(format!("Valor inicial em caixa: {}", formatar_reais(&caixa.valor_inicial())))?;
    console.escrever(format!("Vendas da sessão:       {}", formatar_reais(&caixa.total_vendas_sessao)))?;
    console.escrever(format!("Valor total atual:      {}", formatar_reais(&caixa.total_atual())))?;
    console.pausar()
}

/// Ações do supervisor: CRUD de produtos, fundo de caixa e consulta ao log.
pub fn menu_supervisor<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    loop {
        console.cabecalho("PAINEL DO SUPERVISOR")?;
        console.escrever(
            "[1] Listar produtos\n[2] Cadastrar produto\n[3] Atualizar produto\n[4] Remover produto\n\
             [5] Repor estoque\n[6] Registrar entrada no caixa\n[7] Ver log\n[0] Voltar",
        )?;

        match console.ler_opcao()?.as_str() {
            "1" => listar_produtos(loja, console)?,
            "2" => cadastrar_produto(loja, console)?,
            "3" => atualizar_produto(loja, console)?,
            "4" => remover_produto(loja, console)?,
            "5" => repor_estoque(loja, console)?,
            "6" => registrar_entrada_caixa(loja, console)?,
            "7" => ver_log(loja, console)?,
            "0" => return Ok(()),
            _ => console.escrever("Opção inválida!")?,
        }
        console.pausar()?;
    }
}

fn listar_produtos<R: BufRead, W: Write>(loja: &Loja, console: &mut Console<R, W>) -> Resultado<()> {
    console.cabecalho("TODOS OS PRODUTOS")?;
    if loja.catalogo.produtos.is_empty() {
        return console.escrever("Nenhum produto cadastrado.");
    }
    for p in &loja.catalogo.produtos {
        console.escrever(format!(
            "ID: {:<3} | {:<25} | {:>12} | Estoque: {}",
            p.id,
            p.nome,
            formatar_reais(&p.preco_venda),
            p.quantidade_estoque
        ))?;
    }
    Ok(())
}

fn cadastrar_produto<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    let nome = console.ler_linha("Nome do produto: ")?;
    let texto_preco = console.ler_linha("Preço de venda: ")?;
    let Some(preco_venda) = console.tratar(ler_valor(&texto_preco))? else {
        return Ok(());
    };
    let texto_estoque = console.ler_linha("Quantidade em estoque: ")?;
    let Some(quantidade_estoque) = console.tratar(ler_inteiro(&texto_estoque))? else {
        return Ok(());
    };

    let novo = NovoProduto { nome, preco_venda, quantidade_estoque };
    if let Some(produto) = console.tratar(loja.catalogo.cadastrar(novo))? {
        console.escrever(format!("Produto '{}' cadastrado com ID {}.", produto.nome, produto.id))?;
        let mensagem = format!(
            "PRODUTO CADASTRADO: ID {} '{}' preço {} estoque {}.",
            produto.id,
            produto.nome,
            formatar_reais(&produto.preco_venda),
            produto.quantidade_estoque
        );
        if let Some(aviso) = loja.registrar_log(&mensagem) {
            console.escrever(aviso)?;
        }
    }
    Ok(())
}

fn atualizar_produto<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    let texto_id = console.ler_linha("ID do produto a atualizar: ")?;
    let Some(id) = console.tratar(ler_inteiro(&texto_id))? else {
        return Ok(());
    };
    let Some(atual) = loja.catalogo.buscar(id).cloned() else {
        return console.escrever(format!("Erro: Produto com ID {} não encontrado.", id));
    };

    console.escrever("Deixe em branco para manter o valor atual.")?;
    let mut alteracao = AtualizacaoProduto::default();

    let nome = console.ler_linha(&format!("Nome [{}]: ", atual.nome))?;
    if !nome.trim().is_empty() {
        alteracao.nome = Some(nome);
    }

    let preco = console.ler_linha(&format!("Preço [{}]: ", formatar_reais(&atual.preco_venda)))?;
    if !preco.trim().is_empty() {
        let Some(valor) = console.tratar(ler_valor(&preco))? else {
            return Ok(());
        };
        alteracao.preco_venda = Some(valor);
    }

    let estoque = console.ler_linha(&format!("Estoque [{}]: ", atual.quantidade_estoque))?;
    if !estoque.trim().is_empty() {
        let Some(quantidade) = console.tratar(ler_inteiro(&estoque))? else {
            return Ok(());
        };
        alteracao.quantidade_estoque = Some(quantidade);
    }

    if alteracao.is_vazia() {
        return console.escrever("Nenhuma alteração informada.");
    }

    if let Some(produto) = console.tratar(loja.catalogo.atualizar(id, alteracao))? {
        console.escrever(format!("Produto ID {} atualizado.", produto.id))?;
        let mensagem = format!(
            "PRODUTO ATUALIZADO: ID {} de '{}' {} estoque {} para '{}' {} estoque {}.",
            id,
            atual.nome,
            formatar_reais(&atual.preco_venda),
            atual.quantidade_estoque,
            produto.nome,
            formatar_reais(&produto.preco_venda),
            produto.quantidade_estoque
        );
        if let Some(aviso) = loja.registrar_log(&mensagem) {
            console.escrever(aviso)?;
        }
    }
    Ok(())
}

fn remover_produto<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    let texto_id = console.ler_linha("ID do produto a remover: ")?;
    let Some(id) = console.tratar(ler_inteiro(&texto_id))? else {
        return Ok(());
    };
    let Some(nome) = loja.catalogo.buscar(id).map(|p| p.nome.clone()) else {
        return console.escrever(format!("Erro: Produto com ID {} não encontrado.", id));
    };

    if !console.confirmar(&format!("Remover '{}'?", nome))? {
        return console.escrever("Remoção cancelada.");
    }

    if let Some(produto) = console.tratar(loja.catalogo.remover(id))? {
        console.escrever(format!("Produto '{}' removido.", produto.nome))?;
        if let Some(aviso) = loja.registrar_log(&format!("PRODUTO REMOVIDO: ID {} '{}'.", produto.id, produto.nome)) {
            console.escrever(aviso)?;
        }
    }
    Ok(())
}

fn repor_estoque<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    let texto_id = console.ler_linha("ID do produto: ")?;
    let Some(id) = console.tratar(ler_inteiro(&texto_id))? else {
        return Ok(());
    };
    let texto_quantidade = console.ler_linha("Quantidade a repor: ")?;
    let Some(quantidade) = console.tratar(ler_inteiro(&texto_quantidade))? else {
        return Ok(());
    };

    if let Some(produto) = console.tratar(loja.catalogo.repor_estoque(id, quantidade))? {
        console.escrever(format!("Estoque de '{}' agora é {}.", produto.nome, produto.quantidade_estoque))?;
        let mensagem = format!(
            "ESTOQUE REPOSTO: ID {} '{}' +{} (total {}).",
            produto.id, produto.nome, quantidade, produto.quantidade_estoque
        );
        if let Some(aviso) = loja.registrar_log(&mensagem) {
            console.escrever(aviso)?;
        }
    }
    Ok(())
}

fn registrar_entrada_caixa<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    let tipo = console.ler_linha("Tipo (ex.: nota_10, moeda_1): ")?;
    let texto_valor = console.ler_linha("Valor unitário: ")?;
    let Some(valor) = console.tratar(ler_valor(&texto_valor))? else {
        return Ok(());
    };
    let texto_quantidade = console.ler_linha("Quantidade: ")?;
    let Some(quantidade) = console.tratar(ler_inteiro(&texto_quantidade))? else {
        return Ok(());
    };

    let entrada = EntradaCaixa { tipo, valor, quantidade };
    if let Some(registrada) = console.tratar(loja.caixa.registrar_entrada(entrada))? {
        let mensagem = format!(
            "ENTRADA DE CAIXA: '{}' {} x {} (total {}).",
            registrada.tipo,
            quantidade,
            formatar_reais(&registrada.valor),
            registrada.quantidade
        );
        console.escrever(format!("Entrada '{}' registrada. Quantidade atual: {}.", registrada.tipo, registrada.quantidade))?;
        if let Some(aviso) = loja.registrar_log(&mensagem) {
            console.escrever(aviso)?;
        }
    }
    Ok(())
}

fn ver_log<R: BufRead, W: Write>(loja: &Loja, console: &mut Console<R, W>) -> Resultado<()> {
    console.cabecalho("LOG DO SUPERVISOR")?;
    let linhas = match loja.log.ultimas(LINHAS_DO_LOG) {
        Ok(linhas) => linhas,
        Err(e) => {
            warn!("falha ao ler log do supervisor: {}", e);
            return console.escrever(format!("AVISO: não foi possível ler o log do supervisor ({}).", e));
        }
    };
    if linhas.is_empty() {
        return console.escrever("Nenhuma ação registrada.");
    }
    for linha in linhas {
        console.escrever(linha)?;
    }
    Ok(())
}
