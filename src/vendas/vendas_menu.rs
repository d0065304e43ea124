// src/vendas/vendas_menu.rs

use std::io::{BufRead, Write};

use chrono::Local;
use tracing::debug;

use super::carrinho::finalizar_compra;
use super::nota_fiscal::gerar_nota_fiscal;
use super::vendas_structs::Carrinho;
use crate::loja::Loja;
use crate::shared::console::Console;
use crate::shared::erros::Resultado;
use crate::shared::shared_structs::{formatar_reais, ler_inteiro};

/// Fluxo de compra do cliente.
///
/// O carrinho vive apenas dentro deste menu: ao voltar sem finalizar, ele é
/// descartado. Uma compra finalizada soma seu total às vendas da sessão.
pub fn menu_cliente<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    let mut carrinho = Carrinho::default();

    loop {
        console.cabecalho("CARRINHO DE COMPRAS")?;
        console.escrever("[1] Ver produtos\n[2] Adicionar item\n[3] Remover item\n[4] Ver carrinho\n[5] Finalizar compra\n[0] Voltar")?;

        match console.ler_opcao()?.as_str() {
            "1" => {
                listar_disponiveis(loja, console)?;
                console.pausar()?;
            }
            "2" => {
                adicionar_item(loja, &mut carrinho, console)?;
                console.pausar()?;
            }
            "3" => {
                remover_item(&mut carrinho, console)?;
                console.pausar()?;
            }
            "4" => {
                ver_carrinho(&carrinho, console)?;
                console.pausar()?;
            }
            "5" => {
                if finalizar(loja, &mut carrinho, console)? {
                    return Ok(());
                }
            }
            "0" => {
                debug!(itens = carrinho.itens.len(), "cliente voltou ao menu principal");
                return Ok(());
            }
            _ => {
                console.escrever("Opção inválida!")?;
                console.pausar()?;
            }
        }
    }
}

fn listar_disponiveis<R: BufRead, W: Write>(loja: &Loja, console: &mut Console<R, W>) -> Resultado<()> {
    console.cabecalho("PRODUTOS DISPONÍVEIS")?;
    let mut algum = false;
    for p in loja.catalogo.disponiveis() {
        algum = true;
        console.escrever(format!("ID: {:<3} | {:<25} | {}", p.id, p.nome, formatar_reais(&p.preco_venda)))?;
    }
    if !algum {
        console.escrever("Nenhum produto disponível no momento.")?;
    }
    Ok(())
}

fn adicionar_item<R: BufRead, W: Write>(
    loja: &Loja,
    carrinho: &mut Carrinho,
    console: &mut Console<R, W>,
) -> Resultado<()> {
    let texto_id = console.ler_linha("Digite o ID do produto: ")?;
    let Some(id) = console.tratar(ler_inteiro(&texto_id))? else {
        return Ok(());
    };
    let texto_quantidade = console.ler_linha("Quantidade: ")?;
    let Some(quantidade) = console.tratar(ler_inteiro(&texto_quantidade))? else {
        return Ok(());
    };

    if let Some(item) = console.tratar(carrinho.adicionar(&loja.catalogo, id, quantidade))? {
        let mensagem = format!(
            "'{}' adicionado ao carrinho. Quantidade no carrinho: {}.",
            item.nome, item.quantidade
        );
        console.escrever(mensagem)?;
    }
    Ok(())
}

fn remover_item<R: BufRead, W: Write>(carrinho: &mut Carrinho, console: &mut Console<R, W>) -> Resultado<()> {
    let texto_id = console.ler_linha("Digite o ID do produto a remover: ")?;
    let Some(id) = console.tratar(ler_inteiro(&texto_id))? else {
        return Ok(());
    };

    if carrinho.remover(id) {
        console.escrever(format!("Produto com ID {} removido do carrinho.", id))?;
    } else {
        console.escrever(format!("O produto com ID {} não está no carrinho.", id))?;
    }
    Ok(())
}

fn ver_carrinho<R: BufRead, W: Write>(carrinho: &Carrinho, console: &mut Console<R, W>) -> Resultado<()> {
    console.cabecalho("MEU CARRINHO")?;
    if carrinho.is_empty() {
        return console.escrever("Carrinho vazio.");
    }
    for item in &carrinho.itens {
        console.escrever(format!(
            "- {} | Qtd: {} | Subtotal: {}",
            item.nome,
            item.quantidade,
            formatar_reais(&item.subtotal())
        ))?;
    }
    console.escrever(format!("\nTotal: {}", formatar_reais(&carrinho.total())))
}

/// Devolve `true` quando a compra foi concluída e o cliente volta ao menu principal.
fn finalizar<R: BufRead, W: Write>(
    loja: &mut Loja,
    carrinho: &mut Carrinho,
    console: &mut Console<R, W>,
) -> Resultado<bool> {
    if carrinho.is_empty() {
        console.escrever("\nCarrinho vazio. Adicione itens para finalizar.")?;
        console.pausar()?;
        return Ok(false);
    }

    console.escrever(format!("\nTotal da compra: {}", formatar_reais(&carrinho.total())))?;
    if !console.confirmar("Confirmar compra?")? {
        console.escrever("Compra não confirmada.")?;
        console.pausar()?;
        return Ok(false);
    }

    let Some(venda) = console.tratar(finalizar_compra(&mut loja.catalogo, carrinho))? else {
        console.pausar()?;
        return Ok(false);
    };

    if console.confirmar("Deseja nota fiscal?")? {
        match gerar_nota_fiscal(&loja.caminhos.nota, &loja.config.nome_loja, &venda, Local::now()) {
            Ok(()) => console.escrever(format!("Nota fiscal gerada em '{}'.", loja.caminhos.nota.display()))?,
            Err(e) => console.escrever(format!("Erro ao gerar nota fiscal: {}", e))?,
        }
    }

    loja.caixa.registrar_venda(&venda.total);
    if let Some(aviso) = loja.registrar_log(&format!("COMPRA REALIZADA: Valor {}.", formatar_reais(&venda.total))) {
        console.escrever(aviso)?;
    }

    console.escrever("\nCompra finalizada com sucesso!")?;
    console.pausar()?;
    Ok(true)
}
