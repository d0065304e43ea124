// src/menu_principal.rs

use std::io::{BufRead, Write};

use chrono::{Local, Timelike};
use tracing::{error, info};

use crate::loja::Loja;
use crate::shared::console::Console;
use crate::shared::erros::{FrutariaError, Resultado};
use crate::shared::shared_structs::saudacao_para_hora;
use crate::usuarios::admin_menu::menu_administrativo;
use crate::vendas::vendas_menu::menu_cliente;

/// Laço principal do programa.
///
/// Ao sair (opção 0 ou fim da entrada) os produtos e o caixa são gravados.
/// Em caso de erro fatal a gravação também é tentada antes de devolver o erro.
pub fn executar<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    for aviso in std::mem::take(&mut loja.avisos) {
        console.escrever(aviso)?;
    }

    let resultado = laco(loja, console);

    match resultado {
        Ok(()) | Err(FrutariaError::EntradaEncerrada) => {
            loja.salvar()?;
            info!("dados salvos, encerrando");
            console.escrever("\nDados salvos. Obrigado e volte sempre!")?;
            Ok(())
        }
        Err(e) => {
            error!("erro fatal: {}", e);
            if let Err(ao_salvar) = loja.salvar() {
                error!("também não foi possível salvar os dados: {}", ao_salvar);
            }
            Err(e)
        }
    }
}

fn laco<R: BufRead, W: Write>(loja: &mut Loja, console: &mut Console<R, W>) -> Resultado<()> {
    loop {
        let saudacao = saudacao_para_hora(Local::now().hour());
        console.cabecalho(&format!("{} - {}", loja.config.nome_loja, saudacao))?;
        console.escrever("[1] Cliente\n[2] Administrativo\n[0] Sair")?;

        match console.ler_opcao()?.as_str() {
            "1" => menu_cliente(loja, console)?,
            "2" => menu_administrativo(loja, console)?,
            "0" => return Ok(()),
            _ => {
                console.escrever("Opção inválida!")?;
                console.pausar()?;
            }
        }
    }
}
