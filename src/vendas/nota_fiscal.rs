// src/vendas/nota_fiscal.rs

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;

use super::vendas_structs::VendaConcluida;
use crate::shared::erros::Resultado;
use crate::shared::shared_structs::formatar_reais;

const LARGURA_NOTA: usize = 45;

/// Monta o texto da nota fiscal de uma venda.
pub fn montar_nota_fiscal(loja: &str, venda: &VendaConcluida, instante: DateTime<Local>) -> String {
    let dupla = "=".repeat(LARGURA_NOTA);
    let simples = "-".repeat(LARGURA_NOTA);

    let mut linhas = vec![
        dupla.clone(),
        format!("{:^45}", loja),
        format!("{:^45}", "NOTA FISCAL"),
        dupla.clone(),
        format!("Data: {}", instante.format("%d/%m/%Y %H:%M:%S")),
        simples.clone(),
    ];

    for item in &venda.itens {
        linhas.push(item.nome.clone());
        linhas.push(format!(
            "  {} x {:<14} {:>20}",
            item.quantidade,
            formatar_reais(&item.preco_venda),
            formatar_reais(&item.subtotal())
        ));
    }

    linhas.push(simples);
    linhas.push(format!("TOTAL: {:>38}", formatar_reais(&venda.total)));
    linhas.push(dupla);
    linhas.push("Obrigado e volte sempre!".to_string());

    let mut nota = linhas.join("\n");
    nota.push('\n');
    nota
}

/// Grava a nota fiscal, substituindo a da compra anterior.
pub fn gerar_nota_fiscal(caminho: &Path, loja: &str, venda: &VendaConcluida, instante: DateTime<Local>) -> Resultado<()> {
    fs::write(caminho, montar_nota_fiscal(loja, venda, instante))?;
    info!("nota fiscal gravada em '{}'", caminho.display());
    Ok(())
}
