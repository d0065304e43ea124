// src/shared/console.rs

use std::io::{BufRead, Write};

use super::erros::{FrutariaError, Resultado};

/// Sequência ANSI que limpa a tela e posiciona o cursor no topo.
const LIMPAR_TELA: &str = "\x1B[2J\x1B[1;1H";

/// Interface de terminal usada por todos os menus.
///
/// É genérica sobre a entrada e a saída para que os menus possam ser
/// exercitados nos testes com um `Cursor` e um `Vec<u8>`.
pub struct Console<R, W> {
    entrada: R,
    saida: W,
    limpar_tela: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(entrada: R, saida: W, limpar_tela: bool) -> Self {
        Console { entrada, saida, limpar_tela }
    }

    /// Escreve uma linha na saída.
    pub fn escrever(&mut self, texto: impl AsRef<str>) -> Resultado<()> {
        writeln!(self.saida, "{}", texto.as_ref())?;
        Ok(())
    }

    /// Exibe um prompt e lê uma linha, sem o terminador.
    /// Fim da entrada vira `FrutariaError::EntradaEncerrada`.
    pub fn ler_linha(&mut self, prompt: &str) -> Resultado<String> {
        write!(self.saida, "{}", prompt)?;
        self.saida.flush()?;

        let mut linha = String::new();
        if self.entrada.read_line(&mut linha)? == 0 {
            return Err(FrutariaError::EntradaEncerrada);
        }
        Ok(linha.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ler_opcao(&mut self) -> Resultado<String> {
        Ok(self.ler_linha("\nEscolha uma opção: ")?.trim().to_string())
    }

    /// Pergunta de sim/não; apenas "s" (maiúsculo ou minúsculo) confirma.
    pub fn confirmar(&mut self, pergunta: &str) -> Resultado<bool> {
        let resposta = self.ler_linha(&format!("{} (s/n): ", pergunta))?;
        Ok(resposta.trim().eq_ignore_ascii_case("s"))
    }

    pub fn pausar(&mut self) -> Resultado<()> {
        self.ler_linha("\nPressione Enter para continuar... ")?;
        Ok(())
    }

    /// Limpa a tela (se habilitado) e exibe um cabeçalho centralizado.
    pub fn cabecalho(&mut self, titulo: &str) -> Resultado<()> {
        if self.limpar_tela {
            write!(self.saida, "{}", LIMPAR_TELA)?;
        }
        writeln!(self.saida, "{}", "=".repeat(45))?;
        writeln!(self.saida, "   {:^35}", titulo)?;
        writeln!(self.saida, "{}", "=".repeat(45))?;
        Ok(())
    }

    /// Exibe erros de operação (ID inexistente, estoque insuficiente...) e
    /// devolve `None`; erros fatais continuam propagando.
    pub fn tratar<T>(&mut self, resultado: Resultado<T>) -> Resultado<Option<T>> {
        match resultado {
            Ok(valor) => Ok(Some(valor)),
            Err(e) if !e.is_fatal() => {
                self.escrever(format!("Erro: {}", e))?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Devolve a saída, usado pelos testes para inspecionar o que foi exibido.
    pub fn into_saida(self) -> W {
        self.saida
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn le_linhas_e_detecta_fim_da_entrada() {
        let mut console = Console::new(Cursor::new("abc\r\n"), Vec::new(), false);
        assert_eq!(console.ler_linha("> ").unwrap(), "abc");
        assert!(matches!(console.ler_linha("> "), Err(FrutariaError::EntradaEncerrada)));
    }

    #[test]
    fn confirmacao_so_aceita_s() {
        let mut console = Console::new(Cursor::new("S\nsim\nn\n"), Vec::new(), false);
        assert!(console.confirmar("Confirmar?").unwrap());
        assert!(!console.confirmar("Confirmar?").unwrap());
        assert!(!console.confirmar("Confirmar?").unwrap());
    }

    #[test]
    fn cabecalho_sem_limpar_tela() {
        let mut console = Console::new(Cursor::new(""), Vec::new(), false);
        console.cabecalho("TESTE").unwrap();
        let saida = String::from_utf8(console.into_saida()).unwrap();
        assert!(saida.contains("TESTE"));
        assert!(!saida.contains('\x1B'));
    }
}
