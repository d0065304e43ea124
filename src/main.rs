// src/main.rs

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use frutaria::loja::Loja;
use frutaria::menu_principal::executar;
use frutaria::shared::config::Config;
use frutaria::shared::console::Console;

const FILTRO_LOG_PADRAO: &str = "frutaria=info";
const ARQUIVO_LOG_APLICACAO: &str = "frutaria.log";

/// Ponto de venda e controle de estoque da Frutaria.
#[derive(Parser, Debug)]
#[command(name = "frutaria", version, about)]
struct Cli {
    /// Diretório com produtos.csv, caixa.csv e os logs
    #[arg(short, long, env = "FRUTARIA_DADOS", default_value = ".")]
    dados: PathBuf,

    /// Arquivo de configuração (padrão: <dados>/frutaria.toml, se existir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Também exibe o log da aplicação no stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // O guard precisa viver até o fim do programa para o log ser descarregado.
    let _guard = iniciar_log(&cli)?;

    let config = Config::resolver(&cli.dados, cli.config.as_deref())
        .context("Falha ao carregar a configuração")?;

    // Carrega produtos e caixa. Um CSV malformado impede a abertura
    // para que os dados não sejam sobrescritos na saída.
    let mut loja = Loja::abrir(&cli.dados, config)
        .with_context(|| format!("Falha ao abrir os dados em '{}'", cli.dados.display()))?;

    let limpar_tela = loja.config.limpar_tela;
    let mut console = Console::new(io::stdin().lock(), io::stdout(), limpar_tela);

    executar(&mut loja, &mut console).context("Erro durante a execução")?;
    Ok(())
}

/// Log da aplicação em `<dados>/frutaria.log`, para não misturar com os menus.
/// Com `--verbose`, uma segunda camada escreve no stderr.
fn iniciar_log(cli: &Cli) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(&cli.dados)
        .with_context(|| format!("Falha ao criar o diretório de dados '{}'", cli.dados.display()))?;

    let arquivo = tracing_appender::rolling::never(&cli.dados, ARQUIVO_LOG_APLICACAO);
    let (escritor, guard) = tracing_appender::non_blocking(arquivo);

    let filtro = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRO_LOG_PADRAO));

    let stderr = cli.verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_filter(filtro())
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(escritor)
                .with_ansi(false)
                .with_filter(filtro()),
        )
        .with(stderr)
        .init();

    Ok(guard)
}
