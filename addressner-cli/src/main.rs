//! CLI de rotulagem de endereços em lote: lê registros (endereço + campos
//! geocodificados) em JSON Lines, limpa, rotula e grava o JSON de treinamento.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use addressner_core::{
    corpus::demo_records, AddressLabeller, AddressRecord, CleaningConfig, CleaningOptions,
};

#[derive(Parser)]
#[command(name = "addressner", about = "Rotulagem fuzzy de endereços para treinamento NER")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rotula um lote de registros JSON Lines e grava o JSON de treinamento
    Label {
        /// Arquivo de entrada (um registro JSON por linha; "-" para stdin)
        #[arg(short, long)]
        input: PathBuf,
        /// Arquivo de saída (JSON; omitido = stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Razão mínima de similaridade para aceitar uma correspondência
        #[arg(short, long, default_value_t = 0.6)]
        tolerance: f64,
        /// Remove também a informação de apartamento/andar na limpeza
        #[arg(long)]
        strip_extra_info: bool,
    },
    /// Limpa um único endereço e imprime o resultado
    Clean {
        /// Endereço a limpar
        address: String,
        /// Mantém a informação de apartamento/andar
        #[arg(long)]
        keep_extra_info: bool,
    },
    /// Rotula o corpus de demonstração embutido e imprime os spans
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Label { input, output, tolerance, strip_extra_info } => {
            run_label(input, output, tolerance, strip_extra_info)
        }
        Command::Clean { address, keep_extra_info } => run_clean(&address, keep_extra_info),
        Command::Demo => run_demo(),
    }
}

fn build_labeller(tolerance: f64, strip_extra_info: bool) -> AddressLabeller {
    let options = CleaningOptions { extra_info: strip_extra_info, ..CleaningOptions::default() };
    AddressLabeller::new()
        .with_tolerance(tolerance)
        .with_cleaning(CleaningConfig::new(), options)
}

fn read_records(input: &PathBuf) -> Result<Vec<AddressRecord>> {
    let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(input)
            .with_context(|| format!("não foi possível abrir {}", input.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: AddressRecord = serde_json::from_str(&line)
            .with_context(|| format!("registro inválido na linha {}", number + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn run_label(
    input: PathBuf,
    output: Option<PathBuf>,
    tolerance: f64,
    strip_extra_info: bool,
) -> Result<()> {
    let records = read_records(&input)?;
    info!(total = records.len(), tolerance, "registros carregados");

    let labeller = build_labeller(tolerance, strip_extra_info);
    let labelled = labeller.label_batch(&records);

    let span_count: usize = labelled.iter().map(|l| l.entities.len()).sum();
    let empty = labelled.iter().filter(|l| l.entities.is_empty()).count();
    info!(spans = span_count, sem_spans = empty, "rotulagem concluída");

    let training: Vec<serde_json::Value> =
        labelled.iter().map(|l| l.to_training_json()).collect();
    let json = serde_json::to_string_pretty(&training)?;

    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("não foi possível criar {}", path.display()))?;
            file.write_all(json.as_bytes())?;
            info!(saida = %path.display(), "arquivo gravado");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_clean(address: &str, keep_extra_info: bool) -> Result<()> {
    let config = CleaningConfig::new();
    let options = CleaningOptions { extra_info: !keep_extra_info, ..CleaningOptions::default() };
    println!("{}", config.clean(address, &options));
    Ok(())
}

fn run_demo() -> Result<()> {
    let labeller = AddressLabeller::new();
    for result in labeller.label_batch(&demo_records()) {
        println!("{}", result.sentence);
        for span in &result.entities {
            println!(
                "  [{:>3}, {:>3}) {:<2} \"{}\"",
                span.start,
                span.end,
                span.label,
                &result.sentence[span.start..span.end]
            );
        }
        println!();
    }
    Ok(())
}
