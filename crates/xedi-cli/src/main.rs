//! # xedi-cli
//!
//! Command-line interface for the X12-to-XML conversion engine.
//!
//! `convert` turns an EDI file into XML; `inspect` parses a file and
//! prints a short summary without converting it.

use clap::Parser;
use xedi_pipeline::{Processor, ProcessorConfig};
use xedi_x12::X12Parser;

#[derive(Parser)]
#[command(name = "xedi")]
#[command(about = "X12 EDI to XML conversion")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Convert an EDI file to XML
    Convert {
        /// Input file path
        input: String,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Emit compact output instead of indented
        #[arg(long)]
        compact: bool,

        /// Strip the XML declaration from the output
        #[arg(long)]
        no_header: bool,
    },

    /// Summarize an EDI file without converting it
    Inspect {
        /// Input file path
        input: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => ProcessorConfig::from_yaml(&std::fs::read_to_string(&path)?)?,
        None => ProcessorConfig::default(),
    };

    match cli.command {
        Commands::Convert {
            input,
            output,
            compact,
            no_header,
        } => {
            if compact {
                config.indent = false;
            }
            if no_header {
                config.include_headers = false;
            }

            tracing::info!("Converting {}", input);
            let data = std::fs::read_to_string(&input)?;
            let processor = Processor::new(config);
            let xml = processor.convert(&data)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, xml)?;
                    tracing::info!("Wrote {}", path);
                }
                None => println!("{xml}"),
            }
        }
        Commands::Inspect { input } => {
            let mut parser = X12Parser::new();
            parser.load_file(&input)?;
            parser.parse()?;

            let document = parser.document();
            let interchange = document.interchange();
            let env = if interchange.is_some_and(|ic| ic.is_test()) {
                "TEST"
            } else {
                "PROD"
            };

            println!("doc_type: {}", document.doc_type(0, 0));
            println!("env: {env}");
            println!(
                "sender_id: {}",
                interchange.and_then(|ic| ic.sender_id()).unwrap_or("")
            );
            println!(
                "receiver_id: {}",
                interchange.and_then(|ic| ic.receiver_id()).unwrap_or("")
            );
            println!("groups: {}", document.groups().len());
            println!(
                "transactions: {}",
                document.transactions(0).map_or(0, <[_]>::len)
            );
            println!("rows: {}", parser.row_count());
        }
    }

    Ok(())
}
