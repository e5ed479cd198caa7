use clap::{Parser, Subcommand};
use miette::Result;
use recast_cpp::OutputKind;
use recast_driver::{Driver, TranslateConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recast")]
#[command(author, version, about = "A format-preserving Java to C++ source translator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate Java source files to C++
    Translate {
        /// Java source files to translate
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file path (single input only; default: input with .cpp/.h)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit a header (prototypes) instead of a source file
        #[arg(long)]
        header: bool,

        /// Path to a recast.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Parse Java source files and report errors without translating
    Check {
        /// Java source files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the AST of a Java source file
    Dump {
        /// Java source file to dump
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            files,
            output,
            header,
            config,
        } => {
            let config = match config {
                Some(path) => TranslateConfig::from_file(&path)
                    .map_err(|e| miette::miette!("{}", e))?,
                None => TranslateConfig::default(),
            };
            let driver = Driver::with_config(&config);

            let output_kind = if header {
                OutputKind::Header
            } else {
                OutputKind::Source
            };
            let extension = if header { "h" } else { "cpp" };

            if output.is_some() && files.len() > 1 {
                return Err(miette::miette!(
                    "--output only works with a single input file"
                ));
            }

            for file in &files {
                let cpp = driver.translate_file(file, output_kind)?;
                let output_path = output
                    .clone()
                    .unwrap_or_else(|| file.with_extension(extension));
                std::fs::write(&output_path, &cpp)
                    .map_err(|e| miette::miette!("Failed to write output: {}", e))?;
                println!("Translated {} -> {}", file.display(), output_path.display());
            }
        }

        Commands::Check { files } => {
            let driver = Driver::new();

            for file in &files {
                match driver.parse_file(file) {
                    Ok(_) => println!("{}: OK", file.display()),
                    Err(e) => {
                        eprintln!("{}: Error", file.display());
                        return Err(e);
                    }
                }
            }
        }

        Commands::Dump { file } => {
            let driver = Driver::new();
            let unit = driver.parse_file(&file)?;
            println!("{:#?}", unit);
        }
    }

    Ok(())
}
