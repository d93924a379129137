use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use opdoc::{convert_file, instrumentation, OutputStyle};

const DEFAULT_INPUT: &str = "./instructions/6502.txt";

#[derive(Parser)]
#[command(version)]
#[command(about = "Convert 6502 instruction documentation to JSON")]
struct Cli {
    #[clap(help = "Text file with alternating mnemonic and description lines")]
    #[clap(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    #[clap(long, value_enum, default_value_t = OutputStyle::Spaced)]
    #[clap(help = "Layout of the JSON output")]
    style: OutputStyle,
    #[clap(long)]
    #[clap(help = "Enable chrome tracing")]
    #[clap(long_help = "Enable chrome tracing which on program exit will generate
a json file to be opened with a chrome tracing compatible
viewer.")]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _trace_guard = if cli.trace {
        Some(instrumentation::trace())
    } else {
        None
    };

    let docs = convert_file(&cli.input).with_context(|| "Conversion failed")?;
    let json = docs
        .to_json(cli.style)
        .with_context(|| "Unable to generate JSON")?;
    println!("{}", json);

    Ok(())
}
