//! boxstyle - validate and normalize style declaration blocks

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde_json::{Map, json};

use boxstyle::style::{StyleDeclaration, Value, node_style};

#[derive(Parser)]
#[command(name = "boxstyle")]
#[command(version, about = "Validate and normalize box style declarations", long_about = None)]
#[command(after_help = "EXAMPLES:
    boxstyle 'padding: 4 8; display: none'       Print the canonical form
    boxstyle --json 'color: #ff0000'             Print explicit values as JSON
    echo 'margin: 1' | boxstyle -                Read the block from stdin")]
struct Cli {
    /// Declaration block, or '-' to read it from stdin
    #[arg(value_name = "DECLARATIONS")]
    input: String,

    /// Revert a property to its initial value after applying the block
    #[arg(short, long, value_name = "NAME")]
    reset: Vec<String>,

    /// Print explicitly set properties as a JSON object
    #[arg(short, long)]
    json: bool,

    /// Log every applied change
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let text = if cli.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| e.to_string())?;
        buf
    } else {
        cli.input.clone()
    };

    let mut style = StyleDeclaration::with_applicator(node_style::schema(), |name: &str, value: &Value| {
        info!("{name} = {value}");
    });
    style.apply_css(&text).map_err(|e| e.to_string())?;
    for name in &cli.reset {
        style.delete(name).map_err(|e| e.to_string())?;
    }

    if cli.json {
        let items: Map<String, serde_json::Value> = style
            .items()
            .into_iter()
            .map(|(name, value)| (name.to_string(), to_json(value)))
            .collect();
        serde_json::to_string_pretty(&items).map_err(|e| e.to_string())
    } else {
        Ok(style.to_string())
    }
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::None => serde_json::Value::Null,
        Value::Str(s) => json!(s),
        Value::Int(i) => json!(i),
        Value::Number(n) => json!(n),
        Value::Color(c) => json!(c.to_string()),
        Value::Tuple(items) => items.iter().map(to_json).collect(),
    }
}
