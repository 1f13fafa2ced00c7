use clap::Parser;
use log::info;
use prefixly_lib::prefixly_generate::prefixly;
use prefixly_lib::PrefixlyOptions;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prefixly")]
#[command(about = "Add missing vendor-prefixed variants to CSS declarations")]
struct Args {
    /// Input CSS file.
    input: PathBuf,

    /// Output file. Written to stdout when omitted.
    output: Option<PathBuf>,

    /// JSON file with plugin options.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Emit compact CSS.
    #[arg(long)]
    minify: bool,
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("prefixly: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let options = match &args.options {
        Some(path) => PrefixlyOptions::from_path(path)?,
        None => PrefixlyOptions::default(),
    };

    let css_content = fs::read_to_string(&args.input)
        .map_err(|e| format!("reading {}: {}", args.input.display(), e))?;
    info!("read {} bytes from {}", css_content.len(), args.input.display());

    let output = prefixly::generate(&css_content, options, args.minify)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output).map_err(|e| format!("writing {}: {}", path.display(), e))?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}
