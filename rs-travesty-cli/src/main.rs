use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use rs_travesty_core::io::{read_corpus, read_corpus_from};
use rs_travesty_core::{GenerationInput, TravestyResult, generate};

/// Generates text that mimics a corpus with a k-th order character travesty.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Corpus file; `-` or nothing reads standard input
    input: Option<PathBuf>,

    /// JSON file with generation parameters; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum corpus symbols kept, wraparound tail included
    #[arg(short, long = "buffer-size")]
    buffer_size: Option<usize>,

    /// Context length (order of the model)
    #[arg(short, long)]
    pattern_length: Option<usize>,

    /// Minimum number of symbols to emit
    #[arg(short, long)]
    out_chars: Option<usize>,

    /// Target line width
    #[arg(short = 'w', long)]
    line_width: Option<usize>,

    /// Indent wrapped lines and break lines on `|`
    #[arg(long, default_value_t = false)]
    verse: bool,

    /// Random seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the emitted symbol count to stderr
    #[arg(long, default_value_t = false)]
    stats: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    /// Resolves the final parameters: config file (or defaults), then explicit flags.
    fn generation_input(&self) -> TravestyResult<GenerationInput> {
        let mut input = match &self.config {
            Some(path) => {
                info!("Loading config from {}", path.display());
                GenerationInput::load_from_file(path)?
            }
            None => GenerationInput::default(),
        };

        if let Some(b) = self.buffer_size {
            input.buffer_capacity = b;
        }
        if let Some(p) = self.pattern_length {
            input.pattern_length = p;
        }
        if let Some(o) = self.out_chars {
            input.out_chars = o;
        }
        if let Some(w) = self.line_width {
            input.line_width = w;
        }
        if self.verse {
            input.verse = true;
        }
        if self.seed.is_some() {
            input.seed = self.seed;
        }

        input.validate()?;
        Ok(input)
    }

    fn read_input(&self) -> TravestyResult<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                info!("Reading corpus from {}", path.display());
                read_corpus(path)
            }
            _ => {
                info!("Reading corpus from stdin");
                read_corpus_from(io::stdin().lock())
            }
        }
    }
}

fn run(cli: &Cli) -> TravestyResult<()> {
    let input = cli.generation_input()?;
    debug!("{:?}", input);

    let corpus = cli.read_input()?;
    let produced = generate(&corpus, &input)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", produced.text)?;
    stdout.flush()?;

    if cli.stats {
        eprintln!("{} characters emitted", produced.chars_emitted);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("travesty: {}", e);
            ExitCode::FAILURE
        }
    }
}
