//! Cube Words CLI
//!
//! Searches every arrangement of the letter cubes for words of the requested
//! length and prints the ones found in the dictionary.

use clap::Parser;
use cube_words::prompt::prompt_word_length;
use cube_words::sink::{candidates_file, matches_file, write_word_list};
use cube_words::{
    CandidateSink, CubeError, CubePool, Dictionary, LineSink, NullSink, ProgressReporter,
    SearchConfig, SearchEngine, MAX_WORD_LENGTH, MIN_WORD_LENGTH,
};
use log::{debug, warn};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Find the dictionary words that can be spelled with letter cubes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Word list, one word per line
    #[arg(short, long, default_value = "ITA.txt")]
    dictionary: PathBuf,

    /// Word length; asked interactively when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(MIN_WORD_LENGTH as i64..=MAX_WORD_LENGTH as i64))]
    length: Option<u8>,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Letters of one cube; repeat to replace the standard cubes
    #[arg(short, long = "cube", value_name = "LETTERS")]
    cubes: Vec<String>,

    /// Directory receiving the candidate and valid word files
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn read_length() -> Result<Option<usize>, CubeError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_word_length(
        &mut stdin.lock(),
        &mut stdout,
        MIN_WORD_LENGTH..=MAX_WORD_LENGTH,
    )
    .map_err(CubeError::from)
}

fn run(opts: Opts) -> Result<(), CubeError> {
    let dictionary = Dictionary::load(&opts.dictionary)?;
    println!("Loaded {} words.", dictionary.len());

    let base = if opts.cubes.is_empty() {
        CubePool::standard()
    } else {
        CubePool::parse(&opts.cubes)?
    };
    println!("Cubes: {}", base);

    let length = match opts.length {
        Some(length) => usize::from(length),
        None => match read_length()? {
            Some(length) => length,
            None => {
                println!();
                println!("No word length given.");
                return Ok(());
            }
        },
    };

    let mut config = SearchConfig::default();
    if let Some(workers) = opts.workers {
        config = config.with_workers(workers);
    }
    let engine = SearchEngine::new(config);
    let plan = engine.plan(&base, length)?;

    let cancel = engine.cancel_flag();
    if let Err(e) = ctrlc::set_handler(move || cancel.store(true, Ordering::Relaxed)) {
        warn!("Ctrl+C handler not installed: {}", e);
    }

    let mut sink: Box<dyn CandidateSink> = match &opts.output {
        Some(dir) => {
            let path = candidates_file(dir, length);
            debug!("writing candidates to {}", path.display());
            Box::new(LineSink::create(&path).map_err(CubeError::Sink)?)
        }
        None => Box::new(NullSink),
    };

    println!(
        "Searching {} arrangements of {} cubes on {} workers...",
        plan.arrangements(),
        plan.pool().len(),
        engine.config().workers
    );
    let reporter = if opts.quiet {
        ProgressReporter::hidden(plan.batches())
    } else {
        ProgressReporter::with_bar(plan.batches())
    };

    let start = Instant::now();
    let outcome = engine.execute(&plan, sink.as_mut(), &reporter.handle());
    let elapsed = start.elapsed();
    reporter.finish()?;
    let outcome = outcome?;
    println!("Total time: {:.2?}", elapsed);

    let matches = dictionary.matches(&outcome.candidates);
    println!("Candidates generated: {}", outcome.candidates.len());
    println!("Valid words: {}", matches.len());
    println!();
    for word in &matches {
        println!("{}", word);
    }

    if let Some(dir) = &opts.output {
        let path = matches_file(dir, length);
        write_word_list(&path, &matches)?;
        println!();
        println!("Valid words saved to '{}'.", path.display());
    }
    io::stdout().flush()?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();
    debug!("Command line options: {:?}", opts);

    if let Err(e) = run(opts) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
