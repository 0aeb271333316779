use crossterm::style::Stylize;
use std::env;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use vocab_core::{
    parse_day, Category, Clock, Config, DailyVocabulary, DailyWordSet, Dictionaries, FileCache, FixedClock,
    MemoryCache, SystemClock, VocabError, WordSetCache,
};

const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut vocab = match build_vocabulary() {
        Ok(vocab) => vocab,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            std::process::exit(1);
        }
    };

    match vocab.todays_words() {
        Ok(words) => print_ui(&words, vocab.clock()),
        Err(e) => {
            eprintln!("[ERROR] Could not select today's words: {}", e);
            std::process::exit(1);
        }
    }

    let mut rng = rand::thread_rng();
    loop {
        print!("\n> ");
        let _ = stdout().flush();

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                break;
            }
        }

        match input.trim() {
            "exit" | "quit" => break,
            "s" | "sentence" => match vocab.sentence(&mut rng) {
                Ok(sentence) => println!("{}", sentence.green()),
                Err(e) => eprintln!("[ERROR] {}", e),
            },
            "j" | "json" => match vocab.todays_words().and_then(|w| Ok(serde_json::to_string_pretty(&w)?)) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("[ERROR] {}", e),
            },
            "r" | "refresh" => match vocab.refresh() {
                Ok(words) => print_ui(&words, vocab.clock()),
                Err(e) => eprintln!("[ERROR] {}", e),
            },
            "" => {}
            other => println!("Unknown command '{}'. Try: sentence, json, refresh, exit", other),
        }
    }
}

/// Wires the service from `VOCAB_CONFIG`, `VOCAB_DICTIONARY`, `VOCAB_CACHE_DIR` and `VOCAB_DATE`.
fn build_vocabulary() -> Result<DailyVocabulary, VocabError> {
    let config = match env::var_os("VOCAB_CONFIG") {
        Some(path) => Config::from_json_file(&PathBuf::from(path))?,
        None => Config::default(),
    };

    let dictionaries = match env::var_os("VOCAB_DICTIONARY") {
        Some(path) => Dictionaries::from_json_file(&PathBuf::from(path))?,
        None => Dictionaries::builtin(),
    };

    let cache: Box<dyn WordSetCache> = match env::var_os("VOCAB_CACHE_DIR") {
        Some(dir) => Box::new(FileCache::new(dir)),
        None => Box::new(MemoryCache::new()),
    };

    let clock: Box<dyn Clock> = match env::var("VOCAB_DATE") {
        Ok(day) => Box::new(FixedClock::at_day(parse_day(&day)?)),
        Err(_) => Box::new(SystemClock),
    };

    Ok(DailyVocabulary::with_parts(dictionaries, config, cache, clock))
}

fn print_ui(words: &DailyWordSet, clock: &dyn Clock) {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "Daily Vocabulary".bold());
    println!("{}", clock.now().format(CLOCK_FORMAT).to_string().dark_grey());
    println!("---------------------------------------------------------------");

    for category in Category::ALL {
        println!("\n{}", category.label().to_uppercase().cyan().bold());
        for entry in words.words(category) {
            println!("  {} - {}", entry.english.as_str().bold(), entry.portuguese);
        }
    }

    println!("\nCommands: 's' sentence, 'j' json, 'r' refresh, 'exit' to quit.");
}
