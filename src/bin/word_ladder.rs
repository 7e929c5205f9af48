use std::env;
use std::io::{self, BufRead, Write};

use pathladder::ladder::{Dictionary, WordLadder};
use pathladder::report::format_ladder;
use pathladder::web::server::DICTIONARY_ENV;

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: word_ladder [START END] ; dictionary from PATHLADDER_DICTIONARY or words.txt
    let args: Vec<String> = env::args().collect();
    let dictionary_path = env::var(DICTIONARY_ENV).unwrap_or_else(|_| "words.txt".to_string());
    let dictionary = Dictionary::load_or_empty(&dictionary_path);

    let (start, end) = match (args.get(1), args.get(2)) {
        (Some(start), Some(end)) => (start.clone(), end.clone()),
        _ => (prompt("Enter start word: ")?, prompt("Enter end word: ")?),
    };

    let ladder = WordLadder::new().generate(&start, &end, &dictionary);
    println!("{}", format_ladder(&ladder));

    if ladder.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
