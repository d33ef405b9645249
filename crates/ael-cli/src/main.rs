use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "ael")]
#[command(about = "AEL — arithmetic expression language front end")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read lines from stdin and print each expression tree
    Repl,

    /// Parse an .ael file and print its expression tree
    Parse {
        /// Input .ael file
        path: String,
    },

    /// Check an .ael file for errors without printing the tree
    Check {
        /// Input .ael file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => cmd_repl(),
        Command::Parse { path } => cmd_parse(&path),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_repl() {
    let stdin = io::stdin();

    loop {
        print!("ael> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF or a dead stdin ends the session
            Ok(_) => {}
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        match ael_parser::Parser::parse(line) {
            Ok(expr) => println!("{expr}"),
            Err(e) => eprintln!("{}", e.report("<stdin>", line)),
        }
    }
}

fn cmd_parse(path: &str) {
    let source = read_source(path);

    match ael_parser::Parser::parse(&source) {
        Ok(expr) => println!("{expr:#?}"),
        Err(e) => {
            eprintln!("{}", e.report(path, &source));
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str) {
    let source = read_source(path);

    if let Err(e) = ael_parser::Parser::parse(&source) {
        eprintln!("{}", e.report(path, &source));
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}
