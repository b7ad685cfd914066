use clap::{Parser as ClapParser, Subcommand};
use sprig_lang::cli::{self, CheckOptions, CheckResult, CliError};
use sprig_lang::output::{to_json, to_json_pretty};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sprig")]
#[command(about = "Sprig - A small expression language for computing typed values from named fields")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and evaluate a sprig expression
    Check {
        /// The expression to evaluate
        expression: String,

        /// Variable binding NAME=VALUE, or NAME to bind it as absent (repeatable)
        #[arg(short, long = "var", value_name = "NAME=VALUE")]
        var: Vec<String>,

        /// JSON object of variables (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Print the result as typed JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long, requires = "json")]
        pretty: bool,

        /// Only compile, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'sprig docs' to list categories)
        category: String,
    },

    /// Short onboarding tutorial
    Onboard,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            var,
            input,
            json,
            pretty,
            syntax_only,
        } => run_check(expression, var, input, json, pretty, syntax_only),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
        Commands::Onboard => {
            print!("{}", cli::get_onboarding_content());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    expression: String,
    variables: Vec<String>,
    input: Option<String>,
    json: bool,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        input,
        variables,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid(compiled) => {
            println!("Syntax is valid");
            println!("Postfix: {}", compiled);
        }
        CheckResult::Success(result) if json => {
            let rendered = if pretty { to_json_pretty(&result) } else { to_json(&result) };
            println!("{}", rendered);
        }
        CheckResult::Success(result) => println!("{}", result),
    }
    Ok(())
}
