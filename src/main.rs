use std::env;
use std::path::Path;
use std::process;

use astgen::error::{AstgenError, ErrorFormatter};
use astgen::{generate_grammar, grammar};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        let program = Path::new(args.first().map(String::as_str).unwrap_or("generate_ast"))
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("generate_ast");
        println!("{}", AstgenError::usage(program).message);
        process::exit(1);
    }

    let output_dir = Path::new(&args[1]);

    match generate_grammar(output_dir, &grammar::lox()) {
        Ok(paths) => {
            for path in paths {
                println!("Generated '{}'", path.display());
            }
        }
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new(&err).format());
            process::exit(1);
        }
    }
}
