use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use quoi::{
    display_error,
    lexer::{lexer::tokenize, tokens::dump_tokens},
    parser::parser::{parse, ParserConfig},
};

const USAGE: &str = "usage: quoi <file> [--tokens] [--ast] [--max-depth N]";

struct Options {
    file_path: String,
    show_tokens: bool,
    show_ast: bool,
    config: ParserConfig,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut file_path = None;
    let mut show_tokens = false;
    let mut show_ast = false;
    let mut config = ParserConfig::default();

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tokens" => show_tokens = true,
            "--ast" => show_ast = true,
            "--max-depth" => {
                let value = args.next().ok_or("--max-depth needs a value")?;
                let depth = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid depth '{}'", value))?;
                config = config.with_max_nesting_depth(depth);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag '{}'", flag)),
            path => {
                if file_path.is_some() {
                    return Err(format!("unexpected argument '{}'", path));
                }
                file_path = Some(path.to_string());
            }
        }
    }

    Ok(Options {
        file_path: file_path.ok_or("missing source file")?,
        show_tokens,
        show_ast,
        config,
    })
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            process::exit(2);
        }
    };

    let file_name = Path::new(&options.file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.file_path.clone());

    let source = match read_to_string(&options.file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", options.file_path, err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let (tokens, scanner_errors) = tokenize(&source);

    println!("Tokenized in {:?}", start.elapsed());

    if options.show_tokens {
        print!("{}", dump_tokens(&tokens));
    }

    let parse_start = Instant::now();
    let (program, errors) = match parse(tokens, scanner_errors, options.config) {
        Ok(parsed) => parsed,
        Err(scanner_errors) => {
            for error in &scanner_errors {
                display_error(error, &source, &file_name);
            }
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    if options.show_ast {
        println!("{:#?}", program);
    }

    if !errors.is_empty() {
        for error in &errors {
            display_error(error, &source, &file_name);
        }
        process::exit(1);
    }

    println!("Total time: {:?}", start.elapsed());
}
