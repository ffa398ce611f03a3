// blockrun: an educational block-based pseudo-code interpreter

use std::fs;
use std::path::Path;
use std::process;

use blockrun::interpreter::engine::Interpreter;
use blockrun::program::{Fragment, FragmentKind, Program};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("blockrun");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.blocks>", program_name);
        eprintln!();
        eprintln!("A block file holds one fragment per line, 'kind | code':");
        eprintln!("  decl   | int i, sum");
        eprintln!("  assign | sum = 0");
        eprintln!("  for    | for (i = 0; i < 5; i = i + 1) {{ sum = sum + i }}");
        eprintln!("  expr   | sum * 2");
        eprintln!();
        eprintln!("Kinds: decl, assign, expr, if, while, for.");
        eprintln!("Blank lines and lines starting with '#' are ignored.");
        eprintln!();
        eprintln!("Try the bundled example:");
        eprintln!("  {} demos/counting.blocks", program_name);
        process::exit(1);
    }

    let input_file = &args[1];

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        process::exit(1);
    }

    let source = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {}", input_file, e);
            process::exit(1);
        }
    };

    let program = match parse_program(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error in '{}': {}", input_file, e);
            process::exit(1);
        }
    };

    let mut interpreter = Interpreter::new();
    let report = interpreter.run(&program);

    println!("=== Execution trace ===");
    for line in &report.trace {
        println!("{}", line);
    }

    println!();
    println!("=== Variables ===");
    if report.variables.is_empty() {
        println!("(none)");
    } else {
        for (name, value) in &report.variables {
            println!("{} = {}", name, value);
        }
    }

    if report.has_failures() {
        println!();
        println!(
            "Completed with {} failed block(s) out of {}.",
            report.failure_count(),
            program.len()
        );
        process::exit(1);
    }
}

/// Parses the `kind | code` line format into a [`Program`].
fn parse_program(source: &str) -> Result<Program, String> {
    let mut program = Program::new();

    for (number, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (keyword, code) = trimmed
            .split_once('|')
            .ok_or_else(|| format!("line {}: expected 'kind | code'", number + 1))?;

        let kind = FragmentKind::from_keyword(keyword.trim()).ok_or_else(|| {
            format!(
                "line {}: unknown block kind '{}' (expected decl, assign, expr, if, while, or for)",
                number + 1,
                keyword.trim()
            )
        })?;

        program.push(Fragment::new(kind, code.trim()));
    }

    Ok(program)
}
