use std::process;

use difftool::parse;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        eprintln!("Usage: difftool [--unified | --split] <source-a> <source-b>");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let tokens: Vec<String> = std::env::args().collect();
    let argument = parse(&tokens)?;

    let (left, right) = argument.sources();
    println!(
        "comparing {} and {} ({} view)",
        left.path().display(),
        right.path().display(),
        argument.output()
    );

    Ok(())
}
