use clap::Parser;
use template_fix::LineReplacer;

#[derive(Parser)]
#[command(name = "template-fix")]
#[command(version)]
#[command(about = "Split the details template line in src/theme-manager.ts")]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();

    let replacer = LineReplacer::default();
    let report = replacer.run()?;

    eprintln!(
        "Patched {}: {} line(s) replaced, {} -> {} lines",
        replacer.path().display(),
        report.replaced,
        report.lines_read,
        report.lines_written
    );
    println!("Fixed template string issue");

    Ok(())
}
