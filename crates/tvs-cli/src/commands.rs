use std::fs;

use anyhow::Context;
use colored::Colorize;

use tvs_dispatch::{Dispatcher, Output};

use crate::cli::{Cli, Command, RunArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run(args) => cmd_run(args),
        Command::Demo => cmd_demo(),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let records: Vec<Vec<String>> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing script {}", args.script.display()))?;
    execute(&records)
}

fn cmd_demo() -> anyhow::Result<()> {
    let records: Vec<Vec<String>> = DEMO_SESSION
        .iter()
        .map(|record| record.iter().map(|part| part.to_string()).collect())
        .collect();
    println!("{}", "Running built-in sample session".bold());
    execute(&records)
}

fn execute(records: &[Vec<String>]) -> anyhow::Result<()> {
    let mut dispatcher = Dispatcher::new();
    let outputs = dispatcher.run(records)?;

    for (record, output) in records.iter().zip(&outputs) {
        let opcode = record.first().map(String::as_str).unwrap_or("");
        let rendered = match output {
            Output::Confirmation(text) => text.green().to_string(),
            Output::Size(size) => size.to_string().cyan().to_string(),
            Output::Names(names) => format!("[{}]", names.join(", ")).yellow().to_string(),
            Output::Absent => "<absent>".dimmed().to_string(),
        };
        println!("{:<16} {}", opcode.bold(), rendered);
    }

    println!(
        "\n{} {} record(s), {} entr(ies) in store",
        "done:".green().bold(),
        outputs.len(),
        dispatcher.store().len()
    );
    Ok(())
}

/// Sample session exercising upload, get, copy, ranked search, TTL expiry,
/// and rollback.
const DEMO_SESSION: &[&[&str]] = &[
    &["FILE_UPLOAD", "Cars.txt", "200kb"],
    &["FILE_GET", "Cars.txt"],
    &["FILE_COPY", "Cars.txt", "Cars2.txt"],
    &["FILE_GET", "Cars2.txt"],
    &["FILE_UPLOAD", "Foo.txt", "100kb"],
    &["FILE_UPLOAD", "Bar.csv", "200kb"],
    &["FILE_UPLOAD", "Baz.pdf", "300kb"],
    &["FILE_UPLOAD", "Baa.pdf", "300kb"],
    &["FILE_SEARCH", "Ba"],
    &["FILE_UPLOAD_AT", "2021-07-01T12:00:00", "Expired.txt", "100kb", "1"],
    &["FILE_GET_AT", "2021-07-01T12:00:02", "Expired.txt"],
    &["FILE_UPLOAD_AT", "2021-07-01T12:05:00", "Update1.txt", "150kb", "3600"],
    &["FILE_UPLOAD_AT", "2021-07-01T12:20:00", "Update2.txt", "200kb", "1800"],
    &["ROLLBACK", "2021-07-01T12:10:00"],
    &["FILE_GET_AT", "2021-07-01T12:25:00", "Update1.txt"],
    &["FILE_GET_AT", "2021-07-01T12:25:00", "Update2.txt"],
];
