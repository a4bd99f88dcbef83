//! Breakpoint commands

use super::{open_session, print_notifications};
use crate::args::{BreakpointArgs, Cli};
use crate::console::CliConsole;
use rustgdb_core::{DebugSession, MemoryEditor};

fn finish(console: &CliConsole, session: &mut DebugSession<MemoryEditor>) {
    print_notifications(console, session.store().editor());
    session.store_mut().editor_mut().clear_notifications();
}

fn location(bp: &BreakpointArgs) -> String {
    bp.file.to_string_lossy().into_owned()
}

/// List breakpoints after restoring them
pub fn list(cli: &Cli, json: bool) -> anyhow::Result<()> {
    let console = CliConsole::new(cli.verbose);
    let mut session = open_session(cli)?;
    let mut breakpoints = session.store().list();
    breakpoints.sort();

    if json {
        println!("{}", serde_json::to_string_pretty(&breakpoints)?);
        return Ok(());
    }

    finish(&console, &mut session);
    console.print_header("Breakpoints");
    if breakpoints.is_empty() {
        console.info("No breakpoints");
    }
    for bp in &breakpoints {
        console.print_row(&bp.to_string(), "");
    }
    Ok(())
}

pub fn add(cli: &Cli, bp: &BreakpointArgs) -> anyhow::Result<()> {
    let console = CliConsole::new(cli.verbose);
    let mut session = open_session(cli)?;
    let file = location(bp);

    if session.store().contains(&file, bp.line) {
        console.warn(&format!("Breakpoint already set at {}:{}", file, bp.line));
    } else if session.store_mut().create(&file, bp.line) {
        console.success(&format!("Breakpoint set at {}:{}", file, bp.line));
    }
    finish(&console, &mut session);
    Ok(())
}

pub fn remove(cli: &Cli, bp: &BreakpointArgs) -> anyhow::Result<()> {
    let console = CliConsole::new(cli.verbose);
    let mut session = open_session(cli)?;
    let file = location(bp);

    if session.store_mut().delete(&file, bp.line) {
        console.success(&format!("Removed breakpoint at {}:{}", file, bp.line));
    } else {
        console.warn(&format!("No breakpoint at {}:{}", file, bp.line));
    }
    finish(&console, &mut session);
    Ok(())
}

pub fn toggle(cli: &Cli, bp: &BreakpointArgs) -> anyhow::Result<()> {
    let console = CliConsole::new(cli.verbose);
    let mut session = open_session(cli)?;
    let file = location(bp);

    let was_set = session.store().contains(&file, bp.line);
    if session.store_mut().toggle(&file, bp.line) {
        console.success(&format!("Breakpoint set at {}:{}", file, bp.line));
    } else if was_set {
        console.success(&format!("Removed breakpoint at {}:{}", file, bp.line));
    }
    finish(&console, &mut session);
    Ok(())
}

pub fn clear(cli: &Cli) -> anyhow::Result<()> {
    let console = CliConsole::new(cli.verbose);
    let mut session = open_session(cli)?;
    let count = session.store().len();
    session.store_mut().delete_all();
    console.success(&format!("Removed {} breakpoint(s)", count));
    finish(&console, &mut session);
    Ok(())
}

/// Show how saved breakpoints resolve without rewriting the breakpoint file
pub fn check(cli: &Cli, json: bool) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    let session = open_session(cli)?;
    let report = session.startup_report();

    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    console.print_header(&format!(
        "Breakpoint check ({} locator)",
        session.persist_config().line_locator
    ));
    for bp in &report.restored {
        console.print_row(&bp.to_string(), "ok");
    }
    for skipped in &report.skipped {
        console.print_row(
            &format!("{}:{}", skipped.file, skipped.line),
            &skipped.reason.to_string(),
        );
    }
    if report.is_empty() {
        console.info("No saved breakpoints");
    } else if report.skipped.is_empty() {
        console.success(&report.summary());
    } else {
        console.warn(&report.summary());
    }
    Ok(())
}
