use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Event, Outcome, SessionRunner};
use crate::errors::{AppError, AppResult};
use crate::probes::{self, GeoSnapshot};
use crate::session::Session;
use crate::ui::display::DisplayStrings;
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::time::parse_clock;
use ansi_term::Colour;
use chrono::Local;
use std::io::{self, BufRead, IsTerminal, Lines, StdinLock, Write};
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Start { leave } = cmd else {
        return Ok(());
    };

    let started_at = Local::now();

    // Best-effort environment probes; none of these can fail the start.
    let machine = probes::system::machine_info();
    let operator = probes::system::operator_name();
    let hostname = probes::system::hostname();
    let location = if cfg.offline {
        GeoSnapshot::default()
    } else {
        probes::geo::lookup(&cfg.geo_endpoint, Duration::from_secs(cfg.geo_timeout_secs))
    };

    let session = Session::start(operator, hostname, machine, location, started_at);
    let mut runner = SessionRunner::new(cfg, session)?;

    if let Some(t) = leave {
        let t = parse_clock(t)?;
        runner.handle(Event::SetLeaveTime(t), started_at)?;
    }

    header(format!("Time-Keeper : [{}]", started_at.format("%d/%m/%Y")));
    info(format!("Report: {}", runner.artifact_path().display()));
    info("Type a message to log it, :status for the clocks, :help for all commands.");

    let mut lines = io::stdin().lock().lines();

    loop {
        prompt()?;
        let Some(line) = lines.next() else {
            // Input is gone; nothing more can arrive, not even the secret.
            warning("Input closed before an authorized close: report left unsealed.");
            return Ok(());
        };
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            ":quit" | ":q" => {
                let secret = read_secret(&mut lines)?;
                match runner.handle(Event::CloseRequest(secret), Local::now())? {
                    Outcome::Denied => {
                        warning("Access denied: incorrect password, session stays open.")
                    }
                    Outcome::Closed(path) => {
                        success(format!("Daily log saved and sealed at: {}", path.display()));
                        return Ok(());
                    }
                    _ => {}
                }
            }

            ":status" | ":s" => {
                if let Outcome::Status(d) = runner.handle(Event::Tick, Local::now())? {
                    print_status(&d);
                }
            }

            ":help" | ":h" => print_help(),

            _ if trimmed.starts_with(":leave") => {
                match trimmed.strip_prefix(":leave").map(str::trim) {
                    Some(t) if !t.is_empty() => match parse_clock(t) {
                        Ok(t) => {
                            runner.handle(Event::SetLeaveTime(t), Local::now())?;
                            info(format!("Leave time set to {}", t.format("%H:%M:%S")));
                        }
                        Err(e) => warning(e),
                    },
                    _ => warning("Usage: :leave HH:MM:SS"),
                }
            }

            // "::" escapes a message that genuinely starts with a colon.
            _ if trimmed.starts_with("::") => submit(&mut runner, trimmed[1..].to_string()),

            _ if trimmed.starts_with(':') => {
                warning(format!("Unknown command: {trimmed} (try :help)"))
            }

            _ => submit(&mut runner, line.clone()),
        }
    }
}

fn submit(runner: &mut SessionRunner, text: String) {
    match runner.handle(Event::Submit(text), Local::now()) {
        Ok(Outcome::Recorded) => success("Logged."),
        // Blank submission: silently ignored, no state change.
        Ok(_) => {}
        // Regeneration failed; the entry is kept in memory and the next
        // successful write carries it into the report.
        Err(e) => error(format!("Could not update the report: {e}")),
    }
}

fn prompt() -> AppResult<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Hidden prompt on a terminal; plain line read otherwise so the secret can
/// be piped in.
fn read_secret(lines: &mut Lines<StdinLock<'static>>) -> AppResult<String> {
    if io::stdin().is_terminal() {
        dialoguer::Password::new()
            .with_prompt("Enter password to close")
            .interact()
            .map_err(|e| AppError::Prompt(e.to_string()))
    } else {
        match lines.next() {
            Some(line) => Ok(line?.trim_end().to_string()),
            None => Ok(String::new()),
        }
    }
}

fn print_status(d: &DisplayStrings) {
    println!("  Current time   {}", d.current);
    println!("  Time spent     {}", d.elapsed);
    let remaining = if d.urgent {
        Colour::Red.paint(d.remaining.as_str()).to_string()
    } else {
        d.remaining.clone()
    };
    println!("  Time remaining {}", remaining);
    println!("  Countdown      {}", d.countdown);
}

fn print_help() {
    println!("  <message>          log the message into today's report");
    println!("  ::<message>        log a message that itself starts with a colon");
    println!("  :status  (:s)      show session clocks");
    println!("  :leave HH:MM:SS    set the planned leave time (countdown only)");
    println!("  :quit    (:q)      close the session (password required)");
    println!("  :help    (:h)      this help");
}
