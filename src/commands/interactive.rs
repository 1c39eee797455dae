use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use trc20_calculator::config::Config;
use trc20_calculator::report::{self, NO_DATA_MESSAGE};
use trc20_calculator::session::{Field, InputState};
use tracing::{debug, info};

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Execute the interactive command on stdin/stdout
pub fn execute(cfg: &Config) -> Result<()> {
    info!("Starting interactive session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cfg, stdin.lock(), &mut stdout.lock())
}

fn run<R: BufRead, W: Write>(cfg: &Config, input: R, out: &mut W) -> Result<()> {
    let mut state = InputState::new(cfg.network);
    writeln!(out, "{}", "Enter field=value (fields: volume, price, stake, ...). 'help' lists all.".dimmed())?;

    for line in input.lines() {
        let line = line?;
        if handle_line(cfg, &mut state, line.trim(), out)? == Flow::Quit {
            break;
        }
    }

    debug!("Interactive session ended");
    Ok(())
}

fn handle_line<W: Write>(cfg: &Config, state: &mut InputState, line: &str, out: &mut W) -> Result<Flow> {
    let currency = &cfg.display.currency;

    match line {
        "" => return Ok(Flow::Continue),
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" => {
            for field in Field::ALL {
                let value = state.get(field);
                let shown = if value.is_empty() { "(default)" } else { value };
                writeln!(out, "  {:<24} {}", field.name(), shown)?;
            }
            writeln!(out, "  show | reset | quit")?;
            return Ok(Flow::Continue);
        }
        "show" => {
            let params = state.params();
            let rendered = match state.evaluate() {
                Some(e) => report::render_table(&e, &params, currency),
                None => NO_DATA_MESSAGE.to_string(),
            };
            writeln!(out, "{}", rendered)?;
            return Ok(Flow::Continue);
        }
        "reset" => {
            state.reset();
            writeln!(out, "{}", "Inputs cleared".yellow())?;
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    if let Err(e) = state.apply(line) {
        writeln!(out, "{} {}", "error:".red(), e)?;
        return Ok(Flow::Continue);
    }

    match state.evaluate() {
        Some(e) => writeln!(out, "{}", report::render_summary(&e, currency))?,
        None => writeln!(out, "{}", NO_DATA_MESSAGE.yellow())?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_output(script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run(&Config::default(), script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prompts_until_inputs_complete() {
        let output = session_output("volume=100\nprice=0.36\n");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], NO_DATA_MESSAGE);
        assert!(lines[2].contains("savings 14,040.00 USD/mo"));
        assert!(lines[2].contains("break-even 1.1 months"));
    }

    #[test]
    fn test_invalid_line_keeps_session_alive() {
        let output = session_output("colour=blue\nvolume\nvolume=1\nprice=1\n");
        assert!(output.contains("Unknown field: colour"));
        assert!(output.contains("Malformed assignment: volume"));
        assert!(output.contains("break-even"));
    }

    #[test]
    fn test_quit_stops_processing() {
        let output = session_output("quit\nvolume=1\nprice=1\n");
        assert!(!output.contains("break-even"));
    }

    #[test]
    fn test_show_and_reset() {
        let output = session_output("volume=100\nprice=0.36\nshow\nreset\nshow\n");
        assert!(output.contains("Resource Requirements"));
        assert!(output.contains("Inputs cleared"));
        assert!(output.trim_end().ends_with(NO_DATA_MESSAGE));
    }
}
