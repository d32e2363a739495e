use std::io;
use std::thread;
use std::time;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lifegrid::config::Config;
use lifegrid::events::Command;
use lifegrid::events::convert_event;
use lifegrid::life::Simulation;
use lifegrid::render::Canvas;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    config.validate().context("invalid configuration")?;

    let mut sim = Simulation::new(config.rows(), config.cols());
    sim.randomize();

    let mut canvas = Canvas::new(
        config.width as usize,
        config.height as usize,
        config.cell_size as usize,
    );

    let frame_time = config.frame_time();

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    'main: loop {
        let t = time::SystemTime::now();

        // Poll input for at most one frame's budget
        let command = if event::poll(frame_time)? {
            convert_event(event::read()?)
        } else {
            None
        };

        if let Some(command) = command {
            debug!(?command, "key pressed");

            // the window-close analogue: tear down without finishing
            // the tick
            if command == Command::ForceQuit {
                break 'main;
            }

            sim.apply(command);
        }

        if !sim.is_paused() {
            sim.advance();
        }

        let frame = canvas.compose(sim.grids().active());

        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            style::SetForegroundColor(config.alive_color),
            style::SetBackgroundColor(config.dead_color),
        )?;

        for line in frame.lines() {
            execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        // a quit command ends the run once the tick has completed
        if sim.quit_requested() {
            break 'main;
        }

        let dt = t.elapsed()?;
        thread::sleep(frame_time.saturating_sub(dt));
    }

    execute!(
        stdout,
        style::ResetColor,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    Ok(())
}
