use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

/// A keyboard command for the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Stop or resume generation updates
    TogglePause,

    /// Reseed buffer 0 with random cells and make it active
    Randomize,

    /// End the run once the current tick completes
    Quit,

    /// End the run immediately, without finishing the tick
    ForceQuit,
}

/// Converts a crossterm event into a simulation command.
///
/// `s` toggles pause, `r` randomizes, `q` quits at the end of the tick,
/// and ctrl-c tears the run down immediately. Anything else is ignored.
pub fn convert_event(event: CrossTermEvent) -> Option<Command> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Command::ForceQuit),
            KeyEvent {
                code: KeyCode::Char('s'),
                ..
            } => Some(Command::TogglePause),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Some(Command::Randomize),
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            } => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}
