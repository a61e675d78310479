/// A sequence command requested from a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Next,
    Previous,
    Finish,
    Show { index: usize },
}

/// Command handle passed to `on_clicked` callbacks.
///
/// Requests are queued and applied in order once the callback returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Control {
    commands: Vec<Command>,
}

impl Control {
    pub fn next(&mut self) {
        self.commands.push(Command::Next);
    }

    pub fn previous(&mut self) {
        self.commands.push(Command::Previous);
    }

    pub fn finish(&mut self) {
        self.commands.push(Command::Finish);
    }

    pub fn show(&mut self, index: usize) {
        self.commands.push(Command::Show { index });
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub(crate) fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}
