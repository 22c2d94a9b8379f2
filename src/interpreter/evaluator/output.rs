/// Receives the values printed by a running program, in order.
pub trait Output {
    /// Called once per executed `print` statement.
    fn emit(&mut self, value: i64);
}

/// Collects printed values in memory.
impl Output for Vec<i64> {
    fn emit(&mut self, value: i64) {
        self.push(value);
    }
}

/// Writes every printed value on its own line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn emit(&mut self, value: i64) {
        println!("{value}");
    }
}
