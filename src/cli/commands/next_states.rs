use anyhow::Result;

use super::parse_state;

pub struct NextStatesCommand {
    pub state: String,
}

impl NextStatesCommand {
    pub fn new(state: String) -> Self {
        Self { state }
    }

    pub async fn execute(&self) -> Result<()> {
        let state = parse_state(&self.state)?;

        println!("🔀 From {} ({}%):", state, state.progress_percentage());
        for next in state.next_states() {
            println!("   → {next}");
        }
        Ok(())
    }
}
