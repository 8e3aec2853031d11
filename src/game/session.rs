// Session tally
//
// Lives for the whole process. Nothing is persisted between runs.

/// Score across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    score: u32,
    games_played: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a round as played (called when the round starts)
    pub fn record_start(&mut self) {
        self.games_played += 1;
    }

    pub fn record_win(&mut self) {
        self.score += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// "SCORE: 2/3"
    pub fn tally(&self) -> String {
        format!("SCORE: {}/{}", self.score, self.games_played)
    }
}
