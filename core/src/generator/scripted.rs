use alloc::vec::Vec;

use super::*;

/// Replays a fixed index sequence, then scans forward from the last index.
///
/// The forward scan visits every cell, so mine placement still terminates
/// when the script runs out or keeps repeating mined cells.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedPicker {
    script: Vec<CellCount>,
    position: usize,
    last: Option<CellCount>,
}

impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = CellCount>) -> Self {
        Self {
            script: script.into_iter().collect(),
            position: 0,
            last: None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.script.len()
    }
}

impl CellPicker for ScriptedPicker {
    fn pick(&mut self, bound: CellCount) -> CellCount {
        let next = match self.script.get(self.position) {
            Some(&index) => {
                self.position += 1;
                index
            }
            None => self.last.map_or(0, |last| (last % bound + 1) % bound),
        };
        self.last = Some(next);
        next
    }
}
