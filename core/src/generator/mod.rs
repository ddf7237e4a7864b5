use ndarray::Array2;

use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Source of uniformly distributed cell indices used to place mines.
pub trait CellPicker {
    /// Returns a row-major cell index, expected in `0..bound`.
    fn pick(&mut self, bound: CellCount) -> CellCount;
}

impl<P: CellPicker + ?Sized> CellPicker for &mut P {
    fn pick(&mut self, bound: CellCount) -> CellCount {
        (**self).pick(bound)
    }
}

/// Places exactly `config.mines` mines by rejection sampling and returns the mine mask.
///
/// The configuration must already be validated, otherwise this may not terminate.
pub(crate) fn place_mines(config: GameConfig, picker: &mut impl CellPicker) -> Array2<bool> {
    let total = config.total_cells();
    let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
    let mut placed: CellCount = 0;
    let mut attempts: u32 = 0;

    while placed < config.mines {
        attempts += 1;
        let mut index = picker.pick(total);
        if index >= total {
            log::warn!("Picked index {} is out of range 0..{}, wrapping", index, total);
            index %= total;
        }

        let coords = coords_from_linear(index, config.cols);
        let slot = &mut mines[coords.to_nd_index()];
        if !*slot {
            *slot = true;
            placed += 1;
        }
    }

    log::debug!(
        "Placed {} mines on {}x{} board in {} attempts",
        placed,
        config.rows,
        config.cols,
        attempts
    );
    mines
}
