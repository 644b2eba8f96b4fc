use rand::Rng;

use super::*;

/// Uniform rejection sampling: draw random cells and keep the ones that are not mines yet.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        sample_layout(config, &mut rng)
    }
}

/// Places `config.mines` distinct mines on a fresh layout.
///
/// Terminates because `GameConfig::new` guarantees at least one safe cell; an unchecked config
/// asking for more mines than cells is capped at a full board.
pub fn sample_layout<R: Rng>(config: GameConfig, rng: &mut R) -> MineLayout {
    let mut layout = MineLayout::empty(config.size);
    let total_cells = config.total_cells();

    let target = if config.mines > total_cells {
        log::warn!(
            "Minefield already full, requested {} but only fits {}",
            config.mines,
            total_cells
        );
        total_cells
    } else {
        config.mines
    };

    let mut rejected = 0usize;
    while layout.mine_count() < target {
        let row = rng.random_range(0..config.size);
        let col = rng.random_range(0..config.size);
        if !layout.insert((row, col)) {
            rejected += 1;
        }
    }

    log::debug!(
        "placed {} mines on a {}x{} board ({} rejected draws)",
        layout.mine_count(),
        config.size,
        config.size,
        rejected
    );
    layout
}
