use atsp_core::Cost;

/// The arc picked for branching, in the coordinates of the current compressed
/// matrix. `cost` is the raw matrix entry (zero after reduction);
/// `opportunity_cost` is the bound increase its exclusion would force.
#[derive(Clone, Copy, Debug)]
pub struct ArcChoice {
    pub row: usize,
    pub col: usize,
    pub cost: Cost,
    pub opportunity_cost: Cost,
}

/// Two smallest values of one row or column.
#[derive(Clone, Copy, Debug)]
pub struct Smallest {
    pub first: Cost,
    pub second: Cost,
}
