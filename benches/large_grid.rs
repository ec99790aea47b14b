use std::time::Instant;

use hcycle_grid::{cycle::verify_cycle, HamiltonianCycle};
use num_format::{Locale, ToFormattedString};
use rand::{rngs::SmallRng, SeedableRng};

const COLS: usize = 1024;
const ROWS: usize = 512;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = SmallRng::from_entropy();
    let start = Instant::now();
    let hc = HamiltonianCycle::with_rng(COLS, ROWS, &mut rng).unwrap();
    let elapsed = start.elapsed();

    verify_cycle(&hc.dimensions(), hc.get_hcycle()).unwrap();

    let per_second = (hc.len() as f64 / elapsed.as_secs_f64()) as u64;
    println!(
        "built a {}x{} cycle of {} cells in {:?} ({} cells/s)",
        COLS,
        ROWS,
        hc.len().to_formatted_string(&Locale::en),
        elapsed,
        per_second.to_formatted_string(&Locale::en),
    );
}
