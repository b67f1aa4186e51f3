use anyhow::Context;
use life_grid::{Generations, Grid, LifeRule};
use log::info;

const GLIDER: &str = "
    .o.
    ..o
    ooo";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let ticks = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("tick count must be a number, got {arg:?}"))?,
        None => 100,
    };
    let rule = LifeRule::CONWAY;
    let grid = Grid::with_pattern(32, 32, GLIDER, (1, 1))?;
    info!("running {rule} for {ticks} ticks, population {}", grid.population());
    let mut gens = Generations::new(grid);
    gens.run(&rule, ticks)?;
    info!(
        "generation {}: population {}",
        gens.generation(),
        gens.current().population()
    );
    println!("{}", gens.current());
    Ok(())
}
