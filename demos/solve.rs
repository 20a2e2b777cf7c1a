use lineq::{LinearSystem, cramer_solve, inversion_solve, parse_system};

fn main() -> lineq::Result<()> {
    let source = "2x + 3y + 8z = 7\nx - 4y + 6z = 1\n3x - y - z = 8";
    let system = LinearSystem::try_from(parse_system(source.lines()))?;

    let cramer = cramer_solve(&system.matrix, &system.constants)?;
    let inversion = inversion_solve(&system.matrix, &system.constants)?;
    println!("cramer:    {cramer:?}");
    println!("inversion: {inversion:?}");
    Ok(())
}
