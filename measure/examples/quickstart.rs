//! Minimal end-to-end example: convert units, add measures and compute a charge (current × time).

use measure::{Charges, Currents, FamilyRegistry, AMPERE_HOURS, HOURS, MILLIAMPERES};

fn main() -> measure::MeasureResult<()> {
    let draw = MILLIAMPERES.measure(350.0)?;
    let standby = MILLIAMPERES.measure(20.0)?;
    let total = (draw + standby)?;
    assert!((total.value() - 0.37).abs() < 1e-12);
    println!("total draw: {total:.3}");

    let runtime = HOURS.measure(8.0)?;
    let used: Charges = (total * runtime)?;
    println!("used: {:.3} {}", used.in_units(&AMPERE_HOURS), AMPERE_HOURS);

    let dynamic = total.multiply(runtime, FamilyRegistry::standard())?;
    println!("resolved as {:?}", dynamic.kind().map(|k| k.name()));

    assert!(Currents::of(-1.0).is_err());
    Ok(())
}
