//! Registering a custom quantity so that cross-family products resolve to it.

use measure::{
    Family, FamilyRegistry, Lengths, Masses, MeasureResult, Quantity, Times, Units,
    UnresolvedPolicy, Unrestricted,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Momentum;

impl Quantity for Momentum {
    const NAME: &'static str = "momentum";
    const NAME_KEY: &'static str = "quantity.momentum";
    const FAMILY: Family = Family::DIMENSIONLESS.mass(1).length(1).time(-1);
    const CANONICAL: Units<Self> = Units::canonical("kg·m/s", "units.momentum.canonical");
    type Restriction = Unrestricted;
}

fn main() -> MeasureResult<()> {
    let m = Masses::of(2.0)?;
    let v = Lengths::of(10.0)?.divide(Times::of(4.0)?, FamilyRegistry::standard())?;

    let anonymous = m.to_dimensioned().multiply(&v, FamilyRegistry::standard())?;
    println!("standard registry: {anonymous}");

    let registry = FamilyRegistry::standard()
        .to_builder()
        .register::<Momentum>()?
        .build();
    let p = m.to_dimensioned().multiply(&v, &registry)?;
    println!("with momentum registered: {p}");
    assert!(p.is::<Momentum>());

    let strict = registry
        .to_builder()
        .with_policy(UnresolvedPolicy::Reject)
        .build();
    match m.multiply(Times::of(1.0)?, &strict) {
        Ok(d) => println!("unexpected: {d}"),
        Err(e) => println!("strict registry: {e}"),
    }
    Ok(())
}
