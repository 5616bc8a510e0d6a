//! API showcase: one call into every engine.
//!
//! Run with `RUST_LOG=wnpoly=trace cargo run --example showcase` to see the
//! inversion steps.

use tracing_subscriber::EnvFilter;
use wnpoly::{
    Bell, Bernoulli, Complete, Elementary, PartialBell, PolyError, PowerSum, SymmetricPolynomial,
    bell_numbers,
};

fn main() -> Result<(), PolyError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Symmetric polynomials ===");
    let x = [3.0, 1.0, 4.0, 1.0, 5.0];
    println!("x         = {:?}", x);
    println!("e(x)      = {:?}", Elementary.compute(&x, 4)?);
    println!("h(x)      = {:?}", Complete.compute(&x, 4)?);
    println!("p(x)      = {:?}", PowerSum.compute(&x, 4)?);
    println!("p(x)/len  = {:?}", PowerSum.compute_normalized(&x, 4)?);

    println!("\n=== Bernoulli ===");
    println!("B_0..B_8  = {:?}", Bernoulli.numbers::<f64>(8)?);
    println!("B_4(0.5)  = {}", Bernoulli.compute(4, 0.5_f64)?);

    println!("\n=== Bell ===");
    let vars = vec![0.0, 1.0, 0.5, -2.0, 0.25];
    let b = Bell.compute(&vars)?;
    println!("Bell(x)   = {:?}", b);
    println!("invert    = {:?}", Bell.invert(&b)?);
    println!("negate    = {:?}", Bell.negate(&b)?);
    println!("Bell nums = {:?}", bell_numbers::<f64>(10)?);

    println!("\n=== Partial Bell ===");
    let table = PartialBell.compute(&vars)?;
    for row in table.to_rows() {
        println!("  {:?}", row);
    }
    let column = table.column(2);
    println!("B(k+m,2)  = {:?}", column);
    println!("invert    = {:?}", PartialBell.invert(2, &column)?);

    match PartialBell.invert(2, &[0.0, 1.0]) {
        Ok(x) => println!("unexpected: {:?}", x),
        Err(e) => println!("x1 = 0    -> {}", e),
    }

    Ok(())
}
