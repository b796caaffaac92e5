//! Bundles over a custom representation and scale: whole-millimetre lengths in `i64`.

#[cfg(not(feature = "unchecked"))]
fn main() {
    use qdim::{Imperial, Scales, Si};

    let si = Si::with_scales(Scales::<i64> {
        length: 1000,
        ..Scales::default()
    });
    let imperial = Imperial::new(&si);

    assert_eq!(imperial.mile.scalar(), 1_609_343);
    assert_eq!(imperial.yard.scalar(), 914);
    assert_eq!(imperial.inch.scalar(), 25);

    // Narrowing to another representation happens only on request.
    let yard = imperial.yard.to_rep::<i32>();
    assert_eq!(yard.scalar(), 914);
}

#[cfg(feature = "unchecked")]
fn main() {
    println!("This example demonstrates the checked representation machinery.");
    println!("Build it without the 'unchecked' feature.");
}
