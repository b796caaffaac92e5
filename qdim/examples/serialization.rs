//! Serializing quantities to JSON, with and without the dimension tag.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(all(feature = "serde", not(feature = "unchecked")))]
fn main() {
    use qdim::{Length, Si, Velocity};
    use serde::{Deserialize, Serialize};

    let si = Si::default();

    // Plain serialization is the raw scalar; the dimension stays in the type.
    let json = serde_json::to_string(&si.hour).unwrap();
    println!("one hour -> {}", json);

    // The tagged adapter embeds the exponent vector and checks it on the way in.
    #[derive(Serialize, Deserialize, Debug)]
    struct Measurement {
        #[serde(with = "qdim::serde_with_dim")]
        distance: Length,
        #[serde(with = "qdim::serde_with_dim")]
        speed: Velocity,
    }

    let measurement = Measurement {
        distance: si.kilo * si.meter * 42.0,
        speed: si.km_h * 90.0,
    };
    let json = serde_json::to_string_pretty(&measurement).unwrap();
    println!("{}", json);

    let restored: Measurement = serde_json::from_str(&json).unwrap();
    println!("restored -> {:?}", restored);
}

#[cfg(not(all(feature = "serde", not(feature = "unchecked"))))]
fn main() {
    println!("This example requires the 'serde' feature (and the default checked mode).");
    println!("Run with: cargo run --example serialization --features serde");
}
