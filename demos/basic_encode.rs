//! Basic encoding example

use binarch_core::{category_of, encoded_len, from_bytes, to_bytes, Category};
use std::collections::BTreeMap;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Binarch Basic Encoding Example\n");

    // A nested value built only from supported standard types
    let mut readings: BTreeMap<String, Vec<Option<(u32, f64)>>> = BTreeMap::new();
    for sensor in ["north", "south", "east"] {
        let row = (0..4u32)
            .map(|i| if i == 2 { None } else { Some((i, i as f64 * 1.5)) })
            .collect();
        readings.insert(sensor.to_string(), row);
    }
    let value = (readings, Duration::from_millis(250), [7u8; 4]);

    let bytes = to_bytes(&value)?;
    println!("Encoded {} bytes", bytes.len());
    assert_eq!(encoded_len(&value)?, bytes.len());

    type Reading = (BTreeMap<String, Vec<Option<(u32, f64)>>>, Duration, [u8; 4]);
    let back: Reading = from_bytes(&bytes)?;
    assert_eq!(back, value);
    println!("Decoded value matches the original");

    // Every type has exactly one wire category
    for (name, category) in [
        ("u32", category_of::<u32>()),
        ("String", category_of::<String>()),
        ("Vec<u8>", category_of::<Vec<u8>>()),
        ("[u8; 4]", category_of::<[u8; 4]>()),
        ("Option<u8>", category_of::<Option<u8>>()),
        ("Duration", category_of::<Duration>()),
    ] {
        let prefixed = if category.is_length_prefixed() { " (length-prefixed)" } else { "" };
        println!("{:<12} {}{}", name, category, prefixed);
    }
    assert_eq!(category_of::<Reading>(), Category::Tuple);

    Ok(())
}
