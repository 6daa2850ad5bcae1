//! Custom types: a hand-written hook, a fieldless enum and a sum type

use binarch_core::{
    decode, decode_into, encode, impl_enum, impl_variant, to_bytes, ByteSink, ByteSource, Decode,
    Decoder, Encode, Encoder, Result,
};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(u8)]
enum Unit {
    #[default]
    Meters = 0,
    Feet = 1,
}

impl_enum!(Unit: u8 { Meters, Feet });

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Point(()),
    Circle(f64),
    Polygon(Vec<(f64, f64)>),
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Point(())
    }
}

impl_variant!(Shape { Point, Circle, Polygon });

#[derive(Debug, Default, PartialEq)]
struct Feature {
    name: String,
    unit: Unit,
    shape: Shape,
    labels: Option<Vec<String>>,
}

impl Encode for Feature {
    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize> {
        encode!(enc, self.name, self.unit, self.shape, self.labels)
    }
}

impl Decode for Feature {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize> {
        decode!(dec, self.name, self.unit, self.shape, self.labels)
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("Binarch Custom Type Example\n");

    let features = vec![
        Feature {
            name: "well".into(),
            unit: Unit::Meters,
            shape: Shape::Circle(2.0),
            labels: None,
        },
        Feature {
            name: "plot".into(),
            unit: Unit::Feet,
            shape: Shape::Polygon(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]),
            labels: Some(vec!["north".into(), "fenced".into()]),
        },
    ];

    let bytes = to_bytes(&features)?;
    println!("{} features -> {} bytes", features.len(), bytes.len());

    // Decode into a slot that already holds stale data; it is overwritten
    let mut slot = vec![Feature {
        name: "stale".into(),
        shape: Shape::Polygon(vec![(1.0, 1.0)]),
        labels: Some(vec!["old".into()]),
        ..Feature::default()
    }];
    let read = decode_into(&bytes, &mut slot)?;

    assert_eq!(read, bytes.len());
    assert_eq!(slot, features);
    for feature in &slot {
        println!("{:<6} {:?} {:?}", feature.name, feature.unit, feature.shape);
    }

    Ok(())
}
