use vin_decode::{ReferenceData, VinDecoder};

const TABLES: &str = r#"{
    "regions": { "W": "Europe", "X": "Europe" },
    "countries": [
        { "region": "W", "start": "A", "end": "0", "country": "Germany" },
        { "region": "X", "start": "A", "end": "E", "country": "Bulgaria" },
        { "region": "X", "start": "D", "end": "K", "country": "Greece" }
    ],
    "manufacturers": { "WBA": "BMW car", "WVW": "Volkswagen car" },
    "years": { "P": [1993, 2023], "R": [1994, 2024] }
}"#;

fn main() -> Result<(), vin_decode::VinError> {
    let data = ReferenceData::from_json(TABLES)?;
    let decoder = VinDecoder::new(&data)?;

    for conflict in decoder.countries().conflicts() {
        println!(
            "{}: {} overridden by {}",
            conflict.code, conflict.previous, conflict.replacement
        );
    }

    println!("{}", decoder.decode("WVWZZZ1KZRW000001"));
    println!("{}", decoder.decode("XD1AB1C12P0000001"));
    Ok(())
}
