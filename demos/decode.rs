use vin_decode::*;

fn main() {
    let samples = [
        "W1K3FBCB3PN300965",
        "wba11cm0x08c97826",
        "KNADA818ART907403",
        "W1K3FICB3PN300965",
        "W1K3FCB3PN30096545",
    ];

    for raw in samples {
        println!("{}\n", decode_vin(raw));
    }

    // Sections and individual resolvers
    let sections = split_vin("VR7EFYHYCMN520985");
    println!(
        "WMI {} / VDS {} / VIS {} (year code {})",
        sections.wmi, sections.vds, sections.vis, sections.model_year
    );
    println!("region:       {}", get_region(&sections.wmi));
    println!("country:      {}", get_country(&sections.wmi));
    match get_manufacturer(&sections.wmi) {
        Ok(name) => println!("manufacturer: {name}"),
        Err(e) => println!("manufacturer: {e}"),
    }
    println!("model year:   {}", get_model_year("VR7EFYHYCMN520985"));

    // Typed parsing for Rust callers
    match "W1K3FBCB3PN30096".parse::<Vin>() {
        Ok(vin) => println!("\nparsed {vin}"),
        Err(e) => println!("\nrejected: {e}"),
    }
}
