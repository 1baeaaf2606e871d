//! World Manufacturer Identifiers.
//!
//! A curated subset of assigned WMIs.

/// `(wmi, manufacturer)` pairs, kept sorted by WMI so additions land in a
/// predictable place.
pub static MANUFACTURERS: &[(&str, &str)] = &[
    ("1B3", "Dodge car"),
    ("1C3", "Chrysler car"),
    ("1C4", "Chrysler MPV/SUV"),
    ("1C6", "Chrysler truck"),
    ("1D7", "Dodge truck"),
    ("1FA", "Ford car"),
    ("1FD", "Ford incomplete vehicle"),
    ("1FM", "Ford MPV/SUV"),
    ("1FT", "Ford truck"),
    ("1FU", "Freightliner"),
    ("1FV", "Freightliner"),
    ("1G1", "Chevrolet car"),
    ("1G4", "Buick car"),
    ("1G6", "Cadillac car"),
    ("1GC", "Chevrolet truck"),
    ("1GN", "Chevrolet SUV"),
    ("1GT", "GMC truck"),
    ("1GY", "Cadillac SUV"),
    ("1HD", "Harley-Davidson"),
    ("1HG", "Honda car made by Honda of America"),
    ("1J4", "Jeep SUV"),
    ("1LN", "Lincoln car"),
    ("1M1", "Mack Truck"),
    ("1N4", "Nissan car"),
    ("1N6", "Nissan truck"),
    ("1NX", "Toyota car made by NUMMI"),
    ("1VW", "Volkswagen car"),
    ("1XK", "Kenworth"),
    ("1XP", "Peterbilt"),
    ("1YV", "Mazda made by Mazda Motor Manufacturing USA"),
    ("1ZV", "Ford made by Auto Alliance International"),
    ("2A4", "Chrysler Canada MPV"),
    ("2C3", "Chrysler Canada car"),
    ("2FA", "Ford Canada car"),
    ("2G1", "Chevrolet Canada car"),
    ("2HG", "Honda Canada car"),
    ("2HK", "Honda Canada MPV/SUV"),
    ("2HM", "Hyundai Canada"),
    ("2T1", "Toyota Canada car"),
    ("2T2", "Lexus Canada SUV"),
    ("3C4", "Chrysler Mexico MPV"),
    ("3FA", "Ford Mexico car"),
    ("3G1", "Chevrolet Mexico car"),
    ("3HG", "Honda Mexico car"),
    ("3N1", "Nissan Mexico car"),
    ("3VW", "Volkswagen Mexico car"),
    ("4JG", "Mercedes-Benz USA SUV"),
    ("4S3", "Subaru car"),
    ("4S4", "Subaru SUV"),
    ("4T1", "Toyota car made by TMMK"),
    ("4US", "BMW USA car"),
    ("516", "Autocar truck"),
    ("5FN", "Honda USA MPV/SUV"),
    ("5J6", "Honda USA SUV"),
    ("5N1", "Nissan USA SUV"),
    ("5NP", "Hyundai USA car"),
    ("5TD", "Toyota USA MPV/SUV"),
    ("5UX", "BMW USA SUV"),
    ("5YJ", "Tesla"),
    ("6FP", "Ford Australia"),
    ("6G1", "Holden"),
    ("6T1", "Toyota Australia"),
    ("7A1", "Mitsubishi New Zealand"),
    ("7A8", "NZ Transport Agency (pre-2009)"),
    ("8AP", "Fiat Argentina"),
    ("8AW", "Volkswagen Argentina"),
    ("93H", "Honda Brazil"),
    ("93R", "Toyota Brazil"),
    ("94D", "Nissan Brazil"),
    ("97N", "Triumph Motorcycles Ltd"),
    ("9BG", "Chevrolet Brazil"),
    ("9BW", "Volkswagen Brazil"),
    ("9FB", "Renault Colombia"),
    ("AAV", "Volkswagen South Africa"),
    ("AFA", "Ford South Africa"),
    ("JA3", "Mitsubishi car"),
    ("JF1", "Subaru car"),
    ("JF2", "Subaru SUV"),
    ("JHM", "Honda car"),
    ("JM1", "Mazda car"),
    ("JMZ", "Mazda Europe"),
    ("JN1", "Nissan car"),
    ("JS1", "Suzuki motorcycle"),
    ("JT2", "Toyota car"),
    ("JTD", "Toyota car"),
    ("JTH", "Lexus car"),
    ("JTM", "Toyota SUV"),
    ("JYA", "Yamaha motorcycle"),
    ("KL1", "Chevrolet/Daewoo car"),
    ("KMH", "Hyundai car"),
    ("KNA", "Kia car"),
    ("KNC", "Kia truck"),
    ("KND", "Kia SUV/MPV & Hyundai Entourage"),
    ("KNM", "Renault Samsung"),
    ("KPT", "SsangYong SUV"),
    ("LFV", "FAW-Volkswagen"),
    ("LRW", "Tesla China"),
    ("LSV", "SAIC Volkswagen"),
    ("MA1", "Mahindra"),
    ("MAL", "Hyundai India"),
    ("MAT", "Tata Motors"),
    ("MR0", "Toyota Thailand pickup"),
    ("NLH", "Hyundai Turkey"),
    ("NM0", "Ford Otosan"),
    ("NMT", "Toyota Motor Manufacturing Turkey"),
    ("SAJ", "Jaguar"),
    ("SAL", "Land Rover"),
    ("SAR", "Rover"),
    ("SB1", "Toyota Manufacturing UK"),
    ("SCC", "Lotus"),
    ("SCF", "Aston Martin"),
    ("SFD", "Alexander Dennis"),
    ("SHH", "Honda UK car"),
    ("SJN", "Nissan UK car"),
    ("TMA", "Hyundai Czech Republic"),
    ("TMB", "Škoda"),
    ("TRU", "Audi Hungary"),
    ("TSM", "Suzuki Hungary"),
    ("U5Y", "Kia Slovakia"),
    ("UU1", "Dacia"),
    ("VF1", "Renault & Eagle Medallion made by Renault"),
    ("VF3", "Peugeot"),
    ("VF7", "Citroën"),
    ("VF8", "Matra"),
    ("VNK", "Toyota France"),
    ("VR1", "DS Automobiles"),
    ("VR3", "Peugeot"),
    ("VR7", "Citroën"),
    ("VSS", "SEAT"),
    ("VWV", "Volkswagen Spain"),
    ("W0L", "Opel/Vauxhall"),
    ("W1K", "Mercedes-Benz car"),
    ("W1N", "Mercedes-Benz SUV"),
    ("W1V", "Mercedes-Benz van"),
    ("WAU", "Audi car"),
    ("WBA", "BMW car"),
    ("WBS", "BMW M"),
    ("WBX", "BMW SUV"),
    ("WBY", "BMW i"),
    ("WDB", "Mercedes-Benz & Maybach"),
    ("WDC", "Mercedes-Benz SUV (pre-2018)"),
    ("WDD", "Mercedes-Benz car (pre-2018)"),
    ("WF0", "Ford Germany"),
    ("WMA", "MAN truck"),
    ("WME", "smart"),
    ("WMW", "MINI"),
    ("WP0", "Porsche car"),
    ("WP1", "Porsche SUV"),
    ("WUA", "Audi Sport"),
    ("WV1", "Volkswagen Commercial Vehicles"),
    ("WV2", "Volkswagen bus/van"),
    ("WVG", "Volkswagen SUV"),
    ("WVW", "Volkswagen car"),
    ("XLR", "DAF Trucks"),
    ("XTA", "Lada/AvtoVAZ"),
    (
        "YAR",
        "Toyota Motor Europe (based in Belgium) used for Toyota ProAce & Toyota ProAce City",
    ),
    ("YK1", "Saab"),
    ("YS2", "Scania"),
    ("YS3", "Saab"),
    ("YV1", "Volvo car"),
    ("YV2", "Volvo truck"),
    ("ZAM", "Maserati"),
    ("ZAR", "Alfa Romeo"),
    ("ZCF", "Iveco"),
    ("ZDM", "Ducati"),
    ("ZFA", "Fiat"),
    ("ZFF", "Ferrari"),
    ("ZHW", "Lamborghini"),
];
