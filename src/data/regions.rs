//! WMI region codes, keyed by the first VIN character.

/// `(first character, region)` pairs.
pub static REGIONS: &[(char, &str)] = &[
    ('A', "Africa"),
    ('B', "Africa"),
    ('C', "Africa"),
    ('D', "Africa"),
    ('E', "Africa"),
    ('F', "Africa"),
    ('G', "Africa"),
    ('H', "Africa"),
    ('J', "Asia"),
    ('K', "Asia"),
    ('L', "Asia"),
    ('M', "Asia"),
    ('N', "Asia"),
    ('P', "Asia"),
    ('R', "Asia"),
    ('S', "Europe"),
    ('T', "Europe"),
    ('U', "Europe"),
    ('V', "Europe"),
    ('W', "Europe"),
    ('X', "Europe"),
    ('Y', "Europe"),
    ('Z', "Europe"),
    ('1', "North America"),
    ('2', "North America"),
    ('3', "North America"),
    ('4', "North America"),
    ('5', "North America"),
    ('6', "Oceania"),
    ('7', "Oceania"),
    ('8', "South America"),
    ('9', "South America"),
];
