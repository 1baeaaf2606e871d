//! The decode pipeline and its process-wide default instance.

use std::sync::LazyLock;

use crate::data::ReferenceData;
use crate::error::VinError;
use crate::manufacturer::ManufacturerTable;
use crate::region::{CountryTable, RegionTable};
use crate::vin::{DecodedVin, Vin, VinInfo};
use crate::year::YearTable;

/// Returned for any field the reference tables cannot resolve.
pub const UNKNOWN: &str = "-";

static STANDARD: LazyLock<VinDecoder> = LazyLock::new(|| {
    VinDecoder::new(&ReferenceData::standard()).expect("embedded reference data is well-formed")
});

/// Immutable set of resolver tables. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct VinDecoder {
    regions: RegionTable,
    countries: CountryTable,
    manufacturers: ManufacturerTable,
    years: YearTable,
}

impl VinDecoder {
    /// Build resolver tables from `data`.
    ///
    /// Fails if a country range is bounded by a symbol outside the VIN
    /// alphabet. Overlapping ranges are accepted with the later range
    /// winning; see [`CountryTable::conflicts`].
    pub fn new(data: &ReferenceData) -> Result<Self, VinError> {
        let decoder = Self {
            regions: RegionTable::new(&data.regions),
            countries: CountryTable::from_ranges(&data.countries)?,
            manufacturers: ManufacturerTable::new(&data.manufacturers),
            years: YearTable::new(&data.years),
        };
        log::debug!(
            "built VIN decoder: {} regions, {} country codes ({} conflicts), {} manufacturers, {} year codes",
            decoder.regions.len(),
            decoder.countries.len(),
            decoder.countries.conflicts().len(),
            decoder.manufacturers.len(),
            decoder.years.len()
        );
        Ok(decoder)
    }

    /// Decoder over the embedded tables, built on first use.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    pub fn manufacturers(&self) -> &ManufacturerTable {
        &self.manufacturers
    }

    pub fn years(&self) -> &YearTable {
        &self.years
    }

    /// Region for the first character of `wmi`, or [`UNKNOWN`].
    pub fn region(&self, wmi: &str) -> &str {
        self.regions.region(wmi).unwrap_or(UNKNOWN)
    }

    /// Country for the first two characters of `wmi`, or [`UNKNOWN`].
    /// `wmi` must already be uppercase.
    pub fn country(&self, wmi: &str) -> &str {
        self.countries.country(wmi).unwrap_or(UNKNOWN)
    }

    /// Manufacturer for a three-character `code`, or [`UNKNOWN`] when the
    /// table has no entry.
    pub fn manufacturer(&self, code: &str) -> Result<&str, VinError> {
        Ok(self.manufacturers.lookup(code)?.unwrap_or(UNKNOWN))
    }

    /// Model year of `vin` as a string, or [`UNKNOWN`].
    ///
    /// The cycle is chosen from the 7th character, which is a heuristic;
    /// see [`year`](crate::year).
    pub fn model_year(&self, vin: &str) -> String {
        format_year(self.years.model_year(vin))
    }

    /// Resolve every field of an already validated VIN.
    pub fn decode_vin(&self, vin: &Vin) -> VinInfo {
        VinInfo {
            region: self.region(vin.wmi()).to_owned(),
            country: self.country(vin.wmi()).to_owned(),
            model_year: format_year(self.years.resolve(vin.model_year_code(), vin.check_char())),
            manufacturer: self
                .manufacturers
                .get(vin.wmi())
                .unwrap_or(UNKNOWN)
                .to_owned(),
        }
    }

    /// Validate `raw` and, if it is well-formed, resolve every field.
    pub fn decode(&self, raw: &str) -> DecodedVin {
        match Vin::parse(raw) {
            Ok(vin) => {
                let info = self.decode_vin(&vin);
                DecodedVin {
                    vin: vin.into(),
                    is_valid: true,
                    message: None,
                    info: Some(info),
                }
            }
            Err(err) => DecodedVin {
                vin: raw.to_uppercase(),
                is_valid: false,
                message: Some(err.to_string()),
                info: None,
            },
        }
    }
}

fn format_year(year: Option<u16>) -> String {
    year.map_or_else(|| UNKNOWN.to_owned(), |year| year.to_string())
}

/// Decode `raw` with the embedded tables.
///
/// Never fails: malformed input is reported through
/// [`DecodedVin::is_valid`] and [`DecodedVin::message`], and unresolvable
/// fields hold [`UNKNOWN`].
pub fn decode_vin(raw: &str) -> DecodedVin {
    VinDecoder::standard().decode(raw)
}

/// Region for the first character of `wmi`, or [`UNKNOWN`].
pub fn get_region(wmi: &str) -> &'static str {
    VinDecoder::standard().region(wmi)
}

/// Country for the first two characters of `wmi`, or [`UNKNOWN`].
pub fn get_country(wmi: &str) -> &'static str {
    VinDecoder::standard().country(wmi)
}

/// Manufacturer for `code`. Fails unless `code` has exactly three
/// characters; an unlisted code yields [`UNKNOWN`].
pub fn get_manufacturer(code: &str) -> Result<&'static str, VinError> {
    VinDecoder::standard().manufacturer(code)
}

/// Model year of `vin`, or [`UNKNOWN`] when undeterminable.
pub fn get_model_year(vin: &str) -> String {
    VinDecoder::standard().model_year(vin)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::region::CountryRange;

    fn small() -> VinDecoder {
        VinDecoder::new(&ReferenceData {
            regions: BTreeMap::from([('W', "Europe".to_string())]),
            countries: vec![CountryRange::new('W', 'A', '0', "Germany")],
            manufacturers: BTreeMap::from([("WBA".to_string(), "BMW car".to_string())]),
            years: BTreeMap::from([('P', vec![1993, 2023])]),
        })
        .unwrap()
    }

    #[test]
    fn standard_builds() {
        let decoder = VinDecoder::standard();
        assert!(decoder.countries().conflicts().is_empty());
        assert!(!decoder.regions().is_empty());
        assert!(!decoder.manufacturers().is_empty());
        assert_eq!(decoder.years().len(), 33);
    }

    #[test]
    fn standard_is_shared() {
        assert!(std::ptr::eq(VinDecoder::standard(), VinDecoder::standard()));
    }

    #[test]
    fn misses_degrade_to_unknown() {
        let decoder = small();
        assert_eq!(decoder.region("KNA"), UNKNOWN);
        assert_eq!(decoder.country("KNA"), UNKNOWN);
        assert_eq!(decoder.manufacturer("WDB"), Ok(UNKNOWN));
        assert_eq!(decoder.model_year("WBA11CM0X08C97826"), UNKNOWN);
    }

    #[test]
    fn manufacturer_length_is_strict() {
        assert_eq!(
            small().manufacturer("WB"),
            Err(VinError::InvalidManufacturerCode("WB".into()))
        );
    }

    #[test]
    fn decode_with_custom_tables() {
        let decoded = small().decode("wbayh1cc1p5v51473");
        assert!(decoded.is_valid);
        assert_eq!(
            decoded.info,
            Some(VinInfo {
                region: "Europe".into(),
                country: "Germany".into(),
                model_year: "2023".into(),
                manufacturer: "BMW car".into(),
            })
        );
    }

    #[test]
    fn decode_invalid_has_no_info() {
        let decoded = small().decode("wba");
        assert_eq!(decoded.vin, "WBA");
        assert!(!decoded.is_valid);
        assert_eq!(
            decoded.message.as_deref(),
            Some("VIN must be 17 characters long")
        );
        assert!(decoded.info.is_none());
    }

    #[test]
    fn bad_range_fails_construction() {
        let data = ReferenceData {
            countries: vec![CountryRange::new('W', 'I', 'Z', "Germany")],
            ..ReferenceData::default()
        };
        assert_eq!(
            VinDecoder::new(&data).unwrap_err(),
            VinError::UnknownSymbol('I')
        );
    }

    #[test]
    fn decoder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VinDecoder>();
    }
}
