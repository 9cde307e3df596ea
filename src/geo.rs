use serde::{Deserialize, Serialize};

const SOUTH_BIT: u32 = 47;
const LATITUDE_SHIFT: u32 = 24;
const LATITUDE_BITS: u32 = 23;
const LONGITUDE_BITS: u32 = 24;
const LATITUDE_MASK: u64 = (1 << LATITUDE_BITS) - 1;
const LONGITUDE_MASK: u64 = (1 << LONGITUDE_BITS) - 1;

/// A point packed into 48 bits:
///  - bit 47: southern hemisphere flag
///  - bits 46..24: latitude, 23-bit fraction of 90 degrees
///  - bits 23..0: longitude, 24-bit fraction of 360 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub is_south: bool,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn encode(&self) -> u64 {
        let latitude = ((1_u64 << LATITUDE_BITS) as f64 * self.latitude / 90.0) as i64 as u64;
        let longitude = ((1_u64 << LONGITUDE_BITS) as f64 * self.longitude / 360.0) as i64 as u64;

        let mut packed = (latitude & LATITUDE_MASK) << LATITUDE_SHIFT;
        packed |= longitude & LONGITUDE_MASK;
        if self.is_south {
            packed |= 1 << SOUTH_BIT;
        }
        packed
    }

    /// Bits above 47 are ignored
    pub fn decode(packed: u64) -> Self {
        let latitude = (packed >> LATITUDE_SHIFT) & LATITUDE_MASK;
        let longitude = packed & LONGITUDE_MASK;
        GeoPoint {
            is_south: (packed >> SOUTH_BIT) & 1 == 1,
            latitude: (latitude * 90) as f64 / (1_u64 << LATITUDE_BITS) as f64,
            longitude: (longitude * 360) as f64 / (1_u64 << LONGITUDE_BITS) as f64,
        }
    }
}
