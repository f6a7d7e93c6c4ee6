//! Layout of the sensor's 9-byte reply and the big-endian field assembly.

/// I2C address of the iAQ-Core, fixed by the sensor.
pub const SENSOR_ADDRESS: u8 = 0x5A;

/// Length of a full reply.
pub const RESPONSE_LEN: usize = 9;
/// Bytes read by a short (status + CO2 high byte) update.
pub const SHORT_READ_LEN: usize = 2;

pub(crate) const STATUS_OFFSET: usize = 0;
pub(crate) const CO2_PREDICTION_OFFSET: usize = 1;
pub(crate) const RESISTANCE_OFFSET: usize = 3;
// offset 6 is reserved by the sensor
pub(crate) const TVOC_PREDICTION_OFFSET: usize = 7;

pub(crate) fn read_u16_be(data: &[u8; RESPONSE_LEN], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

pub(crate) fn read_u24_be(data: &[u8; RESPONSE_LEN], offset: usize) -> u32 {
    u32::from_be_bytes([0, data[offset], data[offset + 1], data[offset + 2]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_big_endian_fields() {
        let data = [0x00, 0x01, 0xF4, 0x00, 0x00, 0x64, 0x00, 0x00, 0x32];
        assert_eq!(read_u16_be(&data, CO2_PREDICTION_OFFSET), 500);
        assert_eq!(read_u24_be(&data, RESISTANCE_OFFSET), 100);
        assert_eq!(read_u16_be(&data, TVOC_PREDICTION_OFFSET), 50);
    }

    #[test]
    fn zero_buffer_decodes_to_zero() {
        let data = [0u8; RESPONSE_LEN];
        assert_eq!(read_u16_be(&data, CO2_PREDICTION_OFFSET), 0);
        assert_eq!(read_u24_be(&data, RESISTANCE_OFFSET), 0);
        assert_eq!(read_u16_be(&data, TVOC_PREDICTION_OFFSET), 0);
    }

    #[test]
    fn saturated_buffer_decodes_to_field_maxima() {
        let data = [0xFF; RESPONSE_LEN];
        assert_eq!(read_u16_be(&data, CO2_PREDICTION_OFFSET), 0xFFFF);
        assert_eq!(read_u24_be(&data, RESISTANCE_OFFSET), 0x00FF_FFFF);
        assert_eq!(read_u16_be(&data, TVOC_PREDICTION_OFFSET), 0xFFFF);
    }
}
