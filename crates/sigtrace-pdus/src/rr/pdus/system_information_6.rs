use core::fmt;

use sigtrace_core::{ByteReader, pdu_parse_error::PduParseErr};

use crate::common::fields::location_area_id::LocationAreaId;

/// Representation of the SYSTEM INFORMATION TYPE 6 message (TS 44.018 clause 9.1.40), sent on SACCH.
/// Only the cell identity and location area are retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInformation6 {
    pub cell_identity: u16,
    pub lai: LocationAreaId,
}

impl SystemInformation6 {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let mut buf = ByteReader::new(data);
        let cell_identity = buf.read_u16_be("SI6_LEN")?;
        let lai = LocationAreaId::from_reader(&mut buf, "SI6_LEN")?;
        Ok(SystemInformation6 { cell_identity, lai })
    }
}

impl fmt::Display for SystemInformation6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SystemInformation6 {{ cell_identity: {} lai: {} }}", self.cell_identity, self.lai)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_and_lai() {
        let data = hex::decode("2ee062f210123400ff").unwrap();
        let pdu = SystemInformation6::from_bytes(&data).unwrap();
        assert_eq!(pdu.cell_identity, 0x2ee0);
        assert_eq!(pdu.lai.mcc(), 262);
        assert_eq!(pdu.lai.lac, 0x1234);

        assert!(SystemInformation6::from_bytes(&data[..5]).is_err());
    }
}
