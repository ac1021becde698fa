use sigtrace_pdus::common::fields::bcd_number::decode_bcd_number;

/// Turns a called/calling party BCD number IE value into a printable number
pub trait AddressDecoder {
    fn decode_address(&self, value: &[u8]) -> String {
        decode_bcd_number(value)
    }
}

pub struct BcdAddressDecoder;

impl AddressDecoder for BcdAddressDecoder {}
