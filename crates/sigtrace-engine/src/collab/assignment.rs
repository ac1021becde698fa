use sigtrace_pdus::rr::enums::rr_msg_type::RrMsgType;

use crate::session::Assignment;

/// Extracts the new channel from an ASSIGNMENT COMMAND or HANDOVER COMMAND
pub trait AssignmentParser {
    /// `l3` is the full message including the 2-octet header
    fn parse_assignment(&mut self, l3: &[u8], cell_arfcns: &[u16], out: &mut Assignment);
}

pub struct NullAssignmentParser;

impl AssignmentParser for NullAssignmentParser {
    fn parse_assignment(&mut self, _l3: &[u8], _cell_arfcns: &[u16], _out: &mut Assignment) {}
}

/// Decodes the mandatory Channel Description 2 IE (TS 44.018 clause 10.5.2.5a).
/// With hopping, the mobile allocation is approximated by the full cell allocation.
pub struct ChannelDescriptionParser;

impl AssignmentParser for ChannelDescriptionParser {
    fn parse_assignment(&mut self, l3: &[u8], cell_arfcns: &[u16], out: &mut Assignment) {
        // Handover commands carry a 2-octet cell description first
        let offset = match l3.get(1).map(|&t| RrMsgType::try_from(t)) {
            Some(Ok(RrMsgType::AssignmentCommand)) => 2,
            Some(Ok(RrMsgType::HandoverCommand)) => 4,
            _ => {
                tracing::warn!("not an assignment: {}", hex_prefix(l3));
                return;
            }
        };
        let Some(desc) = l3.get(offset..offset + 3) else {
            tracing::warn!("truncated channel description: {}", hex_prefix(l3));
            return;
        };

        out.chan_nr = desc[0];
        out.tsc = desc[1] >> 5;
        out.hopping = desc[1] & 0x10 != 0;
        if out.hopping {
            out.maio = ((desc[1] & 0x0f) << 2) | (desc[2] >> 6);
            out.hsn = desc[2] & 0x3f;
            out.arfcn = 0;
            out.ma = cell_arfcns.to_vec();
        } else {
            out.arfcn = (((desc[1] & 0x03) as u16) << 8) | desc[2] as u16;
            out.maio = 0;
            out.hsn = 0;
            out.ma.clear();
        }
        tracing::debug!("<- {:?}", out);
    }
}

fn hex_prefix(l3: &[u8]) -> String {
    hex::encode(&l3[..l3.len().min(8)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_single_arfcn() {
        let mut out = Assignment::default();
        // TCH/F on TN 2, TSC 5, ARFCN 0x3e
        ChannelDescriptionParser.parse_assignment(&[0x06, 0x2e, 0x0a, 0xa0, 0x3e, 0x05], &[], &mut out);
        assert_eq!(out.chan_nr, 0x0a);
        assert_eq!(out.tsc, 5);
        assert!(!out.hopping);
        assert_eq!(out.arfcn, 0x3e);
    }

    #[test]
    fn test_handover_hopping() {
        let mut out = Assignment::default();
        let l3 = [0x06, 0x2b, 0x00, 0x00, 0x09, 0x33, 0x45];
        ChannelDescriptionParser.parse_assignment(&l3, &[10, 20, 30], &mut out);
        assert!(out.hopping);
        assert_eq!(out.tsc, 1);
        assert_eq!(out.maio, (0x03 << 2) | 0x01);
        assert_eq!(out.hsn, 0x05);
        assert_eq!(out.ma, vec![10, 20, 30]);
    }
}
