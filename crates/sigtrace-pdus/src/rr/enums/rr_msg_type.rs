/// TS 44.018 clause 10.4 radio resource management message types
/// Bits: 8 (not masked)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RrMsgType {
    SystemInformation13 = 0x00,
    SystemInformation2bis = 0x02,
    SystemInformation2ter = 0x03,
    SystemInformation5bis = 0x05,
    SystemInformation5ter = 0x06,
    SystemInformation2quater = 0x07,
    ChannelRelease = 0x0d,
    ClassmarkEnquiry = 0x13,
    MeasurementReport = 0x15,
    ClassmarkChange = 0x16,
    SystemInformation1 = 0x19,
    SystemInformation2 = 0x1a,
    SystemInformation3 = 0x1b,
    SystemInformation4 = 0x1c,
    SystemInformation5 = 0x1d,
    SystemInformation6 = 0x1e,
    PagingRequest1 = 0x21,
    PagingRequest2 = 0x22,
    PagingRequest3 = 0x24,
    PagingResponse = 0x27,
    AssignmentComplete = 0x29,
    HandoverCommand = 0x2b,
    HandoverComplete = 0x2c,
    AssignmentCommand = 0x2e,
    CipheringModeComplete = 0x32,
    GprsSuspensionRequest = 0x34,
    CipheringModeCommand = 0x35,
    ImmediateAssignmentExtended = 0x39,
    ImmediateAssignmentReject = 0x3a,
    ImmediateAssignment = 0x3f,
    UtranClassmarkChange = 0x60,
}

impl std::convert::TryFrom<u8> for RrMsgType {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0x00 => Ok(RrMsgType::SystemInformation13),
            0x02 => Ok(RrMsgType::SystemInformation2bis),
            0x03 => Ok(RrMsgType::SystemInformation2ter),
            0x05 => Ok(RrMsgType::SystemInformation5bis),
            0x06 => Ok(RrMsgType::SystemInformation5ter),
            0x07 => Ok(RrMsgType::SystemInformation2quater),
            0x0d => Ok(RrMsgType::ChannelRelease),
            0x13 => Ok(RrMsgType::ClassmarkEnquiry),
            0x15 => Ok(RrMsgType::MeasurementReport),
            0x16 => Ok(RrMsgType::ClassmarkChange),
            0x19 => Ok(RrMsgType::SystemInformation1),
            0x1a => Ok(RrMsgType::SystemInformation2),
            0x1b => Ok(RrMsgType::SystemInformation3),
            0x1c => Ok(RrMsgType::SystemInformation4),
            0x1d => Ok(RrMsgType::SystemInformation5),
            0x1e => Ok(RrMsgType::SystemInformation6),
            0x21 => Ok(RrMsgType::PagingRequest1),
            0x22 => Ok(RrMsgType::PagingRequest2),
            0x24 => Ok(RrMsgType::PagingRequest3),
            0x27 => Ok(RrMsgType::PagingResponse),
            0x29 => Ok(RrMsgType::AssignmentComplete),
            0x2b => Ok(RrMsgType::HandoverCommand),
            0x2c => Ok(RrMsgType::HandoverComplete),
            0x2e => Ok(RrMsgType::AssignmentCommand),
            0x32 => Ok(RrMsgType::CipheringModeComplete),
            0x34 => Ok(RrMsgType::GprsSuspensionRequest),
            0x35 => Ok(RrMsgType::CipheringModeCommand),
            0x39 => Ok(RrMsgType::ImmediateAssignmentExtended),
            0x3a => Ok(RrMsgType::ImmediateAssignmentReject),
            0x3f => Ok(RrMsgType::ImmediateAssignment),
            0x60 => Ok(RrMsgType::UtranClassmarkChange),
            _ => Err(()),
        }
    }
}

impl RrMsgType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }

    /// System information types whose first 18 octets are fed to a padding history
    pub fn is_sacch_sysinfo(self) -> bool {
        matches!(
            self,
            RrMsgType::SystemInformation5
                | RrMsgType::SystemInformation5bis
                | RrMsgType::SystemInformation5ter
                | RrMsgType::SystemInformation6
        )
    }

    pub fn is_sysinfo(self) -> bool {
        self.is_sacch_sysinfo()
            || matches!(
                self,
                RrMsgType::SystemInformation1
                    | RrMsgType::SystemInformation2
                    | RrMsgType::SystemInformation2bis
                    | RrMsgType::SystemInformation2ter
                    | RrMsgType::SystemInformation2quater
                    | RrMsgType::SystemInformation3
                    | RrMsgType::SystemInformation4
                    | RrMsgType::SystemInformation13
            )
    }
}

impl core::fmt::Display for RrMsgType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RrMsgType::SystemInformation13 => write!(f, "SYSTEM INFO 13"),
            RrMsgType::SystemInformation2bis => write!(f, "SYSTEM INFO 2bis"),
            RrMsgType::SystemInformation2ter => write!(f, "SYSTEM INFO 2ter"),
            RrMsgType::SystemInformation5bis => write!(f, "SYSTEM INFO 5bis"),
            RrMsgType::SystemInformation5ter => write!(f, "SYSTEM INFO 5ter"),
            RrMsgType::SystemInformation2quater => write!(f, "SYSTEM INFO 2quater"),
            RrMsgType::ChannelRelease => write!(f, "CHANNEL RELEASE"),
            RrMsgType::ClassmarkEnquiry => write!(f, "CLASSMARK ENQUIRY"),
            RrMsgType::MeasurementReport => write!(f, "MEASUREMENT REPORT"),
            RrMsgType::ClassmarkChange => write!(f, "CLASSMARK CHANGE"),
            RrMsgType::SystemInformation1 => write!(f, "SYSTEM INFO 1"),
            RrMsgType::SystemInformation2 => write!(f, "SYSTEM INFO 2"),
            RrMsgType::SystemInformation3 => write!(f, "SYSTEM INFO 3"),
            RrMsgType::SystemInformation4 => write!(f, "SYSTEM INFO 4"),
            RrMsgType::SystemInformation5 => write!(f, "SYSTEM INFO 5"),
            RrMsgType::SystemInformation6 => write!(f, "SYSTEM INFO 6"),
            RrMsgType::PagingRequest1 => write!(f, "PAGING REQ 1"),
            RrMsgType::PagingRequest2 => write!(f, "PAGING REQ 2"),
            RrMsgType::PagingRequest3 => write!(f, "PAGING REQ 3"),
            RrMsgType::PagingResponse => write!(f, "PAGING RESPONSE"),
            RrMsgType::AssignmentComplete => write!(f, "ASSIGNMENT COMPLETE"),
            RrMsgType::HandoverCommand => write!(f, "HANDOVER COMMAND"),
            RrMsgType::HandoverComplete => write!(f, "HANDOVER COMPLETE"),
            RrMsgType::AssignmentCommand => write!(f, "ASSIGNMENT COMMAND"),
            RrMsgType::CipheringModeComplete => write!(f, "CIPHER MODE COMPLETE"),
            RrMsgType::GprsSuspensionRequest => write!(f, "GPRS SUSPEND"),
            RrMsgType::CipheringModeCommand => write!(f, "CIPHER MODE COMMAND"),
            RrMsgType::ImmediateAssignmentExtended => write!(f, "IMM ASSIGNMENT EXT"),
            RrMsgType::ImmediateAssignmentReject => write!(f, "IMM ASSIGNMENT REJECT"),
            RrMsgType::ImmediateAssignment => write!(f, "IMM ASSIGNMENT"),
            RrMsgType::UtranClassmarkChange => write!(f, "UTRAN CLASSMARK"),
        }
    }
}
