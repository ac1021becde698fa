/// TS 24.008 clause 10.4 mobility management message types
/// Bits: 6 (bits 7-8 masked)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MmMsgType {
    ImsiDetachIndication = 0x01,
    LocationUpdatingAccept = 0x02,
    LocationUpdatingReject = 0x04,
    LocationUpdatingRequest = 0x08,
    AuthenticationRequest = 0x12,
    AuthenticationResponse = 0x14,
    IdentityRequest = 0x18,
    IdentityResponse = 0x19,
    TmsiReallocationCommand = 0x1a,
    TmsiReallocationComplete = 0x1b,
    CmServiceAccept = 0x21,
    CmServiceAbort = 0x23,
    CmServiceRequest = 0x24,
    Abort = 0x29,
    MmInformation = 0x32,
}

impl std::convert::TryFrom<u8> for MmMsgType {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0x01 => Ok(MmMsgType::ImsiDetachIndication),
            0x02 => Ok(MmMsgType::LocationUpdatingAccept),
            0x04 => Ok(MmMsgType::LocationUpdatingReject),
            0x08 => Ok(MmMsgType::LocationUpdatingRequest),
            0x12 => Ok(MmMsgType::AuthenticationRequest),
            0x14 => Ok(MmMsgType::AuthenticationResponse),
            0x18 => Ok(MmMsgType::IdentityRequest),
            0x19 => Ok(MmMsgType::IdentityResponse),
            0x1a => Ok(MmMsgType::TmsiReallocationCommand),
            0x1b => Ok(MmMsgType::TmsiReallocationComplete),
            0x21 => Ok(MmMsgType::CmServiceAccept),
            0x23 => Ok(MmMsgType::CmServiceAbort),
            0x24 => Ok(MmMsgType::CmServiceRequest),
            0x29 => Ok(MmMsgType::Abort),
            0x32 => Ok(MmMsgType::MmInformation),
            _ => Err(()),
        }
    }
}

impl MmMsgType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for MmMsgType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MmMsgType::ImsiDetachIndication => write!(f, "IMSI DETACH"),
            MmMsgType::LocationUpdatingAccept => write!(f, "LOC UPD ACCEPT"),
            MmMsgType::LocationUpdatingReject => write!(f, "LOC UPD REJECT"),
            MmMsgType::LocationUpdatingRequest => write!(f, "LOC UPD REQUEST"),
            MmMsgType::AuthenticationRequest => write!(f, "AUTH REQUEST"),
            MmMsgType::AuthenticationResponse => write!(f, "AUTH RESPONSE"),
            MmMsgType::IdentityRequest => write!(f, "IDENTITY REQUEST"),
            MmMsgType::IdentityResponse => write!(f, "IDENTITY RESPONSE"),
            MmMsgType::TmsiReallocationCommand => write!(f, "TMSI REALLOC COMMAND"),
            MmMsgType::TmsiReallocationComplete => write!(f, "TMSI REALLOC COMPLETE"),
            MmMsgType::CmServiceAccept => write!(f, "CM SERVICE ACCEPT"),
            MmMsgType::CmServiceAbort => write!(f, "CM SERVICE ABORT"),
            MmMsgType::CmServiceRequest => write!(f, "CM SERVICE REQUEST"),
            MmMsgType::Abort => write!(f, "ABORT"),
            MmMsgType::MmInformation => write!(f, "MM INFORMATION"),
        }
    }
}
