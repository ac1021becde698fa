/// TS 24.008 clause 10.4 GPRS mobility management message types
/// Bits: 6 (bits 7-8 masked)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GmmMsgType {
    AttachRequest = 0x01,
    AttachAccept = 0x02,
    AttachComplete = 0x03,
    AttachReject = 0x04,
    DetachRequest = 0x05,
    DetachAccept = 0x06,
    RoutingAreaUpdateRequest = 0x08,
    RoutingAreaUpdateAccept = 0x09,
    RoutingAreaUpdateComplete = 0x0a,
    RoutingAreaUpdateReject = 0x0b,
    ServiceRequest = 0x0c,
    ServiceAccept = 0x0d,
    ServiceReject = 0x0e,
    PtmsiReallocationCommand = 0x10,
    PtmsiReallocationComplete = 0x11,
    AuthCipherRequest = 0x12,
    AuthCipherResponse = 0x13,
    AuthCipherReject = 0x14,
    IdentityRequest = 0x15,
    IdentityResponse = 0x16,
    GmmStatus = 0x20,
    GmmInformation = 0x21,
}

impl std::convert::TryFrom<u8> for GmmMsgType {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0x01 => Ok(GmmMsgType::AttachRequest),
            0x02 => Ok(GmmMsgType::AttachAccept),
            0x03 => Ok(GmmMsgType::AttachComplete),
            0x04 => Ok(GmmMsgType::AttachReject),
            0x05 => Ok(GmmMsgType::DetachRequest),
            0x06 => Ok(GmmMsgType::DetachAccept),
            0x08 => Ok(GmmMsgType::RoutingAreaUpdateRequest),
            0x09 => Ok(GmmMsgType::RoutingAreaUpdateAccept),
            0x0a => Ok(GmmMsgType::RoutingAreaUpdateComplete),
            0x0b => Ok(GmmMsgType::RoutingAreaUpdateReject),
            0x0c => Ok(GmmMsgType::ServiceRequest),
            0x0d => Ok(GmmMsgType::ServiceAccept),
            0x0e => Ok(GmmMsgType::ServiceReject),
            0x10 => Ok(GmmMsgType::PtmsiReallocationCommand),
            0x11 => Ok(GmmMsgType::PtmsiReallocationComplete),
            0x12 => Ok(GmmMsgType::AuthCipherRequest),
            0x13 => Ok(GmmMsgType::AuthCipherResponse),
            0x14 => Ok(GmmMsgType::AuthCipherReject),
            0x15 => Ok(GmmMsgType::IdentityRequest),
            0x16 => Ok(GmmMsgType::IdentityResponse),
            0x20 => Ok(GmmMsgType::GmmStatus),
            0x21 => Ok(GmmMsgType::GmmInformation),
            _ => Err(()),
        }
    }
}

impl GmmMsgType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for GmmMsgType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GmmMsgType::AttachRequest => write!(f, "ATTACH REQUEST"),
            GmmMsgType::AttachAccept => write!(f, "ATTACH ACCEPT"),
            GmmMsgType::AttachComplete => write!(f, "ATTACH COMPLETE"),
            GmmMsgType::AttachReject => write!(f, "ATTACH REJECT"),
            GmmMsgType::DetachRequest => write!(f, "DETACH REQUEST"),
            GmmMsgType::DetachAccept => write!(f, "DETACH ACCEPT"),
            GmmMsgType::RoutingAreaUpdateRequest => write!(f, "RA UPDATE REQUEST"),
            GmmMsgType::RoutingAreaUpdateAccept => write!(f, "RA UPDATE ACCEPT"),
            GmmMsgType::RoutingAreaUpdateComplete => write!(f, "RA UPDATE COMPLETE"),
            GmmMsgType::RoutingAreaUpdateReject => write!(f, "RA UPDATE REJECT"),
            GmmMsgType::ServiceRequest => write!(f, "SERVICE REQUEST"),
            GmmMsgType::ServiceAccept => write!(f, "SERVICE ACCEPT"),
            GmmMsgType::ServiceReject => write!(f, "SERVICE REJECT"),
            GmmMsgType::PtmsiReallocationCommand => write!(f, "PTMSI REALLOC COMMAND"),
            GmmMsgType::PtmsiReallocationComplete => write!(f, "PTMSI REALLOC COMPLETE"),
            GmmMsgType::AuthCipherRequest => write!(f, "AUTH AND CIPHER REQUEST"),
            GmmMsgType::AuthCipherResponse => write!(f, "AUTH AND CIPHER RESPONSE"),
            GmmMsgType::AuthCipherReject => write!(f, "AUTH AND CIPHER REJECT"),
            GmmMsgType::IdentityRequest => write!(f, "IDENTITY REQUEST"),
            GmmMsgType::IdentityResponse => write!(f, "IDENTITY RESPONSE"),
            GmmMsgType::GmmStatus => write!(f, "GMM STATUS"),
            GmmMsgType::GmmInformation => write!(f, "GMM INFORMATION"),
        }
    }
}
