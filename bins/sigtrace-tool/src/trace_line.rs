use sigtrace_core::{ChannelType, Direction, Domain, FrameNumber, RadioMessage, RadioTechnology};
use sigtrace_engine::{new_l2, new_l3};

/// One parsed line of a text trace:
/// `<gsm|umts|lte> <sacch|sdcch|facch|bcch> <ul|dl> <fn> <hex> [l3]`
#[derive(Debug, PartialEq, Eq)]
pub struct TraceLine {
    pub rat: RadioTechnology,
    pub channel: ChannelType,
    pub dir: Direction,
    pub fnr: FrameNumber,
    pub data: Vec<u8>,
    /// `data` is a bare L3 message that still needs an L2 envelope
    pub is_l3: bool,
}

impl TraceLine {
    /// Parse a line. Returns Ok(None) for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<TraceLine>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 5 || fields.len() > 6 {
            return Err(format!("expected 5 or 6 fields, got {}", fields.len()));
        }

        let rat: RadioTechnology = fields[0].parse()?;
        let channel: ChannelType = fields[1].parse()?;
        let dir = match fields[2].to_lowercase().as_str() {
            "ul" | "uplink" => Direction::Ul,
            "dl" | "downlink" => Direction::Dl,
            other => return Err(format!("unknown direction '{}'", other)),
        };
        if rat == RadioTechnology::Umts && channel == ChannelType::Sacch {
            return Err("UMTS has no SACCH".to_string());
        }
        let fnr: FrameNumber = fields[3].parse().map_err(|e| format!("bad frame number '{}': {}", fields[3], e))?;
        let data = hex::decode(fields[4]).map_err(|e| format!("bad hex payload: {}", e))?;
        let is_l3 = match fields.get(5) {
            None => false,
            Some(&"l3") => true,
            Some(other) => return Err(format!("unknown flag '{}'", other)),
        };

        Ok(Some(TraceLine { rat, channel, dir, fnr, data, is_l3 }))
    }

    /// Build the envelope the engine consumes
    pub fn into_message(self) -> Result<RadioMessage, String> {
        if self.is_l3 {
            new_l3(&self.data, self.rat, Domain::CircuitSwitched, self.fnr, self.dir, self.channel)
                .ok_or_else(|| "empty l3 message".to_string())
        } else {
            Ok(new_l2(&self.data, self.rat, Domain::CircuitSwitched, self.fnr, self.dir, self.channel))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_l3_line() {
        let line = TraceLine::parse("gsm sdcch ul 1234 052431 l3").unwrap().unwrap();
        assert_eq!(line.rat, RadioTechnology::Gsm);
        assert_eq!(line.channel, ChannelType::Sdcch);
        assert_eq!(line.dir, Direction::Ul);
        assert_eq!(line.fnr, 1234);
        assert_eq!(line.data, vec![0x05, 0x24, 0x31]);
        assert!(line.is_l3);

        let msg = line.into_message().unwrap();
        assert_eq!(msg.payload.len(), 23);
        assert_eq!(&msg.payload[..3], &[0x01, 0x03, 0x0d]);
    }

    #[test]
    fn test_skip_and_reject() {
        assert_eq!(TraceLine::parse("   "), Ok(None));
        assert_eq!(TraceLine::parse("# captured 2024-01-01"), Ok(None));
        assert!(TraceLine::parse("umts sacch dl 0 0601").is_err());
        assert!(TraceLine::parse("gsm sdcch up 0 0601").is_err());
        assert!(TraceLine::parse("gsm sdcch dl x 0601").is_err());
        assert!(TraceLine::parse("gsm sdcch dl 0 06z1").is_err());
        assert!(TraceLine::parse("gsm sdcch dl 0 0601 l2").is_err());
        assert!(TraceLine::parse("gsm sdcch dl 0").is_err());
    }

    #[test]
    fn test_raw_frame_passes_through() {
        let line = TraceLine::parse("lte sdcch dl 0 07410102").unwrap().unwrap();
        let msg = line.into_message().unwrap();
        assert_eq!(msg.payload, vec![0x07, 0x41, 0x01, 0x02]);
        assert_eq!(msg.rat, RadioTechnology::Lte);
    }
}
