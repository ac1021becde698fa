/// Channel description extracted from an assignment or handover command.
/// Filled by an `AssignmentParser` collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// RSL channel number of the new channel
    pub chan_nr: u8,
    pub tsc: u8,
    pub hopping: bool,
    /// Single ARFCN when not hopping
    pub arfcn: u16,
    pub maio: u8,
    pub hsn: u8,
    /// Mobile allocation, resolved against the cell's ARFCN list
    pub ma: Vec<u16>,
}
