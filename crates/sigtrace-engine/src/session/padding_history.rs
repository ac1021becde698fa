/// Source of a padding sample. Each source keeps its own history, as networks
/// fill different frame types differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingCategory {
    /// SDCCH/FACCH frames without payload
    Null,
    /// SDCCH/FACCH frames with payload
    Sdcch,
    /// SACCH frames
    Sacch,
    Si5,
    Si5bis,
    Si5ter,
    Si6,
}

impl PaddingCategory {
    const COUNT: usize = 7;

    fn index(self) -> usize {
        match self {
            PaddingCategory::Null => 0,
            PaddingCategory::Sdcch => 1,
            PaddingCategory::Sacch => 2,
            PaddingCategory::Si5 => 3,
            PaddingCategory::Si5bis => 4,
            PaddingCategory::Si5ter => 5,
            PaddingCategory::Si6 => 6,
        }
    }
}

/// What the classifier has seen so far for one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaddingHistory {
    last: Vec<u8>,
    pub samples: u32,
    pub random: u32,
}

impl PaddingHistory {
    /// The most recent sample, empty if none
    pub fn previous(&self) -> &[u8] {
        &self.last
    }

    pub fn record(&mut self, sample: &[u8], is_random: bool) {
        self.last.clear();
        self.last.extend_from_slice(sample);
        self.samples += 1;
        if is_random {
            self.random += 1;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaddingHistories {
    slots: [PaddingHistory; PaddingCategory::COUNT],
}

impl PaddingHistories {
    pub fn get(&self, category: PaddingCategory) -> &PaddingHistory {
        &self.slots[category.index()]
    }

    pub fn get_mut(&mut self, category: PaddingCategory) -> &mut PaddingHistory {
        &mut self.slots[category.index()]
    }
}
