//! Panel descriptions and the driver configuration

/// Controller family of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipVariant {
    /// UltraChip UC8176 (IL0398 compatible), busy line is active low
    Uc8176,
    /// Solomon SSD1619, busy line is active high
    Ssd1619,
}

/// Panel resolutions the UC8176 panel setting register knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// 400 x 300
    #[default]
    R400x300,
    /// 320 x 300
    R320x300,
    /// 320 x 240
    R320x240,
    /// 200 x 300
    R200x300,
}

impl Resolution {
    /// Width in pixels
    pub const fn width(self) -> u16 {
        match self {
            Resolution::R400x300 => 400,
            Resolution::R320x300 | Resolution::R320x240 => 320,
            Resolution::R200x300 => 200,
        }
    }

    /// Height in pixels
    pub const fn height(self) -> u16 {
        match self {
            Resolution::R320x240 => 240,
            _ => 300,
        }
    }

    /// RES[1:0] field of the UC8176 panel setting register
    pub(crate) const fn uc8176_bits(self) -> u8 {
        self as u8
    }
}

/// Everything the driver needs to know about the attached panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelModel {
    /// Controller family
    pub chip: ChipVariant,
    /// Panel resolution
    pub resolution: Resolution,
    /// Black/white/red panel with a second RAM plane
    pub color_capable: bool,
    /// The controller treats a set color bit as red, the canvas uses set bits for white
    pub invert_color_plane: bool,
}

/// 4.2" B/W panel on a UC8176
pub const UC8176_420_BW: PanelModel = PanelModel {
    chip: ChipVariant::Uc8176,
    resolution: Resolution::R400x300,
    color_capable: false,
    invert_color_plane: false,
};

/// 4.2" BWR panel on a UC8176
pub const UC8176_420_BWR: PanelModel = PanelModel {
    chip: ChipVariant::Uc8176,
    resolution: Resolution::R400x300,
    color_capable: true,
    invert_color_plane: false,
};

/// 4.2" BWR panel on a SSD1619
pub const SSD1619_420_BWR: PanelModel = PanelModel {
    chip: ChipVariant::Ssd1619,
    resolution: Resolution::R400x300,
    color_capable: true,
    invert_color_plane: true,
};

/// 4.2" B/W panel on a SSD1619
pub const SSD1619_420_BW: PanelModel = PanelModel {
    chip: ChipVariant::Ssd1619,
    resolution: Resolution::R400x300,
    color_capable: false,
    invert_color_plane: false,
};

impl PanelModel {
    /// Looks up a model by the id stored in the device configuration
    pub const fn from_id(id: u8) -> Option<PanelModel> {
        match id {
            1 => Some(UC8176_420_BW),
            2 => Some(SSD1619_420_BWR),
            3 => Some(UC8176_420_BWR),
            4 => Some(SSD1619_420_BW),
            _ => None,
        }
    }

    /// Like [`from_id`](PanelModel::from_id) but unknown ids select the UC8176 B/W panel
    pub fn from_id_or_default(id: u8) -> PanelModel {
        PanelModel::from_id(id).unwrap_or(UC8176_420_BW)
    }

    /// The id of this model in the device configuration, if it has one
    pub fn id(&self) -> Option<u8> {
        (1..=4).find(|&id| PanelModel::from_id(id).as_ref() == Some(self))
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.resolution.width()
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.resolution.height()
    }

    /// Bytes of one full panel plane
    pub const fn plane_len(&self) -> usize {
        crate::window::width_bytes(self.width()) as usize * self.height() as usize
    }
}

impl Default for PanelModel {
    fn default() -> Self {
        UC8176_420_BW
    }
}

/// Busy wait limits in polls of the busy line (one poll is roughly 1 ms)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyTimeouts {
    /// Power on / power off
    pub power: u32,
    /// A full refresh waveform
    pub refresh: u32,
    /// Software reset and analog setup after `init`
    pub reset: u32,
}

impl Default for BusyTimeouts {
    fn default() -> Self {
        BusyTimeouts {
            power: 100,
            refresh: 30_000,
            reset: 200,
        }
    }
}

/// Driver configuration, injected when the driver is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Attached panel
    pub model: PanelModel,
    /// Busy wait limits
    pub timeouts: BusyTimeouts,
    /// Length of the reset pulse phases in ms
    pub reset_ms: u32,
}

impl DriverConfig {
    /// Default timings for `model`
    pub fn new(model: PanelModel) -> Self {
        DriverConfig {
            model,
            timeouts: BusyTimeouts::default(),
            reset_ms: 10,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig::new(PanelModel::default())
    }
}
