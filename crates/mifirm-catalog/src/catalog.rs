use crate::device::DeviceRecord;
use crate::error::{Error, Result};

/// Built-in device table. Names double as output folder names, so they
/// must stay exactly as released.
pub static BUILTIN: &[DeviceRecord] = &[
    DeviceRecord::new("Mi Band (Model 1)", &["Mili.fw"]),
    DeviceRecord::new("Mi Band (Model 1A)", &["Mili_1a.fw"]),
    DeviceRecord::new("Mi Band (Model 1S)", &["Mili_hr.fw"]),
    DeviceRecord::new("Mi Band 2", &["Mili_pro.ft.en"]),
    DeviceRecord::new("Mi Band 3", &["Mili_wuhan.fw", "Mili_wuhan.res"]),
    DeviceRecord::new("Mi Band 3 (NFC)", &["Mili_chongqing.fw", "Mili_chongqing.res"]),
    DeviceRecord::new(
        "Amazfit Bip",
        &["Mili_chaohu.fw", "Mili_chaohu.res", "Mili_chaohu.gps"],
    ),
    DeviceRecord::new("Amazfit Cor", &["Mili_tempo.fw", "Mili_tempo.res"]),
];

/// Ordered, read-only view over a device table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    devices: &'static [DeviceRecord],
}

impl Default for Catalog {
    fn default() -> Self { Self::builtin() }
}

impl Catalog {
    pub const fn builtin() -> Self { Self { devices: BUILTIN } }

    pub fn len(&self) -> usize { self.devices.len() }

    pub fn is_empty(&self) -> bool { self.devices.is_empty() }

    pub fn devices(&self) -> &'static [DeviceRecord] { self.devices }

    /// Devices paired with their 1-based menu position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static DeviceRecord)> {
        self.devices.iter().enumerate().map(|(i, d)| (i + 1, d))
    }

    /// Look up a device by its 1-based position.
    pub fn select(&self, index: isize) -> Result<&'static DeviceRecord> {
        let out_of_range = || Error::OutOfRange {
            index,
            len: self.devices.len(),
        };
        let position = usize::try_from(index).map_err(|_| out_of_range())?;
        position
            .checked_sub(1)
            .and_then(|i| self.devices.get(i))
            .ok_or_else(out_of_range)
    }

    /// Parse a typed selection such as `"3"` or `" 3\n"`.
    pub fn parse_selection(&self, input: &str) -> Result<&'static DeviceRecord> {
        let trimmed = input.trim();
        let index = trimmed
            .parse::<isize>()
            .map_err(|_| Error::InvalidSelection {
                input: trimmed.to_string(),
            })?;
        self.select(index)
    }

    pub fn find(&self, name: &str) -> Result<&'static DeviceRecord> {
        self.devices
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| Error::UnknownDevice {
                name: name.to_string(),
            })
    }
}
