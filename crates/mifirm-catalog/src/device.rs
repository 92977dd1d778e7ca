/// Location of every payload inside the application archive.
pub const ASSET_PREFIX: &str = "assets/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Display label, also the name of the output folder.
    pub name: &'static str,
    /// Plain file names, extracted in this order.
    pub payload_files: &'static [&'static str],
}

impl DeviceRecord {
    pub const fn new(name: &'static str, payload_files: &'static [&'static str]) -> Self {
        Self { name, payload_files }
    }

    /// Archive entry paths for each payload, in extraction order.
    pub fn payload_entries(&self) -> impl Iterator<Item = String> + '_ {
        self.payload_files
            .iter()
            .map(|file| format!("{ASSET_PREFIX}{file}"))
    }
}

/// A payload name is valid when it is a single plain path component.
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_entries_are_prefixed_in_order() {
        let record = DeviceRecord::new("Amazfit Cor", &["Mili_tempo.fw", "Mili_tempo.res"]);
        let entries: Vec<_> = record.payload_entries().collect();
        assert_eq!(entries, ["assets/Mili_tempo.fw", "assets/Mili_tempo.res"]);
    }

    #[test]
    fn plain_name_rejects_separators() {
        assert!(is_plain_name("Mili.fw"));
        assert!(is_plain_name("Mili_pro.ft.en"));
        assert!(!is_plain_name("fw/Mili.fw"));
        assert!(!is_plain_name("..\\Mili.fw"));
        assert!(!is_plain_name(".."));
        assert!(!is_plain_name(""));
    }
}
