use mifirm_catalog::Catalog;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, clap::Args)]
pub struct Ls {}

impl Ls {
    pub fn run(self, catalog: Catalog) {
        println!("{}", device_table(catalog));
    }
}

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Device")]
    name: &'static str,
    #[tabled(rename = "Firmware files")]
    files: String,
}

pub fn device_table(catalog: Catalog) -> Table {
    let rows = catalog.iter().map(|(position, device)| DeviceRow {
        position,
        name: device.name,
        files: device.payload_files.join(", "),
    });
    let mut table = Table::new(rows);
    table.with(Style::blank());
    table
}
