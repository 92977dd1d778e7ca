use crate::cli::links::LinkService;

#[derive(Debug, clap::Args)]
pub struct Latest {
    /// Also open the link in the default browser
    #[arg(long)]
    open: bool,
}

impl Latest {
    pub fn run<L: LinkService>(self, links: &L) -> anyhow::Result<String> {
        let url = links.latest()?;
        println!("{url}");
        if self.open {
            links.open(&url)?;
        }
        Ok(url)
    }
}
