use anyhow::Result;
use clap::Args;
use pagenav::{render_strip, PageLink, PaginationState};
use tabled::{Table, Tabled};
use url::Url;

#[derive(Args)]
pub struct StripArgs {
    /// Current page (1-indexed)
    #[arg(long)]
    pub page: u32,

    /// Total number of pages
    #[arg(long)]
    pub total: u32,

    /// URL whose query string the links extend
    #[arg(long, default_value = "https://localhost/")]
    pub base_url: Url,

    /// Output format: table, json, or html
    #[arg(long, default_value = "table")]
    pub output: String,
}

pub fn run(args: &StripArgs) -> Result<()> {
    let state = PaginationState::new(args.page, args.total)?;
    let links = state.links(&args.base_url);

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&links)?),
        "html" => println!("{}", render_strip(&links)),
        _ => print_table(&links),
    }
    Ok(())
}

#[derive(Tabled)]
struct LinkRow {
    #[tabled(rename = "kind")]
    kind: String,
    #[tabled(rename = "page")]
    page: String,
    #[tabled(rename = "current")]
    current: bool,
    #[tabled(rename = "disabled")]
    disabled: bool,
    #[tabled(rename = "href")]
    href: String,
}

fn print_table(links: &[PageLink]) {
    let rows: Vec<LinkRow> = links
        .iter()
        .map(|link| LinkRow {
            kind: format!("{:?}", link.kind).to_lowercase(),
            page: link
                .page_number
                .map(|p| p.to_string())
                .unwrap_or_default(),
            current: link.is_current,
            disabled: link.is_disabled,
            href: link.href.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));
}
