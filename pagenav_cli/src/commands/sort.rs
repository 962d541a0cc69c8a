use clap::Args;
use pagenav::toggle_sort;
use url::Url;

#[derive(Args)]
pub struct SortArgs {
    /// URL carrying the current query string
    #[arg(long)]
    pub url: Url,

    /// Column key to sort by
    #[arg(long)]
    pub key: String,
}

pub fn run(args: &SortArgs) {
    println!("{}", toggle_sort(&args.url, &args.key));
}
