use clap::Args;
use pagenav::RefreshClient;
use url::Url;

#[derive(Args)]
pub struct RefreshArgs {
    /// Page URL to refresh (query string is stripped before posting)
    #[arg(long)]
    pub url: Url,

    /// CSRF token sent in the X-CSRFToken header
    #[arg(long)]
    pub csrf_token: String,
}

/// Fire-and-forget: a failed ping is logged and the command still exits 0.
pub async fn run(args: &RefreshArgs) {
    RefreshClient::new()
        .ping_and_forget(&args.url, &args.csrf_token)
        .await;
}
