use crate::cli::ListArgs;
use crate::directory::DirectoryClient;
use crate::error::Result;
use crate::store::UserStore;
use crate::views;

/// Fetch the directory once and print it, optionally filtered.
pub async fn run(client: &DirectoryClient, args: ListArgs) -> Result<()> {
    let mut store = UserStore::new();
    store.replace_all(client.try_fetch_users().await?);

    let term = args.search.unwrap_or_default();
    views::print_users(&store.filter(&term), &term, None);

    Ok(())
}
