//! Background task that performs the one-time post load.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AppMessage;

use super::posts_api::PostsApi;

/// Handle to the running load task. Dropping it aborts the task, so a result
/// can never reach a view that has been torn down.
#[derive(Debug)]
pub struct LoadHandle {
    handle: JoinHandle<()>,
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn the load on the current runtime.
///
/// The result is delivered as [`AppMessage::PostsLoaded`]. A closed channel
/// means the view is gone and the result is dropped.
pub fn spawn_post_loader(api: PostsApi, tx: mpsc::UnboundedSender<AppMessage>) -> LoadHandle {
    let handle = tokio::spawn(async move {
        tracing::info!(endpoint = api.endpoint(), "Fetching posts");
        let result = api.fetch_posts().await;
        if tx.send(AppMessage::PostsLoaded(result)).is_err() {
            tracing::debug!("Load result discarded: receiver closed");
        }
    });

    LoadHandle { handle }
}
