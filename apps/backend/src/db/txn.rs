use futures_util::future::LocalBoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute a function within a database transaction.
///
/// Commits when the closure returns `Ok`, rolls back on `Err`. The closure
/// returns a boxed future borrowing the transaction:
///
/// ```rust,ignore
/// with_txn(&state, |txn| Box::pin(async move { repo::do_thing(txn).await })).await
/// ```
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> LocalBoxFuture<'a, Result<R, AppError>>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; the original error wins.
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "transaction rollback failed");
            }
            Err(err)
        }
    }
}
