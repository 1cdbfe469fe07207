//! Periodic reconciliation of the photo attachment saga plus session
//! cleanup.
//!
//! A `pending` image row is written before each object upload; if the
//! process dies or the upload fails, the marker stays behind. This task
//! deletes markers older than the cutoff, best-effort removing any object
//! that did reach storage, and purges expired or revoked refresh
//! sessions. Runs on a fixed interval using `tokio::time::interval`.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use homecheck_cloud::ObjectStorage;
use homecheck_db::repositories::{InspectionImageRepo, SessionRepo};

/// Default age after which a pending marker is considered orphaned.
const DEFAULT_PENDING_MAX_AGE_MINS: i64 = 60;

/// How often the reconciliation job runs.
const RECONCILE_INTERVAL: Duration = Duration::from_secs(900); // 15 minutes

/// Run the reconciliation loop until `cancel` is triggered.
pub async fn run(pool: PgPool, storage: Arc<dyn ObjectStorage>, cancel: CancellationToken) {
    let max_age_mins: i64 = std::env::var("PENDING_IMAGE_MAX_AGE_MINS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PENDING_MAX_AGE_MINS);

    tracing::info!(
        max_age_mins,
        interval_secs = RECONCILE_INTERVAL.as_secs(),
        "Attachment reconciliation job started"
    );

    let mut interval = tokio::time::interval(RECONCILE_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Attachment reconciliation job stopping");
                break;
            }
            _ = interval.tick() => {
                sweep_pending_images(&pool, storage.as_ref(), max_age_mins).await;
                sweep_sessions(&pool).await;
            }
        }
    }
}

/// Delete orphaned pending image markers older than the cutoff.
async fn sweep_pending_images(pool: &PgPool, storage: &dyn ObjectStorage, max_age_mins: i64) {
    let cutoff = Utc::now() - chrono::Duration::minutes(max_age_mins);

    let orphans = match InspectionImageRepo::list_pending_older_than(pool, cutoff).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "Reconciliation: failed to list pending image markers");
            return;
        }
    };

    if orphans.is_empty() {
        tracing::debug!("Reconciliation: no orphaned image markers");
        return;
    }

    let mut removed = 0u64;
    for orphan in orphans {
        // The upload may have reached storage even though the confirm
        // never ran; remove the object too if it exists.
        if let Err(e) = storage.delete(&orphan.storage_key).await {
            tracing::warn!(
                storage_key = %orphan.storage_key,
                error = %e,
                "Reconciliation: failed to delete stored object"
            );
        }

        match InspectionImageRepo::delete(pool, orphan.id).await {
            Ok(true) => removed += 1,
            Ok(false) => {}
            Err(e) => {
                tracing::error!(
                    image_id = orphan.id,
                    error = %e,
                    "Reconciliation: failed to delete image marker"
                );
            }
        }
    }

    tracing::info!(removed, "Reconciliation: purged orphaned image markers");
}

/// Purge expired or revoked refresh sessions.
async fn sweep_sessions(pool: &PgPool) {
    match SessionRepo::cleanup_expired(pool).await {
        Ok(deleted) if deleted > 0 => {
            tracing::info!(deleted, "Reconciliation: purged stale sessions");
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!(error = %e, "Reconciliation: session cleanup failed");
        }
    }
}
