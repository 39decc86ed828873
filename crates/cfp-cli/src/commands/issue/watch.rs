use std::collections::BTreeMap;
use std::time::Duration;

use cfp_core::entities::Issue;
use cfp_core::enums::IssueStatus;
use cfp_core::responses::{StatusChange, WatchDelta};
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;

/// One observed issue, keyed by `issue_id` in a snapshot.
type Snapshot = BTreeMap<String, (String, IssueStatus)>;

pub async fn handle(
    interval: Option<u64>,
    cycles: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    shared::require_admin(ctx).await?;

    let secs = interval
        .unwrap_or(ctx.config.general.poll_interval_secs)
        .max(1);
    let mut ticker = tokio::time::interval(Duration::from_secs(secs));
    // interval's first tick fires immediately; consume it so the baseline
    // poll and the first delta poll are a full interval apart.
    ticker.tick().await;

    let mut baseline = snapshot(&ctx.client.all_issues().await?);
    tracing::info!(total = baseline.len(), interval_secs = secs, "watching issue listing");

    let mut remaining = cycles;
    loop {
        if remaining == Some(0) {
            break;
        }
        ticker.tick().await;

        let issues = ctx.client.all_issues().await?;
        let current = snapshot(&issues);
        output(&diff(&baseline, &current), flags.format)?;
        baseline = current;

        if let Some(n) = remaining.as_mut() {
            *n -= 1;
        }
    }

    Ok(())
}

fn snapshot(issues: &[Issue]) -> Snapshot {
    issues
        .iter()
        .map(|issue| {
            (
                issue.issue_id.clone(),
                (issue.ticket_id.clone(), issue.status),
            )
        })
        .collect()
}

/// Compare two polls: issues appearing since the last poll and status
/// transitions on issues seen in both. Deletions are ignored.
fn diff(before: &Snapshot, after: &Snapshot) -> WatchDelta {
    let new_issues = after
        .iter()
        .filter(|(id, _)| !before.contains_key(*id))
        .map(|(_, (ticket_id, _))| ticket_id.clone())
        .collect();

    let status_changes = after
        .iter()
        .filter_map(|(id, (ticket_id, status))| {
            let (_, old_status) = before.get(id)?;
            (old_status != status).then(|| StatusChange {
                ticket_id: ticket_id.clone(),
                from: *old_status,
                to: *status,
            })
        })
        .collect();

    WatchDelta {
        at: Utc::now().to_rfc3339(),
        total: after.len(),
        new_issues,
        status_changes,
    }
}
