use std::str::FromStr;

use cfp_core::entities::Issue;
use cfp_core::enums::{Category, IssueStatus};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::issue::SortOrder;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    status: Option<&str>,
    category: Option<&str>,
    search: Option<&str>,
    sort: SortOrder,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    shared::require_admin(ctx).await?;

    let status = status.map(IssueStatus::from_str).transpose()?;
    let category = category.map(Category::from_str).transpose()?;

    let mut issues = ctx.client.all_issues().await?;
    filter_and_sort(&mut issues, status, category, search, sort);

    let limit = shared::effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    issues.truncate(limit as usize);

    output(&issues, flags.format)
}

/// The admin dashboard's filter bar, applied client-side: status and
/// category are exact matches, search is a substring scan, and ordering
/// is by submission time.
fn filter_and_sort(
    issues: &mut Vec<Issue>,
    status: Option<IssueStatus>,
    category: Option<Category>,
    search: Option<&str>,
    sort: SortOrder,
) {
    issues.retain(|issue| {
        status.is_none_or(|s| issue.status == s)
            && category.is_none_or(|c| issue.category == c)
            && search.is_none_or(|q| issue.matches_query(q))
    });

    match sort {
        SortOrder::Newest => issues.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at)),
        SortOrder::Oldest => issues.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use cfp_core::enums::SubmissionType;
    use pretty_assertions::assert_eq;

    use super::*;

    fn issue(ticket: &str, status: IssueStatus, category: Category, day: u32) -> Issue {
        Issue {
            issue_id: format!("iss-{ticket}"),
            ticket_id: ticket.into(),
            title: format!("Issue {ticket}"),
            description: "details".into(),
            category,
            status,
            submitted_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).single().unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).single().unwrap(),
            submission_type: SubmissionType::Anonymous,
            user_id: None,
            name: None,
            email: None,
            contact_number: None,
            admission_number: None,
            responses: Vec::new(),
        }
    }

    fn fixture() -> Vec<Issue> {
        vec![
            issue("AAA11111", IssueStatus::Pending, Category::Facilities, 1),
            issue("BBB22222", IssueStatus::Resolved, Category::Cafeteria, 3),
            issue("CCC33333", IssueStatus::Pending, Category::Cafeteria, 2),
        ]
    }

    fn tickets(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.ticket_id.as_str()).collect()
    }

    #[test]
    fn newest_first_is_the_default_ordering() {
        let mut issues = fixture();
        filter_and_sort(&mut issues, None, None, None, SortOrder::Newest);
        assert_eq!(tickets(&issues), vec!["BBB22222", "CCC33333", "AAA11111"]);
    }

    #[test]
    fn oldest_first_reverses_the_ordering() {
        let mut issues = fixture();
        filter_and_sort(&mut issues, None, None, None, SortOrder::Oldest);
        assert_eq!(tickets(&issues), vec!["AAA11111", "CCC33333", "BBB22222"]);
    }

    #[test]
    fn status_and_category_filters_combine() {
        let mut issues = fixture();
        filter_and_sort(
            &mut issues,
            Some(IssueStatus::Pending),
            Some(Category::Cafeteria),
            None,
            SortOrder::Newest,
        );
        assert_eq!(tickets(&issues), vec!["CCC33333"]);
    }

    #[test]
    fn search_matches_ticket_ids_case_insensitively() {
        let mut issues = fixture();
        filter_and_sort(&mut issues, None, None, Some("bbb2"), SortOrder::Newest);
        assert_eq!(tickets(&issues), vec!["BBB22222"]);
    }

    #[test]
    fn no_filters_keeps_everything() {
        let mut issues = fixture();
        filter_and_sort(&mut issues, None, None, None, SortOrder::Newest);
        assert_eq!(issues.len(), 3);
    }
}
