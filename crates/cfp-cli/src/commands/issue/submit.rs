use cfp_core::responses::SubmitOutcome;
use cfp_core::validate::{SubmissionForm, parse_category};
use cfp_store::local::LocalIssueStore;
use cfp_store::recent::RecentTicketStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubmitArgs;
use crate::context::AppContext;
use crate::output::output;

const ANONYMOUS_NOTE: &str =
    "save this ticket ID: it is the only way to check on an anonymous submission";

pub async fn handle(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let named = args.name.is_some()
        || args.email.is_some()
        || args.phone.is_some()
        || args.admission.is_some();

    let mut form = SubmissionForm {
        title: args.title.clone(),
        description: args.description.clone(),
        category: Some(parse_category(&args.category)?),
        anonymous: !named,
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        admission_number: args.admission.clone(),
    };

    // A logged-in student's profile fills the identity gaps on a named
    // submission and lets the record carry their user id.
    let mut user_id = None;
    if named && cfp_auth::resolve_token().is_some() {
        match ctx.client.profile().await {
            Ok(user) => {
                if form.name.is_none() {
                    form.name = Some(user.username.clone());
                }
                if form.email.is_none() {
                    form.email = Some(user.email.clone());
                }
                user_id = Some(user.user_id);
            }
            Err(error) => tracing::debug!(%error, "profile prefill unavailable"),
        }
    }

    if let Err(errors) = form.validate() {
        let summary = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("invalid submission. {summary}");
    }

    let ticket_id = if args.offline {
        LocalIssueStore::open_default()?.add(&form)?.ticket_id
    } else {
        ctx.client.submit_issue(&form, user_id.as_deref()).await?
    };

    // A ledger write failure must not fail the submission itself.
    if let Err(error) = RecentTicketStore::open_default().and_then(|s| s.record(&ticket_id, &form.title)) {
        tracing::warn!(%error, "failed to record ticket in the local ledger");
    }

    output(
        &SubmitOutcome {
            ticket_id,
            anonymous: form.anonymous,
            note: form.anonymous.then(|| ANONYMOUS_NOTE.to_string()),
        },
        flags.format,
    )
}
