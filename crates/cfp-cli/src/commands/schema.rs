use anyhow::bail;
use cfp_core::entities::{Issue, IssueResponse, User};
use schemars::schema_for;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `cfp schema`: print the JSON Schema for the wire entities.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let value = match args.entity.as_deref() {
        Some("issue") => serde_json::to_value(schema_for!(Issue))?,
        Some("response") => serde_json::to_value(schema_for!(IssueResponse))?,
        Some("user") => serde_json::to_value(schema_for!(User))?,
        Some(other) => bail!("unknown entity {other:?}; expected issue, response, or user"),
        None => json!({
            "issue": schema_for!(Issue),
            "response": schema_for!(IssueResponse),
            "user": schema_for!(User),
        }),
    };

    output(&value, flags.format)
}
