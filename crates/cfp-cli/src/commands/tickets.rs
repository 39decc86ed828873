use cfp_store::recent::RecentTicketStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketsCommands;
use crate::output::output;

#[derive(Serialize)]
struct ClearResponse {
    cleared: usize,
}

/// Handle `cfp tickets <subcommand>`. Purely local, no network or auth.
pub fn handle(action: &TicketsCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = RecentTicketStore::open_default()?;
    match action {
        TicketsCommands::List => output(&store.list()?, flags.format),
        TicketsCommands::Clear => {
            let cleared = store.list()?.len();
            store.clear()?;
            output(&ClearResponse { cleared }, flags.format)
        }
    }
}
