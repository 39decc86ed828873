use anyhow::Context;
use cfp_config::PortalConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SitemapArgs;
use crate::output::output;

#[derive(Serialize)]
struct SitemapWritten {
    path: String,
    routes: usize,
    base_url: String,
}

/// Handle `cfp sitemap`. With `--out` the XML goes to a file and a small
/// confirmation is printed; otherwise the XML itself goes to stdout.
pub fn handle(
    args: &SitemapArgs,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.sitemap.base_url.clone());
    let xml = cfp_sitemap::render(&base_url);

    match &args.out {
        Some(path) => {
            std::fs::write(path, &xml)
                .with_context(|| format!("failed to write sitemap to {path}"))?;
            output(
                &SitemapWritten {
                    path: path.clone(),
                    routes: cfp_sitemap::routes().len(),
                    base_url,
                },
                flags.format,
            )
        }
        None => {
            println!("{xml}");
            Ok(())
        }
    }
}
