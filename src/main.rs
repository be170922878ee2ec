use anyhow::Result;

fn main() -> Result<()> {
    ui_import_rewriter::run_cli()
}
