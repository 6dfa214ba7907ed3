use clap::Parser;
use movie_browser::{cli, config, error, preview};
use movie_browser_common::Catalog;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Rows { catalog, width, collection } => {
            let path = config.resolve_catalog(catalog)?;
            let width = width.unwrap_or(config.width);
            if cli.verbose {
                println!("カタログ: {} / 幅: {}px", path.display(), width);
            }

            let catalog = Catalog::load(&path)?;
            let rows = preview::preview_rows(&catalog, width, &config.browse, collection.as_deref())?;
            preview::print_rows(&rows, cli.verbose);
        }

        Commands::Search { catalog, keywords, width } => {
            let path = config.resolve_catalog(catalog)?;
            let width = width.unwrap_or(config.width);
            if cli.verbose {
                println!("カタログ: {} / 幅: {}px / キーワード: {}", path.display(), width, keywords);
            }

            let catalog = Catalog::load(&path)?;
            let result = preview::preview_search(&catalog, &keywords, width, &config.browse);
            preview::print_search(&result, cli.verbose);
        }

        Commands::Config { set_catalog, set_width, show } => {
            let mut changed = false;
            if let Some(path) = set_catalog {
                config.catalog = Some(path);
                changed = true;
            }
            if let Some(width) = set_width {
                config.width = width;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定ファイル: {}", Config::config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
