mod cli;
mod output;

use anyhow::{Context, Result};
use capsift::{CaptureResult, Review};
use tracing_subscriber::EnvFilter;

use cli::{parse_cli, CliArgs};
use output::{render_table, RenderOptions};

fn main() -> Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    let result = CaptureResult::from_path(&cli.file)
        .with_context(|| format!("could not load capture result {}", cli.file.display()))?;

    let review = prepare_review(result, &cli);
    let opts = RenderOptions {
        format: cli.format,
        color:  cli.color,
    };

    print!("{}", render_table(&review, cli.table, &opts)?);
    Ok(())
}

/// Open the requested table, apply the query, then replay the header clicks.
fn prepare_review(result: CaptureResult, cli: &CliArgs) -> Review {
    let mut review = Review::new(result);

    for column in &cli.sort {
        if !cli.table.columns().contains(&column.as_str()) {
            tracing::warn!(table = %cli.table, %column, "sorting by a column the table does not show");
        }
    }

    review.update(cli.table, |state| {
        cli.sort
            .iter()
            .fold(state.toggled().with_query(cli.query.as_str()), |state, column| {
                state.sorted_by(column)
            })
    });

    review
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
