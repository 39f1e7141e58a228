use std::time::Instant;

use chrono::NaiveDate;

use crate::cli::{Cli, Commands, OutputFormat, parse_command};
use crate::consts::DATE_FORMAT;
use crate::core::{DateWindow, build_table, compute_window, split_by_month};
use crate::error::AppError;
use crate::output::{
    AlbumTableOptions, output_album_csv, output_album_html, output_album_json,
    output_window_json, render_album_table, render_window_table, summary_line,
};
use crate::source::select_source;
use crate::utils::{Timezone, parse_date, parse_debug_enabled};

/// Write rendered output to `--output` or stdout
fn emit(rendered: &str, cli: &Cli) -> Result<(), AppError> {
    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| AppError::Io {
                path: path.display().to_string(),
                source,
            })?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn reference_date(cli: &Cli) -> Result<NaiveDate, AppError> {
    match cli.date.as_deref() {
        Some(raw) => parse_date(raw),
        None => Ok(Timezone::parse(cli.timezone.as_deref())?.today()),
    }
}

fn handle_window(window: &DateWindow, cli: &Cli) -> Result<(), AppError> {
    let groups = split_by_month(window);
    let rendered = match cli.output_format() {
        OutputFormat::Json => output_window_json(window, &groups)?,
        _ => render_window_table(window, &groups, cli.use_color()),
    };
    emit(&rendered, cli)
}

fn handle_albums(window: &DateWindow, cli: &Cli) -> Result<(), AppError> {
    let start = Instant::now();
    let source = select_source(cli.source_dir.clone(), cli.url_template.as_deref())?;

    if !cli.is_quiet()
        && let (Some(first), Some(last)) = (window.start(), window.end())
    {
        eprintln!("Collecting releases {} - {}...", first.marker, last.marker);
    }

    let albums = build_table(window, source.as_ref(), cli.on_malformed)?;

    let rendered = match cli.output_format() {
        OutputFormat::Table => {
            let use_color = cli.use_color();
            let mut out = render_album_table(
                &albums,
                window,
                AlbumTableOptions {
                    order: cli.order,
                    use_color,
                },
            );
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            out.push_str(&summary_line(&albums, elapsed_ms, use_color));
            out
        }
        OutputFormat::Json => output_album_json(&albums, cli.order)?,
        OutputFormat::Csv => output_album_csv(&albums, cli.order),
        OutputFormat::Html => output_album_html(&albums),
    };
    emit(&rendered, cli)
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let reference = reference_date(cli)?;
    let window = compute_window(reference, cli.monday);
    if parse_debug_enabled() {
        eprintln!(
            "[DEBUG] reference {} ({:?} policy), window ends {}",
            reference.format(DATE_FORMAT),
            cli.monday,
            window
                .end()
                .map(|e| e.date.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        );
    }

    match parse_command(cli.command) {
        Commands::Albums => handle_albums(&window, cli),
        Commands::Window => handle_window(&window, cli),
    }
}
