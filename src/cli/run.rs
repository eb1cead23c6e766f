//! Subcommand implementations for the CLI.

use super::{Cli, Commands, LayoutArgs, SourceArgs, TargetArgs};
use crate::commands::Command;
use crate::config::{CollapsedGroups, Settings};
use crate::layout::{RowPlan, plan_rows, row_drop_to_full_position};
use crate::reorder::{NoOpReason, Resolution, resolve_group_move, resolve_single_move};
use crate::tab::{Snapshot, Tab, TabManager};
use crate::tab_bar::TabBar;
use crate::traits::{CommandSink, TabSource};
use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;

/// Tabs in a generated window when neither `--snapshot` nor `--tabs` is given
const DEFAULT_DEMO_TABS: u32 = 10;

/// Run a parsed command line, writing results to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    crate::debug_info!("CLI", "Running {:?}", cli.command);
    match &cli.command {
        Commands::Plan {
            source,
            layout,
            search,
            state,
        } => {
            let mut window = load_window(source)?;
            if let Some(path) = state {
                let store = CollapsedGroups::load_from(path)?;
                window = window.with_collapsed_state(store);
            }
            let settings = load_settings(layout)?;
            let mut bar = TabBar::new(settings);
            bar.apply_snapshot(window.snapshot());
            if let Some(text) = search {
                bar.set_search(text);
            }
            print_plan(&bar, out)
        }
        Commands::Move {
            source,
            layout,
            tab,
            target,
            apply,
        } => {
            let mut window = load_window(source)?;
            let settings = load_settings(layout)?;
            let full = window.snapshot().full_order();
            let desired = desired_position(target, &full, &settings)?;
            let command = match resolve_single_move(*tab, desired, &full) {
                Resolution::Move(m) => Command::from(m),
                Resolution::NoOp(reason) => return print_noop(reason, out),
            };
            emit(command, &mut window, *apply, out)
        }
        Commands::MoveGroup {
            source,
            layout,
            group,
            target,
            apply,
        } => {
            let mut window = load_window(source)?;
            let settings = load_settings(layout)?;
            let full = window.snapshot().full_order();
            let members: Vec<u32> = full
                .iter()
                .filter(|t| t.group_id == *group)
                .map(|t| t.id)
                .collect();
            if members.is_empty() {
                bail!("group {} has no tabs", group);
            }
            let desired = desired_position(target, &full, &settings)?;
            let command = match resolve_group_move(&members, desired, &full) {
                Resolution::Move(m) => Command::from(m),
                Resolution::NoOp(reason) => return print_noop(reason, out),
            };
            emit(command, &mut window, *apply, out)
        }
    }
}

fn load_window(source: &SourceArgs) -> Result<TabManager> {
    if let Some(path) = &source.snapshot {
        return load_snapshot(path).map(TabManager::from_snapshot);
    }
    let count = source.tabs.unwrap_or(DEFAULT_DEMO_TABS);
    demo_window(count)
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    log::info!(
        "Loaded snapshot from {:?}: {} tabs, {} groups",
        path,
        snapshot.tabs.len(),
        snapshot.groups.len()
    );
    Ok(snapshot)
}

/// A window of `count` plain tabs, the first one active
pub(crate) fn demo_window(count: u32) -> Result<TabManager> {
    let mut window = TabManager::new(1);
    for n in 1..=count {
        window.push_tab(format!("Tab {n}"), format!("https://example.com/{n}"));
    }
    if count > 0 {
        window.activate(1)?;
    }
    Ok(window)
}

fn load_settings(layout: &LayoutArgs) -> Result<Settings> {
    let mut settings = match &layout.settings {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    };
    if let Some(rows) = layout.rows {
        settings.row_count = rows;
    }
    if let Some(per_row) = layout.per_row {
        settings.tabs_per_row = per_row;
    }
    Ok(settings.normalized())
}

fn desired_position(target: &TargetArgs, full: &[Tab], settings: &Settings) -> Result<usize> {
    match (target.to, target.row) {
        (Some(pos), _) => Ok(pos),
        (None, Some(row)) => {
            let plan = plan_rows(full, settings.row_count, settings.tabs_per_row);
            row_drop_to_full_position(row, &plan)
                .with_context(|| format!("row {} does not exist ({} rows)", row, plan.row_count()))
        }
        (None, None) => bail!("either --to or --row is required"),
    }
}

fn emit(
    command: Command,
    window: &mut TabManager,
    apply: bool,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{command}")?;
    if apply {
        window.send(command)?;
        writeln!(out, "order: {}", format_tabs(window.tabs()))?;
    }
    Ok(())
}

fn print_noop(reason: NoOpReason, out: &mut impl Write) -> Result<()> {
    let why = match reason {
        NoOpReason::InvalidSource => "source not found",
        NoOpReason::SamePosition => "same position",
    };
    writeln!(out, "no-op: {why}")?;
    Ok(())
}

fn format_tabs<'a>(tabs: impl IntoIterator<Item = &'a Tab>) -> String {
    tabs.into_iter()
        .map(|t| {
            if t.pinned {
                format!("{}*", t.id)
            } else {
                t.id.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_rows(plan: &RowPlan<'_, Tab>, out: &mut impl Write) -> Result<()> {
    for (i, row) in plan.rows.iter().enumerate() {
        writeln!(out, "  row {i}: {}", format_tabs(row.iter()))?;
    }
    Ok(())
}

fn print_plan(bar: &TabBar, out: &mut impl Write) -> Result<()> {
    let settings = bar.settings();
    let layout = bar.layout();
    writeln!(
        out,
        "full ({} rows x {}):",
        settings.row_count, settings.tabs_per_row
    )?;
    print_rows(&layout.full, out)?;

    if bar.search().is_empty() {
        writeln!(out, "visible:")?;
    } else {
        writeln!(out, "visible (search \"{}\"):", bar.search())?;
    }
    if layout.empty {
        writeln!(out, "  (no matching tabs)")?;
        return Ok(());
    }
    print_rows(&layout.visible, out)?;

    if settings.show_groups {
        writeln!(out, "groups:")?;
        for (i, runs) in layout.row_runs.iter().enumerate() {
            let parts: Vec<String> = runs
                .iter()
                .map(|run| {
                    let marker = if run.collapsed && !run.is_ungrouped() {
                        " (collapsed)"
                    } else {
                        ""
                    };
                    let tabs = format_tabs(run.visible_tabs());
                    format!("[{}{}: {}]", run.title, marker, tabs)
                })
                .collect();
            writeln!(out, "  row {i}: {}", parts.join(" "))?;
        }
    }
    Ok(())
}
