use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pasture_sim::{HeadlessBackend, RunSummary, SimEventKind, Simulation, StopReason};

pub struct SimulateArgs<'a> {
    pub sheep: usize,
    pub wolves: usize,
    pub seconds: u64,
    pub seed: Option<u64>,
    pub config: Option<&'a Path>,
    pub media: Option<&'a Path>,
    pub realtime: bool,
    pub json: bool,
    pub verbose: bool,
}

pub fn run(args: &SimulateArgs<'_>) -> Result<(), String> {
    let mut config = super::load_config(args.config)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut backend = HeadlessBackend::new(config.tick_rate);
    if let Some(media) = args.media {
        backend = backend.with_asset_root(media);
    }

    let mut sim = Simulation::new(config, &mut backend)
        .map_err(|e| format!("simulation setup failed: {e}"))?;
    sim.populate(args.sheep, args.wolves);

    if args.realtime {
        backend = backend.realtime();
    }
    tracing::debug!(
        sprites = backend.sprites_loaded(),
        realtime = args.realtime,
        "headless backend ready"
    );
    let summary = sim.run(&mut backend, Duration::from_secs(args.seconds));

    if args.json {
        let value = if args.verbose {
            serde_json::json!({ "summary": summary, "events": sim.events().events() })
        } else {
            serde_json::json!(summary)
        };
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| format!("failed to serialize summary: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    print_header(args, &sim, &summary);
    if args.verbose {
        print_events(&sim);
    }
    print_totals(&summary);
    Ok(())
}

fn print_header(args: &SimulateArgs<'_>, sim: &Simulation, summary: &RunSummary) {
    let seed = sim
        .config()
        .seed
        .map_or_else(|| "random".to_string(), |s| s.to_string());
    println!(
        "  {} {}",
        "Pasture".bold(),
        format!(
            "({} sheep, {} wolves, {}s, seed={seed})",
            args.sheep, args.wolves, args.seconds
        )
        .dimmed()
    );
    let stop = match summary.stopped_by {
        StopReason::Elapsed => "time elapsed",
        StopReason::Quit => "quit",
    };
    println!(
        "  {} ticks in {:.2}s, stopped: {stop}",
        summary.ticks, summary.elapsed_secs
    );
    println!();
}

fn print_events(sim: &Simulation) {
    println!("  {}", "Event Log".bold().underline());
    println!();
    for event in sim.events().events() {
        let tick_label = format!("[tick {:>5}]", event.tick).dimmed();
        let desc = colorize_event(&event.kind, &event.description);
        println!("  {tick_label} {desc}");
    }
    if sim.events().is_empty() {
        println!("  {}", "(no events)".dimmed());
    }
    println!();
}

fn print_totals(summary: &RunSummary) {
    println!("  {}", "Totals".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Measure", "Value"]);
    let rows: [(&str, String); 9] = [
        ("Sheep (final)", summary.final_sheep.to_string()),
        ("Sheep (peak)", summary.peak_sheep.to_string()),
        ("Wolves (final)", summary.final_wolves.to_string()),
        ("Births", summary.births.to_string()),
        ("Matings", summary.matings.to_string()),
        ("Deaths", summary.deaths.to_string()),
        ("Kills", summary.kills.to_string()),
        ("Starvations", summary.starvations.to_string()),
        ("Ticks", summary.ticks.to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    println!("{table}");
    println!();

    if summary.final_sheep == 0 {
        println!("  {}", "The flock is gone.".red().bold());
    } else if summary.final_wolves == 0 && summary.starvations > 0 {
        println!("  {}", "Every wolf starved.".green().bold());
    }
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::Killed { .. } => description.red().bold(),
        SimEventKind::Starved { .. } => description.yellow(),
        SimEventKind::Mated { .. } => description.cyan(),
        SimEventKind::Born { .. } => description.green(),
    }
}
