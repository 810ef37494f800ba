use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagewipe", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve paths against a route table.
    Resolve(ResolveArgs),
    /// Print a transition configuration as JSON.
    Config(ConfigArgs),
    /// Simulate navigations frame by frame and write a JSON trace.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Paths or URLs to resolve.
    #[arg(required = true)]
    paths: Vec<String>,

    /// Route table JSON (`[{ "pattern": "/", "content": "index" }, ...]`). Defaults to the
    /// portfolio routes.
    #[arg(long)]
    routes: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Starting URL.
    #[arg(long, default_value = "/")]
    from: String,

    /// Target URL, navigated to at `--at`. Ignored when `--script` is given.
    #[arg(long)]
    to: Option<String>,

    /// Time of the `--to` navigation, in seconds.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Navigation script JSON (`[{ "at_s": 0.0, "navigate": { "kind": "link", "to": "/about" } }]`).
    #[arg(long)]
    script: Option<PathBuf>,

    /// Transition configuration JSON. Defaults to `--preset`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,

    /// Route table JSON. Defaults to the portfolio routes.
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Upper bound on simulated frames.
    #[arg(long, default_value_t = 6000)]
    max_frames: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Default,
    Subtle,
}

impl Preset {
    fn config(self) -> pagewipe::TransitionConfig {
        match self {
            Self::Default => pagewipe::TransitionConfig::default(),
            Self::Subtle => pagewipe::TransitionConfig::subtle(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Config(args) => cmd_config(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "pagewipe=debug",
        _ => "pagewipe=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn load_routes(path: Option<&Path>) -> anyhow::Result<pagewipe::RouteTable> {
    let Some(path) = path else {
        return Ok(pagewipe::RouteTable::portfolio());
    };
    let s = read_text(path, "route table")?;
    pagewipe::RouteTable::from_json_str(&s)
        .with_context(|| format!("load route table '{}'", path.display()))
}

fn load_config(
    path: Option<&Path>,
    preset: Preset,
) -> anyhow::Result<pagewipe::TransitionConfig> {
    let Some(path) = path else {
        return Ok(preset.config());
    };
    let s = read_text(path, "config")?;
    pagewipe::TransitionConfig::from_json_str(&s)
        .with_context(|| format!("load config '{}'", path.display()))
}

fn load_script(path: &Path) -> anyhow::Result<Vec<pagewipe::ScriptStep>> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let steps: Vec<pagewipe::ScriptStep> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse script '{}'", path.display()))?;
    Ok(steps)
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let routes = load_routes(args.routes.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &args.paths {
        let r = routes.resolve(path);
        writeln!(out, "{} -> {} ({})", r.path, r.content(), r.route.pattern)?;
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(&args.preset.config())?;
    println!("{s}");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let routes = load_routes(args.routes.as_deref())?;
    let config = load_config(args.config.as_deref(), args.preset)?;
    let fps = pagewipe::Fps::new(args.fps, 1)?;

    let script = match (&args.script, &args.to) {
        (Some(path), _) => load_script(path)?,
        (None, Some(to)) => vec![pagewipe::ScriptStep {
            at_s: args.at,
            navigate: pagewipe::Navigation::Link(to.clone()),
        }],
        (None, None) => anyhow::bail!("either --to or --script is required"),
    };

    let trace = pagewipe::simulate(config, routes, &args.from, &script, fps, args.max_frames)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create trace '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &trace)
                .with_context(|| format!("write trace '{}'", path.display()))?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &trace)?;
            writeln!(out)?;
        }
    }

    if let Some(last) = trace.last() {
        eprintln!(
            "{} frames, final route {} ({}){}",
            trace.frames.len(),
            last.displayed_path,
            last.content,
            if trace.completed { "" } else { ", not settled" }
        );
    }
    Ok(())
}
