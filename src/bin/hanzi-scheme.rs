use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use hanzi_scheme::{Action, Data, Document, Format, Info, Outcome, SchemeStore};

#[derive(Parser, Debug)]
#[command(name = "hanzi-scheme", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a fresh, empty scheme.
    Init(InitArgs),
    /// Load a scheme and report whether it is well formed.
    Validate(InArgs),
    /// Apply a JSON array of actions to a scheme.
    Apply(ApplyArgs),
    /// Print one section of a scheme.
    Show(ShowArgs),
    /// Print the content fingerprint of a scheme.
    Fingerprint(InArgs),
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Output scheme path (`.json`, `.yaml` or `.yml`).
    #[arg(long)]
    out: PathBuf,

    /// Scheme name.
    #[arg(long, default_value = "")]
    name: String,

    /// Seed `data.classifier` with the standard five stroke classes.
    #[arg(long, default_value_t = false)]
    default_classifier: bool,
}

#[derive(Parser, Debug)]
struct InArgs {
    /// Input scheme path.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input scheme path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// JSON file holding an array of actions.
    #[arg(long)]
    actions: PathBuf,

    /// Output scheme path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Input scheme path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Section to print.
    #[arg(long, value_enum)]
    section: Section,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Section {
    Info,
    Data,
    Form,
    Pronunciation,
    Encoder,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Init(args) => cmd_init(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Apply(args) => cmd_apply(args),
        Command::Show(args) => cmd_show(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load(path: &Path) -> anyhow::Result<Document> {
    Document::from_path(path).with_context(|| format!("load scheme '{}'", path.display()))
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let data = if args.default_classifier {
        Data::with_default_classifier()
    } else {
        Data::default()
    };
    let info = Info {
        name: args.name,
        ..Info::default()
    };
    Document::with_contents(info, data)
        .save(&args.out)
        .with_context(|| format!("write scheme '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: InArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    println!(
        "ok: {} forms, {} characters, {} classifier entries",
        doc.data().form.len(),
        doc.data().repertoire.len(),
        doc.data().classifier.len()
    );
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    // Fail on a bad output path before doing any work.
    Format::from_path(&args.out)?;
    let mut store = SchemeStore::new(load(&args.in_path)?);

    let f = File::open(&args.actions)
        .with_context(|| format!("open actions '{}'", args.actions.display()))?;
    let actions: Vec<Action> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse actions JSON")?;

    let mut skipped = 0usize;
    for action in actions {
        let kind = action.kind();
        match store.dispatch(action) {
            Outcome::Applied => tracing::info!(action = %kind, "applied"),
            Outcome::NoOp => {
                skipped += 1;
                tracing::warn!(action = %kind, "nothing to remove");
            }
        }
    }

    store
        .save(&args.out)
        .with_context(|| format!("write scheme '{}'", args.out.display()))?;
    eprintln!(
        "applied {} action(s), skipped {skipped}; wrote {}",
        store.revision(),
        args.out.display()
    );
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let text = match args.section {
        Section::Info => render(doc.info(), args.format)?,
        Section::Data => render(doc.data(), args.format)?,
        Section::Form => render(doc.form(), args.format)?,
        Section::Pronunciation => render(doc.pronunciation(), args.format)?,
        Section::Encoder => render(doc.encoder(), args.format)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}

fn render<T: serde::Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

fn cmd_fingerprint(args: InArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    println!("{}", doc.fingerprint());
    Ok(())
}

