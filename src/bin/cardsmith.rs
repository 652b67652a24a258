use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardsmith::{CardConfig, CardRenderer, CardSize, CpuSurface, EffectSet, FontBook, RenderRequest};

#[derive(Parser, Debug)]
#[command(name = "cardsmith", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card as a PNG.
    Render(RenderArgs),
    /// Render a card and export an animated GIF with particle effects.
    Animate(AnimateArgs),
    /// List the template catalog.
    Styles(StylesArgs),
}

#[derive(Args, Debug)]
struct CardArgs {
    /// Template id (unknown ids fall back to `modern`).
    #[arg(long, default_value = "modern")]
    template: String,

    /// Message text; `\n` starts a new line.
    #[arg(long)]
    message: String,

    /// Recipient name for the salutation.
    #[arg(long)]
    recipient: Option<String>,

    /// Occasion tag (birthday, love, thanks, congrats, graduation, holiday).
    #[arg(long)]
    occasion: Option<String>,

    /// Card width in pixels.
    #[arg(long, default_value_t = CardSize::PORTRAIT.width)]
    width: u32,

    /// Card height in pixels.
    #[arg(long, default_value_t = CardSize::PORTRAIT.height)]
    height: u32,

    /// Seed for decorative randomness (overrides config and environment).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip system font discovery and measure text with the estimated advance model.
    #[arg(long)]
    no_system_fonts: bool,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    card: CardArgs,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    card: CardArgs,

    /// Comma-separated effects: sparkles, confetti, 3d, glow.
    #[arg(long, value_delimiter = ',', default_value = "sparkles,confetti")]
    effects: Vec<String>,

    /// Number of frames (overrides config).
    #[arg(long)]
    frames: Option<u32>,

    /// Per-frame delay in milliseconds (overrides config).
    #[arg(long)]
    delay_ms: Option<u32>,
}

#[derive(Args, Debug)]
struct StylesArgs {
    /// Print full descriptors as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Styles(args) => cmd_styles(args),
    }
}

fn load_config(card: &CardArgs) -> anyhow::Result<CardConfig> {
    let mut cfg = match &card.config {
        Some(path) => CardConfig::from_path(path)?,
        None => CardConfig::default(),
    };
    cfg.apply_env();
    if let Some(seed) = card.seed {
        cfg.render.seed = Some(seed);
        cfg.animation.seed = Some(seed);
    }
    Ok(cfg)
}

fn request(card: &CardArgs) -> anyhow::Result<RenderRequest> {
    let size = CardSize::new(card.width, card.height)?;
    let message = card.message.replace("\\n", "\n");
    let mut req = RenderRequest::new(&card.template, message).with_size(size);
    if let Some(r) = &card.recipient {
        req = req.with_recipient(r);
    }
    if let Some(o) = &card.occasion {
        req = req.with_occasion(o);
    }
    Ok(req)
}

fn surface(card: &CardArgs, size: CardSize) -> anyhow::Result<CpuSurface> {
    let fonts = if card.no_system_fonts {
        FontBook::estimated()
    } else {
        FontBook::system()
    };
    Ok(CpuSurface::with_fonts(size, fonts)?)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let card = &args.card;
    let cfg = load_config(card)?;
    cfg.validate()?;
    let req = request(card)?;

    let mut s = surface(card, req.size)?;
    let renderer = CardRenderer::new(cfg.render);
    let (frame, outcome) = renderer.render_frame(&mut s, &req)?;
    let png = cardsmith::encode_png(&frame)?;

    ensure_parent_dir(&card.out)?;
    std::fs::write(&card.out, png)
        .with_context(|| format!("write png '{}'", card.out.display()))?;

    eprintln!(
        "wrote {} ({}, {:.0}px text{})",
        card.out.display(),
        outcome.template,
        outcome.layout.font_size(),
        if outcome.fallback_card { ", fallback card" } else { "" }
    );
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let card = &args.card;
    let mut cfg = load_config(card)?;
    if let Some(n) = args.frames {
        cfg.animation.frame_count = n;
    }
    if let Some(ms) = args.delay_ms {
        cfg.animation.frame_delay_ms = ms;
    }
    cfg.validate()?;
    let req = request(card)?;
    let effects = EffectSet::from_tags(args.effects.iter().map(String::as_str));

    let mut s = surface(card, req.size)?;
    let renderer = CardRenderer::new(cfg.render.clone());
    let (base, _) = renderer.render_frame(&mut s, &req)?;
    let frames = cardsmith::generate_frames(&mut s, &base, effects, &cfg.animation);
    let gif = cardsmith::encode_gif(&frames, cfg.animation.frame_delay_ms, &cfg.gif)?;

    ensure_parent_dir(&card.out)?;
    std::fs::write(&card.out, gif)
        .with_context(|| format!("write gif '{}'", card.out.display()))?;

    eprintln!("wrote {} ({} frames)", card.out.display(), frames.len());
    Ok(())
}

fn cmd_styles(args: StylesArgs) -> anyhow::Result<()> {
    let styles = cardsmith::catalog::styles();
    if args.json {
        let json = serde_json::to_string_pretty(styles).context("serialize styles")?;
        println!("{json}");
        return Ok(());
    }
    for d in styles {
        let kind = serde_json::to_value(d.kind()).context("serialize kind")?;
        let variant = d.background.scene_variant().unwrap_or("-");
        println!("{:<18} {:<18} {variant}", d.id, kind.as_str().unwrap_or("?"));
    }
    Ok(())
}
