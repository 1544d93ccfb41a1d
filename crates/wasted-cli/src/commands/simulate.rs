use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use tracing::debug;
use wasted_core::config::StoreConfig;
use wasted_core::geometry::{Vec2, ViewportSize};
use wasted_core::modal::{ModalKey, ProductModal};
use wasted_core::scroll_lock::PageScroll;
use wasted_core::viewport::{PointerId, PointerResponse};

#[derive(Args)]
pub struct SimulateArgs {
    /// Product id to open
    pub id: u32,

    /// Event script, one event per line ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub script: PathBuf,

    /// Width of the image pane in pixels
    #[arg(long, default_value = "400")]
    pub width: f64,

    /// Height of the image pane in pixels
    #[arg(long, default_value = "400")]
    pub height: f64,
}

/// One scripted input event.
#[derive(Debug, PartialEq)]
enum Event {
    Resize(ViewportSize),
    ZoomIn,
    ZoomOut,
    Reset,
    DoubleClick,
    Wheel(f64),
    Down(PointerId, Vec2),
    Move(PointerId, Vec2),
    Up(PointerId),
    Cancel(PointerId),
    Select(String),
    Next,
    Prev,
    Key(ModalKey),
    Close,
    Wait(Duration),
}

impl FromStr for Event {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| anyhow!("empty event"))?;
        let args: Vec<&str> = parts.collect();

        let num = |i: usize| -> Result<f64> {
            let raw = args
                .get(i)
                .ok_or_else(|| anyhow!("'{name}' expects at least {} argument(s)", i + 1))?;
            raw.parse::<f64>()
                .with_context(|| format!("'{raw}' is not a number"))
        };
        let pointer = |i: usize| -> Result<PointerId> { Ok(PointerId(num(i)? as u64)) };

        let event = match name {
            "resize" => Event::Resize(ViewportSize::new(num(0)?, num(1)?)),
            "zoom-in" => Event::ZoomIn,
            "zoom-out" => Event::ZoomOut,
            "reset" => Event::Reset,
            "dblclick" => Event::DoubleClick,
            "wheel" => Event::Wheel(num(0)?),
            "down" => Event::Down(pointer(0)?, Vec2::new(num(1)?, num(2)?)),
            "move" => Event::Move(pointer(0)?, Vec2::new(num(1)?, num(2)?)),
            "up" => Event::Up(pointer(0)?),
            "cancel" => Event::Cancel(pointer(0)?),
            "select" => Event::Select(
                args.first()
                    .ok_or_else(|| anyhow!("'select' expects an image reference"))?
                    .to_string(),
            ),
            "next" => Event::Next,
            "prev" => Event::Prev,
            "key" => Event::Key(match args.first().copied() {
                Some("escape") => ModalKey::Escape,
                Some("left") => ModalKey::ArrowLeft,
                Some("right") => ModalKey::ArrowRight,
                Some(_) => ModalKey::Other,
                None => bail!("'key' expects escape, left or right"),
            }),
            "close" => Event::Close,
            "wait" => Event::Wait(Duration::from_millis(num(0)? as u64)),
            other => bail!("unknown event '{other}'"),
        };
        Ok(event)
    }
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))
    }
}

pub fn run(args: &SimulateArgs, config: &StoreConfig) -> Result<()> {
    let catalog = config.catalog()?;
    let product = catalog.get(args.id)?;
    let script = read_script(&args.script)?;

    let page = PageScroll::default();
    let mut modal = ProductModal::open(product, &page);
    let mut size = ViewportSize::new(args.width, args.height);
    modal.viewport_mut().resize(size);

    // Virtual clock: only `wait` advances time.
    let start = Instant::now();
    let mut now = start;

    println!("Opened {} ({})", product.name, modal.viewport().selected_image());

    for (line_no, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: Event = line
            .parse()
            .with_context(|| format!("line {}: '{line}'", line_no + 1))?;
        debug!(?event, "Replaying event");

        let note = apply(&mut modal, &event, &mut size, &mut now);

        let vp = modal.viewport();
        let t = vp.transform();
        println!(
            "{:>4}  {:<22} scale={:.2} offset=({:.1}, {:.1}) image={}{}{}",
            line_no + 1,
            line,
            t.scale,
            t.offset.x,
            t.offset.y,
            vp.selected_image(),
            if vp.is_dragging() { " dragging" } else { "" },
            note.map(|n| format!(" [{n}]")).unwrap_or_default(),
        );

        if modal.poll(now) {
            println!(
                "Closed after {} ms; page scroll {}",
                now.duration_since(start).as_millis(),
                page.overflow()
            );
            return Ok(());
        }
    }

    Ok(())
}

fn apply(
    modal: &mut ProductModal,
    event: &Event,
    size: &mut ViewportSize,
    now: &mut Instant,
) -> Option<String> {
    let capture_note = |r: PointerResponse| match r {
        PointerResponse::Capture(p) => Some(format!("capture {}", p.0)),
        PointerResponse::Release(p) => Some(format!("release {}", p.0)),
        PointerResponse::Ignored => Some("ignored".to_string()),
        PointerResponse::Panned => None,
    };

    let vp = modal.viewport_mut();
    match event {
        Event::Resize(s) => {
            *size = *s;
            vp.resize(*s);
            None
        }
        Event::ZoomIn => {
            vp.zoom_in();
            None
        }
        Event::ZoomOut => {
            vp.zoom_out();
            None
        }
        Event::Reset => {
            vp.reset_zoom();
            None
        }
        Event::DoubleClick => {
            vp.toggle_zoom();
            None
        }
        Event::Wheel(dy) => {
            vp.wheel(*dy);
            None
        }
        Event::Down(p, pos) => capture_note(vp.pointer_down(*p, *pos)),
        Event::Move(p, pos) => capture_note(vp.pointer_move(*p, *pos, *size)),
        Event::Up(p) => capture_note(vp.pointer_up(*p)),
        Event::Cancel(p) => capture_note(vp.pointer_cancel(*p)),
        Event::Select(image) => {
            vp.select_image(image.clone());
            None
        }
        Event::Next => vp.next_variant().is_none().then(|| "no variants".to_string()),
        Event::Prev => vp.prev_variant().is_none().then(|| "no variants".to_string()),
        Event::Key(key) => Some(format!("{:?}", modal.handle_key(*key, *now))),
        Event::Close => Some(if modal.request_close(*now) {
            "close scheduled".to_string()
        } else {
            "already closing".to_string()
        }),
        Event::Wait(d) => {
            *now += *d;
            None
        }
    }
}
