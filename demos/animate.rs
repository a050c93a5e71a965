//! Plays noise fields in the terminal, regenerating a complete fresh field
//! every frame.
//!
//! Usage: `animate [seed]`. `q` or Esc quits.

use std::{
    env,
    io::{self, Write},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use perlin_field::{FieldConfig, LatticeExtent, Normalization, NoiseField, generate_field};
use rand::{SeedableRng, rngs::StdRng};

const CELL_RESOLUTION: u32 = 8;
const FRAME: Duration = Duration::from_millis(150);

fn main() -> Result<()> {
    let seed = match env::args().nth(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("seed {raw:?} is not a u64"))?,
        None => rand::random(),
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide)?;
    terminal::enable_raw_mode()?;
    let result = run(&mut out, &mut rng);
    terminal::disable_raw_mode()?;
    execute!(out, ResetColor, cursor::Show, LeaveAlternateScreen)?;
    result
}

fn run(out: &mut io::Stdout, rng: &mut StdRng) -> Result<()> {
    let mut size = terminal::size()?;
    loop {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
                Event::Resize(columns, rows) => size = (columns, rows),
                _ => {}
            }
        }

        let frame_started = Instant::now();
        let field = next_frame(size, rng);
        draw(out, &field)?;
        if let Some(remaining) = FRAME.checked_sub(frame_started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}

/// Sizes a square field to the terminal and generates it fresh.
///
/// Every frame stands alone: new gradients are drawn from the continuing
/// source, so consecutive frames share no structure.
fn next_frame(size: (u16, u16), rng: &mut StdRng) -> NoiseField {
    let (columns, rows) = size;
    let side = u32::from(columns).min(u32::from(rows) * 2);
    let config = FieldConfig {
        domain_size: (side / CELL_RESOLUTION).max(1),
        cell_resolution: CELL_RESOLUTION,
        extent: LatticeExtent::Inclusive,
        normalization: Normalization::MinMax,
    };
    generate_field(&config, rng)
}

/// Draws the field with half blocks, packing two pixel rows into each
/// terminal row.
fn draw(out: &mut io::Stdout, field: &NoiseField) -> Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    for row in 0..field.height() / 2 {
        queue!(out, cursor::MoveTo(0, row as u16))?;
        for x in 0..field.width() {
            let top = level(field.get(x, row * 2));
            let bottom = level(field.get(x, row * 2 + 1));
            queue!(
                out,
                SetForegroundColor(Color::Rgb {
                    r: top,
                    g: top,
                    b: top
                }),
                SetBackgroundColor(Color::Rgb {
                    r: bottom,
                    g: bottom,
                    b: bottom
                }),
                Print('▀'),
            )?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

fn level(value: f32) -> u8 {
    (value * 255.0) as u8
}
