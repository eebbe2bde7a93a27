//! Terminal rendering — four mutually exclusive visualizations.
//!
//! ┌──────────────────────────────────────────────┐
//! │  bytescope   watching: lcg   bits   #42      │
//! ├──────────────────────────────────────────────┤
//! │  ▓▒░█▒▓░░█▓▒░ ... (bit grid / histogram /    │
//! │                    scatter / color grid)     │
//! ├──────────────────────────────────────────────┤
//! │  mean 127.43  σ 73.90  H 7.98  n 100000      │
//! ├──────────────────────────────────────────────┤
//! │  q: quit  m: mode  s: source  r: reset       │
//! └──────────────────────────────────────────────┘
//!
//! Every frame redraws the full surface from scratch. Which data a mode
//! plots (fresh frame vs accumulated window) is decided by
//! `bytescope_core::render::plot_input`, not here.

use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::{prelude::*, widgets::*};

use bytescope_core::render::{RenderMode, plot_input};

use super::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(8),    // visualization
            Constraint::Length(3), // statistics
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0], app);
    draw_visualization(f, rows[1], app);
    draw_stats(f, rows[2], app);
    draw_keys(f, rows[3]);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let tick = app.ticks();
    let ms = app.last_tick_ms();
    let pause = if app.paused() { "  ⏸ paused" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(" bytescope ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("  watching: "),
            Span::styled(app.source(), Style::default().bold().fg(Color::Yellow)),
            Span::raw("  mode: "),
            Span::styled(app.mode().to_string(), Style::default().bold().fg(Color::Green)),
            Span::styled(
                format!("  #{tick}  {ms}ms{pause} "),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

    f.render_widget(block, area);
}

fn draw_visualization(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.mode()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let data = plot_input(app.mode(), app.frame(), app.window());
    if data.is_empty() {
        let msg = match app.last_error() {
            Some(e) => format!("no data — {e}"),
            None => "waiting for first frame…".to_string(),
        };
        f.render_widget(
            Paragraph::new(msg).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    match app.mode() {
        RenderMode::Bits => draw_bits(f, inner, &data),
        RenderMode::Distribution => draw_distribution(f, inner, &data),
        RenderMode::Scatter => draw_scatter(f, inner, &data),
        RenderMode::Color => draw_color_grid(f, inner, &data),
    }
}

/// One cell per bit, MSB first, hue sweeping with stream position.
fn draw_bits(f: &mut Frame, area: Rect, data: &[u8]) {
    let buf = f.buffer_mut();
    let cols = area.width as usize;
    let total_bits = data.len() * 8;

    for row in 0..area.height as usize {
        for col in 0..cols {
            let bit_index = row * cols + col;
            if bit_index >= total_bits {
                return;
            }
            let byte = data[bit_index / 8];
            let bit = (byte >> (7 - bit_index % 8)) & 1;

            let hue = (bit_index / 8) as f64 / data.len() as f64 * 360.0;
            let lightness = if bit == 1 { 0.70 } else { 0.15 };
            let color = hsl_color(hue, 0.70, lightness);

            let x = area.left() + col as u16;
            let y = area.top() + row as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('█');
                cell.set_fg(color);
            }
        }
    }
}

/// 256-bin histogram squeezed into the available width.
fn draw_distribution(f: &mut Frame, area: Rect, data: &[u8]) {
    let mut hist = [0u64; 256];
    for &b in data {
        hist[b as usize] += 1;
    }
    let buckets = bucket_counts(&hist, area.width as usize);

    let sparkline = Sparkline::default()
        .data(&buckets)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(sparkline, area);
}

/// Consecutive byte pairs as (x, y) points on a 256×256 plane.
fn draw_scatter(f: &mut Frame, area: Rect, data: &[u8]) {
    let points: Vec<(f64, f64)> = data
        .chunks(2)
        .filter(|c| c.len() == 2)
        .map(|c| (c[0] as f64, c[1] as f64))
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 256.0])
        .y_bounds([0.0, 256.0])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &points,
                color: Color::Cyan,
            });
        });
    f.render_widget(canvas, area);
}

/// One colored cell per byte, row-major.
fn draw_color_grid(f: &mut Frame, area: Rect, data: &[u8]) {
    let buf = f.buffer_mut();
    let cols = area.width as usize;

    for row in 0..area.height as usize {
        for col in 0..cols {
            let idx = row * cols + col;
            if idx >= data.len() {
                return;
            }
            let byte = data[idx];
            let hue = byte as f64 / 255.0 * 360.0;
            let saturation = 0.60 + (byte % 40) as f64 / 100.0;
            let lightness = 0.40 + (byte % 30) as f64 / 100.0;
            let color = hsl_color(hue, saturation, lightness);

            let x = area.left() + col as u16;
            let y = area.top() + row as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('█');
                cell.set_fg(color);
            }
        }
    }
}

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();
    let entropy_style = if stats.entropy >= 7.5 {
        Style::default().fg(Color::Green)
    } else if stats.entropy >= 5.0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Red)
    };

    let mut spans = vec![
        Span::raw(format!(" mean {:.2}", stats.mean)),
        Span::raw(format!("  σ {:.2}", stats.std_dev)),
        Span::raw("  H "),
        Span::styled(format!("{:.2}", stats.entropy), entropy_style.bold()),
        Span::raw(format!("  n {}", stats.samples)),
    ];
    if app.skipped() > 0 {
        spans.push(Span::styled(
            format!("  skipped {}", app.skipped()),
            Style::default().fg(Color::Red),
        ));
    }
    if let Some(e) = app.last_error() {
        spans.push(Span::styled(
            format!("  {e}"),
            Style::default().fg(Color::Red),
        ));
    }

    let block = Block::default().borders(Borders::ALL).title(" statistics ");
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_keys(f: &mut Frame, area: Rect) {
    let keys = " q: quit   m: mode   s: source   1-3: pick source   r: reset window   p: pause";
    f.render_widget(
        Paragraph::new(keys).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Sum the 256 histogram bins into `buckets` columns.
fn bucket_counts(hist: &[u64; 256], buckets: usize) -> Vec<u64> {
    if buckets == 0 {
        return Vec::new();
    }
    let buckets = buckets.min(256);
    let mut out = vec![0u64; buckets];
    for (value, &count) in hist.iter().enumerate() {
        out[value * buckets / 256] += count;
    }
    out
}

/// HSL to terminal RGB. Hue in degrees, saturation/lightness in 0..=1.
fn hsl_color(hue: f64, saturation: f64, lightness: f64) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color::Rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_counts_preserve_total() {
        let mut hist = [0u64; 256];
        for (i, h) in hist.iter_mut().enumerate() {
            *h = i as u64;
        }
        let total: u64 = hist.iter().sum();
        for buckets in [1, 7, 64, 256, 500] {
            let out = bucket_counts(&hist, buckets);
            assert_eq!(out.iter().sum::<u64>(), total, "buckets {buckets}");
            assert_eq!(out.len(), buckets.min(256));
        }
    }

    #[test]
    fn test_bucket_counts_zero_width() {
        let hist = [1u64; 256];
        assert!(bucket_counts(&hist, 0).is_empty());
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_color(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_color(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl_color(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_hsl_greyscale_extremes() {
        assert_eq!(hsl_color(200.0, 0.7, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(hsl_color(200.0, 0.7, 1.0), Color::Rgb(255, 255, 255));
    }
}
