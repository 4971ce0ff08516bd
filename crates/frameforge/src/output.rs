use std::io::{IsTerminal, Write};
use std::net::SocketAddr;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use frameforge_frame::Frame;
use serde::Serialize;

const PREVIEW_CHARS: usize = 60;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameSummary {
    index: usize,
    size: usize,
    class: Option<String>,
    preview: String,
}

#[derive(Serialize)]
struct FrameListOutput<'a> {
    schema_id: &'a str,
    count: usize,
    frames: Vec<FrameSummary>,
}

#[derive(Serialize)]
struct ListeningOutput<'a> {
    schema_id: &'a str,
    event: &'a str,
    addr: String,
    frames: usize,
}

pub fn print_frames(frames: &[Frame], format: OutputFormat) {
    let summaries: Vec<FrameSummary> = frames
        .iter()
        .enumerate()
        .map(|(index, frame)| FrameSummary {
            index,
            size: frame.len(),
            class: outer_class(frame.as_str()).map(str::to_string),
            preview: preview(frame.as_str()),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let out = FrameListOutput {
                schema_id: "https://schemas.timefactory.io/frameforge/cli/v1/frame-list.schema.json",
                count: summaries.len(),
                frames: summaries,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INDEX", "SIZE", "CLASS", "PREVIEW"]);
            for summary in &summaries {
                table.add_row(vec![
                    summary.index.to_string(),
                    summary.size.to_string(),
                    summary.class.clone().unwrap_or_default(),
                    summary.preview.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for summary in &summaries {
                println!(
                    "frame={} size={} class={} preview={}",
                    summary.index,
                    summary.size,
                    summary.class.as_deref().unwrap_or("-"),
                    summary.preview
                );
            }
        }
        OutputFormat::Raw => {
            for frame in frames {
                print_raw(&frame.body());
                println!();
            }
        }
    }
}

pub fn print_listening(addr: SocketAddr, frames: usize, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ListeningOutput {
                schema_id: "https://schemas.timefactory.io/frameforge/cli/v1/listening.schema.json",
                event: "listening",
                addr: addr.to_string(),
                frames,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("listening on http://{addr}/frame ({frames} frames)");
        }
        OutputFormat::Raw => {
            println!("{addr}");
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// Class of the wrapping `<div class="...">`, if the frame has one.
fn outer_class(html: &str) -> Option<&str> {
    let rest = html.strip_prefix("<div class=\"").or_else(|| {
        // Consolidated frames lead with their style block.
        let after_style = html.find("</style>").map(|end| &html[end + "</style>".len()..])?;
        after_style.strip_prefix("<div class=\"")
    })?;
    rest.find('"').map(|end| &rest[..end])
}

fn preview(html: &str) -> String {
    let flat: String = html
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .take(PREVIEW_CHARS)
        .collect();
    if html.chars().count() > PREVIEW_CHARS {
        format!("{flat}...")
    } else {
        flat
    }
}
