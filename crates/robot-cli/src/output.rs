//! Renderers for decoded servers.

use std::fmt::Write as _;

use chrono::NaiveDate;
use clap::ValueEnum;
use robot_api::Server;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

const LIST_HEADER: [&str; 7] = ["NUMBER", "NAME", "PRODUCT", "IP", "DC", "STATUS", "PAID UNTIL"];

pub fn render_server_list(servers: &[Server], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => render_json(servers),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = servers
                .iter()
                .map(|s| {
                    vec![
                        s.number.to_string(),
                        s.name.clone(),
                        s.product.clone(),
                        s.ip.clone(),
                        s.dc.clone(),
                        s.status.to_string(),
                        format_date(s.paid_until),
                    ]
                })
                .collect();
            Ok(render_table(&LIST_HEADER, &rows))
        }
    }
}

pub fn render_server_detail(server: &Server, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => render_json(server),
        OutputFormat::Table => {
            let mut rows: Vec<(&str, String)> = vec![
                ("number", server.number.to_string()),
                ("name", server.name.clone()),
                ("ip", server.ip.clone()),
                ("product", server.product.clone()),
                ("dc", server.dc.clone()),
                ("status", server.status.to_string()),
                ("paid until", format_date(server.paid_until)),
            ];
            if let Some(traffic) = &server.traffic {
                rows.push(("traffic", traffic.clone()));
            }
            let flags = [
                ("flatrate", server.flatrate),
                ("throttled", server.throttled),
                ("cancelled", server.cancelled),
                ("reset", server.reset),
                ("rescue", server.rescue),
                ("vnc", server.vnc),
                ("windows", server.windows),
                ("plesk", server.plesk),
                ("cpanel", server.cpanel),
                ("wol", server.wol),
            ];
            for (label, value) in flags {
                if let Some(value) = value {
                    rows.push((label, value.to_string()));
                }
            }
            if !server.additional_ips.is_empty() {
                rows.push(("ips", server.additional_ips.join(", ")));
            }

            let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
            let mut out = String::new();
            for (label, value) in rows {
                let _ = writeln!(out, "{:<width$}  {value}", format!("{label}:"), width = width + 1);
            }
            Ok(out)
        }
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Left-aligned columns sized to their widest cell, two spaces apart.
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header).chain(rows) {
        let mut line = String::new();
        for (i, (cell, width)) in row.iter().zip(&widths).enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                let pad = width - cell.chars().count();
                line.push_str(cell);
                line.extend(std::iter::repeat_n(' ', pad + 2));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
