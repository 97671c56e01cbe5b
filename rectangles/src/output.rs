//! Rendering of reports and violations as aligned tables or JSON.

use rectangles_core::application::CollisionReport;
use rectangles_core::config::OutputFormat;
use rectangles_core::{Point, Violations};
use serde::Serialize;
use std::io::{self, Write};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

const COLUMN_GAP: &str = "  ";

#[derive(Serialize)]
struct ErrorBody<'a> {
    errors: &'a Violations,
}

/// Writes results in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    precision: usize,
    color: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        Renderer {
            format,
            precision,
            color: false,
        }
    }

    /// Enables or disables ANSI colours in table output.
    pub fn with_color(self, color: bool) -> Self {
        Renderer { color, ..self }
    }

    pub fn render_report<W: Write>(&self, out: &mut W, report: &CollisionReport) -> io::Result<()> {
        let mut report = report.clone();
        if let Some(points) = report.intersections.as_mut() {
            sort_points(points);
        }
        match self.format {
            OutputFormat::Json => write_json(out, &report),
            OutputFormat::Table => self.write_report_table(out, &report),
        }
    }

    /// Writes `violations`, one `<path>: <message>` line each in table format.
    pub fn render_violations<W: Write>(&self, out: &mut W, violations: &Violations) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(out, &ErrorBody { errors: violations }),
            OutputFormat::Table => {
                for (path, message) in violations.messages() {
                    let line = format!("{path}: {message}");
                    writeln!(out, "{}", self.paint(RED, &line))?;
                }
                Ok(())
            }
        }
    }

    fn write_report_table<W: Write>(&self, out: &mut W, report: &CollisionReport) -> io::Result<()> {
        writeln!(out, "{}", self.paint(GREEN, "Success"))?;

        if let Some(points) = &report.intersections {
            let rows = points
                .iter()
                .map(|point| vec![self.number(point.x), self.number(point.y)])
                .collect::<Vec<_>>();
            self.write_table(out, "Intersections", &["x", "y"], &rows)?;
        }

        if let Some(containment) = &report.containment {
            let rows = vec![
                vec!["rect1ContainsRect2".to_string(), containment.rect1_contains_rect2.to_string()],
                vec!["rect2ContainsRect1".to_string(), containment.rect2_contains_rect1.to_string()],
            ];
            self.write_table(out, "Containment", &["Relation", "Value"], &rows)?;
        }

        if let Some(adjacencies) = &report.adjacency {
            let rows = adjacencies
                .iter()
                .map(|adjacency| {
                    let segment = &adjacency.segment;
                    vec![
                        adjacency.kind.to_string(),
                        format!("{} = {}", segment.axis, self.number(segment.constant)),
                        self.number(segment.bounds.lower),
                        self.number(segment.bounds.upper),
                    ]
                })
                .collect::<Vec<_>>();
            self.write_table(out, "Adjacency", &["Type", "Function", "Lower", "Upper"], &rows)?;
        }
        Ok(())
    }

    fn write_table<W: Write>(&self, out: &mut W, title: &str, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint(CYAN, title))?;
        if rows.is_empty() {
            return writeln!(out, "none");
        }

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect();

        let header_line = pad_row(headers.iter().copied(), &widths);
        writeln!(out, "{}", self.paint(CYAN, &header_line))?;
        let divider: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        writeln!(out, "{}", divider.join(COLUMN_GAP))?;
        for row in rows {
            writeln!(out, "{}", pad_row(row.iter().map(String::as_str), &widths))?;
        }
        Ok(())
    }

    fn number(&self, value: f64) -> String {
        // Avoid printing "-0.000".
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{value:.prec$}", prec = self.precision)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn sort_points(points: &mut [Point]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
