use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lunar_birthday_core::input::{BatchRecord, read_batch_file};
use owo_colors::OwoColorize;

use crate::render::{Render, error_line};
use crate::settings::Settings;

/// Counts reported at the end of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped_lines: usize,
}

/// Generate a calendar for each record in `file`, reporting progress to `out`.
///
/// A bad line is reported and skipped; only an unreadable file fails the run.
pub fn run<W: Write>(settings: &Settings, file: &Path, out: &mut W) -> Result<BatchSummary> {
    let records = read_batch_file(file, &settings.defaults)
        .with_context(|| format!("读取文件时发生错误: {}", file.display()))?;

    let summary = run_records(settings, records, out)?;

    writeln!(
        out,
        "{}",
        format!(
            "批量 ICS 文件生成完成！写入 {} 个文件，跳过 {} 行。",
            summary.written, summary.skipped_lines
        )
        .green()
    )?;
    Ok(summary)
}

fn run_records<W: Write>(
    settings: &Settings,
    records: Vec<BatchRecord>,
    out: &mut W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut written: HashSet<PathBuf> = HashSet::new();

    for record in records {
        let request = match record.result {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(line = record.line, error = %e, "skipping batch line");
                writeln!(out, "{}", error_line(&format!("跳过第 {} 行: {}", record.line, e)))?;
                summary.skipped_lines += 1;
                continue;
            }
        };

        match settings.export(&request) {
            Ok(exported) => {
                if !written.insert(exported.path.clone()) {
                    writeln!(
                        out,
                        "{}",
                        format!(
                            "第 {} 行覆盖了同名文件 {}",
                            record.line,
                            exported.path.display()
                        )
                        .yellow()
                    )?;
                }
                writeln!(out, "{}", exported.render())?;
                summary.written += 1;
            }
            Err(e) => {
                writeln!(out, "{}", error_line(&format!("跳过第 {} 行: {:#}", record.line, e)))?;
                summary.skipped_lines += 1;
            }
        }
    }

    Ok(summary)
}
