//! Rendering of command results on stdout as an aligned table, CSV or JSON.

use crate::domain::cloud::{Orientation, Placement};
use crate::domain::model::*;
use crate::error::*;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// A sentiment figure: a raw count or a share of the day.
pub trait Tally: Copy {
    fn cell(self, format: OutputFormat) -> String;
}

impl Tally for usize {
    fn cell(self, _format: OutputFormat) -> String {
        self.to_string()
    }
}

impl Tally for f64 {
    fn cell(self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => format!("{:.3}", self),
            _ => self.to_string(),
        }
    }
}

/// Encode tags the way the collector's CSV stores them: `['a', 'b']`.
pub fn encode_hashtags(hashtags: &[Hashtag]) -> String {
    let items: Vec<String> = hashtags
        .iter()
        .map(|tag| match tag.as_str().contains('\'') {
            true => format!("\"{}\"", tag),
            false => format!("'{}'", tag),
        })
        .collect();
    format!("[{}]", items.join(", "))
}

pub fn write_daily<T: Tally + Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    days: &[DailySummary<T>],
) -> Result<()> {
    emit(
        out,
        format,
        &["data", "positivos", "neutros", "negativos", "total", "hashtags"],
        days,
        |day| {
            let hashtags = match format {
                OutputFormat::Table => day.hashtags.len().to_string(),
                _ => encode_hashtags(&day.hashtags),
            };
            vec![
                day.date.to_string(),
                day.positive.cell(format),
                day.neutral.cell(format),
                day.negative.cell(format),
                day.total.to_string(),
                hashtags,
            ]
        },
    )
}

pub fn write_hashtags(out: &mut dyn Write, format: OutputFormat, ranking: &[HashtagCount]) -> Result<()> {
    emit(out, format, &["hashtag", "quantidade"], ranking, |row| {
        vec![row.hashtag.to_string(), row.count.to_string()]
    })
}

pub fn write_windows(out: &mut dyn Write, format: OutputFormat, windows: &[CollectionWindow]) -> Result<()> {
    emit(out, format, &["query", "since", "until", "output"], windows, |window| {
        vec![
            window.query.clone(),
            window.since.to_string(),
            window.until.to_string(),
            window.output.display().to_string(),
        ]
    })
}

pub fn write_placements(out: &mut dyn Write, format: OutputFormat, placements: &[Placement]) -> Result<()> {
    emit(
        out,
        format,
        &["word", "count", "font_size", "orientation", "x", "y"],
        placements,
        |p| {
            let orientation = match p.orientation {
                Orientation::Horizontal => "horizontal",
                Orientation::Vertical => "vertical",
            };
            vec![
                p.word.clone(),
                p.count.to_string(),
                p.font_size.to_string(),
                orientation.to_string(),
                p.x.to_string(),
                p.y.to_string(),
            ]
        },
    )
}

pub fn write_texts(out: &mut dyn Write, format: OutputFormat, texts: &[String]) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, texts);
    }
    for text in texts {
        writeln!(out, "{}", text).map_err(GeneralError::output_error)?;
    }
    Ok(())
}

/// Write the raw rows of a table as CSV.
pub fn write_table(out: &mut dyn Write, table: &TweetTable) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(table.columns())
        .map_err(GeneralError::output_error)?;
    for row in table.rows() {
        writer.write_record(row).map_err(GeneralError::output_error)?;
    }
    writer.flush().map_err(GeneralError::output_error)?;
    Ok(())
}

fn emit<T: Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    headers: &[&str],
    items: &[T],
    row: impl Fn(&T) -> Vec<String>,
) -> Result<()> {
    let rows = || items.iter().map(&row);
    match format {
        OutputFormat::Json => write_json(out, items),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(headers).map_err(GeneralError::output_error)?;
            for cells in rows() {
                writer.write_record(&cells).map_err(GeneralError::output_error)?;
            }
            writer.flush().map_err(GeneralError::output_error)?;
            Ok(())
        }
        OutputFormat::Table => {
            write_aligned(out, headers, &rows().collect::<Vec<_>>()).map_err(GeneralError::output_error)
        }
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out).map_err(GeneralError::output_error)?;
    Ok(())
}

fn write_aligned(out: &mut dyn Write, headers: &[&str], rows: &[Vec<String>]) -> std::io::Result<()> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();

    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = w))
        .collect();
    writeln!(out, "{}", header.join("  ").bold())?;

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| match cell.parse::<f64>() {
                Ok(_) => format!("{:>w$}", cell, w = w),
                Err(_) => format!("{:<w$}", cell, w = w),
            })
            .collect();
        writeln!(out, "{}", cells.join("  ").trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tags(values: &[&str]) -> Vec<Hashtag> {
        values.iter().map(|v| Hashtag::from(*v)).collect()
    }

    fn day() -> DailyCounts {
        DailySummary {
            date: NaiveDate::from_ymd_opt(2020, 6, 19).unwrap(),
            positive: 2,
            neutral: 0,
            negative: 1,
            total: 3,
            hashtags: tags(&["covid19", "fiqueemcasa"]),
        }
    }

    fn render(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn it_should_encode_hashtags_like_the_collector() {
        assert_eq!(encode_hashtags(&tags(&["a", "b"])), "['a', 'b']");
        assert_eq!(encode_hashtags(&[]), "[]");
        assert_eq!(encode_hashtags(&tags(&["d'água"])), "[\"d'água\"]");
    }

    #[test]
    fn it_should_write_daily_counts_as_csv() {
        let text = render(|out| write_daily(out, OutputFormat::Csv, &[day()]));
        assert_eq!(
            text,
            "data,positivos,neutros,negativos,total,hashtags\n\
             2020-06-19,2,0,1,3,\"['covid19', 'fiqueemcasa']\"\n"
        );
    }

    #[test]
    fn it_should_write_daily_shares_as_json() {
        let text = render(|out| write_daily(out, OutputFormat::Json, &[day().normalized()]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["data"], "2020-06-19");
        assert!((value[0]["positivos"].as_f64().unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(value[0]["hashtags"][1], "fiqueemcasa");
    }

    #[test]
    fn it_should_align_tables() {
        let ranking = vec![
            HashtagCount {
                hashtag: Hashtag::from("quarentena"),
                count: 12,
            },
            HashtagCount {
                hashtag: Hashtag::from("sp"),
                count: 3,
            },
        ];
        let text = render(|out| write_hashtags(out, OutputFormat::Table, &ranking));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("quantidade"));
        assert_eq!(lines[1], "quarentena          12");
        assert_eq!(lines[2], "sp                   3");
    }

    #[test]
    fn it_should_write_shares_with_three_decimals_in_tables() {
        let text = render(|out| write_daily(out, OutputFormat::Table, &[day().normalized()]));
        assert!(text.contains("0.667"));
        assert!(text.contains("0.333"));
    }

    #[test]
    fn it_should_write_windows() {
        let window = CollectionWindow {
            query: "quarentena OR isolamento".to_string(),
            since: NaiveDate::from_ymd_opt(2020, 7, 3)
                .unwrap()
                .and_hms_opt(19, 0, 0)
                .unwrap(),
            until: NaiveDate::from_ymd_opt(2020, 7, 3)
                .unwrap()
                .and_hms_opt(21, 0, 0)
                .unwrap(),
            output: "tweets/2020_3_07.csv".into(),
        };
        let text = render(|out| write_windows(out, OutputFormat::Csv, &[window]));
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "quarentena OR isolamento,2020-07-03 19:00:00,2020-07-03 21:00:00,tweets/2020_3_07.csv"
        );
    }

    #[test]
    fn it_should_write_texts_one_per_line() {
        let texts = vec!["bom dia".to_string(), "boa noite".to_string()];
        assert_eq!(
            render(|out| write_texts(out, OutputFormat::Table, &texts)),
            "bom dia\nboa noite\n"
        );
        let json = render(|out| write_texts(out, OutputFormat::Json, &texts));
        let value: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(value, texts);
    }

    #[test]
    fn it_should_write_merged_tables_as_csv() {
        let mut table = TweetTable::new(vec!["date".to_string(), "tweet".to_string()]);
        table.push_row(vec!["2020-06-19".to_string(), "oi, tudo bem".to_string()]);
        let text = render(|out| write_table(out, &table));
        assert_eq!(text, "date,tweet\n2020-06-19,\"oi, tudo bem\"\n");
    }
}
