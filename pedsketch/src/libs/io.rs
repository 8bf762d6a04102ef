// PEDSKETCH - Pedigree sketches from pairwise relatedness
// Copyright (C) 2024  The PEDSKETCH authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{ensure, eyre, WrapErr};
use color_eyre::Result;
use csv::{Reader, ReaderBuilder, StringRecord, Trim, Writer, WriterBuilder};

use crate::args::OutputFormat;
use crate::error::PedigreeError::{ColumnCountError, RelatednessParseError, UnknownRelationshipCode};
use crate::graphs::Pedigree;
use crate::relatedness::{MlRelateCode, RelatednessRow};

#[derive(Debug, Clone, serde::Deserialize)]
struct RelatednessRecord<'a> {
    indv1: &'a str,
    indv2: &'a str,
    relatedness: &'a str,
}

// Ind1, Ind2, R, LnL.R., U, HS, FS, PO, Relationships, Relatedness
#[derive(Debug, Clone, serde::Deserialize)]
struct MlRelateRecord<'a> {
    ind1: &'a str,
    ind2: &'a str,
    code: &'a str,
    _lnl: &'a str,
    _u: &'a str,
    _hs: &'a str,
    _fs: &'a str,
    _po: &'a str,
    _relationships: &'a str,
    relatedness: &'a str,
}

const RELATEDNESS_COLUMNS: usize = 3;
const ML_RELATE_COLUMNS: usize = 10;

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

fn parse_relatedness(value: &str, line: u64) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| eyre!(RelatednessParseError((line, value.to_string()))))
}

fn check_columns<R: io::Read>(rdr: &mut Reader<R>, expected: usize) -> Result<()> {
    let found = rdr.headers()?.len();
    ensure!(found == expected, ColumnCountError((expected, found)));
    Ok(())
}

/// Read a relatedness table with a header and the columns indv1, indv2, relatedness
pub fn read_relatedness_file(path: &PathBuf) -> Result<Vec<RelatednessRow>> {
    let input = get_input(path)?;
    let mut rdr = get_csv_reader(input);
    check_columns(&mut rdr, RELATEDNESS_COLUMNS).wrap_err(eyre!("Error reading {path:?}"))?;

    let mut rows = vec![];

    for line in rdr.records() {
        let record = line.wrap_err(eyre!("Problem parsing {path:?}"))?;
        let row: RelatednessRecord = record.deserialize(None)?;
        let relatedness = parse_relatedness(row.relatedness, line_of(&record))?;
        rows.push(RelatednessRow::new(row.indv1, row.indv2, relatedness));
    }

    tracing::info!("Read {} rows from {path:?}", rows.len());
    Ok(rows)
}

/// Read an ML-Relate export. The relationship category decides the relational distance and the
/// Relatedness column the weight.
pub fn read_ml_relate_file(path: &PathBuf) -> Result<Vec<RelatednessRow>> {
    let input = get_input(path)?;
    let mut rdr = get_csv_reader(input);
    check_columns(&mut rdr, ML_RELATE_COLUMNS).wrap_err(eyre!("Error reading {path:?}"))?;

    let mut rows = vec![];

    for line in rdr.records() {
        let record = line.wrap_err(eyre!("Problem parsing {path:?}"))?;
        let row: MlRelateRecord = record.deserialize(None)?;

        let code = MlRelateCode::from_code(row.code)
            .ok_or_else(|| eyre!(UnknownRelationshipCode((line_of(&record), row.code.to_string()))))?;
        let relatedness = parse_relatedness(row.relatedness, line_of(&record))?;

        rows.push(RelatednessRow::new(row.ind1, row.ind2, relatedness).with_distance(code.distance()));
    }

    tracing::info!("Read {} rows from {path:?}", rows.len());
    Ok(rows)
}

pub fn write_pedigree(pedigree: &Pedigree, format: &OutputFormat, output: &Path) -> Result<()> {
    let mut writer = get_output(output)?;

    match format {
        OutputFormat::Dot => writer.write_all(pedigree.to_dot().as_bytes())?,
        OutputFormat::Json => writeln!(writer, "{}", pedigree.to_json()?)?,
        OutputFormat::Csv => pedigree.write_csv(get_csv_writer(&mut writer))?,
    }

    writer.flush()?;
    Ok(())
}

pub fn get_csv_reader<R: io::Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(false)
        .trim(Trim::All)
        .from_reader(input)
}

pub fn get_csv_writer<W: io::Write>(output: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_writer(output)
}

/// Input stream for a table, `-` reads stdin and compressed files are decompressed on the fly
pub fn get_input(path: &Path) -> Result<Box<dyn io::Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin()));
    }

    let (reader, _format) =
        niffler::from_path(path).map_err(|err| eyre!("failed to open {path:?}: {err}"))?;
    Ok(reader)
}

/// Output stream for the pedigree, `-` writes to stdout
pub fn get_output(path: &Path) -> Result<Box<dyn io::Write>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdout()));
    }

    let file = std::fs::File::create(path).map_err(|err| eyre!("failed to create {path:?}: {err}"))?;
    Ok(Box::new(io::BufWriter::new(file)))
}
