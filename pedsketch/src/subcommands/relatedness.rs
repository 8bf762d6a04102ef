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

use color_eyre::Result;

use crate::args::PedigreeArgs;
use crate::io::read_relatedness_file;
use crate::subcommands::sketch::{sketch_and_write, PedigreeConfig, DEFAULT_MAX_DISTANCE};

#[doc(hidden)]
#[tracing::instrument(skip_all)]
pub fn run(args: PedigreeArgs) -> Result<()> {
    let config = PedigreeConfig::from_args(&args, DEFAULT_MAX_DISTANCE)?;
    let rows = read_relatedness_file(&args.file)?;

    sketch_and_write(rows, &config, &args.format, args.output)
}
