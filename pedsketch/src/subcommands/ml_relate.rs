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

use color_eyre::{eyre::ensure, Result};

use crate::args::PedigreeArgs;
use crate::error::PedigreeError::MaxDistanceError;
use crate::io::read_ml_relate_file;
use crate::relatedness::MlRelateCode;
use crate::subcommands::sketch::{sketch_and_write, PedigreeConfig};

#[doc(hidden)]
#[tracing::instrument(skip_all)]
pub fn run(args: PedigreeArgs) -> Result<()> {
    let config = PedigreeConfig::from_args(&args, MlRelateCode::MAX_DISTANCE)?;

    ensure!(
        config.max_distance <= MlRelateCode::MAX_DISTANCE,
        MaxDistanceError((config.max_distance, MlRelateCode::MAX_DISTANCE))
    );

    let rows = read_ml_relate_file(&args.file)?;

    sketch_and_write(rows, &config, &args.format, args.output)
}
